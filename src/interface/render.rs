use crate::calculator::{
    bmi_gauge_position, daily_protein_requirement, DerivedPlanView, HealthMetrics, ItemView,
    MacroPercentages, MealView, Source,
};
use crate::models::{BiometricProfile, Nutrient, NutritionInfo};

/// Character width of a full percentage bar.
const BAR_CHARS: usize = 20;

/// Render a bar for a width already clamped to `[0, 100]`.
pub fn render_bar(width_pct: f64) -> String {
    let filled = ((width_pct / 100.0) * BAR_CHARS as f64).round() as usize;
    let filled = filled.min(BAR_CHARS);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CHARS - filled))
}

/// Format a nutrient amount with its unit, e.g. `12.5g` or `310mg`.
pub fn format_amount(nutrient: Nutrient, amount: f64) -> String {
    format!(
        "{:.prec$}{}",
        amount,
        nutrient.unit(),
        prec = nutrient.precision()
    )
}

/// One-line macro summary for an item, or the unavailable marker.
pub fn item_macro_line(nutrition: Option<&NutritionInfo>) -> String {
    match nutrition {
        Some(n) => format!(
            "P: {:.1}g | C: {:.1}g | F: {:.1}g",
            n.amount(Nutrient::Protein),
            n.amount(Nutrient::Carbohydrates),
            n.amount(Nutrient::Fats)
        ),
        None => "Nutrition data unavailable".to_string(),
    }
}

/// Display BMI, BMR and recommended calories for a profile.
pub fn display_health_metrics(profile: &BiometricProfile, metrics: &HealthMetrics) {
    println!();
    println!("=== Health Metrics ===");
    println!();
    println!(
        "BMI:            {:.1} ({})",
        metrics.bmi,
        metrics.bmi_category.label()
    );
    println!(
        "                {}",
        render_bar(bmi_gauge_position(metrics.bmi))
    );
    println!("BMR:            {:.0} kcal/day", metrics.bmr);
    println!(
        "Daily calories: {} kcal/day (recommended for {} lifestyle)",
        metrics.recommended_calories,
        profile.activity_level.label()
    );
    println!(
        "Protein:        {:.0} g/day",
        daily_protein_requirement(profile)
    );
    println!();
}

fn display_macro_bars(split: &MacroPercentages) {
    for (label, pct) in [
        ("Protein", split.protein),
        ("Carbs", split.carbs),
        ("Fats", split.fats),
    ] {
        println!(
            "  {:<8} {} {:>5.1}%",
            label,
            render_bar(pct.bar_width),
            pct.value
        );
    }
}

fn display_item(item: &ItemView) {
    println!(
        "  - {} ({}g serving) - {:.0} kcal",
        item.name, item.serving_size_grams, item.calories
    );
    println!("      {}", item_macro_line(item.nutrition.as_ref()));

    if let Some(nutrition) = &item.nutrition {
        println!(
            "      Calories from macros: {:.1}% protein, {:.1}% carbs, {:.1}% fats",
            item.calorie_split.protein.value,
            item.calorie_split.carbs.value,
            item.calorie_split.fats.value
        );

        let micros: Vec<String> = Nutrient::ALL[3..]
            .iter()
            .filter(|n| nutrition.amount(**n) > 0.0)
            .map(|n| format!("{} {}", format_amount(*n, nutrition.amount(*n)), n.label()))
            .collect();
        if !micros.is_empty() {
            println!("      {}", micros.join(", "));
        }
    }
}

fn display_meal(meal: &MealView) {
    println!(
        "--- {} --- {:.0} kcal / {} target",
        meal.meal.title(),
        meal.meal_calories,
        meal.target_calories
    );
    println!(
        "  {} {:.0}% of target",
        render_bar(meal.percent_of_target.bar_width),
        meal.percent_of_target.value
    );

    if meal.items.is_empty() {
        println!("  (no items)");
    }
    for item in &meal.items {
        display_item(item);
    }
    println!();
}

/// Display a derived meal plan: summary, macro split, meals and totals.
pub fn display_plan_view(view: &DerivedPlanView) {
    println!();
    println!("=== Meal Plan ===");
    println!();
    println!("Total calories:     {:.0} kcal", view.total_calories);
    if let Some(target) = view.daily_target_calories {
        println!("Target:             {:.0} kcal", target);
    }
    println!("Calories remaining: {:.0} kcal", view.calories_remaining);
    println!();

    let source = match view.macro_source {
        Source::Service => "",
        Source::Computed => " (estimated)",
    };
    println!("Nutritional breakdown{}:", source);
    display_macro_bars(&view.macro_split);
    println!();

    for meal in &view.meals {
        display_meal(meal);
    }

    println!("--- Daily Nutrition Totals ---");
    for nutrient in &Nutrient::ALL[..6] {
        println!(
            "  {:<14} {}",
            nutrient.label(),
            format_amount(*nutrient, view.total_nutrition.amount(*nutrient))
        );
    }
    println!();
}
