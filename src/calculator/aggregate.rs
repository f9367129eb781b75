use serde::Serialize;

use crate::calculator::constants::*;
use crate::calculator::numeric::{bar_width, percent_of, round_half_up};
use crate::error::{PlanError, Result};
use crate::models::{FoodItem, MealType, Nutrient, NutritionInfo, RawMealPlan};

/// A percentage with its raw value for text and a clamped bar width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Percent {
    /// Unclamped value, e.g. 120.0 for a meal 20% over target.
    pub value: f64,
    /// `value` clamped to `[0, 100]`.
    pub bar_width: f64,
}

impl Percent {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            bar_width: bar_width(value),
        }
    }
}

/// Share of calories coming from each macronutrient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroPercentages {
    pub protein: Percent,
    pub carbs: Percent,
    pub fats: Percent,
}

/// Calories contributed by each macronutrient.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MacroKcal {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroKcal {
    pub fn from_nutrition(nutrition: &NutritionInfo) -> Self {
        Self {
            protein: nutrition.amount(Nutrient::Protein) * KCAL_PER_G_PROTEIN,
            carbs: nutrition.amount(Nutrient::Carbohydrates) * KCAL_PER_G_CARBS,
            fats: nutrition.amount(Nutrient::Fats) * KCAL_PER_G_FAT,
        }
    }

    /// Each macro as a percentage of `calories`; all zero when `calories` is zero.
    pub fn percentages_of(&self, calories: f64) -> MacroPercentages {
        MacroPercentages {
            protein: Percent::new(percent_of(self.protein, calories)),
            carbs: Percent::new(percent_of(self.carbs, calories)),
            fats: Percent::new(percent_of(self.fats, calories)),
        }
    }
}

/// Where a plan-wide figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Service,
    Computed,
}

/// How a meal's calories compare to its share of the daily target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MealStatus {
    Under,
    OnTrack,
    Over,
}

impl MealStatus {
    pub fn from_percent(pct: f64) -> Self {
        if pct > MEAL_OVER_PCT {
            MealStatus::Over
        } else if pct > MEAL_UNDER_PCT {
            MealStatus::OnTrack
        } else {
            MealStatus::Under
        }
    }

    pub fn color_hint(self) -> &'static str {
        match self {
            MealStatus::Under => COLOR_BLUE,
            MealStatus::OnTrack => COLOR_GREEN,
            MealStatus::Over => COLOR_AMBER,
        }
    }
}

/// Presentation-ready view of a single food item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub name: String,
    pub calories: f64,
    pub serving_size_grams: f64,
    /// Original nutrition vector; `None` means "data unavailable".
    pub nutrition: Option<NutritionInfo>,
    pub macro_kcal: MacroKcal,
    pub calorie_split: MacroPercentages,
}

impl ItemView {
    fn from_item(item: &FoodItem) -> Self {
        let macro_kcal = item
            .nutrition
            .as_ref()
            .map(MacroKcal::from_nutrition)
            .unwrap_or_default();

        Self {
            name: item.name.clone(),
            calories: item.calories,
            serving_size_grams: item.serving_grams(),
            nutrition: item.nutrition.clone(),
            macro_kcal,
            calorie_split: macro_kcal.percentages_of(item.calories),
        }
    }

    pub fn has_nutrition(&self) -> bool {
        self.nutrition.is_some()
    }
}

/// Presentation-ready view of one meal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealView {
    pub meal: MealType,
    pub meal_calories: f64,
    pub calories_source: Source,
    /// Flat one-third share of the user's daily target.
    pub target_calories: i64,
    /// Per-meal target reported by the service, for display only.
    pub service_target_calories: Option<f64>,
    pub percent_of_target: Percent,
    pub status: MealStatus,
    pub items: Vec<ItemView>,
}

/// Everything the presentation layer needs to render a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedPlanView {
    pub user_calorie_target: i64,
    pub total_calories: f64,
    pub daily_target_calories: Option<f64>,
    pub daily_protein_target: Option<f64>,
    /// `user_calorie_target - total_calories`; negative when over.
    pub calories_remaining: f64,
    pub meals: Vec<MealView>,
    pub macro_split: MacroPercentages,
    pub macro_source: Source,
    pub total_nutrition: NutritionInfo,
    pub total_nutrition_source: Source,
}

impl DerivedPlanView {
    pub fn meal(&self, meal: MealType) -> Option<&MealView> {
        self.meals.iter().find(|m| m.meal == meal)
    }
}

/// Per-meal calorie target: a flat third of the daily target.
pub fn meal_target_calories(user_calorie_target: i64) -> i64 {
    round_half_up(user_calorie_target as f64 / MEALS_PER_DAY) as i64
}

/// Calories of one meal: the service's breakdown if it has one, else the item sum.
pub fn meal_calories(plan: &RawMealPlan, meal: MealType) -> (f64, Source) {
    match plan.breakdown(meal).and_then(|b| b.calories) {
        Some(calories) => (calories, Source::Service),
        None => (
            plan.items(meal).iter().map(|item| item.calories).sum(),
            Source::Computed,
        ),
    }
}

/// Whole-plan nutrition totals: the service's if supplied, else summed over items.
pub fn total_nutrition(plan: &RawMealPlan) -> (NutritionInfo, Source) {
    if let Some(total) = &plan.total_nutrition {
        return (total.clone(), Source::Service);
    }

    let mut total = NutritionInfo::zeroed();
    for nutrition in plan.all_items().filter_map(|item| item.nutrition.as_ref()) {
        total.accumulate(nutrition);
    }
    (total, Source::Computed)
}

/// Whole-plan macro split.
///
/// Uses the service's `nutritional_analysis` when all three percentages are
/// present; otherwise derives them from `totals` relative to `total_calories`.
pub fn macro_split(
    plan: &RawMealPlan,
    totals: &NutritionInfo,
) -> (MacroPercentages, Source) {
    let reported = plan.nutritional_analysis.as_ref().and_then(|analysis| {
        Some(MacroPercentages {
            protein: Percent::new(analysis.protein_percentage?),
            carbs: Percent::new(analysis.carb_percentage?),
            fats: Percent::new(analysis.fat_percentage?),
        })
    });

    match reported {
        Some(split) => (split, Source::Service),
        None => (
            MacroKcal::from_nutrition(totals).percentages_of(plan.total_calories),
            Source::Computed,
        ),
    }
}

/// Turn a raw plan and the user's daily calorie target into a [`DerivedPlanView`].
///
/// Pure and deterministic: the same plan and target always give the same view,
/// so a stale plan can be re-aggregated against a new target at any time.
/// Fails with `InvalidInput` when the target is too small to split into
/// three non-zero meal targets.
pub fn aggregate(plan: &RawMealPlan, user_calorie_target: i64) -> Result<DerivedPlanView> {
    if user_calorie_target <= 0 {
        return Err(PlanError::InvalidInput(format!(
            "calorie target must be positive, got {}",
            user_calorie_target
        )));
    }

    let target_calories = meal_target_calories(user_calorie_target);
    if target_calories <= 0 {
        return Err(PlanError::InvalidInput(format!(
            "calorie target {} is too small to split across meals",
            user_calorie_target
        )));
    }

    let meals = MealType::ALL
        .into_iter()
        .map(|meal| {
            let (calories, calories_source) = meal_calories(plan, meal);
            let pct = percent_of(calories, target_calories as f64);

            MealView {
                meal,
                meal_calories: calories,
                calories_source,
                target_calories,
                service_target_calories: plan.breakdown(meal).and_then(|b| b.target_calories),
                percent_of_target: Percent::new(pct),
                status: MealStatus::from_percent(pct),
                items: plan.items(meal).iter().map(ItemView::from_item).collect(),
            }
        })
        .collect();

    let (totals, total_nutrition_source) = total_nutrition(plan);
    let (split, macro_source) = macro_split(plan, &totals);
    let daily_targets = plan.daily_targets.as_ref();

    Ok(DerivedPlanView {
        user_calorie_target,
        total_calories: plan.total_calories,
        daily_target_calories: daily_targets.and_then(|t| t.calories),
        daily_protein_target: daily_targets.and_then(|t| t.protein),
        calories_remaining: user_calorie_target as f64 - plan.total_calories,
        meals,
        macro_split: split,
        macro_source,
        total_nutrition: totals,
        total_nutrition_source,
    })
}
