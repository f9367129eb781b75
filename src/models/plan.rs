use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calculator::constants::DEFAULT_SERVING_GRAMS;
use crate::models::nutrition::NutritionInfo;

/// The three meal slots of a daily plan, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    /// Key used by the service in `meal_breakdown`.
    pub fn key(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
        }
    }
}

/// One food in a meal, as returned by the meal-generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    pub calories: f64,

    /// Serving size in grams.
    #[serde(default, rename = "serving_size", skip_serializing_if = "Option::is_none")]
    pub serving_size_grams: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionInfo>,
}

impl FoodItem {
    /// Serving size, falling back to 100g.
    #[inline]
    pub fn serving_grams(&self) -> f64 {
        self.serving_size_grams.unwrap_or(DEFAULT_SERVING_GRAMS)
    }
}

/// Service-computed per-meal summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealBreakdown {
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub target_calories: Option<f64>,
    #[serde(default)]
    pub nutrition: Option<NutritionInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
}

/// Service-computed macro percentages of total calories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionalAnalysis {
    #[serde(default)]
    pub protein_percentage: Option<f64>,
    #[serde(default)]
    pub carb_percentage: Option<f64>,
    #[serde(default)]
    pub fat_percentage: Option<f64>,
}

/// A meal plan response from the meal-generation service.
///
/// The three meal arrays and `total_calories` are required; everything
/// else is an optional aggregate the service may or may not supply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMealPlan {
    pub breakfast: Vec<FoodItem>,
    pub lunch: Vec<FoodItem>,
    pub dinner: Vec<FoodItem>,

    pub total_calories: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_nutrition: Option<NutritionInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_breakdown: Option<BTreeMap<String, MealBreakdown>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_targets: Option<DailyTargets>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutritional_analysis: Option<NutritionalAnalysis>,
}

impl RawMealPlan {
    /// A plan with the given meals and no service-side aggregates.
    pub fn new(
        breakfast: Vec<FoodItem>,
        lunch: Vec<FoodItem>,
        dinner: Vec<FoodItem>,
        total_calories: f64,
    ) -> Self {
        Self {
            breakfast,
            lunch,
            dinner,
            total_calories,
            total_nutrition: None,
            meal_breakdown: None,
            daily_targets: None,
            nutritional_analysis: None,
        }
    }

    pub fn items(&self, meal: MealType) -> &[FoodItem] {
        match meal {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
        }
    }

    pub fn breakdown(&self, meal: MealType) -> Option<&MealBreakdown> {
        self.meal_breakdown.as_ref()?.get(meal.key())
    }

    /// Iterate over every item of every meal in display order.
    pub fn all_items(&self) -> impl Iterator<Item = &FoodItem> {
        MealType::ALL
            .into_iter()
            .flat_map(move |meal| self.items(meal).iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serving_size_defaults_to_100g() {
        let item: FoodItem = serde_json::from_str(r#"{"name": "Idli", "calories": 58}"#).unwrap();
        assert_eq!(item.serving_size_grams, None);
        assert_eq!(item.serving_grams(), 100.0);
        assert!(item.nutrition.is_none());
    }

    #[test]
    fn test_breakdown_lookup_by_meal_key() {
        let json = r#"{
            "breakfast": [], "lunch": [], "dinner": [],
            "total_calories": 0,
            "meal_breakdown": {"lunch": {"calories": 640, "target_calories": 900}}
        }"#;
        let plan: RawMealPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.breakdown(MealType::Lunch).and_then(|b| b.calories), Some(640.0));
        assert!(plan.breakdown(MealType::Dinner).is_none());
    }

    #[test]
    fn test_all_items_order() {
        let item = |name: &str| FoodItem {
            name: name.to_string(),
            calories: 1.0,
            serving_size_grams: None,
            nutrition: None,
        };
        let plan = RawMealPlan::new(vec![item("a")], vec![item("b")], vec![item("c")], 3.0);
        let names: Vec<&str> = plan.all_items().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
