pub mod nutrition;
pub mod plan;
pub mod profile;
pub mod request;

pub use nutrition::{Nutrient, NutritionInfo};
pub use plan::{DailyTargets, FoodItem, MealBreakdown, MealType, NutritionalAnalysis, RawMealPlan};
pub use profile::{ActivityLevel, BiometricProfile, FoodType, Gender};
pub use request::MealGenerateRequest;
