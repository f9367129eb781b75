pub mod aggregate;
pub mod biometrics;
pub mod constants;
pub mod numeric;

pub use aggregate::{
    aggregate, macro_split, meal_calories, meal_target_calories, total_nutrition,
    DerivedPlanView, ItemView, MacroKcal, MacroPercentages, MealStatus, MealView, Percent, Source,
};
pub use biometrics::{
    bmi_gauge_position, calculate_bmi, calculate_bmr, compute, daily_protein_requirement,
    BmiCategory, HealthMetrics,
};
pub use constants::*;
pub use numeric::{bar_width, percent_of, round_half_up};
