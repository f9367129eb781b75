use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};

use crate::error::{PlanError, Result};
use crate::models::request::calorie_limit_from;
use crate::models::{ActivityLevel, BiometricProfile, FoodType, Gender};

/// Input ranges offered by the planner form.
pub const AGE_RANGE: (f64, f64) = (18.0, 80.0);
pub const WEIGHT_RANGE_KG: (f64, f64) = (40.0, 150.0);
pub const HEIGHT_RANGE_CM: (f64, f64) = (140.0, 220.0);
pub const CALORIE_RANGE: (f64, f64) = (1200.0, 4000.0);

/// Prompt for a number and check it against an inclusive range.
fn prompt_in_range<T>(prompt: &str, default: T, range: (f64, f64), unit: &str) -> Result<T>
where
    T: FromStr + ToString + Copy + Into<f64>,
{
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: T = input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput("Invalid number".to_string()))?;

    let (min, max) = range;
    let as_f64: f64 = value.into();
    if as_f64 < min || as_f64 > max {
        return Err(PlanError::InvalidInput(format!(
            "{} must be between {} and {} {}",
            prompt, min, max, unit
        )));
    }

    Ok(value)
}

pub fn prompt_age(default: u32) -> Result<u32> {
    prompt_in_range("Age", default, AGE_RANGE, "years")
}

pub fn prompt_weight(default: f64) -> Result<f64> {
    prompt_in_range("Weight (kg)", default, WEIGHT_RANGE_KG, "kg")
}

pub fn prompt_height(default: f64) -> Result<f64> {
    prompt_in_range("Height (cm)", default, HEIGHT_RANGE_CM, "cm")
}

pub fn prompt_gender(default: Gender) -> Result<Gender> {
    let options = [Gender::Male, Gender::Female];
    let labels: Vec<&str> = options.iter().map(|g| g.label()).collect();

    let selection = Select::new()
        .with_prompt("Gender")
        .items(&labels)
        .default(options.iter().position(|g| *g == default).unwrap_or(0))
        .interact()?;

    Ok(options[selection])
}

pub fn prompt_activity_level(default: ActivityLevel) -> Result<ActivityLevel> {
    let labels: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|level| format!("{} ({})", level.label(), level.description()))
        .collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&labels)
        .default(
            ActivityLevel::ALL
                .iter()
                .position(|l| *l == default)
                .unwrap_or(0),
        )
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

/// Prompt for the daily calorie target, offering the recommendation first.
pub fn prompt_calorie_target(default: u32, recommended: Option<i64>) -> Result<u32> {
    if let Some(recommended) = recommended.filter(|r| *r > 0) {
        let use_it = prompt_yes_no(
            &format!("Use recommended daily calories ({} kcal)?", recommended),
            true,
        )?;
        if use_it {
            return calorie_limit_from(recommended);
        }
    }

    prompt_in_range("Daily calories", default, CALORIE_RANGE, "kcal")
}

pub fn prompt_food_type(default: FoodType) -> Result<FoodType> {
    let options = [FoodType::Veg, FoodType::Nonveg];
    let labels: Vec<&str> = options.iter().map(|f| f.label()).collect();

    let selection = Select::new()
        .with_prompt("Food type")
        .items(&labels)
        .default(options.iter().position(|f| *f == default).unwrap_or(0))
        .interact()?;

    Ok(options[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full biometric profile, starting from `defaults`.
pub fn collect_profile(defaults: &BiometricProfile) -> Result<BiometricProfile> {
    let age = prompt_age(defaults.age)?;
    let weight_kg = prompt_weight(defaults.weight_kg)?;
    let height_cm = prompt_height(defaults.height_cm)?;
    let gender = prompt_gender(defaults.gender)?;
    let activity_level = prompt_activity_level(defaults.activity_level)?;

    Ok(BiometricProfile::new(
        age,
        weight_kg,
        height_cm,
        gender,
        activity_level,
    ))
}
