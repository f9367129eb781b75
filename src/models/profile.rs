use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::calculator::constants::{
    ACTIVE_MULT, LIGHT_MULT, MODERATE_MULT, SEDENTARY_MULT, VERY_ACTIVE_MULT,
};

/// Biological sex used by the Mifflin-St Jeor offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Self-reported activity level. Every variant maps to a fixed multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    #[value(name = "very_active", alias = "very-active")]
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// TDEE multiplier applied to BMR.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => SEDENTARY_MULT,
            ActivityLevel::Light => LIGHT_MULT,
            ActivityLevel::Moderate => MODERATE_MULT,
            ActivityLevel::Active => ACTIVE_MULT,
            ActivityLevel::VeryActive => VERY_ACTIVE_MULT,
        }
    }

    /// Human-readable name ("very active").
    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very active",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "little/no exercise",
            ActivityLevel::Light => "light exercise 1-3 days/week",
            ActivityLevel::Moderate => "moderate exercise 3-5 days/week",
            ActivityLevel::Active => "hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "very hard exercise, physical job",
        }
    }
}

/// Dietary preference passed through to the meal-generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FoodType {
    #[default]
    Veg,
    Nonveg,
}

impl FoodType {
    pub fn label(self) -> &'static str {
        match self {
            FoodType::Veg => "vegetarian",
            FoodType::Nonveg => "non-vegetarian",
        }
    }
}

/// Raw biometric inputs.
///
/// Values are taken as given; range enforcement belongs to whoever collects
/// them. Only `weight_kg` and `height_cm` are checked, by the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricProfile {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
}

impl BiometricProfile {
    pub fn new(
        age: u32,
        weight_kg: f64,
        height_cm: f64,
        gender: Gender,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            age,
            weight_kg,
            height_cm,
            gender,
            activity_level,
        }
    }
}

impl Default for BiometricProfile {
    fn default() -> Self {
        Self {
            age: 25,
            weight_kg: 70.0,
            height_cm: 170.0,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_multipliers() {
        let expected = [1.2, 1.375, 1.55, 1.725, 1.9];
        for (level, mult) in ActivityLevel::ALL.iter().zip(expected) {
            assert!((level.multiplier() - mult).abs() < 1e-12);
        }
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_string(&ActivityLevel::VeryActive).unwrap(),
            "\"very_active\""
        );
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        assert_eq!(serde_json::to_string(&FoodType::Nonveg).unwrap(), "\"nonveg\"");
    }

    #[test]
    fn test_profile_requires_gender_and_activity() {
        let missing_gender = r#"{"age": 40, "weight_kg": 82.5, "height_cm": 181, "activity_level": "light"}"#;
        assert!(serde_json::from_str::<BiometricProfile>(missing_gender).is_err());

        let missing_activity = r#"{"age": 40, "weight_kg": 82.5, "height_cm": 181, "gender": "female"}"#;
        assert!(serde_json::from_str::<BiometricProfile>(missing_activity).is_err());

        let complete = r#"{"age": 40, "weight_kg": 82.5, "height_cm": 181, "gender": "female", "activity_level": "light"}"#;
        let profile: BiometricProfile = serde_json::from_str(complete).unwrap();
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.activity_level, ActivityLevel::Light);
    }
}
