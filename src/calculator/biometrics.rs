use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::calculator::constants::*;
use crate::calculator::numeric::round_half_up;
use crate::error::{PlanError, Result};
use crate::models::{BiometricProfile, Gender};

/// BMI band. Lower bounds are inclusive, so 25.0 is `Overweight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < BMI_NORMAL_MIN {
            BmiCategory::Underweight
        } else if bmi < BMI_OVERWEIGHT_MIN {
            BmiCategory::Normal
        } else if bmi < BMI_OBESE_MIN {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn color_hint(self) -> &'static str {
        match self {
            BmiCategory::Underweight => COLOR_BLUE,
            BmiCategory::Normal => COLOR_GREEN,
            BmiCategory::Overweight => COLOR_AMBER,
            BmiCategory::Obese => COLOR_RED,
        }
    }
}

impl Serialize for BmiCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BmiCategory", 2)?;
        state.serialize_field("label", self.label())?;
        state.serialize_field("color_hint", self.color_hint())?;
        state.end()
    }
}

/// Health targets derived from a [`BiometricProfile`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthMetrics {
    pub bmi: f64,
    pub bmr: f64,
    pub bmi_category: BmiCategory,
    pub recommended_calories: i64,
}

/// Body mass index: kg / m².
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Basal metabolic rate via Mifflin-St Jeor.
///
/// `10*w + 6.25*h - 5*age + offset`, offset +5 for men and -161 for women.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let offset = match gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    };
    BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm - BMR_AGE_COEF * f64::from(age)
        + offset
}

/// Compute BMI, BMR, BMI band and recommended daily calories.
///
/// Fails with `InvalidInput` when weight or height is not a positive finite
/// number. Age is used as given.
pub fn compute(profile: &BiometricProfile) -> Result<HealthMetrics> {
    require_positive("weight", profile.weight_kg)?;
    require_positive("height", profile.height_cm)?;

    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
    );
    let recommended_calories = round_half_up(bmr * profile.activity_level.multiplier()) as i64;

    Ok(HealthMetrics {
        bmi,
        bmr,
        bmi_category: BmiCategory::from_bmi(bmi),
        recommended_calories,
    })
}

/// Position of the BMI marker on a 15..40 gauge, as a percentage in `[0, 100]`.
pub fn bmi_gauge_position(bmi: f64) -> f64 {
    ((bmi - BMI_GAUGE_MIN) / BMI_GAUGE_SPAN * 100.0).clamp(0.0, 100.0)
}

/// Daily protein target in grams.
pub fn daily_protein_requirement(profile: &BiometricProfile) -> f64 {
    let per_kg = match profile.gender {
        Gender::Male => PROTEIN_G_PER_KG_MALE,
        Gender::Female => PROTEIN_G_PER_KG_FEMALE,
    };
    profile.weight_kg * per_kg
}

fn require_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidInput(format!(
            "{} must be positive, got {}",
            field, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityLevel;

    fn profile(age: u32, weight: f64, height: f64, gender: Gender) -> BiometricProfile {
        BiometricProfile::new(age, weight, height, gender, ActivityLevel::Moderate)
    }

    #[test]
    fn test_reference_male_moderate() {
        let metrics = compute(&profile(25, 70.0, 170.0, Gender::Male)).unwrap();
        assert!((metrics.bmr - 1642.5).abs() < 1e-9);
        assert_eq!(metrics.recommended_calories, 2546);
        assert!((metrics.bmi - 24.221453).abs() < 1e-5);
        assert_eq!(metrics.bmi_category, BmiCategory::Normal);
    }

    #[test]
    fn test_female_offset() {
        let male = calculate_bmr(60.0, 165.0, 30, Gender::Male);
        let female = calculate_bmr(60.0, 165.0, 30, Gender::Female);
        assert!((male - female - 166.0).abs() < 1e-9);
        assert!((female - (600.0 + 1031.25 - 150.0 - 161.0)).abs() < 1e-9);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.49999), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_non_positive_inputs_rejected() {
        assert!(matches!(
            compute(&profile(25, 0.0, 170.0, Gender::Male)),
            Err(PlanError::InvalidInput(_))
        ));
        assert!(matches!(
            compute(&profile(25, 70.0, -1.0, Gender::Female)),
            Err(PlanError::InvalidInput(_))
        ));
        assert!(compute(&profile(25, f64::NAN, 170.0, Gender::Male)).is_err());
    }

    #[test]
    fn test_out_of_range_age_not_clamped() {
        let young = compute(&profile(5, 70.0, 170.0, Gender::Male)).unwrap();
        let old = compute(&profile(95, 70.0, 170.0, Gender::Male)).unwrap();
        assert!((young.bmr - old.bmr - 450.0).abs() < 1e-9);
    }

    #[test]
    fn test_gauge_and_protein() {
        assert_eq!(bmi_gauge_position(10.0), 0.0);
        assert_eq!(bmi_gauge_position(27.5), 50.0);
        assert_eq!(bmi_gauge_position(45.0), 100.0);

        let female = profile(30, 60.0, 165.0, Gender::Female);
        assert!((daily_protein_requirement(&female) - 54.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_serializes_label_and_color() {
        let value = serde_json::to_value(BmiCategory::Obese).unwrap();
        assert_eq!(value["label"], "Obese");
        assert_eq!(value["color_hint"], COLOR_RED);
    }
}
