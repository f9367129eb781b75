#[macro_use]
extern crate assert_float_eq;

use nutri_plan_rs::PlanError;
use nutri_plan_rs::calculator::{BmiCategory, calculate_bmi, calculate_bmr, compute};
use nutri_plan_rs::models::{ActivityLevel, BiometricProfile, Gender};

fn make_profile(
    age: u32,
    weight: f64,
    height: f64,
    gender: Gender,
    activity: ActivityLevel,
) -> BiometricProfile {
    BiometricProfile::new(age, weight, height, gender, activity)
}

#[test]
fn test_reference_profile() {
    let profile = make_profile(25, 70.0, 170.0, Gender::Male, ActivityLevel::Moderate);
    let metrics = compute(&profile).unwrap();

    // 700 + 1062.5 - 125 + 5
    assert_float_absolute_eq!(metrics.bmr, 1642.5, 1e-9);
    // round(2545.875)
    assert_eq!(metrics.recommended_calories, 2546);
    assert_eq!(metrics.bmi_category.label(), "Normal");
}

#[test]
fn test_bmr_matches_formula_for_every_activity_level() {
    for gender in [Gender::Male, Gender::Female] {
        for activity in ActivityLevel::ALL {
            let profile = make_profile(52, 88.4, 176.0, gender, activity);
            let metrics = compute(&profile).unwrap();

            let offset = if gender == Gender::Male { 5.0 } else { -161.0 };
            let expected_bmr = 10.0 * 88.4 + 6.25 * 176.0 - 5.0 * 52.0 + offset;
            assert_float_absolute_eq!(metrics.bmr, expected_bmr, 1e-9);
            assert!(metrics.bmi > 0.0);

            let tdee = expected_bmr * activity.multiplier();
            assert!((metrics.recommended_calories as f64 - tdee).abs() <= 0.5);
        }
    }
}

#[test]
fn test_recommended_calories_rounding() {
    // bmr = 700 + 1000 - 150 + 5 = 1555; 1555 * 1.2 = 1866 exactly.
    let sedentary = make_profile(30, 70.0, 160.0, Gender::Male, ActivityLevel::Sedentary);
    assert_eq!(compute(&sedentary).unwrap().recommended_calories, 1866);

    // bmr = 500 + 1000 - 150 - 161 = 1189; 1189 * 1.9 = 2259.1
    let very_active = make_profile(30, 50.0, 160.0, Gender::Female, ActivityLevel::VeryActive);
    assert_eq!(compute(&very_active).unwrap().recommended_calories, 2259);
}

#[test]
fn test_bmi_boundaries() {
    assert_eq!(BmiCategory::from_bmi(18.5).label(), "Normal");
    assert_eq!(BmiCategory::from_bmi(18.49999).label(), "Underweight");
    assert_eq!(BmiCategory::from_bmi(25.0).label(), "Overweight");
    assert_eq!(BmiCategory::from_bmi(30.0).label(), "Obese");
}

#[test]
fn test_bmi_value() {
    assert_float_absolute_eq!(calculate_bmi(81.0, 180.0), 25.0, 1e-9);
    assert_float_absolute_eq!(calculate_bmr(60.0, 150.0, 40, Gender::Female), 1176.5, 1e-9);
}

#[test]
fn test_invalid_dimensions() {
    let zero_weight = make_profile(30, 0.0, 170.0, Gender::Male, ActivityLevel::Light);
    let negative_height = make_profile(30, 70.0, -170.0, Gender::Male, ActivityLevel::Light);

    assert!(matches!(compute(&zero_weight), Err(PlanError::InvalidInput(_))));
    assert!(matches!(compute(&negative_height), Err(PlanError::InvalidInput(_))));
}

#[test]
fn test_compute_is_deterministic() {
    let profile = make_profile(63, 92.3, 168.5, Gender::Female, ActivityLevel::Active);
    assert_eq!(compute(&profile).unwrap(), compute(&profile).unwrap());
}
