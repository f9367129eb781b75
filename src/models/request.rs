use serde::{Deserialize, Serialize};

use crate::calculator::compute;
use crate::error::{PlanError, Result};
use crate::models::profile::{ActivityLevel, BiometricProfile, FoodType, Gender};

/// Bounds the meal-generation service accepts.
pub const REQUEST_AGE_RANGE: (u32, u32) = (1, 120);
pub const REQUEST_MAX_WEIGHT_KG: f64 = 400.0;
pub const REQUEST_MAX_HEIGHT_CM: f64 = 250.0;
pub const REQUEST_CALORIES_RANGE: (u32, u32) = (800, 5000);

/// Payload for the meal-generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealGenerateRequest {
    pub age: u32,
    pub weight_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    pub calories_limit: u32,
    pub food_type: FoodType,
}

impl MealGenerateRequest {
    pub fn from_profile(profile: &BiometricProfile, calories_limit: u32, food_type: FoodType) -> Self {
        Self {
            age: profile.age,
            weight_kg: profile.weight_kg,
            height_cm: Some(profile.height_cm),
            gender: Some(profile.gender),
            activity_level: Some(profile.activity_level),
            calories_limit,
            food_type,
        }
    }

    /// Build a payload whose limit is the profile's recommended daily calories.
    pub fn with_recommended_calories(profile: &BiometricProfile, food_type: FoodType) -> Result<Self> {
        let recommended = compute(profile)?.recommended_calories;
        Ok(Self::from_profile(
            profile,
            calorie_limit_from(recommended)?,
            food_type,
        ))
    }

    /// Check the payload against the ranges the service accepts.
    pub fn validate(&self) -> Result<()> {
        let (min_age, max_age) = REQUEST_AGE_RANGE;
        if !(min_age..=max_age).contains(&self.age) {
            return Err(PlanError::InvalidInput(format!(
                "age must be between {} and {}, got {}",
                min_age, max_age, self.age
            )));
        }

        if !(self.weight_kg > 0.0 && self.weight_kg <= REQUEST_MAX_WEIGHT_KG) {
            return Err(PlanError::InvalidInput(format!(
                "weight must be in (0, {}] kg, got {}",
                REQUEST_MAX_WEIGHT_KG, self.weight_kg
            )));
        }

        if let Some(height) = self.height_cm {
            if !(height > 0.0 && height <= REQUEST_MAX_HEIGHT_CM) {
                return Err(PlanError::InvalidInput(format!(
                    "height must be in (0, {}] cm, got {}",
                    REQUEST_MAX_HEIGHT_CM, height
                )));
            }
        }

        let (min_cal, max_cal) = REQUEST_CALORIES_RANGE;
        if !(min_cal..=max_cal).contains(&self.calories_limit) {
            return Err(PlanError::InvalidInput(format!(
                "calorie limit must be between {} and {}, got {}",
                min_cal, max_cal, self.calories_limit
            )));
        }

        Ok(())
    }
}

/// Convert a recommended calorie figure into a request limit.
///
/// Fails with `InvalidInput` when it is not a positive `u32`.
pub fn calorie_limit_from(recommended: i64) -> Result<u32> {
    u32::try_from(recommended)
        .ok()
        .filter(|limit| *limit > 0)
        .ok_or_else(|| {
            PlanError::InvalidInput(format!(
                "recommended calories must be positive, got {}",
                recommended
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_format() {
        let request =
            MealGenerateRequest::from_profile(&BiometricProfile::default(), 2000, FoodType::Veg);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["age"], 25);
        assert_eq!(value["weight_kg"], 70.0);
        assert_eq!(value["height_cm"], 170.0);
        assert_eq!(value["gender"], "male");
        assert_eq!(value["activity_level"], "moderate");
        assert_eq!(value["calories_limit"], 2000);
        assert_eq!(value["food_type"], "veg");
    }

    #[test]
    fn test_validate_ranges() {
        let mut request =
            MealGenerateRequest::from_profile(&BiometricProfile::default(), 2000, FoodType::Nonveg);
        assert!(request.validate().is_ok());

        request.calories_limit = 700;
        assert!(matches!(request.validate(), Err(PlanError::InvalidInput(_))));

        request.calories_limit = 5000;
        request.height_cm = Some(260.0);
        assert!(request.validate().is_err());

        request.height_cm = None;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_recommended_limit() {
        let request =
            MealGenerateRequest::with_recommended_calories(&BiometricProfile::default(), FoodType::Veg)
                .unwrap();
        assert_eq!(request.calories_limit, 2546);
    }

    #[test]
    fn test_negative_recommended_limit_is_rejected() {
        // bmr = 10 + 6.25 - 2000 + 5 < 0
        let profile = BiometricProfile::new(400, 1.0, 1.0, Gender::Male, ActivityLevel::Sedentary);
        assert!(matches!(
            MealGenerateRequest::with_recommended_calories(&profile, FoodType::Veg),
            Err(PlanError::InvalidInput(_))
        ));
        assert!(matches!(calorie_limit_from(-1979), Err(PlanError::InvalidInput(_))));
        assert!(matches!(calorie_limit_from(0), Err(PlanError::InvalidInput(_))));
        assert_eq!(calorie_limit_from(1866).unwrap(), 1866);
    }
}
