use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PlanError, Result};
use crate::models::{BiometricProfile, RawMealPlan};

/// Parse a meal-generation service response.
///
/// Shape errors (a missing meal array, an item without `calories`, wrong
/// types) are reported as `MalformedPlan`.
pub fn parse_plan(json: &str) -> Result<RawMealPlan> {
    serde_json::from_str(json).map_err(|e| PlanError::MalformedPlan(e.to_string()))
}

/// Load a meal plan from a JSON file.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<RawMealPlan> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let plan = parse_plan(&content)?;

    debug!(
        path = %path.display(),
        items = plan.all_items().count(),
        total_calories = plan.total_calories,
        "loaded meal plan"
    );
    Ok(plan)
}

/// Parse a stored biometric profile.
///
/// Every field is required; a missing or mistyped one is `InvalidInput`.
pub fn parse_profile(json: &str) -> Result<BiometricProfile> {
    serde_json::from_str(json).map_err(|e| PlanError::InvalidInput(format!("profile: {}", e)))
}

/// Load a stored biometric profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<BiometricProfile> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let profile = parse_profile(&content)?;

    debug!(path = %path.display(), "loaded profile");
    Ok(profile)
}
