// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers (BMR -> TDEE)
// ─────────────────────────────────────────────────────────────────────────────

pub const SEDENTARY_MULT: f64 = 1.2;
pub const LIGHT_MULT: f64 = 1.375;
pub const MODERATE_MULT: f64 = 1.55;
pub const ACTIVE_MULT: f64 = 1.725;
pub const VERY_ACTIVE_MULT: f64 = 1.9;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// BMI bands (lower bound inclusive)
// ─────────────────────────────────────────────────────────────────────────────

pub const BMI_NORMAL_MIN: f64 = 18.5;
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
pub const BMI_OBESE_MIN: f64 = 30.0;

/// BMI shown at the left edge of the gauge.
pub const BMI_GAUGE_MIN: f64 = 15.0;

/// BMI span covered by the gauge (15..40).
pub const BMI_GAUGE_SPAN: f64 = 25.0;

/// Daily protein per kg body weight.
pub const PROTEIN_G_PER_KG_MALE: f64 = 1.0;
pub const PROTEIN_G_PER_KG_FEMALE: f64 = 0.9;

// ─────────────────────────────────────────────────────────────────────────────
// Energy density of macronutrients (kcal per gram)
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Plan display
// ─────────────────────────────────────────────────────────────────────────────

/// Serving size assumed when the service omits one.
pub const DEFAULT_SERVING_GRAMS: f64 = 100.0;

/// Number of meals the daily target is split across.
pub const MEALS_PER_DAY: f64 = 3.0;

/// Percent of meal target at or below which a meal counts as under target.
pub const MEAL_UNDER_PCT: f64 = 80.0;

/// Percent of meal target above which a meal counts as over target.
pub const MEAL_OVER_PCT: f64 = 120.0;

/// Full width of a percentage bar.
pub const BAR_MAX_PCT: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Display colours
// ─────────────────────────────────────────────────────────────────────────────

pub const COLOR_BLUE: &str = "#60a5fa";
pub const COLOR_GREEN: &str = "#22c55e";
pub const COLOR_AMBER: &str = "#f59e0b";
pub const COLOR_RED: &str = "#ef4444";
