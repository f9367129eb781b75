pub mod calculator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod loader;
pub mod models;

pub use calculator::{aggregate, compute, DerivedPlanView, HealthMetrics};
pub use error::{PlanError, Result};
pub use models::{BiometricProfile, RawMealPlan};
