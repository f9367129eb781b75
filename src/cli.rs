use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::loader::load_profile;
use crate::models::{ActivityLevel, BiometricProfile, FoodType, Gender};

/// NutriPlan — derive health targets and break down generated meal plans.
#[derive(Parser, Debug)]
#[command(name = "nutri_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enter your details interactively and build a meal request.
    Interactive {
        /// Meal plan JSON (service response) to display afterwards.
        #[arg(long)]
        plan: Option<PathBuf>,
    },

    /// Show BMI, BMR and recommended daily calories.
    Metrics {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Print JSON instead of a formatted summary.
        #[arg(long)]
        json: bool,
    },

    /// Print the meal-generation request payload.
    Request {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Daily calorie limit.
        #[arg(long, default_value_t = 2000, conflicts_with = "use_recommended")]
        calories: u32,

        /// Use the recommended daily calories as the limit.
        #[arg(long)]
        use_recommended: bool,

        /// Dietary preference.
        #[arg(long, value_enum, default_value_t = FoodType::Veg)]
        food_type: FoodType,
    },

    /// Break down a meal plan against a daily calorie target.
    View {
        /// Meal plan JSON (service response).
        #[arg(long)]
        plan: PathBuf,

        /// Daily calorie target.
        #[arg(long, default_value_t = 2000)]
        calories: i64,

        /// Print JSON instead of a formatted plan.
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive { plan: None }
    }
}

/// Biometric inputs, from flags or a profile file.
#[derive(Args, Debug, Clone)]
pub struct ProfileArgs {
    /// Path to a profile JSON file; overrides the individual flags.
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Age in years.
    #[arg(long, default_value_t = 25)]
    pub age: u32,

    /// Weight in kilograms.
    #[arg(long, default_value_t = 70.0)]
    pub weight: f64,

    /// Height in centimetres.
    #[arg(long, default_value_t = 170.0)]
    pub height: f64,

    #[arg(long, value_enum, default_value_t = Gender::Male)]
    pub gender: Gender,

    #[arg(long, value_enum, default_value_t = ActivityLevel::Moderate)]
    pub activity: ActivityLevel,
}

impl ProfileArgs {
    pub fn resolve(&self) -> Result<BiometricProfile> {
        match &self.profile {
            Some(path) => load_profile(path),
            None => Ok(BiometricProfile::new(
                self.age,
                self.weight,
                self.height,
                self.gender,
                self.activity,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_interactive() {
        let cli = Cli::parse_from(["nutri_plan"]);
        assert!(cli.command.is_none());
        assert!(matches!(
            cli.command.unwrap_or_default(),
            Command::Interactive { plan: None }
        ));
    }

    #[test]
    fn test_metrics_flags() {
        let cli = Cli::parse_from([
            "nutri_plan",
            "metrics",
            "--age",
            "40",
            "--gender",
            "female",
            "--activity",
            "very_active",
        ]);
        let Some(Command::Metrics { profile, json }) = cli.command else {
            panic!("expected metrics command");
        };
        assert!(!json);
        let profile = profile.resolve().unwrap();
        assert_eq!(profile.age, 40);
        assert_eq!(profile.weight_kg, 70.0);
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.activity_level, ActivityLevel::VeryActive);
    }

    #[test]
    fn test_view_requires_plan() {
        assert!(Cli::try_parse_from(["nutri_plan", "view"]).is_err());
        let cli = Cli::try_parse_from(["nutri_plan", "view", "--plan", "p.json", "--calories", "1500"])
            .unwrap();
        assert!(matches!(cli.command, Some(Command::View { calories: 1500, .. })));
    }
}
