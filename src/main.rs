use std::path::Path;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use nutri_plan_rs::calculator::{aggregate, compute};
use nutri_plan_rs::cli::{Cli, Command, ProfileArgs};
use nutri_plan_rs::error::Result;
use nutri_plan_rs::interface::{
    collect_profile, display_health_metrics, display_plan_view, prompt_calorie_target,
    prompt_food_type,
};
use nutri_plan_rs::loader::load_plan;
use nutri_plan_rs::models::{BiometricProfile, FoodType, MealGenerateRequest};

/// Default daily calorie target offered by the interactive flow.
const DEFAULT_CALORIES: u32 = 2000;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nutri_plan_rs={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();
    debug!(?command, "dispatching");

    match command {
        Command::Interactive { plan } => cmd_interactive(plan.as_deref()),
        Command::Metrics { profile, json } => cmd_metrics(&profile, json),
        Command::Request {
            profile,
            calories,
            use_recommended,
            food_type,
        } => cmd_request(&profile, calories, use_recommended, food_type),
        Command::View {
            plan,
            calories,
            json,
        } => cmd_view(&plan, calories, json),
    }
}

/// Show health metrics for a profile.
fn cmd_metrics(args: &ProfileArgs, json: bool) -> Result<()> {
    let profile = args.resolve()?;
    let metrics = compute(&profile)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        display_health_metrics(&profile, &metrics);
    }
    Ok(())
}

/// Print the request payload for the meal-generation service.
fn cmd_request(
    args: &ProfileArgs,
    calories: u32,
    use_recommended: bool,
    food_type: FoodType,
) -> Result<()> {
    let profile = args.resolve()?;

    let request = if use_recommended {
        let request = MealGenerateRequest::with_recommended_calories(&profile, food_type)?;
        info!(recommended = request.calories_limit, "using recommended calories");
        request
    } else {
        MealGenerateRequest::from_profile(&profile, calories, food_type)
    };

    print_request(&request)
}

/// Aggregate a saved plan against a calorie target and display it.
fn cmd_view(plan_path: &Path, calories: i64, json: bool) -> Result<()> {
    let plan = load_plan(plan_path)?;
    let view = aggregate(&plan, calories)?;
    debug!(
        calories_remaining = view.calories_remaining,
        macro_source = ?view.macro_source,
        "aggregated plan"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        display_plan_view(&view);
    }
    Ok(())
}

/// Prompt for a profile, show metrics, and build the meal request.
fn cmd_interactive(plan_path: Option<&Path>) -> Result<()> {
    let profile = collect_profile(&BiometricProfile::default())?;
    let metrics = compute(&profile)?;
    display_health_metrics(&profile, &metrics);

    let calories = prompt_calorie_target(DEFAULT_CALORIES, Some(metrics.recommended_calories))?;
    let food_type = prompt_food_type(FoodType::default())?;
    info!(calories, ?food_type, "calorie target chosen");

    println!();
    println!("Meal request:");
    print_request(&MealGenerateRequest::from_profile(&profile, calories, food_type))?;

    if let Some(path) = plan_path {
        let plan = load_plan(path)?;
        let view = aggregate(&plan, i64::from(calories))?;
        display_plan_view(&view);
    } else {
        println!();
        println!(
            "Send this request to the meal generator, then run `view --plan <file> --calories {}`.",
            calories
        );
    }

    Ok(())
}

fn print_request(request: &MealGenerateRequest) -> Result<()> {
    if let Err(e) = request.validate() {
        eprintln!("Warning: the meal generator will likely reject this request: {}", e);
    }
    println!("{}", serde_json::to_string_pretty(request)?);
    Ok(())
}
