pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, prompt_activity_level, prompt_age, prompt_calorie_target, prompt_food_type,
    prompt_gender, prompt_height, prompt_weight, prompt_yes_no,
};
pub use render::{display_health_metrics, display_plan_view, item_macro_line, render_bar};
