use anyhow::{Context, Result};
use std::env;

use crate::nutrition::targets::{
    NutritionTargets, DEFAULT_CALORIE_TARGET, DEFAULT_CARBS_TARGET, DEFAULT_FAT_TARGET, DEFAULT_PROTEIN_TARGET,
};

pub const CALORIE_TARGET_ENV_VAR: &str = "MEAL_PLANNER_CALORIE_TARGET";
pub const PROTEIN_TARGET_ENV_VAR: &str = "MEAL_PLANNER_PROTEIN_TARGET";
pub const CARBS_TARGET_ENV_VAR: &str = "MEAL_PLANNER_CARBS_TARGET";
pub const FAT_TARGET_ENV_VAR: &str = "MEAL_PLANNER_FAT_TARGET";

/// Reads nutrition targets from the environment (after loading `.env`),
/// falling back to the defaults for unset variables.
pub fn targets_from_env() -> Result<NutritionTargets> {
    dotenv::dotenv().ok();
    targets_from_lookup(|name| env::var(name).ok())
}

pub fn targets_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<NutritionTargets> {
    let read = |name: &str, default: f64| -> Result<f64> {
        match lookup(name) {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("{} must be a number, got '{}'", name, raw)),
            None => Ok(default),
        }
    };
    let targets = NutritionTargets::new(
        read(CALORIE_TARGET_ENV_VAR, DEFAULT_CALORIE_TARGET)?,
        read(PROTEIN_TARGET_ENV_VAR, DEFAULT_PROTEIN_TARGET)?,
        read(CARBS_TARGET_ENV_VAR, DEFAULT_CARBS_TARGET)?,
        read(FAT_TARGET_ENV_VAR, DEFAULT_FAT_TARGET)?,
    )
    .context("Invalid nutrition targets in environment")?;
    log::debug!("Using nutrition targets {:?}", targets);
    Ok(targets)
}
