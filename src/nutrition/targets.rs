use serde::{Deserialize, Serialize};

use super::aggregator::{percent_of_target, remaining};
use crate::errors::{PlannerError, PlannerResult};
use crate::recipe_model::NutritionFacts;

pub const DEFAULT_CALORIE_TARGET: f64 = 2000.0; // kcal
pub const DEFAULT_PROTEIN_TARGET: f64 = 50.0; // g
pub const DEFAULT_CARBS_TARGET: f64 = 275.0; // g
pub const DEFAULT_FAT_TARGET: f64 = 78.0; // g

/// Daily nutrient goals. Every target is strictly positive.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct NutritionTargets {
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
}

impl Default for NutritionTargets {
    fn default() -> Self {
        Self {
            calories: DEFAULT_CALORIE_TARGET,
            protein: DEFAULT_PROTEIN_TARGET,
            carbs: DEFAULT_CARBS_TARGET,
            fat: DEFAULT_FAT_TARGET,
        }
    }
}

impl NutritionTargets {
    /// Builds a set of daily goals.
    ///
    /// # Arguments
    /// * `calories`: kcal per day.
    /// * `protein`, `carbs`, `fat`: grams per day.
    ///
    /// # Returns
    /// The targets, or `InvalidTarget` naming the first value that is zero,
    /// negative or not finite.
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> PlannerResult<Self> {
        for (nutrient, value) in [("calories", calories), ("protein", protein), ("carbs", carbs), ("fat", fat)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(PlannerError::InvalidTarget { nutrient, value });
            }
        }
        Ok(Self { calories, protein, carbs, fat })
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }

    pub fn protein(&self) -> f64 {
        self.protein
    }

    pub fn carbs(&self) -> f64 {
        self.carbs
    }

    pub fn fat(&self) -> f64 {
        self.fat
    }
}

/// How a day's total compares with the targets. Percentages are capped at 100;
/// `remaining_calories` goes negative once the calorie goal is exceeded.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct NutritionProgress {
    pub total: NutritionFacts,
    pub calories_pct: f64,
    pub protein_pct: f64,
    pub carbs_pct: f64,
    pub fat_pct: f64,
    pub remaining_calories: f64,
}

impl NutritionProgress {
    pub fn new(total: NutritionFacts, targets: &NutritionTargets) -> Self {
        let calories = f64::from(total.calories);
        Self {
            total,
            calories_pct: percent_of_target(calories, targets.calories),
            protein_pct: percent_of_target(total.protein, targets.protein),
            carbs_pct: percent_of_target(total.carbs, targets.carbs),
            fat_pct: percent_of_target(total.fat, targets.fat),
            remaining_calories: remaining(targets.calories, calories),
        }
    }
}
