pub mod aggregator;
pub mod targets;

pub use aggregator::{
    percent_of_target, remaining, scale_for_servings, sum, sum_for_date, sum_for_slot, sum_for_week,
};
pub use targets::{NutritionProgress, NutritionTargets};
