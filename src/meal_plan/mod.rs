pub mod plan_io;
pub mod slot_store;

pub use plan_io::{export_plan_csv, export_plan_to_path, hydrate_store, parse_plan_json, plan_entries, PlanEntry};
pub use slot_store::{week_dates, DayPlan, MealSlotKey, MealSlotStore, DAYS_PER_WEEK};
