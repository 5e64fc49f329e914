pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod meal_plan;
pub mod nutrition;
pub mod recipe_editor;
pub mod recipe_model;
