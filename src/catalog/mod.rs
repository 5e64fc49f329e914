pub mod data_loader;
pub mod recipe_catalog;
pub mod user_recipes;

pub use data_loader::{load_catalog_from_json, parse_catalog_json, sample_catalog};
pub use recipe_catalog::{RecipeCatalog, RELATED_RECIPE_LIMIT};
pub use user_recipes::UserRecipeBook;
