use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::recipe_catalog::RecipeCatalog;
use crate::recipe_model::Recipe;

const SAMPLE_CATALOG_JSON: &str = include_str!("../../data/sample_recipes.json");

/// On-disk catalog layout: the recipes plus the vocabularies shown in filters.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub diet_preferences: Vec<String>,
    pub recipes: Vec<Recipe>,
}

pub fn parse_catalog_json(content: &str) -> Result<RecipeCatalog> {
    let file: CatalogFile = serde_json::from_str(content).context("Failed to parse catalog JSON")?;
    if file.recipes.is_empty() {
        return Err(anyhow::anyhow!("No recipes found in catalog"));
    }
    let catalog = RecipeCatalog::new(file.recipes)?.with_taxonomy(file.categories, file.diet_preferences);
    log::info!("Loaded catalog: {} recipes, {} categories", catalog.len(), catalog.categories().len());
    Ok(catalog)
}

pub fn load_catalog_from_json(path: &Path) -> Result<RecipeCatalog> {
    if !path.exists() {
        return Err(anyhow::anyhow!("Catalog file not found at: {:?}", path));
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file at {:?}", path))?;
    parse_catalog_json(&content).with_context(|| format!("Invalid catalog file {:?}", path))
}

/// The ten-recipe demo catalog bundled with the crate.
pub fn sample_catalog() -> Result<RecipeCatalog> {
    parse_catalog_json(SAMPLE_CATALOG_JSON).context("Bundled sample catalog is invalid")
}
