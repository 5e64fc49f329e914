use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use super::slot_store::MealSlotStore;
use crate::catalog::RecipeCatalog;
use crate::errors::PlannerResult;
use crate::recipe_model::MealType;

/// One planned recipe as stored in a plan file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub recipe_id: String,
}

#[derive(Debug, Serialize)]
struct PlanExportRow<'a> {
    date: NaiveDate,
    meal_type: MealType,
    recipe_id: &'a str,
    title: &'a str,
    calories: u32,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
}

pub fn parse_plan_json(content: &str) -> Result<Vec<PlanEntry>> {
    serde_json::from_str(content).context("Failed to parse meal plan JSON")
}

/// Rebuilds a session store from saved entries, resolving ids against the
/// catalog. Entries keep their file order within each slot.
///
/// # Arguments
/// * `entries`: saved plan entries, usually from `parse_plan_json`.
/// * `catalog`: the catalog the recipe ids refer to.
///
/// # Returns
/// The populated store, or `NotFound` for the first id the catalog lacks.
pub fn hydrate_store(entries: &[PlanEntry], catalog: &RecipeCatalog) -> PlannerResult<MealSlotStore> {
    let mut store = MealSlotStore::new();
    for entry in entries {
        let recipe = catalog.get_by_id(&entry.recipe_id)?;
        store.add_recipe(entry.date, entry.meal_type, recipe);
    }
    log::info!("Hydrated meal plan: {} recipes across {} days", store.len(), store.planned_dates().len());
    Ok(store)
}

/// Flattens a store into entries that `hydrate_store` can read back.
pub fn plan_entries(store: &MealSlotStore) -> Vec<PlanEntry> {
    store
        .entries()
        .flat_map(|(key, recipes)| {
            recipes.iter().map(move |recipe| PlanEntry {
                date: key.date,
                meal_type: key.meal_type,
                recipe_id: recipe.id.clone(),
            })
        })
        .collect()
}

/// Writes one CSV row per planned recipe, ordered by date then meal type.
/// Recipes without nutrition facts export zeros.
pub fn export_plan_csv<W: Write>(store: &MealSlotStore, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (key, recipes) in store.entries() {
        for recipe in recipes {
            let facts = recipe.nutrition_or_zero();
            wtr.serialize(PlanExportRow {
                date: key.date,
                meal_type: key.meal_type,
                recipe_id: &recipe.id,
                title: &recipe.title,
                calories: facts.calories,
                protein_g: facts.protein,
                carbs_g: facts.carbs,
                fat_g: facts.fat,
            })
            .with_context(|| format!("Failed to write plan row for recipe '{}'", recipe.id))?;
        }
    }
    wtr.flush().context("Failed to flush plan export")?;
    Ok(())
}

pub fn export_plan_to_path(store: &MealSlotStore, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create plan export file at {:?}", path))?;
    export_plan_csv(store, file)
}
