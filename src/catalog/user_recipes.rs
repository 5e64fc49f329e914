use std::sync::Arc;

use super::recipe_catalog::check_recipe;
use crate::errors::{PlannerError, PlannerResult};
use crate::recipe_model::{Recipe, RecipeRef};

/// The recipes a user has authored, in creation order.
#[derive(Debug, Clone, Default)]
pub struct UserRecipeBook {
    recipes: Vec<RecipeRef>,
}

impl UserRecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecipeRef> {
        self.recipes.iter()
    }

    pub fn get(&self, id: &str) -> PlannerResult<RecipeRef> {
        self.recipes
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| PlannerError::NotFound(id.to_string()))
    }

    pub fn add(&mut self, recipe: Recipe) -> PlannerResult<RecipeRef> {
        check_recipe(&recipe)?;
        if self.recipes.iter().any(|r| r.id == recipe.id) {
            return Err(PlannerError::DuplicateId(recipe.id));
        }
        let recipe = Arc::new(recipe);
        log::debug!("Added user recipe '{}'", recipe.id);
        self.recipes.push(Arc::clone(&recipe));
        Ok(recipe)
    }

    pub fn delete(&mut self, id: &str) -> PlannerResult<RecipeRef> {
        let position = self.position_of(id)?;
        log::debug!("Deleted user recipe '{}'", id);
        Ok(self.recipes.remove(position))
    }

    /// Swaps in a new version of an existing recipe, keeping its position.
    /// Returns the version that was replaced.
    pub fn replace(&mut self, recipe: Recipe) -> PlannerResult<RecipeRef> {
        check_recipe(&recipe)?;
        let position = self.position_of(&recipe.id)?;
        Ok(std::mem::replace(&mut self.recipes[position], Arc::new(recipe)))
    }

    fn position_of(&self, id: &str) -> PlannerResult<usize> {
        self.recipes
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| PlannerError::NotFound(id.to_string()))
    }
}
