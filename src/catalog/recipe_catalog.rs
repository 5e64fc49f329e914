use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::{PlannerError, PlannerResult};
use crate::recipe_model::{Recipe, RecipeRef};

/// Number of related recipes shown next to a recipe's detail page.
pub const RELATED_RECIPE_LIMIT: usize = 4;

/// Read-only, ordered recipe collection. Queries return recipes in the order
/// they were loaded.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<RecipeRef>,
    by_id: HashMap<String, usize>,
    categories: Vec<String>,
    diet_preferences: Vec<String>,
}

impl RecipeCatalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// # Arguments
    /// * `recipes`: the catalog contents, typically straight from a loaded file.
    ///
    /// # Returns
    /// The catalog, or the first problem found: `InvalidRecipe` when a recipe
    /// breaks the data-model rules (rating outside 0..=5, negative or
    /// non-finite nutrition) and `DuplicateId` when two recipes share an id.
    pub fn new(recipes: Vec<Recipe>) -> PlannerResult<Self> {
        let mut by_id = HashMap::with_capacity(recipes.len());
        for (position, recipe) in recipes.iter().enumerate() {
            check_recipe(recipe)?;
            if by_id.insert(recipe.id.clone(), position).is_some() {
                return Err(PlannerError::DuplicateId(recipe.id.clone()));
            }
        }
        log::debug!("Built recipe catalog with {} recipes", recipes.len());
        Ok(Self {
            recipes: recipes.into_iter().map(Arc::new).collect(),
            by_id,
            categories: Vec::new(),
            diet_preferences: Vec::new(),
        })
    }

    /// Attaches the category and diet-preference vocabularies offered to users.
    /// Category remains an open set: recipes may use values outside this list.
    pub fn with_taxonomy(mut self, categories: Vec<String>, diet_preferences: Vec<String>) -> Self {
        self.categories = categories;
        self.diet_preferences = diet_preferences;
        self
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn all(&self) -> &[RecipeRef] {
        &self.recipes
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn diet_preferences(&self) -> &[String] {
        &self.diet_preferences
    }

    pub fn get_by_id(&self, id: &str) -> PlannerResult<RecipeRef> {
        self.by_id
            .get(id)
            .map(|&position| Arc::clone(&self.recipes[position]))
            .ok_or_else(|| PlannerError::NotFound(id.to_string()))
    }

    /// `None` returns the whole catalog; otherwise an exact, case-sensitive
    /// category match.
    pub fn filter_by_category(&self, category: Option<&str>) -> Vec<RecipeRef> {
        match category {
            None => self.recipes.clone(),
            Some(category) => self
                .recipes
                .iter()
                .filter(|r| r.category == category)
                .cloned()
                .collect(),
        }
    }

    pub fn filter_by_diet(&self, diet: Option<&str>) -> Vec<RecipeRef> {
        match diet {
            None => self.recipes.clone(),
            Some(tag) => self.recipes.iter().filter(|r| r.has_diet(tag)).cloned().collect(),
        }
    }

    /// Recipes passing both the category and the diet filter, in catalog order.
    pub fn filter_by_category_and_diet(&self, category: Option<&str>, diet: Option<&str>) -> Vec<RecipeRef> {
        let in_diet = self.filter_by_diet(diet);
        self.filter_by_category(category)
            .into_iter()
            .filter(|r| in_diet.iter().any(|d| Arc::ptr_eq(d, r)))
            .collect()
    }

    /// Case-insensitive substring match on the title. An empty query matches
    /// everything.
    pub fn search(&self, query: &str) -> Vec<RecipeRef> {
        let needle = query.to_lowercase();
        self.recipes
            .iter()
            .filter(|r| r.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Other recipes in the same category as `id`, at most `limit` of them.
    pub fn related(&self, id: &str, limit: usize) -> PlannerResult<Vec<RecipeRef>> {
        let recipe = self.get_by_id(id)?;
        Ok(self
            .recipes
            .iter()
            .filter(|r| r.id != recipe.id && r.category == recipe.category)
            .take(limit)
            .cloned()
            .collect())
    }

    pub fn favorites(&self) -> Vec<RecipeRef> {
        self.recipes.iter().filter(|r| r.favorite).cloned().collect()
    }

    pub fn featured(&self) -> Option<RecipeRef> {
        self.recipes.first().cloned()
    }

    pub fn trending(&self) -> &[RecipeRef] {
        self.clamped_slice(1, 5)
    }

    pub fn newest(&self) -> &[RecipeRef] {
        self.clamped_slice(5, 9)
    }

    fn clamped_slice(&self, start: usize, end: usize) -> &[RecipeRef] {
        let len = self.recipes.len();
        &self.recipes[start.min(len)..end.min(len)]
    }
}

/// Rejects a recipe that breaks the data-model rules.
pub(crate) fn check_recipe(recipe: &Recipe) -> PlannerResult<()> {
    let issues = recipe.issues();
    if issues.is_empty() {
        Ok(())
    } else {
        Err(PlannerError::InvalidRecipe { id: recipe.id.clone(), issues })
    }
}
