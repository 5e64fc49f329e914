use serde::{Deserialize, Serialize};

use crate::errors::{PlannerError, PlannerResult};
use crate::recipe_model::{NutritionFacts, Recipe};

const TITLE_MIN_CHARS: usize = 3;
const TITLE_MAX_CHARS: usize = 100;
const DEFAULT_COOKING_TIME: u32 = 30;

/// Ordered list of free-text entries (ingredients or instruction steps).
/// Position is meaningful: instructions are numbered by index.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct EntryList {
    entries: Vec<String>,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    pub fn append(&mut self, value: impl Into<String>) {
        self.entries.push(value.into());
    }

    pub fn append_blank(&mut self) {
        self.append(String::new());
    }

    /// Removes and returns the entry at `index`. The list may become empty.
    pub fn remove_at(&mut self, index: usize) -> PlannerResult<String> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    pub fn update_at(&mut self, index: usize, value: impl Into<String>) -> PlannerResult<()> {
        self.check_index(index)?;
        self.entries[index] = value.into();
        Ok(())
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }

    fn check_index(&self, index: usize) -> PlannerResult<()> {
        if index >= self.entries.len() {
            return Err(PlannerError::InvalidIndex { index, len: self.entries.len() });
        }
        Ok(())
    }
}

/// Outcome of a removal requested through the authoring form.
#[derive(Debug, Clone, PartialEq)]
pub enum Removal {
    Removed(String),
    /// The list holds a single entry and the form keeps at least one.
    Refused,
}

/// Authoring-form state for a new or edited recipe.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub cooking_time: u32,
    pub image: Option<String>,
    pub ingredients: EntryList,
    pub instructions: EntryList,
    pub nutrition: NutritionFacts,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            cooking_time: DEFAULT_COOKING_TIME,
            image: None,
            ingredients: EntryList::from_entries(vec![String::new()]),
            instructions: EntryList::from_entries(vec![String::new()]),
            nutrition: NutritionFacts::default(),
        }
    }
}

impl RecipeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an edit session from an existing recipe.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let non_empty = |list: &Option<Vec<String>>| match list {
            Some(entries) if !entries.is_empty() => EntryList::from_entries(entries.clone()),
            _ => EntryList::from_entries(vec![String::new()]),
        };
        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            category: recipe.category.clone(),
            cooking_time: recipe.time,
            image: (!recipe.image.is_empty()).then(|| recipe.image.clone()),
            ingredients: non_empty(&recipe.ingredients),
            instructions: non_empty(&recipe.instructions),
            nutrition: recipe.nutrition_or_zero(),
        }
    }

    pub fn remove_ingredient(&mut self, index: usize) -> PlannerResult<Removal> {
        Self::guarded_remove(&mut self.ingredients, index)
    }

    pub fn remove_instruction(&mut self, index: usize) -> PlannerResult<Removal> {
        Self::guarded_remove(&mut self.instructions, index)
    }

    fn guarded_remove(list: &mut EntryList, index: usize) -> PlannerResult<Removal> {
        list.check_index(index)?;
        if list.len() == 1 {
            return Ok(Removal::Refused);
        }
        list.remove_at(index).map(Removal::Removed)
    }

    /// Every rule the draft currently breaks, in form order.
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let title_chars = self.title.chars().count();
        if title_chars < TITLE_MIN_CHARS {
            issues.push(format!("Title must be at least {} characters", TITLE_MIN_CHARS));
        } else if title_chars > TITLE_MAX_CHARS {
            issues.push(format!("Title must be at most {} characters", TITLE_MAX_CHARS));
        }
        if self.category.trim().is_empty() {
            issues.push("Please select a category".to_string());
        }
        if self.cooking_time < 1 {
            issues.push("Cooking time must be at least 1 minute".to_string());
        }
        if self.ingredients.is_empty() {
            issues.push("Add at least one ingredient".to_string());
        }
        if self.instructions.is_empty() {
            issues.push("Add at least one instruction step".to_string());
        }
        issues.extend(self.nutrition.issues());
        issues
    }

    pub fn validate(&self) -> PlannerResult<()> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(PlannerError::InvalidDraft(issues))
        }
    }

    /// Produces the immutable recipe this draft describes.
    pub fn into_recipe(self, id: impl Into<String>) -> PlannerResult<Recipe> {
        self.validate()?;
        Ok(Recipe {
            id: id.into(),
            title: self.title,
            description: self.description,
            image: self.image.unwrap_or_default(),
            time: self.cooking_time,
            rating: 0.0,
            category: self.category,
            diet: Vec::new(),
            favorite: false,
            ingredients: Some(self.ingredients.into_vec()),
            instructions: Some(self.instructions.into_vec()),
            nutrition_facts: Some(self.nutrition),
            author: None,
        })
    }
}
