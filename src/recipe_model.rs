use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Shared handle to an immutable catalog recipe. Meal slots hold these rather
/// than copies so the same recipe can sit in many slots at once.
pub type RecipeRef = Arc<Recipe>;

pub const MAX_RATING: f32 = 5.0;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct NutritionFacts {
    pub calories: u32, // kcal
    pub protein: f64,  // g
    pub carbs: f64,    // g
    pub fat: f64,      // g
}

impl NutritionFacts {
    /// Lists the macro fields that are negative or not finite.
    ///
    /// Calories are unsigned and always valid. Protein, carbs and fat arrive
    /// as floats from JSON or from the authoring form, so they need checking.
    ///
    /// # Returns
    /// One human-readable message per offending field, in protein/carbs/fat
    /// order. An empty vector means the facts are usable.
    pub fn issues(&self) -> Vec<String> {
        [("protein", self.protein), ("carbs", self.carbs), ("fat", self.fat)]
            .into_iter()
            .filter(|(_, value)| !value.is_finite() || *value < 0.0)
            .map(|(name, _)| format!("Nutrition value for {} must be a non-negative number", name))
            .collect()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String, // opaque reference, never resolved here
    #[serde(default)]
    pub time: u32, // minutes
    #[serde(default)]
    pub rating: f32,
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diet: Vec<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_facts: Option<NutritionFacts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
}

impl Recipe {
    pub fn has_diet(&self, tag: &str) -> bool {
        self.diet.iter().any(|d| d == tag)
    }

    /// Data-model rules a catalog recipe must satisfy: rating within
    /// 0.0..=5.0 and non-negative, finite nutrition facts.
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if !(self.rating.is_finite() && (0.0..=MAX_RATING).contains(&self.rating)) {
            issues.push(format!("Rating must be between 0 and {}, got {}", MAX_RATING, self.rating));
        }
        if let Some(facts) = &self.nutrition_facts {
            issues.extend(facts.issues());
        }
        issues
    }

    /// Nutrition facts, or all-zero when the recipe carries none.
    pub fn nutrition_or_zero(&self) -> NutritionFacts {
        self.nutrition_facts.unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealType::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown meal type '{}' (expected Breakfast, Lunch, Dinner or Snack)", s))
    }
}
