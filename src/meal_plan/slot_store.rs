use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::recipe_model::{MealType, RecipeRef};

pub const DAYS_PER_WEEK: u64 = 7;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub struct MealSlotKey {
    pub date: NaiveDate,
    pub meal_type: MealType,
}

impl MealSlotKey {
    pub fn new(date: NaiveDate, meal_type: MealType) -> Self {
        Self { date, meal_type }
    }
}

/// Recipes planned for one date, grouped by meal type. Every meal type is
/// present; unplanned ones map to an empty slice.
pub type DayPlan<'a> = BTreeMap<MealType, &'a [RecipeRef]>;

/// One planning session's meals. Slots are keyed by (date, meal type) and hold
/// recipes in the order they were added; the same recipe may appear more than
/// once. Empty slots are never stored.
#[derive(Debug, Clone, Default)]
pub struct MealSlotStore {
    slots: BTreeMap<MealSlotKey, Vec<RecipeRef>>,
}

impl MealSlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_recipe(&mut self, date: NaiveDate, meal_type: MealType, recipe: RecipeRef) {
        log::debug!("Adding recipe '{}' to {} {}", recipe.id, date, meal_type);
        self.slots.entry(MealSlotKey::new(date, meal_type)).or_default().push(recipe);
    }

    /// Removes the first occurrence of `recipe_id` from the slot. Returns
    /// whether anything was removed; a missing slot or id is not an error.
    pub fn remove_recipe(&mut self, date: NaiveDate, meal_type: MealType, recipe_id: &str) -> bool {
        let key = MealSlotKey::new(date, meal_type);
        let Some(recipes) = self.slots.get_mut(&key) else {
            return false;
        };
        let Some(position) = recipes.iter().position(|r| r.id == recipe_id) else {
            return false;
        };
        recipes.remove(position);
        if recipes.is_empty() {
            self.slots.remove(&key);
        }
        log::debug!("Removed recipe '{}' from {} {}", recipe_id, date, meal_type);
        true
    }

    /// Removes every occurrence of `recipe_id` from the slot and returns the
    /// number removed.
    pub fn remove_all_recipes(&mut self, date: NaiveDate, meal_type: MealType, recipe_id: &str) -> usize {
        let key = MealSlotKey::new(date, meal_type);
        let Some(recipes) = self.slots.get_mut(&key) else {
            return 0;
        };
        let before = recipes.len();
        recipes.retain(|r| r.id != recipe_id);
        let removed = before - recipes.len();
        if recipes.is_empty() {
            self.slots.remove(&key);
        }
        if removed > 0 {
            log::debug!("Removed {} x '{}' from {} {}", removed, recipe_id, date, meal_type);
        }
        removed
    }

    pub fn recipes_for(&self, date: NaiveDate, meal_type: MealType) -> &[RecipeRef] {
        self.slots
            .get(&MealSlotKey::new(date, meal_type))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn recipes_for_date(&self, date: NaiveDate) -> DayPlan<'_> {
        MealType::ALL
            .into_iter()
            .map(|meal_type| (meal_type, self.recipes_for(date, meal_type)))
            .collect()
    }

    /// Seven consecutive days starting at `start`.
    pub fn recipes_for_week(&self, start: NaiveDate) -> Vec<(NaiveDate, DayPlan<'_>)> {
        week_dates(start)
            .map(|date| (date, self.recipes_for_date(date)))
            .collect()
    }

    pub fn clear_date(&mut self, date: NaiveDate) -> usize {
        let before = self.slots.len();
        self.slots.retain(|key, _| key.date != date);
        before - self.slots.len()
    }

    /// Dates with at least one planned recipe, ascending.
    pub fn planned_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.slots.keys().map(|key| key.date).collect();
        dates.dedup();
        dates
    }

    /// All non-empty slots, ordered by date then meal type.
    pub fn entries(&self) -> impl Iterator<Item = (&MealSlotKey, &[RecipeRef])> {
        self.slots.iter().map(|(key, recipes)| (key, recipes.as_slice()))
    }

    /// Total number of planned recipe references across all slots.
    pub fn len(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

pub fn week_dates(start: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (0..DAYS_PER_WEEK).filter_map(move |offset| start.checked_add_days(Days::new(offset)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe_model::Recipe;
    use std::sync::Arc;

    fn recipe(id: &str) -> RecipeRef {
        Arc::new(Recipe {
            id: id.to_string(),
            title: format!("Recipe {}", id),
            description: String::new(),
            image: String::new(),
            time: 10,
            rating: 4.0,
            category: "Lunch".to_string(),
            diet: Vec::new(),
            favorite: false,
            ingredients: None,
            instructions: None,
            nutrition_facts: None,
            author: None,
        })
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn ids(recipes: &[RecipeRef]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_absent_slot_reads_empty() {
        let store = MealSlotStore::new();
        assert!(store.recipes_for(day(1), MealType::Lunch).is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_keeps_order_and_duplicates() {
        let mut store = MealSlotStore::new();
        store.add_recipe(day(1), MealType::Breakfast, recipe("1"));
        store.add_recipe(day(1), MealType::Breakfast, recipe("2"));
        store.add_recipe(day(1), MealType::Breakfast, recipe("1"));
        assert_eq!(ids(store.recipes_for(day(1), MealType::Breakfast)), vec!["1", "2", "1"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut store = MealSlotStore::new();
        store.add_recipe(day(1), MealType::Dinner, recipe("1"));
        store.add_recipe(day(1), MealType::Dinner, recipe("2"));
        store.add_recipe(day(1), MealType::Dinner, recipe("1"));

        assert!(store.remove_recipe(day(1), MealType::Dinner, "1"));
        assert_eq!(ids(store.recipes_for(day(1), MealType::Dinner)), vec!["2", "1"]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut store = MealSlotStore::new();
        store.add_recipe(day(1), MealType::Dinner, recipe("1"));

        assert!(!store.remove_recipe(day(1), MealType::Dinner, "9"));
        assert!(!store.remove_recipe(day(2), MealType::Dinner, "1"));
        assert!(!store.remove_recipe(day(1), MealType::Lunch, "1"));
        assert_eq!(store.recipes_for(day(1), MealType::Dinner).len(), 1);
    }

    #[test]
    fn test_remove_all() {
        let mut store = MealSlotStore::new();
        for id in ["1", "2", "1", "1"] {
            store.add_recipe(day(3), MealType::Snack, recipe(id));
        }
        assert_eq!(store.remove_all_recipes(day(3), MealType::Snack, "1"), 3);
        assert_eq!(ids(store.recipes_for(day(3), MealType::Snack)), vec!["2"]);
        assert_eq!(store.remove_all_recipes(day(3), MealType::Snack, "1"), 0);
    }

    #[test]
    fn test_emptied_slot_is_dropped() {
        let mut store = MealSlotStore::new();
        store.add_recipe(day(1), MealType::Lunch, recipe("1"));
        store.remove_recipe(day(1), MealType::Lunch, "1");
        assert!(store.is_empty());
        assert!(store.planned_dates().is_empty());
    }

    #[test]
    fn test_recipes_for_date_has_every_meal_type() {
        let mut store = MealSlotStore::new();
        store.add_recipe(day(1), MealType::Lunch, recipe("1"));
        store.add_recipe(day(1), MealType::Snack, recipe("2"));
        store.add_recipe(day(2), MealType::Lunch, recipe("3"));

        let plan = store.recipes_for_date(day(1));
        assert_eq!(plan.len(), 4);
        assert!(plan[&MealType::Breakfast].is_empty());
        assert_eq!(ids(plan[&MealType::Lunch]), vec!["1"]);
        assert_eq!(ids(plan[&MealType::Snack]), vec!["2"]);
    }

    #[test]
    fn test_week_and_dates() {
        let mut store = MealSlotStore::new();
        store.add_recipe(day(7), MealType::Dinner, recipe("1"));
        store.add_recipe(day(2), MealType::Breakfast, recipe("2"));
        store.add_recipe(day(2), MealType::Dinner, recipe("3"));
        store.add_recipe(day(9), MealType::Dinner, recipe("4"));

        assert_eq!(store.planned_dates(), vec![day(2), day(7), day(9)]);

        let week = store.recipes_for_week(day(1));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].0, day(1));
        assert_eq!(week[6].0, day(7));
        assert_eq!(ids(week[6].1[&MealType::Dinner]), vec!["1"]);

        assert_eq!(store.clear_date(day(2)), 2);
        assert_eq!(store.planned_dates(), vec![day(7), day(9)]);
    }

    #[test]
    fn test_entries_ordered_by_date_then_meal() {
        let mut store = MealSlotStore::new();
        store.add_recipe(day(2), MealType::Breakfast, recipe("a"));
        store.add_recipe(day(1), MealType::Snack, recipe("b"));
        store.add_recipe(day(1), MealType::Breakfast, recipe("c"));

        let keys: Vec<_> = store.entries().map(|(key, _)| (key.date, key.meal_type)).collect();
        assert_eq!(
            keys,
            vec![
                (day(1), MealType::Breakfast),
                (day(1), MealType::Snack),
                (day(2), MealType::Breakfast)
            ]
        );
    }
}
