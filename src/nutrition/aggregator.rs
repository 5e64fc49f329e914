use chrono::NaiveDate;

use crate::meal_plan::{week_dates, MealSlotStore};
use crate::recipe_model::{MealType, NutritionFacts, Recipe, RecipeRef};

/// Elementwise sum of the recipes' nutrition facts.
///
/// A recipe without nutrition facts adds zero to every field, so a total of
/// zero cannot tell "no data" apart from "no macros". Values are summed
/// exactly; rounding is left to whoever displays them.
///
/// # Arguments
/// * `recipes`: the recipes to total. The same recipe listed twice counts twice.
///
/// # Returns
/// The summed facts. Calories saturate at `u32::MAX` instead of wrapping.
pub fn sum<'a, I>(recipes: I) -> NutritionFacts
where
    I: IntoIterator<Item = &'a RecipeRef>,
{
    recipes
        .into_iter()
        .fold(NutritionFacts::default(), |total, recipe| add_recipe(total, recipe))
}

fn add_recipe(mut total: NutritionFacts, recipe: &Recipe) -> NutritionFacts {
    let facts = recipe.nutrition_or_zero();
    total.calories = total.calories.saturating_add(facts.calories);
    macro_rules! add_field {
        ($field:ident) => {
            total.$field += facts.$field;
        };
    }
    add_field!(protein);
    add_field!(carbs);
    add_field!(fat);
    total
}

pub fn sum_for_slot(store: &MealSlotStore, date: NaiveDate, meal_type: MealType) -> NutritionFacts {
    sum(store.recipes_for(date, meal_type))
}

/// Daily total across every meal type of `date`.
pub fn sum_for_date(store: &MealSlotStore, date: NaiveDate) -> NutritionFacts {
    store
        .recipes_for_date(date)
        .values()
        .fold(NutritionFacts::default(), |total, recipes| {
            recipes.iter().fold(total, |t, recipe| add_recipe(t, recipe))
        })
}

/// One daily total per day of the week starting at `start`.
pub fn sum_for_week(store: &MealSlotStore, start: NaiveDate) -> Vec<(NaiveDate, NutritionFacts)> {
    week_dates(start).map(|date| (date, sum_for_date(store, date))).collect()
}

/// Share of a daily target reached, capped at 100.
///
/// # Arguments
/// * `value`: amount consumed.
/// * `target`: the goal. Must be positive; targets built through
///   `NutritionTargets` always are.
///
/// # Returns
/// `min(100, value / target * 100)`, evaluated in that order.
pub fn percent_of_target(value: f64, target: f64) -> f64 {
    debug_assert!(target > 0.0, "nutrition target must be positive");
    // divide first: `value * 100 / target` rounds differently for some inputs
    (value / target * 100.0).min(100.0)
}

/// `goal - consumed`. Negative when over the goal; never clamped.
pub fn remaining(goal: f64, consumed: f64) -> f64 {
    goal - consumed
}

/// Scales facts recorded for `base_servings` to `servings`. Both counts are
/// treated as at least one. Calories are rounded to the nearest kcal.
pub fn scale_for_servings(facts: &NutritionFacts, base_servings: u32, servings: u32) -> NutritionFacts {
    let factor = f64::from(servings.max(1)) / f64::from(base_servings.max(1));
    NutritionFacts {
        calories: (f64::from(facts.calories) * factor).round() as u32,
        protein: facts.protein * factor,
        carbs: facts.carbs * factor,
        fat: facts.fat * factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn recipe(id: &str, nutrition: Option<(u32, f64, f64, f64)>) -> RecipeRef {
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
            nutrition_facts: nutrition.map(|(calories, protein, carbs, fat)| NutritionFacts {
                calories,
                protein,
                carbs,
                fat,
            }),
            author: None,
        })
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_sum_empty_is_zero() {
        let none: Vec<RecipeRef> = Vec::new();
        assert_eq!(sum(&none), NutritionFacts::default());
    }

    #[test]
    fn test_sum_counts_missing_facts_as_zero() {
        let recipes = vec![
            recipe("1", Some((350, 10.0, 30.0, 20.0))),
            recipe("2", None),
            recipe("3", Some((450, 35.0, 15.0, 25.0))),
        ];
        assert_eq!(
            sum(&recipes),
            NutritionFacts { calories: 800, protein: 45.0, carbs: 45.0, fat: 45.0 }
        );
    }

    #[test]
    fn test_duplicates_counted_separately() {
        let toast = recipe("1", Some((350, 10.0, 30.0, 20.0)));
        let recipes = vec![Arc::clone(&toast), toast];
        assert_eq!(sum(&recipes).calories, 700);
    }

    #[test]
    fn test_calories_saturate_instead_of_overflowing() {
        let recipes = vec![
            recipe("1", Some((u32::MAX, 1.0, 1.0, 1.0))),
            recipe("2", Some((u32::MAX, 1.0, 1.0, 1.0))),
        ];
        let total = sum(&recipes);
        assert_eq!(total.calories, u32::MAX);
        assert_eq!(total.protein, 2.0);

        let mut store = MealSlotStore::new();
        for recipe in recipes {
            store.add_recipe(day(1), MealType::Snack, recipe);
        }
        assert_eq!(sum_for_date(&store, day(1)).calories, u32::MAX);
    }

    #[test]
    fn test_sum_for_date_spans_meal_types_only_for_that_date() {
        let mut store = MealSlotStore::new();
        store.add_recipe(day(1), MealType::Breakfast, recipe("1", Some((350, 10.0, 30.0, 20.0))));
        store.add_recipe(day(1), MealType::Dinner, recipe("2", Some((650, 25.0, 80.0, 20.0))));
        store.add_recipe(day(2), MealType::Dinner, recipe("3", Some((450, 35.0, 15.0, 25.0))));

        let total = sum_for_date(&store, day(1));
        assert_eq!(total.calories, 1000);
        assert_eq!(total.carbs, 110.0);
        assert_eq!(sum_for_slot(&store, day(1), MealType::Dinner).calories, 650);
        assert_eq!(sum_for_date(&store, day(5)), NutritionFacts::default());
    }

    #[test]
    fn test_sum_for_week() {
        let mut store = MealSlotStore::new();
        store.add_recipe(day(1), MealType::Lunch, recipe("1", Some((500, 0.0, 0.0, 0.0))));
        store.add_recipe(day(3), MealType::Lunch, recipe("2", Some((700, 0.0, 0.0, 0.0))));
        store.add_recipe(day(8), MealType::Lunch, recipe("3", Some((900, 0.0, 0.0, 0.0))));

        let week: Vec<u32> = sum_for_week(&store, day(1)).into_iter().map(|(_, n)| n.calories).collect();
        assert_eq!(week, vec![500, 0, 700, 0, 0, 0, 0]);
    }

    #[test]
    fn test_percent_of_target() {
        assert_eq!(percent_of_target(35.0, 50.0), 70.0);
        assert_eq!(percent_of_target(60.0, 50.0), 100.0);
        assert_eq!(percent_of_target(0.0, 78.0), 0.0);
        assert_eq!(percent_of_target(0.7, 13.0), 5.384615384615384);
    }

    #[test]
    fn test_percent_of_target_divides_before_scaling() {
        for target in [3.0, 7.0, 11.0, 13.0, 49.0, 78.0, 275.0, 2000.0] {
            for step in 1..400 {
                let value = 0.7 * f64::from(step);
                let expected = (value / target * 100.0).min(100.0);
                assert_eq!(percent_of_target(value, target), expected, "{} / {}", value, target);
            }
        }
    }

    #[test]
    fn test_remaining_is_not_clamped() {
        assert_eq!(remaining(2000.0, 800.0), 1200.0);
        assert_eq!(remaining(2000.0, 2450.0), -450.0);
    }

    #[test]
    fn test_scale_for_servings() {
        let facts = NutritionFacts { calories: 320, protein: 10.0, carbs: 45.0, fat: 12.0 };
        let doubled = scale_for_servings(&facts, 4, 8);
        assert_eq!(doubled, NutritionFacts { calories: 640, protein: 20.0, carbs: 90.0, fat: 24.0 });

        let single = scale_for_servings(&facts, 4, 0);
        assert_eq!(single.calories, 80);
        assert_eq!(single.protein, 2.5);
    }
}
