use anyhow::{Context, Result};
use meal_planner::catalog::{parse_catalog_json, sample_catalog, RecipeCatalog, RELATED_RECIPE_LIMIT};
use meal_planner::cli::{parse_args, Command};
use meal_planner::config::targets_from_env;
use meal_planner::meal_plan::{export_plan_to_path, hydrate_store, parse_plan_json};
use meal_planner::nutrition::{self, NutritionProgress, NutritionTargets};
use meal_planner::recipe_model::RecipeRef;
use std::env;
use std::path::Path;
use tokio::fs;

// Nutrition facts in the catalog are written per this many servings.
const BASE_SERVINGS: u32 = 4;

fn logger_init(verbose: bool) {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Warn)
        .filter_module(
            "meal_planner",
            if verbose || env::var(pretty_env_logger::env_logger::DEFAULT_FILTER_ENV).unwrap_or_default() == "debug" {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        )
        .init();
}

async fn load_catalog(path: Option<&Path>) -> Result<RecipeCatalog> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read catalog file '{}'", path.display()))?;
            parse_catalog_json(&content).with_context(|| format!("Invalid catalog file '{}'", path.display()))
        }
        None => sample_catalog(),
    }
}

fn print_recipe_line(recipe: &RecipeRef) {
    let kcal = recipe
        .nutrition_facts
        .map(|n| format!("{} kcal", n.calories))
        .unwrap_or_else(|| "- kcal".to_string());
    println!(
        "{:>4}  {:<40} {:<10} {:>3} min  {:.1}★  {}",
        recipe.id, recipe.title, recipe.category, recipe.time, recipe.rating, kcal
    );
}

fn print_progress(progress: &NutritionProgress, targets: &NutritionTargets) {
    let total = &progress.total;
    println!("Total Calories: {} kcal", total.calories);
    println!("  Protein {:>6.1}g / {}g  ({:.0}%)", total.protein, targets.protein(), progress.protein_pct);
    println!("  Carbs   {:>6.1}g / {}g  ({:.0}%)", total.carbs, targets.carbs(), progress.carbs_pct);
    println!("  Fat     {:>6.1}g / {}g  ({:.0}%)", total.fat, targets.fat(), progress.fat_pct);
    println!("Daily Goal: {} kcal", targets.calories());
    println!("Remaining:  {} kcal", progress.remaining_calories);
}

fn show_recipe(catalog: &RecipeCatalog, id: &str, servings: u32) -> Result<()> {
    let recipe = catalog.get_by_id(id)?;
    println!("{} ({})", recipe.title, recipe.category);
    println!("{}", recipe.description);
    println!("{} min · rated {:.1}", recipe.time, recipe.rating);
    if !recipe.diet.is_empty() {
        println!("Diet: {}", recipe.diet.join(", "));
    }
    if let Some(author) = &recipe.author {
        println!("By {}", author.name);
    }
    if let Some(ingredients) = &recipe.ingredients {
        println!("\nIngredients:");
        for ingredient in ingredients {
            println!("  - {}", ingredient);
        }
    }
    if let Some(instructions) = &recipe.instructions {
        println!("\nInstructions:");
        for (step, instruction) in instructions.iter().enumerate() {
            println!("  {}. {}", step + 1, instruction);
        }
    }
    if let Some(facts) = &recipe.nutrition_facts {
        let scaled = nutrition::scale_for_servings(facts, BASE_SERVINGS, servings);
        println!(
            "\nNutrition for {} servings: {} kcal, {:.1}g protein, {:.1}g carbs, {:.1}g fat",
            servings.max(1),
            scaled.calories,
            scaled.protein,
            scaled.carbs,
            scaled.fat
        );
    }

    let related = catalog.related(id, RELATED_RECIPE_LIMIT)?;
    if !related.is_empty() {
        println!("\nYou might also like:");
        for recipe in &related {
            print_recipe_line(recipe);
        }
    }
    Ok(())
}

async fn summarise_plan(
    catalog: &RecipeCatalog,
    plan_file: &Path,
    date: Option<chrono::NaiveDate>,
    export: Option<&Path>,
) -> Result<()> {
    let targets = targets_from_env()?;
    let content = fs::read_to_string(plan_file)
        .await
        .with_context(|| format!("Failed to read plan file '{}'", plan_file.display()))?;
    let entries = parse_plan_json(&content)?;
    let store = hydrate_store(&entries, catalog)
        .with_context(|| format!("Plan file '{}' references an unknown recipe", plan_file.display()))?;

    let Some(day) = date.or_else(|| store.planned_dates().first().copied()) else {
        println!("No recipes planned yet.");
        return Ok(());
    };

    println!("{}", day.format("%A, %B %-d, %Y"));
    for (meal_type, recipes) in store.recipes_for_date(day) {
        println!("\n{}:", meal_type);
        if recipes.is_empty() {
            println!("  No recipes added to {} yet", meal_type.as_str().to_lowercase());
        }
        for recipe in recipes {
            print_recipe_line(recipe);
        }
    }

    println!("\nDaily Nutrition Summary");
    let progress = NutritionProgress::new(nutrition::sum_for_date(&store, day), &targets);
    print_progress(&progress, &targets);

    println!("\nWeek from {}:", day);
    for (date, total) in nutrition::sum_for_week(&store, day) {
        println!("  {}  {:>5} kcal", date.format("%a %Y-%m-%d"), total.calories);
    }

    if let Some(export_path) = export {
        export_plan_to_path(&store, export_path)?;
        println!("\nMeal plan exported to {}", export_path.display());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli_args = parse_args();
    logger_init(cli_args.verbose);

    let catalog = load_catalog(cli_args.catalog.as_deref()).await?;
    log::debug!("Catalog ready with {} recipes", catalog.len());

    match cli_args.command {
        Command::List { category, diet } => {
            let recipes = catalog.filter_by_category_and_diet(category.as_deref(), diet.as_deref());
            if recipes.is_empty() {
                println!("No recipes found.");
            }
            for recipe in &recipes {
                print_recipe_line(recipe);
            }
        }
        Command::Search { query } => {
            let recipes = catalog.search(&query);
            if recipes.is_empty() {
                println!("No recipes found matching your search.");
            }
            for recipe in &recipes {
                print_recipe_line(recipe);
            }
        }
        Command::Show { id, servings } => show_recipe(&catalog, &id, servings)?,
        Command::Plan { plan_file, date, export } => {
            summarise_plan(&catalog, &plan_file, date, export.as_deref()).await?
        }
    }

    Ok(())
}
