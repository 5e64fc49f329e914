use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog JSON file; the bundled sample catalog is used when omitted
    #[arg(short, long, env = "MEAL_PLANNER_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging{n}[SETS env: RUST_LOG=debug]
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List recipes, optionally narrowed by category and diet tag
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        diet: Option<String>,
    },
    /// Find recipes whose title contains the query (case-insensitive)
    Search { query: String },
    /// Show one recipe with related recipes
    Show {
        id: String,
        /// Servings to scale nutrition to (recipes are written for 4)
        #[arg(short, long, default_value_t = 4)]
        servings: u32,
    },
    /// Summarise a meal plan file against the nutrition targets
    Plan {
        /// JSON list of { date, mealType, recipeId } entries
        plan_file: PathBuf,
        /// Day to summarise (YYYY-MM-DD); defaults to the first planned day
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Write the whole plan as CSV to this path
        #[arg(short, long)]
        export: Option<PathBuf>,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_command() {
        let cli = Cli::try_parse_from(["meal_planner", "plan", "week.json", "--date", "2024-01-01", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Plan { plan_file, date, export } => {
                assert_eq!(plan_file, PathBuf::from("week.json"));
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1));
                assert!(export.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_show_default_servings() {
        let cli = Cli::try_parse_from(["meal_planner", "show", "1"]).unwrap();
        assert!(matches!(cli.command, Command::Show { servings: 4, .. }));
    }

    #[test]
    fn test_bad_date_rejected() {
        assert!(Cli::try_parse_from(["meal_planner", "plan", "p.json", "--date", "01/01/2024"]).is_err());
    }
}
