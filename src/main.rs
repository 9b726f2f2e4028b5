use anyhow::Result;
use clap::{Parser, Subcommand};
use mealmate::cli::{self, SessionArgs};
use mealmate::{load_catalog, Config, Planner};
use mealmate_recipe::Catalog;

/// mealmate - vegetarian recipe ideas from what is already in the kitchen
#[derive(Parser)]
#[command(name = "mealmate")]
#[command(about = "Vegetarian recipe suggestions and shopping lists", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// JSON catalog to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank recipes for the given selection
    Suggest {
        #[command(flatten)]
        session: SessionArgs,

        /// Recipe to show in detail
        #[arg(long)]
        recipe: Option<String>,
    },
    /// List the ingredients still worth picking, by category
    Universe {
        #[command(flatten)]
        session: SessionArgs,

        /// Case-insensitive name filter
        #[arg(long)]
        search: Option<String>,
    },
    /// Normalize free text into canonical ingredient names
    Tokenize {
        text: String,
    },
    /// Shopping list and retailer link for a recipe
    Shop {
        #[command(flatten)]
        session: SessionArgs,

        /// Recipe id
        recipe_id: String,

        /// Ticked spice/oil items to add (with --no-spices)
        #[arg(long)]
        tick: Vec<String>,

        /// Browser user agent, selects the Android app link when it matches
        #[arg(long, default_value = "")]
        user_agent: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load_validated(cli.config.clone())?;

    mealmate::observability::init_observability(
        "mealmate",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
        &config.observability.log_format,
    )?;

    let loaded;
    let catalog: &Catalog = match cli.catalog.as_ref().or(config.catalog.path.as_ref()) {
        Some(path) => {
            loaded = load_catalog(path)?;
            &loaded
        }
        None => Catalog::builtin(),
    };
    let planner = Planner::from_config(catalog, &config);

    match cli.command {
        Commands::Suggest { session, recipe } => {
            let mut state = session.to_state(&planner, &config.session);
            state.set_active_recipe(recipe);
            cli::suggest(&planner, &state, cli.json)
        }
        Commands::Universe { session, search } => {
            let state = session.to_state(&planner, &config.session);
            cli::universe(&planner, &state, search.as_deref(), cli.json)
        }
        Commands::Tokenize { text } => cli::tokenize(catalog, &text, cli.json),
        Commands::Shop {
            session,
            recipe_id,
            tick,
            user_agent,
        } => {
            let state = session.to_state(&planner, &config.session);
            cli::shop(&planner, &state, &recipe_id, &tick, &user_agent, cli.json)
        }
    }
}
