use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use std::path::PathBuf;
use std::process::ExitCode;

use forkify_client::app::RecipeDetail;
use forkify_client::config::load_config;
use forkify_client::format::format_quantity;
use forkify_client::{
    Outcome, RecipeApp, RecipeError, RecipeForm, RecipePreview, Region, SavedState,
};

/// Search, scale and bookmark recipes from the Forkify API
#[derive(Parser, Debug)]
#[command(name = "forkify")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging (-v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ./forkify.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search recipes by keyword
    Search {
        keyword: String,
        /// Page of results to show
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Print markup instead of text
        #[arg(long)]
        html: bool,
    },
    /// Show one recipe, by id or `#id` fragment
    Show {
        id: String,
        /// Scale ingredients to this many servings
        #[arg(long)]
        servings: Option<u32>,
        /// Print markup instead of text
        #[arg(long)]
        html: bool,
    },
    /// Save a recipe, or unsave it when already saved
    Save { id: String },
    /// List saved recipes
    Saved {
        /// Print markup instead of text
        #[arg(long)]
        html: bool,
    },
    /// Upload your own recipe (needs an API key)
    Upload {
        #[arg(long)]
        title: String,
        #[arg(long)]
        publisher: String,
        #[arg(long)]
        source_url: String,
        #[arg(long)]
        image_url: String,
        /// Cooking time in minutes
        #[arg(long)]
        cooking_time: String,
        #[arg(long)]
        servings: String,
        /// Ingredient as `quantity,unit,description`, repeatable
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), RecipeError> {
    let config = load_config(cli.config.as_deref())?;
    debug!("{:?}", config);
    let mut app = RecipeApp::from_config(&config)?;

    match cli.command {
        Command::Search {
            keyword,
            page,
            html,
        } => {
            if app.search(&keyword).await? == Outcome::Skipped {
                return Err(RecipeError::EmptyKeyword);
            }
            for _ in 1..page {
                if !app.next_page() {
                    break;
                }
            }
            if html {
                println!("{}", app.render_results());
            } else {
                print_results(&app);
            }
        }
        Command::Show { id, servings, html } => {
            app.open_fragment(&id).await?;
            if let Some(servings) = servings {
                app.set_servings(servings);
            }
            if html {
                if let Some(markup) = app.render_detail() {
                    println!("{}", markup);
                }
            } else if let Some(detail) = app.detail() {
                print_detail(detail, app.saved_state());
            }
        }
        Command::Save { id } => {
            app.open_fragment(&id).await?;
            if let Some(state) = app.toggle_bookmark()? {
                let title = app
                    .detail()
                    .map(|detail| detail.recipe().title.as_str())
                    .unwrap_or_default();
                match state {
                    SavedState::Saved => println!("Saved '{}'", title),
                    SavedState::Unsaved => println!("Removed '{}' from saved recipes", title),
                }
            }
        }
        Command::Saved { html } => {
            if html {
                println!("{}", app.render_saved());
            } else if app.bookmarks().is_empty() {
                if let Some(message) = app.message(Region::Saved) {
                    println!("{}", message.text);
                }
            } else {
                for recipe in app.bookmarks().recipes() {
                    print_preview(&RecipePreview::from(recipe));
                }
            }
        }
        Command::Upload {
            title,
            publisher,
            source_url,
            image_url,
            cooking_time,
            servings,
            ingredients,
        } => {
            let form = RecipeForm {
                title,
                publisher,
                source_url,
                image_url,
                cooking_time,
                servings,
                ingredients,
            };
            let recipe = app.submit_recipe(&form).await?;
            if let Some(message) = app.message(Region::Upload) {
                println!("{}", message.text);
            }
            println!("Recipe id: {}", recipe.id);
        }
    }

    Ok(())
}

fn print_preview(recipe: &RecipePreview) {
    let owner = if recipe.is_user_owned() { " [yours]" } else { "" };
    println!("{}  {} ({}){}", recipe.id, recipe.title, recipe.publisher, owner);
}

fn print_results(app: &RecipeApp) {
    for recipe in app.visible_results() {
        print_preview(recipe);
    }
    if let Some(page) = app.pagination() {
        println!(
            "\nPage {}/{} ({}-{} of {})",
            page.page_number(),
            page.page_count(),
            page.start() + 1,
            page.end(),
            page.total()
        );
    }
}

fn print_detail(detail: &RecipeDetail, saved: Option<SavedState>) {
    let recipe = detail.recipe();
    println!("{}", recipe.title);
    println!("by {}", recipe.publisher);
    println!(
        "{} minutes, {} servings{}",
        recipe.cooking_time,
        detail.servings().current(),
        if saved.is_some_and(|state| state.is_saved()) {
            ", saved"
        } else {
            ""
        }
    );
    println!();
    for (ingredient, quantity) in recipe.ingredients.iter().zip(detail.scaled_quantities()) {
        let line = [
            format_quantity(quantity),
            ingredient.unit.clone(),
            ingredient.description.clone(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
        println!("  - {}", line);
    }
    println!();
    println!("Directions: {}", recipe.source_url);
}
