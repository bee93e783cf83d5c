pub mod api;
pub mod app;
pub mod bookmarks;
pub mod builder;
pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod pagination;
pub mod servings;
pub mod submission;

use log::debug;

pub use api::{ForkifyClient, RecipeApi};
pub use app::{InfoMessage, Outcome, RecipeApp, Region, Tone};
pub use bookmarks::{Bookmarks, FileStorage, MemoryStorage, SavedState, Storage};
pub use builder::{ForkifyClientBuilder, RecipeAppBuilder};
pub use config::AppConfig;
pub use error::RecipeError;
pub use model::{Ingredient, NewRecipe, Recipe, RecipePreview, SearchResults};
pub use pagination::Pagination;
pub use servings::{scale_quantities, Servings};
pub use submission::{parse_ingredient, RecipeForm};

/// Search the public API for recipes matching `keyword`
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), forkify_client::RecipeError> {
/// let results = forkify_client::search_recipes("pizza").await?;
/// println!("{} recipes", results.total);
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(keyword: &str) -> Result<SearchResults, RecipeError> {
    let client = ForkifyClient::new()?;
    client.search(keyword).await
}

/// Load one recipe from the public API
pub async fn fetch_recipe(id: &str) -> Result<Recipe, RecipeError> {
    let client = ForkifyClient::new()?;
    let recipe = client.recipe(id).await?;
    debug!("{:#?}", recipe);
    Ok(recipe)
}

/// Load a recipe and scale its ingredient quantities to `servings`
pub async fn fetch_scaled_recipe(
    id: &str,
    servings: u32,
) -> Result<(Recipe, Vec<Option<f64>>), RecipeError> {
    let recipe = fetch_recipe(id).await?;
    let quantities = scale_quantities(recipe.servings, servings, &recipe.ingredients);
    Ok((recipe, quantities))
}
