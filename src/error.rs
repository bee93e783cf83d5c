use thiserror::Error;

/// Errors that can occur while searching, loading, saving or uploading recipes
///
/// The `Display` output of every variant is meant to be shown to the user as is.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// The request never produced a usable response
    #[error("Network error. Please check your connection and try again! ({0})")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status
    #[error("Something went wrong. Invalid request ({status})!")]
    Http { status: u16 },

    /// The API answered with a body that is not a valid response
    #[error("An error occurred! Unexpected response from the recipe service ({0})")]
    InvalidResponse(String),

    /// The API answered, but the envelope status was not "success"
    #[error("An error occurred! {message}")]
    Api { message: String },

    /// The search matched nothing
    #[error("No recipes found. Please try again!")]
    NoResults,

    /// The search keyword was blank after trimming
    #[error("Please enter a recipe to search for!")]
    EmptyKeyword,

    /// The recipe id cannot be used as a path segment
    #[error("Invalid recipe id: {0:?}")]
    InvalidRecipeId(String),

    /// An ingredient entry is not in `quantity,unit,description` form
    #[error("Invalid ingredient format!")]
    InvalidIngredient(String),

    /// A submitted recipe had no ingredient entries
    #[error("You must provide at least one ingredient!")]
    NoIngredients,

    /// A submitted recipe is missing a field or has a bad number
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    /// Reading or writing saved recipes failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Saved recipes could not be decoded
    #[error("Saved recipes are corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Client builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),
}

impl RecipeError {
    /// Errors caused by user input, raised before any request is made
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RecipeError::EmptyKeyword
                | RecipeError::InvalidRecipeId(_)
                | RecipeError::InvalidIngredient(_)
                | RecipeError::NoIngredients
                | RecipeError::InvalidRecipe(_)
        )
    }
}
