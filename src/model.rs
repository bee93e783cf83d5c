use serde::{Deserialize, Serialize};

/// A full recipe as returned by the API and as stored in the saved list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    pub source_url: String,
    /// Cooking time in minutes
    pub cooking_time: u32,
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Present on recipes submitted with the user's API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Recipe {
    /// Whether the recipe was submitted by the user
    pub fn is_user_owned(&self) -> bool {
        self.key.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: String,
    pub description: String,
}

/// The partial recipe found in search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipePreview {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl RecipePreview {
    pub fn is_user_owned(&self) -> bool {
        self.key.is_some()
    }
}

impl From<&Recipe> for RecipePreview {
    fn from(recipe: &Recipe) -> Self {
        RecipePreview {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            publisher: recipe.publisher.clone(),
            image_url: recipe.image_url.clone(),
            key: recipe.key.clone(),
        }
    }
}

/// Results of one keyword search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub keyword: String,
    pub recipes: Vec<RecipePreview>,
    /// Match count reported by the API
    pub total: usize,
}

/// Body of a recipe submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRecipe {
    pub title: String,
    pub publisher: String,
    pub source_url: String,
    pub image_url: String,
    pub cooking_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
}
