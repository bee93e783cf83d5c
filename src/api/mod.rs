mod forkify;

pub use forkify::ForkifyClient;

use async_trait::async_trait;
use serde::Deserialize;

use crate::model::{NewRecipe, Recipe, RecipePreview, SearchResults};
use crate::RecipeError;

/// The remote recipe service
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Find recipes matching `keyword`
    ///
    /// A search that matches nothing is an error (`RecipeError::NoResults`).
    async fn search(&self, keyword: &str) -> Result<SearchResults, RecipeError>;

    /// Load a single recipe by id
    async fn recipe(&self, id: &str) -> Result<Recipe, RecipeError>;

    /// Submit a new recipe, returning it as stored by the service
    async fn upload(&self, recipe: &NewRecipe) -> Result<Recipe, RecipeError>;
}

/// `{status, message?, results?, data?}` wrapper around every API response
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub status: String,
    pub message: Option<String>,
    pub results: Option<usize>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap `data`, turning a non-success status into `RecipeError::Api`
    pub fn into_data(self) -> Result<(Option<usize>, T), RecipeError> {
        if self.status != "success" {
            return Err(RecipeError::Api {
                message: self
                    .message
                    .unwrap_or_else(|| format!("Unexpected status '{}'", self.status)),
            });
        }
        let data = self.data.ok_or_else(|| RecipeError::Api {
            message: "Response did not contain any data".to_string(),
        })?;
        Ok((self.results, data))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecipesData {
    #[serde(default)]
    pub recipes: Vec<RecipePreview>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecipeData {
    pub recipe: Recipe,
}

/// Reject ids that would change the request path
pub(crate) fn validate_id(id: &str) -> Result<&str, RecipeError> {
    let id = id.trim();
    let bad = id.is_empty()
        || id
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace());
    if bad {
        return Err(RecipeError::InvalidRecipeId(id.to_string()));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_envelope_becomes_api_error() {
        let envelope: Envelope<RecipeData> =
            serde_json::from_str(r#"{"status":"fail","message":"Invalid _id: 123"}"#).unwrap();
        match envelope.into_data() {
            Err(RecipeError::Api { message }) => assert_eq!(message, "Invalid _id: 123"),
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[test]
    fn test_success_without_data_is_an_error() {
        let envelope: Envelope<RecipesData> =
            serde_json::from_str(r#"{"status":"success","results":0}"#).unwrap();
        assert!(matches!(envelope.into_data(), Err(RecipeError::Api { .. })));

        // RecipeData has no Default; a missing field still decodes to None
        let envelope: Envelope<RecipeData> =
            serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(envelope.message.is_none());
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_search_envelope() {
        let envelope: Envelope<RecipesData> = serde_json::from_str(
            r#"{
                "status": "success",
                "results": 1,
                "data": {"recipes": [{
                    "publisher": "101 Cookbooks",
                    "image_url": "http://forkify-api.herokuapp.com/images/best_pizza.jpg",
                    "title": "Best Pizza Dough Ever",
                    "id": "5ed6604591c37cdc054bcac4"
                }]}
            }"#,
        )
        .unwrap();
        let (results, data) = envelope.into_data().unwrap();
        assert_eq!(results, Some(1));
        assert_eq!(data.recipes[0].title, "Best Pizza Dough Ever");
    }

    #[test]
    fn test_validate_id() {
        assert_eq!(validate_id(" 5ed6604591c37cdc054bcac4 ").unwrap(), "5ed6604591c37cdc054bcac4");
        assert!(validate_id("").is_err());
        assert!(validate_id("../admin").is_err());
        assert!(validate_id("abc?x=1").is_err());
        assert!(validate_id("a b").is_err());
    }
}
