use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::api::{validate_id, Envelope, RecipeApi, RecipeData, RecipesData};
use crate::config::{ApiConfig, DEFAULT_API_URL};
use crate::model::{NewRecipe, Recipe, SearchResults};
use crate::RecipeError;

/// HTTP client for the Forkify recipe API
#[derive(Debug, Clone)]
pub struct ForkifyClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ForkifyClient {
    /// Client for the public API without a key
    pub fn new() -> Result<Self, RecipeError> {
        Self::with_options(DEFAULT_API_URL, None, None)
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, RecipeError> {
        Self::with_options(&config.base_url, config.api_key.clone(), config.timeout())
    }

    pub(crate) fn with_options(
        base_url: &str,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, RecipeError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn with_key(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        }
    }

    /// Send the request and unwrap the response envelope
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<(Option<usize>, T), RecipeError> {
        let response = self.with_key(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Recipe API answered {} for {}", status, response.url());
            return Err(RecipeError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            warn!("Recipe API sent a body that could not be decoded: {}", e);
            RecipeError::InvalidResponse(e.to_string())
        })?;
        envelope.into_data()
    }
}

#[async_trait]
impl RecipeApi for ForkifyClient {
    async fn search(&self, keyword: &str) -> Result<SearchResults, RecipeError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(RecipeError::EmptyKeyword);
        }

        debug!("Searching recipes for '{}'", keyword);
        let request = self
            .client
            .get(&self.base_url)
            .query(&[("search", keyword)]);
        let (results, data): (_, RecipesData) = self.send(request).await?;

        let total = results.unwrap_or(data.recipes.len());
        if total == 0 || data.recipes.is_empty() {
            return Err(RecipeError::NoResults);
        }
        if total != data.recipes.len() {
            warn!(
                "API reported {} results for '{}' but returned {}",
                total,
                keyword,
                data.recipes.len()
            );
        }

        debug!("Found {} recipes for '{}'", data.recipes.len(), keyword);
        Ok(SearchResults {
            keyword: keyword.to_string(),
            recipes: data.recipes,
            total,
        })
    }

    async fn recipe(&self, id: &str) -> Result<Recipe, RecipeError> {
        let id = validate_id(id)?;
        debug!("Fetching recipe {}", id);

        let request = self.client.get(format!("{}/{}", self.base_url, id));
        let (_, data): (_, RecipeData) = self.send(request).await?;
        Ok(data.recipe)
    }

    async fn upload(&self, recipe: &NewRecipe) -> Result<Recipe, RecipeError> {
        if self.api_key.is_none() {
            warn!("Uploading a recipe without an API key, the API will likely reject it");
        }
        debug!("Uploading recipe '{}'", recipe.title);

        let request = self.client.post(&self.base_url).json(recipe);
        let (_, data): (_, RecipeData) = self.send(request).await?;
        Ok(data.recipe)
    }
}
