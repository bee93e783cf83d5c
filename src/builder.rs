use std::time::Duration;

use crate::bookmarks::{Bookmarks, MemoryStorage, Storage};
use crate::config::{DEFAULT_API_URL, DEFAULT_STORAGE_KEY};
use crate::{ForkifyClient, RecipeApp, RecipeError};

/// Builder for a configured [`ForkifyClient`]
#[derive(Debug, Default)]
pub struct ForkifyClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl ForkifyClientBuilder {
    /// Set the recipes collection URL
    ///
    /// # Example
    /// ```
    /// use forkify_client::ForkifyClient;
    ///
    /// let builder = ForkifyClient::builder()
    ///     .base_url("http://localhost:8080/api/v2/recipes");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key sent with every request
    ///
    /// Uploads are only accepted with a key, and recipes uploaded with it
    /// come back marked as the user's own.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use forkify_client::ForkifyClient;
    /// use std::time::Duration;
    ///
    /// let builder = ForkifyClient::builder()
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build the client
    ///
    /// # Errors
    /// Returns `RecipeError::BuilderError` when the base URL is not an
    /// http(s) URL, or `RecipeError::Network` when the HTTP client cannot
    /// be created.
    pub fn build(self) -> Result<ForkifyClient, RecipeError> {
        let base_url = self.base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(RecipeError::BuilderError(format!(
                "Base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }
        ForkifyClient::with_options(&base_url, self.api_key, self.timeout)
    }
}

impl ForkifyClient {
    /// Creates a new builder for the API client
    pub fn builder() -> ForkifyClientBuilder {
        ForkifyClientBuilder::default()
    }
}

/// Builder for a [`RecipeApp`]
///
/// Defaults to the public API, ten results per page and in-memory storage.
#[derive(Default)]
pub struct RecipeAppBuilder {
    client: Option<ForkifyClient>,
    storage: Option<Box<dyn Storage>>,
    storage_key: Option<String>,
    items_per_page: Option<usize>,
}

impl RecipeAppBuilder {
    pub fn client(mut self, client: ForkifyClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Where saved recipes are kept
    pub fn storage(mut self, storage: impl Storage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    pub fn items_per_page(mut self, items: usize) -> Self {
        self.items_per_page = Some(items);
        self
    }

    /// Build the app, loading any saved recipes from storage
    pub fn build(self) -> Result<RecipeApp, RecipeError> {
        let items_per_page = self.items_per_page.unwrap_or(10);
        if items_per_page == 0 {
            return Err(RecipeError::BuilderError(
                "items_per_page must be at least 1".to_string(),
            ));
        }

        let client = match self.client {
            Some(client) => client,
            None => ForkifyClient::new()?,
        };
        let storage = self
            .storage
            .unwrap_or_else(|| Box::new(MemoryStorage::new()));
        let key = self
            .storage_key
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        let bookmarks = Bookmarks::load(storage, key)?;

        Ok(RecipeApp::new(
            std::sync::Arc::new(client),
            bookmarks,
            items_per_page,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder_defaults() {
        let client = ForkifyClient::builder().build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_API_URL);
        assert!(!client.has_api_key());
    }

    #[test]
    fn test_client_builder_rejects_bad_url() {
        let result = ForkifyClient::builder().base_url("ftp://example.com").build();
        assert!(matches!(result, Err(RecipeError::BuilderError(_))));
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let client = ForkifyClient::builder().api_key("  ").build().unwrap();
        assert!(!client.has_api_key());
    }

    #[test]
    fn test_app_builder_rejects_zero_page_size() {
        let result = RecipeApp::builder().items_per_page(0).build();
        assert!(matches!(result, Err(RecipeError::BuilderError(_))));
    }

    #[test]
    fn test_app_builder_loads_saved_recipes() {
        let mut storage = MemoryStorage::new();
        storage
            .set(
                "my-key",
                r#"[{"id":"a","title":"T","publisher":"P","image_url":"i","source_url":"s","cooking_time":1,"servings":1,"ingredients":[]}]"#,
            )
            .unwrap();

        let app = RecipeApp::builder()
            .storage(storage)
            .storage_key("my-key")
            .build()
            .unwrap();
        assert_eq!(app.bookmarks().len(), 1);
    }
}
