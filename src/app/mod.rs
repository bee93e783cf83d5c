//! Application state driven by the user interface
//!
//! [`RecipeApp`] owns the current search results and the page being shown,
//! along with the open recipe and the saved list. A front end calls one method per user action and re-renders
//! from the accessors and `render_*` helpers afterwards.
//!
//! Network calls are split into `begin_*` / `finish_*` pairs. The pending
//! request returned by `begin_*` borrows nothing from the app, so a UI can
//! keep handling input while it runs. `finish_*` ignores the outcome when a
//! newer request of the same kind has been started in the meantime.

mod requests;

pub use requests::{Channel, RequestToken, RequestTracker};

use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{ForkifyClient, RecipeApi};
use crate::bookmarks::{Bookmarks, FileStorage, SavedState};
use crate::builder::RecipeAppBuilder;
use crate::config::AppConfig;
use crate::format::{preview_list, recipe_detail, PREVIEW_ITEM_CLASS, SAVED_ITEM_CLASS};
use crate::model::{Recipe, RecipePreview, SearchResults};
use crate::pagination::Pagination;
use crate::servings::Servings;
use crate::submission::RecipeForm;
use crate::RecipeError;

pub const SEARCHING_MESSAGE: &str = "Searching...";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const UPLOADING_MESSAGE: &str = "Processing...";
pub const UPLOADED_MESSAGE: &str = "Congrats! Your recipe is uploaded successfully!";
pub const NO_SAVED_MESSAGE: &str = "No saved recipes yet. Find a nice recipe and save it!";

/// Screen areas that can show a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Results,
    Detail,
    Saved,
    Upload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Error,
}

/// A status line shown in one region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoMessage {
    pub text: String,
    pub tone: Tone,
}

impl InfoMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.tone == Tone::Error
    }
}

/// What became of a user action that involves a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was applied to the app state
    Applied,
    /// A newer request superseded this one and its response was dropped
    Stale,
    /// The input was blank, nothing was requested
    Skipped,
}

/// The recipe on screen together with its serving counter
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDetail {
    recipe: Recipe,
    servings: Servings,
}

impl RecipeDetail {
    pub fn new(recipe: Recipe) -> Self {
        let servings = Servings::new(recipe.servings);
        Self { recipe, servings }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn servings(&self) -> &Servings {
        &self.servings
    }

    pub fn scaled_quantities(&self) -> Vec<Option<f64>> {
        self.servings.scaled(&self.recipe.ingredients)
    }
}

/// A search that has been started but not applied
#[derive(Debug, Clone)]
pub struct PendingSearch {
    token: RequestToken,
    keyword: String,
}

impl PendingSearch {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub async fn run(self, api: &dyn RecipeApi) -> SearchOutcome {
        let result = api.search(&self.keyword).await;
        SearchOutcome {
            token: self.token,
            result,
        }
    }
}

#[derive(Debug)]
pub struct SearchOutcome {
    token: RequestToken,
    result: Result<SearchResults, RecipeError>,
}

/// A recipe load that has been started but not applied
#[derive(Debug, Clone)]
pub struct PendingRecipe {
    token: RequestToken,
    id: String,
}

impl PendingRecipe {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub async fn run(self, api: &dyn RecipeApi) -> RecipeOutcome {
        let result = api.recipe(&self.id).await;
        RecipeOutcome {
            token: self.token,
            result,
        }
    }
}

#[derive(Debug)]
pub struct RecipeOutcome {
    token: RequestToken,
    result: Result<Recipe, RecipeError>,
}

/// Parse a `#<id>` URL fragment
pub fn recipe_id_from_fragment(fragment: &str) -> Option<&str> {
    let id = fragment.trim().trim_start_matches('#').trim();
    (!id.is_empty()).then_some(id)
}

pub struct RecipeApp {
    api: Arc<dyn RecipeApi>,
    bookmarks: Bookmarks,
    page_size: usize,
    results: SearchResults,
    pagination: Option<Pagination>,
    detail: Option<RecipeDetail>,
    selected: Option<String>,
    requests: RequestTracker,
    messages: HashMap<Region, InfoMessage>,
}

impl RecipeApp {
    pub fn new(api: Arc<dyn RecipeApi>, bookmarks: Bookmarks, page_size: usize) -> Self {
        Self {
            api,
            bookmarks,
            page_size: page_size.max(1),
            results: SearchResults::default(),
            pagination: None,
            detail: None,
            selected: None,
            requests: RequestTracker::default(),
            messages: HashMap::new(),
        }
    }

    pub fn builder() -> RecipeAppBuilder {
        RecipeAppBuilder::default()
    }

    /// Wire the app to the configured API and on-disk saved recipes
    pub fn from_config(config: &AppConfig) -> Result<Self, RecipeError> {
        let client = ForkifyClient::from_config(&config.api)?;
        let storage = FileStorage::new(config.storage.resolved_dir());
        debug!("Saved recipes live in {}", storage.dir().display());
        let bookmarks = Bookmarks::load(Box::new(storage), config.storage.key.clone())?;
        Ok(Self::new(Arc::new(client), bookmarks, config.items_per_page))
    }

    pub fn api(&self) -> Arc<dyn RecipeApi> {
        Arc::clone(&self.api)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    // ---- status lines ----

    /// The status line of `region`, if it has one
    pub fn message(&self, region: Region) -> Option<InfoMessage> {
        if let Some(message) = self.messages.get(&region) {
            return Some(message.clone());
        }
        (region == Region::Saved && self.bookmarks.is_empty())
            .then(|| InfoMessage::info(NO_SAVED_MESSAGE))
    }

    fn show(&mut self, region: Region, message: InfoMessage) {
        self.messages.insert(region, message);
    }

    fn clear(&mut self, region: Region) {
        self.messages.remove(&region);
    }

    // ---- search & pagination ----

    /// Start a search; a blank keyword starts nothing and changes nothing
    pub fn begin_search(&mut self, keyword: &str) -> Option<PendingSearch> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return None;
        }

        let token = self.requests.issue(Channel::Search);
        self.show(Region::Results, InfoMessage::info(SEARCHING_MESSAGE));
        Some(PendingSearch {
            token,
            keyword: keyword.to_string(),
        })
    }

    /// Apply a finished search
    ///
    /// Success replaces the results and goes back to the first page. Failure
    /// shows the error in the results region and keeps what was there.
    pub fn finish_search(&mut self, outcome: SearchOutcome) -> Result<Outcome, RecipeError> {
        if !self.requests.is_current(outcome.token) {
            debug!("Dropping superseded search response");
            return Ok(Outcome::Stale);
        }

        match outcome.result {
            Ok(results) => {
                info!(
                    "Search '{}' returned {} recipes",
                    results.keyword,
                    results.recipes.len()
                );
                self.pagination = Pagination::first(results.recipes.len(), self.page_size);
                self.results = results;
                self.clear(Region::Results);
                Ok(Outcome::Applied)
            }
            Err(e) => {
                warn!("Search failed: {}", e);
                self.show(Region::Results, InfoMessage::error(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn search(&mut self, keyword: &str) -> Result<Outcome, RecipeError> {
        let Some(pending) = self.begin_search(keyword) else {
            return Ok(Outcome::Skipped);
        };
        let api = self.api();
        let outcome = pending.run(api.as_ref()).await;
        self.finish_search(outcome)
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// The results on the current page
    pub fn visible_results(&self) -> &[RecipePreview] {
        match &self.pagination {
            Some(page) => page.slice(&self.results.recipes),
            None => &[],
        }
    }

    /// Move to the next page, returning whether there was one
    pub fn next_page(&mut self) -> bool {
        match self.pagination.and_then(|page| page.next()) {
            Some(next) => {
                self.pagination = Some(next);
                true
            }
            None => false,
        }
    }

    /// Move to the previous page, returning whether there was one
    pub fn prev_page(&mut self) -> bool {
        match self.pagination.and_then(|page| page.prev()) {
            Some(prev) => {
                self.pagination = Some(prev);
                true
            }
            None => false,
        }
    }

    // ---- recipe detail ----

    /// Start loading a recipe and select it
    pub fn begin_open(&mut self, id: &str) -> Option<PendingRecipe> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }

        let token = self.requests.issue(Channel::Detail);
        self.selected = Some(id.to_string());
        self.detail = None;
        self.show(Region::Detail, InfoMessage::info(LOADING_MESSAGE));
        Some(PendingRecipe {
            token,
            id: id.to_string(),
        })
    }

    pub fn finish_open(&mut self, outcome: RecipeOutcome) -> Result<Outcome, RecipeError> {
        if !self.requests.is_current(outcome.token) {
            debug!("Dropping superseded recipe response");
            return Ok(Outcome::Stale);
        }

        match outcome.result {
            Ok(recipe) => {
                info!("Showing recipe {} ({})", recipe.id, recipe.title);
                self.detail = Some(RecipeDetail::new(recipe));
                self.clear(Region::Detail);
                Ok(Outcome::Applied)
            }
            Err(e) => {
                warn!("Loading recipe failed: {}", e);
                self.show(Region::Detail, InfoMessage::error(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn open_recipe(&mut self, id: &str) -> Result<Outcome, RecipeError> {
        let Some(pending) = self.begin_open(id) else {
            return Ok(Outcome::Skipped);
        };
        let api = self.api();
        let outcome = pending.run(api.as_ref()).await;
        self.finish_open(outcome)
    }

    /// Open the recipe named by a `#<id>` fragment, as on page load
    pub async fn open_fragment(&mut self, fragment: &str) -> Result<Outcome, RecipeError> {
        match recipe_id_from_fragment(fragment) {
            Some(id) => {
                let id = id.to_string();
                self.open_recipe(&id).await
            }
            None => Ok(Outcome::Skipped),
        }
    }

    /// The URL fragment for the selected recipe
    pub fn fragment(&self) -> Option<String> {
        self.selected.as_ref().map(|id| format!("#{}", id))
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn detail(&self) -> Option<&RecipeDetail> {
        self.detail.as_ref()
    }

    // ---- servings ----

    pub fn increase_servings(&mut self) -> Option<u32> {
        self.detail
            .as_mut()
            .map(|detail| detail.servings.increment())
    }

    /// Decrease servings; at one serving this does nothing
    pub fn decrease_servings(&mut self) -> Option<u32> {
        self.detail
            .as_mut()
            .map(|detail| detail.servings.decrement())
    }

    pub fn set_servings(&mut self, servings: u32) -> Option<u32> {
        self.detail
            .as_mut()
            .map(|detail| detail.servings.set(servings))
    }

    pub fn scaled_quantities(&self) -> Vec<Option<f64>> {
        self.detail
            .as_ref()
            .map(RecipeDetail::scaled_quantities)
            .unwrap_or_default()
    }

    // ---- bookmarks ----

    pub fn bookmarks(&self) -> &Bookmarks {
        &self.bookmarks
    }

    /// Save or unsave the recipe on screen; `None` when nothing is open
    pub fn toggle_bookmark(&mut self) -> Result<Option<SavedState>, RecipeError> {
        let Some(detail) = &self.detail else {
            return Ok(None);
        };
        let recipe = detail.recipe.clone();
        self.toggle_bookmark_for(&recipe).map(Some)
    }

    pub fn toggle_bookmark_for(&mut self, recipe: &Recipe) -> Result<SavedState, RecipeError> {
        match self.bookmarks.toggle(recipe) {
            Ok(state) => {
                self.clear(Region::Saved);
                Ok(state)
            }
            Err(e) => {
                warn!("Updating saved recipes failed: {}", e);
                self.show(Region::Saved, InfoMessage::error(e.to_string()));
                Err(e)
            }
        }
    }

    /// Saved state of the recipe on screen
    pub fn saved_state(&self) -> Option<SavedState> {
        self.detail
            .as_ref()
            .map(|detail| self.bookmarks.state_of(&detail.recipe.id))
    }

    // ---- upload ----

    /// Validate and upload a user recipe, then save and show it
    ///
    /// A form that fails validation is reported in the upload region and
    /// never sent.
    pub async fn submit_recipe(&mut self, form: &RecipeForm) -> Result<Recipe, RecipeError> {
        let new_recipe = match form.validate() {
            Ok(recipe) => recipe,
            Err(e) => {
                self.show(Region::Upload, InfoMessage::error(e.to_string()));
                return Err(e);
            }
        };

        self.show(Region::Upload, InfoMessage::info(UPLOADING_MESSAGE));
        let api = self.api();
        let recipe = match api.upload(&new_recipe).await {
            Ok(recipe) => recipe,
            Err(e) => {
                warn!("Upload failed: {}", e);
                self.show(Region::Upload, InfoMessage::error(e.to_string()));
                return Err(e);
            }
        };
        info!("Uploaded recipe {} ({})", recipe.id, recipe.title);
        self.show(Region::Upload, InfoMessage::info(UPLOADED_MESSAGE));

        if let Err(e) = self.bookmarks.save(&recipe) {
            warn!("Could not save uploaded recipe: {}", e);
            self.show(Region::Saved, InfoMessage::error(e.to_string()));
        }

        // Any recipe still loading would replace the one just uploaded
        self.requests.issue(Channel::Detail);
        self.selected = Some(recipe.id.clone());
        self.detail = Some(RecipeDetail::new(recipe.clone()));
        self.clear(Region::Detail);
        Ok(recipe)
    }

    // ---- rendering ----

    pub fn render_results(&self) -> String {
        preview_list(
            self.visible_results(),
            PREVIEW_ITEM_CLASS,
            self.selected_id(),
        )
    }

    pub fn render_saved(&self) -> String {
        let previews: Vec<RecipePreview> = self
            .bookmarks
            .recipes()
            .iter()
            .map(RecipePreview::from)
            .collect();
        preview_list(&previews, SAVED_ITEM_CLASS, self.selected_id())
    }

    pub fn render_detail(&self) -> Option<String> {
        self.detail.as_ref().map(|detail| {
            recipe_detail(
                &detail.recipe,
                &detail.servings,
                self.bookmarks.state_of(&detail.recipe.id),
            )
        })
    }
}
