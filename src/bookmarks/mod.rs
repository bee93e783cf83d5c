mod storage;

pub use storage::{FileStorage, MemoryStorage, Storage};

use crate::model::Recipe;
use crate::RecipeError;
use log::{debug, info, warn};

/// Whether a recipe is in the saved list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedState {
    Saved,
    Unsaved,
}

impl SavedState {
    /// Label of the button that flips this state
    pub fn button_label(&self) -> &'static str {
        match self {
            SavedState::Saved => "Unsave",
            SavedState::Unsaved => "Save",
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, SavedState::Saved)
    }
}

/// The user's saved recipes, mirrored to a single storage key
///
/// Every mutation is written through before it returns. When the write
/// fails the in-memory list is restored, so the two never disagree.
pub struct Bookmarks {
    storage: Box<dyn Storage>,
    key: String,
    recipes: Vec<Recipe>,
}

impl std::fmt::Debug for Bookmarks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bookmarks")
            .field("key", &self.key)
            .field("recipes", &self.recipes.len())
            .finish()
    }
}

impl Bookmarks {
    /// Read the saved list from `storage`; a missing key means nothing is saved
    pub fn load(storage: Box<dyn Storage>, key: impl Into<String>) -> Result<Self, RecipeError> {
        let key = key.into();
        let mut recipes: Vec<Recipe> = match storage.get(&key)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };

        // Ids are unique; keep the first copy
        let stored = recipes.len();
        let mut seen = std::collections::HashSet::new();
        recipes.retain(|recipe| seen.insert(recipe.id.clone()));

        debug!("Loaded {} saved recipes from '{}'", recipes.len(), key);
        let mut bookmarks = Self {
            storage,
            key,
            recipes,
        };
        if bookmarks.recipes.len() < stored {
            warn!(
                "Dropped {} duplicate saved recipes from '{}'",
                stored - bookmarks.recipes.len(),
                bookmarks.key
            );
            bookmarks.persist()?;
        }
        Ok(bookmarks)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.recipes.iter().any(|recipe| recipe.id == id)
    }

    pub fn state_of(&self, id: &str) -> SavedState {
        if self.is_saved(id) {
            SavedState::Saved
        } else {
            SavedState::Unsaved
        }
    }

    /// Save the recipe if it is not saved, unsave it otherwise
    pub fn toggle(&mut self, recipe: &Recipe) -> Result<SavedState, RecipeError> {
        if self.is_saved(&recipe.id) {
            self.remove(&recipe.id)?;
            Ok(SavedState::Unsaved)
        } else {
            self.save(recipe)?;
            Ok(SavedState::Saved)
        }
    }

    /// Append the recipe; saving an already saved id changes nothing
    pub fn save(&mut self, recipe: &Recipe) -> Result<(), RecipeError> {
        if self.is_saved(&recipe.id) {
            return Ok(());
        }

        self.recipes.push(recipe.clone());
        if let Err(e) = self.persist() {
            self.recipes.pop();
            return Err(e);
        }

        info!("Saved recipe {} ({})", recipe.id, recipe.title);
        Ok(())
    }

    /// Remove by id, returning whether anything was removed
    pub fn remove(&mut self, id: &str) -> Result<bool, RecipeError> {
        let Some(index) = self.recipes.iter().position(|recipe| recipe.id == id) else {
            return Ok(false);
        };

        let removed = self.recipes.remove(index);
        if let Err(e) = self.persist() {
            self.recipes.insert(index, removed);
            return Err(e);
        }

        info!("Unsaved recipe {}", id);
        Ok(true)
    }

    fn persist(&mut self) -> Result<(), RecipeError> {
        if self.recipes.is_empty() {
            self.storage.remove(&self.key)?;
        } else {
            let json = serde_json::to_string(&self.recipes)?;
            self.storage.set(&self.key, &json)?;
        }
        Ok(())
    }
}
