use log::{debug, info, warn};

use crate::error::StoreError;
use crate::model::Recipe;
use crate::storage::KeyValueStorage;

pub const DEFAULT_STORAGE_KEY: &str = "recipes";

/// Persistence capability for the recipe collection.
///
/// The collection is ordered newest-first; the only mutation is
/// [`RecipeStore::prepend`].
pub trait RecipeStore {
    /// Every recipe, newest first. Never fails: missing or corrupt data
    /// falls back to the seed collection.
    fn load_all(&self) -> Vec<Recipe>;

    /// Insert a recipe at the front of the collection and persist it.
    fn prepend(&self, recipe: Recipe) -> Result<(), StoreError>;

    /// Look a recipe up by id. `None` is an ordinary outcome.
    fn find_by_id(&self, id: u64) -> Option<Recipe> {
        self.load_all().into_iter().find(|recipe| recipe.id == id)
    }
}

enum Slot {
    Missing,
    Corrupt,
    Loaded(Vec<Recipe>),
}

/// A [`RecipeStore`] that keeps the whole collection as one JSON array in a
/// single storage slot.
#[derive(Debug)]
pub struct LocalRecipeStore<S> {
    storage: S,
    key: String,
    seed: Vec<Recipe>,
}

impl<S: KeyValueStorage> LocalRecipeStore<S> {
    pub fn new(storage: S, seed: Vec<Recipe>) -> Self {
        LocalRecipeStore {
            storage,
            key: DEFAULT_STORAGE_KEY.to_string(),
            seed,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replace the seed collection used when the slot is missing or corrupt.
    pub fn with_seed(mut self, seed: Vec<Recipe>) -> Self {
        self.seed = seed;
        self
    }

    /// Whether [`RecipeStore::load_all`] would fall back to the seed, i.e.
    /// the slot is missing, unreadable or corrupt.
    pub fn needs_seed(&self) -> bool {
        !matches!(self.read(), Slot::Loaded(_))
    }

    fn read(&self) -> Slot {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Slot::Missing,
            Err(e) => {
                warn!("Could not read storage slot '{}': {}", self.key, e);
                return Slot::Corrupt;
            }
        };

        match serde_json::from_str::<Vec<Recipe>>(&raw) {
            Ok(recipes) => Slot::Loaded(recipes),
            Err(e) => {
                warn!("Stored recipes under '{}' are corrupt: {}", self.key, e);
                Slot::Corrupt
            }
        }
    }

    fn write(&self, recipes: &[Recipe]) -> Result<(), StoreError> {
        let json = serde_json::to_string(recipes)?;
        self.storage.set(&self.key, &json)
    }
}

impl<S: KeyValueStorage> RecipeStore for LocalRecipeStore<S> {
    fn load_all(&self) -> Vec<Recipe> {
        match self.read() {
            Slot::Loaded(recipes) => {
                debug!("Loaded {} recipes from '{}'", recipes.len(), self.key);
                recipes
            }
            Slot::Missing => {
                info!(
                    "No stored recipes under '{}', seeding with {} recipes",
                    self.key,
                    self.seed.len()
                );
                if let Err(e) = self.write(&self.seed) {
                    warn!("Failed to persist seed recipes: {}", e);
                }
                self.seed.clone()
            }
            // Leave the stored value alone so it can still be recovered by hand
            Slot::Corrupt => self.seed.clone(),
        }
    }

    fn prepend(&self, recipe: Recipe) -> Result<(), StoreError> {
        // A missing or corrupt slot starts a fresh collection
        let mut recipes = match self.read() {
            Slot::Loaded(recipes) => recipes,
            Slot::Missing | Slot::Corrupt => Vec::new(),
        };

        info!("Adding recipe {} '{}'", recipe.id, recipe.title);
        recipes.insert(0, recipe);
        self.write(&recipes)
    }
}
