pub mod builder;
pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod parser;
pub mod seed;
pub mod storage;
pub mod store;
pub mod validation;
pub mod view;

use log::{debug, error, info};

pub use builder::{RecipeDraft, FALLBACK_SUMMARY, PLACEHOLDER_IMAGE};
pub use config::Settings;
pub use error::{AddRecipeError, StoreError};
pub use id::{IdGenerator, MonotonicIds};
pub use model::Recipe;
pub use parser::parse_list;
pub use seed::{bundled_seed, fetch_seed, BundledSeed, RemoteSeed, SeedSource};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{LocalRecipeStore, RecipeStore};
pub use validation::{validate, Field, RecipeForm, ValidationErrors};

/// Submit the form and, if it is valid, store the new recipe at the front of
/// the collection.
///
/// On validation failure the form is left with every field touched and the
/// store is not written.
pub fn add_recipe<S, G>(
    store: &S,
    ids: &mut G,
    form: &mut RecipeForm,
    placeholder_image: &str,
) -> Result<Recipe, AddRecipeError>
where
    S: RecipeStore + ?Sized,
    G: IdGenerator + ?Sized,
{
    let draft = form.submit().map_err(AddRecipeError::Invalid)?;
    let recipe = draft.into_recipe_with_placeholder(ids.next_id(), placeholder_image);

    store.prepend(recipe.clone())?;
    info!("Recipe {} added", recipe.id);
    Ok(recipe)
}

/// Open the file-backed store described by `settings`.
pub fn open_store(settings: &Settings, seed: Vec<Recipe>) -> LocalRecipeStore<FileStorage> {
    LocalRecipeStore::new(FileStorage::new(settings.data_dir.clone()), seed)
        .with_key(settings.storage_key.clone())
}

/// Open the file-backed store, resolving the seed collection only when the
/// slot is missing or corrupt.
///
/// A filled slot never triggers a seed fetch.
pub async fn open_seeded_store(settings: &Settings) -> LocalRecipeStore<FileStorage> {
    let store = open_store(settings, Vec::new());
    if !store.needs_seed() {
        debug!("Slot '{}' already filled, skipping seed", store.key());
        return store;
    }

    let seed = load_seed(settings).await;
    store.with_seed(seed)
}

/// Resolve the seed collection: the configured URL if any, otherwise the
/// bundled data.
pub async fn load_seed(settings: &Settings) -> Vec<Recipe> {
    let source: Box<dyn SeedSource> = match &settings.seed_url {
        Some(url) => match RemoteSeed::new(url.clone(), Some(settings.fetch_timeout())) {
            Ok(remote) => Box::new(remote),
            Err(e) => {
                error!("Failed to create HTTP client: {}", e);
                return Vec::new();
            }
        },
        None => Box::new(BundledSeed),
    };

    info!("Loading seed recipes from {}", source.source_name());
    source.load().await
}

/// Largest id in a collection, or 0 when empty
pub fn last_id(recipes: &[Recipe]) -> u64 {
    recipes.iter().map(|recipe| recipe.id).max().unwrap_or(0)
}
