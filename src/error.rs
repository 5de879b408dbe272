use thiserror::Error;

use crate::validation::ValidationErrors;

/// Errors raised by the backing key-value storage and the recipe store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read or write a storage slot
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode the recipe collection
    #[error("Failed to serialize recipes: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Storage key cannot be mapped to a slot
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Errors returned by the add-recipe flow
#[derive(Error, Debug)]
pub enum AddRecipeError {
    /// One or more form fields failed validation
    #[error("Recipe is invalid: {0}")]
    Invalid(ValidationErrors),

    /// Recipe was valid but could not be persisted
    #[error("Failed to save recipe: {0}")]
    Store(#[from] StoreError),
}

