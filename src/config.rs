use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::builder::PLACEHOLDER_IMAGE;
use crate::store::DEFAULT_STORAGE_KEY;

/// Runtime settings for the recipe catalog
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Directory holding the storage slots
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Key of the slot holding the recipe array
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Image used when a recipe is added without one
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
    /// Static JSON document to seed from instead of the bundled data
    #[serde(default)]
    pub seed_url: Option<String>,
    /// Timeout for the seed fetch in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
            placeholder_image: default_placeholder_image(),
            seed_url: None,
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    PathBuf::from(".recipe-box")
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_placeholder_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BOX__ prefix
    /// 2. recipe-box.toml in the current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BOX__STORAGE_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_settings("recipe-box")
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

const ENV_PREFIX: &str = "RECIPE_BOX";

/// Load settings from `<file_stem>.toml` (optional) and the environment.
pub fn load_settings(file_stem: &str) -> Result<Settings, ConfigError> {
    load_settings_with_prefix(file_stem, ENV_PREFIX)
}

fn load_settings_with_prefix(file_stem: &str, env_prefix: &str) -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(file_stem).required(false))
        // Use double underscore after the prefix: RECIPE_BOX__DATA_DIR
        .add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_default_values() {
        let settings = Settings::default();
        assert_eq!(settings.data_dir, PathBuf::from(".recipe-box"));
        assert_eq!(settings.storage_key, "recipes");
        assert_eq!(settings.placeholder_image, PLACEHOLDER_IMAGE);
        assert!(settings.seed_url.is_none());
        assert_eq!(settings.fetch_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let stem = dir.path().join("absent");

        let settings = load_settings(stem.to_str().unwrap()).unwrap();
        assert_eq!(settings.storage_key, "recipes");
        assert_eq!(settings.placeholder_image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_file_values_and_env_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("box.toml");
        fs::write(
            &path,
            "storage_key = \"cookbook\"\nseed_url = \"http://localhost/data.json\"\n",
        )
        .unwrap();

        // Separate prefix from tests that read RECIPE_BOX__* concurrently
        env::set_var("RECIPE_BOX_OVERRIDE_TEST__FETCH_TIMEOUT_SECS", "5");
        let stem = dir.path().join("box");
        let settings =
            load_settings_with_prefix(stem.to_str().unwrap(), "RECIPE_BOX_OVERRIDE_TEST").unwrap();
        env::remove_var("RECIPE_BOX_OVERRIDE_TEST__FETCH_TIMEOUT_SECS");

        assert_eq!(settings.storage_key, "cookbook");
        assert_eq!(settings.seed_url.as_deref(), Some("http://localhost/data.json"));
        assert_eq!(settings.fetch_timeout_secs, 5);
    }
}
