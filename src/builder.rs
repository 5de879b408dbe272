use crate::model::Recipe;
use crate::parser::parse_list;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/800x500";
pub const FALLBACK_SUMMARY: &str = "A tasty recipe";
pub const SUMMARY_MAX_CHARS: usize = 120;

/// Parsed form input waiting for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    /// Trimmed image URL, empty when none was given
    pub image_url: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl RecipeDraft {
    /// Build a draft from the raw form text. Does not validate.
    pub fn from_text(title: &str, image_url: &str, ingredients_text: &str, steps_text: &str) -> Self {
        RecipeDraft {
            title: title.trim().to_string(),
            image_url: image_url.trim().to_string(),
            ingredients: parse_list(ingredients_text),
            instructions: parse_list(steps_text),
        }
    }

    /// Turn the draft into a stored record using the default placeholder image.
    pub fn into_recipe(self, id: u64) -> Recipe {
        self.into_recipe_with_placeholder(id, PLACEHOLDER_IMAGE)
    }

    pub fn into_recipe_with_placeholder(self, id: u64, placeholder: &str) -> Recipe {
        let summary = summarize(&self.instructions);
        let image = if self.image_url.is_empty() {
            placeholder.to_string()
        } else {
            self.image_url
        };

        Recipe {
            id,
            title: self.title,
            summary,
            image,
            ingredients: self.ingredients,
            instructions: self.instructions,
        }
    }
}

/// Join the steps with single spaces and cut to [`SUMMARY_MAX_CHARS`].
///
/// An empty result falls back to [`FALLBACK_SUMMARY`].
pub fn summarize(steps: &[String]) -> String {
    let summary: String = steps.join(" ").chars().take(SUMMARY_MAX_CHARS).collect();

    if summary.is_empty() {
        FALLBACK_SUMMARY.to_string()
    } else {
        summary
    }
}
