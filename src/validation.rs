use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use log::debug;

use crate::builder::RecipeDraft;
use crate::parser::parse_list;

pub const TITLE_REQUIRED: &str = "Please enter a recipe title.";
pub const INGREDIENTS_REQUIRED: &str =
    "Please list at least 2 ingredients (comma or new line separated).";
pub const STEPS_REQUIRED: &str = "Please add at least one step.";

pub const MIN_INGREDIENTS: usize = 2;
pub const MIN_STEPS: usize = 1;

/// Form fields that carry validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Ingredients,
    Steps,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Ingredients, Field::Steps];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Ingredients => "ingredients",
            Field::Steps => "steps",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-keyed validation messages. Empty means the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.values().copied().collect();
        f.write_str(&messages.join(" "))
    }
}

/// Check the three validated inputs of the add-recipe form.
///
/// Every rule is evaluated, so a completely empty form reports all three
/// fields at once.
pub fn validate(title: &str, ingredients_text: &str, steps_text: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if title.trim().is_empty() {
        errors.insert(Field::Title, TITLE_REQUIRED);
    }
    if parse_list(ingredients_text).len() < MIN_INGREDIENTS {
        errors.insert(Field::Ingredients, INGREDIENTS_REQUIRED);
    }
    if parse_list(steps_text).len() < MIN_STEPS {
        errors.insert(Field::Steps, STEPS_REQUIRED);
    }

    errors
}

/// State of the add-recipe form.
///
/// Errors are recomputed whenever an input changes. A field's error is only
/// shown once the field has been touched, but [`RecipeForm::is_valid`] always
/// looks at the full error set.
#[derive(Debug, Clone)]
pub struct RecipeForm {
    title: String,
    image_url: String,
    ingredients_text: String,
    steps_text: String,
    touched: BTreeSet<Field>,
    errors: ValidationErrors,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeForm {
    pub fn new() -> Self {
        let mut form = RecipeForm {
            title: String::new(),
            image_url: String::new(),
            ingredients_text: String::new(),
            steps_text: String::new(),
            touched: BTreeSet::new(),
            errors: ValidationErrors::default(),
        };
        form.revalidate();
        form
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.revalidate();
    }

    /// The image URL is optional and has no validation rule.
    pub fn set_image_url(&mut self, image_url: impl Into<String>) {
        self.image_url = image_url.into();
    }

    pub fn set_ingredients(&mut self, text: impl Into<String>) {
        self.ingredients_text = text.into();
        self.revalidate();
    }

    pub fn set_steps(&mut self, text: impl Into<String>) {
        self.steps_text = text.into();
        self.revalidate();
    }

    /// Mark a field as interacted with (e.g. it lost focus).
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Full error set, including fields the user has not touched yet
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Error to display for a field, if it is both invalid and touched
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Attempt a submission.
    ///
    /// Touches every field so all errors become visible, then either returns
    /// the parsed draft or the current error set.
    pub fn submit(&mut self) -> Result<RecipeDraft, ValidationErrors> {
        self.touched.extend(Field::ALL);
        self.revalidate();

        if !self.errors.is_empty() {
            debug!("Submission rejected with {} error(s)", self.errors.len());
            return Err(self.errors.clone());
        }

        Ok(RecipeDraft::from_text(
            &self.title,
            &self.image_url,
            &self.ingredients_text,
            &self.steps_text,
        ))
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.title, &self.ingredients_text, &self.steps_text);
    }
}
