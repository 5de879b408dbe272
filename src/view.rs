use std::fmt::Write;

use crate::model::Recipe;

pub const EMPTY_LISTING: &str = "No recipes yet.";
pub const NOT_FOUND: &str = "Recipe not found.";

/// Render the home listing: id and title, then the summary.
pub fn render_listing(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return format!("{}\n", EMPTY_LISTING);
    }

    let mut out = String::new();
    for recipe in recipes {
        let _ = writeln!(out, "#{}  {}", recipe.id, recipe.title);
        let _ = writeln!(out, "    {}", recipe.summary);
        out.push('\n');
    }
    out
}

/// Render a single recipe with its ingredients and numbered steps.
pub fn render_detail(recipe: &Recipe) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", recipe.title);
    let _ = writeln!(out, "{}", "=".repeat(recipe.title.chars().count()));
    let _ = writeln!(out, "{}", recipe.summary);
    let _ = writeln!(out, "Image: {}", recipe.image);

    out.push_str("\nIngredients\n");
    for item in &recipe.ingredients {
        let _ = writeln!(out, "  - {}", item);
    }

    out.push_str("\nInstructions\n");
    for (index, step) in recipe.instructions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", index + 1, step);
    }

    out.push_str("\nBack to Recipes: recipe-box list\n");
    out
}

/// Empty state shown for an unknown id
pub fn render_not_found() -> String {
    format!("{}\nBack to Home: recipe-box list\n", NOT_FOUND)
}
