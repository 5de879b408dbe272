use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::debug;

use recipe_box::{
    add_recipe, fetch_seed, last_id, open_seeded_store, view, AddRecipeError, Field,
    MonotonicIds, RecipeForm, RecipeStore, Settings,
};

#[derive(Parser, Debug)]
#[command(name = "recipe-box", version, about = "A small local recipe catalog")]
struct Cli {
    /// Directory holding the stored recipes
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every recipe, newest first
    List {
        /// Show a static JSON document instead of the stored recipes
        #[arg(long)]
        remote: Option<String>,
    },
    /// Show one recipe
    Show {
        id: u64,
    },
    /// Add a new recipe
    Add {
        #[arg(long, default_value = "")]
        title: String,
        /// Optional image URL
        #[arg(long, default_value = "")]
        image: String,
        /// Comma or newline separated
        #[arg(long, default_value = "")]
        ingredients: String,
        /// One per line (or comma separated)
        #[arg(long, default_value = "")]
        steps: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let mut settings = Settings::load()?;
    if let Some(data_dir) = cli.data_dir {
        settings.data_dir = data_dir;
    }
    debug!("{:#?}", settings);

    match cli.command {
        Command::List { remote: Some(url) } => {
            let recipes = fetch_seed(&url, Some(settings.fetch_timeout())).await;
            print!("{}", view::render_listing(&recipes));
        }
        Command::List { remote: None } => {
            let store = open_seeded_store(&settings).await;
            print!("{}", view::render_listing(&store.load_all()));
        }
        Command::Show { id } => {
            let store = open_seeded_store(&settings).await;
            match store.find_by_id(id) {
                Some(recipe) => print!("{}", view::render_detail(&recipe)),
                None => print!("{}", view::render_not_found()),
            }
        }
        Command::Add {
            title,
            image,
            ingredients,
            steps,
        } => {
            let store = open_seeded_store(&settings).await;
            let mut ids = MonotonicIds::starting_after(last_id(&store.load_all()));

            let mut form = RecipeForm::new();
            form.set_title(title);
            form.set_image_url(image);
            form.set_ingredients(ingredients);
            form.set_steps(steps);

            match add_recipe(&store, &mut ids, &mut form, &settings.placeholder_image) {
                Ok(recipe) => println!("Recipe added! (id {})", recipe.id),
                Err(AddRecipeError::Invalid(_)) => {
                    for field in Field::ALL {
                        if let Some(message) = form.visible_error(field) {
                            eprintln!("{}: {}", field, message);
                        }
                    }
                    return Ok(ExitCode::FAILURE);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_comes_from_flag_only() {
        std::env::set_var("RECIPE_BOX_DATA_DIR", "/tmp/ignored");
        let cli = Cli::try_parse_from(["recipe-box", "show", "3"]).unwrap();
        std::env::remove_var("RECIPE_BOX_DATA_DIR");
        assert!(cli.data_dir.is_none());

        let cli = Cli::try_parse_from(["recipe-box", "--data-dir", "/tmp/box", "show", "3"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/box")));
        assert!(matches!(cli.command, Command::Show { id: 3 }));
    }
}
