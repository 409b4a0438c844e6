use crate::types::ViewArg;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive recipe browser (default)")]
    Browse {
        /// Card arrangement for this session
        #[arg(long)]
        view: Option<ViewArg>,
    },

    #[command(about = "List recipes matching a category and ingredients")]
    Recipes {
        #[arg(long, default_value = "all")]
        category: String,

        /// Ingredient you already have; repeatable
        #[arg(long = "ingredient", short = 'i')]
        ingredients: Vec<String>,
    },

    #[command(about = "Show one recipe in full")]
    Show { id: u32 },

    #[command(about = "List categories and ingredients grouped by type")]
    Facets,

    #[command(about = "List locales with a catalog")]
    Locales,

    #[command(about = "Shopping list operations")]
    Cart {
        #[command(subcommand)]
        command: CartCommand,
    },
}

#[derive(Subcommand)]
pub enum CartCommand {
    #[command(about = "Print the shopping list for the given recipes")]
    Export {
        /// Recipe id to add, in order; repeatable
        #[arg(long = "recipe", short = 'r', required = true)]
        recipes: Vec<u32>,

        /// Ingredient you already have; left off the list
        #[arg(long = "ingredient", short = 'i')]
        ingredients: Vec<String>,

        /// Also copy the list to the clipboard
        #[arg(long)]
        copy: bool,
    },
}
