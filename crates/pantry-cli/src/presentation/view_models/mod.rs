pub mod cart;
pub mod catalog;
pub mod common;
pub mod recipe;
pub mod result;
pub mod screen;

pub use cart::{CartEntryViewModel, ShoppingListViewModel};
pub use catalog::{
    CategoryTabViewModel, FacetsViewModel, IngredientGroupViewModel, LocaleEntryViewModel,
    LocaleListViewModel,
};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use recipe::{IngredientLineViewModel, RecipeListViewModel, RecipeViewModel};
pub use result::CommandResultViewModel;
pub use screen::StatusBarViewModel;

use std::fmt;

/// Bridge from a view model to the console view that prints it
pub trait CreateView {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a>;
}
