use std::fmt;

use crate::presentation::view_models::{CreateView, ShoppingListViewModel};

pub const EMPTY_CART_TEXT: &str = "Your shopping list is empty";

impl CreateView for ShoppingListViewModel {
    fn create_view<'a>(&'a self) -> Box<dyn fmt::Display + 'a> {
        Box::new(ShoppingListView::new(self))
    }
}

/// Prints the export text as-is so it can be piped
pub struct ShoppingListView<'a> {
    data: &'a ShoppingListViewModel,
}

impl<'a> ShoppingListView<'a> {
    pub fn new(data: &'a ShoppingListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ShoppingListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.entries.is_empty() {
            return writeln!(f, "{}", EMPTY_CART_TEXT);
        }
        writeln!(f, "{}", self.data.text)
    }
}
