use serde::Serialize;

use super::recipe::IngredientLineViewModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartEntryViewModel {
    pub id: u32,
    pub title: String,
    /// Ingredients still to buy; empty when `all_set`
    pub items: Vec<IngredientLineViewModel>,
    pub all_set: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShoppingListViewModel {
    /// Newest first
    pub entries: Vec<CartEntryViewModel>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copied_to: Option<String>,
}
