// Engine module - pure catalog processing (filtering, card layout, shopping list)
// This layer sits between the catalog types and the runtime coordinator

pub mod cart;
pub mod filter;
pub mod layout;

pub use cart::{ALL_SET_LINE, Cart, CartEntry, CartItemView, CartLines};
pub use filter::{FilteredRecipe, filter_recipes};
pub use layout::{
    Column, ColumnAssignment, LayoutEngine, LayoutItem, LayoutTuning, Measure, MeasureMode,
    RelayoutGate,
};
