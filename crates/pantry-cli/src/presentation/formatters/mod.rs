pub mod palette;
pub mod text;

pub use palette::{CATEGORY_PALETTE, palette_color};
pub use text::{amount_and_name, capitalize, match_count_label, recipe_count_label, wrap};
