//! Ratatui widgets for the interactive browser.
//!
//! Views borrow view models and app state; they never mutate either.

pub mod card;
pub mod cart;
pub mod filter_panel;
pub mod recipe_grid;
pub mod status_bar;
pub mod tabs;

pub use card::{CategoryColors, card_height, card_lines};
pub use cart::CartPanelView;
pub use filter_panel::{FilterPanelView, FilterRow, filter_rows};
pub use recipe_grid::{PlacedCard, RecipeGridView};
pub use status_bar::StatusBarView;
pub use tabs::CategoryTabsView;

use crate::presentation::formatters::palette_color;
use crate::presentation::view_models::StatusLevel;
use ratatui::style::{Color, Style};

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

pub(crate) fn slot_color(slot: usize) -> Color {
    let (r, g, b) = palette_color(slot);
    Color::Rgb(r, g, b)
}

pub(crate) fn pane_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
