use pantry_engine::{LayoutItem, Measure, MeasureMode};

use crate::presentation::view_models::RecipeViewModel;
use crate::presentation::views::tui::card_height;

/// A recipe card as the layout engine sees it
pub struct CardItem<'a> {
    pub model: &'a RecipeViewModel,
    pub expanded: bool,
}

impl LayoutItem for CardItem<'_> {
    type Key = u32;

    fn layout_key(&self) -> u32 {
        self.model.id
    }

    fn is_expanded(&self) -> bool {
        self.expanded
    }
}

/// Row count of a card wrapped at a fixed text width
pub struct TextMeasure {
    width: usize,
}

impl TextMeasure {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl<'a> Measure<CardItem<'a>> for TextMeasure {
    fn measure(&self, item: &CardItem<'a>, mode: MeasureMode) -> f64 {
        let expanded = item.expanded && mode == MeasureMode::AsIs;
        f64::from(card_height(item.model, self.width, expanded))
    }
}
