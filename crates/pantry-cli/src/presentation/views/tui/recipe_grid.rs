use std::collections::{BTreeSet, HashMap};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::card::{CategoryColors, card_lines};
use super::pane_border;
use crate::presentation::view_models::RecipeViewModel;

/// A card's box on the scrollable canvas, relative to the pane's inner area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedCard {
    pub id: u32,
    pub x: u16,
    pub width: u16,
    pub top: u16,
    pub height: u16,
}

impl PlacedCard {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

pub struct RecipeGridView<'a> {
    pub placed: &'a [PlacedCard],
    pub cards: &'a [RecipeViewModel],
    pub index: &'a HashMap<u32, usize>,
    pub expanded: &'a BTreeSet<u32>,
    pub in_cart: &'a BTreeSet<u32>,
    pub colors: &'a CategoryColors,
    pub selected: Option<u32>,
    pub scroll: u16,
    pub focused: bool,
}

impl<'a> RecipeGridView<'a> {
    fn card_border(&self, id: u32) -> Style {
        if self.selected == Some(id) && self.focused {
            Style::default().fg(Color::Yellow)
        } else if self.selected == Some(id) {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl<'a> Widget for RecipeGridView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Recipes")
            .borders(Borders::ALL)
            .border_style(pane_border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.placed.is_empty() {
            Paragraph::new("No recipes match the current filters.")
                .style(Style::default().fg(Color::Gray))
                .render(inner, buf);
            return;
        }

        let view_bottom = self.scroll.saturating_add(inner.height);

        for card in self.placed {
            if card.bottom() <= self.scroll || card.top >= view_bottom {
                continue;
            }
            let Some(recipe) = self.index.get(&card.id).and_then(|&i| self.cards.get(i)) else {
                continue;
            };

            // Draw off-screen at full height, then copy the visible rows so
            // cards cut by the viewport edge keep their borders in place.
            let canvas = Rect::new(0, 0, card.width, card.height);
            let mut scratch = Buffer::empty(canvas);
            let lines = card_lines(
                recipe,
                usize::from(card.width.saturating_sub(2)),
                self.expanded.contains(&card.id),
                self.in_cart.contains(&card.id),
                self.colors,
            );
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(self.card_border(card.id)),
                )
                .render(canvas, &mut scratch);

            for row in 0..card.height {
                let Some(absolute) = card.top.checked_add(row) else {
                    break;
                };
                if absolute < self.scroll || absolute >= view_bottom {
                    continue;
                }
                let y = inner.y + (absolute - self.scroll);
                for col in 0..card.width {
                    let x = inner.x.saturating_add(card.x).saturating_add(col);
                    if x >= inner.right() {
                        break;
                    }
                    if let (Some(src), Some(dst)) =
                        (scratch.cell((col, row)), buf.cell_mut((x, y)))
                    {
                        *dst = src.clone();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast() -> RecipeViewModel {
        RecipeViewModel {
            id: 7,
            name: "Toast".to_string(),
            description: String::new(),
            image: String::new(),
            prep_time: String::new(),
            cook_time: String::new(),
            servings: String::new(),
            categories: Vec::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            matching_count: None,
        }
    }

    #[test]
    fn test_card_at_bottom_of_canvas_renders_without_overflow() {
        let cards = vec![toast()];
        let index = HashMap::from([(7, 0)]);
        let placed = [PlacedCard {
            id: 7,
            x: 0,
            width: 12,
            top: u16::MAX - 2,
            height: 5,
        }];
        let empty = BTreeSet::new();
        let colors = CategoryColors::new();

        let area = Rect::new(0, 0, 20, 8);
        let mut buf = Buffer::empty(area);
        RecipeGridView {
            placed: &placed,
            cards: &cards,
            index: &index,
            expanded: &empty,
            in_cart: &empty,
            colors: &colors,
            selected: None,
            scroll: u16::MAX - 3,
            focused: false,
        }
        .render(area, &mut buf);

        // Inner area starts at (1, 1); the card's top border sits one row down
        assert_eq!(buf[(1, 2)].symbol(), "┌");
        assert_eq!(buf[(2, 3)].symbol(), "T");
    }
}
