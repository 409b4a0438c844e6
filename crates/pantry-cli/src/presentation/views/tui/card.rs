//! Recipe card text.
//!
//! The same line builder feeds both drawing and measurement, so a card's
//! measured height is exactly the number of rows it occupies on screen.

use std::collections::HashMap;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::slot_color;
use crate::presentation::formatters::{amount_and_name, match_count_label, wrap};
use crate::presentation::view_models::RecipeViewModel;
use crate::presentation::views::console::meta_line;

/// Category label to palette slot
pub type CategoryColors = HashMap<String, usize>;

const CHIP_GAP: usize = 2;
const ADD_LABEL: &str = "[ Add to cart ]";
const ADDED_LABEL: &str = "[ Added ]";

/// Rows of one card at `width` text columns, borders excluded
pub fn card_lines(
    recipe: &RecipeViewModel,
    width: usize,
    expanded: bool,
    in_cart: bool,
    colors: &CategoryColors,
) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut lines = category_chips(&recipe.categories, width, colors);

    let title = Style::default().add_modifier(Modifier::BOLD);
    lines.extend(wrap(&recipe.name, width).into_iter().map(|l| Line::styled(l, title)));

    if let Some(count) = recipe.matching_count {
        lines.push(Line::styled(
            match_count_label(count),
            Style::default().fg(Color::Green),
        ));
    }

    if !recipe.description.trim().is_empty() {
        let dim = Style::default().fg(Color::Gray);
        lines.extend(
            wrap(&recipe.description, width)
                .into_iter()
                .map(|l| Line::styled(l, dim)),
        );
    }

    if expanded {
        expanded_lines(&mut lines, recipe, width, in_cart);
    }

    lines
}

pub fn card_height(recipe: &RecipeViewModel, width: usize, expanded: bool) -> u16 {
    let rows = card_lines(recipe, width, expanded, false, &CategoryColors::new()).len();
    u16::try_from(rows + 2).unwrap_or(u16::MAX)
}

fn expanded_lines(
    lines: &mut Vec<Line<'static>>,
    recipe: &RecipeViewModel,
    width: usize,
    in_cart: bool,
) {
    let header = Style::default().add_modifier(Modifier::UNDERLINED);

    let meta = meta_line(recipe);
    if !meta.is_empty() {
        lines.push(Line::default());
        lines.extend(wrap(&meta, width).into_iter().map(Line::from));
    }

    if !recipe.ingredients.is_empty() {
        lines.push(Line::default());
        lines.push(Line::styled("Ingredients", header));
        for ingredient in &recipe.ingredients {
            let text = format!("• {}", amount_and_name(&ingredient.amount, &ingredient.name));
            lines.extend(wrap(&text, width).into_iter().map(Line::from));
        }
    }

    if !recipe.instructions.is_empty() {
        lines.push(Line::default());
        lines.push(Line::styled("Instructions", header));
        for (i, step) in recipe.instructions.iter().enumerate() {
            let text = format!("{}. {}", i + 1, step);
            lines.extend(wrap(&text, width).into_iter().map(Line::from));
        }
    }

    lines.push(Line::default());
    if in_cart {
        lines.push(Line::styled(ADDED_LABEL, Style::default().fg(Color::DarkGray)));
    } else {
        lines.push(Line::styled(
            ADD_LABEL,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    }
}

/// Chips packed left to right; a chip wider than the card gets its own row
fn category_chips(
    categories: &[String],
    width: usize,
    colors: &CategoryColors,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for category in categories {
        let len = UnicodeWidthStr::width(category.as_str());
        if used > 0 && used + CHIP_GAP + len > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if used > 0 {
            spans.push(Span::raw(" ".repeat(CHIP_GAP)));
            used += CHIP_GAP;
        }

        let style = match colors.get(category) {
            Some(slot) => Style::default().fg(Color::Black).bg(slot_color(*slot)),
            None => Style::default().add_modifier(Modifier::REVERSED),
        };
        spans.push(Span::styled(category.clone(), style));
        used += len;
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}
