use std::collections::BTreeSet;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

use super::pane_border;
use crate::presentation::view_models::IngredientGroupViewModel;

/// One row of the ingredient panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRow<'a> {
    Group(&'a str),
    Ingredient(&'a str),
}

/// Group headers interleaved with their ingredients
pub fn filter_rows(groups: &[IngredientGroupViewModel]) -> Vec<FilterRow<'_>> {
    groups
        .iter()
        .flat_map(|group| {
            std::iter::once(FilterRow::Group(group.title.as_str())).chain(
                group
                    .ingredients
                    .iter()
                    .map(|name| FilterRow::Ingredient(name.as_str())),
            )
        })
        .collect()
}

pub struct FilterPanelView<'a> {
    groups: &'a [IngredientGroupViewModel],
    checked: &'a BTreeSet<String>,
    /// Index among ingredient rows, headers not counted
    cursor: usize,
    focused: bool,
}

impl<'a> FilterPanelView<'a> {
    pub fn new(
        groups: &'a [IngredientGroupViewModel],
        checked: &'a BTreeSet<String>,
        cursor: usize,
        focused: bool,
    ) -> Self {
        Self {
            groups,
            checked,
            cursor,
            focused,
        }
    }
}

impl<'a> Widget for FilterPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.checked.is_empty() {
            "Ingredients".to_string()
        } else {
            format!("Ingredients ({})", self.checked.len())
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(pane_border(self.focused));

        let rows = filter_rows(self.groups);
        let mut selected_row = None;
        let mut ingredient_index = 0;

        let items: Vec<ListItem> = rows
            .iter()
            .enumerate()
            .map(|(row, entry)| match entry {
                FilterRow::Group(title) => ListItem::new(Line::from(Span::styled(
                    *title,
                    Style::default().add_modifier(Modifier::BOLD),
                ))),
                FilterRow::Ingredient(name) => {
                    if ingredient_index == self.cursor {
                        selected_row = Some(row);
                    }
                    ingredient_index += 1;
                    let mark = if self.checked.contains(*name) { "[x]" } else { "[ ]" };
                    ListItem::new(format!(" {} {}", mark, name))
                }
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(if self.focused {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            });

        let mut state = ListState::default().with_selected(selected_row);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
