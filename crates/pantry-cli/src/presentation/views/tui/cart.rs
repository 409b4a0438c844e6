use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::pane_border;
use crate::presentation::formatters::amount_and_name;
use crate::presentation::view_models::CartEntryViewModel;
use crate::presentation::views::console::EMPTY_CART_TEXT;
use pantry_engine::ALL_SET_LINE;

pub struct CartPanelView<'a> {
    entries: &'a [CartEntryViewModel],
    cursor: usize,
    focused: bool,
}

impl<'a> CartPanelView<'a> {
    pub fn new(entries: &'a [CartEntryViewModel], cursor: usize, focused: bool) -> Self {
        Self {
            entries,
            cursor,
            focused,
        }
    }
}

impl<'a> Widget for CartPanelView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Shopping list")
            .borders(Borders::ALL)
            .border_style(pane_border(self.focused));

        if self.entries.is_empty() {
            Paragraph::new(EMPTY_CART_TEXT)
                .style(Style::default().fg(Color::Gray))
                .block(block)
                .render(area, buf);
            return;
        }

        let mut selected_row = None;
        let mut items = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                items.push(ListItem::new(""));
            }
            if i == self.cursor {
                selected_row = Some(items.len());
            }
            items.push(ListItem::new(Line::from(Span::styled(
                entry.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))));

            if entry.all_set {
                items.push(ListItem::new(Span::styled(
                    ALL_SET_LINE,
                    Style::default().fg(Color::Green),
                )));
            } else {
                items.extend(entry.items.iter().map(|item| {
                    ListItem::new(format!("- {}", amount_and_name(&item.amount, &item.name)))
                }));
            }
        }

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
