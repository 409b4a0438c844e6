use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs, Widget},
};

use super::{pane_border, slot_color};
use crate::presentation::view_models::CategoryTabViewModel;

pub struct CategoryTabsView<'a> {
    tabs: &'a [CategoryTabViewModel],
    active: usize,
    focused: bool,
}

impl<'a> CategoryTabsView<'a> {
    pub fn new(tabs: &'a [CategoryTabViewModel], active: usize, focused: bool) -> Self {
        Self {
            tabs,
            active,
            focused,
        }
    }
}

impl<'a> Widget for CategoryTabsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = self
            .tabs
            .iter()
            .map(|tab| {
                let style = match tab.color {
                    Some(slot) => Style::default().fg(slot_color(slot)),
                    None => Style::default(),
                };
                Line::from(Span::styled(tab.title.as_str(), style))
            })
            .collect();

        Tabs::new(titles)
            .block(
                Block::default()
                    .title("Categories")
                    .borders(Borders::ALL)
                    .border_style(pane_border(self.focused)),
            )
            .select(self.active)
            .highlight_style(
                Style::default()
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    .fg(Color::White),
            )
            .render(area, buf);
    }
}
