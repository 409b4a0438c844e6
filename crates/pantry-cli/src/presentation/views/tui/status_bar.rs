use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::status_level_to_color;
use crate::presentation::view_models::StatusBarViewModel;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(inner);

        let mut spans = vec![Span::raw(self.model.recipe_count.as_str())];
        if let Some(locale) = &self.model.locale {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(locale.as_str()));
        }
        spans.push(Span::raw(" | "));
        spans.push(Span::raw(self.model.view_mode.as_str()));
        if let Some(loading) = &self.model.loading {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                loading.as_str(),
                Style::default().fg(Color::Cyan),
            ));
        }
        if let Some((message, level)) = &self.model.toast {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                message.as_str(),
                Style::default().fg(status_level_to_color(*level)),
            ));
        }
        Paragraph::new(Line::from(spans)).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help = Line::from(vec![
            Span::styled("[Tab]", key),
            Span::raw("pane "),
            Span::styled("[Space]", key),
            Span::raw("toggle "),
            Span::styled("[Enter]", key),
            Span::raw("expand "),
            Span::styled("[a/x]", key),
            Span::raw("cart "),
            Span::styled("[c]", key),
            Span::raw("copy "),
            Span::styled("[d]", key),
            Span::raw("clear "),
            Span::styled("[v]", key),
            Span::raw("view "),
            Span::styled("[l]", key),
            Span::raw("locale "),
            Span::styled("[q]", key),
            Span::raw("uit"),
        ]);
        Paragraph::new(help).render(chunks[1], buf);
    }
}
