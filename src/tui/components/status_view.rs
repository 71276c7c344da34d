//! Centered placeholder shown instead of list content: spinner while a store
//! is loading, the error message when it failed, or an empty-state note.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub enum StatusView<'a> {
    Loading { label: &'a str, frame: usize },
    Error(&'a str),
    Empty(&'a str),
}

impl StatusView<'_> {
    fn text(&self) -> (String, Style) {
        match self {
            StatusView::Loading { label, frame } => (
                format!("{} {}", SPINNER[frame % SPINNER.len()], label),
                Style::default().fg(Color::Yellow),
            ),
            StatusView::Error(message) => (message.to_string(), Style::default().fg(Color::Red)),
            StatusView::Empty(note) => (note.to_string(), Style::default()),
        }
    }
}

impl Component for StatusView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(area);

        let (text, style) = self.text();
        let paragraph = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, middle);
    }
}
