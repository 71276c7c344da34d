//! # TitleBar Component
//!
//! Top status bar: screen title, active layout and the transient status
//! message from `App`.
//!
//! ```text
//! Pitlane | F1 Drivers | Table View | Page 2 of 29
//! ```
//!
//! Purely presentational. The status segment is omitted when empty.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    pub screen_title: &'a str,
    pub view_label: &'a str,
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(screen_title: &'a str, view_label: &'a str, status_message: &'a str) -> Self {
        Self {
            screen_title,
            view_label,
            status_message,
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Pitlane", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" | {} | {}", self.screen_title, self.view_label)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_title_bar_with_status_message() {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        let mut title_bar = TitleBar::new("F1 Drivers", "Table View", "Page 2 of 29");

        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Pitlane"));
        assert!(text.contains("F1 Drivers"));
        assert!(text.contains("Table View"));
        assert!(text.contains("Page 2 of 29"));
    }

    #[test]
    fn test_title_bar_without_status() {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        let mut title_bar = TitleBar::new("Race Results", "Card View", "");

        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Race Results | Card View"));
        assert_eq!(text.matches('|').count(), 2);
    }
}
