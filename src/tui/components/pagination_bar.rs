//! # PaginationBar Component
//!
//! ```text
//! ◀ Prev            Page: 2 / 29            Next ▶
//! ```
//!
//! A control is dimmed exactly when the matching navigation would be a
//! no-op, so the bar and the store can never disagree.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::core::pagination::Pagination;
use crate::tui::component::Component;

pub struct PaginationBar {
    pub pagination: Pagination,
}

impl PaginationBar {
    pub fn new(pagination: Pagination) -> Self {
        Self { pagination }
    }

    /// `Page: p / n`. An empty list still reads as one page.
    pub fn page_label(&self) -> String {
        format!(
            "Page: {} / {}",
            self.pagination.current_page(),
            self.pagination.page_count().max(1)
        )
    }
}

fn control_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }
}

impl Component for PaginationBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [prev_area, label_area, next_area] = Layout::horizontal([
            Constraint::Length(8),
            Constraint::Min(0),
            Constraint::Length(8),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new("◀ Prev").style(control_style(self.pagination.has_prev())),
            prev_area,
        );
        frame.render_widget(
            Paragraph::new(self.page_label()).alignment(Alignment::Center),
            label_area,
        );
        frame.render_widget(
            Paragraph::new("Next ▶")
                .alignment(Alignment::Right)
                .style(control_style(self.pagination.has_next())),
            next_area,
        );
    }
}
