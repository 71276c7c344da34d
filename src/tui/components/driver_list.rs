//! # DriverList Component
//!
//! The current driver page as either a table or a stack of cards.
//!
//! ```text
//! Table                                   Cards
//! Name            Date of Birth  Nat.     ┌──────────────────────┐
//! Lewis Hamilton  1985-01-07     British  │ Lewis Hamilton       │
//! ...                                     │ DOB: 1985-01-07      │
//!                                         │ Nationality: British │
//! ```
//!
//! Selection is clamped to the page, so a shorter page after navigation
//! never leaves the highlight past the end.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Row, Table, TableState};

use crate::ViewMode;
use crate::api::Driver;
use crate::tui::component::Component;

pub struct DriverList<'a> {
    pub drivers: &'a [Driver],
    pub mode: ViewMode,
    pub selected: usize,
}

impl<'a> DriverList<'a> {
    pub fn new(drivers: &'a [Driver], mode: ViewMode, selected: usize) -> Self {
        Self {
            drivers,
            mode,
            selected,
        }
    }

    fn selection(&self) -> Option<usize> {
        (!self.drivers.is_empty()).then(|| self.selected.min(self.drivers.len() - 1))
    }

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let header = Row::new(["Name", "Date of Birth", "Nationality"]).style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        );
        let rows = self.drivers.iter().map(|d| {
            Row::new([
                d.full_name(),
                d.date_of_birth.clone(),
                d.nationality.clone(),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(40),
                Constraint::Percentage(30),
                Constraint::Percentage(30),
            ],
        )
        .header(header)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▌ ");

        let mut state = TableState::default().with_selected(self.selection());
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        let items = self.drivers.iter().map(|d| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    d.full_name(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("DOB: {}", d.date_of_birth)),
                Line::from(format!("Nationality: {}", d.nationality)),
                Line::from(""),
            ])
        });

        let list = List::new(items)
            .block(Block::bordered())
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▌ ");

        let mut state = ListState::default().with_selected(self.selection());
        frame.render_stateful_widget(list, area, &mut state);
    }
}

impl Component for DriverList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.mode {
            ViewMode::Table => self.render_table(frame, area),
            ViewMode::Cards => self.render_cards(frame, area),
        }
    }
}
