//! # RaceList Component
//!
//! One driver's races. Each row shows the driver's own classification
//! (the first result entry), with `-` standing in when a race carries none.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Row, Table, TableState};

use crate::ViewMode;
use crate::api::{RaceResult, ResultEntry};
use crate::tui::component::Component;

pub const EMPTY_NOTE: &str = "No race data found for this driver.";

pub struct RaceList<'a> {
    pub races: &'a [RaceResult],
    pub mode: ViewMode,
    pub selected: usize,
}

/// Columns shared by both layouts: position, constructor, laps, grid.
fn entry_cells(entry: Option<&ResultEntry>) -> [String; 4] {
    match entry {
        Some(e) => [
            e.position.clone(),
            e.constructor.name.clone(),
            e.laps.clone(),
            e.grid.clone(),
        ],
        None => std::array::from_fn(|_| "-".to_string()),
    }
}

impl<'a> RaceList<'a> {
    pub fn new(races: &'a [RaceResult], mode: ViewMode, selected: usize) -> Self {
        Self {
            races,
            mode,
            selected,
        }
    }

    fn selection(&self) -> Option<usize> {
        (!self.races.is_empty()).then(|| self.selected.min(self.races.len() - 1))
    }

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let header = Row::new(["Race", "Date", "Pos", "Constructor", "Laps", "Grid"]).style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        );
        let rows = self.races.iter().map(|race| {
            let [position, constructor, laps, grid] = entry_cells(race.first_entry());
            Row::new([
                race.race_name.clone(),
                race.date.clone(),
                position,
                constructor,
                laps,
                grid,
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Fill(3),
                Constraint::Length(10),
                Constraint::Length(4),
                Constraint::Fill(2),
                Constraint::Length(4),
                Constraint::Length(4),
            ],
        )
        .header(header)
        .row_highlight_style(Style::default().bg(Color::DarkGray));

        let mut state = TableState::default().with_selected(self.selection());
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        let items = self.races.iter().map(|race| {
            let mut lines = vec![
                Line::from(Span::styled(
                    format!("{} - {}", race.race_name, race.season),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Date: {}", race.date)),
            ];
            if let Some(entry) = race.first_entry() {
                lines.push(Line::from(format!("Position: {}", entry.position)));
                lines.push(Line::from(format!("Constructor: {}", entry.constructor.name)));
                lines.push(Line::from(format!("Status: {}", entry.status)));
                lines.push(Line::from(format!("Laps: {}", entry.laps)));
                lines.push(Line::from(format!("Grid: {}", entry.grid)));
            }
            lines.push(Line::from(""));
            ListItem::new(lines)
        });

        let list = List::new(items)
            .block(Block::bordered())
            .highlight_style(Style::default().bg(Color::DarkGray));

        let mut state = ListState::default().with_selected(self.selection());
        frame.render_stateful_widget(list, area, &mut state);
    }
}

impl Component for RaceList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.mode {
            ViewMode::Table => self.render_table(frame, area),
            ViewMode::Cards => self.render_cards(frame, area),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_race;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_entry_cells_placeholder() {
        assert_eq!(entry_cells(None), ["-", "-", "-", "-"]);
    }

    #[test]
    fn test_table_shows_first_entry() {
        let races = vec![sample_race(2007, 1, "hamilton")];
        let mut terminal = Terminal::new(TestBackend::new(100, 5)).unwrap();
        let mut list = RaceList::new(&races, ViewMode::Table, 0);
        terminal.draw(|f| list.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Constructor"));
        assert!(text.contains("Grand Prix 1"));
        assert!(text.contains("McLaren"));
    }

    #[test]
    fn test_cards_show_result_details() {
        let races = vec![sample_race(2007, 1, "hamilton")];
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let mut list = RaceList::new(&races, ViewMode::Cards, 0);
        terminal.draw(|f| list.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Grand Prix 1 - 2007"));
        assert!(text.contains("Status: Finished"));
        assert!(text.contains("Laps: 58"));
    }
}
