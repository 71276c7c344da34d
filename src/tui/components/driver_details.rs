//! # DriverDetails Component
//!
//! Profile of one driver from the current page. The details screen only
//! carries a `driver_id`, so the driver may be gone (e.g. the page changed
//! under it); that renders as "Driver not found".

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::api::Driver;
use crate::tui::component::Component;

pub struct DriverDetails<'a> {
    pub driver: Option<&'a Driver>,
}

impl<'a> DriverDetails<'a> {
    pub fn new(driver: Option<&'a Driver>) -> Self {
        Self { driver }
    }

    fn lines(driver: &Driver) -> Vec<Line<'static>> {
        let label = Style::default().fg(Color::DarkGray);
        vec![
            Line::from(Span::styled(
                driver.full_name(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Date of Birth: ", label),
                Span::raw(driver.date_of_birth.clone()),
            ]),
            Line::from(vec![
                Span::styled("Nationality: ", label),
                Span::raw(driver.nationality.clone()),
            ]),
            Line::from(vec![
                Span::styled("Reference: ", label),
                Span::raw(driver.reference_url.clone()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter] Show Race Results",
                Style::default().fg(Color::Cyan),
            )),
        ]
    }
}

impl Component for DriverDetails<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = match self.driver {
            Some(driver) => Paragraph::new(Self::lines(driver))
                .block(Block::bordered().padding(Padding::uniform(1)))
                .wrap(Wrap { trim: false }),
            None => Paragraph::new("Driver not found").alignment(Alignment::Center),
        };
        frame.render_widget(paragraph, area);
    }
}
