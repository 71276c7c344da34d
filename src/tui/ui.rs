use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    DriverDetails, DriverList, EMPTY_NOTE, PaginationBar, RaceList, StatusView, TitleBar,
};
use crate::tui::navigation::Screen;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1), Length(1)]);
    let [title_area, main_area, controls_area, help_area] = layout.areas(frame.area());

    let screen = tui.navigator.current();
    TitleBar::new(
        screen.title(),
        tui.view_mode.label(),
        &app.status_message,
    )
    .render(frame, title_area);

    match screen {
        Screen::Drivers => {
            draw_drivers(frame, main_area, app, tui, spinner_frame);
            PaginationBar::new(app.drivers.pagination()).render(frame, controls_area);
        }
        Screen::DriverDetails(driver_id) => {
            DriverDetails::new(app.drivers.find(driver_id)).render(frame, main_area);
        }
        Screen::Races(_) => {
            draw_races(frame, main_area, app, tui, spinner_frame);
            if app.races.is_truncated() {
                let note = format!(
                    "Showing {} of {} races",
                    app.races.items().len(),
                    app.races.total()
                );
                frame.render_widget(
                    Span::styled(note, Style::default().fg(Color::Yellow)),
                    controls_area,
                );
            }
        }
    }

    frame.render_widget(
        Span::styled(
            help_text(screen),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ),
        help_area,
    );
}

fn draw_drivers(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState, spinner_frame: usize) {
    let drivers = &app.drivers;
    if drivers.is_loading() {
        StatusView::Loading {
            label: "Loading drivers...",
            frame: spinner_frame,
        }
        .render(frame, area);
    } else if let Some(message) = drivers.error_message() {
        StatusView::Error(message).render(frame, area);
    } else if drivers.items().is_empty() {
        StatusView::Empty("No drivers found.").render(frame, area);
    } else {
        DriverList::new(drivers.items(), tui.view_mode, tui.driver_selected).render(frame, area);
    }
}

fn draw_races(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState, spinner_frame: usize) {
    let races = &app.races;
    if races.is_loading() {
        StatusView::Loading {
            label: "Loading races...",
            frame: spinner_frame,
        }
        .render(frame, area);
    } else if let Some(message) = races.error_message() {
        StatusView::Error(message).render(frame, area);
    } else if races.items().is_empty() {
        StatusView::Empty(EMPTY_NOTE).render(frame, area);
    } else {
        RaceList::new(races.items(), tui.view_mode, tui.race_selected).render(frame, area);
    }
}

fn help_text(screen: &Screen) -> &'static str {
    match screen {
        Screen::Drivers => "←/→ Page  ↑/↓ Select  Enter Details  t Toggle View  q Quit",
        Screen::DriverDetails(_) => "Enter/r Race Results  Esc Back  q Quit",
        Screen::Races(_) => "↑/↓ Select  t Toggle View  Esc Back  q Quit",
    }
}
