//! # Actions
//!
//! Everything that can happen in Pitlane becomes an `Action`.
//! User presses →? That's `Action::NextPage`.
//! API responds? That's `Action::DriversLoaded { request, result }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns the `Effect` the runtime should perform. No I/O
//! happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Moving the driver cursor (`RequestOffset`, `NextPage`, `PrevPage`) only
//! changes the cursor in the store; it is `update` that reacts to a changed
//! `(offset, limit)` by starting a fetch for the new page.

use log::{debug, info};

use crate::api::{DriverPage, FetchError, RacePage};
use crate::core::load::RequestId;
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    /// `load(offset, limit)` on the driver store.
    LoadDrivers { offset: usize, limit: usize },
    /// Move the driver cursor to an arbitrary offset.
    RequestOffset(usize),
    NextPage,
    PrevPage,
    DriversLoaded {
        request: RequestId,
        result: Result<DriverPage, FetchError>,
    },
    /// `load(driver_id)` on the race store.
    LoadRaces(String),
    RacesLoaded {
        request: RequestId,
        result: Result<RacePage, FetchError>,
    },
    /// The race results view was left.
    ClearRaces,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchDrivers {
        request: RequestId,
        offset: usize,
        limit: usize,
    },
    FetchRaces {
        request: RequestId,
        driver_id: String,
        offset: usize,
        limit: usize,
    },
    /// Abort whatever race fetch is still running.
    CancelRaces,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::LoadDrivers { offset, limit } => fetch_drivers(app, offset, limit),
        Action::RequestOffset(offset) => {
            if app.drivers.request_offset(offset) {
                refetch_current_page(app)
            } else {
                Effect::None
            }
        }
        Action::NextPage => {
            if app.drivers.next_page() {
                refetch_current_page(app)
            } else {
                debug!("Next page ignored at offset {}", app.drivers.offset());
                Effect::None
            }
        }
        Action::PrevPage => {
            if app.drivers.prev_page() {
                refetch_current_page(app)
            } else {
                debug!("Previous page ignored at offset {}", app.drivers.offset());
                Effect::None
            }
        }
        Action::DriversLoaded { request, result } => {
            if app.drivers.finish_load(request, result) {
                app.status_message = match app.drivers.error_message() {
                    Some(_) => "Failed to load drivers".to_string(),
                    None => {
                        let p = app.drivers.pagination();
                        format!("Page {} of {}", p.current_page(), p.page_count().max(1))
                    }
                };
            }
            Effect::None
        }
        Action::LoadRaces(driver_id) => {
            let request = app.races.begin_load(&driver_id);
            info!("Loading races for {} ({})", driver_id, request);
            app.status_message = format!("Loading races for {driver_id}...");
            Effect::FetchRaces {
                request,
                driver_id,
                offset: 0,
                limit: app.races_page_size,
            }
        }
        Action::RacesLoaded { request, result } => {
            if app.races.finish_load(request, result) {
                app.status_message = match app.races.error_message() {
                    Some(_) => "Failed to load races".to_string(),
                    None if app.races.is_truncated() => format!(
                        "Showing {} of {} races",
                        app.races.items().len(),
                        app.races.total()
                    ),
                    None => format!("{} races", app.races.items().len()),
                };
            }
            Effect::None
        }
        Action::ClearRaces => {
            app.races.clear();
            Effect::CancelRaces
        }
        Action::Quit => Effect::Quit,
    }
}

fn refetch_current_page(app: &mut App) -> Effect {
    let offset = app.drivers.offset();
    let limit = app.drivers.limit();
    fetch_drivers(app, offset, limit)
}

fn fetch_drivers(app: &mut App, offset: usize, limit: usize) -> Effect {
    let request = app.drivers.begin_load(offset, limit);
    info!("Loading drivers offset={} limit={} ({})", offset, limit, request);
    app.status_message = String::from("Loading drivers...");
    Effect::FetchDrivers {
        request,
        offset,
        limit: limit.max(1),
    }
}
