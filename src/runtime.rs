//! # Effect Runtime
//!
//! Glue between the pure core and the outside world. `dispatch` feeds an
//! action through `update()` and performs the returned `Effect`: fetches are
//! spawned as tokio tasks that report back by sending an `Action` on the
//! runtime's channel. Completions are applied on the caller's side via
//! `drain()` or `next_completion()`, so store state is only ever touched by
//! whoever owns the `Runtime`.
//!
//! Each store has at most one live fetch. Starting a new one aborts the old
//! one, `ClearRaces` aborts the race fetch, and dropping the runtime aborts
//! everything. The request-id guard in the stores still covers completions
//! that were already queued when the abort happened.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::AbortHandle;

use crate::api::RacingApi;
use crate::core::RequestId;
use crate::core::action::{Action, Effect, update};
use crate::core::state::App;

pub struct Runtime {
    app: App,
    api: Arc<dyn RacingApi>,
    tx: UnboundedSender<Action>,
    rx: UnboundedReceiver<Action>,
    drivers_task: Option<AbortHandle>,
    races_task: Option<AbortHandle>,
}

impl Runtime {
    pub fn new(app: App, api: Arc<dyn RacingApi>) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            app,
            api,
            tx,
            rx,
            drivers_task: None,
            races_task: None,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Runs `action` through `update()` and performs the effect.
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&mut self, action: Action) -> Effect {
        let effect = update(&mut self.app, action);
        self.perform(&effect);
        effect
    }

    /// Applies every completion already waiting on the channel.
    /// Returns how many were applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.rx.try_recv() {
            self.dispatch(action);
            applied += 1;
        }
        applied
    }

    /// Waits for the next completion and applies it.
    ///
    /// Pends forever if nothing is in flight; callers bound it with a timeout.
    pub async fn next_completion(&mut self) -> Option<Effect> {
        let action = self.rx.recv().await?;
        Some(self.dispatch(action))
    }

    fn perform(&mut self, effect: &Effect) {
        match effect {
            Effect::FetchDrivers {
                request,
                offset,
                limit,
            } => {
                if let Some(prev) = self.drivers_task.take() {
                    prev.abort();
                }
                self.drivers_task = Some(spawn_driver_fetch(
                    self.api.clone(),
                    self.tx.clone(),
                    *request,
                    *offset,
                    *limit,
                ));
            }
            Effect::FetchRaces {
                request,
                driver_id,
                offset,
                limit,
            } => {
                if let Some(prev) = self.races_task.take() {
                    prev.abort();
                }
                self.races_task = Some(spawn_race_fetch(
                    self.api.clone(),
                    self.tx.clone(),
                    *request,
                    driver_id.clone(),
                    *offset,
                    *limit,
                ));
            }
            Effect::CancelRaces => {
                if let Some(handle) = self.races_task.take()
                    && !handle.is_finished()
                {
                    info!("Aborting in-flight race fetch");
                    handle.abort();
                }
            }
            Effect::None | Effect::Quit => {}
        }
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        for handle in [self.drivers_task.take(), self.races_task.take()]
            .into_iter()
            .flatten()
        {
            handle.abort();
        }
    }
}

fn spawn_driver_fetch(
    api: Arc<dyn RacingApi>,
    tx: UnboundedSender<Action>,
    request: RequestId,
    offset: usize,
    limit: usize,
) -> AbortHandle {
    debug!("Spawning driver fetch {} against {}", request, api.base_url());
    tokio::spawn(async move {
        let result = api.drivers(offset, limit).await;
        if tx.send(Action::DriversLoaded { request, result }).is_err() {
            warn!("Failed to deliver driver page {}: receiver dropped", request);
        }
    })
    .abort_handle()
}

fn spawn_race_fetch(
    api: Arc<dyn RacingApi>,
    tx: UnboundedSender<Action>,
    request: RequestId,
    driver_id: String,
    offset: usize,
    limit: usize,
) -> AbortHandle {
    debug!("Spawning race fetch {} for {}", request, driver_id);
    tokio::spawn(async move {
        let result = api.driver_results(&driver_id, offset, limit).await;
        if tx.send(Action::RacesLoaded { request, result }).is_err() {
            warn!("Failed to deliver races for {}: receiver dropped", driver_id);
        }
    })
    .abort_handle()
}
