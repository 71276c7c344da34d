//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::api::{
    ConstructorRef, Driver, DriverPage, DriverRef, FetchError, RacePage, RaceResult, RacingApi,
    ResultEntry,
};

pub fn sample_driver(id: &str) -> Driver {
    Driver {
        driver_id: id.to_string(),
        given_name: format!("Given-{id}"),
        family_name: format!("Family-{id}"),
        date_of_birth: "1985-01-07".to_string(),
        nationality: "British".to_string(),
        reference_url: format!("http://en.wikipedia.org/wiki/{id}"),
    }
}

pub fn sample_race(season: u32, round: u32, driver_id: &str) -> RaceResult {
    RaceResult {
        season: season.to_string(),
        round: round.to_string(),
        race_name: format!("Grand Prix {round}"),
        date: format!("{season}-03-{:02}", round.min(28)),
        results: vec![ResultEntry {
            position: "1".to_string(),
            driver: DriverRef {
                driver_id: driver_id.to_string(),
                given_name: "Lewis".to_string(),
                family_name: "Hamilton".to_string(),
            },
            constructor: ConstructorRef {
                id: "mclaren".to_string(),
                name: "McLaren".to_string(),
            },
            laps: "58".to_string(),
            grid: "2".to_string(),
            status: "Finished".to_string(),
        }],
    }
}

/// A page holding `count` drivers out of `total`.
pub fn driver_page(count: usize, total: usize) -> DriverPage {
    DriverPage {
        drivers: (0..count).map(|i| sample_driver(&format!("driver_{i}"))).collect(),
        total,
    }
}

/// A page holding `count` races out of `total`.
pub fn race_page(count: usize, total: usize) -> RacePage {
    RacePage {
        races: (0..count as u32).map(|i| sample_race(2007, i + 1, "hamilton")).collect(),
        total,
    }
}

/// In-memory `RacingApi` serving a fixed roster, optionally slow or failing.
pub struct StubApi {
    pub roster: Vec<Driver>,
    pub races_per_driver: usize,
    pub delay: Duration,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl StubApi {
    pub fn with_drivers(count: usize) -> Self {
        Self {
            roster: (0..count).map(|i| sample_driver(&format!("driver_{i}"))).collect(),
            races_per_driver: 3,
            delay: Duration::ZERO,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with_drivers(0)
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) -> Result<(), FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            return Err(FetchError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RacingApi for StubApi {
    fn base_url(&self) -> &str {
        "stub://"
    }

    async fn drivers(&self, offset: usize, limit: usize) -> Result<DriverPage, FetchError> {
        self.pause().await?;
        Ok(DriverPage {
            drivers: self.roster.iter().skip(offset).take(limit).cloned().collect(),
            total: self.roster.len(),
        })
    }

    async fn driver_results(
        &self,
        driver_id: &str,
        offset: usize,
        limit: usize,
    ) -> Result<RacePage, FetchError> {
        self.pause().await?;
        Ok(RacePage {
            races: (0..self.races_per_driver as u32)
                .map(|i| sample_race(2020, i + 1, driver_id))
                .skip(offset)
                .take(limit)
                .collect(),
            total: self.races_per_driver,
        })
    }
}
