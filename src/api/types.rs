//! # Racing Data Types
//!
//! Domain records as the statistics API serves them, plus the `MRData`
//! envelopes they arrive wrapped in.
//!
//! ```text
//! { "MRData": { "total": "857", "DriverTable": { "Drivers": [ Driver, ... ] } } }
//! { "MRData": { "total": "356", "RaceTable":   { "Races":   [ RaceResult, ... ] } } }
//! ```
//!
//! Numeric fields inside records (`position`, `laps`, `grid`, ...) stay as
//! the strings the API sends. Only `total` is parsed, because pagination
//! needs it as a number.

use serde::{Deserialize, Serialize};

use super::remote::FetchError;

// ============================================================================
// Domain Records
// ============================================================================

/// A driver as listed by `/drivers.json`. Identified by `driver_id`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub driver_id: String,
    pub given_name: String,
    pub family_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(rename = "url", default)]
    pub reference_url: String,
}

impl Driver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

/// One race a driver took part in. Keyed by `(season, round)`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RaceResult {
    pub season: String,
    pub round: String,
    #[serde(rename = "raceName")]
    pub race_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "Results", default)]
    pub results: Vec<ResultEntry>,
}

impl RaceResult {
    pub fn key(&self) -> (&str, &str) {
        (&self.season, &self.round)
    }

    /// The queried driver's own entry. The per-driver endpoint only returns
    /// that driver's classification, so it is always the first one.
    pub fn first_entry(&self) -> Option<&ResultEntry> {
        self.results.first()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub position: String,
    #[serde(rename = "Driver")]
    pub driver: DriverRef,
    #[serde(rename = "Constructor")]
    pub constructor: ConstructorRef,
    #[serde(default)]
    pub laps: String,
    #[serde(default)]
    pub grid: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DriverRef {
    pub driver_id: String,
    pub given_name: String,
    pub family_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ConstructorRef {
    #[serde(rename = "constructorId")]
    pub id: String,
    pub name: String,
}

// ============================================================================
// Pages (what the client hands back to the stores)
// ============================================================================

/// One page of `/drivers.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverPage {
    pub drivers: Vec<Driver>,
    pub total: usize,
}

/// One page of `/drivers/{id}/results.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RacePage {
    pub races: Vec<RaceResult>,
    pub total: usize,
}

// ============================================================================
// Wire Envelopes
// ============================================================================

#[derive(Deserialize, Debug)]
pub(crate) struct Envelope<T> {
    #[serde(rename = "MRData")]
    pub data: T,
}

#[derive(Deserialize, Debug)]
pub(crate) struct DriverTableData {
    pub total: String,
    #[serde(rename = "DriverTable")]
    pub table: DriverTable,
}

#[derive(Deserialize, Debug)]
pub(crate) struct DriverTable {
    #[serde(rename = "Drivers", default)]
    pub drivers: Vec<Driver>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RaceTableData {
    pub total: String,
    #[serde(rename = "RaceTable")]
    pub table: RaceTable,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RaceTable {
    #[serde(rename = "Races", default)]
    pub races: Vec<RaceResult>,
}

/// Parses the string-encoded `total` field.
pub(crate) fn parse_total(raw: &str) -> Result<usize, FetchError> {
    raw.trim()
        .parse()
        .map_err(|e| FetchError::Parse(format!("invalid total {raw:?}: {e}")))
}

impl TryFrom<DriverTableData> for DriverPage {
    type Error = FetchError;

    fn try_from(data: DriverTableData) -> Result<Self, Self::Error> {
        Ok(DriverPage {
            total: parse_total(&data.total)?,
            drivers: data.table.drivers,
        })
    }
}

impl TryFrom<RaceTableData> for RacePage {
    type Error = FetchError;

    fn try_from(data: RaceTableData) -> Result<Self, Self::Error> {
        Ok(RacePage {
            total: parse_total(&data.total)?,
            races: data.table.races,
        })
    }
}
