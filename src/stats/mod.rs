//! The four trip reports.
//!
//! Each report is computed independently over the same filtered [`TripSet`] and comes back wrapped
//! in [`Timed`] with the wall time it took. Every report fails with
//! [`AnalysisError::EmptyResultSet`] when there are no trips to summarise.

pub mod stations;
pub mod travel_time;
pub mod trip_duration;
pub mod users;

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::error::{AnalysisError, AnalysisResult};
use crate::trips::TripSet;

pub use stations::{StationPair, StationReport, station_stats};
pub use travel_time::{TravelTimeReport, travel_time_stats};
pub use trip_duration::{DurationReport, trip_duration_stats};
pub use users::{BirthYearSummary, UserReport, user_stats};

/// A report plus the wall time spent computing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timed<T> {
    pub report: T,
    pub elapsed: Duration,
}

/// Explicit presence of a section that depends on an optional column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability<T> {
    Available(T),
    NotAvailable,
}

impl<T> Availability<T> {
    pub fn as_available(&self) -> Option<&T> {
        match self {
            Availability::Available(v) => Some(v),
            Availability::NotAvailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available(_))
    }
}

impl<T> From<Option<T>> for Availability<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Availability::NotAvailable, Availability::Available)
    }
}

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

fn timed<T>(
    report: &'static str,
    trips: &TripSet,
    compute: impl FnOnce(&TripSet) -> AnalysisResult<T>,
) -> AnalysisResult<Timed<T>> {
    let started = Instant::now();
    if trips.is_empty() {
        return Err(AnalysisError::EmptyResultSet { report });
    }
    let out = compute(trips)?;
    let elapsed = started.elapsed();
    debug!(report, rows = trips.len(), ?elapsed, "computed report");
    Ok(Timed {
        report: out,
        elapsed,
    })
}
