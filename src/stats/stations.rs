use serde::Serialize;

use super::{Timed, timed};
use crate::error::{AnalysisError, AnalysisResult};
use crate::processing::{mode, mode_with_count};
use crate::trips::TripSet;
use crate::types::Value;

const REPORT: &str = "station popularity";

/// The most frequent (start, end) station combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationPair {
    pub start_station: String,
    pub end_station: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationReport {
    pub most_common_start: String,
    pub most_common_end: String,
    pub most_common_trip: StationPair,
}

/// Most popular start station, end station, and start/end pair.
///
/// Rows with an empty station name are left out. Ties go to the alphabetically first name (for
/// pairs: first by start station, then by end station).
pub fn station_stats(trips: &TripSet) -> AnalysisResult<Timed<StationReport>> {
    timed(REPORT, trips, |trips| {
        let cols = trips.columns();
        let empty = || AnalysisError::EmptyResultSet { report: REPORT };

        let start = mode(trips.values(cols.start_station).filter_map(Value::as_str))
            .ok_or_else(empty)?;
        let end = mode(trips.values(cols.end_station).filter_map(Value::as_str)).ok_or_else(empty)?;

        let pairs = trips.rows().iter().filter_map(|row| {
            let from = row.get(cols.start_station)?.as_str()?;
            let to = row.get(cols.end_station)?.as_str()?;
            Some((from, to))
        });
        let ((from, to), count) = mode_with_count(pairs).ok_or_else(empty)?;

        Ok(StationReport {
            most_common_start: start.to_string(),
            most_common_end: end.to_string(),
            most_common_trip: StationPair {
                start_station: from.to_string(),
                end_station: to.to_string(),
                count,
            },
        })
    })
}
