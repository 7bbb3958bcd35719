use chrono::Timelike;
use serde::Serialize;

use super::{Timed, timed};
use crate::error::{AnalysisError, AnalysisResult};
use crate::processing::mode;
use crate::selectors::{DayOfWeek, Month};
use crate::trips::TripSet;
use crate::types::Value;

const REPORT: &str = "time of travel";

/// The most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TravelTimeReport {
    pub most_common_month: Month,
    pub most_common_day: DayOfWeek,
    /// Hour of day, 0-23.
    pub most_common_hour: u32,
}

/// Modes of month, day of week and start hour. Ties go to the earliest value.
pub fn travel_time_stats(trips: &TripSet) -> AnalysisResult<Timed<TravelTimeReport>> {
    timed(REPORT, trips, |trips| {
        let cols = trips.columns();
        let empty = || AnalysisError::EmptyResultSet { report: REPORT };

        let month = mode(trips.values(cols.month).filter_map(Value::as_i64)).ok_or_else(empty)?;
        let day = mode(trips.values(cols.day_of_week).filter_map(Value::as_i64)).ok_or_else(empty)?;
        let hour = mode(
            trips
                .values(cols.start_time)
                .filter_map(Value::as_timestamp)
                .map(|ts| ts.hour()),
        )
        .ok_or_else(empty)?;

        Ok(TravelTimeReport {
            most_common_month: Month::from_index(to_u32(month))?,
            most_common_day: DayOfWeek::from_index(to_u32(day))?,
            most_common_hour: hour,
        })
    })
}

// Negative values map past every table and are rejected by `from_index`.
fn to_u32(v: i64) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}
