use serde::Serialize;

use super::{Timed, timed};
use crate::error::{AnalysisError, AnalysisResult};
use crate::processing::{ReduceOp, reduce};
use crate::trips::{TripSet, columns};
use crate::types::Value;

const REPORT: &str = "trip duration";

/// Total and mean trip duration, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationReport {
    pub total_seconds: f64,
    pub mean_seconds: f64,
    /// Number of trips with a recorded duration.
    pub trips: usize,
}

pub fn trip_duration_stats(trips: &TripSet) -> AnalysisResult<Timed<DurationReport>> {
    timed(REPORT, trips, |trips| {
        let cols = trips.columns();
        let empty = || AnalysisError::EmptyResultSet { report: REPORT };

        let total = reduce(trips.data(), columns::TRIP_DURATION, ReduceOp::Sum)
            .as_ref()
            .and_then(Value::as_f64)
            .ok_or_else(empty)?;
        // Same summation order as the total, so mean == total / trips exactly.
        let mean = reduce(trips.data(), columns::TRIP_DURATION, ReduceOp::Mean)
            .as_ref()
            .and_then(Value::as_f64)
            .ok_or_else(empty)?;
        let counted = trips.values(cols.trip_duration).filter(|v| !v.is_null()).count();

        Ok(DurationReport {
            total_seconds: total,
            mean_seconds: mean,
            trips: counted,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trips::test_support::{TripRow, trip_set};

    #[test]
    fn total_and_mean_match_the_durations() {
        let trips = trip_set(
            &[
                TripRow::new("2017-01-02 08:00:00", 300.0, "A", "B"),
                TripRow::new("2017-01-02 09:00:00", 600.0, "A", "B"),
                TripRow::new("2017-01-02 10:00:00", 1500.0, "A", "B"),
            ],
            false,
        );
        let out = trip_duration_stats(&trips).unwrap().report;
        assert_eq!(out.total_seconds, 2400.0);
        assert_eq!(out.mean_seconds, 800.0);
        assert_eq!(out.trips, 3);
        assert_eq!(out.mean_seconds, out.total_seconds / out.trips as f64);
    }

    #[test]
    fn empty_set_is_an_empty_result_not_a_division() {
        let err = trip_duration_stats(&trip_set(&[], false)).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyResultSet { report: "trip duration" }));
    }
}
