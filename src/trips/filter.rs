//! Month and day-of-week filtering of trip sets.

use tracing::debug;

use super::TripSet;
use crate::processing::filter_eq_i64;
use crate::selectors::{Month, UserDay};

/// Narrow `trips` to the selected month and/or day.
///
/// - `month` keeps rows whose `month` equals the month's 1-based index.
/// - `day` is in user numbering (1 = Sunday); rows are matched on `(day + 5) mod 7` against the
///   Monday-based `day_of_week`.
///
/// Absent selectors are no-ops. The filters commute and keep the original row order. An empty
/// result is not an error.
pub fn filter_trips(trips: &TripSet, month: Option<Month>, day: Option<UserDay>) -> TripSet {
    let cols = *trips.columns();
    let mut out = trips.clone();

    if let Some(month) = month {
        out = out.with_data(filter_eq_i64(out.data(), cols.month, i64::from(month.index())));
    }

    if let Some(day) = day {
        let internal = i64::from(day.internal_index());
        out = out.with_data(filter_eq_i64(out.data(), cols.day_of_week, internal));
    }

    debug!(
        month = ?month,
        day = ?day.map(UserDay::number),
        before = trips.len(),
        after = out.len(),
        "filtered trips"
    );
    out
}
