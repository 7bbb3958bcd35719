//! One analysis run: load → filter → reports → pages.

use serde::Serialize;
use tracing::info;

use crate::error::AnalysisResult;
use crate::pager::Pages;
use crate::selectors::Selection;
use crate::stats::{
    DurationReport, StationReport, Timed, TravelTimeReport, UserReport, station_stats,
    travel_time_stats, trip_duration_stats, user_stats,
};
use crate::trips::{LoadOptions, TripSet, filter_trips, load_city};

/// The four reports for one filtered trip set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reports {
    pub travel_times: Timed<TravelTimeReport>,
    pub stations: Timed<StationReport>,
    pub trip_durations: Timed<DurationReport>,
    pub users: Timed<UserReport>,
}

/// Compute every report over `trips`. Fails on the first report that fails.
pub fn compute_reports(trips: &TripSet) -> AnalysisResult<Reports> {
    Ok(Reports {
        travel_times: travel_time_stats(trips)?,
        stations: station_stats(trips)?,
        trip_durations: trip_duration_stats(trips)?,
        users: user_stats(trips)?,
    })
}

/// Everything a run produces for the display layer.
#[derive(Debug)]
pub struct AnalysisRun {
    pub selection: Selection,
    pub loaded_rows: usize,
    pub filtered_rows: usize,
    pub reports: Reports,
    pub pages: Pages,
}

/// Run the full pipeline for `selection`.
///
/// Reports are computed before the filtered set is handed to the pager, so paging never affects
/// them.
pub fn run(selection: &Selection, options: &LoadOptions) -> AnalysisResult<AnalysisRun> {
    let loaded = load_city(selection.city, options)?;
    let filtered = filter_trips(&loaded, selection.month, selection.day);
    let loaded_rows = loaded.len();
    let filtered_rows = filtered.len();
    info!(
        city = selection.city.key(),
        loaded = loaded_rows,
        filtered = filtered_rows,
        "running analysis"
    );

    let reports = compute_reports(&filtered)?;

    Ok(AnalysisRun {
        selection: *selection,
        loaded_rows,
        filtered_rows,
        reports,
        pages: Pages::new(filtered),
    })
}
