//! Plain-text rendering of reports and pages.

use std::io::{self, Write};

use crate::error::AnalysisError;
use crate::pager::Page;
use crate::pipeline::Reports;
use crate::stats::{
    Availability, DurationReport, StationReport, Timed, TravelTimeReport, UserReport, ValueCount,
};

const RULE_WIDTH: usize = 40;

pub fn rule<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "{}", "-".repeat(RULE_WIDTH))
}

fn footer<W: Write, T>(w: &mut W, timed: &Timed<T>) -> io::Result<()> {
    writeln!(w, "\nThis took {:.6} seconds.", timed.elapsed.as_secs_f64())?;
    rule(w)
}

pub fn write_travel_times<W: Write>(w: &mut W, timed: &Timed<TravelTimeReport>) -> io::Result<()> {
    let r = &timed.report;
    writeln!(w, "\nThe most frequent times of travel\n")?;
    writeln!(w, "Most common month: {}", r.most_common_month)?;
    writeln!(w, "Most common day of week: {}", r.most_common_day)?;
    writeln!(w, "Most common start hour: {}", r.most_common_hour)?;
    footer(w, timed)
}

pub fn write_stations<W: Write>(w: &mut W, timed: &Timed<StationReport>) -> io::Result<()> {
    let r = &timed.report;
    writeln!(w, "\nThe most popular stations and trip\n")?;
    writeln!(w, "Most common start station: {}", r.most_common_start)?;
    writeln!(w, "Most common end station: {}", r.most_common_end)?;
    writeln!(
        w,
        "Most frequent trip: {} -> {} ({} trips)",
        r.most_common_trip.start_station, r.most_common_trip.end_station, r.most_common_trip.count
    )?;
    footer(w, timed)
}

pub fn write_trip_durations<W: Write>(w: &mut W, timed: &Timed<DurationReport>) -> io::Result<()> {
    let r = &timed.report;
    writeln!(w, "\nTrip duration\n")?;
    writeln!(w, "Total travel time: {} seconds", r.total_seconds)?;
    writeln!(w, "Mean travel time: {:.2} seconds", r.mean_seconds)?;
    footer(w, timed)
}

fn write_counts<W: Write>(w: &mut W, counts: &[ValueCount]) -> io::Result<()> {
    let width = counts.iter().map(|c| c.value.len()).max().unwrap_or(0);
    for c in counts {
        writeln!(w, "  {:<width$}  {}", c.value, c.count)?;
    }
    Ok(())
}

pub fn write_users<W: Write>(w: &mut W, timed: &Timed<UserReport>) -> io::Result<()> {
    let r = &timed.report;
    writeln!(w, "\nUser stats\n")?;
    writeln!(w, "Counts of user types:")?;
    write_counts(w, &r.user_types)?;

    match &r.genders {
        Availability::Available(counts) => {
            writeln!(w, "Counts of gender:")?;
            write_counts(w, counts)?;
        }
        Availability::NotAvailable => {
            writeln!(w, "Gender data is not available for this dataset.")?
        }
    }

    match &r.birth_years {
        Availability::Available(years) => {
            writeln!(w, "Earliest year of birth: {}", years.earliest)?;
            writeln!(w, "Most recent year of birth: {}", years.most_recent)?;
            writeln!(w, "Most common year of birth: {}", years.most_common)?;
        }
        Availability::NotAvailable => {
            writeln!(w, "Birth year data is not available for this dataset.")?
        }
    }
    footer(w, timed)
}

pub fn write_reports<W: Write>(w: &mut W, reports: &Reports) -> io::Result<()> {
    write_travel_times(w, &reports.travel_times)?;
    write_stations(w, &reports.stations)?;
    write_trip_durations(w, &reports.trip_durations)?;
    write_users(w, &reports.users)
}

/// Each record as an indented JSON object.
pub fn write_page<W: Write>(w: &mut W, page: &Page) -> io::Result<()> {
    for record in page.records() {
        let text = serde_json::to_string_pretty(&record).map_err(io::Error::other)?;
        writeln!(w, "{text}")?;
    }
    Ok(())
}

pub fn write_error<W: Write>(w: &mut W, err: &AnalysisError) -> io::Result<()> {
    writeln!(w, "\n{err}")?;
    rule(w)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::stats::BirthYearSummary;

    fn timed<T>(report: T) -> Timed<T> {
        Timed {
            report,
            elapsed: Duration::from_millis(2),
        }
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn users_without_demographics_say_not_available() {
        let report = timed(UserReport {
            user_types: vec![ValueCount {
                value: "Subscriber".to_string(),
                count: 3,
            }],
            genders: Availability::NotAvailable,
            birth_years: Availability::NotAvailable,
        });
        let text = render(|w| write_users(w, &report));
        assert!(text.contains("Subscriber  3"));
        assert!(text.contains("Gender data is not available"));
        assert!(text.contains("Birth year data is not available"));
        assert!(text.contains("This took 0.002000 seconds."));
        assert!(text.ends_with(&format!("{}\n", "-".repeat(40))));
    }

    #[test]
    fn birth_years_are_listed_when_available() {
        let report = timed(UserReport {
            user_types: Vec::new(),
            genders: Availability::Available(Vec::new()),
            birth_years: Availability::Available(BirthYearSummary {
                earliest: 1899,
                most_recent: 2001,
                most_common: 1989,
            }),
        });
        let text = render(|w| write_users(w, &report));
        assert!(text.contains("Earliest year of birth: 1899"));
        assert!(text.contains("Most recent year of birth: 2001"));
        assert!(text.contains("Most common year of birth: 1989"));
    }

    #[test]
    fn error_is_written_with_a_rule() {
        let err = AnalysisError::EmptyResultSet { report: "trip duration" };
        let text = render(|w| write_error(w, &err));
        assert!(text.contains("cannot compute trip duration"));
    }
}
