use serde::Serialize;

use super::{Availability, Timed, ValueCount, timed};
use crate::error::AnalysisResult;
use crate::processing::{mode, value_counts};
use crate::trips::TripSet;
use crate::types::Value;

const REPORT: &str = "user demographics";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearSummary {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserReport {
    pub user_types: Vec<ValueCount>,
    /// `NotAvailable` when the city's data has no `Gender` column.
    pub genders: Availability<Vec<ValueCount>>,
    /// `NotAvailable` when there is no `Birth Year` column or no recorded year in the selection.
    pub birth_years: Availability<BirthYearSummary>,
}

/// User type counts, gender counts and birth-year extremes.
pub fn user_stats(trips: &TripSet) -> AnalysisResult<Timed<UserReport>> {
    timed(REPORT, trips, |trips| {
        let cols = trips.columns();

        let user_types = frequency_table(trips, cols.user_type);
        let genders = cols.gender.map(|idx| frequency_table(trips, idx)).into();
        let birth_years = cols
            .birth_year
            .and_then(|idx| birth_year_summary(trips, idx))
            .into();

        Ok(UserReport {
            user_types,
            genders,
            birth_years,
        })
    })
}

fn frequency_table(trips: &TripSet, idx: usize) -> Vec<ValueCount> {
    value_counts(trips.values(idx).filter_map(Value::as_str))
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect()
}

fn birth_year_summary(trips: &TripSet, idx: usize) -> Option<BirthYearSummary> {
    let years = || trips.values(idx).filter_map(Value::as_i64);
    Some(BirthYearSummary {
        earliest: years().min()?,
        most_recent: years().max()?,
        most_common: mode(years())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::trips::test_support::{TripRow, trip_set};

    fn rows() -> Vec<TripRow<'static>> {
        vec![
            TripRow::new("2017-01-02 08:00:00", 60.0, "A", "B")
                .user("Subscriber")
                .demographics(Some("Male"), Some(1985)),
            TripRow::new("2017-01-02 09:00:00", 60.0, "A", "B")
                .user("Customer")
                .demographics(None, None),
            TripRow::new("2017-01-02 10:00:00", 60.0, "A", "B")
                .user("Subscriber")
                .demographics(Some("Female"), Some(1962)),
            TripRow::new("2017-01-02 11:00:00", 60.0, "A", "B")
                .user("Subscriber")
                .demographics(Some("Male"), Some(1999)),
            TripRow::new("2017-01-02 12:00:00", 60.0, "A", "B")
                .user("Subscriber")
                .demographics(Some("Female"), Some(1962)),
        ]
    }

    fn count(value: &str, count: usize) -> ValueCount {
        ValueCount {
            value: value.to_string(),
            count,
        }
    }

    #[test]
    fn reports_counts_and_birth_years() {
        let out = user_stats(&trip_set(&rows(), true)).unwrap().report;
        assert_eq!(out.user_types, vec![count("Subscriber", 4), count("Customer", 1)]);
        assert_eq!(
            out.genders,
            Availability::Available(vec![count("Female", 2), count("Male", 2)])
        );
        assert_eq!(
            out.birth_years,
            Availability::Available(BirthYearSummary {
                earliest: 1962,
                most_recent: 1999,
                most_common: 1962,
            })
        );
    }

    #[test]
    fn missing_columns_are_not_available() {
        let out = user_stats(&trip_set(&rows(), false)).unwrap().report;
        assert_eq!(out.genders, Availability::NotAvailable);
        assert_eq!(out.birth_years, Availability::NotAvailable);
        assert_eq!(out.user_types.len(), 2);
    }

    #[test]
    fn all_null_birth_years_are_not_available() {
        let trips = trip_set(
            &[TripRow::new("2017-01-02 08:00:00", 60.0, "A", "B").demographics(Some("Male"), None)],
            true,
        );
        let out = user_stats(&trips).unwrap().report;
        assert!(out.genders.is_available());
        assert_eq!(out.birth_years, Availability::NotAvailable);
    }

    #[test]
    fn empty_set_is_an_empty_result() {
        let err = user_stats(&trip_set(&[], true)).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyResultSet { .. }));
    }

    #[test]
    fn birth_year_summary_reads_the_descriptor_column() {
        let trips = trip_set(&rows(), true);
        let idx = trips.columns().birth_year.unwrap();
        assert_eq!(
            birth_year_summary(&trips, idx),
            Some(BirthYearSummary {
                earliest: 1962,
                most_recent: 1999,
                most_common: 1962,
            })
        );
        // The gender column holds no integers, so there is nothing to summarise.
        let gender = trips.columns().gender.unwrap();
        assert_eq!(birth_year_summary(&trips, gender), None);
    }
}
