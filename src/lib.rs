//! `bikeshare-stats` loads bike-share trip records for Chicago, New York City and Washington,
//! narrows them by month and day of week, and computes descriptive statistics over the result.
//!
//! ## Pipeline
//!
//! 1. [`trips::load_city`] ingests the city's CSV into a typed [`types::DataSet`] (schema-first,
//!    see [`ingestion`]) and derives `month` and `day_of_week` from each start time.
//! 2. [`trips::filter_trips`] applies the optional month and day selectors.
//! 3. [`stats`] computes four independent reports: time of travel, station popularity, trip
//!    duration, and user demographics.
//! 4. [`pager::Pages`] walks a display view of the filtered rows five at a time.
//!
//! [`pipeline::run`] performs all four steps for one [`selectors::Selection`]; the [`console`]
//! module wraps it in the interactive prompt loop used by the `bikeshare` binary.
//!
//! ## Example
//!
//! ```no_run
//! use bikeshare_stats::pipeline::run;
//! use bikeshare_stats::selectors::{City, Month, Selection};
//! use bikeshare_stats::trips::LoadOptions;
//!
//! # fn main() -> Result<(), bikeshare_stats::AnalysisError> {
//! let selection = Selection::city(City::Chicago).with_month(Month::March);
//! let run = run(&selection, &LoadOptions::default())?;
//! println!("most common month: {}", run.reports.travel_times.report.most_common_month);
//! for page in run.pages.take(2) {
//!     println!("{} records from row {}", page.len(), page.first_row);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Conventions
//!
//! - Months are limited to January through June.
//! - Day selectors use 1 = Sunday ... 7 = Saturday; stored `day_of_week` uses Monday = 0.
//! - Modes break ties by taking the smallest value.
//! - Every report fails with [`AnalysisError::EmptyResultSet`] on an empty selection.
//! - `Gender` and `Birth Year` are optional columns; reports mark them
//!   [`stats::Availability::NotAvailable`] when a city's data lacks them.

pub mod console;
pub mod error;
pub mod ingestion;
pub mod pager;
pub mod pipeline;
pub mod processing;
pub mod selectors;
pub mod stats;
pub mod trips;
pub mod types;

pub use error::{AnalysisError, AnalysisResult, IngestionError, IngestionResult, SelectorKind};
