//! Paging through raw trip records.
//!
//! [`Pages`] takes ownership of a filtered trip set and walks it five rows at a time. Each page is
//! a display view of its rows: the derived `month` and `day_of_week` columns are dropped and
//! timestamps become fixed-format text. Paging starts at row 1; row 0 is never shown.

use std::str::FromStr;

use crate::error::{AnalysisError, SelectorKind};
use crate::trips::{TripSet, columns};
use crate::types::{DataType, Field, Schema, TIMESTAMP_FORMAT, Value};

/// Rows per page.
pub const PAGE_SIZE: usize = 5;

/// Row offset of the first page.
pub const FIRST_ROW: usize = 1;

fn display_field(field: &Field) -> Field {
    match field.data_type {
        DataType::Timestamp => Field {
            data_type: DataType::Utf8,
            ..field.clone()
        },
        _ => field.clone(),
    }
}

fn render_value(value: &Value) -> Value {
    match value {
        Value::Timestamp(ts) => Value::Utf8(ts.format(TIMESTAMP_FORMAT).to_string()),
        other => other.clone(),
    }
}

/// One page of raw records.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    /// Row offset of the first record on this page.
    pub first_row: usize,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Page {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Each record as a JSON object keyed by column name, in column order.
    pub fn records(&self) -> Vec<serde_json::Value> {
        self.rows
            .iter()
            .map(|row| {
                let obj: serde_json::Map<String, serde_json::Value> = self
                    .columns
                    .iter()
                    .cloned()
                    .zip(row.iter().map(Value::to_json))
                    .collect();
                serde_json::Value::Object(obj)
            })
            .collect()
    }
}

/// A lazy, finite, single-pass sequence of [`PAGE_SIZE`]-row pages.
///
/// For `n` rows there are `ceil((n - 1) / 5)` pages. The trip set is held unchanged; rows are
/// projected and rendered only when their page is produced.
///
/// Pages cannot be cloned, so a sequence cannot be replayed:
///
/// ```compile_fail
/// use bikeshare_stats::pager::Pages;
///
/// fn replay(pages: &Pages) -> Pages {
///     pages.clone()
/// }
/// ```
#[derive(Debug)]
pub struct Pages {
    trips: TripSet,
    /// Source positions of the displayed columns.
    keep: Vec<usize>,
    schema: Schema,
    next_row: usize,
    next_number: usize,
}

impl Pages {
    pub fn new(trips: TripSet) -> Self {
        let (keep, fields): (Vec<usize>, Vec<Field>) = trips
            .data()
            .schema
            .fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.name != columns::MONTH && f.name != columns::DAY_OF_WEEK)
            .map(|(idx, f)| (idx, display_field(f)))
            .unzip();
        Self {
            trips,
            keep,
            schema: Schema::new(fields),
            next_row: FIRST_ROW,
            next_number: 1,
        }
    }

    /// Schema of the displayed records.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Total number of pages, including ones already produced.
    pub fn page_count(&self) -> usize {
        self.trips.len().saturating_sub(FIRST_ROW).div_ceil(PAGE_SIZE)
    }

    fn remaining(&self) -> usize {
        self.trips.len().saturating_sub(self.next_row).div_ceil(PAGE_SIZE)
    }

    fn render_row(&self, row: &[Value]) -> Vec<Value> {
        self.keep
            .iter()
            .map(|&idx| row.get(idx).map_or(Value::Null, render_value))
            .collect()
    }
}

impl Iterator for Pages {
    type Item = Page;

    fn next(&mut self) -> Option<Page> {
        let total = self.trips.len();
        if self.next_row >= total {
            return None;
        }
        let start = self.next_row;
        let end = (start + PAGE_SIZE).min(total);
        let page = Page {
            number: self.next_number,
            first_row: start,
            columns: self.schema.field_names().map(str::to_owned).collect(),
            rows: self.trips.rows()[start..end]
                .iter()
                .map(|row| self.render_row(row))
                .collect(),
        };
        self.next_row = end;
        self.next_number += 1;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Pages {}

/// An answer to "show more raw data?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    More,
    Stop,
}

impl FromStr for PageRequest {
    type Err = AnalysisError;

    /// `yes` and `no`, case-insensitive; anything else is rejected so the caller can ask again.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(PageRequest::More),
            "no" => Ok(PageRequest::Stop),
            _ => Err(AnalysisError::UnsupportedSelector {
                kind: SelectorKind::Input,
                value: s.trim().to_string(),
            }),
        }
    }
}
