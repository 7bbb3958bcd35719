//! Selector types and the fixed lookup tables behind them.
//!
//! The tables are compile-time constants, shared read-only by every run. Constructors reject
//! anything outside the supported sets with [`AnalysisError::UnsupportedSelector`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult, SelectorKind};

/// The cities with a bundled trip dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase key users type to pick the city.
    pub fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name of the city's dataset, relative to the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for City {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| AnalysisError::unsupported(SelectorKind::City, s.trim()))
    }
}

/// The months covered by the datasets. July through December are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

/// Supported months in calendar order; a month's index is its position here plus one.
pub const MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

impl Month {
    /// 1-based month-of-year (`January` is 1).
    pub fn index(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_index(index: u32) -> AnalysisResult<Month> {
        index
            .checked_sub(1)
            .and_then(|i| MONTHS.get(i as usize).copied())
            .ok_or_else(|| AnalysisError::unsupported(SelectorKind::Month, index.to_string()))
    }

    /// Lowercase name as typed by users.
    pub fn key(self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for Month {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MONTHS
            .into_iter()
            .find(|m| m.key() == wanted)
            .ok_or_else(|| AnalysisError::unsupported(SelectorKind::Month, s.trim()))
    }
}

/// Day of week in the internal numbering: Monday is 0, Sunday is 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

pub const DAYS: [DayOfWeek; 7] = [
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
    DayOfWeek::Saturday,
    DayOfWeek::Sunday,
];

impl DayOfWeek {
    /// Internal index, Monday = 0.
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> AnalysisResult<DayOfWeek> {
        DAYS.get(index as usize)
            .copied()
            .ok_or_else(|| AnalysisError::unsupported(SelectorKind::Day, index.to_string()))
    }

    pub fn from_chrono(weekday: chrono::Weekday) -> DayOfWeek {
        DAYS[weekday.num_days_from_monday() as usize]
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A day selector in user-facing numbering: 1 = Sunday, 2 = Monday, ..., 7 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UserDay(u8);

impl UserDay {
    pub fn new(day: u8) -> AnalysisResult<UserDay> {
        if (1..=7).contains(&day) {
            Ok(UserDay(day))
        } else {
            Err(AnalysisError::unsupported(SelectorKind::Day, day.to_string()))
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// `(day + 5) mod 7`: the matching `day_of_week` index, Monday = 0.
    pub fn internal_index(self) -> u32 {
        (u32::from(self.0) + 5) % 7
    }

    /// Inverse of [`Self::internal_index`]: `((internal + 1) mod 7) + 1`.
    pub fn from_internal(index: u32) -> AnalysisResult<UserDay> {
        if index > 6 {
            return Err(AnalysisError::unsupported(SelectorKind::Day, index.to_string()));
        }
        Ok(UserDay(((index + 1) % 7 + 1) as u8))
    }

    pub fn weekday(self) -> DayOfWeek {
        DAYS[self.internal_index() as usize]
    }
}

impl fmt::Display for UserDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.weekday())
    }
}

impl FromStr for UserDay {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .map_err(|_| AnalysisError::unsupported(SelectorKind::Day, trimmed))
            .and_then(UserDay::new)
    }
}

/// A validated set of selectors for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<UserDay>,
}

impl Selection {
    /// A selection with no time filters.
    pub fn city(city: City) -> Self {
        Self {
            city,
            month: None,
            day: None,
        }
    }

    pub fn with_month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_day(mut self, day: UserDay) -> Self {
        self.day = Some(day);
        self
    }
}
