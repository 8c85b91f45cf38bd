//! Domain vocabulary shared across the pipeline.
//!
//! Selectors ([`MonthFilter`], [`DayFilter`]) are parsed once at the input
//! boundary (CLI or interactive prompt) into typed values; the pipeline
//! itself never re-validates strings.

use chrono::Weekday;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BikeshareError;

/// Column names of the raw city exports, plus the derived columns the
/// pipeline appends.
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const END_TIME: &str = "End Time";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const USER_TYPE: &str = "User Type";
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";

    /// Required in every city export; [`GENDER`] and [`BIRTH_YEAR`] are
    /// city-dependent.
    pub const REQUIRED: [&str; 6] = [
        START_TIME,
        END_TIME,
        START_STATION,
        END_STATION,
        TRIP_DURATION,
        USER_TYPE,
    ];

    // Derived columns, appended after timestamp parsing.
    pub const START_MONTH: &str = "start_month";
    pub const START_WEEKDAY: &str = "start_weekday";
    pub const START_HOUR: &str = "start_hour";
    pub const ROUTE: &str = "route";
}

/// Cities with a published trip-log export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [Self; 3] = [Self::Chicago, Self::NewYorkCity, Self::Washington];

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Chicago => "Chicago",
            Self::NewYorkCity => "New York City",
            Self::Washington => "Washington",
        }
    }

    /// Default export file name, relative to the data directory.
    pub fn data_file(self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYorkCity => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Calendar months, 1-based january=1 through december=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthName {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl MonthName {
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// 1-based calendar index.
    pub fn index(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index.checked_sub(1)? as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }
}

impl fmt::Display for MonthName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Month dimension selector: either the `all` sentinel or a single month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(MonthName),
}

impl MonthFilter {
    pub fn is_all(self) -> bool {
        matches!(self, Self::All)
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "all" {
            return Ok(Self::All);
        }
        MonthName::ALL
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(&lower))
            .map(|&m| Self::Only(m))
            .ok_or_else(|| {
                BikeshareError::Selector(format!(
                    "'{s}' is not 'all' or a calendar month name"
                ))
            })
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(m) => write!(f, "{}", m.name().to_ascii_lowercase()),
        }
    }
}

impl Serialize for MonthFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Weekday dimension selector: either the `all` sentinel or a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    pub fn is_all(self) -> bool {
        matches!(self, Self::All)
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "all" {
            return Ok(Self::All);
        }
        WEEKDAYS
            .iter()
            .find(|&&d| weekday_name(d).eq_ignore_ascii_case(&lower))
            .map(|&d| Self::Only(d))
            .ok_or_else(|| {
                BikeshareError::Selector(format!("'{s}' is not 'all' or a weekday name"))
            })
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(d) => f.write_str(&weekday_name(*d).to_ascii_lowercase()),
        }
    }
}

impl Serialize for DayFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Week starting Monday, matching the derived weekday column ordering.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English weekday name; `chrono`'s own `Display` is the short form.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Optional-column capability of one city's export, fixed before any row is
/// read. Presence of `Gender`/`Birth Year` is a property of the city, never
/// probed per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaProfile {
    pub gender: bool,
    pub birth_year: bool,
}
