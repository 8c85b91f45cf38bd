//! Derived trip fields.
//!
//! Month index, weekday name, and start hour come from the parsed
//! `Start Time`; the route label combines the two station names. Derived
//! columns are computed once, appended to the frame, and treated as
//! immutable afterwards.

use chrono::{Datelike as _, NaiveDateTime, Timelike as _};
use polars::prelude::*;

use super::store::RawDataset;
use super::utf8_series;
use crate::error::Result;
use crate::model::{City, SchemaProfile, columns, weekday_name};

/// Route label used when either station name is missing from a row.
pub const UNKNOWN_ROUTE: &str = "Unknown route";

/// A city's trips with derived columns attached and unparseable rows
/// removed (and counted).
#[derive(Debug, Clone)]
pub struct DerivedDataset {
    pub city: City,
    pub df: DataFrame,
    pub profile: SchemaProfile,
    /// Rows dropped because their start timestamp could not be parsed.
    pub excluded_rows: usize,
}

/// Timestamp shapes accepted for `Start Time`. The exports use
/// `2017-01-01 00:00:36`; the ISO `T` separator and fractional seconds
/// show up in some re-exports.
const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Parse start timestamps and append the derived columns.
///
/// Rows whose `Start Time` does not parse are dropped here and surface in
/// [`DerivedDataset::excluded_rows`]; they are never silently lost.
pub fn derive_fields(raw: RawDataset) -> Result<DerivedDataset> {
    let RawDataset { city, df, profile } = raw;

    let start = utf8_series(&df, columns::START_TIME)?;
    let ca = start.str()?;

    let mut parsed: Vec<Option<(i32, &'static str, i32)>> = Vec::with_capacity(ca.len());
    for opt in ca {
        parsed.push(opt.and_then(parse_timestamp).map(|dt| {
            (
                dt.month() as i32,
                weekday_name(dt.weekday()),
                dt.hour() as i32,
            )
        }));
    }

    let excluded_rows = parsed.iter().filter(|p| p.is_none()).count();
    if excluded_rows > 0 {
        tracing::warn!(
            city = city.display_name(),
            excluded = excluded_rows,
            "dropping rows with unparseable start times"
        );
    }

    let mask: BooleanChunked = parsed.iter().map(|p| Some(p.is_some())).collect();
    let mut df = df.filter(&mask)?;

    let months: Vec<i32> = parsed.iter().flatten().map(|p| p.0).collect();
    let weekdays: Vec<&str> = parsed.iter().flatten().map(|p| p.1).collect();
    let hours: Vec<i32> = parsed.iter().flatten().map(|p| p.2).collect();
    let routes = route_labels(&df)?;

    df.with_column(Series::new(columns::START_MONTH.into(), months))?;
    df.with_column(Series::new(columns::START_WEEKDAY.into(), weekdays))?;
    df.with_column(Series::new(columns::START_HOUR.into(), hours))?;
    df.with_column(Series::new(columns::ROUTE.into(), routes))?;

    Ok(DerivedDataset {
        city,
        df,
        profile,
        excluded_rows,
    })
}

fn route_labels(df: &DataFrame) -> Result<Vec<String>> {
    let start = utf8_series(df, columns::START_STATION)?;
    let end = utf8_series(df, columns::END_STATION)?;
    let start_ca = start.str()?;
    let end_ca = end.str()?;

    Ok(start_ca
        .into_iter()
        .zip(end_ca)
        .map(|pair| match pair {
            (Some(s), Some(e)) if !s.trim().is_empty() && !e.trim().is_empty() => {
                format!("From {s} to {e}")
            }
            _ => UNKNOWN_ROUTE.to_owned(),
        })
        .collect())
}
