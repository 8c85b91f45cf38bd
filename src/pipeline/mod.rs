//! The load → derive → filter pipeline and its fan-out to the engines.
//!
//! One invocation builds an immutable snapshot: the store reads the city
//! export, the deriver attaches computed columns (dropping and counting
//! unparseable rows), the filter cuts the view down, and the four engines
//! aggregate over the result. Nothing downstream of the filter mutates the
//! frame.

pub mod derive;
pub mod filter;
pub mod store;

pub use derive::{DerivedDataset, UNKNOWN_ROUTE};
pub use filter::FilteredView;
pub use store::RawDataset;

use polars::prelude::*;
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::config::DataSources;
use crate::error::Result;
use crate::model::{City, DayFilter, MonthFilter};
use crate::stats::{duration, station, time, user};

/// A column as strings, casting when the reader inferred something else
/// (numeric station IDs, for instance).
pub(crate) fn utf8_series(df: &DataFrame, name: &str) -> Result<Series> {
    let s = df.column(name)?.as_materialized_series();
    if s.dtype() == &DataType::String {
        Ok(s.clone())
    } else {
        Ok(s.cast(&DataType::String)?)
    }
}

/// Everything one pipeline run produced: the engine results plus the
/// filtered view they were computed from (kept for raw-record paging).
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
    /// Rows in the filtered view.
    pub row_count: usize,
    /// Rows dropped during derivation for unparseable timestamps.
    pub excluded_rows: usize,
    pub time: time::TimeStats,
    pub stations: station::StationStats,
    pub durations: duration::DurationStats,
    pub users: user::UserStats,
    pub elapsed: Duration,
    #[serde(skip)]
    pub view: FilteredView,
}

/// Run the full pipeline for one validated selection.
///
/// The engines are independent read-only aggregations over the same view;
/// their evaluation order is irrelevant.
pub fn analyse(
    sources: &DataSources,
    city: City,
    month: MonthFilter,
    day: DayFilter,
) -> Result<AnalysisReport> {
    let started = Instant::now();

    let raw = store::load_city(sources, city)?;
    let derived = derive::derive_fields(raw)?;
    let view = filter::apply(&derived, month, day)?;

    let time = time::compute(&view);
    let stations = station::compute(&view);
    let durations = duration::compute(&view);
    let users = user::compute(&view);

    let elapsed = started.elapsed();
    tracing::info!(
        city = city.display_name(),
        month = %month,
        day = %day,
        rows = view.len(),
        excluded = view.excluded_rows,
        elapsed_ms = elapsed.as_millis() as u64,
        "analysis complete"
    );

    Ok(AnalysisReport {
        city,
        month,
        day,
        row_count: view.len(),
        excluded_rows: view.excluded_rows,
        time,
        stations,
        durations,
        users,
        elapsed,
        view,
    })
}
