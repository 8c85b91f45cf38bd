//! Trip duration totals and means.

use polars::prelude::*;
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

use super::Stat;
use crate::model::columns;
use crate::pipeline::FilteredView;

#[derive(Debug, Clone, Serialize)]
pub struct DurationStats {
    /// Sum of trip durations in seconds, over rows with a valid duration.
    pub total_seconds: Stat<f64>,
    /// Mean trip duration in seconds; never divides by zero — an empty
    /// view reports `NoData` instead.
    pub mean_seconds: Stat<f64>,
    pub elapsed: Duration,
}

pub fn compute(view: &FilteredView) -> DurationStats {
    let started = Instant::now();

    let total_seconds = Stat::guard(|| {
        let ca = valid_durations(view)?;
        if ca.len() == ca.null_count() {
            return Ok(Stat::NoData);
        }
        Ok(Stat::from_option(ca.sum()))
    });

    let mean_seconds = Stat::guard(|| {
        let ca = valid_durations(view)?;
        if ca.len() == ca.null_count() {
            return Ok(Stat::NoData);
        }
        Ok(Stat::from_option(ca.mean()))
    });

    DurationStats {
        total_seconds,
        mean_seconds,
        elapsed: started.elapsed(),
    }
}

/// Durations as floats; junk values become nulls and fall out of both the
/// sum and the mean's denominator.
fn valid_durations(view: &FilteredView) -> crate::error::Result<Float64Chunked> {
    let s = view
        .df
        .column(columns::TRIP_DURATION)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(s.f64()?.clone())
}

/// A duration split into calendar-style units for display.
///
/// Higher units are floored; `seconds` keeps whatever fraction remains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: f64,
}

impl DurationBreakdown {
    pub fn from_seconds(total: f64) -> Self {
        let total = total.max(0.0);
        let whole = total.floor() as u64;
        let days = whole / 86_400;
        let hours = (whole % 86_400) / 3_600;
        let minutes = (whole % 3_600) / 60;
        let seconds = total - ((days * 86_400 + hours * 3_600 + minutes * 60) as f64);
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }
}

/// Renders as e.g. `1 days, 2 hours, 3 minutes, and 4 seconds`. Zero
/// higher units are omitted; the seconds part is always present, even when
/// zero.
impl fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (value, unit) in [
            (self.days, "days"),
            (self.hours, "hours"),
            (self.minutes, "minutes"),
        ] {
            if value > 0 {
                write!(f, "{value} {unit}, ")?;
            }
        }
        if self.seconds.fract() == 0.0 {
            write!(f, "and {} seconds", self.seconds)
        } else {
            write!(f, "and {:.2} seconds", self.seconds)
        }
    }
}
