//! Month/weekday filtering.
//!
//! Both predicates are row-independent, so applying them in either order
//! (or at once) yields the same subsequence; original row order is always
//! preserved. An empty result is a valid outcome, not an error.

use polars::prelude::*;

use super::derive::DerivedDataset;
use crate::error::Result;
use crate::model::{City, DayFilter, MonthFilter, SchemaProfile, columns, weekday_name};

/// The filtered, read-only view the statistics engines and the paginator
/// consume.
#[derive(Debug, Clone)]
pub struct FilteredView {
    pub city: City,
    pub df: DataFrame,
    pub profile: SchemaProfile,
    pub month: MonthFilter,
    pub day: DayFilter,
    /// Carried through from derivation for reporting.
    pub excluded_rows: usize,
}

impl FilteredView {
    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }
}

/// Apply the month and day selectors to a derived dataset.
///
/// `all` is a no-op on its dimension. Month matches on the 1-based index,
/// day case-insensitively on the full weekday name.
pub fn apply(data: &DerivedDataset, month: MonthFilter, day: DayFilter) -> Result<FilteredView> {
    let mut df = data.df.clone();

    if let MonthFilter::Only(m) = month {
        let wanted = m.index() as i32;
        let mask: BooleanChunked = {
            let s = df.column(columns::START_MONTH)?.as_materialized_series();
            let ca = s.i32()?;
            ca.into_iter().map(|v| Some(v == Some(wanted))).collect()
        };
        df = df.filter(&mask)?;
    }

    if let DayFilter::Only(d) = day {
        let wanted = weekday_name(d);
        let mask: BooleanChunked = {
            let s = df.column(columns::START_WEEKDAY)?.as_materialized_series();
            let ca = s.str()?;
            ca.into_iter()
                .map(|v| Some(v.is_some_and(|name| name.eq_ignore_ascii_case(wanted))))
                .collect()
        };
        df = df.filter(&mask)?;
    }

    tracing::debug!(
        city = data.city.display_name(),
        month = %month,
        day = %day,
        rows = df.height(),
        "filter applied"
    );

    Ok(FilteredView {
        city: data.city,
        df,
        profile: data.profile,
        month,
        day,
        excluded_rows: data.excluded_rows,
    })
}
