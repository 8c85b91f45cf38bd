//! Most frequent travel times.

use serde::Serialize;
use std::time::{Duration, Instant};

use super::{Stat, most_frequent};
use crate::model::{MonthName, columns};
use crate::pipeline::FilteredView;

#[derive(Debug, Clone, Serialize)]
pub struct TimeStats {
    /// Most common month; `Inapplicable` when the view is already
    /// filtered to one month.
    pub common_month: Stat<MonthName>,
    /// Most common weekday; `Inapplicable` when the view is already
    /// filtered to one day.
    pub common_weekday: Stat<String>,
    /// Most common start hour (0-23), always computed.
    pub common_hour: Stat<u32>,
    pub elapsed: Duration,
}

pub fn compute(view: &FilteredView) -> TimeStats {
    let started = Instant::now();

    let common_month = if view.month.is_all() {
        Stat::guard(|| {
            let s = view.df.column(columns::START_MONTH)?.as_materialized_series();
            let ca = s.i32()?;
            Ok(Stat::from_option(
                most_frequent(ca.into_iter().flatten())
                    .and_then(|index| MonthName::from_index(index as u32)),
            ))
        })
    } else {
        Stat::Inapplicable
    };

    let common_weekday = if view.day.is_all() {
        Stat::guard(|| {
            let s = view.df.column(columns::START_WEEKDAY)?.as_materialized_series();
            let ca = s.str()?;
            Ok(Stat::from_option(
                most_frequent(ca.into_iter().flatten()).map(str::to_owned),
            ))
        })
    } else {
        Stat::Inapplicable
    };

    let common_hour = Stat::guard(|| {
        let s = view.df.column(columns::START_HOUR)?.as_materialized_series();
        let ca = s.i32()?;
        Ok(Stat::from_option(
            most_frequent(ca.into_iter().flatten()).map(|h| h as u32),
        ))
    });

    TimeStats {
        common_month,
        common_weekday,
        common_hour,
        elapsed: started.elapsed(),
    }
}
