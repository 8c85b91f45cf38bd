//! Most popular stations and routes.

use serde::Serialize;
use std::time::{Duration, Instant};

use super::{Stat, most_frequent};
use crate::model::columns;
use crate::pipeline::{FilteredView, utf8_series};

#[derive(Debug, Clone, Serialize)]
pub struct StationStats {
    pub common_start_station: Stat<String>,
    pub common_end_station: Stat<String>,
    pub common_route: Stat<String>,
    pub elapsed: Duration,
}

pub fn compute(view: &FilteredView) -> StationStats {
    let started = Instant::now();

    StationStats {
        common_start_station: most_frequent_label(view, columns::START_STATION),
        common_end_station: most_frequent_label(view, columns::END_STATION),
        common_route: most_frequent_label(view, columns::ROUTE),
        elapsed: started.elapsed(),
    }
}

/// Each label statistic is computed independently so one bad column cannot
/// spoil the other two.
fn most_frequent_label(view: &FilteredView, column: &str) -> Stat<String> {
    Stat::guard(|| {
        let s = utf8_series(&view.df, column)?;
        let ca = s.str()?;
        Ok(Stat::from_option(
            most_frequent(ca.into_iter().flatten()).map(str::to_owned),
        ))
    })
}
