//! Rider demographics.
//!
//! Gender and birth year are schema-level capabilities of a city's export:
//! when the city never recorded them the result is `FieldAbsent`, which is
//! a different statement than `NoData` (rows existed but carried nothing).
//!
//! The birth-year mode deliberately reports *every* tied year, unlike the
//! single-winner modes elsewhere: tied birth years are meaningful to the
//! consumer, so the whole set is kept.

use polars::prelude::*;
use serde::Serialize;
use std::time::{Duration, Instant};

use super::{Stat, frequency_table, most_frequent_all};
use crate::model::columns;
use crate::pipeline::{FilteredView, utf8_series};

#[derive(Debug, Clone, Serialize)]
pub struct UserStats {
    /// Trips per user type, highest count first.
    pub user_types: Stat<Vec<(String, u64)>>,
    /// Trips per gender, highest count first; `FieldAbsent` for cities
    /// without gender data.
    pub genders: Stat<Vec<(String, u64)>>,
    /// Birth-year extremes and mode set; `FieldAbsent` for cities without
    /// birth-year data.
    pub birth_years: Stat<BirthYearStats>,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    /// All years tied for the highest count, ascending.
    pub most_common: Vec<i32>,
}

pub fn compute(view: &FilteredView) -> UserStats {
    let started = Instant::now();

    let user_types = count_values(view, columns::USER_TYPE);

    let genders = if view.profile.gender {
        count_values(view, columns::GENDER)
    } else {
        Stat::FieldAbsent
    };

    let birth_years = if view.profile.birth_year {
        Stat::guard(|| birth_year_stats(view))
    } else {
        Stat::FieldAbsent
    };

    UserStats {
        user_types,
        genders,
        birth_years,
        elapsed: started.elapsed(),
    }
}

fn count_values(view: &FilteredView, column: &str) -> Stat<Vec<(String, u64)>> {
    Stat::guard(|| {
        let s = utf8_series(&view.df, column)?;
        let ca = s.str()?;
        let table: Vec<(String, u64)> = frequency_table(ca.into_iter().flatten())
            .into_iter()
            .map(|(value, count)| (value.to_owned(), count))
            .collect();
        if table.is_empty() {
            Ok(Stat::NoData)
        } else {
            Ok(Stat::Value(table))
        }
    })
}

fn birth_year_stats(view: &FilteredView) -> crate::error::Result<Stat<BirthYearStats>> {
    // Exports store birth years as floats (blank cells force the column
    // wide); normalise through f64 and round back to whole years.
    let s = view
        .df
        .column(columns::BIRTH_YEAR)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let ca = s.f64()?;
    let years: Vec<i32> = ca
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .map(|v| v.round() as i32)
        .collect();

    let (Some(earliest), Some(latest)) = (
        years.iter().copied().min(),
        years.iter().copied().max(),
    ) else {
        return Ok(Stat::NoData);
    };

    Ok(Stat::Value(BirthYearStats {
        earliest,
        latest,
        most_common: most_frequent_all(years),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DayFilter, MonthFilter, SchemaProfile};
    use crate::stats::testutil::{full_profile, view_from};

    fn full_view(
        user_types: Vec<&str>,
        genders: Vec<Option<&str>>,
        years: Vec<Option<f64>>,
    ) -> FilteredView {
        view_from(
            vec![
                Column::from(Series::new(columns::USER_TYPE.into(), user_types)),
                Column::from(Series::new(columns::GENDER.into(), genders)),
                Column::from(Series::new(columns::BIRTH_YEAR.into(), years)),
            ],
            full_profile(),
            MonthFilter::All,
            DayFilter::All,
        )
    }

    #[test]
    fn test_user_type_counts_highest_first() {
        let view = full_view(
            vec!["Subscriber", "Customer", "Subscriber", "Subscriber"],
            vec![Some("Male"), Some("Female"), Some("Female"), None],
            vec![Some(1980.0), Some(1990.0), Some(1990.0), None],
        );
        let stats = compute(&view);
        assert_eq!(
            stats.user_types,
            Stat::Value(vec![("Subscriber".to_owned(), 3), ("Customer".to_owned(), 1)])
        );
        assert_eq!(
            stats.genders,
            Stat::Value(vec![("Female".to_owned(), 2), ("Male".to_owned(), 1)])
        );
    }

    #[test]
    fn test_birth_year_extremes_and_mode_set() {
        let view = full_view(
            vec!["Subscriber"; 4],
            vec![Some("Male"); 4],
            vec![Some(1960.0), Some(1990.0), Some(1960.0), Some(1990.0)],
        );
        let stats = compute(&view);
        assert_eq!(
            stats.birth_years,
            Stat::Value(BirthYearStats {
                earliest: 1960,
                latest: 1990,
                // Both tied years are reported, unlike the single-winner
                // modes.
                most_common: vec![1960, 1990],
            })
        );
    }

    #[test]
    fn test_field_absent_is_distinct_from_no_data() {
        // Washington-style schema: the columns simply do not exist.
        let view = view_from(
            vec![Column::from(Series::new(
                columns::USER_TYPE.into(),
                vec!["Subscriber"],
            ))],
            SchemaProfile {
                gender: false,
                birth_year: false,
            },
            MonthFilter::All,
            DayFilter::All,
        );
        let stats = compute(&view);
        assert_eq!(stats.genders, Stat::FieldAbsent);
        assert_eq!(stats.birth_years, Stat::FieldAbsent);

        // Full schema but zero rows: that is NoData, not FieldAbsent.
        let empty = full_view(Vec::new(), Vec::new(), Vec::new());
        let stats = compute(&empty);
        assert_eq!(stats.user_types, Stat::NoData);
        assert_eq!(stats.genders, Stat::NoData);
        assert_eq!(stats.birth_years, Stat::NoData);
    }

    #[test]
    fn test_all_null_gender_cells_are_no_data() {
        let view = full_view(
            vec!["Customer", "Customer"],
            vec![None, None],
            vec![Some(1985.0), Some(1985.0)],
        );
        let stats = compute(&view);
        assert_eq!(stats.genders, Stat::NoData);
        assert_eq!(
            stats.birth_years,
            Stat::Value(BirthYearStats {
                earliest: 1985,
                latest: 1985,
                most_common: vec![1985],
            })
        );
    }
}
