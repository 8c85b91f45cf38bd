//! The four read-only statistics engines and their shared helpers.
//!
//! Each engine consumes the same filtered view and produces an independent
//! result struct; none of them mutates anything, so they can run in any
//! order. "Most frequent" uses the first-encountered tie-break everywhere
//! except the birth-year mode, which reports the whole tied set (see
//! [`user`]).

pub mod duration;
pub mod outcome;
pub mod station;
pub mod time;
pub mod user;

pub use outcome::Stat;

use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

/// The single most frequent value, ties broken by first encounter in
/// iteration order. `None` on an empty input.
pub(crate) fn most_frequent<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (idx, value) in values.into_iter().enumerate() {
        let entry = counts.entry(value).or_insert((0, idx));
        entry.0 += 1;
    }
    counts
        .into_iter()
        .max_by_key(|&(_, (count, first_idx))| (count, Reverse(first_idx)))
        .map(|(value, _)| value)
}

/// All values tied for the highest count, sorted ascending. Empty on an
/// empty input.
pub(crate) fn most_frequent_all<T, I>(values: I) -> Vec<T>
where
    T: Eq + Hash + Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    let Some(max) = counts.values().copied().max() else {
        return Vec::new();
    };
    let mut winners: Vec<T> = counts
        .into_iter()
        .filter(|&(_, count)| count == max)
        .map(|(value, _)| value)
        .collect();
    winners.sort_unstable();
    winners
}

/// Full frequency table, highest count first; ties keep first-encounter
/// order.
pub(crate) fn frequency_table<T, I>(values: I) -> Vec<(T, u64)>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (u64, usize)> = HashMap::new();
    for (idx, value) in values.into_iter().enumerate() {
        let entry = counts.entry(value).or_insert((0, idx));
        entry.0 += 1;
    }
    let mut table: Vec<(T, u64, usize)> = counts
        .into_iter()
        .map(|(value, (count, first_idx))| (value, count, first_idx))
        .collect();
    table.sort_by_key(|&(_, count, first_idx)| (Reverse(count), first_idx));
    table
        .into_iter()
        .map(|(value, count, _)| (value, count))
        .collect()
}

#[cfg(test)]
pub(crate) mod testutil {
    #![expect(clippy::unwrap_used)]

    use polars::prelude::*;

    use crate::model::{City, DayFilter, MonthFilter, SchemaProfile};
    use crate::pipeline::FilteredView;

    pub fn view_from(
        cols: Vec<Column>,
        profile: SchemaProfile,
        month: MonthFilter,
        day: DayFilter,
    ) -> FilteredView {
        FilteredView {
            city: City::Chicago,
            df: DataFrame::new(cols).unwrap(),
            profile,
            month,
            day,
            excluded_rows: 0,
        }
    }

    pub fn full_profile() -> SchemaProfile {
        SchemaProfile {
            gender: true,
            birth_year: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_frequent_first_encounter_tie_break() {
        assert_eq!(most_frequent([5, 5, 9, 9]), Some(5));
        assert_eq!(most_frequent([9, 5, 9, 5]), Some(9));
        assert_eq!(most_frequent([1, 2, 2, 1, 3]), Some(1));
    }

    #[test]
    fn test_most_frequent_empty() {
        assert_eq!(most_frequent(Vec::<i32>::new()), None);
    }

    #[test]
    fn test_most_frequent_all_reports_ties_sorted() {
        assert_eq!(most_frequent_all([1990, 1985, 1990, 1985]), vec![1985, 1990]);
        assert_eq!(most_frequent_all([1991, 1991, 1960]), vec![1991]);
        assert!(most_frequent_all(Vec::<i32>::new()).is_empty());
    }

    #[test]
    fn test_frequency_table_ordering() {
        let table = frequency_table(["b", "a", "b", "c", "a", "b"]);
        assert_eq!(table, vec![("b", 3), ("a", 2), ("c", 1)]);

        // Tied counts keep first-encounter order.
        let tied = frequency_table(["x", "y", "x", "y"]);
        assert_eq!(tied, vec![("x", 2), ("y", 2)]);
    }
}
