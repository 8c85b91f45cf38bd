//! Per-statistic result type.
//!
//! Every statistic resolves to either a value or one of three distinct
//! absence sentinels — plus `Failed` for computations that blew up. The
//! absence cases are deliberately separate: "no rows matched" is not the
//! same as "does not apply under these filters" or "this city never
//! recorded that field", and downstream reporting keeps them apart.

use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Stat<T> {
    /// Computed result.
    Value(T),
    /// The filtered view has no rows to aggregate over.
    NoData,
    /// Not meaningful under the current filters (e.g. most common month
    /// when the view is already a single month).
    Inapplicable,
    /// The city's schema does not carry the needed column.
    FieldAbsent,
    /// The computation itself failed; other statistics are unaffected.
    Failed(String),
}

impl<T> Stat<T> {
    /// Run one statistic's computation, converting an error into
    /// [`Stat::Failed`] so a single broken statistic never takes down the
    /// rest of the engine.
    pub fn guard(f: impl FnOnce() -> Result<Self>) -> Self {
        f().unwrap_or_else(|e| {
            tracing::error!(error = %e, "statistic computation failed");
            Self::Failed(e.to_string())
        })
    }

    /// `Value` when present, `NoData` otherwise.
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::NoData, Self::Value)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BikeshareError;

    #[test]
    fn test_from_option() {
        assert_eq!(Stat::from_option(Some(3)), Stat::Value(3));
        assert_eq!(Stat::<i32>::from_option(None), Stat::NoData);
    }

    #[test]
    fn test_guard_isolates_failures() {
        let stat: Stat<i32> =
            Stat::guard(|| Err(BikeshareError::Data("wrong shape".to_owned())));
        assert_eq!(
            stat,
            Stat::Failed("Data processing error: wrong shape".to_owned())
        );
    }

    #[test]
    fn test_absence_cases_stay_distinct() {
        let no_data: Stat<i32> = Stat::NoData;
        let inapplicable: Stat<i32> = Stat::Inapplicable;
        let absent: Stat<i32> = Stat::FieldAbsent;
        assert_ne!(no_data, inapplicable);
        assert_ne!(no_data, absent);
        assert_ne!(inapplicable, absent);
    }
}
