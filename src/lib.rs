//! # Bikeshare — trip-log analysis
//!
//! Descriptive statistics over historical bicycle-share trip logs for a
//! chosen city, optionally filtered by calendar month and weekday, plus a
//! paged view of the raw records.
//!
//! ## Quick start
//!
//! ```no_run
//! use bikeshare::config::DataSources;
//! use bikeshare::model::{City, DayFilter, MonthFilter};
//!
//! # fn main() -> anyhow::Result<()> {
//! let sources = DataSources::default();
//! let report = bikeshare::pipeline::analyse(
//!     &sources,
//!     City::Chicago,
//!     "june".parse::<MonthFilter>()?,
//!     DayFilter::All,
//! )?;
//! println!("{}", bikeshare::report::render(&report));
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`pipeline`]: load → derive → filter, and the fan-out to the engines
//! - [`stats`]: the four independent statistics engines and the
//!   sentinel-carrying [`stats::Stat`] result type
//! - [`paginate`]: five-records-at-a-time cursor over the filtered view
//! - [`report`]: text/JSON rendering of results
//! - [`session`]: interactive prompt/restart state machine
//! - [`config`]: explicit city → export-file configuration
//! - [`error`]: error types and handling utilities
//!
//! ## Design notes
//!
//! The dataset has a single-writer-then-many-readers lifecycle: it is
//! only mutated during load/derive/filter and is strictly read-only once
//! the engines see it. Each engine returns a result per statistic that is
//! either a value or a typed absence (`NoData`, `Inapplicable`,
//! `FieldAbsent`) — the three are distinct on purpose and are never
//! collapsed in reporting.

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod paginate;
pub mod pipeline;
pub mod report;
pub mod session;
pub mod stats;
