//! Centralized error handling for the bikeshare pipeline.
//!
//! A single `enum` covers the failure categories the pipeline distinguishes:
//! I/O, frame processing, configuration, and load-time schema problems.
//! `From` impls let the `?` operator convert library errors automatically,
//! and [`ResultExt`] adds a `.context()` method for attaching a message to
//! any error on its way up.
//!
//! Statistic-level failures are deliberately *not* represented here: a
//! statistic that cannot be computed is isolated into
//! [`crate::stats::Stat::Failed`] so the other statistics keep going.

use std::fmt;

/// Main error type for bikeshare operations.
#[derive(Debug)]
pub enum BikeshareError {
    /// I/O errors (reading city exports, config files).
    Io(std::io::Error),

    /// Frame processing errors (Polars, casting, filtering).
    Data(String),

    /// A required column is missing from a city's export.
    MissingColumn { city: String, column: String },

    /// Configuration errors (data-sources file, JSON).
    Config(String),

    /// File not found or invalid path.
    InvalidPath(String),

    /// An input selector that is not one of the canonical values.
    Selector(String),

    /// Generic error with context.
    Other(String),
}

impl fmt::Display for BikeshareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Data(msg) => write!(f, "Data processing error: {msg}"),
            Self::MissingColumn { city, column } => {
                write!(f, "The {city} export is missing the required column '{column}'")
            }
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::InvalidPath(msg) => write!(f, "Invalid path: {msg}"),
            Self::Selector(msg) => write!(f, "Invalid selector: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for BikeshareError {}

impl From<std::io::Error> for BikeshareError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<polars::error::PolarsError> for BikeshareError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::Data(err.to_string())
    }
}

impl From<serde_json::Error> for BikeshareError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<anyhow::Error> for BikeshareError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

/// Result type alias for bikeshare operations.
pub type Result<T> = std::result::Result<T, BikeshareError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<BikeshareError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: BikeshareError = e.into();
            BikeshareError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: BikeshareError = e.into();
            BikeshareError::Other(format!("{}: {}", f(), err))
        })
    }
}
