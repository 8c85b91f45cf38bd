//! Loading raw city exports.

use polars::prelude::*;

use crate::config::DataSources;
use crate::error::{BikeshareError, Result, ResultExt as _};
use crate::model::{City, SchemaProfile, columns};

/// One city's trip log as read from disk, before field derivation.
#[derive(Debug, Clone)]
pub struct RawDataset {
    pub city: City,
    pub df: DataFrame,
    pub profile: SchemaProfile,
}

/// Read the export for `city` and verify its schema.
///
/// Timestamps are kept as plain strings here; parsing them is the
/// deriver's job so that unparseable rows can be counted and reported
/// instead of disappearing inside the reader.
pub fn load_city(sources: &DataSources, city: City) -> Result<RawDataset> {
    let path = sources.path_for(city);
    tracing::info!(city = city.display_name(), path = %path.display(), "loading trip records");

    if !path.is_file() {
        return Err(BikeshareError::InvalidPath(format!(
            "no export for {} at {}",
            city.display_name(),
            path.display()
        )));
    }

    let df = LazyCsvReader::new(path.as_path())
        .with_infer_schema_length(Some(10_000))
        .with_has_header(true)
        .finish()?
        .collect()
        .with_context(|| format!("Failed to read {}", path.display()))?;

    for column in columns::REQUIRED {
        if df.column(column).is_err() {
            return Err(BikeshareError::MissingColumn {
                city: city.display_name().to_owned(),
                column: column.to_owned(),
            });
        }
    }

    // Optional-column capability is decided once per city, from the header.
    let profile = SchemaProfile {
        gender: df.column(columns::GENDER).is_ok(),
        birth_year: df.column(columns::BIRTH_YEAR).is_ok(),
    };

    tracing::debug!(
        rows = df.height(),
        gender = profile.gender,
        birth_year = profile.birth_year,
        "city export loaded"
    );

    Ok(RawDataset { city, df, profile })
}
