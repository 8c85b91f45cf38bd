//! Data-source configuration.
//!
//! The city-to-file lookup is an explicit immutable value handed to the
//! pipeline at construction, not an ambient global. The default layout is
//! `<data_dir>/<city>.csv`; individual cities can be repointed through a
//! JSON file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Result, ResultExt as _};
use crate::model::City;

pub const DEFAULT_DATA_DIR: &str = "data";

/// Where each city's trip-log export lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSources {
    /// Directory holding the per-city CSV exports.
    pub data_dir: PathBuf,
    /// Per-city overrides; cities not listed resolve to
    /// `<data_dir>/<default file>`.
    #[serde(default)]
    pub files: HashMap<City, PathBuf>,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            files: HashMap::new(),
        }
    }
}

impl DataSources {
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            files: HashMap::new(),
        }
    }

    /// Load a sources file written as JSON.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read data sources file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse data sources file: {}", path.display()))
    }

    /// Resolve the export path for one city.
    pub fn path_for(&self, city: City) -> PathBuf {
        self.files
            .get(&city)
            .cloned()
            .unwrap_or_else(|| self.data_dir.join(city.data_file()))
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used)]

    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_default_paths() {
        let sources = DataSources::default();
        assert_eq!(
            sources.path_for(City::Chicago),
            PathBuf::from("data/chicago.csv")
        );
        assert_eq!(
            sources.path_for(City::NewYorkCity),
            PathBuf::from("data/new_york_city.csv")
        );
    }

    #[test]
    fn test_data_dir_override() {
        let sources = DataSources::with_data_dir("/srv/bikeshare");
        assert_eq!(
            sources.path_for(City::Washington),
            PathBuf::from("/srv/bikeshare/washington.csv")
        );
    }

    #[test]
    fn test_from_file_with_per_city_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"data_dir": "exports", "files": {{"chicago": "/mnt/archive/chi_2017.csv"}}}}"#
        )
        .unwrap();

        let sources = DataSources::from_file(file.path()).unwrap();
        assert_eq!(
            sources.path_for(City::Chicago),
            PathBuf::from("/mnt/archive/chi_2017.csv")
        );
        assert_eq!(
            sources.path_for(City::Washington),
            PathBuf::from("exports/washington.csv")
        );
    }

    #[test]
    fn test_from_file_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(DataSources::from_file(file.path()).is_err());
    }
}
