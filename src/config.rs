//! Dataset configuration.
//!
//! Tells the loader where the hero dataset lives. The path defaults to
//! `data/superheroes.json` and can be overridden with the `HERODEX_DATA`
//! environment variable.

use crate::source::JsonFileSource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable that overrides the dataset path.
pub const DATA_PATH_ENV: &str = "HERODEX_DATA";

/// Default dataset path, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/superheroes.json";

/// Where to load the hero dataset from.
///
/// # Examples
///
/// ```rust
/// use herodex::DatasetConfig;
///
/// let config = DatasetConfig::default();
/// assert!(config.path.ends_with("superheroes.json"));
///
/// let custom = DatasetConfig::new("/srv/heroes.json");
/// assert_eq!(custom.source().path(), std::path::Path::new("/srv/heroes.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}

impl DatasetConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build the config from the environment, falling back to the default
    /// path when `HERODEX_DATA` is unset or blank.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(DATA_PATH_ENV) {
            Some(path) if !path.trim().is_empty() => Self::new(path.trim()),
            _ => Self::default(),
        }
    }

    /// A file source reading from the configured path.
    pub fn source(&self) -> JsonFileSource {
        JsonFileSource::new(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_override() {
        let config = DatasetConfig::from_lookup(|key| {
            (key == DATA_PATH_ENV).then(|| "/tmp/heroes.json".to_string())
        });
        assert_eq!(config.path, PathBuf::from("/tmp/heroes.json"));
    }

    #[test]
    fn test_blank_override_uses_default() {
        let config = DatasetConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, DatasetConfig::default());
    }

    #[test]
    fn test_unset_uses_default() {
        let config = DatasetConfig::from_lookup(|_| None);
        assert_eq!(config.path, PathBuf::from(DEFAULT_DATA_PATH));
    }
}
