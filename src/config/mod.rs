//! Observer site configuration
//!
//! A site is a small JSON document:
//!
//! ```json
//! { "name": "Backyard", "latitude": 52.23, "longitude": 21.01, "altitude": 110 }
//! ```
//!
//! `name` and `altitude` are optional. Longitude is West negative.

use crate::coordinates::GeographicPosition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading a site file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error when the site file cannot be read
    #[error("File I/O error on {path:?}: {source}")]
    FileError {
        /// The path of the file that caused the error
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Error when the document is not valid site JSON
    #[error("Invalid site document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Error when the coordinates are outside their valid range
    #[error("Invalid site: {0}")]
    InvalidSite(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// An observing site as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Latitude in degrees, [-90, 90]
    pub latitude: f64,
    /// Longitude in degrees, West negative
    pub longitude: f64,
    /// Height above sea level in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

impl SiteConfig {
    /// Parse and validate a site from a JSON string
    pub fn from_json(text: &str) -> Result<Self> {
        let site: SiteConfig = serde_json::from_str(text)?;
        site.validate()?;
        Ok(site)
    }

    /// Load and validate a site from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::FileError {
            path: path.to_path_buf(),
            source,
        })?;
        let site = Self::from_json(&text)?;
        log::info!(
            "loaded site {} ({}, {}) from {}",
            site.name.as_deref().unwrap_or("<unnamed>"),
            site.latitude,
            site.longitude,
            path.display()
        );
        Ok(site)
    }

    /// Check coordinate ranges
    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ConfigError::InvalidSite(format!(
                "latitude {} is outside [-90, 90]",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() {
            return Err(ConfigError::InvalidSite(format!(
                "longitude {} is not a number",
                self.longitude
            )));
        }
        Ok(())
    }

    /// The site as a position the transform can use
    pub fn position(&self) -> GeographicPosition {
        GeographicPosition {
            latitude: self.latitude,
            longitude: self.longitude,
            altitude: self.altitude,
        }
    }
}

impl From<GeographicPosition> for SiteConfig {
    fn from(position: GeographicPosition) -> Self {
        SiteConfig {
            name: None,
            latitude: position.latitude,
            longitude: position.longitude,
            altitude: position.altitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_site_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "name": "Backyard", "latitude": 52.23, "longitude": -1.5, "altitude": 110 }}"#
        )
        .unwrap();

        let site = SiteConfig::from_file(file.path()).unwrap();
        assert_eq!(site.name.as_deref(), Some("Backyard"));
        assert_eq!(site.position(), GeographicPosition::new(52.23, -1.5).with_altitude(110.0));
    }

    #[test]
    fn test_optional_fields() {
        let site = SiteConfig::from_json(r#"{"latitude": -33.9, "longitude": 18.4}"#).unwrap();
        assert_eq!(site.name, None);
        assert_eq!(site.altitude, None);
    }

    #[test]
    fn test_rejects_bad_latitude() {
        let err = SiteConfig::from_json(r#"{"latitude": 91.0, "longitude": 0.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSite(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SiteConfig::from_json(r#"{"latitude": "north"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::FileError { .. }));
    }

    #[test]
    fn test_from_position() {
        let site: SiteConfig = GeographicPosition::new(10.0, 20.0).into();
        assert_eq!(
            serde_json::to_string(&site).unwrap(),
            r#"{"latitude":10.0,"longitude":20.0}"#
        );
    }
}
