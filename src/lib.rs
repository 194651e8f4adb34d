//! astroberry-sky: sky position calculations for an observatory dashboard
//!
//! This crate turns an observer's site and a wall-clock instant into the
//! numbers a sky chart panel shows next to a target: Julian date, Earth
//! Rotation Angle, sidereal time, azimuth/altitude, and their sexagesimal
//! display strings.
//!
//! Every function is pure. Nothing holds a "current location" or "current
//! telescope position"; callers pass them in on each call.
//!
//! ```rust
//! use astroberry_sky::{Equatorial, GeographicPosition, Timestamp};
//! use astroberry_sky::units::degrees_to_sexagesimal;
//!
//! // Vega from Warsaw (longitude East, so positive)
//! let site = GeographicPosition::new(52.23, 21.01);
//! let vega = Equatorial::from_hours_degrees(18.615_649, 38.783_69);
//! let hz = site.horizontal_at(&vega, Timestamp::from_millis(1_718_668_800_000));
//!
//! assert!((0.0..360.0).contains(&hz.azimuth_degrees()));
//! assert!(degrees_to_sexagesimal(hz.altitude_degrees()).is_some());
//! ```

use thiserror::Error;

pub mod config;
pub mod constants;
pub mod coordinates;
pub mod earthlib;
pub mod time;
pub mod units;

// Re-export commonly used types
pub use config::SiteConfig;
pub use coordinates::{
    ra_dec_to_alt_az, try_ra_dec_to_alt_az, Angle, Equatorial, GeographicPosition,
    HorizontalCoordinates,
};
pub use earthlib::{earth_rotation_angle, greenwich_mean_sidereal_time, local_sidereal_time};
pub use time::{julian_date_from_unix_time, unix_time_from_julian_date, Timestamp};

/// Main error type for the astroberry-sky library
#[derive(Debug, Error)]
pub enum AstroError {
    #[error("Time error: {0}")]
    Time(#[from] time::TimeError),

    #[error("Format error: {0}")]
    Sexagesimal(#[from] units::SexagesimalError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Singular input: {0}")]
    SingularInput(String),

    #[error("Non-finite input: {0}")]
    NonFinite(String),
}

/// Result type for astroberry-sky operations
pub type Result<T> = std::result::Result<T, AstroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_convert() {
        let err: AstroError = "not-a-date".parse::<Timestamp>().unwrap_err().into();
        assert!(matches!(err, AstroError::Time(_)));

        let err: AstroError = units::parse_sexagesimal("x").unwrap_err().into();
        assert!(err.to_string().starts_with("Format error"));
    }
}
