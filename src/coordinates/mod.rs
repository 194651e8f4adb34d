//! Coordinate types and the equatorial to horizontal transform
//!
//! The core transform, [`ra_dec_to_alt_az`], takes plain radians. The types
//! here wrap the unit juggling the dashboard does around it: a chart reports
//! RA as signed degrees, a mount reports RA in hours, and sites are entered in
//! degrees with West longitudes negative.

pub mod angle;
pub mod horizontal;

pub use angle::{Angle, AngleFormat};
pub use horizontal::{ra_dec_to_alt_az, try_ra_dec_to_alt_az, HorizontalCoordinates};

use crate::constants::{DEG2RAD, DEG_PER_HOUR, RAD2DEG};
use crate::earthlib::normalize_turn;
use crate::time::Timestamp;
use crate::Result;

/// Equatorial coordinates (RA/Dec)
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Equatorial {
    pub ra: f64,  // Right ascension in radians, [0, 2π)
    pub dec: f64, // Declination in radians
}

impl Equatorial {
    pub fn new(ra: f64, dec: f64) -> Self {
        Equatorial {
            ra: normalize_turn(ra),
            dec,
        }
    }

    /// Create from RA and Dec in degrees
    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        Self::new(ra_deg * DEG2RAD, dec_deg * DEG2RAD)
    }

    /// Create from a mount-style RA in hours and Dec in degrees
    pub fn from_hours_degrees(ra_hours: f64, dec_deg: f64) -> Self {
        Self::from_degrees(ra_hours * DEG_PER_HOUR, dec_deg)
    }

    /// Create from a chart-style RA in signed degrees (-180..180)
    pub fn from_signed_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        let ra_deg = if ra_deg < 0.0 { ra_deg + 360.0 } else { ra_deg };
        Self::from_degrees(ra_deg, dec_deg)
    }

    /// Create from unit-tagged angles
    pub fn from_angles(ra: Angle, dec: Angle) -> Self {
        Self::new(ra.to_radians(), dec.to_radians())
    }

    pub fn ra_degrees(&self) -> f64 {
        self.ra * RAD2DEG
    }

    pub fn ra_hours(&self) -> f64 {
        self.ra_degrees() / DEG_PER_HOUR
    }

    pub fn dec_degrees(&self) -> f64 {
        self.dec * RAD2DEG
    }
}

/// An observer's site. Degrees; longitude West negative.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeographicPosition {
    /// Latitude in degrees, [-90, 90]
    pub latitude: f64,
    /// Longitude in degrees, West negative
    pub longitude: f64,
    /// Height above sea level in meters; not used by the transform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

impl GeographicPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeographicPosition {
            latitude,
            longitude,
            altitude: None,
        }
    }

    pub fn with_altitude(mut self, meters: f64) -> Self {
        self.altitude = Some(meters);
        self
    }

    pub fn latitude_radians(&self) -> f64 {
        self.latitude * DEG2RAD
    }

    pub fn longitude_radians(&self) -> f64 {
        self.longitude * DEG2RAD
    }

    /// Where `target` stands in this observer's sky at instant `at`
    pub fn horizontal_at(&self, target: &Equatorial, at: Timestamp) -> HorizontalCoordinates {
        ra_dec_to_alt_az(
            target.ra,
            target.dec,
            self.latitude_radians(),
            self.longitude_radians(),
            at.julian_date(),
        )
    }

    /// Like [`horizontal_at`](Self::horizontal_at) but rejects polar and
    /// non-finite inputs
    pub fn try_horizontal_at(
        &self,
        target: &Equatorial,
        at: Timestamp,
    ) -> Result<HorizontalCoordinates> {
        try_ra_dec_to_alt_az(
            target.ra,
            target.dec,
            self.latitude_radians(),
            self.longitude_radians(),
            at.julian_date(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::earthlib::local_sidereal_time;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_equatorial_conversions() {
        let coord = Equatorial::new(1.5, 0.5);
        assert_eq!(coord.ra, 1.5);
        assert_eq!(coord.dec, 0.5);
        assert_abs_diff_eq!(coord.ra_degrees(), 1.5 * 180.0 / PI, epsilon = 1e-10);
        assert_abs_diff_eq!(coord.dec_degrees(), 0.5 * 180.0 / PI, epsilon = 1e-10);

        let wrapped = Equatorial::new(-PI / 2.0, 0.0);
        assert_abs_diff_eq!(wrapped.ra, 1.5 * PI, epsilon = 1e-15);

        // tiny negative RA rounds up to a full turn under rem_euclid
        let tiny = Equatorial::new(-1e-20, 0.0);
        assert_eq!(tiny.ra, 0.0);
    }

    #[test]
    fn test_chart_and_mount_ra_agree() {
        let chart = Equatorial::from_signed_degrees(-30.0, 12.0);
        let mount = Equatorial::from_hours_degrees(22.0, 12.0);
        assert_abs_diff_eq!(chart.ra, mount.ra, epsilon = 1e-12);
        assert_abs_diff_eq!(chart.ra_hours(), 22.0, epsilon = 1e-12);
    }

    #[test]
    fn test_from_angles() {
        let eq = Equatorial::from_angles(Angle::from_hours(6.0), Angle::from_degrees(-45.0));
        assert_abs_diff_eq!(eq.ra, PI / 2.0, epsilon = 1e-15);
        assert_abs_diff_eq!(eq.dec, -PI / 4.0, epsilon = 1e-15);
    }

    #[test]
    fn test_observer_sees_meridian_transit() {
        let site = GeographicPosition::new(50.0, -3.5).with_altitude(120.0);
        let at = Timestamp::from_millis(1_710_000_000_000);
        let lst = local_sidereal_time(at.julian_date(), site.longitude_radians());
        let target = Equatorial::new(lst, 20.0 * DEG2RAD);

        let hz = site.horizontal_at(&target, at);
        assert_abs_diff_eq!(hz.altitude_degrees(), 60.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hz.azimuth_degrees(), 180.0, epsilon = 1e-6);
        assert!(hz.is_above_horizon());
    }

    #[test]
    fn test_observer_strict_rejects_site_at_pole() {
        let site = GeographicPosition::new(90.0, 0.0);
        let target = Equatorial::from_degrees(10.0, 20.0);
        assert!(site
            .try_horizontal_at(&target, Timestamp::from_millis(0))
            .is_err());
    }

    #[test]
    fn test_site_serde_round_trip() {
        let site = GeographicPosition::new(52.1, 21.0);
        let json = serde_json::to_string(&site).unwrap();
        assert_eq!(json, r#"{"latitude":52.1,"longitude":21.0}"#);
        let back: GeographicPosition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, site);
    }
}
