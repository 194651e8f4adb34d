//! Equatorial to horizontal (alt/az) conversion.
//!
//! Meeus, *Astronomical Algorithms*, formulas 13.5 and 13.6, with two changes
//! that callers must keep in mind:
//!
//! - longitude is **West negative** (East positive). Meeus counts West as
//!   positive; feeding a Meeus-convention longitude here mirrors the result
//!   east/west.
//! - azimuth is measured from **North** through East, not from South.
//!
//! All angles are radians. The Julian date is UT.

use crate::constants::{POLE_TOLERANCE, RAD2DEG, TAU};
use crate::earthlib::{local_sidereal_time, normalize_turn};
use crate::{AstroError, Result};
use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

/// Result of an equatorial to horizontal conversion. All fields in radians.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HorizontalCoordinates {
    /// Azimuth from North through East, `[0, 2π)`
    pub azimuth: f64,
    /// Altitude above the horizon, `[-π/2, π/2]`
    pub altitude: f64,
    /// Local sidereal time, `[0, 2π)`
    pub local_sidereal_time: f64,
    /// Hour angle, positive West of the meridian
    pub hour_angle: f64,
}

impl HorizontalCoordinates {
    /// `[az, alt, lst, H]` in that order
    pub fn to_array(&self) -> [f64; 4] {
        [
            self.azimuth,
            self.altitude,
            self.local_sidereal_time,
            self.hour_angle,
        ]
    }

    pub fn azimuth_degrees(&self) -> f64 {
        self.azimuth * RAD2DEG
    }

    pub fn altitude_degrees(&self) -> f64 {
        self.altitude * RAD2DEG
    }

    /// Local sidereal time in degrees (divide by 15 for hours)
    pub fn local_sidereal_time_degrees(&self) -> f64 {
        self.local_sidereal_time * RAD2DEG
    }

    /// Hour angle in degrees
    pub fn hour_angle_degrees(&self) -> f64 {
        self.hour_angle * RAD2DEG
    }

    /// Whether the object is above the mathematical horizon
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

impl fmt::Display for HorizontalCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(az {:.6}°, alt {:.6}°)",
            self.azimuth_degrees(),
            self.altitude_degrees()
        )
    }
}

/// Convert right ascension and declination to azimuth and altitude.
///
/// Inputs: `ra`, `dec` of the target, `lat`, `lon` of the observer (West
/// negative), all radians, and `jd` in UT.
///
/// No input is rejected. A declination of exactly ±π/2 sends `tan(dec)` to
/// infinity and the azimuth is meaningless there; NaN inputs give NaN
/// outputs. Use [`try_ra_dec_to_alt_az`] to reject such inputs instead.
pub fn ra_dec_to_alt_az(ra: f64, dec: f64, lat: f64, lon: f64, jd: f64) -> HorizontalCoordinates {
    let lst = local_sidereal_time(jd, lon);

    let mut h = lst - ra;
    if h < 0.0 {
        h += TAU;
    }
    if h > PI {
        h -= TAU;
    }

    let az = h
        .sin()
        .atan2(h.cos() * lat.sin() - dec.tan() * lat.cos());
    // clamp only absorbs rounding above 1; NaN passes through
    let alt = (lat.sin() * dec.sin() + lat.cos() * dec.cos() * h.cos())
        .clamp(-1.0, 1.0)
        .asin();

    // atan2 measures from South; shift the zero to North
    let azimuth = normalize_turn(az - PI);

    log::trace!(
        "ra={ra} dec={dec} lat={lat} lon={lon} jd={jd} -> az={azimuth} alt={alt} lst={lst} H={h}"
    );

    HorizontalCoordinates {
        azimuth,
        altitude: alt,
        local_sidereal_time: lst,
        hour_angle: h,
    }
}

/// Like [`ra_dec_to_alt_az`], but rejects non-finite inputs and declinations
/// or latitudes within [`POLE_TOLERANCE`] of a pole.
pub fn try_ra_dec_to_alt_az(
    ra: f64,
    dec: f64,
    lat: f64,
    lon: f64,
    jd: f64,
) -> Result<HorizontalCoordinates> {
    for (name, value) in [("ra", ra), ("dec", dec), ("lat", lat), ("lon", lon), ("jd", jd)] {
        if !value.is_finite() {
            return Err(AstroError::NonFinite(format!("{name} = {value}")));
        }
    }

    for (name, value) in [("declination", dec), ("latitude", lat)] {
        if value.abs() > FRAC_PI_2 - POLE_TOLERANCE {
            log::warn!("rejecting alt/az conversion: {name} {value} rad is at a pole");
            return Err(AstroError::SingularInput(format!(
                "{name} {value} rad is within {POLE_TOLERANCE} rad of a pole"
            )));
        }
    }

    Ok(ra_dec_to_alt_az(ra, dec, lat, lon, jd))
}
