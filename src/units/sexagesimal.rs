//! Sexagesimal (base-60) formatting and parsing
//!
//! Two display notations are produced:
//!
//! - degrees: `DD° MM′ SS″` for declination, altitude, azimuth and site coordinates
//! - hours: `HHʰ MMᵐ SSˢ` for right ascension and hour angles
//!
//! The decomposition is floor based: `whole = floor(v)`, the remainder is
//! split into floored minutes and rounded seconds. Two consequences are kept
//! on purpose for compatibility with existing dashboards:
//!
//! - negative values show a floored whole part with positive minutes and
//!   seconds, so `-0.5°` prints as `-01° 30′ 00″` (read as `-1° + 30′`)
//! - seconds that round up to 60 are not carried, so a value just below
//!   `1°` prints as `00° 59′ 60″`; call [`Sexagesimal::carried`] to fold them
//!
//! ```rust
//! use astroberry_sky::units::{degrees_to_hms, degrees_to_sexagesimal};
//!
//! assert_eq!(degrees_to_sexagesimal(12.5).as_deref(), Some("12° 30′ 00″"));
//! assert_eq!(degrees_to_hms(82.5).as_deref(), Some("05ʰ 30ᵐ 00ˢ"));
//! assert_eq!(degrees_to_sexagesimal(None), None);
//! ```

use super::pad;
use crate::constants::DEG_PER_HOUR;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref DMS_PATTERN: Regex = Regex::new(
        r#"^\s*([+-]?)(\d+)\s*°\s*(\d+)\s*['′]\s*(\d+(?:\.\d+)?)\s*["″]\s*$"#
    )
    .expect("DMS pattern is valid");
    static ref HMS_PATTERN: Regex =
        Regex::new(r"^\s*([+-]?)(\d+)\s*[hʰ]\s*(\d+)\s*[mᵐ]\s*(\d+(?:\.\d+)?)\s*[sˢ]\s*$")
            .expect("HMS pattern is valid");
}

/// Errors from parsing sexagesimal strings
#[derive(Debug, Error, PartialEq)]
pub enum SexagesimalError {
    #[error("Invalid sexagesimal format: {0:?}")]
    InvalidFormat(String),

    #[error("{component} out of range: {value}")]
    ComponentOutOfRange {
        /// Which field was rejected ("minutes" or "seconds")
        component: &'static str,
        /// The rejected value
        value: f64,
    },
}

/// Which notation a parsed string used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SexagesimalKind {
    /// `DD° MM′ SS″`
    Degrees,
    /// `HHʰ MMᵐ SSˢ`
    Hours,
}

/// A value split into whole units, minutes and rounded seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sexagesimal {
    /// Floored whole part (degrees or hours); carries the sign
    pub whole: i64,
    /// Floored minutes, 0..=59
    pub minutes: i64,
    /// Rounded seconds, 0..=60
    pub seconds: i64,
}

impl Sexagesimal {
    /// Decompose a value. Returns `None` for NaN and infinities.
    pub fn from_value(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let whole = value.floor();
        let rest1 = (value - whole) * 60.0;
        let minutes = rest1.floor();
        let rest2 = (rest1 - minutes) * 60.0;
        let seconds = rest2.round();

        Some(Sexagesimal {
            whole: whole as i64,
            minutes: minutes as i64,
            seconds: seconds as i64,
        })
    }

    /// Fold a seconds value of 60 into minutes, and 60 minutes into the whole part.
    pub fn carried(self) -> Self {
        let mut out = self;
        if out.seconds >= 60 {
            out.seconds -= 60;
            out.minutes += 1;
        }
        if out.minutes >= 60 {
            out.minutes -= 60;
            out.whole += 1;
        }
        out
    }

    /// The value this decomposition stands for, to the nearest second
    pub fn to_value(&self) -> f64 {
        self.whole as f64 + self.minutes as f64 / 60.0 + self.seconds as f64 / 3600.0
    }

    /// Render as `DD° MM′ SS″`
    pub fn to_dms_string(&self) -> String {
        format!(
            "{}° {}′ {}″",
            pad(self.whole),
            pad(self.minutes),
            pad(self.seconds)
        )
    }

    /// Render as `HHʰ MMᵐ SSˢ`
    pub fn to_hms_string(&self) -> String {
        format!(
            "{}ʰ {}ᵐ {}ˢ",
            pad(self.whole),
            pad(self.minutes),
            pad(self.seconds)
        )
    }
}

/// Format decimal degrees as `DD° MM′ SS″`.
///
/// Accepts an `f64` or an `Option<f64>`; `None`, NaN and infinities give `None`
/// so a caller filling many display fields can skip the absent ones.
pub fn degrees_to_sexagesimal(deg: impl Into<Option<f64>>) -> Option<String> {
    deg.into()
        .and_then(Sexagesimal::from_value)
        .map(|s| s.to_dms_string())
}

/// Format a right-ascension-like degree value as `HHʰ MMᵐ SSˢ`.
///
/// Negative degrees are wrapped into `[0, 360)` before dividing by 15, so
/// `-30°` and `330°` print the same. Non-negative input is not wrapped.
pub fn degrees_to_hms(deg: impl Into<Option<f64>>) -> Option<String> {
    deg.into()
        .filter(|d| d.is_finite())
        .map(|d| if d < 0.0 { d.rem_euclid(360.0) } else { d })
        .and_then(|d| Sexagesimal::from_value(d / DEG_PER_HOUR))
        .map(|s| s.to_hms_string())
}

/// Parse a sexagesimal string into its notation and value in that notation's
/// unit (degrees for DMS, hours for HMS).
///
/// The value is `whole + minutes/60 + seconds/3600`, matching the floor-based
/// output of the formatters: `"-01° 30′ 00″"` is `-0.5`. A negative zero whole
/// part with non-zero minutes or seconds is never produced by the formatters
/// and is rejected as ambiguous. ASCII `'`, `"` and `h m s` are accepted in
/// place of the typographic marks.
pub fn parse_sexagesimal_parts(s: &str) -> Result<(SexagesimalKind, f64), SexagesimalError> {
    let (kind, caps) = if let Some(caps) = DMS_PATTERN.captures(s) {
        (SexagesimalKind::Degrees, caps)
    } else if let Some(caps) = HMS_PATTERN.captures(s) {
        (SexagesimalKind::Hours, caps)
    } else {
        return Err(SexagesimalError::InvalidFormat(s.to_string()));
    };

    let number = |i: usize| -> Result<f64, SexagesimalError> {
        caps[i]
            .parse::<f64>()
            .map_err(|_| SexagesimalError::InvalidFormat(s.to_string()))
    };

    let negative = &caps[1] == "-";
    let whole = number(2)?;
    let minutes = number(3)?;
    let seconds = number(4)?;

    if minutes >= 60.0 {
        return Err(SexagesimalError::ComponentOutOfRange {
            component: "minutes",
            value: minutes,
        });
    }
    // 60 is allowed: the formatters emit it when rounding does not carry
    if seconds > 60.0 {
        return Err(SexagesimalError::ComponentOutOfRange {
            component: "seconds",
            value: seconds,
        });
    }
    if negative && whole == 0.0 && (minutes > 0.0 || seconds > 0.0) {
        return Err(SexagesimalError::InvalidFormat(s.to_string()));
    }

    let whole = if negative { -whole } else { whole };
    Ok((kind, whole + minutes / 60.0 + seconds / 3600.0))
}

/// Parse a DMS or HMS string into decimal degrees.
pub fn parse_sexagesimal(s: &str) -> Result<f64, SexagesimalError> {
    let (kind, value) = parse_sexagesimal_parts(s)?;
    Ok(match kind {
        SexagesimalKind::Degrees => value,
        SexagesimalKind::Hours => value * DEG_PER_HOUR,
    })
}
