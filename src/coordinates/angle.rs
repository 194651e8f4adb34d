//! # Unit-tagged angles
//!
//! Mount drivers report right ascension in hours, chart widgets in signed
//! degrees, and the alt/az transform works in radians. `Angle` keeps the value
//! in the unit it was given and only converts when asked, so a value in hours
//! cannot be passed where degrees are expected without an explicit call.
//!
//! ```rust
//! use astroberry_sky::coordinates::angle::{Angle, AngleFormat};
//!
//! let ra: Angle = "05ʰ 30ᵐ 00ˢ".parse().unwrap();
//! assert_eq!(ra.format(), AngleFormat::Hours(5.5));
//! assert_eq!(ra.to_degrees(), 82.5);
//!
//! let dec: Angle = "-12.25".parse().unwrap();
//! assert_eq!(dec.to_dms_string().as_deref(), Some("-13° 45′ 00″"));
//! ```

use crate::constants::{DEG2RAD, DEG_PER_HOUR, RAD2DEG};
use crate::units::sexagesimal::{
    degrees_to_hms, degrees_to_sexagesimal, parse_sexagesimal_parts, SexagesimalError,
    SexagesimalKind,
};
use std::fmt;
use std::str::FromStr;

/// The unit an [`Angle`] was created in, with its exact value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in radians
    Radians(f64),
    /// Angle stored in hours (15° per hour)
    Hours(f64),
}

/// An angle that remembers its unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    angle: AngleFormat,
}

impl Angle {
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    pub fn from_hours(hours: f64) -> Self {
        Angle {
            angle: AngleFormat::Hours(hours),
        }
    }

    /// Value in degrees. Exact when the angle was created in degrees.
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Radians(rad) => rad * RAD2DEG,
            AngleFormat::Hours(hours) => hours * DEG_PER_HOUR,
        }
    }

    /// Value in radians. Exact when the angle was created in radians.
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg * DEG2RAD,
            AngleFormat::Radians(rad) => rad,
            AngleFormat::Hours(hours) => hours * DEG_PER_HOUR * DEG2RAD,
        }
    }

    /// Value in hours. Exact when the angle was created in hours.
    pub fn to_hours(&self) -> f64 {
        match self.angle {
            AngleFormat::Hours(hours) => hours,
            _ => self.to_degrees() / DEG_PER_HOUR,
        }
    }

    /// The stored unit and value
    pub fn format(&self) -> AngleFormat {
        self.angle
    }

    /// `DD° MM′ SS″`, or `None` when the value is not finite
    pub fn to_dms_string(&self) -> Option<String> {
        degrees_to_sexagesimal(self.to_degrees())
    }

    /// `HHʰ MMᵐ SSˢ`, or `None` when the value is not finite
    pub fn to_hms_string(&self) -> Option<String> {
        degrees_to_hms(self.to_degrees())
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.angle {
            AngleFormat::Degrees(deg) => write!(f, "{deg:.6}°"),
            AngleFormat::Radians(rad) => write!(f, "{rad:.6} rad"),
            AngleFormat::Hours(hours) => write!(f, "{hours:.6}h"),
        }
    }
}

impl FromStr for Angle {
    type Err = SexagesimalError;

    /// Accepts `12.5` or `12.5°` (degrees), `1.2rad`, `5.5h`, and the DMS/HMS
    /// strings understood by [`parse_sexagesimal_parts`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();

        if let Ok(deg) = text.trim_end_matches('°').trim_end().parse::<f64>() {
            return Ok(Angle::from_degrees(deg));
        }
        if let Some(rad) = text.strip_suffix("rad") {
            if let Ok(rad) = rad.trim_end().parse::<f64>() {
                return Ok(Angle::from_radians(rad));
            }
        }
        if let Some(hours) = text.strip_suffix('h') {
            if let Ok(hours) = hours.trim_end().parse::<f64>() {
                return Ok(Angle::from_hours(hours));
            }
        }

        let (kind, value) = parse_sexagesimal_parts(text)?;
        Ok(match kind {
            SexagesimalKind::Degrees => Angle::from_degrees(value),
            SexagesimalKind::Hours => Angle::from_hours(value),
        })
    }
}
