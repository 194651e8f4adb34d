//! Unit helpers for presenting angles
//!
//! Conversions between the hour and degree conventions used by mount drivers
//! and chart widgets, plus the zero padding used by the sexagesimal display.

pub mod sexagesimal;

pub use sexagesimal::{
    degrees_to_hms, degrees_to_sexagesimal, parse_sexagesimal, Sexagesimal, SexagesimalError,
    SexagesimalKind,
};

use crate::constants::DEG_PER_HOUR;

/// Map a right ascension in hours (0..24) onto signed degrees (-180..180].
///
/// Hours above 12 wrap to the negative side: `(h - 24) * 15`. A mount that
/// reports RA in hours can be handed to a chart that expects signed degrees.
pub fn hours_to_degrees(ra_hours: f64) -> f64 {
    if ra_hours > 12.0 {
        (ra_hours - 24.0) * DEG_PER_HOUR
    } else {
        ra_hours * DEG_PER_HOUR
    }
}

/// Zero-pad an integer to two digits for display.
///
/// Values in (-10, 0) keep their sign as `-0N`. Values of -10 and below are
/// printed as-is, and so are values of 10 and above.
pub fn pad(n: i64) -> String {
    if n < 0 {
        if n > -10 {
            format!("-0{}", n.abs())
        } else {
            n.to_string()
        }
    } else if n < 10 {
        format!("0{n}")
    } else {
        n.to_string()
    }
}
