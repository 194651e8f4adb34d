//! Time module for astronomical time calculations
//!
//! Instants are carried as integer milliseconds since the Unix epoch (UTC) and
//! converted to Julian dates for the Earth-orientation formulas. No timezone
//! or leap-second handling happens here: the caller passes UTC and the Julian
//! date is treated as UT.
//!
//! The affine Unix/JD mapping is only meaningful for instants on or after
//! 1582-10-15, the first day of the Gregorian calendar. The plain conversion
//! functions do not check this; [`checked_julian_date_from_unix_time`] does.

use crate::constants::{DAY_MS, GREGORIAN_START_JD, UNIX_EPOCH_JD};
use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;
use thiserror::Error;

/// Error type for time operations
#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),

    #[error("Time out of range: {0}")]
    OutOfRange(String),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// Convert Unix time in milliseconds to a Julian date (UT).
///
/// `jd = unix_millis / 86400000 + 2440587.5`. Not valid before 1582-10-15.
pub fn julian_date_from_unix_time(unix_millis: i64) -> f64 {
    unix_millis as f64 / DAY_MS + UNIX_EPOCH_JD
}

/// Convert a Julian date (UT) back to Unix time in milliseconds.
///
/// Exact inverse of [`julian_date_from_unix_time`]: `(jd - 2440587.5) * 86400000`.
/// The result is fractional; use [`Timestamp::from_julian_date`] for an
/// integer instant.
pub fn unix_time_from_julian_date(jd: f64) -> f64 {
    (jd - UNIX_EPOCH_JD) * DAY_MS
}

/// Like [`julian_date_from_unix_time`], but rejects instants before the
/// Gregorian calendar reform.
pub fn checked_julian_date_from_unix_time(unix_millis: i64) -> Result<f64> {
    let jd = julian_date_from_unix_time(unix_millis);
    if is_gregorian(jd) {
        Ok(jd)
    } else {
        Err(TimeError::OutOfRange(format!(
            "JD {jd} precedes the Gregorian calendar (JD {GREGORIAN_START_JD})"
        )))
    }
}

/// Whether a Julian date falls on or after 1582-10-15T00:00:00.
pub fn is_gregorian(jd: f64) -> bool {
    jd >= GREGORIAN_START_JD
}

/// An instant in UTC as integer milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a timestamp from Unix milliseconds
    pub fn from_millis(unix_millis: i64) -> Self {
        Timestamp(unix_millis)
    }

    /// Get the current wall-clock time
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Create a timestamp from a UTC datetime, truncated to milliseconds
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Timestamp(dt.timestamp_millis())
    }

    /// Create a timestamp from a Julian date, rounded to the nearest millisecond.
    ///
    /// Non-finite dates and dates beyond the `i64` millisecond range are
    /// rejected rather than clamped.
    pub fn from_julian_date(jd: f64) -> Result<Self> {
        let millis = unix_time_from_julian_date(jd).round();
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        if !millis.is_finite() || millis < i64::MIN as f64 || millis >= i64::MAX as f64 {
            return Err(TimeError::OutOfRange(format!(
                "JD {jd} is not representable as Unix milliseconds"
            )));
        }
        Ok(Timestamp(millis as i64))
    }

    /// Unix milliseconds
    pub fn millis(&self) -> i64 {
        self.0
    }

    /// Julian date (UT) of this instant
    pub fn julian_date(&self) -> f64 {
        julian_date_from_unix_time(self.0)
    }

    /// Whether the Julian date of this instant is meaningful
    pub fn is_gregorian(&self) -> bool {
        is_gregorian(self.julian_date())
    }

    /// Get the UTC datetime
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.0).ok_or_else(|| {
            TimeError::OutOfRange(format!("{} ms is not representable as a date", self.0))
        })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Ok(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            Err(_) => write!(f, "<Timestamp ms={}>", self.0),
        }
    }
}

impl FromStr for Timestamp {
    type Err = TimeError;

    /// Parse an RFC 3339 string (any offset is converted to UTC)
    fn from_str(s: &str) -> Result<Self> {
        let dt = DateTime::parse_from_rfc3339(s.trim())
            .map_err(|e| TimeError::InvalidFormat(format!("{s:?}: {e}")))?;
        Ok(Self::from_datetime(dt.with_timezone(&Utc)))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

/// Saturates at the ends of the `i64` millisecond range.
impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, duration: Duration) -> Self::Output {
        Timestamp(self.0.saturating_add(duration.num_milliseconds()))
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Timestamp;

    fn sub(self, duration: Duration) -> Self::Output {
        Timestamp(self.0.saturating_sub(duration.num_milliseconds()))
    }
}

impl Sub<Timestamp> for Timestamp {
    type Output = Duration;

    fn sub(self, other: Timestamp) -> Self::Output {
        // TimeDelta stops at ±i64::MAX ms
        Duration::milliseconds(self.0.saturating_sub(other.0).max(-i64::MAX))
    }
}
