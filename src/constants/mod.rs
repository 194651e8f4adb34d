//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Milliseconds in a day
pub const DAY_MS: f64 = 86_400_000.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Unix epoch (1970-01-01T00:00:00Z) as Julian date
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;
/// Days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

// Calendar constants
/// First instant of the Gregorian calendar (1582-10-15T00:00:00) as Julian date
pub const GREGORIAN_START_JD: f64 = 2_299_160.5;

// Earth rotation (IERS Technical Note 32, eq. 14)
/// Earth rotation angle at J2000.0, in turns
pub const ERA_AT_J2000: f64 = 0.779_057_273_264_0;
/// Excess of the Earth rotation rate over one turn per UT1 day, in turns per day
pub const ERA_RATE_EXCESS: f64 = 0.002_737_811_911_354_48;

/// GMST - ERA polynomial in arcseconds, coefficients of T^0..T^5
/// (Capitaine, Wallace & Chapront 2003, precession model P03, eq. 42)
pub const GMST_POLY_ARCSEC: [f64; 6] = [
    0.014_506,
    4_612.156_534,
    1.391_581_7,
    -0.000_000_44,
    -0.000_029_956,
    -0.000_000_036_8,
];

// Angles
/// Arcseconds to radians conversion factor
pub const ASEC2RAD: f64 = PI / (180.0 * 3_600.0);
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Degrees of rotation per hour of right ascension
pub const DEG_PER_HOUR: f64 = 15.0;

/// Distance from a pole (radians) below which the strict alt/az transform
/// treats a declination or latitude as singular
pub const POLE_TOLERANCE: f64 = 1e-9;
