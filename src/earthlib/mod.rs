//! Earth orientation: Earth Rotation Angle and sidereal time.
//!
//! All functions take a UT Julian date and return radians in `[0, 2π)`.
//!
//! Sources:
//! - ERA: IERS Technical Note 32, eq. 14.
//! - GMST: Capitaine, Wallace & Chapront, "Expressions for IAU 2000
//!   precession quantities" (2003), eq. 42. Precession model P03, in force
//!   since 2009-01-01.

use crate::constants::{
    ASEC2RAD, DAYS_PER_JULIAN_CENTURY, ERA_AT_J2000, ERA_RATE_EXCESS, GMST_POLY_ARCSEC, J2000, TAU,
};

/// Earth Rotation Angle at a given UT Julian date.
///
/// θ = 2π × (frac(jd) + 0.7790572732640 + 0.00273781191135448 × (jd − 2451545.0))
///
/// The fractional part is the raw `jd % 1.0`, which is negative for negative
/// `jd`; the final `rem_euclid` brings every finite input into `[0, 2π)`.
pub fn earth_rotation_angle(jd: f64) -> f64 {
    let t = jd - J2000;
    let f = jd % 1.0;

    let theta = TAU * (f + ERA_AT_J2000 + ERA_RATE_EXCESS * t);
    normalize_turn(theta)
}

/// Greenwich Mean Sidereal Time at a given UT Julian date.
///
/// GMST = ERA + P(T) where T is Julian centuries from J2000.0 and P is the
/// fifth-order P03 polynomial in arcseconds, evaluated with Horner's method.
pub fn greenwich_mean_sidereal_time(jd: f64) -> f64 {
    let t = (jd - J2000) / DAYS_PER_JULIAN_CENTURY;

    let poly_arcsec = GMST_POLY_ARCSEC
        .iter()
        .rev()
        .fold(0.0, |acc, &coeff| acc * t + coeff);

    normalize_turn(earth_rotation_angle(jd) + poly_arcsec * ASEC2RAD)
}

/// Local sidereal time for an observer at `lon` radians, West negative.
pub fn local_sidereal_time(jd: f64, lon: f64) -> f64 {
    normalize_turn(greenwich_mean_sidereal_time(jd) + lon)
}

/// Wrap an angle into `[0, 2π)`.
///
/// `rem_euclid` can return exactly 2π when a tiny negative input rounds up,
/// so that case folds back to zero. Exact negative multiples of 2π give
/// `-0.0`; adding `0.0` clears the sign.
pub(crate) fn normalize_turn(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped + 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;
    use std::f64::consts::PI;

    #[test]
    fn test_era_at_j2000() {
        // frac(2451545.0) = 0 and t = 0, so θ = 2π × 0.7790572732640
        let theta = earth_rotation_angle(J2000);
        assert_abs_diff_eq!(theta, 4.894_961_212_823_756, epsilon = 1e-12);
        assert_abs_diff_eq!(theta.to_degrees(), 280.46, epsilon = 0.01);
    }

    #[test]
    fn test_gmst_at_j2000_adds_constant_term() {
        let expected = 4.894_961_212_823_756 + 0.014_506 * ASEC2RAD;
        assert_abs_diff_eq!(greenwich_mean_sidereal_time(J2000), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_gmst_j2000_midnight() {
        // 2000-01-01 0h UT: GMST = 6h 39m 52.27s
        let hours = greenwich_mean_sidereal_time(2_451_544.5).to_degrees() / 15.0;
        assert_abs_diff_eq!(hours, 6.0 + 39.0 / 60.0 + 52.27 / 3600.0, epsilon = 1e-5);
    }

    #[rstest]
    #[case(2_451_545.0)]
    #[case(2_451_544.5)]
    #[case(2_460_000.5)]
    #[case(0.0)]
    #[case(-0.25)]
    #[case(-1_234_567.891)]
    #[case(1.0e9 + 0.3)]
    fn test_ranges(#[case] jd: f64) {
        let era = earth_rotation_angle(jd);
        let gmst = greenwich_mean_sidereal_time(jd);
        assert!((0.0..TAU).contains(&era), "ERA out of range: {era}");
        assert!((0.0..TAU).contains(&gmst), "GMST out of range: {gmst}");
    }

    #[test]
    fn test_sidereal_day_advance() {
        // One solar day advances the sidereal clock by about 3m 56.56s
        let g1 = greenwich_mean_sidereal_time(2_451_545.0);
        let g2 = greenwich_mean_sidereal_time(2_451_546.0);
        let advance = (g2 - g1).rem_euclid(TAU);
        assert_abs_diff_eq!(advance.to_degrees(), 0.9856, epsilon = 1e-3);
    }

    #[test]
    fn test_local_sidereal_time_west_negative() {
        let jd = 2_460_000.5;
        let gmst = greenwich_mean_sidereal_time(jd);
        let west = local_sidereal_time(jd, -PI / 2.0);
        assert_abs_diff_eq!(west, (gmst - PI / 2.0).rem_euclid(TAU), epsilon = 1e-12);
        assert!((0.0..TAU).contains(&west));
    }

    #[test]
    fn test_normalize_turn_edges() {
        assert_eq!(normalize_turn(0.0), 0.0);
        assert_eq!(normalize_turn(-1e-20), 0.0);
        assert_abs_diff_eq!(normalize_turn(-PI), PI, epsilon = 1e-15);
        assert_abs_diff_eq!(normalize_turn(5.0 * PI), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_turn_clears_negative_zero() {
        for angle in [-TAU, -2.0 * TAU, -0.0] {
            let wrapped = normalize_turn(angle);
            assert_eq!(wrapped, 0.0);
            assert!(wrapped.is_sign_positive(), "{angle} wrapped to {wrapped}");
        }
    }
}
