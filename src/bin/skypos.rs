//! Sky Position Tool
//!
//! Prints where a target stands in an observer's sky: azimuth, altitude,
//! local sidereal time and hour angle, formatted the way the dashboard shows
//! them.
//!
//! Usage:
//!   cargo run --bin skypos -- --ra 5.5h --dec -5.39 --lat 52.23 --lon 21.01
//!   cargo run --bin skypos -- --ra "05ʰ 35ᵐ 17ˢ" --dec "-06° 37′ 00″" --site site.json --json
//!
//! Angles accept decimal degrees, `5.5h`, `1.2rad`, or DMS/HMS strings.
//! Longitude is West negative. Set `RUST_LOG` for log output.

use astroberry_sky::coordinates::{Angle, Equatorial, GeographicPosition, HorizontalCoordinates};
use astroberry_sky::units::{degrees_to_hms, Sexagesimal};
use astroberry_sky::{SiteConfig, Timestamp};
use clap::{ArgAction, Parser};
use serde::Serialize;
use std::path::PathBuf;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Sky Position Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes azimuth and altitude of a target for an observing site",
    long_about = None
)]
struct Args {
    /// Right ascension of the target (e.g. 5.5h, 82.5, "05ʰ 30ᵐ 00ˢ")
    #[arg(long, allow_hyphen_values = true)]
    ra: Angle,

    /// Declination of the target
    #[arg(long, allow_hyphen_values = true)]
    dec: Angle,

    /// Site file (JSON with latitude, longitude and optional name/altitude)
    #[arg(long)]
    site: Option<PathBuf>,

    /// Observer latitude; overrides the site file
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<Angle>,

    /// Observer longitude, West negative; overrides the site file
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<Angle>,

    /// Instant in RFC 3339 (defaults to now)
    #[arg(long)]
    time: Option<Timestamp>,

    /// Reject targets or sites at a celestial or geographic pole
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    /// Carry seconds that round to 60 into minutes
    #[arg(long, action = ArgAction::SetTrue)]
    carry: bool,

    /// Print a JSON report instead of text
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

/// Everything printed for one target
#[derive(Debug, Serialize)]
struct Report {
    time: String,
    julian_date: f64,
    site: GeographicPosition,
    target: Equatorial,
    horizontal: HorizontalCoordinates,
    azimuth: String,
    altitude: String,
    local_sidereal_time: String,
    hour_angle: String,
}

/// Resolve the site from the file and command-line overrides
fn resolve_site(args: &Args) -> Result<GeographicPosition> {
    let base = match &args.site {
        Some(path) => Some(SiteConfig::from_file(path)?.position()),
        None => None,
    };

    let latitude = args
        .lat
        .map(|a| a.to_degrees())
        .or(base.map(|b| b.latitude));
    let longitude = args
        .lon
        .map(|a| a.to_degrees())
        .or(base.map(|b| b.longitude));

    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => {
            let site = SiteConfig {
                name: None,
                latitude,
                longitude,
                altitude: base.and_then(|b| b.altitude),
            };
            site.validate()?;
            Ok(site.position())
        }
        _ => Err("no site: pass --site or both --lat and --lon".into()),
    }
}

/// Format degrees as DMS, optionally carrying, or a placeholder when absent
fn dms(degrees: f64, carry: bool) -> String {
    Sexagesimal::from_value(degrees)
        .map(|s| if carry { s.carried() } else { s })
        .map(|s| s.to_dms_string())
        .unwrap_or_else(|| "--".to_string())
}

fn hms(degrees: f64) -> String {
    degrees_to_hms(degrees).unwrap_or_else(|| "--".to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let site = resolve_site(&args)?;
    let target = Equatorial::from_angles(args.ra, args.dec);
    let at = args.time.unwrap_or_else(Timestamp::now);

    if !at.is_gregorian() {
        log::warn!("{at} precedes the Gregorian calendar; results are not meaningful");
    }
    log::debug!("site {site:?}, target {target:?}, JD {}", at.julian_date());

    let horizontal = if args.strict {
        site.try_horizontal_at(&target, at)?
    } else {
        site.horizontal_at(&target, at)
    };

    let report = Report {
        time: at.to_string(),
        julian_date: at.julian_date(),
        site,
        target,
        horizontal,
        azimuth: dms(horizontal.azimuth_degrees(), args.carry),
        altitude: dms(horizontal.altitude_degrees(), args.carry),
        local_sidereal_time: hms(horizontal.local_sidereal_time_degrees()),
        hour_angle: hms(horizontal.hour_angle_degrees()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Time:      {} (JD {:.6})", report.time, report.julian_date);
    println!(
        "Site:      lat {}  lon {}",
        dms(site.latitude, args.carry),
        dms(site.longitude, args.carry)
    );
    println!(
        "Target:    RA {}  Dec {}",
        hms(target.ra_degrees()),
        dms(target.dec_degrees(), args.carry)
    );
    println!("LST:       {}", report.local_sidereal_time);
    println!("Hour ang.: {}", report.hour_angle);
    println!("Azimuth:   {}", report.azimuth);
    println!(
        "Altitude:  {}{}",
        report.altitude,
        if horizontal.is_above_horizon() {
            ""
        } else {
            "  (below horizon)"
        }
    );

    Ok(())
}
