//! Print sunrise/sunset or twilight times for a place and date.
//!
//! ```text
//! cargo run --example sunrise -- 51.48 0.0 --date 2024-03-20 --limits civil -z +1 -v
//! cargo run --example sunrise -- --list-limits
//! ```

use std::fmt::Write as _;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use sunhour::{
    assemble, CalendarDate, GeoPosition, Outcome, Report, ReportRequest, SunhourError, Threshold,
    ThresholdSelection, TimeBasis,
};

#[derive(Parser, Debug)]
#[command(name = "sunrise", about = "Sunrise calculator", allow_negative_numbers = true)]
struct Cli {
    /// Latitude (degrees) of the sunrise location
    #[arg(required_unless_present = "list_limits")]
    latitude: Option<f64>,
    /// Longitude (degrees, east positive) of the sunrise location
    #[arg(required_unless_present = "list_limits")]
    longitude: Option<f64>,
    /// Use the given date (YYYY-MM-DD) rather than today
    #[arg(short, long)]
    date: Option<CalendarDate>,
    /// Also format times in the given integer timezone (+03, -6)
    #[arg(short = 'z', long)]
    timezone: Option<i32>,
    /// Which lightness level to calculate, or `all`
    #[arg(long, default_value = "sunrise")]
    limits: ThresholdSelection,
    /// List and describe the lightness-level limits
    #[arg(long)]
    list_limits: bool,
    /// Be more verbose. Can be used multiple times
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.list_limits {
        print!("{}", list_limits());
        return ExitCode::SUCCESS;
    }
    match request(&cli) {
        Ok(request) => {
            print!("{}", render(&assemble(&request), cli.verbose));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn request(cli: &Cli) -> Result<ReportRequest, SunhourError> {
    // clap enforces both coordinates unless `--list-limits` is given.
    let position = GeoPosition::from_degrees(
        cli.latitude.unwrap_or_default(),
        cli.longitude.unwrap_or_default(),
    )?;
    let date = cli.date.unwrap_or_else(CalendarDate::today);
    let request = ReportRequest::new(date, position).with_thresholds(cli.limits);
    Ok(match cli.timezone {
        Some(hours) => request.with_offset(hours),
        None => request,
    })
}

fn list_limits() -> String {
    let mut out = String::new();
    for t in Threshold::catalog() {
        let _ = writeln!(
            out,
            "{: <12} {: <61} ({: >4} degrees below the horizon)",
            t.id,
            t.description,
            t.elevation_below_horizon.value()
        );
    }
    out
}

fn render(report: &Report, verbose: u8) -> String {
    let eph = &report.ephemeris;
    let mut out = String::new();
    for limit in &report.limits {
        let t = limit.threshold;
        let _ = writeln!(out, "Calculating {} limits for {}", t.id, report.date);
        if verbose > 0 {
            let _ = writeln!(
                out,
                "Using sun decl {} rad (= {} degrees)",
                eph.declination.value(),
                eph.declination_degrees().value()
            );
        }
        if verbose > 1 {
            let _ = writeln!(out, "cos(hour): {}", limit.cos_hour_angle);
        }
        if verbose > 0 {
            let _ = writeln!(
                out,
                "Equation of time: adjusting noon by {}",
                report.noon_adjustment()
            );
        }
        out.push('\n');

        let rows = match &limit.outcome {
            Outcome::PolarDay => {
                out.push_str("Polar day\n\n");
                continue;
            }
            Outcome::PolarNight => {
                out.push_str("Polar night\n\n");
                continue;
            }
            Outcome::Crossings(rows) => rows,
        };

        let rising = capitalize(t.name_rising);
        let setting = capitalize(t.name_setting);
        let width = rising.len().max(setting.len()) + 2;
        for row in rows {
            let day = &row.instants;
            let _ = writeln!(out, "{rising:<width$}{} {}", day.rise, row.basis);
            if row.basis != TimeBasis::LocalSolar {
                let _ = writeln!(out, "{:<width$}{} {}", "Noon", day.noon, row.basis);
            }
            let _ = writeln!(out, "{setting:<width$}{} {}", day.set, row.basis);
        }
        out.push('\n');
    }
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use sunhour::ThresholdId;

    #[test]
    fn mirrors_the_option_surface() {
        let cli = Cli::try_parse_from([
            "sunrise", "-33.9", "151.2", "-d", "2024-01-15", "-z", "-6", "--limits", "all", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.latitude, Some(-33.9));
        assert_eq!(cli.longitude, Some(151.2));
        assert_eq!(cli.date, Some("2024-01-15".parse().unwrap()));
        assert_eq!(cli.timezone, Some(-6));
        assert_eq!(cli.limits, ThresholdSelection::All);
        assert_eq!(cli.verbose, 2);

        let defaults = Cli::try_parse_from(["sunrise", "10", "20"]).unwrap();
        assert_eq!(defaults.limits, ThresholdSelection::One(ThresholdId::Sunrise));
        assert_eq!(defaults.verbose, 0);
        assert!(Cli::try_parse_from(["sunrise", "--list-limits"]).unwrap().list_limits);
    }

    #[test]
    fn non_numeric_coordinates_are_parse_errors() {
        let err = Cli::try_parse_from(["sunrise", "abc", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        let err = Cli::try_parse_from(["sunrise", "10"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        let err = Cli::try_parse_from(["sunrise", "10", "0", "--limits", "dusk"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn out_of_range_latitude_is_a_range_error() {
        let cli = Cli::try_parse_from(["sunrise", "95", "0"]).unwrap();
        assert_eq!(request(&cli), Err(SunhourError::LatitudeOutOfRange(95.0)));
    }

    #[test]
    fn diagnostics_follow_verbosity() {
        let cli = Cli::try_parse_from(["sunrise", "70", "20", "-d", "2024-03-01", "--limits", "all"])
            .unwrap();
        let report = assemble(&request(&cli).unwrap());

        let quiet = render(&report, 0);
        assert!(quiet.contains("Calculating civil limits for 2024-03-01"));
        assert!(!quiet.contains("Using sun decl"));
        assert!(!quiet.contains("cos(hour)"));
        assert!(!quiet.contains("Equation of time"));

        let one = render(&report, 1);
        assert!(one.contains("Using sun decl"));
        assert!(one.contains("Equation of time: adjusting noon by"));
        assert!(!one.contains("cos(hour)"));

        assert!(render(&report, 2).contains("cos(hour)"));
    }

    #[test]
    fn timezone_adds_offset_rows() {
        let cli = Cli::try_parse_from(["sunrise", "51.5", "0", "-d", "2024-01-15", "-z", "+1"])
            .unwrap();
        let text = render(&assemble(&request(&cli).unwrap()), 0);
        assert!(text.contains("local solar time"));
        assert!(text.contains(" UTC"));
        assert!(text.contains(" +01"));
    }

    #[test]
    fn polar_verdicts_replace_times() {
        let cli = Cli::try_parse_from(["sunrise", "80", "20", "-d", "2024-06-21"]).unwrap();
        let text = render(&assemble(&request(&cli).unwrap()), 0);
        assert!(text.contains("Polar day"));
        assert!(!text.contains("Sunrise"));
    }

    #[test]
    fn lists_every_limit() {
        let text = list_limits();
        assert_eq!(text.lines().count(), Threshold::catalog().len());
        assert!(text.starts_with("horizontal"));
    }
}
