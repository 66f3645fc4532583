// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sunrise, sunset and twilight times.
//!
//! Given a calendar date and an observer position, this crate finds when
//! the sun crosses a set of named elevation thresholds and reports those
//! crossings on one or more clocks.
//!
//! # Core types
//!
//! - [`CalendarDate`]: proleptic Gregorian day, no time of day.
//! - [`GeoPosition`]: validated latitude/longitude.
//! - [`SolarEphemeris`]: declination and equation of time for a date.
//! - [`EphemerisModel`]: trait for ephemeris strategies ([`OrbitalModel`],
//!   [`SinusoidalModel`], or the runtime switch [`EphemerisFidelity`]).
//! - [`TimeAngle`]: time of day as an angle, `2π` per 24 h, `π` at noon.
//! - [`ClockTriple`]: `(hours, minutes, seconds)` rendering of a [`TimeAngle`].
//! - [`Threshold`]: catalog entry (horizon, sunrise, civil, naval, astronomical).
//! - [`TimeBasis`]: clock a crossing is reported on.
//! - [`ReportRequest`] / [`Report`]: the whole computation in one call.
//!
//! # Pipeline
//!
//! | Stage | Function | Output |
//! |-------|----------|--------|
//! | ephemeris | [`EphemerisModel::ephemeris`] | [`SolarEphemeris`] |
//! | solve | [`solve_hour_angle`] | [`HourAngleResult`] |
//! | convert | [`TimeBasis::instants_for`] | [`DayInstants`] |
//! | render | [`TimeAngle::to_clock`] | [`ClockTriple`] |
//!
//! [`assemble`] runs all four for every selected threshold and basis.
//!
//! # Example
//!
//! ```rust
//! use sunhour::{CalendarDate, EphemerisModel, GeoPosition, OrbitalModel, ThresholdId, TimeBasis};
//! use sunhour::solve_hour_angle;
//!
//! let date = CalendarDate::from_ymd(2024, 6, 21).unwrap();
//! let here = GeoPosition::from_degrees(40.4, -3.7).unwrap();
//! let eph = OrbitalModel.ephemeris(date);
//!
//! let depth = ThresholdId::Civil.threshold().elevation_radians();
//! let h = solve_hour_angle(here.latitude(), eph.declination, depth)
//!     .hour_angle()
//!     .unwrap();
//! let day = TimeBasis::Utc.instants_for(h, here.longitude(), eph.equation_of_time);
//! println!("civil dawn {} UTC", day.rise);
//! ```

pub mod angle;
mod basis;
mod date;
mod ephemeris;
mod error;
mod position;
mod report;
mod solver;
mod threshold;
mod time_angle;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use basis::{instants_for, DayInstants, TimeBasis};
pub use date::CalendarDate;
pub use ephemeris::{
    EphemerisFidelity, EphemerisModel, OrbitalModel, SinusoidalModel, SolarEphemeris,
};
pub use error::SunhourError;
pub use position::{Coordinates, GeoPosition};
pub use report::{
    assemble, assemble_with, BasisInstants, LimitReport, Outcome, Report, ReportRequest,
};
pub use solver::{cos_hour_angle, solve_hour_angle, HourAngleResult};
pub use threshold::{Threshold, ThresholdId, ThresholdSelection};
pub use time_angle::{ClockTriple, TimeAngle};
