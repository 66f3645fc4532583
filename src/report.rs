// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Report assembly.
//!
//! A [`ReportRequest`] names a date, a position, a threshold selection, the
//! time bases to report in, and the ephemeris fidelity.  [`assemble`] runs
//! the ephemeris once and then walks thresholds × bases, returning plain
//! values; labels, alignment and capitalisation are left to the presenter.
//!
//! ```rust
//! use sunhour::{assemble, CalendarDate, GeoPosition, Outcome, ReportRequest, TimeBasis};
//!
//! let date = CalendarDate::from_ymd(2024, 3, 20).unwrap();
//! let here = GeoPosition::from_degrees(0.0, 0.0).unwrap();
//! let report = assemble(&ReportRequest::new(date, here).with_bases([TimeBasis::Utc]));
//!
//! let sunrise = &report.limits[0];
//! if let Outcome::Crossings(rows) = &sunrise.outcome {
//!     println!("sunrise {} UTC", rows[0].instants.rise);
//! }
//! ```

use qtty::Radians;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::solver::{cos_hour_angle, solve_hour_angle, HourAngleResult};
use crate::{
    CalendarDate, DayInstants, EphemerisFidelity, EphemerisModel, GeoPosition, SolarEphemeris,
    Threshold, ThresholdId, ThresholdSelection, TimeAngle, TimeBasis,
};

// ═══════════════════════════════════════════════════════════════════════════
// Request
// ═══════════════════════════════════════════════════════════════════════════

/// What to compute.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportRequest {
    pub date: CalendarDate,
    pub position: GeoPosition,
    #[cfg_attr(feature = "serde", serde(default))]
    pub thresholds: ThresholdSelection,
    #[cfg_attr(feature = "serde", serde(default = "default_bases"))]
    pub bases: Vec<TimeBasis>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fidelity: EphemerisFidelity,
}

fn default_bases() -> Vec<TimeBasis> {
    vec![TimeBasis::LocalSolar, TimeBasis::Utc]
}

impl ReportRequest {
    /// Sunrise/sunset in local solar time and UTC, orbital ephemeris.
    pub fn new(date: CalendarDate, position: GeoPosition) -> Self {
        Self {
            date,
            position,
            thresholds: ThresholdSelection::default(),
            bases: default_bases(),
            fidelity: EphemerisFidelity::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: impl Into<ThresholdSelection>) -> Self {
        self.thresholds = thresholds.into();
        self
    }

    /// Replace the requested bases.
    pub fn with_bases(mut self, bases: impl IntoIterator<Item = TimeBasis>) -> Self {
        self.bases = bases.into_iter().collect();
        self
    }

    /// Append a fixed UTC offset in whole hours, unless already requested.
    pub fn with_offset(mut self, hours: i32) -> Self {
        let basis = TimeBasis::FixedOffset(hours);
        if !self.bases.contains(&basis) {
            self.bases.push(basis);
        }
        self
    }

    pub fn with_fidelity(mut self, fidelity: EphemerisFidelity) -> Self {
        self.fidelity = fidelity;
        self
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Output
// ═══════════════════════════════════════════════════════════════════════════

/// Crossing times of one threshold on one clock.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BasisInstants {
    pub basis: TimeBasis,
    pub instants: DayInstants,
}

/// What happened at one threshold.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The sun stays above the threshold all day.
    PolarDay,
    /// The sun stays below the threshold all day.
    PolarNight,
    /// Rise/noon/set per requested basis, in request order.
    Crossings(Vec<BasisInstants>),
}

/// Result for a single threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitReport {
    pub threshold: &'static Threshold,
    /// Unclamped `cos H`; outside `[−1, 1]` under polar conditions.
    pub cos_hour_angle: f64,
    pub hour_angle: HourAngleResult,
    pub outcome: Outcome,
}

impl LimitReport {
    /// Instants on `basis`, if the threshold is crossed and the basis was requested.
    pub fn instants(&self, basis: TimeBasis) -> Option<&DayInstants> {
        match &self.outcome {
            Outcome::Crossings(rows) => rows
                .iter()
                .find(|row| row.basis == basis)
                .map(|row| &row.instants),
            Outcome::PolarDay | Outcome::PolarNight => None,
        }
    }
}

/// Everything computed for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub date: CalendarDate,
    pub position: GeoPosition,
    pub ephemeris: SolarEphemeris,
    /// One entry per selected threshold, shallowest first.
    pub limits: Vec<LimitReport>,
}

impl Report {
    /// Shift from mean noon to apparent noon (`−EoT`).
    #[inline]
    pub fn noon_adjustment(&self) -> TimeAngle {
        self.ephemeris.noon_adjustment()
    }

    pub fn limit(&self, id: ThresholdId) -> Option<&LimitReport> {
        self.limits.iter().find(|l| l.threshold.id == id)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Assembly
// ═══════════════════════════════════════════════════════════════════════════

/// Build a report with the ephemeris selected by `request.fidelity`.
pub fn assemble(request: &ReportRequest) -> Report {
    assemble_with(&request.fidelity, request)
}

/// Build a report with an explicit ephemeris model, ignoring `request.fidelity`.
pub fn assemble_with<M: EphemerisModel + ?Sized>(model: &M, request: &ReportRequest) -> Report {
    let ephemeris = model.ephemeris(request.date);
    debug!(
        date = %request.date,
        declination_deg = ephemeris.declination_degrees().value(),
        equation_of_time_min = ephemeris.equation_of_time_minutes(),
        "computed solar ephemeris"
    );

    let latitude = request.position.latitude();
    let longitude = request.position.longitude();

    let limits = request
        .thresholds
        .thresholds()
        .iter()
        .map(|threshold| {
            let depth = threshold.elevation_radians();
            let cos_h = cos_hour_angle(latitude, ephemeris.declination, depth);
            let hour_angle = solve_hour_angle(latitude, ephemeris.declination, depth);
            let outcome = match hour_angle {
                HourAngleResult::PolarDay => Outcome::PolarDay,
                HourAngleResult::PolarNight => Outcome::PolarNight,
                HourAngleResult::Solved(h) => Outcome::Crossings(crossings(
                    &request.bases,
                    h,
                    longitude,
                    ephemeris.equation_of_time,
                )),
            };
            debug!(threshold = %threshold.id, cos_h, ?outcome, "threshold done");
            LimitReport {
                threshold,
                cos_hour_angle: cos_h,
                hour_angle,
                outcome,
            }
        })
        .collect();

    Report {
        date: request.date,
        position: request.position,
        ephemeris,
        limits,
    }
}

fn crossings(
    bases: &[TimeBasis],
    hour_angle: Radians,
    longitude: Radians,
    equation_of_time: Radians,
) -> Vec<BasisInstants> {
    bases
        .iter()
        .map(|&basis| BasisInstants {
            basis,
            instants: basis.instants_for(hour_angle, longitude, equation_of_time),
        })
        .collect()
}
