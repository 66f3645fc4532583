// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hour angle of a threshold crossing.
//!
//! The sun sits at elevation `−e` when its hour angle `H` satisfies
//!
//! ```text
//! cos H = (sin(−e) − sin φ · sin δ) / (cos φ · cos δ)
//! ```
//!
//! for observer latitude `φ` and solar declination `δ`.  When the right-hand
//! side leaves `[−1, 1]` the sun never crosses the threshold that day:
//! above 1 it stays below it (polar night), below −1 it stays above it
//! (polar day).

use qtty::Radians;
use tracing::trace;

/// Outcome of solving for the crossing hour angle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HourAngleResult {
    /// Hour angle between noon and the crossing, in `[0, π]`.
    Solved(Radians),
    /// The sun stays above the threshold all day.
    PolarDay,
    /// The sun stays below the threshold all day.
    PolarNight,
}

impl HourAngleResult {
    /// The solved hour angle, if any.
    #[inline]
    pub fn hour_angle(&self) -> Option<Radians> {
        match self {
            Self::Solved(h) => Some(*h),
            Self::PolarDay | Self::PolarNight => None,
        }
    }

    #[inline]
    pub fn is_polar(&self) -> bool {
        !matches!(self, Self::Solved(_))
    }
}

/// `cos H` for the given latitude, declination and threshold depth.
///
/// Not clamped: values outside `[−1, 1]` carry the polar classification and
/// are worth surfacing as a diagnostic.
#[inline]
pub fn cos_hour_angle(
    latitude: Radians,
    declination: Radians,
    elevation_below_horizon: Radians,
) -> f64 {
    let (numerator, denominator) = terms(latitude, declination, elevation_below_horizon);
    numerator / denominator
}

/// Solve for the hour angle at which the sun crosses `elevation_below_horizon`.
///
/// At an exact pole (`|φ| = π/2`) the denominator collapses to rounding
/// noise and the quotient goes huge or infinite, which still classifies
/// correctly.  A `0/0` quotient is classified by the sign of the numerator
/// (positive: the sun is below the threshold), so `NaN` never leaves this
/// function.
pub fn solve_hour_angle(
    latitude: Radians,
    declination: Radians,
    elevation_below_horizon: Radians,
) -> HourAngleResult {
    let (numerator, denominator) = terms(latitude, declination, elevation_below_horizon);
    let cos_h = numerator / denominator;

    let result = if cos_h.is_nan() {
        if numerator > 0.0 {
            HourAngleResult::PolarNight
        } else {
            HourAngleResult::PolarDay
        }
    } else if cos_h > 1.0 {
        HourAngleResult::PolarNight
    } else if cos_h < -1.0 {
        HourAngleResult::PolarDay
    } else {
        HourAngleResult::Solved(Radians::new(cos_h.acos()))
    };

    trace!(cos_h, ?result, "solved hour angle");
    result
}

#[inline]
fn terms(latitude: Radians, declination: Radians, elevation_below_horizon: Radians) -> (f64, f64) {
    let (sin_phi, cos_phi) = latitude.value().sin_cos();
    let (sin_delta, cos_delta) = declination.value().sin_cos();
    let numerator = (-elevation_below_horizon.value()).sin() - sin_phi * sin_delta;
    (numerator, cos_phi * cos_delta)
}
