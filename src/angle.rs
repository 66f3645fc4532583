// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Angle helpers.
//!
//! All computation in this crate runs on [`Radians`]; [`Degrees`] only appear
//! at the boundary (caller input, catalog data, diagnostics).  The helpers in
//! this module cover the conversions and the two wrapping conventions used
//! by the engine:
//!
//! | Helper | Range |
//! |--------|-------|
//! | [`normalize`] | `[0, 2π)` |
//! | [`wrap_signed`] | `(−π, π]` |

use core::f64::consts::{PI, TAU};
use qtty::{Degree, Degrees, Radian, Radians};

/// Half a revolution (π rad). As a time angle this is local noon.
pub const HALF_TURN: Radians = Radians::new(PI);

/// One full revolution (2π rad), i.e. a whole day as a time angle.
pub const FULL_TURN: Radians = Radians::new(TAU);

/// One hour of time expressed as a time angle (2π / 24 rad, 15°).
pub const HOUR: Radians = Radians::new(TAU / 24.0);

/// Degrees → radians.
#[inline]
pub fn rad_from_deg(degrees: Degrees) -> Radians {
    degrees.to::<Radian>()
}

/// Radians → degrees.
#[inline]
pub fn deg_from_rad(radians: Radians) -> Degrees {
    radians.to::<Degree>()
}

/// Wrap into `[0, 2π)` using the Euclidean remainder.
///
/// `rem_euclid` can round a tiny negative input up to exactly `2π`; that case
/// folds back to zero so the upper bound stays exclusive.
#[inline]
pub fn normalize(angle: Radians) -> Radians {
    Radians::new(normalize_value(angle.value()))
}

/// Wrap into `(−π, π]`.
#[inline]
pub fn wrap_signed(angle: Radians) -> Radians {
    let y = normalize_value(angle.value() + PI) - PI;
    Radians::new(if y <= -PI { y + TAU } else { y })
}

#[inline]
pub(crate) fn normalize_value(x: f64) -> f64 {
    let r = x.rem_euclid(TAU);
    if r >= TAU {
        0.0
    } else {
        r
    }
}
