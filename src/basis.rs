// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time bases for reporting crossing times.
//!
//! Each basis fixes where apparent solar noon lands on its clock; the
//! crossings then sit one hour angle either side of that noon.
//!
//! | Basis | Reference noon |
//! |-------|----------------|
//! | [`TimeBasis::LocalSolar`] | `π` |
//! | [`TimeBasis::MeanSolar`] | `π − EoT` |
//! | [`TimeBasis::Utc`] | `π − λ − EoT` |
//! | [`TimeBasis::FixedOffset`]`(h)` | `π − λ − EoT + h · 2π/24` |
//!
//! `λ` is the observer's east longitude and `EoT` the equation of time.

use qtty::Radians;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::HOUR;
use crate::{ClockTriple, SunhourError, TimeAngle};

/// Clock a crossing time is reported on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TimeBasis {
    /// Local apparent (sundial) time: noon is always 12:00.
    LocalSolar,
    /// Local mean time at the observer's meridian.
    MeanSolar,
    /// Coordinated Universal Time.
    Utc,
    /// UTC shifted by a whole number of hours.
    FixedOffset(i32),
}

impl TimeBasis {
    /// Apparent solar noon on this basis' clock.
    #[inline]
    pub fn reference_noon(&self, longitude: Radians, equation_of_time: Radians) -> TimeAngle {
        let mean_noon = TimeAngle::NOON - equation_of_time;
        match *self {
            Self::LocalSolar => TimeAngle::NOON,
            Self::MeanSolar => mean_noon,
            Self::Utc => mean_noon - longitude,
            Self::FixedOffset(hours) => mean_noon - longitude + HOUR * hours as f64,
        }
    }

    /// Rise, noon and set on this basis' clock for a solved hour angle.
    #[inline]
    pub fn instants_for(
        &self,
        hour_angle: Radians,
        longitude: Radians,
        equation_of_time: Radians,
    ) -> DayInstants {
        let noon = self.reference_noon(longitude, equation_of_time);
        DayInstants {
            rise: noon - hour_angle,
            noon,
            set: noon + hour_angle,
        }
    }
}

/// Free-function form of [`TimeBasis::instants_for`].
#[inline]
pub fn instants_for(
    basis: TimeBasis,
    hour_angle: Radians,
    longitude: Radians,
    equation_of_time: Radians,
) -> DayInstants {
    basis.instants_for(hour_angle, longitude, equation_of_time)
}

/// Short label: `local solar time`, `mean solar time`, `UTC`, `+03`.
impl fmt::Display for TimeBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalSolar => f.write_str("local solar time"),
            Self::MeanSolar => f.write_str("mean solar time"),
            Self::Utc => f.write_str("UTC"),
            Self::FixedOffset(hours) => write!(f, "{hours:+03}"),
        }
    }
}

/// Accepts `local`, `solar`, `mean`, `utc` (any case) or a signed or bare
/// integer hour offset such as `+03`, `-6`, `2`.
impl FromStr for TimeBasis {
    type Err = SunhourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        match t.to_ascii_lowercase().as_str() {
            "local" | "solar" | "local-solar" => Ok(Self::LocalSolar),
            "mean" | "mean-solar" => Ok(Self::MeanSolar),
            "utc" | "gmt" | "z" => Ok(Self::Utc),
            _ => t
                .parse::<i32>()
                .map(Self::FixedOffset)
                .map_err(|_| SunhourError::InvalidTimeBasis(s.to_string())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// DayInstants
// ═══════════════════════════════════════════════════════════════════════════

/// Rise, apparent noon and set of one threshold on one clock.
///
/// `noon − rise == set − noon`, the hour angle.  Times are not wrapped;
/// render them through [`TimeAngle::to_clock`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayInstants {
    pub rise: TimeAngle,
    pub noon: TimeAngle,
    pub set: TimeAngle,
}

impl DayInstants {
    /// Time between rise and set as an angle (2π = 24 h).
    #[inline]
    pub fn span(&self) -> Radians {
        self.set - self.rise
    }

    /// Rise, noon and set rendered as wall-clock triples.
    #[inline]
    pub fn clocks(&self) -> [ClockTriple; 3] {
        [
            self.rise.to_clock(),
            self.noon.to_clock(),
            self.set.to_clock(),
        ]
    }
}
