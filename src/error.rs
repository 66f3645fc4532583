// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

/// Errors raised at the input boundary.
///
/// The solar engine itself is total: polar day and polar night are results,
/// not errors.  Only caller input that falls outside the engine's domain is
/// rejected here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SunhourError {
    /// Latitude outside `[-90°, 90°]` or not finite.
    #[error("latitude {0}° is outside [-90°, 90°]")]
    LatitudeOutOfRange(f64),
    /// Longitude outside `[-180°, 180°]` or not finite.
    #[error("longitude {0}° is outside [-180°, 180°]")]
    LongitudeOutOfRange(f64),
    /// The year/month/day triple or ISO string is not a calendar date.
    #[error("invalid calendar date: {0}")]
    InvalidDate(String),
    /// No threshold with this id exists in the catalog.
    #[error("unknown threshold `{0}`")]
    UnknownThreshold(String),
    /// The string does not name a time basis.
    #[error("invalid time basis `{0}`")]
    InvalidTimeBasis(String),
    /// A wall-clock reading with a component outside its range.
    #[error("clock reading {hours}:{minutes}:{seconds} is out of range")]
    InvalidClock { hours: u32, minutes: u32, seconds: f64 },
}
