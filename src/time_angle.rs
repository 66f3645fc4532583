// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time of day expressed as an angle.
//!
//! [`TimeAngle`] stores a single [`Radians`] quantity whose meaning is a
//! fraction of a 24 h day: `0` is midnight, `π` is noon, `2π` is the next
//! midnight.  Values are **not** normalised on construction, so arithmetic
//! may run past either end of the day (a UTC offset pushing sunrise before
//! midnight, for instance); rendering to a [`ClockTriple`] wraps them back.

use chrono::{NaiveTime, Timelike};
use core::f64::consts::{PI, TAU};
use qtty::Radians;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::angle::normalize_value;
#[cfg(feature = "serde")]
use crate::SunhourError;

const SECONDS_PER_DAY: f64 = 86_400.0;

// ═══════════════════════════════════════════════════════════════════════════
// TimeAngle
// ═══════════════════════════════════════════════════════════════════════════

/// A time of day on a 2π-per-day axis.
///
/// `Copy` and layout-identical to a single `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TimeAngle {
    angle: Radians,
}

impl TimeAngle {
    /// 00:00:00.
    pub const MIDNIGHT: Self = Self::new(0.0);

    /// 12:00:00.
    pub const NOON: Self = Self::new(PI);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw value in radians.
    #[inline]
    pub const fn new(radians: f64) -> Self {
        Self {
            angle: Radians::new(radians),
        }
    }

    /// Create from a [`Radians`] quantity.
    #[inline]
    pub const fn from_radians(angle: Radians) -> Self {
        Self { angle }
    }

    /// Create from hours after midnight (may be negative or exceed 24).
    #[inline]
    pub fn from_hours(hours: f64) -> Self {
        Self::new(hours / 24.0 * TAU)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying angle.
    #[inline]
    pub const fn radians(&self) -> Radians {
        self.angle
    }

    /// The underlying scalar value in radians.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.angle.value()
    }

    /// Hours after midnight, without wrapping.
    #[inline]
    pub fn hours(&self) -> f64 {
        self.value() / TAU * 24.0
    }

    /// The same instant wrapped into `[0, 2π)`.
    #[inline]
    pub fn normalized(self) -> Self {
        Self::new(normalize_value(self.value()))
    }

    /// Fraction of the day elapsed, in `[0, 1)`.
    #[inline]
    pub fn day_fraction(&self) -> f64 {
        let frac = normalize_value(self.value()) / TAU;
        // x / 2π can round up to 1.0 for x just below 2π.
        if frac >= 1.0 {
            0.0
        } else {
            frac
        }
    }

    /// Render as wall-clock hours, minutes and seconds.
    ///
    /// Each component is truncated, never rounded, so a value a hair short
    /// of midnight renders as `23:59:59` and never as `24:00:00`.
    #[inline]
    pub fn to_clock(&self) -> ClockTriple {
        ClockTriple::from_day_fraction(self.day_fraction())
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for TimeAngle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_clock().fmt(f)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for TimeAngle {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimeAngle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Radians> for TimeAngle {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Radians) -> Self::Output {
        Self::from_radians(self.angle + rhs)
    }
}

impl AddAssign<Radians> for TimeAngle {
    #[inline]
    fn add_assign(&mut self, rhs: Radians) {
        self.angle = self.angle + rhs;
    }
}

impl Sub<Radians> for TimeAngle {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Radians) -> Self::Output {
        Self::from_radians(self.angle - rhs)
    }
}

impl SubAssign<Radians> for TimeAngle {
    #[inline]
    fn sub_assign(&mut self, rhs: Radians) {
        self.angle = self.angle - rhs;
    }
}

impl Sub for TimeAngle {
    type Output = Radians;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.angle - rhs.angle
    }
}

// ── From/Into ─────────────────────────────────────────────────────────────

impl From<Radians> for TimeAngle {
    #[inline]
    fn from(angle: Radians) -> Self {
        Self::from_radians(angle)
    }
}

impl From<TimeAngle> for Radians {
    #[inline]
    fn from(time: TimeAngle) -> Self {
        time.angle
    }
}

impl From<NaiveTime> for TimeAngle {
    fn from(time: NaiveTime) -> Self {
        let seconds =
            time.num_seconds_from_midnight() as f64 + time.nanosecond() as f64 / 1e9;
        Self::new(seconds / SECONDS_PER_DAY * TAU)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// ClockTriple
// ═══════════════════════════════════════════════════════════════════════════

/// Hours, minutes and seconds of a wall-clock reading.
///
/// `hours ∈ [0, 23]`, `minutes ∈ [0, 59]`, `seconds ∈ [0, 60)`.  Fields are
/// private so every value in circulation upholds those ranges; build one with
/// [`ClockTriple::new`] or [`ClockTriple::from_day_fraction`].
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "ClockFields", into = "ClockFields")
)]
pub struct ClockTriple {
    hours: u32,
    minutes: u32,
    seconds: f64,
}

impl ClockTriple {
    /// A validated reading; `None` when a component is out of range.
    pub fn new(hours: u32, minutes: u32, seconds: f64) -> Option<Self> {
        (hours < 24 && minutes < 60 && (0.0..60.0).contains(&seconds)).then_some(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Split a day fraction in `[0, 1)` into truncated components.
    ///
    /// Fractions outside that range are wrapped first.  A reading a few ULPs
    /// short of a whole second (the noise of the radian round trip) lands on
    /// that second, so `22:30:00` does not come back as `22:29:59`.  The
    /// snap never reaches the next midnight.
    pub fn from_day_fraction(day_fraction: f64) -> Self {
        const SNAP_SECONDS: f64 = 1e-9;

        let mut of_day = day_fraction.rem_euclid(1.0) * SECONDS_PER_DAY;
        if of_day >= SECONDS_PER_DAY {
            of_day = 0.0;
        }
        let next = of_day.ceil();
        if next - of_day < SNAP_SECONDS && next < SECONDS_PER_DAY {
            of_day = next;
        }

        let hours = (of_day / 3_600.0).trunc();
        let rest = of_day - hours * 3_600.0;
        let minutes = (rest / 60.0).trunc();
        let seconds = rest - minutes * 60.0;
        Self {
            hours: hours as u32,
            minutes: minutes as u32,
            seconds,
        }
    }

    #[inline]
    pub const fn hours(&self) -> u32 {
        self.hours
    }

    #[inline]
    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Seconds including the fractional part.
    #[inline]
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Whole seconds, truncated.
    #[inline]
    pub fn whole_seconds(&self) -> u32 {
        self.seconds.trunc() as u32
    }

    /// Seconds after midnight.
    #[inline]
    pub fn seconds_from_midnight(&self) -> f64 {
        (self.hours * 3_600 + self.minutes * 60) as f64 + self.seconds
    }

    /// Convert to a `chrono::NaiveTime` with nanosecond resolution.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let whole = self.whole_seconds();
        let nanos = ((self.seconds - whole as f64) * 1e9) as u32;
        NaiveTime::from_hms_nano_opt(self.hours, self.minutes, whole, nanos.min(999_999_999))
    }
}

/// Unvalidated wire form of a [`ClockTriple`].
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct ClockFields {
    hours: u32,
    minutes: u32,
    seconds: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<ClockFields> for ClockTriple {
    type Error = SunhourError;

    fn try_from(c: ClockFields) -> Result<Self, Self::Error> {
        Self::new(c.hours, c.minutes, c.seconds).ok_or(SunhourError::InvalidClock {
            hours: c.hours,
            minutes: c.minutes,
            seconds: c.seconds,
        })
    }
}

#[cfg(feature = "serde")]
impl From<ClockTriple> for ClockFields {
    fn from(c: ClockTriple) -> Self {
        Self {
            hours: c.hours,
            minutes: c.minutes,
            seconds: c.seconds,
        }
    }
}

impl std::fmt::Display for ClockTriple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours,
            self.minutes,
            self.whole_seconds()
        )
    }
}

impl From<ClockTriple> for TimeAngle {
    #[inline]
    fn from(clock: ClockTriple) -> Self {
        Self::new(clock.seconds_from_midnight() / SECONDS_PER_DAY * TAU)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
