// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar date input.

use chrono::{Datelike, Local, NaiveDate};
use qtty::Days;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::SunhourError;

/// Day number of 2000-01-01 counted from 0001-01-01 (day 1), proleptic Gregorian.
const Y2K_DAYS_FROM_CE: i32 = 730_120;

/// A proleptic Gregorian date with no time-of-day component.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build from year, month (1–12) and day (1–31).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, SunhourError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| SunhourError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Today in the local time zone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// The wrapped `chrono` date.
    #[inline]
    pub const fn naive(&self) -> NaiveDate {
        self.0
    }

    /// Ordinal day within the year, `1..=366`.
    #[inline]
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }

    /// Whole days elapsed since 2000-01-01 (negative before it).
    #[inline]
    pub fn days_since_y2k(&self) -> Days {
        Days::new((self.0.num_days_from_ce() - Y2K_DAYS_FROM_CE) as f64)
    }
}

impl From<NaiveDate> for CalendarDate {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    #[inline]
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

/// Parses ISO 8601 `YYYY-MM-DD`.
impl FromStr for CalendarDate {
    type Err = SunhourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::from_str(s.trim())
            .map(Self)
            .map_err(|_| SunhourError::InvalidDate(s.to_string()))
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
