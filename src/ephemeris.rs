// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Approximate Solar Ephemeris
//!
//! Given a calendar date, an [`EphemerisModel`] returns the sun's
//! **declination** and the **equation of time**, both as angles.  The
//! equation of time is a *time angle* (2π per day) equal to apparent minus
//! mean solar time, so apparent noon falls at `π − EoT` on the mean-time axis.
//!
//! Two interchangeable strategies implement the contract:
//!
//! | Model | Declination | Equation of time |
//! |-------|-------------|------------------|
//! | [`OrbitalModel`] | mean → true anomaly, ecliptic longitude, series in sin λ | mean longitude − right ascension |
//! | [`SinusoidalModel`] | single sinusoid in the year angle | two-term sinusoid |
//!
//! [`EphemerisFidelity`] picks one at run time and is itself a model.
//!
//! ## Accuracy
//! The orbital model stays within ≈0.2° of almanac declinations and within
//! ≈30 s of the almanac equation of time.  The sinusoidal model ignores the
//! orbital eccentricity in the declination and drifts by up to ≈1.4° around
//! the equinoxes; its equation of time stays within ≈1 min of the orbital one.
//!
//! ## References
//! * Astronomy Answers, "Position of the Sun", series for the Earth.
//! * Hughes, Yallop & Hohenkerk (1989), equation-of-time sinusoid.

use core::f64::consts::{FRAC_PI_2, PI, TAU};
use qtty::{Degrees, Radians};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::deg_from_rad;
use crate::{CalendarDate, TimeAngle};

/// Mean tropical year used to turn a day of year into a year angle.
const DAYS_PER_YEAR: f64 = 365.25;

// ═══════════════════════════════════════════════════════════════════════════
// Contract
// ═══════════════════════════════════════════════════════════════════════════

/// Sun's declination and equation of time for one date.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolarEphemeris {
    /// Angular distance of the sun north (+) or south (−) of the celestial equator.
    pub declination: Radians,
    /// Apparent minus mean solar time, as a time angle.
    pub equation_of_time: Radians,
}

impl SolarEphemeris {
    #[inline]
    pub fn declination_degrees(&self) -> Degrees {
        deg_from_rad(self.declination)
    }

    /// Equation of time in minutes of time.
    #[inline]
    pub fn equation_of_time_minutes(&self) -> f64 {
        self.equation_of_time.value() / TAU * 1_440.0
    }

    /// Shift from mean noon to apparent noon, i.e. `−EoT` as a time angle.
    ///
    /// Negative shifts render as the previous day's evening (`23:5x`),
    /// matching how the shift is usually printed next to a noon time.
    #[inline]
    pub fn noon_adjustment(&self) -> TimeAngle {
        TimeAngle::new(-self.equation_of_time.value())
    }
}

/// A source of approximate solar declination and equation of time.
pub trait EphemerisModel {
    /// Ephemeris for `date`. Pure and deterministic.
    fn ephemeris(&self, date: CalendarDate) -> SolarEphemeris;
}

impl<M: EphemerisModel + ?Sized> EphemerisModel for &M {
    #[inline]
    fn ephemeris(&self, date: CalendarDate) -> SolarEphemeris {
        (**self).ephemeris(date)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Orbital model
// ═══════════════════════════════════════════════════════════════════════════

/// Mean-anomaly / equation-of-centre model of the Earth's orbit.
///
/// Works from whole days since 2000-01-01; the time of day is ignored.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct OrbitalModel;

impl OrbitalModel {
    /// Mean anomaly at 2000-01-01 and its daily rate (degrees).
    const MEAN_ANOMALY: (f64, f64) = (357.5291, 0.985_600_28);
    /// Equation-of-centre coefficients for sin M, sin 2M, sin 3M (degrees).
    const CENTER: [f64; 3] = [1.9148, 0.0200, 0.0003];
    /// Longitude of perihelion (degrees).
    const PERIHELION: f64 = 102.9372;
    /// Right-ascension coefficients for sin 2λ, sin 4λ, sin 6λ (degrees).
    const RIGHT_ASCENSION: [f64; 3] = [-2.4680, 0.0530, -0.0014];
    /// Declination coefficients for sin λ, sin³ λ, sin⁵ λ (degrees).
    /// Their sum is the obliquity, ≈23.45°.
    const DECLINATION: [f64; 3] = [22.8008, 0.5999, 0.0493];

    /// Mean anomaly and geocentric ecliptic longitude of the sun, radians.
    fn orbit(date: CalendarDate) -> (f64, f64) {
        let n = date.days_since_y2k().value();
        let (m0, m1) = Self::MEAN_ANOMALY;
        let m = (m0.to_radians() + m1.to_radians() * n).rem_euclid(TAU);

        let [c1, c2, c3] = Self::CENTER;
        let center = c1.to_radians() * m.sin()
            + c2.to_radians() * (2.0 * m).sin()
            + c3.to_radians() * (3.0 * m).sin();

        // Heliocentric longitude of the Earth plus half a turn.
        let lambda = (m + center + Self::PERIHELION.to_radians() + PI).rem_euclid(TAU);
        (m, lambda)
    }

    /// Declination for an ecliptic longitude `lambda`.
    fn declination(lambda: f64) -> f64 {
        let [d1, d3, d5] = Self::DECLINATION;
        let s = lambda.sin();
        d1.to_radians() * s + d3.to_radians() * s.powi(3) + d5.to_radians() * s.powi(5)
    }

    /// Right ascension for an ecliptic longitude `lambda`.
    fn right_ascension(lambda: f64) -> f64 {
        let [a2, a4, a6] = Self::RIGHT_ASCENSION;
        lambda
            + a2.to_radians() * (2.0 * lambda).sin()
            + a4.to_radians() * (4.0 * lambda).sin()
            + a6.to_radians() * (6.0 * lambda).sin()
    }
}

impl EphemerisModel for OrbitalModel {
    fn ephemeris(&self, date: CalendarDate) -> SolarEphemeris {
        let (m, lambda) = Self::orbit(date);
        let mean_longitude = m + Self::PERIHELION.to_radians() + PI;
        let alpha = Self::right_ascension(lambda);

        SolarEphemeris {
            declination: Radians::new(Self::declination(lambda)),
            equation_of_time: Radians::new(fold_half_turns(mean_longitude - alpha)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Sinusoidal model
// ═══════════════════════════════════════════════════════════════════════════

/// Cheap sinusoidal fit driven by the day of year only.
///
/// Coarser than [`OrbitalModel`]: over a year the two differ by up to about
/// 1.34° of declination and about one minute of equation of time, which can
/// move a mid-latitude sunrise by several minutes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SinusoidalModel;

impl SinusoidalModel {
    /// Axial tilt used as the declination amplitude (degrees).
    const OBLIQUITY: f64 = 23.44;
    /// December solstice falls ≈10.5 days before 1 January.
    const SOLSTICE_LEAD_DAYS: f64 = 10.5;
    /// Perihelion falls ≈3 days after 1 January.
    const PERIHELION_DAY: f64 = 3.0;
    /// Equation-of-time sinusoid: amplitudes in minutes and the annual-term phase.
    const EOT: (f64, f64, f64) = (-7.659, 9.863, 3.5932);

    #[inline]
    fn year_angle(days: f64) -> f64 {
        TAU * days / DAYS_PER_YEAR
    }
}

impl EphemerisModel for SinusoidalModel {
    fn ephemeris(&self, date: CalendarDate) -> SolarEphemeris {
        let d = date.day_of_year() as f64;
        let year_angle = Self::year_angle(d);
        let solstice_offset = Self::year_angle(Self::SOLSTICE_LEAD_DAYS);
        let declination =
            Self::OBLIQUITY.to_radians() * (year_angle - FRAC_PI_2 + solstice_offset).sin();

        let m = Self::year_angle(d - Self::PERIHELION_DAY);
        let (k1, k2, phase) = Self::EOT;
        let minutes = k1 * m.sin() + k2 * (2.0 * m + phase).sin();

        SolarEphemeris {
            declination: Radians::new(declination),
            equation_of_time: Radians::new(minutes / 1_440.0 * TAU),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Run-time selection
// ═══════════════════════════════════════════════════════════════════════════

/// Which ephemeris strategy to run.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum EphemerisFidelity {
    /// [`OrbitalModel`].
    #[default]
    Orbital,
    /// [`SinusoidalModel`].
    Sinusoidal,
}

impl EphemerisModel for EphemerisFidelity {
    #[inline]
    fn ephemeris(&self, date: CalendarDate) -> SolarEphemeris {
        match self {
            Self::Orbital => OrbitalModel.ephemeris(date),
            Self::Sinusoidal => SinusoidalModel.ephemeris(date),
        }
    }
}

/// Subtract the nearest integer multiple of π, leaving a value in `(−π/2, π/2]`.
///
/// Ties go to the upper end: an input of `−π/2` folds to `π/2`.
///
/// The mean longitude runs unbounded while the right ascension is folded
/// near `[0, 2π)`; their difference can sit a whole turn (or, through the
/// `tan` branch of the series, half a turn) away from the small angle wanted.
#[inline]
fn fold_half_turns(angle: f64) -> f64 {
    let q = angle / PI;
    (q - (q - 0.5).ceil()) * PI
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn orbital_solstice_declinations() {
        let june = OrbitalModel.ephemeris(date(2024, 6, 21));
        assert!((june.declination_degrees().value() - 23.44).abs() < 0.2);
        let december = OrbitalModel.ephemeris(date(2024, 12, 21));
        assert!((december.declination_degrees().value() + 23.44).abs() < 0.2);
    }

    #[test]
    fn orbital_equinox_declination_near_zero() {
        let march = OrbitalModel.ephemeris(date(2024, 3, 20));
        assert!(march.declination_degrees().value().abs() < 0.5);
        let september = OrbitalModel.ephemeris(date(2024, 9, 22));
        assert!(september.declination_degrees().value().abs() < 0.5);
    }

    #[test]
    fn orbital_equation_of_time_extremes() {
        // Almanac: ≈ +16.4 min early November, ≈ −14.2 min mid February.
        let november = OrbitalModel.ephemeris(date(2024, 11, 3));
        assert!((november.equation_of_time_minutes() - 16.4).abs() < 0.5);
        let february = OrbitalModel.ephemeris(date(2024, 2, 11));
        assert!((february.equation_of_time_minutes() + 14.2).abs() < 0.5);
    }

    #[test]
    fn orbital_equation_of_time_continuous_over_new_year() {
        let before = OrbitalModel.ephemeris(date(2023, 12, 31));
        let after = OrbitalModel.ephemeris(date(2024, 1, 1));
        let step = after.equation_of_time_minutes() - before.equation_of_time_minutes();
        assert!(step.abs() < 1.0, "EoT jumped by {step} min across new year");
    }

    #[test]
    fn sinusoidal_solstice_declinations() {
        let june = SinusoidalModel.ephemeris(date(2023, 6, 21));
        assert!((june.declination_degrees().value() - 23.44).abs() < 0.1);
        let december = SinusoidalModel.ephemeris(date(2023, 12, 21));
        assert!((december.declination_degrees().value() + 23.44).abs() < 0.1);
    }

    #[test]
    fn sinusoidal_equation_of_time_extremes() {
        let november = SinusoidalModel.ephemeris(date(2023, 11, 3));
        assert!((november.equation_of_time_minutes() - 16.4).abs() < 0.5);
        let february = SinusoidalModel.ephemeris(date(2023, 2, 11));
        assert!((february.equation_of_time_minutes() + 14.2).abs() < 0.5);
    }

    #[test]
    fn models_agree_across_a_year() {
        let start = date(2024, 1, 1).naive();
        for offset in 0..366 {
            let day = CalendarDate::from(start + chrono::Duration::days(offset));
            let a = OrbitalModel.ephemeris(day);
            let b = SinusoidalModel.ephemeris(day);
            let dd = (a.declination_degrees().value() - b.declination_degrees().value()).abs();
            let de = (a.equation_of_time_minutes() - b.equation_of_time_minutes()).abs();
            assert!(dd < 1.5, "{day}: declination differs by {dd}°");
            assert!(de < 1.2, "{day}: equation of time differs by {de} min");
        }
    }

    #[test]
    fn fidelity_dispatches() {
        let d = date(2022, 5, 1);
        assert_eq!(
            EphemerisFidelity::Orbital.ephemeris(d),
            OrbitalModel.ephemeris(d)
        );
        assert_eq!(
            EphemerisFidelity::Sinusoidal.ephemeris(d),
            SinusoidalModel.ephemeris(d)
        );
        assert_eq!(EphemerisFidelity::default(), EphemerisFidelity::Orbital);
    }

    #[test]
    fn noon_adjustment_negates_equation_of_time() {
        let e = OrbitalModel.ephemeris(date(2024, 11, 3));
        let adj = e.noon_adjustment();
        assert!((adj.value() + e.equation_of_time.value()).abs() < 1e-15);
        // Sundial fast by ~16 min: mean noon lands ~16 min earlier.
        assert_eq!(adj.to_clock().hours(), 23);
        assert_eq!(adj.to_clock().minutes(), 43);
    }

    #[test]
    fn fold_half_turns_range() {
        assert!((fold_half_turns(TAU + 0.1) - 0.1).abs() < 1e-12);
        assert!((fold_half_turns(PI - 0.1) + 0.1).abs() < 1e-12);
        assert!(fold_half_turns(-0.3).abs() <= FRAC_PI_2);
    }

    #[test]
    fn fold_half_turns_excludes_lower_end() {
        assert_eq!(fold_half_turns(FRAC_PI_2), FRAC_PI_2);
        assert_eq!(fold_half_turns(-FRAC_PI_2), FRAC_PI_2);
        for k in -4..=4 {
            let folded = fold_half_turns(k as f64 * PI + 0.25);
            assert!(folded > -FRAC_PI_2 && folded <= FRAC_PI_2);
            assert!((folded - 0.25).abs() < 1e-12);
        }
    }
}
