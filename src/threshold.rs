// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Catalog of lightness thresholds.
//!
//! | Id | Below horizon | Rising / setting |
//! |----|---------------|------------------|
//! | `horizontal` | 0° | horizontal sunrise / horizontal sunset |
//! | `sunrise` | 0.83° | sunrise / sunset |
//! | `civil` | 6° | civil dawn / civil dusk |
//! | `naval` | 12° | naval dawn / naval dusk |
//! | `astronomical` | 18° | astronomical dawn / astronomical dusk |

use qtty::{Degrees, Radians};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::rad_from_deg;
use crate::SunhourError;

/// Key of a catalog entry. Declaration order is catalog order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ThresholdId {
    Horizontal,
    Sunrise,
    Civil,
    Naval,
    Astronomical,
}

impl ThresholdId {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Sunrise => "sunrise",
            Self::Civil => "civil",
            Self::Naval => "naval",
            Self::Astronomical => "astronomical",
        }
    }

    /// The catalog entry for this id.
    #[inline]
    pub fn threshold(self) -> &'static Threshold {
        &CATALOG[self as usize]
    }
}

impl fmt::Display for ThresholdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThresholdId {
    type Err = SunhourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Threshold::by_id(s).map(|t| t.id)
    }
}

/// A named solar elevation below the horizon.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Threshold {
    pub id: ThresholdId,
    /// Depth of the sun's centre below the horizon; zero is the geometric horizon.
    pub elevation_below_horizon: Degrees,
    /// Name of the morning crossing, e.g. `civil dawn`.
    pub name_rising: &'static str,
    /// Name of the evening crossing, e.g. `civil dusk`.
    pub name_setting: &'static str,
    pub description: &'static str,
}

impl Threshold {
    /// All thresholds, shallowest first.
    #[inline]
    pub fn catalog() -> &'static [Threshold] {
        &CATALOG
    }

    /// Look an entry up by its id string (`civil`, `naval`, …).
    pub fn by_id(id: &str) -> Result<&'static Threshold, SunhourError> {
        let key = id.trim();
        CATALOG
            .iter()
            .find(|t| t.id.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| SunhourError::UnknownThreshold(id.to_string()))
    }

    #[inline]
    pub fn elevation_radians(&self) -> Radians {
        rad_from_deg(self.elevation_below_horizon)
    }
}

static CATALOG: [Threshold; 5] = [
    Threshold {
        id: ThresholdId::Horizontal,
        elevation_below_horizon: Degrees::new(0.0),
        name_rising: "horizontal sunrise",
        name_setting: "horizontal sunset",
        description: "center of the true location of the sun on the horizon",
    },
    Threshold {
        id: ThresholdId::Sunrise,
        elevation_below_horizon: Degrees::new(0.83),
        name_rising: "sunrise",
        name_setting: "sunset",
        description: "apparent sunset accounts for refraction and radius of the sun",
    },
    Threshold {
        id: ThresholdId::Civil,
        elevation_below_horizon: Degrees::new(6.0),
        name_rising: "civil dawn",
        name_setting: "civil dusk",
        description: "sufficient light to work by",
    },
    Threshold {
        id: ThresholdId::Naval,
        elevation_below_horizon: Degrees::new(12.0),
        name_rising: "naval dawn",
        name_setting: "naval dusk",
        description: "sufficient light to see the horizon",
    },
    Threshold {
        id: ThresholdId::Astronomical,
        elevation_below_horizon: Degrees::new(18.0),
        name_rising: "astronomical dawn",
        name_setting: "astronomical dusk",
        description: "sufficient light to spoil astronomical observations",
    },
];

/// Which thresholds a report covers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ThresholdSelection {
    One(ThresholdId),
    All,
}

impl Default for ThresholdSelection {
    fn default() -> Self {
        Self::One(ThresholdId::Sunrise)
    }
}

impl ThresholdSelection {
    /// Selected entries in catalog order.
    pub fn thresholds(&self) -> &'static [Threshold] {
        match self {
            Self::All => &CATALOG,
            Self::One(id) => std::slice::from_ref(id.threshold()),
        }
    }
}

/// `all` or a threshold id.
impl FromStr for ThresholdSelection {
    type Err = SunhourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::One)
        }
    }
}

impl From<ThresholdId> for ThresholdSelection {
    #[inline]
    fn from(id: ThresholdId) -> Self {
        Self::One(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_ascending_and_indexed() {
        let catalog = Threshold::catalog();
        assert_eq!(catalog.len(), 5);
        for pair in catalog.windows(2) {
            assert!(pair[0].elevation_below_horizon < pair[1].elevation_below_horizon);
        }
        for t in catalog {
            assert_eq!(t.id.threshold(), t);
            assert!(t.elevation_below_horizon.value() >= 0.0);
        }
    }

    #[test]
    fn horizon_is_zero() {
        assert_eq!(ThresholdId::Horizontal.threshold().elevation_radians().value(), 0.0);
    }

    #[test]
    fn lookup_by_id() {
        let civil = Threshold::by_id("civil").unwrap();
        assert_eq!(civil.name_rising, "civil dawn");
        assert_eq!(civil.name_setting, "civil dusk");
        assert_eq!(Threshold::by_id("Naval").unwrap().id, ThresholdId::Naval);
        assert_eq!(
            Threshold::by_id("nautical"),
            Err(SunhourError::UnknownThreshold("nautical".to_string()))
        );
    }

    #[test]
    fn selection_parsing() {
        assert_eq!("all".parse::<ThresholdSelection>().unwrap(), ThresholdSelection::All);
        assert_eq!(
            "astronomical".parse::<ThresholdSelection>().unwrap(),
            ThresholdSelection::One(ThresholdId::Astronomical)
        );
        assert!("dusk".parse::<ThresholdSelection>().is_err());
        assert_eq!(
            ThresholdSelection::default(),
            ThresholdSelection::One(ThresholdId::Sunrise)
        );
    }

    #[test]
    fn selection_expands() {
        assert_eq!(ThresholdSelection::All.thresholds().len(), 5);
        let one = ThresholdSelection::from(ThresholdId::Civil).thresholds();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].id, ThresholdId::Civil);
    }

    #[test]
    fn id_display_roundtrip() {
        for t in Threshold::catalog() {
            assert_eq!(t.id.to_string().parse::<ThresholdId>().unwrap(), t.id);
        }
    }
}
