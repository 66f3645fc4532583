// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer position on the Earth's surface.

use qtty::{Degrees, Radians};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{deg_from_rad, rad_from_deg, wrap_signed};
use crate::SunhourError;

/// Geographic latitude and longitude, validated on construction.
///
/// Latitude is positive north, longitude positive east.  Both are stored in
/// radians; longitude is wrapped into `(−π, π]`, so 180°W and 180°E are the
/// same meridian.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Coordinates", into = "Coordinates")
)]
pub struct GeoPosition {
    latitude: Radians,
    longitude: Radians,
}

impl GeoPosition {
    /// Validate a position given in degrees.
    pub fn new(latitude: Degrees, longitude: Degrees) -> Result<Self, SunhourError> {
        let lat = latitude.value();
        let lon = longitude.value();
        if !lat.is_finite() || lat.abs() > 90.0 {
            return Err(SunhourError::LatitudeOutOfRange(lat));
        }
        if !lon.is_finite() || lon.abs() > 180.0 {
            return Err(SunhourError::LongitudeOutOfRange(lon));
        }
        Ok(Self {
            latitude: rad_from_deg(latitude),
            longitude: wrap_signed(rad_from_deg(longitude)),
        })
    }

    /// Shorthand for [`GeoPosition::new`] with raw degree values.
    #[inline]
    pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Self, SunhourError> {
        Self::new(Degrees::new(latitude), Degrees::new(longitude))
    }

    #[inline]
    pub const fn latitude(&self) -> Radians {
        self.latitude
    }

    #[inline]
    pub const fn longitude(&self) -> Radians {
        self.longitude
    }

    #[inline]
    pub fn latitude_degrees(&self) -> Degrees {
        deg_from_rad(self.latitude)
    }

    #[inline]
    pub fn longitude_degrees(&self) -> Degrees {
        deg_from_rad(self.longitude)
    }
}

/// Degree-valued wire form of a [`GeoPosition`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl TryFrom<Coordinates> for GeoPosition {
    type Error = SunhourError;

    fn try_from(c: Coordinates) -> Result<Self, Self::Error> {
        Self::from_degrees(c.latitude, c.longitude)
    }
}

impl From<GeoPosition> for Coordinates {
    fn from(p: GeoPosition) -> Self {
        Self {
            latitude: p.latitude_degrees().value(),
            longitude: p.longitude_degrees().value(),
        }
    }
}
