// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer location.

use crate::LocationError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geographic coordinate of the observer, in degrees.
///
/// The engine takes coordinates as given and hands them to the solar oracle
/// untouched; range checking is available through [`GeoCoordinate::validate`]
/// for hosts that read locations from user input or settings files.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Checks `latitude ∈ [-90, 90]` and `longitude ∈ [-180, 180]`.
    pub fn validate(self) -> Result<Self, LocationError> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(LocationError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(LocationError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(LocationError::LongitudeOutOfRange(self.longitude));
        }
        Ok(self)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4},{:.4}", self.latitude, self.longitude)
    }
}

/// Parses `"<latitude>,<longitude>"` and validates the ranges.
impl FromStr for GeoCoordinate {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| LocationError::Malformed(s.to_string()))?;
        let parse = |axis: &'static str, raw: &str| {
            let raw = raw.trim();
            raw.parse::<f64>()
                .map_err(|source| LocationError::InvalidNumber {
                    axis,
                    value: raw.to_string(),
                    source,
                })
        };
        GeoCoordinate::new(parse("latitude", lat)?, parse("longitude", lon)?).validate()
    }
}
