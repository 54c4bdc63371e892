// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Astronomical oracles.
//!
//! The crate does not compute solar or lunar positions itself. It asks two
//! oracles for the raw quantities it needs:
//!
//! - [`SolarOracle`]: sunrise and sunset for a calendar date and location.
//! - [`LunarOracle`]: the moon's phase fraction at an instant.
//!
//! Both traits are implemented for plain closures, so an ephemeris library
//! can be plugged in without a wrapper type. [`SolarTable`] serves
//! precomputed rise/set times from memory.

use crate::GeoCoordinate;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sunrise and sunset on one calendar date.
///
/// Either field is `None` when the event does not happen that day (polar
/// day or polar night).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunTimes {
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
}

impl SunTimes {
    pub const fn new(sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> Self {
        Self {
            sunrise: Some(sunrise),
            sunset: Some(sunset),
        }
    }

    /// Neither a sunrise nor a sunset.
    pub const fn none() -> Self {
        Self {
            sunrise: None,
            sunset: None,
        }
    }
}

/// Moon illumination at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoonIllumination {
    /// Position in the synodic cycle: 0 new, 0.25 first quarter, 0.5 full,
    /// 0.75 last quarter, wrapping before 1.
    pub phase: f64,
    /// Illuminated fraction of the disc, if the oracle reports it.
    pub fraction: Option<f64>,
}

impl MoonIllumination {
    pub const fn from_phase(phase: f64) -> Self {
        Self {
            phase,
            fraction: None,
        }
    }
}

/// Source of sunrise and sunset times.
pub trait SolarOracle {
    /// Sunrise and sunset at `location` on the local calendar day `date`.
    fn sun_times(&self, date: NaiveDate, location: &GeoCoordinate) -> SunTimes;
}

/// Source of the moon's phase.
pub trait LunarOracle {
    fn moon_illumination(&self, instant: DateTime<Utc>) -> MoonIllumination;
}

impl<F> SolarOracle for F
where
    F: Fn(NaiveDate, &GeoCoordinate) -> SunTimes,
{
    #[inline]
    fn sun_times(&self, date: NaiveDate, location: &GeoCoordinate) -> SunTimes {
        self(date, location)
    }
}

impl<F> LunarOracle for F
where
    F: Fn(DateTime<Utc>) -> MoonIllumination,
{
    #[inline]
    fn moon_illumination(&self, instant: DateTime<Utc>) -> MoonIllumination {
        self(instant)
    }
}

/// Precomputed sunrise/sunset times for a single location.
///
/// Dates missing from the table answer with [`SunTimes::none`]. The location
/// argument of [`SolarOracle::sun_times`] is ignored: a table is built for one
/// place.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolarTable {
    days: BTreeMap<NaiveDate, SunTimes>,
}

impl SolarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entry for `date`.
    pub fn insert(&mut self, date: NaiveDate, times: SunTimes) -> Option<SunTimes> {
        self.days.insert(date, times)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_day(mut self, date: NaiveDate, times: SunTimes) -> Self {
        self.days.insert(date, times);
        self
    }

    pub fn get(&self, date: NaiveDate) -> Option<&SunTimes> {
        self.days.get(&date)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<(NaiveDate, SunTimes)> for SolarTable {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, SunTimes)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

impl SolarOracle for SolarTable {
    fn sun_times(&self, date: NaiveDate, _location: &GeoCoordinate) -> SunTimes {
        self.days.get(&date).copied().unwrap_or_default()
    }
}
