// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! One-call view of the sky for a host's clock tick.

use crate::{
    CycleResult, GeoCoordinate, LunarOracle, LunarPhaseClassifier, LunarReading,
    PlanetaryHourEngine, SolarOracle,
};
use chrono::{DateTime, TimeZone};

/// The planetary day and the moon at one instant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub location: GeoCoordinate,
    pub cycle: CycleResult,
    pub lunar: LunarReading,
}

/// Bundles both oracles with the observer's location.
///
/// Nothing is cached: every [`snapshot`](Almanac::snapshot) recomputes the
/// cycle and the lunar reading from scratch, so a host may call it at any
/// cadence and from any number of threads.
#[derive(Debug, Clone)]
pub struct Almanac<S, L> {
    location: GeoCoordinate,
    hours: PlanetaryHourEngine<S>,
    moon: LunarPhaseClassifier<L>,
}

impl<S: SolarOracle, L: LunarOracle> Almanac<S, L> {
    pub fn new(location: GeoCoordinate, solar: S, lunar: L) -> Self {
        Self {
            location,
            hours: PlanetaryHourEngine::new(solar),
            moon: LunarPhaseClassifier::new(lunar),
        }
    }

    pub fn location(&self) -> GeoCoordinate {
        self.location
    }

    /// Moves the observer; the next snapshot uses the new location.
    pub fn set_location(&mut self, location: GeoCoordinate) {
        tracing::debug!(from = %self.location, to = %location, "almanac location changed");
        self.location = location;
    }

    pub fn hours(&self) -> &PlanetaryHourEngine<S> {
        &self.hours
    }

    pub fn moon(&self) -> &LunarPhaseClassifier<L> {
        &self.moon
    }

    pub fn snapshot<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Snapshot {
        Snapshot {
            location: self.location,
            cycle: self.hours.compute_cycle(now, &self.location),
            lunar: self.moon.read(now),
        }
    }
}
