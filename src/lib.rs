// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Planetary hours and lunar phases.
//!
//! The interval between one sunrise and the next is divided into 24 unequal
//! *planetary hours*: twelve spanning daylight and twelve spanning night.
//! Each hour is ruled by one of the seven classical planets, rotating in the
//! Chaldean order from the ruler of the weekday.
//!
//! # Core types
//!
//! - [`PlanetaryHourEngine`] — computes the [`CycleResult`] containing a
//!   given instant, including the current [`PlanetaryHour`].
//! - [`LunarPhaseClassifier`] — maps the moon's phase fraction onto one of
//!   eight named [`LunarPhase`]s.
//! - [`Almanac`] — both of the above plus a location, one [`Snapshot`] per
//!   clock tick.
//! - [`Planet`], [`CHALDEAN_ORDER`] — rulers and their rotation.
//! - [`Interval`] — half-open `[start, end)` span between UTC instants.
//!
//! # Oracles
//!
//! Sunrise, sunset and moon phase come from outside the crate through the
//! [`SolarOracle`] and [`LunarOracle`] traits. Closures implement both, and
//! [`SolarTable`] serves precomputed times.
//!
//! ```
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use horaria::{GeoCoordinate, Planet, PlanetaryHourEngine, SunTimes};
//!
//! let oracle = |date: NaiveDate, _: &GeoCoordinate| {
//!     let midnight = date.and_hms_opt(0, 0, 0).unwrap().and_utc();
//!     SunTimes::new(
//!         midnight + chrono::Duration::hours(6),
//!         midnight + chrono::Duration::hours(18),
//!     )
//! };
//! let engine = PlanetaryHourEngine::new(oracle);
//! let now = Utc.with_ymd_and_hms(2024, 1, 3, 6, 30, 0).unwrap(); // a Wednesday
//! let cycle = engine.compute_cycle(&now, &GeoCoordinate::new(51.5074, -0.1278));
//!
//! assert_eq!(cycle.hours.len(), 24);
//! assert_eq!(cycle.current_hour.unwrap().ruler, Planet::Mercury);
//! ```
//!
//! # Degraded cycles
//!
//! Where the sun does not rise or set (polar day and night) the oracle has
//! nothing to anchor on. The cycle then carries no hours and names the
//! reason in [`CycleResult::degraded`]; it is not an error.

mod almanac;
mod error;
mod hours;
mod interval;
mod location;
mod lore;
mod lunar;
mod oracle;
mod planet;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use almanac::{Almanac, Snapshot};
pub use error::{DegradedCycle, LocationError};
pub use hours::{
    generate_hours, CycleResult, PlanetaryHour, PlanetaryHourEngine, Segment, HOURS_PER_SEGMENT,
};
pub use interval::Interval;
pub use location::GeoCoordinate;
pub use lore::PlanetaryLore;
pub use lunar::{LunarPhase, LunarPhaseClassifier, LunarReading, SYNODIC_MONTH};
pub use oracle::{LunarOracle, MoonIllumination, SolarOracle, SolarTable, SunTimes};
pub use planet::{Planet, UnknownPlanet, CHALDEAN_ORDER};
