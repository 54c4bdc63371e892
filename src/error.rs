// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types.
//!
//! | Type | Raised by | Returned as |
//! |------|-----------|-------------|
//! | [`LocationError`] | [`GeoCoordinate::validate`](crate::GeoCoordinate::validate), `"lat,lon"` parsing | `Err` |
//! | [`DegradedCycle`] | [`PlanetaryHourEngine::compute_cycle`](crate::PlanetaryHourEngine::compute_cycle) | data in [`CycleResult::degraded`](crate::CycleResult::degraded) |
//!
//! A degraded cycle is not a failure of the call: the result simply carries
//! no hours. The reason is kept so hosts can tell "no sunrise here today"
//! apart from other gaps.

use chrono::NaiveDate;
use thiserror::Error;

/// Invalid or unparseable geographic coordinate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    /// Input is not of the form `"<latitude>,<longitude>"`.
    #[error("malformed coordinate {0:?}, expected \"<latitude>,<longitude>\"")]
    Malformed(String),

    /// One of the two components is not a number.
    #[error("invalid {axis} {value:?}: {source}")]
    InvalidNumber {
        axis: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Latitude or longitude is NaN or infinite.
    #[error("coordinate components must be finite")]
    NotFinite,

    /// Latitude outside `[-90, 90]`.
    #[error("latitude {0}° outside [-90°, 90°]")]
    LatitudeOutOfRange(f64),

    /// Longitude outside `[-180, 180]`.
    #[error("longitude {0}° outside [-180°, 180°]")]
    LongitudeOutOfRange(f64),
}

/// Why a cycle could not be partitioned into planetary hours.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DegradedCycle {
    #[error("no sunrise on {0}")]
    MissingSunrise(NaiveDate),

    #[error("no sunset on {0}")]
    MissingSunset(NaiveDate),

    #[error("no sunrise on {0} to close the night")]
    MissingNextSunrise(NaiveDate),

    /// Sunset is not after sunrise, or too close to it to hold twelve
    /// non-empty hours.
    #[error("sunset does not follow sunrise")]
    NonPositiveDay,

    /// Same as [`NonPositiveDay`](Self::NonPositiveDay) for the night.
    #[error("next sunrise does not follow sunset")]
    NonPositiveNight,

    /// The anchor or its neighbouring date is outside chrono's calendar, or
    /// a segment is too long to count in nanoseconds.
    #[error("date outside the supported calendar range")]
    DateOutOfRange,
}
