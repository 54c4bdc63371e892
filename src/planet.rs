// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The seven classical planets, the Chaldean order and the weekday rulers.
//!
//! # Chaldean order
//!
//! | Index | Planet | Rules |
//! |-------|--------|-------|
//! | 0 | [`Planet::Saturn`]  | Saturday |
//! | 1 | [`Planet::Jupiter`] | Thursday |
//! | 2 | [`Planet::Mars`]    | Tuesday |
//! | 3 | [`Planet::Sun`]     | Sunday |
//! | 4 | [`Planet::Venus`]   | Friday |
//! | 5 | [`Planet::Mercury`] | Wednesday |
//! | 6 | [`Planet::Moon`]    | Monday |
//!
//! Successive planetary hours step one place forward in this order, wrapping
//! from the Moon back to Saturn.

use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A classical planet.
///
/// Declaration order is the Chaldean order, so `Planet as usize` is the
/// Chaldean index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Planet {
    Saturn,
    Jupiter,
    Mars,
    Sun,
    Venus,
    Mercury,
    Moon,
}

/// Descending orbital period as seen from Earth.
pub const CHALDEAN_ORDER: [Planet; 7] = [
    Planet::Saturn,
    Planet::Jupiter,
    Planet::Mars,
    Planet::Sun,
    Planet::Venus,
    Planet::Mercury,
    Planet::Moon,
];

impl Planet {
    /// Position of this planet in [`CHALDEAN_ORDER`].
    #[inline]
    pub const fn chaldean_index(self) -> usize {
        self as usize
    }

    /// The planet `steps` places after `self` in the Chaldean order.
    #[inline]
    pub const fn ruler_after(self, steps: usize) -> Planet {
        CHALDEAN_ORDER[(self.chaldean_index() + steps) % CHALDEAN_ORDER.len()]
    }

    /// Ruler of the first daylight hour of `weekday`.
    pub const fn day_ruler(weekday: Weekday) -> Planet {
        match weekday {
            Weekday::Sun => Planet::Sun,
            Weekday::Mon => Planet::Moon,
            Weekday::Tue => Planet::Mars,
            Weekday::Wed => Planet::Mercury,
            Weekday::Thu => Planet::Jupiter,
            Weekday::Fri => Planet::Venus,
            Weekday::Sat => Planet::Saturn,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Planet::Saturn => "Saturn",
            Planet::Jupiter => "Jupiter",
            Planet::Mars => "Mars",
            Planet::Sun => "Sun",
            Planet::Venus => "Venus",
            Planet::Mercury => "Mercury",
            Planet::Moon => "Moon",
        }
    }

    /// Astronomical glyph.
    pub const fn symbol(self) -> char {
        match self {
            Planet::Saturn => '♄',
            Planet::Jupiter => '♃',
            Planet::Mars => '♂',
            Planet::Sun => '☉',
            Planet::Venus => '♀',
            Planet::Mercury => '☿',
            Planet::Moon => '☽',
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a planet name is not one of the seven.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown planet {0:?}")]
pub struct UnknownPlanet(pub String);

/// Case-insensitive parse of the English name.
impl FromStr for Planet {
    type Err = UnknownPlanet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CHALDEAN_ORDER
            .into_iter()
            .find(|planet| planet.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPlanet(s.to_string()))
    }
}
