// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lunar phase classification.
//!
//! The continuous phase fraction reported by a [`LunarOracle`] is binned into
//! eight named phases. Each name covers one eighth of the cycle centred on
//! its nominal point, so New Moon spans the wrap at 0/1:
//!
//! | Phase fraction | Phase |
//! |----------------|-------|
//! | `[0.9375, 1) ∪ [0, 0.0625)` | New Moon |
//! | `[0.0625, 0.1875)` | Waxing Crescent |
//! | `[0.1875, 0.3125)` | First Quarter |
//! | `[0.3125, 0.4375)` | Waxing Gibbous |
//! | `[0.4375, 0.5625)` | Full Moon |
//! | `[0.5625, 0.6875)` | Waning Gibbous |
//! | `[0.6875, 0.8125)` | Last Quarter |
//! | `[0.8125, 0.9375)` | Waning Crescent |

use crate::{LunarOracle, MoonIllumination};
use chrono::{DateTime, TimeZone, Utc};
use qtty::Days;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean synodic month.
pub const SYNODIC_MONTH: Days = Days::new(29.530_588_853);

/// Exclusive upper edge of each bin in [`LunarPhase::ALL`] order; the last
/// entry closes the New Moon bin that reopens after the wrap.
const PHASE_UPPER_EDGES: [f64; 8] = [
    0.0625, 0.1875, 0.3125, 0.4375, 0.5625, 0.6875, 0.8125, 0.9375,
];

/// One of the eight named phases, in waxing-to-waning order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LunarPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl LunarPhase {
    pub const ALL: [LunarPhase; 8] = [
        LunarPhase::NewMoon,
        LunarPhase::WaxingCrescent,
        LunarPhase::FirstQuarter,
        LunarPhase::WaxingGibbous,
        LunarPhase::FullMoon,
        LunarPhase::WaningGibbous,
        LunarPhase::LastQuarter,
        LunarPhase::WaningCrescent,
    ];

    /// Classifies a phase fraction.
    ///
    /// Values outside `[0, 1)` are wrapped; NaN and infinities count as new
    /// moon.
    pub fn from_phase(phase: f64) -> Self {
        if !phase.is_finite() {
            return LunarPhase::NewMoon;
        }
        let phase = phase.rem_euclid(1.0);
        let bin = PHASE_UPPER_EDGES
            .iter()
            .position(|&edge| phase < edge)
            .unwrap_or(0);
        Self::ALL[bin]
    }

    /// Position in [`LunarPhase::ALL`] (0 = New Moon).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            LunarPhase::NewMoon => "New Moon",
            LunarPhase::WaxingCrescent => "Waxing Crescent",
            LunarPhase::FirstQuarter => "First Quarter",
            LunarPhase::WaxingGibbous => "Waxing Gibbous",
            LunarPhase::FullMoon => "Full Moon",
            LunarPhase::WaningGibbous => "Waning Gibbous",
            LunarPhase::LastQuarter => "Last Quarter",
            LunarPhase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Moon phase emoji, for hosts that render text.
    pub const fn symbol(self) -> char {
        match self {
            LunarPhase::NewMoon => '🌑',
            LunarPhase::WaxingCrescent => '🌒',
            LunarPhase::FirstQuarter => '🌓',
            LunarPhase::WaxingGibbous => '🌔',
            LunarPhase::FullMoon => '🌕',
            LunarPhase::WaningGibbous => '🌖',
            LunarPhase::LastQuarter => '🌗',
            LunarPhase::WaningCrescent => '🌘',
        }
    }

    /// Between new and full, exclusive of both.
    pub const fn is_waxing(self) -> bool {
        matches!(
            self,
            LunarPhase::WaxingCrescent | LunarPhase::FirstQuarter | LunarPhase::WaxingGibbous
        )
    }

    /// Between full and new, exclusive of both.
    pub const fn is_waning(self) -> bool {
        matches!(
            self,
            LunarPhase::WaningGibbous | LunarPhase::LastQuarter | LunarPhase::WaningCrescent
        )
    }
}

impl fmt::Display for LunarPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the classifier knows about the moon at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LunarReading {
    /// Raw phase fraction from the oracle.
    pub phase_fraction: f64,
    pub phase: LunarPhase,
    pub illuminated_fraction: Option<f64>,
    /// Days since the last new moon, from the mean synodic month.
    #[cfg_attr(feature = "serde", serde(with = "days_as_f64"))]
    pub age: Days,
}

#[cfg(feature = "serde")]
mod days_as_f64 {
    use qtty::Days;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(days: &Days, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(days.value())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Days, D::Error> {
        f64::deserialize(deserializer).map(Days::new)
    }
}

/// Maps oracle readings onto [`LunarPhase`]s.
#[derive(Debug, Clone, Default)]
pub struct LunarPhaseClassifier<O> {
    oracle: O,
}

impl<O: LunarOracle> LunarPhaseClassifier<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// The named phase at `now`.
    pub fn classify<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> LunarPhase {
        self.read(now).phase
    }

    /// Phase, illumination and age at `now`.
    pub fn read<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> LunarReading {
        let MoonIllumination { phase, fraction } =
            self.oracle.moon_illumination(now.with_timezone(&Utc));
        let wrapped = if phase.is_finite() {
            phase.rem_euclid(1.0)
        } else {
            0.0
        };
        LunarReading {
            phase_fraction: phase,
            phase: LunarPhase::from_phase(phase),
            illuminated_fraction: fraction,
            age: SYNODIC_MONTH * wrapped,
        }
    }
}
