// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Half-open time intervals.
//!
//! [`Interval`] is the `[start, end)` span of a planetary hour and the
//! daylight or night segment it is cut from.

use chrono::{DateTime, Utc};
use qtty::Seconds;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents an interval between two UTC instants.
///
/// Intervals are treated as half-open ranges `[start, end)`: the start
/// instant belongs to the interval, the end instant belongs to whatever
/// comes next.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use horaria::Interval;
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 3, 6, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 1, 3, 7, 0, 0).unwrap();
/// let hour = Interval::new(start, end);
///
/// assert!(hour.contains(start));
/// assert!(!hour.contains(end));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Interval { start, end }
    }

    /// `end - start`, negative for a reversed interval.
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    /// `true` when `start <= instant < end`.
    #[inline]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// `true` when the interval covers no time at all (or is reversed).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns the duration in seconds, keeping sub-second precision.
    pub fn duration_seconds(&self) -> Seconds {
        let duration = self.duration();
        match duration.num_nanoseconds() {
            Some(ns) => Seconds::new(ns as f64 / 1e9),
            // Spans beyond ~292 years do not fit in i64 nanoseconds.
            None => Seconds::new(duration.num_seconds() as f64),
        }
    }

    /// Splits the interval into `parts` contiguous sub-intervals of equal length.
    ///
    /// Boundaries are placed at `start + ⌊total·i / parts⌋` nanoseconds, so
    /// the first sub-interval starts at `start`, the last ends at `end`, and
    /// each sub-interval's end is the next one's start. Every sub-interval is
    /// non-empty.
    ///
    /// Returns `None` for `parts == 0`, for a span shorter than `parts`
    /// nanoseconds, or when the span is too long to count in nanoseconds.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use horaria::Interval;
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 1, 3, 6, 0, 0).unwrap();
    /// let end = Utc.with_ymd_and_hms(2024, 1, 3, 18, 0, 0).unwrap();
    /// let hours = Interval::new(start, end).subdivide(12).unwrap();
    ///
    /// assert_eq!(hours.len(), 12);
    /// assert_eq!(hours[0].start, start);
    /// assert_eq!(hours[11].end, end);
    /// ```
    pub fn subdivide(&self, parts: u32) -> Option<Vec<Self>> {
        let total = i128::from(self.duration().num_nanoseconds()?);
        let parts = i128::from(parts);
        if parts == 0 || total < parts {
            return None;
        }
        let boundary = |i: i128| {
            // total · i / parts <= total, which already fits in i64.
            let offset = (total * i / parts) as i64;
            self.start + chrono::Duration::nanoseconds(offset)
        };

        Some(
            (0..parts)
                .map(|i| {
                    if i + 1 == parts {
                        Interval::new(boundary(i), self.end)
                    } else {
                        Interval::new(boundary(i), boundary(i + 1))
                    }
                })
                .collect(),
        )
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
