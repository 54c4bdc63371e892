// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Planetary hours.
//!
//! A planetary day runs from one sunrise to the next. Daylight (sunrise to
//! sunset) and night (sunset to the next sunrise) are each split into twelve
//! equal parts, so day hours and night hours generally differ in length and
//! change through the year.
//!
//! The first day hour is ruled by the planet of the weekday on which the
//! cycle's sunrise falls; every following hour steps one place along the
//! Chaldean order:
//!
//! ```text
//! hour i (0..24)  →  CHALDEAN_ORDER[(index(day ruler) + i) mod 7]
//! ```
//!
//! # Anchoring
//!
//! Between local midnight and sunrise the sky is still in the night of the
//! *previous* planetary day. [`PlanetaryHourEngine::compute_cycle`] therefore
//! anchors on yesterday's sunrise whenever `now` precedes today's sunrise;
//! otherwise it anchors on today.

use crate::{DegradedCycle, GeoCoordinate, Interval, Planet, SolarOracle, SunTimes};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use qtty::Seconds;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of planetary hours in each of the day and night segments.
pub const HOURS_PER_SEGMENT: u8 = 12;

/// Half of a planetary day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Segment {
    /// Sunrise to sunset.
    Day,
    /// Sunset to the next sunrise.
    Night,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Segment::Day => "Day",
            Segment::Night => "Night",
        })
    }
}

/// One of the 24 unequal hours of a planetary day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanetaryHour {
    /// 1-based position within its segment (1..=12).
    pub ordinal: u8,
    pub segment: Segment,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub ruler: Planet,
}

impl PlanetaryHour {
    /// 0-based position within the cycle (0..24), day hours first.
    #[inline]
    pub fn index(&self) -> usize {
        let offset = match self.segment {
            Segment::Day => 0,
            Segment::Night => usize::from(HOURS_PER_SEGMENT),
        };
        offset + usize::from(self.ordinal) - 1
    }

    #[inline]
    pub fn span(&self) -> Interval {
        Interval::new(self.start, self.end)
    }

    /// `true` when `start <= instant < end`.
    #[inline]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.span().contains(instant)
    }

    #[inline]
    pub fn duration(&self) -> chrono::Duration {
        self.span().duration()
    }
}

impl fmt::Display for PlanetaryHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hour {:>2} {} {}  {}",
            self.segment,
            self.ordinal,
            self.ruler.symbol(),
            self.ruler,
            self.span()
        )
    }
}

/// The planetary day containing a given instant.
///
/// When the oracle cannot provide one of the three anchoring events, or they
/// are out of order, the cycle is *degraded*: `hours` is empty,
/// `current_hour` is `None` and `degraded` says why.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CycleResult {
    /// Local calendar date of the sunrise that opens the cycle.
    pub anchor_date: NaiveDate,
    /// Ruler of the anchor date's weekday.
    pub day_ruler: Planet,
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
    pub next_sunrise: Option<DateTime<Utc>>,
    /// The 24 hours in chronological order, or none when degraded.
    pub hours: Vec<PlanetaryHour>,
    pub current_hour: Option<PlanetaryHour>,
    pub degraded: Option<DegradedCycle>,
}

impl CycleResult {
    /// Start of the cycle (the anchoring sunrise).
    #[inline]
    pub fn day_start(&self) -> Option<DateTime<Utc>> {
        self.sunrise
    }

    /// End of the cycle (the following sunrise).
    #[inline]
    pub fn day_end(&self) -> Option<DateTime<Utc>> {
        self.next_sunrise
    }

    #[inline]
    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }

    /// The hour containing `instant`, if it falls inside this cycle.
    pub fn hour_at(&self, instant: DateTime<Utc>) -> Option<&PlanetaryHour> {
        self.hours.iter().find(|hour| hour.contains(instant))
    }

    /// The hour after the current one, within this cycle.
    pub fn next_hour(&self) -> Option<&PlanetaryHour> {
        let current = self.current_hour.as_ref()?;
        self.hours.get(current.index() + 1)
    }

    pub fn day_hours(&self) -> &[PlanetaryHour] {
        self.segment_hours(Segment::Day)
    }

    pub fn night_hours(&self) -> &[PlanetaryHour] {
        self.segment_hours(Segment::Night)
    }

    /// Length of one day hour.
    pub fn day_hour_length(&self) -> Option<Seconds> {
        self.day_hours().first().map(|h| h.span().duration_seconds())
    }

    /// Length of one night hour.
    pub fn night_hour_length(&self) -> Option<Seconds> {
        self.night_hours().first().map(|h| h.span().duration_seconds())
    }

    fn segment_hours(&self, segment: Segment) -> &[PlanetaryHour] {
        let per = usize::from(HOURS_PER_SEGMENT);
        if self.hours.len() != 2 * per {
            return &[];
        }
        match segment {
            Segment::Day => &self.hours[..per],
            Segment::Night => &self.hours[per..],
        }
    }
}

/// Partitions a sunrise-to-sunrise cycle into its 24 ruled hours.
///
/// `day_ruler` rules the first day hour. The twelve day hours tile
/// `[sunrise, sunset)` and the twelve night hours tile
/// `[sunset, next_sunrise)`; consecutive hours share their boundary instant.
pub fn generate_hours(
    day_ruler: Planet,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
    next_sunrise: DateTime<Utc>,
) -> Result<Vec<PlanetaryHour>, DegradedCycle> {
    let day = split_segment(Interval::new(sunrise, sunset), DegradedCycle::NonPositiveDay)?;
    let night = split_segment(
        Interval::new(sunset, next_sunrise),
        DegradedCycle::NonPositiveNight,
    )?;

    let day = day.into_iter().map(|span| (Segment::Day, span));
    let night = night.into_iter().map(|span| (Segment::Night, span));

    Ok(day
        .chain(night)
        .enumerate()
        .map(|(i, (segment, span))| PlanetaryHour {
            ordinal: (i % usize::from(HOURS_PER_SEGMENT)) as u8 + 1,
            segment,
            start: span.start,
            end: span.end,
            ruler: day_ruler.ruler_after(i),
        })
        .collect())
}

/// Cuts one segment into its twelve hours. Segments too short to give every
/// hour at least a nanosecond fail with `too_short`.
fn split_segment(
    span: Interval,
    too_short: DegradedCycle,
) -> Result<Vec<Interval>, DegradedCycle> {
    let parts = u32::from(HOURS_PER_SEGMENT);
    if span.duration() < chrono::Duration::nanoseconds(i64::from(parts)) {
        return Err(too_short);
    }
    span.subdivide(parts).ok_or(DegradedCycle::DateOutOfRange)
}

/// Computes planetary days from a [`SolarOracle`].
///
/// The engine keeps no state between calls; every call asks the oracle
/// afresh. Hosts decide how often to recompute (once a minute is plenty)
/// and whether to cache.
#[derive(Debug, Clone, Default)]
pub struct PlanetaryHourEngine<O> {
    oracle: O,
}

impl<O: SolarOracle> PlanetaryHourEngine<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// The planetary day containing `now` at `location`, with the current hour.
    ///
    /// "Today" is the calendar date of `now` in its own time zone. Before
    /// today's sunrise the cycle is anchored on yesterday.
    pub fn compute_cycle<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        location: &GeoCoordinate,
    ) -> CycleResult {
        let today = now.date_naive();
        let now_utc = now.with_timezone(&Utc);
        let today_times = self.oracle.sun_times(today, location);
        let before_sunrise = today_times.sunrise.is_some_and(|sunrise| now_utc < sunrise);

        let mut cycle = if before_sunrise {
            match today.pred_opt() {
                Some(yesterday) => {
                    let yesterday_times = self.oracle.sun_times(yesterday, location);
                    assemble(yesterday, yesterday_times, Ok(today_times.sunrise))
                }
                None => assemble(today, today_times, Err(DegradedCycle::DateOutOfRange)),
            }
        } else {
            let next_sunrise = today
                .succ_opt()
                .map(|tomorrow| self.oracle.sun_times(tomorrow, location).sunrise)
                .ok_or(DegradedCycle::DateOutOfRange);
            assemble(today, today_times, next_sunrise)
        };

        cycle.current_hour = cycle.hour_at(now_utc).copied();
        tracing::debug!(
            %location,
            anchor = %cycle.anchor_date,
            day_ruler = %cycle.day_ruler,
            before_sunrise,
            current = ?cycle.current_hour.map(|h| (h.segment, h.ordinal, h.ruler)),
            "planetary cycle computed"
        );
        cycle
    }

    /// The planetary day opened by the sunrise of `anchor_date`.
    ///
    /// No instant is involved, so `current_hour` is `None`.
    pub fn cycle_anchored_on(
        &self,
        anchor_date: NaiveDate,
        location: &GeoCoordinate,
    ) -> CycleResult {
        let times = self.oracle.sun_times(anchor_date, location);
        let next_sunrise = anchor_date
            .succ_opt()
            .map(|next| self.oracle.sun_times(next, location).sunrise)
            .ok_or(DegradedCycle::DateOutOfRange);
        assemble(anchor_date, times, next_sunrise)
    }
}

fn assemble(
    anchor_date: NaiveDate,
    times: SunTimes,
    next_sunrise: Result<Option<DateTime<Utc>>, DegradedCycle>,
) -> CycleResult {
    let day_ruler = Planet::day_ruler(anchor_date.weekday());
    let reported_next_sunrise = next_sunrise.ok().flatten();
    let hours = next_sunrise.and_then(|next_sunrise| {
        let sunrise = times.sunrise.ok_or(DegradedCycle::MissingSunrise(anchor_date))?;
        let sunset = times.sunset.ok_or(DegradedCycle::MissingSunset(anchor_date))?;
        let next_sunrise = next_sunrise.ok_or_else(|| {
            DegradedCycle::MissingNextSunrise(anchor_date.succ_opt().unwrap_or(anchor_date))
        })?;
        generate_hours(day_ruler, sunrise, sunset, next_sunrise)
    });

    let (hours, degraded) = match hours {
        Ok(hours) => (hours, None),
        Err(reason) => {
            tracing::warn!(anchor = %anchor_date, %reason, "planetary cycle unavailable");
            (Vec::new(), Some(reason))
        }
    };

    CycleResult {
        anchor_date,
        day_ruler,
        sunrise: times.sunrise,
        sunset: times.sunset,
        next_sunrise: reported_next_sunrise,
        hours,
        current_hour: None,
        degraded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SolarTable, CHALDEAN_ORDER};
    use chrono::{Duration, FixedOffset};

    const LONDON: GeoCoordinate = GeoCoordinate::new(51.5074, -0.1278);

    fn at(day: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, h, m, 0).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    /// Tue 2 Jan to Thu 4 Jan 2024, sunrise 06:00 / sunset 18:00, except
    /// the 4th whose sunrise is 06:05.
    fn table() -> SolarTable {
        SolarTable::new()
            .with_day(date(2), SunTimes::new(at(2, 6, 0), at(2, 18, 0)))
            .with_day(date(3), SunTimes::new(at(3, 6, 0), at(3, 18, 0)))
            .with_day(date(4), SunTimes::new(at(4, 6, 5), at(4, 18, 0)))
    }

    fn engine() -> PlanetaryHourEngine<SolarTable> {
        PlanetaryHourEngine::new(table())
    }

    #[test]
    fn wednesday_day_hours_start_with_mercury() {
        let cycle = engine().compute_cycle(&at(3, 12, 30), &LONDON);

        assert_eq!(cycle.anchor_date, date(3));
        assert_eq!(cycle.day_ruler, Planet::Mercury);
        assert_eq!(cycle.hours.len(), 24);
        assert_eq!(
            cycle.hours[0],
            PlanetaryHour {
                ordinal: 1,
                segment: Segment::Day,
                start: at(3, 6, 0),
                end: at(3, 7, 0),
                ruler: Planet::Mercury,
            }
        );
        assert_eq!(
            cycle.hours[11],
            PlanetaryHour {
                ordinal: 12,
                segment: Segment::Day,
                start: at(3, 17, 0),
                end: at(3, 18, 0),
                ruler: Planet::Mars,
            }
        );
    }

    #[test]
    fn wednesday_night_hours_are_longer() {
        let cycle = engine().compute_cycle(&at(3, 12, 30), &LONDON);
        // 18:00 → 06:05 is 725 minutes, so each night hour lasts 3625 s.
        let first_night = cycle.hours[12];
        assert_eq!(first_night.ordinal, 1);
        assert_eq!(first_night.segment, Segment::Night);
        assert_eq!(first_night.ruler, Planet::Sun);
        assert_eq!(first_night.start, at(3, 18, 0));
        assert_eq!(first_night.end, at(3, 18, 0) + Duration::seconds(3_625));

        assert_eq!(cycle.day_hour_length(), Some(Seconds::new(3_600.0)));
        assert_eq!(cycle.night_hour_length(), Some(Seconds::new(3_625.0)));
        assert_eq!(cycle.day_start(), Some(at(3, 6, 0)));
        assert_eq!(cycle.day_end(), Some(at(4, 6, 5)));
    }

    #[test]
    fn current_hour_is_the_one_containing_now() {
        let cycle = engine().compute_cycle(&at(3, 12, 30), &LONDON);
        let current = cycle.current_hour.unwrap();
        assert_eq!(current.index(), 6);
        assert_eq!(current.start, at(3, 12, 0));
        assert_eq!(current.ruler, Planet::Venus);
        assert_eq!(cycle.next_hour().map(|h| h.ruler), Some(Planet::Mercury));
    }

    #[test]
    fn boundary_instant_belongs_to_the_next_hour() {
        let cycle = engine().compute_cycle(&at(3, 7, 0), &LONDON);
        let current = cycle.current_hour.unwrap();
        assert_eq!(current, cycle.hours[1]);
        assert_eq!(current.ruler, Planet::Moon);

        let at_sunset = engine().compute_cycle(&at(3, 18, 0), &LONDON);
        assert_eq!(at_sunset.current_hour, Some(at_sunset.hours[12]));
    }

    #[test]
    fn before_sunrise_anchors_on_yesterday() {
        let cycle = engine().compute_cycle(&at(3, 5, 0), &LONDON);

        assert_eq!(cycle.anchor_date, date(2));
        assert_eq!(cycle.day_ruler, Planet::Mars);
        assert_eq!(cycle.day_start(), Some(at(2, 6, 0)));
        assert_eq!(cycle.day_end(), Some(at(3, 6, 0)));

        let current = cycle.current_hour.unwrap();
        assert_eq!(current.segment, Segment::Night);
        assert_eq!(current.ordinal, 12);
        assert_eq!(current.start, at(3, 5, 0));
        assert_eq!(current.ruler, Planet::Venus);
    }

    #[test]
    fn one_minute_before_sunrise_matches_yesterdays_cycle() {
        let engine = engine();
        let now = at(3, 5, 59);
        let cycle = engine.compute_cycle(&now, &LONDON);
        let yesterday = engine.cycle_anchored_on(date(2), &LONDON);

        assert_eq!(cycle.hours, yesterday.hours);
        assert_eq!(cycle.current_hour.as_ref(), yesterday.hour_at(now));
        assert_eq!(cycle.current_hour.unwrap().index(), 23);
    }

    #[test]
    fn at_sunrise_the_new_day_begins() {
        let cycle = engine().compute_cycle(&at(3, 6, 0), &LONDON);
        assert_eq!(cycle.anchor_date, date(3));
        assert_eq!(cycle.current_hour, Some(cycle.hours[0]));
        // Tuesday's last hour (Venus) hands over to Wednesday's first (Mercury).
        assert_eq!(Planet::Venus.ruler_after(1), Planet::Mercury);
    }

    #[test]
    fn local_calendar_date_drives_anchoring() {
        // +10:00 location: local sunrise 06:00 is 20:00 UTC the previous day.
        let tz = FixedOffset::east_opt(10 * 3600).unwrap();
        let oracle = SolarTable::new()
            .with_day(date(3), SunTimes::new(at(2, 20, 0), at(3, 8, 0)))
            .with_day(date(4), SunTimes::new(at(3, 20, 0), at(4, 8, 0)));
        let engine = PlanetaryHourEngine::new(oracle);

        // 01:00 local on Thursday the 4th is still Wednesday's night.
        let now = tz.with_ymd_and_hms(2024, 1, 4, 1, 0, 0).unwrap();
        let cycle = engine.compute_cycle(&now, &GeoCoordinate::new(-33.87, 151.21));

        assert_eq!(cycle.anchor_date, date(3));
        assert_eq!(cycle.day_ruler, Planet::Mercury);
        let current = cycle.current_hour.unwrap();
        assert_eq!((current.segment, current.ordinal), (Segment::Night, 8));
        assert_eq!(current.ruler, Planet::Sun);
    }

    #[test]
    fn polar_night_is_degraded() {
        let polar = |_: NaiveDate, _: &GeoCoordinate| SunTimes::none();
        let engine = PlanetaryHourEngine::new(polar);
        let cycle = engine.compute_cycle(&at(3, 12, 0), &GeoCoordinate::new(89.0, 0.0));

        assert_eq!(cycle.anchor_date, date(3));
        assert!(cycle.hours.is_empty());
        assert!(cycle.current_hour.is_none());
        assert_eq!(cycle.degraded, Some(DegradedCycle::MissingSunrise(date(3))));
        assert!(cycle.day_hours().is_empty());
        assert!(cycle.next_hour().is_none());
    }

    #[test]
    fn missing_sunset_is_degraded_but_keeps_sunrise() {
        let oracle = |d: NaiveDate, _: &GeoCoordinate| SunTimes {
            sunrise: Some(d.and_hms_opt(6, 0, 0).unwrap().and_utc()),
            sunset: None,
        };
        let cycle = PlanetaryHourEngine::new(oracle).compute_cycle(&at(3, 12, 0), &LONDON);

        assert_eq!(cycle.degraded, Some(DegradedCycle::MissingSunset(date(3))));
        assert_eq!(cycle.sunrise, Some(at(3, 6, 0)));
        assert!(cycle.hours.is_empty());
        assert_eq!(cycle.day_end(), Some(at(4, 6, 0)));
    }

    #[test]
    fn missing_next_sunrise_is_degraded() {
        let oracle = table().with_day(date(4), SunTimes::none());
        let cycle = PlanetaryHourEngine::new(oracle).compute_cycle(&at(3, 12, 0), &LONDON);
        assert_eq!(cycle.degraded, Some(DegradedCycle::MissingNextSunrise(date(4))));
        assert!(cycle.current_hour.is_none());
    }

    #[test]
    fn sunset_before_sunrise_is_degraded() {
        let oracle = table().with_day(date(3), SunTimes::new(at(3, 18, 0), at(3, 6, 0)));
        let cycle = PlanetaryHourEngine::new(oracle).compute_cycle(&at(3, 19, 0), &LONDON);
        assert_eq!(cycle.degraded, Some(DegradedCycle::NonPositiveDay));
        assert!(cycle.hours.is_empty());
    }

    #[test]
    fn hours_tile_the_cycle_and_rotate_rulers_every_weekday() {
        let table: SolarTable = (1..=15)
            .map(|d| (date(d), SunTimes::new(at(d, 7, 3), at(d, 16, 41))))
            .collect();
        let engine = PlanetaryHourEngine::new(table);

        for d in 1..=14 {
            let cycle = engine.cycle_anchored_on(date(d), &LONDON);
            let hours = &cycle.hours;
            assert_eq!(hours.len(), 24);
            assert_eq!(hours[0].start, at(d, 7, 3));
            assert_eq!(hours[11].end, at(d, 16, 41));
            assert_eq!(hours[23].end, at(d + 1, 7, 3));
            for pair in hours.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
                assert!(pair[0].start < pair[0].end);
            }

            let ruler_index = Planet::day_ruler(date(d).weekday()).chaldean_index();
            for (i, hour) in hours.iter().enumerate() {
                assert_eq!(hour.ruler, CHALDEAN_ORDER[(ruler_index + i) % 7]);
                assert_eq!(hour.index(), i);
            }
        }
    }

    #[test]
    fn generate_hours_rejects_empty_night() {
        assert_eq!(
            generate_hours(Planet::Sun, at(3, 6, 0), at(3, 18, 0), at(3, 18, 0)),
            Err(DegradedCycle::NonPositiveNight)
        );
    }

    #[test]
    fn generate_hours_rejects_a_day_shorter_than_twelve_nanoseconds() {
        let sunrise = at(3, 6, 0);
        let sunset = sunrise + Duration::nanoseconds(5);
        assert_eq!(
            generate_hours(Planet::Sun, sunrise, sunset, at(4, 6, 0)),
            Err(DegradedCycle::NonPositiveDay)
        );

        let sunset = sunrise + Duration::nanoseconds(12);
        let hours = generate_hours(Planet::Sun, sunrise, sunset, at(4, 6, 0)).unwrap();
        assert!(hours.iter().all(|h| h.start < h.end));
    }

    #[test]
    fn generate_hours_reports_unmeasurable_night_as_out_of_range() {
        let far_sunrise = at(3, 18, 0) + Duration::days(365 * 300);
        assert_eq!(
            generate_hours(Planet::Sun, at(3, 6, 0), at(3, 18, 0), far_sunrise),
            Err(DegradedCycle::DateOutOfRange)
        );
    }

    #[test]
    fn display_mentions_segment_and_ruler() {
        let cycle = engine().compute_cycle(&at(3, 12, 30), &LONDON);
        let text = cycle.hours[12].to_string();
        assert!(text.starts_with("Night hour  1"));
        assert!(text.contains("Sun"));
    }
}
