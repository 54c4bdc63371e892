use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use horaria::{Almanac, GeoCoordinate, MoonIllumination, SolarTable, SunTimes};

fn main() {
    let london: GeoCoordinate = "51.5074,-0.1278".parse().expect("valid coordinate");

    // Sunrise and sunset in London, 3–4 January 2024 (UTC).
    let day = |d: u32| NaiveDate::from_ymd_opt(2024, 1, d).expect("valid date");
    let at = |d: u32, h: u32, m: u32| {
        Utc.with_ymd_and_hms(2024, 1, d, h, m, 0)
            .single()
            .expect("valid instant")
    };
    let table = SolarTable::new()
        .with_day(day(3), SunTimes::new(at(3, 8, 6), at(3, 16, 5)))
        .with_day(day(4), SunTimes::new(at(4, 8, 6), at(4, 16, 6)));

    let moon = |_: DateTime<Utc>| MoonIllumination::from_phase(0.74);
    let almanac = Almanac::new(london, table, moon);
    let now = at(3, 14, 20);
    let snapshot = almanac.snapshot(&now);

    println!("Location: {}", snapshot.location);
    println!("Planetary day of {} ({})", snapshot.cycle.anchor_date, snapshot.cycle.day_ruler);
    for hour in &snapshot.cycle.hours {
        let marker = if Some(*hour) == snapshot.cycle.current_hour {
            "→"
        } else {
            " "
        };
        println!("{marker} {hour}");
    }
    println!(
        "Moon: {} {} ({:.1} days old)",
        snapshot.lunar.phase.symbol(),
        snapshot.lunar.phase,
        snapshot.lunar.age.value()
    );
}
