use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use epochal::{
    civil::LocalDateTime,
    tz::{
        AmbiguousOffset, Disambiguation, TimeZone, TransitionRules,
        ZoneOffset, ZoneRegistry, ZoneRules, ZoneRulesProvider,
    },
    Instant, OffsetDateTime, ZonedDateTime,
};

fn offset(hours: i8) -> ZoneOffset {
    ZoneOffset::of_hours(hours).unwrap()
}

fn dt(s: &str) -> LocalDateTime {
    s.parse().unwrap()
}

fn registry() -> ZoneRegistry {
    let paris = TransitionRules::new(
        offset(1),
        [
            ("2007-03-25T01:00:00Z".parse::<Instant>().unwrap(), offset(2)),
            ("2007-10-28T01:00:00Z".parse::<Instant>().unwrap(), offset(1)),
        ],
    )
    .unwrap();
    let midnight = TransitionRules::new(
        offset(-4),
        [("2007-04-01T04:00:00Z".parse::<Instant>().unwrap(), offset(-3))],
    )
    .unwrap();
    let half_past = TransitionRules::new(
        offset(-4),
        [("2007-04-01T03:30:00Z".parse::<Instant>().unwrap(), offset(-3))],
    )
    .unwrap();
    let mut registry = ZoneRegistry::new();
    registry.register("America/HalfPast", half_past);
    registry.register("Europe/Paris", paris);
    registry.register("America/Midnight", midnight);
    registry
}

fn zone(id: &str) -> TimeZone {
    TimeZone::get(id, &registry()).unwrap()
}

#[test]
fn offsets_for_local_datetimes() {
    let tz = zone("Europe/Paris");
    assert_eq!(
        tz.offset_for_local(dt("2007-06-01T12:00")),
        AmbiguousOffset::Unambiguous { offset: offset(2) },
    );
    assert_eq!(
        tz.offset_for_local(dt("2007-03-25T02:00")),
        AmbiguousOffset::Gap { before: offset(1), after: offset(2) },
    );
    assert_eq!(
        tz.offset_for_local(dt("2007-03-25T03:00")),
        AmbiguousOffset::Unambiguous { offset: offset(2) },
    );
    assert_eq!(
        tz.offset_for_local(dt("2007-10-28T02:59:59.999999999")),
        AmbiguousOffset::Overlap { before: offset(2), after: offset(1) },
    );
    assert!(tz.valid_offsets_for_local(dt("2007-03-25T02:30")).is_empty());
    assert_eq!(
        tz.valid_offsets_for_local(dt("2007-10-28T02:30")),
        vec![offset(2), offset(1)],
    );
    assert!(tz.is_valid_offset(dt("2007-10-28T02:30"), offset(1)));
    assert!(!tz.is_valid_offset(dt("2007-10-28T02:30"), offset(3)));
}

#[test]
fn gap_at_midnight() -> crate::Result {
    let _ = crate::Logger::init();
    let tz = zone("America/Midnight");
    let midnight = dt("2007-04-01T00:00");
    let zdt = ZonedDateTime::of_local(midnight, tz.clone(), None)?;
    assert_eq!(zdt.to_string(), "2007-04-01T01:00-03:00[America/Midnight]");

    let start = dt("2007-04-01T00:00").date().at_start_of_day_in(&tz)?;
    assert_eq!(start, zdt);
    Ok(())
}

#[test]
fn start_of_day_after_a_gap_spanning_midnight() -> crate::Result {
    // Clocks jump from 23:30 to 00:30, so the day starts at 00:30.
    let tz = zone("America/HalfPast");
    let date = "2007-04-01".parse::<epochal::civil::LocalDate>()?;
    let start = date.at_start_of_day_in(&tz)?;
    assert_eq!(
        start.to_string(),
        "2007-04-01T00:30-03:00[America/HalfPast]",
    );

    // The day before starts at midnight as usual.
    let start = date.minus_days(1)?.at_start_of_day_in(&tz)?;
    assert_eq!(
        start.to_string(),
        "2007-03-31T00:00-04:00[America/HalfPast]",
    );

    // Midnight in an overlap starts the day at the earlier offset.
    let tz = TimeZone::with_rules(
        "Test/MidnightOverlap",
        TransitionRules::new(
            offset(-3),
            [("2007-11-04T04:00:00Z".parse::<Instant>()?, offset(-4))],
        )?,
    );
    let date = "2007-11-04".parse::<epochal::civil::LocalDate>()?;
    let start = date.at_start_of_day_in(&tz)?;
    assert_eq!(
        start.to_string(),
        "2007-11-04T00:00-03:00[Test/MidnightOverlap]",
    );
    Ok(())
}

#[test]
fn overlap_keeps_the_previous_offset() -> crate::Result {
    let _ = crate::Logger::init();
    let tz = zone("Europe/Paris");
    for (text, hours) in
        [("2007-10-28T02:30+02:00", 2), ("2007-10-28T02:30+01:00", 1)]
    {
        let odt: OffsetDateTime = text.parse()?;
        let zdt = odt.at_zone_similar_local(&tz)?;
        assert_eq!(zdt.offset(), offset(hours), "{text}");
        assert_eq!(zdt.to_instant(), odt.to_instant(), "{text}");
    }

    // Without a preference, the earlier offset wins.
    let overlap = dt("2007-10-28T02:30");
    let zdt = ZonedDateTime::of_local(overlap, tz.clone(), None)?;
    assert_eq!(zdt.offset(), offset(2));
    assert_eq!(zdt.with_later_offset_at_overlap().offset(), offset(1));
    assert_eq!(
        zdt.with_later_offset_at_overlap().with_earlier_offset_at_overlap(),
        zdt,
    );

    // Adjusting the local datetime into an overlap keeps the old offset.
    let before = ZonedDateTime::of_local(dt("2007-10-27T02:30"), tz, None)?;
    assert_eq!(before.offset(), offset(2));
    let after = before.plus_days(1)?;
    assert_eq!(after.to_string(), "2007-10-28T02:30+02:00[Europe/Paris]");
    Ok(())
}

#[test]
fn timeline_arithmetic_crosses_transitions() -> crate::Result {
    let tz = zone("Europe/Paris");
    let before_gap = dt("2007-03-25T01:30");
    let zdt = ZonedDateTime::of_local(before_gap, tz.clone(), None)?;
    let later = zdt.plus_hours(1)?;
    assert_eq!(later.to_string(), "2007-03-25T03:30+02:00[Europe/Paris]");

    let zdt = ZonedDateTime::of_local(dt("2007-10-28T02:30"), tz, None)?;
    let later = zdt.plus_hours(1)?;
    assert_eq!(later.to_string(), "2007-10-28T02:30+01:00[Europe/Paris]");
    assert_eq!(later.minus_hours(1)?, zdt);
    Ok(())
}

#[test]
fn disambiguation_strategies() -> crate::Result {
    let tz = zone("Europe/Paris");
    let gap = dt("2007-03-25T02:30");
    let overlap = dt("2007-10-28T02:30");
    let cases = [
        (Disambiguation::Compatible, gap, "2007-03-25T03:30+02:00"),
        (Disambiguation::Earlier, gap, "2007-03-25T01:30+01:00"),
        (Disambiguation::Later, gap, "2007-03-25T03:30+02:00"),
        (Disambiguation::Compatible, overlap, "2007-10-28T02:30+02:00"),
        (Disambiguation::Earlier, overlap, "2007-10-28T02:30+02:00"),
        (Disambiguation::Later, overlap, "2007-10-28T02:30+01:00"),
    ];
    for (strategy, local, expected) in cases {
        let zdt = ZonedDateTime::of_local_with(local, tz.clone(), strategy)?;
        assert_eq!(
            zdt.to_offset_date_time().to_string(),
            expected,
            "{strategy:?} {local}",
        );
    }
    for local in [gap, overlap] {
        let reject = Disambiguation::Reject;
        let err = ZonedDateTime::of_local_with(local, tz.clone(), reject)
            .unwrap_err();
        assert!(err.is_ambiguous(), "{local}: {err}");
        assert!(!err.is_range());
    }

    let err =
        ZonedDateTime::of_strict(gap, offset(1), tz.clone()).unwrap_err();
    assert!(err.is_ambiguous());
    assert!(ZonedDateTime::of_strict(overlap, offset(1), tz.clone()).is_ok());
    let err = ZonedDateTime::of_strict(overlap, offset(3), tz).unwrap_err();
    assert!(err.is_range(), "{err}");
    assert!(!err.is_ambiguous());
    Ok(())
}

#[test]
fn zones_are_looked_up_by_identifier() -> crate::Result {
    let registry = registry();
    let err = TimeZone::get("Mars/Olympus_Mons", &registry).unwrap_err();
    assert!(err.is_zone_not_found());
    assert!(!err.is_parse());

    let err = ZonedDateTime::parse(
        "2007-06-01T12:00+02:00[Mars/Olympus_Mons]",
        &registry,
    )
    .unwrap_err();
    assert!(err.is_zone_not_found());
    assert!(err.is_parse());

    // Offset identifiers never reach the provider.
    for id in ["Z", "UTC", "GMT+01:00", "UT-05:30", "+02"] {
        let tz = TimeZone::get(id, &registry)?;
        assert!(tz.fixed_offset().is_some(), "{id}");
        assert_eq!(tz.region_id(), None, "{id}");
    }
    Ok(())
}

/// A provider that counts how often rules are asked for.
#[derive(Debug, Default)]
struct CountingProvider {
    inner: ZoneRegistry,
    lookups: AtomicUsize,
}

impl ZoneRulesProvider for CountingProvider {
    fn rules(&self, id: &str) -> Option<Arc<dyn ZoneRules>> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.inner.rules(id)
    }

    fn ids(&self) -> Vec<String> {
        self.inner.ids()
    }
}

/// Rules where the offset moves forward by one hour at every Unix epoch
/// day boundary before 1970-01-03, and then stays put.
#[derive(Debug)]
struct Staircase;

impl ZoneRules for Staircase {
    fn offset_for_instant(&self, instant: Instant) -> ZoneOffset {
        let days = instant.epoch_second().div_euclid(86_400).clamp(0, 2);
        offset(days as i8)
    }

    fn offset_for_local(&self, dt: LocalDateTime) -> AmbiguousOffset {
        let local = dt.to_epoch_second(ZoneOffset::UTC);
        for day in 1..=2i64 {
            let (before, after) = (offset(day as i8 - 1), offset(day as i8));
            let transition = day * 86_400;
            let start = transition + i64::from(before.total_seconds());
            let end = transition + i64::from(after.total_seconds());
            if (start..end).contains(&local) {
                return AmbiguousOffset::Gap { before, after };
            }
        }
        let offset = (0..=2)
            .map(offset)
            .find(|&candidate| {
                let utc = local - i64::from(candidate.total_seconds());
                let instant = Instant::of_epoch_second(utc).unwrap();
                self.offset_for_instant(instant) == candidate
            })
            .unwrap();
        AmbiguousOffset::Unambiguous { offset }
    }
}

#[test]
fn injected_rules_and_providers() -> crate::Result {
    let mut inner = ZoneRegistry::new();
    inner.register("Test/Staircase", Staircase);
    let provider = CountingProvider { inner, ..CountingProvider::default() };

    let tz = TimeZone::get("Test/Staircase", &provider)?;
    let _ = TimeZone::get("Test/Staircase", &provider)?;
    assert_eq!(provider.lookups.load(Ordering::Relaxed), 2);
    assert_eq!(provider.ids(), vec!["Test/Staircase".to_string()]);
    assert_eq!(tz.region_id(), Some("Test/Staircase"));

    let local = dt("1970-01-02T00:30");
    let zdt = ZonedDateTime::of_local(local, tz.clone(), None)?;
    assert_eq!(zdt.to_string(), "1970-01-02T01:30+01:00[Test/Staircase]");
    let zdt = zdt.plus_days(5)?;
    assert_eq!(zdt.to_string(), "1970-01-07T01:30+02:00[Test/Staircase]");

    let parsed = ZonedDateTime::parse(
        "1970-01-07T01:30+02:00[Test/Staircase]",
        &provider,
    )?;
    assert_eq!(parsed, zdt);
    assert_eq!(provider.lookups.load(Ordering::Relaxed), 3);
    Ok(())
}
