use crate::{
    tz::{TimeZone, TransitionRules, ZoneOffset, ZoneRegistry},
    Instant,
};

fn offset(hours: i8) -> ZoneOffset {
    ZoneOffset::of_hours(hours).unwrap()
}

fn instant(s: &str) -> Instant {
    s.parse().unwrap()
}

/// Central European rules for 2007, whose gap is local
/// `2007-03-25T02:00..03:00` and whose overlap is local
/// `2007-10-28T02:00..03:00`.
pub(crate) fn paris_2007() -> TransitionRules {
    TransitionRules::new(
        offset(1),
        [
            (instant("2007-03-25T01:00:00Z"), offset(2)),
            (instant("2007-10-28T01:00:00Z"), offset(1)),
        ],
    )
    .unwrap()
}

/// Rules with a gap at local `2007-04-01T00:00..01:00`, where clocks
/// move from `-04:00` to `-03:00` at midnight.
pub(crate) fn midnight_gap_2007() -> TransitionRules {
    TransitionRules::new(
        offset(-4),
        [(instant("2007-04-01T04:00:00Z"), offset(-3))],
    )
    .unwrap()
}

/// A registry with the zones above.
pub(crate) fn registry() -> ZoneRegistry {
    let mut registry = ZoneRegistry::new();
    registry.register("Europe/Paris", paris_2007());
    registry.register("America/Midnight", midnight_gap_2007());
    registry
}

/// Looks up a zone from [`registry`].
pub(crate) fn zone(id: &str) -> TimeZone {
    TimeZone::get(id, &registry()).unwrap()
}
