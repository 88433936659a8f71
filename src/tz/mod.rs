/*!
Offsets, time zones and the resolution of local datetimes within them.

This module has three layers:

* [`ZoneOffset`] is a fixed amount of time ahead of or behind UTC.
* [`ZoneRules`] map instants to offsets and local datetimes to the offsets
that are valid for them. [`TransitionRules`] is a ready made implementation
built from a list of offset changes. Rules are looked up by identifier
through a [`ZoneRulesProvider`], such as a [`ZoneRegistry`].
* [`TimeZone`] pairs an identifier with rules. It is what
[`ZonedDateTime`](crate::ZonedDateTime) carries around.

This crate does not bundle a time zone database. All region rules are
injected by the caller.

# Gaps and overlaps

When clocks move forward, some local datetimes never happen. When clocks
move back, some local datetimes happen twice. These are reported as
[`AmbiguousOffset::Gap`] and [`AmbiguousOffset::Overlap`]. When building a
zoned datetime from a local one, a [`Disambiguation`] strategy decides what
happens. When an existing zoned datetime is adjusted, the previous offset is
kept whenever it is still valid.

# Example

```
use epochal::{
    civil::LocalDateTime,
    tz::{Disambiguation, TimeZone, TransitionRules, ZoneOffset, ZoneRegistry},
    Instant, ZonedDateTime,
};

let mut registry = ZoneRegistry::new();
registry.register("Europe/Paris", TransitionRules::new(
    ZoneOffset::of_hours(1)?,
    [("2007-03-25T01:00:00Z".parse::<Instant>()?, ZoneOffset::of_hours(2)?)],
)?);
let tz = TimeZone::get("Europe/Paris", &registry)?;

let dt: LocalDateTime = "2007-03-25T02:30".parse()?;
let compatible = Disambiguation::Compatible;
let zdt = ZonedDateTime::of_local_with(dt, tz.clone(), compatible)?;
assert_eq!(zdt.to_string(), "2007-03-25T03:30+02:00[Europe/Paris]");
assert!(ZonedDateTime::of_local_with(dt, tz, Disambiguation::Reject)
    .unwrap_err()
    .is_ambiguous());

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

pub use self::{
    offset::ZoneOffset,
    provider::{ZoneRegistry, ZoneRulesProvider},
    resolve::Disambiguation,
    rules::{AmbiguousOffset, Transition, TransitionRules, ZoneRules},
    timezone::TimeZone,
};

pub(crate) use self::resolve::{gap_end, resolve_similar_local, resolve_with};

mod offset;
mod provider;
mod resolve;
mod rules;
#[cfg(test)]
pub(crate) mod testdata;
mod timezone;
