/*!
Immutable calendar values, exact instant arithmetic and time zone offset
resolution.

This crate provides value types for the ISO-8601 calendar system, a generic
protocol for reading, adjusting and measuring them by *field* and *unit*,
and a resolver that maps local datetimes to instants through time zone
rules that the caller supplies.

# Overview

* [`Instant`] is a point on the UTC timeline, with nanosecond precision.
* [`civil::LocalDate`], [`civil::LocalTime`] and [`civil::LocalDateTime`]
  describe what a calendar and a wall clock show, without an offset.
  [`civil::YearMonth`] and [`civil::MonthDay`] are partial dates.
* [`OffsetDateTime`] is a local datetime with a fixed [`tz::ZoneOffset`].
* [`ZonedDateTime`] is a local datetime in a [`tz::TimeZone`], which keeps
  its offset consistent with the zone's rules as it is adjusted.
* [`Duration`] is an exact amount of time in seconds and nanoseconds.
  [`Period`] is a calendar amount in years, months and days.
* The [`field`] module has the open [`field::Field`] and [`field::Unit`]
  traits, the built-in [`field::ChronoField`] and [`field::ChronoUnit`],
  and the [`field::Temporal`] protocol that every value type implements.
* The [`tz`] module has the [`tz::ZoneRules`] trait, through which offset
  transitions are injected, and the gap and overlap resolution built on it.
* The [`calendar`] module has the proleptic Gregorian calendar as plain
  functions.
* The [`clock`] module has the [`clock::Clock`] trait that every `now`
  constructor reads from.

Every value type is immutable. Every operation that can fail returns a
[`Result`] with an [`Error`], which can be classified with predicates like
[`Error::is_range`] and [`Error::is_overflow`]. Nothing panics on bad input.

# Example

```
use epochal::{
    civil::LocalDateTime,
    field::{ChronoUnit, Temporal},
    tz::{TimeZone, TransitionRules, ZoneOffset, ZoneRegistry},
    ZonedDateTime,
};

// Central European rules for 2007.
let rules = TransitionRules::new(
    ZoneOffset::of_hours(1)?,
    [
        ("2007-03-25T01:00:00Z".parse()?, ZoneOffset::of_hours(2)?),
        ("2007-10-28T01:00:00Z".parse()?, ZoneOffset::of_hours(1)?),
    ],
)?;
let mut registry = ZoneRegistry::new();
registry.register("Europe/Paris", rules);
let tz = TimeZone::get("Europe/Paris", &registry)?;

// 02:30 does not exist on 2007-03-25, so it is shifted forward.
let dt: LocalDateTime = "2007-03-25T02:30".parse()?;
let zdt = ZonedDateTime::of_local(dt, tz, None)?;
assert_eq!(zdt.to_string(), "2007-03-25T03:30+02:00[Europe/Paris]");

// A day later is the same local time, but only 23 hours have passed.
let next = zdt.plus_days(1)?;
assert_eq!(next.to_string(), "2007-03-26T03:30+02:00[Europe/Paris]");
let midnight: LocalDateTime = "2007-03-25T00:00".parse()?;
let start = ZonedDateTime::of_local(midnight, next.zone().clone(), None)?;
let end = start.plus_days(1)?;
assert_eq!(start.until(&end, &ChronoUnit::Hours)?, 23);

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** (enabled by default) - Implements `std::error::Error` for
  [`Error`], provides [`clock::SystemClock`] and conversions to and from
  `std::time::SystemTime`.
* **alloc** - Required. Errors and time zones are heap allocated.
* **logging** - Emits messages through the `log` crate when resolving
  gaps and overlaps and when registering or looking up zones.
* **serde** - Implements `Serialize` and `Deserialize` for every value
  type, using its ISO-8601 text form.
*/

#![allow(warnings)]
#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
// This adds Cargo feature annotations to items in the rustdoc output.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("epochal currently not supported on non-{32,64}");

#[cfg(any(test, feature = "std"))]
extern crate std;

// Errors and time zones allocate, so there is no core-only mode.
extern crate alloc;

pub use crate::{
    duration::Duration, error::Error, instant::Instant,
    offset_datetime::OffsetDateTime, period::Period, zoned::ZonedDateTime,
};

#[macro_use]
mod logging;

pub mod calendar;
pub mod civil;
pub mod clock;
mod duration;
mod error;
pub mod field;
mod fmt;
mod instant;
mod offset_datetime;
mod period;
pub mod tz;
mod util;
mod zoned;
