/*!
Resolution of local datetimes to offsets in a time zone.

A local datetime has zero, one or two valid offsets in a time zone. These
routines pick one. There are two flavors:

* "Similar local" resolution keeps the wall clock time as close as possible
to the one requested. It is used whenever an existing zoned value is moved
to a new local datetime, and it prefers the offset that the value had
before when that offset is still valid.
* Resolution with a [`Disambiguation`] is used when a zoned value is built
from scratch and the caller wants to control what happens in gaps and
overlaps, including rejecting them.
*/

use crate::{
    civil::LocalDateTime,
    error::tz::Error as E,
    tz::{AmbiguousOffset, TimeZone, ZoneOffset},
    Error, Instant,
};

/// How to pick an offset for a local datetime that falls into a gap or an
/// overlap of its time zone.
///
/// Take a zone whose clocks move from `+01:00` to `+02:00` at local
/// `02:00` (a gap), and back from `+02:00` to `+01:00` at local `03:00`
/// (an overlap):
///
/// | Strategy     | `02:30` in the gap | `02:30` in the overlap |
/// | ------------ | ------------------ | ---------------------- |
/// | `Compatible` | `03:30+02:00`      | `02:30+02:00`          |
/// | `Earlier`    | `01:30+01:00`      | `02:30+02:00`          |
/// | `Later`      | `03:30+02:00`      | `02:30+01:00`          |
/// | `Reject`     | error              | error                  |
///
/// Local datetimes with a single valid offset are resolved to it by every
/// strategy.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Disambiguation {
    /// Shifts forward by the length of a gap, and picks the earlier offset
    /// of an overlap.
    #[default]
    Compatible,
    /// Picks the earlier instant in both gaps and overlaps.
    Earlier,
    /// Picks the later instant in both gaps and overlaps.
    Later,
    /// Returns an error in both gaps and overlaps.
    Reject,
}

/// Resolves a local datetime while keeping its wall clock time as close to
/// the one given as possible.
///
/// In an overlap, `preferred` is kept when it is one of the two valid
/// offsets. Otherwise the offset in effect before the transition wins. In a
/// gap, the local datetime is moved forward by the length of the gap and
/// paired with the offset after it.
///
/// # Errors
///
/// This returns a range error when moving a local datetime forward across
/// a gap pushes it out of range.
pub(crate) fn resolve_similar_local(
    dt: LocalDateTime,
    zone: &TimeZone,
    preferred: Option<ZoneOffset>,
) -> Result<(LocalDateTime, ZoneOffset), Error> {
    match zone.offset_for_local(dt) {
        AmbiguousOffset::Unambiguous { offset } => Ok((dt, offset)),
        AmbiguousOffset::Overlap { before, after } => {
            let offset = match preferred {
                Some(p) if p == before || p == after => p,
                _ => before,
            };
            trace!(
                "resolved {dt} in overlap between {before} and {after} \
                 in {zone} to offset {offset} (preferred {preferred:?})",
            );
            Ok((dt, offset))
        }
        AmbiguousOffset::Gap { before, after } => {
            let shifted = zone.in_zone(
                dt.plus_seconds(before.seconds_until(after)),
            )?;
            trace!(
                "resolved {dt} in gap between {before} and {after} \
                 in {zone} to {shifted}{after}",
            );
            Ok((shifted, after))
        }
    }
}

/// Resolves a local datetime according to the strategy given.
///
/// # Errors
///
/// This returns an ambiguity error when the strategy is
/// [`Disambiguation::Reject`] and the local datetime is in a gap or an
/// overlap. It returns a range error when shifting a local datetime across
/// a gap pushes it out of range.
pub(crate) fn resolve_with(
    dt: LocalDateTime,
    zone: &TimeZone,
    disambiguation: Disambiguation,
) -> Result<(LocalDateTime, ZoneOffset), Error> {
    let ambiguous = zone.offset_for_local(dt);
    match (ambiguous, disambiguation) {
        (AmbiguousOffset::Unambiguous { offset }, _) => Ok((dt, offset)),
        (AmbiguousOffset::Gap { before, after }, Disambiguation::Reject) => {
            debug!("rejecting {dt} since it falls into a gap in {zone}");
            zone.in_zone(Err(Error::from(E::AmbiguousGap { before, after })))
        }
        (
            AmbiguousOffset::Overlap { before, after },
            Disambiguation::Reject,
        ) => {
            debug!("rejecting {dt} since it falls into an overlap in {zone}");
            zone.in_zone(Err(Error::from(E::AmbiguousOverlap {
                before,
                after,
            })))
        }
        (AmbiguousOffset::Gap { before, after }, Disambiguation::Earlier) => {
            // Interpreting `dt` with the offset after the gap gives an
            // instant before the transition.
            let shifted = zone.in_zone(
                dt.minus_seconds(before.seconds_until(after)),
            )?;
            trace!(
                "resolved {dt} in gap in {zone} to earlier {shifted}{before}",
            );
            Ok((shifted, before))
        }
        (AmbiguousOffset::Gap { .. }, _) => {
            resolve_similar_local(dt, zone, None)
        }
        (AmbiguousOffset::Overlap { after, .. }, Disambiguation::Later) => {
            Ok((dt, after))
        }
        (AmbiguousOffset::Overlap { .. }, _) => {
            resolve_similar_local(dt, zone, None)
        }
    }
}

/// Returns the first local datetime after the gap that `dt` falls into.
///
/// The transition instant is found by bisecting the instants between the
/// two readings of `dt`. Reading `dt` with the offset after the gap gives an
/// instant before the transition, and reading it with the offset before the
/// gap gives one at or after it.
///
/// # Errors
///
/// This returns a range error when the end of the gap is out of range.
pub(crate) fn gap_end(
    dt: LocalDateTime,
    zone: &TimeZone,
    before: ZoneOffset,
    after: ZoneOffset,
) -> Result<LocalDateTime, Error> {
    let mut lo = dt.to_epoch_second(after);
    let mut hi = dt.to_epoch_second(before);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if zone.offset_for_instant(Instant::of_epoch_second(mid)?) == after {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    let end = zone.in_zone(LocalDateTime::of_epoch_second(hi, 0, after))?;
    trace!("gap containing {dt} in {zone} ends at {end}{after}");
    Ok(end)
}
