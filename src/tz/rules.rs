use alloc::{vec, vec::Vec};

use crate::{
    civil::LocalDateTime,
    error::tz::Error as E,
    tz::ZoneOffset,
    Error, Instant,
};

/// The rules that determine the offset of a time zone over time.
///
/// This is the seam through which time zone data enters this crate. This
/// crate does not ship a time zone database. Instead, callers provide an
/// implementation of this trait (or use [`TransitionRules`]) and register
/// it with a [`ZoneRulesProvider`](crate::tz::ZoneRulesProvider).
///
/// Implementations must be consistent: the offsets reported for a local
/// datetime must be exactly the offsets whose instants map back to that
/// local datetime through [`ZoneRules::offset_for_instant`].
pub trait ZoneRules: core::fmt::Debug + Send + Sync {
    /// Returns the offset in effect at the instant given.
    ///
    /// There is always exactly one.
    fn offset_for_instant(&self, instant: Instant) -> ZoneOffset;

    /// Returns the offset or offsets that are valid for the local datetime
    /// given.
    fn offset_for_local(&self, dt: LocalDateTime) -> AmbiguousOffset;

    /// Returns every offset valid for the local datetime given.
    ///
    /// This is empty in a gap, has one element normally and two elements
    /// in an overlap. In an overlap, the offset that applied first on the
    /// timeline comes first.
    fn valid_offsets_for_local(&self, dt: LocalDateTime) -> Vec<ZoneOffset> {
        match self.offset_for_local(dt) {
            AmbiguousOffset::Unambiguous { offset } => vec![offset],
            AmbiguousOffset::Gap { .. } => vec![],
            AmbiguousOffset::Overlap { before, after } => vec![before, after],
        }
    }

    /// Returns true when `offset` is a valid offset for the local datetime
    /// given.
    fn is_valid_offset(&self, dt: LocalDateTime, offset: ZoneOffset) -> bool {
        self.valid_offsets_for_local(dt).contains(&offset)
    }

    /// Returns true when these rules never change offset.
    fn is_fixed_offset(&self) -> bool {
        false
    }
}

/// The offsets valid for a local datetime in a time zone.
///
/// Most local datetimes have exactly one valid offset. Local datetimes that
/// the clocks skip over when moving forward fall into a gap and have none.
/// Local datetimes that the clocks repeat when moving backward fall into an
/// overlap and have two.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AmbiguousOffset {
    /// The local datetime has a single valid offset.
    Unambiguous {
        /// The only valid offset.
        offset: ZoneOffset,
    },
    /// The local datetime was skipped. No offset is valid.
    Gap {
        /// The offset in effect before the gap.
        before: ZoneOffset,
        /// The offset in effect after the gap.
        after: ZoneOffset,
    },
    /// The local datetime was repeated. Both offsets are valid.
    Overlap {
        /// The offset in effect during the first occurrence.
        before: ZoneOffset,
        /// The offset in effect during the second occurrence.
        after: ZoneOffset,
    },
}

impl AmbiguousOffset {
    /// Returns true when the local datetime is in a gap or an overlap.
    pub fn is_ambiguous(&self) -> bool {
        !matches!(*self, AmbiguousOffset::Unambiguous { .. })
    }
}

/// A change of offset at a particular instant.
///
/// The local datetimes between the offset before and the offset after are
/// either skipped (a gap, when the offset increases) or repeated (an
/// overlap, when the offset decreases).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Transition {
    second: i64,
    before: ZoneOffset,
    after: ZoneOffset,
}

impl Transition {
    /// Returns the instant at which the offset changes.
    pub fn instant(&self) -> Instant {
        Instant::new_unchecked(self.second, 0)
    }

    /// Returns the offset in effect before this transition.
    pub fn offset_before(&self) -> ZoneOffset {
        self.before
    }

    /// Returns the offset in effect from this transition on.
    pub fn offset_after(&self) -> ZoneOffset {
        self.after
    }

    /// Returns true when clocks move forward, skipping local time.
    pub fn is_gap(&self) -> bool {
        self.after > self.before
    }

    /// Returns true when clocks move backward, repeating local time.
    pub fn is_overlap(&self) -> bool {
        self.after < self.before
    }

    /// Returns the number of seconds that clocks move by. This is negative
    /// for an overlap.
    pub fn seconds(&self) -> i64 {
        self.before.seconds_until(self.after)
    }

    /// The first local second, counted as seconds since the Unix epoch in
    /// local time, at which this transition makes local time ambiguous.
    fn local_start(&self) -> i64 {
        self.second + i64::from(self.before.total_seconds().min(
            self.after.total_seconds(),
        ))
    }

    /// One past the last ambiguous local second.
    fn local_end(&self) -> i64 {
        self.second + i64::from(self.before.total_seconds().max(
            self.after.total_seconds(),
        ))
    }
}

/// Zone rules defined by an initial offset and a list of transitions.
///
/// This is the simplest realistic implementation of [`ZoneRules`]. The
/// transitions are validated on construction: they must be in strictly
/// increasing order, each must change the offset, and the local time
/// windows that they make ambiguous must not overlap one another. The last
/// rule ensures that every local datetime has at most two valid offsets.
///
/// # Example
///
/// ```
/// use epochal::{
///     civil::LocalDateTime,
///     tz::{AmbiguousOffset, TransitionRules, ZoneOffset, ZoneRules},
///     Instant,
/// };
///
/// let winter = ZoneOffset::of_hours(1)?;
/// let summer = ZoneOffset::of_hours(2)?;
/// let rules = TransitionRules::new(winter, [
///     ("2024-03-31T01:00:00Z".parse::<Instant>()?, summer),
///     ("2024-10-27T01:00:00Z".parse::<Instant>()?, winter),
/// ])?;
///
/// let dt: LocalDateTime = "2024-03-31T02:30".parse()?;
/// assert_eq!(
///     rules.offset_for_local(dt),
///     AmbiguousOffset::Gap { before: winter, after: summer },
/// );
/// let dt: LocalDateTime = "2024-10-27T02:30".parse()?;
/// assert_eq!(rules.valid_offsets_for_local(dt), vec![summer, winter]);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransitionRules {
    initial: ZoneOffset,
    transitions: Vec<Transition>,
}

impl TransitionRules {
    /// Creates rules from the offset in effect before any transition and a
    /// list of `(instant, new offset)` pairs.
    ///
    /// # Errors
    ///
    /// This returns an error when the transitions are not in strictly
    /// increasing order, when a transition does not change the offset, or
    /// when the ambiguous local time windows of two transitions overlap.
    pub fn new(
        initial: ZoneOffset,
        transitions: impl IntoIterator<Item = (Instant, ZoneOffset)>,
    ) -> Result<TransitionRules, Error> {
        let mut list: Vec<Transition> = vec![];
        let mut before = initial;
        for (index, (instant, after)) in transitions.into_iter().enumerate() {
            if after == before {
                return Err(Error::from(E::TransitionWithoutChange { index }));
            }
            // Sub-second transitions are not a thing. Truncate.
            let transition =
                Transition { second: instant.epoch_second(), before, after };
            if let Some(prev) = list.last() {
                if transition.second <= prev.second {
                    return Err(Error::from(E::TransitionOutOfOrder { index }));
                }
                if transition.local_start() < prev.local_end() {
                    return Err(Error::from(E::TransitionWindowsOverlap {
                        index,
                    }));
                }
            }
            list.push(transition);
            before = after;
        }
        Ok(TransitionRules { initial, transitions: list })
    }

    /// Returns the offset in effect before the first transition.
    pub fn initial_offset(&self) -> ZoneOffset {
        self.initial
    }

    /// Returns every transition, in order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Returns the first transition strictly after the instant given.
    pub fn next_transition(&self, instant: Instant) -> Option<&Transition> {
        let index = self.transitions_at_or_before(instant);
        self.transitions.get(index)
    }

    /// Returns the last transition at or before the instant given.
    pub fn previous_transition(
        &self,
        instant: Instant,
    ) -> Option<&Transition> {
        let index = self.transitions_at_or_before(instant);
        index.checked_sub(1).and_then(|i| self.transitions.get(i))
    }

    /// Returns the number of transitions at or before the instant given.
    fn transitions_at_or_before(&self, instant: Instant) -> usize {
        let second = instant.epoch_second();
        self.transitions.partition_point(|t| t.second <= second)
    }
}

impl ZoneRules for TransitionRules {
    fn offset_for_instant(&self, instant: Instant) -> ZoneOffset {
        match self.previous_transition(instant) {
            None => self.initial,
            Some(t) => t.after,
        }
    }

    fn offset_for_local(&self, dt: LocalDateTime) -> AmbiguousOffset {
        let local = dt.to_epoch_second(ZoneOffset::UTC);
        // Windows are sorted and disjoint, so their ends are sorted too.
        let index =
            self.transitions.partition_point(|t| t.local_end() <= local);
        let Some(t) = self.transitions.get(index) else {
            let offset =
                self.transitions.last().map_or(self.initial, |t| t.after);
            return AmbiguousOffset::Unambiguous { offset };
        };
        if local < t.local_start() {
            AmbiguousOffset::Unambiguous { offset: t.before }
        } else if t.is_gap() {
            AmbiguousOffset::Gap { before: t.before, after: t.after }
        } else {
            AmbiguousOffset::Overlap { before: t.before, after: t.after }
        }
    }

    fn is_fixed_offset(&self) -> bool {
        self.transitions.is_empty()
    }
}
