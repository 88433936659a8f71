use alloc::{vec, vec::Vec};

use crate::{
    civil::LocalDateTime,
    error::tz::Error as E,
    field::{self, ChronoField, Field, TemporalAccessor, ValueRange},
    fmt::{parser, printer},
    tz::{AmbiguousOffset, ZoneRules},
    util::{
        arith::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE},
        b,
    },
    Error, Instant,
};

/// A fixed offset from UTC, such as `+02:00` or `-05:30`.
///
/// An offset is a whole number of seconds in the range
/// `-18:00:00..=+18:00:00`. Positive offsets are east of Greenwich, so the
/// local time is ahead of UTC.
///
/// An offset is also a [`ZoneRules`] whose offset never changes. That is how
/// [`TimeZone::fixed`](crate::tz::TimeZone::fixed) works.
///
/// # Text format
///
/// The UTC offset prints as `Z`. Other offsets print as `±HH:MM`, with
/// `:SS` appended when the seconds are not zero.
///
/// # Example
///
/// ```
/// use epochal::tz::ZoneOffset;
///
/// let offset = ZoneOffset::of_hours_minutes_seconds(-5, -30, 0)?;
/// assert_eq!(offset.total_seconds(), -19_800);
/// assert_eq!(offset.to_string(), "-05:30");
/// assert_eq!("-05:30".parse::<ZoneOffset>()?, offset);
/// assert_eq!(ZoneOffset::UTC.to_string(), "Z");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct ZoneOffset {
    seconds: i32,
}

impl ZoneOffset {
    /// The offset of UTC, which is zero.
    pub const UTC: ZoneOffset = ZoneOffset { seconds: 0 };

    /// The smallest offset, `-18:00`.
    pub const MIN: ZoneOffset =
        ZoneOffset { seconds: b::OffsetTotalSeconds::MIN };

    /// The largest offset, `+18:00`.
    pub const MAX: ZoneOffset =
        ZoneOffset { seconds: b::OffsetTotalSeconds::MAX };

    /// Creates an offset from a whole number of hours.
    ///
    /// # Errors
    ///
    /// This returns a range error when the hours are outside `-18..=18`.
    pub fn of_hours(hours: i8) -> Result<ZoneOffset, Error> {
        ZoneOffset::of_hours_minutes_seconds(hours, 0, 0)
    }

    /// Creates an offset from hours and minutes.
    ///
    /// # Errors
    ///
    /// See [`ZoneOffset::of_hours_minutes_seconds`].
    pub fn of_hours_minutes(
        hours: i8,
        minutes: i8,
    ) -> Result<ZoneOffset, Error> {
        ZoneOffset::of_hours_minutes_seconds(hours, minutes, 0)
    }

    /// Creates an offset from hours, minutes and seconds.
    ///
    /// Every non-zero component must have the same sign. So `-05:30` is
    /// written as `(-5, -30, 0)`.
    ///
    /// # Errors
    ///
    /// This returns a range error when a component is out of range, when
    /// the signs of the components disagree, or when the total is outside
    /// `-18:00..=+18:00`.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::tz::ZoneOffset;
    ///
    /// let err = ZoneOffset::of_hours_minutes_seconds(5, -30, 0).unwrap_err();
    /// assert!(err.is_range());
    /// assert!(ZoneOffset::of_hours_minutes_seconds(18, 0, 1).is_err());
    /// assert_eq!(
    ///     ZoneOffset::of_hours_minutes_seconds(0, 0, -1)?.to_string(),
    ///     "-00:00:01",
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of_hours_minutes_seconds(
        hours: i8,
        minutes: i8,
        seconds: i8,
    ) -> Result<ZoneOffset, Error> {
        let hours = b::OffsetHours::check(hours)?;
        let minutes = b::OffsetMinutes::check(minutes)?;
        let seconds = b::OffsetSeconds::check(seconds)?;
        let signs = [hours.signum(), minutes.signum(), seconds.signum()];
        if signs.contains(&1) && signs.contains(&-1) {
            return Err(Error::from(E::MixedOffsetSigns {
                hours,
                minutes,
                seconds,
            }));
        }
        let total = i32::from(hours) * SECONDS_PER_HOUR as i32
            + i32::from(minutes) * SECONDS_PER_MINUTE as i32
            + i32::from(seconds);
        ZoneOffset::of_total_seconds(total)
    }

    /// Creates an offset from a total number of seconds.
    ///
    /// # Errors
    ///
    /// This returns a range error when the total is outside
    /// `-64_800..=64_800`.
    pub fn of_total_seconds(seconds: i32) -> Result<ZoneOffset, Error> {
        let seconds = b::OffsetTotalSeconds::check(seconds)?;
        Ok(ZoneOffset { seconds })
    }

    /// Returns the total number of seconds of this offset.
    #[inline]
    pub const fn total_seconds(self) -> i32 {
        self.seconds
    }

    /// Returns the hours component, which has the sign of the offset.
    #[inline]
    pub const fn hours(self) -> i8 {
        (self.seconds / SECONDS_PER_HOUR as i32) as i8
    }

    /// Returns the minutes component, which has the sign of the offset.
    #[inline]
    pub const fn minutes(self) -> i8 {
        ((self.seconds / SECONDS_PER_MINUTE as i32) % 60) as i8
    }

    /// Returns the seconds component, which has the sign of the offset.
    #[inline]
    pub const fn seconds(self) -> i8 {
        (self.seconds % SECONDS_PER_MINUTE as i32) as i8
    }

    /// Returns true when this offset is west of Greenwich.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.seconds < 0
    }

    /// Returns the number of seconds from `self` to `other`.
    ///
    /// For a gap whose offset goes from `+01:00` to `+02:00`, this is
    /// `3600`.
    #[inline]
    pub(crate) const fn seconds_until(self, other: ZoneOffset) -> i64 {
        other.seconds as i64 - self.seconds as i64
    }
}

impl ZoneRules for ZoneOffset {
    fn offset_for_instant(&self, _: Instant) -> ZoneOffset {
        *self
    }

    fn offset_for_local(&self, _: LocalDateTime) -> AmbiguousOffset {
        AmbiguousOffset::Unambiguous { offset: *self }
    }

    fn valid_offsets_for_local(&self, _: LocalDateTime) -> Vec<ZoneOffset> {
        vec![*self]
    }

    fn is_fixed_offset(&self) -> bool {
        true
    }
}

impl TemporalAccessor for ZoneOffset {
    fn is_supported(&self, field: &dyn Field) -> bool {
        match field.as_chrono_field() {
            Some(f) => f == ChronoField::OffsetSeconds,
            None => field.is_supported_by(self),
        }
    }

    fn range(&self, field: &dyn Field) -> Result<ValueRange, Error> {
        field::range_of(self, field, |f| {
            (f == ChronoField::OffsetSeconds).then(|| f.range())
        })
    }

    fn get_long(&self, field: &dyn Field) -> Result<i64, Error> {
        match field.as_chrono_field() {
            Some(ChronoField::OffsetSeconds) => Ok(i64::from(self.seconds)),
            Some(f) => Err(field::unsupported_field(f)),
            None => field.get_from(self),
        }
    }

    fn query_offset(&self) -> Option<ZoneOffset> {
        Some(*self)
    }
}

impl core::fmt::Debug for ZoneOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        printer::write_offset(f, self.seconds)
    }
}

impl core::str::FromStr for ZoneOffset {
    type Err = Error;

    fn from_str(s: &str) -> Result<ZoneOffset, Error> {
        parser::parse_offset(s)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for ZoneOffset {
    fn arbitrary(g: &mut quickcheck::Gen) -> ZoneOffset {
        // Most real offsets are whole quarter hours.
        let seconds = if bool::arbitrary(g) {
            (i32::arbitrary(g) % 73) * 900
        } else {
            i32::arbitrary(g) % (b::OffsetTotalSeconds::MAX + 1)
        };
        ZoneOffset { seconds }
    }
}
