use crate::{
    clock::Clock,
    error::{civil::Error as E, ErrorContext},
    field::{
        self, ChronoField, ChronoUnit, Field, Temporal, TemporalAccessor,
        TemporalValue, Unit, ValueRange,
    },
    fmt::{parser, printer},
    tz::{TimeZone, ZoneOffset},
    util::{
        arith::{
            self, floor_div, floor_mod, NANOS_PER_DAY, NANOS_PER_MICRO,
            NANOS_PER_MILLI, NANOS_PER_SECOND, SECONDS_PER_DAY,
            SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
        },
        b,
    },
    Duration, Error, OffsetDateTime, ZonedDateTime,
};

/// An instantaneous point on the timeline, with nanosecond precision.
///
/// An instant is a number of seconds since the Unix epoch
/// (`1970-01-01T00:00:00Z`) and a nanosecond-of-second in the range
/// `0..=999_999_999`. An instant before the epoch has negative seconds and a
/// positive nanosecond-of-second.
///
/// Instants are ordered by their position on the timeline. The supported
/// range is from `-1000000000-01-01T00:00:00Z` to
/// `+1000000000-12-31T23:59:59.999999999Z`. This is slightly bigger than the
/// range of a [`LocalDateTime`](crate::civil::LocalDateTime), so that any
/// local datetime paired with any offset maps to an instant.
///
/// Leap seconds are not modeled. Every day is exactly 86,400 seconds long.
///
/// # Text format
///
/// Instants print in UTC with a trailing `Z`, like
/// `2024-03-10T07:00:00.5Z`. Seconds are always printed.
///
/// # Example
///
/// ```
/// use epochal::Instant;
///
/// let instant = Instant::of_epoch_milli(1_700_000_000_123)?;
/// assert_eq!(instant.to_string(), "2023-11-14T22:13:20.123Z");
/// assert_eq!("2023-11-14T22:13:20.123Z".parse::<Instant>()?, instant);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Instant {
    second: i64,
    nano: i32,
}

impl Instant {
    /// The smallest number of seconds since the Unix epoch supported by an
    /// instant. This corresponds to `-1000000000-01-01T00:00:00Z`.
    pub const MIN_SECOND: i64 = b::InstantSecond::MIN;

    /// The largest number of seconds since the Unix epoch supported by an
    /// instant. This corresponds to `+1000000000-12-31T23:59:59Z`.
    pub const MAX_SECOND: i64 = b::InstantSecond::MAX;

    /// The Unix epoch, `1970-01-01T00:00:00Z`.
    pub const EPOCH: Instant = Instant { second: 0, nano: 0 };

    /// The minimum supported instant.
    pub const MIN: Instant = Instant { second: Instant::MIN_SECOND, nano: 0 };

    /// The maximum supported instant.
    pub const MAX: Instant =
        Instant { second: Instant::MAX_SECOND, nano: 999_999_999 };

    /// Creates an instant from a number of seconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// This returns a range error when the seconds are outside of
    /// [`Instant::MIN_SECOND`] and [`Instant::MAX_SECOND`].
    pub fn of_epoch_second(second: i64) -> Result<Instant, Error> {
        let second = b::InstantSecond::check(second)?;
        Ok(Instant { second, nano: 0 })
    }

    /// Creates an instant from a number of seconds since the Unix epoch and
    /// a nanosecond adjustment.
    ///
    /// The adjustment may be negative or bigger than a second. It is
    /// normalized into the seconds using floor division.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when normalizing the adjustment
    /// overflows an `i64`, and a range error when the normalized seconds are
    /// outside of the supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::Instant;
    ///
    /// let instant = Instant::of_epoch_second_adjusted(0, -1)?;
    /// assert_eq!(instant.epoch_second(), -1);
    /// assert_eq!(instant.nano(), 999_999_999);
    /// assert_eq!(instant.to_string(), "1969-12-31T23:59:59.999999999Z");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of_epoch_second_adjusted(
        second: i64,
        nano_adjustment: i64,
    ) -> Result<Instant, Error> {
        let second = arith::add(
            second,
            floor_div(nano_adjustment, NANOS_PER_SECOND),
            "epoch seconds",
        )?;
        let second = b::InstantSecond::check(second)?;
        let nano = floor_mod(nano_adjustment, NANOS_PER_SECOND) as i32;
        Ok(Instant { second, nano })
    }

    /// Creates an instant from a number of milliseconds since the Unix
    /// epoch.
    ///
    /// # Errors
    ///
    /// This never fails for a valid `i64` since every millisecond count
    /// fits in the supported range. It returns a `Result` for symmetry with
    /// the other constructors.
    pub fn of_epoch_milli(millis: i64) -> Result<Instant, Error> {
        let second = floor_div(millis, 1_000);
        let nano = (floor_mod(millis, 1_000) * NANOS_PER_MILLI) as i32;
        let second = b::InstantSecond::check(second)?;
        Ok(Instant { second, nano })
    }

    /// Returns the current instant according to the clock given.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::{clock::FixedClock, tz::TimeZone, Instant};
    ///
    /// let instant = Instant::of_epoch_second(1_000)?;
    /// let clock = FixedClock::new(instant, TimeZone::UTC);
    /// assert_eq!(Instant::now(&clock), instant);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn now(clock: &dyn Clock) -> Instant {
        clock.instant()
    }

    pub(crate) const fn new_unchecked(second: i64, nano: i32) -> Instant {
        Instant { second, nano }
    }

    /// Returns the number of seconds since the Unix epoch.
    #[inline]
    pub const fn epoch_second(self) -> i64 {
        self.second
    }

    /// Returns the nanosecond-of-second, in the range `0..=999_999_999`.
    #[inline]
    pub const fn nano(self) -> i32 {
        self.nano
    }

    /// Returns the number of milliseconds since the Unix epoch.
    ///
    /// Any precision finer than a millisecond is truncated toward the past.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the number of milliseconds does
    /// not fit into an `i64`.
    pub fn to_epoch_milli(self) -> Result<i64, Error> {
        // Near `i64::MIN` milliseconds, the seconds alone may overflow when
        // the sub-second part brings the total back in range.
        let (second, millis) = if self.second < 0 && self.nano > 0 {
            (self.second + 1, i64::from(self.nano) / NANOS_PER_MILLI - 1_000)
        } else {
            (self.second, i64::from(self.nano) / NANOS_PER_MILLI)
        };
        let total = arith::mul(second, 1_000, "epoch milliseconds")?;
        arith::add(total, millis, "epoch milliseconds")
    }

    /// Returns a copy of this instant with a number of seconds added.
    ///
    /// # Errors
    ///
    /// This returns an overflow or range error when the result is not a
    /// supported instant.
    pub fn plus_seconds(self, seconds: i64) -> Result<Instant, Error> {
        self.plus_parts(seconds, 0)
    }

    /// Returns a copy of this instant with a number of milliseconds added.
    ///
    /// # Errors
    ///
    /// This returns an overflow or range error when the result is not a
    /// supported instant.
    pub fn plus_millis(self, millis: i64) -> Result<Instant, Error> {
        self.plus_parts(millis / 1_000, (millis % 1_000) * NANOS_PER_MILLI)
    }

    /// Returns a copy of this instant with a number of nanoseconds added.
    ///
    /// # Errors
    ///
    /// This returns an overflow or range error when the result is not a
    /// supported instant.
    pub fn plus_nanos(self, nanos: i64) -> Result<Instant, Error> {
        self.plus_parts(0, nanos)
    }

    /// Returns a copy of this instant with a number of seconds subtracted.
    ///
    /// # Errors
    ///
    /// This returns an overflow or range error when the result is not a
    /// supported instant.
    pub fn minus_seconds(self, seconds: i64) -> Result<Instant, Error> {
        self.minus_duration(Duration::of_seconds(seconds))
    }

    /// Returns a copy of this instant with a number of milliseconds
    /// subtracted.
    ///
    /// # Errors
    ///
    /// This returns an overflow or range error when the result is not a
    /// supported instant.
    pub fn minus_millis(self, millis: i64) -> Result<Instant, Error> {
        self.minus_duration(Duration::of_millis(millis))
    }

    /// Returns a copy of this instant with a number of nanoseconds
    /// subtracted.
    ///
    /// # Errors
    ///
    /// This returns an overflow or range error when the result is not a
    /// supported instant.
    pub fn minus_nanos(self, nanos: i64) -> Result<Instant, Error> {
        self.minus_duration(Duration::of_nanos(nanos))
    }

    /// Returns a copy of this instant with the duration given added.
    ///
    /// # Errors
    ///
    /// This returns an overflow or range error when the result is not a
    /// supported instant.
    pub fn plus_duration(self, duration: Duration) -> Result<Instant, Error> {
        self.plus_parts(duration.seconds(), i64::from(duration.nano()))
    }

    /// Returns a copy of this instant with the duration given subtracted.
    ///
    /// # Errors
    ///
    /// This returns an overflow or range error when the result is not a
    /// supported instant.
    pub fn minus_duration(self, duration: Duration) -> Result<Instant, Error> {
        // Any duration whose seconds can't be negated is far outside the
        // range of instants anyway.
        let seconds = arith::neg(duration.seconds(), "epoch seconds")?;
        self.plus_parts(seconds, -i64::from(duration.nano()))
    }

    /// Returns a copy of this instant truncated to the unit given.
    ///
    /// Truncation always moves toward the past, so an instant before the
    /// epoch is truncated away from zero.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit is longer than a day, or when it
    /// does not evenly divide a day.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::{field::ChronoUnit, Instant};
    ///
    /// let instant: Instant = "2024-03-10T07:41:23.5Z".parse()?;
    /// assert_eq!(
    ///     instant.truncated_to(&ChronoUnit::Hours)?.to_string(),
    ///     "2024-03-10T07:00:00Z",
    /// );
    /// assert!(instant.truncated_to(&ChronoUnit::Weeks).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn truncated_to(self, unit: &dyn Unit) -> Result<Instant, Error> {
        if unit.as_chrono_unit() == Some(ChronoUnit::Nanos) {
            return Ok(self);
        }
        let unit_nanos = truncation_nanos(unit)?;
        let nano_of_day = floor_mod(self.second, SECONDS_PER_DAY)
            * NANOS_PER_SECOND
            + i64::from(self.nano);
        let truncated = floor_div(nano_of_day, unit_nanos) * unit_nanos;
        self.plus_nanos(truncated - nano_of_day)
    }

    /// Combines this instant with an offset to create an offset datetime.
    ///
    /// # Errors
    ///
    /// This returns a range error when the local datetime at the offset
    /// is outside of the supported range of local datetimes. This can only
    /// happen at the very edges of the supported range of instants.
    pub fn at_offset(
        self,
        offset: ZoneOffset,
    ) -> Result<OffsetDateTime, Error> {
        OffsetDateTime::of_instant(self, offset)
    }

    /// Combines this instant with a time zone to create a zoned datetime.
    ///
    /// # Errors
    ///
    /// This returns a range error when the local datetime in the time zone
    /// is outside of the supported range of local datetimes.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::{tz::{TimeZone, ZoneOffset}, Instant};
    ///
    /// let tz = TimeZone::fixed(ZoneOffset::of_hours(2)?);
    /// let zdt = Instant::EPOCH.at_zone(&tz)?;
    /// assert_eq!(zdt.to_string(), "1970-01-01T02:00+02:00");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn at_zone(self, zone: &TimeZone) -> Result<ZonedDateTime, Error> {
        ZonedDateTime::of_instant(self, zone.clone())
    }

    fn plus_parts(self, seconds: i64, nanos: i64) -> Result<Instant, Error> {
        if seconds == 0 && nanos == 0 {
            return Ok(self);
        }
        let second = arith::add(self.second, seconds, "epoch seconds")?;
        let second =
            arith::add(second, nanos / NANOS_PER_SECOND, "epoch seconds")?;
        let nano = i64::from(self.nano) + nanos % NANOS_PER_SECOND;
        Instant::of_epoch_second_adjusted(second, nano)
    }

    fn nanos_until(self, end: Instant) -> Result<i64, Error> {
        let seconds = arith::sub(end.second, self.second, "nanoseconds")?;
        let nanos = arith::mul(seconds, NANOS_PER_SECOND, "nanoseconds")?;
        arith::add(
            nanos,
            i64::from(end.nano) - i64::from(self.nano),
            "nanoseconds",
        )
    }

    fn seconds_until(self, end: Instant) -> Result<i64, Error> {
        let mut seconds = arith::sub(end.second, self.second, "seconds")?;
        let nanos = end.nano - self.nano;
        if seconds > 0 && nanos < 0 {
            seconds -= 1;
        } else if seconds < 0 && nanos > 0 {
            seconds += 1;
        }
        Ok(seconds)
    }

    fn get_builtin(&self, field: ChronoField) -> Result<i64, Error> {
        match field {
            ChronoField::NanoOfSecond => Ok(i64::from(self.nano)),
            ChronoField::MicroOfSecond => {
                Ok(i64::from(self.nano) / NANOS_PER_MICRO)
            }
            ChronoField::MilliOfSecond => {
                Ok(i64::from(self.nano) / NANOS_PER_MILLI)
            }
            ChronoField::InstantSeconds => Ok(self.second),
            _ => Err(field::unsupported_field(field)),
        }
    }

    fn with_builtin(
        &self,
        field: ChronoField,
        value: i64,
    ) -> Result<Instant, Error> {
        let value = field.check_valid_value(value)?;
        match field {
            ChronoField::NanoOfSecond => Ok(Instant {
                second: self.second,
                nano: value as i32,
            }),
            ChronoField::MicroOfSecond => Ok(Instant {
                second: self.second,
                nano: (value * NANOS_PER_MICRO) as i32,
            }),
            ChronoField::MilliOfSecond => Ok(Instant {
                second: self.second,
                nano: (value * NANOS_PER_MILLI) as i32,
            }),
            ChronoField::InstantSeconds => {
                let second = b::InstantSecond::check(value)?;
                Ok(Instant { second, nano: self.nano })
            }
            _ => Err(field::unsupported_field(field)),
        }
    }

    fn plus_builtin(
        &self,
        amount: i64,
        unit: ChronoUnit,
    ) -> Result<Instant, Error> {
        let seconds = |per: i64| -> Result<Instant, Error> {
            self.plus_seconds(arith::mul(amount, per, "epoch seconds")?)
        };
        match unit {
            ChronoUnit::Nanos => self.plus_nanos(amount),
            ChronoUnit::Micros => self.plus_parts(
                amount / 1_000_000,
                (amount % 1_000_000) * NANOS_PER_MICRO,
            ),
            ChronoUnit::Millis => self.plus_millis(amount),
            ChronoUnit::Seconds => self.plus_seconds(amount),
            ChronoUnit::Minutes => seconds(SECONDS_PER_MINUTE),
            ChronoUnit::Hours => seconds(SECONDS_PER_HOUR),
            ChronoUnit::HalfDays => seconds(SECONDS_PER_DAY / 2),
            ChronoUnit::Days => seconds(SECONDS_PER_DAY),
            _ => Err(field::unsupported_unit(unit)),
        }
    }

    fn until_builtin(
        &self,
        end: Instant,
        unit: ChronoUnit,
    ) -> Result<i64, Error> {
        match unit {
            ChronoUnit::Nanos => self.nanos_until(end),
            ChronoUnit::Micros => Ok(self.nanos_until(end)? / NANOS_PER_MICRO),
            ChronoUnit::Millis => arith::sub(
                end.to_epoch_milli()?,
                self.to_epoch_milli()?,
                "milliseconds",
            ),
            ChronoUnit::Seconds => self.seconds_until(end),
            ChronoUnit::Minutes => {
                Ok(self.seconds_until(end)? / SECONDS_PER_MINUTE)
            }
            ChronoUnit::Hours => {
                Ok(self.seconds_until(end)? / SECONDS_PER_HOUR)
            }
            ChronoUnit::HalfDays => {
                Ok(self.seconds_until(end)? / (SECONDS_PER_DAY / 2))
            }
            ChronoUnit::Days => Ok(self.seconds_until(end)? / SECONDS_PER_DAY),
            _ => Err(field::unsupported_unit(unit)),
        }
    }
}

/// Returns the length in nanoseconds of a unit used for truncating a time
/// of day.
///
/// The unit must be no longer than a day and must divide a day evenly.
pub(crate) fn truncation_nanos(unit: &dyn Unit) -> Result<i64, Error> {
    let duration = unit.duration();
    let chrono = unit.as_chrono_unit().unwrap_or(ChronoUnit::Forever);
    if duration.seconds() > SECONDS_PER_DAY {
        return Err(Error::unsupported_unit(unit.name()))
            .context(E::TruncateUnitTooLarge { unit: chrono });
    }
    let nanos = duration.to_nanos()?;
    if nanos == 0 || NANOS_PER_DAY % nanos != 0 {
        return Err(Error::unsupported_unit(unit.name()))
            .context(E::TruncateUnitNotDivisor { unit: chrono });
    }
    Ok(nanos)
}

impl TemporalAccessor for Instant {
    fn is_supported(&self, field: &dyn Field) -> bool {
        match field.as_chrono_field() {
            Some(f) => matches!(
                f,
                ChronoField::NanoOfSecond
                    | ChronoField::MicroOfSecond
                    | ChronoField::MilliOfSecond
                    | ChronoField::InstantSeconds
            ),
            None => field.is_supported_by(self),
        }
    }

    fn range(&self, field: &dyn Field) -> Result<ValueRange, Error> {
        field::range_of(self, field, |f| {
            self.is_supported(&f).then(|| f.range())
        })
    }

    fn get_long(&self, field: &dyn Field) -> Result<i64, Error> {
        match field.as_chrono_field() {
            Some(f) => self.get_builtin(f),
            None => field.get_from(self),
        }
    }

    fn query_instant(&self) -> Option<Instant> {
        Some(*self)
    }
}

impl Temporal for Instant {
    fn is_supported_unit(&self, unit: &dyn Unit) -> bool {
        match unit.as_chrono_unit() {
            Some(u) => u.is_time_based() || u == ChronoUnit::Days,
            None => unit.is_supported_by(&TemporalValue::Instant(*self)),
        }
    }

    fn with(&self, field: &dyn Field, value: i64) -> Result<Instant, Error> {
        match field.as_chrono_field() {
            Some(f) => self.with_builtin(f, value),
            None => field::adjust_with_field(self, field, value),
        }
    }

    fn plus(&self, amount: i64, unit: &dyn Unit) -> Result<Instant, Error> {
        match unit.as_chrono_unit() {
            Some(u) => self
                .plus_builtin(amount, u)
                .context(E::FailedAddUnit { unit: u }),
            None => field::add_with_unit(self, amount, unit),
        }
    }

    fn until(&self, end: &Instant, unit: &dyn Unit) -> Result<i64, Error> {
        match unit.as_chrono_unit() {
            Some(u) => self
                .until_builtin(*end, u)
                .context(E::FailedUntil { unit: u }),
            None => field::between_with_unit(self, end, unit),
        }
    }

    fn into_temporal_value(self) -> TemporalValue {
        TemporalValue::Instant(self)
    }

    fn from_temporal_value(value: TemporalValue) -> Result<Instant, Error> {
        value
            .query_instant()
            .ok_or_else(|| field::mismatched("Instant", &value))
    }
}

impl core::fmt::Debug for Instant {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Instant {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        printer::write_instant(f, self.second, self.nano)
    }
}

impl core::str::FromStr for Instant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Instant, Error> {
        parser::parse_instant(s)
    }
}

#[cfg(feature = "std")]
impl TryFrom<std::time::SystemTime> for Instant {
    type Error = Error;

    fn try_from(system_time: std::time::SystemTime) -> Result<Instant, Error> {
        let unix_epoch = std::time::SystemTime::UNIX_EPOCH;
        let (duration, sign) = match system_time.duration_since(unix_epoch) {
            Ok(duration) => (duration, 1),
            Err(err) => (err.duration(), -1),
        };
        let seconds = i64::try_from(duration.as_secs())
            .map_err(|_| Error::overflow("system time seconds"))?;
        let nanos = i64::from(duration.subsec_nanos());
        Instant::of_epoch_second_adjusted(seconds * sign, nanos * sign)
    }
}

#[cfg(feature = "std")]
impl TryFrom<Instant> for std::time::SystemTime {
    type Error = Error;

    fn try_from(instant: Instant) -> Result<std::time::SystemTime, Error> {
        let unix_epoch = std::time::SystemTime::UNIX_EPOCH;
        let duration = std::time::Duration::new(
            instant.second.unsigned_abs(),
            0,
        );
        let whole = if instant.second >= 0 {
            unix_epoch.checked_add(duration)
        } else {
            unix_epoch.checked_sub(duration)
        };
        whole
            .and_then(|t| {
                t.checked_add(std::time::Duration::from_nanos(
                    instant.nano as u64,
                ))
            })
            .ok_or_else(|| Error::overflow("system time"))
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Instant {
    fn arbitrary(g: &mut quickcheck::Gen) -> Instant {
        let second = floor_mod(
            i64::arbitrary(g),
            Instant::MAX_SECOND - Instant::MIN_SECOND + 1,
        ) + Instant::MIN_SECOND;
        let nano = (u32::arbitrary(g) % 1_000_000_000) as i32;
        Instant { second, nano }
    }
}
