use crate::{
    civil::{LocalDate, LocalDateTime},
    clock::Clock,
    error::{civil::Error as E, ErrorContext},
    field::{
        self, ChronoField, ChronoUnit, Field, Temporal, TemporalAccessor,
        TemporalValue, Unit, ValueRange,
    },
    fmt::{parser, printer},
    instant::truncation_nanos,
    tz::TimeZone,
    util::{
        arith::{
            floor_mod, MICROS_PER_DAY, MILLIS_PER_DAY, MINUTES_PER_DAY,
            NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MICRO, NANOS_PER_MILLI,
            NANOS_PER_MINUTE, NANOS_PER_SECOND, SECONDS_PER_DAY,
        },
        b,
    },
    Error, Instant,
};

/// A time of day, without a date or a time zone.
///
/// A `LocalTime` is an hour, minute, second and nanosecond. It is also a
/// count of nanoseconds since midnight, see [`LocalTime::to_nano_of_day`].
///
/// Arithmetic on a time wraps around midnight. Adding an hour to `23:30`
/// produces `00:30`.
///
/// # Text format
///
/// Times print as `HH:MM`, followed by `:SS` when the seconds or
/// nanoseconds are non-zero, followed by a fraction in groups of three
/// digits when the nanoseconds are non-zero.
///
/// # Example
///
/// ```
/// use epochal::civil::LocalTime;
///
/// let time = LocalTime::of(23, 30, 0, 0)?;
/// assert_eq!(time.plus_hours(1), LocalTime::of(0, 30, 0, 0)?);
/// assert_eq!(time.to_string(), "23:30");
/// assert_eq!(time.plus_nanos(1_500_000).to_string(), "23:30:00.001500");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct LocalTime {
    hour: i8,
    minute: i8,
    second: i8,
    nano: i32,
}

impl LocalTime {
    /// The first time of the day, `00:00`.
    pub const MIN: LocalTime =
        LocalTime { hour: 0, minute: 0, second: 0, nano: 0 };

    /// The last time of the day, `23:59:59.999999999`.
    pub const MAX: LocalTime =
        LocalTime { hour: 23, minute: 59, second: 59, nano: 999_999_999 };

    /// Midnight at the start of the day, `00:00`.
    pub const MIDNIGHT: LocalTime = LocalTime::MIN;

    /// Noon, `12:00`.
    pub const NOON: LocalTime =
        LocalTime { hour: 12, minute: 0, second: 0, nano: 0 };

    /// Creates a new time from an hour, minute, second and nanosecond.
    ///
    /// # Errors
    ///
    /// This returns a range error when any component is out of range.
    pub fn of(
        hour: i8,
        minute: i8,
        second: i8,
        nano: i32,
    ) -> Result<LocalTime, Error> {
        let hour = b::Hour::check(hour)?;
        let minute = b::Minute::check(minute)?;
        let second = b::Second::check(second)?;
        let nano = b::SubsecNanosecond::check(nano)?;
        Ok(LocalTime { hour, minute, second, nano })
    }

    /// Creates a new time from a number of seconds since midnight.
    ///
    /// # Errors
    ///
    /// This returns a range error when the seconds are not in
    /// `0..86_400`.
    pub fn of_second_of_day(second_of_day: i64) -> Result<LocalTime, Error> {
        let second_of_day = b::SecondOfDay::check(second_of_day)?;
        Ok(LocalTime::from_nano_of_day(
            i64::from(second_of_day) * NANOS_PER_SECOND,
        ))
    }

    /// Creates a new time from a number of nanoseconds since midnight.
    ///
    /// # Errors
    ///
    /// This returns a range error when the nanoseconds are not in
    /// `0..86_400_000_000_000`.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::civil::LocalTime;
    ///
    /// let time = LocalTime::of_nano_of_day(3_600_000_000_001)?;
    /// assert_eq!(time.to_string(), "01:00:00.000000001");
    /// assert!(LocalTime::of_nano_of_day(-1).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of_nano_of_day(nano_of_day: i64) -> Result<LocalTime, Error> {
        let nano_of_day = b::NanoOfDay::check(nano_of_day)?;
        Ok(LocalTime::from_nano_of_day(nano_of_day))
    }

    /// Returns the time of day of an instant in the time zone given.
    pub fn of_instant(instant: Instant, zone: &TimeZone) -> LocalTime {
        let offset = zone.offset_for_instant(instant);
        let local = instant.epoch_second()
            + i64::from(offset.total_seconds());
        let second_of_day = floor_mod(local, SECONDS_PER_DAY);
        LocalTime::from_nano_of_day(
            second_of_day * NANOS_PER_SECOND + i64::from(instant.nano()),
        )
    }

    /// Returns the current time of day according to the clock given.
    pub fn now(clock: &dyn Clock) -> LocalTime {
        LocalTime::of_instant(clock.instant(), &clock.zone())
    }

    /// Creates a time from a nanosecond of day that is known to be valid.
    pub(crate) const fn from_nano_of_day(nano_of_day: i64) -> LocalTime {
        debug_assert!(0 <= nano_of_day && nano_of_day < NANOS_PER_DAY);
        let hour = (nano_of_day / NANOS_PER_HOUR) as i8;
        let minute = ((nano_of_day / NANOS_PER_MINUTE) % 60) as i8;
        let second = ((nano_of_day / NANOS_PER_SECOND) % 60) as i8;
        let nano = (nano_of_day % NANOS_PER_SECOND) as i32;
        LocalTime { hour, minute, second, nano }
    }

    /// Returns the hour of this time, from `0` to `23`.
    #[inline]
    pub const fn hour(self) -> i8 {
        self.hour
    }

    /// Returns the minute of this time, from `0` to `59`.
    #[inline]
    pub const fn minute(self) -> i8 {
        self.minute
    }

    /// Returns the second of this time, from `0` to `59`.
    #[inline]
    pub const fn second(self) -> i8 {
        self.second
    }

    /// Returns the nanosecond of this time, from `0` to `999_999_999`.
    #[inline]
    pub const fn nano(self) -> i32 {
        self.nano
    }

    /// Returns the number of seconds since midnight.
    pub const fn to_second_of_day(self) -> i32 {
        self.hour as i32 * 3_600 + self.minute as i32 * 60 + self.second as i32
    }

    /// Returns the number of nanoseconds since midnight.
    pub const fn to_nano_of_day(self) -> i64 {
        self.to_second_of_day() as i64 * NANOS_PER_SECOND + self.nano as i64
    }

    /// Returns a copy of this time with the hour given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the hour is not in `0..=23`.
    pub fn with_hour(self, hour: i8) -> Result<LocalTime, Error> {
        let hour = b::Hour::check(hour)?;
        Ok(LocalTime { hour, ..self })
    }

    /// Returns a copy of this time with the minute given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the minute is not in `0..=59`.
    pub fn with_minute(self, minute: i8) -> Result<LocalTime, Error> {
        let minute = b::Minute::check(minute)?;
        Ok(LocalTime { minute, ..self })
    }

    /// Returns a copy of this time with the second given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the second is not in `0..=59`.
    pub fn with_second(self, second: i8) -> Result<LocalTime, Error> {
        let second = b::Second::check(second)?;
        Ok(LocalTime { second, ..self })
    }

    /// Returns a copy of this time with the nanosecond given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the nanosecond is not in
    /// `0..=999_999_999`.
    pub fn with_nano(self, nano: i32) -> Result<LocalTime, Error> {
        let nano = b::SubsecNanosecond::check(nano)?;
        Ok(LocalTime { nano, ..self })
    }

    /// Returns a copy of this time with a number of hours added, wrapping
    /// around midnight.
    pub fn plus_hours(self, hours: i64) -> LocalTime {
        self.plus_nanos_of_day((hours % 24) * NANOS_PER_HOUR)
    }

    /// Returns a copy of this time with a number of minutes added, wrapping
    /// around midnight.
    pub fn plus_minutes(self, minutes: i64) -> LocalTime {
        self.plus_nanos_of_day((minutes % MINUTES_PER_DAY) * NANOS_PER_MINUTE)
    }

    /// Returns a copy of this time with a number of seconds added, wrapping
    /// around midnight.
    pub fn plus_seconds(self, seconds: i64) -> LocalTime {
        self.plus_nanos_of_day((seconds % SECONDS_PER_DAY) * NANOS_PER_SECOND)
    }

    /// Returns a copy of this time with a number of nanoseconds added,
    /// wrapping around midnight.
    pub fn plus_nanos(self, nanos: i64) -> LocalTime {
        self.plus_nanos_of_day(nanos % NANOS_PER_DAY)
    }

    /// Returns a copy of this time with a number of hours subtracted,
    /// wrapping around midnight.
    pub fn minus_hours(self, hours: i64) -> LocalTime {
        self.plus_hours(-(hours % 24))
    }

    /// Returns a copy of this time with a number of minutes subtracted,
    /// wrapping around midnight.
    pub fn minus_minutes(self, minutes: i64) -> LocalTime {
        self.plus_minutes(-(minutes % MINUTES_PER_DAY))
    }

    /// Returns a copy of this time with a number of seconds subtracted,
    /// wrapping around midnight.
    pub fn minus_seconds(self, seconds: i64) -> LocalTime {
        self.plus_seconds(-(seconds % SECONDS_PER_DAY))
    }

    /// Returns a copy of this time with a number of nanoseconds
    /// subtracted, wrapping around midnight.
    pub fn minus_nanos(self, nanos: i64) -> LocalTime {
        self.plus_nanos(-(nanos % NANOS_PER_DAY))
    }

    /// Returns a copy of this time truncated to the unit given.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit is longer than a day, or when it
    /// does not evenly divide a day.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::{civil::LocalTime, field::ChronoUnit};
    ///
    /// let time = LocalTime::of(17, 42, 9, 123_456_789)?;
    /// assert_eq!(
    ///     time.truncated_to(&ChronoUnit::Minutes)?,
    ///     LocalTime::of(17, 42, 0, 0)?,
    /// );
    /// assert_eq!(time.truncated_to(&ChronoUnit::HalfDays)?, LocalTime::NOON);
    /// assert_eq!(time.truncated_to(&ChronoUnit::Days)?, LocalTime::MIDNIGHT);
    /// assert!(time.truncated_to(&ChronoUnit::Weeks).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn truncated_to(self, unit: &dyn Unit) -> Result<LocalTime, Error> {
        if unit.as_chrono_unit() == Some(ChronoUnit::Nanos) {
            return Ok(self);
        }
        let unit_nanos = truncation_nanos(unit)?;
        let nano_of_day = self.to_nano_of_day();
        let truncated = (nano_of_day / unit_nanos) * unit_nanos;
        Ok(LocalTime::from_nano_of_day(truncated))
    }

    /// Combines this time with a date to create a local datetime.
    #[inline]
    pub const fn at_date(self, date: LocalDate) -> LocalDateTime {
        LocalDateTime::from_parts(date, self)
    }

    /// Adds nanoseconds that are known to be less than a day in magnitude.
    fn plus_nanos_of_day(self, nanos: i64) -> LocalTime {
        if nanos == 0 {
            return self;
        }
        let current = self.to_nano_of_day();
        let nano_of_day = floor_mod(current + nanos, NANOS_PER_DAY);
        if nano_of_day == current {
            return self;
        }
        LocalTime::from_nano_of_day(nano_of_day)
    }

    fn hour_of_am_pm(self) -> i64 {
        i64::from(self.hour % 12)
    }

    pub(crate) fn get_builtin(
        &self,
        field: ChronoField,
    ) -> Result<i64, Error> {
        let nano = i64::from(self.nano);
        let value = match field {
            ChronoField::NanoOfSecond => nano,
            ChronoField::NanoOfDay => self.to_nano_of_day(),
            ChronoField::MicroOfSecond => nano / NANOS_PER_MICRO,
            ChronoField::MicroOfDay => self.to_nano_of_day() / NANOS_PER_MICRO,
            ChronoField::MilliOfSecond => nano / NANOS_PER_MILLI,
            ChronoField::MilliOfDay => self.to_nano_of_day() / NANOS_PER_MILLI,
            ChronoField::SecondOfMinute => i64::from(self.second),
            ChronoField::SecondOfDay => i64::from(self.to_second_of_day()),
            ChronoField::MinuteOfHour => i64::from(self.minute),
            ChronoField::MinuteOfDay => {
                i64::from(self.hour) * 60 + i64::from(self.minute)
            }
            ChronoField::HourOfAmPm => self.hour_of_am_pm(),
            ChronoField::ClockHourOfAmPm => match self.hour_of_am_pm() {
                0 => 12,
                hour => hour,
            },
            ChronoField::HourOfDay => i64::from(self.hour),
            ChronoField::ClockHourOfDay => match self.hour {
                0 => 24,
                hour => i64::from(hour),
            },
            ChronoField::AmPmOfDay => i64::from(self.hour / 12),
            _ => return Err(field::unsupported_field(field)),
        };
        Ok(value)
    }

    pub(crate) fn with_builtin(
        &self,
        field: ChronoField,
        value: i64,
    ) -> Result<LocalTime, Error> {
        if !field.is_time_based() {
            return Err(field::unsupported_field(field));
        }
        let value = field.check_valid_value(value)?;
        // Every value is in range for its field at this point, so the
        // narrowing casts below are lossless.
        let time = match field {
            ChronoField::NanoOfSecond => {
                LocalTime { nano: value as i32, ..*self }
            }
            ChronoField::NanoOfDay => LocalTime::from_nano_of_day(value),
            ChronoField::MicroOfSecond => LocalTime {
                nano: (value * NANOS_PER_MICRO) as i32,
                ..*self
            },
            ChronoField::MicroOfDay => {
                LocalTime::from_nano_of_day(value * NANOS_PER_MICRO)
            }
            ChronoField::MilliOfSecond => LocalTime {
                nano: (value * NANOS_PER_MILLI) as i32,
                ..*self
            },
            ChronoField::MilliOfDay => {
                LocalTime::from_nano_of_day(value * NANOS_PER_MILLI)
            }
            ChronoField::SecondOfMinute => {
                LocalTime { second: value as i8, ..*self }
            }
            ChronoField::SecondOfDay => self.plus_seconds(
                value - i64::from(self.to_second_of_day()),
            ),
            ChronoField::MinuteOfHour => {
                LocalTime { minute: value as i8, ..*self }
            }
            ChronoField::MinuteOfDay => self.plus_minutes(
                value - (i64::from(self.hour) * 60 + i64::from(self.minute)),
            ),
            ChronoField::HourOfAmPm => {
                self.plus_hours(value - self.hour_of_am_pm())
            }
            ChronoField::ClockHourOfAmPm => {
                let value = if value == 12 { 0 } else { value };
                self.plus_hours(value - self.hour_of_am_pm())
            }
            ChronoField::HourOfDay => LocalTime { hour: value as i8, ..*self },
            ChronoField::ClockHourOfDay => {
                let hour = if value == 24 { 0 } else { value as i8 };
                LocalTime { hour, ..*self }
            }
            ChronoField::AmPmOfDay => {
                self.plus_hours((value - i64::from(self.hour / 12)) * 12)
            }
            _ => return Err(field::unsupported_field(field)),
        };
        Ok(time)
    }

    pub(crate) fn plus_builtin(
        &self,
        amount: i64,
        unit: ChronoUnit,
    ) -> Result<LocalTime, Error> {
        let time = match unit {
            ChronoUnit::Nanos => self.plus_nanos(amount),
            ChronoUnit::Micros => {
                self.plus_nanos((amount % MICROS_PER_DAY) * NANOS_PER_MICRO)
            }
            ChronoUnit::Millis => {
                self.plus_nanos((amount % MILLIS_PER_DAY) * NANOS_PER_MILLI)
            }
            ChronoUnit::Seconds => self.plus_seconds(amount),
            ChronoUnit::Minutes => self.plus_minutes(amount),
            ChronoUnit::Hours => self.plus_hours(amount),
            ChronoUnit::HalfDays => self.plus_hours((amount % 2) * 12),
            _ => return Err(field::unsupported_unit(unit)),
        };
        Ok(time)
    }

    pub(crate) fn until_builtin(
        &self,
        end: LocalTime,
        unit: ChronoUnit,
    ) -> Result<i64, Error> {
        let nanos = end.to_nano_of_day() - self.to_nano_of_day();
        let per = match unit.nanos() {
            Some(per) => per,
            None => return Err(field::unsupported_unit(unit)),
        };
        Ok(nanos / per)
    }
}

impl TemporalAccessor for LocalTime {
    fn is_supported(&self, field: &dyn Field) -> bool {
        match field.as_chrono_field() {
            Some(f) => f.is_time_based(),
            None => field.is_supported_by(self),
        }
    }

    fn range(&self, field: &dyn Field) -> Result<ValueRange, Error> {
        field::range_of(self, field, |f| f.is_time_based().then(|| f.range()))
    }

    fn get_long(&self, field: &dyn Field) -> Result<i64, Error> {
        match field.as_chrono_field() {
            Some(f) => self.get_builtin(f),
            None => field.get_from(self),
        }
    }

    fn query_local_time(&self) -> Option<LocalTime> {
        Some(*self)
    }
}

impl Temporal for LocalTime {
    fn is_supported_unit(&self, unit: &dyn Unit) -> bool {
        match unit.as_chrono_unit() {
            Some(u) => u.is_time_based(),
            None => unit.is_supported_by(&TemporalValue::LocalTime(*self)),
        }
    }

    fn with(&self, field: &dyn Field, value: i64) -> Result<LocalTime, Error> {
        match field.as_chrono_field() {
            Some(f) => self.with_builtin(f, value),
            None => field::adjust_with_field(self, field, value),
        }
    }

    fn plus(&self, amount: i64, unit: &dyn Unit) -> Result<LocalTime, Error> {
        match unit.as_chrono_unit() {
            Some(u) => self
                .plus_builtin(amount, u)
                .context(E::FailedAddUnit { unit: u }),
            None => field::add_with_unit(self, amount, unit),
        }
    }

    fn until(&self, end: &LocalTime, unit: &dyn Unit) -> Result<i64, Error> {
        match unit.as_chrono_unit() {
            Some(u) => self
                .until_builtin(*end, u)
                .context(E::FailedUntil { unit: u }),
            None => field::between_with_unit(self, end, unit),
        }
    }

    fn into_temporal_value(self) -> TemporalValue {
        TemporalValue::LocalTime(self)
    }

    fn from_temporal_value(value: TemporalValue) -> Result<LocalTime, Error> {
        value
            .query_local_time()
            .ok_or_else(|| field::mismatched("LocalTime", &value))
    }
}

impl core::fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for LocalTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        printer::write_time(
            f,
            self.hour,
            self.minute,
            self.second,
            self.nano,
            false,
        )
    }
}

impl core::str::FromStr for LocalTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<LocalTime, Error> {
        parser::parse_time(s)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for LocalTime {
    fn arbitrary(g: &mut quickcheck::Gen) -> LocalTime {
        let nano_of_day = floor_mod(i64::arbitrary(g), NANOS_PER_DAY);
        LocalTime::from_nano_of_day(nano_of_day)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn time(hour: i8, minute: i8, second: i8, nano: i32) -> LocalTime {
        LocalTime::of(hour, minute, second, nano).unwrap()
    }

    #[test]
    fn validation() {
        assert!(LocalTime::of(24, 0, 0, 0).unwrap_err().is_range());
        assert!(LocalTime::of(0, 60, 0, 0).unwrap_err().is_range());
        assert!(LocalTime::of(0, 0, 0, 1_000_000_000).unwrap_err().is_range());
        assert!(LocalTime::of_second_of_day(86_400).unwrap_err().is_range());
        assert_eq!(
            LocalTime::of_second_of_day(86_399).unwrap(),
            time(23, 59, 59, 0),
        );
    }

    #[test]
    fn wrapping_arithmetic() {
        let t = time(23, 30, 0, 0);
        assert_eq!(t.plus_hours(1), time(0, 30, 0, 0));
        assert_eq!(t.plus_hours(-24), t);
        assert_eq!(t.plus_minutes(i64::MAX), t.plus_minutes(i64::MAX % 1_440));
        assert_eq!(
            t.minus_minutes(i64::MIN),
            t.plus_minutes(-(i64::MIN % 1_440)),
        );
        assert_eq!(LocalTime::MIDNIGHT.minus_nanos(1), LocalTime::MAX);
        assert_eq!(LocalTime::MAX.plus_nanos(1), LocalTime::MIDNIGHT);
        assert_eq!(
            t.plus(3, &ChronoUnit::HalfDays).unwrap(),
            time(11, 30, 0, 0),
        );
        assert_eq!(
            t.plus(1_000, &ChronoUnit::Micros).unwrap(),
            time(23, 30, 0, 1_000_000),
        );
        assert!(t.plus(1, &ChronoUnit::Days).unwrap_err().is_unsupported());
    }

    #[test]
    fn until_units() {
        let start = time(10, 0, 0, 0);
        let end = time(11, 59, 59, 999_999_999);
        assert_eq!(start.until(&end, &ChronoUnit::Hours).unwrap(), 1);
        assert_eq!(start.until(&end, &ChronoUnit::Minutes).unwrap(), 119);
        assert_eq!(end.until(&start, &ChronoUnit::Minutes).unwrap(), -119);
        assert_eq!(start.until(&end, &ChronoUnit::HalfDays).unwrap(), 0);
        assert!(start
            .until(&end, &ChronoUnit::Days)
            .unwrap_err()
            .is_unsupported());
    }

    #[test]
    fn fields() {
        let t = time(0, 15, 30, 123_456_789);
        assert_eq!(t.get_long(&ChronoField::ClockHourOfDay).unwrap(), 24);
        assert_eq!(t.get_long(&ChronoField::ClockHourOfAmPm).unwrap(), 12);
        assert_eq!(t.get_long(&ChronoField::MinuteOfDay).unwrap(), 15);
        assert_eq!(t.get_long(&ChronoField::MicroOfSecond).unwrap(), 123_456);
        assert_eq!(t.get_long(&ChronoField::AmPmOfDay).unwrap(), 0);
        assert_eq!(t.get(&ChronoField::NanoOfSecond).unwrap(), 123_456_789);
        assert!(t.get(&ChronoField::NanoOfDay).unwrap_err().is_unsupported());
        assert!(t
            .get_long(&ChronoField::DayOfMonth)
            .unwrap_err()
            .is_unsupported());

        assert_eq!(
            t.with(&ChronoField::AmPmOfDay, 1).unwrap(),
            time(12, 15, 30, 123_456_789),
        );
        assert_eq!(
            t.with(&ChronoField::ClockHourOfAmPm, 3).unwrap(),
            time(3, 15, 30, 123_456_789),
        );
        assert_eq!(t.with(&ChronoField::ClockHourOfDay, 24).unwrap(), t);
        assert_eq!(
            t.with(&ChronoField::MilliOfSecond, 7).unwrap(),
            time(0, 15, 30, 7_000_000),
        );
        assert_eq!(
            t.with(&ChronoField::SecondOfDay, 0).unwrap(),
            time(0, 0, 0, 123_456_789),
        );
        assert!(t.with(&ChronoField::HourOfDay, 24).unwrap_err().is_range());
        assert!(t
            .with(&ChronoField::Year, 2024)
            .unwrap_err()
            .is_unsupported());
    }

    #[test]
    fn truncation() {
        let t = time(13, 47, 12, 987_654_321);
        assert_eq!(
            t.truncated_to(&ChronoUnit::Millis).unwrap(),
            time(13, 47, 12, 987_000_000),
        );
        assert_eq!(
            t.truncated_to(&ChronoUnit::Hours).unwrap(),
            time(13, 0, 0, 0),
        );
        assert!(t
            .truncated_to(&ChronoUnit::Months)
            .unwrap_err()
            .is_unsupported());
    }

    #[test]
    fn text() {
        let cases = [
            (time(0, 0, 0, 0), "00:00"),
            (time(9, 5, 0, 0), "09:05"),
            (time(9, 5, 7, 0), "09:05:07"),
            (time(9, 5, 0, 500_000_000), "09:05:00.500"),
            (time(23, 59, 59, 999_999_999), "23:59:59.999999999"),
            (time(1, 2, 3, 4_000), "01:02:03.000004"),
        ];
        for (t, expected) in cases {
            assert_eq!(t.to_string(), expected);
            assert_eq!(expected.parse::<LocalTime>().unwrap(), t);
        }
        assert_eq!(
            "09:05:00.5".parse::<LocalTime>().unwrap(),
            time(9, 5, 0, 500_000_000),
        );
        assert!("24:00".parse::<LocalTime>().unwrap_err().is_range());
        assert!("9:05".parse::<LocalTime>().unwrap_err().is_parse());
    }

    quickcheck::quickcheck! {
        fn prop_nano_of_day_roundtrip(t: LocalTime) -> bool {
            LocalTime::of_nano_of_day(t.to_nano_of_day()).unwrap() == t
        }

        fn prop_text_roundtrip(t: LocalTime) -> bool {
            t.to_string().parse::<LocalTime>().unwrap() == t
        }

        fn prop_plus_minus_inverse(t: LocalTime, nanos: i64) -> bool {
            t.plus_nanos(nanos).minus_nanos(nanos) == t
        }
    }
}
