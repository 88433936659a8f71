use crate::{
    civil::{LocalDate, LocalTime, Weekday},
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
            self, floor_div, floor_mod, HOURS_PER_DAY, MICROS_PER_DAY,
            MILLIS_PER_DAY, MINUTES_PER_DAY, NANOS_PER_DAY, NANOS_PER_HOUR,
            NANOS_PER_MICRO, NANOS_PER_MILLI, NANOS_PER_MINUTE,
            NANOS_PER_SECOND, SECONDS_PER_DAY,
        },
    },
    Error, Instant, OffsetDateTime, ZonedDateTime,
};

/// A date and a time of day, without a time zone.
///
/// A `LocalDateTime` is the composition of a [`LocalDate`] and a
/// [`LocalTime`]. It describes a wall clock reading, not an instant: the
/// same local datetime names a different instant in every time zone. Use
/// [`LocalDateTime::at_offset`] or [`LocalDateTime::at_zone`] to pin it to
/// the timeline.
///
/// Time arithmetic carries into the date. Adding an hour to
/// `2024-12-31T23:30` produces `2025-01-01T00:30`.
///
/// # Text format
///
/// Datetimes print as the date and the time joined by a `T`, like
/// `2024-03-10T02:30` or `2024-03-10T02:30:00.000000001`.
///
/// # Example
///
/// ```
/// use epochal::civil::LocalDateTime;
///
/// let dt = LocalDateTime::of(2024, 12, 31, 23, 30, 0, 0)?;
/// assert_eq!(dt.plus_hours(1)?.to_string(), "2025-01-01T00:30");
/// assert_eq!(
///     "2025-01-01T00:30".parse::<LocalDateTime>()?,
///     dt.plus_hours(1)?,
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}

impl LocalDateTime {
    /// The minimum supported datetime, `-999999999-01-01T00:00`.
    pub const MIN: LocalDateTime =
        LocalDateTime::from_parts(LocalDate::MIN, LocalTime::MIN);

    /// The maximum supported datetime,
    /// `+999999999-12-31T23:59:59.999999999`.
    pub const MAX: LocalDateTime =
        LocalDateTime::from_parts(LocalDate::MAX, LocalTime::MAX);

    /// Creates a new datetime from its components.
    ///
    /// # Errors
    ///
    /// This returns a range error when any component is out of range.
    pub fn of(
        year: i32,
        month: i8,
        day: i8,
        hour: i8,
        minute: i8,
        second: i8,
        nano: i32,
    ) -> Result<LocalDateTime, Error> {
        let date = LocalDate::of(year, month, day)?;
        let time = LocalTime::of(hour, minute, second, nano)?;
        Ok(LocalDateTime { date, time })
    }

    /// Creates a new datetime from a date and a time.
    #[inline]
    pub const fn from_parts(
        date: LocalDate,
        time: LocalTime,
    ) -> LocalDateTime {
        LocalDateTime { date, time }
    }

    /// Creates a datetime from seconds since the Unix epoch, a nanosecond
    /// of second and the offset from UTC at which to observe it.
    ///
    /// # Errors
    ///
    /// This returns a range error when the nanosecond is out of range or
    /// when the resulting datetime is out of range, and an overflow error
    /// when applying the offset overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::{civil::LocalDateTime, tz::ZoneOffset};
    ///
    /// let offset = ZoneOffset::of_hours(-5)?;
    /// let dt = LocalDateTime::of_epoch_second(0, 0, offset)?;
    /// assert_eq!(dt.to_string(), "1969-12-31T19:00");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of_epoch_second(
        epoch_second: i64,
        nano: i32,
        offset: ZoneOffset,
    ) -> Result<LocalDateTime, Error> {
        let nano = ChronoField::NanoOfSecond
            .check_valid_int_value(i64::from(nano))?;
        let local = arith::add(
            epoch_second,
            i64::from(offset.total_seconds()),
            "local seconds",
        )?;
        let date = LocalDate::of_epoch_day(floor_div(local, SECONDS_PER_DAY))?;
        let second_of_day = floor_mod(local, SECONDS_PER_DAY);
        let time = LocalTime::from_nano_of_day(
            second_of_day * NANOS_PER_SECOND + i64::from(nano),
        );
        Ok(LocalDateTime { date, time })
    }

    /// Returns the local datetime of an instant in the time zone given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the local datetime is out of range,
    /// which can only happen at the edges of the range of instants.
    pub fn of_instant(
        instant: Instant,
        zone: &TimeZone,
    ) -> Result<LocalDateTime, Error> {
        let offset = zone.offset_for_instant(instant);
        LocalDateTime::of_epoch_second(
            instant.epoch_second(),
            instant.nano(),
            offset,
        )
        .context(E::InvalidLocalDateTimeForInstant)
    }

    /// Returns the current datetime according to the clock given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the clock's instant is at the edge
    /// of the range of instants.
    pub fn now(clock: &dyn Clock) -> Result<LocalDateTime, Error> {
        LocalDateTime::of_instant(clock.instant(), &clock.zone())
    }

    /// Returns the date of this datetime.
    #[inline]
    pub const fn date(self) -> LocalDate {
        self.date
    }

    /// Returns the time of this datetime.
    #[inline]
    pub const fn time(self) -> LocalTime {
        self.time
    }

    /// Returns the year.
    #[inline]
    pub const fn year(self) -> i32 {
        self.date.year()
    }

    /// Returns the month, from `1` to `12`.
    #[inline]
    pub const fn month(self) -> i8 {
        self.date.month()
    }

    /// Returns the day of the month, starting at `1`.
    #[inline]
    pub const fn day(self) -> i8 {
        self.date.day()
    }

    /// Returns the day of the year, starting at `1`.
    #[inline]
    pub const fn day_of_year(self) -> i16 {
        self.date.day_of_year()
    }

    /// Returns the weekday.
    #[inline]
    pub const fn day_of_week(self) -> Weekday {
        self.date.day_of_week()
    }

    /// Returns the hour, from `0` to `23`.
    #[inline]
    pub const fn hour(self) -> i8 {
        self.time.hour()
    }

    /// Returns the minute, from `0` to `59`.
    #[inline]
    pub const fn minute(self) -> i8 {
        self.time.minute()
    }

    /// Returns the second, from `0` to `59`.
    #[inline]
    pub const fn second(self) -> i8 {
        self.time.second()
    }

    /// Returns the nanosecond, from `0` to `999_999_999`.
    #[inline]
    pub const fn nano(self) -> i32 {
        self.time.nano()
    }

    /// Returns a copy with the date replaced.
    #[inline]
    pub const fn with_date(self, date: LocalDate) -> LocalDateTime {
        LocalDateTime { date, time: self.time }
    }

    /// Returns a copy with the time replaced.
    #[inline]
    pub const fn with_time(self, time: LocalTime) -> LocalDateTime {
        LocalDateTime { date: self.date, time }
    }

    /// Returns a copy with the year given, clamping the day of month.
    ///
    /// # Errors
    ///
    /// This returns a range error when the year is out of range.
    pub fn with_year(self, year: i32) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.with_year(year)?))
    }

    /// Returns a copy with the month given, clamping the day of month.
    ///
    /// # Errors
    ///
    /// This returns a range error when the month is out of range.
    pub fn with_month(self, month: i8) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.with_month(month)?))
    }

    /// Returns a copy with the day of month given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the day is invalid for the month.
    pub fn with_day_of_month(self, day: i8) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.with_day_of_month(day)?))
    }

    /// Returns a copy with the day of year given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the day is invalid for the year.
    pub fn with_day_of_year(
        self,
        day_of_year: i16,
    ) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.with_day_of_year(day_of_year)?))
    }

    /// Returns a copy with the hour given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the hour is out of range.
    pub fn with_hour(self, hour: i8) -> Result<LocalDateTime, Error> {
        Ok(self.with_time(self.time.with_hour(hour)?))
    }

    /// Returns a copy with the minute given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the minute is out of range.
    pub fn with_minute(self, minute: i8) -> Result<LocalDateTime, Error> {
        Ok(self.with_time(self.time.with_minute(minute)?))
    }

    /// Returns a copy with the second given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the second is out of range.
    pub fn with_second(self, second: i8) -> Result<LocalDateTime, Error> {
        Ok(self.with_time(self.time.with_second(second)?))
    }

    /// Returns a copy with the nanosecond given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the nanosecond is out of range.
    pub fn with_nano(self, nano: i32) -> Result<LocalDateTime, Error> {
        Ok(self.with_time(self.time.with_nano(nano)?))
    }

    /// Returns a copy with a number of years added.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_years(self, years: i64) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.plus_years(years)?))
    }

    /// Returns a copy with a number of months added.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_months(self, months: i64) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.plus_months(months)?))
    }

    /// Returns a copy with a number of weeks added.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_weeks(self, weeks: i64) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.plus_weeks(weeks)?))
    }

    /// Returns a copy with a number of days added.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_days(self, days: i64) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.plus_days(days)?))
    }

    /// Returns a copy with a number of hours added, carrying into the date.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_hours(self, hours: i64) -> Result<LocalDateTime, Error> {
        self.plus_with_overflow(self.date, hours, 0, 0, 0, 1)
    }

    /// Returns a copy with a number of minutes added, carrying into the
    /// date.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_minutes(self, minutes: i64) -> Result<LocalDateTime, Error> {
        self.plus_with_overflow(self.date, 0, minutes, 0, 0, 1)
    }

    /// Returns a copy with a number of seconds added, carrying into the
    /// date.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_seconds(self, seconds: i64) -> Result<LocalDateTime, Error> {
        self.plus_with_overflow(self.date, 0, 0, seconds, 0, 1)
    }

    /// Returns a copy with a number of nanoseconds added, carrying into the
    /// date.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_nanos(self, nanos: i64) -> Result<LocalDateTime, Error> {
        self.plus_with_overflow(self.date, 0, 0, 0, nanos, 1)
    }

    /// Returns a copy with a number of years subtracted.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_years(self, years: i64) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.minus_years(years)?))
    }

    /// Returns a copy with a number of months subtracted.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_months(self, months: i64) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.minus_months(months)?))
    }

    /// Returns a copy with a number of weeks subtracted.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_weeks(self, weeks: i64) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.minus_weeks(weeks)?))
    }

    /// Returns a copy with a number of days subtracted.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_days(self, days: i64) -> Result<LocalDateTime, Error> {
        Ok(self.with_date(self.date.minus_days(days)?))
    }

    /// Returns a copy with a number of hours subtracted.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_hours(self, hours: i64) -> Result<LocalDateTime, Error> {
        self.plus_with_overflow(self.date, hours, 0, 0, 0, -1)
    }

    /// Returns a copy with a number of minutes subtracted.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_minutes(self, minutes: i64) -> Result<LocalDateTime, Error> {
        self.plus_with_overflow(self.date, 0, minutes, 0, 0, -1)
    }

    /// Returns a copy with a number of seconds subtracted.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_seconds(self, seconds: i64) -> Result<LocalDateTime, Error> {
        self.plus_with_overflow(self.date, 0, 0, seconds, 0, -1)
    }

    /// Returns a copy with a number of nanoseconds subtracted.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_nanos(self, nanos: i64) -> Result<LocalDateTime, Error> {
        self.plus_with_overflow(self.date, 0, 0, 0, nanos, -1)
    }

    /// Returns a copy with the time truncated to the unit given.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit is longer than a day, or when it
    /// does not evenly divide a day.
    pub fn truncated_to(
        self,
        unit: &dyn Unit,
    ) -> Result<LocalDateTime, Error> {
        Ok(self.with_time(self.time.truncated_to(unit)?))
    }

    /// Returns the number of seconds since the Unix epoch of this datetime
    /// observed at the offset given.
    pub const fn to_epoch_second(self, offset: ZoneOffset) -> i64 {
        self.date.to_epoch_day() * SECONDS_PER_DAY
            + self.time.to_second_of_day() as i64
            - offset.total_seconds() as i64
    }

    /// Returns the instant of this datetime observed at the offset given.
    ///
    /// This never fails since the range of instants is wide enough for
    /// every local datetime at every offset.
    pub const fn to_instant(self, offset: ZoneOffset) -> Instant {
        Instant::new_unchecked(self.to_epoch_second(offset), self.time.nano())
    }

    /// Combines this datetime with an offset.
    #[inline]
    pub const fn at_offset(self, offset: ZoneOffset) -> OffsetDateTime {
        OffsetDateTime::of(self, offset)
    }

    /// Combines this datetime with a time zone.
    ///
    /// When this datetime falls into a gap or an overlap of the time zone,
    /// it is resolved with
    /// [`Disambiguation::Compatible`](crate::tz::Disambiguation::Compatible).
    ///
    /// # Errors
    ///
    /// This returns an error when resolving the datetime in a gap pushes it
    /// out of range.
    pub fn at_zone(self, zone: &TimeZone) -> Result<ZonedDateTime, Error> {
        ZonedDateTime::of_local(self, zone.clone(), None)
    }

    /// Adds time to `date` and carries whole days into it.
    ///
    /// Every amount is applied with the sign given. Each amount is split
    /// into whole days and a remainder first, so that no intermediate
    /// computation can overflow.
    fn plus_with_overflow(
        self,
        date: LocalDate,
        hours: i64,
        minutes: i64,
        seconds: i64,
        nanos: i64,
        sign: i64,
    ) -> Result<LocalDateTime, Error> {
        if (hours | minutes | seconds | nanos) == 0 {
            return Ok(LocalDateTime { date, time: self.time });
        }
        let mut days = nanos / NANOS_PER_DAY
            + seconds / SECONDS_PER_DAY
            + minutes / MINUTES_PER_DAY
            + hours / HOURS_PER_DAY;
        days *= sign;
        let mut rem = nanos % NANOS_PER_DAY
            + (seconds % SECONDS_PER_DAY) * NANOS_PER_SECOND
            + (minutes % MINUTES_PER_DAY) * NANOS_PER_MINUTE
            + (hours % HOURS_PER_DAY) * NANOS_PER_HOUR;
        let current = self.time.to_nano_of_day();
        rem = rem * sign + current;
        days += floor_div(rem, NANOS_PER_DAY);
        let nano_of_day = floor_mod(rem, NANOS_PER_DAY);
        let time = if nano_of_day == current {
            self.time
        } else {
            LocalTime::from_nano_of_day(nano_of_day)
        };
        let date = date.plus_days(days).context(E::FailedAddTime)?;
        Ok(LocalDateTime { date, time })
    }

    fn plus_builtin(
        &self,
        amount: i64,
        unit: ChronoUnit,
    ) -> Result<LocalDateTime, Error> {
        match unit {
            ChronoUnit::Nanos => self.plus_nanos(amount),
            ChronoUnit::Micros => self
                .plus_days(amount / MICROS_PER_DAY)?
                .plus_nanos((amount % MICROS_PER_DAY) * NANOS_PER_MICRO),
            ChronoUnit::Millis => self
                .plus_days(amount / MILLIS_PER_DAY)?
                .plus_nanos((amount % MILLIS_PER_DAY) * NANOS_PER_MILLI),
            ChronoUnit::Seconds => self.plus_seconds(amount),
            ChronoUnit::Minutes => self.plus_minutes(amount),
            ChronoUnit::Hours => self.plus_hours(amount),
            ChronoUnit::HalfDays => self
                .plus_days(amount / 2)?
                .plus_hours((amount % 2) * 12),
            _ => Ok(self.with_date(self.date.plus_builtin(amount, unit)?)),
        }
    }

    fn until_builtin(
        &self,
        end: LocalDateTime,
        unit: ChronoUnit,
    ) -> Result<i64, Error> {
        if unit.is_time_based() {
            let mut days = end.date.to_epoch_day() - self.date.to_epoch_day();
            if days == 0 {
                return self.time.until_builtin(end.time, unit);
            }
            let mut time =
                end.time.to_nano_of_day() - self.time.to_nano_of_day();
            if days > 0 {
                days -= 1;
                time += NANOS_PER_DAY;
            } else {
                days += 1;
                time -= NANOS_PER_DAY;
            }
            let per = unit.nanos().unwrap_or(1);
            let days = arith::mul(days, NANOS_PER_DAY / per, "time units")?;
            return arith::add(days, time / per, "time units");
        }
        let mut end_date = end.date;
        if end_date > self.date && end.time < self.time {
            end_date = end_date.minus_days(1)?;
        } else if end_date < self.date && end.time > self.time {
            end_date = end_date.plus_days(1)?;
        }
        self.date.until_builtin(end_date, unit)
    }
}

impl TemporalAccessor for LocalDateTime {
    fn is_supported(&self, field: &dyn Field) -> bool {
        match field.as_chrono_field() {
            Some(f) => f.is_date_based() || f.is_time_based(),
            None => field.is_supported_by(self),
        }
    }

    fn range(&self, field: &dyn Field) -> Result<ValueRange, Error> {
        field::range_of(self, field, |f| {
            if f.is_time_based() {
                Some(f.range())
            } else {
                self.date.range_builtin(f)
            }
        })
    }

    fn get_long(&self, field: &dyn Field) -> Result<i64, Error> {
        match field.as_chrono_field() {
            Some(f) if f.is_time_based() => self.time.get_builtin(f),
            Some(f) => self.date.get_builtin(f),
            None => field.get_from(self),
        }
    }

    fn query_local_date(&self) -> Option<LocalDate> {
        Some(self.date)
    }

    fn query_local_time(&self) -> Option<LocalTime> {
        Some(self.time)
    }
}

impl Temporal for LocalDateTime {
    fn is_supported_unit(&self, unit: &dyn Unit) -> bool {
        match unit.as_chrono_unit() {
            Some(u) => u != ChronoUnit::Forever,
            None => {
                unit.is_supported_by(&TemporalValue::LocalDateTime(*self))
            }
        }
    }

    fn with(
        &self,
        field: &dyn Field,
        value: i64,
    ) -> Result<LocalDateTime, Error> {
        match field.as_chrono_field() {
            Some(f) if f.is_time_based() => {
                Ok(self.with_time(self.time.with_builtin(f, value)?))
            }
            Some(f) => Ok(self.with_date(self.date.with_builtin(f, value)?)),
            None => field::adjust_with_field(self, field, value),
        }
    }

    fn plus(
        &self,
        amount: i64,
        unit: &dyn Unit,
    ) -> Result<LocalDateTime, Error> {
        match unit.as_chrono_unit() {
            Some(u) => self
                .plus_builtin(amount, u)
                .context(E::FailedAddUnit { unit: u }),
            None => field::add_with_unit(self, amount, unit),
        }
    }

    fn until(
        &self,
        end: &LocalDateTime,
        unit: &dyn Unit,
    ) -> Result<i64, Error> {
        match unit.as_chrono_unit() {
            Some(u) => self
                .until_builtin(*end, u)
                .context(E::FailedUntil { unit: u }),
            None => field::between_with_unit(self, end, unit),
        }
    }

    fn into_temporal_value(self) -> TemporalValue {
        TemporalValue::LocalDateTime(self)
    }

    fn from_temporal_value(
        value: TemporalValue,
    ) -> Result<LocalDateTime, Error> {
        match (value.query_local_date(), value.query_local_time()) {
            (Some(date), Some(time)) => Ok(LocalDateTime { date, time }),
            _ => Err(field::mismatched("LocalDateTime", &value)),
        }
    }
}

impl core::fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        printer::write_datetime(f, self.date, self.time)
    }
}

impl core::str::FromStr for LocalDateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<LocalDateTime, Error> {
        parser::parse_datetime(s)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for LocalDateTime {
    fn arbitrary(g: &mut quickcheck::Gen) -> LocalDateTime {
        let date = LocalDate::arbitrary(g);
        let time = LocalTime::arbitrary(g);
        LocalDateTime { date, time }
    }
}
