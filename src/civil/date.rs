use crate::{
    civil::{Era, LocalDateTime, LocalTime, Weekday},
    clock::Clock,
    error::{civil::Error as E, ErrorContext},
    field::{
        self, ChronoField, ChronoUnit, Field, Temporal, TemporalAccessor,
        TemporalValue, Unit, ValueRange,
    },
    fmt::{parser, printer},
    tz::{self, AmbiguousOffset, TimeZone},
    util::{
        arith::{self, floor_div, floor_mod},
        b,
        common::{
            days_in_month, days_in_year, is_leap_year, saturate_day_in_month,
        },
        itime::{IDate, IEpochDay},
    },
    Error, Instant, Period, ZonedDateTime,
};

/// A date in the proleptic Gregorian calendar, without a time or a time
/// zone.
///
/// A `LocalDate` is a year, month and day. Years may be negative and there
/// is a year zero: the calendar is proleptic, so the Gregorian leap year
/// rule is extended backwards and forwards indefinitely. The supported
/// years are `-999_999_999..=999_999_999`.
///
/// A date is also a count of days since `1970-01-01`, called its
/// "epoch day". See [`LocalDate::to_epoch_day`] and
/// [`LocalDate::of_epoch_day`].
///
/// # Text format
///
/// Dates print as `YYYY-MM-DD`. Years outside of `0000..=9999` are printed
/// with a sign and at least four digits, like `+10000-01-01` or
/// `-0001-12-31`.
///
/// # Example
///
/// ```
/// use epochal::civil::LocalDate;
///
/// let date = LocalDate::of(2008, 2, 29)?;
/// assert_eq!(date.with_year(2007)?, LocalDate::of(2007, 2, 28)?);
/// assert_eq!(date.plus_days(1)?.to_string(), "2008-03-01");
/// assert_eq!("2008-02-29".parse::<LocalDate>()?, date);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct LocalDate {
    year: i32,
    month: i8,
    day: i8,
}

impl LocalDate {
    /// The minimum supported date, `-999999999-01-01`.
    pub const MIN: LocalDate =
        LocalDate { year: b::Year::MIN, month: 1, day: 1 };

    /// The maximum supported date, `+999999999-12-31`.
    pub const MAX: LocalDate =
        LocalDate { year: b::Year::MAX, month: 12, day: 31 };

    /// The Unix epoch, `1970-01-01`.
    pub const EPOCH: LocalDate = LocalDate { year: 1970, month: 1, day: 1 };

    /// Creates a new date from a year, month and day.
    ///
    /// # Errors
    ///
    /// This returns a range error when any component is out of range. The
    /// day is validated against the length of the month, so February 29
    /// is only valid in leap years.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::civil::LocalDate;
    ///
    /// assert!(LocalDate::of(2024, 2, 29).is_ok());
    /// assert!(LocalDate::of(2023, 2, 29).unwrap_err().is_range());
    /// assert!(LocalDate::of(2023, 13, 1).unwrap_err().is_range());
    /// ```
    pub fn of(year: i32, month: i8, day: i8) -> Result<LocalDate, Error> {
        let year = b::Year::check(year)?;
        let month = b::Month::check(month)?;
        let day = b::Day::check(day)?;
        let max = days_in_month(i64::from(year), month);
        if day > max {
            return Err(Error::range("day", day, 1, max));
        }
        Ok(LocalDate { year, month, day })
    }

    /// Creates a new date from a year and a day of that year.
    ///
    /// # Errors
    ///
    /// This returns a range error when the year is out of range, or when
    /// the day of year exceeds the length of the year.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::civil::LocalDate;
    ///
    /// assert_eq!(
    ///     LocalDate::of_year_day(2024, 60)?,
    ///     LocalDate::of(2024, 2, 29)?,
    /// );
    /// assert!(LocalDate::of_year_day(2023, 366).unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of_year_day(
        year: i32,
        day_of_year: i16,
    ) -> Result<LocalDate, Error> {
        let year = b::Year::check(year)?;
        let day_of_year = b::DayOfYear::check(day_of_year)?;
        let max = days_in_year(i64::from(year));
        if day_of_year > max {
            return Err(Error::range("day-of-year", day_of_year, 1, max));
        }
        let first = IDate { year, month: 1, day: 1 }.to_epoch_day();
        let epoch_day = first.epoch_day + i64::from(day_of_year) - 1;
        Ok(LocalDate::from_idate(IEpochDay { epoch_day }.to_date()))
    }

    /// Creates a new date from a count of days since `1970-01-01`.
    ///
    /// # Errors
    ///
    /// This returns a range error when the epoch day is outside the range
    /// of supported dates.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::civil::LocalDate;
    ///
    /// assert_eq!(LocalDate::of_epoch_day(0)?, LocalDate::EPOCH);
    /// assert_eq!(
    ///     LocalDate::of_epoch_day(-40_587)?,
    ///     LocalDate::of(1858, 11, 17)?,
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of_epoch_day(epoch_day: i64) -> Result<LocalDate, Error> {
        let epoch_day = b::EpochDay::check(epoch_day)?;
        Ok(LocalDate::from_idate(IEpochDay { epoch_day }.to_date()))
    }

    /// Returns the date of an instant in the time zone given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the local date is out of range,
    /// which can only happen at the edges of the range of instants.
    pub fn of_instant(
        instant: Instant,
        zone: &TimeZone,
    ) -> Result<LocalDate, Error> {
        Ok(LocalDateTime::of_instant(instant, zone)?.date())
    }

    /// Returns the current date according to the clock given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the clock's instant is at the edge
    /// of the range of instants, where the local date is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::{
    ///     civil::LocalDate, clock::FixedClock, tz::TimeZone, Instant,
    /// };
    ///
    /// let instant = Instant::of_epoch_second(86_399)?;
    /// let clock = FixedClock::new(instant, TimeZone::UTC);
    /// assert_eq!(LocalDate::now(&clock)?, LocalDate::of(1970, 1, 1)?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn now(clock: &dyn Clock) -> Result<LocalDate, Error> {
        LocalDate::of_instant(clock.instant(), &clock.zone())
    }

    /// Creates a date without checking that it is valid.
    pub(crate) const fn from_idate(idate: IDate) -> LocalDate {
        LocalDate { year: idate.year, month: idate.month, day: idate.day }
    }

    /// Creates a date, clamping the day to the last valid day of the month.
    fn resolve_previous_valid(year: i32, month: i8, day: i8) -> LocalDate {
        let day = saturate_day_in_month(i64::from(year), month, day);
        LocalDate { year, month, day }
    }

    pub(crate) const fn to_idate(self) -> IDate {
        IDate { year: self.year, month: self.month, day: self.day }
    }

    /// Returns the year of this date.
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month of this date, from `1` to `12`.
    #[inline]
    pub const fn month(self) -> i8 {
        self.month
    }

    /// Returns the day of the month of this date, starting at `1`.
    #[inline]
    pub const fn day(self) -> i8 {
        self.day
    }

    /// Returns the day of the year of this date, starting at `1` for
    /// January 1.
    #[inline]
    pub const fn day_of_year(self) -> i16 {
        self.to_idate().day_of_year()
    }

    /// Returns the weekday of this date.
    pub const fn day_of_week(self) -> Weekday {
        let weekday = self.to_idate().to_epoch_day().weekday();
        Weekday::from_index(weekday as i64 - 1)
    }

    /// Returns the era of this date.
    #[inline]
    pub const fn era(self) -> Era {
        Era::of_year(self.year)
    }

    /// Returns the year of this date within its era.
    ///
    /// For dates in [`Era::Bce`], this is `1 - year`.
    #[inline]
    pub const fn year_of_era(self) -> i32 {
        if self.year >= 1 {
            self.year
        } else {
            1 - self.year
        }
    }

    /// Returns true when the year of this date is a leap year.
    #[inline]
    pub const fn is_leap_year(self) -> bool {
        is_leap_year(self.year as i64)
    }

    /// Returns the number of days in the month of this date.
    #[inline]
    pub const fn length_of_month(self) -> i8 {
        days_in_month(self.year as i64, self.month)
    }

    /// Returns the number of days in the year of this date.
    #[inline]
    pub const fn length_of_year(self) -> i16 {
        days_in_year(self.year as i64)
    }

    /// Returns the number of days since `1970-01-01`.
    #[inline]
    pub const fn to_epoch_day(self) -> i64 {
        self.to_idate().to_epoch_day().epoch_day
    }

    /// Returns the number of months since year zero.
    #[inline]
    pub const fn proleptic_month(self) -> i64 {
        self.year as i64 * 12 + self.month as i64 - 1
    }

    /// Returns a copy of this date with the year given.
    ///
    /// When the day of month is invalid in the new year (February 29 in a
    /// non-leap year), it is clamped to the last day of the month.
    ///
    /// # Errors
    ///
    /// This returns a range error when the year is out of range.
    pub fn with_year(self, year: i32) -> Result<LocalDate, Error> {
        if year == self.year {
            return Ok(self);
        }
        let year = ChronoField::Year.check_valid_int_value(i64::from(year))?;
        Ok(LocalDate::resolve_previous_valid(year, self.month, self.day))
    }

    /// Returns a copy of this date with the month given.
    ///
    /// When the day of month is invalid in the new month, it is clamped to
    /// the last day of the month.
    ///
    /// # Errors
    ///
    /// This returns a range error when the month is not in `1..=12`.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::civil::LocalDate;
    ///
    /// let date = LocalDate::of(2023, 1, 31)?;
    /// assert_eq!(date.with_month(4)?, LocalDate::of(2023, 4, 30)?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn with_month(self, month: i8) -> Result<LocalDate, Error> {
        if month == self.month {
            return Ok(self);
        }
        let month = ChronoField::MonthOfYear
            .check_valid_int_value(i64::from(month))? as i8;
        Ok(LocalDate::resolve_previous_valid(self.year, month, self.day))
    }

    /// Returns a copy of this date with the day of month given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the day is not valid for the month.
    pub fn with_day_of_month(self, day: i8) -> Result<LocalDate, Error> {
        if day == self.day {
            return Ok(self);
        }
        LocalDate::of(self.year, self.month, day)
    }

    /// Returns a copy of this date with the day of year given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the day is not valid for the year.
    pub fn with_day_of_year(
        self,
        day_of_year: i16,
    ) -> Result<LocalDate, Error> {
        if day_of_year == self.day_of_year() {
            return Ok(self);
        }
        LocalDate::of_year_day(self.year, day_of_year)
    }

    /// Returns a copy of this date with a number of days added.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_days(self, days: i64) -> Result<LocalDate, Error> {
        if days == 0 {
            return Ok(self);
        }
        let epoch_day = arith::add(self.to_epoch_day(), days, "epoch day")?;
        LocalDate::of_epoch_day(epoch_day).context(E::FailedAddDays)
    }

    /// Returns a copy of this date with a number of weeks added.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_weeks(self, weeks: i64) -> Result<LocalDate, Error> {
        let days = arith::mul(weeks, 7, "days").context(E::FailedAddWeeks)?;
        self.plus_days(days)
    }

    /// Returns a copy of this date with a number of months added.
    ///
    /// When the day of month is invalid in the resulting month, it is
    /// clamped to the last day of the month.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::civil::LocalDate;
    ///
    /// let date = LocalDate::of(2024, 3, 31)?;
    /// assert_eq!(date.plus_months(-1)?, LocalDate::of(2024, 2, 29)?);
    /// assert_eq!(date.plus_months(13)?, LocalDate::of(2025, 4, 30)?);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn plus_months(self, months: i64) -> Result<LocalDate, Error> {
        if months == 0 {
            return Ok(self);
        }
        let total = arith::add(self.proleptic_month(), months, "months")
            .context(E::FailedAddMonths)?;
        let year = ChronoField::Year
            .check_valid_int_value(floor_div(total, 12))
            .context(E::FailedAddMonths)?;
        let month = floor_mod(total, 12) as i8 + 1;
        Ok(LocalDate::resolve_previous_valid(year, month, self.day))
    }

    /// Returns a copy of this date with a number of years added.
    ///
    /// When the date is February 29 and the resulting year is not a leap
    /// year, the day is clamped to February 28.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_years(self, years: i64) -> Result<LocalDate, Error> {
        if years == 0 {
            return Ok(self);
        }
        let year = arith::add(i64::from(self.year), years, "year")
            .and_then(|year| ChronoField::Year.check_valid_int_value(year))
            .context(E::FailedAddYears)?;
        Ok(LocalDate::resolve_previous_valid(year, self.month, self.day))
    }

    /// Returns a copy of this date with a number of days subtracted.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_days(self, days: i64) -> Result<LocalDate, Error> {
        self.minus(days, &ChronoUnit::Days)
    }

    /// Returns a copy of this date with a number of weeks subtracted.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_weeks(self, weeks: i64) -> Result<LocalDate, Error> {
        self.minus(weeks, &ChronoUnit::Weeks)
    }

    /// Returns a copy of this date with a number of months subtracted.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_months(self, months: i64) -> Result<LocalDate, Error> {
        self.minus(months, &ChronoUnit::Months)
    }

    /// Returns a copy of this date with a number of years subtracted.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_years(self, years: i64) -> Result<LocalDate, Error> {
        self.minus(years, &ChronoUnit::Years)
    }

    /// Returns the period from this date until `end`.
    ///
    /// The months are computed first. When the day of month of `end` is
    /// before the day of month of this date, one fewer month is counted
    /// and the remainder is expressed in days.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when a component does not fit in an
    /// `i32`.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::{civil::LocalDate, Period};
    ///
    /// let start = LocalDate::of(2024, 1, 15)?;
    /// let end = LocalDate::of(2024, 3, 14)?;
    /// assert_eq!(start.until_period(end)?, Period::of(0, 1, 28));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn until_period(self, end: LocalDate) -> Result<Period, Error> {
        let mut total_months = end.proleptic_month() - self.proleptic_month();
        let mut days = i64::from(end.day) - i64::from(self.day);
        if total_months > 0 && days < 0 {
            total_months -= 1;
            let date = self.plus_months(total_months)?;
            days = end.to_epoch_day() - date.to_epoch_day();
        } else if total_months < 0 && days > 0 {
            total_months += 1;
            days -= i64::from(end.length_of_month());
        }
        let years = arith::to_i32(total_months / 12, "period years")?;
        // OK because the remainder is always in `-11..=11`.
        let months = (total_months % 12) as i32;
        let days = arith::to_i32(days, "period days")?;
        Ok(Period::of(years, months, days))
    }

    /// Combines this date with a time to create a local datetime.
    #[inline]
    pub const fn at_time(self, time: LocalTime) -> LocalDateTime {
        LocalDateTime::from_parts(self, time)
    }

    /// Returns a local datetime at midnight at the start of this date.
    #[inline]
    pub const fn at_start_of_day(self) -> LocalDateTime {
        LocalDateTime::from_parts(self, LocalTime::MIDNIGHT)
    }

    /// Returns the earliest zoned datetime on this date in the zone given.
    ///
    /// This is usually midnight. When midnight falls into a gap, it is the
    /// local time at which the gap ends, wherever the gap started. When
    /// midnight falls into an overlap, the earlier offset is used.
    ///
    /// # Errors
    ///
    /// This returns a range error when the result is out of range.
    pub fn at_start_of_day_in(
        self,
        zone: &TimeZone,
    ) -> Result<ZonedDateTime, Error> {
        let midnight = self.at_start_of_day();
        let start = match zone.offset_for_local(midnight) {
            AmbiguousOffset::Gap { before, after } => {
                tz::gap_end(midnight, zone, before, after)?
            }
            _ => midnight,
        };
        ZonedDateTime::of_local(start, zone.clone(), None)
    }

    fn months_until(self, end: LocalDate) -> i64 {
        let packed1 = self.proleptic_month() * 32 + i64::from(self.day);
        let packed2 = end.proleptic_month() * 32 + i64::from(end.day);
        (packed2 - packed1) / 32
    }

    pub(crate) fn range_builtin(
        &self,
        field: ChronoField,
    ) -> Option<ValueRange> {
        if !field.is_date_based() {
            return None;
        }
        let range = match field {
            ChronoField::DayOfMonth => {
                ValueRange::fixed(1, i64::from(self.length_of_month()))
            }
            ChronoField::DayOfYear => {
                ValueRange::fixed(1, i64::from(self.length_of_year()))
            }
            ChronoField::AlignedWeekOfMonth => {
                let short = self.month == 2 && !self.is_leap_year();
                ValueRange::fixed(1, if short { 4 } else { 5 })
            }
            ChronoField::YearOfEra => {
                let max = i64::from(b::Year::MAX);
                let max = if self.year <= 0 { max + 1 } else { max };
                ValueRange::fixed(1, max)
            }
            _ => field.range(),
        };
        Some(range)
    }

    pub(crate) fn get_builtin(
        &self,
        field: ChronoField,
    ) -> Result<i64, Error> {
        let value = match field {
            ChronoField::DayOfWeek => i64::from(self.day_of_week().value()),
            ChronoField::AlignedDayOfWeekInMonth => {
                i64::from((self.day - 1) % 7 + 1)
            }
            ChronoField::AlignedDayOfWeekInYear => {
                i64::from((self.day_of_year() - 1) % 7 + 1)
            }
            ChronoField::DayOfMonth => i64::from(self.day),
            ChronoField::DayOfYear => i64::from(self.day_of_year()),
            ChronoField::EpochDay => self.to_epoch_day(),
            ChronoField::AlignedWeekOfMonth => {
                i64::from((self.day - 1) / 7 + 1)
            }
            ChronoField::AlignedWeekOfYear => {
                i64::from((self.day_of_year() - 1) / 7 + 1)
            }
            ChronoField::MonthOfYear => i64::from(self.month),
            ChronoField::ProlepticMonth => self.proleptic_month(),
            ChronoField::YearOfEra => i64::from(self.year_of_era()),
            ChronoField::Year => i64::from(self.year),
            ChronoField::Era => i64::from(self.era().value()),
            _ => return Err(field::unsupported_field(field)),
        };
        Ok(value)
    }

    pub(crate) fn with_builtin(
        &self,
        field: ChronoField,
        value: i64,
    ) -> Result<LocalDate, Error> {
        if !field.is_date_based() {
            return Err(field::unsupported_field(field));
        }
        let value = field.check_valid_value(value)?;
        match field {
            ChronoField::DayOfWeek
            | ChronoField::AlignedDayOfWeekInMonth
            | ChronoField::AlignedDayOfWeekInYear => {
                self.plus_days(value - self.get_builtin(field)?)
            }
            // OK because the outer ranges of these fields fit their types.
            ChronoField::DayOfMonth => self.with_day_of_month(value as i8),
            ChronoField::DayOfYear => self.with_day_of_year(value as i16),
            ChronoField::EpochDay => LocalDate::of_epoch_day(value),
            ChronoField::AlignedWeekOfMonth
            | ChronoField::AlignedWeekOfYear => {
                self.plus_weeks(value - self.get_builtin(field)?)
            }
            ChronoField::MonthOfYear => self.with_month(value as i8),
            ChronoField::ProlepticMonth => {
                self.plus_months(value - self.proleptic_month())
            }
            ChronoField::YearOfEra => {
                let year = if self.year >= 1 { value } else { 1 - value };
                self.with_year(arith::to_i32(year, "year")?)
            }
            ChronoField::Year => self.with_year(value as i32),
            ChronoField::Era => {
                if i64::from(self.era().value()) == value {
                    Ok(*self)
                } else {
                    self.with_year(1 - self.year)
                }
            }
            _ => Err(field::unsupported_field(field)),
        }
    }

    pub(crate) fn plus_builtin(
        &self,
        amount: i64,
        unit: ChronoUnit,
    ) -> Result<LocalDate, Error> {
        let years = |per: i64| -> Result<LocalDate, Error> {
            self.plus_years(arith::mul(amount, per, "years")?)
        };
        match unit {
            ChronoUnit::Days => self.plus_days(amount),
            ChronoUnit::Weeks => self.plus_weeks(amount),
            ChronoUnit::Months => self.plus_months(amount),
            ChronoUnit::Years => self.plus_years(amount),
            ChronoUnit::Decades => years(10),
            ChronoUnit::Centuries => years(100),
            ChronoUnit::Millennia => years(1_000),
            ChronoUnit::Eras => {
                let era = i64::from(self.era().value());
                let era = arith::add(era, amount, "era")?;
                self.with_builtin(ChronoField::Era, era)
            }
            _ => Err(field::unsupported_unit(unit)),
        }
    }

    pub(crate) fn until_builtin(
        &self,
        end: LocalDate,
        unit: ChronoUnit,
    ) -> Result<i64, Error> {
        let value = match unit {
            ChronoUnit::Days => end.to_epoch_day() - self.to_epoch_day(),
            ChronoUnit::Weeks => {
                (end.to_epoch_day() - self.to_epoch_day()) / 7
            }
            ChronoUnit::Months => self.months_until(end),
            ChronoUnit::Years => self.months_until(end) / 12,
            ChronoUnit::Decades => self.months_until(end) / 120,
            ChronoUnit::Centuries => self.months_until(end) / 1_200,
            ChronoUnit::Millennia => self.months_until(end) / 12_000,
            ChronoUnit::Eras => {
                i64::from(end.era().value()) - i64::from(self.era().value())
            }
            _ => return Err(field::unsupported_unit(unit)),
        };
        Ok(value)
    }
}

impl TemporalAccessor for LocalDate {
    fn is_supported(&self, field: &dyn Field) -> bool {
        match field.as_chrono_field() {
            Some(f) => f.is_date_based(),
            None => field.is_supported_by(self),
        }
    }

    fn range(&self, field: &dyn Field) -> Result<ValueRange, Error> {
        field::range_of(self, field, |f| self.range_builtin(f))
    }

    fn get_long(&self, field: &dyn Field) -> Result<i64, Error> {
        match field.as_chrono_field() {
            Some(f) => self.get_builtin(f),
            None => field.get_from(self),
        }
    }

    fn query_local_date(&self) -> Option<LocalDate> {
        Some(*self)
    }
}

impl Temporal for LocalDate {
    fn is_supported_unit(&self, unit: &dyn Unit) -> bool {
        match unit.as_chrono_unit() {
            Some(u) => u.is_date_based(),
            None => unit.is_supported_by(&TemporalValue::LocalDate(*self)),
        }
    }

    fn with(&self, field: &dyn Field, value: i64) -> Result<LocalDate, Error> {
        match field.as_chrono_field() {
            Some(f) => self.with_builtin(f, value),
            None => field::adjust_with_field(self, field, value),
        }
    }

    fn plus(&self, amount: i64, unit: &dyn Unit) -> Result<LocalDate, Error> {
        match unit.as_chrono_unit() {
            Some(u) => self
                .plus_builtin(amount, u)
                .context(E::FailedAddUnit { unit: u }),
            None => field::add_with_unit(self, amount, unit),
        }
    }

    fn until(&self, end: &LocalDate, unit: &dyn Unit) -> Result<i64, Error> {
        match unit.as_chrono_unit() {
            Some(u) => self
                .until_builtin(*end, u)
                .context(E::FailedUntil { unit: u }),
            None => field::between_with_unit(self, end, unit),
        }
    }

    fn into_temporal_value(self) -> TemporalValue {
        TemporalValue::LocalDate(self)
    }

    fn from_temporal_value(value: TemporalValue) -> Result<LocalDate, Error> {
        value
            .query_local_date()
            .ok_or_else(|| field::mismatched("LocalDate", &value))
    }
}

impl Default for LocalDate {
    fn default() -> LocalDate {
        LocalDate::EPOCH
    }
}

impl core::fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for LocalDate {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        printer::write_date(f, self.year, self.month, self.day)
    }
}

impl core::str::FromStr for LocalDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<LocalDate, Error> {
        parser::parse_date(s)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for LocalDate {
    fn arbitrary(g: &mut quickcheck::Gen) -> LocalDate {
        // Most interesting dates are near the present, but the extremes
        // are exercised too.
        let epoch_day = if bool::arbitrary(g) {
            i64::from(i32::arbitrary(g) % 1_000_000)
        } else {
            let span = b::EpochDay::MAX - b::EpochDay::MIN + 1;
            floor_mod(i64::arbitrary(g), span) + b::EpochDay::MIN
        };
        LocalDate::from_idate(IEpochDay { epoch_day }.to_date())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn date(year: i32, month: i8, day: i8) -> LocalDate {
        LocalDate::of(year, month, day).unwrap()
    }

    #[test]
    fn validation() {
        assert!(LocalDate::of(2023, 2, 29).unwrap_err().is_range());
        assert!(LocalDate::of(2023, 4, 31).unwrap_err().is_range());
        assert!(LocalDate::of(2023, 0, 1).unwrap_err().is_range());
        assert!(LocalDate::of(1_000_000_000, 1, 1).unwrap_err().is_range());
        assert!(LocalDate::of_epoch_day(b::EpochDay::MAX + 1)
            .unwrap_err()
            .is_range());
        assert_eq!(
            LocalDate::of_epoch_day(b::EpochDay::MIN).unwrap(),
            LocalDate::MIN,
        );
    }

    #[test]
    fn accessors() {
        let d = date(2024, 12, 31);
        assert_eq!(d.day_of_year(), 366);
        assert_eq!(d.day_of_week(), Weekday::Tuesday);
        assert_eq!(d.length_of_month(), 31);
        assert_eq!(d.length_of_year(), 366);
        assert_eq!(d.era(), Era::Ce);
        let d = date(0, 6, 1);
        assert_eq!(d.era(), Era::Bce);
        assert_eq!(d.year_of_era(), 1);
        assert_eq!(date(-1, 1, 1).year_of_era(), 2);
    }

    #[test]
    fn with_year_clamps_day() {
        assert_eq!(
            date(2008, 2, 29).with_year(2007).unwrap(),
            date(2007, 2, 28),
        );
        assert_eq!(
            date(2008, 2, 29).with_year(2012).unwrap(),
            date(2012, 2, 29),
        );
        assert!(date(2008, 2, 29)
            .with_year(1_000_000_000)
            .unwrap_err()
            .is_range());
    }

    #[test]
    fn plus_months_and_years() {
        assert_eq!(
            date(2007, 1, 31).plus_months(1).unwrap(),
            date(2007, 2, 28),
        );
        assert_eq!(
            date(2007, 3, 31).plus_months(-1).unwrap(),
            date(2007, 2, 28),
        );
        assert_eq!(
            date(2008, 2, 29).plus_years(1).unwrap(),
            date(2009, 2, 28),
        );
        assert_eq!(date(1, 1, 1).plus_years(-1).unwrap(), date(0, 1, 1));
        assert!(LocalDate::MAX.plus_days(1).unwrap_err().is_range());
        assert!(LocalDate::MAX
            .plus_months(i64::MAX)
            .unwrap_err()
            .is_overflow());
        assert!(LocalDate::MAX.plus_years(1).unwrap_err().is_range());
        assert_eq!(
            LocalDate::MIN.minus_days(-1).unwrap(),
            date(-999_999_999, 1, 2),
        );
        assert_eq!(
            date(2024, 1, 1).plus(2, &ChronoUnit::Centuries).unwrap(),
            date(2224, 1, 1),
        );
        assert_eq!(
            date(2024, 5, 6).plus(-1, &ChronoUnit::Eras).unwrap(),
            date(-2023, 5, 6),
        );
        assert!(date(2024, 1, 1)
            .plus(1, &ChronoUnit::Hours)
            .unwrap_err()
            .is_unsupported());
        assert!(date(2024, 1, 1)
            .plus(1, &ChronoUnit::Forever)
            .unwrap_err()
            .is_unsupported());
    }

    #[test]
    fn until_units() {
        let start = date(2024, 1, 31);
        let end = date(2024, 2, 29);
        assert_eq!(start.until(&end, &ChronoUnit::Days).unwrap(), 29);
        assert_eq!(start.until(&end, &ChronoUnit::Weeks).unwrap(), 4);
        assert_eq!(start.until(&end, &ChronoUnit::Months).unwrap(), 0);
        assert_eq!(end.until(&start, &ChronoUnit::Months).unwrap(), 0);
        let years = |start: LocalDate, end: LocalDate| {
            start.until(&end, &ChronoUnit::Years).unwrap()
        };
        assert_eq!(years(date(2024, 1, 15), date(2025, 1, 15)), 1);
        assert_eq!(years(date(2024, 1, 15), date(2025, 1, 14)), 0);
        assert_eq!(
            LocalDate::MIN.until(&LocalDate::MAX, &ChronoUnit::Eras).unwrap(),
            1,
        );
        assert!(start
            .until(&end, &ChronoUnit::Seconds)
            .unwrap_err()
            .is_unsupported());
    }

    #[test]
    fn until_period() {
        assert_eq!(
            date(2024, 1, 31).until_period(date(2024, 3, 1)).unwrap(),
            Period::of(0, 1, 1),
        );
        assert_eq!(
            date(2024, 3, 1).until_period(date(2024, 1, 31)).unwrap(),
            Period::of(0, -1, -1),
        );
        assert_eq!(
            date(2000, 5, 5).until_period(date(2024, 5, 5)).unwrap(),
            Period::of(24, 0, 0),
        );
        assert_eq!(
            date(2024, 5, 5).until_period(date(2024, 5, 5)).unwrap(),
            Period::ZERO,
        );
    }

    #[test]
    fn fields() {
        let d = date(2024, 2, 29);
        assert_eq!(d.get_long(&ChronoField::AlignedWeekOfMonth).unwrap(), 5);
        assert_eq!(
            d.get_long(&ChronoField::AlignedDayOfWeekInMonth).unwrap(),
            1,
        );
        assert_eq!(
            d.get_long(&ChronoField::ProlepticMonth).unwrap(),
            2024 * 12 + 1,
        );
        assert_eq!(d.get(&ChronoField::DayOfWeek).unwrap(), 4);
        assert!(d.get(&ChronoField::EpochDay).unwrap_err().is_unsupported());
        assert_eq!(d.get_long(&ChronoField::EpochDay).unwrap(), 19_782);
        assert_eq!(
            d.range(&ChronoField::AlignedWeekOfMonth).unwrap(),
            ValueRange::fixed(1, 5),
        );
        assert_eq!(
            date(2023, 2, 1).range(&ChronoField::AlignedWeekOfMonth).unwrap(),
            ValueRange::fixed(1, 4),
        );
        assert!(d
            .range(&ChronoField::HourOfDay)
            .unwrap_err()
            .is_unsupported());
        assert!(d
            .get_long(&ChronoField::HourOfDay)
            .unwrap_err()
            .is_unsupported());

        assert_eq!(
            d.with(&ChronoField::DayOfWeek, 1).unwrap(),
            date(2024, 2, 26),
        );
        assert_eq!(
            d.with(&ChronoField::MonthOfYear, 4).unwrap(),
            date(2024, 4, 29),
        );
        assert_eq!(
            d.with(&ChronoField::Year, 2023).unwrap(),
            date(2023, 2, 28),
        );
        assert_eq!(
            d.with(&ChronoField::YearOfEra, 5).unwrap(),
            date(5, 2, 28),
        );
        assert_eq!(d.with(&ChronoField::Era, 0).unwrap(), date(-2023, 2, 28));
        assert_eq!(
            d.with(&ChronoField::ProlepticMonth, 0).unwrap(),
            date(0, 1, 29),
        );
        assert_eq!(
            d.with(&ChronoField::AlignedWeekOfYear, 1).unwrap(),
            date(2024, 1, 4),
        );
        assert!(d.with(&ChronoField::DayOfMonth, 30).unwrap_err().is_range());
        assert!(d.with(&ChronoField::DayOfMonth, 32).unwrap_err().is_range());
        assert!(d
            .with(&ChronoField::HourOfDay, 1)
            .unwrap_err()
            .is_unsupported());
    }

    #[test]
    fn text() {
        let cases = [
            (date(2024, 2, 29), "2024-02-29"),
            (date(0, 1, 1), "0000-01-01"),
            (date(-5, 12, 31), "-0005-12-31"),
            (date(12_345, 6, 7), "+12345-06-07"),
            (LocalDate::MIN, "-999999999-01-01"),
            (LocalDate::MAX, "+999999999-12-31"),
        ];
        for (d, expected) in cases {
            assert_eq!(d.to_string(), expected);
            assert_eq!(expected.parse::<LocalDate>().unwrap(), d);
        }
        assert!("12345-06-07".parse::<LocalDate>().unwrap_err().is_parse());
        let err = "2023-02-29".parse::<LocalDate>().unwrap_err();
        assert!(err.is_parse());
        assert!(err.is_range());
        assert!("+1000000000-01-01"
            .parse::<LocalDate>()
            .unwrap_err()
            .is_range());
    }

    quickcheck::quickcheck! {
        fn prop_epoch_day_roundtrip(d: LocalDate) -> bool {
            LocalDate::of_epoch_day(d.to_epoch_day()).unwrap() == d
        }

        fn prop_text_roundtrip(d: LocalDate) -> bool {
            d.to_string().parse::<LocalDate>().unwrap() == d
        }

        fn prop_until_plus_never_overshoots(
            d1: LocalDate,
            d2: LocalDate
        ) -> bool {
            [ChronoUnit::Days, ChronoUnit::Months, ChronoUnit::Years]
                .into_iter()
                .all(|unit| {
                    let amount = d1.until(&d2, &unit).unwrap();
                    let reached = d1.plus(amount, &unit).unwrap();
                    if d1 <= d2 { reached <= d2 } else { reached >= d2 }
                })
        }

        fn prop_period_between_reaches_end(
            d1: LocalDate,
            d2: LocalDate
        ) -> bool {
            // Periods only fit into an `i32` for dates that are close.
            if d1 > d2 || d2.year() - d1.year() > 100_000 {
                return true;
            }
            let period = d1.until_period(d2).unwrap();
            let reached = d1
                .plus_months(period.to_total_months())
                .and_then(|d| d.plus_days(i64::from(period.days())))
                .unwrap();
            reached == d2
        }
    }
}
