use crate::{
    field::{
        ChronoUnit, Field, Temporal, TemporalAccessor, TemporalValue,
        ValueRange,
    },
    util::b,
    Error,
};

/// The built-in fields of date and time.
///
/// Each field is supported by some subset of the temporal types in this
/// crate. For example, [`LocalDate`](crate::civil::LocalDate) supports all
/// date based fields, [`LocalTime`](crate::civil::LocalTime) supports all time
/// based fields and [`Instant`](crate::Instant) supports only
/// `InstantSeconds` and the sub-second fields. Asking a value for a field it
/// doesn't support returns an error for which
/// [`Error::is_unsupported`](crate::Error::is_unsupported) is true.
///
/// # Example
///
/// ```
/// use epochal::{
///     civil::LocalDate,
///     field::{ChronoField, Temporal, TemporalAccessor},
/// };
///
/// let date = LocalDate::of(2008, 2, 29)?;
/// assert_eq!(date.get_long(&ChronoField::DayOfYear)?, 60);
/// assert_eq!(date.get_long(&ChronoField::EpochDay)?, 13_938);
///
/// let date = date.with(&ChronoField::Year, 2007)?;
/// assert_eq!(date, LocalDate::of(2007, 2, 28)?);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum ChronoField {
    /// The nanosecond within the second, `0..=999_999_999`.
    NanoOfSecond,
    /// The nanosecond within the day, `0..=86_399_999_999_999`.
    NanoOfDay,
    /// The microsecond within the second, `0..=999_999`.
    MicroOfSecond,
    /// The microsecond within the day, `0..=86_399_999_999`.
    MicroOfDay,
    /// The millisecond within the second, `0..=999`.
    MilliOfSecond,
    /// The millisecond within the day, `0..=86_399_999`.
    MilliOfDay,
    /// The second within the minute, `0..=59`.
    SecondOfMinute,
    /// The second within the day, `0..=86_399`.
    SecondOfDay,
    /// The minute within the hour, `0..=59`.
    MinuteOfHour,
    /// The minute within the day, `0..=1_439`.
    MinuteOfDay,
    /// The hour within the AM or PM half of the day, `0..=11`.
    HourOfAmPm,
    /// The clock hour within the AM or PM half of the day, `1..=12`.
    ClockHourOfAmPm,
    /// The hour within the day, `0..=23`.
    HourOfDay,
    /// The clock hour within the day, `1..=24`.
    ClockHourOfDay,
    /// The half of the day, `0` for AM and `1` for PM.
    AmPmOfDay,
    /// The day of the week, from `1` for Monday to `7` for Sunday.
    DayOfWeek,
    /// The day of the week within a week aligned to the first day of the
    /// month, `1..=7`.
    AlignedDayOfWeekInMonth,
    /// The day of the week within a week aligned to the first day of the
    /// year, `1..=7`.
    AlignedDayOfWeekInYear,
    /// The day within the month, `1..=28/31`.
    DayOfMonth,
    /// The day within the year, `1..=365/366`.
    DayOfYear,
    /// The number of days since 1970-01-01.
    EpochDay,
    /// The week within the month, where weeks are aligned to the first day
    /// of the month, `1..=4/5`.
    AlignedWeekOfMonth,
    /// The week within the year, where weeks are aligned to the first day
    /// of the year, `1..=53`.
    AlignedWeekOfYear,
    /// The month within the year, `1..=12`.
    MonthOfYear,
    /// The number of months since year zero, `year * 12 + (month - 1)`.
    ProlepticMonth,
    /// The year within the era. Year `0` is year `1` of the BCE era.
    YearOfEra,
    /// The proleptic year, where year `0` precedes year `1`.
    Year,
    /// The era, `0` for BCE and `1` for CE.
    Era,
    /// The number of seconds since 1970-01-01T00:00:00Z.
    InstantSeconds,
    /// The offset from UTC in seconds, `-64_800..=64_800`.
    OffsetSeconds,
}

impl ChronoField {
    /// Returns the name of this field, like `DayOfMonth`.
    pub const fn name(self) -> &'static str {
        use self::ChronoField::*;

        match self {
            NanoOfSecond => "NanoOfSecond",
            NanoOfDay => "NanoOfDay",
            MicroOfSecond => "MicroOfSecond",
            MicroOfDay => "MicroOfDay",
            MilliOfSecond => "MilliOfSecond",
            MilliOfDay => "MilliOfDay",
            SecondOfMinute => "SecondOfMinute",
            SecondOfDay => "SecondOfDay",
            MinuteOfHour => "MinuteOfHour",
            MinuteOfDay => "MinuteOfDay",
            HourOfAmPm => "HourOfAmPm",
            ClockHourOfAmPm => "ClockHourOfAmPm",
            HourOfDay => "HourOfDay",
            ClockHourOfDay => "ClockHourOfDay",
            AmPmOfDay => "AmPmOfDay",
            DayOfWeek => "DayOfWeek",
            AlignedDayOfWeekInMonth => "AlignedDayOfWeekInMonth",
            AlignedDayOfWeekInYear => "AlignedDayOfWeekInYear",
            DayOfMonth => "DayOfMonth",
            DayOfYear => "DayOfYear",
            EpochDay => "EpochDay",
            AlignedWeekOfMonth => "AlignedWeekOfMonth",
            AlignedWeekOfYear => "AlignedWeekOfYear",
            MonthOfYear => "MonthOfYear",
            ProlepticMonth => "ProlepticMonth",
            YearOfEra => "YearOfEra",
            Year => "Year",
            Era => "Era",
            InstantSeconds => "InstantSeconds",
            OffsetSeconds => "OffsetSeconds",
        }
    }

    /// Returns the outer range of valid values for this field.
    ///
    /// Temporal values may refine this range. For example, the day of month
    /// range for a date in February 2007 is `1 - 28`.
    pub const fn range(self) -> ValueRange {
        use self::ChronoField::*;

        const YEAR_MIN: i64 = b::Year::MIN as i64;
        const YEAR_MAX: i64 = b::Year::MAX as i64;

        match self {
            NanoOfSecond => ValueRange::fixed(0, 999_999_999),
            NanoOfDay => ValueRange::fixed(0, 86_400 * 1_000_000_000 - 1),
            MicroOfSecond => ValueRange::fixed(0, 999_999),
            MicroOfDay => ValueRange::fixed(0, 86_400 * 1_000_000 - 1),
            MilliOfSecond => ValueRange::fixed(0, 999),
            MilliOfDay => ValueRange::fixed(0, 86_400 * 1_000 - 1),
            SecondOfMinute => ValueRange::fixed(0, 59),
            SecondOfDay => ValueRange::fixed(0, 86_400 - 1),
            MinuteOfHour => ValueRange::fixed(0, 59),
            MinuteOfDay => ValueRange::fixed(0, 24 * 60 - 1),
            HourOfAmPm => ValueRange::fixed(0, 11),
            ClockHourOfAmPm => ValueRange::fixed(1, 12),
            HourOfDay => ValueRange::fixed(0, 23),
            ClockHourOfDay => ValueRange::fixed(1, 24),
            AmPmOfDay => ValueRange::fixed(0, 1),
            DayOfWeek => ValueRange::fixed(1, 7),
            AlignedDayOfWeekInMonth => ValueRange::fixed(1, 7),
            AlignedDayOfWeekInYear => ValueRange::fixed(1, 7),
            DayOfMonth => ValueRange::variable(1, 28, 31),
            DayOfYear => ValueRange::variable(1, 365, 366),
            EpochDay => ValueRange::fixed(b::EpochDay::MIN, b::EpochDay::MAX),
            AlignedWeekOfMonth => ValueRange::variable(1, 4, 5),
            AlignedWeekOfYear => ValueRange::fixed(1, 53),
            MonthOfYear => ValueRange::fixed(1, 12),
            ProlepticMonth => {
                ValueRange::fixed(YEAR_MIN * 12, YEAR_MAX * 12 + 11)
            }
            YearOfEra => ValueRange::variable(1, YEAR_MAX, YEAR_MAX + 1),
            Year => ValueRange::fixed(YEAR_MIN, YEAR_MAX),
            Era => ValueRange::fixed(0, 1),
            InstantSeconds => ValueRange::fixed(i64::MIN, i64::MAX),
            OffsetSeconds => ValueRange::fixed(
                b::OffsetTotalSeconds::MIN as i64,
                b::OffsetTotalSeconds::MAX as i64,
            ),
        }
    }

    /// Returns the unit that this field is measured in.
    ///
    /// For example, `DayOfMonth` is measured in days.
    pub const fn base_unit(self) -> ChronoUnit {
        use self::ChronoField::*;

        match self {
            NanoOfSecond | NanoOfDay => ChronoUnit::Nanos,
            MicroOfSecond | MicroOfDay => ChronoUnit::Micros,
            MilliOfSecond | MilliOfDay => ChronoUnit::Millis,
            SecondOfMinute | SecondOfDay | InstantSeconds | OffsetSeconds => {
                ChronoUnit::Seconds
            }
            MinuteOfHour | MinuteOfDay => ChronoUnit::Minutes,
            HourOfAmPm | ClockHourOfAmPm | HourOfDay | ClockHourOfDay => {
                ChronoUnit::Hours
            }
            AmPmOfDay => ChronoUnit::HalfDays,
            DayOfWeek
            | AlignedDayOfWeekInMonth
            | AlignedDayOfWeekInYear
            | DayOfMonth
            | DayOfYear
            | EpochDay => ChronoUnit::Days,
            AlignedWeekOfMonth | AlignedWeekOfYear => ChronoUnit::Weeks,
            MonthOfYear | ProlepticMonth => ChronoUnit::Months,
            YearOfEra | Year => ChronoUnit::Years,
            Era => ChronoUnit::Eras,
        }
    }

    /// Returns the unit that this field is bounded by.
    ///
    /// For example, `DayOfMonth` is bounded by months. Fields that are not
    /// bounded return [`ChronoUnit::Forever`].
    pub const fn range_unit(self) -> ChronoUnit {
        use self::ChronoField::*;

        match self {
            NanoOfSecond | MicroOfSecond | MilliOfSecond => {
                ChronoUnit::Seconds
            }
            SecondOfMinute => ChronoUnit::Minutes,
            MinuteOfHour => ChronoUnit::Hours,
            HourOfAmPm | ClockHourOfAmPm => ChronoUnit::HalfDays,
            NanoOfDay | MicroOfDay | MilliOfDay | SecondOfDay | MinuteOfDay
            | HourOfDay | ClockHourOfDay | AmPmOfDay => ChronoUnit::Days,
            DayOfWeek | AlignedDayOfWeekInMonth | AlignedDayOfWeekInYear => {
                ChronoUnit::Weeks
            }
            DayOfMonth | AlignedWeekOfMonth => ChronoUnit::Months,
            DayOfYear | AlignedWeekOfYear | MonthOfYear => ChronoUnit::Years,
            YearOfEra => ChronoUnit::Eras,
            EpochDay | ProlepticMonth | Year | Era | InstantSeconds
            | OffsetSeconds => ChronoUnit::Forever,
        }
    }

    /// Returns true when this field is a component of a date.
    pub const fn is_date_based(self) -> bool {
        let n = self as u8;
        ChronoField::DayOfWeek as u8 <= n && n <= ChronoField::Era as u8
    }

    /// Returns true when this field is a component of a time of day.
    pub const fn is_time_based(self) -> bool {
        (self as u8) < ChronoField::DayOfWeek as u8
    }

    /// Checks that the value given is within the outer range of this field.
    ///
    /// # Errors
    ///
    /// This returns a range error naming this field when the value is out
    /// of range.
    pub fn check_valid_value(self, value: i64) -> Result<i64, Error> {
        self.range().check_valid_value(value, &self)
    }

    /// Checks that the value given is within the outer range of this field
    /// and fits into an `i32`.
    ///
    /// # Errors
    ///
    /// This returns a range error naming this field when the value is out
    /// of range.
    pub fn check_valid_int_value(self, value: i64) -> Result<i32, Error> {
        self.range().check_valid_int_value(value, &self)
    }
}

impl Field for ChronoField {
    fn name(&self) -> &str {
        ChronoField::name(*self)
    }

    fn range(&self) -> ValueRange {
        ChronoField::range(*self)
    }

    fn is_date_based(&self) -> bool {
        ChronoField::is_date_based(*self)
    }

    fn is_time_based(&self) -> bool {
        ChronoField::is_time_based(*self)
    }

    fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool {
        temporal.is_supported(self)
    }

    fn range_refined_by(
        &self,
        temporal: &dyn TemporalAccessor,
    ) -> Result<ValueRange, Error> {
        temporal.range(self)
    }

    fn get_from(&self, temporal: &dyn TemporalAccessor) -> Result<i64, Error> {
        temporal.get_long(self)
    }

    fn adjust_into(
        &self,
        temporal: TemporalValue,
        value: i64,
    ) -> Result<TemporalValue, Error> {
        temporal.with(self, value)
    }

    fn as_chrono_field(&self) -> Option<ChronoField> {
        Some(*self)
    }
}

impl core::fmt::Display for ChronoField {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(ChronoField::NanoOfSecond.is_time_based());
        assert!(ChronoField::AmPmOfDay.is_time_based());
        assert!(!ChronoField::AmPmOfDay.is_date_based());
        assert!(ChronoField::DayOfWeek.is_date_based());
        assert!(ChronoField::Era.is_date_based());
        assert!(!ChronoField::InstantSeconds.is_date_based());
        assert!(!ChronoField::InstantSeconds.is_time_based());
        assert!(!ChronoField::OffsetSeconds.is_time_based());
    }

    #[test]
    fn ranges() {
        assert_eq!(
            ChronoField::ProlepticMonth.range().minimum(),
            -999_999_999 * 12,
        );
        assert_eq!(
            ChronoField::ProlepticMonth.range().maximum(),
            999_999_999 * 12 + 11,
        );
        assert_eq!(ChronoField::YearOfEra.range().maximum(), 1_000_000_000);
        assert_eq!(ChronoField::OffsetSeconds.range().maximum(), 64_800);
        assert!(ChronoField::MonthOfYear.check_valid_value(13).is_err());
        assert_eq!(ChronoField::Era.check_valid_int_value(1).unwrap(), 1);
    }

    #[test]
    fn units() {
        assert_eq!(ChronoField::DayOfMonth.base_unit(), ChronoUnit::Days);
        assert_eq!(ChronoField::DayOfMonth.range_unit(), ChronoUnit::Months);
        assert_eq!(ChronoField::Year.range_unit(), ChronoUnit::Forever);
        assert_eq!(ChronoField::AmPmOfDay.base_unit(), ChronoUnit::HalfDays);
    }
}
