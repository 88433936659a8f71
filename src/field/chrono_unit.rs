use crate::{
    field::{Temporal, TemporalValue, Unit},
    util::arith::{
        NANOS_PER_HOUR, NANOS_PER_MICRO, NANOS_PER_MILLI, NANOS_PER_MINUTE,
        NANOS_PER_SECOND,
    },
    Duration, Error,
};

/// The average length of a year in the proleptic Gregorian calendar, in
/// seconds. This is `365.2425` days.
const SECONDS_PER_AVERAGE_YEAR: i64 = 31_556_952;

/// The built-in units of time.
///
/// Units are ordered from smallest to biggest, so `ChronoUnit::Years >
/// ChronoUnit::Days`.
///
/// Each unit has a duration. For units of a day or bigger, the duration is
/// an estimate since days can vary in length (at least in a time zone) and
/// months and years vary in their number of days.
///
/// # Example
///
/// ```
/// use epochal::{civil::LocalDate, field::{ChronoUnit, Temporal}};
///
/// let date = LocalDate::of(2024, 1, 31)?;
/// assert_eq!(
///     date.plus(1, &ChronoUnit::Months)?,
///     LocalDate::of(2024, 2, 29)?,
/// );
/// assert_eq!(
///     date.plus(2, &ChronoUnit::Decades)?,
///     LocalDate::of(2044, 1, 31)?,
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum ChronoUnit {
    /// A nanosecond, the smallest unit supported.
    Nanos,
    /// A microsecond, which is 1,000 nanoseconds.
    Micros,
    /// A millisecond, which is 1,000 microseconds.
    Millis,
    /// A second. Leap seconds are not modeled.
    Seconds,
    /// A minute, which is 60 seconds.
    Minutes,
    /// An hour, which is 60 minutes.
    Hours,
    /// Half of a day, which is 12 hours. This is used for AM/PM.
    HalfDays,
    /// A day. Its duration is an estimate of 24 hours.
    Days,
    /// A week, which is 7 days.
    Weeks,
    /// A month. Its duration is an estimate of one twelfth of an average
    /// year.
    Months,
    /// A year. Its duration is an estimate of 365.2425 days.
    Years,
    /// A decade, which is 10 years.
    Decades,
    /// A century, which is 100 years.
    Centuries,
    /// A millennium, which is 1,000 years.
    Millennia,
    /// An era. In the ISO calendar, there are two eras. Its duration is
    /// an estimate of one billion years.
    Eras,
    /// An artificial unit representing the concept of forever. No temporal
    /// value supports it.
    Forever,
}

impl ChronoUnit {
    /// Returns the name of this unit, like `Months` or `HalfDays`.
    pub const fn name(self) -> &'static str {
        use self::ChronoUnit::*;

        match self {
            Nanos => "Nanos",
            Micros => "Micros",
            Millis => "Millis",
            Seconds => "Seconds",
            Minutes => "Minutes",
            Hours => "Hours",
            HalfDays => "HalfDays",
            Days => "Days",
            Weeks => "Weeks",
            Months => "Months",
            Years => "Years",
            Decades => "Decades",
            Centuries => "Centuries",
            Millennia => "Millennia",
            Eras => "Eras",
            Forever => "Forever",
        }
    }

    /// Returns the duration of this unit.
    ///
    /// For units of a day or bigger, this is an estimate.
    pub const fn duration(self) -> Duration {
        use self::ChronoUnit::*;

        match self {
            Nanos => Duration::of_nanos_const(1),
            Micros => Duration::of_nanos_const(NANOS_PER_MICRO),
            Millis => Duration::of_nanos_const(NANOS_PER_MILLI),
            Seconds => Duration::of_nanos_const(NANOS_PER_SECOND),
            Minutes => Duration::of_nanos_const(NANOS_PER_MINUTE),
            Hours => Duration::of_nanos_const(NANOS_PER_HOUR),
            HalfDays => Duration::of_seconds_const(43_200, 0),
            Days => Duration::of_seconds_const(86_400, 0),
            Weeks => Duration::of_seconds_const(7 * 86_400, 0),
            Months => {
                Duration::of_seconds_const(SECONDS_PER_AVERAGE_YEAR / 12, 0)
            }
            Years => Duration::of_seconds_const(SECONDS_PER_AVERAGE_YEAR, 0),
            Decades => {
                Duration::of_seconds_const(SECONDS_PER_AVERAGE_YEAR * 10, 0)
            }
            Centuries => {
                Duration::of_seconds_const(SECONDS_PER_AVERAGE_YEAR * 100, 0)
            }
            Millennia => Duration::of_seconds_const(
                SECONDS_PER_AVERAGE_YEAR * 1_000,
                0,
            ),
            Eras => Duration::of_seconds_const(
                SECONDS_PER_AVERAGE_YEAR * 1_000_000_000,
                0,
            ),
            Forever => Duration::of_seconds_const(i64::MAX, 999_999_999),
        }
    }

    /// Returns the number of nanoseconds in this unit when it is a time
    /// based unit.
    pub(crate) const fn nanos(self) -> Option<i64> {
        use self::ChronoUnit::*;

        match self {
            Nanos => Some(1),
            Micros => Some(NANOS_PER_MICRO),
            Millis => Some(NANOS_PER_MILLI),
            Seconds => Some(NANOS_PER_SECOND),
            Minutes => Some(NANOS_PER_MINUTE),
            Hours => Some(NANOS_PER_HOUR),
            HalfDays => Some(12 * NANOS_PER_HOUR),
            _ => None,
        }
    }

    /// Returns true when the duration of this unit is an estimate.
    ///
    /// All units of a day or bigger are estimated.
    pub const fn is_duration_estimated(self) -> bool {
        self as u8 >= ChronoUnit::Days as u8
    }

    /// Returns true for days and every unit bigger than a day except
    /// [`ChronoUnit::Forever`].
    pub const fn is_date_based(self) -> bool {
        self as u8 >= ChronoUnit::Days as u8
            && !matches!(self, ChronoUnit::Forever)
    }

    /// Returns true for every unit smaller than a day.
    pub const fn is_time_based(self) -> bool {
        (self as u8) < ChronoUnit::Days as u8
    }
}

impl Unit for ChronoUnit {
    fn name(&self) -> &str {
        ChronoUnit::name(*self)
    }

    fn duration(&self) -> Duration {
        ChronoUnit::duration(*self)
    }

    fn is_duration_estimated(&self) -> bool {
        ChronoUnit::is_duration_estimated(*self)
    }

    fn is_date_based(&self) -> bool {
        ChronoUnit::is_date_based(*self)
    }

    fn is_time_based(&self) -> bool {
        ChronoUnit::is_time_based(*self)
    }

    fn is_supported_by(&self, temporal: &TemporalValue) -> bool {
        temporal.is_supported_unit(self)
    }

    fn add_to(
        &self,
        temporal: TemporalValue,
        amount: i64,
    ) -> Result<TemporalValue, Error> {
        temporal.plus(amount, self)
    }

    fn between(
        &self,
        start: &TemporalValue,
        end: &TemporalValue,
    ) -> Result<i64, Error> {
        start.until(end, self)
    }

    fn as_chrono_unit(&self) -> Option<ChronoUnit> {
        Some(*self)
    }
}

impl core::fmt::Display for ChronoUnit {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(ChronoUnit::Years > ChronoUnit::Days);
        assert!(ChronoUnit::Days > ChronoUnit::HalfDays);
        assert!(ChronoUnit::Forever > ChronoUnit::Eras);
    }

    #[test]
    fn classification() {
        assert!(ChronoUnit::Hours.is_time_based());
        assert!(!ChronoUnit::Hours.is_date_based());
        assert!(!ChronoUnit::Hours.is_duration_estimated());
        assert!(ChronoUnit::Days.is_date_based());
        assert!(ChronoUnit::Days.is_duration_estimated());
        assert!(!ChronoUnit::Forever.is_date_based());
        assert!(!ChronoUnit::Forever.is_time_based());
    }

    #[test]
    fn durations() {
        assert_eq!(ChronoUnit::Nanos.duration(), Duration::of_nanos_const(1));
        assert_eq!(ChronoUnit::Hours.duration().seconds(), 3_600);
        assert_eq!(ChronoUnit::Years.duration().seconds(), 31_556_952);
        assert_eq!(ChronoUnit::Months.duration().seconds(), 2_629_746);
        assert_eq!(ChronoUnit::Forever.duration().seconds(), i64::MAX);
        assert_eq!(ChronoUnit::Forever.duration().nano(), 999_999_999);
    }
}
