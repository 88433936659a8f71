use crate::{
    civil::LocalDate,
    clock::Clock,
    field::{self, ChronoField, Field, TemporalAccessor, ValueRange},
    fmt::{parser, printer},
    util::{
        b,
        common::{days_in_month, is_leap_year},
    },
    Error,
};

/// A month and day of month without a year, like `--12-25`.
///
/// February 29 is a valid month-day. Combining it with a non-leap year
/// through [`MonthDay::at_year`] produces February 28.
///
/// A month-day is only a [`TemporalAccessor`]. It cannot be used with
/// units since adding days to it is ambiguous without a year.
///
/// # Example
///
/// ```
/// use epochal::civil::{LocalDate, MonthDay};
///
/// let md: MonthDay = "--02-29".parse()?;
/// assert_eq!(md.at_year(2023)?, LocalDate::of(2023, 2, 28)?);
/// assert!(!md.is_valid_year(2023));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct MonthDay {
    month: i8,
    day: i8,
}

impl MonthDay {
    /// Creates a new month-day.
    ///
    /// # Errors
    ///
    /// This returns a range error when the month is out of range or when
    /// the day is out of range for the month in a leap year.
    pub fn of(month: i8, day: i8) -> Result<MonthDay, Error> {
        let month = b::Month::check(month)?;
        let day = b::Day::check(day)?;
        let max = MonthDay::max_day(month);
        if day > max {
            return Err(Error::range("day", day, 1, max));
        }
        Ok(MonthDay { month, day })
    }

    /// Returns the current month-day according to the clock given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the clock's instant is at the edge
    /// of the range of instants.
    pub fn now(clock: &dyn Clock) -> Result<MonthDay, Error> {
        Ok(MonthDay::from(LocalDate::now(clock)?))
    }

    /// Returns the month, from `1` to `12`.
    #[inline]
    pub const fn month(self) -> i8 {
        self.month
    }

    /// Returns the day of month, starting at `1`.
    #[inline]
    pub const fn day(self) -> i8 {
        self.day
    }

    /// Returns true when this month-day exists in the year given.
    ///
    /// This is only false for February 29 in a non-leap year.
    pub const fn is_valid_year(self, year: i32) -> bool {
        !(self.month == 2 && self.day == 29 && !is_leap_year(year as i64))
    }

    /// Returns a copy with the month given.
    ///
    /// When the day is invalid for the new month, it is clamped to the last
    /// day of the month in a leap year.
    ///
    /// # Errors
    ///
    /// This returns a range error when the month is out of range.
    pub fn with_month(self, month: i8) -> Result<MonthDay, Error> {
        let month = b::Month::check(month)?;
        let day = self.day.min(MonthDay::max_day(month));
        Ok(MonthDay { month, day })
    }

    /// Returns a copy with the day of month given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the day is invalid for the month.
    pub fn with_day_of_month(self, day: i8) -> Result<MonthDay, Error> {
        MonthDay::of(self.month, day)
    }

    /// Combines this month-day with a year.
    ///
    /// February 29 becomes February 28 when the year is not a leap year.
    ///
    /// # Errors
    ///
    /// This returns a range error when the year is out of range.
    pub fn at_year(self, year: i32) -> Result<LocalDate, Error> {
        let year = b::Year::check(year)?;
        let day = self.day.min(days_in_month(i64::from(year), self.month));
        LocalDate::of(year, self.month, day)
    }

    /// Returns the longest length of a month over all years.
    const fn max_day(month: i8) -> i8 {
        // 2000 is a leap year.
        days_in_month(2000, month)
    }
}

impl From<LocalDate> for MonthDay {
    fn from(date: LocalDate) -> MonthDay {
        MonthDay { month: date.month(), day: date.day() }
    }
}

impl TemporalAccessor for MonthDay {
    fn is_supported(&self, field: &dyn Field) -> bool {
        match field.as_chrono_field() {
            Some(f) => {
                matches!(f, ChronoField::MonthOfYear | ChronoField::DayOfMonth)
            }
            None => field.is_supported_by(self),
        }
    }

    fn range(&self, field: &dyn Field) -> Result<ValueRange, Error> {
        field::range_of(self, field, |f| match f {
            ChronoField::MonthOfYear => Some(f.range()),
            ChronoField::DayOfMonth => {
                let max = i64::from(days_in_month(2001, self.month));
                let leap = i64::from(MonthDay::max_day(self.month));
                Some(ValueRange::variable(1, max, leap))
            }
            _ => None,
        })
    }

    fn get_long(&self, field: &dyn Field) -> Result<i64, Error> {
        match field.as_chrono_field() {
            Some(ChronoField::MonthOfYear) => Ok(i64::from(self.month)),
            Some(ChronoField::DayOfMonth) => Ok(i64::from(self.day)),
            Some(f) => Err(field::unsupported_field(f)),
            None => field.get_from(self),
        }
    }
}

impl core::fmt::Debug for MonthDay {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        printer::write_month_day(f, self.month, self.day)
    }
}

impl core::str::FromStr for MonthDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<MonthDay, Error> {
        parser::parse_month_day(s)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn md(month: i8, day: i8) -> MonthDay {
        MonthDay::of(month, day).unwrap()
    }

    #[test]
    fn validation() {
        assert!(MonthDay::of(2, 29).is_ok());
        assert!(MonthDay::of(2, 30).unwrap_err().is_range());
        assert!(MonthDay::of(4, 31).unwrap_err().is_range());
        assert!(MonthDay::of(13, 1).unwrap_err().is_range());
        assert_eq!(md(3, 31).with_month(2).unwrap(), md(2, 29));
        assert!(md(3, 31).with_day_of_month(32).unwrap_err().is_range());
    }

    #[test]
    fn at_year() {
        let leap = md(2, 29);
        assert_eq!(
            leap.at_year(2024).unwrap(),
            LocalDate::of(2024, 2, 29).unwrap(),
        );
        assert_eq!(
            leap.at_year(1900).unwrap(),
            LocalDate::of(1900, 2, 28).unwrap(),
        );
        assert!(leap.is_valid_year(2000));
        assert!(!leap.is_valid_year(2100));
        assert!(md(2, 28).is_valid_year(2100));
        assert!(leap.at_year(1_000_000_000).unwrap_err().is_range());
    }

    #[test]
    fn fields() {
        let v = md(2, 10);
        assert_eq!(v.get_long(&ChronoField::DayOfMonth).unwrap(), 10);
        assert_eq!(
            v.range(&ChronoField::DayOfMonth).unwrap(),
            ValueRange::variable(1, 28, 29),
        );
        assert!(v.get_long(&ChronoField::Year).unwrap_err().is_unsupported());
        assert!(!v.is_supported(&ChronoField::DayOfYear));
    }

    #[test]
    fn text() {
        assert_eq!(md(12, 25).to_string(), "--12-25");
        assert_eq!("--02-29".parse::<MonthDay>().unwrap(), md(2, 29));
        assert!("--02-30".parse::<MonthDay>().unwrap_err().is_range());
        assert!("12-25".parse::<MonthDay>().unwrap_err().is_parse());
    }
}
