/*!
The proleptic Gregorian calendar as plain functions.

These convert between a (year, month, day) triple and an *epoch day*, the
signed number of days since `1970-01-01`. They are exact inverses of one
another over the range of [`LocalDate`](crate::civil::LocalDate), and they
are what `LocalDate` is built on.

The calendar is proleptic: the Gregorian leap year rule is applied to every
year, and year `0` exists (it is 1 BCE).

# Example

```
use epochal::calendar;

assert_eq!(calendar::to_epoch_day(1970, 1, 1)?, 0);
assert_eq!(calendar::to_epoch_day(1858, 11, 17)?, -40_587);
assert_eq!(calendar::from_epoch_day(-40_587)?, (1858, 11, 17));
assert!(calendar::to_epoch_day(2023, 2, 29).unwrap_err().is_range());

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use crate::{
    util::{
        b, common,
        itime::{IDate, IEpochDay},
    },
    Error,
};

/// Returns the epoch day of a date.
///
/// # Errors
///
/// This returns a range error when the year, month or day is out of range.
/// Days are checked against the length of the month, so `2023-02-29` is
/// rejected rather than clamped.
pub fn to_epoch_day(year: i32, month: i8, day: i8) -> Result<i64, Error> {
    let year = b::Year::check(year)?;
    let month = b::Month::check(month)?;
    let day = b::Day::check(day)?;
    let max = common::days_in_month(i64::from(year), month);
    if day > max {
        return Err(Error::range("DayOfMonth", day, 1, max));
    }
    Ok(IDate { year, month, day }.to_epoch_day().epoch_day)
}

/// Returns the date of an epoch day as a `(year, month, day)` triple.
///
/// # Errors
///
/// This returns a range error when the epoch day is outside of the range
/// of [`LocalDate`](crate::civil::LocalDate).
pub fn from_epoch_day(epoch_day: i64) -> Result<(i32, i8, i8), Error> {
    let epoch_day = b::EpochDay::check(epoch_day)?;
    let IDate { year, month, day } = IEpochDay { epoch_day }.to_date();
    Ok((year, month, day))
}

/// Returns true when `year` is a leap year.
///
/// A leap year is divisible by 4, except for centuries that are not
/// divisible by 400.
#[inline]
pub const fn is_leap_year(year: i64) -> bool {
    common::is_leap_year(year)
}

/// Returns the number of days in a month of a year.
///
/// # Errors
///
/// This returns a range error when the month is not in `1..=12`.
pub fn length_of_month(year: i64, month: i8) -> Result<i8, Error> {
    let month = b::Month::check(month)?;
    Ok(common::days_in_month(year, month))
}

/// Returns the number of days in a year, either `365` or `366`.
#[inline]
pub const fn length_of_year(year: i64) -> i16 {
    common::days_in_year(year)
}
