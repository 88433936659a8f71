/*!
A collection of calendar related utility functions.

These operate on plain primitive integers and are all `const`. Callers are
responsible for passing values that are already in range. The years accepted
here are wider than the years supported by `LocalDate` since instants can
render years just outside of that range.

# Algorithms

The leap year and days-in-month bit tricks are from
Neri C, Schneider L. "Euclidean affine functions and their application to
calendar algorithms".
*/

/// Returns true if and only if the given year is a leap year.
///
/// A leap year is a year with 366 days. Typical years have 365 days. This
/// applies the proleptic Gregorian rule: divisible by 4 and either not
/// divisible by 100 or divisible by 400.
#[inline]
pub(crate) const fn is_leap_year(year: i64) -> bool {
    let d = if year % 25 != 0 { 4 } else { 16 };
    (year % d) == 0
}

/// Return the number of days in the given month.
///
/// This correctly returns `29` when the year is a leap year and the month is
/// February.
#[inline]
pub(crate) const fn days_in_month(year: i64, month: i8) -> i8 {
    if month == 2 {
        if is_leap_year(year) {
            29
        } else {
            28
        }
    } else {
        30 | (month ^ month >> 3)
    }
}

/// Return the number of days in the given year.
#[inline]
pub(crate) const fn days_in_year(year: i64) -> i16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the day of the year for the first day of the given month.
///
/// The value returned is zero based, so January always returns `0`.
#[inline]
pub(crate) const fn days_before_month(year: i64, month: i8) -> i16 {
    // Cumulative days before each month in a non-leap year.
    const TABLE: [i16; 12] =
        [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
    let days = TABLE[(month - 1) as usize];
    if month > 2 && is_leap_year(year) {
        days + 1
    } else {
        days
    }
}

/// Returns the day-of-month given by clamping `day` to the last day of the
/// given year and month.
#[inline]
pub(crate) const fn saturate_day_in_month(
    year: i64,
    month: i8,
    day: i8,
) -> i8 {
    let max = days_in_month(year, month);
    if day > max {
        max
    } else {
        day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2004));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(is_leap_year(-400));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(-1));
        assert!(!is_leap_year(-100));
        assert!(!is_leap_year(2007));
    }

    #[test]
    fn month_lengths() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, &len) in expected.iter().enumerate() {
            let month = i8::try_from(i + 1).unwrap();
            assert_eq!(days_in_month(2007, month), len, "month {month}");
        }
        assert_eq!(days_in_month(2008, 2), 29);
        assert_eq!(days_in_month(-1_000_000_000, 2), 29);
        assert_eq!(days_in_year(2008), 366);
        assert_eq!(days_in_year(2007), 365);
    }

    #[test]
    fn cumulative_months() {
        assert_eq!(days_before_month(2007, 1), 0);
        assert_eq!(days_before_month(2007, 3), 59);
        assert_eq!(days_before_month(2008, 3), 60);
        assert_eq!(days_before_month(2008, 12), 335);
        assert_eq!(saturate_day_in_month(2007, 2, 31), 28);
        assert_eq!(saturate_day_in_month(2007, 3, 31), 31);
    }
}
