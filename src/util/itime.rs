/*!
The calendrical converter.

This module defines "internal" date and epoch-day types along with the
conversion between them. Nothing here does range validation: callers must
only pass dates that are valid in the proleptic Gregorian calendar. The years
handled here are slightly wider than `LocalDate` supports so that instants at
the edges of their range can be rendered.

Both directions of the conversion work on a "March-based" year. That puts
February, the only month whose length varies, at the end of the internal
year. Whole years are then accumulated with the 4/100/400 leap year
corrections over 400 year cycles of 146,097 days.
*/

use crate::util::arith::floor_div;

/// The number of days in a 400 year cycle.
pub(crate) const DAYS_PER_CYCLE: i64 = 146_097;

/// The number of days from 0000-01-01 to 1970-01-01.
pub(crate) const DAYS_0000_TO_1970: i64 =
    (DAYS_PER_CYCLE * 5) - (30 * 365 + 7);

/// The number of days from 0000-03-01 to 1970-01-01.
const DAYS_0000_MARCH_TO_1970: i64 = DAYS_0000_TO_1970 - 60;

/// A count of days since 1970-01-01.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub(crate) struct IEpochDay {
    pub(crate) epoch_day: i64,
}

impl IEpochDay {
    /// Converts this epoch day to a proleptic Gregorian date.
    ///
    /// The era and year are estimated from the 400 year cycle and then
    /// refined by subtracting the days accumulated before the estimated
    /// year. When the day count precedes 0000-03-01, a whole number of
    /// cycles is added first so that every intermediate quantity stays
    /// non-negative. Those cycles are removed from the year at the end.
    #[inline]
    pub(crate) const fn to_date(self) -> IDate {
        let mut zero_day = self.epoch_day + DAYS_0000_MARCH_TO_1970;
        let mut adjust_years = 0;
        if zero_day < 0 {
            let adjust_cycles = (zero_day + 1) / DAYS_PER_CYCLE - 1;
            adjust_years = adjust_cycles * 400;
            zero_day += -adjust_cycles * DAYS_PER_CYCLE;
        }
        let mut year = (400 * zero_day + 591) / DAYS_PER_CYCLE;
        let mut day_of_year = zero_day - days_before_march_year(year);
        if day_of_year < 0 {
            year -= 1;
            day_of_year = zero_day - days_before_march_year(year);
        }
        year += adjust_years;

        // Month zero is March here.
        let march_month = (day_of_year * 5 + 2) / 153;
        let month = (march_month + 2) % 12 + 1;
        let day = day_of_year - (march_month * 306 + 5) / 10 + 1;
        year += march_month / 10;
        IDate { year: year as i32, month: month as i8, day: day as i8 }
    }

    /// Returns the weekday of this epoch day, with Monday as `1` and Sunday
    /// as `7`.
    ///
    /// The epoch, 1970-01-01, was a Thursday.
    #[inline]
    pub(crate) const fn weekday(self) -> i8 {
        (self.epoch_day + 3).rem_euclid(7) as i8 + 1
    }
}

/// A date in the proleptic Gregorian calendar.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub(crate) struct IDate {
    pub(crate) year: i32,
    pub(crate) month: i8,
    pub(crate) day: i8,
}

impl IDate {
    /// Converts this date to a count of days since 1970-01-01.
    ///
    /// Dates before 1970-01-01 produce negative counts.
    #[inline]
    pub(crate) const fn to_epoch_day(self) -> IEpochDay {
        let (month, day) = (self.month as i64, self.day as i64);
        // January and February belong to the previous March-based year.
        let year = if month <= 2 {
            self.year as i64 - 1
        } else {
            self.year as i64
        };
        let era = floor_div(year, 400);
        let year_of_era = year - era * 400;
        let march_month = (month + 9) % 12;
        let day_of_year = (153 * march_month + 2) / 5 + day - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4
            - year_of_era / 100
            + day_of_year;
        let epoch_day =
            era * DAYS_PER_CYCLE + day_of_era - DAYS_0000_MARCH_TO_1970;
        IEpochDay { epoch_day }
    }

    /// Returns the day of the year, starting at `1` for January 1.
    #[inline]
    pub(crate) const fn day_of_year(self) -> i16 {
        crate::util::common::days_before_month(self.year as i64, self.month)
            + self.day as i16
    }
}

/// Returns the number of days from the start of March-based year `0` to the
/// start of March-based year `year`, for non-negative `year`.
#[inline]
const fn days_before_march_year(year: i64) -> i64 {
    365 * year + year / 4 - year / 100 + year / 400
}
