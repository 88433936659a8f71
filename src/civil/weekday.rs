use crate::{util::arith::floor_mod, Error};

/// A day of the week.
///
/// Weekdays are numbered according to ISO 8601, from Monday (`1`) to
/// Sunday (`7`).
///
/// # Example
///
/// ```
/// use epochal::civil::{LocalDate, Weekday};
///
/// let date = LocalDate::of(1970, 1, 1)?;
/// assert_eq!(date.day_of_week(), Weekday::Thursday);
/// assert_eq!(Weekday::Thursday.plus(4), Weekday::Monday);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Returns the weekday for the ISO number given, where Monday is `1`.
    ///
    /// # Errors
    ///
    /// This returns a range error when the number is not in `1..=7`.
    pub fn of(value: i64) -> Result<Weekday, Error> {
        match value {
            1 => Ok(Weekday::Monday),
            2 => Ok(Weekday::Tuesday),
            3 => Ok(Weekday::Wednesday),
            4 => Ok(Weekday::Thursday),
            5 => Ok(Weekday::Friday),
            6 => Ok(Weekday::Saturday),
            7 => Ok(Weekday::Sunday),
            _ => Err(Error::range("DayOfWeek", value, 1, 7)),
        }
    }

    /// Returns the ISO number of this weekday, where Monday is `1`.
    #[inline]
    pub const fn value(self) -> i8 {
        self as i8
    }

    /// Returns the weekday that is `days` days after this one.
    ///
    /// `days` may be negative.
    pub const fn plus(self, days: i64) -> Weekday {
        let index = floor_mod(self as i64 - 1 + days % 7, 7);
        Weekday::from_index(index)
    }

    /// Returns the weekday that is `days` days before this one.
    pub const fn minus(self, days: i64) -> Weekday {
        self.plus(-(days % 7))
    }

    /// Converts a zero based index (Monday is `0`) into a weekday.
    pub(crate) const fn from_index(index: i64) -> Weekday {
        match index {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }
}

/// An era in the proleptic Gregorian calendar.
///
/// Years `1` and later are in [`Era::Ce`]. Year `0` and earlier are in
/// [`Era::Bce`], where the year-of-era is `1 - year`. So year `0` is
/// `1 BCE` and year `-1` is `2 BCE`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Era {
    /// Before the current era. Its numeric value is `0`.
    Bce = 0,
    /// The current era. Its numeric value is `1`.
    Ce = 1,
}

impl Era {
    /// Returns the era for the numeric value given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the value is not `0` or `1`.
    pub fn of(value: i64) -> Result<Era, Error> {
        match value {
            0 => Ok(Era::Bce),
            1 => Ok(Era::Ce),
            _ => Err(Error::range("Era", value, 0, 1)),
        }
    }

    /// Returns the era of the proleptic year given.
    pub(crate) const fn of_year(year: i32) -> Era {
        if year >= 1 {
            Era::Ce
        } else {
            Era::Bce
        }
    }

    /// Returns the numeric value of this era.
    #[inline]
    pub const fn value(self) -> i8 {
        self as i8
    }
}
