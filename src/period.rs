use alloc::{vec, vec::Vec};

use crate::{
    civil::LocalDate,
    field::{Amount, ChronoUnit, Unit},
    fmt::{parser, printer},
    util::arith,
    Error,
};

/// A calendar-relative amount of time in years, months and days.
///
/// Unlike a [`Duration`](crate::Duration), a period has no fixed length.
/// One month added to January 31 is a different number of days than one
/// month added to February 1. The three components are independent and are
/// never carried into one another implicitly. Use [`Period::normalized`] to
/// fold months into years.
///
/// When a period is added to a temporal value, years are added first, then
/// months and then days. The day-of-month is clamped after each of the first
/// two steps.
///
/// # Example
///
/// ```
/// use epochal::{civil::LocalDate, field::Temporal, Period};
///
/// let p = Period::of(1, 2, 3).plus(Period::of(2, 3, 4))?;
/// assert_eq!(p, Period::of(3, 5, 7));
/// assert_eq!(p.to_string(), "P3Y5M7D");
///
/// let date = LocalDate::of(2024, 1, 31)?;
/// assert_eq!(
///     date.plus_amount(&Period::of_months(1))?,
///     LocalDate::of(2024, 2, 29)?,
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Period {
    years: i32,
    months: i32,
    days: i32,
}

impl Period {
    /// A period of zero length.
    pub const ZERO: Period = Period { years: 0, months: 0, days: 0 };

    /// Creates a period from a number of years, months and days.
    pub const fn of(years: i32, months: i32, days: i32) -> Period {
        Period { years, months, days }
    }

    /// Creates a period of the given number of years.
    pub const fn of_years(years: i32) -> Period {
        Period::of(years, 0, 0)
    }

    /// Creates a period of the given number of months.
    pub const fn of_months(months: i32) -> Period {
        Period::of(0, months, 0)
    }

    /// Creates a period of the given number of weeks, expressed in days.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the number of days does not fit
    /// in an `i32`.
    pub fn of_weeks(weeks: i32) -> Result<Period, Error> {
        let days = arith::mul32(weeks, 7, "period days")?;
        Ok(Period::of(0, 0, days))
    }

    /// Creates a period of the given number of days.
    pub const fn of_days(days: i32) -> Period {
        Period::of(0, 0, days)
    }

    /// Returns the period between two dates.
    ///
    /// The start date is included and the end date is excluded. The result
    /// is negative when `end` precedes `start`. The years and months are
    /// computed first and the remaining days last, so that adding the
    /// result to `start` gives back `end`.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when a component of the period does
    /// not fit in an `i32`.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::{civil::LocalDate, Period};
    ///
    /// let start = LocalDate::of(2024, 1, 31)?;
    /// let end = LocalDate::of(2025, 3, 1)?;
    /// assert_eq!(Period::between(start, end)?, Period::of(1, 1, 1));
    /// assert_eq!(Period::between(end, start)?, Period::of(-1, -1, -1));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn between(start: LocalDate, end: LocalDate) -> Result<Period, Error> {
        start.until_period(end)
    }

    /// Returns the years component of this period.
    #[inline]
    pub const fn years(self) -> i32 {
        self.years
    }

    /// Returns the months component of this period.
    #[inline]
    pub const fn months(self) -> i32 {
        self.months
    }

    /// Returns the days component of this period.
    #[inline]
    pub const fn days(self) -> i32 {
        self.days
    }

    /// Returns true when every component of this period is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Returns true when any component of this period is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }

    /// Returns a copy of this period with the years given.
    pub const fn with_years(self, years: i32) -> Period {
        Period { years, ..self }
    }

    /// Returns a copy of this period with the months given.
    pub const fn with_months(self, months: i32) -> Period {
        Period { months, ..self }
    }

    /// Returns a copy of this period with the days given.
    pub const fn with_days(self, days: i32) -> Period {
        Period { days, ..self }
    }

    /// Returns the component-wise sum of this period and the one given.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when any component overflows.
    pub fn plus(self, other: Period) -> Result<Period, Error> {
        Ok(Period {
            years: arith::add32(self.years, other.years, "period years")?,
            months: arith::add32(self.months, other.months, "period months")?,
            days: arith::add32(self.days, other.days, "period days")?,
        })
    }

    /// Returns the component-wise difference of this period and the one
    /// given.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when any component overflows.
    pub fn minus(self, other: Period) -> Result<Period, Error> {
        self.plus(other.negated()?)
    }

    /// Returns a copy of this period with a number of years added.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the years do not fit in an
    /// `i32`.
    pub fn plus_years(self, years: i64) -> Result<Period, Error> {
        let years = plus_component(self.years, years, "period years")?;
        Ok(Period { years, ..self })
    }

    /// Returns a copy of this period with a number of months added.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the months do not fit in an
    /// `i32`.
    pub fn plus_months(self, months: i64) -> Result<Period, Error> {
        let months = plus_component(self.months, months, "period months")?;
        Ok(Period { months, ..self })
    }

    /// Returns a copy of this period with a number of days added.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the days do not fit in an
    /// `i32`.
    pub fn plus_days(self, days: i64) -> Result<Period, Error> {
        let days = plus_component(self.days, days, "period days")?;
        Ok(Period { days, ..self })
    }

    /// Returns a copy of this period with a number of years subtracted.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the years do not fit in an
    /// `i32`.
    pub fn minus_years(self, years: i64) -> Result<Period, Error> {
        self.plus_years(arith::neg(years, "period years")?)
    }

    /// Returns a copy of this period with a number of months subtracted.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the months do not fit in an
    /// `i32`.
    pub fn minus_months(self, months: i64) -> Result<Period, Error> {
        self.plus_months(arith::neg(months, "period months")?)
    }

    /// Returns a copy of this period with a number of days subtracted.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the days do not fit in an
    /// `i32`.
    pub fn minus_days(self, days: i64) -> Result<Period, Error> {
        self.plus_days(arith::neg(days, "period days")?)
    }

    /// Returns a copy of this period with every component multiplied by
    /// the scalar given.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when any component overflows.
    pub fn multiplied_by(self, scalar: i32) -> Result<Period, Error> {
        if scalar == 1 || self.is_zero() {
            return Ok(self);
        }
        Ok(Period {
            years: arith::mul32(self.years, scalar, "period years")?,
            months: arith::mul32(self.months, scalar, "period months")?,
            days: arith::mul32(self.days, scalar, "period days")?,
        })
    }

    /// Returns a copy of this period with every component negated.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when any component is `i32::MIN`.
    pub fn negated(self) -> Result<Period, Error> {
        self.multiplied_by(-1)
    }

    /// Returns a copy of this period with months folded into years, so that
    /// the months component is in the range `-11..=11`.
    ///
    /// The sign of the years and months always agree afterwards. Days are
    /// left untouched.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the years do not fit in an
    /// `i32`. This can't happen for the periods a `Period` can represent,
    /// but is reported instead of panicking.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::Period;
    ///
    /// assert_eq!(Period::of(1, 15, 3).normalized()?, Period::of(2, 3, 3));
    /// assert_eq!(Period::of(1, -25, 3).normalized()?, Period::of(-1, -1, 3));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn normalized(self) -> Result<Period, Error> {
        let total = self.to_total_months();
        let years = arith::to_i32(total / 12, "period years")?;
        // OK because the remainder is always in `-11..=11`.
        let months = (total % 12) as i32;
        if years == self.years && months == self.months {
            return Ok(self);
        }
        Ok(Period { years, months, days: self.days })
    }

    /// Returns the total number of months in this period, ignoring days.
    pub const fn to_total_months(self) -> i64 {
        self.years as i64 * 12 + self.months as i64
    }
}

fn plus_component(
    current: i32,
    amount: i64,
    what: &'static str,
) -> Result<i32, Error> {
    arith::to_i32(arith::add(i64::from(current), amount, what)?, what)
}

impl Amount for Period {
    fn units(&self) -> Vec<&dyn Unit> {
        vec![&ChronoUnit::Years, &ChronoUnit::Months, &ChronoUnit::Days]
    }

    fn get(&self, unit: &dyn Unit) -> Result<i64, Error> {
        match unit.as_chrono_unit() {
            Some(ChronoUnit::Years) => Ok(i64::from(self.years)),
            Some(ChronoUnit::Months) => Ok(i64::from(self.months)),
            Some(ChronoUnit::Days) => Ok(i64::from(self.days)),
            _ => Err(Error::unsupported_unit(unit.name())),
        }
    }
}

impl core::fmt::Debug for Period {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Period {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        printer::write_period(f, self.years, self.months, self.days)
    }
}

impl core::str::FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Period, Error> {
        parser::parse_period(s)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Period {
    fn arbitrary(g: &mut quickcheck::Gen) -> Period {
        let years = i32::from(i16::arbitrary(g));
        let months = i32::from(i16::arbitrary(g));
        let days = i32::from(i16::arbitrary(g));
        Period { years, months, days }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Period>> {
        let (y, m, d) = (self.years, self.months, self.days);
        alloc::boxed::Box::new(
            (y, m, d).shrink().map(|(years, months, days)| Period {
                years,
                months,
                days,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::field::Temporal;

    use super::*;

    #[test]
    fn component_wise_plus() {
        assert_eq!(
            Period::of(1, 2, 3).plus(Period::of(2, 3, 4)).unwrap(),
            Period::of(3, 5, 7),
        );
        // No carrying between components.
        assert_eq!(
            Period::of(0, 11, 30).plus(Period::of(0, 1, 1)).unwrap(),
            Period::of(0, 12, 31),
        );
        assert!(Period::of_days(i32::MAX)
            .plus(Period::of_days(1))
            .unwrap_err()
            .is_overflow());
        assert_eq!(
            Period::of(1, 2, 3).minus(Period::of(2, 3, 4)).unwrap(),
            Period::of(-1, -1, -1),
        );
    }

    #[test]
    fn scalar_ops() {
        assert_eq!(Period::of_weeks(3).unwrap(), Period::of_days(21));
        assert_eq!(
            Period::of(1, -2, 3).multiplied_by(-2).unwrap(),
            Period::of(-2, 4, -6),
        );
        assert!(Period::of_years(i32::MIN)
            .negated()
            .unwrap_err()
            .is_overflow());
        assert_eq!(Period::of(0, 25, 0).to_total_months(), 25);
        assert_eq!(
            Period::of(0, 25, 0).normalized().unwrap(),
            Period::of(2, 1, 0),
        );
        assert!(Period::of(0, -1, 0).is_negative());
        assert!(!Period::of(0, 1, 0).is_negative());
        assert!(Period::ZERO.is_zero());
    }

    #[test]
    fn add_to_applies_years_months_days() {
        let date = LocalDate::of(2008, 2, 29).unwrap();
        let p = Period::of(1, 1, 1);
        // 2009-02-28, then 2009-03-28, then 2009-03-29.
        assert_eq!(
            date.plus_amount(&p).unwrap(),
            LocalDate::of(2009, 3, 29).unwrap(),
        );
        // 2007-02-28, then 2007-01-28, then 2007-01-27.
        assert_eq!(
            date.minus_amount(&p).unwrap(),
            LocalDate::of(2007, 1, 27).unwrap(),
        );
    }

    #[test]
    fn text() {
        let cases = [
            (Period::ZERO, "P0D"),
            (Period::of(1, 2, 3), "P1Y2M3D"),
            (Period::of_months(-5), "P-5M"),
            (Period::of(0, 0, 10), "P10D"),
            (Period::of(2, 0, -1), "P2Y-1D"),
        ];
        for (p, expected) in cases {
            assert_eq!(p.to_string(), expected);
            assert_eq!(expected.parse::<Period>().unwrap(), p);
        }
        assert_eq!("P2W".parse::<Period>().unwrap(), Period::of_days(14));
        assert_eq!("P1W3D".parse::<Period>().unwrap(), Period::of_days(10));
        assert_eq!("-P1Y2M".parse::<Period>().unwrap(), Period::of(-1, -2, 0));
        assert_eq!("p+1y-2m".parse::<Period>().unwrap(), Period::of(1, -2, 0));
        assert!("P".parse::<Period>().unwrap_err().is_parse());
        assert!("P1D2Y".parse::<Period>().unwrap_err().is_parse());
        assert!("P3000000000D".parse::<Period>().unwrap_err().is_parse());
    }

    quickcheck::quickcheck! {
        fn prop_text_roundtrip(p: Period) -> bool {
            p.to_string().parse::<Period>().unwrap() == p
        }

        fn prop_normalized_keeps_total(p: Period) -> bool {
            let n = p.normalized().unwrap();
            n.to_total_months() == p.to_total_months()
                && n.days() == p.days()
                && (-11..=11).contains(&n.months())
        }
    }
}
