use crate::{
    civil::{Era, LocalDate},
    clock::Clock,
    error::{civil::Error as E, ErrorContext},
    field::{
        self, ChronoField, ChronoUnit, Field, Temporal, TemporalAccessor,
        TemporalValue, Unit, ValueRange,
    },
    fmt::{parser, printer},
    util::{
        arith::{self, floor_div, floor_mod},
        b,
        common::{days_in_month, is_leap_year},
        itime::IDate,
    },
    Error,
};

/// A month in a particular year, like `2024-02`.
///
/// A year-month has no day. It is useful for values like credit card expiry
/// dates, where the day is irrelevant. Use [`YearMonth::at_day`] or
/// [`YearMonth::at_end_of_month`] to turn it into a [`LocalDate`].
///
/// # Example
///
/// ```
/// use epochal::civil::{LocalDate, YearMonth};
///
/// let ym = YearMonth::of(2024, 1)?;
/// assert_eq!(ym.plus_months(1)?.to_string(), "2024-02");
/// assert_eq!(
///     ym.plus_months(1)?.at_end_of_month(),
///     LocalDate::of(2024, 2, 29)?,
/// );
/// assert!(!ym.plus_months(13)?.is_valid_day(29));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: i8,
}

impl YearMonth {
    /// Creates a new year-month.
    ///
    /// # Errors
    ///
    /// This returns a range error when the year or month is out of range.
    pub fn of(year: i32, month: i8) -> Result<YearMonth, Error> {
        let year = b::Year::check(year)?;
        let month = b::Month::check(month)?;
        Ok(YearMonth { year, month })
    }

    /// Returns the current year-month according to the clock given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the clock's instant is at the edge
    /// of the range of instants.
    pub fn now(clock: &dyn Clock) -> Result<YearMonth, Error> {
        Ok(YearMonth::from(LocalDate::now(clock)?))
    }

    /// Returns the year.
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month, from `1` to `12`.
    #[inline]
    pub const fn month(self) -> i8 {
        self.month
    }

    /// Returns true when the year is a leap year.
    #[inline]
    pub const fn is_leap_year(self) -> bool {
        is_leap_year(self.year as i64)
    }

    /// Returns the number of days in this month.
    #[inline]
    pub const fn length_of_month(self) -> i8 {
        days_in_month(self.year as i64, self.month)
    }

    /// Returns true when `day` is a valid day of this month.
    #[inline]
    pub const fn is_valid_day(self, day: i8) -> bool {
        day >= 1 && day <= self.length_of_month()
    }

    /// Returns the number of months since year zero.
    #[inline]
    pub const fn proleptic_month(self) -> i64 {
        self.year as i64 * 12 + self.month as i64 - 1
    }

    /// Returns a copy with the year given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the year is out of range.
    pub fn with_year(self, year: i32) -> Result<YearMonth, Error> {
        YearMonth::of(year, self.month)
    }

    /// Returns a copy with the month given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the month is out of range.
    pub fn with_month(self, month: i8) -> Result<YearMonth, Error> {
        YearMonth::of(self.year, month)
    }

    /// Returns a copy with a number of months added.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_months(self, months: i64) -> Result<YearMonth, Error> {
        if months == 0 {
            return Ok(self);
        }
        let total = arith::add(self.proleptic_month(), months, "months")
            .context(E::FailedAddMonths)?;
        YearMonth::of_proleptic_month(total).context(E::FailedAddMonths)
    }

    /// Returns a copy with a number of years added.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_years(self, years: i64) -> Result<YearMonth, Error> {
        if years == 0 {
            return Ok(self);
        }
        let year = arith::add(i64::from(self.year), years, "year")
            .and_then(|year| ChronoField::Year.check_valid_int_value(year))
            .context(E::FailedAddYears)?;
        Ok(YearMonth { year, month: self.month })
    }

    /// Returns a copy with a number of months subtracted.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_months(self, months: i64) -> Result<YearMonth, Error> {
        self.minus(months, &ChronoUnit::Months)
    }

    /// Returns a copy with a number of years subtracted.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_years(self, years: i64) -> Result<YearMonth, Error> {
        self.minus(years, &ChronoUnit::Years)
    }

    /// Returns the date at the day of this month given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the day is not valid for this month.
    pub fn at_day(self, day: i8) -> Result<LocalDate, Error> {
        LocalDate::of(self.year, self.month, day)
    }

    /// Returns the date of the last day of this month.
    pub fn at_end_of_month(self) -> LocalDate {
        LocalDate::from_idate(IDate {
            year: self.year,
            month: self.month,
            day: self.length_of_month(),
        })
    }

    fn of_proleptic_month(total: i64) -> Result<YearMonth, Error> {
        let year =
            ChronoField::Year.check_valid_int_value(floor_div(total, 12))?;
        let month = floor_mod(total, 12) as i8 + 1;
        Ok(YearMonth { year, month })
    }

    fn era(self) -> Era {
        Era::of_year(self.year)
    }

    fn year_of_era(self) -> i64 {
        let year = i64::from(self.year);
        if year >= 1 {
            year
        } else {
            1 - year
        }
    }

    fn is_supported_builtin(field: ChronoField) -> bool {
        matches!(
            field,
            ChronoField::MonthOfYear
                | ChronoField::ProlepticMonth
                | ChronoField::YearOfEra
                | ChronoField::Year
                | ChronoField::Era
        )
    }

    fn get_builtin(&self, field: ChronoField) -> Result<i64, Error> {
        match field {
            ChronoField::MonthOfYear => Ok(i64::from(self.month)),
            ChronoField::ProlepticMonth => Ok(self.proleptic_month()),
            ChronoField::YearOfEra => Ok(self.year_of_era()),
            ChronoField::Year => Ok(i64::from(self.year)),
            ChronoField::Era => Ok(i64::from(self.era().value())),
            _ => Err(field::unsupported_field(field)),
        }
    }

    fn with_builtin(
        &self,
        field: ChronoField,
        value: i64,
    ) -> Result<YearMonth, Error> {
        if !YearMonth::is_supported_builtin(field) {
            return Err(field::unsupported_field(field));
        }
        let value = field.check_valid_value(value)?;
        match field {
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

    fn plus_builtin(
        &self,
        amount: i64,
        unit: ChronoUnit,
    ) -> Result<YearMonth, Error> {
        let years = |per: i64| -> Result<YearMonth, Error> {
            self.plus_years(arith::mul(amount, per, "years")?)
        };
        match unit {
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

    fn until_builtin(
        &self,
        end: YearMonth,
        unit: ChronoUnit,
    ) -> Result<i64, Error> {
        let months = end.proleptic_month() - self.proleptic_month();
        let value = match unit {
            ChronoUnit::Months => months,
            ChronoUnit::Years => months / 12,
            ChronoUnit::Decades => months / 120,
            ChronoUnit::Centuries => months / 1_200,
            ChronoUnit::Millennia => months / 12_000,
            ChronoUnit::Eras => {
                i64::from(end.era().value()) - i64::from(self.era().value())
            }
            _ => return Err(field::unsupported_unit(unit)),
        };
        Ok(value)
    }
}

impl From<LocalDate> for YearMonth {
    fn from(date: LocalDate) -> YearMonth {
        YearMonth { year: date.year(), month: date.month() }
    }
}

impl TemporalAccessor for YearMonth {
    fn is_supported(&self, field: &dyn Field) -> bool {
        match field.as_chrono_field() {
            Some(f) => YearMonth::is_supported_builtin(f),
            None => field.is_supported_by(self),
        }
    }

    fn range(&self, field: &dyn Field) -> Result<ValueRange, Error> {
        field::range_of(self, field, |f| {
            if !YearMonth::is_supported_builtin(f) {
                return None;
            }
            if f == ChronoField::YearOfEra {
                let max = i64::from(b::Year::MAX);
                let max = if self.year <= 0 { max + 1 } else { max };
                return Some(ValueRange::fixed(1, max));
            }
            Some(f.range())
        })
    }

    fn get_long(&self, field: &dyn Field) -> Result<i64, Error> {
        match field.as_chrono_field() {
            Some(f) => self.get_builtin(f),
            None => field.get_from(self),
        }
    }
}

impl Temporal for YearMonth {
    fn is_supported_unit(&self, unit: &dyn Unit) -> bool {
        match unit.as_chrono_unit() {
            Some(u) => {
                u.is_date_based()
                    && !matches!(u, ChronoUnit::Days | ChronoUnit::Weeks)
            }
            None => unit.is_supported_by(&TemporalValue::YearMonth(*self)),
        }
    }

    fn with(&self, field: &dyn Field, value: i64) -> Result<YearMonth, Error> {
        match field.as_chrono_field() {
            Some(f) => self.with_builtin(f, value),
            None => field::adjust_with_field(self, field, value),
        }
    }

    fn plus(&self, amount: i64, unit: &dyn Unit) -> Result<YearMonth, Error> {
        match unit.as_chrono_unit() {
            Some(u) => self
                .plus_builtin(amount, u)
                .context(E::FailedAddUnit { unit: u }),
            None => field::add_with_unit(self, amount, unit),
        }
    }

    fn until(&self, end: &YearMonth, unit: &dyn Unit) -> Result<i64, Error> {
        match unit.as_chrono_unit() {
            Some(u) => self
                .until_builtin(*end, u)
                .context(E::FailedUntil { unit: u }),
            None => field::between_with_unit(self, end, unit),
        }
    }

    fn into_temporal_value(self) -> TemporalValue {
        TemporalValue::YearMonth(self)
    }

    fn from_temporal_value(value: TemporalValue) -> Result<YearMonth, Error> {
        if let TemporalValue::YearMonth(ym) = value {
            return Ok(ym);
        }
        value
            .query_local_date()
            .map(YearMonth::from)
            .ok_or_else(|| field::mismatched("YearMonth", &value))
    }
}

impl core::fmt::Debug for YearMonth {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        printer::write_year_month(f, self.year, self.month)
    }
}

impl core::str::FromStr for YearMonth {
    type Err = Error;

    fn from_str(s: &str) -> Result<YearMonth, Error> {
        parser::parse_year_month(s)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for YearMonth {
    fn arbitrary(g: &mut quickcheck::Gen) -> YearMonth {
        YearMonth::from(LocalDate::arbitrary(g))
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::civil::LocalDateTime;

    use super::*;

    fn ym(year: i32, month: i8) -> YearMonth {
        YearMonth::of(year, month).unwrap()
    }

    #[test]
    fn arithmetic() {
        assert_eq!(ym(2024, 12).plus_months(1).unwrap(), ym(2025, 1));
        assert_eq!(ym(2024, 1).minus_months(1).unwrap(), ym(2023, 12));
        assert_eq!(ym(0, 1).minus_years(1).unwrap(), ym(-1, 1));
        assert_eq!(
            ym(2024, 3).plus(2, &ChronoUnit::Decades).unwrap(),
            ym(2044, 3),
        );
        assert!(ym(999_999_999, 12).plus_months(1).unwrap_err().is_range());
        assert!(ym(2024, 1).plus_months(i64::MAX).unwrap_err().is_overflow());
        assert!(ym(2024, 1)
            .plus(1, &ChronoUnit::Days)
            .unwrap_err()
            .is_unsupported());
        assert!(!ym(2024, 1).is_supported_unit(&ChronoUnit::Weeks));
        assert!(ym(2024, 1).is_supported_unit(&ChronoUnit::Eras));
    }

    #[test]
    fn until() {
        let start = ym(2023, 5);
        assert_eq!(start.until(&ym(2024, 4), &ChronoUnit::Years).unwrap(), 0);
        assert_eq!(start.until(&ym(2024, 5), &ChronoUnit::Years).unwrap(), 1);
        assert_eq!(
            start.until(&ym(2021, 6), &ChronoUnit::Months).unwrap(),
            -23,
        );
        let date = LocalDate::of(2025, 7, 4).unwrap();
        let end = TemporalValue::LocalDate(date);
        let start = TemporalValue::YearMonth(start);
        assert_eq!(start.until(&end, &ChronoUnit::Months).unwrap(), 26);
    }

    #[test]
    fn days() {
        assert_eq!(ym(2023, 2).length_of_month(), 28);
        assert!(ym(2024, 2).is_valid_day(29));
        assert!(!ym(2024, 4).is_valid_day(31));
        assert!(!ym(2024, 4).is_valid_day(0));
        assert_eq!(
            ym(2023, 2).at_end_of_month(),
            LocalDate::of(2023, 2, 28).unwrap(),
        );
        assert_eq!(
            ym(2023, 2).at_day(3).unwrap(),
            LocalDate::of(2023, 2, 3).unwrap(),
        );
        assert!(ym(2023, 2).at_day(29).unwrap_err().is_range());
    }

    #[test]
    fn fields() {
        let v = ym(-4, 7);
        assert_eq!(v.get_long(&ChronoField::YearOfEra).unwrap(), 5);
        assert_eq!(v.get_long(&ChronoField::Era).unwrap(), 0);
        assert_eq!(v.with(&ChronoField::Era, 1).unwrap(), ym(5, 7));
        assert_eq!(v.with(&ChronoField::ProlepticMonth, 0).unwrap(), ym(0, 1));
        assert!(v
            .get_long(&ChronoField::DayOfMonth)
            .unwrap_err()
            .is_unsupported());
        assert!(v.with(&ChronoField::MonthOfYear, 13).unwrap_err().is_range());
        let dt = LocalDateTime::of(2020, 8, 9, 10, 11, 12, 0).unwrap();
        let from = YearMonth::from_temporal_value(dt.into_temporal_value());
        assert_eq!(from.unwrap(), ym(2020, 8));
    }

    #[test]
    fn text() {
        let cases = [
            (ym(2024, 2), "2024-02"),
            (ym(-1, 12), "-0001-12"),
            (ym(10_000, 1), "+10000-01"),
        ];
        for (v, expected) in cases {
            assert_eq!(v.to_string(), expected);
            assert_eq!(expected.parse::<YearMonth>().unwrap(), v);
        }
        assert!("2024-13".parse::<YearMonth>().unwrap_err().is_range());
        assert!("2024-1".parse::<YearMonth>().unwrap_err().is_parse());
        assert!("2024-01-01".parse::<YearMonth>().unwrap_err().is_parse());
    }

    quickcheck::quickcheck! {
        fn prop_text_roundtrip(v: YearMonth) -> bool {
            v.to_string().parse::<YearMonth>().unwrap() == v
        }
    }
}
