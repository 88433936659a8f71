/*!
The generic field and unit protocol.

A [`Field`] names a component of a temporal value, like the month of year or
the nanosecond of the day. A [`Unit`] names a quantity of time, like days or
centuries. Neither belongs to any particular temporal type. Instead, every
temporal type answers generic queries through [`TemporalAccessor`] and
generic adjustments through [`Temporal`].

The built-in fields and units, [`ChronoField`] and [`ChronoUnit`], are
closed enums. When a temporal type is given one of them, it dispatches on the
enum tag directly. Any other implementation of `Field` or `Unit` is
consulted through its trait methods instead, which call back into the
temporal value through its capability methods (like
[`TemporalAccessor::query_local_date`]). This is what lets a custom field
work with every temporal type in this crate without those types knowing
about it ahead of time.

User fields and units receive temporal values as a [`TemporalValue`], which
is a closed enum over every temporal type in this crate. It also implements
`Temporal` by delegating to the value it wraps.

# Example: a custom field

This defines a "quarter of year" field that works with any temporal value
that has a date:

```
use epochal::{
    civil::LocalDate,
    field::{
        ChronoField, Field, Temporal, TemporalAccessor, TemporalValue,
        ValueRange,
    },
    Error,
};

#[derive(Debug)]
struct QuarterOfYear;

impl Field for QuarterOfYear {
    fn name(&self) -> &str { "QuarterOfYear" }
    fn range(&self) -> ValueRange { ValueRange::fixed(1, 4) }
    fn is_date_based(&self) -> bool { true }
    fn is_time_based(&self) -> bool { false }

    fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool {
        temporal.query_local_date().is_some()
    }

    fn get_from(&self, temporal: &dyn TemporalAccessor) -> Result<i64, Error> {
        let date = temporal
            .query_local_date()
            .ok_or_else(|| Error::unsupported_field(self.name()))?;
        Ok(i64::from((date.month() - 1) / 3 + 1))
    }

    fn adjust_into(
        &self,
        temporal: TemporalValue,
        value: i64,
    ) -> Result<TemporalValue, Error> {
        let value = self.range().check_valid_value(value, self)?;
        let current = self.get_from(&temporal)?;
        let month = temporal.get_long(&ChronoField::MonthOfYear)?;
        temporal.with(&ChronoField::MonthOfYear, month + (value - current) * 3)
    }
}

let date = LocalDate::of(2024, 5, 31)?;
assert_eq!(date.get_long(&QuarterOfYear)?, 2);
assert_eq!(date.with(&QuarterOfYear, 4)?, LocalDate::of(2024, 11, 30)?);
assert!(date.with(&QuarterOfYear, 5).unwrap_err().is_range());

# Ok::<(), Box<dyn std::error::Error>>(())
```
*/

use alloc::vec::Vec;

use crate::{
    civil::{LocalDate, LocalDateTime, LocalTime, YearMonth},
    error::field::Error as E,
    tz::{TimeZone, ZoneOffset},
    Duration, Error, Instant, OffsetDateTime, ZonedDateTime,
};

pub use self::{
    chrono_field::ChronoField, chrono_unit::ChronoUnit, range::ValueRange,
};

mod chrono_field;
mod chrono_unit;
mod range;

/// A field of a temporal value, such as month-of-year or hour-of-day.
///
/// This trait is implemented by [`ChronoField`] and may be implemented by
/// users to define their own fields. See the [module documentation](self)
/// for an example.
pub trait Field: core::fmt::Debug {
    /// Returns the name of this field. This is used in error messages.
    fn name(&self) -> &str;

    /// Returns the outer range of valid values for this field.
    fn range(&self) -> ValueRange;

    /// Returns true when this field is a component of a date.
    fn is_date_based(&self) -> bool;

    /// Returns true when this field is a component of a time of day.
    fn is_time_based(&self) -> bool;

    /// Returns true when this field can be queried from the temporal value
    /// given.
    fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool;

    /// Returns the range of valid values for this field, refined by the
    /// temporal value given.
    ///
    /// By default, this returns the outer range of this field.
    fn range_refined_by(
        &self,
        temporal: &dyn TemporalAccessor,
    ) -> Result<ValueRange, Error> {
        let _ = temporal;
        Ok(self.range())
    }

    /// Returns the value of this field from the temporal value given.
    fn get_from(&self, temporal: &dyn TemporalAccessor) -> Result<i64, Error>;

    /// Returns a copy of the temporal value given with this field set to
    /// `value`.
    ///
    /// Implementations should return a value of the same kind as the one
    /// given. Returning a different kind results in an error.
    fn adjust_into(
        &self,
        temporal: TemporalValue,
        value: i64,
    ) -> Result<TemporalValue, Error>;

    /// Returns this field as a built-in field, if it is one.
    ///
    /// Temporal values use this to dispatch built-in fields directly.
    /// User implementations should use the default, which returns `None`.
    fn as_chrono_field(&self) -> Option<ChronoField> {
        None
    }
}

/// A unit of time, such as days or hours.
///
/// This trait is implemented by [`ChronoUnit`] and may be implemented by
/// users to define their own units.
pub trait Unit: core::fmt::Debug {
    /// Returns the name of this unit. This is used in error messages.
    fn name(&self) -> &str;

    /// Returns the duration of this unit, which may be an estimate.
    fn duration(&self) -> Duration;

    /// Returns true when the duration of this unit is an estimate.
    fn is_duration_estimated(&self) -> bool;

    /// Returns true when this unit is a date unit.
    fn is_date_based(&self) -> bool;

    /// Returns true when this unit is a time unit.
    fn is_time_based(&self) -> bool;

    /// Returns true when this unit can be added to the temporal value given.
    fn is_supported_by(&self, temporal: &TemporalValue) -> bool;

    /// Returns a copy of the temporal value given with `amount` of this
    /// unit added to it.
    fn add_to(
        &self,
        temporal: TemporalValue,
        amount: i64,
    ) -> Result<TemporalValue, Error>;

    /// Returns the whole amount of this unit between `start` and `end`.
    ///
    /// The amount is negative when `end` precedes `start`.
    fn between(
        &self,
        start: &TemporalValue,
        end: &TemporalValue,
    ) -> Result<i64, Error>;

    /// Returns this unit as a built-in unit, if it is one.
    ///
    /// Temporal values use this to dispatch built-in units directly.
    /// User implementations should use the default, which returns `None`.
    fn as_chrono_unit(&self) -> Option<ChronoUnit> {
        None
    }
}

/// Read-only access to the fields of a temporal value.
///
/// This is implemented by every temporal type in this crate, including
/// [`MonthDay`](crate::civil::MonthDay), which cannot be adjusted
/// generically.
///
/// Besides field access, this trait provides capability methods like
/// [`TemporalAccessor::query_local_date`]. User defined fields use these to
/// compute their values without knowing the concrete type they were given.
pub trait TemporalAccessor {
    /// Returns true when the field given can be queried from this value.
    fn is_supported(&self, field: &dyn Field) -> bool;

    /// Returns the range of valid values of the field given for this value.
    ///
    /// # Errors
    ///
    /// This returns an error when the field is not supported.
    fn range(&self, field: &dyn Field) -> Result<ValueRange, Error>;

    /// Returns the value of the field given.
    ///
    /// # Errors
    ///
    /// This returns an error when the field is not supported.
    fn get_long(&self, field: &dyn Field) -> Result<i64, Error>;

    /// Returns the value of the field given as an `i32`.
    ///
    /// # Errors
    ///
    /// This returns an error when the field is not supported, or when
    /// the field's range does not fit into an `i32` (like
    /// [`ChronoField::EpochDay`]). Use [`TemporalAccessor::get_long`] for
    /// those fields.
    fn get(&self, field: &dyn Field) -> Result<i32, Error> {
        let range = self.range(field)?;
        if !range.is_int_value() {
            return Err(Error::unsupported_field(field.name()));
        }
        range.check_valid_int_value(self.get_long(field)?, field)
    }

    /// Returns the calendar date of this value, if it has one.
    fn query_local_date(&self) -> Option<LocalDate> {
        None
    }

    /// Returns the time of day of this value, if it has one.
    fn query_local_time(&self) -> Option<LocalTime> {
        None
    }

    /// Returns the offset from UTC of this value, if it has one.
    fn query_offset(&self) -> Option<ZoneOffset> {
        None
    }

    /// Returns the time zone of this value, if it has one.
    fn query_zone(&self) -> Option<TimeZone> {
        None
    }

    /// Returns the instant on the timeline of this value, if it has one.
    fn query_instant(&self) -> Option<Instant> {
        None
    }
}

/// Generic adjustment and arithmetic on a temporal value.
///
/// Every operation returns a new value. No temporal value in this crate is
/// ever mutated.
pub trait Temporal: TemporalAccessor + Clone + Sized {
    /// Returns true when the unit given can be added to this value.
    fn is_supported_unit(&self, unit: &dyn Unit) -> bool;

    /// Returns a copy of this value with the field given set to `value`.
    ///
    /// # Errors
    ///
    /// This returns a range error when the value is invalid for the field,
    /// and an unsupported error when the field is not supported.
    fn with(&self, field: &dyn Field, value: i64) -> Result<Self, Error>;

    /// Returns a copy of this value with `amount` of the unit given added.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit is not supported, when the
    /// arithmetic overflows or when the result is out of range.
    fn plus(&self, amount: i64, unit: &dyn Unit) -> Result<Self, Error>;

    /// Returns a copy of this value with `amount` of the unit given
    /// subtracted.
    ///
    /// # Errors
    ///
    /// This returns an error in the same cases as [`Temporal::plus`].
    fn minus(&self, amount: i64, unit: &dyn Unit) -> Result<Self, Error> {
        if amount == i64::MIN {
            self.plus(i64::MAX, unit)?.plus(1, unit)
        } else {
            self.plus(-amount, unit)
        }
    }

    /// Returns the whole amount of the unit given from this value until
    /// `end`.
    ///
    /// The amount is truncated toward zero. So adding the amount returned
    /// back to this value never goes past `end`.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit is not supported or when the
    /// amount overflows an `i64`.
    fn until(&self, end: &Self, unit: &dyn Unit) -> Result<i64, Error>;

    /// Returns a copy of this value with the amount given added.
    fn plus_amount<A: Amount>(&self, amount: &A) -> Result<Self, Error> {
        amount.add_to(self.clone())
    }

    /// Returns a copy of this value with the amount given subtracted.
    fn minus_amount<A: Amount>(&self, amount: &A) -> Result<Self, Error> {
        amount.subtract_from(self.clone())
    }

    /// Wraps this value into a [`TemporalValue`].
    fn into_temporal_value(self) -> TemporalValue;

    /// Converts a [`TemporalValue`] into this type.
    ///
    /// This succeeds when the value wrapped carries everything this type
    /// needs. For example, a `LocalDate` can be extracted from any value
    /// with a date, but a `LocalDateTime` cannot be extracted from a
    /// `LocalDate`.
    ///
    /// # Errors
    ///
    /// This returns an error when the value wrapped lacks a component that
    /// this type needs.
    fn from_temporal_value(value: TemporalValue) -> Result<Self, Error>;
}

/// An amount of time made up of units, like a [`Period`](crate::Period) or a
/// [`Duration`].
///
/// Adding an amount to a temporal value adds the magnitude of each unit in
/// the order returned by [`Amount::units`]. The order matters. For example,
/// a `Period` adds years, then months and then days, since adding years or
/// months can change the last valid day of the month.
pub trait Amount {
    /// Returns the units of this amount in the order they are applied.
    fn units(&self) -> Vec<&dyn Unit>;

    /// Returns the magnitude of the unit given.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit is not one of [`Amount::units`].
    fn get(&self, unit: &dyn Unit) -> Result<i64, Error>;

    /// Returns a copy of the temporal value given with this amount added.
    fn add_to<T: Temporal>(&self, temporal: T) -> Result<T, Error> {
        let mut temporal = temporal;
        for unit in self.units() {
            let amount = self.get(unit)?;
            if amount != 0 {
                temporal = temporal.plus(amount, unit)?;
            }
        }
        Ok(temporal)
    }

    /// Returns a copy of the temporal value given with this amount
    /// subtracted.
    fn subtract_from<T: Temporal>(&self, temporal: T) -> Result<T, Error> {
        let mut temporal = temporal;
        for unit in self.units() {
            let amount = self.get(unit)?;
            if amount != 0 {
                temporal = temporal.minus(amount, unit)?;
            }
        }
        Ok(temporal)
    }
}

/// A closed sum of every temporal type in this crate.
///
/// User implementations of [`Field`] and [`Unit`] receive and return values
/// of this type. It implements [`Temporal`] by delegating to the value it
/// wraps.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TemporalValue {
    /// An [`Instant`].
    Instant(Instant),
    /// A [`LocalDate`].
    LocalDate(LocalDate),
    /// A [`LocalTime`].
    LocalTime(LocalTime),
    /// A [`LocalDateTime`].
    LocalDateTime(LocalDateTime),
    /// An [`OffsetDateTime`].
    OffsetDateTime(OffsetDateTime),
    /// A [`ZonedDateTime`].
    ZonedDateTime(ZonedDateTime),
    /// A [`YearMonth`].
    YearMonth(YearMonth),
}

impl TemporalValue {
    /// Returns the name of the type wrapped.
    pub fn kind(&self) -> &'static str {
        match *self {
            TemporalValue::Instant(_) => "Instant",
            TemporalValue::LocalDate(_) => "LocalDate",
            TemporalValue::LocalTime(_) => "LocalTime",
            TemporalValue::LocalDateTime(_) => "LocalDateTime",
            TemporalValue::OffsetDateTime(_) => "OffsetDateTime",
            TemporalValue::ZonedDateTime(_) => "ZonedDateTime",
            TemporalValue::YearMonth(_) => "YearMonth",
        }
    }

    fn as_accessor(&self) -> &dyn TemporalAccessor {
        match *self {
            TemporalValue::Instant(ref v) => v,
            TemporalValue::LocalDate(ref v) => v,
            TemporalValue::LocalTime(ref v) => v,
            TemporalValue::LocalDateTime(ref v) => v,
            TemporalValue::OffsetDateTime(ref v) => v,
            TemporalValue::ZonedDateTime(ref v) => v,
            TemporalValue::YearMonth(ref v) => v,
        }
    }
}

/// Dispatches `$body` on the value wrapped by a `TemporalValue`, with the
/// result wrapped back up into the same variant.
macro_rules! map_temporal_value {
    ($value:expr, $v:ident => $body:expr) => {
        match $value {
            TemporalValue::Instant(ref $v) => {
                $body.map(TemporalValue::Instant)
            }
            TemporalValue::LocalDate(ref $v) => {
                $body.map(TemporalValue::LocalDate)
            }
            TemporalValue::LocalTime(ref $v) => {
                $body.map(TemporalValue::LocalTime)
            }
            TemporalValue::LocalDateTime(ref $v) => {
                $body.map(TemporalValue::LocalDateTime)
            }
            TemporalValue::OffsetDateTime(ref $v) => {
                $body.map(TemporalValue::OffsetDateTime)
            }
            TemporalValue::ZonedDateTime(ref $v) => {
                $body.map(TemporalValue::ZonedDateTime)
            }
            TemporalValue::YearMonth(ref $v) => {
                $body.map(TemporalValue::YearMonth)
            }
        }
    };
}

impl TemporalAccessor for TemporalValue {
    fn is_supported(&self, field: &dyn Field) -> bool {
        self.as_accessor().is_supported(field)
    }

    fn range(&self, field: &dyn Field) -> Result<ValueRange, Error> {
        self.as_accessor().range(field)
    }

    fn get_long(&self, field: &dyn Field) -> Result<i64, Error> {
        self.as_accessor().get_long(field)
    }

    fn query_local_date(&self) -> Option<LocalDate> {
        self.as_accessor().query_local_date()
    }

    fn query_local_time(&self) -> Option<LocalTime> {
        self.as_accessor().query_local_time()
    }

    fn query_offset(&self) -> Option<ZoneOffset> {
        self.as_accessor().query_offset()
    }

    fn query_zone(&self) -> Option<TimeZone> {
        self.as_accessor().query_zone()
    }

    fn query_instant(&self) -> Option<Instant> {
        self.as_accessor().query_instant()
    }
}

impl Temporal for TemporalValue {
    fn is_supported_unit(&self, unit: &dyn Unit) -> bool {
        match *self {
            TemporalValue::Instant(ref v) => v.is_supported_unit(unit),
            TemporalValue::LocalDate(ref v) => v.is_supported_unit(unit),
            TemporalValue::LocalTime(ref v) => v.is_supported_unit(unit),
            TemporalValue::LocalDateTime(ref v) => v.is_supported_unit(unit),
            TemporalValue::OffsetDateTime(ref v) => v.is_supported_unit(unit),
            TemporalValue::ZonedDateTime(ref v) => v.is_supported_unit(unit),
            TemporalValue::YearMonth(ref v) => v.is_supported_unit(unit),
        }
    }

    fn with(&self, field: &dyn Field, value: i64) -> Result<Self, Error> {
        map_temporal_value!(*self, v => v.with(field, value))
    }

    fn plus(&self, amount: i64, unit: &dyn Unit) -> Result<Self, Error> {
        map_temporal_value!(*self, v => v.plus(amount, unit))
    }

    fn until(&self, end: &Self, unit: &dyn Unit) -> Result<i64, Error> {
        fn until<T: Temporal>(
            start: &T,
            end: &TemporalValue,
            unit: &dyn Unit,
        ) -> Result<i64, Error> {
            let end = T::from_temporal_value(end.clone())?;
            start.until(&end, unit)
        }

        match *self {
            TemporalValue::Instant(ref v) => until(v, end, unit),
            TemporalValue::LocalDate(ref v) => until(v, end, unit),
            TemporalValue::LocalTime(ref v) => until(v, end, unit),
            TemporalValue::LocalDateTime(ref v) => until(v, end, unit),
            TemporalValue::OffsetDateTime(ref v) => until(v, end, unit),
            TemporalValue::ZonedDateTime(ref v) => until(v, end, unit),
            TemporalValue::YearMonth(ref v) => until(v, end, unit),
        }
    }

    fn into_temporal_value(self) -> TemporalValue {
        self
    }

    fn from_temporal_value(value: TemporalValue) -> Result<Self, Error> {
        Ok(value)
    }
}

/// Sets a user defined field on a concrete temporal value.
///
/// This round trips the value through `TemporalValue` and checks that the
/// field gave back the same kind of value.
pub(crate) fn adjust_with_field<T: Temporal>(
    temporal: &T,
    field: &dyn Field,
    value: i64,
) -> Result<T, Error> {
    let original = temporal.clone().into_temporal_value();
    let expected = original.kind();
    let adjusted = field.adjust_into(original, value)?;
    let found = adjusted.kind();
    if expected != found {
        return Err(Error::from(E::MismatchedTemporal { expected, found }));
    }
    T::from_temporal_value(adjusted)
}

/// Adds an amount of a user defined unit to a concrete temporal value.
///
/// This round trips the value through `TemporalValue` and checks that the
/// unit gave back the same kind of value.
pub(crate) fn add_with_unit<T: Temporal>(
    temporal: &T,
    amount: i64,
    unit: &dyn Unit,
) -> Result<T, Error> {
    let original = temporal.clone().into_temporal_value();
    let expected = original.kind();
    let added = unit.add_to(original, amount)?;
    let found = added.kind();
    if expected != found {
        return Err(Error::from(E::MismatchedTemporal { expected, found }));
    }
    T::from_temporal_value(added)
}

/// Computes the amount of a user defined unit between two concrete temporal
/// values.
pub(crate) fn between_with_unit<T: Temporal>(
    start: &T,
    end: &T,
    unit: &dyn Unit,
) -> Result<i64, Error> {
    let start = start.clone().into_temporal_value();
    let end = end.clone().into_temporal_value();
    unit.between(&start, &end)
}

/// Returns the range of a field for a concrete temporal value.
///
/// Built-in fields are answered by `builtin`. User defined fields are asked
/// to refine their own range.
pub(crate) fn range_of(
    temporal: &dyn TemporalAccessor,
    field: &dyn Field,
    builtin: impl FnOnce(ChronoField) -> Option<ValueRange>,
) -> Result<ValueRange, Error> {
    match field.as_chrono_field() {
        Some(f) => {
            builtin(f).ok_or_else(|| Error::unsupported_field(f.name()))
        }
        None => field.range_refined_by(temporal),
    }
}

/// Returns an error indicating that the field given is unsupported.
#[cold]
#[inline(never)]
pub(crate) fn unsupported_field(field: ChronoField) -> Error {
    Error::unsupported_field(field.name())
}

/// Returns an error indicating that the unit given is unsupported.
#[cold]
#[inline(never)]
pub(crate) fn unsupported_unit(unit: ChronoUnit) -> Error {
    Error::unsupported_unit(unit.name())
}

/// Returns an error indicating that a temporal value of kind `expected`
/// cannot be extracted from the value given.
#[cold]
#[inline(never)]
pub(crate) fn mismatched(
    expected: &'static str,
    found: &TemporalValue,
) -> Error {
    Error::from(E::MismatchedTemporal { expected, found: found.kind() })
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::{
        civil::{LocalDate, LocalTime},
        Period,
    };

    use super::*;

    /// A unit of two weeks, defined outside of the built-in units.
    #[derive(Debug)]
    struct Fortnights;

    impl Unit for Fortnights {
        fn name(&self) -> &str {
            "Fortnights"
        }

        fn duration(&self) -> Duration {
            Duration::of_days(14).unwrap()
        }

        fn is_duration_estimated(&self) -> bool {
            true
        }

        fn is_date_based(&self) -> bool {
            true
        }

        fn is_time_based(&self) -> bool {
            false
        }

        fn is_supported_by(&self, temporal: &TemporalValue) -> bool {
            temporal.is_supported_unit(&ChronoUnit::Weeks)
        }

        fn add_to(
            &self,
            temporal: TemporalValue,
            amount: i64,
        ) -> Result<TemporalValue, Error> {
            let weeks = amount
                .checked_mul(2)
                .ok_or_else(|| Error::from_args(format_args!("overflow")))?;
            temporal.plus(weeks, &ChronoUnit::Weeks)
        }

        fn between(
            &self,
            start: &TemporalValue,
            end: &TemporalValue,
        ) -> Result<i64, Error> {
            Ok(start.until(end, &ChronoUnit::Weeks)? / 2)
        }
    }

    /// A field that always claims to produce a `LocalTime`.
    #[derive(Debug)]
    struct Rogue;

    impl Field for Rogue {
        fn name(&self) -> &str {
            "Rogue"
        }

        fn range(&self) -> ValueRange {
            ValueRange::fixed(0, 0)
        }

        fn is_date_based(&self) -> bool {
            false
        }

        fn is_time_based(&self) -> bool {
            false
        }

        fn is_supported_by(&self, _: &dyn TemporalAccessor) -> bool {
            true
        }

        fn get_from(&self, _: &dyn TemporalAccessor) -> Result<i64, Error> {
            Ok(0)
        }

        fn adjust_into(
            &self,
            _: TemporalValue,
            _: i64,
        ) -> Result<TemporalValue, Error> {
            Ok(TemporalValue::LocalTime(LocalTime::NOON))
        }
    }

    /// An amount that adds days before months.
    struct DaysThenMonths {
        days: i64,
        months: i64,
    }

    impl Amount for DaysThenMonths {
        fn units(&self) -> Vec<&dyn Unit> {
            vec![&ChronoUnit::Days, &ChronoUnit::Months]
        }

        fn get(&self, unit: &dyn Unit) -> Result<i64, Error> {
            match unit.as_chrono_unit() {
                Some(ChronoUnit::Days) => Ok(self.days),
                Some(ChronoUnit::Months) => Ok(self.months),
                _ => Err(Error::unsupported_unit(unit.name())),
            }
        }
    }

    #[test]
    fn custom_unit() {
        let start = LocalDate::of(2024, 1, 1).unwrap();
        let end = start.plus(3, &Fortnights).unwrap();
        assert_eq!(end, LocalDate::of(2024, 2, 12).unwrap());
        assert_eq!(start.until(&end, &Fortnights).unwrap(), 3);
        assert_eq!(end.minus(3, &Fortnights).unwrap(), start);
        assert!(Fortnights
            .is_supported_by(&TemporalValue::LocalDate(start)));
        assert!(!Fortnights
            .is_supported_by(&TemporalValue::LocalTime(LocalTime::NOON)));
        assert!(LocalTime::NOON
            .plus(1, &Fortnights)
            .unwrap_err()
            .is_unsupported());
    }

    #[test]
    fn mismatched_custom_field() {
        let date = LocalDate::of(2024, 1, 1).unwrap();
        let err = date.with(&Rogue, 0).unwrap_err();
        assert_eq!(
            alloc::string::ToString::to_string(&err),
            "expected adjustment to produce a LocalDate, but got a LocalTime",
        );
    }

    #[test]
    fn amount_order_matters() {
        let date = LocalDate::of(2007, 1, 31).unwrap();
        // 2007-01-31 + 1 day = 2007-02-01, then + 1 month = 2007-03-01.
        let days_first = DaysThenMonths { days: 1, months: 1 };
        assert_eq!(
            date.plus_amount(&days_first).unwrap(),
            LocalDate::of(2007, 3, 1).unwrap(),
        );
        // 2007-01-31 + 1 month = 2007-02-28, then + 1 day = 2007-03-01.
        // And for 30 days in January, the orders really disagree.
        let date = LocalDate::of(2007, 1, 30).unwrap();
        assert_eq!(
            date.plus_amount(&days_first).unwrap(),
            LocalDate::of(2007, 2, 28).unwrap(),
        );
        assert_eq!(
            date.plus_amount(&Period::of(0, 1, 1)).unwrap(),
            LocalDate::of(2007, 3, 1).unwrap(),
        );
    }

    #[test]
    fn temporal_value_delegates() {
        let date = LocalDate::of(2024, 2, 29).unwrap();
        let value = TemporalValue::LocalDate(date);
        assert_eq!(value.get_long(&ChronoField::DayOfYear).unwrap(), 60);
        assert_eq!(
            value.range(&ChronoField::DayOfMonth).unwrap(),
            ValueRange::fixed(1, 29),
        );
        let next = value.plus(1, &ChronoUnit::Years).unwrap();
        assert_eq!(
            next,
            TemporalValue::LocalDate(LocalDate::of(2025, 2, 28).unwrap()),
        );
        assert_eq!(value.until(&next, &ChronoUnit::Days).unwrap(), 365);
        assert!(value.query_local_time().is_none());
        assert_eq!(value.kind(), "LocalDate");
    }
}
