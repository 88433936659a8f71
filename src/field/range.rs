use alloc::string::ToString;

use crate::{field::Field, Error};

/// The range of valid values for a field.
///
/// Some fields have a fixed range, like `MonthOfYear` which is always
/// `1..=12`. Others have a range whose maximum depends on context, like
/// `DayOfMonth`, whose maximum is somewhere between `28` and `31`. This type
/// captures both: the smallest and largest possible minimum, and the
/// smallest and largest possible maximum.
///
/// # Example
///
/// ```
/// use epochal::field::{ChronoField, ValueRange};
///
/// let range = ChronoField::DayOfMonth.range();
/// assert_eq!(range.to_string(), "1 - 28/31");
/// assert!(!range.is_fixed());
/// assert!(range.is_valid_value(31));
/// assert!(!range.is_valid_value(32));
///
/// assert_eq!(ValueRange::fixed(1, 12).to_string(), "1 - 12");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ValueRange {
    min_smallest: i64,
    min_largest: i64,
    max_smallest: i64,
    max_largest: i64,
}

impl ValueRange {
    /// Creates a range where both the minimum and maximum are fixed.
    ///
    /// # Panics
    ///
    /// When `min > max`.
    #[inline]
    pub const fn fixed(min: i64, max: i64) -> ValueRange {
        assert!(min <= max, "minimum must not exceed maximum");
        ValueRange {
            min_smallest: min,
            min_largest: min,
            max_smallest: max,
            max_largest: max,
        }
    }

    /// Creates a range with a fixed minimum and a maximum that varies
    /// between `max_smallest` and `max_largest`.
    ///
    /// # Panics
    ///
    /// When `min > max_smallest` or when `max_smallest > max_largest`.
    #[inline]
    pub const fn variable(
        min: i64,
        max_smallest: i64,
        max_largest: i64,
    ) -> ValueRange {
        assert!(min <= max_smallest, "minimum must not exceed maximum");
        assert!(
            max_smallest <= max_largest,
            "smallest maximum must not exceed largest maximum"
        );
        ValueRange {
            min_smallest: min,
            min_largest: min,
            max_smallest,
            max_largest,
        }
    }

    /// Returns the smallest possible minimum value.
    #[inline]
    pub const fn minimum(&self) -> i64 {
        self.min_smallest
    }

    /// Returns the largest possible minimum value.
    #[inline]
    pub const fn largest_minimum(&self) -> i64 {
        self.min_largest
    }

    /// Returns the smallest possible maximum value.
    #[inline]
    pub const fn smallest_maximum(&self) -> i64 {
        self.max_smallest
    }

    /// Returns the largest possible maximum value.
    #[inline]
    pub const fn maximum(&self) -> i64 {
        self.max_largest
    }

    /// Returns true when the minimum and maximum do not vary.
    #[inline]
    pub const fn is_fixed(&self) -> bool {
        self.min_smallest == self.min_largest
            && self.max_smallest == self.max_largest
    }

    /// Returns true when every value in this range fits into an `i32`.
    #[inline]
    pub const fn is_int_value(&self) -> bool {
        self.min_smallest >= i32::MIN as i64
            && self.max_largest <= i32::MAX as i64
    }

    /// Returns true when the given value is within this range.
    #[inline]
    pub const fn is_valid_value(&self, value: i64) -> bool {
        self.min_smallest <= value && value <= self.max_largest
    }

    /// Returns true when every value in this range fits into an `i32` and
    /// the given value is within this range.
    #[inline]
    pub const fn is_valid_int_value(&self, value: i64) -> bool {
        self.is_int_value() && self.is_valid_value(value)
    }

    /// Checks that the given value is within this range for the field
    /// given.
    ///
    /// # Errors
    ///
    /// This returns a range error naming the field when the value is
    /// outside of this range.
    pub fn check_valid_value(
        &self,
        value: i64,
        field: &dyn Field,
    ) -> Result<i64, Error> {
        if !self.is_valid_value(value) {
            return Err(Error::range(
                field.name().to_string(),
                value,
                self.min_smallest,
                self.max_largest,
            ));
        }
        Ok(value)
    }

    /// Checks that the given value is within this range for the field given
    /// and that it fits into an `i32`.
    ///
    /// # Errors
    ///
    /// This returns a range error naming the field when the value is
    /// outside of this range, or when this range does not fit into an `i32`.
    pub fn check_valid_int_value(
        &self,
        value: i64,
        field: &dyn Field,
    ) -> Result<i32, Error> {
        let value = self.check_valid_value(value, field)?;
        i32::try_from(value).map_err(|_| {
            Error::range(
                field.name().to_string(),
                value,
                i32::MIN,
                i32::MAX,
            )
        })
    }
}

impl core::fmt::Display for ValueRange {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.min_smallest)?;
        if self.min_smallest != self.min_largest {
            write!(f, "/{}", self.min_largest)?;
        }
        write!(f, " - {}", self.max_smallest)?;
        if self.max_smallest != self.max_largest {
            write!(f, "/{}", self.max_largest)?;
        }
        Ok(())
    }
}
