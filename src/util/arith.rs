/*!
Exact integer arithmetic.

Every addition, subtraction and multiplication used by date and time math in
this crate goes through these routines. They report an overflow error instead
of wrapping or panicking. An overflow error is not a range error: it means
the raw computation could not be carried out at all.

Division and remainder used for carrying between units always round toward
negative infinity, so the remainder has the sign of the divisor.
*/

use crate::Error;

pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_MILLI: i64 = 1_000_000;
pub(crate) const NANOS_PER_MICRO: i64 = 1_000;
pub(crate) const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
pub(crate) const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
pub(crate) const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;
pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub(crate) const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
pub(crate) const MINUTES_PER_DAY: i64 = 24 * 60;
pub(crate) const HOURS_PER_DAY: i64 = 24;
pub(crate) const MICROS_PER_DAY: i64 = NANOS_PER_DAY / NANOS_PER_MICRO;
pub(crate) const MILLIS_PER_DAY: i64 = NANOS_PER_DAY / NANOS_PER_MILLI;

/// Returns `a + b` or an overflow error naming `what`.
#[inline]
pub(crate) fn add(a: i64, b: i64, what: &'static str) -> Result<i64, Error> {
    a.checked_add(b).ok_or_else(|| Error::overflow(what))
}

/// Returns `a - b` or an overflow error naming `what`.
#[inline]
pub(crate) fn sub(a: i64, b: i64, what: &'static str) -> Result<i64, Error> {
    a.checked_sub(b).ok_or_else(|| Error::overflow(what))
}

/// Returns `a * b` or an overflow error naming `what`.
#[inline]
pub(crate) fn mul(a: i64, b: i64, what: &'static str) -> Result<i64, Error> {
    a.checked_mul(b).ok_or_else(|| Error::overflow(what))
}

/// Returns `-a` or an overflow error naming `what`.
///
/// This only fails for `i64::MIN`.
#[inline]
pub(crate) fn neg(a: i64, what: &'static str) -> Result<i64, Error> {
    a.checked_neg().ok_or_else(|| Error::overflow(what))
}

/// Returns `a + b` for 32-bit integers or an overflow error naming `what`.
#[inline]
pub(crate) fn add32(a: i32, b: i32, what: &'static str) -> Result<i32, Error> {
    a.checked_add(b).ok_or_else(|| Error::overflow(what))
}

/// Returns `a * b` for 32-bit integers or an overflow error naming `what`.
#[inline]
pub(crate) fn mul32(a: i32, b: i32, what: &'static str) -> Result<i32, Error> {
    a.checked_mul(b).ok_or_else(|| Error::overflow(what))
}

/// Converts a 64-bit integer to a 32-bit integer or returns an overflow
/// error naming `what`.
#[inline]
pub(crate) fn to_i32(a: i64, what: &'static str) -> Result<i32, Error> {
    i32::try_from(a).map_err(|_| Error::overflow(what))
}

/// Floor division. The quotient is rounded toward negative infinity.
///
/// The divisor must be positive.
#[inline]
pub(crate) const fn floor_div(a: i64, b: i64) -> i64 {
    debug_assert!(b > 0);
    a.div_euclid(b)
}

/// Floor modulo. The result is always in `0..b`.
///
/// The divisor must be positive.
#[inline]
pub(crate) const fn floor_mod(a: i64, b: i64) -> i64 {
    debug_assert!(b > 0);
    a.rem_euclid(b)
}
