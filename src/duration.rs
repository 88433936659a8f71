use alloc::{vec, vec::Vec};

use crate::{
    error::{duration::Error as E, ErrorContext},
    field::{Amount, ChronoField, ChronoUnit, Temporal, Unit},
    fmt::{parser, printer},
    util::arith::{
        self, floor_div, floor_mod, NANOS_PER_MILLI, NANOS_PER_SECOND,
        SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
    },
    Error,
};

/// An exact amount of elapsed time, with nanosecond precision.
///
/// A duration is a number of seconds and a nanosecond adjustment in the
/// range `0..=999_999_999`. A negative duration has negative seconds and,
/// possibly, a positive nanosecond adjustment. For example, `-0.5` seconds
/// is represented as `-1` seconds and `500_000_000` nanoseconds.
///
/// Unlike a [`Period`](crate::Period), a duration has a fixed length. A day
/// in a duration is always exactly 24 hours.
///
/// # Text format
///
/// Durations print in the ISO 8601 duration format using hours, minutes
/// and seconds only, like `PT8H6M12.345S`. Parsing also accepts a days
/// component and signs, like `-P1DT-2H`.
///
/// # Example
///
/// ```
/// use epochal::Duration;
///
/// let d = Duration::of_hours(8)?
///     .plus(Duration::of_minutes(6)?)?
///     .plus(Duration::of_millis(12_345))?;
/// assert_eq!(d.to_string(), "PT8H6M12.345S");
/// assert_eq!("PT8H6M12.345S".parse::<Duration>()?, d);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Duration {
    seconds: i64,
    nanos: i32,
}

impl Duration {
    /// A duration of zero length.
    pub const ZERO: Duration = Duration { seconds: 0, nanos: 0 };

    /// Creates a duration from a number of standard 24 hour days.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the number of seconds overflows
    /// an `i64`.
    pub fn of_days(days: i64) -> Result<Duration, Error> {
        let seconds = arith::mul(days, SECONDS_PER_DAY, "duration seconds")?;
        Ok(Duration::of_seconds(seconds))
    }

    /// Creates a duration from a number of hours.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the number of seconds overflows
    /// an `i64`.
    pub fn of_hours(hours: i64) -> Result<Duration, Error> {
        let seconds = arith::mul(hours, SECONDS_PER_HOUR, "duration seconds")?;
        Ok(Duration::of_seconds(seconds))
    }

    /// Creates a duration from a number of minutes.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the number of seconds overflows
    /// an `i64`.
    pub fn of_minutes(minutes: i64) -> Result<Duration, Error> {
        let seconds =
            arith::mul(minutes, SECONDS_PER_MINUTE, "duration seconds")?;
        Ok(Duration::of_seconds(seconds))
    }

    /// Creates a duration from a number of seconds.
    pub const fn of_seconds(seconds: i64) -> Duration {
        Duration { seconds, nanos: 0 }
    }

    /// Creates a duration from a number of seconds and a nanosecond
    /// adjustment.
    ///
    /// The adjustment may be negative or bigger than a second. It is
    /// normalized into the seconds using floor division.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when normalizing the nanosecond
    /// adjustment overflows the seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::Duration;
    ///
    /// let d = Duration::of_seconds_adjusted(3, -1)?;
    /// assert_eq!((d.seconds(), d.nano()), (2, 999_999_999));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of_seconds_adjusted(
        seconds: i64,
        nano_adjustment: i64,
    ) -> Result<Duration, Error> {
        let seconds = arith::add(
            seconds,
            floor_div(nano_adjustment, NANOS_PER_SECOND),
            "duration seconds",
        )?;
        let nanos = floor_mod(nano_adjustment, NANOS_PER_SECOND) as i32;
        Ok(Duration { seconds, nanos })
    }

    /// Creates a duration from a number of milliseconds.
    pub const fn of_millis(millis: i64) -> Duration {
        let seconds = floor_div(millis, 1_000);
        let nanos = (floor_mod(millis, 1_000) * NANOS_PER_MILLI) as i32;
        Duration { seconds, nanos }
    }

    /// Creates a duration from a number of nanoseconds.
    pub const fn of_nanos(nanos: i64) -> Duration {
        Duration::of_nanos_const(nanos)
    }

    /// Creates a duration from an amount of the unit given.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit's duration is an estimate (other
    /// than days, which are treated as exactly 24 hours), or when the
    /// amount overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::{field::ChronoUnit, Duration};
    ///
    /// assert_eq!(
    ///     Duration::of(3, &ChronoUnit::HalfDays)?,
    ///     Duration::of_hours(36)?,
    /// );
    /// assert!(Duration::of(1, &ChronoUnit::Months).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of(amount: i64, unit: &dyn Unit) -> Result<Duration, Error> {
        Duration::ZERO.plus_unit(amount, unit).context(E::FailedOfUnit)
    }

    /// Returns the exact duration between two temporal values.
    ///
    /// The duration is negative when `end` precedes `start`. This computes
    /// the duration in nanoseconds when possible. When the number of
    /// nanoseconds overflows an `i64`, this falls back to seconds plus the
    /// difference of the nanosecond-of-second fields.
    ///
    /// # Errors
    ///
    /// This returns an error when the temporal type doesn't support
    /// seconds. For example, a [`LocalDate`](crate::civil::LocalDate).
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::{Duration, Instant};
    ///
    /// let start = Instant::of_epoch_second_adjusted(0, 500_000_000)?;
    /// let end = Instant::of_epoch_second_adjusted(10, 200_000_000)?;
    /// assert_eq!(
    ///     Duration::between(&start, &end)?,
    ///     Duration::of_millis(9_700),
    /// );
    ///
    /// let start = Instant::MIN;
    /// let end = Instant::MAX;
    /// let d = Duration::between(&start, &end)?;
    /// assert_eq!(d.seconds(), Instant::MAX_SECOND - Instant::MIN_SECOND);
    /// assert_eq!(d.nano(), 999_999_999);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn between<T: Temporal>(
        start: &T,
        end: &T,
    ) -> Result<Duration, Error> {
        match start.until(end, &ChronoUnit::Nanos) {
            Ok(nanos) => Ok(Duration::of_nanos(nanos)),
            Err(err) if err.is_overflow() => {
                Duration::between_seconds(start, end)
            }
            Err(err) => Err(err.context(E::FailedBetween)),
        }
    }

    #[cold]
    #[inline(never)]
    fn between_seconds<T: Temporal>(
        start: &T,
        end: &T,
    ) -> Result<Duration, Error> {
        let mut seconds = start
            .until(end, &ChronoUnit::Seconds)
            .context(E::FailedBetween)?;
        let field = ChronoField::NanoOfSecond;
        let nanos = match (end.get_long(&field), start.get_long(&field)) {
            (Ok(end), Ok(start)) => {
                let nanos = end - start;
                if seconds > 0 && nanos < 0 {
                    seconds += 1;
                } else if seconds < 0 && nanos > 0 {
                    seconds -= 1;
                }
                nanos
            }
            _ => 0,
        };
        Duration::of_seconds_adjusted(seconds, nanos)
    }

    /// Returns the number of whole seconds in this duration.
    ///
    /// For negative durations, the nanosecond adjustment is still
    /// positive. So `-0.5` seconds returns `-1` here.
    #[inline]
    pub const fn seconds(self) -> i64 {
        self.seconds
    }

    /// Returns the nanosecond adjustment of this duration, in the range
    /// `0..=999_999_999`.
    #[inline]
    pub const fn nano(self) -> i32 {
        self.nanos
    }

    /// Returns true when this duration has zero length.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    /// Returns true when this duration is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.seconds < 0
    }

    /// Returns a copy of this duration with the seconds given.
    #[inline]
    pub const fn with_seconds(self, seconds: i64) -> Duration {
        Duration { seconds, nanos: self.nanos }
    }

    /// Returns a copy of this duration with the nanosecond adjustment given.
    ///
    /// # Errors
    ///
    /// This returns a range error when `nano` is not in
    /// `0..=999_999_999`.
    pub fn with_nanos(self, nano: i32) -> Result<Duration, Error> {
        let nanos = ChronoField::NanoOfSecond
            .check_valid_int_value(i64::from(nano))?;
        Ok(Duration { seconds: self.seconds, nanos })
    }

    /// Returns the sum of this duration and the one given.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the sum overflows.
    pub fn plus(self, other: Duration) -> Result<Duration, Error> {
        self.plus_parts(other.seconds, i64::from(other.nanos))
    }

    /// Returns the difference of this duration and the one given.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the difference overflows.
    pub fn minus(self, other: Duration) -> Result<Duration, Error> {
        let seconds = arith::neg(other.seconds, "duration seconds");
        // `-i64::MIN` overflows, but subtracting it may still not.
        match seconds {
            Ok(seconds) => self
                .plus_parts(seconds, -i64::from(other.nanos)),
            Err(_) => self
                .plus_parts(i64::MAX, -i64::from(other.nanos))?
                .plus_parts(1, 0),
        }
    }

    /// Returns a copy of this duration with an amount of the unit given
    /// added.
    ///
    /// Days are treated as exactly 24 hours. Other units with estimated
    /// durations are rejected.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit's duration is an estimate or
    /// when the arithmetic overflows.
    pub fn plus_unit(
        self,
        amount: i64,
        unit: &dyn Unit,
    ) -> Result<Duration, Error> {
        if unit.as_chrono_unit() == Some(ChronoUnit::Days) {
            let seconds =
                arith::mul(amount, SECONDS_PER_DAY, "duration seconds")?;
            return self.plus_parts(seconds, 0);
        }
        if unit.is_duration_estimated() {
            return Err(Error::unsupported_unit(unit.name()))
                .context(E::UnitHasEstimatedDuration {
                    unit: match unit.as_chrono_unit() {
                        Some(unit) => unit.name(),
                        None => "(custom)",
                    },
                });
        }
        if amount == 0 {
            return Ok(self);
        }
        match unit.as_chrono_unit() {
            Some(ChronoUnit::Nanos) => self.plus_nanos(amount),
            Some(ChronoUnit::Micros) => {
                let seconds = amount / 1_000_000;
                let nanos = (amount % 1_000_000) * 1_000;
                self.plus_parts(seconds, nanos)
            }
            Some(ChronoUnit::Millis) => self.plus_millis(amount),
            Some(ChronoUnit::Seconds) => self.plus_seconds(amount),
            Some(unit) => {
                let seconds = arith::mul(
                    unit.duration().seconds,
                    amount,
                    "duration seconds",
                )?;
                self.plus_seconds(seconds)
            }
            None => {
                let d = unit.duration().multiplied_by(amount)?;
                self.plus(d)
            }
        }
    }

    /// Returns a copy of this duration with a number of 24 hour days added.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the arithmetic overflows.
    pub fn plus_days(self, days: i64) -> Result<Duration, Error> {
        let seconds = arith::mul(days, SECONDS_PER_DAY, "duration seconds")?;
        self.plus_seconds(seconds)
    }

    /// Returns a copy of this duration with a number of hours added.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the arithmetic overflows.
    pub fn plus_hours(self, hours: i64) -> Result<Duration, Error> {
        self.plus_seconds(arith::mul(
            hours,
            SECONDS_PER_HOUR,
            "duration seconds",
        )?)
    }

    /// Returns a copy of this duration with a number of minutes added.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the arithmetic overflows.
    pub fn plus_minutes(self, minutes: i64) -> Result<Duration, Error> {
        self.plus_seconds(arith::mul(
            minutes,
            SECONDS_PER_MINUTE,
            "duration seconds",
        )?)
    }

    /// Returns a copy of this duration with a number of seconds added.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the arithmetic overflows.
    pub fn plus_seconds(self, seconds: i64) -> Result<Duration, Error> {
        self.plus_parts(seconds, 0)
    }

    /// Returns a copy of this duration with a number of milliseconds added.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the arithmetic overflows.
    pub fn plus_millis(self, millis: i64) -> Result<Duration, Error> {
        self.plus_parts(millis / 1_000, (millis % 1_000) * NANOS_PER_MILLI)
    }

    /// Returns a copy of this duration with a number of nanoseconds added.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the arithmetic overflows.
    pub fn plus_nanos(self, nanos: i64) -> Result<Duration, Error> {
        self.plus_parts(0, nanos)
    }

    /// Returns a copy of this duration with a number of 24 hour days
    /// subtracted.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the arithmetic overflows.
    pub fn minus_days(self, days: i64) -> Result<Duration, Error> {
        self.minus(Duration::of_days(days)?)
    }

    /// Returns a copy of this duration with a number of hours subtracted.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the arithmetic overflows.
    pub fn minus_hours(self, hours: i64) -> Result<Duration, Error> {
        self.minus(Duration::of_hours(hours)?)
    }

    /// Returns a copy of this duration with a number of minutes subtracted.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the arithmetic overflows.
    pub fn minus_minutes(self, minutes: i64) -> Result<Duration, Error> {
        self.minus(Duration::of_minutes(minutes)?)
    }

    /// Returns a copy of this duration with a number of seconds subtracted.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the arithmetic overflows.
    pub fn minus_seconds(self, seconds: i64) -> Result<Duration, Error> {
        self.minus(Duration::of_seconds(seconds))
    }

    /// Returns a copy of this duration with a number of milliseconds
    /// subtracted.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the arithmetic overflows.
    pub fn minus_millis(self, millis: i64) -> Result<Duration, Error> {
        self.minus(Duration::of_millis(millis))
    }

    /// Returns a copy of this duration with a number of nanoseconds
    /// subtracted.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the arithmetic overflows.
    pub fn minus_nanos(self, nanos: i64) -> Result<Duration, Error> {
        self.minus(Duration::of_nanos(nanos))
    }

    /// Returns this duration multiplied by the scalar given.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the result does not fit.
    pub fn multiplied_by(self, scalar: i64) -> Result<Duration, Error> {
        if scalar == 0 {
            return Ok(Duration::ZERO);
        }
        if scalar == 1 {
            return Ok(self);
        }
        let nanos = self
            .as_nanos_i128()
            .checked_mul(i128::from(scalar))
            .ok_or_else(|| Error::overflow("duration nanoseconds"))?;
        Duration::from_nanos_i128(nanos)
    }

    /// Returns this duration divided by the divisor given.
    ///
    /// The result is truncated toward zero at nanosecond precision.
    ///
    /// # Errors
    ///
    /// This returns an error when the divisor is zero, or when the result
    /// does not fit (which only happens for `i64::MIN` seconds divided by
    /// `-1`).
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::Duration;
    ///
    /// let d = Duration::of_seconds(10).divided_by(3)?;
    /// assert_eq!((d.seconds(), d.nano()), (3, 333_333_333));
    /// assert!(Duration::of_seconds(1).divided_by(0).is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn divided_by(self, divisor: i64) -> Result<Duration, Error> {
        if divisor == 0 {
            return Err(Error::from(E::DivideByZero));
        }
        if divisor == 1 {
            return Ok(self);
        }
        // Integer division on `i128` truncates toward zero.
        Duration::from_nanos_i128(self.as_nanos_i128() / i128::from(divisor))
    }

    /// Returns the negation of this duration.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when this duration is the most
    /// negative duration.
    pub fn negated(self) -> Result<Duration, Error> {
        self.multiplied_by(-1)
    }

    /// Returns the absolute value of this duration.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when this duration is the most
    /// negative duration.
    pub fn abs(self) -> Result<Duration, Error> {
        if self.is_negative() {
            self.negated()
        } else {
            Ok(self)
        }
    }

    /// Returns the number of whole 24 hour days in this duration.
    #[inline]
    pub const fn to_days(self) -> i64 {
        self.seconds / SECONDS_PER_DAY
    }

    /// Returns the number of whole hours in this duration.
    #[inline]
    pub const fn to_hours(self) -> i64 {
        self.seconds / SECONDS_PER_HOUR
    }

    /// Returns the number of whole minutes in this duration.
    #[inline]
    pub const fn to_minutes(self) -> i64 {
        self.seconds / SECONDS_PER_MINUTE
    }

    /// Returns the total number of milliseconds in this duration.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the number of milliseconds does
    /// not fit into an `i64`.
    pub fn to_millis(self) -> Result<i64, Error> {
        let millis = arith::mul(self.seconds, 1_000, "duration milliseconds")?;
        arith::add(
            millis,
            i64::from(self.nanos) / NANOS_PER_MILLI,
            "duration milliseconds",
        )
    }

    /// Returns the total number of nanoseconds in this duration.
    ///
    /// # Errors
    ///
    /// This returns an overflow error when the number of nanoseconds does
    /// not fit into an `i64`.
    pub fn to_nanos(self) -> Result<i64, Error> {
        i64::try_from(self.as_nanos_i128())
            .map_err(|_| Error::overflow("duration nanoseconds"))
    }

    pub(crate) const fn of_nanos_const(nanos: i64) -> Duration {
        let seconds = floor_div(nanos, NANOS_PER_SECOND);
        let nanos = floor_mod(nanos, NANOS_PER_SECOND) as i32;
        Duration { seconds, nanos }
    }

    /// Creates a duration from parts that are already normalized.
    pub(crate) const fn of_seconds_const(
        seconds: i64,
        nanos: i32,
    ) -> Duration {
        debug_assert!(0 <= nanos && nanos < 1_000_000_000);
        Duration { seconds, nanos }
    }

    fn plus_parts(self, seconds: i64, nanos: i64) -> Result<Duration, Error> {
        if seconds == 0 && nanos == 0 {
            return Ok(self);
        }
        let total = arith::add(self.seconds, seconds, "duration seconds")?;
        let total = arith::add(
            total,
            nanos / NANOS_PER_SECOND,
            "duration seconds",
        )?;
        let nanos = i64::from(self.nanos) + nanos % NANOS_PER_SECOND;
        Duration::of_seconds_adjusted(total, nanos)
    }

    fn as_nanos_i128(self) -> i128 {
        i128::from(self.seconds) * i128::from(NANOS_PER_SECOND)
            + i128::from(self.nanos)
    }

    fn from_nanos_i128(nanos: i128) -> Result<Duration, Error> {
        let billion = i128::from(NANOS_PER_SECOND);
        let seconds = i64::try_from(nanos.div_euclid(billion))
            .map_err(|_| Error::overflow("duration seconds"))?;
        // OK because the remainder is always in `0..1_000_000_000`.
        let nanos = nanos.rem_euclid(billion) as i32;
        Ok(Duration { seconds, nanos })
    }
}

impl Amount for Duration {
    fn units(&self) -> Vec<&dyn Unit> {
        vec![&ChronoUnit::Seconds, &ChronoUnit::Nanos]
    }

    fn get(&self, unit: &dyn Unit) -> Result<i64, Error> {
        match unit.as_chrono_unit() {
            Some(ChronoUnit::Seconds) => Ok(self.seconds),
            Some(ChronoUnit::Nanos) => Ok(i64::from(self.nanos)),
            _ => Err(Error::unsupported_unit(unit.name())),
        }
    }
}

impl core::fmt::Debug for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        printer::write_duration(f, self.seconds, self.nanos)
    }
}

impl core::str::FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Duration, Error> {
        parser::parse_duration(s)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Duration {
    fn arbitrary(g: &mut quickcheck::Gen) -> Duration {
        // Keep seconds small enough that sums of two durations never
        // overflow.
        let seconds = i64::arbitrary(g) / 4;
        let nanos = (u32::arbitrary(g) % 1_000_000_000) as i32;
        Duration { seconds, nanos }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::{civil::LocalDate, Instant};

    use super::*;

    #[test]
    fn normalization() {
        let d = Duration::of_seconds_adjusted(2, -1).unwrap();
        assert_eq!((d.seconds(), d.nano()), (1, 999_999_999));
        let d = Duration::of_seconds_adjusted(0, -1_000_000_001).unwrap();
        assert_eq!((d.seconds(), d.nano()), (-2, 999_999_999));
        let d = Duration::of_millis(-1);
        assert_eq!((d.seconds(), d.nano()), (-1, 999_000_000));
        let d = Duration::of_nanos(i64::MIN);
        assert_eq!((d.seconds(), d.nano()), (-9_223_372_037, 145_224_192));
        assert!(Duration::of_seconds_adjusted(i64::MAX, 1_000_000_000)
            .unwrap_err()
            .is_overflow());
    }

    #[test]
    fn arithmetic() {
        let a = Duration::of_seconds_adjusted(1, 600_000_000).unwrap();
        let b = Duration::of_seconds_adjusted(2, 700_000_000).unwrap();
        assert_eq!(a.plus(b).unwrap(), Duration::of_millis(4_300));
        assert_eq!(a.minus(b).unwrap(), Duration::of_millis(-1_100));
        assert_eq!(
            Duration::of_seconds(i64::MIN)
                .minus(Duration::of_seconds(i64::MIN))
                .unwrap(),
            Duration::ZERO,
        );
        assert!(Duration::of_seconds(i64::MAX)
            .plus_seconds(1)
            .unwrap_err()
            .is_overflow());
        assert_eq!(
            Duration::ZERO.plus_unit(3, &ChronoUnit::Micros).unwrap(),
            Duration::of_nanos(3_000),
        );
        assert_eq!(
            Duration::ZERO.plus_unit(2, &ChronoUnit::Days).unwrap(),
            Duration::of_hours(48).unwrap(),
        );
        let err = Duration::ZERO.plus_unit(1, &ChronoUnit::Weeks).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn multiply_and_divide() {
        let d = Duration::of_millis(1_500);
        assert_eq!(d.multiplied_by(3).unwrap(), Duration::of_millis(4_500));
        assert_eq!(d.multiplied_by(-1).unwrap(), Duration::of_millis(-1_500));
        assert_eq!(d.divided_by(2).unwrap(), Duration::of_millis(750));
        assert_eq!(
            Duration::of_nanos(-7).divided_by(2).unwrap(),
            Duration::of_nanos(-3),
        );
        assert!(Duration::of_seconds(i64::MIN)
            .negated()
            .unwrap_err()
            .is_overflow());
        assert_eq!(
            Duration::of_millis(-1).abs().unwrap(),
            Duration::of_millis(1),
        );
    }

    #[test]
    fn conversions() {
        let d = Duration::of_seconds_adjusted(90_061, 5_000_000).unwrap();
        assert_eq!(d.to_days(), 1);
        assert_eq!(d.to_hours(), 25);
        assert_eq!(d.to_minutes(), 1_501);
        assert_eq!(d.to_millis().unwrap(), 90_061_005);
        assert_eq!(d.to_nanos().unwrap(), 90_061_005_000_000);
        assert!(Duration::of_seconds(i64::MAX)
            .to_nanos()
            .unwrap_err()
            .is_overflow());
    }

    #[test]
    fn between() {
        let start = Instant::of_epoch_second(0).unwrap();
        let end = Instant::of_epoch_second_adjusted(-1, 1).unwrap();
        assert_eq!(
            Duration::between(&start, &end).unwrap(),
            Duration::of_nanos(-999_999_999),
        );
        let date = LocalDate::of(2024, 1, 1).unwrap();
        let err = Duration::between(&date, &date).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn amount() {
        let instant = Instant::of_epoch_second(10).unwrap();
        let d = Duration::of_millis(-1);
        assert_eq!(
            instant.plus_amount(&d).unwrap(),
            Instant::of_epoch_second_adjusted(9, 999_000_000).unwrap(),
        );
        assert_eq!(
            instant.minus_amount(&d).unwrap(),
            Instant::of_epoch_second_adjusted(10, 1_000_000).unwrap(),
        );
    }

    #[test]
    fn text() {
        let cases = [
            (Duration::ZERO, "PT0S"),
            (Duration::of_seconds(20), "PT20S"),
            (Duration::of_minutes(2).unwrap(), "PT2M"),
            (Duration::of_hours(25).unwrap(), "PT25H"),
            (Duration::of_millis(-500), "PT-0.5S"),
            (Duration::of_millis(-1_500), "PT-1.5S"),
            (Duration::of_seconds_adjusted(-61, 0).unwrap(), "PT-1M-1S"),
            (Duration::of_nanos(1), "PT0.000000001S"),
        ];
        for (d, expected) in cases {
            assert_eq!(d.to_string(), expected);
            assert_eq!(expected.parse::<Duration>().unwrap(), d, "{expected}");
        }
        assert_eq!(
            "P2DT3H4M".parse::<Duration>().unwrap(),
            Duration::of_seconds(2 * 86_400 + 3 * 3_600 + 4 * 60),
        );
        assert_eq!(
            "-PT6H3M".parse::<Duration>().unwrap(),
            Duration::of_seconds(-(6 * 3_600 + 3 * 60)),
        );
        assert_eq!(
            "PT-6H+3M".parse::<Duration>().unwrap(),
            Duration::of_seconds(-6 * 3_600 + 3 * 60),
        );
        assert!("PT".parse::<Duration>().unwrap_err().is_parse());
        assert!("P1Y".parse::<Duration>().unwrap_err().is_parse());
    }

    quickcheck::quickcheck! {
        fn prop_plus_minus_inverse(d1: Duration, d2: Duration) -> bool {
            d1.plus(d2).unwrap().minus(d2).unwrap() == d1
        }

        fn prop_text_roundtrip(d: Duration) -> bool {
            d.to_string().parse::<Duration>().unwrap() == d
        }

        fn prop_nanos_in_range(seconds: i64, nanos: i64) -> bool {
            match Duration::of_seconds_adjusted(seconds, nanos) {
                Ok(d) => (0..1_000_000_000).contains(&d.nano()),
                Err(err) => err.is_overflow(),
            }
        }
    }
}
