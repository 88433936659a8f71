/*!
Boundaries for the primitive components of temporal values.

Each boundary is a zero-sized marker type with a `check` routine that
converts a 64-bit integer into the component's primitive representation,
or returns a range error naming the component.
*/

use crate::Error;

macro_rules! define_bounds {
    ($((
        $name:ident,
        $ty:ty,
        $what:expr,
        $min:expr,
        $max:expr $(,)?
    )),* $(,)?) => {
        $(
            pub(crate) struct $name(());

            impl $name {
                pub(crate) const WHAT: &'static str = $what;
                pub(crate) const MIN: $ty = $min;
                pub(crate) const MAX: $ty = $max;

                /// Converts the integer given into the primitive
                /// representation of this component.
                ///
                /// # Errors
                ///
                /// This returns a range error if the integer is outside
                /// the bounds of this component.
                #[inline]
                pub(crate) fn check(n: impl Into<i64>) -> Result<$ty, Error> {
                    let n = n.into();
                    let (min, max) =
                        (i64::from(Self::MIN), i64::from(Self::MAX));
                    if !(min <= n && n <= max) {
                        return Err(Error::range(
                            Self::WHAT,
                            n,
                            Self::MIN,
                            Self::MAX,
                        ));
                    }
                    // OK because we just checked that `n` fits.
                    Ok(n as $ty)
                }

                /// Returns true when the integer given is within the
                /// bounds of this component.
                #[inline]
                pub(crate) fn contains(n: impl Into<i64>) -> bool {
                    let n = n.into();
                    i64::from(Self::MIN) <= n && n <= i64::from(Self::MAX)
                }
            }
        )*
    }
}

define_bounds! {
    (Day, i8, "day", 1, 31),
    (DayOfYear, i16, "day-of-year", 1, 366),
    (
        EpochDay,
        i64,
        "epoch-day",
        -365_243_219_162,
        365_241_780_471,
    ),
    (Hour, i8, "hour", 0, 23),
    (
        InstantSecond,
        i64,
        "epoch-second",
        -31_557_014_167_219_200,
        31_556_889_864_403_199,
    ),
    (Minute, i8, "minute", 0, 59),
    (Month, i8, "month", 1, 12),
    (NanoOfDay, i64, "nano-of-day", 0, 86_399_999_999_999),
    (OffsetHours, i8, "offset hours", -18, 18),
    (OffsetMinutes, i8, "offset minutes", -59, 59),
    (OffsetSeconds, i8, "offset seconds", -59, 59),
    (OffsetTotalSeconds, i32, "offset total seconds", -64_800, 64_800),
    (Second, i8, "second", 0, 59),
    (SecondOfDay, i32, "second-of-day", 0, 86_399),
    (SubsecNanosecond, i32, "nano-of-second", 0, 999_999_999),
    (Year, i32, "year", -999_999_999, 999_999_999),
}

#[cfg(test)]
mod tests {
    use crate::util::itime::IDate;

    use super::*;

    #[test]
    fn check_reports_range() {
        assert_eq!(Month::check(12).unwrap(), 12);
        let err = Month::check(13).unwrap_err();
        assert!(err.is_range());
        assert_eq!(
            alloc::string::ToString::to_string(&err),
            "parameter 'month' with value 13 \
             is not in the required range of 1..=12",
        );
        assert!(Year::contains(-999_999_999));
        assert!(!Year::contains(1_000_000_000));
    }

    #[test]
    fn epoch_day_bounds_match_year_bounds() {
        let min = IDate { year: Year::MIN, month: 1, day: 1 };
        let max = IDate { year: Year::MAX, month: 12, day: 31 };
        assert_eq!(min.to_epoch_day().epoch_day, EpochDay::MIN);
        assert_eq!(max.to_epoch_day().epoch_day, EpochDay::MAX);
    }

    #[test]
    fn instant_bounds_match_extreme_years() {
        let min = IDate { year: -1_000_000_000, month: 1, day: 1 };
        let max = IDate { year: 1_000_000_000, month: 12, day: 31 };
        assert_eq!(min.to_epoch_day().epoch_day * 86_400, InstantSecond::MIN);
        assert_eq!(
            max.to_epoch_day().epoch_day * 86_400 + 86_399,
            InstantSecond::MAX,
        );
    }
}
