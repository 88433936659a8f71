use crate::{error, field::ChronoUnit};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    FailedAddDays,
    FailedAddMonths,
    FailedAddTime,
    FailedAddUnit { unit: ChronoUnit },
    FailedAddWeeks,
    FailedAddYears,
    FailedUntil { unit: ChronoUnit },
    InvalidLocalDateTimeForInstant,
    TruncateUnitTooLarge { unit: ChronoUnit },
    TruncateUnitNotDivisor { unit: ChronoUnit },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Civil(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            FailedAddDays => f.write_str("failed to add days to date"),
            FailedAddMonths => f.write_str("failed to add months to date"),
            FailedAddTime => {
                f.write_str("failed to add time to datetime")
            }
            FailedAddUnit { unit } => {
                write!(f, "failed to add amount of {unit}")
            }
            FailedAddWeeks => f.write_str("failed to add weeks to date"),
            FailedAddYears => f.write_str("failed to add years to date"),
            FailedUntil { unit } => {
                write!(f, "failed to compute amount of {unit} between values")
            }
            InvalidLocalDateTimeForInstant => f.write_str(
                "instant with offset is outside the supported range \
                 of local datetimes",
            ),
            TruncateUnitTooLarge { unit } => write!(
                f,
                "unit {unit} is too large to use for truncation, \
                 it must not be longer than a day",
            ),
            TruncateUnitNotDivisor { unit } => write!(
                f,
                "unit {unit} does not divide into a day evenly \
                 and cannot be used for truncation",
            ),
        }
    }
}
