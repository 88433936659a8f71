use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    DivideByZero,
    FailedBetween,
    FailedOfUnit,
    UnitHasEstimatedDuration { unit: &'static str },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Duration(err).into()
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
            DivideByZero => f.write_str("cannot divide duration by zero"),
            FailedBetween => f.write_str(
                "failed to compute duration between temporal values",
            ),
            FailedOfUnit => {
                f.write_str("failed to create duration from amount of unit")
            }
            UnitHasEstimatedDuration { unit } => write!(
                f,
                "unit {unit} has an estimated duration and cannot be \
                 used to build an exact duration",
            ),
        }
    }
}
