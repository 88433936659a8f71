use alloc::boxed::Box;

use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    FailedGet { name: &'static str },
    FailedWith { name: &'static str },
    MismatchedTemporal { expected: &'static str, found: &'static str },
    UnsupportedField { name: Box<str> },
    UnsupportedUnit { name: Box<str> },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Field(err).into()
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
            FailedGet { name } => {
                write!(f, "failed to get value of field {name}")
            }
            FailedWith { name } => {
                write!(f, "failed to set value of field {name}")
            }
            MismatchedTemporal { expected, found } => write!(
                f,
                "expected adjustment to produce a {expected}, \
                 but got a {found}",
            ),
            UnsupportedField { ref name } => {
                write!(f, "unsupported field: {name}")
            }
            UnsupportedUnit { ref name } => {
                write!(f, "unsupported unit: {name}")
            }
        }
    }
}
