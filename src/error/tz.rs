use alloc::boxed::Box;

use crate::{error, tz::ZoneOffset};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    AmbiguousGap { before: ZoneOffset, after: ZoneOffset },
    AmbiguousOverlap { before: ZoneOffset, after: ZoneOffset },
    InZone { id: Box<str> },
    InvalidOffsetForLocal { offset: ZoneOffset },
    MixedOffsetSigns { hours: i8, minutes: i8, seconds: i8 },
    NotFound { id: Box<str> },
    TransitionOutOfOrder { index: usize },
    TransitionWindowsOverlap { index: usize },
    TransitionWithoutChange { index: usize },
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Tz(err).into()
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
            AmbiguousGap { before, after } => write!(
                f,
                "datetime is ambiguous since it falls into a \
                 gap between offsets {before} and {after}",
            ),
            AmbiguousOverlap { before, after } => write!(
                f,
                "datetime is ambiguous since it falls into an \
                 overlap between offsets {before} and {after}",
            ),
            InZone { ref id } => {
                write!(f, "error resolving datetime in time zone {id}")
            }
            InvalidOffsetForLocal { offset } => write!(
                f,
                "offset {offset} is not a valid offset for the local \
                 datetime in its time zone",
            ),
            MixedOffsetSigns { hours, minutes, seconds } => write!(
                f,
                "offset components {hours}, {minutes} and {seconds} \
                 must all have the same sign",
            ),
            NotFound { ref id } => {
                write!(f, "failed to find time zone {id:?}")
            }
            TransitionOutOfOrder { index } => write!(
                f,
                "transition {index} does not occur strictly after \
                 the preceding transition",
            ),
            TransitionWindowsOverlap { index } => write!(
                f,
                "local time window of transition {index} overlaps \
                 with the preceding transition",
            ),
            TransitionWithoutChange { index } => write!(
                f,
                "transition {index} does not change the offset",
            ),
        }
    }
}
