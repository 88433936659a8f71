use alloc::boxed::Box;

use crate::{error, util::escape::Byte};

#[derive(Clone, Debug)]
pub(crate) enum Error {
    Empty { what: &'static str },
    ExpectedByte { expected: u8, found: Option<u8> },
    ExpectedDesignator { what: &'static str },
    ExpectedDigits { what: &'static str },
    ExpectedFraction,
    ExpectedSignForLargeYear,
    ExpectedZoneId,
    Invalid { input: Box<str>, offset: usize },
    NegativeYearZero,
    NumberTooBig { what: &'static str },
    TrailingInput { found: u8 },
    UnexpectedEnd { what: &'static str },
    UnexpectedSignForSmallYear,
}

impl Error {
    pub(crate) fn invalid(input: &str, offset: usize) -> Error {
        Error::Invalid { input: input.into(), offset }
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
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
            Empty { what } => {
                write!(f, "an empty string is not a valid {what}")
            }
            ExpectedByte { expected, found: Some(found) } => write!(
                f,
                "expected `{expected}` but found `{found}`",
                expected = Byte(expected),
                found = Byte(found),
            ),
            ExpectedByte { expected, found: None } => write!(
                f,
                "expected `{expected}` but reached end of input",
                expected = Byte(expected),
            ),
            ExpectedDesignator { what } => {
                write!(f, "expected a unit designator after {what}")
            }
            ExpectedDigits { what } => {
                write!(f, "expected digits for {what}")
            }
            ExpectedFraction => f.write_str(
                "expected at least one digit after fraction separator",
            ),
            ExpectedSignForLargeYear => f.write_str(
                "years with more than four digits must be prefixed \
                 with a `+` or `-` sign",
            ),
            ExpectedZoneId => f.write_str(
                "expected a time zone identifier between `[` and `]`",
            ),
            Invalid { ref input, offset } => write!(
                f,
                "failed to parse {input:?} at byte offset {offset}",
            ),
            NegativeYearZero => {
                f.write_str("a negative zero year is not allowed")
            }
            NumberTooBig { what } => {
                write!(f, "number for {what} is too big")
            }
            TrailingInput { found } => write!(
                f,
                "parsed value but found unexpected trailing `{found}`",
                found = Byte(found),
            ),
            UnexpectedEnd { what } => {
                write!(f, "reached end of input while parsing {what}")
            }
            UnexpectedSignForSmallYear => f.write_str(
                "four digit years must not be prefixed with a `+` sign",
            ),
        }
    }
}
