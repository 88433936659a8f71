use alloc::{borrow::Cow, boxed::Box, sync::Arc};

pub(crate) mod civil;
pub(crate) mod duration;
pub(crate) mod field;
pub(crate) mod fmt;
pub(crate) mod tz;

/// An error that can occur in this crate.
///
/// Errors fall into a small number of categories that never overlap:
///
/// * A value is outside the range permitted by its type or field. For
/// example, month `13`, February `30` or a year beyond
/// [`LocalDate::MAX`](crate::civil::LocalDate::MAX). See
/// [`Error::is_range`].
/// * A raw 64-bit computation overflowed before range validation could even
/// take place. For example, adding `i64::MAX` seconds to an instant. See
/// [`Error::is_overflow`].
/// * A field or unit was asked of a type that does not support it. For
/// example, asking a [`LocalTime`](crate::civil::LocalTime) for its year.
/// See [`Error::is_unsupported`].
/// * Text could not be parsed. See [`Error::is_parse`].
/// * A time zone identifier could not be found. See
/// [`Error::is_zone_not_found`].
/// * A local datetime was ambiguous in its time zone and the caller asked
/// for ambiguity to be rejected. See [`Error::is_ambiguous`].
///
/// # Introspection
///
/// An error may carry a chain of causes. The predicates on this type always
/// classify the *root* cause, which is the error closest to the point where
/// something went wrong. So parsing `2025-02-29` as a date reports both
/// `is_parse()` (since the chain contains a parse error) and `is_range()`
/// (since the root cause is an invalid day).
///
/// # Design
///
/// Only one error type exists for every operation in this crate. Finer
/// grained error types are difficult to compose when, say, parsing a zoned
/// datetime can fail because of a range error, a zone lookup or a syntax
/// problem.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cloneable and keep its size
    /// to a single word.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// It is expected to use [`format_args!`](format_args) from
    /// Rust's standard library (available in `core`) to create a
    /// `core::fmt::Arguments`.
    ///
    /// This is useful for implementations of [`Field`](crate::field::Field),
    /// [`Unit`](crate::field::Unit) or
    /// [`ZoneRules`](crate::tz::ZoneRules) that live outside of this crate
    /// and need to report their own failures.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Creates a new range error for a value outside of `min..=max`.
    ///
    /// The `what` label names the thing that is out of range. For the
    /// built-in fields, this is the field's name (e.g., `MonthOfYear`).
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::Error;
    ///
    /// let err = Error::range("FortnightOfYear", 27, 1, 26);
    /// assert!(err.is_range());
    /// assert_eq!(
    ///     err.to_string(),
    ///     "parameter 'FortnightOfYear' with value 27 \
    ///      is not in the required range of 1..=26",
    /// );
    /// ```
    #[inline(never)]
    #[cold]
    pub fn range(
        what: impl Into<Cow<'static, str>>,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError {
            what: what.into(),
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }))
    }

    /// Creates a new error indicating that the given field is not supported
    /// by the temporal value it was applied to.
    #[inline(never)]
    #[cold]
    pub fn unsupported_field(name: &str) -> Error {
        Error::from(field::Error::UnsupportedField { name: name.into() })
    }

    /// Creates a new error indicating that the given unit is not supported
    /// by the temporal value it was applied to.
    #[inline(never)]
    #[cold]
    pub fn unsupported_unit(name: &str) -> Error {
        Error::from(field::Error::UnsupportedUnit { name: name.into() })
    }

    /// Returns true when this error originated as a result of a value being
    /// out of its supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::civil::LocalDate;
    ///
    /// assert!(LocalDate::of(2025, 2, 29).unwrap_err().is_range());
    /// assert!("2025-02-29".parse::<LocalDate>().unwrap_err().is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        use self::tz::Error::*;

        matches!(
            *self.root().kind(),
            ErrorKind::Range(_)
                | ErrorKind::Tz(
                    InvalidOffsetForLocal { .. } | MixedOffsetSigns { .. }
                )
        )
    }

    /// Returns true when this error originated from 64-bit arithmetic
    /// overflowing.
    ///
    /// This is distinct from [`Error::is_range`]: an overflow error means
    /// the computation itself could not be carried out, where as a range
    /// error means the computation succeeded but produced a value outside of
    /// what a type supports.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::Instant;
    ///
    /// let err = Instant::of_epoch_second_adjusted(i64::MAX, i64::MAX)
    ///     .unwrap_err();
    /// assert!(err.is_overflow());
    /// assert!(!err.is_range());
    ///
    /// let err = Instant::of_epoch_second_adjusted(
    ///     Instant::MAX_SECOND,
    ///     1_000_000_000,
    /// ).unwrap_err();
    /// assert!(err.is_range());
    /// assert!(!err.is_overflow());
    /// ```
    pub fn is_overflow(&self) -> bool {
        matches!(*self.root().kind(), ErrorKind::Overflow(_))
    }

    /// Returns true when this error originated from asking a temporal value
    /// for a field or unit that it does not support.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::{
    ///     civil::LocalTime,
    ///     field::{ChronoField, TemporalAccessor},
    /// };
    ///
    /// let err = LocalTime::NOON.get_long(&ChronoField::Year).unwrap_err();
    /// assert!(err.is_unsupported());
    /// ```
    pub fn is_unsupported(&self) -> bool {
        use self::field::Error::*;

        matches!(
            *self.root().kind(),
            ErrorKind::Field(UnsupportedField { .. } | UnsupportedUnit { .. })
        )
    }

    /// Returns true when this error occurred while parsing text.
    ///
    /// Unlike the other predicates, this checks the entire chain of causes
    /// and not just the root. This is because the root cause of a parse
    /// error is often something else, like a range error.
    ///
    /// When this returns true, [`Error::parse_input`] and
    /// [`Error::parse_offset`] return the text that failed to parse and
    /// the byte offset at which parsing failed.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::civil::LocalDate;
    ///
    /// let err = "2025-0x-01".parse::<LocalDate>().unwrap_err();
    /// assert!(err.is_parse());
    /// assert_eq!(err.parse_input(), Some("2025-0x-01"));
    /// assert_eq!(err.parse_offset(), Some(5));
    /// ```
    pub fn is_parse(&self) -> bool {
        self.parse_context().is_some()
    }

    /// Returns the complete input that failed to parse, if this error
    /// occurred while parsing.
    pub fn parse_input(&self) -> Option<&str> {
        self.parse_context().map(|(input, _)| input)
    }

    /// Returns the byte offset into [`Error::parse_input`] at which parsing
    /// failed, if this error occurred while parsing.
    pub fn parse_offset(&self) -> Option<usize> {
        self.parse_context().map(|(_, offset)| offset)
    }

    /// Returns true when this error originated from looking up a time zone
    /// identifier that the rules provider does not know about.
    pub fn is_zone_not_found(&self) -> bool {
        matches!(
            *self.root().kind(),
            ErrorKind::Tz(tz::Error::NotFound { .. })
        )
    }

    /// Returns true when this error originated from rejecting a local
    /// datetime that falls into a gap or an overlap of its time zone.
    pub fn is_ambiguous(&self) -> bool {
        use self::tz::Error::*;

        matches!(
            *self.root().kind(),
            ErrorKind::Tz(AmbiguousGap { .. } | AmbiguousOverlap { .. })
        )
    }
}

impl Error {
    /// Creates a new error indicating that 64-bit arithmetic overflowed while
    /// computing `what`.
    #[inline(never)]
    #[cold]
    pub(crate) fn overflow(what: &'static str) -> Error {
        Error::from(ErrorKind::Overflow(OverflowError { what }))
    }

    #[inline(always)]
    pub(crate) fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match Arc::try_unwrap(consequent.inner) {
            Ok(inner) => {
                debug_assert!(
                    inner.cause.is_none(),
                    "cause of consequence must be `None`"
                );
                inner.kind
            }
            // A shared consequent can't be given a cause without cloning
            // its kind, and kinds aren't cloneable. So we describe it with
            // its message instead.
            Err(shared) => ErrorKind::Adhoc(AdhocError::from_args(
                format_args!("{}", shared.kind),
            )),
        };
        Error { inner: Arc::new(ErrorInner { kind, cause: Some(self) }) }
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(ref cause) = err.inner.cause {
            err = cause;
        }
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause.
    ///
    /// The iterator returned is guaranteed to yield at least one error.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut next = Some(self);
        core::iter::from_fn(move || {
            let err = next?;
            next = err.inner.cause.as_ref();
            Some(err)
        })
    }

    fn parse_context(&self) -> Option<(&str, usize)> {
        self.chain().find_map(|err| match *err.kind() {
            ErrorKind::Fmt(fmt::Error::Invalid { ref input, offset }) => {
                Some((&**input, offset))
            }
            _ => None,
        })
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Civil(self::civil::Error),
    Duration(self::duration::Error),
    Field(self::field::Error),
    Fmt(self::fmt::Error),
    Overflow(OverflowError),
    Range(RangeError),
    Tz(self::tz::Error),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Adhoc(ref msg) => msg.fmt(f),
            Civil(ref err) => err.fmt(f),
            Duration(ref err) => err.fmt(f),
            Field(ref err) => err.fmt(f),
            Fmt(ref err) => err.fmt(f),
            Overflow(ref err) => err.fmt(f),
            Range(ref err) => err.fmt(f),
            Tz(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

/// A generic error message.
///
/// This supports the `Error::from_args` public API, which permits users
/// of this crate to manifest their own `Error` values from an arbitrary
/// message.
struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        use alloc::string::ToString;

        let message = message.to_string().into_boxed_str();
        AdhocError { message }
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The error message produced by this type will include a name describing
/// which input was out of bounds, the value given and its minimum and maximum
/// allowed values.
#[derive(Debug)]
struct RangeError {
    what: Cow<'static, str>,
    given: i128,
    min: i128,
    max: i128,
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { ref what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// An error that occurs when 64-bit arithmetic overflows.
#[derive(Debug)]
struct OverflowError {
    what: &'static str,
}

impl core::fmt::Display for OverflowError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "arithmetic overflow while computing {}", self.what)
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait basically exists to make `Error::context` work without needing
/// to rely on public `From` impls.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`.
/// Specifically, in the latter case, it absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
pub(crate) trait ErrorContext<T, E> {
    /// Contextualize the given consequent error with this (`self`) error as
    /// the cause.
    ///
    /// This is equivalent to saying that "consequent is caused by self."
    fn context(self, consequent: impl IntoError) -> Result<T, Error>;

    /// Like `context`, but hides error construction within a closure.
    ///
    /// This is useful when creating the consequent error allocates. The
    /// closure avoids paying that cost in the happy path.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    E: IntoError,
{
    #[inline(always)]
    fn context(self, consequent: impl IntoError) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent.into_error())
        })
    }

    #[inline(always)]
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent().into_error())
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    // Not an API guarantee, but growing this should be a conscious choice.
    #[test]
    fn error_size() {
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn predicates_use_root_cause() {
        let err = Error::range("day", 30, 1, 29)
            .context(civil::Error::FailedAddMonths);
        assert!(err.is_range());
        assert!(!err.is_overflow());
        assert!(!err.is_parse());
        assert_eq!(
            err.to_string(),
            "failed to add months to date: \
             parameter 'day' with value 30 is not in the required \
             range of 1..=29",
        );

        let err = Error::overflow("epoch seconds")
            .context(civil::Error::FailedAddDays);
        assert!(err.is_overflow());
        assert!(!err.is_range());
    }

    #[test]
    fn unsupported_is_distinct() {
        let err = Error::unsupported_field("Year");
        assert!(err.is_unsupported());
        assert!(!err.is_range());
        assert_eq!(err.to_string(), "unsupported field: Year");

        let err = Error::unsupported_unit("Months");
        assert!(err.is_unsupported());
        assert_eq!(err.to_string(), "unsupported unit: Months");
    }

    #[test]
    fn parse_context_searches_chain() {
        let err = Error::range("month", 13, 1, 12)
            .context(fmt::Error::invalid("2025-13-01", 5));
        assert!(err.is_parse());
        assert!(err.is_range());
        assert_eq!(err.parse_input(), Some("2025-13-01"));
        assert_eq!(err.parse_offset(), Some(5));
    }

    #[test]
    fn shared_consequent_keeps_message() {
        let consequent = Error::from_args(format_args!("outer"));
        let _keep_alive = consequent.clone();
        let err = Error::range("hour", 24, 0, 23).context(consequent);
        assert!(err.is_range());
        assert_eq!(
            err.to_string(),
            "outer: parameter 'hour' with value 24 \
             is not in the required range of 0..=23",
        );
    }
}
