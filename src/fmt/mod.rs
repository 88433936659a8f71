/*!
The ISO-8601 text forms of the value types.

Every value type implements `Display` and `FromStr` in terms of the routines
in this module. The forms are:

| Type | Example |
| ---- | ------- |
| `LocalDate` | `2024-02-29`, `+12345-06-07`, `-0005-12-31` |
| `LocalTime` | `09:05`, `09:05:07`, `23:59:59.999999999` |
| `LocalDateTime` | `2024-03-10T02:30` |
| `Instant` | `2024-03-10T02:30:00Z` |
| `ZoneOffset` | `Z`, `+05:30`, `-00:00:01` |
| `OffsetDateTime` | `2024-03-10T02:30+05:30` |
| `ZonedDateTime` | `2007-10-28T02:30+02:00[Europe/Paris]` |
| `Duration` | `PT25H`, `PT-1.5S` |
| `Period` | `P1Y2M3D` |
| `YearMonth` | `2024-02` |
| `MonthDay` | `--02-29` |

Printing always produces the shortest canonical form. Parsing is strict
about separators and digit counts, but accepts a few alternatives that are
common in the wild, such as offsets without colons.
*/

pub(crate) mod parser;
pub(crate) mod printer;
#[cfg(feature = "serde")]
mod serde;

/// A value parsed from the front of some input, along with whatever input
/// remains.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Parsed<'i, V> {
    /// The value parsed.
    pub(crate) value: V,
    /// The remaining input.
    pub(crate) input: &'i [u8],
}
