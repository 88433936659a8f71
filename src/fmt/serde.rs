/*!
Serde support for the value types, using their ISO-8601 text forms.

Every value type serializes as the string its `Display` impl produces, and
deserializes from anything its `FromStr` impl accepts.

`ZonedDateTime` deserializes without access to a zone rules provider, so
only fixed offset zones round trip through serde. Region zones fail with a
zone not found error. Deserialize into a `String` and use
[`ZonedDateTime::parse`] with a provider for those.
*/

use crate::{
    civil::{LocalDate, LocalDateTime, LocalTime, MonthDay, YearMonth},
    tz::ZoneOffset,
    Duration, Instant, OffsetDateTime, Period, ZonedDateTime,
};

macro_rules! impl_serde_via_text {
    ($($ty:ident => $expecting:expr),* $(,)?) => {$(
        impl serde::Serialize for $ty {
            #[inline]
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            #[inline]
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<$ty, D::Error> {
                use serde::de;

                struct TextVisitor;

                impl<'de> de::Visitor<'de> for TextVisitor {
                    type Value = $ty;

                    fn expecting(
                        &self,
                        f: &mut core::fmt::Formatter,
                    ) -> core::fmt::Result {
                        f.write_str($expecting)
                    }

                    #[inline]
                    fn visit_bytes<E: de::Error>(
                        self,
                        value: &[u8],
                    ) -> Result<$ty, E> {
                        let text = core::str::from_utf8(value)
                            .map_err(de::Error::custom)?;
                        self.visit_str(text)
                    }

                    #[inline]
                    fn visit_str<E: de::Error>(
                        self,
                        value: &str,
                    ) -> Result<$ty, E> {
                        value.parse::<$ty>().map_err(de::Error::custom)
                    }
                }

                deserializer.deserialize_str(TextVisitor)
            }
        }
    )*};
}

impl_serde_via_text! {
    Instant => "an instant string like 2024-03-10T02:30:00Z",
    LocalDate => "a date string like 2024-03-10",
    LocalTime => "a time string like 02:30",
    LocalDateTime => "a datetime string like 2024-03-10T02:30",
    OffsetDateTime => "an offset datetime string like 2024-03-10T02:30+01:00",
    ZonedDateTime => "a zoned datetime string like 2024-03-10T02:30+01:00",
    ZoneOffset => "an offset string like +05:30",
    Duration => "a duration string like PT1H30M",
    Period => "a period string like P1Y2M3D",
    YearMonth => "a year-month string like 2024-03",
    MonthDay => "a month-day string like --03-10",
}
