use alloc::{sync::Arc, vec::Vec};

use crate::{
    civil::LocalDateTime,
    error::{tz::Error as E, ErrorContext},
    fmt::{parser, printer},
    tz::{AmbiguousOffset, ZoneOffset, ZoneRules, ZoneRulesProvider},
    Error, Instant,
};

/// A time zone: an identifier together with the rules that determine its
/// offset from UTC over time.
///
/// There are two kinds of time zones:
///
/// * Fixed offset zones, created by [`TimeZone::fixed`] or by looking up an
/// offset-style identifier like `Z`, `UTC` or `+05:30`. These print as
/// their offset and never consult a rules provider.
/// * Region zones, like `Europe/Paris`, whose rules come from a
/// [`ZoneRulesProvider`]. These print as their identifier.
///
/// A `TimeZone` is cheap to clone. Region rules are reference counted.
///
/// # Example
///
/// ```
/// use epochal::{
///     civil::LocalDateTime,
///     tz::{AmbiguousOffset, TimeZone, ZoneOffset, ZoneRegistry},
/// };
///
/// let registry = ZoneRegistry::new();
/// let tz = TimeZone::get("+05:30", &registry)?;
/// assert_eq!(tz, TimeZone::fixed(ZoneOffset::of_hours_minutes(5, 30)?));
/// assert_eq!(tz.to_string(), "+05:30");
///
/// let dt: LocalDateTime = "2024-06-01T12:00".parse()?;
/// assert!(!tz.offset_for_local(dt).is_ambiguous());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct TimeZone {
    kind: TimeZoneKind,
}

#[derive(Clone)]
enum TimeZoneKind {
    Fixed(ZoneOffset),
    Region { id: Arc<str>, rules: Arc<dyn ZoneRules> },
}

impl TimeZone {
    /// The UTC time zone.
    pub const UTC: TimeZone = TimeZone::fixed(ZoneOffset::UTC);

    /// Returns a time zone whose offset is always the one given.
    #[inline]
    pub const fn fixed(offset: ZoneOffset) -> TimeZone {
        TimeZone { kind: TimeZoneKind::Fixed(offset) }
    }

    /// Creates a region time zone from an identifier and rules directly,
    /// without going through a provider.
    pub fn with_rules(
        id: &str,
        rules: impl ZoneRules + 'static,
    ) -> TimeZone {
        TimeZone {
            kind: TimeZoneKind::Region {
                id: Arc::from(id),
                rules: Arc::new(rules),
            },
        }
    }

    /// Looks up a time zone by identifier.
    ///
    /// Offset-style identifiers are handled without consulting `provider`.
    /// These are `Z`, `UTC`, `GMT` and `UT`, optionally followed by an
    /// offset like `+01:00`, or an offset on its own.
    ///
    /// # Errors
    ///
    /// This returns an error when an offset-style identifier has an invalid
    /// offset, or when `provider` does not know about the identifier. The
    /// latter is reported by [`Error::is_zone_not_found`].
    pub fn get(
        id: &str,
        provider: &dyn ZoneRulesProvider,
    ) -> Result<TimeZone, Error> {
        if let Some(offset) = parser::parse_offset_zone_id(id)? {
            return Ok(TimeZone::fixed(offset));
        }
        match provider.rules(id) {
            Some(rules) => Ok(TimeZone {
                kind: TimeZoneKind::Region { id: Arc::from(id), rules },
            }),
            None => Err(Error::from(E::NotFound { id: id.into() })),
        }
    }

    /// Returns the identifier of this zone when it is a region zone.
    pub fn region_id(&self) -> Option<&str> {
        match self.kind {
            TimeZoneKind::Fixed(_) => None,
            TimeZoneKind::Region { ref id, .. } => Some(id),
        }
    }

    /// Returns the offset of this zone when it is a fixed offset zone.
    ///
    /// Region zones whose rules never change are not fixed offset zones.
    pub fn fixed_offset(&self) -> Option<ZoneOffset> {
        match self.kind {
            TimeZoneKind::Fixed(offset) => Some(offset),
            TimeZoneKind::Region { .. } => None,
        }
    }

    /// Returns the rules of this zone.
    pub fn rules(&self) -> &dyn ZoneRules {
        match self.kind {
            TimeZoneKind::Fixed(ref offset) => offset,
            TimeZoneKind::Region { ref rules, .. } => &**rules,
        }
    }

    /// Returns the offset in effect at the instant given.
    #[inline]
    pub fn offset_for_instant(&self, instant: Instant) -> ZoneOffset {
        self.rules().offset_for_instant(instant)
    }

    /// Returns the offset or offsets valid for the local datetime given.
    #[inline]
    pub fn offset_for_local(&self, dt: LocalDateTime) -> AmbiguousOffset {
        self.rules().offset_for_local(dt)
    }

    /// Returns every offset valid for the local datetime given.
    #[inline]
    pub fn valid_offsets_for_local(
        &self,
        dt: LocalDateTime,
    ) -> Vec<ZoneOffset> {
        self.rules().valid_offsets_for_local(dt)
    }

    /// Returns true when `offset` is valid for the local datetime given.
    #[inline]
    pub fn is_valid_offset(
        &self,
        dt: LocalDateTime,
        offset: ZoneOffset,
    ) -> bool {
        self.rules().is_valid_offset(dt, offset)
    }

    /// Adds this zone's identifier as context to an error.
    pub(crate) fn in_zone<T>(
        &self,
        result: Result<T, Error>,
    ) -> Result<T, Error> {
        match self.kind {
            TimeZoneKind::Fixed(_) => result,
            TimeZoneKind::Region { ref id, .. } => {
                result.with_context(|| E::InZone { id: (**id).into() })
            }
        }
    }
}

impl Default for TimeZone {
    fn default() -> TimeZone {
        TimeZone::UTC
    }
}

impl Eq for TimeZone {}

impl PartialEq for TimeZone {
    fn eq(&self, rhs: &TimeZone) -> bool {
        match (&self.kind, &rhs.kind) {
            (TimeZoneKind::Fixed(o1), TimeZoneKind::Fixed(o2)) => o1 == o2,
            (
                TimeZoneKind::Region { id: id1, .. },
                TimeZoneKind::Region { id: id2, .. },
            ) => id1 == id2,
            _ => false,
        }
    }
}

impl core::hash::Hash for TimeZone {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match self.kind {
            TimeZoneKind::Fixed(offset) => offset.hash(state),
            TimeZoneKind::Region { ref id, .. } => id.hash(state),
        }
    }
}

impl core::fmt::Debug for TimeZone {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.kind {
            TimeZoneKind::Fixed(offset) => {
                f.debug_tuple("TimeZone").field(&offset).finish()
            }
            TimeZoneKind::Region { ref id, .. } => {
                f.debug_tuple("TimeZone").field(id).finish()
            }
        }
    }
}

impl core::fmt::Display for TimeZone {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.kind {
            TimeZoneKind::Fixed(offset) => {
                printer::write_offset(f, offset.total_seconds())
            }
            TimeZoneKind::Region { ref id, .. } => f.write_str(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::tz::{testdata, ZoneRegistry};

    use super::*;

    #[test]
    fn offset_style_ids() {
        let registry = ZoneRegistry::new();
        let plus1 = ZoneOffset::of_hours(1).unwrap();
        let cases = [
            ("Z", ZoneOffset::UTC),
            ("UTC", ZoneOffset::UTC),
            ("GMT", ZoneOffset::UTC),
            ("UT", ZoneOffset::UTC),
            ("+01:00", plus1),
            ("UTC+01:00", plus1),
            ("GMT+01", plus1),
        ];
        for (id, offset) in cases {
            let tz = TimeZone::get(id, &registry).unwrap();
            assert_eq!(tz.fixed_offset(), Some(offset), "{id}");
            assert_eq!(tz.region_id(), None);
        }
        assert!(TimeZone::get("UTC+19:00", &registry).unwrap_err().is_range());
    }

    #[test]
    fn region_ids() {
        let registry = testdata::registry();
        let tz = TimeZone::get("Europe/Paris", &registry).unwrap();
        assert_eq!(tz.region_id(), Some("Europe/Paris"));
        assert_eq!(tz.to_string(), "Europe/Paris");
        assert_eq!(tz, testdata::zone("Europe/Paris"));
        assert_ne!(tz, TimeZone::UTC);
        let err = TimeZone::get("Europe/Pariss", &registry).unwrap_err();
        assert!(err.is_zone_not_found());
        assert!(err.to_string().contains("Europe/Pariss"));
    }

    #[test]
    fn delegates_to_rules() {
        let tz = testdata::zone("Europe/Paris");
        let summer = ZoneOffset::of_hours(2).unwrap();
        let instant: Instant = "2007-07-01T00:00:00Z".parse().unwrap();
        assert_eq!(tz.offset_for_instant(instant), summer);
        let dt: LocalDateTime = "2007-10-28T02:30".parse().unwrap();
        assert_eq!(tz.valid_offsets_for_local(dt).len(), 2);
        assert!(tz.is_valid_offset(dt, summer));
        assert_eq!(TimeZone::UTC.to_string(), "Z");
        assert_eq!(TimeZone::default(), TimeZone::UTC);
    }
}
