use alloc::{collections::BTreeMap, string::String, sync::Arc, vec::Vec};

use crate::tz::ZoneRules;

/// A source of zone rules, keyed by zone identifier.
///
/// This crate does not bundle any time zone data. Callers implement this
/// trait over whatever data they have, or fill a [`ZoneRegistry`]. Lookups
/// may happen often, so implementations that derive rules on the fly
/// should cache them.
pub trait ZoneRulesProvider: core::fmt::Debug + Send + Sync {
    /// Returns the rules for the zone identifier given, or `None` when the
    /// identifier is unknown.
    fn rules(&self, id: &str) -> Option<Arc<dyn ZoneRules>>;

    /// Returns every zone identifier that this provider knows about.
    fn ids(&self) -> Vec<String>;
}

/// An in-memory [`ZoneRulesProvider`].
///
/// # Example
///
/// ```
/// use epochal::tz::{TimeZone, ZoneOffset, ZoneRegistry};
///
/// let mut registry = ZoneRegistry::new();
/// registry.register("Asia/Kolkata", ZoneOffset::of_hours_minutes(5, 30)?);
///
/// let tz = TimeZone::get("Asia/Kolkata", &registry)?;
/// assert_eq!(tz.to_string(), "Asia/Kolkata");
/// assert!(TimeZone::get("Mars/Olympus_Mons", &registry)
///     .unwrap_err()
///     .is_zone_not_found());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneRegistry {
    zones: BTreeMap<String, Arc<dyn ZoneRules>>,
}

impl ZoneRegistry {
    /// Creates an empty registry.
    pub fn new() -> ZoneRegistry {
        ZoneRegistry::default()
    }

    /// Registers rules under the identifier given.
    ///
    /// This returns the rules previously registered under that identifier,
    /// if any.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        rules: impl ZoneRules + 'static,
    ) -> Option<Arc<dyn ZoneRules>> {
        self.register_arc(id, Arc::new(rules))
    }

    /// Registers shared rules under the identifier given.
    ///
    /// This returns the rules previously registered under that identifier,
    /// if any.
    pub fn register_arc(
        &mut self,
        id: impl Into<String>,
        rules: Arc<dyn ZoneRules>,
    ) -> Option<Arc<dyn ZoneRules>> {
        let id = id.into();
        debug!("registering rules for time zone {id:?}");
        let previous = self.zones.insert(id, rules);
        if previous.is_some() {
            warn!("replaced previously registered rules for a time zone");
        }
        previous
    }

    /// Returns the number of zones registered.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns true when no zones are registered.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl ZoneRulesProvider for ZoneRegistry {
    fn rules(&self, id: &str) -> Option<Arc<dyn ZoneRules>> {
        let rules = self.zones.get(id).cloned();
        if rules.is_none() {
            debug!("no rules registered for time zone {id:?}");
        }
        rules
    }

    fn ids(&self) -> Vec<String> {
        self.zones.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::tz::{testdata, ZoneOffset};

    use super::*;

    #[test]
    fn register_and_lookup() {
        let mut registry = testdata::registry();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.ids(), vec!["America/Midnight", "Europe/Paris"]);
        assert!(registry.rules("Europe/Paris").is_some());
        assert!(registry.rules("europe/paris").is_none());

        let previous = registry.register("Europe/Paris", ZoneOffset::UTC);
        assert!(previous.is_some());
        let rules = registry.rules("Europe/Paris").unwrap();
        assert!(rules.is_fixed_offset());
    }
}
