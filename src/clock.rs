/*!
Sources of the current instant and time zone.

Nothing in this crate reads the system clock on its own. Every `now`
constructor takes a [`Clock`], so that code which depends on the current
time can be tested with a [`FixedClock`].
*/

use crate::{tz::TimeZone, Instant};

/// A source of the current instant and of the time zone to observe it in.
///
/// # Example
///
/// ```
/// use epochal::{
///     civil::LocalDateTime,
///     clock::FixedClock,
///     tz::{TimeZone, ZoneOffset},
///     Instant,
/// };
///
/// let tz = TimeZone::fixed(ZoneOffset::of_hours(9)?);
/// let instant: Instant = "2024-06-30T15:00:00Z".parse()?;
/// let clock = FixedClock::new(instant, tz);
/// assert_eq!(LocalDateTime::now(&clock)?.to_string(), "2024-07-01T00:00");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Clock: core::fmt::Debug + Send + Sync {
    /// Returns the current instant.
    fn instant(&self) -> Instant;

    /// Returns the time zone of this clock.
    fn zone(&self) -> TimeZone;
}

/// A clock that always returns the same instant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixedClock {
    instant: Instant,
    zone: TimeZone,
}

impl FixedClock {
    /// Creates a clock that is stuck at `instant`, observed in `zone`.
    pub fn new(instant: Instant, zone: TimeZone) -> FixedClock {
        FixedClock { instant, zone }
    }

    /// Returns a copy of this clock observed in another zone.
    pub fn with_zone(&self, zone: TimeZone) -> FixedClock {
        FixedClock { instant: self.instant, zone }
    }
}

impl Clock for FixedClock {
    fn instant(&self) -> Instant {
        self.instant
    }

    fn zone(&self) -> TimeZone {
        self.zone.clone()
    }
}

/// A clock backed by the operating system's wall clock.
///
/// The zone is chosen by the caller. This crate never guesses the system's
/// time zone.
#[cfg(feature = "std")]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SystemClock {
    zone: TimeZone,
}

#[cfg(feature = "std")]
impl SystemClock {
    /// Creates a system clock observed in the zone given.
    pub fn new(zone: TimeZone) -> SystemClock {
        SystemClock { zone }
    }

    /// Creates a system clock observed in UTC.
    pub fn utc() -> SystemClock {
        SystemClock::new(TimeZone::UTC)
    }
}

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn instant(&self) -> Instant {
        let now = std::time::SystemTime::now();
        match Instant::try_from(now) {
            Ok(instant) => instant,
            Err(_err) => {
                warn!("system time is out of range, saturating: {_err}");
                if now < std::time::SystemTime::UNIX_EPOCH {
                    Instant::MIN
                } else {
                    Instant::MAX
                }
            }
        }
    }

    fn zone(&self) -> TimeZone {
        self.zone.clone()
    }
}
