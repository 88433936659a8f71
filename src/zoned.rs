use crate::{
    civil::{LocalDate, LocalDateTime, LocalTime, Weekday},
    clock::Clock,
    error::{civil::Error as E, tz::Error as TzE, ErrorContext},
    field::{
        self, ChronoField, ChronoUnit, Field, Temporal, TemporalAccessor,
        TemporalValue, Unit, ValueRange,
    },
    fmt::{parser, printer},
    tz::{
        resolve_similar_local, resolve_with, AmbiguousOffset, Disambiguation,
        TimeZone, ZoneOffset, ZoneRegistry, ZoneRulesProvider,
    },
    Duration, Error, Instant, OffsetDateTime,
};

/// A local datetime in a time zone, together with the offset that was in
/// effect.
///
/// A `ZonedDateTime` is the triple of a local datetime, an offset and a
/// [`TimeZone`]. The offset is always one of the offsets the zone permits
/// for the local datetime, so the triple names exactly one instant.
///
/// # Arithmetic
///
/// Date-based arithmetic (days, weeks, months and longer units) moves the
/// local datetime and then resolves it in the zone again. The current
/// offset is kept if it is still valid, so adding a day keeps the same side
/// of an overlap. A local datetime that lands in a gap is moved forward by
/// the length of the gap.
///
/// Time-based arithmetic (hours and shorter units) moves along the
/// timeline. Adding an hour to the first `02:30` of an overlap produces the
/// second `02:30`.
///
/// # Text format
///
/// Zoned datetimes print as an [`OffsetDateTime`] followed by the zone
/// identifier in brackets, like `2007-10-28T02:30+01:00[Europe/Paris]`.
/// Fixed offset zones print without the brackets.
///
/// Parsing through [`FromStr`](core::str::FromStr) only accepts fixed
/// offset zones since it has no rules provider. Use
/// [`ZonedDateTime::parse`] for region zones.
///
/// # Example
///
/// ```
/// use epochal::{
///     tz::{TimeZone, TransitionRules, ZoneOffset},
///     civil::LocalDateTime,
///     Instant, ZonedDateTime,
/// };
///
/// let fall: Instant = "2007-10-28T01:00:00Z".parse()?;
/// let tz = TimeZone::with_rules("Europe/Paris", TransitionRules::new(
///     ZoneOffset::of_hours(2)?,
///     [(fall, ZoneOffset::of_hours(1)?)],
/// )?);
/// let dt: LocalDateTime = "2007-10-28T02:30".parse()?;
/// let first = ZonedDateTime::of_local(dt, tz, None)?;
/// assert_eq!(first.to_string(), "2007-10-28T02:30+02:00[Europe/Paris]");
///
/// let second = first.plus_hours(1)?;
/// assert_eq!(second.to_string(), "2007-10-28T02:30+01:00[Europe/Paris]");
/// assert_eq!(second.with_earlier_offset_at_overlap(), first);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct ZonedDateTime {
    dt: LocalDateTime,
    offset: ZoneOffset,
    zone: TimeZone,
}

impl ZonedDateTime {
    /// Resolves a local datetime in a zone, keeping the wall clock time as
    /// close as possible.
    ///
    /// In an overlap, `preferred` is used when it is one of the two valid
    /// offsets, otherwise the earlier of the two instants is picked. In a
    /// gap, the local datetime is moved forward by the length of the gap.
    ///
    /// # Errors
    ///
    /// This returns a range error when moving the local datetime across a
    /// gap pushes it out of range.
    pub fn of_local(
        dt: LocalDateTime,
        zone: TimeZone,
        preferred: Option<ZoneOffset>,
    ) -> Result<ZonedDateTime, Error> {
        let (dt, offset) = resolve_similar_local(dt, &zone, preferred)?;
        Ok(ZonedDateTime { dt, offset, zone })
    }

    /// Resolves a local datetime in a zone with the strategy given.
    ///
    /// # Errors
    ///
    /// This returns an ambiguity error when `disambiguation` is
    /// [`Disambiguation::Reject`] and the local datetime is in a gap or an
    /// overlap. It returns a range error when a shifted local datetime is out
    /// of range.
    pub fn of_local_with(
        dt: LocalDateTime,
        zone: TimeZone,
        disambiguation: Disambiguation,
    ) -> Result<ZonedDateTime, Error> {
        let (dt, offset) = resolve_with(dt, &zone, disambiguation)?;
        Ok(ZonedDateTime { dt, offset, zone })
    }

    /// Returns the zoned datetime of an instant in a zone.
    ///
    /// # Errors
    ///
    /// This returns a range error when the local datetime is out of range,
    /// which can only happen at the edges of the range of instants.
    pub fn of_instant(
        instant: Instant,
        zone: TimeZone,
    ) -> Result<ZonedDateTime, Error> {
        let offset = zone.offset_for_instant(instant);
        let dt = zone.in_zone(
            LocalDateTime::of_epoch_second(
                instant.epoch_second(),
                instant.nano(),
                offset,
            )
            .context(E::InvalidLocalDateTimeForInstant),
        )?;
        Ok(ZonedDateTime { dt, offset, zone })
    }

    /// Combines a local datetime, an offset and a zone, checking that the
    /// offset is valid for the local datetime in the zone.
    ///
    /// # Errors
    ///
    /// This returns an ambiguity error when the local datetime is in a gap.
    /// It returns an error when the offset is not one of the offsets valid
    /// for the local datetime.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::{
    ///     civil::LocalDateTime,
    ///     tz::{TimeZone, ZoneOffset},
    ///     ZonedDateTime,
    /// };
    ///
    /// let offset = ZoneOffset::of_hours(1)?;
    /// let tz = TimeZone::fixed(offset);
    /// let dt: LocalDateTime = "2024-01-01T00:00".parse()?;
    /// assert!(ZonedDateTime::of_strict(dt, offset, tz.clone()).is_ok());
    /// let result = ZonedDateTime::of_strict(dt, ZoneOffset::UTC, tz);
    /// assert!(result.unwrap_err().is_range());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn of_strict(
        dt: LocalDateTime,
        offset: ZoneOffset,
        zone: TimeZone,
    ) -> Result<ZonedDateTime, Error> {
        match zone.offset_for_local(dt) {
            AmbiguousOffset::Gap { before, after } => {
                zone.in_zone(Err(Error::from(TzE::AmbiguousGap {
                    before,
                    after,
                })))
            }
            _ if !zone.is_valid_offset(dt, offset) => zone.in_zone(Err(
                Error::from(TzE::InvalidOffsetForLocal { offset }),
            )),
            _ => Ok(ZonedDateTime { dt, offset, zone }),
        }
    }

    /// Returns the current datetime according to the clock given, in the
    /// clock's zone.
    ///
    /// # Errors
    ///
    /// This returns a range error when the clock's instant is at the edge
    /// of the range of instants.
    pub fn now(clock: &dyn Clock) -> Result<ZonedDateTime, Error> {
        ZonedDateTime::of_instant(clock.instant(), clock.zone())
    }

    /// Parses a zoned datetime, looking up region zones in the provider
    /// given.
    ///
    /// The instant is determined by the local datetime and the offset in
    /// the text. When the zone has a different offset at that instant, the
    /// local datetime is adjusted to it.
    ///
    /// # Errors
    ///
    /// This returns a parse error for malformed text, and a zone not found
    /// error when the provider does not know about the zone.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::{
    ///     tz::{TransitionRules, ZoneOffset, ZoneRegistry},
    ///     Instant, ZonedDateTime,
    /// };
    ///
    /// let mut registry = ZoneRegistry::new();
    /// let fall: Instant = "2007-10-28T01:00:00Z".parse()?;
    /// registry.register("Europe/Paris", TransitionRules::new(
    ///     ZoneOffset::of_hours(2)?,
    ///     [(fall, ZoneOffset::of_hours(1)?)],
    /// )?);
    /// let s = "2007-10-28T02:30+01:00[Europe/Paris]";
    /// let zdt = ZonedDateTime::parse(s, &registry)?;
    /// assert_eq!(zdt.to_string(), s);
    /// assert!(s.parse::<ZonedDateTime>().unwrap_err().is_zone_not_found());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn parse(
        s: &str,
        provider: &dyn ZoneRulesProvider,
    ) -> Result<ZonedDateTime, Error> {
        parser::parse_zoned(s, provider)
    }

    /// Returns the local datetime.
    #[inline]
    pub fn local_date_time(&self) -> LocalDateTime {
        self.dt
    }

    /// Returns the local date.
    #[inline]
    pub fn date(&self) -> LocalDate {
        self.dt.date()
    }

    /// Returns the local time.
    #[inline]
    pub fn time(&self) -> LocalTime {
        self.dt.time()
    }

    /// Returns the offset.
    #[inline]
    pub fn offset(&self) -> ZoneOffset {
        self.offset
    }

    /// Returns the time zone.
    #[inline]
    pub fn zone(&self) -> &TimeZone {
        &self.zone
    }

    /// Returns the year.
    #[inline]
    pub fn year(&self) -> i32 {
        self.dt.year()
    }

    /// Returns the month, from `1` to `12`.
    #[inline]
    pub fn month(&self) -> i8 {
        self.dt.month()
    }

    /// Returns the day of the month, starting at `1`.
    #[inline]
    pub fn day(&self) -> i8 {
        self.dt.day()
    }

    /// Returns the weekday.
    #[inline]
    pub fn day_of_week(&self) -> Weekday {
        self.dt.day_of_week()
    }

    /// Returns the hour, from `0` to `23`.
    #[inline]
    pub fn hour(&self) -> i8 {
        self.dt.hour()
    }

    /// Returns the minute, from `0` to `59`.
    #[inline]
    pub fn minute(&self) -> i8 {
        self.dt.minute()
    }

    /// Returns the second, from `0` to `59`.
    #[inline]
    pub fn second(&self) -> i8 {
        self.dt.second()
    }

    /// Returns the nanosecond, from `0` to `999_999_999`.
    #[inline]
    pub fn nano(&self) -> i32 {
        self.dt.nano()
    }

    /// Returns the number of seconds since the Unix epoch.
    #[inline]
    pub fn to_epoch_second(&self) -> i64 {
        self.dt.to_epoch_second(self.offset)
    }

    /// Returns the instant named by this zoned datetime.
    #[inline]
    pub fn to_instant(&self) -> Instant {
        self.dt.to_instant(self.offset)
    }

    /// Returns the local datetime and offset, dropping the zone.
    #[inline]
    pub fn to_offset_date_time(&self) -> OffsetDateTime {
        OffsetDateTime::of(self.dt, self.offset)
    }

    /// Returns a copy using the earlier of the two offsets when the local
    /// datetime is in an overlap.
    ///
    /// Outside of an overlap, this returns a copy unchanged.
    pub fn with_earlier_offset_at_overlap(&self) -> ZonedDateTime {
        match self.zone.offset_for_local(self.dt) {
            AmbiguousOffset::Overlap { before, .. } => {
                self.with_offset_unchecked(before)
            }
            _ => self.clone(),
        }
    }

    /// Returns a copy using the later of the two offsets when the local
    /// datetime is in an overlap.
    ///
    /// Outside of an overlap, this returns a copy unchanged.
    pub fn with_later_offset_at_overlap(&self) -> ZonedDateTime {
        match self.zone.offset_for_local(self.dt) {
            AmbiguousOffset::Overlap { after, .. } => {
                self.with_offset_unchecked(after)
            }
            _ => self.clone(),
        }
    }

    /// Returns a copy in another zone, keeping the local datetime where
    /// possible.
    ///
    /// The current offset is preferred when the local datetime is in an
    /// overlap of the new zone.
    ///
    /// # Errors
    ///
    /// This returns a range error when the local datetime is moved across a
    /// gap and out of range.
    pub fn with_zone_same_local(
        &self,
        zone: TimeZone,
    ) -> Result<ZonedDateTime, Error> {
        if zone == self.zone {
            return Ok(self.clone());
        }
        ZonedDateTime::of_local(self.dt, zone, Some(self.offset))
    }

    /// Returns a copy in another zone at the same instant.
    ///
    /// # Errors
    ///
    /// This returns a range error when the local datetime in the new zone
    /// is out of range.
    pub fn with_zone_same_instant(
        &self,
        zone: TimeZone,
    ) -> Result<ZonedDateTime, Error> {
        if zone == self.zone {
            return Ok(self.clone());
        }
        ZonedDateTime::of_instant(self.to_instant(), zone)
    }

    /// Returns a copy whose zone is the fixed offset of this value.
    pub fn with_fixed_offset_zone(&self) -> ZonedDateTime {
        ZonedDateTime {
            dt: self.dt,
            offset: self.offset,
            zone: TimeZone::fixed(self.offset),
        }
    }

    /// Returns a copy with the local date replaced, resolved in the zone.
    ///
    /// # Errors
    ///
    /// This returns a range error when the result is out of range.
    pub fn with_date(&self, date: LocalDate) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.with_date(date))
    }

    /// Returns a copy with the local time replaced, resolved in the zone.
    ///
    /// # Errors
    ///
    /// This returns a range error when the result is out of range.
    pub fn with_time(&self, time: LocalTime) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.with_time(time))
    }

    /// Returns a copy with the year given, resolved in the zone.
    ///
    /// # Errors
    ///
    /// This returns a range error when the year is out of range.
    pub fn with_year(&self, year: i32) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.with_year(year)?)
    }

    /// Returns a copy with the month given, resolved in the zone.
    ///
    /// # Errors
    ///
    /// This returns a range error when the month is out of range.
    pub fn with_month(&self, month: i8) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.with_month(month)?)
    }

    /// Returns a copy with the day of month given, resolved in the zone.
    ///
    /// # Errors
    ///
    /// This returns a range error when the day is invalid for the month.
    pub fn with_day_of_month(&self, day: i8) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.with_day_of_month(day)?)
    }

    /// Returns a copy with the hour given, resolved in the zone.
    ///
    /// # Errors
    ///
    /// This returns a range error when the hour is out of range.
    pub fn with_hour(&self, hour: i8) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.with_hour(hour)?)
    }

    /// Returns a copy with the minute given, resolved in the zone.
    ///
    /// # Errors
    ///
    /// This returns a range error when the minute is out of range.
    pub fn with_minute(&self, minute: i8) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.with_minute(minute)?)
    }

    /// Returns a copy with the second given, resolved in the zone.
    ///
    /// # Errors
    ///
    /// This returns a range error when the second is out of range.
    pub fn with_second(&self, second: i8) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.with_second(second)?)
    }

    /// Returns a copy with the nanosecond given, resolved in the zone.
    ///
    /// # Errors
    ///
    /// This returns a range error when the nanosecond is out of range.
    pub fn with_nano(&self, nano: i32) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.with_nano(nano)?)
    }

    /// Returns a copy with a number of years added to the local datetime.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_years(&self, years: i64) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.plus_years(years)?)
    }

    /// Returns a copy with a number of months added to the local datetime.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_months(&self, months: i64) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.plus_months(months)?)
    }

    /// Returns a copy with a number of weeks added to the local datetime.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_weeks(&self, weeks: i64) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.plus_weeks(weeks)?)
    }

    /// Returns a copy with a number of days added to the local datetime.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_days(&self, days: i64) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.plus_days(days)?)
    }

    /// Returns a copy a number of hours later on the timeline.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_hours(&self, hours: i64) -> Result<ZonedDateTime, Error> {
        self.resolve_instant(self.dt.plus_hours(hours)?)
    }

    /// Returns a copy a number of minutes later on the timeline.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_minutes(&self, minutes: i64) -> Result<ZonedDateTime, Error> {
        self.resolve_instant(self.dt.plus_minutes(minutes)?)
    }

    /// Returns a copy a number of seconds later on the timeline.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_seconds(&self, seconds: i64) -> Result<ZonedDateTime, Error> {
        self.resolve_instant(self.dt.plus_seconds(seconds)?)
    }

    /// Returns a copy a number of nanoseconds later on the timeline.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_nanos(&self, nanos: i64) -> Result<ZonedDateTime, Error> {
        self.resolve_instant(self.dt.plus_nanos(nanos)?)
    }

    /// Returns a copy with a number of years subtracted from the local
    /// datetime.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_years(&self, years: i64) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.minus_years(years)?)
    }

    /// Returns a copy with a number of months subtracted from the local
    /// datetime.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_months(&self, months: i64) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.minus_months(months)?)
    }

    /// Returns a copy with a number of weeks subtracted from the local
    /// datetime.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_weeks(&self, weeks: i64) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.minus_weeks(weeks)?)
    }

    /// Returns a copy with a number of days subtracted from the local
    /// datetime.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_days(&self, days: i64) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.minus_days(days)?)
    }

    /// Returns a copy a number of hours earlier on the timeline.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_hours(&self, hours: i64) -> Result<ZonedDateTime, Error> {
        self.resolve_instant(self.dt.minus_hours(hours)?)
    }

    /// Returns a copy a number of minutes earlier on the timeline.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_minutes(&self, minutes: i64) -> Result<ZonedDateTime, Error> {
        self.resolve_instant(self.dt.minus_minutes(minutes)?)
    }

    /// Returns a copy a number of seconds earlier on the timeline.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_seconds(&self, seconds: i64) -> Result<ZonedDateTime, Error> {
        self.resolve_instant(self.dt.minus_seconds(seconds)?)
    }

    /// Returns a copy a number of nanoseconds earlier on the timeline.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_nanos(&self, nanos: i64) -> Result<ZonedDateTime, Error> {
        self.resolve_instant(self.dt.minus_nanos(nanos)?)
    }

    /// Returns a copy an exact duration later on the timeline.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_duration(
        &self,
        duration: Duration,
    ) -> Result<ZonedDateTime, Error> {
        let instant = self.to_instant().plus_duration(duration)?;
        ZonedDateTime::of_instant(instant, self.zone.clone())
    }

    /// Returns a copy an exact duration earlier on the timeline.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn minus_duration(
        &self,
        duration: Duration,
    ) -> Result<ZonedDateTime, Error> {
        let instant = self.to_instant().minus_duration(duration)?;
        ZonedDateTime::of_instant(instant, self.zone.clone())
    }

    /// Returns a copy with the local time truncated to the unit given and
    /// resolved in the zone.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit is longer than a day, or when it
    /// does not evenly divide a day.
    pub fn truncated_to(
        &self,
        unit: &dyn Unit,
    ) -> Result<ZonedDateTime, Error> {
        self.resolve_local(self.dt.truncated_to(unit)?)
    }

    fn with_offset_unchecked(&self, offset: ZoneOffset) -> ZonedDateTime {
        ZonedDateTime { dt: self.dt, offset, zone: self.zone.clone() }
    }

    /// Resolves a new local datetime in this zone, preferring the current
    /// offset.
    fn resolve_local(
        &self,
        dt: LocalDateTime,
    ) -> Result<ZonedDateTime, Error> {
        ZonedDateTime::of_local(dt, self.zone.clone(), Some(self.offset))
    }

    /// Interprets a new local datetime at the current offset and converts
    /// the resulting instant back into this zone.
    fn resolve_instant(
        &self,
        dt: LocalDateTime,
    ) -> Result<ZonedDateTime, Error> {
        let instant = dt.to_instant(self.offset);
        ZonedDateTime::of_instant(instant, self.zone.clone())
    }

    fn with_builtin(
        &self,
        field: ChronoField,
        value: i64,
    ) -> Result<ZonedDateTime, Error> {
        match field {
            ChronoField::InstantSeconds => {
                let instant = Instant::of_epoch_second_adjusted(
                    value,
                    i64::from(self.nano()),
                )?;
                ZonedDateTime::of_instant(instant, self.zone.clone())
            }
            ChronoField::OffsetSeconds => {
                let seconds = field.check_valid_int_value(value)?;
                let offset = ZoneOffset::of_total_seconds(seconds)?;
                if offset != self.offset
                    && self.zone.is_valid_offset(self.dt, offset)
                {
                    Ok(self.with_offset_unchecked(offset))
                } else {
                    trace!(
                        "ignoring offset {offset} for {self} since it is \
                         not valid in its zone",
                    );
                    Ok(self.clone())
                }
            }
            _ => self.resolve_local(self.dt.with(&field, value)?),
        }
    }

    fn plus_builtin(
        &self,
        amount: i64,
        unit: ChronoUnit,
    ) -> Result<ZonedDateTime, Error> {
        let dt = self.dt.plus(amount, &unit)?;
        if unit.is_date_based() {
            self.resolve_local(dt)
        } else {
            self.resolve_instant(dt)
        }
    }

    fn until_builtin(
        &self,
        end: &ZonedDateTime,
        unit: ChronoUnit,
    ) -> Result<i64, Error> {
        let end = end.with_zone_same_instant(self.zone.clone())?;
        if unit.is_date_based() {
            self.dt.until(&end.dt, &unit)
        } else {
            self.to_offset_date_time()
                .until(&end.to_offset_date_time(), &unit)
        }
    }
}

impl From<ZonedDateTime> for Instant {
    fn from(zdt: ZonedDateTime) -> Instant {
        zdt.to_instant()
    }
}

impl From<ZonedDateTime> for OffsetDateTime {
    fn from(zdt: ZonedDateTime) -> OffsetDateTime {
        zdt.to_offset_date_time()
    }
}

impl TemporalAccessor for ZonedDateTime {
    fn is_supported(&self, field: &dyn Field) -> bool {
        match field.as_chrono_field() {
            Some(_) => true,
            None => field.is_supported_by(self),
        }
    }

    fn range(&self, field: &dyn Field) -> Result<ValueRange, Error> {
        match field.as_chrono_field() {
            Some(
                f @ (ChronoField::InstantSeconds | ChronoField::OffsetSeconds),
            ) => Ok(f.range()),
            Some(_) => self.dt.range(field),
            None => field::range_of(self, field, |_| None),
        }
    }

    fn get_long(&self, field: &dyn Field) -> Result<i64, Error> {
        match field.as_chrono_field() {
            Some(ChronoField::InstantSeconds) => Ok(self.to_epoch_second()),
            Some(ChronoField::OffsetSeconds) => {
                Ok(i64::from(self.offset.total_seconds()))
            }
            Some(_) => self.dt.get_long(field),
            None => field.get_from(self),
        }
    }

    fn query_local_date(&self) -> Option<LocalDate> {
        Some(self.dt.date())
    }

    fn query_local_time(&self) -> Option<LocalTime> {
        Some(self.dt.time())
    }

    fn query_offset(&self) -> Option<ZoneOffset> {
        Some(self.offset)
    }

    fn query_zone(&self) -> Option<TimeZone> {
        Some(self.zone.clone())
    }

    fn query_instant(&self) -> Option<Instant> {
        Some(self.to_instant())
    }
}

impl Temporal for ZonedDateTime {
    fn is_supported_unit(&self, unit: &dyn Unit) -> bool {
        match unit.as_chrono_unit() {
            Some(u) => u != ChronoUnit::Forever,
            None => unit
                .is_supported_by(&TemporalValue::ZonedDateTime(self.clone())),
        }
    }

    fn with(
        &self,
        field: &dyn Field,
        value: i64,
    ) -> Result<ZonedDateTime, Error> {
        match field.as_chrono_field() {
            Some(f) => self.with_builtin(f, value),
            None => field::adjust_with_field(self, field, value),
        }
    }

    fn plus(
        &self,
        amount: i64,
        unit: &dyn Unit,
    ) -> Result<ZonedDateTime, Error> {
        match unit.as_chrono_unit() {
            Some(u) => self
                .plus_builtin(amount, u)
                .context(E::FailedAddUnit { unit: u }),
            None => field::add_with_unit(self, amount, unit),
        }
    }

    fn until(
        &self,
        end: &ZonedDateTime,
        unit: &dyn Unit,
    ) -> Result<i64, Error> {
        match unit.as_chrono_unit() {
            Some(u) => self
                .until_builtin(end, u)
                .context(E::FailedUntil { unit: u }),
            None => field::between_with_unit(self, end, unit),
        }
    }

    fn into_temporal_value(self) -> TemporalValue {
        TemporalValue::ZonedDateTime(self)
    }

    fn from_temporal_value(
        value: TemporalValue,
    ) -> Result<ZonedDateTime, Error> {
        if let TemporalValue::ZonedDateTime(zdt) = value {
            return Ok(zdt);
        }
        let Some(zone) = value.query_zone() else {
            return Err(field::mismatched("ZonedDateTime", &value));
        };
        if let Some(instant) = value.query_instant() {
            return ZonedDateTime::of_instant(instant, zone);
        }
        match (value.query_local_date(), value.query_local_time()) {
            (Some(date), Some(time)) => ZonedDateTime::of_local(
                LocalDateTime::from_parts(date, time),
                zone,
                value.query_offset(),
            ),
            _ => Err(field::mismatched("ZonedDateTime", &value)),
        }
    }
}

impl core::fmt::Debug for ZonedDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        printer::write_zoned(f, self.dt, self.offset, self.zone.region_id())
    }
}

impl core::str::FromStr for ZonedDateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<ZonedDateTime, Error> {
        parser::parse_zoned(s, &ZoneRegistry::new())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for ZonedDateTime {
    fn arbitrary(g: &mut quickcheck::Gen) -> ZonedDateTime {
        let odt = OffsetDateTime::arbitrary(g);
        ZonedDateTime {
            dt: odt.local_date_time(),
            offset: odt.offset(),
            zone: TimeZone::fixed(odt.offset()),
        }
    }
}
