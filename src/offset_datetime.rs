use core::cmp::Ordering;

use crate::{
    civil::{LocalDate, LocalDateTime, LocalTime, Weekday},
    clock::Clock,
    error::{civil::Error as E, ErrorContext},
    field::{
        self, ChronoField, ChronoUnit, Field, Temporal, TemporalAccessor,
        TemporalValue, Unit, ValueRange,
    },
    fmt::{parser, printer},
    tz::{TimeZone, ZoneOffset},
    Error, Instant, ZonedDateTime,
};

/// A local datetime paired with a fixed offset from UTC.
///
/// An offset datetime always names exactly one instant. Unlike a
/// [`ZonedDateTime`], it knows nothing about how the offset of a region
/// changes over time, so all arithmetic keeps the offset unchanged.
///
/// Equality compares the local datetime and the offset. Two offset
/// datetimes at the same instant but with different offsets are not equal.
/// Ordering is by instant first and by local datetime second, which is
/// consistent with equality.
///
/// # Text format
///
/// Offset datetimes print as a local datetime followed by an offset, like
/// `2007-10-28T02:30+02:00` or `2024-01-01T00:00Z`.
///
/// # Example
///
/// ```
/// use epochal::{tz::ZoneOffset, OffsetDateTime};
///
/// let odt: OffsetDateTime = "2007-10-28T02:30+02:00".parse()?;
/// let utc = odt.with_offset_same_instant(ZoneOffset::UTC)?;
/// assert_eq!(utc.to_string(), "2007-10-28T00:30Z");
/// assert_eq!(odt.to_instant(), utc.to_instant());
/// assert_ne!(odt, utc);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct OffsetDateTime {
    dt: LocalDateTime,
    offset: ZoneOffset,
}

impl OffsetDateTime {
    /// The minimum supported offset datetime, the smallest local datetime
    /// at the largest offset.
    pub const MIN: OffsetDateTime =
        OffsetDateTime::of(LocalDateTime::MIN, ZoneOffset::MAX);

    /// The maximum supported offset datetime, the largest local datetime
    /// at the smallest offset.
    pub const MAX: OffsetDateTime =
        OffsetDateTime::of(LocalDateTime::MAX, ZoneOffset::MIN);

    /// Combines a local datetime and an offset.
    #[inline]
    pub const fn of(dt: LocalDateTime, offset: ZoneOffset) -> OffsetDateTime {
        OffsetDateTime { dt, offset }
    }

    /// Returns the offset datetime of an instant observed at an offset.
    ///
    /// # Errors
    ///
    /// This returns a range error when the local datetime is out of range,
    /// which can only happen at the edges of the range of instants.
    pub fn of_instant(
        instant: Instant,
        offset: ZoneOffset,
    ) -> Result<OffsetDateTime, Error> {
        let dt = LocalDateTime::of_epoch_second(
            instant.epoch_second(),
            instant.nano(),
            offset,
        )
        .context(E::InvalidLocalDateTimeForInstant)?;
        Ok(OffsetDateTime { dt, offset })
    }

    /// Returns the current datetime according to the clock given, at the
    /// offset the clock's zone has at that instant.
    ///
    /// # Errors
    ///
    /// This returns a range error when the clock's instant is at the edge
    /// of the range of instants.
    pub fn now(clock: &dyn Clock) -> Result<OffsetDateTime, Error> {
        let instant = clock.instant();
        let offset = clock.zone().offset_for_instant(instant);
        OffsetDateTime::of_instant(instant, offset)
    }

    /// Returns the local datetime.
    #[inline]
    pub const fn local_date_time(self) -> LocalDateTime {
        self.dt
    }

    /// Returns the local date.
    #[inline]
    pub const fn date(self) -> LocalDate {
        self.dt.date()
    }

    /// Returns the local time.
    #[inline]
    pub const fn time(self) -> LocalTime {
        self.dt.time()
    }

    /// Returns the offset.
    #[inline]
    pub const fn offset(self) -> ZoneOffset {
        self.offset
    }

    /// Returns the year.
    #[inline]
    pub const fn year(self) -> i32 {
        self.dt.year()
    }

    /// Returns the month, from `1` to `12`.
    #[inline]
    pub const fn month(self) -> i8 {
        self.dt.month()
    }

    /// Returns the day of the month, starting at `1`.
    #[inline]
    pub const fn day(self) -> i8 {
        self.dt.day()
    }

    /// Returns the weekday.
    #[inline]
    pub const fn day_of_week(self) -> Weekday {
        self.dt.day_of_week()
    }

    /// Returns the hour, from `0` to `23`.
    #[inline]
    pub const fn hour(self) -> i8 {
        self.dt.hour()
    }

    /// Returns the minute, from `0` to `59`.
    #[inline]
    pub const fn minute(self) -> i8 {
        self.dt.minute()
    }

    /// Returns the second, from `0` to `59`.
    #[inline]
    pub const fn second(self) -> i8 {
        self.dt.second()
    }

    /// Returns the nanosecond, from `0` to `999_999_999`.
    #[inline]
    pub const fn nano(self) -> i32 {
        self.dt.nano()
    }

    /// Returns a copy with the local datetime kept and the offset replaced.
    ///
    /// The result is at a different instant unless the offsets are equal.
    #[inline]
    pub const fn with_offset_same_local(
        self,
        offset: ZoneOffset,
    ) -> OffsetDateTime {
        OffsetDateTime { dt: self.dt, offset }
    }

    /// Returns a copy at the same instant observed at another offset.
    ///
    /// # Errors
    ///
    /// This returns a range error when the adjusted local datetime is out
    /// of range.
    pub fn with_offset_same_instant(
        self,
        offset: ZoneOffset,
    ) -> Result<OffsetDateTime, Error> {
        if offset == self.offset {
            return Ok(self);
        }
        let dt = self.dt.plus_seconds(self.offset.seconds_until(offset))?;
        Ok(OffsetDateTime { dt, offset })
    }

    /// Returns a copy with the local datetime replaced.
    #[inline]
    pub const fn with_local_date_time(
        self,
        dt: LocalDateTime,
    ) -> OffsetDateTime {
        OffsetDateTime { dt, offset: self.offset }
    }

    /// Returns the number of seconds since the Unix epoch.
    #[inline]
    pub const fn to_epoch_second(self) -> i64 {
        self.dt.to_epoch_second(self.offset)
    }

    /// Returns the instant named by this offset datetime.
    #[inline]
    pub const fn to_instant(self) -> Instant {
        self.dt.to_instant(self.offset)
    }

    /// Returns the zoned datetime at the same instant in the zone given.
    ///
    /// # Errors
    ///
    /// This returns a range error when the local datetime in the zone is out
    /// of range.
    pub fn at_zone_same_instant(
        self,
        zone: &TimeZone,
    ) -> Result<ZonedDateTime, Error> {
        ZonedDateTime::of_instant(self.to_instant(), zone.clone())
    }

    /// Returns the zoned datetime with the same local datetime in the zone
    /// given.
    ///
    /// The offset of this value is kept when the zone allows it. That is
    /// what makes an overlap resolve to the side this value was on.
    ///
    /// # Errors
    ///
    /// This returns a range error when a local datetime in a gap is shifted
    /// out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use epochal::{
    ///     tz::{TimeZone, TransitionRules, ZoneOffset},
    ///     Instant, OffsetDateTime,
    /// };
    ///
    /// let fall: Instant = "2007-10-28T01:00:00Z".parse()?;
    /// let tz = TimeZone::with_rules("Europe/Paris", TransitionRules::new(
    ///     ZoneOffset::of_hours(2)?,
    ///     [(fall, ZoneOffset::of_hours(1)?)],
    /// )?);
    /// for s in ["2007-10-28T02:30+02:00", "2007-10-28T02:30+01:00"] {
    ///     let odt: OffsetDateTime = s.parse()?;
    ///     let zdt = odt.at_zone_similar_local(&tz)?;
    ///     assert_eq!(zdt.offset(), odt.offset());
    /// }
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn at_zone_similar_local(
        self,
        zone: &TimeZone,
    ) -> Result<ZonedDateTime, Error> {
        ZonedDateTime::of_local(self.dt, zone.clone(), Some(self.offset))
    }

    /// Returns a copy with a number of years added.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_years(self, years: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_local_date_time(self.dt.plus_years(years)?))
    }

    /// Returns a copy with a number of months added.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_months(self, months: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_local_date_time(self.dt.plus_months(months)?))
    }

    /// Returns a copy with a number of days added.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_days(self, days: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_local_date_time(self.dt.plus_days(days)?))
    }

    /// Returns a copy with a number of hours added.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_hours(self, hours: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_local_date_time(self.dt.plus_hours(hours)?))
    }

    /// Returns a copy with a number of minutes added.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_minutes(self, minutes: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_local_date_time(self.dt.plus_minutes(minutes)?))
    }

    /// Returns a copy with a number of seconds added.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_seconds(self, seconds: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_local_date_time(self.dt.plus_seconds(seconds)?))
    }

    /// Returns a copy with a number of nanoseconds added.
    ///
    /// # Errors
    ///
    /// This returns an error when the result is out of range.
    pub fn plus_nanos(self, nanos: i64) -> Result<OffsetDateTime, Error> {
        Ok(self.with_local_date_time(self.dt.plus_nanos(nanos)?))
    }

    /// Returns a copy with the time truncated to the unit given.
    ///
    /// # Errors
    ///
    /// This returns an error when the unit is longer than a day, or when it
    /// does not evenly divide a day.
    pub fn truncated_to(
        self,
        unit: &dyn Unit,
    ) -> Result<OffsetDateTime, Error> {
        Ok(self.with_local_date_time(self.dt.truncated_to(unit)?))
    }

    fn with_builtin(
        &self,
        field: ChronoField,
        value: i64,
    ) -> Result<OffsetDateTime, Error> {
        match field {
            ChronoField::InstantSeconds => {
                let instant = Instant::of_epoch_second_adjusted(
                    value,
                    i64::from(self.nano()),
                )?;
                OffsetDateTime::of_instant(instant, self.offset)
            }
            ChronoField::OffsetSeconds => {
                let seconds = field.check_valid_int_value(value)?;
                let offset = ZoneOffset::of_total_seconds(seconds)?;
                Ok(self.with_offset_same_local(offset))
            }
            _ => Ok(self.with_local_date_time(self.dt.with(&field, value)?)),
        }
    }
}

impl Ord for OffsetDateTime {
    fn cmp(&self, rhs: &OffsetDateTime) -> Ordering {
        self.to_instant()
            .cmp(&rhs.to_instant())
            .then_with(|| self.dt.cmp(&rhs.dt))
    }
}

impl PartialOrd for OffsetDateTime {
    fn partial_cmp(&self, rhs: &OffsetDateTime) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl From<OffsetDateTime> for Instant {
    fn from(odt: OffsetDateTime) -> Instant {
        odt.to_instant()
    }
}

impl TemporalAccessor for OffsetDateTime {
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
        Some(TimeZone::fixed(self.offset))
    }

    fn query_instant(&self) -> Option<Instant> {
        Some(self.to_instant())
    }
}

impl Temporal for OffsetDateTime {
    fn is_supported_unit(&self, unit: &dyn Unit) -> bool {
        match unit.as_chrono_unit() {
            Some(u) => u != ChronoUnit::Forever,
            None => {
                unit.is_supported_by(&TemporalValue::OffsetDateTime(*self))
            }
        }
    }

    fn with(
        &self,
        field: &dyn Field,
        value: i64,
    ) -> Result<OffsetDateTime, Error> {
        match field.as_chrono_field() {
            Some(f) => self.with_builtin(f, value),
            None => field::adjust_with_field(self, field, value),
        }
    }

    fn plus(
        &self,
        amount: i64,
        unit: &dyn Unit,
    ) -> Result<OffsetDateTime, Error> {
        match unit.as_chrono_unit() {
            Some(_) => {
                Ok(self.with_local_date_time(self.dt.plus(amount, unit)?))
            }
            None => field::add_with_unit(self, amount, unit),
        }
    }

    fn until(
        &self,
        end: &OffsetDateTime,
        unit: &dyn Unit,
    ) -> Result<i64, Error> {
        match unit.as_chrono_unit() {
            Some(u) => {
                let end = end
                    .with_offset_same_instant(self.offset)
                    .context(E::FailedUntil { unit: u })?;
                self.dt.until(&end.dt, unit)
            }
            None => field::between_with_unit(self, end, unit),
        }
    }

    fn into_temporal_value(self) -> TemporalValue {
        TemporalValue::OffsetDateTime(self)
    }

    fn from_temporal_value(
        value: TemporalValue,
    ) -> Result<OffsetDateTime, Error> {
        match value {
            TemporalValue::OffsetDateTime(odt) => return Ok(odt),
            TemporalValue::ZonedDateTime(ref zdt) => {
                return Ok(zdt.to_offset_date_time())
            }
            _ => {}
        }
        let offset = value.query_offset();
        let instant = value.query_instant();
        match (offset, instant) {
            (Some(offset), Some(instant)) => {
                OffsetDateTime::of_instant(instant, offset)
            }
            _ => Err(field::mismatched("OffsetDateTime", &value)),
        }
    }
}

impl core::fmt::Debug for OffsetDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

impl core::fmt::Display for OffsetDateTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        printer::write_offset_datetime(f, self.dt, self.offset)
    }
}

impl core::str::FromStr for OffsetDateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<OffsetDateTime, Error> {
        parser::parse_offset_datetime(s)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for OffsetDateTime {
    fn arbitrary(g: &mut quickcheck::Gen) -> OffsetDateTime {
        let dt = LocalDateTime::arbitrary(g);
        let offset = ZoneOffset::arbitrary(g);
        OffsetDateTime { dt, offset }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::tz::testdata;

    use super::*;

    fn odt(s: &str) -> OffsetDateTime {
        s.parse().unwrap()
    }

    #[test]
    fn offsets() {
        let d = odt("2024-03-10T02:30+05:30");
        let utc = d.with_offset_same_instant(ZoneOffset::UTC).unwrap();
        assert_eq!(utc, odt("2024-03-09T21:00Z"));
        assert_eq!(utc.to_instant(), d.to_instant());
        let same_local = d.with_offset_same_local(ZoneOffset::UTC);
        assert_eq!(same_local, odt("2024-03-10T02:30Z"));
        assert_eq!(
            d.to_instant().epoch_second() + 5 * 3_600 + 30 * 60,
            same_local.to_epoch_second(),
        );
        let err = OffsetDateTime::MAX
            .with_offset_same_instant(ZoneOffset::MAX)
            .unwrap_err();
        assert!(err.is_range());
    }

    #[test]
    fn ordering_is_by_instant() {
        let a = odt("2024-01-01T12:00+02:00");
        let b = odt("2024-01-01T11:00Z");
        let c = odt("2024-01-01T10:00Z");
        assert!(a < b);
        assert_eq!(c.to_instant(), a.to_instant());
        // Same instant, the smaller local datetime sorts first.
        assert!(c < a);
        assert!(OffsetDateTime::MIN < OffsetDateTime::MAX);
    }

    #[test]
    fn fields() {
        let d = odt("1970-01-01T02:00+02:00");
        assert_eq!(d.get_long(&ChronoField::InstantSeconds).unwrap(), 0);
        assert_eq!(d.get_long(&ChronoField::OffsetSeconds).unwrap(), 7_200);
        assert_eq!(d.get_long(&ChronoField::HourOfDay).unwrap(), 2);
        assert_eq!(
            d.with(&ChronoField::InstantSeconds, 3_600).unwrap(),
            odt("1970-01-01T03:00+02:00"),
        );
        assert_eq!(
            d.with(&ChronoField::OffsetSeconds, -3_600).unwrap(),
            odt("1970-01-01T02:00-01:00"),
        );
        assert!(d
            .with(&ChronoField::OffsetSeconds, 64_801)
            .unwrap_err()
            .is_range());
        assert_eq!(
            d.range(&ChronoField::DayOfMonth).unwrap(),
            ValueRange::fixed(1, 31),
        );
    }

    #[test]
    fn until_normalizes_offsets() {
        let start = odt("2024-01-01T00:00+01:00");
        let end = odt("2024-01-01T23:00-01:00");
        assert_eq!(start.until(&end, &ChronoUnit::Hours).unwrap(), 25);
        assert_eq!(start.until(&end, &ChronoUnit::Days).unwrap(), 1);
        assert_eq!(end.until(&start, &ChronoUnit::Hours).unwrap(), -25);
        assert_eq!(
            start.plus(25, &ChronoUnit::Hours).unwrap().to_instant(),
            end.to_instant(),
        );
    }

    #[test]
    fn overlap_resolution_keeps_offset() {
        let tz = testdata::zone("Europe/Paris");
        let summer = odt("2007-10-28T02:30+02:00");
        let winter = odt("2007-10-28T02:30+01:00");
        let zdt = summer.at_zone_similar_local(&tz).unwrap();
        assert_eq!(zdt.offset(), summer.offset());
        let zdt = winter.at_zone_similar_local(&tz).unwrap();
        assert_eq!(zdt.offset(), winter.offset());
        let zdt =
            odt("2007-10-28T02:30+05:00").at_zone_similar_local(&tz).unwrap();
        assert_eq!(zdt.offset(), summer.offset());

        let zdt = winter.at_zone_same_instant(&tz).unwrap();
        assert_eq!(zdt.to_offset_date_time(), winter);
    }

    #[test]
    fn from_temporal_value() {
        let d = odt("2024-01-01T00:00+01:00");
        let value = d.into_temporal_value();
        assert_eq!(OffsetDateTime::from_temporal_value(value).unwrap(), d);
        let value = d.local_date_time().into_temporal_value();
        let err = OffsetDateTime::from_temporal_value(value).unwrap_err();
        assert!(err.to_string().contains("OffsetDateTime"));
    }

    #[test]
    fn text() {
        let cases = [
            "2024-03-10T02:30Z",
            "2024-03-10T02:30:01.500-05:00",
            "2024-03-10T02:30+12:34:56",
        ];
        for s in cases {
            assert_eq!(odt(s).to_string(), s);
        }
        assert_eq!(
            odt("2024-03-10T02:30:01.5-05:00").to_string(),
            "2024-03-10T02:30:01.500-05:00",
        );
        assert_eq!(
            odt("2024-03-10T02:30:00.000+00:00").to_string(),
            "2024-03-10T02:30Z",
        );
        assert!("2024-03-10T02:30"
            .parse::<OffsetDateTime>()
            .unwrap_err()
            .is_parse());
        assert!("2024-03-10T02:30+19:00"
            .parse::<OffsetDateTime>()
            .unwrap_err()
            .is_range());
    }

    quickcheck::quickcheck! {
        fn prop_text_roundtrip(d: OffsetDateTime) -> bool {
            d.to_string().parse::<OffsetDateTime>().unwrap() == d
        }

        fn prop_instant_roundtrip(d: OffsetDateTime) -> bool {
            let instant = d.to_instant();
            OffsetDateTime::of_instant(instant, d.offset()).unwrap() == d
        }
    }
}
