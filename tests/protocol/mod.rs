use epochal::{
    civil::{LocalDate, LocalDateTime, LocalTime, MonthDay, YearMonth},
    field::{
        Amount, ChronoField, ChronoUnit, Field, Temporal, TemporalAccessor,
        TemporalValue, Unit, ValueRange,
    },
    tz::{TimeZone, ZoneOffset},
    Duration, Error, Instant, OffsetDateTime, Period, ZonedDateTime,
};

/// Milliseconds since the Unix epoch, for anything that is on the
/// timeline.
#[derive(Debug)]
struct EpochMillis;

impl Field for EpochMillis {
    fn name(&self) -> &str {
        "EpochMillis"
    }

    fn range(&self) -> ValueRange {
        ValueRange::fixed(i64::MIN, i64::MAX)
    }

    fn is_date_based(&self) -> bool {
        false
    }

    fn is_time_based(&self) -> bool {
        false
    }

    fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool {
        temporal.query_instant().is_some()
    }

    fn get_from(&self, temporal: &dyn TemporalAccessor) -> Result<i64, Error> {
        temporal
            .query_instant()
            .ok_or_else(|| Error::unsupported_field(self.name()))?
            .to_epoch_milli()
    }

    fn adjust_into(
        &self,
        temporal: TemporalValue,
        value: i64,
    ) -> Result<TemporalValue, Error> {
        let current = self.get_from(&temporal)?;
        let delta = value.checked_sub(current).ok_or_else(|| {
            Error::from_args(format_args!("too many milliseconds"))
        })?;
        temporal.plus(delta, &ChronoUnit::Millis)
    }
}

/// A unit of ninety days, supported by anything with a date.
#[derive(Debug)]
struct Seasons;

impl Unit for Seasons {
    fn name(&self) -> &str {
        "Seasons"
    }

    fn duration(&self) -> Duration {
        Duration::of_days(90).unwrap()
    }

    fn is_duration_estimated(&self) -> bool {
        false
    }

    fn is_date_based(&self) -> bool {
        true
    }

    fn is_time_based(&self) -> bool {
        false
    }

    fn is_supported_by(&self, temporal: &TemporalValue) -> bool {
        temporal.query_local_date().is_some()
    }

    fn add_to(
        &self,
        temporal: TemporalValue,
        amount: i64,
    ) -> Result<TemporalValue, Error> {
        if !self.is_supported_by(&temporal) {
            return Err(Error::unsupported_unit(self.name()));
        }
        let days = amount.checked_mul(90).ok_or_else(|| {
            Error::from_args(format_args!("too many seasons"))
        })?;
        temporal.plus(days, &ChronoUnit::Days)
    }

    fn between(
        &self,
        start: &TemporalValue,
        end: &TemporalValue,
    ) -> Result<i64, Error> {
        Ok(start.until(end, &ChronoUnit::Days)? / 90)
    }
}

/// A work shift of eight hours and one season, applied in that order.
struct ShiftAndSeason;

impl Amount for ShiftAndSeason {
    fn units(&self) -> Vec<&dyn Unit> {
        vec![&ChronoUnit::Hours, &Seasons]
    }

    fn get(&self, unit: &dyn Unit) -> Result<i64, Error> {
        match unit.name() {
            "Hours" => Ok(8),
            "Seasons" => Ok(1),
            _ => Err(Error::unsupported_unit(unit.name())),
        }
    }
}

#[test]
fn custom_field_across_types() -> crate::Result {
    let instant: Instant = "2024-03-10T02:30:00.250Z".parse()?;
    let millis = instant.to_epoch_milli()?;
    assert_eq!(instant.get_long(&EpochMillis)?, millis);

    let odt = instant.at_offset(ZoneOffset::of_hours(5)?)?;
    assert_eq!(odt.get_long(&EpochMillis)?, millis);
    let zdt = instant.at_zone(&TimeZone::fixed(ZoneOffset::of_hours(-3)?))?;
    assert_eq!(zdt.get_long(&EpochMillis)?, millis);

    let later = odt.with(&EpochMillis, millis + 1_000)?;
    assert_eq!(later.offset(), odt.offset());
    assert_eq!(later.to_instant(), instant.plus_seconds(1)?);
    assert_eq!(instant.with(&EpochMillis, 0)?, Instant::EPOCH);

    let date = LocalDate::of(2024, 3, 10)?;
    assert!(!date.is_supported(&EpochMillis));
    assert!(date.get_long(&EpochMillis).unwrap_err().is_unsupported());
    assert!(LocalDateTime::MIN
        .with(&EpochMillis, 0)
        .unwrap_err()
        .is_unsupported());
    Ok(())
}

#[test]
fn custom_unit_across_types() -> crate::Result {
    let date = LocalDate::of(2024, 1, 1)?;
    assert_eq!(date.plus(2, &Seasons)?, LocalDate::of(2024, 6, 29)?);
    assert_eq!(date.until(&LocalDate::of(2024, 12, 31)?, &Seasons)?, 4);

    let dt = date.at_time(LocalTime::NOON);
    assert_eq!(dt.plus(1, &Seasons)?, "2024-03-31T12:00".parse()?);

    let zdt: ZonedDateTime = "2024-01-01T12:00+01:00".parse()?;
    assert_eq!(zdt.minus(1, &Seasons)?.to_string(), "2023-10-03T12:00+01:00");

    assert!(!LocalTime::NOON.is_supported_unit(&Seasons));
    assert!(LocalTime::NOON.plus(1, &Seasons).unwrap_err().is_unsupported());
    assert!(Instant::EPOCH.plus(1, &Seasons).unwrap_err().is_unsupported());
    Ok(())
}

#[test]
fn custom_amount_in_declared_order() -> crate::Result {
    let dt: LocalDateTime = "2024-02-29T20:00".parse()?;
    // 8 hours first moves to 1 March, and then 90 days lands on 30 May.
    assert_eq!(dt.plus_amount(&ShiftAndSeason)?, "2024-05-30T04:00".parse()?);
    assert_eq!(
        dt.plus_amount(&ShiftAndSeason)?.minus_amount(&ShiftAndSeason)?,
        dt,
    );
    assert!(LocalTime::NOON
        .plus_amount(&ShiftAndSeason)
        .unwrap_err()
        .is_unsupported());
    Ok(())
}

#[test]
fn builtin_units_across_types() -> crate::Result {
    let time = LocalTime::of(23, 0, 0, 0)?;
    assert_eq!(time.plus(2, &ChronoUnit::Hours)?, LocalTime::of(1, 0, 0, 0)?);
    assert!(time.plus(1, &ChronoUnit::Days).unwrap_err().is_unsupported());

    let ym = YearMonth::of(2024, 11)?;
    assert_eq!(ym.plus(3, &ChronoUnit::Months)?, YearMonth::of(2025, 2)?);
    assert_eq!(ym.plus(1, &ChronoUnit::Centuries)?, YearMonth::of(2124, 11)?);
    assert!(ym.plus(1, &ChronoUnit::Days).unwrap_err().is_unsupported());

    let date = LocalDate::of(2024, 1, 1)?;
    assert_eq!(
        date.plus(1, &ChronoUnit::Millennia)?,
        LocalDate::of(3024, 1, 1)?,
    );
    assert!(date.plus(1, &ChronoUnit::Forever).unwrap_err().is_unsupported());
    assert!(date
        .plus(i64::MAX, &ChronoUnit::Weeks)
        .unwrap_err()
        .is_overflow());
    assert!(date
        .plus(1_000_000_000, &ChronoUnit::Years)
        .unwrap_err()
        .is_range());

    let instant = Instant::EPOCH;
    assert_eq!(instant.plus(1, &ChronoUnit::HalfDays)?.epoch_second(), 43_200);
    assert!(instant
        .plus(1, &ChronoUnit::Months)
        .unwrap_err()
        .is_unsupported());
    Ok(())
}

#[test]
fn error_kinds_stay_distinct() -> crate::Result {
    let date = LocalDate::of(2024, 2, 1)?;
    let range = date.with(&ChronoField::DayOfMonth, 30).unwrap_err();
    assert!(range.is_range());
    assert!(!range.is_unsupported() && !range.is_overflow());

    let unsupported = date.with(&ChronoField::MinuteOfHour, 1).unwrap_err();
    assert!(unsupported.is_unsupported());
    assert!(!unsupported.is_range() && !unsupported.is_overflow());

    let overflow = Duration::of_seconds(i64::MIN).negated().unwrap_err();
    assert!(overflow.is_overflow());
    assert!(!overflow.is_range() && !overflow.is_unsupported());
    Ok(())
}

#[test]
fn temporal_values_are_interchangeable() -> crate::Result {
    let values = [
        TemporalValue::Instant(Instant::EPOCH),
        TemporalValue::LocalDate(LocalDate::of(2024, 1, 1)?),
        TemporalValue::LocalTime(LocalTime::NOON),
        TemporalValue::LocalDateTime("2024-01-01T12:00".parse()?),
        TemporalValue::OffsetDateTime("2024-01-01T12:00+01:00".parse()?),
        TemporalValue::ZonedDateTime("2024-01-01T12:00+01:00".parse()?),
        TemporalValue::YearMonth(YearMonth::of(2024, 1)?),
    ];
    for value in values {
        let supports_days = value.is_supported_unit(&ChronoUnit::Days);
        match value.plus(1, &ChronoUnit::Days) {
            Ok(next) => {
                assert!(supports_days, "{}", value.kind());
                assert_eq!(next.kind(), value.kind());
                assert_eq!(value.until(&next, &ChronoUnit::Days)?, 1);
            }
            Err(err) => {
                assert!(!supports_days, "{}", value.kind());
                assert!(err.is_unsupported(), "{}: {err}", value.kind());
            }
        }
    }

    let odt: OffsetDateTime = "2024-01-01T12:00+01:00".parse()?;
    let value = odt.into_temporal_value();
    assert_eq!(OffsetDateTime::from_temporal_value(value.clone())?, odt);
    assert_eq!(
        LocalDate::from_temporal_value(value)?,
        LocalDate::of(2024, 1, 1)?,
    );

    let md = MonthDay::of(2, 29)?;
    assert_eq!(md.get_long(&ChronoField::DayOfMonth)?, 29);
    assert!(md.get_long(&ChronoField::Year).unwrap_err().is_unsupported());
    Ok(())
}

#[test]
fn period_and_duration_are_amounts() -> crate::Result {
    let period = Period::of(1, 1, 1);
    let units: Vec<&str> = period.units().iter().map(|u| u.name()).collect();
    assert_eq!(units, ["Years", "Months", "Days"]);
    assert_eq!(period.get(&ChronoUnit::Months)?, 1);
    assert!(period.get(&ChronoUnit::Hours).unwrap_err().is_unsupported());

    let duration = Duration::of_millis(1_500);
    assert_eq!(duration.get(&ChronoUnit::Seconds)?, 1);
    assert_eq!(duration.get(&ChronoUnit::Nanos)?, 500_000_000);
    assert_eq!(
        Instant::EPOCH.plus_amount(&duration)?,
        Instant::of_epoch_milli(1_500)?,
    );
    assert!(LocalDate::of(2024, 1, 1)?
        .plus_amount(&duration)
        .unwrap_err()
        .is_unsupported());
    Ok(())
}
