use epochal::{
    calendar,
    civil::{LocalDate, LocalDateTime, Weekday},
    field::{ChronoField, ChronoUnit, Temporal, TemporalAccessor},
    Duration, Instant, Period,
};

#[test]
fn epoch_day_fixed_points() -> crate::Result {
    assert_eq!(calendar::to_epoch_day(1970, 1, 1)?, 0);
    assert_eq!(calendar::to_epoch_day(1858, 11, 17)?, -40_587);
    assert_eq!(
        LocalDate::of_epoch_day(-40_587)?,
        LocalDate::of(1858, 11, 17)?,
    );
    assert_eq!(LocalDate::of(1970, 1, 1)?.day_of_week(), Weekday::Thursday);

    let min = LocalDate::MIN.to_epoch_day();
    let max = LocalDate::MAX.to_epoch_day();
    assert_eq!(calendar::from_epoch_day(min)?, (-999_999_999, 1, 1));
    assert_eq!(calendar::from_epoch_day(max)?, (999_999_999, 12, 31));
    assert!(LocalDate::of_epoch_day(min - 1).unwrap_err().is_range());
    assert!(LocalDate::of_epoch_day(max + 1).unwrap_err().is_range());
    Ok(())
}

/// Walks every day over several four-century cycles on both sides of year
/// zero and checks that conversions agree with counting days one by one.
#[test]
fn epoch_day_consecutive() -> crate::Result {
    let start = calendar::to_epoch_day(-801, 1, 1)?;
    let mut expected = (-801, 1, 1);
    for epoch_day in start..start + 146_097 * 4 {
        let got = calendar::from_epoch_day(epoch_day)?;
        assert_eq!(got, expected, "epoch day {epoch_day}");
        assert_eq!(calendar::to_epoch_day(got.0, got.1, got.2)?, epoch_day);

        let (y, m, d) = expected;
        let len = calendar::length_of_month(i64::from(y), m)?;
        expected = if d < len {
            (y, m, d + 1)
        } else if m < 12 {
            (y, m + 1, 1)
        } else {
            (y + 1, 1, 1)
        };
    }
    Ok(())
}

#[test]
fn invalid_dates_are_rejected() {
    assert!(LocalDate::of(2023, 2, 29).unwrap_err().is_range());
    assert!(LocalDate::of(2024, 13, 1).unwrap_err().is_range());
    assert!(LocalDate::of(2024, 4, 31).unwrap_err().is_range());
    assert!(LocalDate::of(1_000_000_000, 1, 1).unwrap_err().is_range());
    assert!(calendar::to_epoch_day(2024, 0, 1).unwrap_err().is_range());
}

#[test]
fn instant_normalization() -> crate::Result {
    let instant = Instant::of_epoch_second_adjusted(2, -1)?;
    assert_eq!((instant.epoch_second(), instant.nano()), (1, 999_999_999));

    let instant = Instant::of_epoch_second_adjusted(0, -2_500_000_000)?;
    assert_eq!((instant.epoch_second(), instant.nano()), (-3, 500_000_000));

    let before = Instant::of_epoch_second(0)?.minus_nanos(1)?;
    assert_eq!((before.epoch_second(), before.nano()), (-1, 999_999_999));
    Ok(())
}

#[test]
fn overflow_is_distinct_from_range() {
    let err =
        Instant::of_epoch_second_adjusted(Instant::MAX_SECOND, 1_000_000_000)
            .unwrap_err();
    assert!(err.is_range());
    assert!(!err.is_overflow());

    let err =
        Instant::of_epoch_second_adjusted(i64::MAX, i64::MAX).unwrap_err();
    assert!(err.is_overflow());
    assert!(!err.is_range());

    let err = Instant::EPOCH.plus_seconds(i64::MAX).unwrap_err();
    assert!(err.is_range() || err.is_overflow());
    assert!(Duration::of_seconds(i64::MAX)
        .plus_seconds(1)
        .unwrap_err()
        .is_overflow());
}

#[test]
fn day_of_month_clamping() -> crate::Result {
    let leap_day = LocalDate::of(2008, 2, 29)?;
    assert_eq!(leap_day.with_year(2007)?, LocalDate::of(2007, 2, 28)?);
    assert_eq!(
        leap_day.with(&ChronoField::Year, 2007)?,
        LocalDate::of(2007, 2, 28)?,
    );
    assert_eq!(
        LocalDate::of(2007, 3, 31)?.plus_months(-1)?,
        LocalDate::of(2007, 2, 28)?,
    );
    assert_eq!(
        leap_day.plus(1, &ChronoUnit::Years)?,
        LocalDate::of(2009, 2, 28)?,
    );
    Ok(())
}

#[test]
fn until_never_overshoots_calendar_units() -> crate::Result {
    let dates = [
        LocalDate::of(2007, 1, 31)?,
        LocalDate::of(2008, 2, 29)?,
        LocalDate::of(2008, 3, 1)?,
        LocalDate::of(1999, 12, 31)?,
        LocalDate::of(-1, 6, 15)?,
        LocalDate::of(2010, 7, 30)?,
    ];
    for start in dates {
        for end in dates {
            let units =
                [ChronoUnit::Days, ChronoUnit::Months, ChronoUnit::Years];
            for unit in units {
                let amount = start.until(&end, &unit)?;
                let reached = start.plus(amount, &unit)?;
                if start <= end {
                    assert!(reached <= end, "{start} + {amount} {unit:?}");
                } else {
                    assert!(reached >= end, "{start} + {amount} {unit:?}");
                }
            }
        }
    }
    Ok(())
}

#[test]
fn until_truncates_toward_zero() -> crate::Result {
    let start = LocalDate::of(2007, 1, 31)?;
    let end = LocalDate::of(2007, 2, 28)?;
    assert_eq!(start.until(&end, &ChronoUnit::Months)?, 0);
    assert_eq!(end.until(&start, &ChronoUnit::Months)?, 0);
    assert_eq!(
        start.until(&LocalDate::of(2007, 3, 31)?, &ChronoUnit::Months)?,
        2,
    );

    let start: LocalDateTime = "2024-01-01T12:00".parse()?;
    let end: LocalDateTime = "2024-01-02T11:59:59.999999999".parse()?;
    assert_eq!(start.until(&end, &ChronoUnit::Days)?, 0);
    assert_eq!(start.until(&end, &ChronoUnit::HalfDays)?, 1);
    assert_eq!(end.until(&start, &ChronoUnit::Hours)?, -23);
    Ok(())
}

#[test]
fn period_arithmetic() -> crate::Result {
    assert_eq!(
        Period::of(1, 2, 3).plus(Period::of(2, 3, 4))?,
        Period::of(3, 5, 7),
    );
    assert_eq!(Period::of(1, 14, 40).normalized()?, Period::of(2, 2, 40));
    assert_eq!(Period::of(1, 2, 0).to_total_months(), 14);

    // Years, then months, then days.
    let date = LocalDate::of(2008, 2, 29)?;
    assert_eq!(
        date.plus_amount(&Period::of(1, 1, 1))?,
        LocalDate::of(2009, 3, 29)?,
    );
    assert_eq!(
        LocalDate::of(2008, 1, 31)?.plus_amount(&Period::of(0, 1, 1))?,
        LocalDate::of(2008, 3, 1)?,
    );
    assert_eq!(
        LocalDate::of(2008, 1, 31)?.until_period(LocalDate::of(2009, 3, 1)?)?,
        Period::of(1, 1, 1),
    );
    Ok(())
}

#[test]
fn fields_of_a_date() -> crate::Result {
    let date = LocalDate::of(2024, 12, 31)?;
    assert_eq!(date.get_long(&ChronoField::DayOfYear)?, 366);
    assert_eq!(date.get_long(&ChronoField::EpochDay)?, date.to_epoch_day());
    assert_eq!(date.get_long(&ChronoField::ProlepticMonth)?, 2024 * 12 + 11);
    assert_eq!(date.get_long(&ChronoField::DayOfWeek)?, 2);
    assert!(date
        .get_long(&ChronoField::HourOfDay)
        .unwrap_err()
        .is_unsupported());
    Ok(())
}
