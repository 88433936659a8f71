use epochal::{
    civil::{LocalDate, LocalDateTime, LocalTime, MonthDay, YearMonth},
    tz::{TimeZone, ZoneOffset},
    Duration, Instant, OffsetDateTime, Period, ZonedDateTime,
};

/// Asserts that a value prints as `text` and parses back from it.
fn roundtrip<T>(value: T, text: &str)
where
    T: core::fmt::Debug + core::fmt::Display + core::str::FromStr + PartialEq,
    T::Err: core::fmt::Display,
{
    assert_eq!(value.to_string(), text);
    match text.parse::<T>() {
        Ok(parsed) => assert_eq!(parsed, value, "{text}"),
        Err(err) => panic!("failed to parse {text:?}: {err}"),
    }
}

#[test]
fn canonical_forms() -> crate::Result {
    roundtrip(LocalDate::of(2024, 2, 29)?, "2024-02-29");
    roundtrip(LocalTime::of(9, 5, 0, 500_000_000)?, "09:05:00.500");
    let dt = LocalDateTime::of(2024, 3, 10, 2, 30, 0, 0)?;
    roundtrip(dt, "2024-03-10T02:30");
    roundtrip(
        Instant::of_epoch_second_adjusted(0, 1)?,
        "1970-01-01T00:00:00.000000001Z",
    );
    roundtrip(ZoneOffset::of_hours_minutes(-5, -30)?, "-05:30");
    roundtrip(
        dt.at_offset(ZoneOffset::of_hours(1)?),
        "2024-03-10T02:30+01:00",
    );
    roundtrip(
        Duration::of_seconds_adjusted(3_723, 400_000_000)?,
        "PT1H2M3.4S",
    );
    roundtrip(Period::of(1, -2, 3), "P1Y-2M3D");
    roundtrip(Period::ZERO, "P0D");
    roundtrip(YearMonth::of(-1, 12)?, "-0001-12");
    roundtrip(MonthDay::of(2, 29)?, "--02-29");
    Ok(())
}

#[test]
fn extreme_years() -> crate::Result {
    roundtrip(Instant::MIN, "-1000000000-01-01T00:00:00Z");
    roundtrip(Instant::MAX, "+1000000000-12-31T23:59:59.999999999Z");
    let edges = ["+1000000000-01-01T00:00:00Z", "-1000000000-12-31T00:00:00Z"];
    for text in edges {
        let instant: Instant = text.parse()?;
        assert_eq!(instant.to_string(), text);
    }
    assert!("+1000000001-01-01T00:00:00Z"
        .parse::<Instant>()
        .unwrap_err()
        .is_range());
    roundtrip(LocalDate::MIN, "-999999999-01-01");
    roundtrip(LocalDate::MAX, "+999999999-12-31");
    roundtrip(LocalDate::of(10_000, 1, 1)?, "+10000-01-01");
    roundtrip(LocalDate::of(-10_000, 1, 1)?, "-10000-01-01");
    roundtrip(LocalDate::of(9_999, 12, 31)?, "9999-12-31");
    roundtrip(LocalDate::of(-9_999, 1, 1)?, "-9999-01-01");
    Ok(())
}

#[test]
fn instants_at_the_edges_of_local_dates() -> crate::Result {
    // The local date range is narrower than the instant range, so these
    // instants have no local date in UTC.
    assert!(Instant::MIN.at_offset(ZoneOffset::UTC).unwrap_err().is_range());
    let last = LocalDateTime::MAX.to_instant(ZoneOffset::UTC);
    assert_eq!(last.to_string(), "+999999999-12-31T23:59:59.999999999Z");
    assert!(last.plus_nanos(1)?.at_offset(ZoneOffset::UTC).is_err());
    Ok(())
}

#[test]
fn parse_errors_report_position() {
    let err = "2024-03-10T25:00".parse::<LocalDateTime>().unwrap_err();
    assert!(err.is_parse());
    assert!(err.is_range());
    assert_eq!(err.parse_input(), Some("2024-03-10T25:00"));
    assert_eq!(err.parse_offset(), Some(11));

    let err = "2024-03-10X02:30".parse::<LocalDateTime>().unwrap_err();
    assert_eq!(err.parse_offset(), Some(10));
    assert!(!err.is_range());

    let err = "P1Y2X".parse::<Period>().unwrap_err();
    assert!(err.is_parse());
    assert_eq!(err.parse_offset(), Some(3));
}

#[test]
fn year_signs_are_canonical() {
    for text in ["+2024-01-01", "-0000-01-01"] {
        let err = text.parse::<LocalDate>().unwrap_err();
        assert!(err.is_parse(), "{text}: {err}");
        assert_eq!(err.parse_offset(), Some(0), "{text}");
    }
    for text in ["+2024-01-01T00:00:00Z", "-0000-01-01T00:00:00Z"] {
        assert!(text.parse::<Instant>().unwrap_err().is_parse(), "{text}");
    }
    assert_eq!("-0001-01-01".parse::<LocalDate>().unwrap().year(), -1);
    assert_eq!("0000-01-01".parse::<LocalDate>().unwrap().year(), 0);
}

#[test]
fn zoned_text_uses_the_instant() -> crate::Result {
    let zdt: ZonedDateTime = "2024-06-01T12:00+01:00".parse()?;
    assert_eq!(zdt.zone(), &TimeZone::fixed(ZoneOffset::of_hours(1)?));
    assert_eq!(zdt.to_string(), "2024-06-01T12:00+01:00");

    let zdt: ZonedDateTime = "2024-06-01T12:00Z[UTC+02:00]".parse()?;
    assert_eq!(zdt.to_string(), "2024-06-01T14:00+02:00");

    let odt: OffsetDateTime = "2024-06-01T12:00:00.5-03:00".parse()?;
    assert_eq!(odt.to_string(), "2024-06-01T12:00:00.500-03:00");
    Ok(())
}

#[test]
fn error_messages() {
    insta::assert_snapshot!(
        "".parse::<LocalDate>().unwrap_err(),
        @r#"failed to parse "" at byte offset 0: an empty string is not a valid date"#,
    );
    insta::assert_snapshot!(
        "12345-01-01".parse::<LocalDate>().unwrap_err(),
        @r#"failed to parse "12345-01-01" at byte offset 0: years with more than four digits must be prefixed with a `+` or `-` sign"#,
    );
    insta::assert_snapshot!(
        "2024-03-10X02:30".parse::<LocalDateTime>().unwrap_err(),
        @r#"failed to parse "2024-03-10X02:30" at byte offset 10: expected `T` but found `X`"#,
    );
    insta::assert_snapshot!(
        "2024-03-10T25:00".parse::<LocalDateTime>().unwrap_err(),
        @r#"failed to parse "2024-03-10T25:00" at byte offset 11: parameter 'hour' with value 25 is not in the required range of 0..=23"#,
    );
    insta::assert_snapshot!(
        "2024-01-01T00:00+01:00[Europe/Paris]"
            .parse::<ZonedDateTime>()
            .unwrap_err(),
        @r#"failed to parse "2024-01-01T00:00+01:00[Europe/Paris]" at byte offset 23: failed to find time zone "Europe/Paris""#,
    );
}
