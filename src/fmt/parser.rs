use crate::{
    civil::{LocalDate, LocalDateTime, LocalTime, MonthDay, YearMonth},
    error::{fmt::Error as E, Error, IntoError},
    fmt::Parsed,
    tz::{TimeZone, ZoneOffset, ZoneRulesProvider},
    util::{
        arith::{self, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE},
        b, common,
        itime::IDate,
    },
    Duration, Instant, OffsetDateTime, Period, ZonedDateTime,
};

/// The widest year accepted when parsing an instant. This is one year
/// wider on each side than the year range of `LocalDate`.
const INSTANT_YEAR_MAX: i64 = 1_000_000_000;

pub(crate) fn parse_date(text: &str) -> Result<LocalDate, Error> {
    let p = Parser::new(text, "date")?;
    let parsed = p.parse_date(p.input())?;
    p.finish(parsed)
}

pub(crate) fn parse_time(text: &str) -> Result<LocalTime, Error> {
    let p = Parser::new(text, "time")?;
    let parsed = p.parse_time(p.input())?;
    p.finish(parsed)
}

pub(crate) fn parse_datetime(text: &str) -> Result<LocalDateTime, Error> {
    let p = Parser::new(text, "datetime")?;
    let parsed = p.parse_datetime(p.input())?;
    p.finish(parsed)
}

pub(crate) fn parse_instant(text: &str) -> Result<Instant, Error> {
    let p = Parser::new(text, "instant")?;
    let parsed = p.parse_instant(p.input())?;
    p.finish(parsed)
}

pub(crate) fn parse_offset(text: &str) -> Result<ZoneOffset, Error> {
    let p = Parser::new(text, "offset")?;
    let parsed = p.parse_offset(p.input())?;
    p.finish(parsed)
}

/// Parses a zone identifier that names a fixed offset.
///
/// These are `Z`, `UTC`, `GMT` and `UT` on their own or followed by a
/// signed offset, and signed offsets on their own. Any other identifier
/// yields `None`, since it must name a region.
pub(crate) fn parse_offset_zone_id(
    id: &str,
) -> Result<Option<ZoneOffset>, Error> {
    if matches!(id, "Z" | "UTC" | "GMT" | "UT") {
        return Ok(Some(ZoneOffset::UTC));
    }
    let p = Parser::new(id, "zone identifier")?;
    let input = p.input();
    let rest = ["UTC", "GMT", "UT"]
        .iter()
        .find_map(|prefix| input.strip_prefix(prefix.as_bytes()))
        .unwrap_or(input);
    if !matches!(rest.first(), Some(b'+' | b'-')) {
        return Ok(None);
    }
    let parsed = p.parse_offset(rest)?;
    p.finish(parsed).map(Some)
}

pub(crate) fn parse_offset_datetime(
    text: &str,
) -> Result<OffsetDateTime, Error> {
    let p = Parser::new(text, "offset datetime")?;
    let Parsed { value: dt, input } = p.parse_datetime(p.input())?;
    let Parsed { value: offset, input } = p.parse_offset(input)?;
    p.finish(Parsed { value: OffsetDateTime::of(dt, offset), input })
}

/// Parses a zoned datetime, looking up region zones in the provider given.
///
/// The local datetime and offset in the text determine the instant. The
/// zone then determines the offset at that instant, which may differ from
/// the one written when the zone's rules have changed.
pub(crate) fn parse_zoned(
    text: &str,
    provider: &dyn ZoneRulesProvider,
) -> Result<ZonedDateTime, Error> {
    let p = Parser::new(text, "zoned datetime")?;
    let parsed = p.parse_zoned(p.input(), provider)?;
    p.finish(parsed)
}

pub(crate) fn parse_period(text: &str) -> Result<Period, Error> {
    let p = Parser::new(text, "period")?;
    let parsed = p.parse_period(p.input())?;
    p.finish(parsed)
}

pub(crate) fn parse_duration(text: &str) -> Result<Duration, Error> {
    let p = Parser::new(text, "duration")?;
    let parsed = p.parse_duration(p.input())?;
    p.finish(parsed)
}

pub(crate) fn parse_year_month(text: &str) -> Result<YearMonth, Error> {
    let p = Parser::new(text, "year-month")?;
    let parsed = p.parse_year_month(p.input())?;
    p.finish(parsed)
}

pub(crate) fn parse_month_day(text: &str) -> Result<MonthDay, Error> {
    let p = Parser::new(text, "month-day")?;
    let parsed = p.parse_month_day(p.input())?;
    p.finish(parsed)
}

/// A number followed by a unit designator, as found in periods and
/// durations.
#[derive(Clone, Copy, Debug)]
struct Component {
    value: i64,
    /// Whether the number was written with a `-`. This is tracked
    /// separately from the value so that `-0.5` keeps its sign.
    negative: bool,
    fraction: i32,
}

/// A parser over one complete piece of text.
///
/// Every input slice handed to the methods below is a suffix of the text,
/// which is how errors recover the byte offset at which they occurred.
#[derive(Debug)]
struct Parser<'s> {
    text: &'s str,
}

impl<'s> Parser<'s> {
    fn new(text: &'s str, what: &'static str) -> Result<Parser<'s>, Error> {
        let p = Parser { text };
        if text.is_empty() {
            return Err(p.fail(p.input(), E::Empty { what }));
        }
        Ok(p)
    }

    fn input(&self) -> &'s [u8] {
        self.text.as_bytes()
    }

    /// Wraps an error with the text and the offset of `input` within it.
    #[cold]
    #[inline(never)]
    fn fail(&self, input: &[u8], err: impl IntoError) -> Error {
        let offset = self.text.len() - input.len();
        err.into_error().context(E::invalid(self.text, offset))
    }

    /// Returns the value parsed when there is no input left over.
    fn finish<V>(&self, parsed: Parsed<'s, V>) -> Result<V, Error> {
        match parsed.input.first() {
            None => Ok(parsed.value),
            Some(&found) => {
                Err(self.fail(parsed.input, E::TrailingInput { found }))
            }
        }
    }

    fn expect(
        &self,
        input: &'s [u8],
        expected: u8,
    ) -> Result<&'s [u8], Error> {
        match input.split_first() {
            Some((&found, rest)) if found == expected => Ok(rest),
            found => Err(self.fail(
                input,
                E::ExpectedByte { expected, found: found.map(|(&b, _)| b) },
            )),
        }
    }

    /// Like `expect`, but ignoring ASCII case.
    fn expect_designator(
        &self,
        input: &'s [u8],
        expected: u8,
    ) -> Result<&'s [u8], Error> {
        match accept_designator(input, expected) {
            Some(rest) => Ok(rest),
            None => Err(self.fail(
                input,
                E::ExpectedByte { expected, found: input.first().copied() },
            )),
        }
    }

    // Date :::
    //   Year - Month - Day
    fn parse_date(
        &self,
        input: &'s [u8],
    ) -> Result<Parsed<'s, LocalDate>, Error> {
        let Parsed { value: (year, month, day), input: rest } =
            self.parse_date_fields(input)?;
        let date = b::Year::check(year)
            .and_then(|year| LocalDate::of(year, month, day))
            .map_err(|err| self.fail(input, err))?;
        Ok(Parsed { value: date, input: rest })
    }

    fn parse_date_fields(
        &self,
        input: &'s [u8],
    ) -> Result<Parsed<'s, (i64, i8, i8)>, Error> {
        let Parsed { value: year, input } = self.parse_year(input)?;
        let input = self.expect(input, b'-')?;
        let Parsed { value: month, input } = self.parse_two(input, "month")?;
        let input = self.expect(input, b'-')?;
        let Parsed { value: day, input } = self.parse_two(input, "day")?;
        Ok(Parsed { value: (year, month, day), input })
    }

    // Year :::
    //   DecimalDigit{4}
    //   - DecimalDigit{4,10}
    //   + DecimalDigit{5,10}
    //
    // A negative zero year is rejected.
    fn parse_year(&self, input: &'s [u8]) -> Result<Parsed<'s, i64>, Error> {
        let Parsed { value: sign, input: rest } = parse_sign(input);
        let Some(sign) = sign else {
            let Parsed { value, input: rest } =
                self.parse_fixed(input, 4, "year")?;
            if rest.first().map_or(false, u8::is_ascii_digit) {
                return Err(self.fail(input, E::ExpectedSignForLargeYear));
            }
            return Ok(Parsed { value, input: rest });
        };
        let len = count_digits(rest);
        if len > 10 {
            return Err(self.fail(rest, E::NumberTooBig { what: "year" }));
        }
        if sign > 0 && len == 4 {
            return Err(self.fail(input, E::UnexpectedSignForSmallYear));
        }
        let Parsed { value, input: rest } =
            self.parse_fixed(rest, len.max(4), "year")?;
        if sign < 0 && value == 0 {
            return Err(self.fail(input, E::NegativeYearZero));
        }
        Ok(Parsed { value: sign * value, input: rest })
    }

    // Time :::
    //   Hour : Minute
    //   Hour : Minute : Second
    //   Hour : Minute : Second . Fraction
    fn parse_time(
        &self,
        input: &'s [u8],
    ) -> Result<Parsed<'s, LocalTime>, Error> {
        let Parsed { value: hour, input: rest } =
            self.parse_two(input, "hour")?;
        let rest = self.expect(rest, b':')?;
        let Parsed { value: minute, input: mut rest } =
            self.parse_two(rest, "minute")?;
        let (mut second, mut nano) = (0, 0);
        if let Some(after) = rest.strip_prefix(b":") {
            let parsed = self.parse_two(after, "second")?;
            second = parsed.value;
            rest = parsed.input;
            if let Some(after) = rest.strip_prefix(b".") {
                let parsed = self.parse_fraction(after)?;
                nano = parsed.value;
                rest = parsed.input;
            }
        }
        let time = LocalTime::of(hour, minute, second, nano)
            .map_err(|err| self.fail(input, err))?;
        Ok(Parsed { value: time, input: rest })
    }

    // DateTime :::
    //   Date T Time
    fn parse_datetime(
        &self,
        input: &'s [u8],
    ) -> Result<Parsed<'s, LocalDateTime>, Error> {
        let Parsed { value: date, input } = self.parse_date(input)?;
        let input = self.expect_designator(input, b'T')?;
        let Parsed { value: time, input } = self.parse_time(input)?;
        Ok(Parsed { value: LocalDateTime::from_parts(date, time), input })
    }

    // Instant :::
    //   Date T Time Offset
    //
    // The year may be one beyond the range of `LocalDate`, so the date is
    // converted with the calendar arithmetic directly.
    fn parse_instant(
        &self,
        input: &'s [u8],
    ) -> Result<Parsed<'s, Instant>, Error> {
        let Parsed { value: (year, month, day), input: rest } =
            self.parse_date_fields(input)?;
        let rest = self.expect_designator(rest, b'T')?;
        let Parsed { value: time, input: rest } = self.parse_time(rest)?;
        let Parsed { value: offset, input: rest } = self.parse_offset(rest)?;
        let instant = instant_of(year, month, day, time, offset)
            .map_err(|err| self.fail(input, err))?;
        Ok(Parsed { value: instant, input: rest })
    }

    // Offset :::
    //   Z
    //   Sign Hour
    //   Sign Hour Minute
    //   Sign Hour Minute Second
    //   Sign Hour : Minute
    //   Sign Hour : Minute : Second
    fn parse_offset(
        &self,
        input: &'s [u8],
    ) -> Result<Parsed<'s, ZoneOffset>, Error> {
        if let Some(rest) = accept_designator(input, b'Z') {
            return Ok(Parsed { value: ZoneOffset::UTC, input: rest });
        }
        let Parsed { value: sign, input: rest } = parse_sign(input);
        let Some(sign) = sign else {
            return Err(self.fail(
                input,
                E::ExpectedByte {
                    expected: b'+',
                    found: input.first().copied(),
                },
            ));
        };
        let Parsed { value: hours, input: mut rest } =
            self.parse_two(rest, "offset hours")?;
        let (mut minutes, mut seconds) = (0, 0);
        if let Some(after) = rest.strip_prefix(b":") {
            let parsed = self.parse_two(after, "offset minutes")?;
            minutes = parsed.value;
            rest = parsed.input;
            if let Some(after) = rest.strip_prefix(b":") {
                let parsed = self.parse_two(after, "offset seconds")?;
                seconds = parsed.value;
                rest = parsed.input;
            }
        } else if rest.first().map_or(false, u8::is_ascii_digit) {
            let parsed = self.parse_two(rest, "offset minutes")?;
            minutes = parsed.value;
            rest = parsed.input;
            if rest.first().map_or(false, u8::is_ascii_digit) {
                let parsed = self.parse_two(rest, "offset seconds")?;
                seconds = parsed.value;
                rest = parsed.input;
            }
        }
        let sign = sign as i8;
        let offset = ZoneOffset::of_hours_minutes_seconds(
            sign * hours,
            sign * minutes,
            sign * seconds,
        )
        .map_err(|err| self.fail(input, err))?;
        Ok(Parsed { value: offset, input: rest })
    }

    // ZonedDateTime :::
    //   DateTime Offset
    //   DateTime Offset [ ZoneId ]
    fn parse_zoned(
        &self,
        input: &'s [u8],
        provider: &dyn ZoneRulesProvider,
    ) -> Result<Parsed<'s, ZonedDateTime>, Error> {
        let Parsed { value: dt, input: rest } = self.parse_datetime(input)?;
        let Parsed { value: offset, input: rest } = self.parse_offset(rest)?;
        let has_annotation = rest.first() == Some(&b'[');
        let Parsed { value: zone, input: rest } = if has_annotation {
            self.parse_zone_annotation(rest, provider)?
        } else {
            Parsed { value: TimeZone::fixed(offset), input: rest }
        };
        let zdt = ZonedDateTime::of_instant(dt.to_instant(offset), zone)
            .map_err(|err| self.fail(input, err))?;
        Ok(Parsed { value: zdt, input: rest })
    }

    fn parse_zone_annotation(
        &self,
        input: &'s [u8],
        provider: &dyn ZoneRulesProvider,
    ) -> Result<Parsed<'s, TimeZone>, Error> {
        let rest = self.expect(input, b'[')?;
        let Some(len) = rest.iter().position(|&b| b == b']') else {
            let end = &rest[rest.len()..];
            return Err(self.fail(
                end,
                E::ExpectedByte { expected: b']', found: None },
            ));
        };
        let start = self.text.len() - rest.len();
        let id = match self.text.get(start..start + len) {
            Some(id) if !id.is_empty() => id,
            _ => return Err(self.fail(rest, E::ExpectedZoneId)),
        };
        let zone = TimeZone::get(id, provider)
            .map_err(|err| self.fail(rest, err))?;
        Ok(Parsed { value: zone, input: &rest[len + 1..] })
    }

    // Period :::
    //   Sign? P (Integer Y)? (Integer M)? (Integer W)? (Integer D)?
    //
    // At least one component is required. Designators ignore case.
    fn parse_period(
        &self,
        input: &'s [u8],
    ) -> Result<Parsed<'s, Period>, Error> {
        let Parsed { value: sign, input: rest } = parse_sign(input);
        let mut rest = self.expect_designator(rest, b'P')?;
        // years, months, weeks, days
        let mut values = [0i32; 4];
        let mut found = false;
        let designators = [b'Y', b'M', b'W', b'D'];
        for (slot, designator) in designators.into_iter().enumerate() {
            let Some(parsed) = self.parse_component(rest, designator, false)?
            else {
                continue;
            };
            values[slot] = i32::try_from(parsed.value.value).map_err(|_| {
                self.fail(rest, E::NumberTooBig { what: "period component" })
            })?;
            found = true;
            rest = parsed.input;
        }
        if !found {
            return Err(self.missing_component(rest, "period"));
        }
        let [years, months, weeks, days] = values;
        let mut period = arith::mul32(weeks, 7, "period days")
            .and_then(|weeks| arith::add32(weeks, days, "period days"))
            .map(|days| Period::of(years, months, days))
            .map_err(|err| self.fail(input, err))?;
        if sign == Some(-1) {
            period = period.negated().map_err(|err| self.fail(input, err))?;
        }
        Ok(Parsed { value: period, input: rest })
    }

    // Duration :::
    //   Sign? P (Integer D)? (T (Integer H)? (Integer M)? (Decimal S)?)?
    //
    // At least one component is required, and a `T` must be followed by
    // at least one. Designators ignore case.
    fn parse_duration(
        &self,
        input: &'s [u8],
    ) -> Result<Parsed<'s, Duration>, Error> {
        let Parsed { value: sign, input: rest } = parse_sign(input);
        let mut rest = self.expect_designator(rest, b'P')?;
        let mut days = 0;
        let mut found = false;
        if let Some(parsed) = self.parse_component(rest, b'D', false)? {
            days = parsed.value.value;
            found = true;
            rest = parsed.input;
        }
        let (mut hours, mut minutes, mut seconds) = (0, 0, None);
        if let Some(after) = accept_designator(rest, b'T') {
            rest = after;
            let mut found_time = false;
            if let Some(parsed) = self.parse_component(rest, b'H', false)? {
                hours = parsed.value.value;
                found_time = true;
                rest = parsed.input;
            }
            if let Some(parsed) = self.parse_component(rest, b'M', false)? {
                minutes = parsed.value.value;
                found_time = true;
                rest = parsed.input;
            }
            if let Some(parsed) = self.parse_component(rest, b'S', true)? {
                seconds = Some(parsed.value);
                found_time = true;
                rest = parsed.input;
            }
            if !found_time {
                return Err(self.missing_component(rest, "duration time"));
            }
            found = true;
        }
        if !found {
            return Err(self.missing_component(rest, "duration"));
        }
        let duration = duration_of(days, hours, minutes, seconds)
            .and_then(|d| if sign == Some(-1) { d.negated() } else { Ok(d) })
            .map_err(|err| self.fail(input, err))?;
        Ok(Parsed { value: duration, input: rest })
    }

    // Component :::
    //   Sign? DecimalDigit+ Designator
    //   Sign? DecimalDigit+ . Fraction Designator
    //
    // This yields `None` when the input does not start with a number
    // followed by the designator given, so that the caller can try the
    // next designator. A fraction is only allowed when `fraction` is set,
    // and when present the designator is required.
    fn parse_component(
        &self,
        input: &'s [u8],
        designator: u8,
        fraction: bool,
    ) -> Result<Option<Parsed<'s, Component>>, Error> {
        let Parsed { value: sign, input: rest } = parse_sign(input);
        if count_digits(rest) == 0 {
            return Ok(None);
        }
        let sign = sign.unwrap_or(1);
        let Parsed { value, input: mut rest } =
            self.parse_number(rest, sign, "duration component")?;
        let mut nanos = None;
        if fraction {
            if let Some(after) = rest.strip_prefix(b".") {
                let parsed = self.parse_fraction(after)?;
                nanos = Some(parsed.value);
                rest = parsed.input;
            }
        }
        match accept_designator(rest, designator) {
            Some(rest) => {
                let component = Component {
                    value,
                    negative: sign < 0,
                    fraction: nanos.unwrap_or(0),
                };
                Ok(Some(Parsed { value: component, input: rest }))
            }
            None if nanos.is_some() => {
                let err = E::ExpectedDesignator { what: "fraction" };
                Err(self.fail(rest, err))
            }
            None => Ok(None),
        }
    }

    #[cold]
    #[inline(never)]
    fn missing_component(&self, input: &'s [u8], what: &'static str) -> Error {
        if input.is_empty() {
            self.fail(input, E::UnexpectedEnd { what })
        } else {
            self.fail(input, E::ExpectedDesignator { what })
        }
    }

    // YearMonth :::
    //   Year - Month
    fn parse_year_month(
        &self,
        input: &'s [u8],
    ) -> Result<Parsed<'s, YearMonth>, Error> {
        let Parsed { value: year, input: rest } = self.parse_year(input)?;
        let rest = self.expect(rest, b'-')?;
        let Parsed { value: month, input: rest } =
            self.parse_two(rest, "month")?;
        let ym = b::Year::check(year)
            .and_then(|year| YearMonth::of(year, month))
            .map_err(|err| self.fail(input, err))?;
        Ok(Parsed { value: ym, input: rest })
    }

    // MonthDay :::
    //   - - Month - Day
    fn parse_month_day(
        &self,
        input: &'s [u8],
    ) -> Result<Parsed<'s, MonthDay>, Error> {
        let rest = self.expect(input, b'-')?;
        let rest = self.expect(rest, b'-')?;
        let Parsed { value: month, input: rest } =
            self.parse_two(rest, "month")?;
        let rest = self.expect(rest, b'-')?;
        let Parsed { value: day, input: rest } = self.parse_two(rest, "day")?;
        let md =
            MonthDay::of(month, day).map_err(|err| self.fail(input, err))?;
        Ok(Parsed { value: md, input: rest })
    }

    // Fraction :::
    //   DecimalDigit{1,9}
    fn parse_fraction(
        &self,
        input: &'s [u8],
    ) -> Result<Parsed<'s, i32>, Error> {
        let len = count_digits(input);
        if len == 0 {
            return Err(self.fail(input, E::ExpectedFraction));
        }
        if len > 9 {
            return Err(self.fail(input, E::NumberTooBig { what: "fraction" }));
        }
        let Parsed { value, input } =
            self.parse_fixed(input, len, "fraction")?;
        let scale = 10i64.pow(9 - len as u32);
        Ok(Parsed { value: (value * scale) as i32, input })
    }

    /// Parses exactly two digits.
    fn parse_two(
        &self,
        input: &'s [u8],
        what: &'static str,
    ) -> Result<Parsed<'s, i8>, Error> {
        let Parsed { value, input } = self.parse_fixed(input, 2, what)?;
        Ok(Parsed { value: value as i8, input })
    }

    /// Parses exactly `len` digits, where `len` is at most 18.
    fn parse_fixed(
        &self,
        input: &'s [u8],
        len: usize,
        what: &'static str,
    ) -> Result<Parsed<'s, i64>, Error> {
        let digits = match input.get(..len) {
            Some(digits) if digits.iter().all(u8::is_ascii_digit) => digits,
            _ => return Err(self.fail(input, E::ExpectedDigits { what })),
        };
        let value = digits
            .iter()
            .fold(0i64, |acc, &d| acc * 10 + i64::from(d - b'0'));
        Ok(Parsed { value, input: &input[len..] })
    }

    /// Parses one or more digits into a number with the sign given.
    ///
    /// The digits are accumulated in the direction of the sign, so
    /// `i64::MIN` can be parsed.
    fn parse_number(
        &self,
        input: &'s [u8],
        sign: i64,
        what: &'static str,
    ) -> Result<Parsed<'s, i64>, Error> {
        let len = count_digits(input);
        if len == 0 {
            return Err(self.fail(input, E::ExpectedDigits { what }));
        }
        let mut value: i64 = 0;
        for &d in &input[..len] {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(sign * i64::from(d - b'0')))
                .ok_or_else(|| self.fail(input, E::NumberTooBig { what }))?;
        }
        Ok(Parsed { value, input: &input[len..] })
    }
}

/// Parses an optional `+` or `-`, returned as `1` or `-1`.
fn parse_sign(input: &[u8]) -> Parsed<'_, Option<i64>> {
    match input.split_first() {
        Some((b'+', rest)) => Parsed { value: Some(1), input: rest },
        Some((b'-', rest)) => Parsed { value: Some(-1), input: rest },
        _ => Parsed { value: None, input },
    }
}

/// Consumes the designator given, ignoring ASCII case.
fn accept_designator(input: &[u8], designator: u8) -> Option<&[u8]> {
    match input.split_first() {
        Some((b, rest)) if b.eq_ignore_ascii_case(&designator) => Some(rest),
        _ => None,
    }
}

fn count_digits(input: &[u8]) -> usize {
    input.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn instant_of(
    year: i64,
    month: i8,
    day: i8,
    time: LocalTime,
    offset: ZoneOffset,
) -> Result<Instant, Error> {
    if !(-INSTANT_YEAR_MAX..=INSTANT_YEAR_MAX).contains(&year) {
        return Err(Error::range(
            "year",
            year,
            -INSTANT_YEAR_MAX,
            INSTANT_YEAR_MAX,
        ));
    }
    let month = b::Month::check(month)?;
    let day = b::Day::check(day)?;
    let max = common::days_in_month(year, month);
    if day > max {
        return Err(Error::range("DayOfMonth", day, 1, max));
    }
    // The year is within `i32` after the check above.
    let epoch_day = IDate { year: year as i32, month, day }.to_epoch_day();
    let second = epoch_day.epoch_day * SECONDS_PER_DAY
        + i64::from(time.to_second_of_day())
        - i64::from(offset.total_seconds());
    Instant::of_epoch_second_adjusted(second, i64::from(time.nano()))
}

fn duration_of(
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: Option<Component>,
) -> Result<Duration, Error> {
    let mut total = arith::mul(days, SECONDS_PER_DAY, "duration seconds")?;
    let hours = arith::mul(hours, SECONDS_PER_HOUR, "duration seconds")?;
    total = arith::add(total, hours, "duration seconds")?;
    let minutes = arith::mul(minutes, SECONDS_PER_MINUTE, "duration seconds")?;
    total = arith::add(total, minutes, "duration seconds")?;
    let mut nanos = 0;
    if let Some(seconds) = seconds {
        total = arith::add(total, seconds.value, "duration seconds")?;
        nanos = i64::from(seconds.fraction);
        if seconds.negative {
            nanos = -nanos;
        }
    }
    Duration::of_seconds_adjusted(total, nanos)
}
