use core::fmt::{Formatter, Result, Write};

use crate::{
    civil::{LocalDate, LocalDateTime, LocalTime},
    tz::ZoneOffset,
    util::{
        arith::{
            floor_div, floor_mod, SECONDS_PER_DAY, SECONDS_PER_HOUR,
            SECONDS_PER_MINUTE,
        },
        itime::IEpochDay,
    },
};

/// Writes a year in the ISO-8601 form.
///
/// Years in `0..=9999` are written with exactly four digits. Other years
/// always carry a sign, and negative years are padded to four digits.
fn write_year(f: &mut Formatter, year: i32) -> Result {
    if year > 9999 {
        write!(f, "+{year}")
    } else if year < 0 {
        write!(f, "-{:04}", year.unsigned_abs())
    } else {
        write!(f, "{year:04}")
    }
}

/// Writes a fractional second, including its leading `.`, in groups of
/// three digits. Nothing is written for zero.
fn write_fraction_grouped(f: &mut Formatter, nano: i32) -> Result {
    if nano == 0 {
        Ok(())
    } else if nano % 1_000_000 == 0 {
        write!(f, ".{:03}", nano / 1_000_000)
    } else if nano % 1_000 == 0 {
        write!(f, ".{:06}", nano / 1_000)
    } else {
        write!(f, ".{nano:09}")
    }
}

/// Writes a fractional second, including its leading `.`, with trailing
/// zeros removed. Nothing is written for zero.
fn write_fraction_trimmed(f: &mut Formatter, nano: i32) -> Result {
    if nano == 0 {
        return Ok(());
    }
    let mut digits = 9;
    let mut nano = nano;
    while nano % 10 == 0 {
        nano /= 10;
        digits -= 1;
    }
    write!(f, ".{nano:0digits$}")
}

pub(crate) fn write_date(
    f: &mut Formatter,
    year: i32,
    month: i8,
    day: i8,
) -> Result {
    write_year(f, year)?;
    write!(f, "-{month:02}-{day:02}")
}

/// Writes a time of day.
///
/// Seconds are omitted when they and the fraction are zero, unless
/// `always_seconds` is set.
pub(crate) fn write_time(
    f: &mut Formatter,
    hour: i8,
    minute: i8,
    second: i8,
    nano: i32,
    always_seconds: bool,
) -> Result {
    write!(f, "{hour:02}:{minute:02}")?;
    if always_seconds || second != 0 || nano != 0 {
        write!(f, ":{second:02}")?;
        write_fraction_grouped(f, nano)?;
    }
    Ok(())
}

pub(crate) fn write_datetime(
    f: &mut Formatter,
    date: LocalDate,
    time: LocalTime,
) -> Result {
    write_date(f, date.year(), date.month(), date.day())?;
    f.write_char('T')?;
    write_time(
        f,
        time.hour(),
        time.minute(),
        time.second(),
        time.nano(),
        false,
    )
}

/// Writes an instant as a UTC datetime, always with seconds and a `Z`.
///
/// Instants span a wider range of years than `LocalDate`, so this goes
/// straight through the calendar arithmetic.
pub(crate) fn write_instant(
    f: &mut Formatter,
    second: i64,
    nano: i32,
) -> Result {
    let epoch_day = floor_div(second, SECONDS_PER_DAY);
    let second_of_day = floor_mod(second, SECONDS_PER_DAY);
    let date = IEpochDay { epoch_day }.to_date();
    write_date(f, date.year, date.month, date.day)?;
    f.write_char('T')?;
    write_time(
        f,
        (second_of_day / SECONDS_PER_HOUR) as i8,
        ((second_of_day / SECONDS_PER_MINUTE) % 60) as i8,
        (second_of_day % 60) as i8,
        nano,
        true,
    )?;
    f.write_char('Z')
}

/// Writes an offset as `Z`, `±HH:MM` or `±HH:MM:SS`.
pub(crate) fn write_offset(f: &mut Formatter, seconds: i32) -> Result {
    if seconds == 0 {
        return f.write_char('Z');
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    let (h, m, s) = (abs / 3_600, (abs / 60) % 60, abs % 60);
    write!(f, "{sign}{h:02}:{m:02}")?;
    if s != 0 {
        write!(f, ":{s:02}")?;
    }
    Ok(())
}

pub(crate) fn write_offset_datetime(
    f: &mut Formatter,
    dt: LocalDateTime,
    offset: ZoneOffset,
) -> Result {
    write_datetime(f, dt.date(), dt.time())?;
    write_offset(f, offset.total_seconds())
}

/// Writes a zoned datetime. The zone identifier is only written for region
/// zones, since a fixed zone is fully described by the offset.
pub(crate) fn write_zoned(
    f: &mut Formatter,
    dt: LocalDateTime,
    offset: ZoneOffset,
    region_id: Option<&str>,
) -> Result {
    write_offset_datetime(f, dt, offset)?;
    if let Some(id) = region_id {
        write!(f, "[{id}]")?;
    }
    Ok(())
}

/// Writes a period as `PnYnMnD`, leaving out zero components. The zero
/// period is `P0D`.
pub(crate) fn write_period(
    f: &mut Formatter,
    years: i32,
    months: i32,
    days: i32,
) -> Result {
    if years == 0 && months == 0 && days == 0 {
        return f.write_str("P0D");
    }
    f.write_char('P')?;
    if years != 0 {
        write!(f, "{years}Y")?;
    }
    if months != 0 {
        write!(f, "{months}M")?;
    }
    if days != 0 {
        write!(f, "{days}D")?;
    }
    Ok(())
}

/// Writes a duration as `PTnHnMn.nS`, leaving out zero components.
///
/// Days are folded into hours. A negative duration puts the sign on each
/// component, and the seconds component carries the sign of the whole
/// fractional value, so minus half a second is `PT-0.5S`.
pub(crate) fn write_duration(
    f: &mut Formatter,
    seconds: i64,
    nanos: i32,
) -> Result {
    if seconds == 0 && nanos == 0 {
        return f.write_str("PT0S");
    }
    // The nanos are always positive, so a negative duration with a
    // fraction is one second closer to zero than its seconds say.
    let borrow = seconds < 0 && nanos > 0;
    let whole = if borrow { seconds + 1 } else { seconds };
    let hours = whole / SECONDS_PER_HOUR;
    let minutes = (whole % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let secs = whole % SECONDS_PER_MINUTE;

    f.write_str("PT")?;
    if hours != 0 {
        write!(f, "{hours}H")?;
    }
    if minutes != 0 {
        write!(f, "{minutes}M")?;
    }
    if secs == 0 && nanos == 0 {
        return Ok(());
    }
    if borrow && secs == 0 {
        f.write_str("-0")?;
    } else {
        write!(f, "{secs}")?;
    }
    let fraction = if borrow { 1_000_000_000 - nanos } else { nanos };
    write_fraction_trimmed(f, fraction)?;
    f.write_char('S')
}

pub(crate) fn write_year_month(
    f: &mut Formatter,
    year: i32,
    month: i8,
) -> Result {
    write_year(f, year)?;
    write!(f, "-{month:02}")
}

pub(crate) fn write_month_day(
    f: &mut Formatter,
    month: i8,
    day: i8,
) -> Result {
    write!(f, "--{month:02}-{day:02}")
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use super::*;

    /// Adapts a printing routine into something with a `Display` impl.
    struct Show<F>(F);

    impl<F: Fn(&mut Formatter) -> Result> core::fmt::Display for Show<F> {
        fn fmt(&self, f: &mut Formatter) -> Result {
            (self.0)(f)
        }
    }

    fn show(print: impl Fn(&mut Formatter) -> Result) -> String {
        Show(print).to_string()
    }

    #[test]
    fn years() {
        assert_eq!(show(|f| write_year(f, 0)), "0000");
        assert_eq!(show(|f| write_year(f, 9999)), "9999");
        assert_eq!(show(|f| write_year(f, 10_000)), "+10000");
        assert_eq!(show(|f| write_year(f, -1)), "-0001");
        assert_eq!(show(|f| write_year(f, -12_345)), "-12345");
        assert_eq!(
            show(|f| write_year(f, -1_000_000_000)),
            "-1000000000",
        );
    }

    #[test]
    fn fractions() {
        assert_eq!(show(|f| write_time(f, 1, 2, 0, 0, false)), "01:02");
        assert_eq!(show(|f| write_time(f, 1, 2, 0, 0, true)), "01:02:00");
        assert_eq!(
            show(|f| write_time(f, 1, 2, 3, 100_000_000, false)),
            "01:02:03.100",
        );
        assert_eq!(
            show(|f| write_time(f, 1, 2, 3, 120_000, false)),
            "01:02:03.000120",
        );
        assert_eq!(
            show(|f| write_time(f, 1, 2, 3, 1, false)),
            "01:02:03.000000001",
        );
        assert_eq!(show(|f| write_fraction_trimmed(f, 120_000)), ".00012");
    }

    #[test]
    fn offsets() {
        assert_eq!(show(|f| write_offset(f, 0)), "Z");
        assert_eq!(show(|f| write_offset(f, 19_800)), "+05:30");
        assert_eq!(show(|f| write_offset(f, -1)), "-00:00:01");
        assert_eq!(show(|f| write_offset(f, -64_800)), "-18:00");
    }

    #[test]
    fn durations() {
        assert_eq!(show(|f| write_duration(f, 90_000, 0)), "PT25H");
        assert_eq!(show(|f| write_duration(f, -1, 500_000_000)), "PT-0.5S");
        assert_eq!(show(|f| write_duration(f, -61, 0)), "PT-1M-1S");
        assert_eq!(
            show(|f| write_duration(f, -3_601, 999_999_999)),
            "PT-1H-0.000000001S",
        );
        assert_eq!(
            show(|f| write_duration(f, i64::MIN, 0)),
            "PT-2562047788015215H-30M-8S",
        );
    }
}
