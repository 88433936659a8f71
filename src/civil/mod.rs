/*!
Calendar dates and clock times that are not tied to the timeline.

The types in this module describe what a calendar or a wall clock shows:
[`LocalDate`], [`LocalTime`], [`LocalDateTime`], [`YearMonth`] and
[`MonthDay`]. None of them carry an offset or a time zone, so none of them
identify an instant. Combining a [`LocalDateTime`] with a
[`ZoneOffset`](crate::tz::ZoneOffset) or a [`TimeZone`](crate::tz::TimeZone)
produces an [`OffsetDateTime`](crate::OffsetDateTime) or a
[`ZonedDateTime`](crate::ZonedDateTime).

Every date uses the proleptic Gregorian calendar. Years may be zero or
negative. Year `0` is `1 BCE`.
*/

pub use self::{
    date::LocalDate,
    datetime::LocalDateTime,
    month_day::MonthDay,
    time::LocalTime,
    weekday::{Era, Weekday},
    year_month::YearMonth,
};

mod date;
mod datetime;
mod month_day;
mod time;
mod weekday;
mod year_month;
