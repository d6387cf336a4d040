use crate::core::calendar::days_in_month;
use crate::domain::ports::CalendarFields;
use crate::utils::error::{DiffError, Result};
use crate::utils::validation::validate_field_range;
use chrono::{Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const NANOS_PER_MILLI: u32 = 1_000_000;

static TIMESTAMP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([+-]?\d{4,6})-(\d{1,2})-(\d{1,2})(?:[T ](\d{1,2}):(\d{1,2})(?::(\d{1,2})(?:\.(\d{1,9}))?)?)?$",
    )
    .unwrap()
});

/// A Gregorian calendar point in time with millisecond resolution and no
/// timezone.
///
/// Construction validates every field, so any `Timestamp` in hand is a real
/// calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveDateTime", into = "NaiveDateTime")]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self> {
        validate_field_range("month", month, 1, 12)?;
        validate_field_range("day", day, 1, days_in_month(year, month))?;
        validate_field_range("hour", hour, 0, 23)?;
        validate_field_range("minute", minute, 0, 59)?;
        validate_field_range("second", second, 0, 59)?;
        validate_field_range("millisecond", millisecond, 0, 999)?;

        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_milli_opt(hour, minute, second, millisecond))
            .map(Timestamp)
            .ok_or_else(|| DiffError::invalid_field("year", year, "year is outside the supported range"))
    }

    /// Midnight of the given date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::new(year, month, day, 0, 0, 0, 0)
    }

    /// Current local wall-clock time, truncated to milliseconds.
    pub fn now() -> Self {
        let now = Local::now().naive_local();
        let millis = (now.nanosecond() / NANOS_PER_MILLI).min(999);
        Timestamp(now.with_nanosecond(millis * NANOS_PER_MILLI).unwrap_or(now))
    }

    /// Parses `YYYY-MM-DD`, optionally followed by `T` (or a space) and
    /// `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff`. Fractions beyond milliseconds
    /// are truncated.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let caps = TIMESTAMP_PATTERN
            .captures(trimmed)
            .ok_or_else(|| DiffError::ParseError {
                input: input.to_string(),
                reason: "expected YYYY-MM-DD[THH:MM[:SS[.fff]]]".to_string(),
            })?;

        let number = |index: usize| -> Result<u32> {
            caps.get(index).map_or(Ok(0), |m| {
                m.as_str().parse::<u32>().map_err(|e| DiffError::ParseError {
                    input: input.to_string(),
                    reason: e.to_string(),
                })
            })
        };

        let year = caps[1].parse::<i32>().map_err(|e| DiffError::ParseError {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
        let millisecond = match caps.get(7) {
            Some(fraction) => {
                let digits: String = fraction.as_str().chars().chain("00".chars()).take(3).collect();
                digits.parse::<u32>().map_err(|e| DiffError::ParseError {
                    input: input.to_string(),
                    reason: e.to_string(),
                })?
            }
            None => 0,
        };

        Self::new(
            year,
            number(2)?,
            number(3)?,
            number(4)?,
            number(5)?,
            number(6)?,
            millisecond,
        )
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn millisecond(&self) -> u32 {
        self.0.nanosecond() / NANOS_PER_MILLI
    }

    /// Midnight of the last day of this timestamp's month.
    pub fn end_of_month(&self) -> Self {
        let last_day = days_in_month(self.year(), self.month());
        let date = self.0.date() + chrono::Days::new(u64::from(last_day - self.day()));
        Timestamp(date.and_time(NaiveTime::MIN))
    }

    /// Calendar difference between `self` and `other`, in either order.
    pub fn date_diff(&self, other: &Timestamp) -> CalendarDifference {
        crate::core::diff::diff(*self, *other)
    }

    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl CalendarFields for Timestamp {
    fn year(&self) -> i32 {
        Timestamp::year(self)
    }

    fn month(&self) -> u32 {
        Timestamp::month(self)
    }

    fn day(&self) -> u32 {
        Timestamp::day(self)
    }

    fn hour(&self) -> u32 {
        Timestamp::hour(self)
    }

    fn minute(&self) -> u32 {
        Timestamp::minute(self)
    }

    fn second(&self) -> u32 {
        Timestamp::second(self)
    }

    fn millisecond(&self) -> u32 {
        Timestamp::millisecond(self)
    }
}

impl TryFrom<NaiveDateTime> for Timestamp {
    type Error = DiffError;

    /// Rejects leap-second representations and truncates to milliseconds.
    fn try_from(value: NaiveDateTime) -> Result<Self> {
        let nanos = value.nanosecond();
        validate_field_range("nanosecond", nanos, 0, 999_999_999)?;
        let truncated = (nanos / NANOS_PER_MILLI) * NANOS_PER_MILLI;
        value
            .with_nanosecond(truncated)
            .map(Timestamp)
            .ok_or_else(|| DiffError::invalid_field("nanosecond", nanos, "not representable"))
    }
}

impl From<Timestamp> for NaiveDateTime {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl std::str::FromStr for Timestamp {
    type Err = DiffError;

    fn from_str(s: &str) -> Result<Self> {
        Timestamp::parse(s)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}

/// The gap between two timestamps decomposed into calendar units.
///
/// Produced by [`crate::diff`]; every field is non-negative and, for values
/// coming out of the calculator, the time fields stay below one unit of the
/// next-coarser field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDifference {
    years: u32,
    months: u32,
    days: u32,
    hours: u32,
    minutes: u32,
    seconds: u32,
    milliseconds: u32,
}

impl CalendarDifference {
    pub fn new(
        years: u32,
        months: u32,
        days: u32,
        hours: u32,
        minutes: u32,
        seconds: u32,
        milliseconds: u32,
    ) -> Self {
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
            milliseconds,
        }
    }

    pub fn from_date(years: u32, months: u32, days: u32) -> Self {
        Self::new(years, months, days, 0, 0, 0, 0)
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn milliseconds(&self) -> u32 {
        self.milliseconds
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    pub fn has_time(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0 || self.milliseconds != 0
    }

    /// Applies this difference onto `start`: years and months together as a
    /// single month offset (clamped to the end of the target month), then
    /// days, then the time of day.
    ///
    /// For `d = diff(lo, hi)` with `lo <= hi`, `d.add_to(lo)` returns `hi`.
    pub fn add_to(&self, start: Timestamp) -> Result<Timestamp> {
        let total_months = u64::from(self.years) * 12 + u64::from(self.months);
        let months = u32::try_from(total_months).map_err(|_| {
            DiffError::invalid_field("years", self.years, "month offset overflows")
        })?;

        let delta = Duration::days(i64::from(self.days))
            + Duration::hours(i64::from(self.hours))
            + Duration::minutes(i64::from(self.minutes))
            + Duration::seconds(i64::from(self.seconds))
            + Duration::milliseconds(i64::from(self.milliseconds));

        start
            .0
            .checked_add_months(Months::new(months))
            .and_then(|shifted| shifted.checked_add_signed(delta))
            .map(Timestamp)
            .ok_or_else(|| {
                DiffError::invalid_field("year", start.year(), "result is outside the supported range")
            })
    }
}

/// Serializable summary of one comparison, used for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffReport {
    pub from: Timestamp,
    pub to: Timestamp,
    pub difference: CalendarDifference,
    pub text: String,
}
