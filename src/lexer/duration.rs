// Duration literals: range selectors `foo[5m]`, subqueries `foo[1h:30s]`
// and offsets `foo offset 1d`.
//
// Format: one or more <digits><unit> groups, e.g. 5m, 1h30m, 4s180ms.
// Units: ms, s, m, h, d (24h), w (7d), y (365d).

#[cfg(feature = "ser")]
use serde::Serialize;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::digit1,
    combinator::{map_res, value},
    multi::many1,
    sequence::pair,
};

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;
const MILLIS_PER_WEEK: i64 = 7 * MILLIS_PER_DAY;
const MILLIS_PER_YEAR: i64 = 365 * MILLIS_PER_DAY;

/// A signed span of time with millisecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "ser", derive(Serialize))]
pub struct Duration {
    pub milliseconds: i64,
}

impl Duration {
    pub const fn from_millis(ms: i64) -> Self {
        Self { milliseconds: ms }
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self::from_millis(secs * MILLIS_PER_SECOND)
    }

    pub const fn as_millis(&self) -> i64 {
        self.milliseconds
    }

    /// Whole seconds, truncated toward zero.
    pub const fn as_secs(&self) -> i64 {
        self.milliseconds / MILLIS_PER_SECOND
    }

    pub const fn is_negative(&self) -> bool {
        self.milliseconds < 0
    }

    /// The same span pointing the other way.
    pub const fn negate(self) -> Self {
        Self::from_millis(-self.milliseconds)
    }
}

impl std::fmt::Display for Duration {
    /// Prints the largest units first, so `5_400_000ms` renders as `1h30m`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.milliseconds == 0 {
            return write!(f, "0s");
        }
        if self.milliseconds < 0 {
            write!(f, "-")?;
        }

        let mut rest = self.milliseconds.unsigned_abs();
        for unit in DurationUnit::DESCENDING {
            let size = unit.millis() as u64;
            let count = rest / size;
            if count > 0 {
                write!(f, "{}{}", count, unit.suffix())?;
                rest %= size;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DurationUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Year,
}

impl DurationUnit {
    const DESCENDING: [DurationUnit; 7] = [
        DurationUnit::Year,
        DurationUnit::Week,
        DurationUnit::Day,
        DurationUnit::Hour,
        DurationUnit::Minute,
        DurationUnit::Second,
        DurationUnit::Millisecond,
    ];

    const fn millis(self) -> i64 {
        match self {
            DurationUnit::Millisecond => 1,
            DurationUnit::Second => MILLIS_PER_SECOND,
            DurationUnit::Minute => MILLIS_PER_MINUTE,
            DurationUnit::Hour => MILLIS_PER_HOUR,
            DurationUnit::Day => MILLIS_PER_DAY,
            DurationUnit::Week => MILLIS_PER_WEEK,
            DurationUnit::Year => MILLIS_PER_YEAR,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            DurationUnit::Millisecond => "ms",
            DurationUnit::Second => "s",
            DurationUnit::Minute => "m",
            DurationUnit::Hour => "h",
            DurationUnit::Day => "d",
            DurationUnit::Week => "w",
            DurationUnit::Year => "y",
        }
    }
}

/// Sum `<count><unit>` groups, failing on i64 overflow.
fn total_millis(groups: Vec<(i64, DurationUnit)>) -> Result<Duration, &'static str> {
    groups
        .into_iter()
        .try_fold(0i64, |total, (count, unit)| {
            count
                .checked_mul(unit.millis())
                .and_then(|ms| total.checked_add(ms))
        })
        .map(Duration::from_millis)
        .ok_or("duration overflows")
}

fn duration_unit(input: &str) -> IResult<&str, DurationUnit> {
    alt((
        // "ms" before "m"
        value(DurationUnit::Millisecond, tag("ms")),
        value(DurationUnit::Second, tag("s")),
        value(DurationUnit::Minute, tag("m")),
        value(DurationUnit::Hour, tag("h")),
        value(DurationUnit::Day, tag("d")),
        value(DurationUnit::Week, tag("w")),
        value(DurationUnit::Year, tag("y")),
    ))
    .parse(input)
}

fn duration_group(input: &str) -> IResult<&str, (i64, DurationUnit)> {
    pair(map_res(digit1, str::parse::<i64>), duration_unit).parse(input)
}

/// Parse an unsigned duration literal such as `5m` or `1h30m`.
///
/// Stops at the first character that does not continue a `<digits><unit>`
/// group; the caller decides whether what follows is acceptable.
pub fn duration(input: &str) -> IResult<&str, Duration> {
    map_res(many1(duration_group), total_millis).parse(input)
}
