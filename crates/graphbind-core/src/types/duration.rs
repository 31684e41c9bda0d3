use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
    time::Duration,
};
use thiserror::Error as ThisError;

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const DATE_DESIGNATORS: [char; 4] = ['Y', 'M', 'W', 'D'];
const TIME_DESIGNATORS: [char; 3] = ['H', 'M', 'S'];

///
/// DurationParseError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("invalid ISO 8601 duration {text:?}: {reason}")]
pub struct DurationParseError {
    text: String,
    reason: &'static str,
}

impl DurationParseError {
    fn new(text: &str, reason: &'static str) -> Self {
        Self {
            text: text.to_string(),
            reason,
        }
    }
}

///
/// IsoDuration
///
/// ISO 8601 duration (`[-]PnYnMnWnDTnHnMn[.f]S`). Calendar components are
/// kept as written; nothing is normalized across units. A zero duration is
/// never negative and prints as `PT0S`.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct IsoDuration {
    negative: bool,
    years: u32,
    months: u32,
    weeks: u32,
    days: u32,
    hours: u32,
    minutes: u32,
    seconds: u32,
    nanos: u32,
}

impl IsoDuration {
    pub const ZERO: Self = Self {
        negative: false,
        years: 0,
        months: 0,
        weeks: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        nanos: 0,
    };

    #[must_use]
    pub const fn from_days(days: u32) -> Self {
        Self::ZERO.with_days(days)
    }

    #[must_use]
    pub const fn from_hours(hours: u32) -> Self {
        Self::ZERO.with_hours(hours)
    }

    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        Self::ZERO.with_minutes(minutes)
    }

    #[must_use]
    pub const fn from_seconds(seconds: u32) -> Self {
        Self::ZERO.with_seconds(seconds)
    }

    #[must_use]
    pub const fn with_years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    #[must_use]
    pub const fn with_months(mut self, months: u32) -> Self {
        self.months = months;
        self
    }

    #[must_use]
    pub const fn with_weeks(mut self, weeks: u32) -> Self {
        self.weeks = weeks;
        self
    }

    #[must_use]
    pub const fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    #[must_use]
    pub const fn with_hours(mut self, hours: u32) -> Self {
        self.hours = hours;
        self
    }

    #[must_use]
    pub const fn with_minutes(mut self, minutes: u32) -> Self {
        self.minutes = minutes;
        self
    }

    #[must_use]
    pub const fn with_seconds(mut self, seconds: u32) -> Self {
        self.seconds = seconds;
        self
    }

    /// Sub-second part; values of a full second or more are clamped.
    #[must_use]
    pub const fn with_nanos(mut self, nanos: u32) -> Self {
        self.nanos = if nanos < NANOS_PER_SECOND {
            nanos
        } else {
            NANOS_PER_SECOND - 1
        };
        self
    }

    /// Flip the sign; zero stays non-negative.
    #[must_use]
    pub const fn negated(mut self) -> Self {
        self.negative = !self.negative && !self.is_zero();
        self
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.nanos == 0
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    #[must_use]
    pub const fn years(&self) -> u32 {
        self.years
    }

    #[must_use]
    pub const fn months(&self) -> u32 {
        self.months
    }

    #[must_use]
    pub const fn weeks(&self) -> u32 {
        self.weeks
    }

    #[must_use]
    pub const fn days(&self) -> u32 {
        self.days
    }

    #[must_use]
    pub const fn hours(&self) -> u32 {
        self.hours
    }

    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    #[must_use]
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    #[must_use]
    pub const fn nanos(&self) -> u32 {
        self.nanos
    }

    /// Exact length, when the duration has no calendar-relative part and is
    /// not negative.
    #[must_use]
    pub fn to_std(&self) -> Option<Duration> {
        if self.negative || self.years != 0 || self.months != 0 {
            return None;
        }

        let secs = u64::from(self.weeks) * 604_800
            + u64::from(self.days) * 86_400
            + u64::from(self.hours) * 3_600
            + u64::from(self.minutes) * 60
            + u64::from(self.seconds);

        Some(Duration::new(secs, self.nanos))
    }

    fn parse(text: &str) -> Result<Self, DurationParseError> {
        let err = |reason| DurationParseError::new(text, reason);

        let (negative, rest) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let rest = rest
            .strip_prefix('P')
            .ok_or_else(|| err("missing leading 'P'"))?;

        let (date_part, time_part) = match rest.split_once('T') {
            Some((date, time)) => {
                if time.is_empty() {
                    return Err(err("empty time section after 'T'"));
                }
                (date, Some(time))
            }
            None => (rest, None),
        };
        if date_part.is_empty() && time_part.is_none() {
            return Err(err("no components"));
        }

        let mut out = Self::ZERO;

        for (designator, number) in components(date_part, &DATE_DESIGNATORS).map_err(err)? {
            let n = parse_whole(number).map_err(err)?;
            match designator {
                'Y' => out.years = n,
                'M' => out.months = n,
                'W' => out.weeks = n,
                _ => out.days = n,
            }
        }

        if let Some(time_part) = time_part {
            for (designator, number) in components(time_part, &TIME_DESIGNATORS).map_err(err)? {
                match designator {
                    'H' => out.hours = parse_whole(number).map_err(err)?,
                    'M' => out.minutes = parse_whole(number).map_err(err)?,
                    _ => {
                        let (whole, nanos) = parse_seconds(number).map_err(err)?;
                        out.seconds = whole;
                        out.nanos = nanos;
                    }
                }
            }
        }

        out.negative = negative && !out.is_zero();

        Ok(out)
    }
}

// Split `1D2H`-style text into (designator, number) pairs, enforcing order.
fn components<'a>(
    text: &'a str,
    designators: &[char],
) -> Result<Vec<(char, &'a str)>, &'static str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut next_allowed = 0;

    for (i, c) in text.char_indices() {
        if c.is_ascii_digit() || c == '.' || c == ',' {
            continue;
        }

        let position = designators[next_allowed..]
            .iter()
            .position(|d| *d == c)
            .ok_or("unexpected or out-of-order designator")?;
        let number = &text[start..i];
        if number.is_empty() {
            return Err("designator without a number");
        }

        out.push((c, number));
        next_allowed += position + 1;
        start = i + c.len_utf8();
    }

    if start != text.len() {
        return Err("number without a designator");
    }

    Ok(out)
}

fn parse_whole(number: &str) -> Result<u32, &'static str> {
    if !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err("fractions are only allowed on seconds");
    }

    number.parse().map_err(|_| "component out of range")
}

fn parse_seconds(number: &str) -> Result<(u32, u32), &'static str> {
    let Some((whole, fraction)) = number.split_once(['.', ',']) else {
        return Ok((parse_whole(number)?, 0));
    };

    if whole.is_empty()
        || fraction.is_empty()
        || fraction.len() > 9
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err("invalid fractional seconds");
    }

    let digits: u32 = fraction.parse().map_err(|_| "invalid fractional seconds")?;
    let scale = 10u32.pow(9 - u32::try_from(fraction.len()).map_err(|_| "invalid fractional seconds")?);

    Ok((parse_whole(whole)?, digits * scale))
}

impl Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }

        let mut out = String::with_capacity(16);
        if self.negative {
            out.push('-');
        }
        out.push('P');

        for (n, d) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if n != 0 {
                write!(out, "{n}{d}")?;
            }
        }

        if self.hours != 0 || self.minutes != 0 || self.seconds != 0 || self.nanos != 0 {
            out.push('T');
            if self.hours != 0 {
                write!(out, "{}H", self.hours)?;
            }
            if self.minutes != 0 {
                write!(out, "{}M", self.minutes)?;
            }
            if self.nanos != 0 {
                let fraction = format!("{:09}", self.nanos);
                write!(out, "{}.{}S", self.seconds, fraction.trim_end_matches('0'))?;
            } else if self.seconds != 0 {
                write!(out, "{}S", self.seconds)?;
            }
        }

        f.write_str(&out)
    }
}

impl FromStr for IsoDuration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Duration> for IsoDuration {
    type Error = std::num::TryFromIntError;

    /// Whole days, hours, minutes and seconds; nothing calendar-relative.
    fn try_from(d: Duration) -> Result<Self, Self::Error> {
        let secs = d.as_secs();

        Ok(Self::ZERO
            .with_days(u32::try_from(secs / 86_400)?)
            .with_hours(u32::try_from(secs % 86_400 / 3_600)?)
            .with_minutes(u32::try_from(secs % 3_600 / 60)?)
            .with_seconds(u32::try_from(secs % 60)?)
            .with_nanos(d.subsec_nanos()))
    }
}
