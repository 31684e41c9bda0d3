use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

///
/// Timestamp
/// (UTC instant, RFC 3339 on the wire)
///
/// Offsets are normalized to UTC on parse. Display writes `Z` and only as
/// many fractional digits as are needed. Only years 0000 through 9999 have
/// an RFC 3339 spelling; see [`Timestamp::is_representable`].
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    #[must_use]
    pub const fn new(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Construct from whole seconds since the Unix epoch.
    ///
    /// Returns `None` outside the four-digit year range.
    #[must_use]
    pub fn from_unix_seconds(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0)
            .map(Self)
            .filter(Self::is_representable)
    }

    pub fn parse_rfc3339(s: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(s).map(|dt| Self(dt.with_timezone(&Utc)))
    }

    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    #[must_use]
    pub fn unix_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    /// Whether the year fits the four digits RFC 3339 allows.
    #[must_use]
    pub fn is_representable(&self) -> bool {
        (0..=9999).contains(&self.0.year())
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_rfc3339(s)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}
