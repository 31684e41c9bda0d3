use chrono::NaiveDate;
use derive_more::{Display, FromStr};

///
/// Date
/// (calendar date, `YYYY-MM-DD` on the wire)
///

#[derive(Clone, Copy, Debug, Display, Eq, FromStr, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Construct from calendar parts; `None` for impossible dates.
    #[must_use]
    pub fn new_checked(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    #[must_use]
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}
