//! Observation dates and the calendar arithmetic around them.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::InvalidDateError;

/// Wire and storage format of every date handled by the API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date on which an observation was recorded.
///
/// Always rendered zero-padded (`YYYY-MM-DD`), so comparing the string
/// forms gives the same ordering as comparing the dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObservationDate(NaiveDate);

impl ObservationDate {
    /// Build a date from its components, `None` if it does not exist.
    #[must_use]
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Access the inner [`NaiveDate`].
    #[must_use]
    pub fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// The same month and day one year earlier.
    ///
    /// February 29 maps to February 28 of the previous year, which never
    /// has a leap day.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDateError`] when the previous year is outside the
    /// representable calendar range.
    pub fn one_year_before(self) -> Result<Self, InvalidDateError> {
        let year = self.0.year() - 1;
        let shifted = if self.0.month() == 2 && self.0.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            self.0.with_year(year)
        };
        shifted
            .map(Self)
            .ok_or_else(|| InvalidDateError::new(self.to_string()))
    }
}

impl From<NaiveDate> for ObservationDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for ObservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for ObservationDate {
    type Err = InvalidDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_canonical(s) {
            return Err(InvalidDateError::new(s));
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| InvalidDateError::new(s))
    }
}

/// `YYYY-MM-DD` with every field zero-padded: chrono alone also takes
/// short years, signs, padding and single-digit fields.
fn is_canonical(s: &str) -> bool {
    s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl TryFrom<String> for ObservationDate {
    type Error = InvalidDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ObservationDate> for String {
    fn from(date: ObservationDate) -> Self {
        date.to_string()
    }
}
