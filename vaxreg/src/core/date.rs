//! Calendar dates on the registry's fixed, non-leap calendar.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// Days per month, January first. February never has 29 days.
const DAYS_IN_MONTH: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A `day-month-year` triple.
///
/// Fields are kept as plain integers so that out-of-range input can be
/// represented and rejected by [`Date::is_valid_calendar_date`] instead of
/// failing at parse time. Ordering is chronological: year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl Date {
    pub const fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// True if the month is in `1..=12` and the day exists in that month.
    pub fn is_valid_calendar_date(&self) -> bool {
        if !(1..=12).contains(&self.month) {
            return false;
        }
        let last_day = DAYS_IN_MONTH[(self.month - 1) as usize];
        (1..=last_day).contains(&self.day)
    }

    /// True if `self` is on or before `today`.
    pub fn is_past_or_present(&self, today: &Date) -> bool {
        self <= today
    }

    /// True if `self` is strictly after `today`.
    pub fn is_future(&self, today: &Date) -> bool {
        self > today
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:02}", self.day, self.month, self.year)
    }
}

/// Error returned when text is not shaped like `<int>-<int>-<int>`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed date '{0}'")]
pub struct ParseDateError(pub String);

impl FromStr for Date {
    type Err = ParseDateError;

    /// Parse `dd-mm-yyyy`. Only the shape is checked here; calendar validity
    /// is left to the caller.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static DATE_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"^([+-]?\d+)-([+-]?\d+)-([+-]?\d+)$").unwrap());

        let malformed = || ParseDateError(s.to_string());
        let caps = DATE_RE.captures(s.trim()).ok_or_else(malformed)?;
        let field = |idx: usize| caps[idx].parse::<i32>().map_err(|_| malformed());
        Ok(Date::new(field(1)?, field(2)?, field(3)?))
    }
}
