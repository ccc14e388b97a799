use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use std::fmt;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Encode a calendar date as `YYYYMMDD` (2024-03-07 → 20240307).
pub fn date_stamp(d: NaiveDate) -> u32 {
    d.year() as u32 * 10000 + d.month() * 100 + d.day()
}

/// Stamp for the local calendar day at the moment of the call.
pub fn today_stamp() -> u32 {
    date_stamp(today())
}

/// Decode a `YYYYMMDD` stamp; `None` when it does not name a real day.
pub fn stamp_to_date(stamp: u32) -> Option<NaiveDate> {
    let year = (stamp / 10000) as i32;
    let month = (stamp / 100) % 100;
    let day = stamp % 100;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Period filter for history and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    All,
    Year(i32),
    Month(i32, u32),
    Day(NaiveDate),
}

impl Period {
    /// Parse `all`, `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    pub fn parse(p: &str) -> AppResult<Self> {
        let p = p.trim();

        if p.eq_ignore_ascii_case("all") {
            return Ok(Period::All);
        }

        // YYYY-MM-DD
        if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
            return Ok(Period::Day(d));
        }

        // YYYY-MM
        if let Ok(d) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
            return Ok(Period::Month(d.year(), d.month()));
        }

        // YYYY
        if p.len() == 4
            && let Ok(year) = p.parse::<i32>()
        {
            return Ok(Period::Year(year));
        }

        Err(AppError::InvalidPeriod(p.to_string()))
    }

    /// Resolve an optional CLI argument (missing → `All`).
    pub fn from_arg(arg: Option<&str>) -> AppResult<Self> {
        arg.map_or(Ok(Period::All), Period::parse)
    }

    /// Whether a record stamp falls inside the period.
    /// Stamps that do not decode to a real date only match `All`.
    pub fn contains(&self, stamp: u32) -> bool {
        let Some(d) = stamp_to_date(stamp) else {
            return matches!(self, Period::All);
        };

        match *self {
            Period::All => true,
            Period::Year(y) => d.year() == y,
            Period::Month(y, m) => d.year() == y && d.month() == m,
            Period::Day(day) => d == day,
        }
    }
}

impl fmt::Display for Period {
    /// Same spelling `parse` accepts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::All => write!(f, "all"),
            Period::Year(y) => write!(f, "{y:04}"),
            Period::Month(y, m) => write!(f, "{y:04}-{m:02}"),
            Period::Day(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}
