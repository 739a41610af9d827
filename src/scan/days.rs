//! Calendar-day helpers
//!
//! A pull-based reverse iterator over days, and the `YYYY-M-D` parsing used
//! at the CLI boundary.

use time::{Date, Month};

use crate::error::{Result, TrailError};

/// Iterator stepping backward one day per pull, starting from a given day
///
/// Finite: ends after the calendar's minimum representable day.
#[derive(Debug, Clone)]
pub struct DaysBack {
    next: Option<Date>,
}

impl DaysBack {
    /// Start walking backward from `day` (inclusive)
    pub fn new(day: Date) -> Self {
        Self { next: Some(day) }
    }
}

impl Iterator for DaysBack {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let day = self.next?;
        self.next = day.previous_day();
        Some(day)
    }
}

/// Parse a `YYYY-M-D` date; month and day may be zero-padded or not
pub fn parse_day(s: &str) -> Result<Date> {
    let mut parts = s.splitn(3, '-');

    let (year, month, day) = match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d)) => (y, m, d),
        _ => {
            return Err(TrailError::InvalidDate(format!(
                "expected YYYY-M-D, got {:?}",
                s
            )))
        }
    };

    let year: i32 = year
        .parse()
        .map_err(|_| TrailError::InvalidDate(format!("bad year in {:?}", s)))?;
    let month: u8 = month
        .parse()
        .map_err(|_| TrailError::InvalidDate(format!("bad month in {:?}", s)))?;
    let day: u8 = day
        .parse()
        .map_err(|_| TrailError::InvalidDate(format!("bad day in {:?}", s)))?;

    let month = Month::try_from(month)
        .map_err(|_| TrailError::InvalidDate(format!("month out of range in {:?}", s)))?;

    Date::from_calendar_date(year, month, day)
        .map_err(|_| TrailError::InvalidDate(format!("no such calendar day: {:?}", s)))
}
