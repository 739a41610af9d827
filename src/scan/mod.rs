//! Prefix-Date Scanner
//!
//! Walks dates backward from an end date one day at a time, testing the
//! current year's filter for a prefix+date lookup key. The filter is
//! reloaded only when the walked day crosses a year boundary; a year with
//! no filter ends the scan.
//!
//! ## Scan Control Flow
//! ```text
//!  end ──▶ day ──▶ day-1 ──▶ day-2 ──▶ ...
//!           │
//!           │ year changed?
//!           ▼
//!     load_year(year) ──▶ absent ──▶ stop (end of history)
//!           │ present
//!           ▼
//!     might_contain(prefix + YYYYMMDD)? ──▶ collect day
//!           │
//!           ▼
//!     limit reached? max-days ceiling? ──▶ stop
//! ```

mod days;

pub use days::{parse_day, DaysBack};

use time::Date;

use crate::filter::BloomFilter;
use crate::prefix::IpPrefix;

/// Source of per-year filters consumed by a scan
///
/// A scan holds at most one loaded filter at a time and swaps it out
/// exactly when the walked day's year changes. Keeping the source behind a
/// trait keeps that reload discipline observable without a filesystem.
pub trait IndexSource {
    /// The filter for `year`, or `None` when no data is available
    fn load_year(&self, year: i32) -> Option<BloomFilter>;
}

/// Build the membership key for a prefix on a day
///
/// The canonical prefix rendering concatenated with the day as exactly
/// eight zero-padded digits (YYYYMMDD), no separator. Writers and readers
/// of shared filter files must agree on these bytes exactly:
/// `10.0.0.0/8` on 2015-01-26 keys as `10.0.0.0/820150126`.
pub fn lookup_key(prefix: &IpPrefix, day: Date) -> String {
    format!(
        "{}{:04}{:02}{:02}",
        prefix,
        day.year(),
        u8::from(day.month()),
        day.day()
    )
}

/// Reverse-chronological scanner over a filter source
pub struct Scanner<'s, S> {
    /// Where per-year filters come from
    source: &'s S,

    /// Ceiling on days examined per scan, regardless of matches
    max_days: Option<u32>,
}

impl<'s, S: IndexSource> Scanner<'s, S> {
    /// Create a scanner over a filter source
    pub fn new(source: &'s S) -> Self {
        Self {
            source,
            max_days: None,
        }
    }

    /// Bound the number of days examined per scan
    ///
    /// The result limit bounds matches, not work: a prefix that never
    /// matches still walks every day back to the start of available data.
    /// This ceiling bounds the walk itself.
    pub fn with_max_days(mut self, days: u32) -> Self {
        self.max_days = Some(days);
        self
    }

    /// Collect the days on which `prefix` appeared, walking backward from `end`
    ///
    /// Results are nearest-to-`end` first, strictly decreasing. A `limit`
    /// of zero means unbounded: the scan runs until it steps into a year
    /// with no filter. Because the first day triggers a year check, an
    /// empty source terminates immediately even with no limit.
    pub fn scan(&self, prefix: &IpPrefix, end: Date, limit: usize) -> Vec<Date> {
        let mut results = Vec::new();
        let mut loaded_year: Option<i32> = None;
        let mut index: Option<BloomFilter> = None;

        for (walked, day) in DaysBack::new(end).enumerate() {
            if let Some(ceiling) = self.max_days {
                if walked as u64 >= u64::from(ceiling) {
                    tracing::debug!("scan stopped at {} day ceiling", ceiling);
                    break;
                }
            }

            // Reload only when the walked day crosses a year boundary
            if loaded_year != Some(day.year()) {
                loaded_year = Some(day.year());
                index = self.source.load_year(day.year());
            }

            let Some(filter) = index.as_ref() else {
                // No filter for this year: ran out of history
                break;
            };

            if filter.might_contain(&lookup_key(prefix, day)) {
                results.push(day);
            }

            if limit > 0 && results.len() >= limit {
                break;
            }
        }

        results
    }
}
