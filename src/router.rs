//! Range Router
//!
//! Maps a calendar date to the CSV file that owns it.
//!
//! ## Responsibilities
//! - Parse a `YYYY-MM-DD` date into an integer range key (`YYYYMMDD`)
//! - Resolve a range key to the owning CSV file via the range map
//!
//! The range map is an ordered list of inclusive `[start, end]` windows.
//! Entries are assumed non-overlapping but this is not validated; if two
//! entries overlap, the first listed wins.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NeoError, Result};

/// One window of the range map: dates in `[start, end]` live in `file`.
///
/// Keys encode a date as `YYYY * 10000 + MM * 100 + DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEntry {
    /// First key owned by this file (inclusive), e.g. 20251201
    pub start: i32,

    /// Last key owned by this file (inclusive), e.g. 20251208
    pub end: i32,

    /// CSV file name, resolved relative to the data directory
    pub file: PathBuf,
}

impl RangeEntry {
    /// Create a range entry
    pub fn new(start: i32, end: i32, file: impl Into<PathBuf>) -> Self {
        Self {
            start,
            end,
            file: file.into(),
        }
    }

    /// Check whether `key` falls inside this window (inclusive on both ends)
    pub fn contains(&self, key: i32) -> bool {
        key >= self.start && key <= self.end
    }
}

/// Parse a `YYYY-MM-DD` date string into a range key.
///
/// Accepts exactly three numeric dash-separated components and rejects
/// year < 1900, month outside 1–12, and day outside 1–31. There is no
/// per-month day-count or leap-year check; `2026-02-31` parses fine.
pub fn date_key(date: &str) -> Result<i32> {
    let mut parts = date.trim().splitn(3, '-');

    let year = parse_component(parts.next(), date)?;
    let month = parse_component(parts.next(), date)?;
    let day = parse_component(parts.next(), date)?;

    if year < 1900 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(NeoError::InvalidDate(date.trim().to_string()));
    }

    Ok(year * 10_000 + month * 100 + day)
}

/// Parse one numeric date component, mapping any failure to InvalidDate
fn parse_component(part: Option<&str>, date: &str) -> Result<i32> {
    part.and_then(|p| p.trim().parse::<i32>().ok())
        .ok_or_else(|| NeoError::InvalidDate(date.trim().to_string()))
}

/// Resolve a range key to the owning CSV file.
///
/// Linear scan over the entries; returns the first window containing the
/// key, or `None` if no file owns this date.
pub fn file_for_key(key: i32, entries: &[RangeEntry]) -> Option<&Path> {
    entries
        .iter()
        .find(|entry| entry.contains(key))
        .map(|entry| entry.file.as_path())
}

/// Route a `YYYY-MM-DD` date straight to its owning file.
///
/// Convenience wrapper combining `date_key` and `file_for_key`; a date
/// that parses but falls outside every window is `NoRangeForDate`.
pub fn route_date<'a>(date: &str, entries: &'a [RangeEntry]) -> Result<&'a Path> {
    let key = date_key(date)?;
    file_for_key(key, entries).ok_or_else(|| NeoError::NoRangeForDate(date.trim().to_string()))
}
