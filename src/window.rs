//! Date windows over the archive.
//!
//! Dates travel as zero-padded `YYYY-MM-DD` strings and are compared
//! lexically, both here and in SQL. Malformed input is not rejected.
use crate::EARLIEST;
use crate::HORIZON;
use crate::TRAILING_DAYS;
use anyhow::Context;
use chrono::Duration;
use chrono::NaiveDate;

/// Out-of-range request. Rendered to clients as a JSON string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// Start lies beyond the horizon.
    Start,
    /// Start lies beyond the horizon, or end lies before the earliest date.
    Range,
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(
                f,
                "Error: start date past time horizon, please enter a date on or before {}",
                HORIZON
            ),
            Self::Range => write!(
                f,
                "Error: start and end date not within time horizon, please enter a start and end date between {} : {}",
                EARLIEST, HORIZON
            ),
        }
    }
}

impl std::error::Error for Bounds {}

/// Inclusive date window for temperature aggregates.
///
/// `end` of `None` means open-ended. No check that `start <= end`;
/// an inverted window simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    start: String,
    end: Option<String>,
}

impl Window {
    pub fn starting(start: impl Into<String>) -> Result<Self, Bounds> {
        let start = start.into();
        if start.as_str() > HORIZON {
            return Err(Bounds::Start);
        }
        Ok(Self { start, end: None })
    }
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Result<Self, Bounds> {
        let start = start.into();
        let end = end.into();
        if start.as_str() > HORIZON || end.as_str() < EARLIEST {
            return Err(Bounds::Range);
        }
        Ok(Self {
            start,
            end: Some(end),
        })
    }
    pub fn start(&self) -> &str {
        &self.start
    }
    pub fn end(&self) -> Option<&str> {
        self.end.as_deref()
    }
    /// Lexical membership test, matching the SQL predicate.
    pub fn contains(&self, date: &str) -> bool {
        date >= self.start.as_str() && self.end.as_deref().map_or(true, |end| date <= end)
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.end {
            Some(end) => write!(f, "{}..={}", self.start, end),
            None => write!(f, "{}..", self.start),
        }
    }
}

/// First date of the trailing window ending at the horizon.
pub fn since() -> anyhow::Result<String> {
    let horizon = NaiveDate::parse_from_str(HORIZON, "%Y-%m-%d").context("parse horizon")?;
    let since = horizon
        .checked_sub_signed(Duration::days(TRAILING_DAYS))
        .context("trailing window underflow")?;
    Ok(since.format("%Y-%m-%d").to_string())
}
