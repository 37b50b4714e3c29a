//! Time utilities: parsing HH:MM / HH:MM:SS and reading the wall clock.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Current local time, truncated to whole seconds.
pub fn now() -> NaiveTime {
    let t = chrono::Local::now().time();
    t.with_nanosecond(0).unwrap_or(t)
}

/// Parse an optional CLI time, falling back to the current time.
pub fn parse_time_or_now(input: Option<&String>) -> AppResult<NaiveTime> {
    match input {
        Some(s) => parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string())),
        None => Ok(now()),
    }
}
