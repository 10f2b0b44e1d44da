use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::timestamp::{parse_with_format, DateFormat};

// cookie-octet token characters from RFC 6265
static COOKIE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9!#$%&'*+\-.^_`|~]+$").expect("valid cookie regex"));

/// The first two fields of one log line, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub cookie: String,
    pub timestamp: String,
}

/// Why a parsed entry is left out of the counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    BlankCookie,
    BlankTimestamp,
    CookieCharacters,
    TimestampFormat,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::BlankCookie => "cookie is empty or contains whitespace",
            SkipReason::BlankTimestamp => "timestamp is empty or contains whitespace",
            SkipReason::CookieCharacters => "cookie contains characters outside the token set",
            SkipReason::TimestampFormat => "timestamp is not YYYY-MM-DDTHH:MM:SS+HH:MM",
        };
        f.write_str(reason)
    }
}

/// Splits a raw line into cookie and timestamp.
///
/// Lines without a comma are dropped. Fields after the second are ignored.
pub fn parse_line(raw_line: &str) -> Option<LogEntry> {
    if !raw_line.contains(',') {
        return None;
    }

    let mut fields = raw_line.split(',');
    let cookie = fields.next()?.trim().to_string();
    let timestamp = fields.next()?.trim().to_string();

    Some(LogEntry { cookie, timestamp })
}

fn is_blank_token(value: &str) -> bool {
    value.is_empty() || value.chars().any(char::is_whitespace)
}

pub fn is_valid_cookie(cookie: &str) -> bool {
    COOKIE_TOKEN.is_match(cookie)
}

/// Returns the calendar day the entry counts towards, or why it is skipped.
pub fn validate_entry(entry: &LogEntry) -> Result<NaiveDate, SkipReason> {
    let cookie = entry.cookie.trim();
    let timestamp = entry.timestamp.trim();

    if is_blank_token(cookie) {
        return Err(SkipReason::BlankCookie);
    }
    if is_blank_token(timestamp) {
        return Err(SkipReason::BlankTimestamp);
    }
    if !is_valid_cookie(cookie) {
        return Err(SkipReason::CookieCharacters);
    }

    parse_with_format(timestamp, DateFormat::LogTimestamp)
        .parsed()
        .ok_or(SkipReason::TimestampFormat)
}

pub fn should_skip(entry: &LogEntry) -> bool {
    validate_entry(entry).is_err()
}
