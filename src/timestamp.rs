use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static QUERY_DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid query date regex"));

static LOG_TIMESTAMP_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-5][0-9][+-][0-9]{2}:[0-9]{2}$")
        .expect("valid log timestamp regex")
});

/// The two textual date layouts this tool understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `YYYY-MM-DD`, used for the queried day.
    QueryDate,
    /// `YYYY-MM-DDTHH:MM:SS±HH:MM`, used for every log entry.
    LogTimestamp,
}

impl DateFormat {
    fn chrono_pattern(self) -> &'static str {
        match self {
            DateFormat::QueryDate => "%Y-%m-%d",
            DateFormat::LogTimestamp => "%Y-%m-%dT%H:%M:%S%:z",
        }
    }

    fn shape(self) -> &'static Regex {
        match self {
            DateFormat::QueryDate => &QUERY_DATE_SHAPE,
            DateFormat::LogTimestamp => &LOG_TIMESTAMP_SHAPE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateParse {
    Parsed(NaiveDate),
    Invalid,
}

impl DateParse {
    pub fn parsed(self) -> Option<NaiveDate> {
        match self {
            DateParse::Parsed(date) => Some(date),
            DateParse::Invalid => None,
        }
    }
}

/// Strictly parses `value` in the given format and returns its calendar date.
///
/// Log timestamps keep the day as written: the offset is validated but never
/// applied, so `2018-12-09T23:30:00-05:00` belongs to December 9th.
pub fn parse_with_format(value: &str, format: DateFormat) -> DateParse {
    if !format.shape().is_match(value) {
        return DateParse::Invalid;
    }

    let parsed = match format {
        DateFormat::QueryDate => NaiveDate::parse_from_str(value, format.chrono_pattern()).ok(),
        DateFormat::LogTimestamp => DateTime::parse_from_str(value, format.chrono_pattern())
            .ok()
            .map(|timestamp| timestamp.date_naive()),
    };

    parsed.map_or(DateParse::Invalid, DateParse::Parsed)
}
