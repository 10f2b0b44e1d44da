use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::path::{Path, PathBuf};

use crate::error::ValidationError;
use crate::timestamp::{parse_with_format, DateFormat};

/// One character of name plus the `.csv` suffix.
const MIN_FILENAME_LEN: usize = 5;
const LOG_SUFFIX: &str = ".csv";
/// Cookies first appeared on the web in 1994.
const EARLIEST_YEAR: i32 = 1994;
/// Clock-skew allowance when the queried day starts in a few seconds.
const FUTURE_GRACE_MS: i64 = 5_000;

/// Checks the log file name and resolves it against `base_dir`.
///
/// Only the file's existence is checked here, its contents are not touched.
pub fn validate_filename(name: &str, base_dir: &Path) -> Result<PathBuf, ValidationError> {
    let name = name.trim();

    if name.chars().count() < MIN_FILENAME_LEN {
        return Err(ValidationError::FilenameTooShort);
    }

    if !name.ends_with(LOG_SUFFIX) {
        return Err(ValidationError::WrongExtension(name.to_string()));
    }

    let not_found = || ValidationError::FileNotFound {
        name: name.to_string(),
        dir: base_dir.to_path_buf(),
    };

    // Names are relative to the base directory only
    if Path::new(name).is_absolute() {
        return Err(not_found());
    }

    let path = base_dir.join(name);
    if !path.is_file() {
        return Err(not_found());
    }

    Ok(path)
}

/// Validates the queried day against the local wall clock.
pub fn validate_date(date: &str) -> Result<NaiveDate, ValidationError> {
    validate_date_at(date, Local::now().naive_local())
}

/// Validates the queried day as if the current local time were `now`.
pub fn validate_date_at(date: &str, now: NaiveDateTime) -> Result<NaiveDate, ValidationError> {
    let date = date.trim();
    let format_error = || ValidationError::DateFormat(date.to_string());

    if !date.contains('-') {
        return Err(format_error());
    }

    let segment_lengths: Vec<usize> = date.split('-').map(|s| s.chars().count()).collect();
    if segment_lengths != [4, 2, 2] || date.chars().count() != 10 {
        return Err(format_error());
    }

    let parsed = parse_with_format(date, DateFormat::QueryDate)
        .parsed()
        .ok_or_else(|| ValidationError::InvalidCalendarDate(date.to_string()))?;

    if parsed.year() < EARLIEST_YEAR {
        return Err(ValidationError::DateTooEarly(date.to_string()));
    }

    let starts_at = parsed.and_time(NaiveTime::MIN);
    if (starts_at - now).num_milliseconds() > FUTURE_GRACE_MS {
        return Err(ValidationError::FutureDate(date.to_string()));
    }

    Ok(parsed)
}
