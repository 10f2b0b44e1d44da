use std::path::PathBuf;
use thiserror::Error;

/// Reasons a command-line input is rejected before any log content is read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no log file name given (expected at least one character before `.csv`)")]
    FilenameTooShort,

    #[error("log file `{0}` has the wrong file type, a `.csv` file is required")]
    WrongExtension(String),

    #[error("log file `{name}` was not found in {}", dir.display())]
    FileNotFound { name: String, dir: PathBuf },

    #[error("date `{0}` is malformed, expected YYYY-MM-DD")]
    DateFormat(String),

    #[error("date `{0}` is not a valid calendar date, expected YYYY-MM-DD")]
    InvalidCalendarDate(String),

    #[error("date `{0}` predates cookies on the web (earliest year is 1994)")]
    DateTooEarly(String),

    #[error("date `{0}` is in the future")]
    FutureDate(String),
}

#[derive(Debug, Error)]
pub enum CookieLogError {
    #[error("cookie log processor could not be created")]
    Construction(#[from] ValidationError),

    #[error("failed to read cookie log {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn construction_error_carries_the_validation_failure() {
        let err = CookieLogError::from(ValidationError::FutureDate("2050-12-20".to_string()));
        assert_eq!(err.to_string(), "cookie log processor could not be created");
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("date `2050-12-20` is in the future".to_string())
        );
    }

    #[test]
    fn missing_file_names_the_directory() {
        let err = ValidationError::FileNotFound {
            name: "c.csv".to_string(),
            dir: PathBuf::from("/srv/logs"),
        };
        assert_eq!(err.to_string(), "log file `c.csv` was not found in /srv/logs");
    }
}
