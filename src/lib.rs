pub mod args;
pub mod entry;
pub mod error;
pub mod processor;
pub mod stats;
pub mod timestamp;
pub mod utils;
pub mod validator;

pub use args::Args;
pub use entry::{parse_line, should_skip, validate_entry, LogEntry, SkipReason};
pub use error::{CookieLogError, ValidationError};
pub use processor::CookieLogProcessor;
pub use stats::{DailyCounts, FrequencyTable, RankedResult};
pub use timestamp::{parse_with_format, DateFormat, DateParse};
pub use validator::{validate_date, validate_date_at, validate_filename};
