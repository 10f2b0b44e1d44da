use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::entry::{parse_line, validate_entry};
use crate::error::CookieLogError;
use crate::stats::{FrequencyTable, RankedResult};
use crate::validator::{validate_date, validate_filename};

/// Finds the most active cookies of one day in a cookie log.
#[derive(Debug, Clone)]
pub struct CookieLogProcessor {
    query_date: NaiveDate,
    log_path: PathBuf,
}

impl CookieLogProcessor {
    /// Validates raw inputs and builds a processor.
    ///
    /// The file name is checked before the date, and the first failure is
    /// returned.
    pub fn new(date: &str, logfile: &str, base_dir: &Path) -> Result<Self, CookieLogError> {
        let log_path = validate_filename(logfile, base_dir)?;
        let query_date = validate_date(date)?;
        Ok(Self::from_validated(query_date, log_path))
    }

    pub fn from_validated(query_date: NaiveDate, log_path: PathBuf) -> Self {
        info!(
            action = "configure",
            component = "processor",
            query_date = %query_date,
            log_path = ?log_path,
            "Cookie log processor ready"
        );
        Self {
            query_date,
            log_path,
        }
    }

    pub fn query_date(&self) -> NaiveDate {
        self.query_date
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Returns every line after the header.
    pub fn read_entries(&self) -> Result<Vec<String>, CookieLogError> {
        let content = fs::read_to_string(&self.log_path).map_err(|source| CookieLogError::Io {
            path: self.log_path.clone(),
            source,
        })?;

        Ok(content
            .trim_end()
            .lines()
            .skip(1)
            .map(str::to_string)
            .collect())
    }

    /// Counts valid entries per day and cookie.
    ///
    /// Returns `None` when the log has no lines beyond its header.
    pub fn aggregate(&self) -> Result<Option<FrequencyTable>, CookieLogError> {
        let start_time = Instant::now();
        info!(
            action = "start",
            component = "aggregation",
            log_path = ?self.log_path,
            "Reading cookie log"
        );

        let lines = self.read_entries()?;
        if lines.is_empty() {
            warn!(
                action = "complete",
                component = "aggregation",
                log_path = ?self.log_path,
                "Cookie log is empty"
            );
            return Ok(None);
        }

        let mut table = FrequencyTable::default();
        // Line numbers are 1-based and count the header
        for (line_number, line) in (2usize..).zip(&lines) {
            let Some(entry) = parse_line(line) else {
                debug!(line_number, reason = "no comma separator", "Skipping log line");
                table.record_skipped();
                continue;
            };

            match validate_entry(&entry) {
                Ok(date) => table.record(date, &entry.cookie),
                Err(reason) => {
                    debug!(line_number, reason = %reason, "Skipping log line");
                    table.record_skipped();
                }
            }
        }

        info!(
            action = "complete",
            component = "aggregation",
            lines = lines.len(),
            entries_counted = table.entries_counted,
            entries_skipped = table.entries_skipped,
            days = table.day_count(),
            duration_ms = start_time.elapsed().as_millis(),
            "Cookie log aggregated"
        );

        Ok(Some(table))
    }

    /// Cookies with the highest count on the query date, in order of first
    /// appearance in the log. Empty if the day has no valid entries.
    pub fn get_most_active(&self) -> Result<RankedResult, CookieLogError> {
        let Some(table) = self.aggregate()? else {
            return Ok(RankedResult::default());
        };

        let result = table.most_active_on(self.query_date);
        info!(
            action = "rank",
            component = "processor",
            query_date = %self.query_date,
            winners = result.cookies.len(),
            occurrences = result.occurrences,
            "Most active cookies selected"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use tempfile::TempDir;

    const HEADER: &str = "cookie,timestamp\n";

    fn processor_for(content: &str, date: (i32, u32, u32)) -> (TempDir, CookieLogProcessor) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cookie_log.csv");
        fs::write(&path, content).unwrap();
        let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        let processor = CookieLogProcessor::from_validated(date, path);
        (dir, processor)
    }

    #[test]
    fn construction_validates_filename_before_date() {
        let dir = TempDir::new().unwrap();

        let err = CookieLogProcessor::new("not-a-date", "cookie_log.txt", dir.path()).unwrap_err();
        assert!(matches!(
            err,
            CookieLogError::Construction(ValidationError::WrongExtension(_))
        ));

        fs::write(dir.path().join("cookie_log.csv"), HEADER).unwrap();
        let err = CookieLogProcessor::new("2019-5-1", "cookie_log.csv", dir.path()).unwrap_err();
        assert!(matches!(
            err,
            CookieLogError::Construction(ValidationError::DateFormat(_))
        ));
    }

    #[test]
    fn construction_keeps_validated_inputs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("cookie_log.csv"), HEADER).unwrap();

        let processor =
            CookieLogProcessor::new(" 2001-05-20 ", "cookie_log.csv", dir.path()).unwrap();
        assert_eq!(processor.query_date(), NaiveDate::from_ymd_opt(2001, 5, 20).unwrap());
        assert_eq!(processor.log_path(), dir.path().join("cookie_log.csv"));
    }

    #[test]
    fn read_entries_drops_header_and_trailing_blank_lines() {
        let (_dir, processor) = processor_for(
            "cookie,timestamp\r\na,2018-12-09T14:19:00+00:00\r\nb,2018-12-09T10:13:00+00:00\n\n\n",
            (2018, 12, 9),
        );

        assert_eq!(
            processor.read_entries().unwrap(),
            vec!["a,2018-12-09T14:19:00+00:00", "b,2018-12-09T10:13:00+00:00"]
        );
    }

    #[test]
    fn read_entries_of_empty_or_header_only_file() {
        let (_dir, processor) = processor_for("", (2018, 12, 9));
        assert!(processor.read_entries().unwrap().is_empty());

        let (_dir, processor) = processor_for("cookie,timestamp\n  \n", (2018, 12, 9));
        assert!(processor.read_entries().unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let (dir, processor) = processor_for(HEADER, (2018, 12, 9));
        fs::remove_file(dir.path().join("cookie_log.csv")).unwrap();

        assert!(matches!(processor.read_entries(), Err(CookieLogError::Io { .. })));
        assert!(matches!(processor.get_most_active(), Err(CookieLogError::Io { .. })));
    }

    #[test]
    fn aggregate_counts_each_valid_line_once() {
        let (_dir, processor) = processor_for(
            "cookie,timestamp
a,2018-12-09T14:19:00+00:00
a,2018-12-09T10:13:00+00:00,extra
b,2018-12-09T23:30:00-05:00
bad cookie,2018-12-09T10:13:00+00:00
c,2018-12-09 10:13:00+00:00
no comma here
a,2018-12-08T22:03:00+00:00
",
            (2018, 12, 9),
        );

        let table = processor.aggregate().unwrap().unwrap();
        assert_eq!(table.entries_counted, 4);
        assert_eq!(table.entries_skipped, 3);

        let ninth = table.day(NaiveDate::from_ymd_opt(2018, 12, 9).unwrap()).unwrap();
        assert_eq!(ninth.occurrences("a"), Some(2));
        assert_eq!(ninth.occurrences("b"), Some(1));
        assert_eq!(ninth.occurrences("c"), None);
    }

    #[test]
    fn aggregate_of_header_only_file_is_none() {
        let (_dir, processor) = processor_for(HEADER, (2018, 12, 9));
        assert!(processor.aggregate().unwrap().is_none());
        assert!(processor.get_most_active().unwrap().is_empty());
    }

    #[test]
    fn repeated_queries_are_stable() {
        let (_dir, processor) = processor_for(
            "cookie,timestamp\nx,2018-12-09T14:19:00+00:00\ny,2018-12-09T10:13:00+00:00\n",
            (2018, 12, 9),
        );

        let first = processor.get_most_active().unwrap();
        let second = processor.get_most_active().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.cookies, vec!["x", "y"]);
    }
}
