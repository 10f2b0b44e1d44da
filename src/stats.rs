use chrono::NaiveDate;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CookieTally {
    first_seen: usize,
    occurrences: u32,
}

/// Occurrence counts for every cookie seen on one day.
#[derive(Debug, Default)]
pub struct DailyCounts {
    tallies: HashMap<String, CookieTally>,
}

impl DailyCounts {
    pub fn record(&mut self, cookie: &str) {
        let next_position = self.tallies.len();
        self.tallies
            .entry(cookie.to_string())
            .or_insert(CookieTally {
                first_seen: next_position,
                occurrences: 0,
            })
            .occurrences += 1;
    }

    pub fn occurrences(&self, cookie: &str) -> Option<u32> {
        self.tallies.get(cookie).map(|tally| tally.occurrences)
    }

    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Cookies tied for the highest count, in order of first appearance.
    pub fn most_active(&self) -> RankedResult {
        let Some(max) = self.tallies.values().map(|tally| tally.occurrences).max() else {
            return RankedResult::default();
        };

        let mut winners: Vec<(&String, usize)> = self
            .tallies
            .iter()
            .filter(|(_, tally)| tally.occurrences == max)
            .map(|(cookie, tally)| (cookie, tally.first_seen))
            .collect();
        winners.sort_by_key(|&(_, first_seen)| first_seen);

        RankedResult {
            cookies: winners.into_iter().map(|(cookie, _)| cookie.clone()).collect(),
            occurrences: max,
        }
    }
}

/// Per-day cookie counts built from one pass over a log.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    days: HashMap<NaiveDate, DailyCounts>,
    pub entries_counted: u32,
    pub entries_skipped: u32,
}

impl FrequencyTable {
    pub fn record(&mut self, date: NaiveDate, cookie: &str) {
        self.days.entry(date).or_default().record(cookie);
        self.entries_counted += 1;
    }

    pub fn record_skipped(&mut self) {
        self.entries_skipped += 1;
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DailyCounts> {
        self.days.get(&date)
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// An empty result means nothing was logged on `date`.
    pub fn most_active_on(&self, date: NaiveDate) -> RankedResult {
        self.day(date)
            .map(DailyCounts::most_active)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedResult {
    pub cookies: Vec<String>,
    pub occurrences: u32,
}

impl RankedResult {
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}
