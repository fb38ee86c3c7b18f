use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::bucket::Bucket;

/// One calendar day's raw contribution count.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub count: u32,
}

impl DayRecord {
    pub fn new(date: NaiveDate, count: u32) -> DayRecord {
        DayRecord { date, count }
    }
}

impl Ord for DayRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.count.cmp(&other.count))
    }
}

impl PartialOrd for DayRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A [`DayRecord`] annotated with its bucket and fill color.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ColoredDay {
    pub date: NaiveDate,
    pub count: u32,
    pub bucket: Bucket,
    /// Fill color code, e.g. `#aceafa`
    pub color: String,
}
