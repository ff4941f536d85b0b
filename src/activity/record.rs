use crate::foundation::core::Tier;
use chrono::NaiveDate;

/// One simulated day of activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivityRecord {
    date: NaiveDate,
    count: u32,
    tier: Tier,
}

impl ActivityRecord {
    /// Build a record; the tier is always derived from `count`.
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self {
            date,
            count,
            tier: Tier::from_count(count),
        }
    }

    /// Calendar day of the record.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Number of contributions on that day.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Activity bucket of `count`.
    pub fn tier(&self) -> Tier {
        self.tier
    }
}
