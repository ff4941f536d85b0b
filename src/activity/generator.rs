use crate::activity::record::ActivityRecord;
use crate::foundation::error::{EnderError, EnderResult};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

/// Number of records produced by [`generate_activity`].
pub const DAYS_PER_YEAR: usize = 365;

/// Weekday (Mon-Fri) outcomes and their probabilities.
pub const WEEKDAY_OUTCOMES: [u32; 8] = [0, 1, 2, 3, 4, 5, 8, 12];
const WEEKDAY_WEIGHTS: [f64; 8] = [0.10, 0.20, 0.25, 0.20, 0.15, 0.05, 0.03, 0.02];

/// Weekend (Sat-Sun) outcomes and their probabilities.
pub const WEEKEND_OUTCOMES: [u32; 4] = [0, 1, 2, 3];
const WEEKEND_WEIGHTS: [f64; 4] = [0.40, 0.30, 0.20, 0.10];

/// Supplies the contribution count for a given day.
///
/// [`RandomActivity`] is the production source; closures `FnMut(NaiveDate) -> u32` also implement
/// this trait, which is how fixed scenarios are fed through the pipeline.
pub trait ActivitySource {
    /// Count for `date`.
    fn count_for(&mut self, date: NaiveDate) -> u32;
}

impl<F> ActivitySource for F
where
    F: FnMut(NaiveDate) -> u32,
{
    fn count_for(&mut self, date: NaiveDate) -> u32 {
        self(date)
    }
}

/// `true` for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Randomized source: weekdays are busier than weekends.
pub struct RandomActivity<R> {
    rng: R,
    weekday: WeightedIndex<f64>,
    weekend: WeightedIndex<f64>,
}

impl<R: Rng> RandomActivity<R> {
    /// Wrap `rng` with the fixed weekday/weekend distributions.
    pub fn new(rng: R) -> EnderResult<Self> {
        let weekday = WeightedIndex::new(WEEKDAY_WEIGHTS)
            .map_err(|e| EnderError::validation(format!("weekday weights: {e}")))?;
        let weekend = WeightedIndex::new(WEEKEND_WEIGHTS)
            .map_err(|e| EnderError::validation(format!("weekend weights: {e}")))?;
        Ok(Self {
            rng,
            weekday,
            weekend,
        })
    }
}

impl<R: Rng> ActivitySource for RandomActivity<R> {
    fn count_for(&mut self, date: NaiveDate) -> u32 {
        if is_weekend(date) {
            WEEKEND_OUTCOMES[self.weekend.sample(&mut self.rng)]
        } else {
            WEEKDAY_OUTCOMES[self.weekday.sample(&mut self.rng)]
        }
    }
}

/// Produce [`DAYS_PER_YEAR`] consecutive records, the first one `DAYS_PER_YEAR` days before
/// `today`.
#[tracing::instrument(skip(source))]
pub fn generate_activity(source: &mut dyn ActivitySource, today: NaiveDate) -> Vec<ActivityRecord> {
    let start = today - Duration::days(DAYS_PER_YEAR as i64);
    let records: Vec<ActivityRecord> = (0..DAYS_PER_YEAR)
        .map(|i| {
            let date = start + Duration::days(i as i64);
            ActivityRecord::new(date, source.count_for(date))
        })
        .collect();

    let active = records.iter().filter(|r| r.tier().is_active()).count();
    tracing::debug!(%start, records = records.len(), active, "generated activity");
    records
}

#[cfg(test)]
#[path = "../../tests/unit/activity/generator.rs"]
mod tests;
