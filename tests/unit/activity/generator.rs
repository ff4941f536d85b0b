use super::*;
use crate::foundation::core::Tier;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn produces_one_record_per_day_ending_yesterday() {
    let today = day(2025, 3, 1);
    let mut zero = |_: NaiveDate| 0u32;
    let records = generate_activity(&mut zero, today);

    assert_eq!(records.len(), DAYS_PER_YEAR);
    assert_eq!(records[0].date(), day(2024, 3, 1));
    assert_eq!(records[DAYS_PER_YEAR - 1].date(), day(2025, 2, 28));
    for pair in records.windows(2) {
        assert_eq!(pair[1].date() - pair[0].date(), Duration::days(1));
    }
}

#[test]
fn random_counts_stay_inside_their_outcome_sets() {
    let rng = ChaCha8Rng::seed_from_u64(7);
    let mut source = RandomActivity::new(rng).unwrap();
    let records = generate_activity(&mut source, day(2026, 10, 17));

    for r in &records {
        if is_weekend(r.date()) {
            assert!(WEEKEND_OUTCOMES.contains(&r.count()), "{r:?}");
        } else {
            assert!(WEEKDAY_OUTCOMES.contains(&r.count()), "{r:?}");
        }
        assert_eq!(r.tier(), Tier::from_count(r.count()));
    }
}

#[test]
fn weekends_never_exceed_three() {
    let rng = ChaCha8Rng::seed_from_u64(99);
    let mut source = RandomActivity::new(rng).unwrap();
    for offset in 0..400 {
        let date = day(2024, 1, 6) + Duration::days(offset * 7);
        assert_eq!(date.weekday(), Weekday::Sat);
        assert!(source.count_for(date) <= 3);
        assert!(source.count_for(date + Duration::days(1)) <= 3);
    }
}

#[test]
fn seeded_sources_are_reproducible() {
    let today = day(2026, 1, 1);
    let mut a = RandomActivity::new(ChaCha8Rng::seed_from_u64(3)).unwrap();
    let mut b = RandomActivity::new(ChaCha8Rng::seed_from_u64(3)).unwrap();
    assert_eq!(
        generate_activity(&mut a, today),
        generate_activity(&mut b, today)
    );
}

#[test]
fn closure_sources_see_every_date_in_order() {
    let mut seen = Vec::new();
    let mut spy = |d: NaiveDate| {
        seen.push(d);
        1u32
    };
    let records = generate_activity(&mut spy, day(2025, 6, 15));
    assert_eq!(seen.len(), DAYS_PER_YEAR);
    assert!(records.iter().all(|r| r.tier() == Tier::from_count(1)));
    assert_eq!(seen.first().copied(), Some(records[0].date()));
}

fn outcome_shares(source: &mut dyn ActivitySource, date: NaiveDate, outcomes: &[u32]) -> Vec<f64> {
    const DRAWS: usize = 100_000;
    let mut hits = vec![0usize; outcomes.len()];
    for _ in 0..DRAWS {
        let count = source.count_for(date);
        let slot = outcomes.iter().position(|&o| o == count).unwrap();
        hits[slot] += 1;
    }
    hits.into_iter().map(|h| h as f64 / DRAWS as f64).collect()
}

#[test]
fn outcome_frequencies_follow_the_weight_tables() {
    let wednesday = day(2026, 10, 14);
    let saturday = day(2026, 10, 17);
    assert!(!is_weekend(wednesday));
    assert!(is_weekend(saturday));

    let mut source = RandomActivity::new(ChaCha8Rng::seed_from_u64(2024)).unwrap();
    let weekday = outcome_shares(&mut source, wednesday, &WEEKDAY_OUTCOMES);
    for ((share, weight), outcome) in weekday.iter().zip(WEEKDAY_WEIGHTS).zip(WEEKDAY_OUTCOMES) {
        assert!((share - weight).abs() < 0.01, "weekday {outcome}: {share}");
    }

    let weekend = outcome_shares(&mut source, saturday, &WEEKEND_OUTCOMES);
    for ((share, weight), outcome) in weekend.iter().zip(WEEKEND_WEIGHTS).zip(WEEKEND_OUTCOMES) {
        assert!((share - weight).abs() < 0.01, "weekend {outcome}: {share}");
    }
}
