use chrono::NaiveDate;
use contracts::domain::a002_sales_record::SalesRecord;

use crate::shared::error::{AppError, AppResult};
use crate::shared::random::RandomSource;

/// Each tick moves revenue and orders by a factor from `[0.9, 1.1)`.
const JITTER_LOW: f64 = 0.9;
const JITTER_HIGH: f64 = 1.1;

/// Next simulated day derived from the latest one. Revenue and orders get
/// independent jitter draws; the date is `today`, not `last.date + 1`.
pub fn next_record(last: &SalesRecord, rng: &mut dyn RandomSource, today: NaiveDate) -> SalesRecord {
    let revenue = last.revenue * rng.uniform(JITTER_LOW, JITTER_HIGH);
    let orders = (last.orders as f64 * rng.uniform(JITTER_LOW, JITTER_HIGH)).floor() as u32;
    SalesRecord::new(today, revenue, orders)
}

/// One feed tick: appends the next record and trims the window to `window`
/// entries, oldest first. Several ticks on the same day produce duplicate dates.
pub fn append_tick(
    sales: &mut Vec<SalesRecord>,
    rng: &mut dyn RandomSource,
    today: NaiveDate,
    window: usize,
) -> AppResult<SalesRecord> {
    let last = sales.last().ok_or(AppError::EmptySeries)?;
    let record = next_record(last, rng, today);
    sales.push(record.clone());
    trim_window(sales, window);
    Ok(record)
}

/// Drops the oldest records until at most `window` remain. Returns how many were dropped.
pub fn trim_window(sales: &mut Vec<SalesRecord>, window: usize) -> usize {
    let excess = sales.len().saturating_sub(window);
    if excess > 0 {
        sales.drain(..excess);
    }
    excess
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::random::{seeded, FixedRandom};
    use chrono::Duration;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn thirty_days() -> Vec<SalesRecord> {
        (0..30)
            .map(|i| SalesRecord::new(day(2024, 1, 1) + Duration::days(i), 100.0 * (i + 1) as f64, 10))
            .collect()
    }

    #[test]
    fn test_tick_without_jitter_repeats_last_record() {
        let mut sales = vec![SalesRecord::new(day(2024, 1, 1), 1000.0, 10)];

        let appended = append_tick(&mut sales, &mut FixedRandom(1.0), day(2024, 1, 1), 30).unwrap();

        assert_eq!(appended, SalesRecord::new(day(2024, 1, 1), 1000.0, 10));
        assert_eq!(
            sales,
            vec![
                SalesRecord::new(day(2024, 1, 1), 1000.0, 10),
                SalesRecord::new(day(2024, 1, 1), 1000.0, 10),
            ]
        );
    }

    #[test]
    fn test_tick_on_empty_series_fails() {
        let mut sales = Vec::new();
        let result = append_tick(&mut sales, &mut FixedRandom(1.0), day(2024, 1, 1), 30);
        assert!(matches!(result, Err(AppError::EmptySeries)));
        assert!(sales.is_empty());
    }

    #[test]
    fn test_window_stays_full_and_evicts_oldest() {
        let original = thirty_days();

        for n in [1usize, 5, 30] {
            let mut sales = original.clone();
            for _ in 0..n {
                append_tick(&mut sales, &mut FixedRandom(1.0), day(2024, 3, 1), 30).unwrap();
            }
            assert_eq!(sales.len(), 30);
            assert_eq!(&sales[..30 - n], &original[n..]);
            assert!(sales[30 - n..].iter().all(|r| r.date == day(2024, 3, 1)));
        }
    }

    #[test]
    fn test_long_history_is_cut_to_window_on_first_tick() {
        let mut sales: Vec<SalesRecord> = (0..181)
            .map(|i| SalesRecord::new(day(2024, 1, 1) + Duration::days(i), 500.0, 20))
            .collect();

        append_tick(&mut sales, &mut seeded(1), day(2024, 6, 30), 30).unwrap();

        assert_eq!(sales.len(), 30);
        assert_eq!(sales.last().unwrap().date, day(2024, 6, 30));
        assert_eq!(sales[0].date, day(2024, 1, 1) + Duration::days(152));
    }

    #[test]
    fn test_jitter_stays_within_ten_percent() {
        let last = SalesRecord::new(day(2024, 1, 1), 1000.0, 100);
        let mut rng = seeded(11);
        for _ in 0..500 {
            let next = next_record(&last, &mut rng, day(2024, 1, 2));
            assert!((900.0..1100.0).contains(&next.revenue));
            assert!((90..110).contains(&next.orders));
        }
    }

    #[test]
    fn test_trim_window_reports_evictions() {
        let mut sales = thirty_days();
        assert_eq!(trim_window(&mut sales, 40), 0);
        assert_eq!(trim_window(&mut sales, 25), 5);
        assert_eq!(sales.len(), 25);
        assert_eq!(sales[0].date, day(2024, 1, 6));
    }
}
