//! Consistency rules shared by every entity generator.
//!
//! Generators call into this module instead of open-coding status thresholds,
//! conditional field population, monetary rounding, or weighted draws, so the
//! invariants stay in one place and are testable without any generator.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Admissions older than this many days are discharged.
pub const ADMISSION_SETTLE_DAYS: i64 = 7;
/// Lab tests older than this many days carry a completed result.
pub const LAB_RESULT_SETTLE_DAYS: i64 = 3;
/// Bills older than this are either paid or overdue.
pub const BILL_OVERDUE_AFTER_DAYS: i64 = 30;
/// Bills older than this but not yet overdue may be partially settled.
pub const BILL_SETTLING_AFTER_DAYS: i64 = 7;
/// Payment deadline added to every bill date.
pub const BILL_DUE_OFFSET_DAYS: i64 = 30;
/// Tax rate applied to the discounted subtotal.
pub const TAX_RATE: f64 = 0.05;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("weighted choice needs at least one outcome with positive weight")]
    EmptyDistribution,
    #[error("cannot sample from an empty set")]
    EmptySet,
}

/// True when `date` lies strictly after the run date.
pub fn is_future(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// True when `date` lies more than `days` days before the run date.
pub fn older_than(date: NaiveDate, today: NaiveDate, days: i64) -> bool {
    today - date > TimeDelta::days(days)
}

/// Datetime variant of [`older_than`].
pub fn older_than_at(at: NaiveDateTime, now: NaiveDateTime, days: i64) -> bool {
    now - at > TimeDelta::days(days)
}

/// Populate a field only when its governing condition holds.
///
/// The absence case is an explicit `None`; callers must not substitute
/// placeholder values for unpopulated fields.
pub fn only_if<T, F: FnOnce() -> T>(condition: bool, produce: F) -> Option<T> {
    condition.then(produce)
}

/// Round to two decimal places, ties to even.
///
/// Every monetary value in the run goes through this exact rounding, so the
/// persisted figures agree with the derived totals to the cent.
pub fn round_money(value: f64) -> f64 {
    round_decimals(value, 2)
}

/// Round to `places` decimal places, ties to even.
pub fn round_decimals(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    (value * factor).round_ties_even() / factor
}

/// Monetary breakdown of a bill, all figures rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillTotals {
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    pub total: f64,
}

/// Derive a bill's figures from its subtotal and the applicable rates.
///
/// Tax is computed on the discounted subtotal; the invariant
/// `total = subtotal - discount + tax` holds on the rounded figures.
pub fn bill_totals(subtotal: f64, discount_rate: f64) -> BillTotals {
    let subtotal = round_money(subtotal);
    let discount = round_money(subtotal * discount_rate);
    let tax = round_money((subtotal - discount) * TAX_RATE);
    BillTotals {
        subtotal,
        discount,
        tax,
        total: round_money(subtotal - discount + tax),
    }
}

/// Draw one outcome from a finite set with relative weights.
///
/// Weights need not be normalized; zero-weight outcomes are never drawn.
pub fn weighted_choice<'a, T, R>(rng: &mut R, outcomes: &'a [(T, u32)]) -> Result<&'a T, RulesError>
where
    R: Rng + ?Sized,
{
    let total: u64 = outcomes.iter().map(|(_, weight)| u64::from(*weight)).sum();
    if total == 0 {
        return Err(RulesError::EmptyDistribution);
    }

    let mut roll = rng.random_range(0..total);
    for (outcome, weight) in outcomes {
        let weight = u64::from(*weight);
        if roll < weight {
            return Ok(outcome);
        }
        roll -= weight;
    }

    // Unreachable: roll < total and the weights sum to total.
    Err(RulesError::EmptyDistribution)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn future_is_strict() {
        let today = date(2026, 8, 5);
        assert!(is_future(date(2026, 8, 6), today));
        assert!(!is_future(today, today));
        assert!(!is_future(date(2026, 8, 4), today));
    }

    #[test]
    fn older_than_is_strict() {
        let today = date(2026, 8, 5);
        assert!(older_than(date(2026, 7, 1), today, 7));
        assert!(!older_than(date(2026, 7, 29), today, 7));
        assert!(older_than(date(2026, 7, 28), today, 7));
    }

    #[test]
    fn only_if_yields_none_when_condition_fails() {
        assert_eq!(only_if(true, || 7), Some(7));
        let absent: Option<i32> = only_if(false, || unreachable!());
        assert_eq!(absent, None);
    }

    #[test]
    fn money_rounds_ties_to_even() {
        assert_eq!(round_money(2.675), 2.68);
        assert_eq!(round_money(2.665), 2.66);
        assert_eq!(round_money(945.0), 945.0);
        assert_eq!(round_decimals(98.64, 1), 98.6);
    }

    #[test]
    fn bill_totals_matches_reference_scenario() {
        // subtotal 1000, 10% discount, 5% tax on 900 => 945.00
        let totals = bill_totals(1000.0, 0.10);
        assert_eq!(totals.discount, 100.0);
        assert_eq!(totals.tax, 45.0);
        assert_eq!(totals.total, 945.0);
    }

    #[test]
    fn bill_totals_invariant_holds_on_rounded_figures() {
        for subtotal in [500.0, 700.0, 1500.0, 25000.0] {
            for rate in [0.0, 0.05, 0.10] {
                let t = bill_totals(subtotal, rate);
                assert!((t.total - (t.subtotal - t.discount + t.tax)).abs() < 0.01);
            }
        }
    }

    #[test]
    fn weighted_choice_rejects_zero_total() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let empty: &[(&str, u32)] = &[];
        assert_eq!(
            weighted_choice(&mut rng, empty).unwrap_err(),
            RulesError::EmptyDistribution
        );
        assert_eq!(
            weighted_choice(&mut rng, &[("a", 0), ("b", 0)]).unwrap_err(),
            RulesError::EmptyDistribution
        );
    }

    #[test]
    fn weighted_choice_skips_zero_weight_outcomes() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..1000 {
            let picked = weighted_choice(&mut rng, &[("never", 0), ("always", 1)]).unwrap();
            assert_eq!(*picked, "always");
        }
    }

    #[test]
    fn weighted_choice_long_run_frequencies_match_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let outcomes = [("a", 85_u32), ("b", 10), ("c", 5)];
        let mut counts: HashMap<&str, u32> = HashMap::new();
        let draws: u32 = 20_000;
        for _ in 0..draws {
            let picked = weighted_choice(&mut rng, &outcomes).unwrap();
            *counts.entry(picked).or_insert(0) += 1;
        }
        let share = |key: &str| f64::from(counts[key]) / f64::from(draws);
        assert!((share("a") - 0.85).abs() < 0.02);
        assert!((share("b") - 0.10).abs() < 0.02);
        assert!((share("c") - 0.05).abs() < 0.02);
    }
}
