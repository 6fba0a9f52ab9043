//! Ranged and categorical sampling helpers shared by the generators.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use fake::Fake;
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;
use rand::seq::index;

use medseed_core::rules::RulesError;

/// Uniform draw from a non-empty slice.
pub fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Result<&'a T, RulesError> {
    if items.is_empty() {
        return Err(RulesError::EmptySet);
    }
    Ok(&items[rng.random_range(0..items.len())])
}

/// Uniform draw of `count` distinct elements, in stable draw order.
pub fn pick_distinct<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    items: &'a [T],
    count: usize,
) -> Result<Vec<&'a T>, RulesError> {
    if count > items.len() {
        return Err(RulesError::EmptySet);
    }
    Ok(index::sample(rng, items.len(), count)
        .iter()
        .map(|idx| &items[idx])
        .collect())
}

/// Uniform date in `min..=max`.
pub fn date_between<R: Rng + ?Sized>(rng: &mut R, min: NaiveDate, max: NaiveDate) -> NaiveDate {
    let span = (max - min).num_days().max(0);
    min + TimeDelta::days(rng.random_range(0..=span))
}

/// Uniform datetime in `min..=max`, second resolution.
pub fn date_time_between<R: Rng + ?Sized>(
    rng: &mut R,
    min: NaiveDateTime,
    max: NaiveDateTime,
) -> NaiveDateTime {
    let span = (max - min).num_seconds().max(0);
    min + TimeDelta::seconds(rng.random_range(0..=span))
}

/// Synthetic phone number clipped to the column width.
pub fn phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number: String = PhoneNumber().fake_with_rng(rng);
    number.chars().take(15).collect()
}

/// Lowercased alphabetic stem of a name, for building email addresses.
pub fn email_stem(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
