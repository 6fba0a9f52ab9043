//! The fixed medicine formulary.

use chrono::Months;
use fake::Fake;
use fake::faker::company::en::CompanyName;
use rand::Rng;

use medseed_core::Medicine;

use crate::catalog::MEDICINES;
use crate::clock::RunClock;
use crate::errors::GenerateError;
use crate::sampling::date_between;

const REORDER_LEVEL: i32 = 50;

/// Every formulary entry is in stock and expires between six months and
/// three years out.
pub fn medicines<R: Rng + ?Sized>(
    rng: &mut R,
    clock: &RunClock,
) -> Result<Vec<Medicine>, GenerateError> {
    Ok(MEDICINES
        .iter()
        .map(|kind| Medicine {
            medicine_name: kind.name.to_string(),
            generic_name: kind.generic.to_string(),
            category: kind.category.to_string(),
            manufacturer: CompanyName().fake_with_rng(rng),
            unit_price: kind.unit_price,
            quantity_in_stock: rng.random_range(100..=1000),
            reorder_level: REORDER_LEVEL,
            expiry_date: date_between(
                rng,
                clock.today + Months::new(6),
                clock.today + Months::new(36),
            ),
        })
        .collect())
}
