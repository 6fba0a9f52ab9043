//! Bills, insurance providers, and insurance claims.

use chrono::{Months, TimeDelta};
use rand::Rng;

use medseed_core::rules::{
    bill_totals, older_than, only_if, round_money, weighted_choice, BILL_DUE_OFFSET_DAYS,
    BILL_OVERDUE_AFTER_DAYS, BILL_SETTLING_AFTER_DAYS,
};
use medseed_core::status::{ClaimStatus, PaymentMethod, PaymentStatus};
use medseed_core::{Bill, IdRange, InsuranceClaim, InsuranceProvider};

use crate::catalog::INSURANCE_PROVIDERS;
use crate::clock::RunClock;
use crate::errors::GenerateError;
use crate::sampling::{date_between, email_stem, phone, pick};

const SUBTOTAL_MENU: &[f64] = &[
    500.0, 700.0, 1000.0, 1500.0, 2000.0, 3000.0, 5000.0, 8000.0, 15_000.0, 25_000.0,
];
/// Half of all bills carry no discount.
const DISCOUNT_RATES: &[f64] = &[0.0, 0.0, 0.05, 0.10];
const PAYMENT_METHODS: &[PaymentMethod] = &[
    PaymentMethod::Cash,
    PaymentMethod::Card,
    PaymentMethod::Insurance,
    PaymentMethod::Online,
];
const OVERDUE_BUCKET_WEIGHTS: &[(PaymentStatus, u32)] =
    &[(PaymentStatus::Paid, 85), (PaymentStatus::Overdue, 15)];
const SETTLING_BUCKET_WEIGHTS: &[(PaymentStatus, u32)] = &[
    (PaymentStatus::Paid, 70),
    (PaymentStatus::Partial, 15),
    (PaymentStatus::Pending, 15),
];
const FRESH_BUCKET_WEIGHTS: &[(PaymentStatus, u32)] =
    &[(PaymentStatus::Paid, 50), (PaymentStatus::Pending, 50)];
const APPOINTMENT_LINK_RATE: f64 = 0.8;
const ADMISSION_LINK_RATE: f64 = 0.3;

/// A bill's payment status is drawn from an age-dependent bucket, and the
/// payment fields exist exactly when the bill is paid.
pub fn bills<R: Rng + ?Sized>(
    rng: &mut R,
    clock: &RunClock,
    count: u32,
    patients: IdRange,
    appointments: IdRange,
    admissions: IdRange,
) -> Result<Vec<Bill>, GenerateError> {
    let mut rows = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let bill_date = date_between(rng, clock.today - Months::new(24), clock.today);
        let totals = bill_totals(*pick(rng, SUBTOTAL_MENU)?, *pick(rng, DISCOUNT_RATES)?);

        let bucket = if older_than(bill_date, clock.today, BILL_OVERDUE_AFTER_DAYS) {
            OVERDUE_BUCKET_WEIGHTS
        } else if older_than(bill_date, clock.today, BILL_SETTLING_AFTER_DAYS) {
            SETTLING_BUCKET_WEIGHTS
        } else {
            FRESH_BUCKET_WEIGHTS
        };
        let payment_status = *weighted_choice(rng, bucket)?;

        let (payment_method, payment_date) = if payment_status == PaymentStatus::Paid {
            let method = *pick(rng, PAYMENT_METHODS)?;
            let paid_on = bill_date + TimeDelta::days(rng.random_range(0..=15));
            (Some(method), Some(paid_on))
        } else {
            (None, None)
        };

        let linked_appointment =
            !appointments.is_empty() && rng.random_bool(APPOINTMENT_LINK_RATE);
        let linked_admission = !admissions.is_empty() && rng.random_bool(ADMISSION_LINK_RATE);

        rows.push(Bill {
            patient_id: patients.pick(rng),
            appointment_id: only_if(linked_appointment, || appointments.pick(rng)),
            admission_id: only_if(linked_admission, || admissions.pick(rng)),
            bill_date,
            subtotal: totals.subtotal,
            tax: totals.tax,
            discount: totals.discount,
            total_amount: totals.total,
            payment_status,
            payment_method,
            payment_date,
            due_date: bill_date + TimeDelta::days(BILL_DUE_OFFSET_DAYS),
        });
    }

    Ok(rows)
}

/// The six catalog providers with synthetic contact details.
pub fn insurance_providers<R: Rng + ?Sized>(
    rng: &mut R,
) -> Result<Vec<InsuranceProvider>, GenerateError> {
    Ok(INSURANCE_PROVIDERS
        .iter()
        .map(|provider| InsuranceProvider {
            provider_name: provider.name.to_string(),
            contact_phone: phone(rng),
            email: format!("claims@{}.in", email_stem(provider.name)),
            coverage_percentage: provider.coverage_percentage,
        })
        .collect())
}

const CLAIM_STATUS_WEIGHTS: &[(ClaimStatus, u32)] = &[
    (ClaimStatus::Submitted, 10),
    (ClaimStatus::Processing, 15),
    (ClaimStatus::Approved, 25),
    (ClaimStatus::Rejected, 10),
    (ClaimStatus::Paid, 40),
];
const REJECTION_REASON: &str = "Documentation incomplete";

/// Settled claims approve between 60% and 100% of the claimed amount, one to
/// four weeks after submission; rejected claims carry the standard reason.
pub fn insurance_claims<R: Rng + ?Sized>(
    rng: &mut R,
    clock: &RunClock,
    count: u32,
    bills: IdRange,
    providers: IdRange,
) -> Result<Vec<InsuranceClaim>, GenerateError> {
    let mut rows = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let rupees: i32 = rng.random_range(5000..=50_000);
        let claim_amount = f64::from(rupees);
        let status = *weighted_choice(rng, CLAIM_STATUS_WEIGHTS)?;
        let submission_date = date_between(rng, clock.today - Months::new(12), clock.today);

        let (approved_amount, approval_date) = if status.is_settled() {
            let fraction = rng.random_range(0.6..=1.0);
            let settled_on = submission_date + TimeDelta::days(rng.random_range(7..=30));
            (Some(round_money(claim_amount * fraction)), Some(settled_on))
        } else {
            (None, None)
        };

        rows.push(InsuranceClaim {
            bill_id: bills.pick(rng),
            insurance_id: providers.pick(rng),
            claim_amount,
            approved_amount,
            status,
            submission_date,
            approval_date,
            rejection_reason: only_if(status == ClaimStatus::Rejected, || {
                REJECTION_REASON.to_string()
            }),
        });
    }

    Ok(rows)
}
