//! Doctors, patients, and staff.

use std::collections::HashSet;

use chrono::{Months, TimeDelta};
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::address::en::{BuildingNumber, StreetName, ZipCode};
use fake::faker::name::en::{FirstName, LastName, Name};
use rand::Rng;

use medseed_core::rules::{only_if, weighted_choice};
use medseed_core::status::{ActiveStatus, DoctorStatus, Gender, Shift, StaffRole};
use medseed_core::{Doctor, IdRange, Patient, StaffMember};

use crate::catalog::{
    salary_range, specialization_for, BLOOD_GROUPS, CITIES, DEPARTMENTS, STAFF_ROLES, STATE,
};
use crate::clock::RunClock;
use crate::errors::GenerateError;
use crate::sampling::{date_between, email_stem, phone, pick};

const EMAIL_DOMAIN: &str = "medseed.health";

const DOCTOR_FEES: &[f64] = &[500.0, 700.0, 1000.0, 1500.0, 2000.0];
const DOCTOR_STATUS_WEIGHTS: &[(DoctorStatus, u32)] =
    &[(DoctorStatus::Active, 95), (DoctorStatus::OnLeave, 5)];

/// Doctors are assigned round-robin across departments so every department
/// is staffed, and each practices its department's specialization.
pub fn doctors<R: Rng + ?Sized>(
    rng: &mut R,
    clock: &RunClock,
    count: u32,
    departments: IdRange,
) -> Result<Vec<Doctor>, GenerateError> {
    let mut taken_emails = HashSet::new();
    let mut rows = Vec::with_capacity(count as usize);

    for i in 0..count {
        let dept_index = i as usize % DEPARTMENTS.len();
        let first_name: String = FirstName().fake_with_rng(rng);
        let last_name: String = LastName().fake_with_rng(rng);

        rows.push(Doctor {
            email: unique_email(&first_name, &last_name, &mut taken_emails),
            phone: phone(rng),
            specialization: specialization_for(DEPARTMENTS[dept_index]).to_string(),
            department_id: departments.start + dept_index as i32,
            experience_years: rng.random_range(2..=25),
            consultation_fee: *pick(rng, DOCTOR_FEES)?,
            hire_date: date_between(
                rng,
                clock.today - Months::new(120),
                clock.today - Months::new(12),
            ),
            status: *weighted_choice(rng, DOCTOR_STATUS_WEIGHTS)?,
            first_name,
            last_name,
        });
    }

    Ok(rows)
}

/// The `email` column is unique; collisions get a numeric suffix.
fn unique_email(first: &str, last: &str, taken: &mut HashSet<String>) -> String {
    let stem = format!("{}.{}", email_stem(first), email_stem(last));
    let mut candidate = format!("{stem}@{EMAIL_DOMAIN}");
    let mut suffix = 1;
    while !taken.insert(candidate.clone()) {
        suffix += 1;
        candidate = format!("{stem}{suffix}@{EMAIL_DOMAIN}");
    }
    candidate
}

const GENDERS: &[Gender] = &[Gender::Male, Gender::Female];
const PATIENT_STATUS_WEIGHTS: &[(ActiveStatus, u32)] =
    &[(ActiveStatus::Active, 95), (ActiveStatus::Inactive, 5)];
/// Patient ages span 1..=90 years.
const MIN_AGE_DAYS: i64 = 365;
const MAX_AGE_DAYS: i64 = 90 * 365;
const PATIENT_EMAIL_RATE: f64 = 0.7;

pub fn patients<R: Rng + ?Sized>(
    rng: &mut R,
    clock: &RunClock,
    count: u32,
) -> Result<Vec<Patient>, GenerateError> {
    let mut rows = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let gender = *pick(rng, GENDERS)?;
        let date_of_birth = clock.today - TimeDelta::days(rng.random_range(MIN_AGE_DAYS..=MAX_AGE_DAYS));
        let has_email = rng.random_bool(PATIENT_EMAIL_RATE);
        let email: Option<String> = only_if(has_email, || SafeEmail().fake_with_rng(rng));
        let building: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        let zip: String = ZipCode().fake_with_rng(rng);

        // A patient registered within the last two years, but never before
        // they were born.
        let earliest_registration = (clock.today - Months::new(24)).max(date_of_birth);

        rows.push(Patient {
            first_name: FirstName().fake_with_rng(rng),
            last_name: LastName().fake_with_rng(rng),
            date_of_birth,
            gender,
            blood_group: pick(rng, BLOOD_GROUPS)?.to_string(),
            phone: phone(rng),
            email,
            address: format!("{building} {street}"),
            city: pick(rng, CITIES)?.to_string(),
            state: STATE.to_string(),
            zip_code: zip.chars().take(10).collect(),
            emergency_contact_name: Name().fake_with_rng(rng),
            emergency_contact_phone: phone(rng),
            registration_date: date_between(rng, earliest_registration, clock.today),
            status: *weighted_choice(rng, PATIENT_STATUS_WEIGHTS)?,
        });
    }

    Ok(rows)
}

const SHIFTS: &[Shift] = &[Shift::Morning, Shift::Afternoon, Shift::Night];
const STAFF_STATUS_WEIGHTS: &[(ActiveStatus, u32)] =
    &[(ActiveStatus::Active, 95), (ActiveStatus::Inactive, 5)];

pub fn staff<R: Rng + ?Sized>(
    rng: &mut R,
    clock: &RunClock,
    count: u32,
    departments: IdRange,
) -> Result<Vec<StaffMember>, GenerateError> {
    let mut rows = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let role: StaffRole = *pick(rng, STAFF_ROLES)?;
        let (salary_low, salary_high) = salary_range(role);

        rows.push(StaffMember {
            first_name: FirstName().fake_with_rng(rng),
            last_name: LastName().fake_with_rng(rng),
            role,
            department_id: departments.pick(rng),
            phone: phone(rng),
            email: SafeEmail().fake_with_rng(rng),
            hire_date: date_between(
                rng,
                clock.today - Months::new(96),
                clock.today - Months::new(1),
            ),
            salary: rng.random_range(salary_low..=salary_high),
            shift: *pick(rng, SHIFTS)?,
            status: *weighted_choice(rng, STAFF_STATUS_WEIGHTS)?,
        });
    }

    Ok(rows)
}
