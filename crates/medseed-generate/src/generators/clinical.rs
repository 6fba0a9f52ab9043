//! Appointments, medical records, lab tests, and admissions.

use chrono::{Months, NaiveTime, TimeDelta};
use fake::Fake;
use fake::faker::lorem::en::Sentence;
use rand::Rng;

use medseed_core::rules::{
    is_future, older_than, older_than_at, only_if, round_decimals, weighted_choice,
    ADMISSION_SETTLE_DAYS, LAB_RESULT_SETTLE_DAYS,
};
use medseed_core::status::{
    AdmissionStatus, AdmissionType, AppointmentStatus, AppointmentType, LabTestStatus,
};
use medseed_core::{Admission, Appointment, IdRange, LabTest, MedicalRecord};

use crate::catalog::{DIAGNOSES, LAB_NORMAL_RANGE, LAB_TESTS, SYMPTOMS, TIME_SLOTS};
use crate::clock::RunClock;
use crate::errors::GenerateError;
use crate::sampling::{date_between, date_time_between, pick, pick_distinct};

const TYPE_WEIGHTS: &[(AppointmentType, u32)] = &[
    (AppointmentType::Consultation, 50),
    (AppointmentType::FollowUp, 25),
    (AppointmentType::RoutineCheckup, 20),
    (AppointmentType::Emergency, 5),
];
const PAST_STATUS_WEIGHTS: &[(AppointmentStatus, u32)] = &[
    (AppointmentStatus::Completed, 85),
    (AppointmentStatus::Cancelled, 10),
    (AppointmentStatus::NoShow, 5),
];

/// Appointment dates span two years back through one month ahead; only the
/// future ones are `Scheduled`.
pub fn appointments<R: Rng + ?Sized>(
    rng: &mut R,
    clock: &RunClock,
    count: u32,
    patients: IdRange,
    doctors: IdRange,
) -> Result<Vec<Appointment>, GenerateError> {
    let mut rows = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let appointment_date = date_between(
            rng,
            clock.today - Months::new(24),
            clock.today + Months::new(1),
        );
        let status = if is_future(appointment_date, clock.today) {
            AppointmentStatus::Scheduled
        } else {
            *weighted_choice(rng, PAST_STATUS_WEIGHTS)?
        };
        let (hour, minute) = *pick(rng, TIME_SLOTS)?;
        let symptom_count = rng.random_range(1..=3);
        let symptoms: Vec<&str> = pick_distinct(rng, SYMPTOMS, symptom_count)?
            .into_iter()
            .copied()
            .collect();

        rows.push(Appointment {
            patient_id: patients.pick(rng),
            doctor_id: doctors.pick(rng),
            appointment_date,
            appointment_time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default(),
            appointment_type: *weighted_choice(rng, TYPE_WEIGHTS)?,
            status,
            symptoms: symptoms.join(", "),
        });
    }

    Ok(rows)
}

const FOLLOW_UP_OFFSETS: &[i64] = &[7, 14, 30];
const APPOINTMENT_LINK_RATE: f64 = 0.9;
const FOLLOW_UP_RATE: f64 = 0.7;

pub fn medical_records<R: Rng + ?Sized>(
    rng: &mut R,
    clock: &RunClock,
    count: u32,
    patients: IdRange,
    doctors: IdRange,
    appointments: IdRange,
) -> Result<Vec<MedicalRecord>, GenerateError> {
    let mut rows = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let record_date = date_between(rng, clock.today - Months::new(24), clock.today);
        let linked = !appointments.is_empty() && rng.random_bool(APPOINTMENT_LINK_RATE);
        let appointment_id = only_if(linked, || appointments.pick(rng));
        let follow_up_date = if rng.random_bool(FOLLOW_UP_RATE) {
            Some(record_date + TimeDelta::days(*pick(rng, FOLLOW_UP_OFFSETS)?))
        } else {
            None
        };

        rows.push(MedicalRecord {
            patient_id: patients.pick(rng),
            doctor_id: doctors.pick(rng),
            appointment_id,
            diagnosis: pick(rng, DIAGNOSES)?.to_string(),
            treatment: Sentence(4..8).fake_with_rng(rng),
            prescription: Sentence(4..8).fake_with_rng(rng),
            blood_pressure: format!(
                "{}/{}",
                rng.random_range(100..=140),
                rng.random_range(60..=90)
            ),
            heart_rate: rng.random_range(60..=100),
            temperature: round_decimals(rng.random_range(97.0..100.0), 1),
            weight: round_decimals(rng.random_range(40.0..100.0), 1),
            record_date,
            follow_up_date,
        });
    }

    Ok(rows)
}

const OPEN_TEST_STATUSES: &[LabTestStatus] =
    &[LabTestStatus::Pending, LabTestStatus::InProgress];

/// Tests older than the settle window always carry a completed result dated
/// one to three days after the sample was taken.
pub fn lab_tests<R: Rng + ?Sized>(
    rng: &mut R,
    clock: &RunClock,
    count: u32,
    patients: IdRange,
    doctors: IdRange,
) -> Result<Vec<LabTest>, GenerateError> {
    let mut rows = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let kind = *pick(rng, LAB_TESTS)?;
        let test_date = date_between(rng, clock.today - Months::new(24), clock.today);

        let (status, result_date, result_value) =
            if older_than(test_date, clock.today, LAB_RESULT_SETTLE_DAYS) {
                let resulted = test_date + TimeDelta::days(rng.random_range(1..=3));
                let value = format!("{:.1}", rng.random_range(50.0..150.0));
                (LabTestStatus::Completed, Some(resulted), Some(value))
            } else {
                (*pick(rng, OPEN_TEST_STATUSES)?, None, None)
            };

        rows.push(LabTest {
            patient_id: patients.pick(rng),
            doctor_id: doctors.pick(rng),
            test_name: kind.name.to_string(),
            test_category: kind.category.to_string(),
            test_date,
            result_date,
            result_value,
            normal_range: LAB_NORMAL_RANGE.to_string(),
            status,
            cost: kind.cost,
        });
    }

    Ok(rows)
}

const ADMISSION_TYPE_WEIGHTS: &[(AdmissionType, u32)] = &[
    (AdmissionType::Emergency, 30),
    (AdmissionType::Planned, 60),
    (AdmissionType::Transfer, 10),
];

/// Stays older than the settle window are discharged one to fourteen days
/// after admission; newer stays are still open.
pub fn admissions<R: Rng + ?Sized>(
    rng: &mut R,
    clock: &RunClock,
    count: u32,
    patients: IdRange,
    doctors: IdRange,
    beds: IdRange,
) -> Result<Vec<Admission>, GenerateError> {
    let mut rows = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let admission_date =
            date_time_between(rng, clock.now - Months::new(24), clock.now);

        let (status, discharge_date) =
            if older_than_at(admission_date, clock.now, ADMISSION_SETTLE_DAYS) {
                let stay = TimeDelta::days(rng.random_range(1..=14));
                (AdmissionStatus::Discharged, Some(admission_date + stay))
            } else {
                (AdmissionStatus::Admitted, None)
            };

        rows.push(Admission {
            patient_id: patients.pick(rng),
            doctor_id: doctors.pick(rng),
            bed_id: beds.pick(rng),
            admission_date,
            discharge_date,
            admission_type: *weighted_choice(rng, ADMISSION_TYPE_WEIGHTS)?,
            diagnosis: pick(rng, DIAGNOSES)?.to_string(),
            status,
        });
    }

    Ok(rows)
}
