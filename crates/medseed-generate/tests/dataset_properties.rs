use chrono::{Datelike, NaiveDate, NaiveDateTime};

use medseed_core::status::{AppointmentStatus, ClaimStatus, LabTestStatus, PaymentStatus};
use medseed_core::{EntityCounts, IdRange, SeedConfig};
use medseed_generate::{MemorySink, RunClock, SeedEngine};

fn clock() -> RunClock {
    let now: NaiveDateTime = NaiveDate::from_ymd_opt(2026, 8, 5)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    RunClock::fixed(now)
}

fn small_counts() -> EntityCounts {
    EntityCounts {
        doctors: 20,
        patients: 300,
        appointments: 800,
        medical_records: 500,
        admissions: 150,
        bills: 600,
        lab_tests: 400,
        staff: 30,
        insurance_claims: 120,
    }
}

async fn seeded_run(seed: u64, counts: EntityCounts) -> MemorySink {
    let config = SeedConfig {
        seed,
        counts,
        ..SeedConfig::default()
    };
    let engine = SeedEngine::new(config, clock());
    let mut sink = MemorySink::new();
    engine.run(&mut sink).await.expect("seed run succeeds");
    sink
}

#[tokio::test]
async fn same_seed_reproduces_the_dataset_field_for_field() {
    let first = seeded_run(2026, small_counts()).await;
    let second = seeded_run(2026, small_counts()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn different_seeds_diverge() {
    let first = seeded_run(2026, small_counts()).await;
    let second = seeded_run(2027, small_counts()).await;
    assert_ne!(first, second);
}

#[tokio::test]
async fn appointments_are_scheduled_iff_in_the_future() {
    let sink = seeded_run(7, small_counts()).await;
    let today = clock().today;

    let mut seen_future = false;
    let mut seen_past = false;
    for appointment in sink.appointments() {
        let future = appointment.appointment_date > today;
        seen_future |= future;
        seen_past |= !future;
        assert_eq!(
            appointment.status == AppointmentStatus::Scheduled,
            future,
            "appointment on {} has status {}",
            appointment.appointment_date,
            appointment.status
        );
    }
    // The sampled window spans both sides of "now".
    assert!(seen_future && seen_past);
}

#[tokio::test]
async fn bill_money_and_payment_fields_are_consistent() {
    let sink = seeded_run(8, small_counts()).await;

    for bill in sink.bills() {
        let derived = bill.subtotal - bill.discount + bill.tax;
        assert!(
            (bill.total_amount - derived).abs() < 0.01,
            "total {} != {} - {} + {}",
            bill.total_amount,
            bill.subtotal,
            bill.discount,
            bill.tax
        );
        let paid = bill.payment_status == PaymentStatus::Paid;
        assert_eq!(bill.payment_method.is_some(), paid);
        assert_eq!(bill.payment_date.is_some(), paid);
        assert_eq!(bill.due_date, bill.bill_date + chrono::TimeDelta::days(30));
        if let Some(paid_on) = bill.payment_date {
            assert!(paid_on >= bill.bill_date);
        }
    }
}

#[tokio::test]
async fn admission_discharge_fields_follow_status() {
    let sink = seeded_run(9, small_counts()).await;

    for admission in sink.admissions() {
        match admission.status {
            medseed_core::status::AdmissionStatus::Discharged => {
                let discharged = admission.discharge_date.expect("discharged stays have a date");
                assert!(discharged > admission.admission_date);
            }
            medseed_core::status::AdmissionStatus::Admitted => {
                assert!(admission.discharge_date.is_none());
            }
        }
    }
}

#[tokio::test]
async fn claim_fields_follow_status() {
    let sink = seeded_run(10, small_counts()).await;

    for claim in sink.insurance_claims() {
        let settled = matches!(claim.status, ClaimStatus::Approved | ClaimStatus::Paid);
        assert_eq!(claim.approved_amount.is_some(), settled);
        assert_eq!(claim.approval_date.is_some(), settled);
        assert_eq!(
            claim.rejection_reason.is_some(),
            claim.status == ClaimStatus::Rejected
        );
        if let Some(approved) = claim.approved_amount {
            assert!(approved <= claim.claim_amount);
            assert!(approved >= 0.0);
        }
        if let Some(approved_on) = claim.approval_date {
            assert!(approved_on > claim.submission_date);
        }
    }
}

#[tokio::test]
async fn every_reference_resolves_to_a_committed_parent() {
    let counts = small_counts();
    let sink = seeded_run(11, counts).await;

    let departments = IdRange::first_n(sink.departments().len());
    let doctors = IdRange::first_n(sink.doctors().len());
    let patients = IdRange::first_n(sink.patients().len());
    let appointments = IdRange::first_n(sink.appointments().len());
    let wards = IdRange::first_n(sink.wards().len());
    let beds = IdRange::first_n(sink.beds().len());
    let admissions = IdRange::first_n(sink.admissions().len());
    let bills = IdRange::first_n(sink.bills().len());
    let providers = IdRange::first_n(sink.insurance_providers().len());

    for doctor in sink.doctors() {
        assert!(departments.contains(doctor.department_id));
    }
    for staff in sink.staff() {
        assert!(departments.contains(staff.department_id));
    }
    for ward in sink.wards() {
        assert!(departments.contains(ward.department_id));
    }
    for bed in sink.beds() {
        assert!(wards.contains(bed.ward_id));
    }
    for appointment in sink.appointments() {
        assert!(patients.contains(appointment.patient_id));
        assert!(doctors.contains(appointment.doctor_id));
    }
    for record in sink.medical_records() {
        assert!(patients.contains(record.patient_id));
        assert!(doctors.contains(record.doctor_id));
        if let Some(appointment_id) = record.appointment_id {
            assert!(appointments.contains(appointment_id));
        }
    }
    for admission in sink.admissions() {
        assert!(patients.contains(admission.patient_id));
        assert!(doctors.contains(admission.doctor_id));
        assert!(beds.contains(admission.bed_id));
    }
    for bill in sink.bills() {
        assert!(patients.contains(bill.patient_id));
        if let Some(appointment_id) = bill.appointment_id {
            assert!(appointments.contains(appointment_id));
        }
        if let Some(admission_id) = bill.admission_id {
            assert!(admissions.contains(admission_id));
        }
    }
    for test in sink.lab_tests() {
        assert!(patients.contains(test.patient_id));
        assert!(doctors.contains(test.doctor_id));
    }
    for claim in sink.insurance_claims() {
        assert!(bills.contains(claim.bill_id));
        assert!(providers.contains(claim.insurance_id));
    }
}

#[tokio::test]
async fn default_patient_run_matches_the_reference_scenario() {
    let sink = seeded_run(2026, EntityCounts::default()).await;
    let today = clock().today;

    assert_eq!(sink.patients().len(), 5000);
    for patient in sink.patients() {
        let age_days = (today - patient.date_of_birth).num_days();
        assert!(age_days >= 365, "patient younger than a year");
        assert!(age_days <= 90 * 365, "patient older than ninety years");
        assert!(patient.registration_date >= patient.date_of_birth);
        assert!(patient.registration_date <= today);
    }
}

#[tokio::test]
async fn settled_lab_tests_carry_results() {
    let sink = seeded_run(12, small_counts()).await;
    let today = clock().today;

    for test in sink.lab_tests() {
        let settled = (today - test.test_date).num_days() > 3;
        if settled {
            assert_eq!(test.status, LabTestStatus::Completed);
            let resulted = test.result_date.expect("completed tests carry a result date");
            assert!(resulted > test.test_date);
            assert!(test.result_value.is_some());
        } else {
            assert_ne!(test.status, LabTestStatus::Completed);
            assert!(test.result_date.is_none());
            assert!(test.result_value.is_none());
        }
    }
}

#[tokio::test]
async fn ward_layout_is_internally_consistent() {
    let sink = seeded_run(13, small_counts()).await;

    let wards = sink.wards();
    let beds = sink.beds();
    assert_eq!(wards.len(), 6);
    assert_eq!(beds.len(), 83);

    for (index, ward) in wards.iter().enumerate() {
        let ward_id = index as i32 + 1;
        let in_ward: Vec<_> = beds.iter().filter(|bed| bed.ward_id == ward_id).collect();
        assert_eq!(in_ward.len() as i32, ward.total_beds);

        let mut numbers: Vec<&str> = in_ward.iter().map(|bed| bed.bed_number.as_str()).collect();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(in_ward.len(), numbers.len(), "duplicate bed number in ward");
    }
}

#[tokio::test]
async fn supporting_entities_respect_their_invariants() {
    let sink = seeded_run(14, small_counts()).await;
    let today = clock().today;

    assert_eq!(sink.medicines().len(), 8);
    for medicine in sink.medicines() {
        assert!(medicine.expiry_date > today);
        assert!(medicine.quantity_in_stock >= 100);
    }

    for staff in sink.staff() {
        let (low, high) = medseed_generate::catalog::salary_range(staff.role);
        assert!(staff.salary >= low && staff.salary <= high);
        assert!(staff.hire_date < today);
    }

    let departments = sink.departments();
    assert_eq!(departments.len(), 12);
    for doctor in sink.doctors() {
        let department = &departments[(doctor.department_id - 1) as usize];
        assert_eq!(
            doctor.specialization,
            medseed_generate::catalog::specialization_for(&department.department_name)
        );
    }

    let mut doctor_emails: Vec<&str> =
        sink.doctors().iter().map(|d| d.email.as_str()).collect();
    let total = doctor_emails.len();
    doctor_emails.sort_unstable();
    doctor_emails.dedup();
    assert_eq!(doctor_emails.len(), total, "doctor emails must be unique");

    for record in sink.medical_records() {
        if let Some(follow_up) = record.follow_up_date {
            assert!(follow_up > record.record_date);
        }
        assert!(record.record_date.year() >= today.year() - 3);
    }
}

#[tokio::test]
async fn report_accounts_for_every_stage() {
    let config = SeedConfig {
        seed: 15,
        counts: small_counts(),
        ..SeedConfig::default()
    };
    let engine = SeedEngine::new(config, clock());
    let mut sink = MemorySink::new();
    let report = engine.run(&mut sink).await.expect("seed run succeeds");

    assert_eq!(report.entities.len(), 14);
    assert_eq!(
        report.total_rows,
        sink.batches.iter().map(|batch| batch.len() as u64).sum::<u64>()
    );
    for entity in &report.entities {
        assert_eq!(entity.rows_requested, entity.rows_inserted);
    }
    let order: Vec<&str> = report.entities.iter().map(|e| e.entity.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "departments",
            "doctors",
            "patients",
            "appointments",
            "medical_records",
            "wards",
            "beds",
            "admissions",
            "billing",
            "lab_tests",
            "medicines",
            "staff",
            "insurance_providers",
            "insurance_claims",
        ]
    );
}
