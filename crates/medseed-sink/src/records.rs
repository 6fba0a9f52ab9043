//! Column mappings from record types to their insert statements.

use sqlx::query_builder::Separated;
use sqlx::Postgres;

use medseed_core::{
    Admission, Appointment, Bed, Bill, Department, Doctor, InsuranceClaim, InsuranceProvider,
    LabTest, MedicalRecord, Medicine, Patient, StaffMember, Ward,
};

/// A record type the Postgres sink knows how to insert.
///
/// `bind` must push exactly one value per entry in `COLUMNS`, in order.
pub(crate) trait PgRecord {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn bind(&self, row: &mut Separated<'_, '_, Postgres, &'static str>);
}

impl PgRecord for Department {
    const TABLE: &'static str = "departments";
    const COLUMNS: &'static [&'static str] =
        &["department_name", "floor_number", "phone_extension"];

    fn bind(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.department_name.clone());
        row.push_bind(self.floor_number);
        row.push_bind(self.phone_extension.clone());
    }
}

impl PgRecord for Doctor {
    const TABLE: &'static str = "doctors";
    const COLUMNS: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "email",
        "phone",
        "specialization",
        "department_id",
        "experience_years",
        "consultation_fee",
        "hire_date",
        "status",
    ];

    fn bind(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.first_name.clone());
        row.push_bind(self.last_name.clone());
        row.push_bind(self.email.clone());
        row.push_bind(self.phone.clone());
        row.push_bind(self.specialization.clone());
        row.push_bind(self.department_id);
        row.push_bind(self.experience_years);
        row.push_bind(self.consultation_fee);
        row.push_bind(self.hire_date);
        row.push_bind(self.status.as_str());
    }
}

impl PgRecord for Patient {
    const TABLE: &'static str = "patients";
    const COLUMNS: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "date_of_birth",
        "gender",
        "blood_group",
        "phone",
        "email",
        "address",
        "city",
        "state",
        "zip_code",
        "emergency_contact_name",
        "emergency_contact_phone",
        "registration_date",
        "status",
    ];

    fn bind(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.first_name.clone());
        row.push_bind(self.last_name.clone());
        row.push_bind(self.date_of_birth);
        row.push_bind(self.gender.as_str());
        row.push_bind(self.blood_group.clone());
        row.push_bind(self.phone.clone());
        row.push_bind(self.email.clone());
        row.push_bind(self.address.clone());
        row.push_bind(self.city.clone());
        row.push_bind(self.state.clone());
        row.push_bind(self.zip_code.clone());
        row.push_bind(self.emergency_contact_name.clone());
        row.push_bind(self.emergency_contact_phone.clone());
        row.push_bind(self.registration_date);
        row.push_bind(self.status.as_str());
    }
}

impl PgRecord for Appointment {
    const TABLE: &'static str = "appointments";
    const COLUMNS: &'static [&'static str] = &[
        "patient_id",
        "doctor_id",
        "appointment_date",
        "appointment_time",
        "appointment_type",
        "status",
        "symptoms",
    ];

    fn bind(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.patient_id);
        row.push_bind(self.doctor_id);
        row.push_bind(self.appointment_date);
        row.push_bind(self.appointment_time);
        row.push_bind(self.appointment_type.as_str());
        row.push_bind(self.status.as_str());
        row.push_bind(self.symptoms.clone());
    }
}

impl PgRecord for MedicalRecord {
    const TABLE: &'static str = "medical_records";
    const COLUMNS: &'static [&'static str] = &[
        "patient_id",
        "doctor_id",
        "appointment_id",
        "diagnosis",
        "treatment",
        "prescription",
        "blood_pressure",
        "heart_rate",
        "temperature",
        "weight",
        "record_date",
        "follow_up_date",
    ];

    fn bind(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.patient_id);
        row.push_bind(self.doctor_id);
        row.push_bind(self.appointment_id);
        row.push_bind(self.diagnosis.clone());
        row.push_bind(self.treatment.clone());
        row.push_bind(self.prescription.clone());
        row.push_bind(self.blood_pressure.clone());
        row.push_bind(self.heart_rate);
        row.push_bind(self.temperature);
        row.push_bind(self.weight);
        row.push_bind(self.record_date);
        row.push_bind(self.follow_up_date);
    }
}

impl PgRecord for Ward {
    const TABLE: &'static str = "wards";
    const COLUMNS: &'static [&'static str] =
        &["ward_name", "department_id", "floor_number", "total_beds"];

    fn bind(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.ward_name.clone());
        row.push_bind(self.department_id);
        row.push_bind(self.floor_number);
        row.push_bind(self.total_beds);
    }
}

impl PgRecord for Bed {
    const TABLE: &'static str = "beds";
    const COLUMNS: &'static [&'static str] =
        &["ward_id", "bed_number", "bed_type", "daily_rate", "status"];

    fn bind(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.ward_id);
        row.push_bind(self.bed_number.clone());
        row.push_bind(self.bed_type.clone());
        row.push_bind(self.daily_rate);
        row.push_bind(self.status.as_str());
    }
}

impl PgRecord for Admission {
    const TABLE: &'static str = "admissions";
    const COLUMNS: &'static [&'static str] = &[
        "patient_id",
        "doctor_id",
        "bed_id",
        "admission_date",
        "discharge_date",
        "admission_type",
        "diagnosis",
        "status",
    ];

    fn bind(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.patient_id);
        row.push_bind(self.doctor_id);
        row.push_bind(self.bed_id);
        row.push_bind(self.admission_date);
        row.push_bind(self.discharge_date);
        row.push_bind(self.admission_type.as_str());
        row.push_bind(self.diagnosis.clone());
        row.push_bind(self.status.as_str());
    }
}

impl PgRecord for Bill {
    const TABLE: &'static str = "billing";
    const COLUMNS: &'static [&'static str] = &[
        "patient_id",
        "appointment_id",
        "admission_id",
        "bill_date",
        "subtotal",
        "tax",
        "discount",
        "total_amount",
        "payment_status",
        "payment_method",
        "payment_date",
        "due_date",
    ];

    fn bind(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.patient_id);
        row.push_bind(self.appointment_id);
        row.push_bind(self.admission_id);
        row.push_bind(self.bill_date);
        row.push_bind(self.subtotal);
        row.push_bind(self.tax);
        row.push_bind(self.discount);
        row.push_bind(self.total_amount);
        row.push_bind(self.payment_status.as_str());
        row.push_bind(self.payment_method.map(|method| method.as_str()));
        row.push_bind(self.payment_date);
        row.push_bind(self.due_date);
    }
}

impl PgRecord for LabTest {
    const TABLE: &'static str = "lab_tests";
    const COLUMNS: &'static [&'static str] = &[
        "patient_id",
        "doctor_id",
        "test_name",
        "test_category",
        "test_date",
        "result_date",
        "result_value",
        "normal_range",
        "status",
        "cost",
    ];

    fn bind(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.patient_id);
        row.push_bind(self.doctor_id);
        row.push_bind(self.test_name.clone());
        row.push_bind(self.test_category.clone());
        row.push_bind(self.test_date);
        row.push_bind(self.result_date);
        row.push_bind(self.result_value.clone());
        row.push_bind(self.normal_range.clone());
        row.push_bind(self.status.as_str());
        row.push_bind(self.cost);
    }
}

impl PgRecord for Medicine {
    const TABLE: &'static str = "medicines";
    const COLUMNS: &'static [&'static str] = &[
        "medicine_name",
        "generic_name",
        "category",
        "manufacturer",
        "unit_price",
        "quantity_in_stock",
        "reorder_level",
        "expiry_date",
    ];

    fn bind(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.medicine_name.clone());
        row.push_bind(self.generic_name.clone());
        row.push_bind(self.category.clone());
        row.push_bind(self.manufacturer.clone());
        row.push_bind(self.unit_price);
        row.push_bind(self.quantity_in_stock);
        row.push_bind(self.reorder_level);
        row.push_bind(self.expiry_date);
    }
}

impl PgRecord for StaffMember {
    const TABLE: &'static str = "staff";
    const COLUMNS: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "role",
        "department_id",
        "phone",
        "email",
        "hire_date",
        "salary",
        "shift",
        "status",
    ];

    fn bind(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.first_name.clone());
        row.push_bind(self.last_name.clone());
        row.push_bind(self.role.as_str());
        row.push_bind(self.department_id);
        row.push_bind(self.phone.clone());
        row.push_bind(self.email.clone());
        row.push_bind(self.hire_date);
        row.push_bind(self.salary);
        row.push_bind(self.shift.as_str());
        row.push_bind(self.status.as_str());
    }
}

impl PgRecord for InsuranceProvider {
    const TABLE: &'static str = "insurance_providers";
    const COLUMNS: &'static [&'static str] = &[
        "provider_name",
        "contact_phone",
        "email",
        "coverage_percentage",
    ];

    fn bind(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.provider_name.clone());
        row.push_bind(self.contact_phone.clone());
        row.push_bind(self.email.clone());
        row.push_bind(self.coverage_percentage);
    }
}

impl PgRecord for InsuranceClaim {
    const TABLE: &'static str = "insurance_claims";
    const COLUMNS: &'static [&'static str] = &[
        "bill_id",
        "insurance_id",
        "claim_amount",
        "approved_amount",
        "status",
        "submission_date",
        "approval_date",
        "rejection_reason",
    ];

    fn bind(&self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
        row.push_bind(self.bill_id);
        row.push_bind(self.insurance_id);
        row.push_bind(self.claim_amount);
        row.push_bind(self.approved_amount);
        row.push_bind(self.status.as_str());
        row.push_bind(self.submission_date);
        row.push_bind(self.approval_date);
        row.push_bind(self.rejection_reason.clone());
    }
}

#[cfg(test)]
mod tests {
    use sqlx::QueryBuilder;

    use medseed_core::status::{ActiveStatus, Gender};

    use super::*;
    use crate::postgres::insert_prefix;

    fn patient() -> Patient {
        Patient {
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            date_of_birth: chrono::NaiveDate::from_ymd_opt(1990, 4, 1).unwrap(),
            gender: Gender::Female,
            blood_group: "O+".to_string(),
            phone: "9000000001".to_string(),
            email: None,
            address: "12 Lake Road".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            zip_code: "411001".to_string(),
            emergency_contact_name: "Ravi Rao".to_string(),
            emergency_contact_phone: "9000000002".to_string(),
            registration_date: chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            status: ActiveStatus::Active,
        }
    }

    #[test]
    fn bind_pushes_one_value_per_column() {
        let rows = vec![patient(), patient()];
        let mut builder =
            QueryBuilder::<Postgres>::new(insert_prefix(Patient::TABLE, Patient::COLUMNS));
        builder.push_values(rows.iter(), |mut row, record| record.bind(&mut row));

        let sql = builder.sql();
        let placeholders = sql.matches('$').count();
        assert_eq!(placeholders, Patient::COLUMNS.len() * rows.len());
        assert!(sql.starts_with("insert into patients (first_name, last_name,"));
    }

    #[test]
    fn every_table_name_matches_the_schema_ddl() {
        let ddl = include_str!("schema.sql");
        for table in [
            Department::TABLE,
            Doctor::TABLE,
            Patient::TABLE,
            Appointment::TABLE,
            MedicalRecord::TABLE,
            Ward::TABLE,
            Bed::TABLE,
            Admission::TABLE,
            Bill::TABLE,
            LabTest::TABLE,
            Medicine::TABLE,
            StaffMember::TABLE,
            InsuranceProvider::TABLE,
            InsuranceClaim::TABLE,
        ] {
            assert!(
                ddl.contains(&format!("create table {table} (")),
                "schema.sql misses table {table}"
            );
        }
    }

    #[test]
    fn every_column_appears_in_the_schema_ddl() {
        let ddl = include_str!("schema.sql");
        for column in Bill::COLUMNS.iter().chain(InsuranceClaim::COLUMNS) {
            assert!(ddl.contains(column), "schema.sql misses column {column}");
        }
    }
}
