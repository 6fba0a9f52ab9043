//! Insertion-row types for every seeded entity.
//!
//! Rows never carry their own primary key: identifiers are assigned by the
//! persistence sink in insertion order. Foreign-key fields hold identifiers
//! drawn from the committed range of an earlier stage. Optional fields model
//! the conditional-population invariants directly; a `None` is stored as SQL
//! NULL, never as a placeholder value.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::status::{
    ActiveStatus, AdmissionStatus, AdmissionType, AppointmentStatus, AppointmentType, BedStatus,
    ClaimStatus, DoctorStatus, Gender, LabTestStatus, PaymentMethod, PaymentStatus, Shift,
    StaffRole,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub department_name: String,
    pub floor_number: i32,
    pub phone_extension: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub first_name: String,
    pub last_name: String,
    /// Unique across all doctors.
    pub email: String,
    pub phone: String,
    /// Must match the mapped specialization of `department_id`.
    pub specialization: String,
    pub department_id: i32,
    pub experience_years: i32,
    pub consultation_fee: f64,
    pub hire_date: NaiveDate,
    pub status: DoctorStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub blood_group: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    /// Never precedes `date_of_birth`.
    pub registration_date: NaiveDate,
    pub status: ActiveStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub patient_id: i32,
    pub doctor_id: i32,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub appointment_type: AppointmentType,
    /// `Scheduled` iff `appointment_date` is strictly after the run clock.
    pub status: AppointmentStatus,
    pub symptoms: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub patient_id: i32,
    pub doctor_id: i32,
    pub appointment_id: Option<i32>,
    pub diagnosis: String,
    pub treatment: String,
    pub prescription: String,
    /// `"SYS/DIA"` form, e.g. `"120/80"`.
    pub blood_pressure: String,
    pub heart_rate: i32,
    pub temperature: f64,
    pub weight: f64,
    pub record_date: NaiveDate,
    /// Strictly after `record_date` when present.
    pub follow_up_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ward {
    pub ward_name: String,
    pub department_id: i32,
    pub floor_number: i32,
    /// Equals the number of bed rows generated for this ward.
    pub total_beds: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bed {
    pub ward_id: i32,
    /// Unique within the ward.
    pub bed_number: String,
    pub bed_type: String,
    pub daily_rate: f64,
    pub status: BedStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admission {
    pub patient_id: i32,
    pub doctor_id: i32,
    pub bed_id: i32,
    pub admission_date: NaiveDateTime,
    /// Present iff `status` is `Discharged`; strictly after `admission_date`.
    pub discharge_date: Option<NaiveDateTime>,
    pub admission_type: AdmissionType,
    pub diagnosis: String,
    pub status: AdmissionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub patient_id: i32,
    pub appointment_id: Option<i32>,
    pub admission_id: Option<i32>,
    pub bill_date: NaiveDate,
    pub subtotal: f64,
    pub tax: f64,
    pub discount: f64,
    /// `subtotal - discount + tax`, tax computed on the discounted subtotal.
    pub total_amount: f64,
    pub payment_status: PaymentStatus,
    /// Present iff `payment_status` is `Paid`.
    pub payment_method: Option<PaymentMethod>,
    /// Present iff `payment_status` is `Paid`.
    pub payment_date: Option<NaiveDate>,
    pub due_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabTest {
    pub patient_id: i32,
    pub doctor_id: i32,
    pub test_name: String,
    pub test_category: String,
    pub test_date: NaiveDate,
    /// Present iff `status` is `Completed`; strictly after `test_date`.
    pub result_date: Option<NaiveDate>,
    /// Present iff `status` is `Completed`.
    pub result_value: Option<String>,
    pub normal_range: String,
    pub status: LabTestStatus,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    pub medicine_name: String,
    pub generic_name: String,
    pub category: String,
    pub manufacturer: String,
    pub unit_price: f64,
    pub quantity_in_stock: i32,
    pub reorder_level: i32,
    /// Always in the future relative to the run clock.
    pub expiry_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub first_name: String,
    pub last_name: String,
    pub role: StaffRole,
    pub department_id: i32,
    pub phone: String,
    pub email: String,
    pub hire_date: NaiveDate,
    /// Within the role-specific bounds of the reference catalog.
    pub salary: i32,
    pub shift: Shift,
    pub status: ActiveStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceProvider {
    pub provider_name: String,
    pub contact_phone: String,
    pub email: String,
    /// In `0..=100`.
    pub coverage_percentage: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceClaim {
    pub bill_id: i32,
    pub insurance_id: i32,
    pub claim_amount: f64,
    /// Present iff `status` is `Approved` or `Paid`; never exceeds
    /// `claim_amount`.
    pub approved_amount: Option<f64>,
    pub status: ClaimStatus,
    pub submission_date: NaiveDate,
    /// Present iff `status` is `Approved` or `Paid`; strictly after
    /// `submission_date`.
    pub approval_date: Option<NaiveDate>,
    /// Present iff `status` is `Rejected`.
    pub rejection_reason: Option<String>,
}
