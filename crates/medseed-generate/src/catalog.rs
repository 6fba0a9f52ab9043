//! Reference catalog: fixed lookup tables consumed by the generators.
//!
//! Immutable for the process lifetime. Generators read these tables and never
//! mutate them; there are no error paths here.

use medseed_core::status::StaffRole;

pub const DEPARTMENTS: &[&str] = &[
    "Cardiology",
    "Neurology",
    "Orthopedics",
    "Pediatrics",
    "Gynecology",
    "General Medicine",
    "Dermatology",
    "ENT",
    "Ophthalmology",
    "Psychiatry",
    "Emergency",
    "ICU",
];

/// The one specialization practiced in each department.
pub fn specialization_for(department: &str) -> &'static str {
    match department {
        "Cardiology" => "Cardiologist",
        "Neurology" => "Neurologist",
        "Orthopedics" => "Orthopedic Surgeon",
        "Pediatrics" => "Pediatrician",
        "Gynecology" => "Gynecologist",
        "General Medicine" => "General Physician",
        "Dermatology" => "Dermatologist",
        "ENT" => "ENT Specialist",
        "Ophthalmology" => "Ophthalmologist",
        "Psychiatry" => "Psychiatrist",
        "Emergency" => "Emergency Physician",
        "ICU" => "Intensivist",
        _ => "General Physician",
    }
}

pub const BLOOD_GROUPS: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub const CITIES: &[&str] = &[
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Chennai",
    "Hyderabad",
    "Pune",
    "Kolkata",
    "Ahmedabad",
];

/// Every patient address is in-state.
pub const STATE: &str = "Maharashtra";

pub const DIAGNOSES: &[&str] = &[
    "Hypertension",
    "Diabetes Type 2",
    "Upper Respiratory Infection",
    "Migraine",
    "Gastritis",
    "Arthritis",
    "Bronchitis",
    "Anemia",
    "Thyroid Disorder",
    "Vitamin Deficiency",
    "Allergic Rhinitis",
    "UTI",
    "Anxiety",
    "Asthma",
];

pub const SYMPTOMS: &[&str] = &[
    "Fever",
    "Headache",
    "Cough",
    "Body Pain",
    "Fatigue",
    "Chest Pain",
    "Dizziness",
    "Nausea",
    "Back Pain",
    "Joint Pain",
];

/// Bookable slots as (hour, minute) pairs.
pub const TIME_SLOTS: &[(u32, u32)] = &[
    (9, 0),
    (9, 30),
    (10, 0),
    (10, 30),
    (11, 0),
    (11, 30),
    (12, 0),
    (14, 0),
    (14, 30),
    (15, 0),
    (15, 30),
    (16, 0),
    (16, 30),
    (17, 0),
];

#[derive(Debug, Clone, Copy)]
pub struct LabTestKind {
    pub name: &'static str,
    pub category: &'static str,
    pub cost: f64,
}

pub const LAB_TESTS: &[LabTestKind] = &[
    LabTestKind { name: "Complete Blood Count", category: "Blood", cost: 500.0 },
    LabTestKind { name: "Blood Sugar", category: "Blood", cost: 150.0 },
    LabTestKind { name: "Lipid Profile", category: "Blood", cost: 800.0 },
    LabTestKind { name: "Thyroid Profile", category: "Blood", cost: 1200.0 },
    LabTestKind { name: "Liver Function Test", category: "Blood", cost: 900.0 },
    LabTestKind { name: "Kidney Function Test", category: "Blood", cost: 850.0 },
    LabTestKind { name: "Urine Routine", category: "Urine", cost: 200.0 },
    LabTestKind { name: "ECG", category: "Cardiac", cost: 400.0 },
    LabTestKind { name: "X-Ray", category: "Imaging", cost: 600.0 },
    LabTestKind { name: "Ultrasound", category: "Imaging", cost: 1500.0 },
];

/// Every completed test reports against this reference interval.
pub const LAB_NORMAL_RANGE: &str = "70-110";

#[derive(Debug, Clone, Copy)]
pub struct MedicineKind {
    pub name: &'static str,
    pub generic: &'static str,
    pub category: &'static str,
    pub unit_price: f64,
}

pub const MEDICINES: &[MedicineKind] = &[
    MedicineKind { name: "Paracetamol 500mg", generic: "Acetaminophen", category: "Analgesic", unit_price: 2.50 },
    MedicineKind { name: "Amoxicillin 500mg", generic: "Amoxicillin", category: "Antibiotic", unit_price: 8.00 },
    MedicineKind { name: "Omeprazole 20mg", generic: "Omeprazole", category: "Antacid", unit_price: 5.00 },
    MedicineKind { name: "Metformin 500mg", generic: "Metformin", category: "Antidiabetic", unit_price: 3.00 },
    MedicineKind { name: "Amlodipine 5mg", generic: "Amlodipine", category: "Antihypertensive", unit_price: 4.50 },
    MedicineKind { name: "Cetirizine 10mg", generic: "Cetirizine", category: "Antihistamine", unit_price: 2.00 },
    MedicineKind { name: "Ibuprofen 400mg", generic: "Ibuprofen", category: "Anti-inflammatory", unit_price: 3.50 },
    MedicineKind { name: "Azithromycin 500mg", generic: "Azithromycin", category: "Antibiotic", unit_price: 15.00 },
];

#[derive(Debug, Clone, Copy)]
pub struct ProviderKind {
    pub name: &'static str,
    pub coverage_percentage: i32,
}

pub const INSURANCE_PROVIDERS: &[ProviderKind] = &[
    ProviderKind { name: "Star Health", coverage_percentage: 80 },
    ProviderKind { name: "ICICI Lombard", coverage_percentage: 75 },
    ProviderKind { name: "HDFC Ergo", coverage_percentage: 70 },
    ProviderKind { name: "Max Bupa", coverage_percentage: 85 },
    ProviderKind { name: "Bajaj Allianz", coverage_percentage: 75 },
    ProviderKind { name: "New India Assurance", coverage_percentage: 70 },
];

#[derive(Debug, Clone, Copy)]
pub struct WardLayout {
    pub name: &'static str,
    pub bed_type: &'static str,
    pub beds: u32,
    pub daily_rate: f64,
}

pub const WARDS: &[WardLayout] = &[
    WardLayout { name: "General Ward A", bed_type: "General", beds: 20, daily_rate: 500.0 },
    WardLayout { name: "General Ward B", bed_type: "General", beds: 20, daily_rate: 500.0 },
    WardLayout { name: "Semi-Private", bed_type: "Semi-Private", beds: 10, daily_rate: 1500.0 },
    WardLayout { name: "Private Ward", bed_type: "Private", beds: 8, daily_rate: 3000.0 },
    WardLayout { name: "ICU", bed_type: "ICU", beds: 10, daily_rate: 8000.0 },
    WardLayout { name: "Pediatric Ward", bed_type: "General", beds: 15, daily_rate: 800.0 },
];

/// Total beds across the ward layout.
pub fn total_beds() -> u32 {
    WARDS.iter().map(|ward| ward.beds).sum()
}

/// Monthly salary bounds per staff role, inclusive.
pub fn salary_range(role: StaffRole) -> (i32, i32) {
    match role {
        StaffRole::Nurse => (25_000, 50_000),
        StaffRole::Technician => (20_000, 40_000),
        StaffRole::Receptionist => (18_000, 30_000),
        StaffRole::Admin => (30_000, 60_000),
        StaffRole::Pharmacist => (28_000, 45_000),
    }
}

pub const STAFF_ROLES: &[StaffRole] = &[
    StaffRole::Nurse,
    StaffRole::Technician,
    StaffRole::Receptionist,
    StaffRole::Admin,
    StaffRole::Pharmacist,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_department_has_a_specialization() {
        for dept in DEPARTMENTS {
            assert!(!specialization_for(dept).is_empty());
        }
    }

    #[test]
    fn ward_layout_totals_eighty_three_beds() {
        assert_eq!(total_beds(), 83);
    }

    #[test]
    fn coverage_percentages_are_valid() {
        for provider in INSURANCE_PROVIDERS {
            assert!((0..=100).contains(&provider.coverage_percentage));
        }
    }

    #[test]
    fn salary_bounds_are_ordered() {
        for role in STAFF_ROLES {
            let (low, high) = salary_range(*role);
            assert!(low < high);
        }
    }
}
