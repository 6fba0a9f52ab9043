//! Run configuration: seed, commit granularity, and target record counts.

use serde::{Deserialize, Serialize};

/// Default random seed; two runs with equal seed and counts are identical.
pub const DEFAULT_SEED: u64 = 2026;
/// Default rows per commit checkpoint.
pub const DEFAULT_BATCH_SIZE: usize = 1000;
/// Upper bound on the commit checkpoint size.
pub const MAX_BATCH_SIZE: usize = 3000;

/// Target record counts for the count-configurable entities.
///
/// Departments, wards, beds, medicines, and insurance providers are fixed by
/// the reference catalog and carry no count here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    pub doctors: u32,
    pub patients: u32,
    pub appointments: u32,
    pub medical_records: u32,
    pub admissions: u32,
    pub bills: u32,
    pub lab_tests: u32,
    pub staff: u32,
    pub insurance_claims: u32,
}

impl Default for EntityCounts {
    fn default() -> Self {
        Self {
            doctors: 60,
            patients: 5000,
            appointments: 15_000,
            medical_records: 12_000,
            admissions: 2000,
            bills: 10_000,
            lab_tests: 8000,
            staff: 100,
            insurance_claims: 1500,
        }
    }
}

impl EntityCounts {
    /// Reject count combinations that would force a dangling reference.
    pub fn validate(&self) -> Result<(), String> {
        let require = |child: &str, count: u32, parent: &str, parent_count: u32| {
            if count > 0 && parent_count == 0 {
                Err(format!("{child} require at least one {parent}"))
            } else {
                Ok(())
            }
        };

        require("appointments", self.appointments, "patient", self.patients)?;
        require("appointments", self.appointments, "doctor", self.doctors)?;
        require(
            "medical records",
            self.medical_records,
            "patient",
            self.patients,
        )?;
        require(
            "medical records",
            self.medical_records,
            "doctor",
            self.doctors,
        )?;
        require("admissions", self.admissions, "patient", self.patients)?;
        require("admissions", self.admissions, "doctor", self.doctors)?;
        require("bills", self.bills, "patient", self.patients)?;
        require("lab tests", self.lab_tests, "patient", self.patients)?;
        require("lab tests", self.lab_tests, "doctor", self.doctors)?;
        require(
            "insurance claims",
            self.insurance_claims,
            "bill",
            self.bills,
        )?;
        Ok(())
    }
}

/// Full configuration of one seed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    pub seed: u64,
    pub batch_size: usize,
    pub counts: EntityCounts,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            batch_size: DEFAULT_BATCH_SIZE,
            counts: EntityCounts::default(),
        }
    }
}

impl SeedConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            return Err(format!(
                "batch size must be in 1..={MAX_BATCH_SIZE}, got {}",
                self.batch_size
            ));
        }
        self.counts.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_counts_match_the_target_dataset() {
        let counts = EntityCounts::default();
        assert_eq!(counts.patients, 5000);
        assert_eq!(counts.appointments, 15_000);
        assert_eq!(counts.insurance_claims, 1500);
        assert!(counts.validate().is_ok());
    }

    #[test]
    fn orphaned_children_are_rejected() {
        let counts = EntityCounts {
            patients: 0,
            ..EntityCounts::default()
        };
        assert!(counts.validate().is_err());

        let counts = EntityCounts {
            bills: 0,
            insurance_claims: 10,
            ..EntityCounts::default()
        };
        assert!(counts.validate().is_err());
    }

    #[test]
    fn oversized_batches_are_rejected() {
        let config = SeedConfig {
            batch_size: MAX_BATCH_SIZE + 1,
            ..SeedConfig::default()
        };
        assert!(config.validate().is_err());
        let config = SeedConfig {
            batch_size: 0,
            ..SeedConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
