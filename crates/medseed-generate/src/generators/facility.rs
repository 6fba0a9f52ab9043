//! Departments, wards, and beds.

use rand::Rng;

use medseed_core::rules::weighted_choice;
use medseed_core::status::BedStatus;
use medseed_core::{Bed, Department, IdRange, Ward};

use crate::catalog::{DEPARTMENTS, WARDS};
use crate::errors::GenerateError;

/// The twelve catalog departments, spread over four floors.
pub fn departments() -> Vec<Department> {
    DEPARTMENTS
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let number = index as i32 + 1;
            Department {
                department_name: name.to_string(),
                floor_number: (number % 4) + 1,
                phone_extension: format!("10{number:02}"),
            }
        })
        .collect()
}

pub fn wards<R: Rng + ?Sized>(
    rng: &mut R,
    departments: IdRange,
) -> Result<Vec<Ward>, GenerateError> {
    Ok(WARDS
        .iter()
        .enumerate()
        .map(|(index, layout)| Ward {
            ward_name: layout.name.to_string(),
            department_id: departments.pick(rng),
            floor_number: (index as i32 + 1) % 4 + 1,
            total_beds: layout.beds as i32,
        })
        .collect())
}

const BED_STATUS_WEIGHTS: &[(BedStatus, u32)] = &[
    (BedStatus::Available, 60),
    (BedStatus::Occupied, 35),
    (BedStatus::Maintenance, 5),
];

/// One bed row per slot in the ward layout; bed numbers are unique within
/// their ward, and each ward's `total_beds` equals the rows emitted for it.
pub fn beds<R: Rng + ?Sized>(rng: &mut R, wards: IdRange) -> Result<Vec<Bed>, GenerateError> {
    let mut rows = Vec::new();

    for (index, layout) in WARDS.iter().enumerate() {
        let ward_id = wards.start + index as i32;
        let prefix: String = layout
            .name
            .chars()
            .take(2)
            .map(|c| c.to_ascii_uppercase())
            .collect();

        for number in 1..=layout.beds {
            rows.push(Bed {
                ward_id,
                bed_number: format!("{prefix}{number:03}"),
                bed_type: layout.bed_type.to_string(),
                daily_rate: layout.daily_rate,
                status: *weighted_choice(rng, BED_STATUS_WEIGHTS)?,
            });
        }
    }

    Ok(rows)
}
