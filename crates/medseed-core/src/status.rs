//! Categorical vocabularies persisted as text columns.
//!
//! `as_str` is the canonical stored form; serde names follow it so artifacts
//! and the database agree on spelling.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant,)+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

text_enum! {
    Gender {
        Male => "Male",
        Female => "Female",
    }
}

text_enum! {
    /// Shared by patients and staff.
    ActiveStatus {
        Active => "Active",
        Inactive => "Inactive",
    }
}

text_enum! {
    DoctorStatus {
        Active => "Active",
        OnLeave => "On Leave",
    }
}

text_enum! {
    AppointmentType {
        Consultation => "Consultation",
        FollowUp => "Follow-up",
        RoutineCheckup => "Routine Checkup",
        Emergency => "Emergency",
    }
}

text_enum! {
    AppointmentStatus {
        Scheduled => "Scheduled",
        Completed => "Completed",
        Cancelled => "Cancelled",
        NoShow => "No Show",
    }
}

text_enum! {
    BedStatus {
        Available => "Available",
        Occupied => "Occupied",
        Maintenance => "Maintenance",
    }
}

text_enum! {
    AdmissionType {
        Emergency => "Emergency",
        Planned => "Planned",
        Transfer => "Transfer",
    }
}

text_enum! {
    AdmissionStatus {
        Admitted => "Admitted",
        Discharged => "Discharged",
    }
}

text_enum! {
    PaymentStatus {
        Paid => "Paid",
        Pending => "Pending",
        Partial => "Partial",
        Overdue => "Overdue",
    }
}

text_enum! {
    PaymentMethod {
        Cash => "Cash",
        Card => "Card",
        Insurance => "Insurance",
        Online => "Online",
    }
}

text_enum! {
    LabTestStatus {
        Pending => "Pending",
        InProgress => "In Progress",
        Completed => "Completed",
    }
}

text_enum! {
    StaffRole {
        Nurse => "Nurse",
        Technician => "Technician",
        Receptionist => "Receptionist",
        Admin => "Admin",
        Pharmacist => "Pharmacist",
    }
}

text_enum! {
    Shift {
        Morning => "Morning",
        Afternoon => "Afternoon",
        Night => "Night",
    }
}

text_enum! {
    ClaimStatus {
        Submitted => "Submitted",
        Processing => "Processing",
        Approved => "Approved",
        Rejected => "Rejected",
        Paid => "Paid",
    }
}

impl ClaimStatus {
    /// Settled claims carry an approved amount and an approval date.
    pub fn is_settled(&self) -> bool {
        matches!(self, ClaimStatus::Approved | ClaimStatus::Paid)
    }
}
