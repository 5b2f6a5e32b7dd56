//! Care request domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of care being requested.
///
/// Wire format: the human-readable label shown in the request form
/// (e.g. `"Medical Checkup"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[serde(rename = "Medical Checkup")]
    MedicalCheckup,
    #[serde(rename = "Medication Administration")]
    MedicationAdministration,
    #[serde(rename = "Physical Therapy")]
    PhysicalTherapy,
    #[serde(rename = "Personal Care")]
    PersonalCare,
}

impl ServiceType {
    /// All wire labels, in form display order.
    pub const LABELS: [&'static str; 4] = [
        "Medical Checkup",
        "Medication Administration",
        "Physical Therapy",
        "Personal Care",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MedicalCheckup => "Medical Checkup",
            Self::MedicationAdministration => "Medication Administration",
            Self::PhysicalTherapy => "Physical Therapy",
            Self::PersonalCare => "Personal Care",
        }
    }
}

/// How quickly the request needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Normal,
    High,
    Emergency,
}

impl Urgency {
    /// All wire labels, in form display order.
    pub const LABELS: [&'static str; 4] = ["Low", "Normal", "High", "Emergency"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
            Self::Emergency => "Emergency",
        }
    }
}

/// Lifecycle status of a stored care request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CareRequestStatus {
    Pending,
    Assigned,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

/// A care request accepted by the portal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareRequest {
    pub id: Uuid,
    pub requester_name: String,
    pub patient_name: String,
    pub address: String,
    pub service_type: ServiceType,
    pub urgency: Urgency,
    pub description: String,
    pub status: CareRequestStatus,
    pub created_at: DateTime<Utc>,
}
