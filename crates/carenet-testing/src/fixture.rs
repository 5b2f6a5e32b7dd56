use chrono::Utc;
use uuid::Uuid;

use carenet_domain::care_request::{CareRequest, CareRequestStatus, ServiceType, Urgency};

pub fn test_care_request() -> CareRequest {
    CareRequest {
        id: Uuid::now_v7(),
        requester_name: "Li Wei".to_owned(),
        patient_name: "Li Na".to_owned(),
        address: "12 Changjiang Rd, Hefei".to_owned(),
        service_type: ServiceType::MedicalCheckup,
        urgency: Urgency::Normal,
        description: "Routine checkup".to_owned(),
        status: CareRequestStatus::Pending,
        created_at: Utc::now(),
    }
}

/// A fully populated `POST /api/care-requests` body.
pub fn care_request_body() -> serde_json::Value {
    serde_json::json!({
        "requester_name": "Li Wei",
        "patient_name": "Li Na",
        "address": "12 Changjiang Rd, Hefei",
        "service_type": "Medical Checkup",
        "urgency": "Normal",
        "description": "Routine checkup",
    })
}
