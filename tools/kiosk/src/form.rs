//! Care request form state and submission.

use reqwest::Client;
use serde::Serialize;

/// Wire field names, in display order.
pub const FIELDS: [&str; 6] = [
    "requester_name",
    "patient_name",
    "address",
    "service_type",
    "urgency",
    "description",
];

/// Every field except `description` must be filled before submitting.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "requester_name",
    "patient_name",
    "address",
    "service_type",
    "urgency",
];

/// Field values held while the user fills in the form.
///
/// All six fields are plain strings; `service_type` and `urgency` are
/// constrained to their closed option lists by the input layer, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CareRequestForm {
    pub requester_name: String,
    pub patient_name: String,
    pub address: String,
    pub service_type: String,
    pub urgency: String,
    pub description: String,
}

impl CareRequestForm {
    /// Generic change handler — one setter for every input, keyed by the
    /// input's wire name. Unknown names are ignored.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        let value = value.into();
        match field {
            "requester_name" => self.requester_name = value,
            "patient_name" => self.patient_name = value,
            "address" => self.address = value,
            "service_type" => self.service_type = value,
            "urgency" => self.urgency = value,
            "description" => self.description = value,
            _ => {}
        }
    }

    /// Required fields that are still empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let values = [
            ("requester_name", &self.requester_name),
            ("patient_name", &self.patient_name),
            ("address", &self.address),
            ("service_type", &self.service_type),
            ("urgency", &self.urgency),
        ];
        values
            .into_iter()
            .filter(|(_, v)| v.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    /// Submit the form once. A 2xx response clears every field back to its
    /// empty default; any failure leaves the values untouched so the user can
    /// resubmit. The response body is never parsed.
    pub async fn submit(&mut self, client: &Client, base_url: &str) -> SubmitOutcome {
        let url = format!("{}/api/care-requests", base_url.trim_end_matches('/'));
        match client.post(&url).json(&*self).send().await {
            Ok(resp) if resp.status().is_success() => {
                self.reset();
                SubmitOutcome::Submitted
            }
            Ok(resp) => SubmitOutcome::Rejected {
                status: resp.status().as_u16(),
            },
            Err(e) => {
                tracing::error!(error = %e, "care request submission failed");
                SubmitOutcome::TransportFailed
            }
        }
    }
}

/// Result of one submission attempt, mapped to the user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Rejected { status: u16 },
    TransportFailed,
}

impl SubmitOutcome {
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Submitted => "Care request submitted successfully!",
            Self::Rejected { .. } => "Failed to submit care request",
            Self::TransportFailed => "An error occurred while submitting the care request",
        }
    }
}
