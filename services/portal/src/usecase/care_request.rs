use chrono::Utc;
use uuid::Uuid;

use carenet_domain::care_request::{CareRequest, CareRequestStatus, ServiceType, Urgency};

use crate::domain::repository::CareRequestRepository;
use crate::error::PortalError;

// ── SubmitCareRequest ────────────────────────────────────────────────────────

pub struct SubmitCareRequestInput {
    pub requester_name: String,
    pub patient_name: String,
    pub address: String,
    pub service_type: ServiceType,
    pub urgency: Urgency,
    pub description: String,
}

pub struct SubmitCareRequestUseCase<R: CareRequestRepository> {
    pub repo: R,
}

impl<R: CareRequestRepository> SubmitCareRequestUseCase<R> {
    /// Store a new request as `Pending` and return its id.
    pub async fn execute(&self, input: SubmitCareRequestInput) -> Result<Uuid, PortalError> {
        let request = CareRequest {
            id: Uuid::now_v7(),
            requester_name: input.requester_name,
            patient_name: input.patient_name,
            address: input.address,
            service_type: input.service_type,
            urgency: input.urgency,
            description: input.description,
            status: CareRequestStatus::Pending,
            created_at: Utc::now(),
        };
        self.repo.create(&request).await?;
        Ok(request.id)
    }
}

// ── ListCareRequests ─────────────────────────────────────────────────────────

pub struct ListCareRequestsUseCase<R: CareRequestRepository> {
    pub repo: R,
}

impl<R: CareRequestRepository> ListCareRequestsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<CareRequest>, PortalError> {
        self.repo.list().await
    }
}

// ── GetCareRequest ───────────────────────────────────────────────────────────

pub struct GetCareRequestUseCase<R: CareRequestRepository> {
    pub repo: R,
}

impl<R: CareRequestRepository> GetCareRequestUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<CareRequest, PortalError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(PortalError::RequestNotFound)
    }
}
