use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use carenet_domain::care_request::{CareRequest, CareRequestStatus, ServiceType, Urgency};

use crate::error::PortalError;
use crate::state::AppState;
use crate::usecase::care_request::{
    GetCareRequestUseCase, ListCareRequestsUseCase, SubmitCareRequestInput,
    SubmitCareRequestUseCase,
};

// ── POST /api/care-requests ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCareRequestRequest {
    pub requester_name: String,
    pub patient_name: String,
    pub address: String,
    pub service_type: ServiceType,
    pub urgency: Urgency,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

pub async fn create_care_request(
    State(state): State<AppState>,
    Json(body): Json<CreateCareRequestRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), PortalError> {
    let usecase = SubmitCareRequestUseCase {
        repo: state.care_request_repo(),
    };
    let id = usecase
        .execute(SubmitCareRequestInput {
            requester_name: body.requester_name,
            patient_name: body.patient_name,
            address: body.address,
            service_type: body.service_type,
            urgency: body.urgency,
            description: body.description,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: id.to_string() })))
}

// ── GET /api/care-requests ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CareRequestResponse {
    pub id: String,
    pub requester_name: String,
    pub patient_name: String,
    pub address: String,
    pub service_type: ServiceType,
    pub urgency: Urgency,
    pub description: String,
    pub status: CareRequestStatus,
    #[serde(serialize_with = "carenet_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<CareRequest> for CareRequestResponse {
    fn from(request: CareRequest) -> Self {
        Self {
            id: request.id.to_string(),
            requester_name: request.requester_name,
            patient_name: request.patient_name,
            address: request.address,
            service_type: request.service_type,
            urgency: request.urgency,
            description: request.description,
            status: request.status,
            created_at: request.created_at,
        }
    }
}

pub async fn get_care_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<CareRequestResponse>>, PortalError> {
    let usecase = ListCareRequestsUseCase {
        repo: state.care_request_repo(),
    };
    let requests = usecase.execute().await?;
    Ok(Json(requests.into_iter().map(Into::into).collect()))
}

// ── GET /api/care-requests/{id} ──────────────────────────────────────────────

pub async fn get_care_request(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CareRequestResponse>, PortalError> {
    let usecase = GetCareRequestUseCase {
        repo: state.care_request_repo(),
    };
    let request = usecase.execute(id).await?;
    Ok(Json(request.into()))
}
