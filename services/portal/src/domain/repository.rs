#![allow(async_fn_in_trait)]

use uuid::Uuid;

use carenet_domain::care_request::CareRequest;

use crate::error::PortalError;

/// Repository for submitted care requests.
pub trait CareRequestRepository: Send + Sync {
    async fn create(&self, request: &CareRequest) -> Result<(), PortalError>;
    async fn list(&self) -> Result<Vec<CareRequest>, PortalError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CareRequest>, PortalError>;
}
