use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use uuid::Uuid;

use carenet_domain::care_request::CareRequest;

use crate::domain::repository::CareRequestRepository;
use crate::error::PortalError;

/// In-memory care request store.
///
/// Records do not survive a restart — the portal has no persistence layer.
#[derive(Clone, Default)]
pub struct InMemoryCareRequestRepo {
    requests: Arc<Mutex<Vec<CareRequest>>>,
}

impl CareRequestRepository for InMemoryCareRequestRepo {
    async fn create(&self, request: &CareRequest) -> Result<(), PortalError> {
        self.requests
            .lock()
            .map_err(|_| anyhow!("care request store poisoned"))?
            .push(request.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<CareRequest>, PortalError> {
        Ok(self
            .requests
            .lock()
            .map_err(|_| anyhow!("care request store poisoned"))?
            .clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CareRequest>, PortalError> {
        Ok(self
            .requests
            .lock()
            .map_err(|_| anyhow!("care request store poisoned"))?
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }
}
