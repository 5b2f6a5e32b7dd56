use crate::infra::memory::InMemoryCareRequestRepo;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone, Default)]
pub struct AppState {
    pub care_requests: InMemoryCareRequestRepo,
}

impl AppState {
    pub fn care_request_repo(&self) -> InMemoryCareRequestRepo {
        self.care_requests.clone()
    }
}
