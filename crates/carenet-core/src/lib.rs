//! Framework-level building blocks shared by CareNet services.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
