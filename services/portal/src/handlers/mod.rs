pub mod care_request;
pub mod config;
