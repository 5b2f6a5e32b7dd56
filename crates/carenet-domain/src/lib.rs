//! Domain types shared across the CareNet portal and kiosk.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod care_request;
pub mod config;
