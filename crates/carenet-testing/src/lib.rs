//! Test utilities for CareNet crates.
//!
//! Provides an ephemeral-port `TestServer`, an env-var lock, and fixture
//! constructors. Import in `#[cfg(test)]` blocks and `tests/` only — never in
//! production code.

pub mod env;
pub mod fixture;
pub mod server;
