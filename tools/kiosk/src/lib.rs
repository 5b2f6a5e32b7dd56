pub mod bootstrap;
pub mod config_api;
pub mod error;
pub mod form;
pub mod map;
