//! Domain aggregates exposed by the directory service layer.

pub mod profile;
pub mod provider;
pub mod session;
pub mod types;
