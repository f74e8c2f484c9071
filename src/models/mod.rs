//! Wire-facing structs decoded/encoded at the hosted backend boundary.

pub mod auth;
#[cfg(feature = "http")]
pub mod config;
pub mod provider;
