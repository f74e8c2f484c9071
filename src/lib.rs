//! Core of a directory application connecting service seekers to service
//! providers.
//!
//! Accounts, profiles and provider listings live in a hosted backend; this
//! crate owns the client-side logic around it: the search pipeline (one
//! remote read per skill query, then a pure location filter over the cached
//! list), the auth/session lifecycle, and the profile page loads. The wire
//! boundary is abstracted behind the traits in [`backend`], with an HTTP
//! implementation under the default `http` feature.

pub mod backend;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod services;
pub mod session;
