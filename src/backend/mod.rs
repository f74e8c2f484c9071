//! Boundary to the hosted backend: read access to the provider directory and
//! the delegated auth API.
//!
//! The traits mirror what the hosted service exposes (an equality-filtered
//! relational read API with an inner join to the account table, and a session
//! API); `http` provides the wire implementation and `mock` the test double.

use async_trait::async_trait;

use crate::backend::errors::BackendResult;
use crate::domain::profile::{NewAccount, Profile};
use crate::domain::provider::ProviderRecord;
use crate::domain::session::{Credentials, Session};
use crate::domain::types::UserId;

pub mod errors;
#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Read access to provider listings, each joined with the owning account's
/// email and contact number. Reads are side-effect free.
#[async_trait]
pub trait ProviderReader {
    /// All provider listings visible to the current user, in backend order.
    async fn list_providers(&self) -> BackendResult<Vec<ProviderRecord>>;

    /// A single provider listing by its owning account id.
    async fn get_provider_by_user_id(
        &self,
        user_id: UserId,
    ) -> BackendResult<Option<ProviderRecord>>;
}

/// Read access to account profile rows.
#[async_trait]
pub trait ProfileReader {
    async fn get_profile_by_id(&self, id: UserId) -> BackendResult<Option<Profile>>;
}

/// The delegated auth API: sign in/up/out and session retrieval. Session
/// change *notifications* are not a backend concern; see
/// [`crate::session::SessionContext`].
#[async_trait]
pub trait AuthApi {
    async fn sign_in(&self, credentials: &Credentials) -> BackendResult<Session>;

    /// Creates the account. The caller still has to sign in afterwards.
    async fn sign_up(&self, account: &NewAccount) -> BackendResult<()>;

    async fn sign_out(&self) -> BackendResult<()>;

    /// The currently held session, if any.
    async fn current_session(&self) -> BackendResult<Option<Session>>;
}
