//! Mock backend implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::backend::errors::BackendResult;
use crate::backend::{AuthApi, ProfileReader, ProviderReader};
use crate::domain::profile::{NewAccount, Profile};
use crate::domain::provider::ProviderRecord;
use crate::domain::session::{Credentials, Session};
use crate::domain::types::UserId;

mock! {
    pub Backend {}

    #[async_trait]
    impl ProviderReader for Backend {
        async fn list_providers(&self) -> BackendResult<Vec<ProviderRecord>>;
        async fn get_provider_by_user_id(
            &self,
            user_id: UserId,
        ) -> BackendResult<Option<ProviderRecord>>;
    }

    #[async_trait]
    impl ProfileReader for Backend {
        async fn get_profile_by_id(&self, id: UserId) -> BackendResult<Option<Profile>>;
    }

    #[async_trait]
    impl AuthApi for Backend {
        async fn sign_in(&self, credentials: &Credentials) -> BackendResult<Session>;
        async fn sign_up(&self, account: &NewAccount) -> BackendResult<()>;
        async fn sign_out(&self) -> BackendResult<()>;
        async fn current_session(&self) -> BackendResult<Option<Session>>;
    }
}
