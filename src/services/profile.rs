//! Profile and provider-detail page loads.

use crate::backend::{ProfileReader, ProviderReader};
use crate::domain::profile::AccountRole;
use crate::domain::provider::ProviderRecord;
use crate::domain::types::UserId;
use crate::dto::profile::ProfilePage;
use crate::services::{ServiceError, ServiceResult};

/// Loads the signed-in account's profile and, for providers, the listing
/// that goes with it.
pub async fn load_profile_page<B>(backend: &B, user_id: UserId) -> ServiceResult<ProfilePage>
where
    B: ProfileReader + ProviderReader + ?Sized + Sync,
{
    let profile = backend
        .get_profile_by_id(user_id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    let provider = if profile.role == AccountRole::ServiceProvider {
        backend.get_provider_by_user_id(user_id).await?
    } else {
        None
    };
    Ok(ProfilePage { profile, provider })
}

/// Loads a provider's public detail view. `Ok(None)` is the "provider not
/// found" page state, not an error.
pub async fn load_provider_page<B>(
    backend: &B,
    user_id: UserId,
) -> ServiceResult<Option<ProviderRecord>>
where
    B: ProviderReader + ?Sized + Sync,
{
    backend
        .get_provider_by_user_id(user_id)
        .await
        .map_err(ServiceError::from)
}
