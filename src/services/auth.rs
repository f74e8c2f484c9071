//! Sign-in, signup and session lifecycle, delegated to the hosted auth API.
//!
//! Each operation that changes who is signed in also updates the injected
//! [`SessionContext`] so subscribed views learn about the change.

use validator::Validate;

use crate::backend::AuthApi;
use crate::domain::session::Session;
use crate::forms::auth::{LoginForm, SignupForm};
use crate::services::{ServiceError, ServiceResult};
use crate::session::SessionContext;

/// Validates the login form and signs in, publishing the fresh session.
pub async fn login<B>(
    backend: &B,
    session_ctx: &SessionContext,
    form: LoginForm,
) -> ServiceResult<Session>
where
    B: AuthApi + ?Sized + Sync,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate login form: {err}");
        return Err(ServiceError::from(err));
    }
    let credentials = form.into_credentials()?;
    let session = backend.sign_in(&credentials).await?;
    session_ctx.set(Some(session.clone()));
    Ok(session)
}

/// Validates the signup form and creates the account. The caller still has
/// to log in afterwards, so no session is published.
pub async fn signup<B>(backend: &B, form: SignupForm) -> ServiceResult<()>
where
    B: AuthApi + ?Sized + Sync,
{
    if let Err(err) = form.validate() {
        log::error!("Failed to validate signup form: {err}");
        return Err(ServiceError::from(err));
    }
    let account = form.into_new_account()?;
    backend.sign_up(&account).await?;
    Ok(())
}

/// Signs out and clears the published session.
pub async fn logout<B>(backend: &B, session_ctx: &SessionContext) -> ServiceResult<()>
where
    B: AuthApi + ?Sized + Sync,
{
    backend.sign_out().await?;
    session_ctx.set(None);
    Ok(())
}

/// Retrieves the backend's current session, if any, and publishes it.
/// Called once per view on startup instead of each view re-subscribing to an
/// ambient global.
pub async fn restore_session<B>(
    backend: &B,
    session_ctx: &SessionContext,
) -> ServiceResult<Option<Session>>
where
    B: AuthApi + ?Sized + Sync,
{
    let session = backend.current_session().await?;
    session_ctx.set(session.clone());
    Ok(session)
}
