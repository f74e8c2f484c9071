#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use skillmatch::backend::errors::{BackendError, BackendResult};
use skillmatch::backend::{AuthApi, ProfileReader, ProviderReader};
use skillmatch::domain::profile::{AccountRole, NewAccount, Profile};
use skillmatch::domain::provider::ProviderRecord;
use skillmatch::domain::session::{AuthenticatedUser, Credentials, Session};
use skillmatch::domain::types::UserId;

/// Canned-data backend standing in for the hosted service.
pub struct StubBackend {
    pub providers: Vec<ProviderRecord>,
    pub profiles: Vec<Profile>,
    /// When set, every read fails with a network error.
    pub fail_reads: bool,
    pub session: Mutex<Option<Session>>,
}

impl StubBackend {
    pub fn new(providers: Vec<ProviderRecord>) -> Self {
        Self {
            providers,
            profiles: Vec::new(),
            fail_reads: false,
            session: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            providers: Vec::new(),
            profiles: Vec::new(),
            fail_reads: true,
            session: Mutex::new(None),
        }
    }

    pub fn with_profiles(mut self, profiles: Vec<Profile>) -> Self {
        self.profiles = profiles;
        self
    }

    fn guard_reads(&self) -> BackendResult<()> {
        if self.fail_reads {
            Err(BackendError::Network("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProviderReader for StubBackend {
    async fn list_providers(&self) -> BackendResult<Vec<ProviderRecord>> {
        self.guard_reads()?;
        Ok(self.providers.clone())
    }

    async fn get_provider_by_user_id(
        &self,
        user_id: UserId,
    ) -> BackendResult<Option<ProviderRecord>> {
        self.guard_reads()?;
        Ok(self
            .providers
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }
}

#[async_trait]
impl ProfileReader for StubBackend {
    async fn get_profile_by_id(&self, id: UserId) -> BackendResult<Option<Profile>> {
        self.guard_reads()?;
        Ok(self.profiles.iter().find(|p| p.id == id).cloned())
    }
}

#[async_trait]
impl AuthApi for StubBackend {
    async fn sign_in(&self, credentials: &Credentials) -> BackendResult<Session> {
        let session = Session {
            user: AuthenticatedUser {
                id: UserId::new(),
                email: credentials.email.as_str().to_string(),
            },
            access_token: "stub-token".to_string(),
            refresh_token: None,
            expires_at: None,
        };
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(session)
    }

    async fn sign_up(&self, _account: &NewAccount) -> BackendResult<()> {
        Ok(())
    }

    async fn sign_out(&self) -> BackendResult<()> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }

    async fn current_session(&self) -> BackendResult<Option<Session>> {
        Ok(self.session.lock().unwrap().clone())
    }
}

/// A provider listing fixture.
pub fn provider(email: &str, skills: &[&str], locations: &[&str]) -> ProviderRecord {
    ProviderRecord {
        user_id: UserId::new(),
        email: email.to_string(),
        phone: None,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        locations: locations.iter().map(|s| s.to_string()).collect(),
        rating: 0.0,
        availability: None,
    }
}

/// A profile row fixture.
pub fn profile(id: UserId, email: &str, role: AccountRole) -> Profile {
    Profile {
        id,
        email: email.to_string(),
        role,
        contact_number: None,
        place: None,
        created_at: Some(Utc::now()),
    }
}
