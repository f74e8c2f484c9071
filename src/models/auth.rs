use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::profile::{AccountRole, NewAccount, SignupDetails};
use crate::domain::session::{AuthenticatedUser, Credentials, Session};
use crate::domain::types::UserId;

/// Password grant request body.
#[derive(Debug, Serialize)]
pub struct SignInPayload<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for SignInPayload<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            email: credentials.email.as_str(),
            password: &credentials.password,
        }
    }
}

/// Signup request body: credentials plus the account metadata bag.
#[derive(Debug, Serialize)]
pub struct SignupPayload {
    pub email: String,
    pub password: String,
    pub data: SignupMetadata,
}

/// The loosely-typed metadata bag the hosted auth API stores at signup.
///
/// Skill and location lists are serialized as JSON strings inside the bag;
/// that is the format the backend's profile trigger expects.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SignupMetadata {
    pub role: AccountRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

impl TryFrom<&NewAccount> for SignupPayload {
    type Error = serde_json::Error;

    fn try_from(account: &NewAccount) -> Result<Self, Self::Error> {
        let contact_number = account
            .contact_number
            .as_ref()
            .map(|p| p.as_str().to_string());
        let data = match &account.details {
            SignupDetails::Seeker { place } => SignupMetadata {
                role: AccountRole::ServiceSeeker,
                contact_number,
                skills: None,
                locations: None,
                availability: None,
                place: Some(place.clone()),
            },
            SignupDetails::Provider {
                skills,
                locations,
                availability,
            } => SignupMetadata {
                role: AccountRole::ServiceProvider,
                contact_number,
                skills: Some(serde_json::to_string(skills)?),
                locations: Some(serde_json::to_string(locations)?),
                availability: availability.clone(),
                place: None,
            },
        };
        Ok(Self {
            email: account.email.as_str().to_string(),
            password: account.password.clone(),
            data,
        })
    }
}

/// User object embedded in auth responses.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthUserRow {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// Password grant response body.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// Token lifetime in seconds.
    pub expires_in: Option<i64>,
    pub user: AuthUserRow,
}

impl TokenResponse {
    /// Converts the response into a [`Session`], anchoring the expiry to the
    /// moment of receipt.
    pub fn into_session(self) -> Session {
        let expires_at = self
            .expires_in
            .map(|seconds| Utc::now() + Duration::seconds(seconds));
        self.into_session_expiring_at(expires_at)
    }

    fn into_session_expiring_at(self, expires_at: Option<DateTime<Utc>>) -> Session {
        Session {
            user: AuthenticatedUser {
                id: UserId::from_uuid(self.user.id),
                email: self.user.email.unwrap_or_default(),
            },
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
        }
    }
}
