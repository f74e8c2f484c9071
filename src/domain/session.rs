use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{Email, UserId};

/// Credentials submitted to the hosted auth API when signing in.
#[derive(Clone, Debug, PartialEq)]
pub struct Credentials {
    pub email: Email,
    pub password: String,
}

/// The account half of an authenticated session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: String,
}

/// An authenticated session issued by the hosted auth API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub user: AuthenticatedUser,
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// Absolute expiry derived from the token response.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Whether the access token has passed its expiry. Sessions without an
    /// expiry are treated as live.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| at <= Utc::now())
    }
}
