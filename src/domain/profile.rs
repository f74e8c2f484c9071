use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{Email, NonEmptyString, PhoneNumber, TypeConstraintError, UserId};

/// The two account roles the directory distinguishes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccountRole {
    ServiceSeeker,
    ServiceProvider,
}

impl AccountRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountRole::ServiceSeeker => "service_seeker",
            AccountRole::ServiceProvider => "service_provider",
        }
    }
}

/// Account profile row as stored by the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: UserId,
    pub email: String,
    pub role: AccountRole,
    pub contact_number: Option<String>,
    /// Home location; only set for seekers.
    pub place: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Role-specific signup details.
///
/// The backend accepts a loosely-typed metadata bag at signup; this union
/// keeps each role's required fields explicit until the wire boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum SignupDetails {
    Seeker {
        place: String,
    },
    Provider {
        skills: Vec<String>,
        locations: Vec<String>,
        availability: Option<String>,
    },
}

impl SignupDetails {
    /// Builds seeker details, rejecting a blank location.
    pub fn seeker(place: impl Into<String>) -> Result<Self, TypeConstraintError> {
        let place = NonEmptyString::new(place)?;
        Ok(Self::Seeker {
            place: place.into_inner(),
        })
    }

    /// Builds provider details. Entries are trimmed and deduplicated with
    /// order preserved; at least one skill and one location must remain.
    pub fn provider(
        skills: Vec<String>,
        locations: Vec<String>,
        availability: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        let skills = clean_entries(skills);
        let locations = clean_entries(locations);
        if skills.is_empty() || locations.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self::Provider {
            skills,
            locations,
            availability: availability
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }

    pub fn role(&self) -> AccountRole {
        match self {
            SignupDetails::Seeker { .. } => AccountRole::ServiceSeeker,
            SignupDetails::Provider { .. } => AccountRole::ServiceProvider,
        }
    }
}

/// Blank entries are dropped, the rest trimmed and deduplicated with order
/// preserved.
fn clean_entries(entries: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries
        .into_iter()
        .filter_map(|entry| NonEmptyString::new(entry).ok())
    {
        let entry = entry.into_inner();
        if !cleaned.contains(&entry) {
            cleaned.push(entry);
        }
    }
    cleaned
}

/// Validated data for creating an account through the hosted auth API.
#[derive(Clone, Debug, PartialEq)]
pub struct NewAccount {
    pub email: Email,
    pub password: String,
    pub contact_number: Option<PhoneNumber>,
    pub details: SignupDetails,
}
