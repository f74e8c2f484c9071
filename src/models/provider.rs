use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::profile::{AccountRole, Profile};
use crate::domain::provider::ProviderRecord;
use crate::domain::types::UserId;

/// Row returned by the provider table read, with the inner-joined account
/// profile nested under `profiles`.
#[derive(Clone, Debug, Deserialize)]
pub struct ProviderRow {
    pub user_id: Uuid,
    pub skills: Vec<String>,
    pub locations: Vec<String>,
    /// Nullable column; absent and `null` both mean unrated.
    #[serde(default)]
    pub rating: Option<f64>,
    pub availability: Option<String>,
    pub profiles: ProfileJoinRow,
}

/// Contact fields joined from the account table.
#[derive(Clone, Debug, Deserialize)]
pub struct ProfileJoinRow {
    pub email: String,
    pub contact_number: Option<String>,
}

impl From<ProviderRow> for ProviderRecord {
    fn from(row: ProviderRow) -> Self {
        Self {
            user_id: UserId::from_uuid(row.user_id),
            email: row.profiles.email,
            phone: row.profiles.contact_number,
            skills: row.skills,
            locations: row.locations,
            rating: row.rating.unwrap_or(0.0),
            availability: row.availability,
        }
    }
}

/// Row of the account profile table.
#[derive(Clone, Debug, Deserialize)]
pub struct ProfileRow {
    pub id: Uuid,
    pub email: String,
    pub role: AccountRole,
    pub contact_number: Option<String>,
    pub place: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: UserId::from_uuid(row.id),
            email: row.email,
            role: row.role,
            contact_number: row.contact_number,
            place: row.place,
            created_at: row.created_at,
        }
    }
}
