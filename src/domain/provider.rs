use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;

/// A provider listing joined with the owning account's contact fields.
///
/// Owned by the backend store; the application only ever holds a read-only,
/// in-memory copy for the duration of a search session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProviderRecord {
    /// Identifier of the owning account.
    pub user_id: UserId,
    /// Display email, joined from the account profile.
    pub email: String,
    /// Contact number, joined from the account profile.
    pub phone: Option<String>,
    /// Skills as entered, order preserved. Never empty for a valid listing.
    pub skills: Vec<String>,
    /// Service locations as entered, order preserved. Never empty for a
    /// valid listing.
    pub locations: Vec<String>,
    /// Average rating, 0.0 when unrated.
    pub rating: f64,
    /// Free-text availability, e.g. "Mon-Fri 9AM-5PM".
    pub availability: Option<String>,
}

impl ProviderRecord {
    /// Whether the listing carries at least one rating.
    pub fn is_rated(&self) -> bool {
        self.rating > 0.0
    }
}

impl Default for ProviderRecord {
    fn default() -> Self {
        Self {
            user_id: UserId::new(),
            email: String::new(),
            phone: None,
            skills: Vec::new(),
            locations: Vec::new(),
            rating: 0.0,
            availability: None,
        }
    }
}
