//! Aggregates shaped for the profile page.

use serde::Serialize;

use crate::domain::profile::Profile;
use crate::domain::provider::ProviderRecord;

/// Everything the profile page renders: the account row and, for providers,
/// the listing that goes with it.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ProfilePage {
    pub profile: Profile,
    pub provider: Option<ProviderRecord>,
}
