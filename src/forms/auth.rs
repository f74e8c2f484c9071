use serde::Deserialize;
use validator::Validate;

use crate::domain::profile::{AccountRole, NewAccount, SignupDetails};
use crate::domain::session::Credentials;
use crate::domain::types::{Email, PhoneNumber, TypeConstraintError};

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for signing in.
pub struct LoginForm {
    #[validate(email)]
    pub email: String,
    /// Minimum length matches what the hosted auth service enforces.
    #[validate(length(min = 6))]
    pub password: String,
}

impl LoginForm {
    /// Convert the validated form into [`Credentials`].
    pub fn into_credentials(self) -> Result<Credentials, TypeConstraintError> {
        Ok(Credentials {
            email: Email::new(self.email)?,
            password: self.password,
        })
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for creating an account. Role-specific requirements are
/// enforced in [`Self::into_new_account`], not by the derive.
pub struct SignupForm {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
    pub role: AccountRole,
    #[serde(default)]
    pub contact_number: String,
    /// Seeker home location.
    #[serde(default)]
    pub place: String,
    /// Provider skills, order as entered.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Provider service locations, order as entered.
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub availability: String,
}

impl SignupForm {
    /// Convert the validated form into a [`NewAccount`], applying the
    /// role-conditional requirements: providers need at least one skill and
    /// one location, seekers a non-blank place.
    pub fn into_new_account(self) -> Result<NewAccount, TypeConstraintError> {
        let details = match self.role {
            AccountRole::ServiceSeeker => SignupDetails::seeker(self.place)?,
            AccountRole::ServiceProvider => {
                SignupDetails::provider(self.skills, self.locations, Some(self.availability))?
            }
        };
        let contact_number = match self.contact_number.trim() {
            "" => None,
            raw => Some(PhoneNumber::new(raw)?),
        };
        Ok(NewAccount {
            email: Email::new(self.email)?,
            password: self.password,
            contact_number,
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeker_form() -> SignupForm {
        SignupForm {
            email: "sue@example.com".into(),
            password: "hunter22".into(),
            role: AccountRole::ServiceSeeker,
            contact_number: String::new(),
            place: "Queens".into(),
            skills: Vec::new(),
            locations: Vec::new(),
            availability: String::new(),
        }
    }

    #[test]
    fn short_password_fails_validation() {
        let mut form = seeker_form();
        form.password = "short".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn seeker_without_place_is_rejected() {
        let mut form = seeker_form();
        form.place = "  ".into();
        assert_eq!(
            form.into_new_account(),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn provider_without_skills_is_rejected() {
        let form = SignupForm {
            role: AccountRole::ServiceProvider,
            locations: vec!["Brooklyn".into()],
            ..seeker_form()
        };
        assert_eq!(
            form.into_new_account(),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn blank_contact_number_becomes_none() {
        let account = seeker_form().into_new_account().unwrap();
        assert_eq!(account.contact_number, None);
    }
}
