use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A signed-in demo user. Exists only in memory; dropping it is the logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Email address is required.")]
    EmptyEmail,
    #[error("Password is required.")]
    EmptyPassword,
}

/// Capability boundary for sign-in. The dashboard only depends on this trait,
/// so a real identity provider can replace [`DemoVerifier`] wholesale.
pub trait CredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> Result<Session, AuthError>;
}

/// Accepts any non-empty email/password pair without checking anything.
pub struct DemoVerifier;

impl CredentialVerifier for DemoVerifier {
    fn verify(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email.trim().is_empty() {
            return Err(AuthError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        Ok(Session {
            id: Uuid::new_v4(),
            name: display_name(email),
            email: email.to_string(),
        })
    }
}

/// Derives the display name from the email local part (everything before the
/// `@`), with the first character uppercased: `jane.doe@example.com` becomes
/// `Jane.doe`.
pub fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("jane.doe@example.com", "Jane.doe")]
    #[case("bob@clinic.org", "Bob")]
    #[case("x@y", "X")]
    #[case("radiology@", "Radiology")]
    #[case("nodomain", "Nodomain")]
    fn display_name_is_capitalized_local_part(#[case] email: &str, #[case] expected: &str) {
        assert_eq!(display_name(email), expected);
    }

    #[test]
    fn any_non_empty_pair_signs_in() {
        let session = DemoVerifier
            .verify("jane.doe@example.com", "hunter2")
            .unwrap();
        assert_eq!(session.name, "Jane.doe");
        assert_eq!(session.email, "jane.doe@example.com");
    }

    #[test]
    fn sessions_get_distinct_ids() {
        let a = DemoVerifier.verify("a@b", "pw").unwrap();
        let b = DemoVerifier.verify("a@b", "pw").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[rstest]
    #[case("", "pw", AuthError::EmptyEmail)]
    #[case("   ", "pw", AuthError::EmptyEmail)]
    #[case("a@b", "", AuthError::EmptyPassword)]
    fn empty_credentials_are_rejected(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: AuthError,
    ) {
        assert_eq!(DemoVerifier.verify(email, password), Err(expected));
    }
}
