// ABOUTME: Authentication seam and the demo stub
// ABOUTME: Stub always succeeds and derives the display name from the email

use thiserror::Error;
use uuid::Uuid;

use crate::types::User;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingCredentials,
}

/// Identity provider seam. The demo ships [`StubAuthenticator`]; a real
/// deployment supplies its own implementation.
pub trait Authenticator {
    fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;
}

/// Always-succeeding authenticator: any non-empty credentials sign in, and
/// the display name is the email's local part.
#[derive(Debug, Default)]
pub struct StubAuthenticator;

impl Authenticator for StubAuthenticator {
    fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        let name = email.split('@').next().unwrap_or(email).to_string();
        tracing::info!(%email, "stub login");
        Ok(User {
            id: Uuid::new_v4().to_string(),
            name,
            email: email.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_email_local_part() {
        let user = StubAuthenticator.login("a@b.com", "x").unwrap();
        assert_eq!(user.name, "a");
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn test_email_without_at_sign_is_used_whole() {
        let user = StubAuthenticator.login("plainname", "pw").unwrap();
        assert_eq!(user.name, "plainname");
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        assert_eq!(
            StubAuthenticator.login("", "pw"),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(
            StubAuthenticator.login("a@b.com", ""),
            Err(AuthError::MissingCredentials)
        );
    }
}
