//! User identity shapes
//!
//! A [`User`] identifies a family member participating in the app. The
//! shape carries no behavior; uniqueness of `id` within a session's user
//! set is the caller's responsibility.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User validation error types
#[derive(Debug, Error)]
pub enum UserError {
    /// A required field was empty
    #[error("required field is empty: {0}")]
    EmptyField(&'static str),

    /// Email address is not structurally plausible
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// Result type for user operations
pub type Result<T> = std::result::Result<T, UserError>;

/// An application user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable user identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Avatar image reference (URL or asset key)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Create a user from the required fields
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }

    /// Set the avatar reference
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Validate the shape at a trust boundary
    ///
    /// Deserialization never runs this; callers opt in where malformed
    /// instances must not pass (session import, remote payloads).
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(UserError::EmptyField("id"));
        }
        if self.name.is_empty() {
            return Err(UserError::EmptyField("name"));
        }
        if self.email.is_empty() {
            return Err(UserError::EmptyField("email"));
        }
        // Structural plausibility only: one '@' with non-empty sides.
        let mut parts = self.email.splitn(2, '@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next();
        match domain {
            Some(domain) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(UserError::InvalidEmail(self.email.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_minimal_shape() {
        let user = User::new("u-1", "Ava", "ava@example.com");
        assert!(user.avatar.is_none());
        assert!(user.validate().is_ok());

        // Absent avatar is skipped on the wire
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("avatar"));
    }

    #[test]
    fn test_user_round_trip_with_avatar() {
        let user = User::new("u-2", "Ben", "ben@example.com")
            .with_avatar("https://cdn.example.com/avatars/ben.png");
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_user_validation_rejects_bad_email() {
        let mut user = User::new("u-3", "Cam", "not-an-email");
        assert!(matches!(user.validate(), Err(UserError::InvalidEmail(_))));

        user.email = "@example.com".to_string();
        assert!(matches!(user.validate(), Err(UserError::InvalidEmail(_))));

        user.email = String::new();
        assert!(matches!(user.validate(), Err(UserError::EmptyField("email"))));
    }

    #[test]
    fn test_user_deserializes_without_optional_fields() {
        let json = r#"{"id":"u-4","name":"Dee","email":"dee@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "Dee");
        assert!(user.avatar.is_none());
    }
}
