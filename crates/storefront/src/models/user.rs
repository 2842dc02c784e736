//! User domain types.

use serde::{Deserialize, Serialize};

use atelier_core::UserId;

/// A signed-in shopper.
///
/// The email is stored as entered; sign-in is mocked and performs no
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Freshly generated on every sign-in.
    pub id: UserId,
    pub email: String,
    /// Display name, only set by signup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    /// Name to greet the user with: the display name, or the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_name_omitted_when_absent() {
        let user = User {
            id: UserId::generate(),
            email: "ada@example.com".to_string(),
            name: None,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("name").is_none());
        assert_eq!(user.display_name(), "ada@example.com");
    }

    #[test]
    fn test_display_name_prefers_name() {
        let user = User {
            id: UserId::generate(),
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
        };
        assert_eq!(user.display_name(), "Ada");
    }
}
