//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity.
///
/// `id` is a 64-bit value rendered as a decimal string so large ids
/// survive JSON transport without precision loss. The `password` field
/// is stored and serialized in plain form: this mirrors the wire
/// contract clients already depend on, and is a known security gap of
/// that contract rather than a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, immutable once assigned
    #[schema(example = "101881357690929152")]
    pub id: String,
    /// Display name
    #[schema(example = "alice")]
    pub name: String,
    /// Account password
    #[schema(example = "pw1")]
    pub password: String,
}

/// Partial-update payload for a user.
///
/// Only fields carrying a non-empty value are written; omitted and
/// empty-string fields leave the stored column untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    /// New display name
    #[schema(example = "alice")]
    pub name: Option<String>,
    /// New password
    #[schema(example = "pw2")]
    pub password: Option<String>,
}

impl UpdateUser {
    /// Name to write, if one was effectively supplied.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    /// Password to write, if one was effectively supplied.
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|s| !s.is_empty())
    }

    /// True when the patch carries nothing to write.
    pub fn is_empty(&self) -> bool {
        self.name().is_none() && self.password().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_count_as_absent() {
        let patch = UpdateUser {
            name: Some(String::new()),
            password: Some(String::new()),
        };
        assert!(patch.is_empty());
        assert!(patch.name().is_none());
        assert!(patch.password().is_none());
    }

    #[test]
    fn default_patch_is_empty() {
        assert!(UpdateUser::default().is_empty());
    }

    #[test]
    fn supplied_fields_are_exposed() {
        let patch = UpdateUser {
            name: Some("alice".into()),
            password: None,
        };
        assert!(!patch.is_empty());
        assert_eq!(patch.name(), Some("alice"));
        assert!(patch.password().is_none());
    }
}
