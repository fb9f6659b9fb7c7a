//! # User model as it crosses the REST boundary
//!
//! [`UserInfo`] is the client-side projection of the backend's user record:
//! identity, role, and the premium subscription flags. It is `Serialize +
//! Deserialize + PartialEq` so it can travel through JSON responses and the
//! persisted credential slot alike.
//!
//! [`UserRole`] carries the community permission ladder shared by the
//! sub-apps. The helpers on it mirror the backend's access rules: trusted
//! users may edit any community post, moderators may also delete them, and
//! admins may do everything. Ownership always wins regardless of role.

use serde::{Deserialize, Serialize};

/// Community role, ordered from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User,
    TrustedUser,
    Moderator,
    Representative,
    BusinessOwner,
    Admin,
}

impl UserRole {
    /// Roles that may edit community content they do not own.
    pub fn can_edit_any(&self) -> bool {
        !matches!(self, UserRole::User)
    }

    /// Roles that may delete community content they do not own.
    pub fn can_moderate(&self) -> bool {
        matches!(self, UserRole::Moderator | UserRole::Admin)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

/// User record returned by `/auth/me` and embedded in the login response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub is_premium: bool,
    pub show_premium_badge: bool,
}

impl UserInfo {
    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Whether this user may edit a piece of content owned by `owner_id`.
    pub fn can_edit_content(&self, owner_id: &str) -> bool {
        self.id == owner_id || self.role.can_edit_any()
    }

    /// Whether this user may delete a piece of content owned by `owner_id`.
    pub fn can_delete_content(&self, owner_id: &str) -> bool {
        self.id == owner_id || self.role.can_moderate()
    }

    /// Whether the premium badge should be rendered next to the name.
    pub fn premium_badge(&self) -> bool {
        self.is_premium && self.show_premium_badge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: UserRole) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            email: "a@example.com".to_string(),
            name: "Ana".to_string(),
            role,
            is_premium: false,
            show_premium_badge: false,
        }
    }

    #[test]
    fn test_role_serde_is_snake_case() {
        assert_eq!(
            serde_json::to_string(&UserRole::TrustedUser).unwrap(),
            "\"trusted_user\""
        );
        assert_eq!(
            serde_json::from_str::<UserRole>("\"business_owner\"").unwrap(),
            UserRole::BusinessOwner
        );
    }

    #[test]
    fn test_ownership_always_wins() {
        let user = user_with_role(UserRole::User);
        assert!(user.can_edit_content("u1"));
        assert!(user.can_delete_content("u1"));
        assert!(!user.can_edit_content("someone-else"));
        assert!(!user.can_delete_content("someone-else"));
    }

    #[test]
    fn test_permission_ladder() {
        let trusted = user_with_role(UserRole::TrustedUser);
        assert!(trusted.can_edit_content("other"));
        assert!(!trusted.can_delete_content("other"));

        let moderator = user_with_role(UserRole::Moderator);
        assert!(moderator.can_edit_content("other"));
        assert!(moderator.can_delete_content("other"));

        assert!(UserRole::Admin.can_moderate());
        assert!(!UserRole::Representative.can_moderate());
        assert!(UserRole::Representative.can_edit_any());
    }

    #[test]
    fn test_premium_badge_needs_both_flags() {
        let mut user = user_with_role(UserRole::User);
        assert!(!user.premium_badge());
        user.is_premium = true;
        assert!(!user.premium_badge());
        user.show_premium_badge = true;
        assert!(user.premium_badge());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = user_with_role(UserRole::User);
        assert_eq!(user.display_name(), "Ana");
        user.name.clear();
        assert_eq!(user.display_name(), "a@example.com");
    }
}
