//! User entity - a platform account (player, club member or admin)

use chrono::{DateTime, Utc};

use crate::value_objects::{Roles, Snowflake};

/// User account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub location: String,
    pub roles: Roles,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// E-mail of the sentinel account that inherits rows of deleted users
    pub const UNKNOWN_EMAIL: &'static str = "unknown@unknown.com";

    /// Create a new User with the `User` role
    pub fn new(
        id: Snowflake,
        email: String,
        first_name: String,
        last_name: String,
        phone_number: String,
        location: String,
    ) -> Self {
        Self {
            id,
            email,
            first_name,
            last_name,
            phone_number,
            location,
            roles: Roles::USER,
            created_at: Utc::now(),
        }
    }

    /// The sentinel "unknown" user
    pub fn unknown(id: Snowflake) -> Self {
        Self::new(
            id,
            Self::UNKNOWN_EMAIL.to_string(),
            "Unknown".to_string(),
            "Unknown".to_string(),
            "Unknown".to_string(),
            "Unknown".to_string(),
        )
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.roles.is_admin()
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.email.eq_ignore_ascii_case(Self::UNKNOWN_EMAIL)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Replace profile fields
    pub fn update_profile(
        &mut self,
        first_name: String,
        last_name: String,
        phone_number: String,
        location: String,
    ) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.phone_number = phone_number;
        self.location = location;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::new(
            Snowflake::new(1),
            "jan@example.com".to_string(),
            "Jan".to_string(),
            "Kowalski".to_string(),
            "123456789".to_string(),
            "Warsaw".to_string(),
        )
    }

    #[test]
    fn test_new_user_has_user_role() {
        let user = sample();
        assert_eq!(user.roles, Roles::USER);
        assert!(!user.is_admin());
        assert!(!user.is_unknown());
    }

    #[test]
    fn test_unknown_user() {
        let user = User::unknown(Snowflake::new(9));
        assert!(user.is_unknown());
        assert_eq!(user.email, "unknown@unknown.com");
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample().full_name(), "Jan Kowalski");
    }
}
