//! Account roles and the named authorization policies built from them

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Role claims carried by an account
    ///
    /// Stored as SMALLINT, serialized as a list of role names.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Roles: i16 {
        /// Regular platform participant (players and club members)
        const USER  = 1 << 0;
        /// Administrator
        const ADMIN = 1 << 1;
    }
}

impl Roles {
    pub const USER_NAME: &'static str = "User";
    pub const ADMIN_NAME: &'static str = "Admin";

    /// Role names in claim order
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(2);
        if self.contains(Self::ADMIN) {
            names.push(Self::ADMIN_NAME);
        }
        if self.contains(Self::USER) {
            names.push(Self::USER_NAME);
        }
        names
    }

    /// Build from role names, ignoring names that are not roles
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .fold(Roles::empty(), |acc, name| match name.as_ref() {
                Self::ADMIN_NAME => acc | Roles::ADMIN,
                Self::USER_NAME => acc | Roles::USER,
                _ => acc,
            })
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.contains(Roles::ADMIN)
    }

    /// Raw bits for database storage
    #[inline]
    pub fn to_i16(self) -> i16 {
        self.bits()
    }

    /// From database bits; unknown bits are dropped
    #[inline]
    pub fn from_i16(bits: i16) -> Self {
        Roles::from_bits_truncate(bits)
    }
}

impl Default for Roles {
    fn default() -> Self {
        Roles::USER
    }
}

impl fmt::Display for Roles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join(","))
    }
}

impl Serialize for Roles {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.names().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Roles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let names = Vec::<String>::deserialize(deserializer)?;
        Ok(Roles::from_names(names))
    }
}

/// Named authorization policies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Requires the `Admin` role
    Admin,
    /// Requires the `User` role
    User,
    /// Requires either role
    AdminOrUser,
}

impl Policy {
    /// Roles that satisfy this policy
    pub fn required_roles(&self) -> Roles {
        match self {
            Self::Admin => Roles::ADMIN,
            Self::User => Roles::USER,
            Self::AdminOrUser => Roles::ADMIN | Roles::USER,
        }
    }

    /// Check whether the given roles satisfy this policy
    #[inline]
    pub fn allows(&self, roles: Roles) -> bool {
        roles.intersects(self.required_roles())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Admin => "AdminPolicy",
            Self::User => "UserPolicy",
            Self::AdminOrUser => "AdminOrUserPolicy",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        let roles = Roles::ADMIN | Roles::USER;
        assert_eq!(roles.names(), vec!["Admin", "User"]);
        assert_eq!(Roles::from_names(roles.names()), roles);
    }

    #[test]
    fn test_from_names_ignores_unknown() {
        assert_eq!(Roles::from_names(["User", "Owner"]), Roles::USER);
        assert!(Roles::from_names(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_serialize_as_list() {
        let json = serde_json::to_string(&Roles::ADMIN).unwrap();
        assert_eq!(json, "[\"Admin\"]");

        let roles: Roles = serde_json::from_str("[\"User\"]").unwrap();
        assert_eq!(roles, Roles::USER);
    }

    #[test]
    fn test_database_bits() {
        assert_eq!(Roles::from_i16(Roles::ADMIN.to_i16()), Roles::ADMIN);
        assert_eq!(Roles::from_i16(0x70), Roles::empty());
    }

    #[test]
    fn test_policies() {
        assert!(Policy::Admin.allows(Roles::ADMIN));
        assert!(!Policy::Admin.allows(Roles::USER));
        assert!(Policy::User.allows(Roles::USER));
        assert!(!Policy::User.allows(Roles::ADMIN));
        assert!(Policy::AdminOrUser.allows(Roles::ADMIN));
        assert!(Policy::AdminOrUser.allows(Roles::USER));
        assert!(!Policy::AdminOrUser.allows(Roles::empty()));
    }
}
