//! The authenticated caller of a service operation

use pitch_core::{DomainError, Roles, Snowflake};

use super::error::{ServiceError, ServiceResult};

/// Who is calling, as established by the auth layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Snowflake,
    pub roles: Roles,
}

impl Actor {
    pub fn new(user_id: Snowflake, roles: Roles) -> Self {
        Self { user_id, roles }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.roles.is_admin()
    }

    #[inline]
    pub fn is(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }

    /// Allow the account owner only
    pub fn ensure_self(&self, user_id: Snowflake) -> ServiceResult<()> {
        if self.is(user_id) {
            Ok(())
        } else {
            Err(ServiceError::permission_denied("only the account owner may do this"))
        }
    }

    /// Allow the account owner or an admin
    pub fn ensure_self_or_admin(&self, user_id: Snowflake) -> ServiceResult<()> {
        if self.is(user_id) || self.is_admin() {
            Ok(())
        } else {
            Err(ServiceError::permission_denied(
                "only the account owner or an admin may do this",
            ))
        }
    }

    /// Allow the owner of `resource` only
    pub fn ensure_owner(&self, owner_id: Snowflake, resource: &'static str) -> ServiceResult<()> {
        if self.is(owner_id) {
            Ok(())
        } else {
            Err(DomainError::NotOwner(resource).into())
        }
    }

    /// Allow the owner of `resource` or an admin
    pub fn ensure_owner_or_admin(
        &self,
        owner_id: Snowflake,
        resource: &'static str,
    ) -> ServiceResult<()> {
        if self.is(owner_id) || self.is_admin() {
            Ok(())
        } else {
            Err(DomainError::NotOwner(resource).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: Snowflake = Snowflake::new(1);
    const OTHER: Snowflake = Snowflake::new(2);

    #[test]
    fn test_owner_checks() {
        let user = Actor::new(OWNER, Roles::USER);
        assert!(user.ensure_owner(OWNER, "advertisement").is_ok());
        let err = user.ensure_owner(OTHER, "advertisement").unwrap_err();
        assert_eq!(err.status_code(), 403);
        assert_eq!(err.error_code(), "NOT_OWNER");
    }

    #[test]
    fn test_admin_passes_owner_or_admin() {
        let admin = Actor::new(OTHER, Roles::ADMIN);
        assert!(admin.ensure_owner_or_admin(OWNER, "offer").is_ok());
        assert!(admin.ensure_self_or_admin(OWNER).is_ok());
        // Admins do not act as the account owner
        assert!(admin.ensure_self(OWNER).is_err());
        assert!(admin.ensure_owner(OWNER, "offer").is_err());
    }
}
