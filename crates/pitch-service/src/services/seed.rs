//! Startup seeding of the accounts the application relies on

use pitch_common::{hash_password, AdminSeedConfig};
use pitch_core::entities::User;
use pitch_core::Roles;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct SeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SeedService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Seed the unknown user and, when configured, an admin account
    pub async fn run(&self, admin: Option<&AdminSeedConfig>) -> ServiceResult<()> {
        self.ensure_unknown_user().await?;
        if let Some(admin) = admin {
            self.ensure_admin(admin).await?;
        }
        Ok(())
    }

    /// Create the sentinel account that inherits rows of deleted users
    ///
    /// Its password is a hash of a throwaway id; login refuses the account anyway.
    #[instrument(skip(self))]
    pub async fn ensure_unknown_user(&self) -> ServiceResult<User> {
        let user = match self.ctx.user_repo().find_by_email(User::UNKNOWN_EMAIL).await? {
            Some(user) => user,
            None => {
                let user = User::unknown(self.ctx.generate_id());
                let password_hash = hash_password(&self.ctx.generate_id().to_string())?;
                self.ctx.user_repo().create(&user, &password_hash).await?;
                info!(user_id = %user.id, "Unknown user seeded");
                user
            }
        };

        self.ctx.set_unknown_user_id(user.id);
        Ok(user)
    }

    /// Make sure the configured admin account exists and holds the admin role
    #[instrument(skip(self, config), fields(email = %config.email))]
    pub async fn ensure_admin(&self, config: &AdminSeedConfig) -> ServiceResult<User> {
        if let Some(mut user) = self.ctx.user_repo().find_by_email(&config.email).await? {
            if !user.roles.is_admin() {
                let unknown_id = self.ctx.unknown_user_id().await?;
                self.ctx
                    .user_repo()
                    .promote_with_reassignment(user.id, unknown_id)
                    .await?;
                user.roles = Roles::ADMIN;
                info!(user_id = %user.id, "Configured admin promoted");
            }
            return Ok(user);
        }

        let password_hash = self.ctx.password_service().hash_new(&config.password)?;
        let mut user = User::new(
            self.ctx.generate_id(),
            config.email.clone(),
            "Admin".to_string(),
            "Admin".to_string(),
            String::new(),
            String::new(),
        );
        user.roles = Roles::ADMIN;
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "Admin account seeded");
        Ok(user)
    }
}
