//! Service context - dependency container for services
//!
//! Holds the pool, all repositories and the auth helpers needed by services.

use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use pitch_common::auth::{JwtService, PasswordService};
use pitch_core::traits::{
    ChatRepository, ClubAdvertisementRepository, ClubHistoryRepository, ClubOfferRepository,
    FavoriteRepository, LookupRepository, MessageRepository, PlayerAdvertisementRepository,
    PlayerOfferRepository, ProblemRepository, SalaryRangeRepository, UserRepository,
};
use pitch_core::{Snowflake, SnowflakeGenerator, User};
use pitch_db::{
    PgChatRepository, PgClubAdvertisementRepository, PgClubHistoryRepository,
    PgClubOfferRepository, PgFavoriteRepository, PgLookupRepository, PgMessageRepository,
    PgPlayerAdvertisementRepository, PgPlayerOfferRepository, PgPool, PgProblemRepository,
    PgSalaryRangeRepository, PgUserRepository,
};

use crate::dto::Related;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap; every field is shared.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    lookup_repo: Arc<dyn LookupRepository>,
    salary_range_repo: Arc<dyn SalaryRangeRepository>,
    player_advertisement_repo: Arc<dyn PlayerAdvertisementRepository>,
    club_advertisement_repo: Arc<dyn ClubAdvertisementRepository>,
    club_offer_repo: Arc<dyn ClubOfferRepository>,
    player_offer_repo: Arc<dyn PlayerOfferRepository>,
    favorite_repo: Arc<dyn FavoriteRepository>,
    club_history_repo: Arc<dyn ClubHistoryRepository>,
    chat_repo: Arc<dyn ChatRepository>,
    message_repo: Arc<dyn MessageRepository>,
    problem_repo: Arc<dyn ProblemRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    password_service: Arc<PasswordService>,
    snowflake_generator: Arc<SnowflakeGenerator>,

    /// Id of the sentinel account, resolved on first use
    unknown_user_id: Arc<OnceLock<Snowflake>>,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn lookup_repo(&self) -> &dyn LookupRepository {
        self.lookup_repo.as_ref()
    }

    pub fn salary_range_repo(&self) -> &dyn SalaryRangeRepository {
        self.salary_range_repo.as_ref()
    }

    pub fn player_advertisement_repo(&self) -> &dyn PlayerAdvertisementRepository {
        self.player_advertisement_repo.as_ref()
    }

    pub fn club_advertisement_repo(&self) -> &dyn ClubAdvertisementRepository {
        self.club_advertisement_repo.as_ref()
    }

    pub fn club_offer_repo(&self) -> &dyn ClubOfferRepository {
        self.club_offer_repo.as_ref()
    }

    pub fn player_offer_repo(&self) -> &dyn PlayerOfferRepository {
        self.player_offer_repo.as_ref()
    }

    pub fn favorite_repo(&self) -> &dyn FavoriteRepository {
        self.favorite_repo.as_ref()
    }

    pub fn club_history_repo(&self) -> &dyn ClubHistoryRepository {
        self.club_history_repo.as_ref()
    }

    pub fn chat_repo(&self) -> &dyn ChatRepository {
        self.chat_repo.as_ref()
    }

    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    pub fn problem_repo(&self) -> &dyn ProblemRepository {
        self.problem_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the password hashing service
    pub fn password_service(&self) -> &PasswordService {
        self.password_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }

    // === Shared lookups ===

    /// Id of the sentinel "unknown" user
    ///
    /// # Errors
    /// Returns an internal error when the account has not been seeded
    pub async fn unknown_user_id(&self) -> ServiceResult<Snowflake> {
        if let Some(id) = self.unknown_user_id.get() {
            return Ok(*id);
        }

        let user = self
            .user_repo()
            .find_by_email(User::UNKNOWN_EMAIL)
            .await?
            .ok_or_else(|| ServiceError::internal("unknown user has not been seeded"))?;

        Ok(*self.unknown_user_id.get_or_init(|| user.id))
    }

    /// Remember the sentinel id after seeding
    pub(crate) fn set_unknown_user_id(&self, id: Snowflake) {
        let _ = self.unknown_user_id.set(id);
    }

    /// Load the lookup tables and the given users for embedding in responses
    pub async fn related<I>(&self, user_ids: I) -> ServiceResult<Related>
    where
        I: IntoIterator<Item = Snowflake>,
    {
        let ids: Vec<Snowflake> = user_ids
            .into_iter()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let positions = self.lookup_repo().find_positions().await?;
        let feet = self.lookup_repo().find_feet().await?;
        let users = self.user_repo().find_by_ids(&ids).await?;

        Ok(Related::new(positions, feet, users))
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    lookup_repo: Option<Arc<dyn LookupRepository>>,
    salary_range_repo: Option<Arc<dyn SalaryRangeRepository>>,
    player_advertisement_repo: Option<Arc<dyn PlayerAdvertisementRepository>>,
    club_advertisement_repo: Option<Arc<dyn ClubAdvertisementRepository>>,
    club_offer_repo: Option<Arc<dyn ClubOfferRepository>>,
    player_offer_repo: Option<Arc<dyn PlayerOfferRepository>>,
    favorite_repo: Option<Arc<dyn FavoriteRepository>>,
    club_history_repo: Option<Arc<dyn ClubHistoryRepository>>,
    chat_repo: Option<Arc<dyn ChatRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    problem_repo: Option<Arc<dyn ProblemRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    password_service: Option<Arc<PasswordService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the pool and a PostgreSQL repository for every slot
    pub fn postgres(self, pool: PgPool) -> Self {
        Self {
            user_repo: Some(Arc::new(PgUserRepository::new(pool.clone()))),
            lookup_repo: Some(Arc::new(PgLookupRepository::new(pool.clone()))),
            salary_range_repo: Some(Arc::new(PgSalaryRangeRepository::new(pool.clone()))),
            player_advertisement_repo: Some(Arc::new(PgPlayerAdvertisementRepository::new(
                pool.clone(),
            ))),
            club_advertisement_repo: Some(Arc::new(PgClubAdvertisementRepository::new(
                pool.clone(),
            ))),
            club_offer_repo: Some(Arc::new(PgClubOfferRepository::new(pool.clone()))),
            player_offer_repo: Some(Arc::new(PgPlayerOfferRepository::new(pool.clone()))),
            favorite_repo: Some(Arc::new(PgFavoriteRepository::new(pool.clone()))),
            club_history_repo: Some(Arc::new(PgClubHistoryRepository::new(pool.clone()))),
            chat_repo: Some(Arc::new(PgChatRepository::new(pool.clone()))),
            message_repo: Some(Arc::new(PgMessageRepository::new(pool.clone()))),
            problem_repo: Some(Arc::new(PgProblemRepository::new(pool.clone()))),
            pool: Some(pool),
            ..self
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn lookup_repo(mut self, repo: Arc<dyn LookupRepository>) -> Self {
        self.lookup_repo = Some(repo);
        self
    }

    pub fn salary_range_repo(mut self, repo: Arc<dyn SalaryRangeRepository>) -> Self {
        self.salary_range_repo = Some(repo);
        self
    }

    pub fn player_advertisement_repo(
        mut self,
        repo: Arc<dyn PlayerAdvertisementRepository>,
    ) -> Self {
        self.player_advertisement_repo = Some(repo);
        self
    }

    pub fn club_advertisement_repo(mut self, repo: Arc<dyn ClubAdvertisementRepository>) -> Self {
        self.club_advertisement_repo = Some(repo);
        self
    }

    pub fn club_offer_repo(mut self, repo: Arc<dyn ClubOfferRepository>) -> Self {
        self.club_offer_repo = Some(repo);
        self
    }

    pub fn player_offer_repo(mut self, repo: Arc<dyn PlayerOfferRepository>) -> Self {
        self.player_offer_repo = Some(repo);
        self
    }

    pub fn favorite_repo(mut self, repo: Arc<dyn FavoriteRepository>) -> Self {
        self.favorite_repo = Some(repo);
        self
    }

    pub fn club_history_repo(mut self, repo: Arc<dyn ClubHistoryRepository>) -> Self {
        self.club_history_repo = Some(repo);
        self
    }

    pub fn chat_repo(mut self, repo: Arc<dyn ChatRepository>) -> Self {
        self.chat_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn problem_repo(mut self, repo: Arc<dyn ProblemRepository>) -> Self {
        self.problem_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn password_service(mut self, service: Arc<PasswordService>) -> Self {
        self.password_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        Ok(ServiceContext {
            pool: required(self.pool, "pool")?,
            user_repo: required(self.user_repo, "user_repo")?,
            lookup_repo: required(self.lookup_repo, "lookup_repo")?,
            salary_range_repo: required(self.salary_range_repo, "salary_range_repo")?,
            player_advertisement_repo: required(
                self.player_advertisement_repo,
                "player_advertisement_repo",
            )?,
            club_advertisement_repo: required(
                self.club_advertisement_repo,
                "club_advertisement_repo",
            )?,
            club_offer_repo: required(self.club_offer_repo, "club_offer_repo")?,
            player_offer_repo: required(self.player_offer_repo, "player_offer_repo")?,
            favorite_repo: required(self.favorite_repo, "favorite_repo")?,
            club_history_repo: required(self.club_history_repo, "club_history_repo")?,
            chat_repo: required(self.chat_repo, "chat_repo")?,
            message_repo: required(self.message_repo, "message_repo")?,
            problem_repo: required(self.problem_repo, "problem_repo")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            password_service: self.password_service.unwrap_or_default(),
            snowflake_generator: self.snowflake_generator.unwrap_or_default(),
            unknown_user_id: Arc::new(OnceLock::new()),
        })
    }
}
