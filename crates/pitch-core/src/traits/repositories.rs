//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    AdvertisementKind, Chat, ClubAdvertisement, ClubHistory, ClubOffer, Favorite, Message,
    OfferStatus, PlayerAdvertisement, PlayerFoot, PlayerOffer, PlayerPosition, Problem,
    SalaryRange, User,
};
use crate::error::DomainError;
use crate::value_objects::{OfferStatusKind, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Advertisement list filter on `end_date`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityFilter {
    /// `end_date >= now`
    Active,
    /// `end_date < now`
    Inactive,
}

impl ActivityFilter {
    #[inline]
    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find several users at once; missing ids are skipped
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>>;

    /// Find user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// List every user except the unknown user
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update profile fields and roles
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()>;

    /// Move every row owned by `id` to `unknown_id`, then delete the user
    async fn delete_with_reassignment(&self, id: Snowflake, unknown_id: Snowflake)
        -> RepoResult<()>;

    /// Move every row owned by `id` to `unknown_id`, then make the user an admin
    async fn promote_with_reassignment(
        &self,
        id: Snowflake,
        unknown_id: Snowflake,
    ) -> RepoResult<()>;

    /// Count users, the unknown user excluded
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Lookup Repository
// ============================================================================

#[async_trait]
pub trait LookupRepository: Send + Sync {
    /// List player positions by name
    async fn find_positions(&self) -> RepoResult<Vec<PlayerPosition>>;

    /// Find player position by ID
    async fn find_position(&self, id: Snowflake) -> RepoResult<Option<PlayerPosition>>;

    /// Create a player position
    async fn create_position(&self, position: &PlayerPosition) -> RepoResult<()>;

    /// Rename a player position
    async fn update_position(&self, position: &PlayerPosition) -> RepoResult<()>;

    /// Delete a player position that nothing references
    async fn delete_position(&self, id: Snowflake) -> RepoResult<()>;

    /// List player feet by name
    async fn find_feet(&self) -> RepoResult<Vec<PlayerFoot>>;

    /// Find player foot by ID
    async fn find_foot(&self, id: Snowflake) -> RepoResult<Option<PlayerFoot>>;

    /// Create a player foot
    async fn create_foot(&self, foot: &PlayerFoot) -> RepoResult<()>;

    /// Rename a player foot
    async fn update_foot(&self, foot: &PlayerFoot) -> RepoResult<()>;

    /// Delete a player foot that nothing references
    async fn delete_foot(&self, id: Snowflake) -> RepoResult<()>;

    /// List offer statuses by id
    async fn find_offer_statuses(&self) -> RepoResult<Vec<OfferStatus>>;

    /// Find offer status by ID
    async fn find_offer_status(&self, id: Snowflake) -> RepoResult<Option<OfferStatus>>;
}

// ============================================================================
// Salary Range Repository
// ============================================================================

#[async_trait]
pub trait SalaryRangeRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<SalaryRange>>;

    async fn find_all(&self) -> RepoResult<Vec<SalaryRange>>;

    async fn create(&self, range: &SalaryRange) -> RepoResult<()>;

    async fn update(&self, range: &SalaryRange) -> RepoResult<()>;

    /// Delete a range no advertisement uses
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Advertisement Repositories
// ============================================================================

#[async_trait]
pub trait PlayerAdvertisementRepository: Send + Sync {
    /// Find advertisement by ID, with its salary range
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<PlayerAdvertisement>>;

    /// List every advertisement, newest end date first
    async fn find_all(&self) -> RepoResult<Vec<PlayerAdvertisement>>;

    /// List active advertisements, newest end date first
    async fn find_active(&self) -> RepoResult<Vec<PlayerAdvertisement>>;

    /// List a player's advertisements
    async fn find_by_owner(
        &self,
        player_id: Snowflake,
        filter: ActivityFilter,
    ) -> RepoResult<Vec<PlayerAdvertisement>>;

    /// List advertisements a user marked as favorite, paired with the favorite id
    async fn find_favorited_by(
        &self,
        user_id: Snowflake,
        filter: ActivityFilter,
    ) -> RepoResult<Vec<(Snowflake, PlayerAdvertisement)>>;

    /// Create the advertisement together with its salary range
    async fn create(&self, ad: &PlayerAdvertisement) -> RepoResult<()>;

    /// Update the advertisement fields and its salary range
    async fn update(&self, ad: &PlayerAdvertisement) -> RepoResult<()>;

    /// Set a new end date
    async fn renew(&self, id: Snowflake, end_date: DateTime<Utc>) -> RepoResult<()>;

    /// Delete the advertisement; offers and favorites cascade, the salary range goes with it
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    async fn count(&self) -> RepoResult<i64>;

    async fn count_active(&self) -> RepoResult<i64>;
}

#[async_trait]
pub trait ClubAdvertisementRepository: Send + Sync {
    /// Find advertisement by ID, with its salary range
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<ClubAdvertisement>>;

    /// List every advertisement, newest end date first
    async fn find_all(&self) -> RepoResult<Vec<ClubAdvertisement>>;

    /// List active advertisements, newest end date first
    async fn find_active(&self) -> RepoResult<Vec<ClubAdvertisement>>;

    /// List a club member's advertisements
    async fn find_by_owner(
        &self,
        club_member_id: Snowflake,
        filter: ActivityFilter,
    ) -> RepoResult<Vec<ClubAdvertisement>>;

    /// List advertisements a user marked as favorite, paired with the favorite id
    async fn find_favorited_by(
        &self,
        user_id: Snowflake,
        filter: ActivityFilter,
    ) -> RepoResult<Vec<(Snowflake, ClubAdvertisement)>>;

    /// Create the advertisement together with its salary range
    async fn create(&self, ad: &ClubAdvertisement) -> RepoResult<()>;

    /// Update the advertisement fields and its salary range
    async fn update(&self, ad: &ClubAdvertisement) -> RepoResult<()>;

    /// Set a new end date
    async fn renew(&self, id: Snowflake, end_date: DateTime<Utc>) -> RepoResult<()>;

    /// Delete the advertisement; offers and favorites cascade, the salary range goes with it
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    async fn count(&self) -> RepoResult<i64>;

    async fn count_active(&self) -> RepoResult<i64>;
}

// ============================================================================
// Offer Repositories
// ============================================================================

#[async_trait]
pub trait ClubOfferRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<ClubOffer>>;

    /// List every offer, newest first
    async fn find_all(&self) -> RepoResult<Vec<ClubOffer>>;

    /// Offers made on the player's advertisements
    async fn find_received(&self, player_id: Snowflake) -> RepoResult<Vec<ClubOffer>>;

    /// Offers the club member sent
    async fn find_sent(&self, club_member_id: Snowflake) -> RepoResult<Vec<ClubOffer>>;

    /// Check for a pending offer from the sender on the advertisement
    async fn has_pending(
        &self,
        player_advertisement_id: Snowflake,
        club_member_id: Snowflake,
    ) -> RepoResult<bool>;

    /// Insert a pending offer; a second pending offer from the same sender is `DuplicateOffer`
    async fn create(&self, offer: &ClubOffer) -> RepoResult<()>;

    /// Move a pending offer to `status`; `OfferNotPending` once it was answered
    async fn answer(&self, id: Snowflake, status: OfferStatusKind) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    async fn count(&self) -> RepoResult<i64>;
}

#[async_trait]
pub trait PlayerOfferRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<PlayerOffer>>;

    /// List every offer, newest first
    async fn find_all(&self) -> RepoResult<Vec<PlayerOffer>>;

    /// Offers made on the club member's advertisements
    async fn find_received(&self, club_member_id: Snowflake) -> RepoResult<Vec<PlayerOffer>>;

    /// Offers the player sent
    async fn find_sent(&self, player_id: Snowflake) -> RepoResult<Vec<PlayerOffer>>;

    /// Check for a pending offer from the sender on the advertisement
    async fn has_pending(
        &self,
        club_advertisement_id: Snowflake,
        player_id: Snowflake,
    ) -> RepoResult<bool>;

    /// Insert a pending offer; a second pending offer from the same sender is `DuplicateOffer`
    async fn create(&self, offer: &PlayerOffer) -> RepoResult<()>;

    /// Move a pending offer to `status`; `OfferNotPending` once it was answered
    async fn answer(&self, id: Snowflake, status: OfferStatusKind) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Favorite Repository
// ============================================================================

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn find_by_id(&self, kind: AdvertisementKind, id: Snowflake)
        -> RepoResult<Option<Favorite>>;

    /// Find the user's favorite for an advertisement
    async fn find_for(
        &self,
        kind: AdvertisementKind,
        advertisement_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<Favorite>>;

    /// Add a favorite; a duplicate (advertisement, user) pair is a conflict
    async fn create(&self, favorite: &Favorite) -> RepoResult<()>;

    async fn delete(&self, kind: AdvertisementKind, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Club History Repository
// ============================================================================

#[async_trait]
pub trait ClubHistoryRepository: Send + Sync {
    /// Find a record by ID, with its achievements
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<ClubHistory>>;

    async fn find_all(&self) -> RepoResult<Vec<ClubHistory>>;

    /// A player's career, most recent first
    async fn find_by_player(&self, player_id: Snowflake) -> RepoResult<Vec<ClubHistory>>;

    /// Create the record together with its achievements
    async fn create(&self, history: &ClubHistory) -> RepoResult<()>;

    /// Update the record and its achievements
    async fn update(&self, history: &ClubHistory) -> RepoResult<()>;

    /// Delete the record and its achievements
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Chat & Message Repositories
// ============================================================================

#[async_trait]
pub trait ChatRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Chat>>;

    async fn find_all(&self) -> RepoResult<Vec<Chat>>;

    /// Find the chat between two users, in either order
    async fn find_between(&self, user_a: Snowflake, user_b: Snowflake)
        -> RepoResult<Option<Chat>>;

    /// A user's chats, most recent message first
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Chat>>;

    /// Insert `chat` unless its pair already has one
    ///
    /// Returns the stored chat and whether it was created. Concurrent calls
    /// for the same pair yield a single chat.
    async fn create_or_get(&self, chat: &Chat) -> RepoResult<(Chat, bool)>;

    /// Delete the chat and its messages
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    async fn count(&self) -> RepoResult<i64>;
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Message>>;

    /// Every message, newest first
    async fn find_all(&self) -> RepoResult<Vec<Message>>;

    /// Messages of a chat, oldest first
    async fn find_by_chat(&self, chat_id: Snowflake) -> RepoResult<Vec<Message>>;

    async fn create(&self, message: &Message) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Problem Repository
// ============================================================================

#[async_trait]
pub trait ProblemRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Problem>>;

    /// Every problem, newest first
    async fn find_all(&self) -> RepoResult<Vec<Problem>>;

    /// Solved or unsolved problems, newest first
    async fn find_by_solved(&self, is_solved: bool) -> RepoResult<Vec<Problem>>;

    async fn create(&self, problem: &Problem) -> RepoResult<()>;

    async fn mark_solved(&self, id: Snowflake) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    async fn count(&self) -> RepoResult<i64>;

    async fn count_unsolved(&self) -> RepoResult<i64>;
}
