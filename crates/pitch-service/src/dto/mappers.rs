//! Entity to DTO mappers
//!
//! Plain rows convert with `From`. Resources that embed lookups or users go
//! through [`Related`], which holds the rows they point at.

use std::collections::HashMap;

use chrono::Utc;
use pitch_core::entities::{
    Achievements, Chat, ClubAdvertisement, ClubHistory, ClubOffer, Favorite, Message,
    OfferStatus, PlayerAdvertisement, PlayerFoot, PlayerOffer, PlayerPosition, Problem,
    SalaryRange, User,
};
use pitch_core::{DomainError, OfferStatusKind, Snowflake};

use super::responses::{
    AchievementsResponse, ChatResponse, ClubAdvertisementResponse, ClubHistoryResponse,
    ClubOfferResponse, FavoriteClubAdvertisementResponse, FavoritePlayerAdvertisementResponse,
    FavoriteResponse, MessageResponse, OfferStatusResponse, PlayerAdvertisementResponse,
    PlayerFootResponse, PlayerOfferResponse, PlayerPositionResponse, ProblemResponse,
    SalaryRangeResponse, UserResponse, UserSummaryResponse,
};

// ============================================================================
// Plain Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone_number: user.phone_number.clone(),
            location: user.location.clone(),
            roles: user.roles,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&User> for UserSummaryResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

impl From<&PlayerPosition> for PlayerPositionResponse {
    fn from(position: &PlayerPosition) -> Self {
        Self {
            id: position.id,
            position_name: position.position_name.clone(),
        }
    }
}

impl From<PlayerPosition> for PlayerPositionResponse {
    fn from(position: PlayerPosition) -> Self {
        Self {
            id: position.id,
            position_name: position.position_name,
        }
    }
}

impl From<&PlayerFoot> for PlayerFootResponse {
    fn from(foot: &PlayerFoot) -> Self {
        Self {
            id: foot.id,
            name: foot.name.clone(),
        }
    }
}

impl From<PlayerFoot> for PlayerFootResponse {
    fn from(foot: PlayerFoot) -> Self {
        Self {
            id: foot.id,
            name: foot.name,
        }
    }
}

impl From<OfferStatus> for OfferStatusResponse {
    fn from(status: OfferStatus) -> Self {
        Self {
            id: status.id,
            status_name: status.status_name,
        }
    }
}

impl From<OfferStatusKind> for OfferStatusResponse {
    fn from(kind: OfferStatusKind) -> Self {
        Self::from(OfferStatus::from(kind))
    }
}

impl From<&SalaryRange> for SalaryRangeResponse {
    fn from(range: &SalaryRange) -> Self {
        Self {
            id: range.id,
            min: range.min,
            max: range.max,
        }
    }
}

impl From<&Achievements> for AchievementsResponse {
    fn from(achievements: &Achievements) -> Self {
        Self {
            id: achievements.id,
            number_of_matches: achievements.number_of_matches,
            goals: achievements.goals,
            assists: achievements.assists,
            additional_achievements: achievements.additional_achievements.clone(),
        }
    }
}

impl From<&Favorite> for FavoriteResponse {
    fn from(favorite: &Favorite) -> Self {
        Self {
            id: favorite.id,
            advertisement_id: favorite.advertisement_id,
            user_id: favorite.user_id,
        }
    }
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            chat_id: message.chat_id,
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
            content: message.content.clone(),
            timestamp: message.timestamp,
        }
    }
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            chat_id: message.chat_id,
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
            content: message.content,
            timestamp: message.timestamp,
        }
    }
}

// ============================================================================
// Related Rows
// ============================================================================

/// Lookup rows and users referenced by a batch of resources
///
/// A reference that is not in the catalog maps to the matching not-found error.
#[derive(Debug, Clone, Default)]
pub struct Related {
    positions: HashMap<Snowflake, PlayerPosition>,
    feet: HashMap<Snowflake, PlayerFoot>,
    users: HashMap<Snowflake, User>,
}

impl Related {
    pub fn new(positions: Vec<PlayerPosition>, feet: Vec<PlayerFoot>, users: Vec<User>) -> Self {
        Self {
            positions: positions.into_iter().map(|p| (p.id, p)).collect(),
            feet: feet.into_iter().map(|f| (f.id, f)).collect(),
            users: users.into_iter().map(|u| (u.id, u)).collect(),
        }
    }

    pub fn user(&self, id: Snowflake) -> Result<&User, DomainError> {
        self.users.get(&id).ok_or(DomainError::UserNotFound(id))
    }

    pub fn user_summary(&self, id: Snowflake) -> Result<UserSummaryResponse, DomainError> {
        self.user(id).map(UserSummaryResponse::from)
    }

    pub fn position(&self, id: Snowflake) -> Result<PlayerPositionResponse, DomainError> {
        self.positions
            .get(&id)
            .map(PlayerPositionResponse::from)
            .ok_or(DomainError::PlayerPositionNotFound(id))
    }

    pub fn foot(&self, id: Snowflake) -> Result<PlayerFootResponse, DomainError> {
        self.feet
            .get(&id)
            .map(PlayerFootResponse::from)
            .ok_or(DomainError::PlayerFootNotFound(id))
    }

    pub fn player_advertisement(
        &self,
        ad: &PlayerAdvertisement,
    ) -> Result<PlayerAdvertisementResponse, DomainError> {
        Ok(PlayerAdvertisementResponse {
            id: ad.id,
            player: self.user_summary(ad.player_id)?,
            player_position: self.position(ad.player_position_id)?,
            league: ad.league.clone(),
            region: ad.region.clone(),
            age: ad.age,
            height: ad.height,
            player_foot: self.foot(ad.player_foot_id)?,
            salary_range: SalaryRangeResponse::from(&ad.salary_range),
            creation_date: ad.creation_date,
            end_date: ad.end_date,
            is_active: ad.is_active_at(Utc::now()),
        })
    }

    pub fn club_advertisement(
        &self,
        ad: &ClubAdvertisement,
    ) -> Result<ClubAdvertisementResponse, DomainError> {
        Ok(ClubAdvertisementResponse {
            id: ad.id,
            club_member: self.user_summary(ad.club_member_id)?,
            player_position: self.position(ad.player_position_id)?,
            club_name: ad.club_name.clone(),
            league: ad.league.clone(),
            region: ad.region.clone(),
            salary_range: SalaryRangeResponse::from(&ad.salary_range),
            creation_date: ad.creation_date,
            end_date: ad.end_date,
            is_active: ad.is_active_at(Utc::now()),
        })
    }

    pub fn favorite_player_advertisement(
        &self,
        favorite_id: Snowflake,
        user_id: Snowflake,
        ad: &PlayerAdvertisement,
    ) -> Result<FavoritePlayerAdvertisementResponse, DomainError> {
        Ok(FavoritePlayerAdvertisementResponse {
            id: favorite_id,
            user_id,
            player_advertisement: self.player_advertisement(ad)?,
        })
    }

    pub fn favorite_club_advertisement(
        &self,
        favorite_id: Snowflake,
        user_id: Snowflake,
        ad: &ClubAdvertisement,
    ) -> Result<FavoriteClubAdvertisementResponse, DomainError> {
        Ok(FavoriteClubAdvertisementResponse {
            id: favorite_id,
            user_id,
            club_advertisement: self.club_advertisement(ad)?,
        })
    }

    pub fn club_offer(&self, offer: &ClubOffer) -> Result<ClubOfferResponse, DomainError> {
        Ok(ClubOfferResponse {
            id: offer.id,
            player_advertisement_id: offer.player_advertisement_id,
            offer_status: OfferStatusResponse::from(offer.status),
            club_name: offer.club_name.clone(),
            league: offer.league.clone(),
            region: offer.region.clone(),
            player_position: self.position(offer.player_position_id)?,
            salary: offer.salary,
            additional_information: offer.additional_information.clone(),
            creation_date: offer.creation_date,
            club_member: self.user_summary(offer.club_member_id)?,
        })
    }

    pub fn player_offer(&self, offer: &PlayerOffer) -> Result<PlayerOfferResponse, DomainError> {
        Ok(PlayerOfferResponse {
            id: offer.id,
            club_advertisement_id: offer.club_advertisement_id,
            offer_status: OfferStatusResponse::from(offer.status),
            player_position: self.position(offer.player_position_id)?,
            age: offer.age,
            height: offer.height,
            player_foot: self.foot(offer.player_foot_id)?,
            salary: offer.salary,
            additional_information: offer.additional_information.clone(),
            creation_date: offer.creation_date,
            player: self.user_summary(offer.player_id)?,
        })
    }

    pub fn club_history(&self, history: &ClubHistory) -> Result<ClubHistoryResponse, DomainError> {
        Ok(ClubHistoryResponse {
            id: history.id,
            achievements: AchievementsResponse::from(&history.achievements),
            club_name: history.club_name.clone(),
            league: history.league.clone(),
            region: history.region.clone(),
            start_date: history.start_date,
            end_date: history.end_date,
            player_position: self.position(history.player_position_id)?,
            player: self.user_summary(history.player_id)?,
        })
    }

    pub fn chat(&self, chat: &Chat) -> Result<ChatResponse, DomainError> {
        Ok(ChatResponse {
            id: chat.id,
            user1: self.user_summary(chat.user1_id)?,
            user2: self.user_summary(chat.user2_id)?,
        })
    }

    pub fn problem(&self, problem: &Problem) -> Result<ProblemResponse, DomainError> {
        Ok(ProblemResponse {
            id: problem.id,
            title: problem.title.clone(),
            description: problem.description.clone(),
            is_solved: problem.is_solved,
            creation_date: problem.creation_date,
            requester: self.user_summary(problem.requester_id)?,
        })
    }

    /// Map a batch, failing on the first dangling reference
    pub fn map_all<T, R, F>(&self, items: &[T], f: F) -> Result<Vec<R>, DomainError>
    where
        F: Fn(&Self, &T) -> Result<R, DomainError>,
    {
        items.iter().map(|item| f(self, item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn related() -> Related {
        Related::new(
            vec![PlayerPosition {
                id: Snowflake::new(10),
                position_name: "Striker".to_string(),
            }],
            vec![PlayerFoot {
                id: Snowflake::new(2),
                name: "Right".to_string(),
            }],
            vec![User::new(
                Snowflake::new(100),
                "jan@example.com".to_string(),
                "Jan".to_string(),
                "Kowalski".to_string(),
                "600100200".to_string(),
                "Warszawa".to_string(),
            )],
        )
    }

    fn player_ad(player_id: Snowflake) -> PlayerAdvertisement {
        let now = Utc::now();
        PlayerAdvertisement {
            id: Snowflake::new(1),
            player_id,
            player_position_id: Snowflake::new(10),
            league: "III liga".to_string(),
            region: "Mazowieckie".to_string(),
            age: 21,
            height: 180,
            player_foot_id: Snowflake::new(2),
            salary_range: SalaryRange {
                id: Snowflake::new(5),
                min: 100.0,
                max: 200.0,
            },
            creation_date: now - Duration::days(31),
            end_date: now - Duration::days(1),
        }
    }

    #[test]
    fn test_player_advertisement_embeds_relations() {
        let response = related()
            .player_advertisement(&player_ad(Snowflake::new(100)))
            .unwrap();

        assert_eq!(response.player.first_name, "Jan");
        assert_eq!(response.player_position.position_name, "Striker");
        assert_eq!(response.player_foot.name, "Right");
        assert_eq!(response.salary_range.max, 200.0);
        assert!(!response.is_active);
    }

    #[test]
    fn test_dangling_user_is_not_found() {
        let err = related()
            .player_advertisement(&player_ad(Snowflake::new(999)))
            .unwrap_err();
        assert!(matches!(err, DomainError::UserNotFound(id) if id == Snowflake::new(999)));
    }

    #[test]
    fn test_offer_status_from_kind() {
        let status = OfferStatusResponse::from(OfferStatusKind::Rejected);
        assert_eq!(status.id, Snowflake::new(3));
        assert_eq!(status.status_name, "Rejected");
    }

    #[test]
    fn test_map_all() {
        let related = related();
        let ads = vec![player_ad(Snowflake::new(100)), player_ad(Snowflake::new(100))];
        let mapped = related
            .map_all(&ads, Related::player_advertisement)
            .unwrap();
        assert_eq!(mapped.len(), 2);
    }
}
