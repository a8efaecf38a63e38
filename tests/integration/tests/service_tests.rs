//! Service Integration Tests
//!
//! Drive the services directly against PostgreSQL, mostly to race
//! concurrent calls the HTTP layer would serialize per client.
//!
//! Run with: cargo test -p integration-tests --test service_tests

use chrono::{Duration, Utc};
use integration_tests::{check_test_env, fixtures, test_state};
use pitch_core::{DomainError, Roles, Snowflake};
use pitch_service::dto::{self, ClubOfferResponse, PlayerAdvertisementResponse};
use pitch_service::{
    Actor, AuthService, ChatService, ClubOfferService, PlayerAdvertisementService, ServiceContext,
    ServiceError,
};
use serde::{de::DeserializeOwned, Serialize};

/// Request DTO from the JSON body a client would send
fn request<T: DeserializeOwned>(body: &impl Serialize) -> T {
    serde_json::from_value(serde_json::to_value(body).unwrap()).unwrap()
}

async fn register(ctx: &ServiceContext) -> Actor {
    let user = AuthService::new(ctx)
        .register(request(&fixtures::RegisterRequest::unique()))
        .await
        .unwrap();
    Actor::new(user.id, Roles::USER)
}

async fn player_ad(ctx: &ServiceContext, player: Actor) -> PlayerAdvertisementResponse {
    PlayerAdvertisementService::new(ctx)
        .create(
            player,
            request(&fixtures::PlayerAdvertisementRequest::sample()),
        )
        .await
        .unwrap()
}

fn club_offer_for(ad_id: Snowflake) -> dto::CreateClubOfferRequest {
    request(&fixtures::CreateClubOfferRequest::for_advertisement(
        &ad_id.to_string(),
    ))
}

async fn send_club_offer(
    ctx: &ServiceContext,
    club: Actor,
    ad_id: Snowflake,
) -> ClubOfferResponse {
    ClubOfferService::new(ctx)
        .create(club, club_offer_for(ad_id))
        .await
        .unwrap()
}

// ============================================================================
// Offer Tests
// ============================================================================

#[tokio::test]
async fn test_concurrent_accept_and_reject_answer_once() {
    if !check_test_env().await {
        return;
    }

    let state = test_state().await.expect("Failed to build state");
    let ctx = state.service_context();
    let player = register(ctx).await;
    let club = register(ctx).await;
    let ad = player_ad(ctx, player).await;
    let offers = ClubOfferService::new(ctx);

    for _ in 0..30 {
        let offer = send_club_offer(ctx, club, ad.id).await;

        let (accepted, rejected) =
            tokio::join!(offers.accept(player, offer.id), offers.reject(player, offer.id));
        let winner = match (accepted, rejected) {
            (Ok(answered), Err(ServiceError::Domain(DomainError::OfferNotPending)))
            | (Err(ServiceError::Domain(DomainError::OfferNotPending)), Ok(answered)) => answered,
            other => panic!("expected exactly one answer to apply, got {other:?}"),
        };

        let stored = offers.get(player, offer.id).await.unwrap();
        assert_eq!(
            stored.offer_status.status_name,
            winner.offer_status.status_name
        );
    }
}

#[tokio::test]
async fn test_concurrent_offers_from_one_sender_leave_one_pending() {
    if !check_test_env().await {
        return;
    }

    let state = test_state().await.expect("Failed to build state");
    let ctx = state.service_context();
    let player = register(ctx).await;
    let club = register(ctx).await;
    let offers = ClubOfferService::new(ctx);

    for _ in 0..30 {
        let ad = player_ad(ctx, player).await;

        let (first, second) = tokio::join!(
            offers.create(club, club_offer_for(ad.id)),
            offers.create(club, club_offer_for(ad.id)),
        );
        match (first, second) {
            (Ok(_), Err(ServiceError::Domain(DomainError::DuplicateOffer)))
            | (Err(ServiceError::Domain(DomainError::DuplicateOffer)), Ok(_)) => {}
            other => panic!("expected one offer and one duplicate, got {other:?}"),
        }
    }

    let sent = offers.list_sent(club, club.user_id).await.unwrap();
    assert_eq!(sent.len(), 30);
}

#[tokio::test]
async fn test_offer_on_ended_advertisement_is_refused() {
    if !check_test_env().await {
        return;
    }

    let state = test_state().await.expect("Failed to build state");
    let ctx = state.service_context();
    let player = register(ctx).await;
    let club = register(ctx).await;
    let ad = player_ad(ctx, player).await;

    ctx.player_advertisement_repo()
        .renew(ad.id, Utc::now() - Duration::days(1))
        .await
        .unwrap();

    let err = ClubOfferService::new(ctx)
        .create(club, club_offer_for(ad.id))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::AdvertisementInactive)
    ));
}

// ============================================================================
// Chat Tests
// ============================================================================

#[tokio::test]
async fn test_concurrent_chat_opens_share_one_chat() {
    if !check_test_env().await {
        return;
    }

    let state = test_state().await.expect("Failed to build state");
    let ctx = state.service_context();
    let chats = ChatService::new(ctx);

    for _ in 0..30 {
        let a = register(ctx).await;
        let b = register(ctx).await;

        let (from_a, from_b) = tokio::join!(
            chats.create(a, dto::CreateChatRequest { user2_id: b.user_id }),
            chats.create(b, dto::CreateChatRequest { user2_id: a.user_id }),
        );
        let (from_a, a_created) = from_a.unwrap();
        let (from_b, b_created) = from_b.unwrap();

        assert_eq!(from_a.id, from_b.id);
        assert!(a_created ^ b_created);
    }
}
