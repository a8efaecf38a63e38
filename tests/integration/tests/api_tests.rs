//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL (JWT_SECRET and ADMIN_* have test defaults)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::{header, StatusCode};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();

    let response = client.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = client.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.client().unwrap().get("/api/nowhere").await.unwrap();

    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "NOT_FOUND");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login_sets_cookie() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();
    let request = RegisterRequest::unique();

    let response = client.post("/api/users/register", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(user.email, request.email);
    assert_eq!(user.roles, vec!["User".to_string()]);

    let login = LoginRequest {
        email: request.email.clone(),
        password: request.password.clone(),
    };
    let response = client.post("/api/users/login", &login).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("login must set a cookie")
        .to_string();
    assert!(cookie.starts_with("AuthToken="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
    assert!(cookie.contains("Path=/"));

    let body: LoginResponse = response.json().await.unwrap();
    assert!(!body.token.is_empty());
    assert_eq!(body.user.id, user.id);

    // The cookie alone authenticates
    let response = client.get("/api/users/me").await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, user.id);
}

#[tokio::test]
async fn test_register_rejects_duplicate_email_and_mismatched_passwords() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();
    let request = RegisterRequest::unique();

    let response = client.post("/api/users/register", &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = client.post("/api/users/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let mut mismatched = RegisterRequest::unique();
    mismatched.confirm_password = "Different123!".to_string();
    let response = client.post("/api/users/register", &mismatched).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "WrongPass1!".to_string(),
    };

    let response = server
        .client()
        .unwrap()
        .post("/api/users/login", &login)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.register_user().await.unwrap();

    let response = session.get("/api/users/me").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = session.post_empty("/api/users/logout").await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = session.get("/api/users/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_bearer_token_authenticates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.register_user().await.unwrap();
    let anonymous = server.client().unwrap();

    let response = anonymous
        .get_bearer("/api/users/me", &session.token)
        .await
        .unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, session.id());

    let response = anonymous
        .get_bearer("/api/users/me", "not-a-jwt")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_change_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let session = server.register_user().await.unwrap();
    let path = format!("/api/users/{}/password", session.id());

    let wrong_old = serde_json::json!({
        "old_password": "NotMine123!",
        "new_password": "NewPass456!",
        "confirm_password": "NewPass456!",
    });
    let response = session.put(&path, &wrong_old).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let change = serde_json::json!({
        "old_password": "TestPass123!",
        "new_password": "NewPass456!",
        "confirm_password": "NewPass456!",
    });
    let response = session.put(&path, &change).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    server
        .login(&session.user.email, "NewPass456!")
        .await
        .expect("new password must log in");
}

// ============================================================================
// Policy Tests
// ============================================================================

#[tokio::test]
async fn test_policies() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let anonymous = server.client().unwrap();
    let user = server.register_user().await.unwrap();
    let admin = server.login_admin().await.unwrap();

    // Missing token
    let response = anonymous.get("/api/users/me").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.error.code, "MISSING_AUTH");

    // AdminPolicy
    let response = user.get("/api/users").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "FORBIDDEN");

    let response = admin.get("/api/users").await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(users.iter().any(|u| u.id == user.id()));
    assert!(users.iter().all(|u| u.email != "unknown@unknown.com"));

    // UserPolicy: admins cannot post advertisements
    let response = admin
        .post("/api/player-advertisements", &PlayerAdvertisementRequest::sample())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Lookups are public to read, admin-only to write
    let response = anonymous.get("/api/player-positions").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    let response = anonymous.get("/api/offer-statuses").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let position = serde_json::json!({ "position_name": format!("Sweeper {}", unique_suffix()) });
    let response = user.post("/api/player-positions", &position).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    let response = admin.post("/api/player-positions", &position).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    let response = admin.post("/api/player-positions", &position).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Salary ranges are admin-only, even to read
    let response = user.get("/api/salary-ranges").await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // Summary
    let response = admin.get("/api/admin/summary").await.unwrap();
    let summary: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(summary["users"].as_i64().unwrap_or(0) >= 2);
}

#[tokio::test]
async fn test_invalid_path_id_is_bad_request() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.register_user().await.unwrap();

    let response = user.get("/api/player-advertisements/abc").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Advertisement Tests
// ============================================================================

#[tokio::test]
async fn test_player_advertisement_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.register_user().await.unwrap();
    let other = server.register_user().await.unwrap();

    let response = owner
        .post("/api/player-advertisements", &PlayerAdvertisementRequest::sample())
        .await
        .unwrap();
    let ad: PlayerAdvertisementResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(ad.player.id, owner.id());
    assert!(ad.is_active);

    let response = owner.get("/api/player-advertisements/active").await.unwrap();
    let active: Vec<PlayerAdvertisementResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(active.iter().any(|a| a.id == ad.id));

    let path = format!("/api/users/{}/player-advertisements/active", owner.id());
    let response = other.get(&path).await.unwrap();
    let owned: Vec<PlayerAdvertisementResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(owned.len(), 1);

    // Only the owner edits
    let mut update = PlayerAdvertisementRequest::sample();
    update.league = "I liga".to_string();
    let ad_path = format!("/api/player-advertisements/{}", ad.id);
    let response = other.put(&ad_path, &update).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = owner.put(&ad_path, &update).await.unwrap();
    let updated: PlayerAdvertisementResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.league, "I liga");

    let response = owner.put_empty(&format!("{ad_path}/renew")).await.unwrap();
    let renewed: PlayerAdvertisementResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(renewed.is_active);

    // min > max
    let mut invalid = PlayerAdvertisementRequest::sample();
    invalid.salary_range = SalaryRange {
        min: 9000.0,
        max: 1000.0,
    };
    let response = owner.put(&ad_path, &invalid).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = other.delete(&ad_path).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    let response = owner.delete(&ad_path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    let response = owner.get(&ad_path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_club_advertisement_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.register_user().await.unwrap();

    let mut request = ClubAdvertisementRequest::sample();
    request.club_name = String::new();
    let response = owner.post("/api/club-advertisements", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");

    let response = owner
        .post("/api/club-advertisements", &ClubAdvertisementRequest::sample())
        .await
        .unwrap();
    let ad: ClubAdvertisementResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(ad.club_member.id, owner.id());
    assert!(ad.is_active);
}

// ============================================================================
// Offer Tests
// ============================================================================

#[tokio::test]
async fn test_club_offer_rules() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let player = server.register_user().await.unwrap();
    let club = server.register_user().await.unwrap();
    let stranger = server.register_user().await.unwrap();

    let response = player
        .post("/api/player-advertisements", &PlayerAdvertisementRequest::sample())
        .await
        .unwrap();
    let ad: PlayerAdvertisementResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // No offers on your own advertisement
    let offer = CreateClubOfferRequest::for_advertisement(&ad.id);
    let response = player.post("/api/club-offers", &offer).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = club.post("/api/club-offers", &offer).await.unwrap();
    let created: OfferResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.offer_status.status_name, "Offered");

    // One pending offer per advertisement and sender
    let response = club.post("/api/club-offers", &offer).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let offer_path = format!("/api/club-offers/{}", created.id);
    let response = stranger.get(&offer_path).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let path = format!("/api/users/{}/club-offers/received", player.id());
    let response = player.get(&path).await.unwrap();
    let received: Vec<OfferResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(received.iter().any(|o| o.id == created.id));

    let path = format!("/api/users/{}/club-offers/sent", club.id());
    let response = club.get(&path).await.unwrap();
    let sent: Vec<OfferResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(sent.len(), 1);

    // Only the advertisement owner answers
    let response = club.put_empty(&format!("{offer_path}/accept")).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = player.put_empty(&format!("{offer_path}/accept")).await.unwrap();
    let accepted: OfferResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(accepted.offer_status.status_name, "Accepted");

    let response = player.put_empty(&format!("{offer_path}/reject")).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // A new offer is allowed once the previous one was answered
    let response = club.post("/api/club-offers", &offer).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_player_offer_reject_and_delete() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let club = server.register_user().await.unwrap();
    let player = server.register_user().await.unwrap();

    let response = club
        .post("/api/club-advertisements", &ClubAdvertisementRequest::sample())
        .await
        .unwrap();
    let ad: ClubAdvertisementResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let offer = CreatePlayerOfferRequest::for_advertisement(&ad.id);
    let response = player.post("/api/player-offers", &offer).await.unwrap();
    let created: OfferResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let offer_path = format!("/api/player-offers/{}", created.id);
    let response = club.put_empty(&format!("{offer_path}/reject")).await.unwrap();
    let rejected: OfferResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rejected.offer_status.status_name, "Rejected");

    // Only the sender or an admin deletes
    let response = club.delete(&offer_path).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    let response = player.delete(&offer_path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_offer_answers_apply_once() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let player = server.register_user().await.unwrap();
    let club = server.register_user().await.unwrap();

    let response = player
        .post("/api/player-advertisements", &PlayerAdvertisementRequest::sample())
        .await
        .unwrap();
    let ad: PlayerAdvertisementResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let offer = CreateClubOfferRequest::for_advertisement(&ad.id);

    // Both sends race; exactly one offer stays pending
    let (first, second) = tokio::join!(
        club.post("/api/club-offers", &offer),
        club.post("/api/club-offers", &offer),
    );
    let mut statuses = vec![first.unwrap().status(), second.unwrap().status()];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::CREATED, StatusCode::CONFLICT]);

    let path = format!("/api/users/{}/club-offers/sent", club.id());
    let response = club.get(&path).await.unwrap();
    let sent: Vec<OfferResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(sent.len(), 1);

    // Accept and reject race; the loser sees a conflict
    let offer_path = format!("/api/club-offers/{}", sent[0].id);
    let accept_path = format!("{offer_path}/accept");
    let reject_path = format!("{offer_path}/reject");
    let (accepted, rejected) = tokio::join!(
        player.put_empty(&accept_path),
        player.put_empty(&reject_path),
    );
    let accepted = accepted.unwrap();
    let rejected = rejected.unwrap();
    let winner = match (accepted.status(), rejected.status()) {
        (StatusCode::OK, StatusCode::CONFLICT) => "Accepted",
        (StatusCode::CONFLICT, StatusCode::OK) => "Rejected",
        other => panic!("expected one answer and one conflict, got {other:?}"),
    };

    let response = player.get(&offer_path).await.unwrap();
    let stored: OfferResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stored.offer_status.status_name, winner);
}

// ============================================================================
// Favorite Tests
// ============================================================================

#[tokio::test]
async fn test_favorites() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.register_user().await.unwrap();
    let fan = server.register_user().await.unwrap();

    let response = owner
        .post("/api/player-advertisements", &PlayerAdvertisementRequest::sample())
        .await
        .unwrap();
    let ad: PlayerAdvertisementResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let check_path = format!("/api/favorite-player-advertisements/check/{}", ad.id);
    let response = fan.get(&check_path).await.unwrap();
    let check: FavoriteCheckResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(check.favorite_id.is_none());

    let request = CreateFavoriteRequest {
        advertisement_id: ad.id.clone(),
    };
    let response = fan
        .post("/api/favorite-player-advertisements", &request)
        .await
        .unwrap();
    let favorite: FavoriteResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(favorite.advertisement_id, ad.id);
    assert_eq!(favorite.user_id, fan.id());

    let response = fan
        .post("/api/favorite-player-advertisements", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = fan.get(&check_path).await.unwrap();
    let check: FavoriteCheckResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(check.favorite_id.as_deref(), Some(favorite.id.as_str()));

    let list_path = format!(
        "/api/users/{}/favorite-player-advertisements/active",
        fan.id()
    );
    let response = fan.get(&list_path).await.unwrap();
    let favorites: Vec<FavoritePlayerAdvertisementResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].player_advertisement.id, ad.id);

    // Other users cannot read someone else's favorites
    let response = owner.get(&list_path).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let delete_path = format!("/api/favorite-player-advertisements/{}", favorite.id);
    let response = owner.delete(&delete_path).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    let response = fan.delete(&delete_path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = fan.get(&check_path).await.unwrap();
    let check: FavoriteCheckResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(check.favorite_id.is_none());
}

// ============================================================================
// Club History and Problem Tests
// ============================================================================

#[tokio::test]
async fn test_club_history() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let player = server.register_user().await.unwrap();

    let response = player
        .post("/api/club-history", &ClubHistoryRequest::sample())
        .await
        .unwrap();
    let history: ClubHistoryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(history.player.id, player.id());
    assert_eq!(history.achievements.number_of_matches, 64);

    let mut reversed = ClubHistoryRequest::sample();
    reversed.start_date = "2023-01-01".to_string();
    let response = player.post("/api/club-history", &reversed).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let path = format!("/api/users/{}/club-history", player.id());
    let response = player.get(&path).await.unwrap();
    let records: Vec<ClubHistoryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(records.len(), 1);

    let response = player
        .delete(&format!("/api/club-history/{}", history.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_problems() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.register_user().await.unwrap();
    let other = server.register_user().await.unwrap();
    let admin = server.login_admin().await.unwrap();

    let response = user
        .post("/api/problems", &CreateProblemRequest::sample())
        .await
        .unwrap();
    let problem: ProblemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!problem.is_solved);
    assert_eq!(problem.requester.id, user.id());

    let path = format!("/api/problems/{}", problem.id);
    let response = other.get(&path).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = admin.get("/api/problems/unsolved").await.unwrap();
    let unsolved: Vec<ProblemResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(unsolved.iter().any(|p| p.id == problem.id));

    let response = user.put_empty(&format!("{path}/solve")).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    let response = admin.put_empty(&format!("{path}/solve")).await.unwrap();
    let solved: ProblemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(solved.is_solved);

    let response = admin.get("/api/problems/solved").await.unwrap();
    let solved: Vec<ProblemResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(solved.iter().any(|p| p.id == problem.id));
}

// ============================================================================
// CSV Export Tests
// ============================================================================

#[tokio::test]
async fn test_csv_export_headers() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.register_user().await.unwrap();
    let admin = server.login_admin().await.unwrap();

    let response = user.get("/api/users/export").await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = admin.get("/api/users/export").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"users.csv\""
    );

    let body = response.text().await.unwrap();
    let mut lines = body.lines();
    assert_eq!(
        lines.next(),
        Some("E-mail,First Name,Last Name,Phone Number,Location,Role,Creation Date")
    );
    assert!(body.contains(&user.user.email));

    let exports = [
        ("/api/player-advertisements/export", "player-advertisements.csv"),
        ("/api/club-advertisements/export", "club-advertisements.csv"),
        ("/api/club-offers/export", "club-offers.csv"),
        ("/api/player-offers/export", "player-offers.csv"),
        ("/api/club-history/export", "club-history.csv"),
        ("/api/chats/export", "chats.csv"),
        ("/api/messages/export", "messages.csv"),
        ("/api/problems/export", "problems.csv"),
    ];
    for (path, filename) in exports {
        let response = admin.get(path).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            format!("attachment; filename=\"{filename}\"").as_str()
        );
    }
}

// ============================================================================
// Cascade Tests
// ============================================================================

#[tokio::test]
async fn test_delete_user_hands_rows_to_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let player = server.register_user().await.unwrap();
    let club = server.register_user().await.unwrap();
    let admin = server.login_admin().await.unwrap();

    let response = player
        .post("/api/player-advertisements", &PlayerAdvertisementRequest::sample())
        .await
        .unwrap();
    let ad: PlayerAdvertisementResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = club
        .post(
            "/api/club-offers",
            &CreateClubOfferRequest::for_advertisement(&ad.id),
        )
        .await
        .unwrap();
    let offer: OfferResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = player
        .post("/api/problems", &CreateProblemRequest::sample())
        .await
        .unwrap();
    let problem: ProblemResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Other users cannot delete the account
    let user_path = format!("/api/users/{}", player.id());
    let response = club.delete(&user_path).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = admin.delete(&user_path).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = admin.get(&user_path).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = admin
        .get(&format!("/api/player-advertisements/{}", ad.id))
        .await
        .unwrap();
    let orphaned: PlayerAdvertisementResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(orphaned.player.email, "unknown@unknown.com");
    assert!(!orphaned.is_active);

    let response = admin
        .get(&format!("/api/club-offers/{}", offer.id))
        .await
        .unwrap();
    let offer: OfferResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(offer.offer_status.status_name, "Rejected");

    // The ended advertisement takes no new offers
    let response = club
        .post(
            "/api/club-offers",
            &CreateClubOfferRequest::for_advertisement(&ad.id),
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "ADVERTISEMENT_INACTIVE");

    let response = admin
        .get(&format!("/api/problems/{}", problem.id))
        .await
        .unwrap();
    let problem: ProblemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(problem.requester.email, "unknown@unknown.com");
}

#[tokio::test]
async fn test_make_admin_hands_rows_to_unknown_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let member = server.register_user().await.unwrap();
    let admin = server.login_admin().await.unwrap();

    let response = member
        .post("/api/club-advertisements", &ClubAdvertisementRequest::sample())
        .await
        .unwrap();
    let ad: ClubAdvertisementResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let promote_path = format!("/api/users/{}/make-admin", member.id());
    let response = member.post_empty(&promote_path).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = admin.post_empty(&promote_path).await.unwrap();
    let promoted: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(promoted.roles, vec!["Admin".to_string()]);

    let response = admin.post_empty(&promote_path).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = admin
        .get(&format!("/api/club-advertisements/{}", ad.id))
        .await
        .unwrap();
    let orphaned: ClubAdvertisementResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(orphaned.club_member.email, "unknown@unknown.com");
    assert!(!orphaned.is_active);
}
