//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.
//! Static segments (`/me`, `/export`, `/active`, ...) win over `/:id` captures.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{
    admin, auth, chats, club_advertisements, club_history, club_offers, favorites, health, hub,
    lookups, messages, player_advertisements, player_offers, problems, salary_ranges, users,
};
use crate::state::AppState;

/// Create the main API router (health and hub routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// WebSocket hub routes (kept out of compression and rate limiting)
pub fn hub_routes() -> Router<AppState> {
    Router::new().route("/hubs/chat", get(hub::chat_hub))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user_routes())
        .nest("/player-advertisements", player_advertisement_routes())
        .nest("/club-advertisements", club_advertisement_routes())
        .nest("/club-offers", club_offer_routes())
        .nest("/player-offers", player_offer_routes())
        .nest("/favorite-player-advertisements", favorite_player_routes())
        .nest("/favorite-club-advertisements", favorite_club_routes())
        .nest("/club-history", club_history_routes())
        .nest("/chats", chat_routes())
        .nest("/messages", message_routes())
        .nest("/problems", problem_routes())
        .merge(lookup_routes())
        .nest("/salary-ranges", salary_range_routes())
        .route("/admin/summary", get(admin::summary))
}

/// Account and per-user listing routes
fn user_routes() -> Router<AppState> {
    Router::new()
        // Authentication
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
        .route("/export", get(users::export_users))
        // Accounts
        .route("/", get(users::list_users))
        .route(
            "/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/:id/password", put(auth::change_password))
        .route("/:id/make-admin", post(users::make_admin))
        // Advertisements
        .route(
            "/:id/player-advertisements/active",
            get(users::active_player_advertisements),
        )
        .route(
            "/:id/player-advertisements/inactive",
            get(users::inactive_player_advertisements),
        )
        .route(
            "/:id/club-advertisements/active",
            get(users::active_club_advertisements),
        )
        .route(
            "/:id/club-advertisements/inactive",
            get(users::inactive_club_advertisements),
        )
        // Favorites
        .route(
            "/:id/favorite-player-advertisements/active",
            get(users::active_favorite_player_advertisements),
        )
        .route(
            "/:id/favorite-player-advertisements/inactive",
            get(users::inactive_favorite_player_advertisements),
        )
        .route(
            "/:id/favorite-club-advertisements/active",
            get(users::active_favorite_club_advertisements),
        )
        .route(
            "/:id/favorite-club-advertisements/inactive",
            get(users::inactive_favorite_club_advertisements),
        )
        // Offers
        .route("/:id/club-offers/received", get(users::received_club_offers))
        .route("/:id/club-offers/sent", get(users::sent_club_offers))
        .route("/:id/player-offers/received", get(users::received_player_offers))
        .route("/:id/player-offers/sent", get(users::sent_player_offers))
        // Chats and career
        .route("/:id/chats", get(users::user_chats))
        .route("/:id/club-history", get(users::user_club_history))
}

fn player_advertisement_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(player_advertisements::list_all).post(player_advertisements::create),
        )
        .route("/active", get(player_advertisements::list_active))
        .route("/export", get(player_advertisements::export))
        .route(
            "/:id",
            get(player_advertisements::get)
                .put(player_advertisements::update)
                .delete(player_advertisements::delete),
        )
        .route("/:id/renew", put(player_advertisements::renew))
}

fn club_advertisement_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(club_advertisements::list_all).post(club_advertisements::create),
        )
        .route("/active", get(club_advertisements::list_active))
        .route("/export", get(club_advertisements::export))
        .route(
            "/:id",
            get(club_advertisements::get)
                .put(club_advertisements::update)
                .delete(club_advertisements::delete),
        )
        .route("/:id/renew", put(club_advertisements::renew))
}

fn club_offer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(club_offers::list_all).post(club_offers::create))
        .route("/export", get(club_offers::export))
        .route("/:id", get(club_offers::get).delete(club_offers::delete))
        .route("/:id/accept", put(club_offers::accept))
        .route("/:id/reject", put(club_offers::reject))
}

fn player_offer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(player_offers::list_all).post(player_offers::create))
        .route("/export", get(player_offers::export))
        .route("/:id", get(player_offers::get).delete(player_offers::delete))
        .route("/:id/accept", put(player_offers::accept))
        .route("/:id/reject", put(player_offers::reject))
}

fn favorite_player_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(favorites::add_player_favorite))
        .route("/:id", delete(favorites::remove_player_favorite))
        .route(
            "/check/:advertisement_id",
            get(favorites::check_player_favorite),
        )
}

fn favorite_club_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(favorites::add_club_favorite))
        .route("/:id", delete(favorites::remove_club_favorite))
        .route(
            "/check/:advertisement_id",
            get(favorites::check_club_favorite),
        )
}

fn club_history_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(club_history::list_all).post(club_history::create))
        .route("/export", get(club_history::export))
        .route(
            "/:id",
            get(club_history::get)
                .put(club_history::update)
                .delete(club_history::delete),
        )
}

fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(chats::list_all).post(chats::create))
        .route("/export", get(chats::export))
        .route("/between/:user_id", get(chats::between))
        .route("/:id", get(chats::get).delete(chats::delete))
        .route("/:id/messages", get(chats::messages))
}

fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(messages::create))
        .route("/export", get(messages::export))
        .route("/:id", delete(messages::delete))
}

fn problem_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(problems::list_all).post(problems::create))
        .route("/solved", get(problems::list_solved))
        .route("/unsolved", get(problems::list_unsolved))
        .route("/export", get(problems::export))
        .route("/:id", get(problems::get).delete(problems::delete))
        .route("/:id/solve", put(problems::solve))
}

/// Player positions, player feet and offer statuses
fn lookup_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/player-positions",
            get(lookups::list_positions).post(lookups::create_position),
        )
        .route(
            "/player-positions/:id",
            get(lookups::get_position)
                .put(lookups::update_position)
                .delete(lookups::delete_position),
        )
        .route(
            "/player-feet",
            get(lookups::list_feet).post(lookups::create_foot),
        )
        .route(
            "/player-feet/:id",
            get(lookups::get_foot)
                .put(lookups::update_foot)
                .delete(lookups::delete_foot),
        )
        .route("/offer-statuses", get(lookups::list_offer_statuses))
        .route("/offer-statuses/:id", get(lookups::get_offer_status))
}

fn salary_range_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(salary_ranges::list).post(salary_ranges::create))
        .route(
            "/:id",
            get(salary_ranges::get)
                .put(salary_ranges::update)
                .delete(salary_ranges::delete),
        )
}
