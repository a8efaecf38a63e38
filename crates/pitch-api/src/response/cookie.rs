//! Auth cookie construction

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{DateTime, Utc};

/// HTTP-only, strict same-site cookie holding the token until it expires
pub fn auth_cookie(
    name: &str,
    token: &str,
    expires_at: DateTime<Utc>,
    secure: bool,
) -> Cookie<'static> {
    let max_age = (expires_at - Utc::now()).num_seconds().max(0);

    Cookie::build((name.to_string(), token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .max_age(time::Duration::seconds(max_age))
        .build()
}

/// Cookie that clears the auth cookie
pub fn expired_auth_cookie(name: &str) -> Cookie<'static> {
    Cookie::build(name.to_string()).path("/").build()
}
