//! Admin reporting handlers

use axum::{extract::State, Json};
use pitch_service::dto::SummaryResponse;
use pitch_service::SummaryService;

use crate::extractors::AdminUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Row counts across the platform
///
/// GET /api/admin/summary
pub async fn summary(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<SummaryResponse>> {
    let service = SummaryService::new(state.service_context());
    Ok(Json(service.summary().await?))
}
