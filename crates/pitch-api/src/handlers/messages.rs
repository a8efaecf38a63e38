//! Message handlers
//!
//! Messages are persisted here; live delivery goes through the chat hub.

use axum::{extract::State, Json};
use pitch_service::dto::{CreateMessageRequest, MessageResponse};
use pitch_service::{ExportService, MessageService};

use crate::extractors::{AdminUser, AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, CsvFile, NoContent};
use crate::state::AppState;

/// Store a message; the receiver is the other chat participant
///
/// POST /api/messages
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.create(auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// DELETE /api/messages/:id
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = MessageService::new(state.service_context());
    service.delete(auth.actor(), id).await?;
    Ok(NoContent)
}

/// GET /api/messages/export
pub async fn export(State(state): State<AppState>, _admin: AdminUser) -> ApiResult<CsvFile> {
    let service = ExportService::new(state.service_context());
    Ok(CsvFile(service.messages().await?))
}
