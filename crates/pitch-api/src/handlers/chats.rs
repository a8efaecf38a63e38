//! Chat handlers

use axum::{extract::State, http::StatusCode, Json};
use pitch_service::dto::{ChatLookupResponse, ChatResponse, CreateChatRequest, MessageResponse};
use pitch_service::{ChatService, ExportService};

use crate::extractors::{AdminUser, AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, CsvFile, NoContent};
use crate::state::AppState;

/// GET /api/chats
pub async fn list_all(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<ChatResponse>>> {
    let service = ChatService::new(state.service_context());
    Ok(Json(service.list_all().await?))
}

/// GET /api/chats/:id
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<ChatResponse>> {
    let service = ChatService::new(state.service_context());
    Ok(Json(service.get(auth.actor(), id).await?))
}

/// GET /api/chats/:id/messages
pub async fn messages(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let service = ChatService::new(state.service_context());
    Ok(Json(service.messages(auth.actor(), id).await?))
}

/// GET /api/chats/between/:user_id
pub async fn between(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<ChatLookupResponse>> {
    let service = ChatService::new(state.service_context());
    Ok(Json(service.find_between(auth.actor(), user_id).await?))
}

/// Opens a chat with another user
///
/// Answers 201 for a new chat and 200 when the pair already has one.
///
/// POST /api/chats
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateChatRequest>,
) -> ApiResult<(StatusCode, Json<ChatResponse>)> {
    let service = ChatService::new(state.service_context());
    let (chat, created) = service.create(auth.actor(), request).await?;
    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(chat)))
}

/// DELETE /api/chats/:id
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = ChatService::new(state.service_context());
    service.delete(auth.actor(), id).await?;
    Ok(NoContent)
}

/// GET /api/chats/export
pub async fn export(State(state): State<AppState>, _admin: AdminUser) -> ApiResult<CsvFile> {
    let service = ExportService::new(state.service_context());
    Ok(CsvFile(service.chats().await?))
}
