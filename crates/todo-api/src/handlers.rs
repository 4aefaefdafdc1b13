use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use domain::{Todo, TodoId};
use serde::Serialize;

use crate::error::ApiError;
use crate::AppState;

/// GET /api/todos
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.service.get_all_todos().await?;
    Ok(Json(todos))
}

/// GET /api/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.service.get_todo_by_id(id).await?;
    Ok(Json(todo))
}

/// POST /api/todos
pub async fn create_todo(
    State(state): State<AppState>,
    Json(todo): Json<Todo>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let created = state.service.create_todo(todo).await?;
    tracing::info!(id = ?created.id, "todo created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/todos/{id}
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    Json(patch): Json<Todo>,
) -> Result<Json<Todo>, ApiError> {
    let updated = state.service.update_todo(id, patch).await?;
    Ok(Json(updated))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_todo_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
struct HealthBody {
    /// サービスの簡易ステータス
    status: &'static str,
}

/// ヘルスチェック用ハンドラ
pub async fn health() -> impl IntoResponse {
    let body = HealthBody { status: "ok" };
    (StatusCode::OK, Json(body))
}
