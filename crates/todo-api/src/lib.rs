//! Todo CRUD の HTTP API（axum）
//!
//! `/api/todos` 配下で一覧・取得・作成・更新・削除を提供します。
//! 依存は明示的に組み立てます: リポジトリ → `TodoService` → `AppState` → ルータ。

use axum::{routing::get, Router};
use infrastructure::{InMemoryTodoRepository, TodoRepository};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod handlers;
pub mod service;

pub use error::ApiError;
pub use service::TodoService;

/// InMemory ストアでルータを構築して返します（開発/テスト用）。
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// 外部から状態を注入できる版
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todos/:id",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// アプリケーションの共有状態
#[derive(Clone)]
pub struct AppState {
    service: TodoService,
}

impl AppState {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self {
            service: TodoService::new(repository),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryTodoRepository::default()))
    }
}
