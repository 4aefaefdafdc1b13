use async_trait::async_trait;
use domain::{Todo, TodoError, TodoId};
use shared::{trace_storage_operation, Config};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;
use tracing::info;

use crate::models::{TodoRecord, TODO_TABLE};
use crate::repositories::TodoRepository;

const CREATE_TODO_TABLE: &str = "CREATE TABLE IF NOT EXISTS todo (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT,
    description TEXT,
    completed   BOOLEAN NOT NULL DEFAULT 0
)";

const SELECT_ALL: &str = "SELECT id, title, description, completed FROM todo ORDER BY id";

const SELECT_BY_ID: &str = "SELECT id, title, description, completed FROM todo WHERE id = ?";

const INSERT: &str = "INSERT INTO todo (title, description, completed) VALUES (?, ?, ?)
    RETURNING id, title, description, completed";

const UPSERT: &str = "INSERT INTO todo (id, title, description, completed) VALUES (?, ?, ?, ?)
    ON CONFLICT(id) DO UPDATE SET
        title = excluded.title,
        description = excluded.description,
        completed = excluded.completed
    RETURNING id, title, description, completed";

const DELETE_BY_ID: &str = "DELETE FROM todo WHERE id = ?";

/// SQLite（sqlx）による `todo` テーブルのリポジトリ
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    /// 設定に従って接続プールを作成し、スキーマを用意する
    pub async fn connect(config: &Config) -> Result<Self, TodoError> {
        let url = config.database_url.as_str();
        let options = if is_in_memory(url) {
            // インメモリ DB は接続ごとに別物になるため 1 本に固定し、破棄させない
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(config.database_max_connections)
        };

        let pool = options.connect(url).await.map_err(storage_error)?;
        info!(
            max_connections = pool.options().get_max_connections(),
            "Connected to database"
        );

        Self::from_pool(pool).await
    }

    /// 既存のプールから作成（スキーマ作成込み）
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, TodoError> {
        sqlx::query(CREATE_TODO_TABLE)
            .execute(&pool)
            .await
            .map_err(storage_error)?;

        Ok(Self { pool })
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

fn storage_error(e: sqlx::Error) -> TodoError {
    TodoError::Storage(e.to_string())
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, TodoError> {
        let records = trace_storage_operation(TODO_TABLE, "find_all", || {
            sqlx::query_as::<_, TodoRecord>(SELECT_ALL).fetch_all(&self.pool)
        })
        .await
        .map_err(storage_error)?;

        records.into_iter().map(Todo::try_from).collect()
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoError> {
        let record = trace_storage_operation(TODO_TABLE, "find_by_id", || {
            sqlx::query_as::<_, TodoRecord>(SELECT_BY_ID)
                .bind(id.value())
                .fetch_optional(&self.pool)
        })
        .await
        .map_err(storage_error)?;

        record.map(Todo::try_from).transpose()
    }

    async fn save(&self, todo: Todo) -> Result<Todo, TodoError> {
        let record = match todo.id {
            None => {
                trace_storage_operation(TODO_TABLE, "insert", || {
                    sqlx::query_as::<_, TodoRecord>(INSERT)
                        .bind(todo.title.as_deref())
                        .bind(todo.description.as_deref())
                        .bind(todo.completed)
                        .fetch_one(&self.pool)
                })
                .await
            }
            Some(id) => {
                trace_storage_operation(TODO_TABLE, "upsert", || {
                    sqlx::query_as::<_, TodoRecord>(UPSERT)
                        .bind(id.value())
                        .bind(todo.title.as_deref())
                        .bind(todo.description.as_deref())
                        .bind(todo.completed)
                        .fetch_one(&self.pool)
                })
                .await
            }
        }
        .map_err(storage_error)?;

        Todo::try_from(record)
    }

    async fn delete(&self, todo: &Todo) -> Result<(), TodoError> {
        let Some(id) = todo.id else {
            return Ok(());
        };

        trace_storage_operation(TODO_TABLE, "delete", || {
            sqlx::query(DELETE_BY_ID)
                .bind(id.value())
                .execute(&self.pool)
        })
        .await
        .map_err(storage_error)?;

        Ok(())
    }
}
