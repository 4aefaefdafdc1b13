use domain::{Todo, TodoError, TodoId};

/// `todo` テーブル名
pub const TODO_TABLE: &str = "todo";

/// `todo` テーブルの 1 行
///
/// SQLite の INTEGER は 64bit のため、ドメインの `TodoId` へは範囲チェック付きで変換する。
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct TodoRecord {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: bool,
}

impl TryFrom<TodoRecord> for Todo {
    type Error = TodoError;

    fn try_from(record: TodoRecord) -> Result<Self, Self::Error> {
        let id = i32::try_from(record.id)
            .map_err(|_| TodoError::Storage(format!("todo id out of range: {}", record.id)))?;

        Ok(Todo::with_id(
            TodoId(id),
            record.title,
            record.description,
            record.completed,
        ))
    }
}
