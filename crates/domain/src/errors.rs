use crate::todo::TodoId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// 指定 ID のレコードが存在しない
    #[error("Todo not found with id: {0}")]
    NotFound(TodoId),

    /// ストレージ層の失敗（接続断・SQL エラーなど）
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TodoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TodoError::NotFound(_))
    }
}
