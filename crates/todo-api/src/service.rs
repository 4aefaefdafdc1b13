//! Todo サービス層
//!
//! リポジトリ呼び出しに存在確認と全項目上書きのポリシーを被せます。
//! `NotFound` を生成するのは `get_todo_by_id` のみで、他の存在確認はすべてこれに委譲します。

use domain::{Todo, TodoError, TodoId};
use infrastructure::TodoRepository;
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// 全件取得
    #[instrument(skip(self))]
    pub async fn get_all_todos(&self) -> Result<Vec<Todo>, TodoError> {
        self.repository.find_all().await
    }

    /// 単一取得（不在なら `NotFound`）
    #[instrument(skip(self))]
    pub async fn get_todo_by_id(&self, id: TodoId) -> Result<Todo, TodoError> {
        match self.repository.find_by_id(id).await? {
            Some(todo) => Ok(todo),
            None => {
                debug!(%id, "todo not found");
                Err(TodoError::NotFound(id))
            }
        }
    }

    /// 作成（入力の id は無視して常に新規採番）
    #[instrument(skip(self, todo))]
    pub async fn create_todo(&self, mut todo: Todo) -> Result<Todo, TodoError> {
        todo.id = None;
        self.repository.save(todo).await
    }

    /// 更新（title / description / completed を無条件で上書き）
    #[instrument(skip(self, patch))]
    pub async fn update_todo(&self, id: TodoId, patch: Todo) -> Result<Todo, TodoError> {
        let mut existing = self.get_todo_by_id(id).await?;
        existing.overwrite_with(patch);
        self.repository.save(existing).await
    }

    /// 削除
    #[instrument(skip(self))]
    pub async fn delete_todo_by_id(&self, id: TodoId) -> Result<(), TodoError> {
        let existing = self.get_todo_by_id(id).await?;
        self.repository.delete(&existing).await
    }
}
