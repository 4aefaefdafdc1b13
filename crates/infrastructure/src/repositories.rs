use async_trait::async_trait;
use domain::{Todo, TodoError, TodoId};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// `todo` テーブルに対する汎用 CRUD の抽象
///
/// 不在は `Ok(None)` で表し、エラーにはしません（存在確認はサービス層の責務）。
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 全件取得（順序はストレージの自然順）
    async fn find_all(&self) -> Result<Vec<Todo>, TodoError>;

    /// ID で 1 件取得
    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoError>;

    /// `id` が未設定なら採番して挿入、設定済みならその ID の行を上書き
    async fn save(&self, todo: Todo) -> Result<Todo, TodoError>;

    /// 同一 ID の行を削除
    async fn delete(&self, todo: &Todo) -> Result<(), TodoError>;
}

/// リポジトリ呼び出しの記録（テスト観測用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    FindAll,
    FindById(TodoId),
    Save(Todo),
    Delete(Todo),
}

/// 簡易な InMemory 実装（開発/テスト用）
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    state: Mutex<InMemoryState>,
    calls: Mutex<Vec<RepositoryCall>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    rows: BTreeMap<TodoId, Todo>,
    last_id: i32,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期データ入りで作成
    pub fn with_todos(todos: impl IntoIterator<Item = Todo>) -> Self {
        let repo = Self::default();
        if let Ok(mut state) = repo.state.lock() {
            for todo in todos {
                state.store(todo);
            }
        }
        repo
    }

    /// これまでの呼び出し履歴
    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: RepositoryCall) -> Result<(), TodoError> {
        self.calls.lock().map_err(poisoned)?.push(call);
        Ok(())
    }
}

impl InMemoryState {
    fn store(&mut self, mut todo: Todo) -> Todo {
        let id = match todo.id {
            Some(id) => id,
            None => TodoId(self.last_id + 1),
        };
        self.last_id = self.last_id.max(id.value());
        todo.id = Some(id);
        self.rows.insert(id, todo.clone());
        todo
    }
}

fn poisoned<T>(_: T) -> TodoError {
    TodoError::Storage("in-memory store lock poisoned".to_string())
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, TodoError> {
        self.record(RepositoryCall::FindAll)?;
        let state = self.state.lock().map_err(poisoned)?;
        Ok(state.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, TodoError> {
        self.record(RepositoryCall::FindById(id))?;
        let state = self.state.lock().map_err(poisoned)?;
        Ok(state.rows.get(&id).cloned())
    }

    async fn save(&self, todo: Todo) -> Result<Todo, TodoError> {
        self.record(RepositoryCall::Save(todo.clone()))?;
        let mut state = self.state.lock().map_err(poisoned)?;
        Ok(state.store(todo))
    }

    async fn delete(&self, todo: &Todo) -> Result<(), TodoError> {
        self.record(RepositoryCall::Delete(todo.clone()))?;
        if let Some(id) = todo.id {
            self.state.lock().map_err(poisoned)?.rows.remove(&id);
        }
        Ok(())
    }
}
