use serde::{Deserialize, Serialize};
use std::fmt;

/// Todo の識別子（ストレージが採番する整数キー）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub i32);

impl TodoId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for TodoId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Todo エンティティ
///
/// JSON 表現は `{"id", "title", "description", "completed"}` 固定です。
/// `id` は未採番のとき `null`、`completed` は省略時 `false` になります。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Todo {
    #[serde(default)]
    pub id: Option<TodoId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// 未採番の Todo を作成
    pub fn new(title: Option<String>, description: Option<String>, completed: bool) -> Self {
        Self {
            id: None,
            title,
            description,
            completed,
        }
    }

    /// 採番済みの Todo を作成（ストレージ層・テスト用）
    pub fn with_id(
        id: TodoId,
        title: Option<String>,
        description: Option<String>,
        completed: bool,
    ) -> Self {
        Self {
            id: Some(id),
            title,
            description,
            completed,
        }
    }

    /// 可変フィールド（title / description / completed）を丸ごと上書きします。
    /// 部分更新はしません。`id` は変更しません。
    pub fn overwrite_with(&mut self, patch: Todo) {
        self.title = patch.title;
        self.description = patch.description;
        self.completed = patch.completed;
    }
}
