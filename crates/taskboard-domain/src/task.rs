use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::column::ColumnId;
use crate::field_update::FieldUpdate;

pub type TaskId = String;

/// A single card on the board.
///
/// Persisted field names are camelCase to stay compatible with board files
/// written by earlier releases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub deadline: Option<NaiveDate>,
    pub column_id: ColumnId,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload: everything the caller chooses, nothing the board
/// generates (id, timestamps).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub deadline: Option<NaiveDate>,
    pub column_id: ColumnId,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

/// Partial update for a task. Nullable fields use [`FieldUpdate`] so they
/// can be cleared as well as set.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub deadline: FieldUpdate<NaiveDate>,
    pub column_id: Option<ColumnId>,
    pub image_url: FieldUpdate<String>,
    pub is_favorite: Option<bool>,
}

impl Task {
    pub fn new(draft: TaskDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            deadline: draft.deadline,
            column_id: draft.column_id,
            image_url: draft.image_url,
            is_favorite: draft.is_favorite,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update in place. `column_id` is handled by the
    /// board, which owns bucket placement, so it is ignored here.
    pub fn apply(&mut self, updates: TaskUpdate) {
        if let Some(name) = updates.name {
            self.name = name;
        }
        if let Some(description) = updates.description {
            self.description = description;
        }
        updates.deadline.apply_to(&mut self.deadline);
        updates.image_url.apply_to(&mut self.image_url);
        if let Some(is_favorite) = updates.is_favorite {
            self.is_favorite = is_favorite;
        }
        self.updated_at = Utc::now();
    }

    pub fn move_to_column(&mut self, column_id: ColumnId) {
        self.column_id = column_id;
        self.updated_at = Utc::now();
    }

    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
        self.updated_at = Utc::now();
    }

    /// Mark the task as mutated without changing any field.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
