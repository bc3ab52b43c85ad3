use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::column::{Column, ColumnId};
use crate::sort::{sort_tasks, SortMode};
use crate::task::{Task, TaskDraft, TaskUpdate};

/// The whole board: columns plus one task bucket per column.
///
/// Bucket order is insertion order; reads go through [`BoardState::tasks_in_column`],
/// which partitions favorites first before applying a sort mode. Columns and
/// their buckets are always created and destroyed together, so an orphaned
/// bucket is unrepresentable through this API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    pub columns: Vec<Column>,
    pub tasks: BTreeMap<ColumnId, Vec<Task>>,
}

impl Default for BoardState {
    fn default() -> Self {
        let columns = Column::defaults();
        let tasks = columns
            .iter()
            .map(|c| (c.id.clone(), Vec::new()))
            .collect();
        Self { columns, tasks }
    }
}

impl BoardState {
    /// Build a board from the legacy flat-task shape, distributing each task
    /// into its column's bucket. A task referencing an unknown column is
    /// reassigned to the first column (its `column_id` corrected), or dropped
    /// when the board has no columns at all.
    pub fn from_legacy(columns: Vec<Column>, legacy_tasks: Vec<Task>) -> Self {
        let mut board = Self {
            tasks: columns.iter().map(|c| (c.id.clone(), Vec::new())).collect(),
            columns,
        };
        let fallback = board
            .sorted_columns()
            .first()
            .map(|c| c.id.clone());

        for mut task in legacy_tasks {
            if board.tasks.contains_key(&task.column_id) {
                let key = task.column_id.clone();
                board.bucket_mut(&key).push(task);
            } else if let Some(ref first) = fallback {
                tracing::warn!(
                    task_id = %task.id,
                    column_id = %task.column_id,
                    "legacy task references unknown column, reassigning to {}",
                    first
                );
                task.column_id = first.clone();
                board.bucket_mut(&first.clone()).push(task);
            } else {
                tracing::warn!(
                    task_id = %task.id,
                    "legacy task references unknown column and board has no columns, dropping"
                );
            }
        }
        board
    }

    /// Repair a loaded board: every column gets a bucket, tasks stored under
    /// a foreign key get their `column_id` corrected to the key, and tasks in
    /// buckets without a column are relocated like legacy strays.
    pub fn normalize(&mut self) {
        for column in &self.columns {
            self.tasks.entry(column.id.clone()).or_default();
        }

        for (key, bucket) in self.tasks.iter_mut() {
            for task in bucket.iter_mut() {
                if task.column_id != *key {
                    task.column_id = key.clone();
                }
            }
        }

        let known: Vec<ColumnId> = self.columns.iter().map(|c| c.id.clone()).collect();
        let orphaned: Vec<ColumnId> = self
            .tasks
            .keys()
            .filter(|key| !known.contains(key))
            .cloned()
            .collect();
        if orphaned.is_empty() {
            return;
        }

        let fallback = self.sorted_columns().first().map(|c| c.id.clone());
        for key in orphaned {
            let stray = self.tasks.remove(&key).unwrap_or_default();
            match fallback {
                Some(ref first) => {
                    tracing::warn!(
                        bucket = %key,
                        count = stray.len(),
                        "bucket has no matching column, relocating tasks to {}",
                        first
                    );
                    for mut task in stray {
                        task.column_id = first.clone();
                        self.bucket_mut(&first.clone()).push(task);
                    }
                }
                None => {
                    tracing::warn!(
                        bucket = %key,
                        count = stray.len(),
                        "bucket has no matching column and board has no columns, dropping tasks"
                    );
                }
            }
        }
    }

    // Task operations

    pub fn add_task(&mut self, draft: TaskDraft) -> Task {
        let task = Task::new(draft);
        let key = task.column_id.clone();
        self.bucket_mut(&key).push(task.clone());
        task
    }

    /// Partial update. A `column_id` change re-inserts the task into the
    /// target bucket at the favorites-correct append position, the same
    /// placement `move_task` uses when no index is given. A `column_id`
    /// pointing at an unknown column is ignored; the remaining fields still
    /// apply. Returns `None` when the task does not exist.
    pub fn update_task(&mut self, id: &str, updates: TaskUpdate) -> Option<Task> {
        let (key, index) = self.locate(id)?;

        let target = match updates.column_id {
            Some(ref target) if *target != key && self.column_exists(target) => {
                Some(target.clone())
            }
            Some(ref target) if *target != key => {
                tracing::warn!(task_id = %id, column_id = %target, "update targets unknown column, ignoring column change");
                None
            }
            _ => None,
        };

        match target {
            Some(target) => {
                let mut task = self.bucket_mut(&key).remove(index);
                task.apply(updates);
                task.column_id = target.clone();
                let at = append_index(self.bucket(&target), task.is_favorite);
                let result = task.clone();
                self.bucket_mut(&target).insert(at, task);
                Some(result)
            }
            None => {
                let task = &mut self.bucket_mut(&key)[index];
                task.apply(updates);
                Some(task.clone())
            }
        }
    }

    pub fn delete_task(&mut self, id: &str) -> bool {
        match self.locate(id) {
            Some((key, index)) => {
                self.bucket_mut(&key).remove(index);
                true
            }
            None => false,
        }
    }

    /// Reposition a task, within its column or across columns.
    ///
    /// The requested index is clamped so the favorites-first invariant holds
    /// without the caller knowing about it: a non-favorite cannot land inside
    /// the favorites zone and a favorite cannot land below it. An unknown
    /// task or target column is a no-op returning `None`.
    pub fn move_task(
        &mut self,
        id: &str,
        target_column_id: &str,
        target_index: Option<usize>,
    ) -> Option<Task> {
        let (key, index) = self.locate(id)?;
        if !self.column_exists(target_column_id) {
            tracing::warn!(task_id = %id, column_id = %target_column_id, "move targets unknown column, ignoring");
            return None;
        }

        if key == target_column_id {
            // Same column, no index: nothing to reorder.
            let Some(requested) = target_index else {
                return Some(self.bucket(&key)[index].clone());
            };
            let bucket = self.bucket_mut(&key);
            let mut task = bucket.remove(index);
            // Adjust for the removal, then clamp into the legal zone for
            // the task's partition.
            let mut at = if index < requested {
                requested - 1
            } else {
                requested
            };
            let zone_end = favorites_zone_end(bucket);
            if task.is_favorite {
                at = at.min(zone_end);
            } else {
                at = at.max(zone_end);
            }
            at = at.min(bucket.len());
            task.touch();
            let result = task.clone();
            bucket.insert(at, task);
            return Some(result);
        }

        let mut task = self.bucket_mut(&key).remove(index);
        task.move_to_column(target_column_id.to_string());

        let bucket = self.bucket_mut(&target_column_id.to_string());
        let zone_end = favorites_zone_end(bucket);
        let at = match target_index {
            Some(requested) => {
                let clamped = if task.is_favorite {
                    requested.min(zone_end)
                } else {
                    requested.max(zone_end)
                };
                clamped.min(bucket.len())
            }
            None if task.is_favorite => zone_end,
            None => bucket.len(),
        };
        let result = task.clone();
        bucket.insert(at, task);
        Some(result)
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Option<Task> {
        let (key, index) = self.locate(id)?;
        let task = &mut self.bucket_mut(&key)[index];
        task.toggle_favorite();
        Some(task.clone())
    }

    // Column operations

    pub fn add_column(&mut self, name: String) -> Column {
        let column = Column::new(name, self.columns.len() as i32);
        self.tasks.insert(column.id.clone(), Vec::new());
        self.columns.push(column.clone());
        column
    }

    pub fn rename_column(&mut self, id: &str, name: String) -> Option<Column> {
        let column = self.columns.iter_mut().find(|c| c.id == id)?;
        column.name = name;
        Some(column.clone())
    }

    /// Removes the column and its entire bucket in one transition.
    pub fn delete_column(&mut self, id: &str) -> bool {
        let before = self.columns.len();
        self.columns.retain(|c| c.id != id);
        self.tasks.remove(id);
        self.columns.len() != before
    }

    // Derived views

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.values().flatten().find(|t| t.id == id)
    }

    /// Fresh, sorted copy of one column's tasks. Favorites always come
    /// first, whatever the mode.
    pub fn tasks_in_column(&self, column_id: &str, mode: SortMode) -> Vec<Task> {
        let mut tasks = self.bucket(column_id).to_vec();
        sort_tasks(&mut tasks, mode);
        tasks
    }

    /// All tasks flattened. Relative order within each column is preserved;
    /// order across columns is unspecified.
    pub fn all_tasks(&self) -> Vec<Task> {
        self.tasks.values().flatten().cloned().collect()
    }

    /// Columns ascending by `order`; ties keep insertion order.
    pub fn sorted_columns(&self) -> Vec<Column> {
        let mut columns = self.columns.clone();
        columns.sort_by_key(|c| c.order);
        columns
    }

    pub fn column_exists(&self, id: &str) -> bool {
        self.columns.iter().any(|c| c.id == id)
    }

    // Internal helpers

    fn locate(&self, id: &str) -> Option<(ColumnId, usize)> {
        for (key, bucket) in &self.tasks {
            if let Some(index) = bucket.iter().position(|t| t.id == id) {
                return Some((key.clone(), index));
            }
        }
        None
    }

    fn bucket(&self, column_id: &str) -> &[Task] {
        self.tasks.get(column_id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn bucket_mut(&mut self, column_id: &ColumnId) -> &mut Vec<Task> {
        self.tasks.entry(column_id.clone()).or_default()
    }
}

/// First index after the last favorite in `bucket`: where an appended
/// favorite belongs, and the lowest legal slot for a non-favorite.
fn favorites_zone_end(bucket: &[Task]) -> usize {
    bucket
        .iter()
        .rposition(|t| t.is_favorite)
        .map(|i| i + 1)
        .unwrap_or(0)
}

/// Index an appended task lands at: end of the favorites zone for a
/// favorite, end of the bucket otherwise.
fn append_index(bucket: &[Task], is_favorite: bool) -> usize {
    if is_favorite {
        favorites_zone_end(bucket)
    } else {
        bucket.len()
    }
}
