use taskboard_core::TaskboardResult;

use crate::column::Column;
use crate::sort::SortMode;
use crate::task::{Task, TaskDraft, TaskUpdate};

/// The operation set exposed to view layers.
///
/// Mutations on an unknown id are no-ops (`None` / `false`), never errors:
/// callers like drag handlers fire against ids that may have just been
/// deleted. Implementations persist every successful mutation before
/// returning.
pub trait BoardOperations {
    // Task operations
    fn add_task(&mut self, draft: TaskDraft) -> TaskboardResult<Task>;
    fn update_task(&mut self, id: &str, updates: TaskUpdate) -> TaskboardResult<Option<Task>>;
    fn delete_task(&mut self, id: &str) -> TaskboardResult<bool>;
    fn move_task(
        &mut self,
        id: &str,
        target_column_id: &str,
        target_index: Option<usize>,
    ) -> TaskboardResult<Option<Task>>;
    fn toggle_favorite(&mut self, id: &str) -> TaskboardResult<Option<Task>>;

    // Column operations
    fn add_column(&mut self, name: String) -> TaskboardResult<Column>;
    fn rename_column(&mut self, id: &str, name: String) -> TaskboardResult<Option<Column>>;
    fn delete_column(&mut self, id: &str) -> TaskboardResult<bool>;

    // Reads
    fn get_task(&self, id: &str) -> TaskboardResult<Option<Task>>;
    fn tasks_in_column(&self, column_id: &str, mode: SortMode) -> TaskboardResult<Vec<Task>>;
    fn all_tasks(&self) -> TaskboardResult<Vec<Task>>;
    fn columns(&self) -> TaskboardResult<Vec<Column>>;
}
