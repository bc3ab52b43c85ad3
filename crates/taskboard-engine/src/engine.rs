use std::collections::BTreeMap;

use taskboard_core::TaskboardResult;
use taskboard_domain::{
    BoardOperations, BoardState, Column, ColumnId, SortMode, Task, TaskDraft, TaskUpdate,
};
use taskboard_persistence::{BoardCodec, KeyValueStore};

/// Storage key boards have always lived under.
pub const BOARD_KEY: &str = "task-board";

/// The board state engine: one owned [`BoardState`] wired to a store.
///
/// Every mutation runs as a pure transition on the state, then writes the
/// whole board through to the store before returning. Mutations on unknown
/// ids change nothing and skip the write. Construct one engine per board;
/// nothing here is global.
pub struct BoardEngine<S: KeyValueStore> {
    state: BoardState,
    store: S,
    key: String,
}

impl<S: KeyValueStore> BoardEngine<S> {
    /// Load the board stored under [`BOARD_KEY`], migrating old schema
    /// versions, or start from the default board when the store is empty
    /// or its contents are unreadable.
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, BOARD_KEY)
    }

    pub fn load_with_key(store: S, key: &str) -> Self {
        let state = match store.read_raw(key) {
            Ok(Some(bytes)) => match BoardCodec::decode(&bytes) {
                Ok(board) => board,
                Err(e) => {
                    tracing::warn!(key, error = %e, "stored board is unreadable, starting fresh");
                    BoardState::default()
                }
            },
            Ok(None) => BoardState::default(),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read stored board, starting fresh");
                BoardState::default()
            }
        };
        Self {
            state,
            store,
            key: key.to_string(),
        }
    }

    /// The raw column-to-bucket mapping, insertion order intact.
    pub fn tasks(&self) -> &BTreeMap<ColumnId, Vec<Task>> {
        &self.state.tasks
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    fn persist(&self) -> TaskboardResult<()> {
        let bytes = BoardCodec::encode(&self.state)?;
        self.store.write_raw(&self.key, &bytes)
    }
}

impl<S: KeyValueStore> BoardOperations for BoardEngine<S> {
    fn add_task(&mut self, draft: TaskDraft) -> TaskboardResult<Task> {
        let task = self.state.add_task(draft);
        self.persist()?;
        Ok(task)
    }

    fn update_task(&mut self, id: &str, updates: TaskUpdate) -> TaskboardResult<Option<Task>> {
        match self.state.update_task(id, updates) {
            Some(task) => {
                self.persist()?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    fn delete_task(&mut self, id: &str) -> TaskboardResult<bool> {
        if self.state.delete_task(id) {
            self.persist()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn move_task(
        &mut self,
        id: &str,
        target_column_id: &str,
        target_index: Option<usize>,
    ) -> TaskboardResult<Option<Task>> {
        match self.state.move_task(id, target_column_id, target_index) {
            Some(task) => {
                self.persist()?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    fn toggle_favorite(&mut self, id: &str) -> TaskboardResult<Option<Task>> {
        match self.state.toggle_favorite(id) {
            Some(task) => {
                self.persist()?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    fn add_column(&mut self, name: String) -> TaskboardResult<Column> {
        let column = self.state.add_column(name);
        self.persist()?;
        Ok(column)
    }

    fn rename_column(&mut self, id: &str, name: String) -> TaskboardResult<Option<Column>> {
        match self.state.rename_column(id, name) {
            Some(column) => {
                self.persist()?;
                Ok(Some(column))
            }
            None => Ok(None),
        }
    }

    fn delete_column(&mut self, id: &str) -> TaskboardResult<bool> {
        if self.state.delete_column(id) {
            self.persist()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn get_task(&self, id: &str) -> TaskboardResult<Option<Task>> {
        Ok(self.state.task(id).cloned())
    }

    fn tasks_in_column(&self, column_id: &str, mode: SortMode) -> TaskboardResult<Vec<Task>> {
        Ok(self.state.tasks_in_column(column_id, mode))
    }

    fn all_tasks(&self) -> TaskboardResult<Vec<Task>> {
        Ok(self.state.all_tasks())
    }

    fn columns(&self) -> TaskboardResult<Vec<Column>> {
        Ok(self.state.sorted_columns())
    }
}
