pub mod board;
pub mod column;
pub mod field_update;
pub mod operations;
pub mod sort;
pub mod task;

pub use board::BoardState;
pub use column::{Column, ColumnId};
pub use field_update::FieldUpdate;
pub use operations::BoardOperations;
pub use sort::SortMode;
pub use task::{Task, TaskDraft, TaskId, TaskUpdate};
