//! Task sorting.
//!
//! Every read of a column's tasks goes through [`sort_tasks`], which applies
//! the favorites-first partition unconditionally before the requested mode.
//! Modes only reorder *within* each partition; they can never lift a
//! non-favorite above a favorite.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use taskboard_core::TaskboardError;

use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Insertion order.
    #[default]
    None,
    /// Ascending case-insensitive name compare.
    Alphabetical,
    /// Descending case-insensitive name compare.
    Descending,
    /// Newest first by creation time.
    Date,
}

impl SortMode {
    /// Ordering within one favorites partition.
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::None => Ordering::Equal,
            Self::Alphabetical => name_key(a).cmp(&name_key(b)),
            Self::Descending => name_key(b).cmp(&name_key(a)),
            Self::Date => b.created_at.cmp(&a.created_at),
        }
    }
}

impl FromStr for SortMode {
    type Err = TaskboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "alphabetical" => Ok(Self::Alphabetical),
            "descending" => Ok(Self::Descending),
            "date" => Ok(Self::Date),
            other => Err(TaskboardError::Validation(format!(
                "unknown sort mode: {}",
                other
            ))),
        }
    }
}

/// Stable sort: favorites before non-favorites, then `mode` within each
/// partition. With `SortMode::None` the mode comparator is `Equal`, so the
/// stable sort degenerates to a stable partition preserving insertion order.
pub fn sort_tasks(tasks: &mut [Task], mode: SortMode) {
    tasks.sort_by(|a, b| {
        b.is_favorite
            .cmp(&a.is_favorite)
            .then_with(|| mode.compare(a, b))
    });
}

fn name_key(task: &Task) -> String {
    task.name.to_lowercase()
}
