use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ColumnId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    pub order: i32,
}

impl Column {
    pub fn new(name: String, order: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            order,
        }
    }

    /// The three columns a fresh board starts with. Fixed ids so that
    /// boards created by earlier releases keep matching.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self {
                id: "todo".to_string(),
                name: "To Do".to_string(),
                order: 0,
            },
            Self {
                id: "in-progress".to_string(),
                name: "In Progress".to_string(),
                order: 1,
            },
            Self {
                id: "done".to_string(),
                name: "Done".to_string(),
                order: 2,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_column_has_unique_id() {
        let a = Column::new("Backlog".to_string(), 0);
        let b = Column::new("Backlog".to_string(), 0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_default_columns() {
        let columns = Column::defaults();
        assert_eq!(columns.len(), 3);
        assert_eq!(
            columns.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
            vec!["todo", "in-progress", "done"]
        );
        assert_eq!(
            columns.iter().map(|c| c.order).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }
}
