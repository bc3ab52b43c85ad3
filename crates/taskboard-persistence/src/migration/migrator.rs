use serde::Deserialize;
use serde_json::Value;
use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::{BoardState, Column, Task};

use crate::traits::SchemaVersion;

/// One payload transformation from a schema version to its successor.
type MigrationStep = fn(Value) -> TaskboardResult<Value>;

/// The flat-task payload written before buckets existed.
#[derive(Debug, Deserialize)]
struct LegacyBoardState {
    #[serde(default)]
    columns: Vec<Column>,
    #[serde(default)]
    tasks: Vec<Task>,
}

/// Detects the schema version of a stored payload and walks it up to
/// [`SchemaVersion::CURRENT`] one step at a time.
pub struct Migrator;

impl Migrator {
    /// Version of a bare (envelope-less) payload, by shape: a `tasks` array
    /// is the legacy flat format, a `tasks` object is the bucket format.
    /// Envelope versions are read from the explicit tag by the codec, not
    /// here.
    pub fn detect_bare_version(payload: &Value) -> TaskboardResult<SchemaVersion> {
        match payload.get("tasks") {
            Some(Value::Array(_)) => Ok(SchemaVersion::V1),
            Some(Value::Object(_)) => Ok(SchemaVersion::V2),
            _ => Err(TaskboardError::Serialization(
                "payload has no recognizable tasks field".to_string(),
            )),
        }
    }

    /// Apply N→N+1 steps until the payload is at the current version.
    /// Already-current payloads pass through untouched.
    pub fn migrate_to_current(
        mut version: SchemaVersion,
        mut payload: Value,
    ) -> TaskboardResult<Value> {
        while version < SchemaVersion::CURRENT {
            let step = Self::step_from(version).ok_or_else(|| {
                TaskboardError::Internal(format!(
                    "no migration step from schema version {}",
                    version.as_u32()
                ))
            })?;
            tracing::info!(
                from = version.as_u32(),
                to = version.as_u32() + 1,
                "migrating board payload"
            );
            payload = step(payload)?;
            version = version.next().ok_or_else(|| {
                TaskboardError::Internal("schema version overflow during migration".to_string())
            })?;
        }
        Ok(payload)
    }

    fn step_from(version: SchemaVersion) -> Option<MigrationStep> {
        match version {
            SchemaVersion::V1 => Some(migrate_v1_to_v2),
            SchemaVersion::V2 => None,
        }
    }
}

/// Flat task list to per-column buckets. Tasks referencing unknown columns
/// are reassigned to the first column (see `BoardState::from_legacy`).
fn migrate_v1_to_v2(payload: Value) -> TaskboardResult<Value> {
    let legacy: LegacyBoardState = serde_json::from_value(payload)
        .map_err(|e| TaskboardError::Serialization(e.to_string()))?;
    let board = BoardState::from_legacy(legacy.columns, legacy.tasks);
    serde_json::to_value(&board).map_err(|e| TaskboardError::Serialization(e.to_string()))
}
