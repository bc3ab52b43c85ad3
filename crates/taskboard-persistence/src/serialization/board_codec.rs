use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::BoardState;

use crate::migration::Migrator;
use crate::traits::SchemaVersion;

/// Versioned wrapper the codec always writes: an explicit schema tag next
/// to the payload, so future migrations dispatch on a number instead of
/// accumulating shape heuristics.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardEnvelope {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub data: Value,
}

impl BoardEnvelope {
    pub fn new(data: Value) -> Self {
        Self {
            version: SchemaVersion::CURRENT.as_u32(),
            saved_at: Utc::now(),
            data,
        }
    }
}

/// Encodes a board to envelope bytes and decodes bytes of any supported
/// vintage back into a normalized board.
pub struct BoardCodec;

impl BoardCodec {
    pub fn encode(board: &BoardState) -> TaskboardResult<Vec<u8>> {
        let data = serde_json::to_value(board)
            .map_err(|e| TaskboardError::Serialization(e.to_string()))?;
        serde_json::to_vec_pretty(&BoardEnvelope::new(data))
            .map_err(|e| TaskboardError::Serialization(e.to_string()))
    }

    /// Accepts three vintages of stored bytes: a versioned envelope, a bare
    /// bucket-shaped payload, and the legacy flat-task payload. Anything
    /// older than current is migrated; the result is normalized so every
    /// column has a bucket.
    pub fn decode(bytes: &[u8]) -> TaskboardResult<BoardState> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| TaskboardError::Serialization(e.to_string()))?;

        let (version, payload) = match value.get("version").and_then(Value::as_u64) {
            Some(tag) => {
                let version = SchemaVersion::from_u32(tag as u32).ok_or_else(|| {
                    TaskboardError::Serialization(format!("unsupported schema version: {}", tag))
                })?;
                let payload = value
                    .get("data")
                    .cloned()
                    .ok_or_else(|| {
                        TaskboardError::Serialization("envelope missing data field".to_string())
                    })?;
                (version, payload)
            }
            // Pre-envelope file: infer the version from the payload shape.
            None => (Migrator::detect_bare_version(&value)?, value),
        };

        let payload = Migrator::migrate_to_current(version, payload)?;
        let mut board: BoardState = serde_json::from_value(payload)
            .map_err(|e| TaskboardError::Serialization(e.to_string()))?;
        board.normalize();
        Ok(board)
    }
}
