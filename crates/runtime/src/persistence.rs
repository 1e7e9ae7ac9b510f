//! Flat JSON encoding of tool state.
//!
//! The stored shape is a single JSON object whose keys are all optional:
//! `tuned_material`, `target_x`, `target_y`, `target_z`,
//! `detected_material`. An absent key means "not set".
//!
//! [`FileToolStore`] keeps one such object per tool on disk:
//! ```text
//! {base_dir}/tool_{id:010}.json
//! ```
use std::fs;
use std::path::{Path, PathBuf};

use compass_core::{ToolId, ToolRecord, ToolState};
use serde_json::Value;

use crate::error::{Result, RuntimeError};

pub fn encode(state: &ToolState) -> Value {
    // ToolRecord holds only strings and integers, which always serialize.
    serde_json::to_value(ToolRecord::from(state)).unwrap_or(Value::Null)
}

pub fn encode_string(state: &ToolState) -> String {
    encode(state).to_string()
}

/// `null` decodes to an empty state, like a tool that was never written.
pub fn decode(value: Value) -> Result<ToolState> {
    if value.is_null() {
        return Ok(ToolState::new());
    }
    let record: ToolRecord = serde_json::from_value(value).map_err(RuntimeError::Record)?;
    Ok(record.into())
}

pub fn decode_str(text: &str) -> Result<ToolState> {
    let value: Value = serde_json::from_str(text).map_err(RuntimeError::Record)?;
    decode(value)
}

/// Directory of per-tool JSON records.
pub struct FileToolStore {
    base_dir: PathBuf,
}

impl FileToolStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        if !base_dir.exists() {
            fs::create_dir_all(&base_dir)?;
        }
        Ok(Self { base_dir })
    }

    fn record_path(&self, id: ToolId) -> PathBuf {
        self.base_dir.join(format!("tool_{:010}.json", id.0))
    }

    pub fn save(&self, id: ToolId, state: &ToolState) -> Result<()> {
        let json = serde_json::to_string_pretty(&ToolRecord::from(state))
            .map_err(RuntimeError::Record)?;
        fs::write(self.record_path(id), json)?;
        Ok(())
    }

    /// Stored state for `id`, or `None` if nothing was saved.
    pub fn load(&self, id: ToolId) -> Result<Option<ToolState>> {
        let path = self.record_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path)?;
        decode_str(&text).map(Some)
    }

    pub fn delete(&self, id: ToolId) -> Result<bool> {
        let path = self.record_path(id);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use compass_core::{MaterialId, Position};
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn empty_state_encodes_as_empty_object() {
        assert_eq!(encode(&ToolState::new()), json!({}));
    }

    #[test]
    fn absent_keys_stay_absent() {
        let state = decode(json!({ "tuned_material": "iron" })).unwrap();
        assert!(state.target_position().is_none());
        assert_eq!(encode(&state), json!({ "tuned_material": "iron" }));
    }

    #[test]
    fn zero_coordinates_are_kept() {
        let state = decode(json!({
            "target_x": 0, "target_y": 0, "target_z": 0,
            "detected_material": "coal"
        }))
        .unwrap();
        assert_eq!(state.target_position(), Some(Position::ORIGIN));
        assert_eq!(
            encode(&state),
            json!({ "target_x": 0, "target_y": 0, "target_z": 0, "detected_material": "coal" })
        );
    }

    #[test]
    fn malformed_records_are_errors() {
        assert!(matches!(
            decode(json!({ "target_x": "north" })),
            Err(RuntimeError::Record(_))
        ));
        assert!(decode_str("not json").is_err());
        assert!(decode(Value::Null).unwrap().target_position().is_none());
    }

    #[test]
    fn file_store_round_trips_and_deletes() {
        let dir = TempDir::new().unwrap();
        let store = FileToolStore::new(dir.path().join("tools")).unwrap();
        let state = ToolState::from_parts(
            Some(MaterialId::new("gold")),
            Some(Position::new(-4, 12, 7)),
            Some(MaterialId::new("gold")),
        );

        assert!(store.load(ToolId(3)).unwrap().is_none());
        store.save(ToolId(3), &state).unwrap();
        assert_eq!(store.load(ToolId(3)).unwrap(), Some(state));

        assert!(store.delete(ToolId(3)).unwrap());
        assert!(!store.delete(ToolId(3)).unwrap());
    }
}
