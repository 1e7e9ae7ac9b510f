use serde::{Deserialize, Serialize};

use crate::catalog::MaterialId;

use super::{Position, ToolState};

/// Flat key-value view of [`ToolState`] for host storage.
///
/// Every key is optional and an absent key means "not set", never zero.
/// A target is restored only when all three coordinates are present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuned_material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_y: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_z: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_material: Option<String>,
}

impl ToolRecord {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn target(&self) -> Option<Position> {
        Some(Position::new(self.target_x?, self.target_y?, self.target_z?))
    }
}

impl From<&ToolState> for ToolRecord {
    fn from(state: &ToolState) -> Self {
        let target = state.target_position();
        Self {
            tuned_material: state.tuned_material().map(|id| id.as_str().to_owned()),
            target_x: target.map(|p| p.x),
            target_y: target.map(|p| p.y),
            target_z: target.map(|p| p.z),
            detected_material: state.detected_material().map(|id| id.as_str().to_owned()),
        }
    }
}

impl From<ToolRecord> for ToolState {
    fn from(record: ToolRecord) -> Self {
        let target = record.target();
        // A detected id without a target would break the tracking invariant.
        let detected = target.and(record.detected_material.map(MaterialId::from));
        ToolState::from_parts(record.tuned_material.map(MaterialId::from), target, detected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_maps_to_empty_record() {
        assert!(ToolRecord::from(&ToolState::new()).is_empty());
    }

    #[test]
    fn partial_coordinates_do_not_restore_a_target() {
        let record = ToolRecord {
            target_x: Some(4),
            target_z: Some(9),
            detected_material: Some("iron".into()),
            ..ToolRecord::default()
        };
        let state = ToolState::from(record);
        assert!(state.target_position().is_none());
        assert!(state.detected_material().is_none());
    }

    #[test]
    fn full_record_restores_every_field() {
        let record = ToolRecord {
            tuned_material: Some("gold".into()),
            target_x: Some(-3),
            target_y: Some(11),
            target_z: Some(0),
            detected_material: Some("gold".into()),
        };
        let state = ToolState::from(record.clone());
        assert_eq!(state.target_position(), Some(Position::new(-3, 11, 0)));
        assert_eq!(state.tuned_material().map(|m| m.as_str()), Some("gold"));
        assert_eq!(ToolRecord::from(&state), record);
    }
}
