use crate::catalog::{Material, MaterialCatalog, MaterialId};

use super::Position;

/// Tracking mode derived from [`ToolState::target_position`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackingMode {
    /// No target remembered.
    Empty,
    /// A target was found by the most recent successful search.
    Tracking,
}

/// Persisted state carried by a single tool instance.
///
/// Created empty, mutated only by the tracking cycle and the tuning write,
/// and cleared (never dropped) when the tracked position stops matching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToolState {
    tuned_material: Option<MaterialId>,
    target_position: Option<Position>,
    detected_material: Option<MaterialId>,
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a state from stored parts without any reconciliation.
    pub fn from_parts(
        tuned_material: Option<MaterialId>,
        target_position: Option<Position>,
        detected_material: Option<MaterialId>,
    ) -> Self {
        Self {
            tuned_material,
            target_position,
            detected_material,
        }
    }

    pub fn mode(&self) -> TrackingMode {
        match self.target_position {
            Some(_) => TrackingMode::Tracking,
            None => TrackingMode::Empty,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.target_position.is_some()
    }

    pub fn tuned_material(&self) -> Option<&MaterialId> {
        self.tuned_material.as_ref()
    }

    pub fn target_position(&self) -> Option<Position> {
        self.target_position
    }

    /// Raw detected id as stored. Prefer [`ToolState::tracked_material`],
    /// which accounts for tuning.
    pub fn detected_material(&self) -> Option<&MaterialId> {
        self.detected_material.as_ref()
    }

    /// Resolves the persisted tuning against the catalog.
    ///
    /// Ids that the catalog does not know (for example after a catalog
    /// change) resolve to `None`, which makes the tool behave as untuned.
    pub fn resolved_tuning<'c>(&self, catalog: &'c MaterialCatalog) -> Option<&'c Material> {
        self.tuned_material
            .as_ref()
            .and_then(|id| catalog.by_id(id.as_str()))
    }

    /// The material the needle currently points at, if any.
    ///
    /// For a tuned tool this is always the tuned material; an untuned tool
    /// reports what it remembered finding.
    pub fn tracked_material<'c>(&self, catalog: &'c MaterialCatalog) -> Option<&'c Material> {
        self.target_position?;
        match self.resolved_tuning(catalog) {
            Some(tuned) => Some(tuned),
            None => self
                .detected_material
                .as_ref()
                .and_then(|id| catalog.by_id(id.as_str())),
        }
    }

    /// Material that decides the needle colour: the tuned one if known,
    /// otherwise whatever was last detected.
    pub fn display_material<'c>(&self, catalog: &'c MaterialCatalog) -> Option<&'c Material> {
        self.resolved_tuning(catalog).or_else(|| {
            self.detected_material
                .as_ref()
                .and_then(|id| catalog.by_id(id.as_str()))
        })
    }

    pub(crate) fn set_tuned(&mut self, material: Option<MaterialId>) {
        self.tuned_material = material;
    }

    pub(crate) fn set_target(&mut self, position: Position, material: MaterialId) {
        self.target_position = Some(position);
        self.detected_material = Some(material);
    }

    pub(crate) fn clear_target(&mut self) {
        self.target_position = None;
        self.detected_material = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = ToolState::new();
        assert_eq!(state.mode(), TrackingMode::Empty);
        assert!(state.tuned_material().is_none());
        assert!(state.detected_material().is_none());
    }

    #[test]
    fn unknown_tuning_resolves_to_none() {
        let catalog = MaterialCatalog::standard();
        let state = ToolState::from_parts(Some(MaterialId::new("mythril")), None, None);
        assert!(state.resolved_tuning(&catalog).is_none());
    }

    #[test]
    fn tracked_material_prefers_tuning() {
        let catalog = MaterialCatalog::standard();
        let state = ToolState::from_parts(
            Some(MaterialId::new("diamond")),
            Some(Position::new(1, 2, 3)),
            Some(MaterialId::new("coal")),
        );
        let tracked = state.tracked_material(&catalog).map(|m| m.id().as_str());
        assert_eq!(tracked, Some("diamond"));
    }

    #[test]
    fn tracked_material_requires_target() {
        let catalog = MaterialCatalog::standard();
        let state = ToolState::from_parts(None, None, Some(MaterialId::new("coal")));
        assert!(state.tracked_material(&catalog).is_none());
        assert_eq!(
            state.display_material(&catalog).map(|m| m.id().as_str()),
            Some("coal")
        );
    }
}
