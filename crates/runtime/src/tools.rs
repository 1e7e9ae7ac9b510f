//! Per-instance arena of tools.
//!
//! Each [`ToolInstance`] owns its persisted [`ToolState`] and its own
//! [`NeedleAnimator`], addressed by a stable [`ToolId`]. Nothing is keyed by
//! tool kind, so two compasses of the same tier animate independently.
use std::collections::BTreeMap;

use compass_core::{NeedleAnimator, ToolId, ToolSpec, ToolState};

#[derive(Clone, Debug)]
pub struct ToolInstance {
    pub spec: ToolSpec,
    pub state: ToolState,
    pub needle: NeedleAnimator,
    /// The last update already reported a tuning missing from the catalog.
    pub(crate) tuning_reported: bool,
}

impl ToolInstance {
    pub fn new(spec: ToolSpec, state: ToolState) -> Self {
        Self {
            spec,
            state,
            needle: NeedleAnimator::new(),
            tuning_reported: false,
        }
    }
}

/// Arena of live tool instances.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: BTreeMap<ToolId, ToolInstance>,
    next_id: u32,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an instance under a fresh id. Ids are never reused.
    pub fn insert(&mut self, instance: ToolInstance) -> ToolId {
        let id = ToolId(self.next_id);
        self.next_id += 1;
        self.tools.insert(id, instance);
        id
    }

    pub fn remove(&mut self, id: ToolId) -> Option<ToolInstance> {
        self.tools.remove(&id)
    }

    pub fn get(&self, id: ToolId) -> Option<&ToolInstance> {
        self.tools.get(&id)
    }

    pub fn get_mut(&mut self, id: ToolId) -> Option<&mut ToolInstance> {
        self.tools.get_mut(&id)
    }

    pub fn ids(&self) -> Vec<ToolId> {
        self.tools.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
