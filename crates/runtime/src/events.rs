//! Target changes reported after each update.
use compass_core::{MaterialId, Position, ToolId, TrackingOutcome, Transition};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompassEvent {
    TargetAcquired {
        tool: ToolId,
        position: Position,
        material: MaterialId,
    },
    TargetMoved {
        tool: ToolId,
        from: Position,
        to: Position,
        material: MaterialId,
    },
    TargetLost {
        tool: ToolId,
        last: Position,
    },
    /// The stored tuning is not in the catalog; the tool ran untuned.
    TuningIgnored { tool: ToolId, material: MaterialId },
}

impl CompassEvent {
    /// Events implied by one tracking outcome, in reporting order.
    pub fn from_outcome(
        tool: ToolId,
        tuned: Option<&MaterialId>,
        outcome: &TrackingOutcome,
    ) -> Vec<CompassEvent> {
        let mut events = Vec::new();
        if let (true, Some(material)) = (outcome.tuning_ignored, tuned) {
            events.push(CompassEvent::TuningIgnored {
                tool,
                material: material.clone(),
            });
        }

        match (outcome.transition, outcome.previous, &outcome.hit) {
            (Transition::Acquired, _, Some((position, material))) => {
                events.push(CompassEvent::TargetAcquired {
                    tool,
                    position: *position,
                    material: material.clone(),
                });
            }
            (Transition::Retargeted, Some(from), Some((to, material))) => {
                events.push(CompassEvent::TargetMoved {
                    tool,
                    from,
                    to: *to,
                    material: material.clone(),
                });
            }
            (Transition::Lost, Some(last), _) => {
                events.push(CompassEvent::TargetLost { tool, last });
            }
            _ => {}
        }
        events
    }

    pub fn tool(&self) -> ToolId {
        match self {
            CompassEvent::TargetAcquired { tool, .. }
            | CompassEvent::TargetMoved { tool, .. }
            | CompassEvent::TargetLost { tool, .. }
            | CompassEvent::TuningIgnored { tool, .. } => *tool,
        }
    }
}
