//! Values handed to presentation glue.
//!
//! The core decides *what* to show (colour, label, status text, tooltip);
//! drawing it is the host's business.

use crate::catalog::{MaterialCatalog, Rgb};
use crate::config::ToolSpec;
use crate::state::{Position, ToolState};

/// Needle tint while nothing is tuned or detected.
pub const IDLE_NEEDLE_COLOR: Rgb = Rgb(0x8B4A4A);

/// Tint layer of the tool icon that carries the needle.
pub const NEEDLE_LAYER: u32 = 1;

/// Needle colour: tuned material, else detected material, else idle.
pub fn display_color(state: &ToolState, catalog: &MaterialCatalog) -> Rgb {
    state
        .display_material(catalog)
        .map_or(IDLE_NEEDLE_COLOR, |m| m.display_color())
}

/// Per-layer icon tint. Only the needle layer is coloured.
pub fn layer_tint(layer: u32, state: &ToolState, catalog: &MaterialCatalog) -> Rgb {
    if layer == NEEDLE_LAYER {
        display_color(state, catalog)
    } else {
        Rgb::WHITE
    }
}

/// `ancient_debris` → `Ancient Debris`.
pub fn display_name(id: &str) -> String {
    id.to_lowercase()
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `ancient_debris` → `ANCIENT DEBRIS`, as used in status messages.
pub fn shout_name(id: &str) -> String {
    id.to_uppercase().replace('_', " ")
}

/// HUD label, shown only while a target is tracked.
pub fn hud_label(state: &ToolState, catalog: &MaterialCatalog) -> Option<String> {
    state
        .tracked_material(catalog)
        .map(|m| display_name(m.id().as_str()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Failure,
}

/// One-line feedback after the holder uses the tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

/// Feedback after a forced update, measured from `holder`.
pub fn status_message(
    state: &ToolState,
    catalog: &MaterialCatalog,
    holder: Position,
) -> StatusMessage {
    let tuned = state.resolved_tuning(catalog);
    match state.target_position() {
        Some(target) => {
            let name = state
                .tracked_material(catalog)
                .map_or_else(|| "UNKNOWN".to_owned(), |m| shout_name(m.id().as_str()));
            StatusMessage {
                text: format!(
                    "{name} detected! Distance: {:.1} blocks",
                    holder.distance(target)
                ),
                severity: Severity::Success,
            }
        }
        None => StatusMessage {
            text: match tuned {
                Some(material) => {
                    format!("No {} detected in range", shout_name(material.id().as_str()))
                }
                None => "No ores detected in range".to_owned(),
            },
            severity: Severity::Failure,
        },
    }
}

/// Item tooltip lines.
pub fn tooltip_lines(spec: &ToolSpec, state: &ToolState, catalog: &MaterialCatalog) -> Vec<String> {
    let level = spec.tier.level();
    let mut lines = vec![
        format!("Tier: {level}"),
        format!("Range: {} blocks", spec.range),
    ];
    match state.resolved_tuning(catalog) {
        Some(material) => lines.push(format!("Tuned to: {}", material.id().as_str().to_uppercase())),
        None => lines.push(format!("Detects: All Tier {level} ores")),
    }
    lines
}

/// Tuned tools get the enchantment glint.
pub fn is_foil(state: &ToolState, catalog: &MaterialCatalog) -> bool {
    state.resolved_tuning(catalog).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MaterialId;
    use crate::config::ToolTier;
    use crate::tracking::tune;

    #[test]
    fn display_name_title_cases_words() {
        assert_eq!(display_name("ancient_debris"), "Ancient Debris");
        assert_eq!(display_name("IRON"), "Iron");
        assert_eq!(display_name("nether__quartz_"), "Nether Quartz");
    }

    #[test]
    fn color_falls_back_to_idle() {
        let catalog = MaterialCatalog::standard();
        assert_eq!(display_color(&ToolState::new(), &catalog), IDLE_NEEDLE_COLOR);

        let mut state = ToolState::new();
        tune(&mut state, "diamond");
        assert_eq!(display_color(&state, &catalog), Rgb(0x4AEDD9));
        assert_eq!(layer_tint(0, &state, &catalog), Rgb::WHITE);
        assert_eq!(layer_tint(NEEDLE_LAYER, &state, &catalog), Rgb(0x4AEDD9));
    }

    #[test]
    fn status_reports_distance() {
        let catalog = MaterialCatalog::standard();
        let state = ToolState::from_parts(
            None,
            Some(Position::new(3, 4, 0)),
            Some(MaterialId::new("ancient_debris")),
        );
        let message = status_message(&state, &catalog, Position::ORIGIN);
        assert_eq!(message.text, "ANCIENT DEBRIS detected! Distance: 5.0 blocks");
        assert_eq!(message.severity, Severity::Success);
    }

    #[test]
    fn status_when_nothing_found() {
        let catalog = MaterialCatalog::standard();
        let mut state = ToolState::new();
        assert_eq!(
            status_message(&state, &catalog, Position::ORIGIN).text,
            "No ores detected in range"
        );
        tune(&mut state, "nether_quartz");
        let message = status_message(&state, &catalog, Position::ORIGIN);
        assert_eq!(message.text, "No NETHER QUARTZ detected in range");
        assert_eq!(message.severity, Severity::Failure);
    }

    #[test]
    fn tooltip_and_foil_follow_tuning() {
        let catalog = MaterialCatalog::standard();
        let spec = ToolSpec::new(ToolTier::Advanced, 32);
        let mut state = ToolState::new();
        assert_eq!(
            tooltip_lines(&spec, &state, &catalog),
            ["Tier: 2", "Range: 32 blocks", "Detects: All Tier 2 ores"]
        );
        assert!(!is_foil(&state, &catalog));

        tune(&mut state, "emerald");
        assert_eq!(tooltip_lines(&spec, &state, &catalog)[2], "Tuned to: EMERALD");
        assert!(is_foil(&state, &catalog));
    }

    #[test]
    fn untuned_tooltip_names_each_tier() {
        use strum::IntoEnumIterator;

        let catalog = MaterialCatalog::standard();
        let config = crate::config::CompassConfig::default();
        for tier in ToolTier::iter() {
            let lines = tooltip_lines(&config.spec_for(tier), &ToolState::new(), &catalog);
            assert_eq!(lines[0], format!("Tier: {}", tier.level()));
            assert_eq!(lines[1], format!("Range: {} blocks", config.range_for(tier)));
            assert_eq!(lines[2], format!("Detects: All Tier {} ores", tier.level()));
        }
    }

    #[test]
    fn hud_label_only_while_tracking() {
        let catalog = MaterialCatalog::standard();
        let mut state = ToolState::new();
        tune(&mut state, "lapis");
        assert_eq!(hud_label(&state, &catalog), None);

        let state = ToolState::from_parts(
            Some(MaterialId::new("lapis")),
            Some(Position::new(1, 1, 1)),
            Some(MaterialId::new("lapis")),
        );
        assert_eq!(hud_label(&state, &catalog).as_deref(), Some("Lapis"));
    }
}
