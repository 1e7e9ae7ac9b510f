//! Tuning a compass to one material by combining it with ore.
//!
//! The recipe only decides whether a grid is valid and what comes out; the
//! output is the input compass's state with the tuning written on top.

use arrayvec::ArrayVec;

use crate::catalog::{BlockId, Material, MaterialId};
use crate::state::ToolState;
use crate::tracking;

/// Slots in a full crafting grid.
pub const GRID_SLOTS: usize = 9;

/// A crafting grid of at most [`GRID_SLOTS`] items.
pub type CraftingGrid<'s> = ArrayVec<GridItem<'s>, GRID_SLOTS>;

/// Content of one crafting slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridItem<'s> {
    Empty,
    Compass(&'s ToolState),
    Block(BlockId),
    Other,
}

/// One compass plus `ore_count` ore of a material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TuningRecipe {
    material: MaterialId,
    ore_blocks: Vec<BlockId>,
    ore_count: usize,
}

impl TuningRecipe {
    pub const DEFAULT_ORE_COUNT: usize = 4;

    pub fn new(material: &Material) -> Self {
        Self::with_ore_count(material, Self::DEFAULT_ORE_COUNT)
    }

    pub fn with_ore_count(material: &Material, ore_count: usize) -> Self {
        Self {
            material: material.id().clone(),
            ore_blocks: material.block_identities().to_vec(),
            ore_count,
        }
    }

    pub fn material(&self) -> &MaterialId {
        &self.material
    }

    pub fn ore_count(&self) -> usize {
        self.ore_count
    }

    /// Exactly one compass, exactly `ore_count` matching ore, nothing else.
    pub fn matches(&self, grid: &[GridItem<'_>]) -> bool {
        let mut compasses = 0usize;
        let mut ores = 0usize;
        for item in grid {
            match item {
                GridItem::Empty => {}
                GridItem::Compass(_) => compasses += 1,
                GridItem::Block(block) if self.ore_blocks.contains(block) => ores += 1,
                GridItem::Block(_) | GridItem::Other => return false,
            }
            if compasses > 1 {
                return false;
            }
        }
        compasses == 1 && ores == self.ore_count
    }

    /// Tuned copy of the compass in the grid, if the grid matches.
    pub fn assemble(&self, grid: &[GridItem<'_>]) -> Option<ToolState> {
        if !self.matches(grid) {
            return None;
        }
        let mut output = grid.iter().find_map(|item| match item {
            GridItem::Compass(state) => Some((*state).clone()),
            _ => None,
        })?;
        tracking::tune(&mut output, self.material.clone());
        Some(output)
    }

    /// Whether a `width` × `height` grid has room for the recipe.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        width * height > self.ore_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BlockPalette, MaterialCatalog, names};
    use crate::state::Position;

    fn diamond_recipe() -> TuningRecipe {
        let catalog = MaterialCatalog::standard();
        TuningRecipe::new(catalog.by_id("diamond").unwrap())
    }

    fn block(name: &str) -> BlockId {
        BlockPalette::standard().resolve(name).unwrap()
    }

    #[test]
    fn accepts_compass_with_four_ore() {
        let compass = ToolState::new();
        let ore = GridItem::Block(block(names::DIAMOND_ORE));
        let deep = GridItem::Block(block(names::DEEPSLATE_DIAMOND_ORE));
        let grid: CraftingGrid = [
            GridItem::Empty,
            ore,
            GridItem::Empty,
            deep,
            GridItem::Compass(&compass),
            ore,
            GridItem::Empty,
            ore,
            GridItem::Empty,
        ]
        .into_iter()
        .collect();
        assert!(diamond_recipe().matches(&grid));
    }

    #[test]
    fn rejects_wrong_counts_and_foreign_items() {
        let compass = ToolState::new();
        let other = ToolState::new();
        let ore = GridItem::Block(block(names::DIAMOND_ORE));
        let recipe = diamond_recipe();

        assert!(!recipe.matches(&[GridItem::Compass(&compass), ore, ore, ore]));
        assert!(!recipe.matches(&[GridItem::Compass(&compass), ore, ore, ore, ore, ore]));
        assert!(!recipe.matches(&[ore, ore, ore, ore]));
        assert!(!recipe.matches(&[
            GridItem::Compass(&compass),
            GridItem::Compass(&other),
            ore,
            ore,
            ore,
            ore,
        ]));
        assert!(!recipe.matches(&[
            GridItem::Compass(&compass),
            ore,
            ore,
            ore,
            GridItem::Block(block(names::COAL_ORE)),
        ]));
        assert!(!recipe.matches(&[GridItem::Compass(&compass), ore, ore, ore, ore, GridItem::Other]));
    }

    #[test]
    fn assemble_tunes_a_copy_and_keeps_target() {
        let compass = ToolState::from_parts(
            None,
            Some(Position::new(9, 9, 9)),
            Some(MaterialId::new("coal")),
        );
        let ore = GridItem::Block(block(names::DIAMOND_ORE));
        let grid = [GridItem::Compass(&compass), ore, ore, ore, ore];

        let output = diamond_recipe().assemble(&grid).unwrap();
        assert_eq!(output.tuned_material().map(|m| m.as_str()), Some("diamond"));
        assert_eq!(output.target_position(), Some(Position::new(9, 9, 9)));
        assert!(compass.tuned_material().is_none());
    }

    #[test]
    fn fits_needs_room_for_compass_and_ore() {
        let recipe = diamond_recipe();
        assert!(recipe.fits(3, 3));
        assert!(!recipe.fits(2, 2));
        assert!(recipe.fits(5, 1));
    }
}
