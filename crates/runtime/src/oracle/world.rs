use std::collections::HashMap;

use compass_core::{BlockId, Position, WorldOracle};

/// Sparse block store: every position holds `fill` unless set explicitly.
#[derive(Clone, Debug)]
pub struct VoxelWorld {
    fill: BlockId,
    blocks: HashMap<Position, BlockId>,
}

impl VoxelWorld {
    pub fn new(fill: BlockId) -> Self {
        Self {
            fill,
            blocks: HashMap::new(),
        }
    }

    pub fn fill(&self) -> BlockId {
        self.fill
    }

    /// Places `block`; placing the fill block forgets the position.
    pub fn set(&mut self, position: Position, block: BlockId) {
        if block == self.fill {
            self.blocks.remove(&position);
        } else {
            self.blocks.insert(position, block);
        }
    }

    /// Replaces the block at `position` with the fill, returning what was there.
    pub fn clear(&mut self, position: Position) -> BlockId {
        self.blocks.remove(&position).unwrap_or(self.fill)
    }

    pub fn get(&self, position: Position) -> BlockId {
        self.blocks.get(&position).copied().unwrap_or(self.fill)
    }

    /// Explicitly placed blocks, in no particular order.
    pub fn placed(&self) -> impl Iterator<Item = (Position, BlockId)> + '_ {
        self.blocks.iter().map(|(&p, &b)| (p, b))
    }

    pub fn placed_count(&self) -> usize {
        self.blocks.len()
    }
}

impl WorldOracle for VoxelWorld {
    fn block_at(&self, position: Position) -> BlockId {
        self.get(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_positions_read_as_fill() {
        let world = VoxelWorld::new(BlockId(1));
        assert_eq!(world.block_at(Position::new(5, -5, 5)), BlockId(1));
    }

    #[test]
    fn placing_fill_forgets_position() {
        let mut world = VoxelWorld::new(BlockId(1));
        world.set(Position::ORIGIN, BlockId(7));
        assert_eq!(world.placed_count(), 1);
        world.set(Position::ORIGIN, BlockId(1));
        assert_eq!(world.placed_count(), 0);
    }

    #[test]
    fn clear_returns_previous_block() {
        let mut world = VoxelWorld::new(BlockId(1));
        world.set(Position::new(1, 2, 3), BlockId(9));
        assert_eq!(world.clear(Position::new(1, 2, 3)), BlockId(9));
        assert_eq!(world.get(Position::new(1, 2, 3)), BlockId(1));
    }
}
