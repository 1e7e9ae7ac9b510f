use std::collections::HashMap;
use std::fmt;

/// Opaque world-content identifier as reported by the world oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BlockId(pub u32);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block:{}", self.0)
    }
}

/// Namespaced names of the blocks known to the standard palette.
pub mod names {
    pub const AIR: &str = "minecraft:air";
    pub const STONE: &str = "minecraft:stone";
    pub const DEEPSLATE: &str = "minecraft:deepslate";
    pub const NETHERRACK: &str = "minecraft:netherrack";
    pub const COAL_ORE: &str = "minecraft:coal_ore";
    pub const DEEPSLATE_COAL_ORE: &str = "minecraft:deepslate_coal_ore";
    pub const IRON_ORE: &str = "minecraft:iron_ore";
    pub const DEEPSLATE_IRON_ORE: &str = "minecraft:deepslate_iron_ore";
    pub const COPPER_ORE: &str = "minecraft:copper_ore";
    pub const DEEPSLATE_COPPER_ORE: &str = "minecraft:deepslate_copper_ore";
    pub const GOLD_ORE: &str = "minecraft:gold_ore";
    pub const DEEPSLATE_GOLD_ORE: &str = "minecraft:deepslate_gold_ore";
    pub const NETHER_GOLD_ORE: &str = "minecraft:nether_gold_ore";
    pub const DIAMOND_ORE: &str = "minecraft:diamond_ore";
    pub const DEEPSLATE_DIAMOND_ORE: &str = "minecraft:deepslate_diamond_ore";
    pub const LAPIS_ORE: &str = "minecraft:lapis_ore";
    pub const DEEPSLATE_LAPIS_ORE: &str = "minecraft:deepslate_lapis_ore";
    pub const REDSTONE_ORE: &str = "minecraft:redstone_ore";
    pub const DEEPSLATE_REDSTONE_ORE: &str = "minecraft:deepslate_redstone_ore";
    pub const EMERALD_ORE: &str = "minecraft:emerald_ore";
    pub const DEEPSLATE_EMERALD_ORE: &str = "minecraft:deepslate_emerald_ore";
    pub const ANCIENT_DEBRIS: &str = "minecraft:ancient_debris";
    pub const NETHER_QUARTZ_ORE: &str = "minecraft:nether_quartz_ore";

    /// Registration order of the standard palette; index == block id.
    pub const STANDARD: &[&str] = &[
        AIR,
        STONE,
        DEEPSLATE,
        NETHERRACK,
        COAL_ORE,
        DEEPSLATE_COAL_ORE,
        IRON_ORE,
        DEEPSLATE_IRON_ORE,
        COPPER_ORE,
        DEEPSLATE_COPPER_ORE,
        GOLD_ORE,
        DEEPSLATE_GOLD_ORE,
        NETHER_GOLD_ORE,
        DIAMOND_ORE,
        DEEPSLATE_DIAMOND_ORE,
        LAPIS_ORE,
        DEEPSLATE_LAPIS_ORE,
        REDSTONE_ORE,
        DEEPSLATE_REDSTONE_ORE,
        EMERALD_ORE,
        DEEPSLATE_EMERALD_ORE,
        ANCIENT_DEBRIS,
        NETHER_QUARTZ_ORE,
    ];
}

/// Bidirectional name ↔ [`BlockId`] table used by data files and hosts.
#[derive(Clone, Debug, Default)]
pub struct BlockPalette {
    ids: HashMap<String, BlockId>,
    names: Vec<String>,
}

impl BlockPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette with every name in [`names::STANDARD`], ids assigned in order.
    pub fn standard() -> Self {
        let mut palette = Self::new();
        for name in names::STANDARD {
            palette.register(name);
        }
        palette
    }

    /// Returns the id for `name`, assigning the next free id if unseen.
    pub fn register(&mut self, name: &str) -> BlockId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = BlockId(self.names.len() as u32);
        self.ids.insert(name.to_owned(), id);
        self.names.push(name.to_owned());
        id
    }

    pub fn resolve(&self, name: &str) -> Option<BlockId> {
        self.ids.get(name).copied()
    }

    pub fn name_of(&self, id: BlockId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_palette_assigns_ids_in_order() {
        let palette = BlockPalette::standard();
        assert_eq!(palette.resolve(names::AIR), Some(BlockId(0)));
        assert_eq!(palette.resolve(names::STONE), Some(BlockId(1)));
        assert_eq!(palette.len(), names::STANDARD.len());
        assert_eq!(palette.name_of(BlockId(4)), Some(names::COAL_ORE));
    }

    #[test]
    fn register_is_idempotent() {
        let mut palette = BlockPalette::standard();
        let first = palette.register("modded:tin_ore");
        let second = palette.register("modded:tin_ore");
        assert_eq!(first, second);
        assert_eq!(palette.name_of(first), Some("modded:tin_ore"));
    }
}
