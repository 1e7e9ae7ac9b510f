use std::borrow::Borrow;
use std::fmt;

use super::BlockId;

/// Stable key of a material, persisted on tools.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MaterialId(String);

impl MaterialId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for MaterialId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MaterialId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MaterialId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 24-bit RGB colour packed as `0xRRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Rgb(pub u32);

impl Rgb {
    pub const WHITE: Self = Self(0xFF_FF_FF);

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & 0xFF_FF_FF)
    }
}

/// One detectable category of world content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Material {
    id: MaterialId,
    tier: u8,
    priority: i32,
    display_color: Rgb,
    /// Listed order is kept; the first entry doubles as the HUD icon block.
    block_identities: Vec<BlockId>,
}

impl Material {
    pub fn new(
        id: impl Into<MaterialId>,
        tier: u8,
        priority: i32,
        display_color: Rgb,
        blocks: impl IntoIterator<Item = BlockId>,
    ) -> Self {
        let mut block_identities: Vec<BlockId> = Vec::new();
        for block in blocks {
            if !block_identities.contains(&block) {
                block_identities.push(block);
            }
        }
        Self {
            id: id.into(),
            tier,
            priority,
            display_color,
            block_identities,
        }
    }

    pub fn id(&self) -> &MaterialId {
        &self.id
    }

    /// Minimum tool tier able to sense this material.
    pub fn tier(&self) -> u8 {
        self.tier
    }

    /// Lower is more important.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn display_color(&self) -> Rgb {
        self.display_color
    }

    pub fn block_identities(&self) -> &[BlockId] {
        &self.block_identities
    }

    pub fn primary_block(&self) -> Option<BlockId> {
        self.block_identities.first().copied()
    }

    #[inline]
    pub fn matches(&self, block: BlockId) -> bool {
        self.block_identities.contains(&block)
    }
}
