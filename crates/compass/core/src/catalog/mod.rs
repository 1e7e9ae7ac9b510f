//! Static registry of detectable materials.
//!
//! The catalog is a data table keyed by [`MaterialId`]: membership, tier and
//! priority are pure data. It is built once at startup, validated, and then
//! shared read-only (hosts wrap it in an `Arc`).
mod blocks;
mod material;
mod standard;

pub use blocks::{BlockId, BlockPalette, names};
pub use material::{Material, MaterialId, Rgb};

use std::collections::HashMap;

use crate::error::CatalogError;

/// Immutable, validated table of materials in definition order.
#[derive(Clone, Debug)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
    index: HashMap<MaterialId, usize>,
}

impl MaterialCatalog {
    /// Builds a catalog, rejecting duplicate ids and empty block sets.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] or [`CatalogError::EmptyBlockSet`].
    pub fn from_materials(materials: Vec<Material>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(materials.len());
        for (slot, material) in materials.iter().enumerate() {
            if material.block_identities().is_empty() {
                return Err(CatalogError::EmptyBlockSet(material.id().clone()));
            }
            if index.insert(material.id().clone(), slot).is_some() {
                return Err(CatalogError::DuplicateId(material.id().clone()));
            }
        }
        Ok(Self { materials, index })
    }

    /// The ten standard ores, resolved against [`BlockPalette::standard`].
    pub fn standard() -> Self {
        standard::catalog()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// All materials in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    pub fn by_id(&self, id: &str) -> Option<&Material> {
        self.index.get(id).map(|&slot| &self.materials[slot])
    }

    /// Materials a tool of `tier` can sense, in definition order.
    ///
    /// Order is deliberately not priority-sorted; priority is resolved by the
    /// scanner.
    pub fn materials_for_tier(&self, tier: u8) -> Vec<&Material> {
        self.materials.iter().filter(|m| m.tier() <= tier).collect()
    }

    pub fn matches(&self, material: &Material, block: BlockId) -> bool {
        material.matches(block)
    }

    /// First material in definition order whose blocks contain `block`.
    pub fn material_for_block(&self, block: BlockId) -> Option<&Material> {
        self.materials.iter().find(|m| m.matches(block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(id: &str, tier: u8, blocks: &[u32]) -> Material {
        Material::new(
            id,
            tier,
            1,
            Rgb(0),
            blocks.iter().copied().map(BlockId),
        )
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = MaterialCatalog::from_materials(vec![
            material("a", 1, &[1]),
            material("a", 2, &[2]),
        ])
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(MaterialId::new("a")));
    }

    #[test]
    fn rejects_empty_block_set() {
        let err = MaterialCatalog::from_materials(vec![material("a", 1, &[])]).unwrap_err();
        assert_eq!(err, CatalogError::EmptyBlockSet(MaterialId::new("a")));
    }

    #[test]
    fn tier_filter_keeps_definition_order() {
        let catalog = MaterialCatalog::standard();
        let ids: Vec<_> = catalog
            .materials_for_tier(1)
            .into_iter()
            .map(|m| m.id().as_str())
            .collect();
        assert_eq!(ids, ["coal", "iron", "copper"]);
        assert_eq!(catalog.materials_for_tier(2).len(), 8);
        assert_eq!(catalog.materials_for_tier(3).len(), 10);
        assert!(catalog.materials_for_tier(0).is_empty());
    }

    #[test]
    fn by_id_and_matches() {
        let catalog = MaterialCatalog::standard();
        let palette = BlockPalette::standard();
        let gold = catalog.by_id("gold").unwrap();
        let nether_gold = palette.resolve(names::NETHER_GOLD_ORE).unwrap();
        let stone = palette.resolve(names::STONE).unwrap();
        assert!(catalog.matches(gold, nether_gold));
        assert!(!catalog.matches(gold, stone));
        assert!(catalog.by_id("unobtainium").is_none());
    }
}
