//! Material catalog loader.

use std::path::Path;

use compass_core::{BlockPalette, CatalogError, Material, MaterialCatalog, Rgb};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One material as written in a RON catalog; blocks are palette names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub id: String,
    pub tier: u8,
    pub priority: i32,
    pub color: u32,
    pub blocks: Vec<String>,
}

impl MaterialSpec {
    fn resolve(&self, palette: &BlockPalette) -> Result<Material, CatalogError> {
        let blocks = self
            .blocks
            .iter()
            .map(|name| {
                palette.resolve(name).ok_or_else(|| CatalogError::UnknownBlock {
                    material: self.id.as_str().into(),
                    block: name.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Material::new(
            self.id.as_str(),
            self.tier,
            self.priority,
            Rgb(self.color),
            blocks,
        ))
    }
}

/// Catalog file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub materials: Vec<MaterialSpec>,
}

/// Loader for material catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog, resolving block names against `palette`.
    ///
    /// Every named block must already be in the palette; hosts that add
    /// modded blocks register them before loading.
    pub fn load(path: &Path, palette: &BlockPalette) -> LoadResult<MaterialCatalog> {
        let content = read_file(path)?;
        Self::parse(&content, palette)
            .map_err(|e| anyhow::anyhow!("Invalid catalog {}: {}", path.display(), e))
    }

    /// Parse RON text into a validated catalog.
    pub fn parse(content: &str, palette: &BlockPalette) -> LoadResult<MaterialCatalog> {
        let file: CatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        let materials = file
            .materials
            .iter()
            .map(|spec| spec.resolve(palette))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MaterialCatalog::from_materials(materials)?)
    }

    /// The bundled standard catalog.
    pub fn standard(palette: &BlockPalette) -> LoadResult<MaterialCatalog> {
        Self::parse(crate::STANDARD_CATALOG_RON, palette)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn bundled_catalog_matches_builtin_table() {
        let palette = BlockPalette::standard();
        let loaded = CatalogLoader::standard(&palette).unwrap();
        let builtin = MaterialCatalog::standard();

        assert_eq!(loaded.len(), builtin.len());
        for (a, b) in loaded.iter().zip(builtin.iter()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn unknown_block_names_are_rejected() {
        let palette = BlockPalette::standard();
        let ron = r#"(materials: [
            (id: "tin", tier: 1, priority: 3, color: 0xAAAAAA, blocks: ["modded:tin_ore"]),
        ])"#;
        let err = CatalogLoader::parse(ron, &palette).unwrap_err();
        assert!(err.to_string().contains("modded:tin_ore"), "{err}");
    }

    #[test]
    fn registered_modded_blocks_resolve() {
        let mut palette = BlockPalette::standard();
        let tin = palette.register("modded:tin_ore");
        let ron = r#"(materials: [
            (id: "tin", tier: 1, priority: 3, color: 0xAAAAAA, blocks: ["modded:tin_ore"]),
        ])"#;
        let catalog = CatalogLoader::parse(ron, &palette).unwrap();
        assert!(catalog.by_id("tin").unwrap().matches(tin));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let palette = BlockPalette::standard();
        let ron = r#"(materials: [
            (id: "coal", tier: 1, priority: 8, color: 0x2D2D2D, blocks: ["minecraft:coal_ore"]),
            (id: "coal", tier: 2, priority: 1, color: 0x000000, blocks: ["minecraft:stone"]),
        ])"#;
        let err = CatalogLoader::parse(ron, &palette).unwrap_err();
        assert!(err.to_string().contains("more than once"), "{err}");
    }

    #[test]
    fn load_reads_from_disk() {
        let palette = BlockPalette::standard();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(materials: [(id: "iron", tier: 1, priority: 5, color: 0xD8AF93, blocks: ["minecraft:iron_ore"])])"#
        )
        .unwrap();
        let catalog = CatalogLoader::load(file.path(), &palette).unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
