//! The standard ore table.

use super::{BlockPalette, Material, MaterialCatalog, Rgb, names};

/// `(id, tier, priority, colour, blocks)` in definition order.
const STANDARD_ORES: &[(&str, u8, i32, u32, &[&str])] = &[
    // Tier 1
    ("coal", 1, 8, 0x2D2D2D, &[names::COAL_ORE, names::DEEPSLATE_COAL_ORE]),
    ("iron", 1, 5, 0xD8AF93, &[names::IRON_ORE, names::DEEPSLATE_IRON_ORE]),
    ("copper", 1, 10, 0xE07C4A, &[names::COPPER_ORE, names::DEEPSLATE_COPPER_ORE]),
    // Tier 2
    (
        "gold",
        2,
        7,
        0xFCDB4A,
        &[names::GOLD_ORE, names::DEEPSLATE_GOLD_ORE, names::NETHER_GOLD_ORE],
    ),
    ("diamond", 2, 2, 0x4AEDD9, &[names::DIAMOND_ORE, names::DEEPSLATE_DIAMOND_ORE]),
    ("lapis", 2, 6, 0x1E4B9E, &[names::LAPIS_ORE, names::DEEPSLATE_LAPIS_ORE]),
    ("redstone", 2, 9, 0xAA0000, &[names::REDSTONE_ORE, names::DEEPSLATE_REDSTONE_ORE]),
    ("emerald", 2, 4, 0x17DD62, &[names::EMERALD_ORE, names::DEEPSLATE_EMERALD_ORE]),
    // Tier 3
    ("ancient_debris", 3, 1, 0x6B4226, &[names::ANCIENT_DEBRIS]),
    ("nether_quartz", 3, 3, 0xE3DDD4, &[names::NETHER_QUARTZ_ORE]),
];

pub(super) fn catalog() -> MaterialCatalog {
    let palette = BlockPalette::standard();
    let materials = STANDARD_ORES
        .iter()
        .map(|&(id, tier, priority, color, blocks)| {
            Material::new(
                id,
                tier,
                priority,
                Rgb(color),
                blocks.iter().filter_map(|name| palette.resolve(name)),
            )
        })
        .collect();

    match MaterialCatalog::from_materials(materials) {
        Ok(catalog) => catalog,
        // The table above is static; a failure here is a programming error.
        Err(err) => unreachable!("standard ore table is invalid: {err}"),
    }
}
