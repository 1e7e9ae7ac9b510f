//! Seeded world generation for the demo.
use compass_core::catalog::names;
use compass_core::{BlockPalette, MaterialCatalog, Position};
use compass_runtime::VoxelWorld;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Veins per material at tier 1; higher tiers get proportionally fewer.
const BASE_VEINS: u32 = 24;
const MAX_VEIN_SIZE: i32 = 3;

/// Scatters small ore veins in a stone cube of half-width `extent` around
/// the origin. The same seed always yields the same world.
pub fn generate(
    seed: u64,
    extent: i32,
    palette: &BlockPalette,
    catalog: &MaterialCatalog,
) -> VoxelWorld {
    let stone = palette.resolve(names::STONE).unwrap_or_default();
    let mut world = VoxelWorld::new(stone);
    let mut rng = StdRng::seed_from_u64(seed);

    for material in catalog.iter() {
        let veins = BASE_VEINS / u32::from(material.tier().max(1));
        for _ in 0..veins {
            let Some(&block) = material.block_identities().choose(&mut rng) else {
                continue;
            };
            let origin = Position::new(
                rng.gen_range(-extent..=extent),
                rng.gen_range(-extent / 2..=extent / 2),
                rng.gen_range(-extent..=extent),
            );
            for i in 0..rng.gen_range(1..=MAX_VEIN_SIZE) {
                world.set(origin.offset(i, 0, 0), block);
            }
        }
    }

    tracing::debug!(seed, extent, placed = world.placed_count(), "world generated");
    world
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(world: &VoxelWorld) -> Vec<(Position, compass_core::BlockId)> {
        let mut blocks: Vec<_> = world.placed().collect();
        blocks.sort();
        blocks
    }

    #[test]
    fn same_seed_same_world() {
        let palette = BlockPalette::standard();
        let catalog = MaterialCatalog::standard();
        let a = generate(7, 16, &palette, &catalog);
        let b = generate(7, 16, &palette, &catalog);
        assert_eq!(placed(&a), placed(&b));
        assert!(a.placed_count() > 0);
    }

    #[test]
    fn ores_stay_inside_the_area() {
        let palette = BlockPalette::standard();
        let catalog = MaterialCatalog::standard();
        let world = generate(99, 10, &palette, &catalog);
        for (position, block) in world.placed() {
            assert!(position.x.abs() <= 10 + MAX_VEIN_SIZE);
            assert!(position.y.abs() <= 5);
            assert!(position.z.abs() <= 10);
            assert!(catalog.material_for_block(block).is_some());
        }
    }
}
