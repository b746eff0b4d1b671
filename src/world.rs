use hashbrown::HashMap;

use roentgen_blocks::{Block, BlockRegistry, BlockView};
use roentgen_geom::BlockPos;

/// Small in-memory world for the demo harness: a terrain slab with scattered
/// ores and a hollowed-out pocket. Sparse map, everything absent is air.
pub struct DemoWorld {
    blocks: HashMap<(i32, i32, i32), Block>,
    air: Block,
}

// Cheap coordinate hash for deterministic ore scatter.
#[inline]
fn scatter(x: i32, y: i32, z: i32) -> u32 {
    let h = (x.wrapping_mul(73856093)) ^ (y.wrapping_mul(19349663)) ^ (z.wrapping_mul(83492791));
    h as u32
}

impl DemoWorld {
    pub fn generate(reg: &BlockRegistry, size: i32, depth: i32) -> Self {
        let air = Block::new(reg.air_id());
        let id = |name: &str| reg.id_by_name(name).map(Block::new).unwrap_or(air);
        let stone = id("stone");
        let dirt = id("dirt");
        let grass = id("grass");
        let ores: Vec<Block> = reg.ids_with_tag("ore").into_iter().map(Block::new).collect();

        let mut blocks = HashMap::new();
        for x in 0..size {
            for z in 0..size {
                for y in -depth..0 {
                    let b = if y == -1 {
                        grass
                    } else if y == -2 {
                        dirt
                    } else if !ores.is_empty() && scatter(x, y, z) % 23 == 0 {
                        ores[(scatter(x, y, z) / 23) as usize % ores.len()]
                    } else {
                        stone
                    };
                    blocks.insert((x, y, z), b);
                }
            }
        }
        // Hollow pocket in the middle so cave view has a surface to keep.
        let c = size / 2;
        for x in (c - 2)..(c + 2) {
            for z in (c - 2)..(c + 2) {
                for y in (-depth + 2)..(-depth + 5) {
                    blocks.remove(&(x, y, z));
                }
            }
        }
        Self { blocks, air }
    }

    pub fn solid_positions(&self) -> impl Iterator<Item = BlockPos> + '_ {
        self.blocks
            .keys()
            .map(|&(x, y, z)| BlockPos::new(x, y, z))
    }
}

impl BlockView for DemoWorld {
    fn block_at(&self, pos: BlockPos) -> Block {
        self.blocks
            .get(&(pos.x, pos.y, pos.z))
            .copied()
            .unwrap_or(self.air)
    }

    fn is_air(&self, pos: BlockPos) -> bool {
        self.block_at(pos) == self.air
    }
}
