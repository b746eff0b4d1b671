use roentgen_geom::BlockPos;

use super::types::Block;

/// Read-only world sampling, implemented by whatever owns chunk data on the
/// host side. Out-of-bounds positions report air.
pub trait BlockView {
    fn block_at(&self, pos: BlockPos) -> Block;

    fn is_air(&self, pos: BlockPos) -> bool;
}
