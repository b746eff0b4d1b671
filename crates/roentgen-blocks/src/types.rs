/// Registry index of a block type.
pub type BlockId = u16;

/// Packed per-block state bits (orientation and the like); opaque to this
/// crate, carried through so neighbor lookups keep it intact.
pub type BlockState = u16;

/// A placed block: type id plus packed state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Block {
    pub id: BlockId,
    pub state: BlockState,
}

impl Block {
    #[inline]
    pub const fn new(id: BlockId) -> Self {
        Self { id, state: 0 }
    }
}
