use roentgen_blocks::{Block, BlockView};
use roentgen_geom::{BlockPos, Face};
use serde::{Deserialize, Serialize};

/// Face-visibility rule applied by a mode. Both variants are pure; the
/// renderer asks once per candidate face.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Draw only faces whose adjacent block is in the allow-list: the
    /// classic x-ray, everything else vanishes.
    #[default]
    Exclusive,
    /// Hide allow-listed blocks and keep the normal air-exposed surfaces of
    /// everything else: cave view.
    Inclusive,
}

impl ViewMode {
    /// `in_list` is the membership test of the adjacent block's type against
    /// the active allow-list; `pos`/`face` identify the candidate face.
    pub fn should_render(
        self,
        in_list: bool,
        _adjacent: Block,
        world: &dyn BlockView,
        pos: BlockPos,
        face: Face,
    ) -> bool {
        match self {
            ViewMode::Exclusive => in_list,
            ViewMode::Inclusive => !in_list && world.is_air(pos.offset(face)),
        }
    }
}
