use roentgen_blocks::{BlockId, BlockRegistry};

/// A mode's allow-list of block types plus the built-in defaults it can be
/// reset to. Order and duplicates are preserved as given.
#[derive(Clone, Debug, Default)]
pub struct BlockSet {
    blocks: Vec<BlockId>,
    defaults: Vec<BlockId>,
}

impl BlockSet {
    pub fn new(defaults: Vec<BlockId>) -> Self {
        Self {
            blocks: defaults.clone(),
            defaults,
        }
    }

    #[inline]
    pub fn ids(&self) -> &[BlockId] {
        &self.blocks
    }

    #[inline]
    pub fn defaults(&self) -> &[BlockId] {
        &self.defaults
    }

    /// Exact-id membership scan. Lists stay small (tens of entries), so no
    /// index is kept.
    #[inline]
    pub fn contains(&self, id: BlockId) -> bool {
        self.blocks.contains(&id)
    }

    pub fn replace(&mut self, blocks: Vec<BlockId>) {
        self.blocks = blocks;
    }

    /// Restores the built-in default list.
    pub fn reset(&mut self) {
        self.blocks = self.defaults.clone();
    }

    /// Rebuilds the list from persisted names, in input order. Names that
    /// fail to resolve (stale entries, or the registry's air sentinel) are
    /// dropped silently; entries before one stay committed.
    pub fn set_from_names<'a, I>(&mut self, reg: &BlockRegistry, names: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.blocks.clear();
        for name in names {
            if let Some(id) = reg.resolve(name) {
                self.blocks.push(id);
            }
        }
    }

    /// Current list as registry names, for the settings write-back path.
    pub fn names(&self, reg: &BlockRegistry) -> Vec<String> {
        self.blocks
            .iter()
            .filter_map(|&id| reg.get(id).map(|t| t.name.clone()))
            .collect()
    }
}
