use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use super::config::BlocksConfig;
use super::types::{Block, BlockId};

#[derive(Clone, Debug)]
pub struct BlockType {
    pub id: BlockId,
    pub name: String,
    pub solid: bool,
    pub tags: Vec<String>,
}

impl BlockType {
    fn placeholder(id: BlockId) -> Self {
        BlockType {
            id,
            name: String::new(),
            solid: false,
            tags: Vec::new(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Name-addressed catalog of block types with a designated empty/none
/// sentinel (the air block).
#[derive(Default, Clone, Debug)]
pub struct BlockRegistry {
    pub blocks: Vec<BlockType>,
    pub by_name: HashMap<String, BlockId>,
    air_id: BlockId,
}

impl BlockRegistry {
    #[inline]
    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.blocks.get(id as usize)
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).copied()
    }

    /// The registry's empty/none sentinel type.
    #[inline]
    pub fn air_id(&self) -> BlockId {
        self.air_id
    }

    #[inline]
    pub fn is_air(&self, b: Block) -> bool {
        b.id == self.air_id
    }

    /// Resolves a persisted human-readable name. Unknown names and names
    /// that map to the air sentinel both collapse to `None`, which callers
    /// treat as "skip this entry".
    pub fn resolve(&self, name: &str) -> Option<BlockId> {
        self.id_by_name(name).filter(|&id| id != self.air_id)
    }

    /// Ids of every type carrying the given tag, in id order.
    pub fn ids_with_tag(&self, tag: &str) -> Vec<BlockId> {
        self.blocks
            .iter()
            .filter(|t| t.has_tag(tag))
            .map(|t| t.id)
            .collect()
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: BlocksConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_config(cfg: BlocksConfig) -> Result<Self, Box<dyn Error>> {
        let mut reg = BlockRegistry::default();
        let air_name = cfg.air_block.unwrap_or_else(|| "air".to_string());
        for def in cfg.blocks.into_iter() {
            let id = def.id.unwrap_or(reg.blocks.len() as u16);
            let ty = BlockType {
                id,
                name: def.name,
                solid: def.solid.unwrap_or(true),
                tags: def.tags.unwrap_or_default(),
            };
            if reg.blocks.len() <= id as usize {
                reg.blocks
                    .resize(id as usize + 1, BlockType::placeholder(id));
            }
            reg.blocks[id as usize] = ty;
        }
        reg.by_name = reg
            .blocks
            .iter()
            .filter(|t| !t.name.is_empty())
            .map(|t| (t.name.clone(), t.id))
            .collect();
        reg.air_id = reg
            .id_by_name(&air_name)
            .ok_or_else(|| format!("air block {air_name:?} is not defined in the registry"))?;
        Ok(reg)
    }
}
