use serde::Deserialize;

/// On-disk shape of a block registry definition (`blocks.toml`).
#[derive(Deserialize)]
pub struct BlocksConfig {
    pub blocks: Vec<BlockDef>,
    /// Name of the type used as the empty/none sentinel. Defaults to "air".
    pub air_block: Option<String>,
}

#[derive(Deserialize)]
pub struct BlockDef {
    pub name: String,
    /// Explicit id; defaults to the definition's position in the list.
    pub id: Option<u16>,
    pub solid: Option<bool>,
    /// Optional free-form tags ("ore", "mechanism", ...) used by callers to
    /// assemble default allow-lists without hardcoding names twice.
    pub tags: Option<Vec<String>>,
}
