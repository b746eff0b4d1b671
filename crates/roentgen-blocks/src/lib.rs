//! Block type registry and world-sampling trait.
#![forbid(unsafe_code)]

pub mod config;
pub mod registry;
pub mod types;
pub mod view;

// Re-exports for convenience.
pub use registry::{BlockRegistry, BlockType};
pub use types::{Block, BlockId, BlockState};
pub use view::BlockView;
