//! Selective block-visibility modes: per-mode allow-lists, the two face
//! policies, and the registry that keeps at most one mode active.
#![forbid(unsafe_code)]

pub mod hooks;
pub mod mode;
pub mod policy;
pub mod registry;
pub mod set;

// Re-exports for convenience.
pub use hooks::{HostHooks, InputTrigger, Localizer};
pub use mode::{CUSTOM_PREFIX, Mode, ModeSpec};
pub use policy::ViewMode;
pub use registry::{MODE_COLORS, ModeId, ModeRegistry};
pub use set::BlockSet;
