use roentgen_blocks::BlockId;

use crate::hooks::{InputTrigger, Localizer};
use crate::policy::ViewMode;
use crate::set::BlockSet;

/// Names carrying this prefix mark user-defined modes; they are displayed
/// verbatim instead of going through the localizer.
pub const CUSTOM_PREFIX: &str = "custom_";

/// Localization key namespace for built-in mode names.
pub const MODE_KEY_NAMESPACE: &str = "xray.mode.";

/// Everything needed to construct a mode. The display color is not here:
/// the registry assigns it from its palette cursor.
pub struct ModeSpec {
    pub name: String,
    pub view: ViewMode,
    /// Human-readable binding label ("x", "c", ...), persisted with the
    /// mode; the host maps it to an actual input trigger.
    pub key: String,
    pub default_blocks: Vec<BlockId>,
}

/// A named visibility policy with its own allow-list, toggle trigger, and
/// display color. Lives in a `ModeRegistry` for the process lifetime.
pub struct Mode {
    name: String,
    color: u32,
    enabled: bool,
    view: ViewMode,
    blocks: BlockSet,
    key: String,
    trigger: Option<Box<dyn InputTrigger>>,
}

impl Mode {
    pub(crate) fn from_spec(spec: ModeSpec, color: u32) -> Self {
        Self {
            name: spec.name,
            color,
            enabled: false,
            view: spec.view,
            blocks: BlockSet::new(spec.default_blocks),
            key: spec.key,
            trigger: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_custom(&self) -> bool {
        self.name.starts_with(CUSTOM_PREFIX)
    }

    /// Custom names are shown verbatim; built-in names go through the
    /// localizer under the `xray.mode.` namespace.
    pub fn display_name(&self, loc: &dyn Localizer) -> String {
        if self.is_custom() {
            self.name.clone()
        } else {
            loc.translate(&format!("{MODE_KEY_NAMESPACE}{}", self.name))
        }
    }

    /// Packed ARGB display color assigned at construction.
    #[inline]
    pub fn color(&self) -> u32 {
        self.color
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_enabled(&mut self, on: bool) {
        self.enabled = on;
    }

    #[inline]
    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    #[inline]
    pub fn blocks(&self) -> &BlockSet {
        &self.blocks
    }

    #[inline]
    pub fn blocks_mut(&mut self) -> &mut BlockSet {
        &mut self.blocks
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_trigger(&mut self, trigger: Box<dyn InputTrigger>) {
        self.trigger = Some(trigger);
    }

    /// Polls the bound trigger; false when none is bound.
    pub(crate) fn trigger_fired(&mut self) -> bool {
        match self.trigger.as_mut() {
            Some(t) => t.was_triggered(),
            None => false,
        }
    }
}
