use roentgen_blocks::{Block, BlockView};
use roentgen_geom::{BlockPos, Face};

use crate::hooks::HostHooks;
use crate::mode::{Mode, ModeSpec};

/// Fixed display palette, cycled round-robin as modes are constructed.
pub const MODE_COLORS: [u32; 12] = [
    0xff00ffff, 0xffff0000, 0xffffff00, 0xffff00ff, 0xff7aff00, 0xffff7a00, 0xff00ff7a, 0xffff007a,
    0xff7a00ff, 0xff7a7aff, 0xff7aff7a, 0xffff7a7a,
];

/// Handle into a `ModeRegistry`. Modes are append-only, so handles stay
/// valid for the registry's lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModeId(pub usize);

/// Owns every mode and the single "selected" slot. All activation goes
/// through here, so at most one mode is ever active.
#[derive(Default)]
pub struct ModeRegistry {
    modes: Vec<Mode>,
    selected: Option<ModeId>,
    color_cursor: usize,
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a mode from `spec`, assigns it the next palette color, and
    /// appends it. New modes start inactive.
    pub fn add(&mut self, spec: ModeSpec) -> ModeId {
        let color = MODE_COLORS[self.color_cursor];
        self.color_cursor = (self.color_cursor + 1) % MODE_COLORS.len();
        let id = ModeId(self.modes.len());
        self.modes.push(Mode::from_spec(spec, color));
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    pub fn get(&self, id: ModeId) -> Option<&Mode> {
        self.modes.get(id.0)
    }

    pub fn get_mut(&mut self, id: ModeId) -> Option<&mut Mode> {
        self.modes.get_mut(id.0)
    }

    pub fn find_by_name(&self, name: &str) -> Option<ModeId> {
        self.modes.iter().position(|m| m.name() == name).map(ModeId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ModeId, &Mode)> {
        self.modes.iter().enumerate().map(|(i, m)| (ModeId(i), m))
    }

    #[inline]
    pub fn selected(&self) -> Option<ModeId> {
        self.selected
    }

    pub fn selected_mode(&self) -> Option<&Mode> {
        self.selected.and_then(|id| self.modes.get(id.0))
    }

    #[inline]
    pub fn any_active(&self) -> bool {
        self.selected.is_some()
    }

    // Sole mutator of `selected`; the at-most-one-active invariant holds by
    // construction because every transition lands here.
    fn set_selected(&mut self, next: Option<ModeId>) {
        if let Some(prev) = self.selected.take() {
            if let Some(m) = self.modes.get_mut(prev.0) {
                m.set_enabled(false);
            }
        }
        if let Some(id) = next {
            if let Some(m) = self.modes.get_mut(id.0) {
                m.set_enabled(true);
                self.selected = Some(id);
            }
        }
    }

    /// Flips the mode's activation, with renderer reload.
    pub fn toggle(&mut self, id: ModeId, hooks: &mut dyn HostHooks) {
        let enable = !self.get(id).is_some_and(|m| m.is_enabled());
        self.set_enabled(id, enable, true, hooks);
    }

    /// The activation transition. Enabling replaces whatever mode was
    /// selected; disabling clears the selection outright, even when the
    /// selected mode was a different one. Fullbright tracks `any_active`
    /// after every transition; the chunk cache is rebuilt unless the caller
    /// batches reloads itself.
    pub fn set_enabled(&mut self, id: ModeId, enable: bool, reload: bool, hooks: &mut dyn HostHooks) {
        self.set_selected(if enable { Some(id) } else { None });
        if let Some(m) = self.get(id) {
            log::info!(
                "mode '{}' {}",
                m.name(),
                if m.is_enabled() { "enabled" } else { "disabled" }
            );
        }
        hooks.set_fullbright(self.any_active());
        if reload {
            hooks.invalidate_chunk_cache();
        }
    }

    /// Polls every mode's bound trigger once and applies the resulting
    /// toggles in mode order. Returns true if any trigger fired; callers use
    /// that as the cue to persist settings.
    pub fn poll_triggers(&mut self, hooks: &mut dyn HostHooks) -> bool {
        let mut any = false;
        for i in 0..self.modes.len() {
            if self.modes[i].trigger_fired() {
                let enable = !self.modes[i].is_enabled();
                log::debug!("trigger fired for mode '{}'", self.modes[i].name());
                self.set_enabled(ModeId(i), enable, true, hooks);
                any = true;
            }
        }
        any
    }

    /// Per-face renderer query. `Some(draw)` overrides the renderer's
    /// default culling decision; `None` means no mode is active and the
    /// default applies. `adjacent` is the block whose face is the candidate.
    pub fn should_render_face(
        &self,
        adjacent: Block,
        world: &dyn BlockView,
        pos: BlockPos,
        face: Face,
    ) -> Option<bool> {
        let mode = self.selected_mode()?;
        if !mode.is_enabled() {
            return None;
        }
        Some(mode.view().should_render(
            mode.blocks().contains(adjacent.id),
            adjacent,
            world,
            pos,
            face,
        ))
    }
}
