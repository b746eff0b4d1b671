//! Seams toward the host engine. The core never owns input, rendering, or
//! localization; it only calls through these traits.

/// Edge-triggered input handle bound to a mode. Fires once per press, not
/// while held; polled once per input tick.
pub trait InputTrigger {
    fn was_triggered(&mut self) -> bool;
}

/// Engine callbacks driven by activation transitions.
pub trait HostHooks {
    /// Discard and rebuild cached world geometry. Required after any change
    /// to the effective visibility rule, since faces already meshed were
    /// decided under the old rule.
    fn invalidate_chunk_cache(&mut self);

    /// Ambient-light override; held on exactly while some mode is active.
    fn set_fullbright(&mut self, on: bool);
}

/// Display-string lookup for built-in mode names.
pub trait Localizer {
    fn translate(&self, key: &str) -> String;
}
