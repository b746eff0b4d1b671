use roentgen_modes::InputTrigger;

/// Stand-in for a real key binding: fires on a fixed set of ticks. The tick
/// counter advances on every poll, so a firing tick reports true exactly
/// once.
pub struct ScriptedTrigger {
    fire_on: Vec<u64>,
    tick: u64,
}

impl ScriptedTrigger {
    pub fn new(mut fire_on: Vec<u64>) -> Self {
        fire_on.sort_unstable();
        Self { fire_on, tick: 0 }
    }
}

impl InputTrigger for ScriptedTrigger {
    fn was_triggered(&mut self) -> bool {
        let fired = self.fire_on.binary_search(&self.tick).is_ok();
        self.tick += 1;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_on_listed_ticks() {
        let mut t = ScriptedTrigger::new(vec![3, 1]);
        let fired: Vec<bool> = (0..5).map(|_| t.was_triggered()).collect();
        assert_eq!(fired, vec![false, true, false, true, false]);
    }
}
