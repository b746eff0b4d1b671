use proptest::prelude::*;
use roentgen_blocks::{Block, BlockRegistry, BlockView};
use roentgen_geom::{BlockPos, Face};
use roentgen_modes::{HostHooks, InputTrigger, ModeRegistry, ModeSpec, ViewMode};

#[derive(Default)]
struct NullHooks {
    fullbright: bool,
}

impl HostHooks for NullHooks {
    fn invalidate_chunk_cache(&mut self) {}

    fn set_fullbright(&mut self, on: bool) {
        self.fullbright = on;
    }
}

/// Fires on the listed ticks; `advance` must be called once per tick.
struct Script {
    fire_on: Vec<u64>,
    tick: u64,
}

impl Script {
    fn new(fire_on: &[u64]) -> Self {
        Self {
            fire_on: fire_on.to_vec(),
            tick: 0,
        }
    }
}

impl InputTrigger for Script {
    fn was_triggered(&mut self) -> bool {
        let fired = self.fire_on.contains(&self.tick);
        self.tick += 1;
        fired
    }
}

/// Flat slab of stone below y=0, air everywhere above.
struct Slab;

impl BlockView for Slab {
    fn block_at(&self, pos: BlockPos) -> Block {
        if self.is_air(pos) {
            Block::new(0)
        } else {
            Block::new(1)
        }
    }

    fn is_air(&self, pos: BlockPos) -> bool {
        pos.y >= 0
    }
}

fn spec(name: &str, view: ViewMode, blocks: Vec<u16>) -> ModeSpec {
    ModeSpec {
        name: name.into(),
        view,
        key: "x".into(),
        default_blocks: blocks,
    }
}

#[test]
fn trigger_toggles_once_per_firing_tick() {
    let mut reg = ModeRegistry::new();
    let a = reg.add(spec("xray", ViewMode::Exclusive, vec![1]));
    reg.get_mut(a)
        .unwrap()
        .set_trigger(Box::new(Script::new(&[2, 5])));
    let mut hooks = NullHooks::default();

    let mut history = Vec::new();
    for _ in 0..7 {
        let fired = reg.poll_triggers(&mut hooks);
        history.push((fired, reg.get(a).unwrap().is_enabled()));
    }
    // Fires on ticks 2 and 5, flipping on then off; quiet ticks change nothing.
    let expected = [
        (false, false),
        (false, false),
        (true, true),
        (false, true),
        (false, true),
        (true, false),
        (false, false),
    ];
    assert_eq!(history, expected);
}

#[test]
fn hook_falls_through_when_nothing_is_active() {
    let mut reg = ModeRegistry::new();
    let a = reg.add(spec("xray", ViewMode::Exclusive, vec![1]));
    let decision = reg.should_render_face(Block::new(1), &Slab, BlockPos::new(0, -2, 0), Face::PosY);
    assert_eq!(decision, None);

    let mut hooks = NullHooks::default();
    reg.set_enabled(a, true, false, &mut hooks);
    let decision = reg.should_render_face(Block::new(1), &Slab, BlockPos::new(0, -2, 0), Face::PosY);
    assert_eq!(decision, Some(true));
    let decision = reg.should_render_face(Block::new(2), &Slab, BlockPos::new(0, -2, 0), Face::PosY);
    assert_eq!(decision, Some(false));
}

#[test]
fn inclusive_mode_keeps_surface_faces_only() {
    let mut reg = ModeRegistry::new();
    // Hide stone (id 1); everything else keeps its air-exposed faces.
    let cave = reg.add(spec("cave", ViewMode::Inclusive, vec![1]));
    let mut hooks = NullHooks::default();
    reg.set_enabled(cave, true, false, &mut hooks);

    let surface = BlockPos::new(4, -1, 4);
    // Stone itself is hidden regardless of exposure.
    assert_eq!(
        reg.should_render_face(Block::new(1), &Slab, surface, Face::PosY),
        Some(false)
    );
    // An unlisted block renders its upward face (steps into air)...
    assert_eq!(
        reg.should_render_face(Block::new(2), &Slab, surface, Face::PosY),
        Some(true)
    );
    // ...but not a buried sideways face.
    assert_eq!(
        reg.should_render_face(Block::new(2), &Slab, surface, Face::NegX),
        Some(false)
    );
}

#[test]
fn saved_names_rebuild_a_mode_list() {
    let reg_blocks = BlockRegistry::from_toml_str(
        r#"
        air_block = "air"

        [[blocks]]
        name = "air"
        solid = false

        [[blocks]]
        name = "stone"

        [[blocks]]
        name = "dirt"
        "#,
    )
    .unwrap();
    let mut reg = ModeRegistry::new();
    let a = reg.add(spec("xray", ViewMode::Exclusive, vec![]));
    let mode = reg.get_mut(a).unwrap();
    mode.blocks_mut().set_from_names(
        &reg_blocks,
        ["stone", "bogus_unknown_name", "dirt"],
    );
    assert_eq!(mode.blocks().ids(), &[1, 2]);
}

proptest! {
    // Any interleaving of enable/disable calls leaves at most one active
    // mode, and the selection agrees with the unique active mode.
    #[test]
    fn at_most_one_active_after_any_sequence(
        ops in proptest::collection::vec((0usize..4, any::<bool>()), 0..40),
    ) {
        let mut reg = ModeRegistry::new();
        let ids: Vec<_> = (0..4)
            .map(|i| reg.add(spec(&format!("m{i}"), ViewMode::Exclusive, vec![1])))
            .collect();
        let mut hooks = NullHooks::default();
        for (idx, enable) in ops {
            reg.set_enabled(ids[idx], enable, false, &mut hooks);
            let active: Vec<_> = reg.iter().filter(|(_, m)| m.is_enabled()).map(|(id, _)| id).collect();
            prop_assert!(active.len() <= 1);
            prop_assert_eq!(reg.selected(), active.first().copied());
            prop_assert_eq!(hooks.fullbright, reg.any_active());
        }
    }
}
