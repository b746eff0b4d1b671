use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use roentgen_blocks::{BlockRegistry, BlockView};
use roentgen_geom::Face;
use roentgen_modes::{HostHooks, Localizer, ModeRegistry, ModeSpec, ViewMode};

mod input;
mod settings;
mod world;

use input::ScriptedTrigger;
use world::DemoWorld;

const DEFAULT_BLOCKS_TOML: &str = include_str!("../config/blocks.toml");

#[derive(Parser)]
#[command(about = "Selective block-visibility demo: x-ray and cave modes over a small world")]
struct Args {
    /// Block registry TOML; the built-in registry is used when omitted.
    #[arg(long)]
    blocks: Option<PathBuf>,
    /// Mode settings file, read at startup and written back on exit.
    #[arg(long, default_value = "modes.toml")]
    settings: PathBuf,
    /// Number of simulation ticks to run.
    #[arg(long, default_value_t = 12)]
    ticks: u64,
}

/// Host-engine stand-in: counts geometry rebuilds and tracks the ambient
/// light override.
#[derive(Default)]
struct EngineStub {
    reloads: usize,
    fullbright: bool,
}

impl HostHooks for EngineStub {
    fn invalidate_chunk_cache(&mut self) {
        self.reloads += 1;
        log::debug!("chunk cache invalidated (rebuild #{})", self.reloads);
    }

    fn set_fullbright(&mut self, on: bool) {
        if self.fullbright != on {
            log::debug!("fullbright {}", if on { "on" } else { "off" });
        }
        self.fullbright = on;
    }
}

struct EnglishNames;

impl Localizer for EnglishNames {
    fn translate(&self, key: &str) -> String {
        match key {
            "xray.mode.xray" => "X-Ray".to_string(),
            "xray.mode.cave" => "Cave View".to_string(),
            "xray.mode.redstone" => "Redstone".to_string(),
            _ => key.to_string(),
        }
    }
}

/// The built-in roster: default lists come from registry tags so the block
/// set and the roster stay in one config file.
fn build_roster(modes: &mut ModeRegistry, blocks: &BlockRegistry) {
    modes.add(ModeSpec {
        name: "xray".into(),
        view: ViewMode::Exclusive,
        key: "x".into(),
        default_blocks: blocks.ids_with_tag("ore"),
    });
    modes.add(ModeSpec {
        name: "cave".into(),
        view: ViewMode::Inclusive,
        key: "c".into(),
        default_blocks: blocks.ids_with_tag("terrain"),
    });
    modes.add(ModeSpec {
        name: "redstone".into(),
        view: ViewMode::Exclusive,
        key: "r".into(),
        default_blocks: blocks.ids_with_tag("mechanism"),
    });
}

/// Scripted presses per binding label, standing in for real key input.
fn script_for(key: &str) -> Option<Vec<u64>> {
    match key {
        "x" => Some(vec![1, 9]),
        "c" => Some(vec![4]),
        "r" => Some(vec![6]),
        _ => None,
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let blocks = match &args.blocks {
        Some(path) => BlockRegistry::from_path(path)?,
        None => BlockRegistry::from_toml_str(DEFAULT_BLOCKS_TOML)?,
    };
    log::info!("registry loaded: {} block types", blocks.blocks.len());

    let world = DemoWorld::generate(&blocks, 16, 8);

    let mut modes = ModeRegistry::new();
    build_roster(&mut modes, &blocks);
    match settings::load(&args.settings) {
        Ok(Some(file)) => settings::apply(&file, &mut modes, &blocks),
        Ok(None) => log::info!("no settings at {}; using defaults", args.settings.display()),
        Err(e) => log::warn!("settings unreadable ({e}); using defaults"),
    }

    let loc = EnglishNames;
    let labels: Vec<String> = modes
        .iter()
        .map(|(_, m)| m.display_name(&loc))
        .collect();
    log::info!("modes: {}", labels.join(", "));

    // Bind scripted triggers by each mode's key label.
    let ids: Vec<_> = modes.iter().map(|(id, _)| id).collect();
    for id in ids {
        let key = modes.get(id).map(|m| m.key().to_string()).unwrap_or_default();
        if let Some(ticks) = script_for(&key) {
            if let Some(m) = modes.get_mut(id) {
                m.set_trigger(Box::new(ScriptedTrigger::new(ticks)));
            }
        }
    }

    let mut engine = EngineStub::default();
    let mut dirty = false;
    for tick in 0..args.ticks {
        if modes.poll_triggers(&mut engine) {
            dirty = true;
        }
        let (drawn, total) = survey_faces(&modes, &world);
        let label = modes
            .selected_mode()
            .map(|m| m.display_name(&loc))
            .unwrap_or_else(|| "none".to_string());
        log::info!("tick={tick} mode={label} faces_drawn={drawn}/{total}");
    }

    if dirty {
        settings::save(&args.settings, &settings::capture(&modes, &blocks))?;
        log::info!("settings written to {}", args.settings.display());
    }
    log::info!(
        "done: {} geometry rebuilds, fullbright {}",
        engine.reloads,
        if engine.fullbright { "on" } else { "off" }
    );
    Ok(())
}

/// Runs every solid block's six faces through the visibility hook, falling
/// back to plain exposure culling when no mode is active.
fn survey_faces(modes: &ModeRegistry, world: &DemoWorld) -> (usize, usize) {
    let mut drawn = 0usize;
    let mut total = 0usize;
    for pos in world.solid_positions() {
        let block = world.block_at(pos);
        for face in Face::ALL {
            total += 1;
            let draw = modes
                .should_render_face(block, world, pos, face)
                .unwrap_or_else(|| world.is_air(pos.offset(face)));
            if draw {
                drawn += 1;
            }
        }
    }
    (drawn, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_covers_the_builtin_roster() {
        let blocks = BlockRegistry::from_toml_str(DEFAULT_BLOCKS_TOML).expect("default registry");
        let mut modes = ModeRegistry::new();
        build_roster(&mut modes, &blocks);
        assert_eq!(modes.len(), 3);
        for (_, m) in modes.iter() {
            assert!(
                !m.blocks().defaults().is_empty(),
                "mode '{}' has an empty default list",
                m.name()
            );
        }
    }

    #[test]
    fn survey_draws_fewer_faces_under_xray() {
        let blocks = BlockRegistry::from_toml_str(DEFAULT_BLOCKS_TOML).unwrap();
        let world = DemoWorld::generate(&blocks, 8, 6);
        let mut modes = ModeRegistry::new();
        build_roster(&mut modes, &blocks);
        let (default_drawn, total) = survey_faces(&modes, &world);
        assert!(default_drawn > 0 && default_drawn < total);

        let xray = modes.find_by_name("xray").unwrap();
        let mut engine = EngineStub::default();
        modes.set_enabled(xray, true, false, &mut engine);
        let (xray_drawn, _) = survey_faces(&modes, &world);
        // Only ore boundary faces survive; far fewer than normal culling keeps.
        assert!(xray_drawn < default_drawn);
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
