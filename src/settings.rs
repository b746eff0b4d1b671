use std::error::Error;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use roentgen_blocks::BlockRegistry;
use roentgen_modes::{CUSTOM_PREFIX, ModeRegistry, ModeSpec, ViewMode};

/// On-disk mode settings (`modes.toml`): per-mode view policy, binding
/// label, and the allow-list as human-readable block names.
#[derive(Serialize, Deserialize, Default)]
pub struct ModesFile {
    #[serde(default)]
    pub modes: Vec<ModeEntry>,
}

#[derive(Serialize, Deserialize)]
pub struct ModeEntry {
    pub name: String,
    pub view: ViewMode,
    pub key: String,
    pub blocks: Vec<String>,
}

/// Loads the settings file if it exists. A malformed file is reported as an
/// error; the caller decides whether to fall back to defaults.
pub fn load(path: impl AsRef<Path>) -> Result<Option<ModesFile>, Box<dyn Error>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let s = fs::read_to_string(path)?;
    let file: ModesFile = toml::from_str(&s)?;
    Ok(Some(file))
}

/// Applies saved entries to the live registry. Entries matching an existing
/// mode by name replace its view policy and allow-list (stale block names
/// drop out silently); unmatched entries with the custom prefix create new
/// modes, anything else is a leftover from an older roster and is skipped.
pub fn apply(file: &ModesFile, modes: &mut ModeRegistry, blocks: &BlockRegistry) {
    for entry in &file.modes {
        match modes.find_by_name(&entry.name) {
            Some(id) => {
                if let Some(mode) = modes.get_mut(id) {
                    mode.set_view(entry.view);
                    mode.blocks_mut()
                        .set_from_names(blocks, entry.blocks.iter().map(String::as_str));
                }
            }
            None if entry.name.starts_with(CUSTOM_PREFIX) => {
                let id = modes.add(ModeSpec {
                    name: entry.name.clone(),
                    view: entry.view,
                    key: entry.key.clone(),
                    default_blocks: Vec::new(),
                });
                if let Some(mode) = modes.get_mut(id) {
                    mode.blocks_mut()
                        .set_from_names(blocks, entry.blocks.iter().map(String::as_str));
                }
            }
            None => {
                log::warn!("settings entry '{}' matches no mode; skipped", entry.name);
            }
        }
    }
}

/// Snapshot of the live registry in settings-file form.
pub fn capture(modes: &ModeRegistry, blocks: &BlockRegistry) -> ModesFile {
    ModesFile {
        modes: modes
            .iter()
            .map(|(_, m)| ModeEntry {
                name: m.name().to_string(),
                view: m.view(),
                key: m.key().to_string(),
                blocks: m.blocks().names(blocks),
            })
            .collect(),
    }
}

pub fn save(path: impl AsRef<Path>, file: &ModesFile) -> Result<(), Box<dyn Error>> {
    let s = toml::to_string_pretty(file)?;
    fs::write(path, s)?;
    Ok(())
}
