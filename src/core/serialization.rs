use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::data::npcs::{materialize_roster, npc_template};
use crate::simulation::state::{
    GameState, NpcState, STARTING_DAY, STARTING_HAPPINESS, STARTING_HEALTH, STARTING_MONEY,
};

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("corrupted save file: {0}")]
    Corrupt(String),
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode save: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Save file as read from disk. Everything except `name` and `gender` may be
/// absent; a missing roster marks a save written before relationships existed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveState {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub day: Option<u32>,
    pub money: Option<i64>,
    pub health: Option<i32>,
    pub happiness: Option<i32>,
    pub current_job: Option<String>,
    pub social_links: Option<Vec<NpcState>>,
}

impl SaveState {
    pub fn is_legacy(&self) -> bool {
        self.social_links.is_none()
    }

    /// Validate identity fields and fill gaps with new-game values.
    pub fn into_game_state(self) -> Result<GameState, SaveError> {
        let name = required(self.name, "name")?;
        let gender = required(self.gender, "gender")?;
        Ok(GameState {
            name,
            gender,
            day: self.day.unwrap_or(STARTING_DAY),
            money: self.money.unwrap_or(STARTING_MONEY),
            health: self.health.unwrap_or(STARTING_HEALTH),
            happiness: self.happiness.unwrap_or(STARTING_HAPPINESS),
            current_job: self.current_job,
            // Present rosters are taken as-is, even if the catalog has moved on.
            social_links: self.social_links.unwrap_or_else(materialize_roster),
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, SaveError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(SaveError::Corrupt(format!("missing {}", field))),
    }
}

/// Serialize the whole state as pretty JSON.
pub fn save_state_to_json(state: &GameState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(state)
}

/// Parse and validate a save. Invalid JSON, mistyped fields and a missing
/// name or gender all count as corruption.
pub fn load_state_from_json(data: &str) -> Result<GameState, SaveError> {
    let save: SaveState =
        serde_json::from_str(data).map_err(|err| SaveError::Corrupt(err.to_string()))?;
    if save.is_legacy() {
        debug!("save has no roster; seeding it from the catalog");
    }
    let state = save.into_game_state()?;
    for npc in &state.social_links {
        if npc_template(&npc.id).is_none() {
            warn!(npc = %npc.id, "save roster entry has no catalog template");
        }
    }
    Ok(state)
}

/// File name for an export. Anything outside `[a-z0-9_-]` in the lowercased
/// name becomes `_`, so the name never leaves the target directory.
pub fn export_file_name(state: &GameState) -> String {
    let stem: String = state
        .name
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = if stem.is_empty() { "unnamed" } else { stem.as_str() };
    format!("neon_life_save_{}.json", stem)
}

/// Write the save into `dir` under its default file name.
pub fn export_save<P: AsRef<Path>>(state: &GameState, dir: P) -> Result<PathBuf, SaveError> {
    let path = dir.as_ref().join(export_file_name(state));
    save_state_to_path(state, &path)?;
    Ok(path)
}

/// Write a save state to a file path.
pub fn save_state_to_path<P: AsRef<Path>>(state: &GameState, path: P) -> Result<(), SaveError> {
    let path = path.as_ref();
    let json = save_state_to_json(state)?;
    fs::write(path, json).map_err(|source| SaveError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Read a save state from a file path.
pub fn load_state_from_path<P: AsRef<Path>>(path: P) -> Result<GameState, SaveError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| SaveError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_state_from_json(&data)
}
