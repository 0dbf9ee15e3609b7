use std::fmt;

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::data::npcs::{materialize_roster, NpcTemplate};

pub const STARTING_DAY: u32 = 1;
pub const STARTING_MONEY: i64 = 1_000;
pub const STARTING_HEALTH: i32 = 100;
pub const STARTING_HAPPINESS: i32 = 100;

/// Relationship label derived from affinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RelationshipStatus {
    Stranger,
    Acquaintance,
    CloseFriend,
    InLove,
}

impl RelationshipStatus {
    pub fn from_affinity(affinity: i32) -> Self {
        if affinity >= 100 {
            RelationshipStatus::InLove
        } else if affinity >= 50 {
            RelationshipStatus::CloseFriend
        } else if affinity >= 20 {
            RelationshipStatus::Acquaintance
        } else {
            RelationshipStatus::Stranger
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RelationshipStatus::Stranger => "Stranger",
            RelationshipStatus::Acquaintance => "Acquaintance",
            RelationshipStatus::CloseFriend => "Close Friend",
            RelationshipStatus::InLove => "In Love",
        }
    }
}

impl fmt::Display for RelationshipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-game working copy of an NPC. Status is never stored; it is
/// recomputed from affinity on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NpcRecord", into = "NpcRecord")]
pub struct NpcState {
    pub id: String,
    pub name: String,
    pub archetype: String,
    affinity: i32,
}

impl NpcState {
    pub fn from_template(template: &NpcTemplate) -> Self {
        Self {
            id: template.id.to_string(),
            name: template.name.to_string(),
            archetype: template.archetype.to_string(),
            affinity: 0,
        }
    }

    pub fn affinity(&self) -> i32 {
        self.affinity
    }

    pub fn status(&self) -> RelationshipStatus {
        RelationshipStatus::from_affinity(self.affinity)
    }

    /// Affinity only grows.
    pub fn raise_affinity(&mut self, amount: u16) {
        self.affinity = self.affinity.saturating_add(i32::from(amount));
    }
}

/// On-disk shape of a roster entry. `status` is written for readers of the
/// file and discarded on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NpcRecord {
    id: String,
    name: String,
    #[serde(default)]
    archetype: String,
    #[serde(default)]
    affinity: i32,
    #[serde(default)]
    status: Option<String>,
}

impl From<NpcRecord> for NpcState {
    fn from(record: NpcRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            archetype: record.archetype,
            affinity: record.affinity,
        }
    }
}

impl From<NpcState> for NpcRecord {
    fn from(npc: NpcState) -> Self {
        let status = Some(npc.status().label().to_string());
        Self {
            id: npc.id,
            name: npc.name,
            archetype: npc.archetype,
            affinity: npc.affinity,
            status,
        }
    }
}

/// The single mutable root of a session.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub name: String,
    pub gender: String,
    pub day: u32,
    /// No floor or ceiling is enforced.
    pub money: i64,
    pub health: i32,
    pub happiness: i32,
    /// Declared by the save format, never assigned.
    pub current_job: Option<String>,
    pub social_links: Vec<NpcState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            name: String::new(),
            gender: String::new(),
            day: STARTING_DAY,
            money: STARTING_MONEY,
            health: STARTING_HEALTH,
            happiness: STARTING_HAPPINESS,
            current_job: None,
            social_links: materialize_roster(),
        }
    }
}

impl GameState {
    pub fn npc(&self, id: &str) -> Option<&NpcState> {
        self.social_links.iter().find(|npc| npc.id == id)
    }

    pub fn npc_mut(&mut self, id: &str) -> Option<&mut NpcState> {
        self.social_links.iter_mut().find(|npc| npc.id == id)
    }
}
