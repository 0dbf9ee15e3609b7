use crate::simulation::state::NpcState;

/// Static definition of a befriendable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NpcTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub archetype: &'static str,
}

const NPCS: [NpcTemplate; 3] = [
    NpcTemplate {
        id: "nova",
        name: "Nova",
        archetype: "Street Doc",
    },
    NpcTemplate {
        id: "jax",
        name: "Jax",
        archetype: "Nightclub DJ",
    },
    NpcTemplate {
        id: "echo",
        name: "Echo",
        archetype: "Cyborg Artist",
    },
];

/// The NPC catalog in display order.
pub fn npc_templates() -> &'static [NpcTemplate] {
    &NPCS
}

pub fn npc_template(id: &str) -> Option<&'static NpcTemplate> {
    NPCS.iter().find(|npc| npc.id == id)
}

/// Build a fresh roster from the catalog: one stranger per template.
pub fn materialize_roster() -> Vec<NpcState> {
    NPCS.iter().map(NpcState::from_template).collect()
}
