use tracing::debug;

use crate::data::jobs::{job, JobId};
use crate::data::npcs::materialize_roster;
use crate::simulation::state::GameState;

pub const INTERACT_COST: i64 = 50;
pub const AFFINITY_GAIN: u16 = 10;

/// Rejected player actions. The message is shown to the player as-is and
/// the state is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("Please enter a name.")]
    NameRequired,
    #[error("Please select a gender.")]
    GenderRequired,
    #[error("Too exhausted to work!")]
    TooExhausted,
    #[error("Need 50 credits to hang out.")]
    InsufficientFunds,
    #[error("The books can't hold any more.")]
    CounterOverflow,
}

pub fn set_gender(state: &mut GameState, gender: &str) {
    state.gender = gender.to_string();
}

/// Register the player and reset the roster. Money, day and resources carry
/// over from whatever the state held before.
pub fn start_game(state: &mut GameState, name_input: &str) -> Result<String, ActionError> {
    let name = name_input.trim();
    if name.is_empty() {
        return Err(ActionError::NameRequired);
    }
    if state.gender.is_empty() {
        return Err(ActionError::GenderRequired);
    }

    state.name = name.to_string();
    state.social_links = materialize_roster();

    Ok(format!(
        "Citizen {} registered. Biological profile: {}.",
        state.name, state.gender
    ))
}

pub fn work(state: &mut GameState, job_id: JobId) -> Result<String, ActionError> {
    let job = job(job_id);
    if state.health < job.health_cost {
        return Err(ActionError::TooExhausted);
    }

    // Imported saves may sit at the edge of the integer range.
    let (Some(money), Some(happiness), Some(day)) = (
        state.money.checked_add(job.pay),
        state.happiness.checked_sub(job.happiness_cost),
        state.day.checked_add(1),
    ) else {
        return Err(ActionError::CounterOverflow);
    };

    state.money = money;
    state.health -= job.health_cost;
    state.happiness = happiness;
    state.day = day;
    debug!(
        job = %job_id,
        money = state.money,
        health = state.health,
        happiness = state.happiness,
        day = state.day,
        "work applied"
    );

    Ok(format!(
        "Worked as {}. Earned {} credits. Day {} starts.",
        job.name, job.pay, state.day
    ))
}

/// Spend time with an NPC. Unknown ids are absorbed and return `Ok(None)`.
pub fn interact(state: &mut GameState, npc_id: &str) -> Result<Option<String>, ActionError> {
    let money = state.money;
    let Some(npc) = state.npc_mut(npc_id) else {
        return Ok(None);
    };
    // The funds check also keeps the subtraction in range.
    let remaining = match money.checked_sub(INTERACT_COST) {
        Some(remaining) if money >= INTERACT_COST => remaining,
        _ => return Err(ActionError::InsufficientFunds),
    };

    npc.raise_affinity(AFFINITY_GAIN);
    let entry = format!(
        "Spent time with {}. Relationship improved to: {}.",
        npc.name,
        npc.status()
    );
    debug!(npc = npc_id, affinity = npc.affinity(), status = %npc.status(), "interact applied");
    state.money = remaining;

    Ok(Some(entry))
}
