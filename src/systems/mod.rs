pub mod actions;

pub use actions::{interact, set_gender, start_game, work, ActionError, AFFINITY_GAIN, INTERACT_COST};
