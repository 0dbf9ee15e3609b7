// Re-export core modules for use by the binary or other consumers
pub mod config;
pub mod core;
pub mod data;
pub mod simulation;
pub mod systems;
pub mod ui;

// Expose the session wrapper and the types needed to drive it
pub use crate::config::SessionConfig;
pub use crate::core::serialization::{SaveError, SaveState};
pub use crate::core::world::{ActionIntent, Game};
pub use crate::data::JobId;
pub use crate::simulation::GameState;
pub use crate::systems::ActionError;
pub use crate::ui::{Frame, View};
