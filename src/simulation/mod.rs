pub mod state;

pub use state::{GameState, NpcState, RelationshipStatus};
