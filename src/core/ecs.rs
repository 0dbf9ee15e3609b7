use std::time::{Duration, Instant};

use bevy_ecs::prelude::*;

use crate::simulation::state::GameState;
use crate::ui::view::Screen;

/// How long a transient message stays up.
pub const MESSAGE_DURATION: Duration = Duration::from_secs(3);

/// Player-facing history of successful actions, oldest first.
#[derive(Resource, Debug, Default, Clone)]
pub struct ActionLog(pub Vec<String>);

/// The single transient message slot. Replacing it restarts the timer.
#[derive(Resource, Debug, Default, Clone)]
pub struct MessageBox {
    current: Option<(String, Instant)>,
}

impl MessageBox {
    pub fn show(&mut self, text: impl Into<String>, now: Instant) {
        self.current = Some((text.into(), now));
    }

    /// The message, if it is still inside its display window at `now`.
    pub fn visible_at(&self, now: Instant) -> Option<&str> {
        self.current.as_ref().and_then(|(text, shown_at)| {
            (now.saturating_duration_since(*shown_at) < MESSAGE_DURATION).then_some(text.as_str())
        })
    }
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActiveScreen(pub Screen);

/// Build the ECS world with baseline session resources.
pub fn create_world() -> World {
    let mut world = World::new();
    world.insert_resource(GameState::default());
    world.insert_resource(ActionLog::default());
    world.insert_resource(MessageBox::default());
    world.insert_resource(ActiveScreen::default());
    world
}
