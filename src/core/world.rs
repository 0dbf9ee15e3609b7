use std::path::{Path, PathBuf};
use std::time::Instant;

use bevy_ecs::prelude::*;
use tracing::{info, warn};

use crate::core::ecs::{create_world, ActionLog, ActiveScreen, MessageBox};
use crate::core::serialization::{export_save, load_state_from_path};
use crate::data::jobs::JobId;
use crate::simulation::state::GameState;
use crate::systems::actions::{self, ActionError};
use crate::ui::render::{render, render_gender_selector};
use crate::ui::view::{Screen, View};

/// Player commands accepted by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionIntent {
    SetGender(String),
    StartGame { name: String },
    Work(JobId),
    Interact { npc_id: String },
}

/// One play session: the ECS world holding the state, the action log, the
/// transient message and the active screen.
///
/// Every call runs to completion (validate, mutate, render, log) before
/// returning.
pub struct Game {
    world: World,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            world: create_world(),
        }
    }

    pub fn state(&self) -> &GameState {
        self.world.resource::<GameState>()
    }

    pub fn log(&self) -> &[String] {
        &self.world.resource::<ActionLog>().0
    }

    pub fn screen(&self) -> Screen {
        self.world.resource::<ActiveScreen>().0
    }

    /// The transient message, if it has not timed out yet.
    pub fn message(&self) -> Option<&str> {
        self.world.resource::<MessageBox>().visible_at(Instant::now())
    }

    /// Repaint the whole view from the current state.
    pub fn refresh(&self, view: &mut dyn View) {
        render(self.state(), view);
    }

    pub fn perform(&mut self, intent: ActionIntent, view: &mut dyn View) {
        match intent {
            ActionIntent::SetGender(gender) => self.set_gender(&gender, view),
            ActionIntent::StartGame { name } => self.start_game(&name, view),
            ActionIntent::Work(job_id) => self.work(job_id, view),
            ActionIntent::Interact { npc_id } => self.interact(&npc_id, view),
        }
    }

    pub fn set_gender(&mut self, gender: &str, view: &mut dyn View) {
        actions::set_gender(&mut self.world.resource_mut::<GameState>(), gender);
        render_gender_selector(gender, view);
    }

    pub fn start_game(&mut self, name_input: &str, view: &mut dyn View) {
        let result = actions::start_game(&mut self.world.resource_mut::<GameState>(), name_input);
        match result {
            Ok(entry) => {
                info!(name = %self.state().name, gender = %self.state().gender, "game started");
                self.refresh(view);
                self.switch_screen(Screen::Game, view);
                self.append_log(entry, view);
            }
            Err(err) => self.reject(err, view),
        }
    }

    pub fn work(&mut self, job_id: JobId, view: &mut dyn View) {
        let result = actions::work(&mut self.world.resource_mut::<GameState>(), job_id);
        match result {
            Ok(entry) => {
                self.append_log(entry, view);
                self.refresh(view);
            }
            Err(err) => self.reject(err, view),
        }
    }

    pub fn interact(&mut self, npc_id: &str, view: &mut dyn View) {
        let result = actions::interact(&mut self.world.resource_mut::<GameState>(), npc_id);
        match result {
            Ok(Some(entry)) => {
                self.append_log(entry, view);
                self.refresh(view);
            }
            Ok(None) => {}
            Err(err) => self.reject(err, view),
        }
    }

    /// Write the current state into `dir`. Returns the file written.
    pub fn export_save<P: AsRef<Path>>(&mut self, dir: P, view: &mut dyn View) -> Option<PathBuf> {
        match export_save(self.state(), dir) {
            Ok(path) => {
                info!(path = %path.display(), "save exported");
                self.show_message(format!("Save exported to {}.", path.display()), view);
                Some(path)
            }
            Err(err) => {
                warn!(error = %err, "save export failed");
                self.show_message(format!("Error: {}", err), view);
                None
            }
        }
    }

    /// Replace the state wholesale with the save at `path`. Failures leave
    /// the current state in place and are reported through the message box.
    pub fn import_save<P: AsRef<Path>>(&mut self, path: P, view: &mut dyn View) -> bool {
        let path = path.as_ref();
        match load_state_from_path(path) {
            Ok(state) => {
                info!(path = %path.display(), name = %state.name, "save imported");
                *self.world.resource_mut::<GameState>() = state;
                self.refresh(view);
                self.switch_screen(Screen::Game, view);
                self.show_message("Save file loaded successfully.", view);
                true
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "save import rejected");
                self.show_message("Error: Corrupted save file.", view);
                false
            }
        }
    }

    fn reject(&mut self, err: ActionError, view: &mut dyn View) {
        warn!(reason = ?err, "action rejected");
        self.show_message(err.to_string(), view);
    }

    fn show_message(&mut self, text: impl Into<String>, view: &mut dyn View) {
        let text = text.into();
        view.show_message(&text);
        self.world
            .resource_mut::<MessageBox>()
            .show(text, Instant::now());
    }

    fn append_log(&mut self, entry: String, view: &mut dyn View) {
        view.append_log(&entry);
        self.world.resource_mut::<ActionLog>().0.push(entry);
    }

    fn switch_screen(&mut self, screen: Screen, view: &mut dyn View) {
        self.world.resource_mut::<ActiveScreen>().0 = screen;
        view.show_screen(screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::npcs::materialize_roster;
    use crate::ui::view::{Frame, HeadlessView};

    fn started() -> (Game, Frame) {
        let mut game = Game::new();
        let mut frame = Frame::default();
        game.perform(ActionIntent::SetGender("Female".to_string()), &mut frame);
        game.perform(
            ActionIntent::StartGame {
                name: "Kira".to_string(),
            },
            &mut frame,
        );
        (game, frame)
    }

    #[test]
    fn start_switches_screen_and_logs() {
        let (game, frame) = started();
        assert_eq!(game.screen(), Screen::Game);
        assert_eq!(frame.screen, Screen::Game);
        assert_eq!(frame.name.as_deref(), Some("Kira"));
        assert_eq!(
            game.log().to_vec(),
            vec!["Citizen Kira registered. Biological profile: Female.".to_string()]
        );
        assert_eq!(
            frame.log,
            vec!["> Citizen Kira registered. Biological profile: Female.".to_string()]
        );
    }

    #[test]
    fn gender_selection_updates_selector_only() {
        let mut game = Game::new();
        let mut frame = Frame::default();
        game.set_gender("Non-Binary", &mut frame);
        assert_eq!(game.state().gender, "Non-Binary");
        assert!(frame.gender_options[2].selected);
        assert!(frame.name.is_none());
        assert!(game.log().is_empty());
    }

    #[test]
    fn rejected_start_shows_message_without_logging() {
        let mut game = Game::new();
        let mut frame = Frame::default();
        game.start_game("Kira", &mut frame);
        assert_eq!(frame.message.as_deref(), Some("Please select a gender."));
        assert_eq!(game.message(), Some("Please select a gender."));
        assert_eq!(game.screen(), Screen::Setup);
        assert!(game.log().is_empty());
        assert_eq!(game.state(), &GameState::default());
    }

    #[test]
    fn work_renders_and_logs() {
        let (mut game, mut frame) = started();
        game.perform(ActionIntent::Work(JobId::Hacker), &mut frame);
        assert_eq!(game.state().money, 1_300);
        assert_eq!(frame.money.as_deref(), Some("1,300"));
        assert_eq!(frame.day, Some(2));
        assert_eq!(
            game.log().last().map(String::as_str),
            Some("Worked as Data Miner. Earned 300 credits. Day 2 starts.")
        );
    }

    #[test]
    fn exhausted_work_reports_through_message() {
        let (mut game, mut frame) = started();
        for _ in 0..10 {
            game.work(JobId::Scrapper, &mut frame);
        }
        let before = game.state().clone();
        let log_len = game.log().len();
        game.work(JobId::Scrapper, &mut frame);
        assert_eq!(game.state(), &before);
        assert_eq!(game.log().len(), log_len);
        assert_eq!(frame.message.as_deref(), Some("Too exhausted to work!"));
    }

    #[test]
    fn unknown_npc_changes_nothing_visible() {
        let (mut game, _) = started();
        let mut frame = Frame::default();
        game.perform(
            ActionIntent::Interact {
                npc_id: "ghost".to_string(),
            },
            &mut frame,
        );
        assert_eq!(frame, Frame::default());
        assert_eq!(game.log().len(), 1);
    }

    #[test]
    fn broke_interaction_shows_message() {
        let (mut game, mut frame) = started();
        game.world.resource_mut::<GameState>().money = 10;
        game.interact("nova", &mut frame);
        assert_eq!(frame.message.as_deref(), Some("Need 50 credits to hang out."));
        assert_eq!(game.state().money, 10);
    }

    #[test]
    fn import_replaces_state_and_export_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let (mut game, mut frame) = started();
        game.work(JobId::Courier, &mut frame);
        game.interact("echo", &mut frame);
        let path = game.export_save(dir.path(), &mut frame).unwrap();
        assert!(frame
            .message
            .as_deref()
            .is_some_and(|m| m.starts_with("Save exported to")));

        let mut fresh = Game::new();
        let mut fresh_frame = Frame::default();
        assert!(fresh.import_save(&path, &mut fresh_frame));
        assert_eq!(fresh.state(), game.state());
        assert_eq!(fresh.screen(), Screen::Game);
        assert_eq!(
            fresh_frame.message.as_deref(),
            Some("Save file loaded successfully.")
        );
        assert_eq!(fresh_frame.name.as_deref(), Some("Kira"));
    }

    #[test]
    fn corrupt_import_keeps_prior_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"gender":"Male","money":5}"#).unwrap();

        let (mut game, mut frame) = started();
        game.work(JobId::Courier, &mut frame);
        let before = game.state().clone();
        assert!(!game.import_save(&path, &mut frame));
        assert_eq!(game.state(), &before);
        assert_eq!(frame.message.as_deref(), Some("Error: Corrupted save file."));
    }

    #[test]
    fn work_after_importing_day_limit_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("old.json");
        std::fs::write(&path, r#"{"name":"A","gender":"Male","day":4294967295}"#).unwrap();

        let mut game = Game::new();
        let mut frame = Frame::default();
        assert!(game.import_save(&path, &mut frame));
        let before = game.state().clone();
        game.work(JobId::Scrapper, &mut frame);
        assert_eq!(game.state(), &before);
        assert_eq!(frame.message.as_deref(), Some("The books can't hold any more."));
        assert!(game.log().is_empty());
    }

    #[test]
    fn legacy_import_gets_catalog_roster() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.json");
        std::fs::write(&path, r#"{"name":"Old","gender":"Male","money":77}"#).unwrap();

        let (mut game, _) = started();
        game.interact("nova", &mut HeadlessView);
        assert!(game.import_save(&path, &mut HeadlessView));
        assert_eq!(game.state().social_links, materialize_roster());
        assert_eq!(game.state().money, 77);
    }
}
