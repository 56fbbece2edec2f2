//! Top-level game: phase machine, input routing and transition side effects
//!
//! [`Game`] owns the current [`GamePhase`], the validated level, the active
//! session and the settings. Hosts feed it held keys once per frame via
//! [`Game::update`], discrete presses via [`Game::key_down`] and clicks via
//! [`Game::mouse_down`], then drain [`GameEvent`]s for audio.

use glam::Vec2;

use crate::audio::{MusicTrack, SoundEffect};
use crate::consts::MENU_MUSIC_VOLUME;
use crate::settings::Settings;
use crate::sim::{FrameOutcome, GameEvent, GamePhase, Level, LevelDef, LevelError, Session, TickInput, tick};
use crate::ui::{self, Button, MENU_BUTTONS, MenuAction, RESULT_BUTTONS};

/// Discrete gameplay keys (Space and Z on a keyboard)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Jump,
    Attack,
}

pub struct Game {
    phase: GamePhase,
    level: Level,
    /// Built by `start_level`; kept after the run ends until the next start
    session: Option<Session>,
    settings: Settings,
    events: Vec<GameEvent>,
}

impl Game {
    /// Validate the level and open on the menu
    pub fn new(level: LevelDef, settings: Settings) -> Result<Self, LevelError> {
        let level = Level::new(level)?;
        let mut game = Self {
            phase: GamePhase::Menu,
            level,
            session: None,
            settings,
            events: Vec::new(),
        };
        game.enter(GamePhase::Menu);
        Ok(game)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn audio_enabled(&self) -> bool {
        self.settings.audio_enabled
    }

    /// Buttons that respond to clicks in the current phase
    pub fn buttons(&self) -> &'static [Button] {
        match self.phase {
            GamePhase::Menu => &MENU_BUTTONS,
            GamePhase::GameOver | GamePhase::LevelComplete => &RESULT_BUTTONS,
            GamePhase::Playing => &[],
        }
    }

    /// Switch phase, running the entry effects of the new phase once
    pub fn set_phase(&mut self, phase: GamePhase) {
        if phase == self.phase {
            return;
        }
        let from = self.phase;
        log::info!("Phase {:?} -> {:?}", from, phase);
        self.phase = phase;
        self.events.push(GameEvent::PhaseChanged { from, to: phase });
        self.enter(phase);
    }

    fn enter(&mut self, phase: GamePhase) {
        match phase {
            GamePhase::Menu => self.sync_menu_music(),
            GamePhase::Playing => self.events.push(GameEvent::StopMusic),
            GamePhase::LevelComplete => self.play(SoundEffect::Coin),
            GamePhase::GameOver => {}
        }
    }

    fn sync_menu_music(&mut self) {
        if self.settings.audio_enabled {
            self.events.push(GameEvent::PlayMusic {
                track: MusicTrack::StarlightCity,
                volume: MENU_MUSIC_VOLUME,
            });
        } else {
            self.events.push(GameEvent::StopMusic);
        }
    }

    fn play(&mut self, effect: SoundEffect) {
        if self.settings.audio_enabled {
            self.events.push(GameEvent::Sound(effect));
        }
    }

    /// Rebuild the level from scratch and start playing
    pub fn start_level(&mut self) {
        self.session = Some(self.level.spawn_session(&self.settings.tuning));
        log::info!("Level (re)loaded");
        self.set_phase(GamePhase::Playing);
    }

    pub fn toggle_audio(&mut self) {
        self.settings.audio_enabled = !self.settings.audio_enabled;
        log::info!("Audio {}", if self.settings.audio_enabled { "on" } else { "off" });
        if self.phase == GamePhase::Menu {
            self.sync_menu_music();
        }
    }

    /// Run one simulation frame; does nothing outside `Playing`
    pub fn update(&mut self, input: &TickInput) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let outcome = tick(session, input, &self.settings.tuning);
        self.flush_cues();
        match outcome {
            FrameOutcome::Continue => {}
            FrameOutcome::Fell => self.set_phase(GamePhase::GameOver),
            FrameOutcome::LevelComplete => self.set_phase(GamePhase::LevelComplete),
        }
    }

    /// Gameplay key press; ignored outside `Playing`
    pub fn key_down(&mut self, key: Key) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match key {
            Key::Jump => session.jump(&self.settings.tuning),
            Key::Attack => session.attack(&self.settings.tuning),
        }
        self.flush_cues();
    }

    /// Click at `pos`; returns the triggered action, if any.
    /// `MenuAction::Quit` is left to the host to carry out.
    pub fn mouse_down(&mut self, pos: Vec2) -> Option<MenuAction> {
        if !self.phase.accepts_buttons() {
            return None;
        }
        let action = ui::hit_test(self.buttons(), pos)?;
        self.apply(action);
        Some(action)
    }

    pub fn apply(&mut self, action: MenuAction) {
        match action {
            MenuAction::StartLevel => self.start_level(),
            MenuAction::ToggleAudio => self.toggle_audio(),
            MenuAction::MainMenu => self.set_phase(GamePhase::Menu),
            MenuAction::Quit => log::info!("Quit requested"),
        }
    }

    fn flush_cues(&mut self) {
        let cues = match self.session.as_mut() {
            Some(session) => session.drain_cues(),
            None => return,
        };
        for cue in cues {
            self.play(cue);
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game() -> Game {
        Game::new(LevelDef::default(), Settings::default()).unwrap()
    }

    #[test]
    fn test_starts_on_menu_with_music() {
        let mut game = new_game();
        assert_eq!(game.phase(), GamePhase::Menu);
        assert!(game.session().is_none());
        assert_eq!(
            game.drain_events(),
            vec![GameEvent::PlayMusic {
                track: MusicTrack::StarlightCity,
                volume: 0.5
            }]
        );
    }

    #[test]
    fn test_menu_without_audio_stops_music() {
        let settings = Settings {
            audio_enabled: false,
            ..Settings::default()
        };
        let mut game = Game::new(LevelDef::default(), settings).unwrap();
        assert_eq!(game.drain_events(), vec![GameEvent::StopMusic]);
    }

    #[test]
    fn test_invalid_level_fails_before_simulation() {
        let mut def = LevelDef::default();
        def.platforms[0].h = 0.0;
        assert!(Game::new(def, Settings::default()).is_err());
    }

    #[test]
    fn test_level_narrower_than_player_rejected() {
        let def = LevelDef {
            width: 20.0,
            spawn: Vec2::new(10.0, 100.0),
            platforms: Vec::new(),
            enemies: Vec::new(),
            goal: crate::sim::Rect::new(0.0, 0.0, 10.0, 10.0),
            ..LevelDef::default()
        };
        assert!(matches!(
            Game::new(def, Settings::default()),
            Err(LevelError::PlayfieldTooNarrow { .. })
        ));
    }

    #[test]
    fn test_update_ignored_outside_playing() {
        let mut game = new_game();
        game.update(&TickInput::default());
        game.key_down(Key::Jump);
        assert!(game.session().is_none());
        game.drain_events();

        game.start_level();
        game.set_phase(GamePhase::GameOver);
        let ticks = game.session().map(|s| s.time_ticks);
        game.update(&TickInput::default());
        game.key_down(Key::Attack);
        assert_eq!(game.session().map(|s| s.time_ticks), ticks);
        assert!(!game.session().unwrap().player.attacking);
    }

    #[test]
    fn test_start_stops_music_once() {
        let mut game = new_game();
        game.drain_events();
        game.start_level();
        for _ in 0..10 {
            game.update(&TickInput::default());
        }
        assert_eq!(
            game.drain_events(),
            vec![
                GameEvent::PhaseChanged {
                    from: GamePhase::Menu,
                    to: GamePhase::Playing
                },
                GameEvent::StopMusic,
            ]
        );
    }

    #[test]
    fn test_key_cues_respect_audio_toggle() {
        let mut game = new_game();
        game.start_level();
        game.drain_events();
        game.key_down(Key::Jump);
        assert_eq!(game.drain_events(), vec![GameEvent::Sound(SoundEffect::Jump)]);

        game.toggle_audio();
        game.key_down(Key::Attack);
        assert!(game.drain_events().is_empty());
        assert!(game.session().unwrap().player.attacking);
    }

    #[test]
    fn test_toggle_audio_in_menu() {
        let mut game = new_game();
        game.drain_events();
        assert_eq!(game.mouse_down(Vec2::new(400.0, 360.0)), Some(MenuAction::ToggleAudio));
        assert!(!game.audio_enabled());
        assert_eq!(game.drain_events(), vec![GameEvent::StopMusic]);
        game.toggle_audio();
        let events = game.drain_events();
        assert!(matches!(events.as_slice(), [GameEvent::PlayMusic { .. }]));
    }

    #[test]
    fn test_buttons_inactive_while_playing() {
        let mut game = new_game();
        game.start_level();
        assert!(game.buttons().is_empty());
        assert_eq!(game.mouse_down(Vec2::new(400.0, 300.0)), None);
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_quit_is_reported_to_host() {
        let mut game = new_game();
        assert_eq!(game.mouse_down(Vec2::new(400.0, 420.0)), Some(MenuAction::Quit));
        assert_eq!(game.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_same_phase_has_no_side_effects() {
        let mut game = new_game();
        game.drain_events();
        game.set_phase(GamePhase::Menu);
        assert!(game.drain_events().is_empty());
    }
}
