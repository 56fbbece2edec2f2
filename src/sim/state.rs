//! Game phase, outbound events and the per-level session
//!
//! A [`Session`] owns every actor and platform of one level attempt.
//! Starting or replaying a level builds a fresh session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::player::Player;
use super::rect::Rect;
use crate::audio::{MusicTrack, SoundEffect};
use crate::tuning::Tuning;

/// Top-level mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen with Start / Music / Quit
    Menu,
    /// Active gameplay
    Playing,
    /// Player fell off the level
    GameOver,
    /// All enemies defeated and flag reached
    LevelComplete,
}

impl GamePhase {
    /// Phases where the result/menu buttons receive clicks
    pub fn accepts_buttons(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Side effects requested by the core, consumed by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Sound(SoundEffect),
    PlayMusic { track: MusicTrack, volume: f32 },
    StopMusic,
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// One attempt at a level
#[derive(Debug, Clone)]
pub struct Session {
    /// Playfield size; the player is clamped to its width and fails below its height
    pub playfield: Vec2,
    pub platforms: Vec<Rect>,
    pub goal: Rect,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Frames simulated so far
    pub time_ticks: u64,
    /// Sound cues raised since the owner last drained them
    pub cues: Vec<SoundEffect>,
}

impl Session {
    pub fn new(playfield: Vec2, platforms: Vec<Rect>, goal: Rect, player: Player, enemies: Vec<Enemy>) -> Self {
        Self {
            playfield,
            platforms,
            goal,
            player,
            enemies,
            time_ticks: 0,
            cues: Vec::new(),
        }
    }

    /// Jump key pressed. The cue plays even when the jump is refused.
    pub fn jump(&mut self, tuning: &Tuning) {
        self.cues.push(SoundEffect::Jump);
        self.player.jump(tuning);
    }

    /// Attack key pressed. The cue plays even while an attack is running.
    pub fn attack(&mut self, tuning: &Tuning) {
        self.cues.push(SoundEffect::Attack);
        self.player.attack(tuning);
    }

    pub fn enemies_left(&self) -> usize {
        self.enemies.len()
    }

    /// No enemies remain and the player is touching the flag
    pub fn is_level_complete(&self) -> bool {
        self.enemies.is_empty() && self.player.hitbox().intersects(&self.goal)
    }

    pub fn drain_cues(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.cues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::enemy::PatrolRange;

    fn session_with_goal_at_spawn() -> Session {
        let spawn = Vec2::new(100.0, 100.0);
        Session::new(
            Vec2::new(800.0, 600.0),
            Vec::new(),
            Rect::new(90.0, 90.0, 20.0, 40.0),
            Player::new(spawn),
            Vec::new(),
        )
    }

    #[test]
    fn test_level_complete_needs_empty_enemy_set() {
        let tuning = Tuning::default();
        let mut session = session_with_goal_at_spawn();
        assert!(session.is_level_complete());

        session.enemies.push(Enemy::new(
            Vec2::new(600.0, 100.0),
            PatrolRange::around(600.0, 100.0),
            &tuning,
        ));
        assert!(!session.is_level_complete());
    }

    #[test]
    fn test_key_cues_fire_even_when_refused() {
        let tuning = Tuning::default();
        let mut session = session_with_goal_at_spawn();
        session.jump(&tuning);
        assert_eq!(session.player.vel.y, 0.0);
        session.attack(&tuning);
        session.attack(&tuning);
        assert_eq!(
            session.drain_cues(),
            vec![SoundEffect::Jump, SoundEffect::Attack, SoundEffect::Attack]
        );
        assert!(session.cues.is_empty());
    }
}
