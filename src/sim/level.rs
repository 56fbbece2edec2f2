//! Level layout and validation
//!
//! A [`LevelDef`] is plain data (loadable from JSON). [`Level::new`] checks it
//! once, up front; a validated [`Level`] can then spawn any number of fresh
//! sessions without further error paths.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::enemy::{Enemy, PatrolRange};
use super::player::Player;
use super::rect::Rect;
use super::state::Session;
use crate::consts::*;
use crate::tuning::Tuning;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("playfield must have a positive size, got {width}x{height}")]
    InvalidPlayfield { width: f32, height: f32 },
    #[error("playfield width {width} is narrower than the player ({min})")]
    PlayfieldTooNarrow { width: f32, min: f32 },
    #[error("platform {index} has invalid bounds {rect:?}")]
    InvalidPlatform { index: usize, rect: Rect },
    #[error("goal has invalid bounds {0:?}")]
    InvalidGoal(Rect),
    #[error("enemy {index} has degenerate patrol range [{min}, {max}]")]
    DegeneratePatrol { index: usize, min: f32, max: f32 },
    #[error("enemy {index} spawns at non-finite position")]
    InvalidEnemySpawn { index: usize },
    #[error("player spawn ({x}, {y}) is outside the playfield")]
    SpawnOutOfBounds { x: f32, y: f32 },
    #[error("failed to read level: {0}")]
    Io(#[from] std::io::Error),
    #[error("level parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Enemy placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    /// Sprite centre at spawn
    pub pos: Vec2,
    /// Defaults to `pos.x ± ENEMY_PATROL_HALF_RANGE`
    #[serde(default)]
    pub range: Option<PatrolRange>,
}

impl EnemySpawn {
    pub fn patrol_range(&self) -> PatrolRange {
        self.range
            .unwrap_or_else(|| PatrolRange::around(self.pos.x, ENEMY_PATROL_HALF_RANGE))
    }
}

/// Static layout of a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub width: f32,
    pub height: f32,
    pub spawn: Vec2,
    pub platforms: Vec<Rect>,
    pub enemies: Vec<EnemySpawn>,
    /// Flag trigger region
    pub goal: Rect,
}

impl Default for LevelDef {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            spawn: Vec2::new(10.0, 439.0),
            platforms: vec![
                Rect::new(0.0, 501.0, 166.0, 99.0),
                Rect::new(188.0, 450.0, 212.0, 15.0),
                Rect::new(0.0, 314.0, 166.0, 14.0),
                Rect::new(200.0, 241.0, 39.0, 16.0),
                Rect::new(256.0, 153.0, 248.0, 17.0),
                Rect::new(592.0, 257.0, 127.0, 15.0),
                Rect::new(547.0, 489.0, 253.0, 111.0),
            ],
            enemies: vec![
                EnemySpawn {
                    pos: Vec2::new(360.0, 415.0),
                    range: Some(PatrolRange::new(241.0, 360.0)),
                },
                EnemySpawn {
                    pos: Vec2::new(656.0, 458.0),
                    range: Some(PatrolRange::new(615.0, 656.0)),
                },
                EnemySpawn {
                    pos: Vec2::new(461.0, 111.0),
                    range: Some(PatrolRange::new(323.0, 461.0)),
                },
            ],
            goal: Rect::new(719.0, 425.0, 20.0, 40.0),
        }
    }
}

impl LevelDef {
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        let playfield_ok = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0;
        if !playfield_ok {
            return Err(LevelError::InvalidPlayfield {
                width: self.width,
                height: self.height,
            });
        }
        // The player is clamped to [w/2, width - w/2]
        if self.width < PLAYER_WIDTH {
            return Err(LevelError::PlayfieldTooNarrow {
                width: self.width,
                min: PLAYER_WIDTH,
            });
        }

        if let Some((index, rect)) = self.platforms.iter().enumerate().find(|(_, r)| !r.is_valid()) {
            return Err(LevelError::InvalidPlatform { index, rect: *rect });
        }

        if !self.goal.is_valid() {
            return Err(LevelError::InvalidGoal(self.goal));
        }

        for (index, spawn) in self.enemies.iter().enumerate() {
            if !spawn.pos.is_finite() {
                return Err(LevelError::InvalidEnemySpawn { index });
            }
            let range = spawn.patrol_range();
            if !range.is_valid() {
                return Err(LevelError::DegeneratePatrol {
                    index,
                    min: range.min,
                    max: range.max,
                });
            }
        }

        let Vec2 { x, y } = self.spawn;
        let inside = (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y);
        if !inside {
            return Err(LevelError::SpawnOutOfBounds { x, y });
        }

        Ok(())
    }
}

/// A validated level, ready to spawn sessions
#[derive(Debug, Clone)]
pub struct Level {
    def: LevelDef,
}

impl Level {
    pub fn new(def: LevelDef) -> Result<Self, LevelError> {
        def.validate()?;
        log::info!(
            "Level ready: {} platforms, {} enemies",
            def.platforms.len(),
            def.enemies.len()
        );
        Ok(Self { def })
    }

    pub fn def(&self) -> &LevelDef {
        &self.def
    }

    /// Fresh session: player at spawn, every enemy back at its start
    pub fn spawn_session(&self, tuning: &Tuning) -> Session {
        let def = &self.def;
        let enemies = def
            .enemies
            .iter()
            .map(|spawn| Enemy::new(spawn.pos, spawn.patrol_range(), tuning))
            .collect();
        Session::new(
            Vec2::new(def.width, def.height),
            def.platforms.clone(),
            def.goal,
            Player::new(def.spawn),
            enemies,
        )
    }
}
