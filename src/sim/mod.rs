//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame, no wall-clock time
//! - Stable iteration order (platforms and enemies in level order)
//! - No rendering or platform dependencies

pub mod animation;
pub mod collision;
pub mod enemy;
pub mod level;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use animation::{Animator, Clip, ENEMY_WALK, PLAYER_CLIPS, PlayerState};
pub use collision::{Axis, AxisResolution, landing_surface, resolve_axis};
pub use enemy::{Enemy, PatrolRange};
pub use level::{EnemySpawn, Level, LevelDef, LevelError};
pub use player::Player;
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, Session};
pub use tick::{FrameOutcome, TickInput, tick};

use glam::Vec2;

/// What the render sink and overlap checks need from any actor
pub trait Actor {
    fn position(&self) -> Vec2;
    fn hitbox(&self) -> Rect;
    /// Frame identifier currently displayed
    fn image(&self) -> &'static str;
    /// Draw mirrored horizontally
    fn flip_x(&self) -> bool;
}
