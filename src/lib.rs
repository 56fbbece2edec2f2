//! Platform Adventure - a side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic frame-stepped simulation (actors, collisions, level session)
//! - `game`: Top-level phase machine (menu, playing, game over, level complete)
//! - `renderer`: Render snapshot and vertex generation for the host's GPU pipeline
//! - `audio`: Routing of sound cues and music to a host audio backend
//! - `tuning`: Data-driven physics balance

pub mod audio;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::{Game, Key};
pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels, y grows downward)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Simulation ticks per animation time unit
    pub const BASE_TICK_RATE: u32 = 60;

    /// Player movement
    pub const GRAVITY: f32 = 0.8;
    pub const MAX_FALL_SPEED: f32 = 15.0;
    pub const WALK_ACCEL: f32 = 0.5;
    pub const WALK_MAX_SPEED: f32 = 5.0;
    pub const RUN_ACCEL: f32 = 0.8;
    pub const RUN_MAX_SPEED: f32 = 7.0;
    /// Exponential decay applied to vx each frame without horizontal input
    pub const FRICTION: f32 = 0.8;
    pub const JUMP_VELOCITY: f32 = -16.0;
    /// Frames of grace after leaving a platform during which a jump still works
    pub const COYOTE_TICKS: u32 = 10;
    pub const ATTACK_TICKS: u32 = 10;
    /// How far below the playfield the player may fall before the run ends
    pub const FALL_MARGIN: f32 = 100.0;

    /// Player hitbox extent
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;

    /// Enemy sprite extent; the hitbox sits at the sprite's feet
    pub const ENEMY_SPRITE_WIDTH: f32 = 50.0;
    pub const ENEMY_SPRITE_HEIGHT: f32 = 70.0;
    pub const ENEMY_HITBOX_WIDTH: f32 = 30.0;
    pub const ENEMY_HITBOX_HEIGHT: f32 = 20.0;
    pub const ENEMY_GRAVITY: f32 = 0.5;
    pub const ENEMY_MAX_FALL_SPEED: f32 = 10.0;
    pub const ENEMY_SPEED: f32 = 1.0;
    /// Patrol half-width used when a level does not give an explicit range
    pub const ENEMY_PATROL_HALF_RANGE: f32 = 100.0;

    /// Menu music volume set on entering the menu
    pub const MENU_MUSIC_VOLUME: f32 = 0.5;
}
