//! Frame-sequence animation driven by the simulation tick
//!
//! Each logical actor state maps to a fixed [`Clip`]: an ordered list of frame
//! identifiers and a playback rate. An [`Animator`] advances through the
//! current clip every `BASE_TICK_RATE / fps` ticks.

use serde::{Deserialize, Serialize};

use crate::consts::BASE_TICK_RATE;

/// An ordered frame sequence with its playback rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clip {
    pub frames: &'static [&'static str],
    pub fps: u32,
}

impl Clip {
    /// Ticks each frame stays on screen
    pub const fn ticks_per_frame(&self) -> u32 {
        let ticks = BASE_TICK_RATE / self.fps;
        if ticks == 0 { 1 } else { ticks }
    }
}

/// Logical player state, re-derived from physics every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerState {
    Idle,
    Run,
    Jump,
    Fall,
    Attack,
    AirAttack,
    Hit,
}

impl PlayerState {
    pub const ALL: [PlayerState; 7] = [
        PlayerState::Idle,
        PlayerState::Run,
        PlayerState::Jump,
        PlayerState::Fall,
        PlayerState::Attack,
        PlayerState::AirAttack,
        PlayerState::Hit,
    ];

    pub fn clip(self) -> &'static Clip {
        &PLAYER_CLIPS[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerState::Idle => "idle",
            PlayerState::Run => "run",
            PlayerState::Jump => "jump",
            PlayerState::Fall => "fall",
            PlayerState::Attack => "attack",
            PlayerState::AirAttack => "air_attack",
            PlayerState::Hit => "hit",
        }
    }
}

/// Indexed by `PlayerState as usize`
pub static PLAYER_CLIPS: [Clip; 7] = [
    Clip {
        frames: &["idle_0", "idle_1"],
        fps: 2,
    },
    Clip {
        frames: &["run_0", "run_1", "run_2", "run_3", "run_4", "run_5"],
        fps: 6,
    },
    Clip {
        frames: &["jump_0"],
        fps: 5,
    },
    Clip {
        frames: &["fall_0"],
        fps: 4,
    },
    Clip {
        frames: &["attack_0", "attack_1", "attack_2"],
        fps: 8,
    },
    Clip {
        frames: &["air_attack_0", "air_attack_1", "air_attack_2"],
        fps: 12,
    },
    Clip {
        frames: &["hit_0", "hit_1", "hit_2"],
        fps: 6,
    },
];

pub static ENEMY_WALK: Clip = Clip {
    frames: &["enemy_walk_0", "enemy_walk_1", "enemy_walk_2"],
    fps: 3,
};

/// Animation cursor for one actor
///
/// The frame index is shared across clips: switching state keeps the index
/// and only wraps it on the next advance. Actions that restart an animation
/// call [`Animator::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animator {
    pub frame: usize,
    pub timer: u32,
    /// Frame currently displayed; only changes when the cursor advances
    pub image: &'static str,
}

impl Animator {
    pub fn new(image: &'static str) -> Self {
        Self {
            frame: 0,
            timer: 0,
            image,
        }
    }

    /// Count one tick; returns true when the displayed frame changed
    pub fn advance(&mut self, clip: &Clip) -> bool {
        self.timer += 1;
        if self.timer < clip.ticks_per_frame() {
            return false;
        }
        self.timer = 0;
        self.frame = (self.frame + 1) % clip.frames.len();
        self.image = clip.frames[self.frame];
        true
    }

    pub fn reset(&mut self) {
        self.frame = 0;
        self.timer = 0;
    }
}
