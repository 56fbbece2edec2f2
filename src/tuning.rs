//! Data-driven game balance
//!
//! Every physics constant the simulation reads goes through [`Tuning`], so a
//! settings file can rebalance movement without touching code.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and timing parameters for one play session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Terminal fall speed
    pub max_fall_speed: f32,
    pub walk_accel: f32,
    pub walk_max_speed: f32,
    pub run_accel: f32,
    pub run_max_speed: f32,
    /// Multiplier applied to vx on frames without horizontal input
    pub friction: f32,
    /// Vertical launch velocity (negative is up)
    pub jump_velocity: f32,
    pub coyote_ticks: u32,
    pub attack_ticks: u32,
    pub fall_margin: f32,

    pub enemy_gravity: f32,
    pub enemy_max_fall_speed: f32,
    pub enemy_speed: f32,

    /// Frames after a respawn during which enemy contact is ignored.
    /// Zero keeps contact damage active on every frame.
    pub damage_grace_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            max_fall_speed: MAX_FALL_SPEED,
            walk_accel: WALK_ACCEL,
            walk_max_speed: WALK_MAX_SPEED,
            run_accel: RUN_ACCEL,
            run_max_speed: RUN_MAX_SPEED,
            friction: FRICTION,
            jump_velocity: JUMP_VELOCITY,
            coyote_ticks: COYOTE_TICKS,
            attack_ticks: ATTACK_TICKS,
            fall_margin: FALL_MARGIN,
            enemy_gravity: ENEMY_GRAVITY,
            enemy_max_fall_speed: ENEMY_MAX_FALL_SPEED,
            enemy_speed: ENEMY_SPEED,
            damage_grace_ticks: 0,
        }
    }
}

impl Tuning {
    /// (acceleration, max speed) for the current input mode
    pub fn horizontal_profile(&self, running: bool) -> (f32, f32) {
        if running {
            (self.run_accel, self.run_max_speed)
        } else {
            (self.walk_accel, self.walk_max_speed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "gravity": 1.2 }"#).unwrap();
        assert_eq!(tuning.gravity, 1.2);
        assert_eq!(tuning.jump_velocity, JUMP_VELOCITY);
        assert_eq!(tuning.damage_grace_ticks, 0);
    }

    #[test]
    fn test_horizontal_profile() {
        let tuning = Tuning::default();
        assert_eq!(tuning.horizontal_profile(true), (0.8, 7.0));
        assert_eq!(tuning.horizontal_profile(false), (0.5, 5.0));
    }
}
