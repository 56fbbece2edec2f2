//! Patrolling enemies
//!
//! Enemies walk back and forth between the ends of a fixed patrol range and
//! never react to the player. They only collide with platform tops; side
//! walls and ceilings are ignored, patrol reversal keeps them on their ledge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Actor;
use super::animation::{Animator, ENEMY_WALK};
use super::collision::landing_surface;
use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// World-space x bounds an enemy walks between
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatrolRange {
    pub min: f32,
    pub max: f32,
}

impl PatrolRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Symmetric range centred on `x`
    pub fn around(x: f32, half_width: f32) -> Self {
        Self::new(x - half_width, x + half_width)
    }

    pub fn contains(&self, x: f32) -> bool {
        x >= self.min && x <= self.max
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    /// Sprite centre
    pub pos: Vec2,
    pub vel: Vec2,
    /// Sprite extent; the hitbox is a smaller box at the sprite's feet
    pub size: Vec2,
    pub range: PatrolRange,
    /// Landed on a platform during the last update
    pub on_ground: bool,
    pub anim: Animator,
}

impl Enemy {
    pub fn new(pos: Vec2, range: PatrolRange, tuning: &Tuning) -> Self {
        Self {
            pos,
            vel: Vec2::new(-tuning.enemy_speed, 0.0),
            size: Vec2::new(ENEMY_SPRITE_WIDTH, ENEMY_SPRITE_HEIGHT),
            range,
            on_ground: false,
            anim: Animator::new(ENEMY_WALK.frames[0]),
        }
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn hitbox(&self) -> Rect {
        Rect::from_midbottom(
            Vec2::new(self.pos.x, self.bottom()),
            Vec2::new(ENEMY_HITBOX_WIDTH, ENEMY_HITBOX_HEIGHT),
        )
    }

    /// Advance one frame. Returns true if the patrol direction flipped.
    pub fn update(&mut self, platforms: &[Rect], tuning: &Tuning) -> bool {
        self.anim.advance(&ENEMY_WALK);

        self.vel.y = (self.vel.y + tuning.enemy_gravity).min(tuning.enemy_max_fall_speed);
        self.pos += self.vel;

        self.on_ground = false;
        if let Some(top) = landing_surface(&self.hitbox(), self.vel.y, platforms) {
            self.vel.y = 0.0;
            self.pos.y = top - self.size.y / 2.0;
            self.on_ground = true;
        }

        // Only turn around with feet on the ground, never mid-air
        if self.on_ground && !self.range.contains(self.pos.x) {
            self.vel.x = -self.vel.x;
            log::debug!(
                "Enemy at x={:.1} reversed, patrol [{}, {}]",
                self.pos.x,
                self.range.min,
                self.range.max
            );
            return true;
        }
        false
    }
}

impl Actor for Enemy {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn hitbox(&self) -> Rect {
        Enemy::hitbox(self)
    }

    fn image(&self) -> &'static str {
        self.anim.image
    }

    fn flip_x(&self) -> bool {
        self.vel.x < 0.0
    }
}
