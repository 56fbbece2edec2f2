//! The player character
//!
//! Movement state (velocity, grounded, coyote time, attack timer) is the
//! source of truth; the logical [`PlayerState`] is re-derived from it every
//! frame and only drives the animation.

use glam::Vec2;

use super::Actor;
use super::animation::{Animator, PlayerState};
use super::collision::{Axis, resolve_axis};
use super::rect::Rect;
use super::tick::TickInput;
use crate::consts::{PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Player {
    /// Hitbox centre
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Where damage sends the player back to
    pub spawn: Vec2,
    /// -1 facing left, 1 facing right
    pub facing: i8,
    pub on_ground: bool,
    /// Remaining frames during which a jump is allowed after leaving ground
    pub coyote: u32,
    pub attacking: bool,
    pub attack_timer: u32,
    /// Frames of enemy-contact immunity left after a respawn
    pub invulnerable_ticks: u32,
    pub state: PlayerState,
    pub anim: Animator,
}

impl Player {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            spawn,
            facing: 1,
            on_ground: false,
            coyote: 0,
            attacking: false,
            attack_timer: 0,
            invulnerable_ticks: 0,
            state: PlayerState::Idle,
            anim: Animator::new("idle_0"),
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Input, gravity, axis-separated movement, state derivation and animation
    pub fn step_physics(&mut self, input: &TickInput, platforms: &[Rect], tuning: &Tuning) {
        let (accel, max_speed) = tuning.horizontal_profile(input.run);
        if input.left {
            self.vel.x = (self.vel.x - accel).max(-max_speed);
            self.facing = -1;
        } else if input.right {
            self.vel.x = (self.vel.x + accel).min(max_speed);
            self.facing = 1;
        } else {
            self.vel.x *= tuning.friction;
        }

        self.vel.y = (self.vel.y + tuning.gravity).min(tuning.max_fall_speed);
        self.on_ground = false;

        self.pos.x += self.vel.x;
        let res = resolve_axis(self.hitbox(), self.vel.x, Axis::X, platforms);
        if res.collided {
            self.pos.x = res.hitbox.center().x;
            self.vel.x = res.velocity;
        }

        self.pos.y += self.vel.y;
        let res = resolve_axis(self.hitbox(), self.vel.y, Axis::Y, platforms);
        if res.collided {
            self.pos.y = res.hitbox.center().y;
            self.vel.y = res.velocity;
        }
        if res.landed {
            self.on_ground = true;
            self.coyote = tuning.coyote_ticks;
        }

        self.state = self.derive_state(input.left || input.right);
        self.anim.advance(self.state.clip());
    }

    fn derive_state(&self, moving: bool) -> PlayerState {
        if self.attacking {
            if self.on_ground {
                PlayerState::Attack
            } else {
                PlayerState::AirAttack
            }
        } else if !self.on_ground {
            if self.vel.y < 0.0 {
                PlayerState::Jump
            } else {
                PlayerState::Fall
            }
        } else if moving {
            PlayerState::Run
        } else {
            PlayerState::Idle
        }
    }

    /// Timers, fall check and horizontal clamp.
    ///
    /// Returns true when the player has dropped past the bottom of the
    /// playfield by more than the fall margin.
    pub fn finish_frame(&mut self, playfield: Vec2, tuning: &Tuning) -> bool {
        if self.attacking {
            self.attack_timer = self.attack_timer.saturating_sub(1);
            if self.attack_timer == 0 {
                self.attacking = false;
            }
        }
        if self.coyote > 0 {
            self.coyote -= 1;
        }
        if self.invulnerable_ticks > 0 {
            self.invulnerable_ticks -= 1;
        }

        let fell = self.pos.y > playfield.y + tuning.fall_margin;

        let half_w = self.size.x / 2.0;
        self.pos.x = self.pos.x.clamp(half_w, playfield.x - half_w);

        fell
    }

    /// Launch upward if standing or within coyote time; returns whether it happened
    pub fn jump(&mut self, tuning: &Tuning) -> bool {
        if !self.on_ground && self.coyote == 0 {
            return false;
        }
        self.vel.y = tuning.jump_velocity;
        self.on_ground = false;
        self.coyote = 0;
        self.state = PlayerState::Jump;
        self.anim.reset();
        true
    }

    /// Start an attack unless one is already running
    pub fn attack(&mut self, tuning: &Tuning) -> bool {
        if self.attacking {
            return false;
        }
        self.attacking = true;
        self.attack_timer = tuning.attack_ticks;
        self.anim.reset();
        true
    }

    /// Respawn penalty for touching an enemy without attacking
    pub fn take_damage(&mut self, tuning: &Tuning) {
        self.state = PlayerState::Hit;
        self.attacking = false;
        self.pos = self.spawn;
        self.vel = Vec2::ZERO;
        self.anim.reset();
        self.invulnerable_ticks = tuning.damage_grace_ticks;
    }

    pub fn is_vulnerable(&self) -> bool {
        self.invulnerable_ticks == 0
    }
}

impl Actor for Player {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn hitbox(&self) -> Rect {
        Player::hitbox(self)
    }

    fn image(&self) -> &'static str {
        self.anim.image
    }

    fn flip_x(&self) -> bool {
        self.facing < 0
    }
}
