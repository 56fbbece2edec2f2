//! Collision resolution between moving hitboxes and static platforms
//!
//! Movement is integrated one axis at a time: the caller moves along X,
//! resolves X, then moves along Y and resolves Y. Each overlap is pushed out
//! along the axis of travel only, which keeps corner cases well-defined.

use super::rect::Rect;

/// Axis being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Result of resolving one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisResolution {
    /// Hitbox after push-out
    pub hitbox: Rect,
    /// Velocity component after resolution (zeroed on contact)
    pub velocity: f32,
    /// Any platform was touched
    pub collided: bool,
    /// The hitbox came to rest on top of a platform (Y axis, moving down)
    pub landed: bool,
}

/// Push `hitbox` out of every platform it overlaps along `axis`.
///
/// The direction of travel is taken from the sign of `velocity` on entry;
/// a non-positive velocity pushes toward -X / -Y edges being cleared
/// (left edge to the platform's right, top edge to the platform's bottom).
/// Platforms are visited in order and each overlap applies its own
/// correction, so with overlapping platforms the last one wins.
pub fn resolve_axis(hitbox: Rect, velocity: f32, axis: Axis, platforms: &[Rect]) -> AxisResolution {
    let forward = velocity > 0.0;
    let mut out = AxisResolution {
        hitbox,
        velocity,
        collided: false,
        landed: false,
    };

    for platform in platforms {
        if !out.hitbox.intersects(platform) {
            continue;
        }
        match (axis, forward) {
            (Axis::X, true) => out.hitbox.x = platform.left() - out.hitbox.w,
            (Axis::X, false) => out.hitbox.x = platform.right(),
            (Axis::Y, true) => {
                out.hitbox.y = platform.top() - out.hitbox.h;
                out.landed = true;
            }
            (Axis::Y, false) => out.hitbox.y = platform.bottom(),
        }
        out.velocity = 0.0;
        out.collided = true;
    }

    out
}

/// Downward-only landing test used by patrolling enemies.
///
/// Returns the top edge of the first platform the hitbox overlaps while
/// falling. Lateral and upward contacts are ignored entirely.
pub fn landing_surface(hitbox: &Rect, vy: f32, platforms: &[Rect]) -> Option<f32> {
    if vy <= 0.0 {
        return None;
    }
    platforms
        .iter()
        .find(|p| hitbox.intersects(p))
        .map(|p| p.top())
}
