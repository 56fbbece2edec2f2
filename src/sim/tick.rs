//! Fixed timestep simulation tick
//!
//! Advances one level session by exactly one frame. Order within a frame:
//! player physics, player/enemy contacts, player timers, enemy patrol,
//! then the win check followed by the fall check.

use super::state::Session;
use crate::audio::SoundEffect;
use crate::tuning::Tuning;

/// Held-key snapshot for a single tick (polled by the host)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Run modifier (either shift key)
    pub run: bool,
}

/// What the frame means for the game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    /// Player dropped below the playfield
    Fell,
    LevelComplete,
}

/// Advance the session by one frame
pub fn tick(session: &mut Session, input: &TickInput, tuning: &Tuning) -> FrameOutcome {
    session.time_ticks += 1;

    session.player.step_physics(input, &session.platforms, tuning);
    resolve_enemy_contacts(session, tuning);
    let fell = session.player.finish_frame(session.playfield, tuning);

    for enemy in &mut session.enemies {
        enemy.update(&session.platforms, tuning);
    }

    // A finished level counts even if the player dropped out the same frame
    if session.is_level_complete() {
        log::info!("Level complete at tick {}", session.time_ticks);
        FrameOutcome::LevelComplete
    } else if fell {
        log::info!("Player fell at tick {}", session.time_ticks);
        FrameOutcome::Fell
    } else {
        FrameOutcome::Continue
    }
}

/// Attacking kills touched enemies; otherwise touching one sends the player home
fn resolve_enemy_contacts(session: &mut Session, tuning: &Tuning) {
    let Session {
        player,
        enemies,
        cues,
        ..
    } = session;

    enemies.retain(|enemy| {
        if !player.hitbox().intersects(&enemy.hitbox()) {
            return true;
        }
        if player.attacking {
            log::debug!("Enemy at x={:.1} defeated", enemy.pos.x);
            cues.push(SoundEffect::Hit);
            return false;
        }
        if player.is_vulnerable() {
            log::debug!("Player hit by enemy at x={:.1}", enemy.pos.x);
            cues.push(SoundEffect::Damage);
            player.take_damage(tuning);
        }
        true
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::animation::PlayerState;
    use crate::sim::enemy::{Enemy, PatrolRange};
    use crate::sim::level::{Level, LevelDef};
    use crate::sim::player::Player;
    use crate::sim::rect::Rect;
    use glam::Vec2;

    /// Player standing on a floor with an enemy's feet inside its hitbox
    fn contact_session(goal: Rect) -> Session {
        let tuning = Tuning::default();
        let floor = Rect::new(0.0, 500.0, 800.0, 100.0);
        let player = Player::new(Vec2::new(400.0, 470.0));
        let enemy = Enemy::new(Vec2::new(410.0, 465.0), PatrolRange::around(410.0, 100.0), &tuning);
        Session::new(Vec2::new(800.0, 600.0), vec![floor], goal, player, vec![enemy])
    }

    #[test]
    fn test_default_level_settles() {
        let tuning = Tuning::default();
        let level = Level::new(LevelDef::default()).unwrap();
        let mut session = level.spawn_session(&tuning);
        for _ in 0..60 {
            assert_eq!(tick(&mut session, &TickInput::default(), &tuning), FrameOutcome::Continue);
        }
        assert!(session.player.on_ground);
        assert!((session.player.hitbox().bottom() - 501.0).abs() < 1e-3);
        assert_eq!(session.enemies_left(), 3);
        assert!(session.enemies.iter().all(|e| e.on_ground));
        assert_eq!(session.time_ticks, 60);
    }

    #[test]
    fn test_attack_kills_touched_enemy() {
        let tuning = Tuning::default();
        let mut session = contact_session(Rect::new(700.0, 100.0, 20.0, 40.0));
        session.player.attack(&tuning);
        let outcome = tick(&mut session, &TickInput::default(), &tuning);
        assert_eq!(outcome, FrameOutcome::Continue);
        assert!(session.enemies.is_empty());
        assert_eq!(session.drain_cues(), vec![SoundEffect::Hit]);
    }

    #[test]
    fn test_contact_without_attack_respawns() {
        let tuning = Tuning::default();
        let mut session = contact_session(Rect::new(700.0, 100.0, 20.0, 40.0));
        let spawn = Vec2::new(100.0, 100.0);
        session.player.spawn = spawn;
        tick(&mut session, &TickInput::default(), &tuning);
        assert_eq!(session.enemies_left(), 1);
        assert_eq!(session.player.state, PlayerState::Hit);
        assert_eq!(session.player.pos, spawn);
        assert_eq!(session.drain_cues(), vec![SoundEffect::Damage]);
    }

    #[test]
    fn test_last_kill_on_goal_completes_same_frame() {
        let tuning = Tuning::default();
        // Flag covers the player's position
        let mut session = contact_session(Rect::new(390.0, 440.0, 20.0, 40.0));
        assert!(!session.is_level_complete());
        session.player.attack(&tuning);
        let outcome = tick(&mut session, &TickInput::default(), &tuning);
        assert_eq!(outcome, FrameOutcome::LevelComplete);
    }

    #[test]
    fn test_damage_grace_window() {
        let tuning = Tuning {
            damage_grace_ticks: 30,
            ..Tuning::default()
        };
        let mut session = contact_session(Rect::new(700.0, 100.0, 20.0, 40.0));
        // Respawn point is inside the enemy too
        session.player.spawn = session.player.pos;

        tick(&mut session, &TickInput::default(), &tuning);
        assert_eq!(session.drain_cues(), vec![SoundEffect::Damage]);
        for _ in 0..5 {
            tick(&mut session, &TickInput::default(), &tuning);
        }
        assert!(session.drain_cues().is_empty());
    }

    #[test]
    fn test_repeated_damage_without_grace() {
        let tuning = Tuning::default();
        let mut session = contact_session(Rect::new(700.0, 100.0, 20.0, 40.0));
        session.player.spawn = session.player.pos;
        tick(&mut session, &TickInput::default(), &tuning);
        tick(&mut session, &TickInput::default(), &tuning);
        assert_eq!(
            session.drain_cues(),
            vec![SoundEffect::Damage, SoundEffect::Damage]
        );
    }

    #[test]
    fn test_falling_off_reports_fell() {
        let tuning = Tuning::default();
        let mut session = Session::new(
            Vec2::new(800.0, 600.0),
            Vec::new(),
            Rect::new(700.0, 100.0, 20.0, 40.0),
            Player::new(Vec2::new(400.0, 650.0)),
            Vec::new(),
        );
        let mut outcome = FrameOutcome::Continue;
        for _ in 0..20 {
            outcome = tick(&mut session, &TickInput::default(), &tuning);
            if outcome != FrameOutcome::Continue {
                break;
            }
        }
        assert_eq!(outcome, FrameOutcome::Fell);
        assert!(session.player.pos.y > 700.0);
    }

    #[test]
    fn test_completion_beats_falling_on_same_frame() {
        let tuning = Tuning::default();
        // Flag hangs below the fall line; no enemies left
        let mut session = Session::new(
            Vec2::new(800.0, 600.0),
            Vec::new(),
            Rect::new(350.0, 650.0, 100.0, 100.0),
            Player::new(Vec2::new(400.0, 705.0)),
            Vec::new(),
        );
        let outcome = tick(&mut session, &TickInput::default(), &tuning);
        assert!(session.player.pos.y > 700.0);
        assert_eq!(outcome, FrameOutcome::LevelComplete);
    }
}
