//! Platform Adventure entry point
//!
//! Windowing, textures and audio output belong to the host shell. Natively
//! this binary runs a headless attract-mode session: it clicks Start, plays a
//! scripted input pattern and logs what happens.
//!
//! Usage: `platform-adventure [settings.json] [level.json]`

use std::path::Path;
use std::process::ExitCode;

use glam::Vec2;

use platform_adventure::audio::{AudioManager, LogBackend};
use platform_adventure::renderer::{Vertex, build_frame, frame_vertices};
use platform_adventure::sim::{GamePhase, LevelDef, LevelError, TickInput};
use platform_adventure::{Game, Key, Settings};

/// Upper bound on the demo length (one minute at 60 Hz)
const DEMO_FRAMES: u32 = 60 * 60;

fn load_level(path: Option<&Path>) -> Result<LevelDef, LevelError> {
    match path {
        Some(path) => {
            log::info!("Loading level from {}", path.display());
            LevelDef::load_from(path)
        }
        None => Ok(LevelDef::default()),
    }
}

/// Attract-mode input: run right, hop and swing on a fixed rhythm
fn demo_input(frame: u32) -> (TickInput, Option<Key>) {
    let input = TickInput {
        right: true,
        run: frame % 240 < 120,
        ..Default::default()
    };
    let key = match frame % 40 {
        0 => Some(Key::Jump),
        20 => Some(Key::Attack),
        _ => None,
    };
    (input, key)
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Platform Adventure (headless) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings = Settings::load_or_default(args.first().map(Path::new));
    let level = match load_level(args.get(1).map(Path::new)) {
        Ok(level) => level,
        Err(e) => {
            log::error!("Failed to load level: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut audio = AudioManager::from_settings(LogBackend, &settings);
    let mut game = match Game::new(level, settings) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid level: {e}");
            return ExitCode::FAILURE;
        }
    };
    audio.handle_all(&game.drain_events());

    // Press the Start button
    game.mouse_down(Vec2::new(400.0, 300.0));
    audio.handle_all(&game.drain_events());

    let mut frames = 0;
    while game.phase() == GamePhase::Playing && frames < DEMO_FRAMES {
        let (input, key) = demo_input(frames);
        if let Some(key) = key {
            game.key_down(key);
        }
        game.update(&input);
        audio.handle_all(&game.drain_events());
        frames += 1;
    }

    let frame = build_frame(&game);
    let vertices = frame_vertices(&frame);
    let bytes: &[u8] = bytemuck::cast_slice(&vertices);
    log::info!(
        "Demo ended after {} frames in {:?} ({} vertices / {} bytes at stride {}, {} sprites in last frame)",
        frames,
        game.phase(),
        vertices.len(),
        bytes.len(),
        Vertex::desc().array_stride,
        frame.sprites.len()
    );
    if let Some(session) = game.session() {
        log::info!(
            "Player at ({:.1}, {:.1}), enemies left: {}",
            session.player.pos.x,
            session.player.pos.y,
            session.enemies_left()
        );
    }

    ExitCode::SUCCESS
}
