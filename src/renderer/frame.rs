//! Per-frame render snapshot
//!
//! The render sink never reads game state directly; it gets a [`RenderFrame`]
//! describing everything visible for the current phase.

use glam::Vec2;

use super::vertex::colors;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::Game;
use crate::sim::{Actor, GamePhase, Rect, Session};
use crate::ui::Button;

#[derive(Debug, Clone, PartialEq)]
pub struct FilledRect {
    pub rect: Rect,
    pub color: [f32; 4],
}

/// A textured actor; the host maps `image` to a loaded texture
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub image: &'static str,
    pub pos: Vec2,
    pub flip_x: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAnchor {
    Center(Vec2),
    TopLeft(Vec2),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub anchor: TextAnchor,
    pub size: f32,
    pub color: [f32; 4],
}

/// Everything the render sink draws this frame, back to front:
/// clear color, rects, sprites, then text
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub screen: Vec2,
    pub clear: [f32; 4],
    pub rects: Vec<FilledRect>,
    pub sprites: Vec<Sprite>,
    pub texts: Vec<Text>,
}

impl RenderFrame {
    fn new(clear: [f32; 4]) -> Self {
        Self {
            screen: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            clear,
            rects: Vec::new(),
            sprites: Vec::new(),
            texts: Vec::new(),
        }
    }

    fn text(&mut self, content: impl Into<String>, anchor: TextAnchor, size: f32, color: [f32; 4]) {
        self.texts.push(Text {
            content: content.into(),
            anchor,
            size,
            color,
        });
    }

    fn title(&mut self, content: &str, size: f32, color: [f32; 4]) {
        self.text(content, TextAnchor::Center(Vec2::new(400.0, 200.0)), size, color);
    }

    fn buttons(&mut self, buttons: &[Button]) {
        for button in buttons {
            self.rects.push(FilledRect {
                rect: button.rect,
                color: colors::BUTTON,
            });
            self.text(button.label, TextAnchor::Center(button.anchor), 30.0, colors::TEXT);
        }
    }
}

pub fn sprite(actor: &impl Actor) -> Sprite {
    Sprite {
        image: actor.image(),
        pos: actor.position(),
        flip_x: actor.flip_x(),
    }
}

/// Snapshot of the game for the current phase
pub fn build_frame(game: &Game) -> RenderFrame {
    match game.phase() {
        GamePhase::Menu => {
            let mut frame = RenderFrame::new(colors::MENU_BACKGROUND);
            frame.title("PLATFORM ADVENTURE", 60.0, colors::TEXT);
            frame.buttons(game.buttons());
            frame
        }
        GamePhase::Playing => match game.session() {
            Some(session) => playing_frame(session),
            None => RenderFrame::new(colors::SKY),
        },
        GamePhase::LevelComplete => {
            let mut frame = RenderFrame::new(colors::COMPLETE_BACKGROUND);
            frame.title("CONGRATULATIONS!", 70.0, colors::GOLD);
            frame.text(
                "You completed the level",
                TextAnchor::Center(Vec2::new(400.0, 300.0)),
                40.0,
                colors::TEXT,
            );
            frame.buttons(game.buttons());
            frame
        }
        GamePhase::GameOver => {
            let mut frame = RenderFrame::new(colors::GAME_OVER_BACKGROUND);
            frame.title("GAME OVER", 70.0, colors::TEXT);
            frame.buttons(game.buttons());
            frame
        }
    }
}

fn playing_frame(session: &Session) -> RenderFrame {
    let mut frame = RenderFrame::new(colors::SKY);
    frame.rects.extend(session.platforms.iter().map(|p| FilledRect {
        rect: *p,
        color: colors::PLATFORM,
    }));
    frame.rects.push(FilledRect {
        rect: session.goal,
        color: colors::FLAG,
    });

    frame.sprites.push(sprite(&session.player));
    frame.sprites.extend(session.enemies.iter().map(sprite));

    frame.text(
        format!("Enemies left: {}", session.enemies_left()),
        TextAnchor::TopLeft(Vec2::new(10.0, 10.0)),
        30.0,
        colors::TEXT,
    );
    frame
}
