//! Menu and result-screen buttons

use glam::Vec2;

use crate::sim::Rect;

pub const BUTTON_WIDTH: f32 = 160.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// What a button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Build a fresh session and start playing (Start / Play Again)
    StartLevel,
    ToggleAudio,
    MainMenu,
    /// The host should terminate
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub label: &'static str,
    /// Centre of the button, where the label is drawn
    pub anchor: Vec2,
    pub rect: Rect,
    pub action: MenuAction,
}

impl Button {
    pub const fn new(label: &'static str, x: f32, y: f32, action: MenuAction) -> Self {
        Self {
            label,
            anchor: Vec2::new(x, y),
            rect: Rect::new(
                x - BUTTON_WIDTH / 2.0,
                y - BUTTON_HEIGHT / 2.0,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
            action,
        }
    }
}

pub const MENU_BUTTONS: [Button; 3] = [
    Button::new("Start", 400.0, 300.0, MenuAction::StartLevel),
    Button::new("Music On/Off", 400.0, 360.0, MenuAction::ToggleAudio),
    Button::new("Quit", 400.0, 420.0, MenuAction::Quit),
];

/// Shown on both the game-over and level-complete screens
pub const RESULT_BUTTONS: [Button; 2] = [
    Button::new("Play Again", 400.0, 360.0, MenuAction::StartLevel),
    Button::new("Main Menu", 400.0, 420.0, MenuAction::MainMenu),
];

/// First button under the cursor
pub fn hit_test(buttons: &[Button], pos: Vec2) -> Option<MenuAction> {
    buttons
        .iter()
        .find(|b| b.rect.contains_point(pos))
        .map(|b| b.action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_rect_centred() {
        let start = MENU_BUTTONS[0];
        assert_eq!(start.rect, Rect::new(320.0, 280.0, 160.0, 40.0));
    }

    #[test]
    fn test_hit_test() {
        assert_eq!(
            hit_test(&MENU_BUTTONS, Vec2::new(400.0, 365.0)),
            Some(MenuAction::ToggleAudio)
        );
        assert_eq!(
            hit_test(&RESULT_BUTTONS, Vec2::new(330.0, 430.0)),
            Some(MenuAction::MainMenu)
        );
        assert_eq!(hit_test(&MENU_BUTTONS, Vec2::new(100.0, 100.0)), None);
    }
}
