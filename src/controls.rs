use raylib::prelude::*;

use crate::constants::*;
use crate::scene::palette;

/// The three on-screen actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    TogglePlay,
    Prev,
    Next,
}

const BUTTON_WIDTH: f32 = 220.0;
const BUTTON_HEIGHT: f32 = 84.0;
const BUTTON_GAP: f32 = 24.0;
const BAR_TOP: f32 = 64.0;
const LABEL_SIZE: i32 = 36;

/// Button row along the top edge of the render texture.
pub struct ControlBar {
    buttons: [(Control, Rectangle); 3],
}

impl ControlBar {
    pub fn new() -> Self {
        let row_width = BUTTON_WIDTH * 3.0 + BUTTON_GAP * 2.0;
        let left = (RENDER_WIDTH as f32 - row_width) * 0.5;
        let button = |slot: usize| {
            Rectangle::new(
                left + slot as f32 * (BUTTON_WIDTH + BUTTON_GAP),
                BAR_TOP,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            )
        };
        Self {
            buttons: [
                (Control::TogglePlay, button(0)),
                (Control::Prev, button(1)),
                (Control::Next, button(2)),
            ],
        }
    }

    /// The control under `point`, in render texture coordinates.
    pub fn hit(&self, point: Vector2) -> Option<Control> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect.check_collision_point_rec(point))
            .map(|(control, _)| *control)
    }

    /// Converts a window position into render texture coordinates.
    pub fn to_render_space(point: Vector2, screen_width: f32, screen_height: f32) -> Vector2 {
        Vector2::new(
            point.x * RENDER_WIDTH as f32 / screen_width,
            point.y * RENDER_HEIGHT as f32 / screen_height,
        )
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, playing: bool) {
        for (control, rect) in self.buttons.iter() {
            let label = match control {
                Control::TogglePlay if playing => "Pause",
                Control::TogglePlay => "Play",
                Control::Prev => "< Prev",
                Control::Next => "Next >",
            };
            d.draw_rectangle_rounded(*rect, 0.5, 12, palette::with_alpha(palette::PAPER, 170));
            d.draw_text(
                label,
                (rect.x + 28.0) as i32,
                (rect.y + (BUTTON_HEIGHT - LABEL_SIZE as f32) * 0.5) as i32,
                LABEL_SIZE,
                palette::INK,
            );
        }
    }
}

impl Default for ControlBar {
    fn default() -> Self {
        Self::new()
    }
}
