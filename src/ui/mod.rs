mod button;

pub use button::{Action, Button};

use macroquad::prelude::screen_width;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
/// Side of a drawn cell; cells sit on a `CELL_SIZE + 1` pitch with 1px grid lines
pub const CELL_SIZE: f32 = 8.0;
pub const CELL_PITCH: f32 = CELL_SIZE + 1.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Pixel size of a `width` x `height` grid including the outer grid lines
pub fn canvas_size(width: usize, height: usize) -> (f32, f32) {
    (
        CELL_PITCH * width as f32 + 1.0,
        CELL_PITCH * height as f32 + 1.0,
    )
}

/// Panel buttons, top to bottom
pub const BUTTON_ACTIONS: [Action; 5] = [
    Action::PlayPause,
    Action::Restart,
    Action::Grow,
    Action::Shrink,
    Action::CycleStrategy,
];

/// Create UI buttons with standard layout
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    BUTTON_ACTIONS
        .into_iter()
        .enumerate()
        .map(|(i, action)| {
            let y = 20.0 + i as f32 * (BUTTON_HEIGHT + 10.0);
            Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, action)
        })
        .collect()
}

/// Y coordinate just below the last button, where panel text starts
pub fn controls_bottom() -> f32 {
    20.0 + BUTTON_ACTIONS.len() as f32 * (BUTTON_HEIGHT + 10.0)
}
