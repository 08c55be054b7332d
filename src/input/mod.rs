use macroquad::prelude::*;
use tracing::warn;

use crate::application::{Driver, Scheduler};
use crate::config::DEFAULT_DENSITY;
use crate::domain::Universe;
use crate::ui::{Action, Button, CELL_PITCH, grid_area_width};

/// Map a pixel position to the `(row, col)` it falls in, using the same
/// pitch the renderer draws with. A grid line belongs to the cell after it.
/// Negative positions and positions past the last row or column map to
/// `None`, so clicks can never be out of bounds.
pub fn screen_to_cell(x: f32, y: f32, width: usize, height: usize) -> Option<(usize, usize)> {
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let col = (x / CELL_PITCH).floor() as usize;
    let row = (y / CELL_PITCH).floor() as usize;
    (row < height && col < width).then_some((row, col))
}

/// Toggle the cell under a left click
pub fn handle_cell_click(universe: &mut Universe, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) || mouse_pos.0 >= grid_area_width() {
        return;
    }
    let Some((row, col)) = screen_to_cell(mouse_pos.0, mouse_pos.1, universe.width(), universe.height()) else {
        return;
    };
    if let Err(err) = universe.toggle(row as i64, col as i64) {
        warn!(%err, "click toggle failed");
    }
}

/// Action of the button clicked this frame, if any
pub fn clicked_action(buttons: &[Button], mouse_pos: (f32, f32)) -> Option<Action> {
    buttons
        .iter()
        .find(|btn| btn.is_clicked(mouse_pos))
        .map(Button::action)
}

/// Keyboard shortcuts mirroring the buttons
pub const KEYS: [(KeyCode, Action); 7] = [
    (KeyCode::Space, Action::PlayPause),
    (KeyCode::R, Action::Restart),
    (KeyCode::Equal, Action::Grow),
    (KeyCode::KpAdd, Action::Grow),
    (KeyCode::Minus, Action::Shrink),
    (KeyCode::KpSubtract, Action::Shrink),
    (KeyCode::S, Action::CycleStrategy),
];

/// Action of the first shortcut pressed this frame, if any
pub fn pressed_action() -> Option<Action> {
    KEYS.iter()
        .find(|(key, _)| is_key_pressed(*key))
        .map(|&(_, action)| action)
}

/// Apply a control action. Resizes while running are wrapped in
/// stop and restart so no frame ever sees a half-changed universe.
pub fn apply_action<S: Scheduler>(action: Action, driver: &mut Driver<S>, universe: &mut Universe) {
    match action {
        Action::PlayPause => {
            driver.toggle();
        }
        Action::Restart => {
            if let Err(err) = universe.reseed(DEFAULT_DENSITY) {
                warn!(%err, "restart failed");
            }
        }
        Action::CycleStrategy => {
            universe.set_strategy(universe.strategy().next());
        }
        Action::Grow | Action::Shrink => {
            let was_running = driver.is_running();
            driver.stop();
            if action == Action::Grow {
                universe.resize_grow();
            } else {
                universe.resize_shrink();
            }
            if was_running {
                driver.start();
            }
        }
    }
}
