use macroquad::prelude::*;

use crate::application::{Driver, FpsStats, Scheduler};
use crate::domain::{Cell, Snapshot, Universe};
use crate::ui::{Button, CELL_PITCH, CELL_SIZE, PANEL_WIDTH, controls_bottom, panel_x};

const GRID_COLOR: Color = Color::new(0.667, 0.667, 0.667, 1.0); // #AAA
const DEAD_COLOR: Color = WHITE; // #FFF
const ALIVE_COLOR: Color = Color::new(0.267, 0.267, 0.267, 1.0); // #444

/// Top-left pixel of the cell at `(row, col)`, inside its grid lines
pub fn cell_origin(row: usize, col: usize) -> (f32, f32) {
    (col as f32 * CELL_PITCH + 1.0, row as f32 * CELL_PITCH + 1.0)
}

/// Draw the 1px lines separating cells
pub fn draw_grid(snapshot: &Snapshot<'_>) {
    let (width, height) = (snapshot.width(), snapshot.height());
    let right = CELL_PITCH * width as f32 + 1.0;
    let bottom = CELL_PITCH * height as f32 + 1.0;

    // Vertical lines
    for i in 0..=width {
        let x = i as f32 * CELL_PITCH + 0.5;
        draw_line(x, 0.0, x, bottom, 1.0, GRID_COLOR);
    }

    // Horizontal lines
    for j in 0..=height {
        let y = j as f32 * CELL_PITCH + 0.5;
        draw_line(0.0, y, right, y, 1.0, GRID_COLOR);
    }
}

/// Redraw every cell: alive cells in one pass, dead cells in a second,
/// so each pass uses a single fill color.
pub fn draw_cells(snapshot: &Snapshot<'_>) {
    for (state, color) in [(Cell::Alive, ALIVE_COLOR), (Cell::Dead, DEAD_COLOR)] {
        for (idx, &cell) in snapshot.cells().iter().enumerate() {
            if cell != state {
                continue;
            }
            let (x, y) = cell_origin(idx / snapshot.width(), idx % snapshot.width());
            draw_rectangle(x, y, CELL_SIZE, CELL_SIZE, color);
        }
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons and simulation info
pub fn draw_controls<S: Scheduler>(
    universe: &Universe,
    driver: &Driver<S>,
    fps: Option<FpsStats>,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();
    let snapshot = universe.snapshot();
    let strategy = universe.strategy();
    let status = if driver.is_running() { "Running" } else { "Paused" };
    let fps_line = fps.map_or_else(
        || "FPS: -".to_string(),
        |fps| format!("FPS: {:.0} (min {:.0} / max {:.0})", fps.mean, fps.min, fps.max),
    );

    let labels: [(String, f32, Color); 12] = [
        (format!("Grid: {}x{}", snapshot.width(), snapshot.height()), 14.0, WHITE),
        (format!("Alive: {}", snapshot.population()), 14.0, GRAY),
        (format!("Generation: {}", snapshot.generation()), 14.0, WHITE),
        (format!("Status: {status}"), 14.0, WHITE),
        (format!("Min size: {0}x{0}", universe.min_side()), 12.0, GRAY),
        (format!("Gens/frame: {}", driver.steps_per_frame()), 12.0, GRAY),
        (format!("Step: {}", strategy.name()), 12.0, GRAY),
        (strategy.description().to_string(), 11.0, GRAY),
        (fps_line, 12.0, GRAY),
        ("Space: Play  R: Restart".to_string(), 12.0, GRAY),
        ("+/-: Grow/Shrink".to_string(), 12.0, GRAY),
        ("S: Next strategy".to_string(), 12.0, GRAY),
    ];

    let top = controls_bottom() + 20.0;
    labels.iter().enumerate().for_each(|(i, (text, size, color))| {
        draw_text(text, px + 6.0, top + i as f32 * 20.0, *size, *color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_origin_skips_grid_lines() {
        assert_eq!(cell_origin(0, 0), (1.0, 1.0));
        assert_eq!(cell_origin(2, 3), (28.0, 19.0));
    }
}
