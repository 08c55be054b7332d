use macroquad::prelude::*;
use life_universe::{
    Config, Driver, FrameOutcome, FrameQueue, Universe,
    application::FpsCounter,
    input, rendering,
    ui::{self, PANEL_WIDTH},
};
use tracing::{error, info, trace};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    let Config { universe, window, .. } = Config::default();
    let (canvas_w, canvas_h) = ui::canvas_size(universe.width, universe.height);
    Conf {
        window_title: window.title.clone(),
        window_width: (canvas_w + PANEL_WIDTH) as i32,
        window_height: window.height_for(canvas_h) as i32,
        window_resizable: window.resizable,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let config = Config::default();
    if let Err(err) = config.validate() {
        error!(%err, "invalid configuration");
        return;
    }
    let mut universe = match Universe::from_config(&config.universe) {
        Ok(universe) => universe,
        Err(err) => {
            error!(%err, "failed to create universe");
            return;
        }
    };
    let mut driver = match Driver::with_config(FrameQueue::new(), &config.driver) {
        Ok(driver) => driver,
        Err(err) => {
            error!(%err, "failed to create driver");
            return;
        }
    };
    let mut fps = FpsCounter::new();
    info!(width = universe.width(), height = universe.height(), "universe ready");

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        if let Some(action) = input::clicked_action(&buttons, mouse_pos).or_else(input::pressed_action) {
            input::apply_action(action, &mut driver, &mut universe);
        } else {
            input::handle_cell_click(&mut universe, mouse_pos);
        }

        // Deliver the frame the driver asked for on the previous refresh
        if let Some(token) = driver.scheduler_mut().take_due() {
            if let FrameOutcome::Advanced { generation } = driver.on_frame(token, &mut universe) {
                trace!(generation, "redraw");
            }
        }
        fps.record(get_frame_time());

        clear_background(Color::from_rgba(60, 60, 60, 255));
        let snapshot = universe.snapshot();
        rendering::draw_grid(&snapshot);
        rendering::draw_cells(&snapshot);
        rendering::draw_controls(&universe, &driver, fps.stats(), &buttons, mouse_pos);

        next_frame().await;
    }
}
