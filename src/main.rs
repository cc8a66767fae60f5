use macroquad::prelude::*;
use life_engine::{
    EngineConfig, GameState, Viewport,
    input::{self, InputHandler},
    rendering::{self, LargeCanvas},
};

fn window_conf() -> Conf {
    let size = EngineConfig::default().display_size as i32;
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: size,
        window_height: size,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = EngineConfig::from_env();
    let display_size = config.display_size;
    let mut state = match GameState::new(config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to start: {e}");
            std::process::exit(1);
        }
    };
    let mut input = InputHandler::new();
    let mut canvas: Option<LargeCanvas> = None;

    loop {
        let viewport = Viewport::fit(screen_width(), screen_height(), display_size);

        // Process input
        let mut commands = input::keyboard_commands(&state);
        commands.extend(input.mouse_commands(&viewport, state.grid.cell_size()));
        input::handle_speed(&mut state);
        for command in commands {
            if let Err(e) = state.apply(command) {
                log::warn!("{command:?} failed: {e}");
            }
        }

        // Render (with timing)
        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        let full_redraw = state.take_full_redraw();
        if state.grid.is_large_mode() {
            let canvas = canvas.get_or_insert_with(|| LargeCanvas::new(state.grid.size()));
            canvas.sync(&state.grid, state.color_gradient, full_redraw);
            canvas.draw(&viewport);
        } else {
            canvas = None;
            rendering::draw_tiles(&state.grid, &viewport, state.color_gradient);
        }
        rendering::draw_status(&state);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        // Advance after drawing so the canvas sees each step's changed list
        state.tick(get_frame_time());

        next_frame().await;
    }
}
