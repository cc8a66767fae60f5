use macroquad::prelude::*;

use crate::application::{Command, GameState, Viewport};
use crate::domain::Seed;

/// Key bindings: key -> command
const KEY_COMMANDS: [(KeyCode, Command); 8] = [
    (KeyCode::Space, Command::TogglePause),
    (KeyCode::R, Command::Reseed(Seed::Random)),
    (KeyCode::G, Command::Reseed(Seed::Symmetric)),
    (KeyCode::L, Command::ToggleLargeMode),
    (KeyCode::C, Command::ToggleColorGradient),
    (KeyCode::Key2, Command::Reseed(Seed::GliderGuns)),
    (KeyCode::Key3, Command::Reseed(Seed::ConcentricRings)),
    (KeyCode::Key4, Command::Reseed(Seed::ExplosiveSeeds)),
];

/// Tracks a left-button stroke so dragging paints each cell once.
#[derive(Default)]
pub struct InputHandler {
    dragging: bool,
    last_cell: Option<(usize, usize)>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Click toggles the brush; dragging paints it alive on every new cell
    pub fn mouse_commands(&mut self, viewport: &Viewport, cell_size: usize) -> Vec<Command> {
        let (mx, my) = mouse_position();
        let cell = viewport.screen_to_cell(mx, my, cell_size);
        let mut commands = Vec::new();

        if is_mouse_button_pressed(MouseButton::Left) {
            self.dragging = true;
            self.last_cell = cell;
            if let Some((row, col)) = cell {
                commands.push(Command::Paint { row, col, toggle: true });
            }
        } else if is_mouse_button_released(MouseButton::Left) {
            self.dragging = false;
            self.last_cell = None;
        } else if self.dragging && cell.is_some() && cell != self.last_cell {
            if let Some((row, col)) = cell {
                commands.push(Command::Paint { row, col, toggle: false });
            }
            self.last_cell = cell;
        }

        commands
    }
}

/// Commands triggered by keys pressed this frame
pub fn keyboard_commands(state: &GameState) -> Vec<Command> {
    let mut commands: Vec<Command> = KEY_COMMANDS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| *command)
        .collect();

    // The density gradient is only offered in large mode
    if is_key_pressed(KeyCode::Key1) && state.grid.is_large_mode() {
        commands.push(Command::Reseed(Seed::DensityGradient));
    }

    commands
}

/// Speed keys adjust state directly
pub fn handle_speed(state: &mut GameState) {
    if is_key_pressed(KeyCode::Up) {
        state.adjust_speed(10.0);
    } else if is_key_pressed(KeyCode::Down) {
        state.adjust_speed(-10.0);
    }
}
