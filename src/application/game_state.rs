use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::EngineConfig;
use crate::domain::{Grid, Seed};
use crate::error::GridError;

/// Discrete commands fed back from input handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Step,
    TogglePause,
    Reseed(Seed),
    ToggleLargeMode,
    SetAlive { row: usize, col: usize },
    SetDead { row: usize, col: usize },
    Toggle { row: usize, col: usize },
    /// Brush stroke: toggles on click, sets alive while dragging
    Paint { row: usize, col: usize, toggle: bool },
    Resize(usize),
    ToggleColorGradient,
}

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub grid: Grid,
    rng: StdRng,
    pub color_gradient: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_evolution_time_ms: f32,
    pub last_render_time_ms: f32,
    /// Set whenever the lattice changed outside a step, so renderers that
    /// rely on the changed-cell list must repaint everything
    full_redraw: bool,
}

impl GameState {
    pub const MIN_SPEED: f32 = 1.0;
    pub const MAX_SPEED: f32 = 240.0;

    /// Build the startup state: normal-mode grid with a random seed
    pub fn new(config: EngineConfig) -> Result<Self, GridError> {
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let grid = Grid::from_config(config, &mut rng)?;
        Ok(Self {
            grid,
            rng,
            color_gradient: true,
            update_timer: 0.0,
            updates_per_second: Self::MAX_SPEED,
            last_evolution_time_ms: 0.0,
            last_render_time_ms: 0.0,
            full_redraw: true,
        })
    }

    /// Side length of the square brush used for painting
    pub fn brush_size(&self) -> usize {
        if self.grid.is_large_mode() { self.grid.config().tile_size } else { 1 }
    }

    /// Apply one command. Only `Resize` can fail.
    pub fn apply(&mut self, command: Command) -> Result<(), GridError> {
        log::trace!("Applying {command:?}");
        match command {
            Command::Step => self.step(),
            Command::TogglePause => self.grid.toggle_pause(),
            Command::Reseed(seed) => {
                self.grid.reseed(seed, &mut self.rng);
                self.full_redraw = true;
            }
            Command::ToggleLargeMode => {
                self.grid.toggle_large_mode(&mut self.rng)?;
                self.full_redraw = true;
            }
            Command::SetAlive { row, col } => {
                self.grid.set_alive(row, col);
                self.full_redraw = true;
            }
            Command::SetDead { row, col } => {
                self.grid.set_dead(row, col);
                self.full_redraw = true;
            }
            Command::Toggle { row, col } => {
                self.grid.toggle(row, col);
                self.full_redraw = true;
            }
            Command::Paint { row, col, toggle } => self.paint(row, col, toggle),
            Command::Resize(size) => {
                self.grid.resize(size, &mut self.rng)?;
                self.full_redraw = true;
            }
            Command::ToggleColorGradient => {
                self.color_gradient = !self.color_gradient;
                self.full_redraw = true;
            }
        }
        Ok(())
    }

    /// Apply the brush centered on `(row, col)`; cells past the edge are skipped
    fn paint(&mut self, row: usize, col: usize, toggle: bool) {
        let half = self.brush_size() / 2;
        for r in row.saturating_sub(half)..=row.saturating_add(half) {
            for c in col.saturating_sub(half)..=col.saturating_add(half) {
                if toggle {
                    self.grid.toggle(r, c);
                } else {
                    self.grid.set_alive(r, c);
                }
            }
        }
        self.full_redraw = true;
    }

    /// Adjust simulation speed
    pub fn adjust_speed(&mut self, delta: f32) {
        self.updates_per_second =
            (self.updates_per_second + delta).clamp(Self::MIN_SPEED, Self::MAX_SPEED);
    }

    fn step(&mut self) {
        let start = Instant::now();
        self.grid.step();
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;
    }

    /// Update simulation by one frame. Returns whether a generation ran.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        if self.grid.is_paused() {
            return false;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;
        if self.update_timer < update_interval {
            return false;
        }

        self.step();
        self.update_timer = 0.0;
        true
    }

    /// Whether renderers must repaint the whole lattice; resets the flag
    pub fn take_full_redraw(&mut self) -> bool {
        std::mem::take(&mut self.full_redraw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        let config = EngineConfig {
            display_size: 140,
            tile_size: 7,
            rng_seed: Some(17),
            ..Default::default()
        };
        GameState::new(config).unwrap()
    }

    #[test]
    fn test_startup_is_paused_and_seeded() {
        let state = state();
        assert_eq!(state.grid.size(), 20);
        assert!(state.grid.is_paused());
        assert!(state.grid.live_count() > 0);
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let a = state();
        let b = state();
        assert_eq!(a.grid.tiles(), b.grid.tiles());
    }

    #[test]
    fn test_tick_respects_pause() {
        let mut state = state();
        assert!(!state.tick(1.0));
        assert_eq!(state.grid.generation(), 0);

        state.apply(Command::TogglePause).unwrap();
        assert!(state.tick(1.0));
        assert_eq!(state.grid.generation(), 1);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let mut state = state();
        state.apply(Command::TogglePause).unwrap();
        state.updates_per_second = 10.0;
        assert!(!state.tick(0.05));
        assert!(state.tick(0.06));
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut state = state();
        state.adjust_speed(1000.0);
        assert_eq!(state.updates_per_second, GameState::MAX_SPEED);
        state.adjust_speed(-1000.0);
        assert_eq!(state.updates_per_second, GameState::MIN_SPEED);
    }

    #[test]
    fn test_reseed_command() {
        let mut state = state();
        state.take_full_redraw();
        state.apply(Command::TogglePause).unwrap();
        state.apply(Command::Reseed(Seed::Symmetric)).unwrap();
        assert!(state.grid.is_paused());
        assert!(state.take_full_redraw());
        assert!(!state.take_full_redraw());
    }

    #[test]
    fn test_large_mode_brush() {
        let mut state = state();
        state.apply(Command::ToggleLargeMode).unwrap();
        assert_eq!(state.grid.size(), 140);
        assert_eq!(state.brush_size(), 7);

        state.apply(Command::Reseed(Seed::GliderGuns)).unwrap();
        state.grid.clear_all();
        state.apply(Command::Paint { row: 1, col: 50, toggle: false }).unwrap();
        // 7x7 brush clipped by the top edge: rows 0..=4
        assert_eq!(state.grid.live_count(), 5 * 7);

        state.apply(Command::Paint { row: 1, col: 50, toggle: true }).unwrap();
        assert_eq!(state.grid.live_count(), 0);
    }

    #[test]
    fn test_normal_mode_brush_is_single_cell() {
        let mut state = state();
        state.grid.clear_all();
        state.apply(Command::Paint { row: 3, col: 3, toggle: true }).unwrap();
        assert_eq!(state.grid.live_count(), 1);
        state.apply(Command::Paint { row: 300, col: 3, toggle: true }).unwrap();
        assert_eq!(state.grid.live_count(), 1);
    }

    #[test]
    fn test_invalid_resize_is_reported() {
        let mut state = state();
        assert!(matches!(
            state.apply(Command::Resize(0)),
            Err(GridError::InvalidSize { size: 0 })
        ));
        state.apply(Command::Resize(33)).unwrap();
        assert_eq!(state.grid.size(), 33);
        assert!(state.grid.is_paused());
    }
}
