//! Normal and large mode.
//!
//! Both modes render into the same `display_size` footprint. Large mode
//! collapses the effective cell size to 1, so the simulated lattice grows by
//! `tile_size²` (about 49x with the defaults: 157² -> 1100²).

use crate::config::EngineConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Large,
}

impl Mode {
    pub const fn is_large(self) -> bool {
        matches!(self, Mode::Large)
    }

    pub const fn toggled(self) -> Self {
        match self {
            Mode::Normal => Mode::Large,
            Mode::Large => Mode::Normal,
        }
    }

    /// Simulated lattice size for this mode
    pub fn grid_size(self, config: &EngineConfig) -> usize {
        match self {
            Mode::Normal => config.normal_grid_size(),
            Mode::Large => config.large_grid_size(),
        }
    }

    /// Effective per-cell rendering size for this mode
    pub fn cell_size(self, config: &EngineConfig) -> usize {
        match self {
            Mode::Normal => config.tile_size,
            Mode::Large => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Normal => "Normal",
            Mode::Large => "Large",
        }
    }
}
