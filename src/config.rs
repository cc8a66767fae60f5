//! Engine configuration: display footprint, tile size and seeding knobs.

use crate::error::ConfigError;

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Side length of the rendered square, in display units.
    pub display_size: usize,
    /// Effective cell size in normal mode. Large mode always uses 1.
    pub tile_size: usize,
    /// Minimum number of rows a stepper worker is given.
    pub min_rows_per_worker: usize,
    /// Number of passes run by the random and symmetric generators.
    pub seed_passes: u32,
    /// A draw `v` in `0..=100` makes a cell alive when `v > live_threshold`.
    pub live_threshold: u32,
    /// Fixed RNG seed for reproducible runs; entropy-seeded when `None`.
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            display_size: 1100,
            tile_size: 7,
            min_rows_per_worker: 10,
            seed_passes: 10,
            live_threshold: 60,
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    /// Simulated grid size in normal mode (157 with the defaults).
    #[inline]
    pub fn normal_grid_size(&self) -> usize {
        self.display_size / self.tile_size
    }

    /// Simulated grid size in large mode: one cell per display unit.
    #[inline]
    pub fn large_grid_size(&self) -> usize {
        self.display_size
    }

    /// Read overrides from the environment (`LIFE_SEED`).
    pub fn from_env() -> Self {
        let rng_seed = std::env::var("LIFE_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok());
        if let Some(seed) = rng_seed {
            log::info!("Using fixed RNG seed {seed} from LIFE_SEED");
        }
        Self {
            rng_seed,
            ..Self::default()
        }
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_size == 0 {
            return Err(ConfigError::InvalidDisplaySize);
        }
        if self.tile_size == 0 {
            return Err(ConfigError::InvalidTileSize);
        }
        if self.tile_size > self.display_size {
            return Err(ConfigError::TileLargerThanDisplay {
                tile_size: self.tile_size,
                display_size: self.display_size,
            });
        }
        if self.min_rows_per_worker == 0 {
            return Err(ConfigError::InvalidMinRows);
        }
        if self.seed_passes == 0 {
            return Err(ConfigError::InvalidSeedPasses);
        }
        if self.live_threshold > 100 {
            return Err(ConfigError::InvalidLiveThreshold(self.live_threshold));
        }
        Ok(())
    }
}
