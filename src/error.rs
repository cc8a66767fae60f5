//! Error types for grid construction and engine configuration.

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Display size must be non-zero")]
    InvalidDisplaySize,
    #[error("Tile size must be non-zero")]
    InvalidTileSize,
    #[error("Tile size {tile_size} exceeds display size {display_size}")]
    TileLargerThanDisplay { tile_size: usize, display_size: usize },
    #[error("Minimum rows per worker must be non-zero")]
    InvalidMinRows,
    #[error("Seed passes must be non-zero")]
    InvalidSeedPasses,
    #[error("Live threshold {0} is outside 0..=100")]
    InvalidLiveThreshold(u32),
}

/// Errors raised by grid-level operations.
///
/// Single-cell mutators and pattern stamping never fail; they clamp or skip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid size must be positive (got {size})")]
    InvalidSize { size: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
