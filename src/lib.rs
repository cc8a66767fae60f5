// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Command surface and timing
pub mod application;

pub mod config;
pub mod error;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Mode, Pattern, Seed, Tile, presets};
pub use application::{Command, GameState, Viewport};
pub use config::EngineConfig;
pub use error::{ConfigError, GridError};
