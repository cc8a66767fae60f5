mod cell;
mod grid;
mod neighbors;
pub mod mode;
pub mod patterns;
pub mod seeding;
pub mod stepper;

pub use cell::{Cell, Tile};
pub use grid::Grid;
pub use mode::Mode;
pub use neighbors::count_live_neighbors;
pub use patterns::{Orientation, Pattern, presets};
pub use seeding::Seed;
