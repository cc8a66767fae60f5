mod game_state;
mod viewport;

pub use game_state::{Command, GameState};
pub use viewport::Viewport;
