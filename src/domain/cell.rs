/// Cell is the alive/dead state of a single lattice site.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Flip between alive and dead
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Pure function to compute the next state under B3/S23:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// A lattice site: fixed position plus mutable state.
///
/// `row`/`col` are assigned when the lattice is allocated and never change;
/// renderers scale them by the effective cell size to get pixel positions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tile {
    row: usize,
    col: usize,
    pub state: Cell,
}

impl Tile {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col, state: Cell::Dead }
    }

    pub const fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub const fn is_alive(&self) -> bool {
        self.state.is_alive()
    }
}
