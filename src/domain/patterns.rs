use super::Grid;

/// Which way a stamped pattern is turned.
///
/// Applied as an axis swap and/or negation of the local offsets, so the
/// pattern's anchor stays at the placement point and the body extends away
/// from it in the rotated direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// As defined: local `(row, col)` unchanged.
    #[default]
    Identity,
    /// Rows negated: the pattern is flipped bottom-to-top.
    FlipRows,
    /// Axes swapped: local rows run along columns.
    Transpose,
    /// Axes swapped and the new columns negated.
    TransposeFlipCols,
}

impl Orientation {
    #[inline]
    pub const fn apply(self, dr: isize, dc: isize) -> (isize, isize) {
        match self {
            Orientation::Identity => (dr, dc),
            Orientation::FlipRows => (-dr, dc),
            Orientation::Transpose => (dc, dr),
            Orientation::TransposeFlipCols => (dc, -dr),
        }
    }
}

/// Represents a pattern that can be stamped on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub height: usize,
    pub width: usize,
    /// Relative `(row, col)` coordinates of alive cells
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name, description, height, width, cells }
    }

    /// Stamp the pattern with its anchor at `(row, col)`.
    ///
    /// All-or-nothing: if any cell would land outside the grid the whole
    /// placement is skipped and `false` is returned.
    pub fn place_on(
        &self,
        grid: &mut Grid,
        row: isize,
        col: isize,
        orientation: Orientation,
    ) -> bool {
        let size = grid.size() as isize;
        let targets = self.cells.iter().map(|&(dr, dc)| {
            let (dr, dc) = orientation.apply(dr as isize, dc as isize);
            (row + dr, col + dc)
        });

        if !targets.clone().all(|(r, c)| (0..size).contains(&r) && (0..size).contains(&c)) {
            return false;
        }
        for (r, c) in targets {
            grid.set_alive(r as usize, c as usize);
        }
        true
    }
}

/// Pattern library used by the seeding generators
pub mod presets {
    use super::*;

    /// Blinker - period 2 oscillator, horizontal phase
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (0, 2)],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Glider - travels towards +row, +col
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Gosper Glider Gun - emits a glider towards +row, +col every 30 generations.
    ///
    /// This is the standard 36-cell gun rather than a 34-cell variant; the
    /// two missing cells would leave it unable to fire.
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                // Left square
                (4, 0), (5, 0),
                (4, 1), (5, 1),

                // Left circle
                (4, 10), (5, 10), (6, 10),
                (3, 11), (7, 11),
                (2, 12), (8, 12),
                (2, 13), (8, 13),
                (5, 14),
                (3, 15), (7, 15),
                (4, 16), (5, 16), (6, 16),
                (5, 17),

                // Middle pieces
                (2, 20), (3, 20), (4, 20),
                (2, 21), (3, 21), (4, 21),
                (1, 22), (5, 22),
                (0, 24), (1, 24), (5, 24), (6, 24),

                // Right square
                (2, 34), (3, 34),
                (2, 35), (3, 35),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::presets::*;

    #[test]
    fn test_pattern_extents() {
        let gun = glider_gun();
        assert_eq!(gun.cells.len(), 36);
        assert_eq!((gun.height, gun.width), (9, 36));
        assert_eq!(r_pentomino().cells.len(), 5);
        assert_eq!(glider().cells.len(), 5);
    }

    #[test]
    fn test_orientation_offsets() {
        assert_eq!(Orientation::Identity.apply(1, 2), (1, 2));
        assert_eq!(Orientation::FlipRows.apply(1, 2), (-1, 2));
        assert_eq!(Orientation::Transpose.apply(1, 2), (2, 1));
        assert_eq!(Orientation::TransposeFlipCols.apply(1, 2), (2, -1));
    }

    #[test]
    fn test_place_inside_bounds() {
        let mut grid = Grid::new(10).unwrap();
        assert!(block().place_on(&mut grid, 4, 4, Orientation::Identity));
        assert_eq!(grid.live_count(), 4);
        assert!(grid.is_alive(5, 5));
    }

    #[test]
    fn test_place_out_of_bounds_is_skipped_entirely() {
        let mut grid = Grid::new(10).unwrap();
        assert!(!blinker().place_on(&mut grid, 0, 8, Orientation::Identity));
        assert!(!glider().place_on(&mut grid, 1, 1, Orientation::FlipRows));
        assert!(!block().place_on(&mut grid, -1, 0, Orientation::Identity));
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_flipped_glider_anchor() {
        let mut grid = Grid::new(10).unwrap();
        assert!(glider().place_on(&mut grid, 9, 0, Orientation::FlipRows));
        // (2, 0) in local coordinates lands two rows above the anchor
        assert!(grid.is_alive(7, 0));
        assert!(grid.is_alive(9, 1));
        assert_eq!(grid.live_count(), 5);
    }
}
