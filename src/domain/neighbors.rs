//! Moore-neighborhood counting on a toroidal lattice.

use super::Tile;

/// Count live neighbors of `(row, col)` using toroidal wrapping.
///
/// `tiles` is a row-major `size × size` snapshot. Each offset coordinate wraps
/// modulo `size`, so the lattice has no edges.
#[inline]
pub fn count_live_neighbors(tiles: &[Tile], size: usize, row: usize, col: usize) -> u8 {
    debug_assert_eq!(tiles.len(), size * size);
    let mut count = 0u8;

    for dr in [size - 1, 0, 1] {
        for dc in [size - 1, 0, 1] {
            if dr == 0 && dc == 0 {
                continue;
            }
            // Adding size - 1 is -1 modulo size
            let r = (row + dr) % size;
            let c = (col + dc) % size;
            if tiles[r * size + c].is_alive() {
                count += 1;
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn lattice(size: usize, alive: &[(usize, usize)]) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = (0..size * size)
            .map(|idx| Tile::new(idx / size, idx % size))
            .collect();
        for &(r, c) in alive {
            tiles[r * size + c].state = Cell::Alive;
        }
        tiles
    }

    #[test]
    fn test_blinker_counts() {
        let tiles = lattice(10, &[(5, 4), (5, 5), (5, 6)]);

        assert_eq!(count_live_neighbors(&tiles, 10, 5, 5), 2);
        assert_eq!(count_live_neighbors(&tiles, 10, 4, 5), 3);
        assert_eq!(count_live_neighbors(&tiles, 10, 6, 5), 3);
        assert_eq!(count_live_neighbors(&tiles, 10, 0, 0), 0);
    }

    #[test]
    fn test_origin_wraps_to_every_corner() {
        let size = 8;
        let tiles = lattice(size, &[(0, 0)]);

        assert_eq!(count_live_neighbors(&tiles, size, size - 1, size - 1), 1);
        assert_eq!(count_live_neighbors(&tiles, size, size - 1, 0), 1);
        assert_eq!(count_live_neighbors(&tiles, size, 0, size - 1), 1);
        // The cell itself is never counted
        assert_eq!(count_live_neighbors(&tiles, size, 0, 0), 0);
    }

    #[test]
    fn test_full_neighborhood() {
        let alive: Vec<_> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
        let tiles = lattice(6, &alive);
        assert_eq!(count_live_neighbors(&tiles, 6, 1, 1), 8);
    }
}
