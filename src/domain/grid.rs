use std::time::Instant;

use rand::Rng;

use super::mode::Mode;
use super::seeding::Seed;
use super::stepper::{plan_chunks, step_into};
use super::{Cell, Tile};
use crate::config::EngineConfig;
use crate::error::GridError;

/// Grid owns the square toroidal lattice and its double buffer.
///
/// `tiles` is the committed generation; `scratch` is the destination buffer
/// the stepper writes into. Both are allocated with identical positions, so
/// swapping them never reassigns a tile's `(row, col)`.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
    scratch: Vec<Tile>,
    paused: bool,
    mode: Mode,
    cell_size: usize,
    /// Cells flipped by the most recent step (large mode only)
    changed: Vec<(usize, usize)>,
    generation: u64,
    config: EngineConfig,
}

fn allocate(size: usize) -> Vec<Tile> {
    (0..size * size).map(|idx| Tile::new(idx / size, idx % size)).collect()
}

impl Grid {
    /// Create a dead, paused `size × size` grid with the default configuration
    pub fn new(size: usize) -> Result<Self, GridError> {
        Self::with_config(size, EngineConfig::default())
    }

    /// Create a dead, paused grid with an explicit configuration
    pub fn with_config(size: usize, config: EngineConfig) -> Result<Self, GridError> {
        config.validate()?;
        if size == 0 {
            return Err(GridError::InvalidSize { size });
        }
        let tiles = allocate(size);
        Ok(Self {
            size,
            scratch: tiles.clone(),
            tiles,
            paused: true,
            mode: Mode::Normal,
            cell_size: Mode::Normal.cell_size(&config),
            changed: Vec::new(),
            generation: 0,
            config,
        })
    }

    /// Startup grid: normal-mode size with an initial random seed
    pub fn from_config<R: Rng + ?Sized>(
        config: EngineConfig,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid = Self::with_config(config.normal_grid_size(), config)?;
        Seed::Random.generate(&mut grid, rng);
        log::info!(
            "Grid created: {}x{}, {} live cells",
            grid.size,
            grid.size,
            grid.live_count()
        );
        Ok(grid)
    }

    /// Set the mode flag without reallocating (builder pattern)
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self.cell_size = mode.cell_size(&self.config);
        self
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn is_large_mode(&self) -> bool {
        self.mode.is_large()
    }

    /// Effective per-cell rendering size for the current mode
    pub const fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Cells flipped by the last step. Empty outside large mode and after
    /// any reseed or resize.
    pub fn changed(&self) -> &[(usize, usize)] {
        &self.changed
    }

    /// Committed lattice in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    const fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.size && col < self.size {
            Some(row * self.size + col)
        } else {
            None
        }
    }

    /// Out-of-range coordinates read as dead
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some_and(|idx| self.tiles[idx].is_alive())
    }

    pub fn live_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_alive()).count()
    }

    fn update(&mut self, row: usize, col: usize, f: impl FnOnce(Cell) -> Cell) {
        if let Some(idx) = self.index(row, col) {
            let tile = &mut self.tiles[idx];
            tile.state = f(tile.state);
        }
    }

    /// Out-of-range coordinates are ignored
    pub fn set_alive(&mut self, row: usize, col: usize) {
        self.update(row, col, |_| Cell::Alive);
    }

    /// Out-of-range coordinates are ignored
    pub fn set_dead(&mut self, row: usize, col: usize) {
        self.update(row, col, |_| Cell::Dead);
    }

    /// Out-of-range coordinates are ignored
    pub fn toggle(&mut self, row: usize, col: usize) {
        self.update(row, col, Cell::toggle);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Set every cell dead. Leaves `paused` and `size` alone.
    pub fn clear_all(&mut self) {
        self.tiles.iter_mut().for_each(|tile| tile.state = Cell::Dead);
        self.changed.clear();
    }

    /// Clear in place and run one seeding strategy. Pauses the simulation.
    pub fn reseed<R: Rng + ?Sized>(&mut self, seed: Seed, rng: &mut R) {
        self.clear_all();
        self.paused = true;
        self.generation = 0;
        seed.generate(self, rng);
        log::info!(
            "Reseeded with {}: {} live cells on {}x{}",
            seed.name(),
            self.live_count(),
            self.size,
            self.size
        );
    }

    /// Reallocate to `new_size × new_size`, re-derive the cell size from the
    /// current mode, reseed randomly and pause.
    pub fn resize<R: Rng + ?Sized>(
        &mut self,
        new_size: usize,
        rng: &mut R,
    ) -> Result<(), GridError> {
        if new_size == 0 {
            log::warn!("Rejected resize to {new_size}");
            return Err(GridError::InvalidSize { size: new_size });
        }

        self.size = new_size;
        self.tiles = allocate(new_size);
        self.scratch = self.tiles.clone();
        self.cell_size = self.mode.cell_size(&self.config);
        self.changed = Vec::new();
        self.generation = 0;
        self.paused = true;

        Seed::Random.generate(self, rng);
        log::info!(
            "Resized to {}x{} ({} mode, cell size {}), {} live cells",
            new_size,
            new_size,
            self.mode.name(),
            self.cell_size,
            self.live_count()
        );
        Ok(())
    }

    /// Flip large mode and rebuild the lattice at that mode's size
    pub fn toggle_large_mode<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GridError> {
        self.mode = self.mode.toggled();
        let size = self.mode.grid_size(&self.config);
        self.resize(size, rng)
    }

    /// Advance one generation. No-op while paused.
    pub fn step(&mut self) {
        if self.paused {
            return;
        }
        let start = Instant::now();

        self.scratch.copy_from_slice(&self.tiles);
        let chunks = plan_chunks(
            self.size,
            rayon::current_num_threads(),
            self.config.min_rows_per_worker,
        );
        log::trace!("Chunk plan for {}x{}: {:?}", self.size, self.size, chunks);

        let track_changes = self.mode.is_large();
        let report = step_into(&self.tiles, &mut self.scratch, self.size, &chunks, track_changes);

        // Commit: every worker has joined
        std::mem::swap(&mut self.tiles, &mut self.scratch);
        self.changed.clear();
        if track_changes {
            self.changed = report.changed;
        }
        self.generation += 1;

        log::debug!(
            "Generation {}: {} chunks, {} changed, {:.2}ms",
            self.generation,
            report.chunks,
            self.changed.len(),
            start.elapsed().as_secs_f32() * 1000.0
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn running(size: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        for &(r, c) in alive {
            grid.set_alive(r, c);
        }
        grid.set_paused(false);
        grid
    }

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.tiles().iter().filter(|t| t.is_alive()).map(|t| t.position()).collect()
    }

    #[test]
    fn test_new_grid_is_dead_and_paused() {
        let grid = Grid::new(10).unwrap();
        assert_eq!(grid.size(), 10);
        assert_eq!(grid.tiles().len(), 100);
        assert_eq!(grid.live_count(), 0);
        assert!(grid.is_paused());
        assert!(!grid.is_large_mode());
        assert_eq!(grid.cell_size(), 7);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Grid::new(0).unwrap_err(), GridError::InvalidSize { size: 0 });
        let mut rng = StdRng::seed_from_u64(0);
        let mut grid = Grid::new(5).unwrap();
        assert!(grid.resize(0, &mut rng).is_err());
        assert_eq!(grid.size(), 5);
    }

    #[test]
    fn test_from_config_seeds_normal_size() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = Grid::from_config(EngineConfig::default(), &mut rng).unwrap();
        assert_eq!(grid.size(), 157);
        assert!(grid.live_count() > 0);
        assert!(grid.is_paused());
    }

    #[test]
    fn test_out_of_range_mutations_are_ignored() {
        let mut grid = Grid::new(10).unwrap();
        grid.set_alive(10, 0);
        grid.set_alive(0, 10);
        grid.toggle(usize::MAX, 3);
        grid.set_dead(99, 99);
        assert_eq!(grid.live_count(), 0);
        assert!(!grid.is_alive(10, 10));
    }

    #[test]
    fn test_single_cell_mutators() {
        let mut grid = Grid::new(10).unwrap();
        grid.set_alive(2, 3);
        assert!(grid.is_alive(2, 3));
        grid.toggle(2, 3);
        assert!(!grid.is_alive(2, 3));
        grid.toggle(2, 3);
        grid.set_dead(2, 3);
        assert!(!grid.is_alive(2, 3));
    }

    #[test]
    fn test_paused_step_is_noop() {
        let mut grid = running(10, &[(5, 4), (5, 5), (5, 6)]);
        grid.set_paused(true);
        grid.step();
        assert_eq!(alive_cells(&grid), vec![(5, 4), (5, 5), (5, 6)]);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = running(7, &[(3, 2), (3, 3), (3, 4)]);

        grid.step();
        assert_eq!(alive_cells(&grid), vec![(2, 3), (3, 3), (4, 3)]);

        grid.step();
        assert_eq!(alive_cells(&grid), vec![(3, 2), (3, 3), (3, 4)]);
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = [(4, 4), (4, 5), (5, 4), (5, 5)];
        let mut grid = running(12, &block);
        for _ in 0..10 {
            grid.step();
        }
        assert_eq!(alive_cells(&grid), block.to_vec());
    }

    #[test]
    fn test_step_is_simultaneous() {
        // Two independent blinkers: sequential in-place updates would corrupt both
        let mut grid = running(20, &[(3, 2), (3, 3), (3, 4), (12, 11), (13, 11), (14, 11)]);
        grid.step();
        assert_eq!(
            alive_cells(&grid),
            vec![(2, 3), (3, 3), (4, 3), (13, 10), (13, 11), (13, 12)]
        );
    }

    #[test]
    fn test_births_wrap_around_torus() {
        // Vertical blinker centered on row 0, its top cell on the far row
        let mut grid = running(20, &[(19, 5), (0, 5), (1, 5)]);
        grid.step();
        // Births on row 0 count the live cell on row 19 as a neighbor
        assert!(grid.is_alive(0, 4));
        assert!(grid.is_alive(0, 6));
        assert!(grid.is_alive(0, 5));
        assert!(!grid.is_alive(1, 5));
    }

    #[test]
    fn test_changed_list_in_large_mode() {
        let mut grid = running(16, &[(5, 4), (5, 5), (5, 6)]).with_mode(Mode::Large);
        let before = grid.tiles().to_vec();
        grid.step();

        let mut expected: Vec<_> = before
            .iter()
            .zip(grid.tiles())
            .filter(|(a, b)| a.state != b.state)
            .map(|(a, _)| a.position())
            .collect();
        let mut changed = grid.changed().to_vec();
        expected.sort_unstable();
        changed.sort_unstable();
        assert_eq!(changed, vec![(4, 5), (5, 4), (5, 6), (6, 5)]);
        assert_eq!(changed, expected);
    }

    #[test]
    fn test_changed_list_empty_when_stable() {
        let mut grid = running(12, &[(4, 4), (4, 5), (5, 4), (5, 5)]).with_mode(Mode::Large);
        grid.step();
        assert!(grid.changed().is_empty());
    }

    #[test]
    fn test_changed_list_unused_in_normal_mode() {
        let mut grid = running(16, &[(5, 4), (5, 5), (5, 6)]);
        grid.step();
        assert!(grid.changed().is_empty());
    }

    #[test]
    fn test_reseed_clears_changed_and_pauses() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = running(16, &[(5, 4), (5, 5), (5, 6)]).with_mode(Mode::Large);
        grid.step();
        assert!(!grid.changed().is_empty());

        grid.reseed(Seed::Symmetric, &mut rng);
        assert!(grid.changed().is_empty());
        assert!(grid.is_paused());
        assert_eq!(grid.size(), 16);
    }

    #[test]
    fn test_clear_all_keeps_pause_and_size() {
        let mut grid = running(9, &[(1, 1), (2, 2)]);
        grid.clear_all();
        assert_eq!(grid.live_count(), 0);
        assert!(!grid.is_paused());
        assert_eq!(grid.size(), 9);
    }

    #[test]
    fn test_resize_then_rule_still_holds() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut grid = running(10, &[]);
        grid.resize(24, &mut rng).unwrap();
        assert_eq!(grid.size(), 24);
        assert!(grid.is_paused());
        assert!(grid.live_count() > 0);
        for (idx, tile) in grid.tiles().iter().enumerate() {
            assert_eq!(tile.position(), (idx / 24, idx % 24));
        }

        grid.clear_all();
        for &(r, c) in &[(10, 9), (10, 10), (10, 11)] {
            grid.set_alive(r, c);
        }
        grid.set_paused(false);
        grid.step();
        assert_eq!(alive_cells(&grid), vec![(9, 10), (10, 10), (11, 10)]);
    }

    #[test]
    fn test_toggle_large_mode_resizes() {
        let mut rng = StdRng::seed_from_u64(2);
        let config = EngineConfig { display_size: 70, tile_size: 7, ..Default::default() };
        let mut grid = Grid::with_config(config.normal_grid_size(), config).unwrap();
        grid.set_paused(false);

        grid.toggle_large_mode(&mut rng).unwrap();
        assert!(grid.is_large_mode());
        assert_eq!(grid.size(), 70);
        assert_eq!(grid.cell_size(), 1);
        assert!(grid.is_paused());

        // A large-mode step records changes; resizing drops them
        grid.set_paused(false);
        grid.step();
        assert!(!grid.changed().is_empty());
        grid.resize(40, &mut rng).unwrap();
        assert!(grid.changed().is_empty());
        assert_eq!(grid.generation(), 0);

        grid.toggle_large_mode(&mut rng).unwrap();
        assert!(grid.changed().is_empty());
        assert!(!grid.is_large_mode());
        assert_eq!(grid.size(), 10);
        assert_eq!(grid.cell_size(), 7);
    }
}
