//! Seeding strategies.
//!
//! Every generator only ever sets cells alive, so callers clear the grid
//! first. Randomness comes from the RNG handle passed in, which keeps seeding
//! reproducible under a fixed seed.

use rand::Rng;

use super::Grid;
use super::patterns::{Orientation, Pattern, presets};

/// Available seeding strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Seed {
    /// Independent per-cell draws, repeated over several passes
    #[default]
    Random,
    /// Random draws in one quadrant mirrored into the other three
    Symmetric,
    /// Radial density falloff with embedded oscillators, blocks and gliders
    DensityGradient,
    /// Gosper guns along all four edges, firing inward
    GliderGuns,
    /// Alternating dense and sparse concentric rings
    ConcentricRings,
    /// R-pentominoes on a sparse lattice
    ExplosiveSeeds,
}

impl Seed {
    pub const ALL: [Seed; 6] = [
        Seed::Random,
        Seed::Symmetric,
        Seed::DensityGradient,
        Seed::GliderGuns,
        Seed::ConcentricRings,
        Seed::ExplosiveSeeds,
    ];

    /// Display name for logs and UI
    pub fn name(&self) -> &'static str {
        match self {
            Seed::Random => "Random",
            Seed::Symmetric => "Symmetric",
            Seed::DensityGradient => "Gradient",
            Seed::GliderGuns => "GliderGuns",
            Seed::ConcentricRings => "Rings",
            Seed::ExplosiveSeeds => "Explosive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Seed::Random => "~40% per pass, compounded over passes",
            Seed::Symmetric => "Random with 4-fold mirror symmetry",
            Seed::DensityGradient => "80% at corners to 20% at center, plus structures",
            Seed::GliderGuns => "Gosper guns on every edge",
            Seed::ConcentricRings => "15 rings, dense boundaries",
            Seed::ExplosiveSeeds => "R-pentomino lattice, 150-cell spacing",
        }
    }

    /// Run this generator on an already-cleared grid
    pub fn generate<R: Rng + ?Sized>(self, grid: &mut Grid, rng: &mut R) {
        match self {
            Seed::Random => uniform_random(grid, rng),
            Seed::Symmetric => symmetric_random(grid, rng),
            Seed::DensityGradient => density_gradient(grid, rng),
            Seed::GliderGuns => {
                glider_guns(grid);
            }
            Seed::ConcentricRings => concentric_rings(grid, rng),
            Seed::ExplosiveSeeds => {
                explosive_seeds(grid);
            }
        }
    }
}

/// Count of stamped and skipped pattern placements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Placements {
    pub placed: usize,
    pub skipped: usize,
}

impl Placements {
    fn stamp(
        &mut self,
        pattern: &Pattern,
        grid: &mut Grid,
        row: isize,
        col: isize,
        orientation: Orientation,
    ) {
        if pattern.place_on(grid, row, col, orientation) {
            self.placed += 1;
        } else {
            self.skipped += 1;
        }
    }
}

/// Uniform draw in `0..=100`
#[inline]
fn draw<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(0..=100)
}

/// Per-cell threshold draw over the whole grid, `seed_passes` times.
///
/// Passes only ever add live cells, so density compounds across passes.
pub fn uniform_random<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let size = grid.size();
    let threshold = grid.config().live_threshold;

    for _ in 0..grid.config().seed_passes {
        for row in 0..size {
            for col in 0..size {
                if draw(rng) > threshold {
                    grid.set_alive(row, col);
                }
            }
        }
    }
}

/// Threshold draws in the top-left quadrant mirrored into all four quadrants.
///
/// For odd sizes the center row, center column and center cell get their own
/// draws and are mirrored along their single axis.
pub fn symmetric_random<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let size = grid.size();
    let half = size / 2;
    let last = size.saturating_sub(1);
    let threshold = grid.config().live_threshold;

    for _ in 0..grid.config().seed_passes {
        for i in 0..half {
            for j in 0..half {
                if draw(rng) > threshold {
                    grid.set_alive(i, j);
                    grid.set_alive(last - i, j);
                    grid.set_alive(i, last - j);
                    grid.set_alive(last - i, last - j);
                }
            }
        }

        if size % 2 == 1 {
            for i in 0..half {
                if draw(rng) > threshold {
                    grid.set_alive(i, half);
                    grid.set_alive(last - i, half);
                }
            }
            for j in 0..half {
                if draw(rng) > threshold {
                    grid.set_alive(half, j);
                    grid.set_alive(half, last - j);
                }
            }
            if draw(rng) > threshold {
                grid.set_alive(half, half);
            }
        }
    }
}

/// Normalized Euclidean distance from the grid center: 0 at center, 1 at a corner.
fn normalized_distance(row: usize, col: usize, center: f32, max_distance: f32) -> f32 {
    if max_distance <= 0.0 {
        return 0.0;
    }
    let dr = row as f32 - center;
    let dc = col as f32 - center;
    ((dr * dr + dc * dc).sqrt() / max_distance).min(1.0)
}

const GRADIENT_CENTER_DENSITY: f32 = 0.2;
const GRADIENT_CORNER_DENSITY: f32 = 0.8;
const GRADIENT_BLINKERS: usize = 50;
const GRADIENT_BLOCKS: usize = 30;
const GRADIENT_GLIDERS: usize = 40;
/// Offsets wrap modulo `size - margin`; blocks use the narrower margin
const STRUCTURE_MARGIN: usize = 10;
const BLOCK_MARGIN: usize = 5;

/// Live probability rising linearly from 20% at the center to 80% at the
/// corners, then blinkers, blocks and inward-pointing gliders on top.
pub fn density_gradient<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let size = grid.size();
    let center = (size / 2) as f32;
    let max_distance = (2.0 * center * center).sqrt();

    for row in 0..size {
        for col in 0..size {
            let t = normalized_distance(row, col, center, max_distance);
            let density = (GRADIENT_CENTER_DENSITY
                + t * (GRADIENT_CORNER_DENSITY - GRADIENT_CENTER_DENSITY))
                .clamp(GRADIENT_CENTER_DENSITY, GRADIENT_CORNER_DENSITY);
            let threshold = (density * 100.0) as u32;
            if draw(rng) < threshold {
                grid.set_alive(row, col);
            }
        }
    }

    let tally = gradient_structures(grid, rng);
    log::debug!(
        "Gradient structures: {} placed, {} skipped",
        tally.placed,
        tally.skipped
    );
}

/// Blinkers, blocks and edge gliders for the density gradient.
///
/// Each offset is a `0..=100` draw reduced modulo the span, so on grids
/// wider than about a hundred cells the structures cluster near the origin
/// and along the low ends of the edges.
fn gradient_structures<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Placements {
    let size = grid.size();
    let span = size.saturating_sub(STRUCTURE_MARGIN).max(1);
    let block_span = size.saturating_sub(BLOCK_MARGIN).max(1);
    let mut tally = Placements::default();

    let blinker = presets::blinker();
    for _ in 0..GRADIENT_BLINKERS {
        let (row, col) = (anchor(rng, span), anchor(rng, span));
        tally.stamp(&blinker, grid, row, col, Orientation::Identity);
    }

    let block = presets::block();
    for _ in 0..GRADIENT_BLOCKS {
        let (row, col) = (anchor(rng, block_span), anchor(rng, block_span));
        tally.stamp(&block, grid, row, col, Orientation::Identity);
    }

    let glider = presets::glider();
    let far = size as isize - 1;
    for _ in 0..GRADIENT_GLIDERS {
        let edge = rng.random_range(0..4u8);
        let pos = anchor(rng, span);
        let (row, col, orientation) = match edge {
            // Top: heads down-right
            0 => (0, pos, Orientation::Identity),
            // Right: heads down-left
            1 => (pos, far, Orientation::TransposeFlipCols),
            // Bottom: heads up-right
            2 => (far, pos, Orientation::FlipRows),
            // Left: heads down-right
            _ => (pos, 0, Orientation::Transpose),
        };
        tally.stamp(&glider, grid, row, col, orientation);
    }
    tally
}

#[inline]
fn anchor<R: Rng + ?Sized>(rng: &mut R, span: usize) -> isize {
    (draw(rng) as usize % span) as isize
}

const GUN_EDGE_MARGIN: isize = 2;
/// First gun starts past the thickness of the guns on the adjacent edge
const GUN_CORNER_CLEARANCE: usize = 12;
const GUN_SPACING: usize = 60;

/// Gosper guns at regular intervals along every edge, each firing inward.
pub fn glider_guns(grid: &mut Grid) -> Placements {
    let size = grid.size();
    let far = size as isize - 1 - GUN_EDGE_MARGIN;
    let gun = presets::glider_gun();
    let mut tally = Placements::default();

    for t in (GUN_CORNER_CLEARANCE..size).step_by(GUN_SPACING) {
        let t = t as isize;
        // Top fires down, bottom fires up
        tally.stamp(&gun, grid, GUN_EDGE_MARGIN, t, Orientation::Identity);
        tally.stamp(&gun, grid, far, t, Orientation::FlipRows);
        // Left fires right, right fires left
        tally.stamp(&gun, grid, t, GUN_EDGE_MARGIN, Orientation::Transpose);
        tally.stamp(&gun, grid, t, far, Orientation::TransposeFlipCols);
    }

    log::debug!("Glider guns: {} placed, {} skipped", tally.placed, tally.skipped);
    tally
}

const RING_COUNT: f32 = 15.0;
const RING_BOUNDARY_FRACTION: f32 = 0.15;
const RING_BOUNDARY_DENSITY: f64 = 0.85;
const RING_INTERIOR_DENSITY: f64 = 0.15;

/// Fifteen equal-width rings around the center: dense near each inner
/// ring boundary, sparse inside.
pub fn concentric_rings<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let size = grid.size();
    let center = (size / 2) as f32;
    let max_distance = (2.0 * center * center).sqrt();

    for row in 0..size {
        for col in 0..size {
            let t = normalized_distance(row, col, center, max_distance) * RING_COUNT;
            let p = if t.fract() < RING_BOUNDARY_FRACTION {
                RING_BOUNDARY_DENSITY
            } else {
                RING_INTERIOR_DENSITY
            };
            if rng.random_bool(p) {
                grid.set_alive(row, col);
            }
        }
    }
}

const EXPLOSIVE_SPACING: usize = 150;
const EXPLOSIVE_MARGIN: usize = 100;
const EXPLOSIVE_EDGE_INSET: isize = 10;
const EXPLOSIVE_CLUSTER: [(isize, isize); 5] = [(0, 0), (-12, -12), (-12, 12), (12, -12), (12, 12)];

/// R-pentominoes on an interior lattice, along each edge and clustered
/// around the center.
pub fn explosive_seeds(grid: &mut Grid) -> Placements {
    let size = grid.size();
    let pentomino = presets::r_pentomino();
    let extent = pentomino.height.max(pentomino.width) as isize;
    let mut tally = Placements::default();

    let lattice: Vec<isize> = (EXPLOSIVE_MARGIN..size.saturating_sub(EXPLOSIVE_MARGIN))
        .step_by(EXPLOSIVE_SPACING)
        .map(|v| v as isize)
        .collect();

    for &row in &lattice {
        for &col in &lattice {
            tally.stamp(&pentomino, grid, row, col, Orientation::Identity);
        }
    }

    let far = size as isize - EXPLOSIVE_EDGE_INSET - extent;
    for &t in &lattice {
        tally.stamp(&pentomino, grid, EXPLOSIVE_EDGE_INSET, t, Orientation::Identity);
        tally.stamp(&pentomino, grid, far, t, Orientation::Identity);
        tally.stamp(&pentomino, grid, t, EXPLOSIVE_EDGE_INSET, Orientation::Identity);
        tally.stamp(&pentomino, grid, t, far, Orientation::Identity);
    }

    let center = (size / 2) as isize - 1;
    for (dr, dc) in EXPLOSIVE_CLUSTER {
        tally.stamp(&pentomino, grid, center + dr, center + dc, Orientation::Identity);
    }

    log::debug!("Explosive seeds: {} placed, {} skipped", tally.placed, tally.skipped);
    tally
}
