//! Generation stepper: fork-join evaluation of row chunks.
//!
//! Every worker reads the same committed snapshot and writes only its own
//! rows of the destination buffer. The destination is split into disjoint
//! `&mut` slices before the fork, so no locking is needed and the caller
//! commits by swapping buffers after the join.

use std::ops::Range;

use rayon::prelude::*;

use super::Tile;
use super::neighbors::count_live_neighbors;

/// Result of one parallel step over the destination buffer.
#[derive(Debug, Default)]
pub struct StepReport {
    /// Cells whose state flipped, as `(row, col)`. Unordered.
    pub changed: Vec<(usize, usize)>,
    /// Number of chunks the rows were split into.
    pub chunks: usize,
}

/// Split the computed row range into contiguous chunks, one per worker.
///
/// Only rows `0..size-1` are computed; the last row is read as a neighbor
/// but never recomputed. Worker count starts at `workers`, drops so every
/// chunk has at least `min_rows` rows, and never goes below 1. The last
/// chunk absorbs the remainder.
pub fn plan_chunks(size: usize, workers: usize, min_rows: usize) -> Vec<Range<usize>> {
    let total_rows = size.saturating_sub(1);
    if total_rows == 0 {
        return Vec::new();
    }

    let min_rows = min_rows.max(1);
    let mut workers = workers.max(1);
    if total_rows / workers < min_rows {
        workers = (total_rows / min_rows).max(1);
    }

    let rows_per_worker = total_rows / workers;
    (0..workers)
        .map(|t| {
            let start = t * rows_per_worker;
            let end = if t == workers - 1 { total_rows } else { start + rows_per_worker };
            start..end
        })
        .collect()
}

/// Compute the next generation of `front` into `back`.
///
/// `back` must already hold a copy of `front`: cells outside the computed
/// region (last row, last column) keep their current state. When
/// `track_changes` is set each worker collects the cells it flipped.
pub fn step_into(
    front: &[Tile],
    back: &mut [Tile],
    size: usize,
    chunks: &[Range<usize>],
    track_changes: bool,
) -> StepReport {
    debug_assert_eq!(front.len(), size * size);
    debug_assert_eq!(back.len(), front.len());

    // Hand each worker exclusive ownership of its rows
    let mut jobs: Vec<(Range<usize>, &mut [Tile])> = Vec::with_capacity(chunks.len());
    let mut rest = back;
    let mut offset = 0;
    for range in chunks {
        let (_, tail) = std::mem::take(&mut rest).split_at_mut((range.start - offset) * size);
        let (rows, tail) = tail.split_at_mut(range.len() * size);
        jobs.push((range.clone(), rows));
        rest = tail;
        offset = range.end;
    }

    let changed_per_chunk: Vec<Vec<(usize, usize)>> = jobs
        .into_par_iter()
        .map(|(range, rows)| compute_chunk(front, rows, size, range, track_changes))
        .collect();

    StepReport {
        changed: changed_per_chunk.into_iter().flatten().collect(),
        chunks: chunks.len(),
    }
}

/// Evaluate one chunk of rows. `rows` starts at `range.start`.
fn compute_chunk(
    front: &[Tile],
    rows: &mut [Tile],
    size: usize,
    range: Range<usize>,
    track_changes: bool,
) -> Vec<(usize, usize)> {
    let mut changed = Vec::new();
    let last_col = size - 1;

    for (local, row) in range.enumerate().map(|(k, row)| (k * size, row)) {
        for col in 0..last_col {
            let current = front[row * size + col].state;
            let neighbors = count_live_neighbors(front, size, row, col);
            let next = current.evolve(neighbors);

            rows[local + col].state = next;
            if track_changes && next != current {
                changed.push((row, col));
            }
        }
    }

    changed
}
