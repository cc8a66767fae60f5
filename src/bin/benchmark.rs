//! Step throughput at normal and large grid sizes

use std::time::Instant;

use life_engine::{EngineConfig, Grid, Mode, Seed};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn benchmark_step(size: usize, mode: Mode, iterations: u32) -> f64 {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut grid = match Grid::new(size) {
        Ok(grid) => grid.with_mode(mode),
        Err(e) => {
            eprintln!("Cannot build {size}x{size} grid: {e}");
            return f64::NAN;
        }
    };
    grid.reseed(Seed::ConcentricRings, &mut rng);
    grid.set_paused(false);

    let start = Instant::now();
    for _ in 0..iterations {
        grid.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    env_logger::init();

    println!("=== Game of Life Step Benchmark ===\n");
    println!("Workers: {}\n", rayon::current_num_threads());

    let config = EngineConfig::default();
    let sizes = [
        (config.normal_grid_size(), Mode::Normal),
        (500, Mode::Large),
        (config.large_grid_size(), Mode::Large),
        (2000, Mode::Large),
    ];
    let iterations = 20;

    println!("{:>12} {:>8} {:>12} {:>14}", "Size", "Mode", "ms/gen", "Mcells/sec");
    println!("{:-<50}", "");

    for (size, mode) in sizes {
        let ms = benchmark_step(size, mode, iterations);
        let cells = (size * size) as f64;
        println!(
            "{:>12} {:>8} {:>12.2} {:>14.1}",
            format!("{}x{}", size, size),
            mode.name(),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }
}
