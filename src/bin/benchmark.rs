//! Serial vs parallel generation throughput

use std::time::Instant;
use life_universe::{EvolutionStrategy, Universe};

fn benchmark(size: usize, strategy: EvolutionStrategy, iterations: u32) -> f64 {
    let mut universe = match Universe::seeded(size, size, 0.5, 42) {
        Ok(universe) => universe,
        Err(err) => {
            eprintln!("skipping {size}x{size}: {err}");
            return f64::NAN;
        }
    };
    universe.set_strategy(strategy);

    let start = Instant::now();
    for _ in 0..iterations {
        universe.step();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [50, 100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(size, EvolutionStrategy::Serial, iterations);
        let parallel_ms = benchmark(size, EvolutionStrategy::Parallel, iterations);

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let cells = 2000 * 2000;
    let auto_ms = benchmark(2000, EvolutionStrategy::Auto, iterations);
    println!(
        "\nAuto at 2000x2000: {:.2} ms/gen, {:.1}M cells/sec",
        auto_ms,
        cells as f64 / (auto_ms / 1000.0) / 1_000_000.0
    );
}
