//! Timing sweep over grid sizes: top-hat profile, upwind scheme, CFL 1.0,
//! u = 0.1, tend = 10.0, with a fresh grid and field per trial so allocation
//! cost is measured too. Prints one average wall-clock time per grid size.
//!
//! Run with: `cargo run --release --example sweep`

use std::time::Instant;

use advect1d::{run, Profile, RunConfig, Scheme};

const SIZES: [usize; 7] = [128, 256, 512, 1024, 2048, 4096, 8192];
const TRIALS: u32 = 1000;

fn config(points: usize) -> RunConfig {
    RunConfig {
        points,
        profile: Profile::TopHat,
        scheme: Scheme::Upwind,
        courant: 1.0,
        speed: 0.1,
        end_time: 10.0,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    for points in SIZES {
        // warm up caches and the allocator before timing
        run(&config(100)).expect("warmup run failed");

        let mut elapsed = 0.0;
        for _ in 0..TRIALS {
            let start = Instant::now();
            run(&config(points)).expect("advection run failed");
            elapsed += start.elapsed().as_secs_f64();
        }

        println!("{points} {:e}", elapsed / TRIALS as f64);
    }
}
