use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::grid::Grid;

/// Chance of a cell starting out alive
const FILL_RATE: f64 = 0.5;

/// Fill a `width` x `height` grid with coin flips.
///
/// ChaCha8 is used rather than the thread rng so that a seed reproduces the same grid everywhere.
///
/// # Panics
/// If either dimension is zero. [`Config`](crate::config::Config) never lets that through.
pub fn random_grid(width: usize, height: usize, seed: u64) -> Grid {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let grid = Grid::from_fn(width, height, |_, _| rng.gen_bool(FILL_RATE));

    info!(width, height, seed, population = grid.population(), "generated grid");

    grid
}
