use chrono::Utc;
use mineboard_core::Seed;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Fresh positive seed derived from the current time.
pub fn new_seed() -> Seed {
    let now = Utc::now();
    let nanos = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp());
    let mut rng = SmallRng::seed_from_u64(nanos as u64);
    rng.random_range(1..=Seed::MAX)
}
