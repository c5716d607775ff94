use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ripshom::{Point, PointCloud};

/// `count` points drawn uniformly from `[0, extent)²`, reproducible from
/// `seed`.
pub fn random_cloud(seed: u64, count: usize, extent: f64) -> PointCloud {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point::new(rng.random_range(0.0..extent), rng.random_range(0.0..extent)))
        .collect()
}
