use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use sphere_geodesic::diagnostics::equivalence::random_batch;
use sphere_geodesic::VectorBatch;

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Gaussian cloud with per-coordinate standard deviation `scale`.
pub fn gaussian_cloud(seed: u64, n: usize, scale: f64) -> VectorBatch {
    random_batch(&mut seeded_rng(seed), n, scale)
}

/// Nonzero vectors with wildly different magnitudes.
pub fn random_vectors(seed: u64, n: usize) -> Vec<Vector3<f64>> {
    let mut rng = seeded_rng(seed);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let scale = 10f64.powi(rng.gen_range(-6..=6));
        let v = Vector3::new(
            rng.sample::<f64, _>(StandardNormal),
            rng.sample::<f64, _>(StandardNormal),
            rng.sample::<f64, _>(StandardNormal),
        ) * scale;
        if v != Vector3::zeros() {
            out.push(v);
        }
    }
    out
}
