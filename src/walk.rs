//! Lattice random walks constrained to a sphere.
//!
//! Each walker repeatedly moves `step_size` along one of the six axis
//! directions, chosen uniformly, and is projected radially back onto the
//! sphere. The final positions, taken relative to the sphere centre, are the
//! point clouds [`angular_variance`](crate::variance::angular_variance)
//! measures the spread of.

use crate::angle::max_abs;
use crate::error::GeodesicError;
use crate::params::{validate_radius, DEFAULT_RADIUS};
use crate::types::VectorBatch;
use log::debug;
use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkOptions {
    pub walkers: usize,
    pub steps: usize,
    /// Length of one axis-aligned move before projection.
    pub step_size: f64,
    pub radius: f64,
    pub center: [f64; 3],
    /// Starting point relative to `center`; projected onto the sphere first.
    /// `None` starts every walker at the pole `(0, 0, radius)`.
    pub start: Option<[f64; 3]>,
    pub seed: u64,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            walkers: 200,
            steps: 15_000,
            step_size: 0.5,
            radius: DEFAULT_RADIUS,
            center: [0.0; 3],
            start: None,
            seed: 0,
        }
    }
}

/// Closest point to `p` on the sphere of `radius` around `center`.
///
/// A point at the centre has no closest point and is returned unchanged.
pub fn project_to_sphere(p: &Vector3<f64>, center: &Vector3<f64>, radius: f64) -> Vector3<f64> {
    let offset = p - center;
    let scale = max_abs(offset.x, offset.y, offset.z);
    if scale == 0.0 {
        return *p;
    }
    let scaled = offset / scale;
    center + scaled * (radius / scaled.norm())
}

/// Final positions of `options.walkers` independent walks, relative to the
/// sphere centre, one row per walker.
pub fn simulate_walkers(options: &WalkOptions) -> Result<VectorBatch, GeodesicError> {
    validate_radius(options.radius)?;
    if !(options.step_size.is_finite() && options.step_size >= 0.0) {
        return Err(GeodesicError::InvalidStep {
            step_size: options.step_size,
        });
    }
    let center = Vector3::from(options.center);
    if !center.iter().all(|c| c.is_finite()) {
        return Err(GeodesicError::NonFinite { row: None });
    }
    let start = match options.start {
        Some(s) => Vector3::from(s),
        None => Vector3::new(0.0, 0.0, options.radius),
    };
    if !start.iter().all(|c| c.is_finite()) {
        return Err(GeodesicError::NonFinite { row: None });
    }
    if start == Vector3::zeros() {
        return Err(GeodesicError::ZeroMagnitude { row: None });
    }
    let start = project_to_sphere(&(center + start), &center, options.radius);

    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    let mut data = Vec::with_capacity(options.walkers * 3);
    for _ in 0..options.walkers {
        let end = walk(&mut rng, start, &center, options) - center;
        data.extend_from_slice(end.as_slice());
    }
    debug!(
        "simulate_walkers: walkers={} steps={} step_size={} radius={}",
        options.walkers, options.steps, options.step_size, options.radius
    );
    Ok(VectorBatch::from_fn(options.walkers, |i, j| data[3 * i + j]))
}

fn walk<R: Rng>(
    rng: &mut R,
    start: Vector3<f64>,
    center: &Vector3<f64>,
    options: &WalkOptions,
) -> Vector3<f64> {
    let mut current = start;
    for _ in 0..options.steps {
        let axis = rng.gen_range(0..3);
        let sign = if rng.gen::<bool>() { 1.0 } else { -1.0 };
        let mut next = current;
        next[axis] += sign * options.step_size;
        current = project_to_sphere(&next, center, options.radius);
    }
    current
}
