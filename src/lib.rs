#![doc = include_str!("../README.md")]

pub mod angle;
pub mod batch;
pub mod diagnostics;
pub mod distance;
pub mod error;
pub mod params;
pub mod types;
pub mod variance;
pub mod walk;

// --- High-level re-exports -------------------------------------------------

pub use crate::batch::{geodesic_distances, geodesic_distances_from_pole};
pub use crate::distance::{geodesic_distance, geodesic_distance_with};
pub use crate::error::GeodesicError;
pub use crate::params::{load_params, DistanceParams, DEFAULT_RADIUS};
pub use crate::types::{batch_from_flat, batch_from_rows, OutputMode, VectorBatch};
pub use crate::variance::{angular_variance, angular_variance_from_pole};
pub use crate::walk::{simulate_walkers, WalkOptions};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use sphere_geodesic::prelude::*;
///
/// let points = batch_from_rows(&[[1.0, 0.0, 0.0], [0.0, 0.0, -1.0]]);
/// let reference = Vector3::new(0.0, 0.0, 1.0);
/// let d = geodesic_distances(&points, &reference, &DistanceParams::default()).unwrap();
/// assert!((d[1] - std::f64::consts::PI).abs() < 1e-12);
/// let var = angular_variance(&points, &reference, DEFAULT_RADIUS).unwrap();
/// assert!(var > 0.0);
/// ```
pub mod prelude {
    pub use crate::{
        angular_variance, batch_from_rows, geodesic_distance, geodesic_distances,
        DistanceParams, GeodesicError, OutputMode, VectorBatch, DEFAULT_RADIUS,
    };
    pub use nalgebra::Vector3;
}
