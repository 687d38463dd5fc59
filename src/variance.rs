//! Angular spread of a point cloud around a reference direction.

use crate::angle::unit_direction;
use crate::batch::geodesic_distances;
use crate::error::GeodesicError;
use crate::params::{validate_radius, DistanceParams};
use crate::types::{OutputMode, VectorBatch};
use nalgebra::Vector3;

/// Mean squared angular distance (radians²) from `reference` to each point.
///
/// Always measured in radians; `radius` is validated but does not scale the
/// result. The radius and reference are checked first, so a zero reference
/// is reported as invalid input even for an empty batch, which then fails
/// with [`GeodesicError::EmptyInput`].
pub fn angular_variance(
    points: &VectorBatch,
    reference: &Vector3<f64>,
    radius: f64,
) -> Result<f64, GeodesicError> {
    validate_radius(radius)?;
    unit_direction(reference, None)?;
    if points.nrows() == 0 {
        return Err(GeodesicError::EmptyInput);
    }
    let params = DistanceParams {
        radius,
        mode: OutputMode::Radians,
    };
    let angles = geodesic_distances(points, reference, &params)?;
    Ok(angles.map(|a| a * a).mean())
}

/// [`angular_variance`] around `(0, 0, radius)`.
pub fn angular_variance_from_pole(points: &VectorBatch, radius: f64) -> Result<f64, GeodesicError> {
    angular_variance(points, &Vector3::new(0.0, 0.0, radius), radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::batch_from_rows;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn mean_of_squared_angles() {
        let points = batch_from_rows(&[[1.0, 0.0, 0.0], [0.0, 0.0, -1.0]]);
        let var = angular_variance(&points, &Vector3::z(), 4.5).unwrap();
        let expected = (FRAC_PI_2 * FRAC_PI_2 + PI * PI) / 2.0;
        assert!((var - expected).abs() < 1e-12);
    }

    #[test]
    fn empty_batch_is_empty_input() {
        let points = batch_from_rows(&[]);
        assert_eq!(
            angular_variance(&points, &Vector3::z(), 4.5),
            Err(GeodesicError::EmptyInput)
        );
    }

    #[test]
    fn zero_reference_wins_over_empty_batch() {
        let points = batch_from_rows(&[]);
        let err = angular_variance(&points, &Vector3::zeros(), 4.5).unwrap_err();
        assert_eq!(err, GeodesicError::ZeroMagnitude { row: None });
        assert!(err.is_invalid_input());
    }

    #[test]
    fn radius_does_not_scale_variance() {
        let points = batch_from_rows(&[[1.0, 1.0, 0.0], [0.0, -1.0, 1.0]]);
        let a = angular_variance(&points, &Vector3::z(), 1.0).unwrap();
        let b = angular_variance(&points, &Vector3::z(), 100.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn propagates_invalid_input() {
        let points = batch_from_rows(&[[0.0, 0.0, 0.0]]);
        let err = angular_variance(&points, &Vector3::z(), 4.5).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn cluster_at_pole_has_zero_spread() {
        let points = batch_from_rows(&[[0.0, 0.0, 4.5], [0.0, 0.0, 1.0]]);
        assert_eq!(angular_variance_from_pole(&points, 4.5).unwrap(), 0.0);
    }
}
