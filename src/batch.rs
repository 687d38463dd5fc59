//! Great-circle distances from one reference to every row of a batch.
//!
//! Rows are normalized column-wise (each coordinate column divided by the
//! per-row largest component, then by the per-row norm), then every row goes
//! through the same [`angle_between_units`] kernel as the scalar path. Results
//! therefore match [`geodesic_distance`](crate::distance::geodesic_distance)
//! exactly.
//!
//! A row with zero magnitude fails the whole call instead of yielding NaN for
//! that row, so both paths reject the same inputs.

use crate::angle::{angle_between_units, magnitude, max_abs, to_output, unit_direction};
use crate::error::GeodesicError;
use crate::params::DistanceParams;
use crate::types::VectorBatch;
use log::debug;
use nalgebra::{DVector, Vector3};

/// Unit directions of a batch, stored as three coordinate columns.
struct UnitColumns {
    x: DVector<f64>,
    y: DVector<f64>,
    z: DVector<f64>,
}

impl UnitColumns {
    fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    fn row(&self, i: usize) -> Vector3<f64> {
        Vector3::new(self.x[i], self.y[i], self.z[i])
    }
}

fn unit_columns(points: &VectorBatch) -> Result<UnitColumns, GeodesicError> {
    let xs = points.column(0).into_owned();
    let ys = points.column(1).into_owned();
    let zs = points.column(2).into_owned();

    if let Some(row) = (0..points.nrows())
        .find(|&i| !(xs[i].is_finite() && ys[i].is_finite() && zs[i].is_finite()))
    {
        debug!("geodesic_distances: row {row} has a non-finite component");
        return Err(GeodesicError::NonFinite { row: Some(row) });
    }

    let scales = xs.zip_zip_map(&ys, &zs, max_abs);
    if let Some(row) = scales.iter().position(|&s| s == 0.0) {
        debug!("geodesic_distances: row {row} has zero magnitude");
        return Err(GeodesicError::ZeroMagnitude { row: Some(row) });
    }

    let sx = xs.component_div(&scales);
    let sy = ys.component_div(&scales);
    let sz = zs.component_div(&scales);
    let norms = sx.zip_zip_map(&sy, &sz, magnitude);

    Ok(UnitColumns {
        x: sx.component_div(&norms),
        y: sy.component_div(&norms),
        z: sz.component_div(&norms),
    })
}

/// Geodesic distance from `reference` to each row of `points`.
///
/// Element `i` equals `geodesic_distance(points[i], reference, params)`. An
/// empty batch yields an empty vector.
pub fn geodesic_distances(
    points: &VectorBatch,
    reference: &Vector3<f64>,
    params: &DistanceParams,
) -> Result<DVector<f64>, GeodesicError> {
    params.validate()?;
    let reference = unit_direction(reference, None)?;
    let units = unit_columns(points)?;
    debug!(
        "geodesic_distances: n={} mode={} radius={}",
        units.len(),
        params.mode,
        params.radius
    );
    Ok(row_angles(&units, &reference).map(|angle| to_output(angle, params)))
}

/// Same as [`geodesic_distances`] with the reference at `(0, 0, radius)`.
pub fn geodesic_distances_from_pole(
    points: &VectorBatch,
    params: &DistanceParams,
) -> Result<DVector<f64>, GeodesicError> {
    geodesic_distances(points, &params.north_pole(), params)
}

#[cfg(not(feature = "parallel"))]
fn row_angles(units: &UnitColumns, reference: &Vector3<f64>) -> DVector<f64> {
    DVector::from_fn(units.len(), |i, _| {
        angle_between_units(&units.row(i), reference)
    })
}

#[cfg(feature = "parallel")]
fn row_angles(units: &UnitColumns, reference: &Vector3<f64>) -> DVector<f64> {
    use rayon::prelude::*;

    let angles: Vec<f64> = (0..units.len())
        .into_par_iter()
        .map(|i| angle_between_units(&units.row(i), reference))
        .collect();
    DVector::from_vec(angles)
}
