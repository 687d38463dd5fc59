//! Great-circle distance between two single points.

use crate::angle::{angle_between_units, to_output, unit_direction};
use crate::error::GeodesicError;
use crate::params::DistanceParams;
use crate::types::OutputMode;
use nalgebra::Vector3;

/// Geodesic distance between the directions of `a` and `b`.
///
/// Only direction matters: either vector may have any nonzero length. The
/// result lies in [0, π] radians, [0, 180] degrees or [0, π·radius] arc
/// length depending on `params.mode`.
pub fn geodesic_distance(
    a: &Vector3<f64>,
    b: &Vector3<f64>,
    params: &DistanceParams,
) -> Result<f64, GeodesicError> {
    params.validate()?;
    let ua = unit_direction(a, None)?;
    let ub = unit_direction(b, None)?;
    Ok(to_output(angle_between_units(&ua, &ub), params))
}

pub fn geodesic_distance_with(
    a: &Vector3<f64>,
    b: &Vector3<f64>,
    radius: f64,
    mode: OutputMode,
) -> Result<f64, GeodesicError> {
    geodesic_distance(a, b, &DistanceParams { radius, mode })
}
