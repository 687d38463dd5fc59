//! Angle kernel shared by the scalar and batch distance paths.
//!
//! Both paths normalize with [`max_abs`] and [`magnitude`] and recover the
//! angle with [`angle_between_units`], so their results agree bit for bit.

use crate::error::GeodesicError;
use crate::params::DistanceParams;
use crate::types::OutputMode;
use nalgebra::Vector3;

/// Euclidean length of `(x, y, z)`, summed left to right.
#[inline]
pub fn magnitude(x: f64, y: f64, z: f64) -> f64 {
    (x * x + y * y + z * z).sqrt()
}

/// Largest absolute component of `(x, y, z)`.
#[inline]
pub fn max_abs(x: f64, y: f64, z: f64) -> f64 {
    x.abs().max(y.abs()).max(z.abs())
}

/// Direction of `v` as a unit vector.
///
/// Components are divided by [`max_abs`] before the norm is taken so the
/// squares neither overflow nor underflow for any finite nonzero `v`.
/// `row` is only used to label the error when `v` came from a batch.
pub fn unit_direction(
    v: &Vector3<f64>,
    row: Option<usize>,
) -> Result<Vector3<f64>, GeodesicError> {
    if !(v.x.is_finite() && v.y.is_finite() && v.z.is_finite()) {
        return Err(GeodesicError::NonFinite { row });
    }
    let scale = max_abs(v.x, v.y, v.z);
    if scale == 0.0 {
        return Err(GeodesicError::ZeroMagnitude { row });
    }
    let (sx, sy, sz) = (v.x / scale, v.y / scale, v.z / scale);
    let norm = magnitude(sx, sy, sz);
    Ok(Vector3::new(sx / norm, sy / norm, sz / norm))
}

/// Unsigned angle between two unit vectors in radians, in [0, π].
///
/// Uses `atan2(|u×v|, u·v)`, which keeps full precision near 0 and π where
/// `acos(u·v)` does not. The dot product is clamped to [-1, 1].
#[inline]
pub fn angle_between_units(u: &Vector3<f64>, v: &Vector3<f64>) -> f64 {
    let dot = (u.x * v.x + u.y * v.y + u.z * v.z).clamp(-1.0, 1.0);
    let cx = u.y * v.z - u.z * v.y;
    let cy = u.z * v.x - u.x * v.z;
    let cz = u.x * v.y - u.y * v.x;
    magnitude(cx, cy, cz).atan2(dot)
}

/// Converts a radian angle to the unit selected by `params.mode`.
#[inline]
pub fn to_output(angle: f64, params: &DistanceParams) -> f64 {
    match params.mode {
        OutputMode::Radians => angle,
        OutputMode::Degrees => angle.to_degrees(),
        OutputMode::ArcLength => params.radius * angle,
    }
}
