use crate::error::GeodesicError;
use nalgebra::{MatrixXx3, Vector3};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// `N×3` batch of Cartesian points, one point per row.
pub type VectorBatch = MatrixXx3<f64>;

/// Unit of a returned distance. Does not affect the angle computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputMode {
    #[default]
    #[serde(rename = "rad")]
    Radians,
    #[serde(rename = "deg")]
    Degrees,
    /// Angle scaled by the sphere radius.
    #[serde(rename = "arc")]
    ArcLength,
}

impl OutputMode {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::Radians => "rad",
            OutputMode::Degrees => "deg",
            OutputMode::ArcLength => "arc",
        }
    }
}

impl FromStr for OutputMode {
    type Err = GeodesicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rad" | "radians" => Ok(OutputMode::Radians),
            "deg" | "degrees" => Ok(OutputMode::Degrees),
            "arc" | "arc-length" | "arc_length" => Ok(OutputMode::ArcLength),
            _ => Err(GeodesicError::InvalidMode {
                given: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for OutputMode {
    type Error = GeodesicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds a batch from an array of `[x, y, z]` rows.
pub fn batch_from_rows(rows: &[[f64; 3]]) -> VectorBatch {
    VectorBatch::from_fn(rows.len(), |i, j| rows[i][j])
}

/// Builds a batch from row-major `x0, y0, z0, x1, ...` data.
pub fn batch_from_flat(data: &[f64]) -> Result<VectorBatch, GeodesicError> {
    if data.len() % 3 != 0 {
        return Err(GeodesicError::MalformedBatch { len: data.len() });
    }
    Ok(VectorBatch::from_fn(data.len() / 3, |i, j| data[3 * i + j]))
}

/// Copies a single row of a batch out as a vector.
#[inline]
pub fn batch_row(points: &VectorBatch, i: usize) -> Vector3<f64> {
    Vector3::new(points[(i, 0)], points[(i, 1)], points[(i, 2)])
}
