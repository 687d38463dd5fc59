//! Distance parameters and their JSON configuration form.

use crate::error::GeodesicError;
use crate::types::OutputMode;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_RADIUS: f64 = 4.5;

/// Sphere radius and output unit shared by the distance operations.
///
/// Deserializing goes through [`DistanceConfig::resolve`], so missing fields
/// take their defaults and the radius is validated. Through `serde` an error
/// arrives wrapped in the deserializer's error type; use
/// [`DistanceParams::from_json_str`] to keep it as a [`GeodesicError`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DistanceConfig")]
pub struct DistanceParams {
    /// Only scales arc-length output; never used to rescale inputs.
    pub radius: f64,
    pub mode: OutputMode,
}

impl Default for DistanceParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            mode: OutputMode::Radians,
        }
    }
}

impl DistanceParams {
    pub fn new(radius: f64, mode: OutputMode) -> Result<Self, GeodesicError> {
        let params = Self { radius, mode };
        params.validate()?;
        Ok(params)
    }

    pub fn with_mode(self, mode: OutputMode) -> Self {
        Self { mode, ..self }
    }

    pub fn with_radius(self, radius: f64) -> Self {
        Self { radius, ..self }
    }

    pub fn validate(&self) -> Result<(), GeodesicError> {
        validate_radius(self.radius)
    }

    /// Default reference point `(0, 0, radius)`.
    pub fn north_pole(&self) -> Vector3<f64> {
        Vector3::new(0.0, 0.0, self.radius)
    }

    pub fn from_json_str(data: &str) -> Result<Self, GeodesicError> {
        let config: DistanceConfig =
            serde_json::from_str(data).map_err(|e| GeodesicError::Config {
                message: format!("Failed to parse distance config: {e}"),
            })?;
        config.resolve()
    }
}

pub(crate) fn validate_radius(radius: f64) -> Result<(), GeodesicError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(GeodesicError::InvalidRadius { radius })
    }
}

/// On-disk form of [`DistanceParams`]. Missing fields fall back to defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DistanceConfig {
    pub radius: Option<f64>,
    /// Kept as text so an unknown unit surfaces as `InvalidMode`.
    pub mode: Option<String>,
}

impl DistanceConfig {
    pub fn resolve(&self) -> Result<DistanceParams, GeodesicError> {
        let defaults = DistanceParams::default();
        let mode = match self.mode.as_deref() {
            Some(m) => m.parse()?,
            None => defaults.mode,
        };
        DistanceParams::new(self.radius.unwrap_or(defaults.radius), mode)
    }
}

impl TryFrom<DistanceConfig> for DistanceParams {
    type Error = GeodesicError;

    fn try_from(config: DistanceConfig) -> Result<Self, Self::Error> {
        config.resolve()
    }
}

pub fn load_params(path: &Path) -> Result<DistanceParams, GeodesicError> {
    let data = fs::read_to_string(path).map_err(|e| GeodesicError::Config {
        message: format!("Failed to read config {}: {e}", path.display()),
    })?;
    DistanceParams::from_json_str(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_unit_sphere_setup() {
        let p = DistanceParams::default();
        assert_eq!(p.radius, 4.5);
        assert_eq!(p.mode, OutputMode::Radians);
        assert_eq!(p.north_pole(), Vector3::new(0.0, 0.0, 4.5));
    }

    #[test]
    fn json_fields_fall_back_to_defaults() {
        let p = DistanceParams::from_json_str(r#"{"mode": "deg"}"#).unwrap();
        assert_eq!(p.radius, DEFAULT_RADIUS);
        assert_eq!(p.mode, OutputMode::Degrees);

        let p = DistanceParams::from_json_str("{}").unwrap();
        assert_eq!(p, DistanceParams::default());
    }

    #[test]
    fn unknown_mode_in_json_is_invalid_mode() {
        let err = DistanceParams::from_json_str(r#"{"mode": "parsecs"}"#).unwrap_err();
        assert!(matches!(err, GeodesicError::InvalidMode { .. }));
    }

    #[test]
    fn rejects_non_positive_radius() {
        assert!(DistanceParams::new(0.0, OutputMode::ArcLength).is_err());
        assert!(DistanceParams::new(f64::NAN, OutputMode::Radians).is_err());
        let err = DistanceParams::from_json_str(r#"{"radius": -2.0}"#).unwrap_err();
        assert_eq!(err, GeodesicError::InvalidRadius { radius: -2.0 });
    }

    #[test]
    fn serde_path_validates_like_resolve() {
        let p: DistanceParams = serde_json::from_str(r#"{"radius": 2.0}"#).unwrap();
        assert_eq!(p, DistanceParams::default().with_radius(2.0));

        let err = serde_json::from_str::<DistanceParams>(r#"{"mode": "parsecs"}"#).unwrap_err();
        let expected = GeodesicError::InvalidMode {
            given: "parsecs".to_string(),
        };
        assert!(err.to_string().contains(&expected.to_string()), "{err}");
        assert!(serde_json::from_str::<DistanceParams>(r#"{"radius": 0.0}"#).is_err());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = DistanceParams::from_json_str("{radius").unwrap_err();
        assert!(matches!(err, GeodesicError::Config { .. }));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = load_params(Path::new("/nonexistent/geodesic.json")).unwrap_err();
        assert!(matches!(err, GeodesicError::Config { .. }));
    }
}
