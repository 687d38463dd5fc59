//! Scalar vs batch equivalence check.
//!
//! Draws a seeded batch of Gaussian points, evaluates it once through
//! per-point [`geodesic_distance`] calls and once through
//! [`geodesic_distances`], and reports the largest absolute disagreement
//! together with the time each path took. Validation scaffolding only.

use super::timing::TimingBreakdown;
use crate::batch::geodesic_distances;
use crate::distance::geodesic_distance;
use crate::error::GeodesicError;
use crate::params::{DistanceConfig, DistanceParams};
use crate::types::{batch_row, VectorBatch};
use log::debug;
use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

pub const SCALAR_STAGE: &str = "scalar";
pub const BATCH_STAGE: &str = "batch";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EquivalenceOptions {
    pub samples: usize,
    /// Standard deviation of each coordinate.
    pub scale: f64,
    pub reference: [f64; 3],
    pub params: DistanceParams,
    pub seed: u64,
}

/// JSON form of [`EquivalenceOptions`]; `params` stays unresolved so a bad
/// mode or radius comes back as a typed [`GeodesicError`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EquivalenceConfig {
    pub samples: Option<usize>,
    pub scale: Option<f64>,
    pub reference: Option<[f64; 3]>,
    pub params: DistanceConfig,
    pub seed: Option<u64>,
}

impl EquivalenceConfig {
    pub fn resolve(&self) -> Result<EquivalenceOptions, GeodesicError> {
        let defaults = EquivalenceOptions::default();
        Ok(EquivalenceOptions {
            samples: self.samples.unwrap_or(defaults.samples),
            scale: self.scale.unwrap_or(defaults.scale),
            reference: self.reference.unwrap_or(defaults.reference),
            params: self.params.resolve()?,
            seed: self.seed.unwrap_or(defaults.seed),
        })
    }
}

impl EquivalenceOptions {
    pub fn from_json_str(data: &str) -> Result<Self, GeodesicError> {
        let config: EquivalenceConfig =
            serde_json::from_str(data).map_err(|e| GeodesicError::Config {
                message: format!("Failed to parse equivalence options: {e}"),
            })?;
        config.resolve()
    }
}

impl Default for EquivalenceOptions {
    fn default() -> Self {
        Self {
            samples: 10_000,
            scale: 4.5,
            reference: [0.0, 0.0, 4.5],
            params: DistanceParams::default(),
            seed: 0,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquivalenceReport {
    pub samples: usize,
    pub max_abs_difference: f64,
    pub timing: TimingBreakdown,
}

impl EquivalenceReport {
    pub fn is_equivalent(&self, tolerance: f64) -> bool {
        self.max_abs_difference <= tolerance
    }

    /// Scalar time over batch time.
    pub fn speedup(&self) -> Option<f64> {
        let scalar = self.timing.stage_ms(SCALAR_STAGE)?;
        let batch = self.timing.stage_ms(BATCH_STAGE)?;
        (batch > 0.0).then(|| scalar / batch)
    }
}

/// `n` points with i.i.d. `N(0, scale²)` coordinates. All-zero draws are
/// redrawn so every row has a direction.
pub fn random_batch<R: Rng>(rng: &mut R, n: usize, scale: f64) -> VectorBatch {
    let mut data = Vec::with_capacity(n * 3);
    while data.len() < n * 3 {
        let p: [f64; 3] = [
            rng.sample::<f64, _>(StandardNormal) * scale,
            rng.sample::<f64, _>(StandardNormal) * scale,
            rng.sample::<f64, _>(StandardNormal) * scale,
        ];
        if p != [0.0; 3] {
            data.extend_from_slice(&p);
        }
    }
    VectorBatch::from_fn(n, |i, j| data[3 * i + j])
}

pub fn check_equivalence(options: &EquivalenceOptions) -> Result<EquivalenceReport, GeodesicError> {
    let params = options.params;
    params.validate()?;
    let reference = Vector3::from(options.reference);
    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    let points = random_batch(&mut rng, options.samples, options.scale);

    let mut timing = TimingBreakdown::default();
    let scalar = timing.time(SCALAR_STAGE, || {
        (0..points.nrows())
            .map(|i| geodesic_distance(&batch_row(&points, i), &reference, &params))
            .collect::<Result<Vec<f64>, _>>()
    })?;
    let batch = timing.time(BATCH_STAGE, || {
        geodesic_distances(&points, &reference, &params)
    })?;

    let max_abs_difference = scalar
        .iter()
        .zip(batch.iter())
        .map(|(s, b)| (s - b).abs())
        .fold(0.0, f64::max);
    let report = EquivalenceReport {
        samples: options.samples,
        max_abs_difference,
        timing,
    };
    debug!(
        "check_equivalence: n={} max_diff={:e} scalar_ms={:.3} batch_ms={:.3}",
        report.samples,
        report.max_abs_difference,
        report.timing.stage_ms(SCALAR_STAGE).unwrap_or_default(),
        report.timing.stage_ms(BATCH_STAGE).unwrap_or_default()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_is_equivalent() {
        let report = check_equivalence(&EquivalenceOptions {
            samples: 2_000,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(report.samples, 2_000);
        assert!(report.is_equivalent(1e-9), "diff {:e}", report.max_abs_difference);
        assert_eq!(report.timing.stages.len(), 2);
    }

    #[test]
    fn random_batch_is_seeded() {
        let a = random_batch(&mut ChaCha8Rng::seed_from_u64(7), 16, 4.5);
        let b = random_batch(&mut ChaCha8Rng::seed_from_u64(7), 16, 4.5);
        assert_eq!(a.nrows(), 16);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_run_reports_no_difference() {
        let report = check_equivalence(&EquivalenceOptions {
            samples: 0,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(report.max_abs_difference, 0.0);
    }

    #[test]
    fn json_options_report_typed_errors() {
        let options = EquivalenceOptions::from_json_str(r#"{"samples": 8, "seed": 3}"#).unwrap();
        assert_eq!(options.samples, 8);
        assert_eq!(options.seed, 3);
        assert_eq!(options.params, DistanceParams::default());

        let err = EquivalenceOptions::from_json_str(r#"{"params": {"mode": "grad"}}"#)
            .unwrap_err();
        assert_eq!(
            err,
            GeodesicError::InvalidMode {
                given: "grad".to_string()
            }
        );
        let err = EquivalenceOptions::from_json_str(r#"{"params": {"radius": -1.0}}"#)
            .unwrap_err();
        assert_eq!(err, GeodesicError::InvalidRadius { radius: -1.0 });
    }

    #[test]
    fn invalid_radius_is_rejected() {
        let mut options = EquivalenceOptions::default();
        options.params.radius = 0.0;
        assert!(matches!(
            check_equivalence(&options),
            Err(GeodesicError::InvalidRadius { .. })
        ));
    }
}
