use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Wall-clock duration of one timed stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Stage timings collected during a diagnostic run, in execution order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Runs `f`, records its elapsed time under `label` and returns its output.
    pub fn time<T>(&mut self, label: impl Into<String>, f: impl FnOnce() -> T) -> T {
        let t0 = Instant::now();
        let out = f();
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
        self.total_ms += elapsed_ms;
        self.stages.push(StageTiming {
            label: label.into(),
            elapsed_ms,
        });
        out
    }

    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}
