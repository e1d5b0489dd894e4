use crate::config::EstimatorChoice;
use crate::core::Result;
use crate::estimation::{
    DuplicatePolicy, EstimatorSet, SamplingDistributions, estimate, estimate_lockstep,
};
use crate::resampling::{Dataset, Resamples};
use rand::Rng;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

const DEFAULT_REPLICATIONS: i64 = 1000;
fn default_replications() -> i64 {
    DEFAULT_REPLICATIONS
}

fn default_estimators() -> Vec<EstimatorChoice> {
    vec![EstimatorChoice::Mean]
}

/// In-memory description of one bootstrap run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BootstrapConfig {
    #[serde(default = "default_replications")]
    #[schemars(
        title = "Replications",
        description = "Number of resamples to draw; values <= 1 use the data as-is",
        default = "default_replications"
    )]
    pub replications: i64,

    #[serde(default)]
    #[schemars(title = "Seed", description = "PRNG seed; empty = seeded from the OS")]
    pub seed: Option<u64>,

    #[serde(default = "default_estimators")]
    #[schemars(
        title = "Estimators",
        description = "Statistics computed on every resample, in order",
        default = "default_estimators"
    )]
    pub estimators: Vec<EstimatorChoice>,

    #[serde(default)]
    #[schemars(
        title = "On Duplicate",
        description = "What to do when two estimators share a name"
    )]
    pub on_duplicate: DuplicatePolicy,

    #[serde(default)]
    #[schemars(
        title = "Lockstep",
        description = "Feed each resample to every estimator in a single pass"
    )]
    pub lockstep: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            replications: default_replications(),
            seed: None,
            estimators: default_estimators(),
            on_duplicate: DuplicatePolicy::default(),
            lockstep: false,
        }
    }
}

impl BootstrapConfig {
    pub fn schema() -> Schema {
        schema_for!(BootstrapConfig)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn build_estimators(&self) -> Result<EstimatorSet> {
        let mut set = EstimatorSet::with_policy(self.on_duplicate);
        for choice in &self.estimators {
            set.push_boxed(choice.build()?)?;
        }
        Ok(set)
    }

    /// Resample sequence for `data`, seeded from the configured seed.
    pub fn resamples(&self, data: &Dataset) -> Resamples {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        Resamples::seeded(data, self.replications, seed)
    }

    /// Resamples `data` and estimates every configured statistic.
    pub fn run(&self, data: &Dataset) -> Result<SamplingDistributions> {
        let estimators = self.build_estimators()?;
        let samples = self.resamples(data);
        tracing::debug!(
            replications = samples.replications(),
            seed = samples.seed(),
            lockstep = self.lockstep,
            "running bootstrap"
        );
        if self.lockstep {
            estimate_lockstep(samples, &estimators)
        } else {
            estimate(samples, &estimators)
        }
    }
}
