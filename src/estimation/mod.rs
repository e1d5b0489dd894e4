pub mod estimators;

mod estimator_set;
mod runner;
mod sampling_distribution;

pub use estimator_set::{DuplicatePolicy, EstimatorSet};
pub use estimators::{Estimator, FnEstimator, Quantile, Statistic, named};
pub use runner::{estimate, estimate_lockstep};
pub use sampling_distribution::{SamplingDistribution, SamplingDistributions};
