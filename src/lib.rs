//! Bootstrap resampling and sampling-distribution estimation.
//!
//! [`resample`] draws `B` same-sized samples with replacement from a
//! dataset; [`estimate`] applies named estimators to every sample and
//! returns each estimator's sampling distribution.
//!
//! ```
//! use bootstrap_sampling::{EstimatorSet, Statistic, estimate, resample_seeded};
//!
//! let samples = resample_seeded([1.0, 2.0, 3.0], 5, 42).unwrap();
//! let estimators = EstimatorSet::new().with(Statistic::Mean).unwrap();
//! let out = estimate(samples, &estimators).unwrap();
//! assert_eq!(out.values("mean").unwrap().len(), 5);
//! ```

pub mod config;
pub mod core;
pub mod estimation;
pub mod resampling;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use crate::core::{BootstrapError, Result};
pub use config::BootstrapConfig;
pub use estimation::{
    DuplicatePolicy, Estimator, EstimatorSet, SamplingDistribution, SamplingDistributions,
    Statistic, estimate, estimate_lockstep, named,
};
pub use resampling::{Dataset, Resamples, antithetic, resample, resample_seeded};
