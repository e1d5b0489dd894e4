mod dataset;
mod resamples;
mod tee;

pub use dataset::{Dataset, antithetic};
pub use resamples::{Resamples, resample, resample_seeded, resample_with_rng};
pub use tee::{TeeBranch, tee};
