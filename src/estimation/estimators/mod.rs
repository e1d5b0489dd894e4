mod estimator;
mod fn_estimator;
mod statistic;

pub use estimator::Estimator;
pub use fn_estimator::{FnEstimator, named};
pub use statistic::{Quantile, Statistic};
