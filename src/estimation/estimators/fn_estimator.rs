use crate::estimation::estimators::Estimator;
use std::fmt;

/// Caller supplied closure registered under a name.
#[derive(Clone)]
pub struct FnEstimator<F> {
    name: String,
    f: F,
}

impl<F> FnEstimator<F>
where
    F: Fn(&[f64]) -> f64,
{
    pub fn new<N: Into<String>>(name: N, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Estimator for FnEstimator<F>
where
    F: Fn(&[f64]) -> f64,
{
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn estimate(&self, sample: &[f64]) -> f64 {
        (self.f)(sample)
    }
}

impl<F> fmt::Debug for FnEstimator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEstimator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`FnEstimator::new`].
pub fn named<N, F>(name: N, f: F) -> FnEstimator<F>
where
    N: Into<String>,
    F: Fn(&[f64]) -> f64,
{
    FnEstimator::new(name, f)
}
