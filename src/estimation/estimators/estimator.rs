/// Named scalar statistic computed over one sample.
///
/// Implementations must be pure: the same sample always yields the same
/// value. Undefined results are reported as `NaN`; any panic raised inside
/// [`estimate`](Estimator::estimate) propagates to the caller unchanged.
pub trait Estimator {
    /// Stable key under which this estimator's results are reported.
    fn name(&self) -> &str;

    /// Reduces `sample` to a single value.
    fn estimate(&self, sample: &[f64]) -> f64;
}

impl<E: Estimator + ?Sized> Estimator for Box<E> {
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn estimate(&self, sample: &[f64]) -> f64 {
        (**self).estimate(sample)
    }
}
