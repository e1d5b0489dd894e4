use crate::core::{BootstrapError, Result};
use crate::estimation::{EstimatorSet, SamplingDistribution, SamplingDistributions};
use crate::resampling::tee;

/// Upper bound on the per-column reservation taken from a size hint.
const MAX_INITIAL_RESERVE: usize = 4096;

fn ensure_estimators(estimators: &EstimatorSet) -> Result<()> {
    if estimators.is_empty() {
        return Err(BootstrapError::invalid_input(
            "at least one estimator is required",
        ));
    }
    Ok(())
}

/// Computes the sampling distribution of every estimator over `samples`.
///
/// The sequence is fanned out into one branch per estimator plus one that
/// counts the samples, so every estimator sees the identical samples while
/// the source is pulled exactly once. Each resulting array has exactly as
/// many values as `samples` produced; an empty sequence gives empty arrays.
pub fn estimate<S, T>(samples: S, estimators: &EstimatorSet) -> Result<SamplingDistributions>
where
    S: IntoIterator<Item = T>,
    T: AsRef<[f64]>,
{
    ensure_estimators(estimators)?;

    let mut branches = tee(samples, estimators.len() + 1);
    let counter = branches.remove(0);
    let num_samples = counter.count();
    tracing::debug!(
        samples = num_samples,
        estimators = estimators.len(),
        "estimating sampling distributions"
    );

    let entries = estimators
        .iter()
        .zip(branches)
        .map(|(estimator, branch)| {
            let mut values = Vec::with_capacity(num_samples);
            values.extend(branch.map(|sample| {
                let sample: &[f64] = (*sample).as_ref();
                estimator.estimate(sample)
            }));
            tracing::trace!(name = estimator.name(), "estimator done");
            SamplingDistribution::new(estimator.name(), values)
        })
        .collect();

    Ok(SamplingDistributions::from_entries(entries))
}

/// Single-pass variant of [`estimate`].
///
/// Each sample is handed to every estimator as soon as it is produced and
/// then dropped, so only one sample is held at a time. The output columns
/// still grow by one value per sample and estimator. Results are identical
/// to [`estimate`].
pub fn estimate_lockstep<S, T>(
    samples: S,
    estimators: &EstimatorSet,
) -> Result<SamplingDistributions>
where
    S: IntoIterator<Item = T>,
    T: AsRef<[f64]>,
{
    ensure_estimators(estimators)?;

    let samples = samples.into_iter();
    let (hint, _) = samples.size_hint();
    let reserve = hint.min(MAX_INITIAL_RESERVE);
    let mut columns: Vec<Vec<f64>> = (0..estimators.len())
        .map(|_| Vec::with_capacity(reserve))
        .collect();

    for sample in samples {
        let sample = sample.as_ref();
        for (column, estimator) in columns.iter_mut().zip(estimators.iter()) {
            column.push(estimator.estimate(sample));
        }
    }
    tracing::debug!(
        samples = columns.first().map_or(0, Vec::len),
        estimators = estimators.len(),
        "estimated sampling distributions in lockstep"
    );

    let entries = estimators
        .iter()
        .zip(columns)
        .map(|(estimator, values)| SamplingDistribution::new(estimator.name(), values))
        .collect();

    Ok(SamplingDistributions::from_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::estimators::{Statistic, named};
    use crate::resampling::{resample, resample_seeded};
    use crate::testing::dummies::five_samples;
    use crate::testing::stubs::{CountingSource, RecordingEstimator};
    use crate::utils::math;

    fn mean_and_std() -> EstimatorSet {
        EstimatorSet::new()
            .with(Statistic::Mean)
            .unwrap()
            .with(Statistic::StdDev)
            .unwrap()
    }

    #[test]
    fn mean_over_five_samples() {
        let samples = five_samples();
        let set = EstimatorSet::new().with(Statistic::Mean).unwrap();
        let out = estimate(samples.clone(), &set).unwrap();

        assert_eq!(out.len(), 1);
        let means = out.values("mean").unwrap();
        assert_eq!(means.len(), 5);
        for (m, s) in means.iter().zip(&samples) {
            assert!((m - math::mean(s)).abs() < 1e-15);
        }
    }

    #[test]
    fn estimators_observe_the_same_samples() {
        let a = RecordingEstimator::new("a");
        let b = RecordingEstimator::new("b");
        let (seen_a, seen_b) = (a.seen(), b.seen());
        let set = EstimatorSet::new().with(a).unwrap().with(b).unwrap();

        let out = estimate(resample([1.0, 2.0, 3.0, 4.0], 8).unwrap(), &set).unwrap();
        assert_eq!(out.values("a").unwrap(), &[4.0; 8]);
        assert_eq!(out.values("b").unwrap().len(), 8);
        assert_eq!(seen_a.borrow().len(), 8);
        assert_eq!(*seen_a.borrow(), *seen_b.borrow());
    }

    #[test]
    fn empty_sequence_gives_empty_arrays() {
        let out = estimate(Vec::<Vec<f64>>::new(), &mean_and_std()).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|d| d.is_empty()));
    }

    #[test]
    fn empty_estimator_set_is_rejected() {
        let err = estimate(vec![vec![1.0]], &EstimatorSet::new()).unwrap_err();
        assert!(matches!(err, BootstrapError::InvalidInput(_)));
        assert!(estimate_lockstep(vec![vec![1.0]], &EstimatorSet::new()).is_err());
    }

    #[test]
    fn results_follow_registration_order() {
        let set = EstimatorSet::new()
            .with(Statistic::Max)
            .unwrap()
            .with(Statistic::Min)
            .unwrap();
        let out = estimate(vec![[1.0, 5.0], [2.0, 3.0]], &set).unwrap();
        assert_eq!(out.names().collect::<Vec<_>>(), vec!["max", "min"]);
        assert_eq!(out.values("max").unwrap(), &[5.0, 3.0]);
        assert_eq!(out.values("min").unwrap(), &[1.0, 2.0]);
    }

    #[test]
    fn source_is_consumed_once() {
        for lockstep in [false, true] {
            let source = CountingSource::new(five_samples());
            let pulls = source.pulls();
            let out = if lockstep {
                estimate_lockstep(source, &mean_and_std()).unwrap()
            } else {
                estimate(source, &mean_and_std()).unwrap()
            };
            assert_eq!(out.values("std_dev").unwrap().len(), 5);
            assert_eq!(pulls.get(), 5, "lockstep={lockstep}");
        }
    }

    #[test]
    fn lockstep_matches_tee_for_same_seed() {
        let set = mean_and_std();
        let data = [0.1, 0.7, 2.3, 5.0];
        let a = estimate(resample_seeded(data, 50, 77).unwrap(), &set).unwrap();
        let b = estimate_lockstep(resample_seeded(data, 50, 77).unwrap(), &set).unwrap();
        assert_eq!(a, b);
    }

    /// Yields a few samples while claiming far more in its size hint.
    struct OverstatedHint(usize);

    impl Iterator for OverstatedHint {
        type Item = Vec<f64>;

        fn next(&mut self) -> Option<Vec<f64>> {
            self.0 = self.0.checked_sub(1)?;
            Some(vec![1.0, 2.0])
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (usize::MAX, None)
        }
    }

    #[test]
    fn lockstep_does_not_reserve_from_huge_hints() {
        let set = mean_and_std();
        let out = estimate_lockstep(OverstatedHint(3), &set).unwrap();
        assert_eq!(out.values("mean").unwrap(), &[1.5; 3]);

        let huge = resample_seeded([1.0, 2.0], i64::MAX, 1).unwrap();
        assert_eq!(huge.len(), i64::MAX as usize);
        let out = estimate_lockstep(huge.take(3), &set).unwrap();
        assert_eq!(out.values("std_dev").unwrap().len(), 3);
    }

    #[test]
    fn undefined_estimates_serialize_as_null() {
        let set = EstimatorSet::new().with(Statistic::StdDev).unwrap();
        let out = estimate(resample_seeded([4.2], 3, 1).unwrap(), &set).unwrap();
        assert!(out.values("std_dev").unwrap().iter().all(|v| v.is_nan()));
        assert_eq!(
            out.to_json().unwrap(),
            serde_json::json!({"std_dev": [null, null, null]})
        );
    }

    #[test]
    #[should_panic(expected = "estimator failure")]
    fn estimator_panics_propagate() {
        let set = EstimatorSet::new()
            .with(named("boom", |_: &[f64]| panic!("estimator failure")))
            .unwrap();
        let _ = estimate(vec![vec![1.0]], &set);
    }
}
