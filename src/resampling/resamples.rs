use crate::core::{BootstrapError, Result};
use crate::resampling::Dataset;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::iter::FusedIterator;

/// Lazy, single-pass sequence of bootstrap resamples.
///
/// Yields exactly [`Resamples::replications`] arrays. When the requested
/// repetition count is `<= 1` the only element is the original dataset,
/// untouched. Otherwise each element has the dataset's length and every
/// position is drawn uniformly, with replacement, from the dataset.
#[derive(Debug)]
pub struct Resamples<R: Rng = StdRng> {
    data: Dataset,
    rng: R,
    seed: Option<u64>,
    identity: bool,
    total: usize,
    produced: usize,
}

impl<R: Rng> Resamples<R> {
    fn new(data: Dataset, replications: i64, rng: R, seed: Option<u64>) -> Self {
        let identity = replications <= 1;
        let total = if identity {
            1
        } else {
            usize::try_from(replications).unwrap_or(usize::MAX)
        };
        tracing::debug!(
            replications,
            total,
            identity,
            data_len = data.len(),
            "resampling dataset"
        );
        Self {
            data,
            rng,
            seed,
            identity,
            total,
            produced: 0,
        }
    }

    /// The dataset being resampled.
    pub fn dataset(&self) -> &Dataset {
        &self.data
    }

    /// Number of arrays this sequence yields in total.
    #[inline]
    pub fn replications(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.identity
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn draw(&mut self) -> Vec<f64> {
        let n = self.data.len();
        let values = self.data.values();
        (0..n).map(|_| values[self.rng.random_range(0..n)]).collect()
    }
}

impl Resamples<StdRng> {
    /// Reproducible resamples of an already validated dataset.
    pub fn seeded(data: &Dataset, replications: i64, seed: u64) -> Self {
        Self::new(
            data.clone(),
            replications,
            StdRng::seed_from_u64(seed),
            Some(seed),
        )
    }

    /// Rewinds the sequence so it yields the same draws again.
    ///
    /// Only sequences that own their seed can be replayed.
    pub fn restart(&mut self) -> Result<()> {
        let Some(seed) = self.seed else {
            return Err(BootstrapError::invalid_input(
                "resamples without a seed cannot be restarted",
            ));
        };
        self.rng = StdRng::seed_from_u64(seed);
        self.produced = 0;
        Ok(())
    }
}

impl<R: Rng> Iterator for Resamples<R> {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Vec<f64>> {
        if self.produced >= self.total {
            return None;
        }
        self.produced += 1;
        if self.identity {
            Some(self.data.to_vec())
        } else {
            Some(self.draw())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.produced;
        (left, Some(left))
    }
}

impl<R: Rng> ExactSizeIterator for Resamples<R> {}

impl<R: Rng> FusedIterator for Resamples<R> {}

/// Draws `replications` bootstrap samples of `data`, seeded from the OS.
///
/// Fails with [`BootstrapError::InvalidInput`] when `data` is empty.
pub fn resample<I, T>(data: I, replications: i64) -> Result<Resamples<StdRng>>
where
    I: IntoIterator<Item = T>,
    T: Into<f64>,
{
    let seed: u64 = rand::rng().random();
    resample_seeded(data, replications, seed)
}

/// Like [`resample`], but reproducible for a given `seed`.
pub fn resample_seeded<I, T>(data: I, replications: i64, seed: u64) -> Result<Resamples<StdRng>>
where
    I: IntoIterator<Item = T>,
    T: Into<f64>,
{
    let data = Dataset::try_from_iter(data)?;
    Ok(Resamples::seeded(&data, replications, seed))
}

/// Resamples an already validated dataset with a caller supplied RNG.
pub fn resample_with_rng<R: Rng>(data: &Dataset, replications: i64, rng: R) -> Resamples<R> {
    Resamples::new(data.clone(), replications, rng, None)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_data(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(any::<f64>(), 1..=max_len)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn empty_data_always_fails(b in any::<i64>()) {
            let err = resample(Vec::<f64>::new(), b).unwrap_err();
            prop_assert!(matches!(err, BootstrapError::InvalidInput(_)));
        }

        #[test]
        fn small_counts_yield_the_data_once(data in any_data(100), b in i64::MIN..=1) {
            let out: Vec<Vec<f64>> = resample(data.clone(), b).unwrap().collect();
            prop_assert_eq!(out.len(), 1);
            let same = out[0].iter().zip(&data).all(|(x, y)| x.to_bits() == y.to_bits());
            prop_assert!(same && out[0].len() == data.len());
        }

        #[test]
        fn count_and_shape_follow_replications(data in any_data(100), b in 1_i64..=10) {
            let out: Vec<Vec<f64>> = resample(data.clone(), b).unwrap().collect();
            prop_assert_eq!(out.len() as i64, b);
            prop_assert!(out.iter().all(|s| s.len() == data.len()));
        }

        #[test]
        fn values_are_drawn_from_the_data(data in any_data(50), b in 2_i64..=10, seed in any::<u64>()) {
            let dataset = Dataset::try_from_iter(data).unwrap();
            for sample in Resamples::seeded(&dataset, b, seed) {
                prop_assert!(sample.iter().all(|v| dataset.contains(*v)));
            }
        }

        #[test]
        fn two_dimensional_data_is_flattened(
            rows in 1_usize..=10,
            cols in 1_usize..=10,
            b in 1_i64..=10,
            seed in any::<u64>(),
        ) {
            let grid: Vec<Vec<f64>> = (0..rows)
                .map(|r| (0..cols).map(|c| (r * cols + c) as f64).collect())
                .collect();
            let dataset = Dataset::from_rows(grid).unwrap();
            let out: Vec<Vec<f64>> = Resamples::seeded(&dataset, b, seed).collect();
            prop_assert_eq!(out.len() as i64, b);
            prop_assert!(out.iter().all(|s| s.len() == rows * cols));
        }
    }
}
