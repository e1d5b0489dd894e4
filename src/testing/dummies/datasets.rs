use crate::resampling::Dataset;

/// `[1.0, 2.0, 3.0]`
pub fn small_dataset() -> Dataset {
    Dataset::try_from_iter([1.0, 2.0, 3.0]).expect("non-empty")
}

/// Five fixed samples of length three, drawn from `{1.0, 2.0, 3.0}`.
pub fn five_samples() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 1.0, 2.0],
        vec![3.0, 2.0, 1.0],
        vec![2.0, 2.0, 2.0],
        vec![3.0, 3.0, 1.0],
        vec![1.0, 3.0, 3.0],
    ]
}
