pub mod counting_source;
pub mod recording_estimator;

pub use counting_source::CountingSource;
pub use recording_estimator::RecordingEstimator;
