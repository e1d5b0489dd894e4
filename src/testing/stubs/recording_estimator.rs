use crate::estimation::Estimator;
use std::cell::RefCell;
use std::rc::Rc;

/// Estimator that remembers every sample it was applied to and returns the
/// sample length.
pub struct RecordingEstimator {
    name: String,
    seen: Rc<RefCell<Vec<Vec<f64>>>>,
}

impl RecordingEstimator {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            seen: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn seen(&self) -> Rc<RefCell<Vec<Vec<f64>>>> {
        Rc::clone(&self.seen)
    }
}

impl Estimator for RecordingEstimator {
    fn name(&self) -> &str {
        &self.name
    }

    fn estimate(&self, sample: &[f64]) -> f64 {
        self.seen.borrow_mut().push(sample.to_vec());
        sample.len() as f64
    }
}
