use std::cell::Cell;
use std::rc::Rc;

/// Single-pass sample source that counts how many items were pulled.
pub struct CountingSource {
    samples: std::vec::IntoIter<Vec<f64>>,
    pulls: Rc<Cell<usize>>,
}

impl CountingSource {
    pub fn new(samples: Vec<Vec<f64>>) -> Self {
        Self {
            samples: samples.into_iter(),
            pulls: Rc::new(Cell::new(0)),
        }
    }

    /// Shared handle to the pull counter, readable after the source is moved.
    pub fn pulls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.pulls)
    }
}

impl Iterator for CountingSource {
    type Item = Vec<f64>;

    fn next(&mut self) -> Option<Vec<f64>> {
        let item = self.samples.next()?;
        self.pulls.set(self.pulls.get() + 1);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.samples.size_hint()
    }
}
