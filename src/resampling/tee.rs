use std::cell::RefCell;
use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::rc::Rc;

/// Shared state behind every branch of one [`tee`].
///
/// `buffer[0]` is the item at absolute position `offset`. An item stays
/// buffered until every live branch has moved past it.
struct Shared<I: Iterator> {
    source: I,
    buffer: VecDeque<Rc<I::Item>>,
    offset: usize,
    cursors: Vec<Option<usize>>,
    exhausted: bool,
}

impl<I: Iterator> Shared<I> {
    fn fetch(&mut self, branch: usize) -> Option<Rc<I::Item>> {
        let pos = self.cursors[branch]?;
        let idx = pos - self.offset;

        let item = if idx < self.buffer.len() {
            Rc::clone(&self.buffer[idx])
        } else {
            if self.exhausted {
                return None;
            }
            match self.source.next() {
                Some(v) => {
                    let item = Rc::new(v);
                    self.buffer.push_back(Rc::clone(&item));
                    item
                }
                None => {
                    self.exhausted = true;
                    return None;
                }
            }
        };

        self.cursors[branch] = Some(pos + 1);
        self.release();
        Some(item)
    }

    fn release(&mut self) {
        let slowest = self.cursors.iter().flatten().min().copied();
        let keep_from = slowest.unwrap_or(self.offset + self.buffer.len());
        while self.offset < keep_from && self.buffer.pop_front().is_some() {
            self.offset += 1;
        }
    }

    fn remaining(&self, branch: usize) -> (usize, Option<usize>) {
        let Some(pos) = self.cursors[branch] else {
            return (0, Some(0));
        };
        let buffered = self.offset + self.buffer.len() - pos;
        if self.exhausted {
            return (buffered, Some(buffered));
        }
        let (lo, hi) = self.source.size_hint();
        (
            buffered.saturating_add(lo),
            hi.and_then(|h| h.checked_add(buffered)),
        )
    }
}

/// One independent reader over a [`tee`]'d source.
pub struct TeeBranch<I: Iterator> {
    shared: Rc<RefCell<Shared<I>>>,
    index: usize,
}

impl<I: Iterator> Iterator for TeeBranch<I> {
    type Item = Rc<I::Item>;

    fn next(&mut self) -> Option<Rc<I::Item>> {
        self.shared.borrow_mut().fetch(self.index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.shared.borrow().remaining(self.index)
    }
}

impl<I: Iterator> FusedIterator for TeeBranch<I> {}

impl<I: Iterator> Drop for TeeBranch<I> {
    fn drop(&mut self) {
        let mut shared = self.shared.borrow_mut();
        shared.cursors[self.index] = None;
        shared.release();
    }
}

/// Splits `source` into `n` branches that each observe the same items.
///
/// The source is pulled at most once per item. Items are handed out as
/// `Rc`s so no branch re-generates or copies them.
pub fn tee<I: IntoIterator>(source: I, n: usize) -> Vec<TeeBranch<I::IntoIter>> {
    let shared = Rc::new(RefCell::new(Shared {
        source: source.into_iter(),
        buffer: VecDeque::new(),
        offset: 0,
        cursors: vec![Some(0); n],
        exhausted: false,
    }));
    (0..n)
        .map(|index| TeeBranch {
            shared: Rc::clone(&shared),
            index,
        })
        .collect()
}
