//! Fixed-capacity storage for the code points of the line being built.
//!
//! The buffer is allocated once per [`LineIter`](crate::LineIter) and reused
//! for its whole life. Emitting a line shifts the unconsumed tail to the front
//! instead of reallocating.

#[derive(Clone, Debug)]
pub(crate) struct RuneBuffer {
    runes: Box<[char]>,
    length: usize,
}

impl RuneBuffer {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            runes: vec!['\0'; capacity].into_boxed_slice(),
            length: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize { self.runes.len() }

    pub(crate) fn len(&self) -> usize { self.length }

    pub(crate) fn is_empty(&self) -> bool { self.length == 0 }

    /// The code points currently held, oldest first.
    pub(crate) fn active(&self) -> &[char] { &self.runes[..self.length] }

    /// Append all of `runes`, or none of them if they would not fit.
    pub(crate) fn add(&mut self, runes: &[char]) -> bool {
        let end = self.length + runes.len();
        if end > self.runes.len() {
            return false;
        }
        self.runes[self.length..end].copy_from_slice(runes);
        self.length = end;
        true
    }

    /// Drop the first `start` code points and move the rest to the front.
    pub(crate) fn shift(&mut self, start: usize) {
        if start >= self.length {
            self.length = 0;
            return;
        }
        self.runes.copy_within(start..self.length, 0);
        self.length -= start;
    }

    pub(crate) fn clear(&mut self) { self.length = 0; }
}
