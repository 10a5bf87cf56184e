use crate::{LinkedSequence, Relink, SplicePolicy};
use core::iter::FusedIterator;

/// Consuming iterator over the elements of a `LinkedSequence`, from the front to the back.
pub struct IntoIter<T, S = Relink>
where
    S: SplicePolicy,
{
    seq: LinkedSequence<T, S>,
}

impl<T, S> IntoIter<T, S>
where
    S: SplicePolicy,
{
    pub(crate) fn new(seq: LinkedSequence<T, S>) -> Self {
        Self { seq }
    }
}

impl<T, S> Iterator for IntoIter<T, S>
where
    S: SplicePolicy,
{
    type Item = T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.seq.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.seq.len(), Some(self.seq.len()))
    }
}

impl<T, S: SplicePolicy> ExactSizeIterator for IntoIter<T, S> {}

impl<T, S: SplicePolicy> FusedIterator for IntoIter<T, S> {}
