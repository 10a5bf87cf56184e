use crate::{LinkedSequence, SplicePolicy};

impl<T, S> Clone for LinkedSequence<T, S>
where
    T: Clone,
    S: SplicePolicy,
{
    fn clone(&self) -> Self {
        let mut clone = Self::with_splice_policy(self.splice_policy().clone());
        clone.append_all(self.iter().cloned());
        clone
    }
}
