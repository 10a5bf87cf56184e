use crate::{LinkedSequence, SplicePolicy};

impl<T, S> FromIterator<T> for LinkedSequence<T, S>
where
    S: SplicePolicy,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::default();
        seq.append_all(iter);
        seq
    }
}

impl<T, S> Extend<T> for LinkedSequence<T, S>
where
    S: SplicePolicy,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_all(iter);
    }
}

impl<'a, T, S> Extend<&'a T> for LinkedSequence<T, S>
where
    T: Copy + 'a,
    S: SplicePolicy,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.append_all(iter.into_iter().copied());
    }
}
