use crate::{
    LinkedSequence, SplicePolicy,
    iter::{IntoIter, Iter, IterMut},
};

impl<T, S> IntoIterator for LinkedSequence<T, S>
where
    S: SplicePolicy,
{
    type Item = T;

    type IntoIter = IntoIter<T, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, S> IntoIterator for &'a LinkedSequence<T, S>
where
    S: SplicePolicy,
{
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, S> IntoIterator for &'a mut LinkedSequence<T, S>
where
    S: SplicePolicy,
{
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
