use crate::{LinkedSequence, SplicePolicy};

impl<T, S, S2> PartialEq<LinkedSequence<T, S2>> for LinkedSequence<T, S>
where
    T: PartialEq,
    S: SplicePolicy,
    S2: SplicePolicy,
{
    fn eq(&self, other: &LinkedSequence<T, S2>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, S: SplicePolicy> Eq for LinkedSequence<T, S> {}

impl<T, S> PartialEq<[T]> for LinkedSequence<T, S>
where
    T: PartialEq,
    S: SplicePolicy,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, S, const N: usize> PartialEq<[T; N]> for LinkedSequence<T, S>
where
    T: PartialEq,
    S: SplicePolicy,
{
    fn eq(&self, other: &[T; N]) -> bool {
        self == other.as_slice()
    }
}
