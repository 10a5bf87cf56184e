use crate::LinkedSequence;
use alloc::vec::Vec;

impl<T, const N: usize> From<[T; N]> for LinkedSequence<T> {
    fn from(values: [T; N]) -> Self {
        let mut seq = Self::new();
        seq.append_all(values);
        seq
    }
}

impl<T> From<Vec<T>> for LinkedSequence<T> {
    fn from(values: Vec<T>) -> Self {
        let mut seq = Self::new();
        seq.append_all(values);
        seq
    }
}
