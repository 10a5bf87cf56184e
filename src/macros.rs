/// Creates a [`LinkedSequence`](crate::LinkedSequence) containing the given elements in order,
/// using the default [`Relink`](crate::Relink) splice policy.
///
/// # Examples
///
/// ```rust
/// use orx_linked_sequence::*;
///
/// let seq = linked_seq![1, 2, 3];
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq, [1, 2, 3]);
///
/// let empty: LinkedSequence<char> = linked_seq![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! linked_seq {
    () => {
        $crate::LinkedSequence::<_, $crate::Relink>::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::LinkedSequence::<_, $crate::Relink>::from([$($item),+])
    };
}
