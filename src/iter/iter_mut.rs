use crate::node::Node;
use core::iter::FusedIterator;

/// Iterator over mutable references to the elements of a `LinkedSequence`, from the front to the back.
pub struct IterMut<'a, T> {
    current: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(front: Option<&'a mut Node<T>>, len: usize) -> Self {
        Self {
            current: front,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|node| {
            let (data, next) = node.split_mut();
            self.current = next;
            self.remaining -= 1;
            data
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
