use crate::{
    Relink, SequenceError, SplicePolicy,
    iter::{Iter, IterMut},
    node::{Link, Node, release_chain},
    splice::Unlink,
};
use alloc::boxed::Box;

/// `LinkedSequence` is a mutable ordered collection of elements backed by a chain of singly linked nodes.
///
/// The sequence exclusively owns its front node which transitively owns the entire chain.
/// It provides list semantics over the chain:
/// * indexed access with [`get`], [`get_mut`] and [`set`],
/// * insertion with [`add`], [`insert`] and [`push_front`],
/// * removal with [`remove`], [`remove_at`], [`pop_front`] and [`clear`],
/// * search with [`contains`] and [`index_of`],
/// * enumeration with [`iter`] and [`iter_mut`], and copying out with [`copy_to`].
///
/// Positional operations walk the chain from the front; hence, they run in time linear in the position.
///
/// The second generic argument `S` is the [`SplicePolicy`] deciding how [`remove`] unlinks a matched
/// node which is not the front. It defaults to [`Relink`] which keeps the remainder of the sequence.
///
/// # Examples
///
/// ```rust
/// use orx_linked_sequence::*;
///
/// let mut seq = linked_seq!['a', 'b', 'd'];
///
/// seq.insert(2, 'c').unwrap();
/// assert_eq!(seq, ['a', 'b', 'c', 'd']);
///
/// assert_eq!(seq.get(2), Ok(&'c'));
/// assert_eq!(seq.index_of(&'d'), Some(3));
///
/// assert!(seq.remove(&'b'));
/// assert_eq!(seq.remove_at(0), Ok('a'));
/// assert_eq!(seq, ['c', 'd']);
///
/// assert_eq!(
///     seq.get(2),
///     Err(SequenceError::IndexOutOfRange { index: 2, len: 2 })
/// );
/// ```
///
/// [`get`]: LinkedSequence::get
/// [`get_mut`]: LinkedSequence::get_mut
/// [`set`]: LinkedSequence::set
/// [`add`]: LinkedSequence::add
/// [`insert`]: LinkedSequence::insert
/// [`push_front`]: LinkedSequence::push_front
/// [`remove`]: LinkedSequence::remove
/// [`remove_at`]: LinkedSequence::remove_at
/// [`pop_front`]: LinkedSequence::pop_front
/// [`clear`]: LinkedSequence::clear
/// [`contains`]: LinkedSequence::contains
/// [`index_of`]: LinkedSequence::index_of
/// [`iter`]: LinkedSequence::iter
/// [`iter_mut`]: LinkedSequence::iter_mut
/// [`copy_to`]: LinkedSequence::copy_to
pub struct LinkedSequence<T, S = Relink>
where
    S: SplicePolicy,
{
    head: Link<T>,
    len: usize,
    policy: S,
}

impl<T> LinkedSequence<T, Relink> {
    /// Creates a new empty sequence with the default [`Relink`] splice policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_sequence::*;
    ///
    /// let seq = LinkedSequence::<char>::new();
    /// assert!(seq.is_empty());
    /// assert_eq!(seq.len(), 0);
    /// ```
    pub fn new() -> Self {
        Self::with_splice_policy(Relink)
    }
}

impl<T, S> LinkedSequence<T, S>
where
    S: SplicePolicy,
{
    /// Creates a new empty sequence using the splice policy `S`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_sequence::*;
    ///
    /// let mut seq = LinkedSequence::with_splice_policy(Truncate);
    /// seq.extend([1, 2, 3]);
    ///
    /// assert!(seq.remove(&2));
    /// assert_eq!(seq, [1]);
    /// ```
    pub fn with_splice_policy(policy: S) -> Self {
        Self {
            head: None,
            len: 0,
            policy,
        }
    }

    pub(crate) fn into_splice_policy<S2>(mut self, policy: S2) -> LinkedSequence<T, S2>
    where
        S2: SplicePolicy,
    {
        LinkedSequence {
            head: self.head.take(),
            len: core::mem::take(&mut self.len),
            policy,
        }
    }

    /// Returns a reference to the splice policy of the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_sequence::*;
    ///
    /// let seq = LinkedSequence::<char, _>::with_splice_policy(Truncate);
    /// assert_eq!(seq.splice_policy(), &Truncate);
    /// ```
    pub fn splice_policy(&self) -> &S {
        &self.policy
    }

    // get

    /// Returns the number of elements in the sequence.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether or not the sequence is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether or not the sequence is read-only, which is never the case.
    #[inline(always)]
    pub const fn is_read_only(&self) -> bool {
        false
    }

    /// Returns a reference to the front element; None if the sequence is empty.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(Node::data)
    }

    /// Returns a mutable reference to the front element; None if the sequence is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(Node::data_mut)
    }

    /// Returns a reference to the element at the given `index`.
    ///
    /// Walks `index` links forward from the front; hence, this is a O(index) operation.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_sequence::*;
    ///
    /// let seq = linked_seq![3, 5, 7];
    ///
    /// assert_eq!(seq.get(1), Ok(&5));
    /// assert_eq!(seq.get(3), Err(SequenceError::IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, SequenceError> {
        let error = self.out_of_range(index);
        match index < self.len {
            true => self.node_at(index).map(Node::data).ok_or(error),
            false => Err(error),
        }
    }

    /// Returns a mutable reference to the element at the given `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, SequenceError> {
        let error = self.out_of_range(index);
        match index < self.len {
            true => self
                .link_at_mut(index)
                .as_deref_mut()
                .map(Node::data_mut)
                .ok_or(error),
            false => Err(error),
        }
    }

    /// Replaces the element at the given `index` with the `value` and returns the replaced element.
    ///
    /// The element is replaced in place; the length of the sequence does not change.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_sequence::*;
    ///
    /// let mut seq = linked_seq!['a', 'x', 'c'];
    ///
    /// assert_eq!(seq.set(1, 'b'), Ok('x'));
    /// assert_eq!(seq, ['a', 'b', 'c']);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T, SequenceError> {
        self.get_mut(index)
            .map(|data| core::mem::replace(data, value))
    }

    /// Returns an iterator over references to the elements, from the front to the back.
    ///
    /// Every call starts a fresh traversal from the front.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref(), self.len)
    }

    /// Returns an iterator over mutable references to the elements, from the front to the back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.as_deref_mut(), self.len)
    }

    /// Returns true if the sequence contains an element equal to the given `item`.
    ///
    /// This is a linear scan from the front.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == item)
    }

    /// Returns the position of the first element equal to the given `item`; None if there is no such element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_sequence::*;
    ///
    /// let seq = linked_seq!["x", "y", "x"];
    ///
    /// assert_eq!(seq.index_of(&"x"), Some(0));
    /// assert_eq!(seq.index_of(&"y"), Some(1));
    /// assert_eq!(seq.index_of(&"z"), None);
    /// ```
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == item)
    }

    /// Clones all elements of the sequence, in order, into `buffer[start_offset..start_offset + self.len()]`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InsufficientCapacity`] if the buffer cannot hold all elements starting
    /// at `start_offset`; the buffer is not modified in this case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_sequence::*;
    ///
    /// let seq = linked_seq![1, 2, 3];
    ///
    /// let mut buffer = [0; 5];
    /// seq.copy_to(&mut buffer, 1).unwrap();
    /// assert_eq!(buffer, [0, 1, 2, 3, 0]);
    ///
    /// assert_eq!(
    ///     seq.copy_to(&mut buffer, 3),
    ///     Err(SequenceError::InsufficientCapacity { required: 6, available: 5 })
    /// );
    /// ```
    pub fn copy_to(&self, buffer: &mut [T], start_offset: usize) -> Result<(), SequenceError>
    where
        T: Clone,
    {
        let available = buffer.len();
        let required = start_offset.saturating_add(self.len);
        let destination =
            buffer
                .get_mut(start_offset..required)
                .ok_or(SequenceError::InsufficientCapacity {
                    required,
                    available,
                })?;

        for (slot, item) in destination.iter_mut().zip(self.iter()) {
            slot.clone_from(item);
        }

        Ok(())
    }

    // mut

    /// Appends the `item` to the back of the sequence.
    ///
    /// The chain is walked to its last node; hence, this is a O(n) operation.
    pub fn add(&mut self, item: T) {
        let len = self.len;
        self.link_new_node(len, item);
    }

    /// Pushes the `item` to the front of the sequence in constant time.
    pub fn push_front(&mut self, item: T) {
        self.link_new_node(0, item);
    }

    /// Inserts the `item` at the given `index`, shifting the element currently at `index` and all
    /// elements after it one position towards the back.
    ///
    /// Inserting at `self.len()` is equivalent to [`add`](LinkedSequence::add).
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if `index > self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_sequence::*;
    ///
    /// let mut seq = linked_seq![1, 3];
    ///
    /// seq.insert(0, 0).unwrap();
    /// seq.insert(2, 2).unwrap();
    /// seq.insert(4, 4).unwrap();
    /// assert_eq!(seq, [0, 1, 2, 3, 4]);
    ///
    /// assert!(seq.insert(6, 6).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), SequenceError> {
        match index <= self.len {
            true => {
                self.link_new_node(index, item);
                Ok(())
            }
            false => Err(self.out_of_range(index)),
        }
    }

    /// Removes and returns the front element; returns None if the sequence is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let data = take_node(&mut self.head);
        if data.is_some() {
            self.len -= 1;
        }
        data
    }

    /// Removes and returns the element at the given `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_sequence::*;
    ///
    /// let mut seq = linked_seq!['a', 'b', 'c'];
    ///
    /// assert_eq!(seq.remove_at(2), Ok('c'));
    /// assert_eq!(seq.remove_at(0), Ok('a'));
    /// assert_eq!(seq, ['b']);
    ///
    /// assert!(seq.remove_at(1).is_err());
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, SequenceError> {
        let error = self.out_of_range(index);
        match index < self.len {
            true => {
                let data = take_node(self.link_at_mut(index)).ok_or(error)?;
                self.len -= 1;
                Ok(data)
            }
            false => Err(error),
        }
    }

    /// Removes the first element equal to the given `item`.
    ///
    /// Returns false and leaves the sequence untouched if there is no such element; true otherwise.
    ///
    /// If the matched element is at the front, the front is simply replaced by its successor.
    /// Otherwise, the matched node is unlinked from its predecessor by the splice policy `S`:
    /// * with [`Relink`] only the matched element is removed;
    /// * with [`Truncate`](crate::Truncate) the matched element is removed together with all elements following it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_linked_sequence::*;
    ///
    /// let mut seq = linked_seq![1, 2, 3];
    /// assert!(seq.remove(&2));
    /// assert!(!seq.remove(&2));
    /// assert_eq!(seq, [1, 3]);
    ///
    /// let mut seq: LinkedSequence<_, Truncate> = [1, 2, 3].into_iter().collect();
    /// assert!(seq.remove(&2));
    /// assert_eq!(seq, [1]);
    /// ```
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(item) {
            None => false,
            Some(0) => self.pop_front().is_some(),
            Some(position) => {
                let num_detached = <S as Unlink>::unlink(self.link_at_mut(position));
                self.len -= num_detached;
                true
            }
        }
    }

    /// Removes all elements of the sequence.
    pub fn clear(&mut self) {
        release_chain(self.head.take());
        self.len = 0;
    }

    // helpers

    fn out_of_range(&self, index: usize) -> SequenceError {
        SequenceError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }

    fn node_at(&self, index: usize) -> Option<&Node<T>> {
        let mut current = self.head.as_deref();
        for _ in 0..index {
            current = current?.next();
        }
        current
    }

    /// Returns the link owning the node at the given `position`, which is the link of its predecessor,
    /// or the front link if `position` is zero.
    ///
    /// For `position == len` this is the empty link following the last node.
    fn link_at_mut(&mut self, position: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..position {
            match link {
                Some(node) => link = node.next_mut(),
                None => break,
            }
        }
        link
    }

    fn link_new_node(&mut self, position: usize, item: T) {
        let link = self.link_at_mut(position);
        let next = link.take();
        *link = Some(Box::new(Node::new(item, next)));
        self.len += 1;
    }

    /// Appends all `items` in order, walking the chain to its end only once.
    pub(crate) fn append_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let len = self.len;
        let mut tail = self.link_at_mut(len);
        let mut num_added = 0;
        for item in items {
            let node = tail.insert(Box::new(Node::new_free_node(item)));
            tail = node.next_mut();
            num_added += 1;
        }
        self.len += num_added;
    }
}

/// Detaches the node owned by `link`, links its successor in its place and returns its data.
fn take_node<T>(link: &mut Link<T>) -> Option<T> {
    link.take().map(|node| {
        let (data, next) = (*node).into_inner();
        *link = next;
        data
    })
}

impl<T, S> Drop for LinkedSequence<T, S>
where
    S: SplicePolicy,
{
    fn drop(&mut self) {
        self.clear();
    }
}
