use alloc::boxed::Box;
use core::fmt::Debug;

/// Owning link to a node of the chain; `None` marks the end of the chain.
///
/// A link exclusively owns the node it points to, and hence, transitively the entire tail of the chain.
/// Nodes never leave the crate; the only way to drop a chain is through `release_chain`.
pub type Link<T> = Option<Box<Node<T>>>;

/// Node of the linked sequence, holding one element and the owning link to its successor.
pub struct Node<T> {
    data: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Creates a new node with the given `data` which is linked to the given `next` chain.
    pub(crate) fn new(data: T, next: Link<T>) -> Self {
        Self { data, next }
    }

    /// Creates a new node with the given `data` but with no successor.
    pub(crate) fn new_free_node(data: T) -> Self {
        Self { data, next: None }
    }

    // consuming

    /// Destructs the node into its data and the link to its successor.
    pub(crate) fn into_inner(self) -> (T, Link<T>) {
        (self.data, self.next)
    }

    // ref

    /// Returns a reference to the data of the node.
    #[inline(always)]
    pub(crate) fn data(&self) -> &T {
        &self.data
    }

    /// Returns a reference to the successor of the node; None if this is the last node of the chain.
    #[inline(always)]
    pub(crate) fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    // mut

    /// Returns a mutable reference to the data of the node.
    #[inline(always)]
    pub(crate) fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Returns a mutable reference to the link owning the successor of the node.
    #[inline(always)]
    pub(crate) fn next_mut(&mut self) -> &mut Link<T> {
        &mut self.next
    }

    /// Splits the node into a mutable reference to its data and the successor node.
    pub(crate) fn split_mut(&mut self) -> (&mut T, Option<&mut Node<T>>) {
        (&mut self.data, self.next.as_deref_mut())
    }
}

/// Drops all nodes of the chain owned by `link` one by one and returns the number of dropped nodes.
///
/// Boxed chains would otherwise be dropped recursively, which overflows the stack on long chains.
pub(crate) fn release_chain<T>(link: Link<T>) -> usize {
    let mut num_released = 0;
    let mut current = link;
    while let Some(mut node) = current {
        current = node.next.take();
        num_released += 1;
    }
    num_released
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("next", &self.next)
            .finish()
    }
}
