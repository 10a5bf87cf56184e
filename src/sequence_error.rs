use core::fmt::Display;

/// Error cases of fallible operations on a `LinkedSequence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// IndexOutOfRange => The position is outside of the valid range of the operation.
    /// * `get`, `get_mut`, `set` and `remove_at` accept positions `0..len`,
    /// * `insert` accepts positions `0..=len`.
    IndexOutOfRange {
        /// The position that the operation was called with.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
    /// InsufficientCapacity => The destination buffer of `copy_to` cannot hold all elements of the
    /// sequence starting at the requested offset.
    InsufficientCapacity {
        /// Number of slots the destination must have; i.e., the start offset plus the length of the sequence.
        required: usize,
        /// Length of the destination buffer.
        available: usize,
    },
}

impl Display for SequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => write!(
                f,
                "IndexOutOfRange => Index {index} is out of range for the sequence of length {len}."
            ),
            Self::InsufficientCapacity {
                required,
                available,
            } => write!(
                f,
                "InsufficientCapacity => Destination requires at least {required} slots while it has {available}."
            ),
        }
    }
}

impl core::error::Error for SequenceError {}
