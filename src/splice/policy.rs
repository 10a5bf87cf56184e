/// Policy which determines how a matched non-front node is unlinked from the chain by
/// `LinkedSequence::remove`.
///
/// Two implementors are provided:
/// * [`Relink`] splices the predecessor to the successor of the removed node; the remainder of the sequence is kept.
///   This is the default policy.
/// * [`Truncate`] sets the predecessor's link to none; the removed node drops together with its entire tail.
///   This reproduces the behavior of the legacy list implementation and exists for compatibility testing.
///
/// Note that the policy only affects value removal of non-front nodes.
/// Removing the front, `remove_at`, `pop_front` and `clear` behave identically under both policies.
///
/// The trait is sealed; nodes of the sequence never leave the crate, and hence, the set of policies is closed.
///
/// ```compile_fail
/// use orx_linked_sequence::*;
///
/// #[derive(Clone, Default)]
/// struct KeepAll;
///
/// impl SplicePolicy for KeepAll {}
/// ```
///
/// Nodes and links of the chain are not accessible either.
///
/// ```compile_fail
/// use orx_linked_sequence::Node;
///
/// let node = Node::new(1, None);
/// ```
///
/// [`Relink`]: crate::Relink
/// [`Truncate`]: crate::Truncate
pub trait SplicePolicy: sealed::Unlink + Clone + Default {}

pub(crate) mod sealed {
    use crate::node::Link;

    pub trait Unlink {
        /// Unlinks the node owned by `link`, which is the `next` link of the predecessor of the node.
        ///
        /// Returns the number of nodes which are no longer reachable from the front of the sequence.
        /// The sequence decreases its length by exactly this number; hence, every detached node must
        /// be counted in order to keep the length consistent with the chain.
        ///
        /// Returns zero if `link` is empty.
        fn unlink<T>(link: &mut Link<T>) -> usize;
    }
}
