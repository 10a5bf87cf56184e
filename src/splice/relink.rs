use super::policy::{SplicePolicy, sealed::Unlink};
use crate::node::Link;

/// A `SplicePolicy` which links the predecessor of the removed node to its successor,
/// so that exactly one node leaves the chain.
///
/// Given the chain `a -> b -> c`, unlinking `b` leaves `a -> c`.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Relink;

impl SplicePolicy for Relink {}

impl Unlink for Relink {
    fn unlink<T>(link: &mut Link<T>) -> usize {
        match link.take() {
            Some(node) => {
                let (_, next) = (*node).into_inner();
                *link = next;
                1
            }
            None => 0,
        }
    }
}
