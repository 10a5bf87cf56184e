use super::policy::{SplicePolicy, sealed::Unlink};
use crate::node::{Link, release_chain};

/// A `SplicePolicy` which sets the predecessor's link of the removed node to none,
/// dropping the removed node together with all nodes following it.
///
/// Given the chain `a -> b -> c`, unlinking `b` leaves `a`.
///
/// This matches the value removal of the legacy list implementation.
/// Unlike the legacy implementation, the length of the sequence is decreased by the number of
/// dropped nodes, so that it always equals the number of reachable nodes.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Truncate;

impl SplicePolicy for Truncate {}

impl Unlink for Truncate {
    fn unlink<T>(link: &mut Link<T>) -> usize {
        release_chain(link.take())
    }
}
