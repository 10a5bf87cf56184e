use crate::{LinkedSequence, SplicePolicy};
use orx_pseudo_default::PseudoDefault;

impl<T, S> Default for LinkedSequence<T, S>
where
    S: SplicePolicy,
{
    fn default() -> Self {
        Self::with_splice_policy(S::default())
    }
}

impl<T, S> PseudoDefault for LinkedSequence<T, S>
where
    S: SplicePolicy,
{
    fn pseudo_default() -> Self {
        Self::default()
    }
}
