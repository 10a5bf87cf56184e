use crate::{LinkedSequence, SplicePolicy};
use core::fmt::Debug;

impl<T, S> Debug for LinkedSequence<T, S>
where
    T: Debug,
    S: SplicePolicy,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
