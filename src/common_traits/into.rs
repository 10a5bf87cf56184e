use crate::{LinkedSequence, Relink, Truncate};

impl<T> From<LinkedSequence<T, Relink>> for LinkedSequence<T, Truncate> {
    fn from(value: LinkedSequence<T, Relink>) -> Self {
        value.into_splice_policy(Truncate)
    }
}

impl<T> From<LinkedSequence<T, Truncate>> for LinkedSequence<T, Relink> {
    fn from(value: LinkedSequence<T, Truncate>) -> Self {
        value.into_splice_policy(Relink)
    }
}
