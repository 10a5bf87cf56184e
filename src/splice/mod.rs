mod policy;
mod relink;
mod truncate;

pub(crate) use policy::sealed::Unlink;
pub use policy::SplicePolicy;
pub use relink::Relink;
pub use truncate::Truncate;
