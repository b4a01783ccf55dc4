//! Capabilities shared by the collections: how elements are compared when sorting, and the
//! pairwise ordering policy used to compare whole collections.

mod compare;
pub(crate) mod pairwise;

pub use compare::*;
