//! Common behaviour of the tracked entity kinds

use std::fmt::Debug;
use std::hash::Hash;

/// An entity with an opaque identity
pub trait Entity: Clone + Debug {
    type Id: Clone + Debug + Eq + Hash;

    /// Entity kind used in log fields and assertion messages
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;
}
