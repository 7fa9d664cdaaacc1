//! Strong, zero-cost handles for the three arenas of a [`Topology`].
//!
//! Every node, edge and link of a topology lives in a dense arena and is
//! addressed by its position there. The handles in this module wrap that
//! position so that a node index can never be passed where a link index is
//! expected:
//! - [`NodeIndex`] addresses a [`Node`](crate::topology::records::Node),
//! - [`EdgeIndex`] addresses an [`Edge`](crate::topology::records::Edge),
//! - [`LinkIndex`] addresses a [`Link`](crate::topology::records::Link).
//!
//! Indices are stable for the lifetime of the topology that issued them.
//!
//! [`Topology`]: crate::topology::tree::Topology

use std::fmt;

macro_rules! arena_index {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Wraps a raw arena position.
            #[inline]
            pub const fn new(raw: usize) -> Self {
                $name(raw)
            }

            /// Returns the raw arena position.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        /// Prints only the raw position.
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(i: $name) -> usize {
                i.0
            }
        }
    };
}

arena_index!(
    /// Position of a node in its topology's node arena.
    NodeIndex
);
arena_index!(
    /// Position of an edge in its topology's edge arena.
    EdgeIndex
);
arena_index!(
    /// Position of a link (half-edge) in its topology's link arena.
    LinkIndex
);

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::{assert_eq_align, assert_eq_size};

    // repr(transparent) keeps the handles as cheap as the raw index.
    assert_eq_size!(NodeIndex, usize);
    assert_eq_size!(EdgeIndex, usize);
    assert_eq_size!(LinkIndex, usize);
    assert_eq_align!(LinkIndex, usize);
}
