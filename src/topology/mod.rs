//! Top-level module for the tree topology.
//!
//! This module provides the half-edge representation of a rooted tree and
//! everything needed to walk it:
//! - strong index handles and the node/edge/link arena records,
//! - the [`Topology`] container and its [`TopologyBuilder`],
//! - an explicit validation pass for builder output,
//! - [`Subtree`] views and the ring/preorder/postorder/eulertour iterators.
//!
//! Most users build a [`Topology`] once and hand it to the query functions in
//! [`crate::algs`].

pub mod builder;
pub mod index;
pub mod iter;
pub mod records;
pub mod subtree;
pub mod tree;
pub mod validation;

pub use builder::TopologyBuilder;
pub use index::{EdgeIndex, LinkIndex, NodeIndex};
pub use iter::{Eulertour, NodeLinks, Postorder, Preorder, TraversalStep};
pub use records::{Edge, Link, Node};
pub use subtree::Subtree;
pub use tree::Topology;
pub use validation::{is_valid, validate_topology};

#[cfg(test)]
pub(crate) mod tests;
