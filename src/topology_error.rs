//! TopologyError: Unified error type for phylo-topology public APIs
//!
//! Every fallible operation of the crate (construction, validation and the
//! query algorithms with preconditions) reports through this one type, so
//! callers can propagate with `?` regardless of which layer failed.

use std::fmt;
use thiserror::Error;

use crate::topology::index::{EdgeIndex, LinkIndex, NodeIndex};

/// Global property of a tree that an algorithm may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// The root node has exactly two links.
    Rooted,
    /// No node has degree above three, and degree two only occurs at the root.
    Bifurcating,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Rooted => f.write_str("rooted"),
            Requirement::Bifurcating => f.write_str("bifurcating"),
        }
    }
}

/// Unified error type for phylo-topology operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// The topology lacks a global property the operation needs.
    #[error("`{operation}` requires a {requirement} tree")]
    StructuralPrecondition {
        operation: &'static str,
        requirement: Requirement,
    },
    /// A link index outside of the topology's link arena.
    #[error("link {link} does not belong to this topology ({link_count} links)")]
    ForeignLink { link: LinkIndex, link_count: usize },
    /// A node index outside of the topology's node arena.
    #[error("node {node} does not belong to this topology ({node_count} nodes)")]
    ForeignNode { node: NodeIndex, node_count: usize },

    // --- construction ---
    #[error("builder error: a root node has already been added")]
    RootAlreadySet,
    #[error("builder error: no root node has been added")]
    MissingRoot,
    #[error("builder error: the root node needs at least one child")]
    RootWithoutChildren,
    /// Every previously announced child slot is already taken.
    #[error("builder error: node {node} has no open child slot to attach to")]
    NoOpenChildSlot { node: NodeIndex },
    /// Children were announced but never added.
    #[error("builder error: {open} announced child slot(s) were never filled")]
    DanglingChildSlots { open: usize },

    // --- validation ---
    #[error("invalid topology: {nodes} nodes, {edges} edges and {links} links are inconsistent")]
    ArenaSizeMismatch {
        nodes: usize,
        edges: usize,
        links: usize,
    },
    #[error("invalid topology: outer(outer({link})) is not {link}")]
    OuterNotReciprocal { link: LinkIndex },
    #[error("invalid topology: edge {edge} does not own its two links reciprocally")]
    EdgeLinkMismatch { edge: EdgeIndex },
    #[error("invalid topology: ring of node {node} does not close")]
    RingNotClosed { node: NodeIndex },
    #[error("invalid topology: link {link} appears in the ring of node {node} but is owned elsewhere")]
    LinkInForeignRing { link: LinkIndex, node: NodeIndex },
    #[error("invalid topology: expected exactly one root, found {found}")]
    RootCount { found: usize },
    #[error("invalid topology: primary link of edge {edge} does not point toward the root")]
    MisorientedEdge { edge: EdgeIndex },
    #[error("invalid topology: only {reached} of {total} nodes are reachable from the root")]
    Disconnected { reached: usize, total: usize },

    #[error("matrix of {rows}x{cols} cannot hold {len} values")]
    MatrixShape { rows: usize, cols: usize, len: usize },
}
