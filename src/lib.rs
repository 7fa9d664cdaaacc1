#![cfg_attr(docsrs, feature(doc_cfg))]
//! # phylo-topology
//!
//! phylo-topology is the topology engine for rooted phylogenetic trees. A tree
//! is stored as a half-edge ("winged-edge") graph in three dense arenas of
//! nodes, edges and links, and every query walks the link rings by index.
//!
//! ## Features
//! - Arena-backed [`Topology`](topology::Topology) with generic node and edge
//!   payloads, built once through [`TopologyBuilder`](topology::TopologyBuilder)
//! - Ring, preorder, postorder and eulertour iterators over whole trees and
//!   [`Subtree`](topology::Subtree)s
//! - Degree and leaf/inner/root classification, subtree sizes and heights,
//!   path lengths, paths to the root and lowest common ancestors
//! - Edge-side, root-direction and sign matrices
//! - Optional row-parallel evaluation through rayon
//!
//! ## Usage
//!
//! ```rust
//! use phylo_topology::prelude::*;
//!
//! // ((B,C)A,D)R;  children are announced last-slot-first.
//! let mut b = TopologyBuilder::new();
//! let r = b.add_root("R", 2)?;
//! let d = b.add_node("D", 0.4, 0)?;
//! let a = b.add_node("A", 0.1, 2)?;
//! let c = b.add_node("C", 0.3, 0)?;
//! let bb = b.add_node("B", 0.2, 0)?;
//! let tree = b.build()?;
//!
//! assert!(is_rooted(&tree) && is_bifurcating(&tree, false));
//! assert_eq!(lowest_common_ancestor(&tree, bb, c), a);
//! assert_eq!(lowest_common_ancestor(&tree, bb, d), r);
//! assert_eq!(subtree_sizes_from_root(&tree), vec![4, 0, 2, 0, 0]);
//! # Ok::<(), TopologyError>(())
//! ```
//!
//! ## Cargo features
//! - `rayon`: compute the relational matrices, all-pairs LCA and node degrees
//!   row-parallel. Results do not depend on the feature.
//! - `strict-invariants`: run the full topology validation after every build,
//!   also in release builds (always on with `debug_assertions`).
//! - `serde`: `Serialize`/`Deserialize` for the index handles.
//!
//! ## Logging
//! The crate logs through the `log` facade and never installs a logger.

pub mod algs;
pub mod data;
pub mod debug_invariants;
pub mod topology;
pub mod topology_error;

pub use debug_invariants::DebugInvariants;
pub use topology_error::TopologyError;

/// A convenient prelude to import the most-used types and queries:
pub mod prelude {
    pub use crate::algs::ancestry::{lowest_common_ancestor, lowest_common_ancestors, path_to_root};
    pub use crate::algs::properties::{
        degree, is_bifurcating, is_inner, is_leaf, is_root, is_rooted, leaf_node_count,
    };
    pub use crate::algs::sides::{edge_sides, node_root_direction_matrix, sign_matrix};
    pub use crate::algs::subtrees::{
        subtree_max_path_heights_from_root, subtree_size, subtree_sizes, subtree_sizes_from_root,
    };
    pub use crate::data::matrix::Matrix;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::topology::{
        EdgeIndex, LinkIndex, NodeIndex, Subtree, Topology, TopologyBuilder, TraversalStep,
    };
    pub use crate::topology_error::{Requirement, TopologyError};
}
