//! Degree, classification and count queries.
//!
//! A node is a *leaf* when its ring holds a single link, and the *root* when
//! its primary link is also the primary link of that link's edge. Edges are
//! classified by their secondary (away-from-root) node, except for the two
//! counting functions, which look at both endpoints.

use crate::algs::parallel::map_indices;
use crate::topology::index::{EdgeIndex, LinkIndex, NodeIndex};
use crate::topology::tree::Topology;
use crate::topology_error::TopologyError;

// --- membership ---

/// True if `node` indexes into `tree`.
#[inline]
pub fn belongs_to_node<N, E>(tree: &Topology<N, E>, node: NodeIndex) -> bool {
    tree.contains_node(node)
}

/// True if `link` indexes into `tree`.
#[inline]
pub fn belongs_to_link<N, E>(tree: &Topology<N, E>, link: LinkIndex) -> bool {
    tree.contains_link(link)
}

// --- classification ---

#[inline]
pub fn is_leaf_link<N, E>(tree: &Topology<N, E>, link: LinkIndex) -> bool {
    tree.next(link) == link
}

#[inline]
pub fn is_inner_link<N, E>(tree: &Topology<N, E>, link: LinkIndex) -> bool {
    tree.next(link) != link
}

#[inline]
pub fn is_leaf<N, E>(tree: &Topology<N, E>, node: NodeIndex) -> bool {
    is_leaf_link(tree, tree.primary_link(node))
}

#[inline]
pub fn is_inner<N, E>(tree: &Topology<N, E>, node: NodeIndex) -> bool {
    is_inner_link(tree, tree.primary_link(node))
}

/// An edge is a leaf edge if its secondary node is a leaf.
#[inline]
pub fn is_leaf_edge<N, E>(tree: &Topology<N, E>, edge: EdgeIndex) -> bool {
    is_leaf_link(tree, tree.edge_secondary_link(edge))
}

#[inline]
pub fn is_inner_edge<N, E>(tree: &Topology<N, E>, edge: EdgeIndex) -> bool {
    is_inner_link(tree, tree.edge_secondary_link(edge))
}

#[inline]
pub fn is_root<N, E>(tree: &Topology<N, E>, node: NodeIndex) -> bool {
    let p = tree.primary_link(node);
    tree.edge_primary_link(tree.link_edge(p)) == p
}

// --- degrees ---

/// Number of links in the ring of `node`.
pub fn degree<N, E>(tree: &Topology<N, E>, node: NodeIndex) -> usize {
    tree.node_links(node).count()
}

pub fn max_degree<N, E>(tree: &Topology<N, E>) -> usize {
    tree.node_indices()
        .map(|n| degree(tree, n))
        .max()
        .unwrap_or(0)
}

/// Degree of every node, by node index.
pub fn node_degrees<N: Sync, E: Sync>(tree: &Topology<N, E>) -> Vec<usize> {
    map_indices(tree.node_count(), |i| degree(tree, NodeIndex::new(i)))
}

/// No node has degree above three; degree two is accepted at the root, and
/// elsewhere only if `loose` is set.
pub fn is_bifurcating<N, E>(tree: &Topology<N, E>, loose: bool) -> bool {
    tree.node_indices().all(|n| match degree(tree, n) {
        d if d > 3 => false,
        2 => loose || n == tree.root_node(),
        _ => true,
    })
}

/// The root has exactly two links.
pub fn is_rooted<N, E>(tree: &Topology<N, E>) -> bool {
    degree(tree, tree.root_node()) == 2
}

/// Fail with [`TopologyError::StructuralPrecondition`] unless `tree` is rooted
/// and strictly bifurcating.
pub(crate) fn require_rooted_bifurcating<N, E>(
    tree: &Topology<N, E>,
    operation: &'static str,
) -> Result<(), TopologyError> {
    use crate::topology_error::Requirement;
    if !is_rooted(tree) {
        return Err(TopologyError::StructuralPrecondition {
            operation,
            requirement: Requirement::Rooted,
        });
    }
    if !is_bifurcating(tree, false) {
        return Err(TopologyError::StructuralPrecondition {
            operation,
            requirement: Requirement::Bifurcating,
        });
    }
    Ok(())
}

// --- counts and index lists ---

pub fn leaf_node_count<N, E>(tree: &Topology<N, E>) -> usize {
    tree.node_indices().filter(|&n| is_leaf(tree, n)).count()
}

pub fn inner_node_count<N, E>(tree: &Topology<N, E>) -> usize {
    tree.node_count() - leaf_node_count(tree)
}

/// Edges with a leaf at either end.
pub fn leaf_edge_count<N, E>(tree: &Topology<N, E>) -> usize {
    tree.edge_indices()
        .filter(|&e| is_leaf(tree, tree.primary_node(e)) || is_leaf(tree, tree.secondary_node(e)))
        .count()
}

/// Edges with inner nodes at both ends.
pub fn inner_edge_count<N, E>(tree: &Topology<N, E>) -> usize {
    tree.edge_indices()
        .filter(|&e| is_inner(tree, tree.primary_node(e)) && is_inner(tree, tree.secondary_node(e)))
        .count()
}

pub fn inner_edge_indices<N, E>(tree: &Topology<N, E>) -> Vec<EdgeIndex> {
    tree.edge_indices().filter(|&e| is_inner_edge(tree, e)).collect()
}

pub fn leaf_edge_indices<N, E>(tree: &Topology<N, E>) -> Vec<EdgeIndex> {
    tree.edge_indices().filter(|&e| is_leaf_edge(tree, e)).collect()
}

pub fn inner_node_indices<N, E>(tree: &Topology<N, E>) -> Vec<NodeIndex> {
    tree.node_indices().filter(|&n| is_inner(tree, n)).collect()
}

pub fn leaf_node_indices<N, E>(tree: &Topology<N, E>) -> Vec<NodeIndex> {
    tree.node_indices().filter(|&n| is_leaf(tree, n)).collect()
}
