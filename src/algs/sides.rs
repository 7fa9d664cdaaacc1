//! Relational matrices: on which side of an edge or node each element lies.
//!
//! All three matrices are filled row by row; rows only read the topology, so
//! they are computed in parallel when the `rayon` feature is enabled.

use crate::algs::parallel::fill_rows;
use crate::algs::properties::{
    inner_node_indices, is_inner, is_root, leaf_node_indices, require_rooted_bifurcating,
};
use crate::data::matrix::Matrix;
use crate::topology::index::{EdgeIndex, LinkIndex, NodeIndex};
use crate::topology::subtree::Subtree;
use crate::topology::tree::Topology;
use crate::topology_error::TopologyError;

/// Edge x edge matrix: in row `i`, edges on the root side of edge `i` are
/// `-1`, edges below it are `+1`, and the diagonal is `0`.
pub fn edge_sides<N: Sync, E: Sync>(tree: &Topology<N, E>) -> Matrix<i8> {
    let n = tree.edge_count();
    let mut result = Matrix::new(n, n, 0i8);
    fill_rows(&mut result, |i, row| {
        let edge = EdgeIndex::new(i);
        mark_edges_beside(tree, tree.edge_primary_link(edge), row, -1);
        mark_edges_beside(tree, tree.edge_secondary_link(edge), row, 1);
    });
    result
}

/// Set `row[e] = sign` for every edge on `start`'s side of its edge.
fn mark_edges_beside<N, E>(tree: &Topology<N, E>, start: LinkIndex, row: &mut [i8], sign: i8) {
    let mut link = tree.next(start);
    while link != start {
        row[tree.link_edge(link).get()] = sign;
        link = tree.next(tree.outer(link));
    }
}

/// Node x node matrix: in row `i`, nodes on the root side of node `i` are
/// `+1`, its descendants are `-1`, and the diagonal is `0`. The root has no
/// root side, so its row is `-1` everywhere off the diagonal.
pub fn node_root_direction_matrix<N: Sync, E: Sync>(tree: &Topology<N, E>) -> Matrix<i8> {
    let n = tree.node_count();
    let mut result = Matrix::new(n, n, 0i8);
    fill_rows(&mut result, |i, row| {
        let node = NodeIndex::new(i);
        let primary = tree.primary_link(node);

        let value = if is_root(tree, node) { -1 } else { 1 };
        mark_nodes_behind(tree, primary, row, value);

        let mut sub = tree.next(primary);
        while sub != primary {
            mark_nodes_behind(tree, sub, row, -1);
            sub = tree.next(sub);
        }
        debug_assert_eq!(row[i], 0);
    });
    result
}

/// Set `row[v] = value` for every node `v` behind `link`.
fn mark_nodes_behind<N, E>(tree: &Topology<N, E>, link: LinkIndex, row: &mut [i8], value: i8) {
    let mut cur = tree.outer(link);
    while cur != link {
        row[tree.link_node(cur).get()] = value;
        cur = tree.outer(tree.next(cur));
    }
}

/// Split indicator of a rooted, strictly bifurcating tree.
///
/// Row `i` of an inner node marks the nodes of its first child subtree `+1`
/// and of its second child subtree `-1` (in ring order); leaf rows stay zero.
/// With `compressed`, only inner-node rows and leaf columns are kept, both in
/// index order.
///
/// # Errors
/// [`TopologyError::StructuralPrecondition`] if the root does not have exactly
/// two children or any other node has degree other than one or three.
pub fn sign_matrix<N: Sync, E: Sync>(
    tree: &Topology<N, E>,
    compressed: bool,
) -> Result<Matrix<i8>, TopologyError> {
    require_rooted_bifurcating(tree, "sign_matrix")?;

    let n = tree.node_count();
    let mut result = Matrix::new(n, n, 0i8);
    fill_rows(&mut result, |i, row| {
        let node = NodeIndex::new(i);
        let primary = tree.primary_link(node);
        // At the root both ring links lead to children; elsewhere skip the
        // link toward the parent.
        let first = if is_root(tree, node) {
            primary
        } else if is_inner(tree, node) {
            tree.next(primary)
        } else {
            return;
        };
        let second = tree.next(first);
        mark_subtree(tree, Subtree::new(tree.outer(first)), row, 1);
        mark_subtree(tree, Subtree::new(tree.outer(second)), row, -1);
    });

    if !compressed {
        return Ok(result);
    }

    let inner = inner_node_indices(tree);
    let leaves = leaf_node_indices(tree);
    let mut packed = Matrix::new(inner.len(), leaves.len(), 0i8);
    for (r, node) in inner.iter().enumerate() {
        for (c, leaf) in leaves.iter().enumerate() {
            packed[(r, c)] = result[(node.get(), leaf.get())];
        }
    }
    Ok(packed)
}

fn mark_subtree<N, E>(tree: &Topology<N, E>, subtree: Subtree, row: &mut [i8], sign: i8) {
    for step in tree.preorder_subtree(subtree) {
        row[step.node().get()] = sign;
    }
}
