//! Subtree sizes, subtree heights and path lengths.
//!
//! Sizes never count the node a subtree hangs from:
//! - `subtree_size(tree, l)` counts the nodes behind `l`, i.e. the node at
//!   the far end of `l`'s edge and everything beyond it;
//! - `subtree_sizes(tree, s)[v]` counts the descendants of `v` when the tree
//!   is hung from `s`, so the entry for `s` is `node_count - 1`.
//!
//! The two agree: if `u` is the link of `v` that points toward `s`, then
//! `subtree_sizes(tree, s)[v] + 1 == subtree_size(tree, outer(u))`.

use hashbrown::HashSet;

use crate::algs::properties::is_leaf_link;
use crate::topology::index::{LinkIndex, NodeIndex};
use crate::topology::subtree::Subtree;
use crate::topology::tree::Topology;
use crate::topology_error::TopologyError;

/// Number of nodes behind `link`, walking `outer(next(l))` until the walk
/// comes back to `link`.
///
/// # Errors
/// [`TopologyError::ForeignLink`] if `link` is not part of `tree`.
pub fn subtree_size<N, E>(tree: &Topology<N, E>, link: LinkIndex) -> Result<usize, TopologyError> {
    tree.ensure_link(link)?;

    let mut visited = HashSet::new();
    let mut cur = tree.outer(link);
    while cur != link {
        visited.insert(tree.link_node(cur));
        cur = tree.outer(tree.next(cur));
    }
    Ok(visited.len())
}

/// Descendant count of every node when the tree is hung from `start`.
///
/// One eulertour from `start`, keeping a stack of the links through which
/// the open nodes were entered.
///
/// # Errors
/// [`TopologyError::ForeignNode`] if `start` is not part of `tree`.
pub fn subtree_sizes<N, E>(
    tree: &Topology<N, E>,
    start: NodeIndex,
) -> Result<Vec<usize>, TopologyError> {
    tree.ensure_node(start)?;
    Ok(subtree_sizes_checked(tree, start))
}

/// [`subtree_sizes`] hung from the root.
pub fn subtree_sizes_from_root<N, E>(tree: &Topology<N, E>) -> Vec<usize> {
    subtree_sizes_checked(tree, tree.root_node())
}

fn subtree_sizes_checked<N, E>(tree: &Topology<N, E>, start: NodeIndex) -> Vec<usize> {
    let mut result = vec![0usize; tree.node_count()];
    let start_link = tree.primary_link(start);
    let mut stack = vec![start_link];

    for step in tree.eulertour_from(start_link) {
        let link = step.link();
        let top = *stack.last().unwrap_or(&start_link);

        if tree.next(link) == top && top != start_link {
            // Back at the entry link's node for the last time: close it.
            stack.pop();
            let closed = result[tree.link_node(top).get()];
            let parent = *stack.last().unwrap_or(&start_link);
            result[tree.link_node(parent).get()] += closed;
        } else if step.node() == tree.link_node(top) {
            // Returning to the open node from one of its subtrees.
        } else if is_leaf_link(tree, link) {
            result[tree.link_node(top).get()] += 1;
        } else {
            result[tree.link_node(top).get()] += 1;
            stack.push(link);
        }
    }

    debug_assert_eq!(stack, [start_link]);
    debug_assert_eq!(result[start.get()], tree.node_count() - 1);
    result
}

/// Longest downward path, in edges, inside the subtree behind `link`,
/// measured from the node at the far end of `link`'s edge.
///
/// # Errors
/// [`TopologyError::ForeignLink`] if `link` is not part of `tree`.
pub fn subtree_max_path_height<N, E>(
    tree: &Topology<N, E>,
    link: LinkIndex,
) -> Result<usize, TopologyError> {
    tree.ensure_link(link)?;
    let top = tree.outer(link);
    let mut heights = vec![0usize; tree.node_count()];
    for step in tree.postorder_subtree(Subtree::new(top)) {
        if step.link() == top {
            continue;
        }
        let parent = tree.link_node(tree.outer(step.link()));
        let h = heights[step.node().get()] + 1;
        heights[parent.get()] = heights[parent.get()].max(h);
    }
    Ok(heights[tree.link_node(top).get()])
}

/// Height of every node's subtree when the tree is hung from `start`.
///
/// A single postorder pass: when a node is emitted all of its children have
/// been, so its height is final and can be pushed to its parent.
///
/// # Errors
/// [`TopologyError::ForeignNode`] if `start` is not part of `tree`.
pub fn subtree_max_path_heights<N, E>(
    tree: &Topology<N, E>,
    start: NodeIndex,
) -> Result<Vec<usize>, TopologyError> {
    tree.ensure_node(start)?;
    Ok(subtree_max_path_heights_checked(tree, start))
}

/// [`subtree_max_path_heights`] hung from the root.
pub fn subtree_max_path_heights_from_root<N, E>(tree: &Topology<N, E>) -> Vec<usize> {
    subtree_max_path_heights_checked(tree, tree.root_node())
}

fn subtree_max_path_heights_checked<N, E>(tree: &Topology<N, E>, start: NodeIndex) -> Vec<usize> {
    let mut heights = vec![0usize; tree.node_count()];
    for step in tree.postorder_from(tree.primary_link(start)) {
        if step.is_last_iteration() {
            break;
        }
        let parent = tree.link_node(tree.outer(step.link()));
        let h = heights[step.node().get()] + 1;
        heights[parent.get()] = heights[parent.get()].max(h);
    }
    heights
}

/// Number of edges between `node` and every node of the tree.
///
/// # Errors
/// [`TopologyError::ForeignNode`] if `node` is not part of `tree`.
pub fn node_path_length_vector<N, E>(
    tree: &Topology<N, E>,
    node: NodeIndex,
) -> Result<Vec<usize>, TopologyError> {
    tree.ensure_node(node)?;
    let mut dist = vec![0usize; tree.node_count()];
    for step in tree.preorder_from(tree.primary_link(node)).skip(1) {
        let parent = tree.link_node(tree.outer(step.link()));
        dist[step.node().get()] = dist[parent.get()] + 1;
    }
    Ok(dist)
}
