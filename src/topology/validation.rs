//! Explicit validation of the half-edge invariants.
//!
//! Query algorithms assume a well-formed [`Topology`] and never re-check it.
//! This pass is the separate, opt-in check: it walks every arena once and
//! reports the first violated invariant. [`TopologyBuilder::build`] runs it
//! under `debug_invariants!`, and builders written outside this crate can call
//! [`is_valid`] in their own tests.
//!
//! [`TopologyBuilder::build`]: crate::topology::builder::TopologyBuilder::build

use crate::topology::index::{EdgeIndex, LinkIndex, NodeIndex};
use crate::topology::tree::Topology;
use crate::topology_error::TopologyError;

/// Check every structural invariant of `tree`, returning the first violation.
///
/// Checks, in order: arena sizes, link reciprocity, edge ownership, ring
/// closure, the single root, edge orientation and connectivity.
pub fn validate_topology<N, E>(tree: &Topology<N, E>) -> Result<(), TopologyError> {
    let result = check_arenas(tree)
        .and_then(|_| check_links(tree))
        .and_then(|_| check_edges(tree))
        .and_then(|_| check_rings(tree))
        .and_then(|_| check_root(tree))
        .and_then(|_| check_orientation(tree));
    if let Err(e) = &result {
        log::debug!("topology validation failed: {e}");
    }
    result
}

/// Boolean form of [`validate_topology`].
pub fn is_valid<N, E>(tree: &Topology<N, E>) -> bool {
    validate_topology(tree).is_ok()
}

fn check_arenas<N, E>(tree: &Topology<N, E>) -> Result<(), TopologyError> {
    let nodes = tree.node_count();
    let edges = tree.edge_count();
    let links = tree.link_count();
    if nodes == 0 || edges + 1 != nodes || links != 2 * edges || !tree.contains_node(tree.root) {
        return Err(TopologyError::ArenaSizeMismatch {
            nodes,
            edges,
            links,
        });
    }
    Ok(())
}

fn check_links<N, E>(tree: &Topology<N, E>) -> Result<(), TopologyError> {
    for (l, link) in tree.links() {
        let in_range = tree.contains_link(link.next)
            && tree.contains_link(link.outer)
            && tree.contains_node(link.node)
            && link.edge.get() < tree.edge_count();
        if !in_range || tree.outer(link.outer) != l {
            return Err(TopologyError::OuterNotReciprocal { link: l });
        }
        if tree.link_edge(link.outer) != link.edge {
            return Err(TopologyError::EdgeLinkMismatch { edge: link.edge });
        }
    }
    Ok(())
}

fn check_edges<N, E>(tree: &Topology<N, E>) -> Result<(), TopologyError> {
    for (e, edge) in tree.edges() {
        let p = edge.primary_link;
        let s = edge.secondary_link;
        let owned = tree.contains_link(p)
            && tree.contains_link(s)
            && tree.link_edge(p) == e
            && tree.link_edge(s) == e
            && tree.outer(p) == s;
        if !owned {
            return Err(TopologyError::EdgeLinkMismatch { edge: e });
        }
    }
    Ok(())
}

fn check_rings<N, E>(tree: &Topology<N, E>) -> Result<(), TopologyError> {
    let mut in_ring = vec![false; tree.link_count()];
    for (n, node) in tree.nodes() {
        let start = node.primary_link;
        if !tree.contains_link(start) {
            return Err(TopologyError::RingNotClosed { node: n });
        }
        let mut cur = start;
        let mut steps = 0usize;
        loop {
            if tree.link_node(cur) != n {
                return Err(TopologyError::LinkInForeignRing { link: cur, node: n });
            }
            if in_ring[cur.get()] || steps == tree.link_count() {
                return Err(TopologyError::RingNotClosed { node: n });
            }
            in_ring[cur.get()] = true;
            steps += 1;
            cur = tree.next(cur);
            if cur == start {
                break;
            }
        }
    }
    // Every link must sit in the ring reachable from its owner's primary link.
    if let Some(stray) = in_ring.iter().position(|seen| !seen) {
        return Err(TopologyError::RingNotClosed {
            node: tree.link_node(LinkIndex::new(stray)),
        });
    }
    Ok(())
}

fn check_root<N, E>(tree: &Topology<N, E>) -> Result<(), TopologyError> {
    let roots: Vec<NodeIndex> = tree
        .node_indices()
        .filter(|&n| {
            let p = tree.primary_link(n);
            tree.edge_primary_link(tree.link_edge(p)) == p
        })
        .collect();
    if roots != [tree.root] {
        return Err(TopologyError::RootCount { found: roots.len() });
    }
    Ok(())
}

/// Walk away from the root and require every edge to be entered through its
/// primary link; the walk must reach every node exactly once.
fn check_orientation<N, E>(tree: &Topology<N, E>) -> Result<(), TopologyError> {
    let total = tree.node_count();
    let mut reached = vec![false; total];
    reached[tree.root.get()] = true;
    let mut count = 1usize;

    let mut stack = Vec::new();
    push_ring(tree, tree.root_link(), &mut stack, true);

    while let Some(down) = stack.pop() {
        let edge: EdgeIndex = tree.link_edge(down);
        let up = tree.outer(down);
        let child = tree.link_node(up);
        if tree.edge_primary_link(edge) != down || tree.primary_link(child) != up {
            return Err(TopologyError::MisorientedEdge { edge });
        }
        if reached[child.get()] {
            return Err(TopologyError::Disconnected {
                reached: count,
                total,
            });
        }
        reached[child.get()] = true;
        count += 1;
        push_ring(tree, up, &mut stack, false);
    }

    if count != total {
        return Err(TopologyError::Disconnected {
            reached: count,
            total,
        });
    }
    Ok(())
}

/// Push the ring links after `from` (and `from` itself if `inclusive`).
fn push_ring<N, E>(
    tree: &Topology<N, E>,
    from: LinkIndex,
    stack: &mut Vec<LinkIndex>,
    inclusive: bool,
) {
    if inclusive {
        stack.push(from);
    }
    let mut cur = tree.next(from);
    while cur != from {
        stack.push(cur);
        cur = tree.next(cur);
    }
}
