//! Paths to the root and lowest common ancestors.

use crate::algs::parallel::fill_rows;
use crate::data::matrix::Matrix;
use crate::topology::index::{LinkIndex, NodeIndex};
use crate::topology::tree::Topology;

/// Links from `node` up to the root: the primary link of `node`, of its
/// parent, and so on, ending with the primary link of the root.
pub fn path_to_root<N, E>(tree: &Topology<N, E>, node: NodeIndex) -> Vec<LinkIndex> {
    let mut path = Vec::new();
    let mut cur = tree.primary_link(node);
    // The root's primary link is the primary (not secondary) half of its edge.
    while tree.edge_secondary_link(tree.link_edge(cur)) == cur {
        path.push(cur);
        cur = tree.primary_link(tree.link_node(tree.outer(cur)));
    }
    path.push(cur);
    path
}

/// Deepest node that is an ancestor of both `a` and `b` (a node is its own
/// ancestor). Runs in `O(depth(a) + depth(b))`.
pub fn lowest_common_ancestor<N, E>(tree: &Topology<N, E>, a: NodeIndex, b: NodeIndex) -> NodeIndex {
    if a == b {
        return a;
    }
    lca_of_paths(tree, &path_to_root(tree, a), &path_to_root(tree, b))
}

/// Strip the shared root-ward tail of two root paths; the last shared link
/// belongs to the common ancestor.
fn lca_of_paths<N, E>(tree: &Topology<N, E>, path_a: &[LinkIndex], path_b: &[LinkIndex]) -> NodeIndex {
    let mut ia = path_a.len();
    let mut ib = path_b.len();
    while ia > 1 && ib > 1 && path_a[ia - 1] == path_b[ib - 1] && path_a[ia - 2] == path_b[ib - 2] {
        ia -= 1;
        ib -= 1;
    }
    tree.link_node(path_a[ia - 1])
}

/// All-pairs lowest common ancestors, `m[(r, c)] == lca(r, c)`.
///
/// Every root path is computed once; the upper triangle is then filled row
/// by row (in parallel with the `rayon` feature) and mirrored. Quadratic in
/// the node count times the depth, which is fine for the tree sizes this
/// crate targets.
pub fn lowest_common_ancestors<N: Sync, E: Sync>(tree: &Topology<N, E>) -> Matrix<NodeIndex> {
    let n = tree.node_count();
    let paths: Vec<Vec<LinkIndex>> = tree.node_indices().map(|v| path_to_root(tree, v)).collect();

    let mut result = Matrix::new(n, n, NodeIndex::new(0));
    fill_rows(&mut result, |r, row| {
        row[r] = NodeIndex::new(r);
        for c in r + 1..n {
            row[c] = lca_of_paths(tree, &paths[r], &paths[c]);
        }
    });
    for r in 1..n {
        for c in 0..r {
            result[(r, c)] = result[(c, r)];
        }
    }
    result
}
