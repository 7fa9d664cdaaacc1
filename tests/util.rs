#![allow(dead_code)]
use phylo_topology::topology::{NodeIndex, Topology, TopologyBuilder};

/// `((B,(D,E)C)A,F,(H,I)G)R;` as a tree reader announces it.
///
/// Node indices: R=0, G=1, I=2, H=3, F=4, A=5, C=6, E=7, D=8, B=9.
pub fn reference_tree() -> Topology<&'static str, ()> {
    named_tree(&[
        ("R", 3),
        ("G", 2),
        ("I", 0),
        ("H", 0),
        ("F", 0),
        ("A", 2),
        ("C", 2),
        ("E", 0),
        ("D", 0),
        ("B", 0),
    ])
}

/// `((A,B)C,(D,E)F)R;`, rooted and strictly bifurcating.
///
/// Node indices: R=0, F=1, E=2, D=3, C=4, B=5, A=6.
pub fn rooted_tree() -> Topology<&'static str, ()> {
    named_tree(&[
        ("R", 2),
        ("F", 2),
        ("E", 0),
        ("D", 0),
        ("C", 2),
        ("B", 0),
        ("A", 0),
    ])
}

/// Replay `(name, child_count)` pairs through the builder, root first.
pub fn named_tree(shape: &[(&'static str, usize)]) -> Topology<&'static str, ()> {
    let mut b = TopologyBuilder::with_capacity(shape.len());
    let (root, k) = shape[0];
    b.add_root(root, k).unwrap();
    for &(name, k) in &shape[1..] {
        b.add_node(name, (), k).unwrap();
    }
    b.build().unwrap()
}

pub fn node_by_name(tree: &Topology<&'static str, ()>, name: &str) -> NodeIndex {
    tree.find_node(|n| *n == name)
        .unwrap_or_else(|| panic!("no node named {name}"))
}

/// Build a tree from a parent array (`parents[0]` is ignored, node 0 is the
/// root, and `parents[i] < i`). Payloads carry the parent-array id.
///
/// The root gets a dummy second child if it would otherwise be a leaf.
pub fn tree_from_parents(parents: &[usize]) -> Topology<usize, ()> {
    let n = parents.len().max(1);
    let mut children = vec![Vec::new(); n];
    for (i, &p) in parents.iter().enumerate().skip(1) {
        children[p].push(i);
    }

    let mut b = TopologyBuilder::with_capacity(n + 1);
    if children[0].is_empty() {
        b.add_root(0, 1).unwrap();
        b.add_node(n, (), 0).unwrap();
        return b.build().unwrap();
    }
    b.add_root(0, children[0].len()).unwrap();
    // The most recently opened slot belongs to the last child, so it goes first.
    let mut stack: Vec<usize> = children[0].clone();
    while let Some(v) = stack.pop() {
        b.add_node(v, (), children[v].len()).unwrap();
        stack.extend(children[v].iter().copied());
    }
    b.build().unwrap()
}

/// Fully balanced rooted binary tree with `2^depth` leaves.
pub fn balanced_tree(depth: u32) -> Topology<usize, ()> {
    let n = (1usize << (depth + 1)) - 1;
    let parents: Vec<usize> = (0..n).map(|i| if i == 0 { 0 } else { (i - 1) / 2 }).collect();
    tree_from_parents(&parents)
}
