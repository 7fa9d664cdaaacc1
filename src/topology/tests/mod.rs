use crate::topology::builder::TopologyBuilder;
use crate::topology::tree::Topology;

mod validation_tests;

/// `((B,(D,E)C)A,F,(H,I)G)R;` in reader order:
/// R=0, G=1, I=2, H=3, F=4, A=5, C=6, E=7, D=8, B=9.
pub(crate) fn reference_tree() -> Topology<&'static str, ()> {
    let mut b = TopologyBuilder::with_capacity(10);
    b.add_root("R", 3).unwrap();
    for (name, children) in [
        ("G", 2),
        ("I", 0),
        ("H", 0),
        ("F", 0),
        ("A", 2),
        ("C", 2),
        ("E", 0),
        ("D", 0),
        ("B", 0),
    ] {
        b.add_node(name, (), children).unwrap();
    }
    b.build().unwrap()
}

/// `((A,B)C,(D,E)F)R;` in reader order: R=0, F=1, E=2, D=3, C=4, B=5, A=6.
pub(crate) fn rooted_tree() -> Topology<&'static str, ()> {
    let mut b = TopologyBuilder::with_capacity(7);
    b.add_root("R", 2).unwrap();
    for (name, children) in [("F", 2), ("E", 0), ("D", 0), ("C", 2), ("B", 0), ("A", 0)] {
        b.add_node(name, (), children).unwrap();
    }
    b.build().unwrap()
}

pub(crate) fn names<I>(tree: &Topology<&'static str, ()>, steps: I) -> String
where
    I: IntoIterator<Item = crate::topology::iter::TraversalStep>,
{
    steps
        .into_iter()
        .map(|s| *tree.node_payload(s.node()))
        .collect()
}
