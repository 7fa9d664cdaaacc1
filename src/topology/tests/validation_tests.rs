use super::reference_tree;
use crate::topology::index::{EdgeIndex, LinkIndex, NodeIndex};
use crate::topology::validation::{is_valid, validate_topology};
use crate::topology_error::TopologyError;

#[test]
fn built_tree_is_valid() {
    let t = reference_tree();
    assert_eq!(validate_topology(&t), Ok(()));
    assert!(is_valid(&t));
}

#[test]
fn broken_outer_is_reported() {
    let mut t = reference_tree();
    t.links[3].outer = LinkIndex::new(4);
    // Link 2 is the first whose outer no longer points back.
    assert_eq!(
        validate_topology(&t),
        Err(TopologyError::OuterNotReciprocal {
            link: LinkIndex::new(2)
        })
    );
    assert!(!is_valid(&t));
}

#[test]
fn edge_with_wrong_links_is_reported() {
    let mut t = reference_tree();
    t.edges[2].secondary_link = LinkIndex::new(6);
    assert_eq!(
        validate_topology(&t),
        Err(TopologyError::EdgeLinkMismatch {
            edge: EdgeIndex::new(2)
        })
    );
}

#[test]
fn open_ring_is_reported() {
    let mut t = reference_tree();
    // G's ring is 3 -> 4 -> 5 -> 3; short-circuit it so 5 is never reached.
    t.links[4].next = LinkIndex::new(3);
    assert_eq!(
        validate_topology(&t),
        Err(TopologyError::RingNotClosed {
            node: NodeIndex::new(1)
        })
    );
}

#[test]
fn ring_through_foreign_node_is_reported() {
    let mut t = reference_tree();
    t.links[4].next = LinkIndex::new(9);
    assert_eq!(
        validate_topology(&t),
        Err(TopologyError::LinkInForeignRing {
            link: LinkIndex::new(9),
            node: NodeIndex::new(1)
        })
    );
}

#[test]
fn second_root_is_reported() {
    let mut t = reference_tree();
    // Let A claim its first child slot as primary link.
    t.nodes[5].primary_link = LinkIndex::new(10);
    assert_eq!(
        validate_topology(&t),
        Err(TopologyError::RootCount { found: 2 })
    );
}

#[test]
fn flipped_edge_is_reported() {
    let mut t = reference_tree();
    let e = &mut t.edges[3];
    std::mem::swap(&mut e.primary_link, &mut e.secondary_link);
    assert!(matches!(
        validate_topology(&t),
        Err(TopologyError::MisorientedEdge { .. }) | Err(TopologyError::RootCount { .. })
    ));
}

#[test]
fn arena_sizes_must_agree() {
    let mut t = reference_tree();
    t.links.pop();
    assert_eq!(
        validate_topology(&t),
        Err(TopologyError::ArenaSizeMismatch {
            nodes: 10,
            edges: 9,
            links: 17
        })
    );
}
