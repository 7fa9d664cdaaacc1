//! [`Topology`]: the arena container owning all nodes, edges and links of one tree.
//!
//! The container is created once by a [`TopologyBuilder`] and is read-only
//! afterwards (payloads may still be edited, the wiring may not). All
//! structural lookups are O(1) index operations into the three arenas.
//!
//! [`TopologyBuilder`]: crate::topology::builder::TopologyBuilder

use std::ops::Index;

use crate::debug_invariants::DebugInvariants;
use crate::topology::index::{EdgeIndex, LinkIndex, NodeIndex};
use crate::topology::records::{Edge, Link, Node};
use crate::topology::validation::validate_topology;
use crate::topology_error::TopologyError;

/// Rooted tree topology stored as a half-edge graph.
///
/// # Type Parameters
/// - `N`: per-node payload. Defaults to `()`.
/// - `E`: per-edge payload. Defaults to `()`.
///
/// # Invariants
/// Established by the builder and assumed (not re-checked) by every query:
/// - following `next` from any link returns to it after `degree` steps,
/// - `outer(outer(l)) == l` and both halves of an edge reference that edge,
/// - exactly one node is the root, and every edge's primary link sits at the
///   endpoint nearer the root,
/// - the graph is connected and acyclic.
///
/// Use [`validate_topology`] to check them explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topology<N = (), E = ()> {
    pub(crate) nodes: Vec<Node<N>>,
    pub(crate) edges: Vec<Edge<E>>,
    pub(crate) links: Vec<Link>,
    pub(crate) root: NodeIndex,
}

impl<N, E> Topology<N, E> {
    // --- sizes ---

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    // --- root ---

    #[inline]
    pub fn root_node(&self) -> NodeIndex {
        self.root
    }

    /// The primary link of the root node, i.e. the first link of its ring.
    #[inline]
    pub fn root_link(&self) -> LinkIndex {
        self.nodes[self.root.get()].primary_link
    }

    // --- records ---

    /// # Panics
    /// Panics if `node` is out of range for this topology.
    #[inline]
    pub fn node_at(&self, node: NodeIndex) -> &Node<N> {
        &self.nodes[node.get()]
    }

    /// # Panics
    /// Panics if `edge` is out of range for this topology.
    #[inline]
    pub fn edge_at(&self, edge: EdgeIndex) -> &Edge<E> {
        &self.edges[edge.get()]
    }

    /// # Panics
    /// Panics if `link` is out of range for this topology.
    #[inline]
    pub fn link_at(&self, link: LinkIndex) -> &Link {
        &self.links[link.get()]
    }

    pub fn nodes(&self) -> impl ExactSizeIterator<Item = (NodeIndex, &Node<N>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeIndex::new(i), n))
    }

    pub fn edges(&self) -> impl ExactSizeIterator<Item = (EdgeIndex, &Edge<E>)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeIndex::new(i), e))
    }

    pub fn links(&self) -> impl ExactSizeIterator<Item = (LinkIndex, &Link)> + '_ {
        self.links
            .iter()
            .enumerate()
            .map(|(i, l)| (LinkIndex::new(i), l))
    }

    pub fn node_indices(&self) -> impl ExactSizeIterator<Item = NodeIndex> + '_ {
        (0..self.nodes.len()).map(NodeIndex::new)
    }

    pub fn edge_indices(&self) -> impl ExactSizeIterator<Item = EdgeIndex> + '_ {
        (0..self.edges.len()).map(EdgeIndex::new)
    }

    pub fn link_indices(&self) -> impl ExactSizeIterator<Item = LinkIndex> + '_ {
        (0..self.links.len()).map(LinkIndex::new)
    }

    // --- payloads ---

    #[inline]
    pub fn node_payload(&self, node: NodeIndex) -> &N {
        &self.nodes[node.get()].payload
    }

    #[inline]
    pub fn node_payload_mut(&mut self, node: NodeIndex) -> &mut N {
        &mut self.nodes[node.get()].payload
    }

    #[inline]
    pub fn edge_payload(&self, edge: EdgeIndex) -> &E {
        &self.edges[edge.get()].payload
    }

    #[inline]
    pub fn edge_payload_mut(&mut self, edge: EdgeIndex) -> &mut E {
        &mut self.edges[edge.get()].payload
    }

    /// First node (in index order) whose payload satisfies `pred`.
    pub fn find_node(&self, mut pred: impl FnMut(&N) -> bool) -> Option<NodeIndex> {
        self.nodes
            .iter()
            .position(|n| pred(&n.payload))
            .map(NodeIndex::new)
    }

    // --- navigation ---

    #[inline]
    pub fn next(&self, link: LinkIndex) -> LinkIndex {
        self.links[link.get()].next
    }

    #[inline]
    pub fn outer(&self, link: LinkIndex) -> LinkIndex {
        self.links[link.get()].outer
    }

    #[inline]
    pub fn link_node(&self, link: LinkIndex) -> NodeIndex {
        self.links[link.get()].node
    }

    #[inline]
    pub fn link_edge(&self, link: LinkIndex) -> EdgeIndex {
        self.links[link.get()].edge
    }

    #[inline]
    pub fn primary_link(&self, node: NodeIndex) -> LinkIndex {
        self.nodes[node.get()].primary_link
    }

    #[inline]
    pub fn edge_primary_link(&self, edge: EdgeIndex) -> LinkIndex {
        self.edges[edge.get()].primary_link
    }

    #[inline]
    pub fn edge_secondary_link(&self, edge: EdgeIndex) -> LinkIndex {
        self.edges[edge.get()].secondary_link
    }

    /// Endpoint of `edge` nearer the root.
    #[inline]
    pub fn primary_node(&self, edge: EdgeIndex) -> NodeIndex {
        self.link_node(self.edge_primary_link(edge))
    }

    /// Endpoint of `edge` away from the root.
    #[inline]
    pub fn secondary_node(&self, edge: EdgeIndex) -> NodeIndex {
        self.link_node(self.edge_secondary_link(edge))
    }

    // --- membership ---

    #[inline]
    pub fn contains_node(&self, node: NodeIndex) -> bool {
        node.get() < self.nodes.len()
    }

    #[inline]
    pub fn contains_link(&self, link: LinkIndex) -> bool {
        link.get() < self.links.len()
    }

    /// Membership test run by algorithms before they traverse from `node`.
    pub fn ensure_node(&self, node: NodeIndex) -> Result<(), TopologyError> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(TopologyError::ForeignNode {
                node,
                node_count: self.node_count(),
            })
        }
    }

    /// Membership test run by algorithms before they traverse from `link`.
    pub fn ensure_link(&self, link: LinkIndex) -> Result<(), TopologyError> {
        if self.contains_link(link) {
            Ok(())
        } else {
            Err(TopologyError::ForeignLink {
                link,
                link_count: self.link_count(),
            })
        }
    }
}

impl<N, E> Index<NodeIndex> for Topology<N, E> {
    type Output = Node<N>;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index.get()]
    }
}

impl<N, E> Index<EdgeIndex> for Topology<N, E> {
    type Output = Edge<E>;

    fn index(&self, index: EdgeIndex) -> &Self::Output {
        &self.edges[index.get()]
    }
}

impl<N, E> Index<LinkIndex> for Topology<N, E> {
    type Output = Link;

    fn index(&self, index: LinkIndex) -> &Self::Output {
        &self.links[index.get()]
    }
}

impl<N, E> DebugInvariants for Topology<N, E> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Topology");
    }

    fn validate_invariants(&self) -> Result<(), TopologyError> {
        validate_topology(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::builder::TopologyBuilder;

    // Root r with leaves a, b.
    fn cherry() -> Topology<&'static str, f64> {
        let mut b = TopologyBuilder::new();
        b.add_root("r", 2).unwrap();
        b.add_node("b", 0.2, 0).unwrap();
        b.add_node("a", 0.1, 0).unwrap();
        b.build().unwrap()
    }

    #[test]
    fn sizes_and_root() {
        let t = cherry();
        assert_eq!(t.node_count(), 3);
        assert_eq!(t.edge_count(), 2);
        assert_eq!(t.link_count(), 4);
        assert_eq!(t.root_node(), NodeIndex::new(0));
        assert_eq!(t.link_node(t.root_link()), t.root_node());
    }

    #[test]
    fn navigation_is_consistent() {
        let t = cherry();
        for (l, link) in t.links() {
            assert_eq!(t.outer(t.outer(l)), l);
            assert_eq!(t[l], *link);
            assert_eq!(t.link_edge(t.outer(l)), link.edge());
        }
        for e in t.edge_indices() {
            assert_eq!(t.primary_node(e), t.root_node());
            assert_ne!(t.secondary_node(e), t.root_node());
        }
    }

    #[test]
    fn payload_lookup() {
        let mut t = cherry();
        let a = t.find_node(|name| *name == "a").unwrap();
        assert_eq!(*t.node_payload(a), "a");
        assert!(t.find_node(|name| *name == "z").is_none());

        let up = t.link_edge(t.primary_link(a));
        assert_eq!(*t.edge_payload(up), 0.1);
        *t.edge_payload_mut(up) = 0.5;
        assert_eq!(*t[up].payload(), 0.5);
    }

    #[test]
    fn membership_checks() {
        let t = cherry();
        assert!(t.ensure_link(LinkIndex::new(3)).is_ok());
        assert_eq!(
            t.ensure_link(LinkIndex::new(4)),
            Err(TopologyError::ForeignLink {
                link: LinkIndex::new(4),
                link_count: 4
            })
        );
        assert!(matches!(
            t.ensure_node(NodeIndex::new(10)),
            Err(TopologyError::ForeignNode { node_count: 3, .. })
        ));
    }

    #[test]
    fn validates_as_invariants() {
        let t = cherry();
        assert!(t.validate_invariants().is_ok());
        t.debug_assert_invariants();
    }
}
