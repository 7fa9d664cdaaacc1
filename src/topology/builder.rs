//! Stack-driven construction of a [`Topology`].
//!
//! The builder consumes nodes in the order a tree reader emits them: the
//! root first, then every other node in a depth-first order where each node
//! announces how many children it has. Announcing `k` children opens `k`
//! *child slots*, which are links appended to the node's ring in order. The
//! next node added attaches to the most recently opened free slot, so the
//! subtree hanging off the last slot is described first:
//!
//! ```rust
//! use phylo_topology::topology::builder::TopologyBuilder;
//!
//! // (B,C)A;  -- announce A with two children, then C (last slot), then B.
//! let mut b = TopologyBuilder::new();
//! b.add_root("A", 2)?;
//! b.add_node("C", (), 0)?;
//! b.add_node("B", (), 0)?;
//! let tree = b.build()?;
//! assert_eq!(tree.node_count(), 3);
//! # Ok::<(), phylo_topology::topology_error::TopologyError>(())
//! ```
//!
//! Nodes, edges and links are numbered in creation order. The root owns no
//! link toward a parent; its primary link is the first link of its ring.

use crate::debug_invariants::DebugInvariants;
use crate::topology::index::{EdgeIndex, LinkIndex, NodeIndex};
use crate::topology::records::{Edge, Link, Node};
use crate::topology::tree::Topology;
use crate::topology_error::TopologyError;

/// A link whose edge and outer half are not known until its child arrives.
#[derive(Copy, Clone, Debug)]
struct PendingLink {
    node: NodeIndex,
    next: LinkIndex,
    edge: Option<EdgeIndex>,
    outer: Option<LinkIndex>,
}

/// Incremental builder for [`Topology`]; see the module docs for the order
/// in which nodes must be added.
#[derive(Clone, Debug)]
pub struct TopologyBuilder<N = (), E = ()> {
    nodes: Vec<Node<N>>,
    edges: Vec<Edge<E>>,
    links: Vec<PendingLink>,
    /// Child slots waiting for a node, most recent last.
    open: Vec<LinkIndex>,
    root: Option<NodeIndex>,
}

impl<N, E> Default for TopologyBuilder<N, E> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            links: Vec::new(),
            open: Vec::new(),
            root: None,
        }
    }
}

impl<N, E> TopologyBuilder<N, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate the arenas for a tree of `node_count` nodes.
    pub fn with_capacity(node_count: usize) -> Self {
        let edge_count = node_count.saturating_sub(1);
        Self {
            nodes: Vec::with_capacity(node_count),
            edges: Vec::with_capacity(edge_count),
            links: Vec::with_capacity(2 * edge_count),
            open: Vec::new(),
            root: None,
        }
    }

    /// Number of nodes added so far.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of announced children still waiting for a node.
    #[inline]
    pub fn open_slots(&self) -> usize {
        self.open.len()
    }

    /// Add the root node with `child_count` children.
    ///
    /// # Errors
    /// - [`TopologyError::RootAlreadySet`] if called twice,
    /// - [`TopologyError::RootWithoutChildren`] if `child_count` is zero.
    pub fn add_root(&mut self, payload: N, child_count: usize) -> Result<NodeIndex, TopologyError> {
        if self.root.is_some() {
            return Err(TopologyError::RootAlreadySet);
        }
        let node = NodeIndex::new(self.nodes.len());
        let first = self
            .open_ring(node, None, child_count)
            .ok_or(TopologyError::RootWithoutChildren)?;
        self.nodes.push(Node {
            primary_link: first,
            payload,
        });
        self.root = Some(node);
        log::trace!("builder: root {node} with {child_count} child slot(s)");
        Ok(node)
    }

    /// Add a non-root node with `child_count` children, attached to the most
    /// recently opened child slot through a new edge carrying `edge`.
    ///
    /// # Errors
    /// - [`TopologyError::MissingRoot`] before [`add_root`](Self::add_root),
    /// - [`TopologyError::NoOpenChildSlot`] if every announced child exists.
    pub fn add_node(
        &mut self,
        payload: N,
        edge: E,
        child_count: usize,
    ) -> Result<NodeIndex, TopologyError> {
        if self.root.is_none() {
            return Err(TopologyError::MissingRoot);
        }
        let node = NodeIndex::new(self.nodes.len());
        let parent_link = self
            .open
            .pop()
            .ok_or(TopologyError::NoOpenChildSlot { node })?;

        let up = LinkIndex::new(self.links.len());
        let edge_index = EdgeIndex::new(self.edges.len());
        self.edges.push(Edge {
            primary_link: parent_link,
            secondary_link: up,
            payload: edge,
        });

        let parent = &mut self.links[parent_link.get()];
        parent.edge = Some(edge_index);
        parent.outer = Some(up);
        self.links.push(PendingLink {
            node,
            next: up,
            edge: Some(edge_index),
            outer: Some(parent_link),
        });

        self.open_ring(node, Some(up), child_count);
        self.nodes.push(Node {
            primary_link: up,
            payload,
        });
        log::trace!("builder: node {node} below link {parent_link} with {child_count} child slot(s)");
        Ok(node)
    }

    /// Append `count` child links after `head` in `node`'s ring and close the
    /// ring. Returns the first link of the ring, if there is any.
    fn open_ring(
        &mut self,
        node: NodeIndex,
        head: Option<LinkIndex>,
        count: usize,
    ) -> Option<LinkIndex> {
        let mut first = head;
        let mut prev = head;
        for _ in 0..count {
            let link = LinkIndex::new(self.links.len());
            self.links.push(PendingLink {
                node,
                next: link,
                edge: None,
                outer: None,
            });
            match prev {
                Some(p) => self.links[p.get()].next = link,
                None => first = Some(link),
            }
            prev = Some(link);
            self.open.push(link);
        }
        if let (Some(last), Some(first)) = (prev, first) {
            self.links[last.get()].next = first;
        }
        first
    }

    /// Finish construction.
    ///
    /// # Errors
    /// - [`TopologyError::MissingRoot`] if no node was added,
    /// - [`TopologyError::DanglingChildSlots`] if announced children are missing.
    pub fn build(self) -> Result<Topology<N, E>, TopologyError> {
        let root = self.root.ok_or(TopologyError::MissingRoot)?;
        if !self.open.is_empty() {
            return Err(TopologyError::DanglingChildSlots {
                open: self.open.len(),
            });
        }

        let links = self
            .links
            .into_iter()
            .map(|l| match (l.edge, l.outer) {
                (Some(edge), Some(outer)) => Ok(Link {
                    node: l.node,
                    edge,
                    next: l.next,
                    outer,
                }),
                _ => Err(TopologyError::DanglingChildSlots { open: 1 }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let topology = Topology {
            nodes: self.nodes,
            edges: self.edges,
            links,
            root,
        };
        log::debug!(
            "built topology: {} nodes, {} edges, {} links",
            topology.node_count(),
            topology.edge_count(),
            topology.link_count()
        );
        crate::debug_invariants!(topology.validate_invariants(), "TopologyBuilder::build");
        Ok(topology)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_requires_children() {
        let mut b = TopologyBuilder::<(), ()>::new();
        assert_eq!(b.add_root((), 0), Err(TopologyError::RootWithoutChildren));
    }

    #[test]
    fn second_root_is_rejected() {
        let mut b = TopologyBuilder::<(), ()>::new();
        b.add_root((), 1).unwrap();
        assert_eq!(b.add_root((), 1), Err(TopologyError::RootAlreadySet));
    }

    #[test]
    fn node_before_root_is_rejected() {
        let mut b = TopologyBuilder::<(), ()>::new();
        assert_eq!(b.add_node((), (), 0), Err(TopologyError::MissingRoot));
    }

    #[test]
    fn surplus_node_is_rejected() {
        let mut b = TopologyBuilder::<(), ()>::new();
        b.add_root((), 1).unwrap();
        b.add_node((), (), 0).unwrap();
        assert_eq!(
            b.add_node((), (), 0),
            Err(TopologyError::NoOpenChildSlot {
                node: NodeIndex::new(2)
            })
        );
    }

    #[test]
    fn missing_children_are_reported() {
        let mut b = TopologyBuilder::<(), ()>::new();
        b.add_root((), 3).unwrap();
        b.add_node((), (), 1).unwrap();
        assert_eq!(b.open_slots(), 3);
        assert_eq!(
            b.build(),
            Err(TopologyError::DanglingChildSlots { open: 3 })
        );
        assert_eq!(
            TopologyBuilder::<(), ()>::new().build(),
            Err(TopologyError::MissingRoot)
        );
    }

    #[test]
    fn wiring_follows_slot_order() {
        // (B,C)A; announced as A, C, B.
        let mut b = TopologyBuilder::with_capacity(3);
        let a = b.add_root("A", 2).unwrap();
        let c = b.add_node("C", 3.0, 0).unwrap();
        let bb = b.add_node("B", 2.0, 0).unwrap();
        let t = b.build().unwrap();

        // Ring of A: links 0 -> 1 -> 0; C took slot 1, B took slot 0.
        assert_eq!(t.primary_link(a), LinkIndex::new(0));
        assert_eq!(t.next(LinkIndex::new(0)), LinkIndex::new(1));
        assert_eq!(t.next(LinkIndex::new(1)), LinkIndex::new(0));
        assert_eq!(t.link_node(t.outer(LinkIndex::new(1))), c);
        assert_eq!(t.link_node(t.outer(LinkIndex::new(0))), bb);

        // Edge 0 leads to C, and its primary half sits at the root.
        let e0 = EdgeIndex::new(0);
        assert_eq!(t.primary_node(e0), a);
        assert_eq!(t.secondary_node(e0), c);
        assert_eq!(*t.edge_payload(e0), 3.0);
        assert_eq!(t.edge_secondary_link(e0), t.primary_link(c));

        // Leaves close their ring on the single up link.
        let up = t.primary_link(bb);
        assert_eq!(t.next(up), up);
    }
}
