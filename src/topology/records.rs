//! Arena records of the half-edge ("winged-edge") tree model.
//!
//! A tree is stored as three flat arenas:
//! - a [`Node`] knows its *primary link*, the link of its ring that points
//!   toward the root (at the root: the first link of its ring),
//! - an [`Edge`] knows its two links; the *primary* one sits at the endpoint
//!   nearer the root, the *secondary* one at the endpoint away from it,
//! - a [`Link`] (half-edge) knows its owning node and edge, the `next` link of
//!   its node's ring and the `outer` link on the other end of its edge.
//!
//! Nodes and edges carry an opaque payload chosen by the consumer; none of the
//! topology algorithms look at it.

use crate::topology::index::{EdgeIndex, LinkIndex, NodeIndex};

/// One half of an edge, owned by exactly one node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Link {
    pub(crate) node: NodeIndex,
    pub(crate) edge: EdgeIndex,
    pub(crate) next: LinkIndex,
    pub(crate) outer: LinkIndex,
}

impl Link {
    /// Node whose ring contains this link.
    #[inline]
    pub fn node(&self) -> NodeIndex {
        self.node
    }

    /// Edge this link is one half of.
    #[inline]
    pub fn edge(&self) -> EdgeIndex {
        self.edge
    }

    /// Next link in the owning node's ring.
    #[inline]
    pub fn next(&self) -> LinkIndex {
        self.next
    }

    /// The other half of the same edge.
    #[inline]
    pub fn outer(&self) -> LinkIndex {
        self.outer
    }
}

/// A tree node with consumer payload `N`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<N = ()> {
    pub(crate) primary_link: LinkIndex,
    pub(crate) payload: N,
}

impl<N> Node<N> {
    /// The link of this node's ring that points toward the root.
    #[inline]
    pub fn primary_link(&self) -> LinkIndex {
        self.primary_link
    }

    #[inline]
    pub fn payload(&self) -> &N {
        &self.payload
    }

    #[inline]
    pub fn payload_mut(&mut self) -> &mut N {
        &mut self.payload
    }

    /// Transform the payload `N` into `M`, keeping the topology fields.
    pub fn map<M>(self, f: impl FnOnce(N) -> M) -> Node<M> {
        Node {
            primary_link: self.primary_link,
            payload: f(self.payload),
        }
    }
}

/// A tree edge with consumer payload `E` (branch length, placement mass, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge<E = ()> {
    pub(crate) primary_link: LinkIndex,
    pub(crate) secondary_link: LinkIndex,
    pub(crate) payload: E,
}

impl<E> Edge<E> {
    /// Half of this edge at the endpoint nearer the root.
    #[inline]
    pub fn primary_link(&self) -> LinkIndex {
        self.primary_link
    }

    /// Half of this edge at the endpoint away from the root.
    #[inline]
    pub fn secondary_link(&self) -> LinkIndex {
        self.secondary_link
    }

    #[inline]
    pub fn payload(&self) -> &E {
        &self.payload
    }

    #[inline]
    pub fn payload_mut(&mut self) -> &mut E {
        &mut self.payload
    }

    /// Transform the payload `E` into `F`, keeping the topology fields.
    pub fn map<F>(self, f: impl FnOnce(E) -> F) -> Edge<F> {
        Edge {
            primary_link: self.primary_link,
            secondary_link: self.secondary_link,
            payload: f(self.payload),
        }
    }
}
