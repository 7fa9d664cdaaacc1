//! A rooted part of a [`Topology`], named by a single link.
//!
//! `Subtree::new(l)` denotes the node owning `l` together with everything that
//! can be reached from it without crossing `l`'s edge. Walking from the root
//! side, the subtree hanging below an edge is therefore
//! `Subtree::new(secondary_link(edge))`.

use crate::algs::subtrees::subtree_size;
use crate::topology::index::{EdgeIndex, LinkIndex, NodeIndex};
use crate::topology::tree::Topology;
use crate::topology_error::TopologyError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subtree {
    link: LinkIndex,
}

impl Subtree {
    #[inline]
    pub fn new(link: LinkIndex) -> Self {
        Self { link }
    }

    /// The part of the tree on the far side of `edge` as seen from the root.
    pub fn below_edge<N, E>(tree: &Topology<N, E>, edge: EdgeIndex) -> Self {
        Self::new(tree.edge_secondary_link(edge))
    }

    /// The link that delimits the subtree; it points out of the subtree.
    #[inline]
    pub fn link(&self) -> LinkIndex {
        self.link
    }

    /// Top node of the subtree.
    pub fn node<N, E>(&self, tree: &Topology<N, E>) -> NodeIndex {
        tree.link_node(self.link)
    }

    /// Edge connecting the subtree to the rest of the tree.
    pub fn edge<N, E>(&self, tree: &Topology<N, E>) -> EdgeIndex {
        tree.link_edge(self.link)
    }

    /// The complementary subtree on the other side of the delimiting edge.
    pub fn invert<N, E>(&self, tree: &Topology<N, E>) -> Self {
        Self::new(tree.outer(self.link))
    }

    /// Number of nodes in the subtree, top node included.
    ///
    /// # Errors
    /// [`TopologyError::ForeignLink`] if the link is not part of `tree`.
    pub fn size<N, E>(&self, tree: &Topology<N, E>) -> Result<usize, TopologyError> {
        tree.ensure_link(self.link)?;
        subtree_size(tree, tree.outer(self.link))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::builder::TopologyBuilder;

    // ((C,D)B,E)A;
    fn small() -> Topology {
        let mut b = TopologyBuilder::new();
        b.add_root((), 2).unwrap();
        b.add_node((), (), 0).unwrap(); // E
        b.add_node((), (), 2).unwrap(); // B
        b.add_node((), (), 0).unwrap(); // D
        b.add_node((), (), 0).unwrap(); // C
        b.build().unwrap()
    }

    #[test]
    fn sizes_on_both_sides() {
        let t = small();
        // Edge 1 connects A and B.
        let st = Subtree::below_edge(&t, EdgeIndex::new(1));
        assert_eq!(st.node(&t), NodeIndex::new(2));
        assert_eq!(st.edge(&t), EdgeIndex::new(1));
        assert_eq!(st.size(&t), Ok(3));
        assert_eq!(st.invert(&t).size(&t), Ok(2));
        assert_eq!(st.invert(&t).invert(&t), st);
    }

    #[test]
    fn foreign_link_is_rejected() {
        let t = small();
        let st = Subtree::new(LinkIndex::new(99));
        assert!(matches!(
            st.size(&t),
            Err(TopologyError::ForeignLink { link_count: 8, .. })
        ));
    }
}
