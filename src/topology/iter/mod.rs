//! Traversal iterators over a [`Topology`].
//!
//! All iterators walk the link rings; none of them allocate per step beyond a
//! shared explicit stack, and none recurse. Each one yields a
//! [`TraversalStep`]: the link through which a node is visited, together with
//! the node and edge of that link and two flags.
//!
//! - [`NodeLinks`]: the ring of a single node, starting at a given link.
//! - [`Preorder`]: a node before everything below it.
//! - [`Postorder`]: a node after everything below it.
//! - [`Eulertour`]: every link of the tree, following `next(outer(l))`.
//!
//! For every step after the first, `link` is the link of the visited node that
//! points back toward the start of the traversal, so `edge` is the edge just
//! crossed. The step at the start node carries the starting link instead;
//! its edge is not a crossed edge, and consumers skip it via
//! [`TraversalStep::is_first_iteration`] (preorder) or
//! [`TraversalStep::is_last_iteration`] (postorder).

pub mod eulertour;
pub mod node_links;
pub mod postorder;
pub mod preorder;

pub use eulertour::Eulertour;
pub use node_links::NodeLinks;
pub use postorder::Postorder;
pub use preorder::Preorder;

use crate::topology::index::{EdgeIndex, LinkIndex, NodeIndex};
use crate::topology::subtree::Subtree;
use crate::topology::tree::Topology;

/// One element produced by a traversal iterator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TraversalStep {
    link: LinkIndex,
    node: NodeIndex,
    edge: EdgeIndex,
    first: bool,
    last: bool,
}

impl TraversalStep {
    #[inline]
    pub(crate) fn new<N, E>(tree: &Topology<N, E>, link: LinkIndex, first: bool, last: bool) -> Self {
        Self {
            link,
            node: tree.link_node(link),
            edge: tree.link_edge(link),
            first,
            last,
        }
    }

    #[inline]
    pub fn link(&self) -> LinkIndex {
        self.link
    }

    #[inline]
    pub fn node(&self) -> NodeIndex {
        self.node
    }

    #[inline]
    pub fn edge(&self) -> EdgeIndex {
        self.edge
    }

    /// True for the very first step of the traversal.
    #[inline]
    pub fn is_first_iteration(&self) -> bool {
        self.first
    }

    /// True for the final step of the traversal.
    #[inline]
    pub fn is_last_iteration(&self) -> bool {
        self.last
    }
}

/// Push `outer(x)` for every link `x` after `link` in its ring, so that the
/// first of them ends up on top of `stack`.
pub(crate) fn push_children<N, E>(
    tree: &Topology<N, E>,
    link: LinkIndex,
    stack: &mut Vec<LinkIndex>,
) {
    let mark = stack.len();
    let mut cur = tree.next(link);
    while cur != link {
        stack.push(tree.outer(cur));
        cur = tree.next(cur);
    }
    stack[mark..].reverse();
}

/// Convenience constructors for the traversal iterators.
impl<N, E> Topology<N, E> {
    /// Ring of `node`, starting at its primary link.
    pub fn node_links(&self, node: NodeIndex) -> NodeLinks<'_, N, E> {
        NodeLinks::new(self, self.primary_link(node))
    }

    /// Ring containing `link`, starting at `link`.
    pub fn ring_from(&self, link: LinkIndex) -> NodeLinks<'_, N, E> {
        NodeLinks::new(self, link)
    }

    /// Preorder over the whole tree, starting at the root.
    pub fn preorder(&self) -> Preorder<'_, N, E> {
        Preorder::from_link(self, self.root_link())
    }

    /// Preorder over the whole tree, starting at `link`'s node.
    pub fn preorder_from(&self, link: LinkIndex) -> Preorder<'_, N, E> {
        Preorder::from_link(self, link)
    }

    /// Preorder over `subtree` only.
    pub fn preorder_subtree(&self, subtree: Subtree) -> Preorder<'_, N, E> {
        Preorder::from_subtree(self, subtree)
    }

    /// Postorder over the whole tree, finishing at the root.
    pub fn postorder(&self) -> Postorder<'_, N, E> {
        Postorder::from_link(self, self.root_link())
    }

    /// Postorder over the whole tree, finishing at `link`'s node.
    pub fn postorder_from(&self, link: LinkIndex) -> Postorder<'_, N, E> {
        Postorder::from_link(self, link)
    }

    /// Postorder over `subtree` only.
    pub fn postorder_subtree(&self, subtree: Subtree) -> Postorder<'_, N, E> {
        Postorder::from_subtree(self, subtree)
    }

    /// Eulertour over the whole tree, starting at the root.
    pub fn eulertour(&self) -> Eulertour<'_, N, E> {
        Eulertour::new(self, self.root_link())
    }

    /// Eulertour starting at the primary link of `node`.
    pub fn eulertour_from_node(&self, node: NodeIndex) -> Eulertour<'_, N, E> {
        Eulertour::new(self, self.primary_link(node))
    }

    /// Eulertour starting at `link`.
    pub fn eulertour_from(&self, link: LinkIndex) -> Eulertour<'_, N, E> {
        Eulertour::new(self, link)
    }
}
