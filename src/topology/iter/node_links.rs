use std::iter::FusedIterator;

use super::TraversalStep;
use crate::topology::index::LinkIndex;
use crate::topology::tree::Topology;

/// Iterates the ring of one node, beginning and ending at the start link.
///
/// A fresh iterator is needed to walk the ring again.
#[derive(Clone, Debug)]
pub struct NodeLinks<'a, N, E> {
    tree: &'a Topology<N, E>,
    start: LinkIndex,
    current: Option<LinkIndex>,
}

impl<'a, N, E> NodeLinks<'a, N, E> {
    pub fn new(tree: &'a Topology<N, E>, start: LinkIndex) -> Self {
        Self {
            tree,
            start,
            current: Some(start),
        }
    }

    #[inline]
    pub fn start_link(&self) -> LinkIndex {
        self.start
    }
}

impl<N, E> Iterator for NodeLinks<'_, N, E> {
    type Item = TraversalStep;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.current?;
        let next = self.tree.next(link);
        self.current = (next != self.start).then_some(next);
        Some(TraversalStep::new(
            self.tree,
            link,
            link == self.start,
            self.current.is_none(),
        ))
    }
}

impl<N, E> FusedIterator for NodeLinks<'_, N, E> {}

#[cfg(test)]
mod tests {
    use crate::topology::builder::TopologyBuilder;
    use crate::topology::index::{LinkIndex, NodeIndex};

    #[test]
    fn walks_ring_once() {
        let mut b = TopologyBuilder::<(), ()>::new();
        b.add_root((), 3).unwrap();
        for _ in 0..3 {
            b.add_node((), (), 0).unwrap();
        }
        let t = b.build().unwrap();

        let steps: Vec<_> = t.ring_from(LinkIndex::new(1)).collect();
        let links: Vec<_> = steps.iter().map(|s| s.link().get()).collect();
        assert_eq!(links, vec![1, 2, 0]);
        assert!(steps[0].is_first_iteration());
        assert!(!steps[1].is_first_iteration());
        assert!(steps[2].is_last_iteration());
        assert!(steps.iter().all(|s| s.node() == NodeIndex::new(0)));

        // A leaf ring has exactly one element, both first and last.
        let leaf: Vec<_> = t.node_links(NodeIndex::new(1)).collect();
        assert_eq!(leaf.len(), 1);
        assert!(leaf[0].is_first_iteration() && leaf[0].is_last_iteration());
    }
}
