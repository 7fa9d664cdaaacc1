use std::iter::FusedIterator;

use super::TraversalStep;
use crate::topology::index::LinkIndex;
use crate::topology::tree::Topology;

/// Walks every link of the tree by repeatedly moving to `next(outer(l))`.
///
/// Inner nodes show up once per incident link, so the tour revisits a node
/// each time it returns from one of its subtrees. The walk ends when it is
/// back at the start link.
#[derive(Clone, Debug)]
pub struct Eulertour<'a, N, E> {
    tree: &'a Topology<N, E>,
    start: LinkIndex,
    current: Option<LinkIndex>,
}

impl<'a, N, E> Eulertour<'a, N, E> {
    pub fn new(tree: &'a Topology<N, E>, start: LinkIndex) -> Self {
        Self {
            tree,
            start,
            current: Some(start),
        }
    }
}

impl<N, E> Iterator for Eulertour<'_, N, E> {
    type Item = TraversalStep;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.current?;
        let next = self.tree.next(self.tree.outer(link));
        self.current = (next != self.start).then_some(next);
        Some(TraversalStep::new(
            self.tree,
            link,
            link == self.start,
            self.current.is_none(),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current {
            Some(_) => (1, Some(self.tree.link_count())),
            None => (0, Some(0)),
        }
    }
}

impl<N, E> FusedIterator for Eulertour<'_, N, E> {}
