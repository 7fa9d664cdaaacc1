use std::iter::FusedIterator;

use super::{TraversalStep, push_children};
use crate::topology::index::LinkIndex;
use crate::topology::subtree::Subtree;
use crate::topology::tree::Topology;

/// Depth-first preorder: a node is yielded before the subtrees below it,
/// which are visited in ring order.
///
/// Started from a link `l`, the walk covers the whole tree: `l`'s node, then
/// the subtree behind `outer(l)`, then the subtrees behind the remaining links
/// of the ring. Started from a [`Subtree`], the walk stays inside it.
#[derive(Clone, Debug)]
pub struct Preorder<'a, N, E> {
    tree: &'a Topology<N, E>,
    stack: Vec<LinkIndex>,
    current: Option<LinkIndex>,
    started: bool,
}

impl<'a, N, E> Preorder<'a, N, E> {
    pub fn from_link(tree: &'a Topology<N, E>, link: LinkIndex) -> Self {
        let mut stack = Vec::new();
        push_children(tree, link, &mut stack);
        stack.push(tree.outer(link));
        Self {
            tree,
            stack,
            current: Some(link),
            started: false,
        }
    }

    pub fn from_subtree(tree: &'a Topology<N, E>, subtree: Subtree) -> Self {
        let mut stack = Vec::new();
        push_children(tree, subtree.link(), &mut stack);
        Self {
            tree,
            stack,
            current: Some(subtree.link()),
            started: false,
        }
    }
}

impl<N, E> Iterator for Preorder<'_, N, E> {
    type Item = TraversalStep;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.current?;
        self.current = self.stack.pop();
        if let Some(up) = self.current {
            push_children(self.tree, up, &mut self.stack);
        }
        let first = !self.started;
        self.started = true;
        Some(TraversalStep::new(
            self.tree,
            link,
            first,
            self.current.is_none(),
        ))
    }
}

impl<N, E> FusedIterator for Preorder<'_, N, E> {}
