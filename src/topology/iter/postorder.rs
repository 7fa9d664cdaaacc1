use std::iter::FusedIterator;

use super::TraversalStep;
use crate::topology::index::LinkIndex;
use crate::topology::subtree::Subtree;
use crate::topology::tree::Topology;

#[derive(Copy, Clone, Debug)]
enum Frame {
    /// Children of the link's node still have to be scheduled.
    Expand(LinkIndex),
    /// Everything below is done; yield the link.
    Emit(LinkIndex),
}

/// Depth-first postorder: a node is yielded after all subtrees below it.
///
/// The subtree order matches [`Preorder`](super::Preorder). The final step is
/// the start node itself, reported through the starting link and flagged by
/// [`TraversalStep::is_last_iteration`]; its edge does not lead to a parent.
#[derive(Clone, Debug)]
pub struct Postorder<'a, N, E> {
    tree: &'a Topology<N, E>,
    stack: Vec<Frame>,
    started: bool,
}

impl<'a, N, E> Postorder<'a, N, E> {
    pub fn from_link(tree: &'a Topology<N, E>, link: LinkIndex) -> Self {
        let mut it = Self {
            tree,
            stack: vec![Frame::Emit(link)],
            started: false,
        };
        it.schedule_children(link);
        it.stack.push(Frame::Expand(tree.outer(link)));
        it
    }

    pub fn from_subtree(tree: &'a Topology<N, E>, subtree: Subtree) -> Self {
        Self {
            tree,
            stack: vec![Frame::Expand(subtree.link())],
            started: false,
        }
    }

    /// Schedule `outer(x)` for every `x` after `link` in its ring, first on top.
    fn schedule_children(&mut self, link: LinkIndex) {
        let mark = self.stack.len();
        let mut cur = self.tree.next(link);
        while cur != link {
            self.stack.push(Frame::Expand(self.tree.outer(cur)));
            cur = self.tree.next(cur);
        }
        self.stack[mark..].reverse();
    }
}

impl<N, E> Iterator for Postorder<'_, N, E> {
    type Item = TraversalStep;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Frame::Expand(link) => {
                    self.stack.push(Frame::Emit(link));
                    self.schedule_children(link);
                }
                Frame::Emit(link) => {
                    let first = !self.started;
                    self.started = true;
                    return Some(TraversalStep::new(
                        self.tree,
                        link,
                        first,
                        self.stack.is_empty(),
                    ));
                }
            }
        }
    }
}

impl<N, E> FusedIterator for Postorder<'_, N, E> {}
