use core::iter::FusedIterator;

use slab::Slab;

use super::node::{Node, NodeId};
use super::{Rank, StableKey};

/// Read-only view of one tracked item.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct OrderEntry<'a> {
    pub id: &'a str,
    pub rank: Rank,
    pub stable_key: StableKey,
}

impl<'a> OrderEntry<'a> {
    pub(crate) fn from_node(node: &'a Node) -> Self {
        Self { id: &node.id, rank: node.rank, stable_key: node.stable_key }
    }
}

/// Front-to-back walk over the store's list.
///
/// Restartable: ask the store for a new one (or clone this one). Reverse it
/// with `.rev()` to get paint order (back-to-front).
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    nodes: &'a Slab<Node>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(
        nodes: &'a Slab<Node>,
        head: Option<NodeId>,
        tail: Option<NodeId>,
        len: usize,
    ) -> Self {
        Self { nodes, head, tail, remaining: len }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = OrderEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.head?)?;
        self.remaining -= 1;
        self.head = node.next;
        Some(OrderEntry::from_node(node))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.tail?)?;
        self.remaining -= 1;
        self.tail = node.prev;
        Some(OrderEntry::from_node(node))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
