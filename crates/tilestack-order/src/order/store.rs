use std::sync::Arc;

use rustc_hash::FxHashMap;
use slab::Slab;

use crate::config::{OrderConfig, RankPolicy};
use crate::error::OrderError;

use super::iter::{Iter, OrderEntry};
use super::key::{stable_key, StableKey};
use super::node::{Node, NodeId};
use super::{Rank, RankSink};

/// Ordered set of tracked ids, most recently touched first.
///
/// Storage is a slab arena of nodes linked by handle, plus an id -> handle
/// index, so `move_to_front` and `remove` splice in O(1). How ranks follow
/// the splice depends on [`RankPolicy`].
///
/// Performance characteristics:
/// - `move_to_front()` is O(1) for the list; rank sync is O(n) under
///   `FullRelabel`, amortized O(1) under `Gapped`
/// - `remove()` is O(1) under `Gapped`, O(n) under `FullRelabel`
/// - `rank_of()`, `len()`, `contains()` are O(1)
///
/// The store is a plain owned value. Hand it by reference to whoever needs
/// ordering, or wrap it in [`SharedOrderStore`](crate::SharedOrderStore)
/// for multi-threaded hosts.
#[derive(Debug)]
pub struct OrderStore {
    config: OrderConfig,
    nodes: Slab<Node>,
    index: FxHashMap<Arc<str>, NodeId>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    /// Bumped on every structural change or relabel.
    revision: u64,
}

impl OrderStore {
    /// Creates an empty store with the default (full relabel) config.
    pub fn new() -> Self {
        Self::build(OrderConfig::default())
    }

    /// Creates an empty store after validating `config`.
    pub fn with_config(config: OrderConfig) -> Result<Self, OrderError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: OrderConfig) -> Self {
        Self {
            config,
            nodes: Slab::new(),
            index: FxHashMap::default(),
            front: None,
            back: None,
            revision: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &OrderConfig {
        &self.config
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Brings `id` to the front, tracking it first if needed, and returns
    /// its new rank (the highest currently assigned).
    ///
    /// Calling it for the id that is already in front changes nothing.
    pub fn move_to_front(&mut self, id: &str) -> Result<Rank, OrderError> {
        let handle = match self.index.get(id) {
            Some(&h) => {
                if self.front == Some(h) {
                    return Ok(self.nodes[h].rank);
                }
                self.unlink(h)?;
                h
            }
            None => self.insert_node(id),
        };

        self.link_front(handle);
        self.revision = self.revision.wrapping_add(1);
        log::trace!("moved `{id}` to front ({} tracked)", self.nodes.len());

        match self.config.policy {
            RankPolicy::FullRelabel => self.relabel()?,
            RankPolicy::Gapped => self.rank_new_front(handle)?,
        }

        Ok(self.nodes[handle].rank)
    }

    /// Stops tracking `id`. Returns `false` if it was never tracked.
    pub fn remove(&mut self, id: &str) -> Result<bool, OrderError> {
        let Some(&handle) = self.index.get(id) else {
            return Ok(false);
        };

        self.unlink(handle)?;
        let node = self.nodes.remove(handle);
        self.index.remove(&node.id);
        self.revision = self.revision.wrapping_add(1);
        log::trace!("removed `{id}` ({} tracked)", self.nodes.len());

        // Gapped ranks stay strictly decreasing when a link is dropped.
        if self.config.policy == RankPolicy::FullRelabel {
            self.relabel()?;
        }
        Ok(true)
    }

    /// Drops every tracked item. Keeps allocated capacity for reuse.
    pub fn reset(&mut self) {
        let dropped = self.nodes.len();
        self.nodes.clear();
        self.index.clear();
        self.front = None;
        self.back = None;
        self.revision = self.revision.wrapping_add(1);
        log::debug!("order store reset, dropped {dropped} items");
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Current rank of `id`, or `base_rank` if it is not tracked.
    ///
    /// Untracked ids report the front default on purpose, so a tile that has
    /// never been touched renders on top until the store orders it.
    pub fn rank_of(&self, id: &str) -> Rank {
        match self.index.get(id) {
            Some(&h) => self.nodes[h].rank,
            None => Rank(self.config.base_rank),
        }
    }

    /// Deterministic fallback key for `id` within the configured range.
    ///
    /// Independent of whether `id` is tracked.
    #[inline]
    pub fn stable_key_for(&self, id: &str) -> StableKey {
        stable_key(id, self.config.stable_key_range.clone())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<OrderEntry<'_>> {
        let &h = self.index.get(id)?;
        Some(OrderEntry::from_node(&self.nodes[h]))
    }

    /// Id currently on top, if any.
    pub fn front(&self) -> Option<&str> {
        self.front.map(|h| &*self.nodes[h].id)
    }

    /// Id currently at the bottom, if any.
    pub fn back(&self) -> Option<&str> {
        self.back.map(|h| &*self.nodes[h].id)
    }

    /// Changes whenever order or ranks may have changed.
    ///
    /// Renderers can compare it against the last synced value to skip work.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Entries front to back. `.rev()` gives paint order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.nodes, self.front, self.back, self.nodes.len())
    }

    /// Ids front to back.
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = &str> + Clone + '_ {
        self.iter().map(|e| e.id)
    }

    /// Owned snapshot of the ids front to back.
    pub fn ids_in_order(&self) -> Vec<String> {
        self.ids().map(str::to_owned).collect()
    }

    /// Pushes every `(id, rank)` pair into `sink`, front to back.
    pub fn sync_into<S: RankSink + ?Sized>(&self, sink: &mut S) {
        for entry in self.iter() {
            sink.apply_rank(entry.id, entry.rank);
        }
    }

    // ── Validation ────────────────────────────────────────────────────────

    /// Walks the whole structure and checks every ordering invariant.
    ///
    /// O(n). Checks: index and list hold the same ids exactly once, links are
    /// symmetric and acyclic, the ends have no outer neighbour, and ranks
    /// strictly decrease front to back.
    pub fn check_invariants(&self) -> Result<(), OrderError> {
        if self.index.len() != self.nodes.len() {
            return Err(OrderError::BrokenLink {
                id: String::new(),
                detail: "index and arena sizes differ",
            });
        }

        let mut prev: Option<NodeId> = None;
        let mut cursor = self.front;
        let mut seen = 0usize;

        while let Some(h) = cursor {
            let Some(node) = self.nodes.get(h) else {
                return Err(OrderError::BrokenLink {
                    id: String::new(),
                    detail: "link points at a vacant slot",
                });
            };
            seen += 1;
            if seen > self.nodes.len() {
                return Err(OrderError::broken_link(&node.id, "cycle in list"));
            }
            if node.prev != prev {
                return Err(OrderError::broken_link(&node.id, "prev does not match walk"));
            }
            if self.index.get(&*node.id) != Some(&h) {
                return Err(OrderError::broken_link(&node.id, "index points elsewhere"));
            }
            if let Some(p) = prev {
                if self.nodes[p].rank <= node.rank {
                    return Err(OrderError::broken_link(&node.id, "rank not below predecessor"));
                }
            }
            prev = cursor;
            cursor = node.next;
        }

        if seen != self.nodes.len() {
            return Err(OrderError::BrokenLink {
                id: String::new(),
                detail: "list does not reach every tracked item",
            });
        }
        if self.back != prev {
            return Err(OrderError::BrokenLink {
                id: String::new(),
                detail: "back does not match list tail",
            });
        }
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn insert_node(&mut self, id: &str) -> NodeId {
        let id: Arc<str> = Arc::from(id);
        let key = stable_key(&id, self.config.stable_key_range.clone());
        let handle = self
            .nodes
            .insert(Node::new(id.clone(), key, Rank(self.config.base_rank)));
        self.index.insert(id, handle);
        handle
    }

    /// Detaches `h` from its neighbours. Leaves `h` with no links.
    fn unlink(&mut self, h: NodeId) -> Result<(), OrderError> {
        let (prev, next) = {
            let node = &self.nodes[h];
            (node.prev, node.next)
        };

        match prev {
            Some(p) => {
                let back_link = self.nodes.get(p).and_then(|n| n.next);
                if back_link != Some(h) {
                    return Err(self.corrupted(h, "prev.next does not point back"));
                }
                self.nodes[p].next = next;
            }
            None => {
                if self.front != Some(h) {
                    return Err(self.corrupted(h, "no prev but not at front"));
                }
                self.front = next;
            }
        }

        match next {
            Some(n) => {
                let back_link = self.nodes.get(n).and_then(|n| n.prev);
                if back_link != Some(h) {
                    return Err(self.corrupted(h, "next.prev does not point back"));
                }
                self.nodes[n].prev = prev;
            }
            None => {
                if self.back != Some(h) {
                    return Err(self.corrupted(h, "no next but not at back"));
                }
                self.back = prev;
            }
        }

        let node = &mut self.nodes[h];
        node.prev = None;
        node.next = None;
        Ok(())
    }

    /// Links a detached `h` in front of the current front.
    fn link_front(&mut self, h: NodeId) {
        let old_front = self.front;
        {
            let node = &mut self.nodes[h];
            node.prev = None;
            node.next = old_front;
        }
        match old_front {
            Some(f) => self.nodes[f].prev = Some(h),
            None => self.back = Some(h),
        }
        self.front = Some(h);
    }

    /// Gapped policy: rank the freshly linked front above its successor,
    /// rebasing the whole list if that would cross the ceiling.
    fn rank_new_front(&mut self, h: NodeId) -> Result<(), OrderError> {
        let Some(next) = self.nodes[h].next else {
            self.nodes[h].rank = Rank(self.config.base_rank);
            return Ok(());
        };

        let candidate = self.nodes[next]
            .rank
            .0
            .checked_add(self.config.rank_gap)
            .filter(|&r| r <= self.config.rank_ceiling);

        match candidate {
            Some(r) => {
                self.nodes[h].rank = Rank(r);
                Ok(())
            }
            None => {
                log::debug!("rank ceiling {} reached, rebasing", self.config.rank_ceiling);
                self.relabel()
            }
        }
    }

    /// Reassigns ranks front to back: `base, base - gap, base - 2 * gap, …`.
    ///
    /// Shrinks the gap when the list would fall below `rank_floor`.
    fn relabel(&mut self) -> Result<(), OrderError> {
        let len = self.nodes.len();
        if len == 0 {
            return Ok(());
        }

        let base = self.config.base_rank;
        let floor = self.config.rank_floor;
        let steps = (len - 1) as i64;

        let mut gap = self.config.rank_gap;
        if steps > 0 {
            let room = base.saturating_sub(floor);
            let max_gap = room / steps;
            if max_gap < 1 {
                log::error!("rank space exhausted: {len} items between {floor} and {base}");
                return Err(OrderError::RankSpaceExhausted { len, floor, base });
            }
            if max_gap < gap {
                log::warn!("rank gap shrunk from {gap} to {max_gap} to fit {len} items");
                gap = max_gap;
            }
        }

        let mut rank = base;
        let mut cursor = self.front;
        while let Some(h) = cursor {
            let node = &mut self.nodes[h];
            node.rank = Rank(rank);
            cursor = node.next;
            // Only the value after the last node can leave the floor.
            rank = rank.saturating_sub(gap);
        }

        self.revision = self.revision.wrapping_add(1);
        log::debug!("relabeled {len} items (gap {gap})");
        Ok(())
    }

    fn corrupted(&self, h: NodeId, detail: &'static str) -> OrderError {
        let id = self.nodes.get(h).map(|n| &*n.id).unwrap_or("<vacant>");
        log::error!("order list corrupted at `{id}`: {detail}");
        OrderError::broken_link(id, detail)
    }

    #[cfg(test)]
    pub(crate) fn corrupt_prev_for_test(&mut self, id: &str, prev: Option<&str>) {
        let h = self.index[id];
        self.nodes[h].prev = prev.map(|p| self.index[p]);
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}
