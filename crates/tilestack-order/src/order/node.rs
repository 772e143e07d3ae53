use std::sync::Arc;

use super::{Rank, StableKey};

/// Slab handle of a node. Only meaningful inside the owning store.
pub(crate) type NodeId = usize;

/// One tracked item. Links are slab handles, never references.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub id: Arc<str>,
    pub stable_key: StableKey,
    pub rank: Rank,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
}

impl Node {
    pub fn new(id: Arc<str>, stable_key: StableKey, rank: Rank) -> Self {
        Self { id, stable_key, rank, prev: None, next: None }
    }
}
