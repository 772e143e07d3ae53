//! Click-to-front ordering.
//!
//! Responsibilities:
//! - keep tracked ids in a doubly linked list over a slab arena (front = top)
//! - O(1) move-to-front and removal through an id -> handle index
//! - keep a numeric [`Rank`] per id, strictly decreasing front to back
//! - hand ranks to the rendering layer through [`RankSink`]

mod iter;
mod key;
mod node;
mod rank;
mod sink;
mod store;


pub use iter::{Iter, OrderEntry};
pub use key::{stable_key, StableKey};
pub use rank::Rank;
pub use sink::RankSink;
pub use store::OrderStore;
