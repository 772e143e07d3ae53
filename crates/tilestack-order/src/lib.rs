//! Tilestack ordering crate.
//!
//! Tracks a growing/shrinking set of tiles by id and keeps them in
//! "last touched is on top" order. The rendering layer reads a numeric
//! [`Rank`](order::Rank) per tile and never sees the list itself.
//!
//! # Quick start
//!
//! ```
//! use tilestack_order::order::OrderStore;
//!
//! let mut store = OrderStore::new();
//! store.move_to_front("a").unwrap();
//! store.move_to_front("b").unwrap();
//! store.move_to_front("a").unwrap();
//!
//! assert_eq!(store.ids().collect::<Vec<_>>(), ["a", "b"]);
//! assert!(store.rank_of("a") > store.rank_of("b"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod order;
pub mod shared;

pub use config::{OrderConfig, RankPolicy};
pub use error::OrderError;
pub use order::{OrderEntry, OrderStore, Rank, RankSink, StableKey};
pub use shared::SharedOrderStore;
