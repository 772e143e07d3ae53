use core::hash::{Hash, Hasher};
use core::ops::Range;

use rustc_hash::FxHasher;

/// Deterministic fallback ordering value derived from an id.
///
/// Only meant for presentation before an id is tracked. Live order never
/// looks at it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct StableKey(pub u32);

impl StableKey {
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Hashes `id` into `range` (half-open).
///
/// Pure: the same id and range always give the same key, tracked or not.
/// Different ids may collide.
///
/// # Panics
/// Panics (debug only) if `range` is empty.
pub fn stable_key(id: &str, range: Range<u32>) -> StableKey {
    debug_assert!(!range.is_empty(), "stable_key range must not be empty");
    let span = u64::from(range.end.saturating_sub(range.start)).max(1);

    let mut hasher = FxHasher::default();
    id.hash(&mut hasher);
    let offset = hasher.finish() % span;

    // offset < span <= u32::MAX - start, so this cannot overflow.
    StableKey(range.start + offset as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        assert_eq!(stable_key("tile-1", 1000..9000), stable_key("tile-1", 1000..9000));
    }

    #[test]
    fn within_range() {
        for i in 0..500 {
            let k = stable_key(&format!("tile-{i}"), 1000..9000).get();
            assert!((1000..9000).contains(&k), "{k} out of range");
        }
    }

    #[test]
    fn single_value_range() {
        assert_eq!(stable_key("anything", 42..43).get(), 42);
    }

    #[test]
    fn empty_id_is_valid() {
        let k = stable_key("", 0..10).get();
        assert!(k < 10);
    }
}
