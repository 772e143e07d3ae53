//! Construction-time configuration for [`OrderStore`](crate::order::OrderStore).

use std::ops::Range;

use crate::error::OrderError;

/// How ranks are kept in sync with list position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum RankPolicy {
    /// Relabel the whole list after every structural change.
    ///
    /// Reordering is O(1); rank sync is O(n). Fine because it runs per user
    /// interaction, not per frame.
    #[default]
    FullRelabel,
    /// Give the moved item `previous front rank + gap` and only relabel when
    /// that would cross `rank_ceiling`. Amortized O(1) per move.
    Gapped,
}

/// Ordering store configuration.
///
/// Ranks default to the `i32` range so they always fit a 32-bit z value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfig {
    pub policy: RankPolicy,
    /// Rank of the front-most item right after a relabel.
    pub base_rank: i64,
    /// Spacing between adjacent ranks.
    pub rank_gap: i64,
    pub rank_floor: i64,
    pub rank_ceiling: i64,
    /// Half-open range of [`stable_key`](crate::order::stable_key) values.
    pub stable_key_range: Range<u32>,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            policy: RankPolicy::FullRelabel,
            base_rank: 9000,
            rank_gap: 1,
            rank_floor: i32::MIN as i64,
            rank_ceiling: i32::MAX as i64,
            stable_key_range: 1000..9000,
        }
    }
}

impl OrderConfig {
    /// Defaults for the gapped policy (gap 1000).
    pub fn gapped() -> Self {
        Self {
            policy: RankPolicy::Gapped,
            rank_gap: 1000,
            ..Self::default()
        }
    }

    pub fn policy(mut self, policy: RankPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn base_rank(mut self, base_rank: i64) -> Self {
        self.base_rank = base_rank;
        self
    }

    pub fn rank_gap(mut self, gap: i64) -> Self {
        self.rank_gap = gap;
        self
    }

    pub fn rank_bounds(mut self, floor: i64, ceiling: i64) -> Self {
        self.rank_floor = floor;
        self.rank_ceiling = ceiling;
        self
    }

    pub fn stable_key_range(mut self, range: Range<u32>) -> Self {
        self.stable_key_range = range;
        self
    }

    /// Rejects configurations the store cannot honour.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.rank_gap < 1 {
            return Err(OrderError::InvalidConfig(format!(
                "rank_gap must be at least 1, got {}",
                self.rank_gap
            )));
        }
        if self.rank_floor > self.rank_ceiling {
            return Err(OrderError::InvalidConfig(format!(
                "rank_floor {} is above rank_ceiling {}",
                self.rank_floor, self.rank_ceiling
            )));
        }
        if !(self.rank_floor..=self.rank_ceiling).contains(&self.base_rank) {
            return Err(OrderError::InvalidConfig(format!(
                "base_rank {} is outside {}..={}",
                self.base_rank, self.rank_floor, self.rank_ceiling
            )));
        }
        if self.stable_key_range.is_empty() {
            return Err(OrderError::InvalidConfig(format!(
                "stable_key_range {:?} is empty",
                self.stable_key_range
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(OrderConfig::default().validate().is_ok());
        assert!(OrderConfig::gapped().validate().is_ok());
    }

    #[test]
    fn gapped_defaults() {
        let c = OrderConfig::gapped();
        assert_eq!(c.policy, RankPolicy::Gapped);
        assert_eq!(c.rank_gap, 1000);
        assert_eq!(c.base_rank, 9000);
    }

    #[test]
    fn rejects_zero_gap() {
        assert!(OrderConfig::default().rank_gap(0).validate().is_err());
    }

    #[test]
    fn rejects_base_outside_bounds() {
        let c = OrderConfig::default().rank_bounds(0, 100);
        assert!(matches!(c.validate(), Err(OrderError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let c = OrderConfig::default().rank_bounds(10, 0).base_rank(5);
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_empty_key_range() {
        let c = OrderConfig::default().stable_key_range(10..10);
        assert!(c.validate().is_err());
    }
}
