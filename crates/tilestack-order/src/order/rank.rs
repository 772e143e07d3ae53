use core::cmp::Ordering;
use core::fmt;

/// Draw-order value for a tracked item.
///
/// Higher values are drawn on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Rank(pub i64);

impl Rank {
    #[inline]
    pub const fn new(v: i64) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Narrows to a 32-bit z value, saturating at the `i32` bounds.
    #[inline]
    pub fn to_z(self) -> i32 {
        self.0.clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }
}

impl Ord for Rank {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for Rank {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_is_greater() {
        assert!(Rank::new(9000) > Rank::new(8999));
    }

    #[test]
    fn to_z_saturates() {
        assert_eq!(Rank::new(i64::MAX).to_z(), i32::MAX);
        assert_eq!(Rank::new(i64::MIN).to_z(), i32::MIN);
        assert_eq!(Rank::new(-7).to_z(), -7);
    }
}
