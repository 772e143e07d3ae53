use std::fmt;

/// Internal-consistency failure of the ordering store.
///
/// None of these are expected in normal use. They signal a defect (or an
/// unusable configuration) and must not be papered over: continuing with a
/// corrupted order would silently mis-render the scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Neighbour links disagree for the item `id`.
    BrokenLink { id: String, detail: &'static str },
    /// `len` distinct ranks do not fit between `floor` and `base`.
    RankSpaceExhausted { len: usize, floor: i64, base: i64 },
    /// The configuration was rejected at construction.
    InvalidConfig(String),
}

impl OrderError {
    pub(crate) fn broken_link(id: &str, detail: &'static str) -> Self {
        Self::BrokenLink { id: id.to_owned(), detail }
    }
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BrokenLink { id, detail } => {
                write!(f, "order list corrupted at `{id}`: {detail}")
            }
            Self::RankSpaceExhausted { len, floor, base } => write!(
                f,
                "cannot assign {len} distinct ranks between {floor} and {base}"
            ),
            Self::InvalidConfig(msg) => write!(f, "invalid order config: {msg}"),
        }
    }
}

impl std::error::Error for OrderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_item() {
        let e = OrderError::broken_link("tile-3", "prev.next does not point back");
        assert_eq!(
            e.to_string(),
            "order list corrupted at `tile-3`: prev.next does not point back"
        );
    }

    #[test]
    fn display_exhausted() {
        let e = OrderError::RankSpaceExhausted { len: 5, floor: 0, base: 2 };
        assert_eq!(e.to_string(), "cannot assign 5 distinct ranks between 0 and 2");
    }
}
