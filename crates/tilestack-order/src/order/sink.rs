use super::Rank;

/// Receiver of draw-order values, implemented by the rendering layer.
///
/// [`OrderStore::sync_into`](super::OrderStore::sync_into) feeds it every
/// tracked id front to back.
pub trait RankSink {
    fn apply_rank(&mut self, id: &str, rank: Rank);
}

impl<F> RankSink for F
where
    F: FnMut(&str, Rank),
{
    #[inline]
    fn apply_rank(&mut self, id: &str, rank: Rank) {
        self(id, rank)
    }
}

impl RankSink for Vec<(String, Rank)> {
    #[inline]
    fn apply_rank(&mut self, id: &str, rank: Rank) {
        self.push((id.to_owned(), rank));
    }
}
