//! Active list of accepted points that may still spawn candidates.
use rand::RngCore;

use crate::random::rand_index;

/// Ordered store indices of the points that are still active.
#[derive(Clone, Debug, Default)]
pub(crate) struct ActiveFrontier {
    entries: Vec<usize>,
}

impl ActiveFrontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn push(&mut self, store_index: usize) {
        self.entries.push(store_index);
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Picks a uniformly random entry, returning `(slot, store_index)`.
    ///
    /// The slot stays valid until the frontier is next modified.
    pub(crate) fn pick<R: RngCore + ?Sized>(&self, rng: &mut R) -> Option<(usize, usize)> {
        if self.entries.is_empty() {
            return None;
        }
        let slot = rand_index(rng, self.entries.len());
        Some((slot, self.entries[slot]))
    }

    /// Removes the entry at `slot`, keeping the order of the remaining entries.
    pub(crate) fn evict(&mut self, slot: usize) -> usize {
        self.entries.remove(slot)
    }
}
