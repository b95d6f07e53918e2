//! Canonical document order.
//!
//! Every tree element receives a monotonically increasing order id exactly
//! once, at construction. The serializer sorts siblings by these ids, so a
//! document always renders in the order its elements were created, not the
//! order containers happen to iterate in.

use std::sync::atomic::{AtomicU64, Ordering};

/// Position of an element in canonical document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderId(pub u64);

/// Issues order ids. Scope one source per document set whose elements must
/// interleave coherently; ids from different sources are not comparable in
/// any meaningful way.
#[derive(Debug, Default)]
pub struct OrderSource {
    next: AtomicU64,
}

impl OrderSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next id. Safe to call from concurrent constructors sharing one
    /// source.
    pub fn next(&self) -> OrderId {
        OrderId(self.next.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_strictly_increasing() {
        let source = OrderSource::new();
        let a = source.next();
        let b = source.next();
        let c = source.next();
        assert!(a < b && b < c);
    }

    #[test]
    fn independent_sources_start_over() {
        assert_eq!(OrderSource::new().next(), OrderSource::new().next());
    }
}
