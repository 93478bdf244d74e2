use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct TableStats {
    inserts: AtomicU64,
    removals: AtomicU64,
    lookups: AtomicU64,
    hits: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableStatsSnapshot {
    pub inserts: u64,
    pub removals: u64,
    pub lookups: u64,
    pub hits: u64,
    pub misses: u64,
}

impl TableStats {
    pub fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_removal(&self) {
        self.removals.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lookup(&self, hit: bool) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        if hit {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> TableStatsSnapshot {
        let lookups = self.lookups.load(Ordering::Relaxed);
        let hits = self.hits.load(Ordering::Relaxed);
        TableStatsSnapshot {
            inserts: self.inserts.load(Ordering::Relaxed),
            removals: self.removals.load(Ordering::Relaxed),
            lookups,
            hits,
            misses: lookups.saturating_sub(hits),
        }
    }
}
