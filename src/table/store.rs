use crate::descriptor::RequestDescriptor;
use crate::pattern::PartialUrl;
use crate::table::snapshot::{Registration, TableSnapshot};
use crate::table::stats::{TableStats, TableStatsSnapshot};
use crate::table::{PartialUrlMatch, TableError, TableOptions, TableResult};
use crate::types::RegistrationId;
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug)]
struct TableState<V> {
    snapshot: Arc<TableSnapshot<V>>,
    sealed: bool,
    next_id: RegistrationId,
}

/// Every change publishes a new [`TableSnapshot`]; a lookup never sees a change
/// half applied.
#[derive(Debug)]
pub struct PatternTable<V> {
    inner: RwLock<TableState<V>>,
    stats: TableStats,
}

impl<V> PatternTable<V> {
    pub fn new(options: Option<TableOptions>) -> Self {
        let options = options.unwrap_or_default();
        Self {
            inner: RwLock::new(TableState {
                snapshot: Arc::new(TableSnapshot::empty(options)),
                sealed: false,
                next_id: 0,
            }),
            stats: TableStats::default(),
        }
    }

    pub fn insert(&self, pattern: PartialUrl, value: V) -> TableResult<RegistrationId> {
        self.insert_shared(pattern, Arc::new(value))
    }

    pub fn insert_shared(&self, pattern: PartialUrl, value: Arc<V>) -> TableResult<RegistrationId> {
        let mut guard = self.inner.write();

        if guard.sealed {
            return Err(TableError::InsertWhileSealed {
                pattern: pattern.to_string(),
            });
        }

        let current = guard.snapshot.clone();
        if current.position(&pattern).is_some() {
            return Err(TableError::DuplicatePattern {
                pattern: pattern.to_string(),
            });
        }

        let options = current.options().clone();
        if options.reject_duplicate_combinations {
            check_combinations(&current, &pattern)?;
        }

        let id = guard.next_id;
        guard.next_id += 1;

        tracing::event!(
            tracing::Level::TRACE,
            operation = "insert",
            registration = id,
            pattern = %pattern
        );

        let mut entries = current.entries().to_vec();
        entries.push(Arc::new(Registration::new(id, pattern, value)));
        guard.snapshot = Arc::new(TableSnapshot::build(entries, options));
        self.stats.record_insert();

        Ok(id)
    }

    pub fn remove(&self, pattern: &PartialUrl) -> TableResult<Option<Arc<V>>> {
        let mut guard = self.inner.write();

        if guard.sealed {
            return Err(TableError::RemoveWhileSealed {
                pattern: pattern.to_string(),
            });
        }

        let current = guard.snapshot.clone();
        let Some(idx) = current.position(pattern) else {
            return Ok(None);
        };

        tracing::event!(tracing::Level::TRACE, operation = "remove", pattern = %pattern);

        let mut entries = current.entries().to_vec();
        let removed = entries.remove(idx);
        guard.snapshot = Arc::new(TableSnapshot::build(entries, current.options().clone()));
        self.stats.record_removal();

        Ok(Some(removed.value().clone()))
    }

    pub fn seal(&self) {
        let mut guard = self.inner.write();
        guard.sealed = true;
        tracing::event!(
            tracing::Level::DEBUG,
            operation = "seal",
            registrations = guard.snapshot.len() as u64
        );
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().sealed
    }

    pub fn snapshot(&self) -> Arc<TableSnapshot<V>> {
        self.inner.read().snapshot.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A lookup that fails counts as a miss.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn get(
        &self,
        descriptor: Option<&dyn RequestDescriptor>,
    ) -> TableResult<Option<PartialUrlMatch<V>>> {
        let snapshot = self.snapshot();
        let found = snapshot.get(descriptor);
        self.stats.record_lookup(matches!(found, Ok(Some(_))));
        found
    }

    pub fn stats(&self) -> TableStatsSnapshot {
        self.stats.snapshot()
    }
}

impl<V> Default for PatternTable<V> {
    fn default() -> Self {
        Self::new(None)
    }
}

fn check_combinations<V>(current: &TableSnapshot<V>, pattern: &PartialUrl) -> TableResult<()> {
    for entry in current.registrations() {
        if let Some(single) = pattern.shared_combination(entry.pattern()) {
            return Err(TableError::DuplicateCombination {
                combination: single.to_string(),
                existing: entry.pattern().to_string(),
            });
        }
    }
    Ok(())
}
