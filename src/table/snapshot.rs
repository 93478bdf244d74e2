use crate::descriptor::RequestDescriptor;
use crate::net::Host;
use crate::pattern::{PartialUrl, SinglePattern};
use crate::table::{PartialUrlMatch, TableError, TableOptions, TableResult};
use crate::types::RegistrationId;
use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::sync::Arc;

#[derive(Debug)]
pub struct Registration<V> {
    id: RegistrationId,
    pattern: Arc<PartialUrl>,
    value: Arc<V>,
}

impl<V> Registration<V> {
    pub(crate) fn new(id: RegistrationId, pattern: PartialUrl, value: Arc<V>) -> Self {
        Self {
            id,
            pattern: Arc::new(pattern),
            value,
        }
    }

    pub fn id(&self) -> RegistrationId {
        self.id
    }

    pub fn pattern(&self) -> &PartialUrl {
        &self.pattern
    }

    pub fn value(&self) -> &Arc<V> {
        &self.value
    }
}

#[derive(Debug)]
pub struct TableSnapshot<V> {
    entries: Vec<Arc<Registration<V>>>,
    host_index: FastHashMap<Host, SmallVec<[usize; 4]>>,
    any_host: Vec<usize>,
    options: TableOptions,
}

impl<V> TableSnapshot<V> {
    pub(crate) fn empty(options: TableOptions) -> Self {
        Self::build(Vec::new(), options)
    }

    pub(crate) fn build(entries: Vec<Arc<Registration<V>>>, options: TableOptions) -> Self {
        let mut host_index: FastHashMap<Host, SmallVec<[usize; 4]>> = FastHashMap::new();
        let mut any_host = Vec::new();

        for (idx, entry) in entries.iter().enumerate() {
            let hosts = match entry.pattern.as_ref() {
                PartialUrl::Single(single) => single.host().map(std::slice::from_ref),
                PartialUrl::Multi(multi) => multi.hosts(),
            };
            match hosts {
                Some(hosts) => {
                    for host in hosts {
                        host_index.entry(host.clone()).or_default().push(idx);
                    }
                }
                None => any_host.push(idx),
            }
        }

        Self {
            entries,
            host_index,
            any_host,
            options,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn registrations(&self) -> impl Iterator<Item = &Registration<V>> {
        self.entries.iter().map(Arc::as_ref)
    }

    pub(crate) fn entries(&self) -> &[Arc<Registration<V>>] {
        &self.entries
    }

    pub(crate) fn options(&self) -> &TableOptions {
        &self.options
    }

    pub(crate) fn position(&self, pattern: &PartialUrl) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.pattern.as_ref() == pattern)
    }

    // Earlier registrations win ties.
    #[tracing::instrument(level = "trace", skip_all, fields(registrations = self.entries.len() as u64))]
    pub fn get(
        &self,
        descriptor: Option<&dyn RequestDescriptor>,
    ) -> TableResult<Option<PartialUrlMatch<V>>> {
        let hosted = descriptor
            .and_then(|d| d.host())
            .and_then(|host| self.host_index.get(host))
            .map(|indices| indices.as_slice())
            .unwrap_or_default();

        let mut best: Option<(usize, Cow<'_, SinglePattern>)> = None;
        for &idx in hosted.iter().chain(self.any_host.iter()) {
            let entry = &self.entries[idx];
            let Some(single) = entry.pattern.matches(descriptor) else {
                continue;
            };

            if self.options.verify_matches {
                verify(&entry.pattern, descriptor, &single)?;
            }

            let better = match &best {
                None => true,
                Some((best_idx, best_single)) => {
                    (&*single, idx) < (&**best_single, *best_idx)
                }
            };
            if better {
                best = Some((idx, single));
            }
        }

        let Some((idx, single)) = best else {
            if self.options.debug {
                tracing::event!(tracing::Level::DEBUG, lookup = "miss", "no pattern matched");
            }
            return Ok(None);
        };

        let entry = &self.entries[idx];
        let url = single.to_url(descriptor)?;
        if self.options.debug {
            tracing::event!(
                tracing::Level::DEBUG,
                lookup = "hit",
                registration = entry.id,
                pattern = %entry.pattern,
                single = %single,
                url = %url,
                "pattern matched"
            );
        }

        Ok(Some(PartialUrlMatch::new(
            entry.pattern.clone(),
            single.into_owned(),
            url,
            entry.value.clone(),
        )))
    }
}

fn verify(
    pattern: &PartialUrl,
    descriptor: Option<&dyn RequestDescriptor>,
    matched: &SinglePattern,
) -> TableResult<()> {
    let PartialUrl::Multi(multi) = pattern else {
        return Ok(());
    };
    let exhaustive = multi.matches_exhaustive(descriptor);
    if exhaustive.as_ref() == Some(matched) {
        return Ok(());
    }

    tracing::event!(
        tracing::Level::ERROR,
        pattern = %pattern,
        indexed = %matched,
        "indexed match disagrees with exhaustive match"
    );
    Err(TableError::MatchDivergence {
        pattern: pattern.to_string(),
        indexed: Some(matched.to_string()),
        exhaustive: exhaustive.map(|single| single.to_string()),
    })
}
