use crate::pattern::{PartialUrl, SinglePattern};
use std::fmt;
use std::sync::Arc;
use url::Url;

/// The outcome of [`crate::PatternTable::get`].
#[derive(Debug)]
pub struct PartialUrlMatch<V> {
    pattern: Arc<PartialUrl>,
    single: SinglePattern,
    url: Url,
    value: Arc<V>,
}

impl<V> PartialUrlMatch<V> {
    pub(crate) fn new(pattern: Arc<PartialUrl>, single: SinglePattern, url: Url, value: Arc<V>) -> Self {
        Self {
            pattern,
            single,
            url,
            value,
        }
    }

    pub fn pattern(&self) -> &PartialUrl {
        &self.pattern
    }

    pub fn single(&self) -> &SinglePattern {
        &self.single
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn value(&self) -> &Arc<V> {
        &self.value
    }
}

impl<V> Clone for PartialUrlMatch<V> {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            single: self.single.clone(),
            url: self.url.clone(),
            value: self.value.clone(),
        }
    }
}

// The value compares by identity.
impl<V> PartialEq for PartialUrlMatch<V> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
            && self.pattern == other.pattern
            && self.single == other.single
            && self.url == other.url
    }
}

impl<V> Eq for PartialUrlMatch<V> {}

impl<V> fmt::Display for PartialUrlMatch<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pattern.as_single() {
            Some(single) if *single == self.single => write!(f, "{} -> {}", self.single, self.url),
            _ => write!(f, "{} -> {} -> {}", self.pattern, self.single, self.url),
        }
    }
}
