use crate::descriptor::RequestDescriptor;
use crate::net::{Host, Port, Scheme};
use crate::path::Path;
use crate::pattern::combinations::{Combinations, combination_count, debug_check};
use crate::pattern::render::{FieldSlices, render};
use crate::pattern::single::{validate_context_path, validate_prefix};
use crate::pattern::value_set::ValueSet;
use crate::pattern::{
    Fields, MAX_COMBINATIONS, PartialUrl, PatternError, PatternResult, SinglePattern,
};
use std::borrow::Cow;
use std::fmt;
use url::Url;

/// A set of values per field, standing for every [`SinglePattern`] in their
/// cross product. Never built when each field has at most one value.
#[derive(Debug, Clone)]
pub struct MultiPattern {
    schemes: Option<ValueSet<Scheme>>,
    hosts: Option<ValueSet<Host>>,
    ports: Option<ValueSet<Port>>,
    context_paths: Option<ValueSet<Path>>,
    prefixes: Option<ValueSet<Path>>,
    primary: SinglePattern,
    combination_count: usize,
}

impl MultiPattern {
    pub fn new<S: AsRef<str>>(
        schemes: &[S],
        hosts: &[Host],
        ports: &[Port],
        context_paths: &[Path],
        prefixes: &[Path],
    ) -> PatternResult<PartialUrl> {
        for context_path in context_paths {
            validate_context_path(context_path)?;
        }
        for prefix in prefixes {
            validate_prefix(prefix)?;
        }

        let schemes = ValueSet::collect(schemes.iter().map(|s| Scheme::new(s.as_ref())));
        let hosts = ValueSet::collect(hosts.iter().cloned());
        let ports = ValueSet::collect(ports.iter().copied());
        let context_paths = ValueSet::collect(context_paths.iter().cloned());
        let mut prefixes = ValueSet::collect(prefixes.iter().cloned());

        let cardinalities = [
            hosts.as_ref().map_or(1, ValueSet::len),
            context_paths.as_ref().map_or(1, ValueSet::len),
            prefixes.as_ref().map_or(1, ValueSet::len),
            ports.as_ref().map_or(1, ValueSet::len),
            schemes.as_ref().map_or(1, ValueSet::len),
        ];

        if cardinalities.iter().all(|&len| len == 1) {
            return Ok(PartialUrl::Single(SinglePattern::from_parts(
                schemes.map(|set| set.first().clone()),
                hosts.map(|set| set.first().clone()),
                ports.map(|set| *set.first()),
                context_paths.map(|set| set.first().clone()),
                prefixes.map(|set| set.first().clone()),
            )));
        }

        let combination_count = combination_count(cardinalities)
            .ok_or(PatternError::CombinationOverflow { cardinalities })?;

        // Stable: prefixes of equal depth keep first-seen order.
        if let Some(prefixes) = prefixes.as_mut() {
            prefixes.sort_by(|a, b| b.depth().cmp(&a.depth()));
        }

        let primary = SinglePattern::from_parts(
            schemes.as_ref().map(|set| set.first().clone()),
            hosts.as_ref().map(|set| set.first().clone()),
            ports.as_ref().map(|set| *set.first()),
            context_paths.as_ref().map(|set| set.first().clone()),
            prefixes.as_ref().map(|set| set.first().clone()),
        );

        tracing::event!(
            tracing::Level::TRACE,
            operation = "multi_pattern",
            primary = %primary,
            combinations = combination_count as u64
        );

        Ok(PartialUrl::Multi(MultiPattern {
            schemes,
            hosts,
            ports,
            context_paths,
            prefixes,
            primary,
            combination_count,
        }))
    }

    pub fn schemes(&self) -> Option<&[Scheme]> {
        self.schemes.as_ref().map(ValueSet::as_slice)
    }

    pub fn hosts(&self) -> Option<&[Host]> {
        self.hosts.as_ref().map(ValueSet::as_slice)
    }

    pub fn ports(&self) -> Option<&[Port]> {
        self.ports.as_ref().map(ValueSet::as_slice)
    }

    pub fn context_paths(&self) -> Option<&[Path]> {
        self.context_paths.as_ref().map(ValueSet::as_slice)
    }

    pub fn prefixes(&self) -> Option<&[Path]> {
        self.prefixes.as_ref().map(ValueSet::as_slice)
    }

    pub fn fields(&self) -> Fields {
        Fields::from_presence(
            self.schemes.is_some(),
            self.hosts.is_some(),
            self.ports.is_some(),
            self.context_paths.is_some(),
            self.prefixes.is_some(),
        )
    }

    pub fn is_complete(&self) -> bool {
        self.fields().is_complete()
    }

    pub fn primary(&self) -> &SinglePattern {
        &self.primary
    }

    pub fn combination_count(&self) -> usize {
        self.combination_count
    }

    pub fn combinations(&self) -> Combinations<'_> {
        Combinations::new(self.slices(), self.combination_count)
    }

    pub fn get_combinations(&self) -> PatternResult<Vec<SinglePattern>> {
        if self.combination_count > MAX_COMBINATIONS {
            return Err(PatternError::TooManyCombinations {
                count: self.combination_count,
                limit: MAX_COMBINATIONS,
            });
        }

        let combinations: Vec<SinglePattern> = self.combinations().collect();
        debug_check(&combinations, self.combination_count, &self.primary);
        Ok(combinations)
    }

    // The longest matching prefix is the combination the exhaustive search
    // reaches first.
    #[tracing::instrument(level = "trace", skip_all, fields(pattern = %self))]
    pub fn matches(&self, descriptor: Option<&dyn RequestDescriptor>) -> Option<SinglePattern> {
        let matched = self.matches_indexed(descriptor);
        debug_assert_eq!(
            matched,
            self.matches_exhaustive(descriptor),
            "indexed match disagrees with exhaustive match for {self}"
        );
        matched
    }

    fn matches_indexed(&self, descriptor: Option<&dyn RequestDescriptor>) -> Option<SinglePattern> {
        let descriptor = descriptor?;

        let scheme = match &self.schemes {
            None => None,
            Some(schemes) => {
                let requested = descriptor.scheme();
                let lower: Cow<'_, str> = if requested.bytes().any(|b| b.is_ascii_uppercase()) {
                    Cow::Owned(requested.to_ascii_lowercase())
                } else {
                    Cow::Borrowed(requested)
                };
                Some(schemes.get(&*lower)?.clone())
            }
        };
        let host = match &self.hosts {
            None => None,
            Some(hosts) => Some(hosts.get(descriptor.host()?)?.clone()),
        };
        let port = match &self.ports {
            None => None,
            Some(ports) => Some(*ports.get(&descriptor.port()?)?),
        };
        let context_path = match &self.context_paths {
            None => None,
            Some(context_paths) => Some(context_paths.get(descriptor.context_path())?.clone()),
        };
        let prefix = match &self.prefixes {
            None => None,
            Some(prefixes) => Some(longest_prefix(prefixes, descriptor.path()?)?.clone()),
        };

        Some(SinglePattern::from_parts(
            scheme,
            host,
            port,
            context_path,
            prefix,
        ))
    }

    pub fn matches_exhaustive(
        &self,
        descriptor: Option<&dyn RequestDescriptor>,
    ) -> Option<SinglePattern> {
        self.combinations()
            .find(|single| single.matches(descriptor).is_some())
    }

    /// Resolves through [`MultiPattern::primary`], whichever combination matched.
    // TODO: resolve through the matched combination once callers confirm they
    // want the request's own host/port kept instead of the primary's.
    pub fn to_url(&self, descriptor: Option<&dyn RequestDescriptor>) -> PatternResult<Url> {
        self.primary.to_url(descriptor)
    }

    pub(crate) fn slices(&self) -> FieldSlices<'_> {
        FieldSlices {
            schemes: self.schemes(),
            hosts: self.hosts(),
            ports: self.ports(),
            context_paths: self.context_paths(),
            prefixes: self.prefixes(),
        }
    }
}

#[tracing::instrument(level = "trace", skip_all, fields(path = %path))]
fn longest_prefix<'a>(prefixes: &'a ValueSet<Path>, path: &Path) -> Option<&'a Path> {
    path.prefixes_longest_first()
        .find_map(|candidate| prefixes.get(candidate))
}

impl PartialEq for MultiPattern {
    fn eq(&self, other: &Self) -> bool {
        self.schemes == other.schemes
            && self.hosts == other.hosts
            && self.ports == other.ports
            && self.context_paths == other.context_paths
            && self.prefixes == other.prefixes
    }
}

impl Eq for MultiPattern {}

impl fmt::Display for MultiPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, &self.slices())
    }
}
