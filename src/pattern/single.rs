use crate::descriptor::RequestDescriptor;
use crate::net::{Host, Port, Scheme, default_port};
use crate::path::Path;
use crate::pattern::combinations::Combinations;
use crate::pattern::ordering::{context_path_order, prefix_order, specified_first};
use crate::pattern::render::{FieldSlices, render};
use crate::pattern::{Fields, PatternError, PatternResult};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use url::Url;

pub static DEFAULT: SinglePattern = SinglePattern {
    scheme: None,
    host: None,
    port: None,
    context_path: None,
    prefix: None,
};

/// A pattern holding at most one value per field. [`DEFAULT`] sorts last.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SinglePattern {
    scheme: Option<Scheme>,
    host: Option<Host>,
    port: Option<Port>,
    context_path: Option<Path>,
    prefix: Option<Path>,
}

impl SinglePattern {
    /// A non-root `context_path` must not end in `/`; a `prefix` must.
    pub fn new(
        scheme: Option<&str>,
        host: Option<Host>,
        port: Option<Port>,
        context_path: Option<Path>,
        prefix: Option<Path>,
    ) -> PatternResult<Self> {
        if let Some(context_path) = &context_path {
            validate_context_path(context_path)?;
        }
        if let Some(prefix) = &prefix {
            validate_prefix(prefix)?;
        }
        Ok(Self::from_parts(
            scheme.map(Scheme::new),
            host,
            port,
            context_path,
            prefix,
        ))
    }

    pub fn prefix_only(prefix: Path) -> PatternResult<Self> {
        Self::new(None, None, None, None, Some(prefix))
    }

    pub fn default_pattern() -> &'static SinglePattern {
        &DEFAULT
    }

    pub(crate) fn from_parts(
        scheme: Option<Scheme>,
        host: Option<Host>,
        port: Option<Port>,
        context_path: Option<Path>,
        prefix: Option<Path>,
    ) -> Self {
        Self {
            scheme,
            host,
            port,
            context_path,
            prefix,
        }
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_ref().map(Scheme::as_str)
    }

    pub fn host(&self) -> Option<&Host> {
        self.host.as_ref()
    }

    pub fn port(&self) -> Option<Port> {
        self.port
    }

    pub fn context_path(&self) -> Option<&Path> {
        self.context_path.as_ref()
    }

    pub fn prefix(&self) -> Option<&Path> {
        self.prefix.as_ref()
    }

    pub fn fields(&self) -> Fields {
        Fields::from_presence(
            self.scheme.is_some(),
            self.host.is_some(),
            self.port.is_some(),
            self.context_path.is_some(),
            self.prefix.is_some(),
        )
    }

    pub fn is_default(&self) -> bool {
        self.fields().is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.fields().is_complete()
    }

    pub fn primary(&self) -> &SinglePattern {
        self
    }

    pub fn combinations(&self) -> Combinations<'_> {
        Combinations::new(self.slices(), 1)
    }

    pub fn get_combinations(&self) -> Vec<SinglePattern> {
        vec![self.clone()]
    }

    #[tracing::instrument(level = "trace", skip_all, fields(pattern = %self))]
    pub fn matches(&self, descriptor: Option<&dyn RequestDescriptor>) -> Option<&SinglePattern> {
        let Some(descriptor) = descriptor else {
            return self.is_default().then_some(self);
        };

        if let Some(scheme) = &self.scheme
            && !scheme.eq_ignore_case(descriptor.scheme())
        {
            return None;
        }
        if let Some(host) = &self.host
            && descriptor.host() != Some(host)
        {
            return None;
        }
        if let Some(port) = self.port
            && descriptor.port() != Some(port)
        {
            return None;
        }
        if let Some(context_path) = &self.context_path
            && descriptor.context_path() != context_path
        {
            return None;
        }
        if let Some(prefix) = &self.prefix
            && !descriptor.path().is_some_and(|path| path.starts_with(prefix))
        {
            return None;
        }

        Some(self)
    }

    /// An unspecified prefix appends the request path below its context.
    pub fn to_url(&self, descriptor: Option<&dyn RequestDescriptor>) -> PatternResult<Url> {
        let scheme: Cow<'_, str> = match (&self.scheme, descriptor) {
            (Some(scheme), _) => Cow::Borrowed(scheme.as_str()),
            (None, Some(descriptor)) => Cow::Owned(descriptor.scheme().to_ascii_lowercase()),
            (None, None) => return Err(PatternError::MissingField { field: "scheme" }),
        };
        let host = self
            .host
            .as_ref()
            .or_else(|| descriptor.and_then(|d| d.host()))
            .ok_or(PatternError::MissingField { field: "host" })?;
        let port = self
            .port
            .or_else(|| descriptor.and_then(|d| d.port()))
            .map(|port| port.number())
            .or_else(|| default_port(&scheme));
        let context_path = match (&self.context_path, descriptor) {
            (Some(context_path), _) => context_path,
            (None, Some(descriptor)) => descriptor.context_path(),
            (None, None) => {
                return Err(PatternError::MissingField {
                    field: "context path",
                });
            }
        };
        let path = match &self.prefix {
            Some(prefix) => Some(prefix),
            None => descriptor.and_then(|d| d.path()),
        };

        let mut text = format!("{scheme}://{host}");
        if let Some(port) = port {
            text.push(':');
            text.push_str(&port.to_string());
        }
        if !context_path.is_root() {
            text.push_str(context_path.as_str());
        }
        if let Some(path) = path {
            text.push_str(path.as_str());
        }

        tracing::event!(tracing::Level::TRACE, operation = "to_url", pattern = %self, url = %text);
        Url::parse(&text).map_err(|source| PatternError::UrlConstruction { url: text, source })
    }

    pub(crate) fn slices(&self) -> FieldSlices<'_> {
        FieldSlices {
            schemes: self.scheme.as_ref().map(std::slice::from_ref),
            hosts: self.host.as_ref().map(std::slice::from_ref),
            ports: self.port.as_ref().map(std::slice::from_ref),
            context_paths: self.context_path.as_ref().map(std::slice::from_ref),
            prefixes: self.prefix.as_ref().map(std::slice::from_ref),
        }
    }
}

pub(crate) fn validate_context_path(context_path: &Path) -> PatternResult<()> {
    if !context_path.is_root() && context_path.ends_with_separator() {
        return Err(PatternError::ContextPathTrailingSeparator {
            context_path: context_path.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn validate_prefix(prefix: &Path) -> PatternResult<()> {
    if !prefix.ends_with_separator() {
        return Err(PatternError::PrefixMissingTrailingSeparator {
            prefix: prefix.to_string(),
        });
    }
    Ok(())
}

impl Default for SinglePattern {
    fn default() -> Self {
        DEFAULT.clone()
    }
}

impl Ord for SinglePattern {
    fn cmp(&self, other: &Self) -> Ordering {
        specified_first(self.host.as_ref(), other.host.as_ref(), Host::cmp)
            .then_with(|| {
                specified_first(
                    self.context_path.as_ref(),
                    other.context_path.as_ref(),
                    context_path_order,
                )
            })
            .then_with(|| {
                specified_first(self.prefix.as_ref(), other.prefix.as_ref(), prefix_order)
            })
            .then_with(|| specified_first(self.port.as_ref(), other.port.as_ref(), Port::cmp))
            .then_with(|| {
                specified_first(self.scheme.as_ref(), other.scheme.as_ref(), Scheme::cmp)
            })
    }
}

impl PartialOrd for SinglePattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SinglePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, &self.slices())
    }
}
