use crate::descriptor::RequestDescriptor;
use crate::errors::PartialUrlResult;
use crate::net::{Host, Port};
use crate::path::{Path, SEPARATOR};
use url::Url;

/// A [`RequestDescriptor`] read from an already parsed request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlDescriptor {
    scheme: String,
    host: Option<Host>,
    port: Option<Port>,
    context_path: Path,
    path: Option<Path>,
}

impl UrlDescriptor {
    pub fn new(url: &Url, context_path: Path) -> PartialUrlResult<Self> {
        let host = url.host_str().map(Host::parse).transpose()?;
        let port = url
            .port_or_known_default()
            .map(|number| Port::tcp(u32::from(number)))
            .transpose()?;
        let path = if url.cannot_be_a_base() {
            None
        } else {
            below_context(url.path(), &context_path)
                .map(Path::parse)
                .transpose()?
        };

        Ok(Self {
            scheme: url.scheme().to_string(),
            host,
            port,
            context_path,
            path,
        })
    }

    pub fn at_root(url: &Url) -> PartialUrlResult<Self> {
        Self::new(url, Path::root())
    }
}

fn below_context<'a>(full: &'a str, context_path: &Path) -> Option<&'a str> {
    if context_path.is_root() {
        return Some(full);
    }
    full.strip_prefix(context_path.as_str())
        .filter(|rest| rest.starts_with(SEPARATOR))
}

impl RequestDescriptor for UrlDescriptor {
    fn scheme(&self) -> &str {
        &self.scheme
    }

    fn host(&self) -> Option<&Host> {
        self.host.as_ref()
    }

    fn port(&self) -> Option<Port> {
        self.port
    }

    fn context_path(&self) -> &Path {
        &self.context_path
    }

    fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }
}
