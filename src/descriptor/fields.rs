use crate::descriptor::RequestDescriptor;
use crate::net::{Host, Port};
use crate::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues {
    scheme: String,
    host: Option<Host>,
    port: Option<Port>,
    context_path: Path,
    path: Option<Path>,
}

impl FieldValues {
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: None,
            port: None,
            context_path: Path::root(),
            path: None,
        }
    }

    pub fn with_host(mut self, host: Host) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_port(mut self, port: Port) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_context_path(mut self, context_path: Path) -> Self {
        self.context_path = context_path;
        self
    }

    pub fn with_path(mut self, path: Path) -> Self {
        self.path = Some(path);
        self
    }
}

impl RequestDescriptor for FieldValues {
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
