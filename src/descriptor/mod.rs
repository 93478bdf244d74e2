mod fields;
mod url_source;

pub use fields::FieldValues;
pub use url_source::UrlDescriptor;

use crate::net::{Host, Port};
use crate::path::Path;

/// The field values of one incoming request.
pub trait RequestDescriptor {
    fn scheme(&self) -> &str;

    fn host(&self) -> Option<&Host>;

    fn port(&self) -> Option<Port>;

    fn context_path(&self) -> &Path;

    /// Below [`RequestDescriptor::context_path`]; only used for prefix matching.
    fn path(&self) -> Option<&Path>;
}
