//! Partial URL patterns: URLs with any field left as a wildcard, matched
//! against incoming requests and resolved to the most specific registration.

pub mod descriptor;
pub mod errors;
pub mod net;
pub mod path;
pub mod pattern;
pub mod table;
pub mod types;

pub use descriptor::{FieldValues, RequestDescriptor, UrlDescriptor};
pub use errors::{PartialUrlError, PartialUrlResult};
pub use net::{Host, Port, Protocol, Scheme};
pub use path::Path;
pub use pattern::{DEFAULT, Fields, MultiPattern, PartialUrl, SinglePattern};
pub use table::{PartialUrlMatch, PatternTable, TableOptions};
pub use types::RegistrationId;
