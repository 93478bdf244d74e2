mod error;
mod host;
mod port;
mod scheme;

pub use error::{NetError, NetResult};
pub use host::Host;
pub use port::{Port, Protocol};
pub use scheme::{HTTP, HTTPS, Scheme, default_port};
