use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetError {
    #[error("host is empty")]
    EmptyHost,
    #[error("host '{input}' exceeds {limit} characters")]
    HostTooLong { input: String, limit: usize },
    #[error("host '{input}' has invalid label '{label}'")]
    InvalidHostLabel { input: String, label: String },
    #[error("host '{input}' is not a valid IPv6 address")]
    InvalidIpv6 { input: String },
    #[error("port number must be between 1 and 65535 (got {provided})")]
    PortOutOfRange { provided: u32 },
}

pub type NetResult<T> = Result<T, NetError>;
