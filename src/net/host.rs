use crate::net::{NetError, NetResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::{Arc, LazyLock};

const MAX_HOSTNAME_LEN: usize = 253;

static LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[a-z0-9_](?:[a-z0-9_-]{0,61}[a-z0-9_])?$")
        .expect("hostname label pattern should compile")
});

/// A hostname or IP address in canonical form.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Host {
    Name(Arc<str>),
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
}

impl Host {
    pub fn parse(input: &str) -> NetResult<Self> {
        if input.is_empty() {
            return Err(NetError::EmptyHost);
        }

        if let Some(inner) = input.strip_prefix('[') {
            return inner
                .strip_suffix(']')
                .and_then(|addr| addr.parse::<Ipv6Addr>().ok())
                .map(Host::Ipv6)
                .ok_or_else(|| NetError::InvalidIpv6 {
                    input: input.to_string(),
                });
        }

        if let Ok(addr) = input.parse::<Ipv4Addr>() {
            return Ok(Host::Ipv4(addr));
        }

        if input.contains(':') {
            return input
                .parse::<Ipv6Addr>()
                .map(Host::Ipv6)
                .map_err(|_| NetError::InvalidIpv6 {
                    input: input.to_string(),
                });
        }

        parse_hostname(input)
    }

    pub fn is_ip(&self) -> bool {
        !matches!(self, Host::Name(_))
    }

    pub fn to_bracketed_string(&self) -> String {
        self.to_string()
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Host::Name(_) => 0,
            Host::Ipv4(_) => 1,
            Host::Ipv6(_) => 2,
        }
    }
}

fn parse_hostname(input: &str) -> NetResult<Host> {
    if input.len() > MAX_HOSTNAME_LEN {
        return Err(NetError::HostTooLong {
            input: input.to_string(),
            limit: MAX_HOSTNAME_LEN,
        });
    }

    let lower = input.to_ascii_lowercase();
    if let Some(label) = lower.split('.').find(|label| !LABEL_PATTERN.is_match(label)) {
        return Err(NetError::InvalidHostLabel {
            input: input.to_string(),
            label: label.to_string(),
        });
    }

    Ok(Host::Name(Arc::from(lower)))
}

// Names by labels read right to left, then IPv4, then IPv6.
impl Ord for Host {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Host::Name(a), Host::Name(b)) => a.rsplit('.').cmp(b.rsplit('.')),
            (Host::Ipv4(a), Host::Ipv4(b)) => a.cmp(b),
            (Host::Ipv6(a), Host::Ipv6(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl PartialOrd for Host {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Host::Name(name) => f.write_str(name),
            Host::Ipv4(addr) => write!(f, "{addr}"),
            Host::Ipv6(addr) => write!(f, "[{addr}]"),
        }
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Host({self})")
    }
}

impl TryFrom<String> for Host {
    type Error = NetError;

    fn try_from(value: String) -> NetResult<Self> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Host {
    type Error = NetError;

    fn try_from(value: &str) -> NetResult<Self> {
        Self::parse(value)
    }
}

impl From<Host> for String {
    fn from(value: Host) -> Self {
        value.to_string()
    }
}
