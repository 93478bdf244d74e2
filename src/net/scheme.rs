use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

pub const HTTP: &str = "http";
pub const HTTPS: &str = "https";

pub fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        HTTP => Some(80),
        HTTPS => Some(443),
        _ => None,
    }
}

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Scheme(Arc<str>);

impl Scheme {
    pub fn new(value: &str) -> Self {
        if value.bytes().any(|b| b.is_ascii_uppercase()) {
            Self(Arc::from(value.to_ascii_lowercase()))
        } else {
            Self(Arc::from(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn default_port(&self) -> Option<u16> {
        default_port(self.as_str())
    }

    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scheme({:?})", &*self.0)
    }
}

impl Hash for Scheme {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Borrow<str> for Scheme {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Scheme {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Scheme {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<Scheme> for String {
    fn from(value: Scheme) -> Self {
        value.0.to_string()
    }
}
