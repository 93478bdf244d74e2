use crate::path::{PathError, PathResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock};

pub const SEPARATOR: char = '/';

static ROOT: LazyLock<Path> = LazyLock::new(|| Path(Arc::from("/")));

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Path(Arc<str>);

impl Path {
    pub fn parse(input: &str) -> PathResult<Self> {
        validate(input)?;
        Ok(Self(Arc::from(input)))
    }

    pub fn root() -> Self {
        ROOT.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        &*self.0 == "/"
    }

    pub fn ends_with_separator(&self) -> bool {
        self.0.ends_with(SEPARATOR)
    }

    pub fn depth(&self) -> usize {
        memchr::memchr_iter(SEPARATOR as u8, self.0.as_bytes()).count()
    }

    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.0.starts_with(prefix.as_str())
    }

    /// `/a/b/c` yields `/a/b/`, `/a/`, `/`.
    pub fn prefixes_longest_first(&self) -> impl Iterator<Item = &str> + '_ {
        let text = self.as_str();
        memchr::memrchr_iter(SEPARATOR as u8, text.as_bytes()).map(move |idx| &text[..=idx])
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({:?})", &*self.0)
    }
}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Borrow<str> for Path {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for Path {
    type Error = PathError;

    fn try_from(value: String) -> PathResult<Self> {
        validate(&value)?;
        Ok(Self(Arc::from(value)))
    }
}

impl TryFrom<&str> for Path {
    type Error = PathError;

    fn try_from(value: &str) -> PathResult<Self> {
        Self::parse(value)
    }
}

impl From<Path> for String {
    fn from(value: Path) -> Self {
        value.0.to_string()
    }
}

fn validate(input: &str) -> PathResult<()> {
    if input.is_empty() {
        return Err(PathError::Empty);
    }
    if !input.starts_with(SEPARATOR) {
        return Err(PathError::MissingLeadingSeparator {
            input: input.to_string(),
        });
    }

    for byte in input.bytes() {
        if byte <= 0x20 || byte == 0x7f {
            return Err(PathError::ControlOrWhitespace {
                input: input.to_string(),
                byte,
            });
        }
        if matches!(byte, b'?' | b'#' | b'\\') {
            return Err(PathError::DisallowedCharacter {
                input: input.to_string(),
                character: byte as char,
                byte,
            });
        }
    }

    if input.split(SEPARATOR).any(|segment| segment == "..") {
        return Err(PathError::InvalidParentTraversal {
            input: input.to_string(),
        });
    }

    Ok(())
}
