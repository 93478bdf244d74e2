mod combinations;
mod error;
mod fields;
mod multi;
mod ordering;
mod overlap;
mod render;
mod single;
mod value_set;

pub use combinations::Combinations;
pub use error::{PatternError, PatternResult};
pub use fields::Fields;
pub use multi::MultiPattern;
pub use ordering::{context_path_order, prefix_order};
pub use single::{DEFAULT, SinglePattern};

use crate::descriptor::RequestDescriptor;
use crate::path::Path;
use render::FieldSlices;
use std::borrow::Cow;
use std::fmt;
use url::Url;

pub const MAX_COMBINATIONS: usize = i32::MAX as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartialUrl {
    Single(SinglePattern),
    Multi(MultiPattern),
}

impl PartialUrl {
    pub fn from_prefixes(prefixes: &[Path]) -> PatternResult<Self> {
        MultiPattern::new::<&str>(&[], &[], &[], &[], prefixes)
    }

    pub fn matches(
        &self,
        descriptor: Option<&dyn RequestDescriptor>,
    ) -> Option<Cow<'_, SinglePattern>> {
        match self {
            PartialUrl::Single(single) => single.matches(descriptor).map(Cow::Borrowed),
            PartialUrl::Multi(multi) => multi.matches(descriptor).map(Cow::Owned),
        }
    }

    pub fn fields(&self) -> Fields {
        match self {
            PartialUrl::Single(single) => single.fields(),
            PartialUrl::Multi(multi) => multi.fields(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.fields().is_complete()
    }

    pub fn primary(&self) -> &SinglePattern {
        match self {
            PartialUrl::Single(single) => single.primary(),
            PartialUrl::Multi(multi) => multi.primary(),
        }
    }

    pub fn combination_count(&self) -> usize {
        match self {
            PartialUrl::Single(_) => 1,
            PartialUrl::Multi(multi) => multi.combination_count(),
        }
    }

    pub fn combinations(&self) -> Combinations<'_> {
        match self {
            PartialUrl::Single(single) => single.combinations(),
            PartialUrl::Multi(multi) => multi.combinations(),
        }
    }

    pub fn get_combinations(&self) -> PatternResult<Vec<SinglePattern>> {
        match self {
            PartialUrl::Single(single) => Ok(single.get_combinations()),
            PartialUrl::Multi(multi) => multi.get_combinations(),
        }
    }

    pub fn to_url(&self, descriptor: Option<&dyn RequestDescriptor>) -> PatternResult<Url> {
        match self {
            PartialUrl::Single(single) => single.to_url(descriptor),
            PartialUrl::Multi(multi) => multi.to_url(descriptor),
        }
    }

    pub fn as_single(&self) -> Option<&SinglePattern> {
        match self {
            PartialUrl::Single(single) => Some(single),
            PartialUrl::Multi(_) => None,
        }
    }

    pub fn as_multi(&self) -> Option<&MultiPattern> {
        match self {
            PartialUrl::Single(_) => None,
            PartialUrl::Multi(multi) => Some(multi),
        }
    }

    pub(crate) fn slices(&self) -> FieldSlices<'_> {
        match self {
            PartialUrl::Single(single) => single.slices(),
            PartialUrl::Multi(multi) => multi.slices(),
        }
    }
}

impl From<SinglePattern> for PartialUrl {
    fn from(value: SinglePattern) -> Self {
        PartialUrl::Single(value)
    }
}

impl fmt::Display for PartialUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartialUrl::Single(single) => fmt::Display::fmt(single, f),
            PartialUrl::Multi(multi) => fmt::Display::fmt(multi, f),
        }
    }
}
