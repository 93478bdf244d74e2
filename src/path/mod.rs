mod error;
mod value;

pub use error::{PathError, PathResult};
pub use value::{Path, SEPARATOR};
