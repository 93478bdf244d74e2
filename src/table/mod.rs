mod error;
mod matched;
mod options;
mod snapshot;
mod stats;
mod store;

pub use error::{TableError, TableResult};
pub use matched::PartialUrlMatch;
pub use options::{TableOptions, TableOptionsBuilder};
pub use snapshot::{Registration, TableSnapshot};
pub use stats::TableStatsSnapshot;
pub use store::PatternTable;
