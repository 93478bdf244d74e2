use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableOptions {
    pub debug: bool,
    pub verify_matches: bool,
    pub reject_duplicate_combinations: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            debug: false,
            verify_matches: false,
            reject_duplicate_combinations: true,
        }
    }
}

impl TableOptions {
    pub fn builder() -> TableOptionsBuilder {
        TableOptionsBuilder::default()
    }
}

#[derive(Debug, Default, Clone)]
pub struct TableOptionsBuilder {
    options: TableOptions,
}

impl TableOptionsBuilder {
    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn verify_matches(mut self, value: bool) -> Self {
        self.options.verify_matches = value;
        self
    }

    pub fn reject_duplicate_combinations(mut self, value: bool) -> Self {
        self.options.reject_duplicate_combinations = value;
        self
    }

    pub fn build(self) -> TableOptions {
        self.options
    }
}
