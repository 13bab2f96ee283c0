use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordsConfig {
    /// Reject a record whose (domain, type, value) already exists.
    #[serde(default)]
    pub reject_duplicates: bool,

    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            reject_duplicates: false,
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl RecordsConfig {
    /// Resolves a caller-supplied page size against the configured bounds.
    pub fn page_size(&self, requested: Option<u32>) -> u32 {
        requested
            .unwrap_or(self.default_page_size)
            .clamp(1, self.max_page_size.max(1))
    }
}

fn default_page_size() -> u32 {
    50
}

fn default_max_page_size() -> u32 {
    500
}
