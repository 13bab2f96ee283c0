use crate::DnsRecord;
use serde::{Deserialize, Serialize};

/// Bucket for domains without a dot, e.g. `localhost`.
pub const NO_TLD: &str = "";

/// Number of records created on one calendar day (`YYYY-MM-DD`, UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TldCount {
    pub tld: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TldGroup {
    pub tld: String,
    pub records: Vec<DnsRecord>,
}

/// Final dot-separated label of `domain`, lower-cased.
///
/// Returns [`NO_TLD`] when the name has no dot.
pub fn top_level_domain(domain: &str) -> String {
    let name = domain.trim().trim_end_matches('.');
    match name.rsplit_once('.') {
        Some((_, tld)) => tld.to_ascii_lowercase(),
        None => NO_TLD.to_string(),
    }
}

/// Calendar day part of a `YYYY-MM-DD HH:MM:SS` timestamp.
pub fn day_of(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}
