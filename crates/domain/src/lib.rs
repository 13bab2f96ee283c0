//! Ferrous Records Domain Layer
pub mod analytics;
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod history;

pub use analytics::{top_level_domain, DailyCount, TldCount, TldGroup, NO_TLD};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{DnsRecord, RecordChanges, RecordFields, RecordType};
pub use errors::DomainError;
pub use history::{HistoryAction, HistoryEntry, NewHistoryEntry};
