use super::RecordType;
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

pub const MAX_DOMAIN_LEN: usize = 253;
pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_VALUE_LEN: usize = 1024;
/// RFC 2181 §8: TTLs are unsigned 31-bit values.
pub const MAX_TTL: u32 = 2_147_483_647;

/// A stored DNS record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    pub id: i64,
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub value: Arc<str>,
    pub ttl: Option<u32>,
    pub created_at: String,
    pub updated_at: String,
}

/// Validated, user-controlled fields of a record.
///
/// Every `RecordFields` has passed [`RecordFields::new`], so repositories can
/// persist it without re-checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub value: Arc<str>,
    pub ttl: Option<u32>,
}

/// Partial update as received from a caller. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordChanges {
    pub domain: Option<String>,
    pub record_type: Option<String>,
    pub value: Option<String>,
    pub ttl: Option<u32>,
}

impl RecordChanges {
    pub fn is_empty(&self) -> bool {
        self.domain.is_none()
            && self.record_type.is_none()
            && self.value.is_none()
            && self.ttl.is_none()
    }
}

impl RecordFields {
    pub fn new(
        domain: &str,
        record_type: RecordType,
        value: &str,
        ttl: Option<u32>,
    ) -> Result<Self, DomainError> {
        let domain = DnsRecord::validate_domain(domain)?;
        let value = DnsRecord::validate_value(record_type, value)?;
        DnsRecord::validate_ttl(ttl)?;

        Ok(Self {
            domain: Arc::from(domain),
            record_type,
            value: Arc::from(value),
            ttl,
        })
    }

    /// Parses the record type from user input before validating the rest.
    pub fn parse(
        domain: &str,
        record_type: &str,
        value: &str,
        ttl: Option<u32>,
    ) -> Result<Self, DomainError> {
        let record_type = DnsRecord::parse_record_type(record_type)?;
        Self::new(domain, record_type, value, ttl)
    }

    /// Key used to detect duplicate records: domain compared case-insensitively.
    pub fn identity(&self) -> (String, RecordType, &str) {
        (
            self.domain.to_ascii_lowercase(),
            self.record_type,
            self.value.as_ref(),
        )
    }
}

impl DnsRecord {
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            domain: self.domain.clone(),
            record_type: self.record_type,
            value: self.value.clone(),
            ttl: self.ttl,
        }
    }

    /// Merges `changes` over the stored values and validates the result.
    ///
    /// The value is re-checked whenever the type changes, so an `A` record
    /// cannot become `AAAA` while still pointing at an IPv4 address.
    pub fn apply(&self, changes: &RecordChanges) -> Result<RecordFields, DomainError> {
        if changes.is_empty() {
            return Err(DomainError::EmptyUpdate);
        }

        let domain = changes.domain.as_deref().unwrap_or(self.domain.as_ref());
        let record_type = match changes.record_type.as_deref() {
            Some(raw) => Self::parse_record_type(raw)?,
            None => self.record_type,
        };
        let value = changes.value.as_deref().unwrap_or(self.value.as_ref());
        let ttl = changes.ttl.or(self.ttl);

        RecordFields::new(domain, record_type, value, ttl)
    }

    pub fn parse_record_type(raw: &str) -> Result<RecordType, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::invalid("record_type", "Record type cannot be empty"));
        }
        raw.parse::<RecordType>().map_err(|_| {
            let known: Vec<&str> = RecordType::ALL.iter().map(RecordType::as_str).collect();
            DomainError::invalid(
                "record_type",
                format!("'{}' is not one of {}", raw.trim(), known.join(", ")),
            )
        })
    }

    /// Returns the domain with surrounding whitespace and one trailing dot removed.
    pub fn validate_domain(raw: &str) -> Result<String, DomainError> {
        check_host_name("domain", raw)
    }

    pub fn validate_value(record_type: RecordType, raw: &str) -> Result<String, DomainError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(DomainError::invalid("value", "Value cannot be empty"));
        }
        if value.len() > MAX_VALUE_LEN {
            return Err(DomainError::invalid(
                "value",
                format!("Value cannot exceed {} characters", MAX_VALUE_LEN),
            ));
        }

        match record_type {
            RecordType::A => {
                value.parse::<Ipv4Addr>().map_err(|_| {
                    DomainError::invalid("value", format!("'{}' is not an IPv4 address", value))
                })?;
            }
            RecordType::AAAA => {
                value.parse::<Ipv6Addr>().map_err(|_| {
                    DomainError::invalid("value", format!("'{}' is not an IPv6 address", value))
                })?;
            }
            t if t.targets_host() => return check_host_name("value", value),
            _ => {}
        }

        Ok(value.to_string())
    }

    pub fn validate_ttl(ttl: Option<u32>) -> Result<(), DomainError> {
        match ttl {
            Some(t) if t > MAX_TTL => Err(DomainError::invalid(
                "ttl",
                format!("TTL cannot exceed {}", MAX_TTL),
            )),
            _ => Ok(()),
        }
    }
}

fn check_host_name(field: &'static str, raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    let name = trimmed.strip_suffix('.').unwrap_or(trimmed);

    if name.is_empty() {
        return Err(DomainError::invalid(field, "Domain cannot be empty"));
    }
    if name.len() > MAX_DOMAIN_LEN {
        return Err(DomainError::invalid(
            field,
            format!("Domain cannot exceed {} characters", MAX_DOMAIN_LEN),
        ));
    }
    let valid = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_' || c == '*');
    if !valid {
        return Err(DomainError::invalid(
            field,
            "Domain contains invalid characters (only alphanumeric, hyphens, dots, underscores and wildcards are allowed)",
        ));
    }
    for label in name.split('.') {
        if label.is_empty() {
            return Err(DomainError::invalid(field, "Domain contains an empty label"));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::invalid(
                field,
                format!("Label '{}' exceeds {} characters", label, MAX_LABEL_LEN),
            ));
        }
    }

    Ok(name.to_string())
}
