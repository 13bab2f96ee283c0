mod record;
mod record_type;

pub use record::{
    DnsRecord, RecordChanges, RecordFields, MAX_DOMAIN_LEN, MAX_LABEL_LEN, MAX_TTL, MAX_VALUE_LEN,
};
pub use record_type::RecordType;
