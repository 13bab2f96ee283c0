use ferrous_records_domain::{DnsRecord, RecordChanges};
use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    pub id: i64,
    pub domain: String,
    pub record_type: String,
    pub value: String,
    pub ttl: Option<u32>,
    pub created_at: String,
    pub updated_at: String,
}

impl RecordResponse {
    pub fn from_domain(r: DnsRecord) -> Self {
        Self {
            id: r.id,
            domain: r.domain.to_string(),
            record_type: r.record_type.as_str().to_string(),
            value: r.value.to_string(),
            ttl: r.ttl,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Missing text fields arrive as empty strings so validation can name them.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateRecordRequest {
    #[serde(default)]
    pub domain: String,
    #[serde(default, alias = "type")]
    pub record_type: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, deserialize_with = "optional_ttl")]
    pub ttl: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateRecordRequest {
    pub domain: Option<String>,
    #[serde(alias = "type")]
    pub record_type: Option<String>,
    pub value: Option<String>,
    #[serde(default, deserialize_with = "optional_ttl")]
    pub ttl: Option<u32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TtlInput {
    Number(u32),
    Text(String),
}

/// JSON sends a number or `null`; HTML forms send text, and `ttl=` for a
/// blank input, which means no TTL.
fn optional_ttl<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<TtlInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(TtlInput::Number(ttl)) => Ok(Some(ttl)),
        Some(TtlInput::Text(raw)) => {
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(None);
            }
            raw.parse::<u32>()
                .map(Some)
                .map_err(|e| de::Error::custom(format!("ttl: {}", e)))
        }
    }
}

impl UpdateRecordRequest {
    pub fn into_changes(self) -> RecordChanges {
        RecordChanges {
            domain: self.domain,
            record_type: self.record_type,
            value: self.value,
            ttl: self.ttl,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LatestQuery {
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaginatedRecords {
    pub data: Vec<RecordResponse>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}
