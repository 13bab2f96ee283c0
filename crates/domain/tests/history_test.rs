use ferrous_records_domain::{
    DnsRecord, HistoryAction, NewHistoryEntry, RecordFields, RecordType,
};
use std::sync::Arc;

fn record() -> DnsRecord {
    DnsRecord {
        id: 3,
        domain: Arc::from("www.example.com"),
        record_type: RecordType::A,
        value: Arc::from("192.0.2.1"),
        ttl: None,
        created_at: "2026-02-03 04:05:06".to_string(),
        updated_at: "2026-02-03 04:05:06".to_string(),
    }
}

#[test]
fn test_history_action_parse() {
    assert_eq!("edited".parse::<HistoryAction>().unwrap(), HistoryAction::Edited);
    assert_eq!("DELETED".parse::<HistoryAction>().unwrap(), HistoryAction::Deleted);
    assert!("created".parse::<HistoryAction>().is_err());
}

#[test]
fn test_history_action_display() {
    assert_eq!(HistoryAction::Edited.to_string(), "edited");
    assert_eq!(HistoryAction::Deleted.to_str(), "deleted");
}

#[test]
fn test_edited_entry_keeps_original_and_replacement() {
    let before = record();
    let after = RecordFields::parse("www.example.com", "A", "192.0.2.2", Some(60)).unwrap();

    let entry = NewHistoryEntry::edited(&before, after.clone());

    assert_eq!(entry.record_id, 3);
    assert_eq!(entry.action, HistoryAction::Edited);
    assert_eq!(entry.original, before.fields());
    assert_eq!(entry.original_created_at, "2026-02-03 04:05:06");
    assert_eq!(entry.replacement, Some(after));
}

#[test]
fn test_deleted_entry_has_no_replacement() {
    let entry = NewHistoryEntry::deleted(&record());

    assert_eq!(entry.action, HistoryAction::Deleted);
    assert_eq!(entry.original.value.as_ref(), "192.0.2.1");
    assert!(entry.replacement.is_none());
}
