use ferrous_records_domain::{DnsRecord, DomainError, RecordChanges, RecordFields, RecordType};
use std::sync::Arc;

fn stored(record_type: RecordType, domain: &str, value: &str) -> DnsRecord {
    DnsRecord {
        id: 7,
        domain: Arc::from(domain),
        record_type,
        value: Arc::from(value),
        ttl: Some(300),
        created_at: "2026-01-01 10:00:00".to_string(),
        updated_at: "2026-01-01 10:00:00".to_string(),
    }
}

fn field_of(err: DomainError) -> &'static str {
    match err {
        DomainError::InvalidField { field, .. } => field,
        other => panic!("expected InvalidField, got {other:?}"),
    }
}

// ── RecordType ────────────────────────────────────────────────────────────────

#[test]
fn test_record_type_parse_is_case_insensitive() {
    assert_eq!("a".parse::<RecordType>().unwrap(), RecordType::A);
    assert_eq!("Cname".parse::<RecordType>().unwrap(), RecordType::CNAME);
    assert_eq!(" mx ".parse::<RecordType>().unwrap(), RecordType::MX);
}

#[test]
fn test_record_type_rejects_unknown() {
    assert!("NAPTR".parse::<RecordType>().is_err());
    assert!("".parse::<RecordType>().is_err());
}

#[test]
fn test_record_type_display_round_trips_every_variant() {
    for t in RecordType::ALL {
        assert_eq!(t.to_string().parse::<RecordType>().unwrap(), t);
    }
}

#[test]
fn test_record_type_serializes_as_string() {
    let json = serde_json::to_string(&RecordType::AAAA).unwrap();
    assert_eq!(json, "\"AAAA\"");
    let parsed: RecordType = serde_json::from_str("\"txt\"").unwrap();
    assert_eq!(parsed, RecordType::TXT);
}

// ── RecordFields validation ───────────────────────────────────────────────────

#[test]
fn test_fields_valid_a_record() {
    let fields = RecordFields::parse("www.example.com", "A", "192.0.2.10", Some(3600)).unwrap();

    assert_eq!(fields.domain.as_ref(), "www.example.com");
    assert_eq!(fields.record_type, RecordType::A);
    assert_eq!(fields.value.as_ref(), "192.0.2.10");
    assert_eq!(fields.ttl, Some(3600));
}

#[test]
fn test_fields_trim_whitespace_and_trailing_dot() {
    let fields = RecordFields::parse("  example.org. ", "cname", " target.example.net. ", None)
        .unwrap();

    assert_eq!(fields.domain.as_ref(), "example.org");
    assert_eq!(fields.record_type, RecordType::CNAME);
    assert_eq!(fields.value.as_ref(), "target.example.net");
}

#[test]
fn test_fields_empty_domain_rejected() {
    let err = RecordFields::parse("   ", "A", "192.0.2.1", None).unwrap_err();
    assert_eq!(field_of(err), "domain");
}

#[test]
fn test_fields_domain_with_empty_label_rejected() {
    let err = RecordFields::parse("a..example.com", "A", "192.0.2.1", None).unwrap_err();
    assert_eq!(field_of(err), "domain");
}

#[test]
fn test_fields_domain_with_invalid_chars_rejected() {
    let err = RecordFields::parse("exa mple.com", "A", "192.0.2.1", None).unwrap_err();
    assert_eq!(field_of(err), "domain");
}

#[test]
fn test_fields_domain_label_too_long_rejected() {
    let domain = format!("{}.com", "a".repeat(64));
    let err = RecordFields::parse(&domain, "A", "192.0.2.1", None).unwrap_err();
    assert_eq!(field_of(err), "domain");
}

#[test]
fn test_fields_domain_too_long_rejected() {
    let label = "a".repeat(60);
    let domain = vec![label.as_str(); 5].join(".");
    assert!(domain.len() > 253);
    let err = RecordFields::parse(&domain, "A", "192.0.2.1", None).unwrap_err();
    assert_eq!(field_of(err), "domain");
}

#[test]
fn test_fields_wildcard_and_underscore_accepted() {
    assert!(RecordFields::parse("*.example.com", "A", "192.0.2.1", None).is_ok());
    assert!(RecordFields::parse("_sip._tcp.example.com", "SRV", "10 5 5060 sip.example.com", None).is_ok());
}

#[test]
fn test_fields_unknown_type_rejected() {
    let err = RecordFields::parse("example.com", "BOGUS", "x", None).unwrap_err();
    assert_eq!(field_of(err), "record_type");
}

#[test]
fn test_fields_empty_type_rejected() {
    let err = RecordFields::parse("example.com", "", "x", None).unwrap_err();
    assert_eq!(field_of(err), "record_type");
}

#[test]
fn test_fields_empty_value_rejected() {
    let err = RecordFields::parse("example.com", "TXT", "  ", None).unwrap_err();
    assert_eq!(field_of(err), "value");
}

#[test]
fn test_fields_a_requires_ipv4() {
    assert_eq!(
        field_of(RecordFields::parse("example.com", "A", "2001:db8::1", None).unwrap_err()),
        "value"
    );
    assert_eq!(
        field_of(RecordFields::parse("example.com", "A", "not-an-ip", None).unwrap_err()),
        "value"
    );
}

#[test]
fn test_fields_aaaa_requires_ipv6() {
    assert!(RecordFields::parse("example.com", "AAAA", "2001:db8::1", None).is_ok());
    assert_eq!(
        field_of(RecordFields::parse("example.com", "AAAA", "192.0.2.1", None).unwrap_err()),
        "value"
    );
}

#[test]
fn test_fields_cname_value_must_be_host() {
    let err = RecordFields::parse("www.example.com", "CNAME", "not a host", None).unwrap_err();
    assert_eq!(field_of(err), "value");
}

#[test]
fn test_fields_txt_value_is_free_form() {
    let fields =
        RecordFields::parse("example.com", "TXT", "v=spf1 include:_spf.example.com ~all", None)
            .unwrap();
    assert_eq!(fields.value.as_ref(), "v=spf1 include:_spf.example.com ~all");
}

#[test]
fn test_fields_ttl_upper_bound() {
    assert!(RecordFields::parse("example.com", "A", "192.0.2.1", Some(2_147_483_647)).is_ok());
    let err = RecordFields::parse("example.com", "A", "192.0.2.1", Some(2_147_483_648)).unwrap_err();
    assert_eq!(field_of(err), "ttl");
}

#[test]
fn test_fields_error_message_names_field() {
    let err = RecordFields::parse("", "A", "192.0.2.1", None).unwrap_err();
    assert!(err.to_string().starts_with("Invalid domain:"));
}

// ── DnsRecord::apply ──────────────────────────────────────────────────────────

#[test]
fn test_apply_empty_changes_rejected() {
    let record = stored(RecordType::A, "example.com", "192.0.2.1");
    assert_eq!(
        record.apply(&RecordChanges::default()).unwrap_err(),
        DomainError::EmptyUpdate
    );
}

#[test]
fn test_apply_keeps_unchanged_fields() {
    let record = stored(RecordType::A, "example.com", "192.0.2.1");
    let changes = RecordChanges {
        value: Some("192.0.2.99".to_string()),
        ..Default::default()
    };

    let fields = record.apply(&changes).unwrap();

    assert_eq!(fields.domain.as_ref(), "example.com");
    assert_eq!(fields.record_type, RecordType::A);
    assert_eq!(fields.value.as_ref(), "192.0.2.99");
    assert_eq!(fields.ttl, Some(300));
}

#[test]
fn test_apply_type_change_revalidates_existing_value() {
    let record = stored(RecordType::A, "example.com", "192.0.2.1");
    let changes = RecordChanges {
        record_type: Some("AAAA".to_string()),
        ..Default::default()
    };

    assert_eq!(field_of(record.apply(&changes).unwrap_err()), "value");
}

#[test]
fn test_apply_type_and_value_together() {
    let record = stored(RecordType::A, "example.com", "192.0.2.1");
    let changes = RecordChanges {
        record_type: Some("aaaa".to_string()),
        value: Some("2001:db8::5".to_string()),
        ttl: Some(60),
        ..Default::default()
    };

    let fields = record.apply(&changes).unwrap();
    assert_eq!(fields.record_type, RecordType::AAAA);
    assert_eq!(fields.value.as_ref(), "2001:db8::5");
    assert_eq!(fields.ttl, Some(60));
}

#[test]
fn test_fields_snapshot_matches_record() {
    let record = stored(RecordType::MX, "example.com", "10 mail.example.com");
    let fields = record.fields();

    assert_eq!(fields.domain, record.domain);
    assert_eq!(fields.record_type, record.record_type);
    assert_eq!(fields.value, record.value);
    assert_eq!(fields.ttl, record.ttl);
}

#[test]
fn test_identity_ignores_domain_case() {
    let a = RecordFields::parse("WWW.Example.com", "A", "192.0.2.1", None).unwrap();
    let b = RecordFields::parse("www.example.com", "A", "192.0.2.1", Some(60)).unwrap();
    assert_eq!(a.identity(), b.identity());
}
