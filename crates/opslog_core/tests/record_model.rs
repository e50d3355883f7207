use opslog_core::{Priority, RecordId, Status, UpdateRecord, ValidationError};

#[test]
fn new_record_sets_default_status() {
    let record = UpdateRecord::new(
        RecordId::new(1001),
        "Emailed prospective client",
        "Lead Contacted",
        Priority::Medium,
        1_700_000_000_000,
    );

    assert_eq!(record.id, RecordId::new(1001));
    assert_eq!(record.description, "Emailed prospective client");
    assert_eq!(record.category, "Lead Contacted");
    assert_eq!(record.priority, Priority::Medium);
    assert_eq!(record.status, Status::NotStarted);
    assert_eq!(record.created_at, 1_700_000_000_000);
}

#[test]
fn validate_rejects_whitespace_only_description() {
    let record = UpdateRecord::new(
        RecordId::new(1001),
        "   ",
        "Lead Contacted",
        Priority::Low,
        0,
    );
    assert_eq!(record.validate(), Err(ValidationError::EmptyDescription));
}

#[test]
fn record_serialization_uses_expected_wire_fields() {
    let mut record = UpdateRecord::new(
        RecordId::new(1003),
        "Quarterly invoice settled",
        "Client Payment Received",
        Priority::High,
        1_700_000_360_000,
    );
    record.status = Status::InProgress;

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], 1003);
    assert_eq!(json["description"], "Quarterly invoice settled");
    assert_eq!(json["category"], "Client Payment Received");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["status"], "in_progress");
    assert_eq!(json["created_at"], 1_700_000_360_000_i64);

    let decoded: UpdateRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn record_id_display_matches_table_rendering() {
    assert_eq!(RecordId::new(1001).to_string(), "UPDATE-1001");
    assert_eq!(
        RecordId::parse("UPDATE-1001"),
        Some(RecordId::new(1001))
    );
}
