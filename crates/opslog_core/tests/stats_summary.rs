use opslog_core::{
    summarize, MemoryRecordStore, Priority, RecordRepository, Status,
};

#[test]
fn category_counts_match_the_dashboard_scenario() {
    let mut store = MemoryRecordStore::new();
    store
        .append("cold call batch", "Lead Contacted", Priority::Medium)
        .unwrap();
    store
        .append("NPS survey results", "Client Feedback", Priority::Low)
        .unwrap();
    store
        .append("conference follow-up", "Lead Contacted", Priority::High)
        .unwrap();

    let summary = summarize(&store.list_all());

    assert_eq!(summary.total, 3);
    assert_eq!(summary.by_category.get("Lead Contacted"), Some(&2));
    assert_eq!(summary.by_category.get("Client Feedback"), Some(&1));
    assert_eq!(summary.by_category.len(), 2);
}

#[test]
fn zero_count_categories_are_omitted() {
    let mut store = MemoryRecordStore::new();
    store
        .append("only entry", "Legal Update", Priority::Low)
        .unwrap();

    let summary = summarize(&store.list_all());
    assert!(!summary.by_category.contains_key("Lead Contacted"));
}

#[test]
fn status_and_priority_domains_always_include_zero_counts() {
    let mut store = MemoryRecordStore::new();
    let record = store
        .append("single update", "App Update", Priority::High)
        .unwrap();
    store
        .update_field(record.id, "status", "in_progress")
        .unwrap();

    let summary = summarize(&store.list_all());

    assert_eq!(summary.by_status.len(), Status::ALL.len());
    for entry in &summary.by_status {
        let expected = usize::from(entry.status == Status::InProgress);
        assert_eq!(entry.count, expected, "status {:?}", entry.status);
    }

    assert_eq!(summary.by_priority.len(), Priority::ALL.len());
    for entry in &summary.by_priority {
        let expected = usize::from(entry.priority == Priority::High);
        assert_eq!(entry.count, expected, "priority {:?}", entry.priority);
    }
}

#[test]
fn summarize_is_deterministic_without_intervening_mutation() {
    let mut store = MemoryRecordStore::new();
    store
        .append("first", "Operations Update", Priority::Medium)
        .unwrap();
    store
        .append("second", "Resource Purchase", Priority::Low)
        .unwrap();

    let records = store.list_all();
    assert_eq!(summarize(&records), summarize(&records));
    assert_eq!(summarize(&store.list_all()), summarize(&store.list_all()));
}

#[test]
fn summary_serializes_for_dashboard_consumption() {
    let mut store = MemoryRecordStore::new();
    store
        .append("payment received", "Client Payment Received", Priority::High)
        .unwrap();

    let json = serde_json::to_value(summarize(&store.list_all())).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["by_category"]["Client Payment Received"], 1);
    assert_eq!(json["by_status"][0]["status"], "not_started");
    assert_eq!(json["by_status"][0]["count"], 1);
    assert_eq!(json["by_priority"][2]["priority"], "high");
    assert_eq!(json["by_priority"][2]["count"], 1);
}
