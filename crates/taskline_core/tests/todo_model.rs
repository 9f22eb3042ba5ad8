use chrono::{DateTime, Utc};
use taskline_core::{Todo, TodoDraft, TodoStatus};
use uuid::Uuid;

fn sample_when() -> DateTime<Utc> {
    "2021-03-22T00:00:00Z".parse().unwrap()
}

#[test]
fn draft_default_leaves_fields_absent() {
    let draft = TodoDraft::default();

    assert_eq!(draft.text, None);
    assert_eq!(draft.when, None);
}

#[test]
fn draft_new_keeps_raw_input() {
    let draft = TodoDraft::new("plan the trip", "2021-03-22");

    assert_eq!(draft.text.as_deref(), Some("plan the trip"));
    assert_eq!(draft.when.as_deref(), Some("2021-03-22"));
}

#[test]
fn todo_equality_is_structural() {
    let id = Uuid::parse_str("13fac0f7-2647-421d-a3fb-26018233c2d8").unwrap();
    let a = Todo::with_id(id, "I Must Plan My trip to europe", sample_when(), TodoStatus::Late);
    let b = Todo::with_id(id, "I Must Plan My trip to europe", sample_when(), TodoStatus::Late);
    assert_eq!(a, b);

    let other_status = Todo::with_id(id, "I Must Plan My trip to europe", sample_when(), TodoStatus::Pending);
    assert_ne!(a, other_status);

    let other_when: DateTime<Utc> = "2021-03-23T00:00:00Z".parse().unwrap();
    let shifted = Todo::with_id(id, "I Must Plan My trip to europe", other_when, TodoStatus::Late);
    assert_ne!(a, shifted);
}

#[test]
fn todo_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let todo = Todo::with_id(id, "ship the release notes", sample_when(), TodoStatus::Pending);

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["text"], "ship the release notes");
    assert_eq!(json["when"], "2021-03-22T00:00:00Z");
    assert_eq!(json["status"], "pending");

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, todo);
}

#[test]
fn status_serializes_as_snake_case() {
    assert_eq!(serde_json::to_value(TodoStatus::Late).unwrap(), "late");
    assert_eq!(serde_json::to_value(TodoStatus::Pending).unwrap(), "pending");
}
