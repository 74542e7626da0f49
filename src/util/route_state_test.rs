use super::*;
use serde_json::json;

#[test]
fn merge_overlays_new_keys_and_keeps_old_ones() {
    let prior = RouteState::new().with("y", 2);
    let merged = prior.merged(&RouteState::new().with("x", 1));
    assert_eq!(serde_json::to_value(&merged).unwrap(), json!({ "x": 1, "y": 2 }));
}

#[test]
fn merge_overwrites_existing_key() {
    let mut state = RouteState::new().with("tab", "chat").with("open", true);
    state.merge(&RouteState::new().with("tab", "ai"));
    assert_eq!(state.get("tab"), Some(&json!("ai")));
    assert_eq!(state.get("open"), Some(&json!(true)));
}

#[test]
fn non_object_history_state_reads_as_empty() {
    assert!(RouteState::from_value(json!(null)).is_empty());
    assert!(RouteState::from_value(json!([1, 2])).is_empty());
    assert!(RouteState::from_json("not json").is_empty());
    assert!(RouteState::from_json("null").is_empty());
}

#[test]
fn json_form_round_trips() {
    let state = RouteState::new().with("from", "/boards").with("count", 3);
    assert_eq!(RouteState::from_json(&state.to_json()), state);
}
