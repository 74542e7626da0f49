use super::*;
use serde_json::json;

#[test]
fn initial_loading_follows_auto_fetch() {
    assert!(RequestState::initial(true).loading);
    assert!(!RequestState::initial(false).loading);
    assert_eq!(RequestState::default(), RequestState::initial(false));
}

#[test]
fn begin_clears_error_and_keeps_data() {
    let mut state = RequestState {
        data: Some(json!([1])),
        loading: false,
        error: Some("old".to_owned()),
    };
    state.begin();
    assert!(state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.data, Some(json!([1])));
}

#[test]
fn succeed_and_fail_clear_loading() {
    let mut state = RequestState::initial(true);
    state.succeed(json!({ "ok": true }));
    assert!(!state.loading);
    assert_eq!(state.data, Some(json!({ "ok": true })));

    state.begin();
    state.fail("nope".to_owned());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("nope"));
}

#[test]
fn settle_only_clears_loading() {
    let mut state = RequestState::initial(true);
    state.settle();
    assert_eq!(state, RequestState::initial(false));
}
