use super::*;

#[test]
fn message_state_defaults_to_empty() {
    let s = MessageState::default();
    assert!(s.current().is_none());
}

#[test]
fn show_replaces_current_message() {
    let mut s = MessageState::default();
    s.success("Signed up alice@x for Chess Club");
    s.error("Activity is full");

    let current = s.current().expect("message");
    assert_eq!(current.kind, MessageKind::Error);
    assert_eq!(current.text, "Activity is full");
}

#[test]
fn clear_if_clears_matching_token() {
    let mut s = MessageState::default();
    let token = s.success("done");
    s.clear_if(token);
    assert!(s.current().is_none());
}

#[test]
fn stale_token_does_not_clear_newer_message() {
    let mut s = MessageState::default();
    let stale = s.success("first");
    s.error("second");

    s.clear_if(stale);

    let current = s.current().expect("newer message survives");
    assert_eq!(current.text, "second");
}

#[test]
fn ttl_constants_match_original_timings() {
    assert_eq!(SIGNUP_MESSAGE_TTL, Duration::from_secs(5));
    assert_eq!(REMOVAL_MESSAGE_TTL, Duration::from_secs(4));
}
