use super::*;

#[test]
fn open_from_idle_shows_modal() {
    let mut flow = RemovalFlow::default();
    assert!(flow.open("Chess Club", "michael@mergington.edu"));
    assert_eq!(
        flow,
        RemovalFlow::ModalOpen {
            activity: "Chess Club".to_owned(),
            email: "michael@mergington.edu".to_owned(),
        }
    );
}

#[test]
fn open_is_rejected_while_modal_is_showing() {
    let mut flow = RemovalFlow::default();
    assert!(flow.open("Chess Club", "a@x"));
    assert!(!flow.open("Art Club", "b@x"));

    // The first confirmation is untouched.
    let prompt = flow.prompt().expect("modal still open");
    assert!(prompt.contains("a@x"));
    assert!(prompt.contains("Chess Club"));
}

#[test]
fn open_is_rejected_while_request_is_in_flight() {
    let mut flow = RemovalFlow::default();
    flow.open("Chess Club", "a@x");
    flow.confirm();
    assert!(!flow.open("Art Club", "b@x"));
    assert_eq!(flow, RemovalFlow::Requesting);
}

#[test]
fn cancel_returns_to_idle_without_a_request() {
    let mut flow = RemovalFlow::default();
    flow.open("Chess Club", "a@x");
    flow.cancel();
    assert_eq!(flow, RemovalFlow::Idle);
    // Nothing left to confirm.
    assert_eq!(flow.confirm(), None);
}

#[test]
fn confirm_yields_the_pair_and_moves_to_requesting() {
    let mut flow = RemovalFlow::default();
    flow.open("Chess Club", "michael@mergington.edu");

    let pair = flow.confirm().expect("confirmed removal");
    assert_eq!(
        pair,
        ("Chess Club".to_owned(), "michael@mergington.edu".to_owned())
    );
    assert_eq!(flow, RemovalFlow::Requesting);
    assert!(flow.prompt().is_none());
}

#[test]
fn confirm_without_modal_is_a_no_op() {
    let mut flow = RemovalFlow::default();
    assert_eq!(flow.confirm(), None);
    assert_eq!(flow, RemovalFlow::Idle);
}

#[test]
fn settle_finishes_the_flow() {
    let mut flow = RemovalFlow::default();
    flow.open("Chess Club", "a@x");
    flow.confirm();
    flow.settle();
    assert_eq!(flow, RemovalFlow::Idle);

    // A new confirmation can start once the previous one settled.
    assert!(flow.open("Art Club", "b@x"));
}

#[test]
fn prompt_names_email_and_activity() {
    let mut flow = RemovalFlow::default();
    flow.open("Chess Club", "michael@mergington.edu");
    assert_eq!(
        flow.prompt().as_deref(),
        Some("Are you sure you want to unregister michael@mergington.edu from Chess Club?")
    );
}
