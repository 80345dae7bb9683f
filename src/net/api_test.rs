use super::*;

#[test]
fn signup_url_encodes_activity_and_email() {
    assert_eq!(
        signup_url("Chess Club", "michael@mergington.edu"),
        "/activities/Chess%20Club/signup?email=michael%40mergington.edu"
    );
}

#[test]
fn unregister_url_encodes_activity_and_email() {
    assert_eq!(
        unregister_url("Gym Class", "daniel@mergington.edu"),
        "/activities/Gym%20Class/participants?email=daniel%40mergington.edu"
    );
}

#[test]
fn encoding_matches_encode_uri_component() {
    // Unreserved marks survive, everything else is escaped.
    assert_eq!(encode("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
    assert_eq!(encode("a&b=c?d/e"), "a%26b%3Dc%3Fd%2Fe");
    assert_eq!(encode("Fällbeil"), "F%C3%A4llbeil");
}

#[test]
fn user_message_prefers_server_detail() {
    let err = ApiError::Server {
        status: 400,
        detail: Some("Student is already signed up".to_owned()),
    };
    assert_eq!(
        err.user_message("An error occurred"),
        "Student is already signed up"
    );
}

#[test]
fn user_message_falls_back_when_detail_is_missing() {
    let err = ApiError::Server {
        status: 500,
        detail: None,
    };
    assert_eq!(err.user_message("An error occurred"), "An error occurred");

    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.user_message("An error occurred"), "An error occurred");
}

#[test]
fn transport_failures_are_distinguished_from_server_errors() {
    assert!(ApiError::Network("offline".to_owned()).is_transport());
    assert!(ApiError::Parse("not json".to_owned()).is_transport());
    assert!(
        !ApiError::Server {
            status: 404,
            detail: None
        }
        .is_transport()
    );
}
