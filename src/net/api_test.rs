use super::*;

#[test]
fn endpoint_joins_path_onto_base() {
    assert_eq!(endpoint("/registro"), "http://localhost:3000/registro");
    assert_eq!(endpoint("/login"), "http://localhost:3000/login");
}

#[test]
fn bearer_formats_header_value() {
    assert_eq!(bearer("t1"), "Bearer t1");
}

#[test]
fn api_error_messages_name_the_cause() {
    assert_eq!(
        ApiError::Status(401).to_string(),
        "server returned status 401"
    );
    assert_eq!(
        ApiError::Transport("connection refused".to_owned()).to_string(),
        "request failed: connection refused"
    );
}
