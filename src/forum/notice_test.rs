use super::*;
use crate::error::ApiError;

#[test]
fn login_required_names_the_action() {
    let notice = Notice::from_error(&ForumError::LoginRequired, "reply");
    assert_eq!(notice.message, "Please login to reply");
    assert!(notice.is_error());
}

#[test]
fn api_errors_use_server_message() {
    let err = ForumError::Api(ApiError::Status { status: 400, message: "Title too long".to_owned() });
    assert_eq!(Notice::from_error(&err, "post a question").message, "Title too long");
}

#[test]
fn validation_message_passes_through() {
    let notice = Notice::from_error(&ForumError::Validation("Please fill in all fields"), "post a question");
    assert_eq!(notice.message, "Please fill in all fields");
}

#[test]
fn success_is_not_error() {
    assert!(!Notice::success("Reply posted successfully!").is_error());
}
