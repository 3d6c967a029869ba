use super::*;

#[test]
fn server_failure_message_shown_verbatim() {
    let failure = ApiFailure::Server("stock mismatch".to_owned());
    assert_eq!(failure.user_message("Error updating order"), "stock mismatch");
}

#[test]
fn transport_failure_uses_generic_copy() {
    let failure = ApiFailure::Transport("status update failed: 502".to_owned());
    assert_eq!(failure.user_message("Error updating order"), "Error updating order");
}
