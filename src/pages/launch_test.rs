use super::*;

#[test]
fn accepts_plain_addresses() {
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("jane.doe@example.co.uk"));
}

#[test]
fn rejects_blank_and_structureless_input() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("   "));
    assert!(!is_valid_email("no-at-sign.example.com"));
}

#[test]
fn rejects_dotless_domains() {
    assert!(!is_valid_email("jane@localhost"));
}

#[test]
fn rejects_whitespace_anywhere() {
    assert!(!is_valid_email("jane doe@example.com"));
    assert!(!is_valid_email("jane@exa mple.com"));
    assert!(!is_valid_email("jane@example. com"));
}

#[test]
fn countdown_is_wired_to_the_launch_instant() {
    let parts = countdown_parts(LAUNCH_MS - 1_000, LAUNCH_MS);
    assert_eq!((parts.days, parts.hours, parts.minutes, parts.seconds), (0, 0, 0, 1));
    assert!(countdown_parts(LAUNCH_MS, LAUNCH_MS).is_elapsed());
}
