use super::*;

#[test]
fn countdown_clamps_to_zero_at_and_after_launch() {
    assert!(countdown_parts(1_000, 1_000).is_elapsed());
    assert!(countdown_parts(2_000, 1_000).is_elapsed());
}

#[test]
fn countdown_one_second_before_launch() {
    let parts = countdown_parts(0, 1_000);
    assert_eq!(parts, CountdownParts { days: 0, hours: 0, minutes: 0, seconds: 1 });
}

#[test]
fn countdown_splits_mixed_offsets_exactly() {
    // 2 days, 3 hours, 4 minutes, 5 seconds.
    let distance = (2 * 24 * 60 * 60 + 3 * 60 * 60 + 4 * 60 + 5) * 1_000;
    let parts = countdown_parts(10_000, 10_000 + distance);
    assert_eq!(parts, CountdownParts { days: 2, hours: 3, minutes: 4, seconds: 5 });
}

#[test]
fn countdown_sub_second_remainder_rounds_down() {
    let parts = countdown_parts(0, 999);
    assert!(parts.is_elapsed() || parts.seconds == 0);
    assert_eq!(parts, CountdownParts { days: 0, hours: 0, minutes: 0, seconds: 0 });
}
