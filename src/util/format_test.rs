use super::*;

#[test]
fn format_currency_groups_thousands() {
    assert_eq!(format_currency(1_234.5), "AED 1,234.50");
    assert_eq!(format_currency(1_234_567.891), "AED 1,234,567.89");
}

#[test]
fn format_currency_small_amounts() {
    assert_eq!(format_currency(0.0), "AED 0.00");
    assert_eq!(format_currency(999.999), "AED 1,000.00");
}

#[test]
fn format_currency_negative() {
    assert_eq!(format_currency(-42.5), "AED -42.50");
}

#[test]
fn format_date_renders_backend_timestamps() {
    assert_eq!(format_date("2025-04-04T19:30:00.000Z"), "Apr 04, 2025, 7:30 PM");
    assert_eq!(format_date("2025-12-01T00:05:00Z"), "Dec 01, 2025, 12:05 AM");
    assert_eq!(format_date("2025-06-15T12:00:00Z"), "Jun 15, 2025, 12:00 PM");
}

#[test]
fn format_date_passes_garbage_through() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_date(""), "");
    assert_eq!(format_date("2025-13-01T09:00:00Z"), "2025-13-01T09:00:00Z");
    assert_eq!(format_date("2025-04-04"), "2025-04-04");
}
