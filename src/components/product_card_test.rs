use super::*;

#[test]
fn original_price_reconstructed_from_discount() {
    assert_eq!(original_price_label(80.0, 20.0), Some("100.00".to_owned()));
    assert_eq!(original_price_label(50.0, 50.0), Some("100.00".to_owned()));
}

#[test]
fn no_original_price_without_a_discount() {
    assert_eq!(original_price_label(80.0, 0.0), None);
    assert_eq!(original_price_label(80.0, -5.0), None);
}

#[test]
fn pathological_discounts_are_ignored() {
    assert_eq!(original_price_label(80.0, 100.0), None);
    assert_eq!(original_price_label(80.0, 120.0), None);
}

#[test]
fn stock_badge_only_for_low_positive_stock() {
    assert_eq!(stock_badge(0), None);
    assert_eq!(stock_badge(3), Some("Only 3 left".to_owned()));
    assert_eq!(stock_badge(5), Some("Only 5 left".to_owned()));
    assert_eq!(stock_badge(6), None);
}

#[test]
fn cart_success_message_falls_back_when_empty() {
    assert_eq!(cart_success_message(""), "Product added to cart successfully!");
    assert_eq!(cart_success_message("Added!"), "Added!");
}
