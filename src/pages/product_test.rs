use super::*;

#[test]
fn quantity_never_drops_below_one() {
    assert_eq!(clamp_quantity(1, -1, 10), 1);
    assert_eq!(clamp_quantity(2, -1, 10), 1);
}

#[test]
fn quantity_never_exceeds_stock() {
    assert_eq!(clamp_quantity(10, 1, 10), 10);
    assert_eq!(clamp_quantity(9, 1, 10), 10);
}

#[test]
fn quantity_steps_inside_the_range() {
    assert_eq!(clamp_quantity(3, 1, 10), 4);
    assert_eq!(clamp_quantity(3, -1, 10), 2);
}

#[test]
fn zero_stock_pins_quantity_at_one() {
    assert_eq!(clamp_quantity(1, 1, 0), 1);
    assert_eq!(clamp_quantity(1, -1, 0), 1);
}

#[test]
fn spec_labels_split_camel_case() {
    assert_eq!(spec_label("batteryLife"), "Battery Life");
    assert_eq!(spec_label("bluetooth"), "Bluetooth");
    assert_eq!(spec_label("ipRating"), "Ip Rating");
}

#[test]
fn spec_label_of_empty_key_is_empty() {
    assert_eq!(spec_label(""), "");
}
