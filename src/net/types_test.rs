use super::*;

#[test]
fn order_deserializes_backend_payload() {
    let raw = serde_json::json!({
        "_id": "67ea1c2f9d1e8a0012f4b301",
        "name": "Jane Doe",
        "email": "jane@x.com",
        "phone": "971500000000",
        "address": "12 Marina Walk",
        "city": "Dubai",
        "province": "Dubai",
        "postalCode": "00000",
        "country": "UAE",
        "orderDate": "2025-04-04T19:30:00.000Z",
        "orderTotal": 259.5,
        "orderStatus": "dispatched",
        "orderNotes": "Leave at reception",
        "orderedProducts": [
            { "productId": "p1", "price": 129.75, "quantity": 2 }
        ]
    });

    let order: Order = serde_json::from_value(raw).expect("order should parse");
    assert_eq!(order.id, "67ea1c2f9d1e8a0012f4b301");
    assert_eq!(order.order_status, OrderStatus::Dispatched);
    assert_eq!(order.postal_code, "00000");
    assert_eq!(order.order_notes.as_deref(), Some("Leave at reception"));
    assert_eq!(order.ordered_products.len(), 1);
    assert_eq!(order.ordered_products[0].quantity, 2);
}

#[test]
fn order_tolerates_missing_optional_fields() {
    let raw = serde_json::json!({
        "_id": "o2",
        "orderStatus": "pending"
    });

    let order: Order = serde_json::from_value(raw).expect("sparse order should parse");
    assert_eq!(order.name, "");
    assert_eq!(order.order_total, 0.0);
    assert!(order.order_notes.is_none());
    assert!(order.ordered_products.is_empty());
}

#[test]
fn order_rejects_unknown_status() {
    let raw = serde_json::json!({
        "_id": "o3",
        "orderStatus": "shipped"
    });

    assert!(serde_json::from_value::<Order>(raw).is_err());
}

#[test]
fn order_status_round_trips_form_values() {
    for status in [OrderStatus::Pending, OrderStatus::Dispatched, OrderStatus::Completed] {
        assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(OrderStatus::parse("cancelled"), None);
}

#[test]
fn product_deserializes_backend_payload() {
    let raw = serde_json::json!({
        "_id": "p1",
        "name": "Aurora Buds",
        "tagline": "Premium quality earbuds",
        "description": "Long description.",
        "price": 100.0,
        "discountPrice": 80.0,
        "discount": 20.0,
        "stock": 4,
        "img": ["/images/buds-1.webp", "/images/buds-2.webp"],
        "colors": [ { "_id": "c1", "name": "Black", "hex": "#000000" } ],
        "features": ["Active noise cancellation"],
        "technicalSpecs": { "batteryLife": "8h", "bluetooth": "5.3" },
        "category": "earbuds"
    });

    let product: Product = serde_json::from_value(raw).expect("product should parse");
    assert_eq!(product.img.len(), 2);
    assert_eq!(product.colors[0].hex, "#000000");
    assert_eq!(product.technical_specs.get("bluetooth").map(String::as_str), Some("5.3"));
}
