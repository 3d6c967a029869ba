use super::*;
use crate::net::types::OrderedProduct;

fn order() -> Order {
    Order {
        id: "o1".to_owned(),
        name: "Jane Doe".to_owned(),
        email: "jane@x.com".to_owned(),
        phone: "971500000000".to_owned(),
        address: "12 Marina Walk".to_owned(),
        city: "Dubai".to_owned(),
        province: "Dubai".to_owned(),
        postal_code: "00000".to_owned(),
        country: "UAE".to_owned(),
        order_date: "2025-04-04T19:30:00.000Z".to_owned(),
        order_total: 1250.0,
        order_status: OrderStatus::Dispatched,
        order_notes: None,
        ordered_products: vec![OrderedProduct {
            product_id: "p1".to_owned(),
            price: 625.0,
            quantity: 2,
        }],
    }
}

#[test]
fn whatsapp_link_targets_the_order_phone() {
    let link = whatsapp_link(&order());
    assert!(link.starts_with("https://wa.me/971500000000?text="));
}

#[test]
fn whatsapp_link_mentions_customer_total_and_status() {
    let link = whatsapp_link(&order());
    assert!(link.contains("Jane Doe"));
    assert!(link.contains("AED 1,250.00"));
    assert!(link.contains("dispatched"));
}
