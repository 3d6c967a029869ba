//! Wire DTOs for the storefront backend API.
//!
//! DESIGN
//! ======
//! Field names intentionally mirror the backend's camelCase payloads (and its
//! Mongo-style `_id` keys) so serde stays schema-driven and no hand-written
//! mapping layer is needed. Everything here is an immutable snapshot from the
//! backend except `Order::order_status`, which the admin board edits.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A customer purchase record as returned by `/analytics/all-orders`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Customer display name.
    #[serde(default)]
    pub name: String,
    /// Customer email address.
    #[serde(default)]
    pub email: String,
    /// Customer phone number, in whatever format the checkout captured.
    #[serde(default)]
    pub phone: String,
    /// Street address line.
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub province: String,
    #[serde(rename = "postalCode", default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
    /// Order placement timestamp as an ISO-8601 string.
    #[serde(rename = "orderDate", default)]
    pub order_date: String,
    /// Grand total for the order.
    #[serde(rename = "orderTotal", default)]
    pub order_total: f64,
    /// Fulfillment status; the only field this frontend may change.
    #[serde(rename = "orderStatus")]
    pub order_status: OrderStatus,
    /// Free-form note the customer left at checkout, if any.
    #[serde(rename = "orderNotes", default)]
    pub order_notes: Option<String>,
    /// Line items in the order.
    #[serde(rename = "orderedProducts", default)]
    pub ordered_products: Vec<OrderedProduct>,
}

/// One line item inside an order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderedProduct {
    /// Product the line refers to.
    #[serde(rename = "productId")]
    pub product_id: String,
    /// Unit price at the time of purchase.
    pub price: f64,
    /// Units purchased.
    pub quantity: u32,
}

/// Fulfillment status of an order. Admin-editable through the order board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Dispatched,
    Completed,
}

impl OrderStatus {
    /// The wire/form value for this status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Dispatched => "dispatched",
            Self::Completed => "completed",
        }
    }

    /// Parse a `<select>` value back into a status.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "dispatched" => Some(Self::Dispatched),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// A catalog product as returned by `/product/get-product/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Product display name.
    pub name: String,
    /// Short marketing tagline shown under the name.
    #[serde(default)]
    pub tagline: String,
    /// Long-form product description.
    #[serde(default)]
    pub description: String,
    /// List price before discount.
    pub price: f64,
    /// Price actually charged.
    #[serde(rename = "discountPrice", default)]
    pub discount_price: f64,
    /// Discount percentage, 0 when the product is not on sale.
    #[serde(default)]
    pub discount: f64,
    /// Units available; 0 means out of stock.
    #[serde(default)]
    pub stock: u32,
    /// Gallery image URLs; the first entry is the default display image.
    #[serde(default)]
    pub img: Vec<String>,
    /// Available color variants.
    #[serde(default)]
    pub colors: Vec<ProductColor>,
    /// Bullet-point feature list.
    #[serde(default)]
    pub features: Vec<String>,
    /// Labelled technical specifications, displayed as-is.
    #[serde(rename = "technicalSpecs", default)]
    pub technical_specs: BTreeMap<String, String>,
    /// Catalog category (e.g. `"earbuds"`).
    #[serde(default)]
    pub category: String,
}

/// A selectable color variant on a product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductColor {
    #[serde(rename = "_id")]
    pub id: String,
    /// Human-readable color name.
    pub name: String,
    /// CSS hex value rendered as the swatch background.
    pub hex: String,
}
