//! REST API helpers for the storefront backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so fetch
//! failures degrade to UI-visible text without crashing hydration. For
//! mutating calls the `Err` carries the backend's human-readable `message`
//! when the error payload has one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config::ApiConfig;
use super::types::{Order, OrderStatus, Product};

/// Failure of a mutating call (status update, add-to-cart).
///
/// Pages show `Server` messages verbatim and replace `Transport` details with
/// their own generic copy, matching how the backend's error payloads are
/// written for end users while transport noise is not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiFailure {
    /// Backend answered with an error payload carrying a `message`.
    Server(String),
    /// Request never produced a usable response; detail is log-only.
    Transport(String),
}

impl ApiFailure {
    /// The text to show the user, falling back to `generic` for transport
    /// failures.
    #[must_use]
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            Self::Server(message) => message.clone(),
            Self::Transport(_) => generic.to_owned(),
        }
    }

    /// The raw message regardless of variant, for logs and for surfaces that
    /// mirror the backend text directly (cart toasts).
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Server(message) | Self::Transport(message) => message,
        }
    }
}

/// Fetch the full order list from `/analytics/all-orders`.
///
/// # Errors
///
/// Returns an error string if the request fails or the payload does not
/// parse. The admin board surfaces a fixed blocking message either way.
pub async fn fetch_orders(config: &ApiConfig) -> Result<Vec<Order>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.url("/analytics/all-orders");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("order list request failed: {}", resp.status()));
        }
        #[derive(serde::Deserialize)]
        struct OrderListResponse {
            orders: Vec<Order>,
        }
        let body: OrderListResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.orders)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err("not available on server".to_owned())
    }
}

/// Change one order's status via `PUT /analytics/update-order-status`.
///
/// On success returns the backend's confirmation `message` (possibly empty).
///
/// # Errors
///
/// Returns [`ApiFailure::Server`] with the backend error payload's `message`
/// when it has one, otherwise [`ApiFailure::Transport`].
pub async fn update_order_status(
    config: &ApiConfig,
    order_id: &str,
    status: OrderStatus,
) -> Result<String, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.url("/analytics/update-order-status");
        let body = serde_json::json!({
            "orderID": order_id,
            "orderStatus": status.as_str(),
        });
        let resp = gloo_net::http::Request::put(&url)
            .json(&body)
            .map_err(|e| ApiFailure::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiFailure::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(match extract_error_message(&resp).await {
                Some(message) => ApiFailure::Server(message),
                None => ApiFailure::Transport(format!("status update failed: {}", resp.status())),
            });
        }
        #[derive(serde::Deserialize)]
        struct UpdateResponse {
            #[serde(default)]
            message: String,
        }
        let body: UpdateResponse = resp
            .json()
            .await
            .map_err(|e| ApiFailure::Transport(e.to_string()))?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, order_id, status);
        Err(ApiFailure::Transport("not available on server".to_owned()))
    }
}

/// Fetch one product from `/product/get-product/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the payload does not
/// parse.
pub async fn fetch_product(config: &ApiConfig, product_id: &str) -> Result<Product, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.url(&format!("/product/get-product/{product_id}"));
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("product request failed: {}", resp.status()));
        }
        #[derive(serde::Deserialize)]
        struct ProductResponse {
            product: Product,
        }
        let body: ProductResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.product)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, product_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch the products of one category from `/product/categories/{category}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the payload does not
/// parse.
pub async fn fetch_products_by_category(
    config: &ApiConfig,
    category: &str,
) -> Result<Vec<Product>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.url(&format!("/product/categories/{category}"));
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("category request failed: {}", resp.status()));
        }
        #[derive(serde::Deserialize)]
        struct CategoryResponse {
            products: Vec<Product>,
        }
        let body: CategoryResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.products)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, category);
        Err("not available on server".to_owned())
    }
}

/// Add a product to the stored user's cart via `POST /product/add-to-cart`.
///
/// On success returns the backend's confirmation `message` (possibly empty).
///
/// # Errors
///
/// Returns [`ApiFailure::Server`] with the backend error payload's `message`
/// when it has one, otherwise [`ApiFailure::Transport`].
pub async fn add_to_cart(
    config: &ApiConfig,
    product_id: &str,
    user_id: &str,
) -> Result<String, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.url("/product/add-to-cart");
        let body = serde_json::json!({
            "productId": product_id,
            "userId": user_id,
        });
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| ApiFailure::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiFailure::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(match extract_error_message(&resp).await {
                Some(message) => ApiFailure::Server(message),
                None => ApiFailure::Transport(format!("add to cart failed: {}", resp.status())),
            });
        }
        #[derive(serde::Deserialize)]
        struct CartResponse {
            #[serde(default)]
            message: String,
        }
        let body: CartResponse = resp
            .json()
            .await
            .map_err(|e| ApiFailure::Transport(e.to_string()))?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, product_id, user_id);
        Err(ApiFailure::Transport("not available on server".to_owned()))
    }
}

/// Pull the optional human-readable `message` out of an error payload.
#[cfg(feature = "hydrate")]
async fn extract_error_message(resp: &gloo_net::http::Response) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorResponse {
        message: Option<String>,
    }
    let body: ErrorResponse = resp.json().await.ok()?;
    body.message.filter(|m| !m.is_empty())
}
