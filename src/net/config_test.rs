use super::*;

#[test]
fn url_joins_path_to_base() {
    let config = ApiConfig::new("https://api.example.com");
    assert_eq!(config.url("/analytics/all-orders"), "https://api.example.com/analytics/all-orders");
}

#[test]
fn trailing_slashes_are_stripped() {
    let config = ApiConfig::new("https://api.example.com///");
    assert_eq!(config.url("/product/add-to-cart"), "https://api.example.com/product/add-to-cart");
}

#[test]
fn relative_base_is_allowed() {
    let config = ApiConfig::new("/api");
    assert_eq!(config.url("/product/get-product/p1"), "/api/product/get-product/p1");
}
