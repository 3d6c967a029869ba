use super::*;

fn order(id: &str, name: &str, email: &str, status: OrderStatus) -> Order {
    Order {
        id: id.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        phone: "971500000000".to_owned(),
        address: "12 Marina Walk".to_owned(),
        city: "Dubai".to_owned(),
        province: "Dubai".to_owned(),
        postal_code: "00000".to_owned(),
        country: "UAE".to_owned(),
        order_date: "2025-04-04T19:30:00.000Z".to_owned(),
        order_total: 100.0,
        order_status: status,
        order_notes: None,
        ordered_products: Vec::new(),
    }
}

fn sample_orders() -> Vec<Order> {
    vec![
        order("o1", "Jane Doe", "jane@x.com", OrderStatus::Pending),
        order("o2", "Omar Khan", "omar@y.com", OrderStatus::Dispatched),
        order("o3", "Lena Park", "lena@z.com", OrderStatus::Completed),
    ]
}

#[test]
fn empty_search_and_all_filter_returns_full_set_in_order() {
    let orders = sample_orders();
    let filtered = filter_orders(&orders, "", StatusFilter::All);
    assert_eq!(filtered, orders);
}

#[test]
fn status_filter_returns_only_matching_orders() {
    let orders = sample_orders();
    let filtered = filter_orders(&orders, "", StatusFilter::Dispatched);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "o2");
    for status_filter in [StatusFilter::Pending, StatusFilter::Dispatched, StatusFilter::Completed] {
        for found in filter_orders(&orders, "", status_filter) {
            assert!(status_filter.matches(found.order_status));
        }
    }
}

#[test]
fn search_matches_email_name_or_id_case_insensitively() {
    let orders = sample_orders();

    let by_email = filter_orders(&orders, "JANE@X.COM", StatusFilter::All);
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].id, "o1");

    let by_name = filter_orders(&orders, "khan", StatusFilter::All);
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, "o2");

    let by_id = filter_orders(&orders, "O3", StatusFilter::All);
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].email, "lena@z.com");
}

#[test]
fn search_result_always_contains_the_needle_somewhere() {
    let orders = sample_orders();
    for needle in ["an", "o", "x.com"] {
        for found in filter_orders(&orders, needle, StatusFilter::All) {
            let hit = found.email.to_lowercase().contains(needle)
                || found.name.to_lowercase().contains(needle)
                || found.id.to_lowercase().contains(needle);
            assert!(hit, "{needle:?} not found in {}", found.id);
        }
    }
}

#[test]
fn search_ignores_status_filter_set_to_all() {
    let orders = sample_orders();
    let filtered = filter_orders(&orders, "jane@x.com", StatusFilter::All);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].order_status, OrderStatus::Pending);
}

#[test]
fn search_and_status_filter_combine_with_and() {
    let orders = sample_orders();
    assert!(filter_orders(&orders, "jane", StatusFilter::Completed).is_empty());
    assert_eq!(filter_orders(&orders, "jane", StatusFilter::Pending).len(), 1);
}

#[test]
fn finish_load_populates_and_clears_loading() {
    let mut state = OrdersState::default();
    assert!(state.loading);
    state.finish_load(sample_orders());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.orders.len(), 3);
}

#[test]
fn fail_load_sets_blocking_error_and_empty_set() {
    let mut state = OrdersState::default();
    state.fail_load();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(LOAD_ERROR));
    assert!(state.orders.is_empty());
}

#[test]
fn successful_update_merges_confirmed_status() {
    let mut state = OrdersState::default();
    state.finish_load(sample_orders());

    state.apply_status_update("o1", OrderStatus::Completed);
    state.set_message("o1", success_message("Updated"), false);

    assert_eq!(state.status_of("o1"), Some(OrderStatus::Completed));
    let message = state.messages.get("o1").expect("message should be present");
    assert_eq!(message.text, "Updated");
    assert!(!message.is_error);

    // Timer expiry clears the message but not the confirmed status.
    state.clear_message("o1");
    assert!(state.messages.get("o1").is_none());
    assert_eq!(state.status_of("o1"), Some(OrderStatus::Completed));
}

#[test]
fn failed_update_leaves_status_untouched() {
    let mut state = OrdersState::default();
    state.finish_load(sample_orders());

    // The attempt to move o2 to completed fails server-side; the local record
    // keeps its previous status and only the row message changes.
    state.set_message("o2", "stock mismatch".to_owned(), true);

    assert_eq!(state.status_of("o2"), Some(OrderStatus::Dispatched));
    let message = state.messages.get("o2").expect("message should be present");
    assert_eq!(message.text, "stock mismatch");
    assert!(message.is_error);

    state.clear_message("o2");
    assert!(state.messages.is_empty());
}

#[test]
fn second_attempt_replaces_pending_message() {
    let mut state = OrdersState::default();
    state.finish_load(sample_orders());

    state.set_message("o1", "first".to_owned(), true);
    state.set_message("o1", "second".to_owned(), false);

    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages.get("o1").map(|m| m.text.as_str()), Some("second"));
}

#[test]
fn selection_holds_at_most_one_order() {
    let mut state = OrdersState::default();
    state.finish_load(sample_orders());

    state.select(state.orders[0].clone());
    assert_eq!(state.selected.as_ref().map(|o| o.id.as_str()), Some("o1"));

    state.select(state.orders[1].clone());
    assert_eq!(state.selected.as_ref().map(|o| o.id.as_str()), Some("o2"));

    state.clear_selection();
    assert!(state.selected.is_none());
}

#[test]
fn success_message_falls_back_when_backend_sent_nothing() {
    assert_eq!(success_message(""), UPDATE_SUCCESS_FALLBACK);
    assert_eq!(success_message("Updated"), "Updated");
}

#[test]
fn status_filter_parses_select_values() {
    assert_eq!(StatusFilter::parse("all"), StatusFilter::All);
    assert_eq!(StatusFilter::parse("pending"), StatusFilter::Pending);
    assert_eq!(StatusFilter::parse("dispatched"), StatusFilter::Dispatched);
    assert_eq!(StatusFilter::parse("completed"), StatusFilter::Completed);
    assert_eq!(StatusFilter::parse("bogus"), StatusFilter::All);
}
