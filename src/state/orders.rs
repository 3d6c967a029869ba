//! Order board state for the admin order-management page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This model holds the one-shot order fetch, the client-side search/status
//! filter, the detail-view selection, and the transient per-row status
//! messages. The displayed list is always a pure filter of the last
//! successfully fetched list; nothing is fabricated or dropped client-side
//! except by filtering.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use std::collections::HashMap;

use crate::net::types::{Order, OrderStatus};

/// Blocking page-level error shown when the initial fetch fails. There is no
/// retry; recovery is a full page reload.
pub const LOAD_ERROR: &str = "Failed to load orders. Please try again later.";

/// Row message shown for a confirmed update when the backend sent no text.
pub const UPDATE_SUCCESS_FALLBACK: &str = "Status updated successfully!";

/// Row message shown when an update fails without a server-provided message.
pub const UPDATE_ERROR_FALLBACK: &str = "Error updating order";

/// How long a row's status message stays visible.
pub const STATUS_MESSAGE_MS: u32 = 3_000;

/// Transient per-row feedback tied to a status-change attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Status filter options offered by the board's `<select>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    /// Default view: the orders an admin still has to act on.
    #[default]
    Pending,
    Dispatched,
    Completed,
}

impl StatusFilter {
    /// The `<select>` value for this filter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pending => "pending",
            Self::Dispatched => "dispatched",
            Self::Completed => "completed",
        }
    }

    /// Parse a `<select>` value; unknown values fall back to `All`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "pending" => Self::Pending,
            "dispatched" => Self::Dispatched,
            "completed" => Self::Completed,
            _ => Self::All,
        }
    }

    /// Whether an order with `status` passes this filter.
    #[must_use]
    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == OrderStatus::Pending,
            Self::Dispatched => status == OrderStatus::Dispatched,
            Self::Completed => status == OrderStatus::Completed,
        }
    }
}

/// Full state of the admin order board.
#[derive(Clone, Debug)]
pub struct OrdersState {
    /// Last successfully fetched order list, in backend order.
    pub orders: Vec<Order>,
    /// True until the one-shot fetch settles.
    pub loading: bool,
    /// Page-level load error, if the fetch failed.
    pub error: Option<String>,
    /// Order currently open in the detail modal, at most one.
    pub selected: Option<Order>,
    /// Case-insensitive substring matched against email, name, and id.
    pub search_term: String,
    pub status_filter: StatusFilter,
    /// Per-row status feedback keyed by order id; at most one entry per id.
    pub messages: HashMap<String, StatusMessage>,
}

impl Default for OrdersState {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            loading: true,
            error: None,
            selected: None,
            search_term: String::new(),
            status_filter: StatusFilter::default(),
            messages: HashMap::new(),
        }
    }
}

impl OrdersState {
    /// Record a successful one-shot fetch.
    pub fn finish_load(&mut self, orders: Vec<Order>) {
        self.orders = orders;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed one-shot fetch. The order set stays empty.
    pub fn fail_load(&mut self) {
        self.orders.clear();
        self.loading = false;
        self.error = Some(LOAD_ERROR.to_owned());
    }

    /// The orders to display under the current search term and status filter.
    #[must_use]
    pub fn filtered(&self) -> Vec<Order> {
        filter_orders(&self.orders, &self.search_term, self.status_filter)
    }

    /// Current status of an order by id, if it is in the fetched set.
    #[must_use]
    pub fn status_of(&self, order_id: &str) -> Option<OrderStatus> {
        self.orders
            .iter()
            .find(|o| o.id == order_id)
            .map(|o| o.order_status)
    }

    /// Merge a confirmed status into the local order record. Only called
    /// after the backend acknowledged the update; a failed update leaves the
    /// record (and whatever the select control shows) untouched.
    pub fn apply_status_update(&mut self, order_id: &str, status: OrderStatus) {
        if let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) {
            order.order_status = status;
        }
    }

    /// Set (or replace) the transient message for one row.
    pub fn set_message(&mut self, order_id: &str, text: String, is_error: bool) {
        self.messages
            .insert(order_id.to_owned(), StatusMessage { text, is_error });
    }

    /// Drop the transient message for one row, typically on timer expiry.
    pub fn clear_message(&mut self, order_id: &str) {
        self.messages.remove(order_id);
    }

    /// Open the detail modal for one order, replacing any prior selection.
    pub fn select(&mut self, order: Order) {
        self.selected = Some(order);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

/// Pure search/status filter over the fetched list, preserving input order.
///
/// An order passes when the status filter is `All` or matches exactly, AND
/// the search term is a case-insensitive substring of at least one of email,
/// name, or id. An empty search term matches everything.
#[must_use]
pub fn filter_orders(orders: &[Order], search_term: &str, status_filter: StatusFilter) -> Vec<Order> {
    let needle = search_term.to_lowercase();
    orders
        .iter()
        .filter(|order| {
            let matches_search = needle.is_empty()
                || order.email.to_lowercase().contains(&needle)
                || order.name.to_lowercase().contains(&needle)
                || order.id.to_lowercase().contains(&needle);
            status_filter.matches(order.order_status) && matches_search
        })
        .cloned()
        .collect()
}

/// Row message for a confirmed update: the backend's text when it sent any,
/// otherwise the fixed fallback.
#[must_use]
pub fn success_message(server_message: &str) -> String {
    if server_message.is_empty() {
        UPDATE_SUCCESS_FALLBACK.to_owned()
    } else {
        server_message.to_owned()
    }
}
