//! Admin order-management page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the full order list once on mount, filters it client-side by
//! search term and status, and lets an admin change a row's status inline.
//! Each attempt leaves a per-row message that expires after a fixed window;
//! a second attempt on the same row before expiry replaces the message and
//! resets its clock. A failed update does not roll the select control back,
//! so the row can visually diverge from server truth until reload.

#[cfg(test)]
#[path = "admin_orders_test.rs"]
mod admin_orders_test;

use leptos::prelude::*;

use crate::net::config::ApiConfig;
use crate::net::types::{Order, OrderStatus};
use crate::state::orders::{
    OrdersState, STATUS_MESSAGE_MS, StatusFilter, UPDATE_ERROR_FALLBACK, success_message,
};
use crate::util::format::{format_currency, format_date};
use crate::util::timer::TimerSet;

/// Order board: filters, table, and detail modal.
#[component]
pub fn AdminOrdersPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let state = RwSignal::new(OrdersState::default());
    let timers = TimerSet::new();
    on_cleanup({
        let timers = timers.clone();
        move || timers.cancel_all()
    });

    // One-shot fetch. No retry; a failed load requires a full page reload.
    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_orders(&config).await {
                Ok(orders) => state.update(|s| s.finish_load(orders)),
                Err(detail) => {
                    log::error!("order list fetch failed: {detail}");
                    state.update(|s| s.fail_load());
                }
            }
        });
    }

    let on_status_change = Callback::new({
        let timers = timers.clone();
        move |(order_id, value): (String, String)| {
            let Some(new_status) = OrderStatus::parse(&value) else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let config = config.clone();
                let timers = timers.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::update_order_status(&config, &order_id, new_status).await
                    {
                        Ok(message) => state.update(|s| {
                            s.apply_status_update(&order_id, new_status);
                            s.set_message(&order_id, success_message(&message), false);
                        }),
                        Err(failure) => {
                            log::error!(
                                "status update failed for {order_id}: {}",
                                failure.message()
                            );
                            // No rollback: the select keeps showing whatever
                            // the admin picked.
                            state.update(|s| {
                                s.set_message(
                                    &order_id,
                                    failure.user_message(UPDATE_ERROR_FALLBACK),
                                    true,
                                );
                            });
                        }
                    }
                    // Success or failure, the message expires after the fixed
                    // window; rescheduling the same key resets the clock.
                    let expire_id = order_id.clone();
                    timers.schedule(&order_id, STATUS_MESSAGE_MS, move || {
                        state.update(|s| s.clear_message(&expire_id));
                    });
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&config, &timers, order_id, new_status);
            }
        }
    });

    let on_close = Callback::new(move |()| state.update(|s| s.clear_selection()));

    view! {
        <div class="orders-page">
            <Show when=move || state.with(|s| s.loading)>
                <div class="orders-page__loading">
                    <div class="spinner" aria-label="Loading orders"></div>
                </div>
            </Show>

            <Show when=move || state.with(|s| s.error.is_some())>
                <div class="orders-page__error">
                    <p>{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
                </div>
            </Show>

            <Show when=move || state.with(|s| !s.loading && s.error.is_none())>
                <h1 class="orders-page__title">"Order Management"</h1>

                <div class="orders-page__filters">
                    <input
                        class="orders-page__search"
                        type="text"
                        placeholder="Search by email, name or order ID..."
                        prop:value=move || state.with(|s| s.search_term.clone())
                        on:input=move |ev| {
                            state.update(|s| s.search_term = event_target_value(&ev));
                        }
                    />
                    <select
                        class="orders-page__status-filter"
                        prop:value=move || state.with(|s| s.status_filter.as_str().to_owned())
                        on:change=move |ev| {
                            state
                                .update(|s| {
                                    s.status_filter = StatusFilter::parse(&event_target_value(&ev));
                                });
                        }
                    >
                        <option value="all">"All Statuses"</option>
                        <option value="pending">"Pending"</option>
                        <option value="dispatched">"Dispatched"</option>
                        <option value="completed">"Completed"</option>
                    </select>
                </div>

                <table class="orders-table">
                    <thead>
                        <tr>
                            <th>"Order Date"</th>
                            <th>"Customer"</th>
                            <th>"Items"</th>
                            <th>"Total"</th>
                            <th>"Status"</th>
                            <th>"Invoice"</th>
                            <th>"Order Status"</th>
                            <th>"Send Msg"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.with(OrdersState::filtered)
                            key=|order| order.id.clone()
                            children=move |order: Order| {
                                order_row(state, on_status_change, order)
                            }
                        />
                        <Show when=move || {
                            state.with(|s| !s.loading && s.error.is_none() && s.filtered().is_empty())
                        }>
                            <tr class="orders-table__empty">
                                <td colspan="8">"No orders found matching your criteria"</td>
                            </tr>
                        </Show>
                    </tbody>
                </table>
            </Show>

            {move || {
                state
                    .with(|s| s.selected.clone())
                    .map(|order| view! { <OrderDetailModal order=order on_close=on_close/> })
            }}
        </div>
    }
}

/// One table row. Status and message cells read back through `state` so a
/// confirmed update refreshes them while a failed one leaves the select
/// showing the admin's pick.
fn order_row(
    state: RwSignal<OrdersState>,
    on_status_change: Callback<(String, String)>,
    order: Order,
) -> impl IntoView {
    let id = order.id.clone();
    let initial_status = order.order_status;
    let date_label = format_date(&order.order_date);
    let items_label = format!("{} items", order.ordered_products.len());
    let total_label = format_currency(order.order_total);
    let whatsapp = whatsapp_link(&order);

    let row_status = Signal::derive({
        let id = id.clone();
        move || state.with(|s| s.status_of(&id)).unwrap_or(initial_status)
    });
    let row_message = Signal::derive({
        let id = id.clone();
        move || state.with(|s| s.messages.get(&id).cloned())
    });
    let on_select = {
        let order = order.clone();
        move |_| state.update(|s| s.select(order.clone()))
    };
    let on_change = {
        let id = id.clone();
        move |ev| on_status_change.run((id.clone(), event_target_value(&ev)))
    };

    view! {
        <tr class="orders-table__row">
            <td>{date_label}</td>
            <td>
                <div class="orders-table__customer">{order.name.clone()}</div>
                <div class="orders-table__email">{order.email.clone()}</div>
            </td>
            <td>{items_label}</td>
            <td>{total_label}</td>
            <td>
                <span class=move || {
                    format!("status-pill status-pill--{}", row_status.get().as_str())
                }>{move || row_status.get().as_str()}</span>
            </td>
            <td>
                <button class="orders-table__details" on:click=on_select>
                    "View Details"
                </button>
            </td>
            <td>
                <select
                    class="orders-table__status-select"
                    prop:value=move || row_status.get().as_str().to_owned()
                    on:change=on_change
                >
                    <option value="pending">"Pending"</option>
                    <option value="dispatched">"Dispatched"</option>
                    <option value="completed">"Completed"</option>
                </select>
                {move || {
                    row_message
                        .get()
                        .map(|m| {
                            view! {
                                <p
                                    class="orders-table__message"
                                    class:orders-table__message--error=m.is_error
                                >
                                    {m.text}
                                </p>
                            }
                        })
                }}
            </td>
            <td>
                <a
                    class="orders-table__whatsapp"
                    href=whatsapp
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "Send Message on WhatsApp"
                </a>
            </td>
        </tr>
    }
}

/// Read-only detail modal for one selected order.
#[component]
fn OrderDetailModal(order: Order, on_close: Callback<()>) -> impl IntoView {
    let date_label = format_date(&order.order_date);
    let total_label = format_currency(order.order_total);
    let status_label = order.order_status.as_str();
    let region_line = [order.city.as_str(), order.province.as_str(), order.postal_code.as_str()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal order-detail" on:click=move |ev| ev.stop_propagation()>
                <header class="order-detail__header">
                    <h2>"Order Details"</h2>
                    <button class="order-detail__close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </header>

                <section class="order-detail__summary">
                    <h3>"Order Summary"</h3>
                    <dl>
                        <div>
                            <dt>"Order Date"</dt>
                            <dd>{date_label}</dd>
                        </div>
                        <div>
                            <dt>"Order ID"</dt>
                            <dd>{order.id.clone()}</dd>
                        </div>
                        <div>
                            <dt>"Order Status"</dt>
                            <dd class=format!("order-detail__status--{status_label}")>{status_label}</dd>
                        </div>
                        <div>
                            <dt>"Total Amount"</dt>
                            <dd>{total_label.clone()}</dd>
                        </div>
                    </dl>
                </section>

                <section class="order-detail__customer">
                    <h3>"Customer Information"</h3>
                    <dl>
                        <div>
                            <dt>"Name"</dt>
                            <dd>{order.name.clone()}</dd>
                        </div>
                        <div>
                            <dt>"Email"</dt>
                            <dd>{order.email.clone()}</dd>
                        </div>
                        <div>
                            <dt>"Phone"</dt>
                            <dd>{order.phone.clone()}</dd>
                        </div>
                    </dl>
                </section>

                <section class="order-detail__shipping">
                    <h3>"Shipping Address"</h3>
                    <p>{order.address.clone()}</p>
                    <p>{region_line}</p>
                    <p>{order.country.clone()}</p>
                    {order
                        .order_notes
                        .clone()
                        .map(|notes| {
                            view! {
                                <div class="order-detail__notes">
                                    <dt>"Order Notes:"</dt>
                                    <p>{notes}</p>
                                </div>
                            }
                        })}
                </section>

                <section class="order-detail__items">
                    <h3>"Order Items"</h3>
                    <table>
                        <thead>
                            <tr>
                                <th>"Product ID"</th>
                                <th>"Price"</th>
                                <th>"Quantity"</th>
                                <th>"Total"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {order
                                .ordered_products
                                .iter()
                                .map(|item| {
                                    let line_total =
                                        format_currency(item.price * f64::from(item.quantity));
                                    view! {
                                        <tr>
                                            <td>{item.product_id.clone()}</td>
                                            <td>{format_currency(item.price)}</td>
                                            <td>{item.quantity}</td>
                                            <td>{line_total}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                        <tfoot>
                            <tr>
                                <td colspan="3">"Total"</td>
                                <td>{total_label}</td>
                            </tr>
                        </tfoot>
                    </table>
                </section>

                <footer class="order-detail__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </footer>
            </div>
        </div>
    }
}

/// Pre-filled WhatsApp contact link for one order's customer.
#[must_use]
pub fn whatsapp_link(order: &Order) -> String {
    format!(
        "https://wa.me/{}?text=Hello {}, your order of {} on Glowz Lifestyle has been placed. \
         Current status: {}. Delivery is expected within 5-7 working days.",
        order.phone,
        order.name,
        format_currency(order.order_total),
        order.order_status.as_str()
    )
}
