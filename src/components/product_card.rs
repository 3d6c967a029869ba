//! Catalog card for one product in a category listing.
//!
//! Carries the discount/stock presentation rules and the add-to-cart /
//! buy-now actions with a 3-second feedback toast.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::components::alert::{AlertState, AlertToast, show_alert};
use crate::net::config::ApiConfig;
use crate::net::types::Product;
use crate::util::session::stored_user;
use crate::util::timer::TimerSet;

/// How long a cart toast stays visible.
const TOAST_MS: u32 = 3_000;

/// A clickable product card with cart actions.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let alert = RwSignal::new(AlertState::default());
    let timers = TimerSet::new();
    on_cleanup({
        let timers = timers.clone();
        move || timers.cancel_all()
    });

    let adding = RwSignal::new(false);
    let buying = RwSignal::new(false);

    let out_of_stock = product.stock == 0;
    let low_stock = stock_badge(product.stock);
    let original = original_price_label(product.price, product.discount);
    let discount_badge = (product.discount > 0.0).then(|| format!("-{}%", product.discount));
    let href = format!("/product/{}", product.id);
    let image = product.img.first().cloned().unwrap_or_default();
    let name = product.name.clone();
    let tagline = product.tagline.clone();
    let category = product.category.clone();
    let price_label = format!("{:.2}", product.price);

    let on_cart = Callback::new({
        let product_id = product.id.clone();
        let timers = timers.clone();
        move |buy_now: bool| {
            if adding.get() || buying.get() || out_of_stock {
                return;
            }
            let Some(user) = stored_user() else {
                show_alert(
                    alert,
                    &timers,
                    "Please login to add items to cart".to_owned(),
                    true,
                    TOAST_MS,
                );
                return;
            };
            if buy_now {
                buying.set(true);
            } else {
                adding.set(true);
            }

            #[cfg(feature = "hydrate")]
            {
                let product_id = product_id.clone();
                let config = config.clone();
                let timers = timers.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::add_to_cart(&config, &product_id, &user.id).await {
                        Ok(message) => {
                            show_alert(alert, &timers, cart_success_message(&message), false, TOAST_MS);
                            if buy_now {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().set_href("/profile");
                                }
                            }
                        }
                        Err(failure) => {
                            log::error!("add to cart failed: {}", failure.message());
                            show_alert(
                                alert,
                                &timers,
                                format!("Error: {}", failure.message()),
                                true,
                                TOAST_MS,
                            );
                        }
                    }
                    adding.set(false);
                    buying.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&user, &config, &product_id);
                adding.set(false);
                buying.set(false);
            }
        }
    });

    view! {
        <div class="product-card" class:product-card--unavailable=out_of_stock>
            <a class="product-card__link" href=href>
                <div class="product-card__media">
                    <img class="product-card__image" src=image alt=name.clone()/>
                    {discount_badge
                        .map(|label| view! { <span class="product-card__badge product-card__badge--discount">{label}</span> })}
                    {low_stock
                        .map(|label| view! { <span class="product-card__badge product-card__badge--stock">{label}</span> })}
                    <Show when=move || out_of_stock>
                        <span class="product-card__soldout">"Out of Stock"</span>
                    </Show>
                </div>
                <div class="product-card__body">
                    <h3 class="product-card__name">{name.clone()}</h3>
                    <div class="product-card__pricing">
                        {original
                            .clone()
                            .map(|label| view! { <span class="product-card__price--was">{label}</span> })}
                        <span class="product-card__price">{price_label}</span>
                    </div>
                    <p class="product-card__category">{category}</p>
                    <p class="product-card__tagline">{tagline}</p>
                </div>
            </a>
            <div class="product-card__actions">
                <button
                    class="btn product-card__add"
                    disabled=move || adding.get() || out_of_stock
                    on:click=move |_| on_cart.run(false)
                >
                    {move || if adding.get() { "Adding..." } else { "ADD TO CART" }}
                </button>
                <button
                    class="btn btn--primary product-card__buy"
                    disabled=move || buying.get() || out_of_stock
                    on:click=move |_| on_cart.run(true)
                >
                    {move || if buying.get() { "Processing..." } else { "BUY NOW" }}
                </button>
            </div>
            <AlertToast state=alert/>
        </div>
    }
}

/// Grey placeholder card shown while a listing is still loading.
#[component]
pub fn ProductCardSkeleton() -> impl IntoView {
    view! {
        <div class="product-card product-card--skeleton" aria-hidden="true">
            <div class="product-card__media skeleton-block"></div>
            <div class="product-card__body">
                <div class="skeleton-line skeleton-line--wide"></div>
                <div class="skeleton-line"></div>
                <div class="skeleton-line skeleton-line--short"></div>
            </div>
            <div class="product-card__actions">
                <div class="skeleton-block skeleton-block--button"></div>
                <div class="skeleton-block skeleton-block--button"></div>
            </div>
        </div>
    }
}

/// Pre-discount price label, reconstructed from the discount percentage when
/// the product is on sale. `None` when there is no discount to cross out.
#[must_use]
pub fn original_price_label(price: f64, discount: f64) -> Option<String> {
    if discount <= 0.0 || discount >= 100.0 {
        return None;
    }
    Some(format!("{:.2}", price / (1.0 - discount / 100.0)))
}

/// Urgency badge for nearly sold-out products.
#[must_use]
pub fn stock_badge(stock: u32) -> Option<String> {
    (1..=5).contains(&stock).then(|| format!("Only {stock} left"))
}

/// Toast text for a confirmed cart addition.
#[must_use]
pub fn cart_success_message(server_message: &str) -> String {
    if server_message.is_empty() {
        "Product added to cart successfully!".to_owned()
    } else {
        server_message.to_owned()
    }
}
