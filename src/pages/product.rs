//! Product detail page: gallery, variant selection, and purchase actions.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::alert::{AlertState, AlertToast, show_alert};
use crate::net::config::ApiConfig;
use crate::net::types::Product;
use crate::util::format::format_currency;
use crate::util::session::stored_user;
use crate::util::timer::TimerSet;

/// How long a product-page alert stays visible.
const ALERT_MS: u32 = 5_000;

/// Delay before the buy-now redirect, long enough to read the alert.
#[cfg(feature = "hydrate")]
const REDIRECT_MS: u32 = 2_000;

/// Product page; refetches whenever the `:id` route param changes.
#[component]
pub fn ProductPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let params = use_params_map();

    let product = RwSignal::new(None::<Product>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let selected_image = RwSignal::new(String::new());
    let selected_color = RwSignal::new(None::<String>);
    let quantity = RwSignal::new(1_u32);
    let fullscreen = RwSignal::new(false);
    let adding = RwSignal::new(false);
    let buying = RwSignal::new(false);

    let alert = RwSignal::new(AlertState::default());
    let timers = TimerSet::new();
    on_cleanup({
        let timers = timers.clone();
        move || timers.cancel_all()
    });

    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        Effect::new(move || {
            let Some(id) = params.read().get("id") else {
                return;
            };
            loading.set(true);
            error.set(None);
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_product(&config, &id).await {
                    Ok(fetched) => {
                        selected_image.set(fetched.img.first().cloned().unwrap_or_default());
                        quantity.set(1);
                        product.set(Some(fetched));
                        loading.set(false);
                    }
                    Err(detail) => {
                        log::error!("product fetch failed for {id}: {detail}");
                        error.set(Some("Failed to load product data".to_owned()));
                        loading.set(false);
                    }
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = &params;

    let detail = {
        let config = config.clone();
        let timers = timers.clone();
        move || {
            product.get().map(|p| {
                product_detail(
                    p,
                    config.clone(),
                    timers.clone(),
                    alert,
                    selected_image,
                    selected_color,
                    quantity,
                    fullscreen,
                    adding,
                    buying,
                )
            })
        }
    };

    view! {
        <div class="product-page">
            <AlertToast state=alert/>

            <Show when=move || loading.get()>
                <div class="product-page__status">"Loading product..."</div>
            </Show>
            <Show when=move || error.get().is_some()>
                <div class="product-page__status product-page__status--error">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
            <Show when=move || !loading.get() && error.get().is_none() && product.get().is_none()>
                <div class="product-page__status">"Product not found"</div>
            </Show>

            {detail}

            <Show when=move || fullscreen.get()>
                <div class="lightbox" on:click=move |_| fullscreen.set(false)>
                    <button class="lightbox__close" aria-label="Close" on:click=move |_| fullscreen.set(false)>
                        "✕"
                    </button>
                    <img class="lightbox__image" src=move || selected_image.get()/>
                </div>
            </Show>
        </div>
    }
}

/// The loaded-product body. Rebuilt only when the product itself changes;
/// gallery/quantity/cart interactions run through the passed signals.
#[allow(clippy::too_many_arguments)]
fn product_detail(
    p: Product,
    config: ApiConfig,
    timers: TimerSet,
    alert: RwSignal<AlertState>,
    selected_image: RwSignal<String>,
    selected_color: RwSignal<Option<String>>,
    quantity: RwSignal<u32>,
    fullscreen: RwSignal<bool>,
    adding: RwSignal<bool>,
    buying: RwSignal<bool>,
) -> impl IntoView {
    let stock = p.stock;
    let out_of_stock = stock == 0;
    let price_label = format_currency(p.discount_price);
    let was_label = format_currency(p.price);
    let savings_label = format_currency(p.price - p.discount_price);
    let stock_label = if out_of_stock {
        "Out of Stock".to_owned()
    } else {
        format!("In Stock ({stock} available)")
    };

    let on_cart = Callback::new({
        let product_id = p.id.clone();
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
                    ALERT_MS,
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
                        Ok(_) => {
                            let text = if buy_now {
                                "Product purchased successfully! Redirecting to profile..."
                            } else {
                                "Product added to cart successfully!"
                            };
                            show_alert(alert, &timers, text.to_owned(), false, ALERT_MS);
                            if buy_now {
                                timers.schedule("redirect", REDIRECT_MS, || {
                                    if let Some(window) = web_sys::window() {
                                        let _ = window.location().set_href("/profile");
                                    }
                                });
                            }
                        }
                        Err(failure) => {
                            log::error!("add to cart failed: {}", failure.message());
                            show_alert(
                                alert,
                                &timers,
                                format!("Error: {}", failure.message()),
                                true,
                                ALERT_MS,
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
        <div class="product-detail">
            <div class="product-detail__visual">
                <div class="product-detail__stage">
                    <img
                        class="product-detail__image"
                        src=move || selected_image.get()
                        alt=p.name.clone()
                    />
                    <button
                        class="product-detail__expand"
                        aria-label="View full screen"
                        on:click=move |_| fullscreen.set(true)
                    >
                        "⤢"
                    </button>
                </div>
                <div class="product-detail__thumbs">
                    {p
                        .img
                        .iter()
                        .cloned()
                        .map(|img| {
                            let src = img.clone();
                            let is_selected = {
                                let img = img.clone();
                                move || selected_image.get() == img
                            };
                            view! {
                                <img
                                    class="product-detail__thumb"
                                    class:product-detail__thumb--selected=is_selected
                                    src=src
                                    on:click=move |_| selected_image.set(img.clone())
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="product-detail__colors">
                    {p
                        .colors
                        .iter()
                        .cloned()
                        .map(|color| {
                            let hex = color.hex.clone();
                            let is_selected = {
                                let hex = hex.clone();
                                move || selected_color.get().as_deref() == Some(hex.as_str())
                            };
                            view! {
                                <button
                                    class="product-detail__swatch"
                                    class:product-detail__swatch--selected=is_selected
                                    style=format!("background-color: {}", color.hex)
                                    title=color.name.clone()
                                    on:click=move |_| selected_color.set(Some(hex.clone()))
                                ></button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <div class="product-detail__info">
                <h1 class="product-detail__name">{p.name.clone()}</h1>
                <p class="product-detail__tagline">{p.tagline.clone()}</p>

                <div class="product-detail__pricing">
                    <span class="product-detail__price">{price_label}</span>
                    <span class="product-detail__price--was">{was_label}</span>
                    <span class="product-detail__savings">{format!("Save {savings_label}")}</span>
                </div>

                <ul class="product-detail__features">
                    {p
                        .features
                        .iter()
                        .cloned()
                        .map(|feature| view! { <li>{feature}</li> })
                        .collect::<Vec<_>>()}
                </ul>

                <p class="product-detail__stock" class:product-detail__stock--out=out_of_stock>
                    {stock_label}
                </p>

                <div class="product-detail__quantity">
                    <span>"Quantity:"</span>
                    <button
                        class="product-detail__step"
                        disabled=out_of_stock
                        on:click=move |_| quantity.update(|q| *q = clamp_quantity(*q, -1, stock))
                    >
                        "−"
                    </button>
                    <span class="product-detail__count">{move || quantity.get()}</span>
                    <button
                        class="product-detail__step"
                        disabled=move || { out_of_stock || quantity.get() >= stock }
                        on:click=move |_| quantity.update(|q| *q = clamp_quantity(*q, 1, stock))
                    >
                        "+"
                    </button>
                </div>

                <div class="product-detail__actions">
                    <button
                        class="btn product-detail__add"
                        disabled=move || adding.get() || buying.get() || out_of_stock
                        on:click=move |_| on_cart.run(false)
                    >
                        {move || if adding.get() { "Adding..." } else { "Add to Cart" }}
                    </button>
                    <button
                        class="btn btn--primary product-detail__buy"
                        disabled=move || adding.get() || buying.get() || out_of_stock
                        on:click=move |_| on_cart.run(true)
                    >
                        {move || if buying.get() { "Processing..." } else { "Buy Now" }}
                    </button>
                </div>
            </div>

            <section class="product-detail__specs">
                <h3>"Technical Specifications"</h3>
                <div class="product-detail__specs-grid">
                    {p
                        .technical_specs
                        .iter()
                        .map(|(key, value)| {
                            view! {
                                <div class="product-detail__spec">
                                    <p class="product-detail__spec-label">{spec_label(key)}</p>
                                    <p class="product-detail__spec-value">{value.clone()}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="product-detail__overview">
                <h2>"Product Overview"</h2>
                <p>{p.description.clone()}</p>
            </section>
        </div>
    }
}

/// Step the quantity by `delta`, clamped to `1..=stock`. With zero stock the
/// stepper is disabled, so the value just stays pinned at 1.
#[must_use]
pub fn clamp_quantity(current: u32, delta: i32, stock: u32) -> u32 {
    let stepped = i64::from(current) + i64::from(delta);
    let ceiling = i64::from(stock.max(1));
    u32::try_from(stepped.clamp(1, ceiling)).unwrap_or(1)
}

/// Turn a camelCase spec key into a display label: `batteryLife` becomes
/// `Battery Life`.
#[must_use]
pub fn spec_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }
    label
}
