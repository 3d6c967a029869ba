//! Category listing page: every product in one collection.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::product_card::{ProductCard, ProductCardSkeleton};
use crate::net::config::ApiConfig;
use crate::net::types::Product;

/// Skeleton cards shown while the listing loads.
const SKELETON_COUNT: usize = 8;

/// Product grid for a single category, refetched on `:category` changes.
#[component]
pub fn CategoryPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let params = use_params_map();

    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let category = move || params.read().get("category").unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        Effect::new(move || {
            let category = category();
            if category.is_empty() {
                return;
            }
            loading.set(true);
            error.set(None);
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_products_by_category(&config, &category).await {
                    Ok(fetched) => {
                        products.set(fetched);
                        loading.set(false);
                    }
                    Err(detail) => {
                        log::error!("category fetch failed for {category}: {detail}");
                        error.set(Some("Failed to load products. Please try again later.".to_owned()));
                        loading.set(false);
                    }
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = &config;

    view! {
        <div class="category-page">
            <header class="category-page__header">
                <h2 class="category-page__title">{category}</h2>
                <p class="category-page__count">
                    {move || {
                        if loading.get() {
                            String::new()
                        } else {
                            format!("{} products", products.with(Vec::len))
                        }
                    }}
                </p>
            </header>

            <Show when=move || error.get().is_some()>
                <div class="category-page__error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="category-page__grid">
                            {(0..SKELETON_COUNT)
                                .map(|_| view! { <ProductCardSkeleton/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                }
            >
                <Show
                    when=move || error.get().is_none() && !products.with(Vec::is_empty)
                    fallback=move || {
                        view! {
                            <Show when=move || error.get().is_none()>
                                <div class="category-page__empty">"No products found in this category."</div>
                            </Show>
                        }
                    }
                >
                    <div class="category-page__grid">
                        <For
                            each=move || products.get()
                            key=|product| product.id.clone()
                            children=|product| view! { <ProductCard product=product/> }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
