//! Explore page: curated collection cards with rotating imagery.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::catalog::{
    COLLECTIONS, CarouselState, Collection, CollectionFilter, category_route, filter_collections,
};

/// How often an unpaused card advances to its next image.
#[cfg(feature = "hydrate")]
const ROTATE_MS: u32 = 2_000;

/// Collection showcase with All / New / Bestseller chips.
#[component]
pub fn ExplorePage() -> impl IntoView {
    let navigate = use_navigate();
    let filter = RwSignal::new(CollectionFilter::All);
    let carousels = RwSignal::new(vec![CarouselState::default(); COLLECTIONS.len()]);

    // One interval drives every card; hovered cards skip their tick via the
    // paused flag instead of tearing the timer down.
    #[cfg(feature = "hydrate")]
    {
        let interval = gloo_timers::callback::Interval::new(ROTATE_MS, move || {
            carousels.update(|cards| {
                for (card, collection) in cards.iter_mut().zip(COLLECTIONS.iter()) {
                    card.tick(collection.images.len());
                }
            });
        });
        on_cleanup(move || drop(interval));
    }

    let chip = move |label: &'static str, value: CollectionFilter| {
        view! {
            <button
                class="chip"
                class:chip--active=move || filter.get() == value
                on:click=move |_| filter.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="explore-page">
            <header class="explore-page__header">
                <div>
                    <h2 class="explore-page__title">"Explore Collections"</h2>
                    <p class="explore-page__subtitle">
                        "Discover our curated selection of premium products designed for modern living."
                    </p>
                </div>
                <div class="explore-page__chips">
                    {chip("All", CollectionFilter::All)}
                    {chip("New", CollectionFilter::New)}
                    {chip("Bestsellers", CollectionFilter::Bestseller)}
                </div>
            </header>

            <div class="explore-page__grid">
                {move || {
                    let navigate = navigate.clone();
                    filter_collections(filter.get())
                        .into_iter()
                        .map(|collection| {
                            let slot = COLLECTIONS
                                .iter()
                                .position(|c| c.id == collection.id)
                                .unwrap_or(0);
                            let navigate = navigate.clone();
                            view! { <ExploreCard collection=collection slot_index=slot carousels=carousels navigate=navigate/> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

/// One collection card: carousel, badges, and category navigation.
#[component]
fn ExploreCard(
    collection: Collection,
    /// Index of this card's carousel in the page-level vector. Stable across
    /// filtering, which only hides cards.
    slot_index: usize,
    carousels: RwSignal<Vec<CarouselState>>,
    navigate: impl Fn(&str, NavigateOptions) + Clone + 'static,
) -> impl IntoView {
    let image_count = collection.images.len();
    let index = Signal::derive(move || {
        carousels.with(|cards| cards.get(slot_index).map_or(0, |c| c.index))
    });
    let fade_key = Signal::derive(move || {
        carousels.with(|cards| cards.get(slot_index).map_or(0, |c| c.fade_key))
    });
    let current_image =
        move || collection.images.get(index.get()).copied().unwrap_or_default();

    let set_paused = move |paused: bool| {
        carousels.update(|cards| {
            if let Some(card) = cards.get_mut(slot_index) {
                card.paused = paused;
            }
        });
    };
    let step_prev = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        carousels.update(|cards| {
            if let Some(card) = cards.get_mut(slot_index) {
                card.prev(image_count);
            }
        });
    };
    let step_next = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        carousels.update(|cards| {
            if let Some(card) = cards.get_mut(slot_index) {
                card.next(image_count);
            }
        });
    };
    let open_category = move |_| {
        navigate(&category_route(collection.category), NavigateOptions::default());
    };

    view! {
        <div
            class="explore-card"
            on:click=open_category
            on:mouseenter=move |_| set_paused(true)
            on:mouseleave=move |_| set_paused(false)
        >
            <div class="explore-card__media">
                // Keyed so the fade transition restarts on every image change.
                {move || {
                    let _ = fade_key.get();
                    view! {
                        <img
                            class="explore-card__image"
                            src=current_image()
                            alt=format!("Explore {}", collection.category)
                        />
                    }
                }}

                <Show when=move || { image_count > 1 }>
                    <div class="explore-card__nav">
                        <button class="explore-card__arrow" aria-label="Previous image" on:click=step_prev>
                            "‹"
                        </button>
                        <button class="explore-card__arrow" aria-label="Next image" on:click=step_next>
                            "›"
                        </button>
                    </div>
                    <div class="explore-card__dots">
                        {(0..image_count)
                            .map(|dot| {
                                view! {
                                    <button
                                        class="explore-card__dot"
                                        class:explore-card__dot--active=move || index.get() == dot
                                        aria-label=format!("View image {}", dot + 1)
                                        on:click=move |ev: leptos::ev::MouseEvent| {
                                            ev.stop_propagation();
                                            carousels
                                                .update(|cards| {
                                                    if let Some(card) = cards.get_mut(slot_index) {
                                                        card.jump(dot, image_count);
                                                    }
                                                });
                                        }
                                    ></button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </Show>
            </div>

            <div class="explore-card__badges">
                <Show when=move || collection.is_new>
                    <span class="badge badge--new">"New"</span>
                </Show>
                <Show when=move || collection.bestseller>
                    <span class="badge badge--bestseller">"Bestseller"</span>
                </Show>
            </div>

            <div class="explore-card__body">
                {collection
                    .product_count
                    .map(|count| view! { <span class="explore-card__count">{format!("{count} Products")}</span> })}
                <h3 class="explore-card__category">{collection.category}</h3>
                <p class="explore-card__description">{collection.description}</p>
                <button class="btn explore-card__cta">{collection.cta}</button>
            </div>
        </div>
    }
}
