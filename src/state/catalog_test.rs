use super::*;

#[test]
fn all_filter_preserves_full_collection_order() {
    let all = filter_collections(CollectionFilter::All);
    assert_eq!(all.len(), COLLECTIONS.len());
    assert_eq!(all[0].category, "Earbuds");
    assert_eq!(all[2].category, "HeadPhones");
}

#[test]
fn chip_filters_return_exactly_the_flagged_entries() {
    let new = filter_collections(CollectionFilter::New);
    assert_eq!(new.len(), 1);
    assert_eq!(new[0].category, "Smartwatches");

    let bestsellers = filter_collections(CollectionFilter::Bestseller);
    assert_eq!(bestsellers.len(), 2);
    assert!(bestsellers.iter().all(|c| c.bestseller));
}

#[test]
fn category_route_is_lowercased() {
    assert_eq!(category_route("HeadPhones"), "/product/categories/headphones");
}

#[test]
fn carousel_next_and_prev_wrap_modulo_image_count() {
    let mut carousel = CarouselState::default();
    carousel.next(3);
    carousel.next(3);
    assert_eq!(carousel.index, 2);
    carousel.next(3);
    assert_eq!(carousel.index, 0);

    carousel.prev(3);
    assert_eq!(carousel.index, 2);
}

#[test]
fn carousel_jump_sets_index_and_ignores_out_of_range() {
    let mut carousel = CarouselState::default();
    carousel.jump(2, 3);
    assert_eq!(carousel.index, 2);
    carousel.jump(2, 3);
    assert_eq!(carousel.index, 2);
    carousel.jump(9, 3);
    assert_eq!(carousel.index, 2);
}

#[test]
fn paused_carousel_does_not_advance_on_tick() {
    let mut carousel = CarouselState::default();
    carousel.paused = true;
    let before = carousel;
    carousel.tick(3);
    assert_eq!(carousel, before);

    carousel.paused = false;
    carousel.tick(3);
    assert_eq!(carousel.index, 1);
}

#[test]
fn single_image_carousel_never_moves() {
    let mut carousel = CarouselState::default();
    carousel.tick(1);
    assert_eq!(carousel.index, 0);
    assert_eq!(carousel.fade_key, 0);
}

#[test]
fn every_image_change_bumps_the_fade_key() {
    let mut carousel = CarouselState::default();
    carousel.next(3);
    carousel.prev(3);
    carousel.jump(1, 3);
    assert_eq!(carousel.fade_key, 3);
}
