//! Explore-page catalog showcase: static collections and per-card carousels.
//!
//! DESIGN
//! ======
//! The collection showcase is compiled in (it is marketing copy, not backend
//! data); only the per-card carousel and filter chips carry state. Carousel
//! ticks are driven by one interval owned by the page and gated by a
//! per-card `paused` flag, so hovering a card stops its rotation without
//! cancelling any timer.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// One curated category card on the explore page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collection {
    pub id: u32,
    /// Category name; lowercased to build the `/product/categories/{..}` route.
    pub category: &'static str,
    pub description: &'static str,
    /// Carousel images; the card rotates through these.
    pub images: &'static [&'static str],
    /// Number of products in the category, when known.
    pub product_count: Option<u32>,
    pub featured: bool,
    pub is_new: bool,
    pub bestseller: bool,
    /// Call-to-action button label.
    pub cta: &'static str,
}

/// The storefront's curated collections, in display order.
pub const COLLECTIONS: [Collection; 3] = [
    Collection {
        id: 1,
        category: "Earbuds",
        description: "Premium Quality Earbuds",
        images: &["/images/explore/earbuds.gif"],
        product_count: None,
        featured: true,
        is_new: false,
        bestseller: true,
        cta: "Shop Earbuds",
    },
    Collection {
        id: 2,
        category: "Smartwatches",
        description: "Innovative tech for modern lifestyle",
        images: &["/images/explore/smartwatch.webp"],
        product_count: Some(36),
        featured: true,
        is_new: true,
        bestseller: false,
        cta: "Shop Smartwatch",
    },
    Collection {
        id: 3,
        category: "HeadPhones",
        description: "Stylish & functional Headphones for every occasion",
        images: &["/images/explore/headphone.webp"],
        product_count: Some(18),
        featured: false,
        is_new: false,
        bestseller: true,
        cta: "Shop Headphones",
    },
];

/// Filter chips above the collection grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollectionFilter {
    #[default]
    All,
    New,
    Bestseller,
}

impl CollectionFilter {
    #[must_use]
    pub fn matches(self, collection: &Collection) -> bool {
        match self {
            Self::All => true,
            Self::New => collection.is_new,
            Self::Bestseller => collection.bestseller,
        }
    }
}

/// Collections passing the chip filter, preserving display order.
#[must_use]
pub fn filter_collections(filter: CollectionFilter) -> Vec<Collection> {
    COLLECTIONS
        .iter()
        .copied()
        .filter(|c| filter.matches(c))
        .collect()
}

/// The category-listing route for a collection card click.
#[must_use]
pub fn category_route(category: &str) -> String {
    format!("/product/categories/{}", category.to_lowercase())
}

/// Rotation state of one card's image carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    /// Index of the image currently shown.
    pub index: usize,
    /// Bumped on every image change to retrigger the CSS fade.
    pub fade_key: u32,
    /// Set while the pointer hovers the card; ticks are skipped, not
    /// cancelled.
    pub paused: bool,
}

impl CarouselState {
    /// Automatic advance. Skipped while paused or with fewer than two images.
    pub fn tick(&mut self, image_count: usize) {
        if self.paused || image_count < 2 {
            return;
        }
        self.index = (self.index + 1) % image_count;
        self.fade_key += 1;
    }

    /// Manual advance, wrapping past the last image.
    pub fn next(&mut self, image_count: usize) {
        if image_count == 0 {
            return;
        }
        self.index = (self.index + 1) % image_count;
        self.fade_key += 1;
    }

    /// Manual step back, wrapping before the first image.
    pub fn prev(&mut self, image_count: usize) {
        if image_count == 0 {
            return;
        }
        self.index = if self.index == 0 { image_count - 1 } else { self.index - 1 };
        self.fade_key += 1;
    }

    /// Jump straight to an image via the pagination dots.
    pub fn jump(&mut self, index: usize, image_count: usize) {
        if index >= image_count {
            return;
        }
        self.index = index;
        self.fade_key += 1;
    }
}
