//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::config::ApiConfig;
use crate::pages::{
    admin_orders::AdminOrdersPage, category::CategoryPage, explore::ExplorePage,
    launch::LaunchPage, product::ProductPage,
};

/// Backend API root, baked in at compile time. Overridden per deployment via
/// the `BACKEND_URL` build environment variable.
const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API configuration context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::new(BACKEND_URL));

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Glowz Lifestyle"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ExplorePage/>
                <Route path=StaticSegment("launch") view=LaunchPage/>
                <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductPage/>
                <Route
                    path=(
                        StaticSegment("product"),
                        StaticSegment("categories"),
                        ParamSegment("category"),
                    )
                    view=CategoryPage
                />
                <Route path=(StaticSegment("admin"), StaticSegment("orders")) view=AdminOrdersPage/>
            </Routes>
        </Router>
    }
}
