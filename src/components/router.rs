//! Application router component.
//!
//! Hash-based routing without a router crate: the URL hash is the source of
//! truth, navigation happens through plain anchors, and browser back/forward
//! works via `hashchange` events.

use leptos::prelude::*;

use crate::components::episodes::{EpisodeDetail, EpisodeList, LatestEpisodes};
use crate::config::APP_NAME;
use crate::models::AppRoute;

/// Main application router.
///
/// Routes:
/// - `#/` → home (hero + latest grid)
/// - `#/episodes` → full episode list
/// - `#/episodes/<id>` → episode detail
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Track the hash for the lifetime of the app.
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    view! {
        {move || match route.get() {
            AppRoute::Home => view! { <HomePage /> }.into_any(),
            AppRoute::Episodes => view! { <EpisodesPage /> }.into_any(),
            AppRoute::Episode { id } => view! { <EpisodeDetail id=id /> }.into_any(),
        }}
    }
}

/// Landing page: hero plus the latest episode grid.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>{APP_NAME}</h1>
            <p class="tagline">"Conversations about signals, sound, and the open web."</p>
        </section>
        <LatestEpisodes />
    }
}

/// Full episode list page.
#[component]
fn EpisodesPage() -> impl IntoView {
    view! { <EpisodeList /> }
}
