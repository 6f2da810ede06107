//! Episode grid (home page) and full episode list.

use leptos::prelude::*;

use super::{EpisodeCard, FeedState, load_feed};
use crate::config::LATEST_EPISODE_COUNT;

/// Grid of the newest episodes for the home page.
#[component]
pub fn LatestEpisodes() -> impl IntoView {
    let feed = load_feed();

    view! {
        <section class="latest-episodes" aria-label="Latest episodes">
            <h2>"Latest Episodes"</h2>
            {move || match feed.get() {
                FeedState::Loading => {
                    view! { <p class="placeholder">"Loading episodes…"</p> }.into_any()
                }
                FeedState::Failed => {
                    view! { <p class="placeholder">"Could not load episodes."</p> }.into_any()
                }
                FeedState::Ready(episodes) => view! {
                    <div class="episode-grid">
                        {episodes
                            .into_iter()
                            .take(LATEST_EPISODE_COUNT)
                            .map(|episode| view! { <EpisodeCard episode=episode grid=true /> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}

/// All episodes as rows, newest first.
#[component]
pub fn EpisodeList() -> impl IntoView {
    let feed = load_feed();

    view! {
        <section class="episode-list" aria-label="All episodes">
            <h2>"All Episodes"</h2>
            {move || match feed.get() {
                FeedState::Loading => {
                    view! { <p class="placeholder">"Loading episodes…"</p> }.into_any()
                }
                FeedState::Failed => {
                    view! { <p class="placeholder">"Could not load episodes."</p> }.into_any()
                }
                FeedState::Ready(episodes) => view! {
                    <div class="episode-rows">
                        {episodes
                            .into_iter()
                            .map(|episode| view! { <EpisodeCard episode=episode /> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
