//! Episode rendering components.
//!
//! - [`LatestEpisodes`] - home page grid with the newest episodes
//! - [`EpisodeList`] - full list, newest first
//! - [`EpisodeDetail`] - one episode with sanitized long description
//! - [`EpisodeCard`] - shared card markup

mod card;
mod detail;
mod list;

pub use card::EpisodeCard;
pub use detail::EpisodeDetail;
pub use list::{EpisodeList, LatestEpisodes};

use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::{DATA_URL, cache};
use crate::models::{Episode, sort_newest_first};
use crate::utils::fetch_json_cached;

/// Loading state of the episode feed.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum FeedState {
    Loading,
    Ready(Vec<Episode>),
    Failed,
}

/// Kick off a one-shot feed load for the current page.
///
/// Each page issues its own fetch on mount; the sessionStorage cache makes
/// repeat navigations cheap. A failed load stays failed for this render,
/// surfacing as a placeholder in the page region. No retries.
pub(crate) fn load_feed() -> ReadSignal<FeedState> {
    let (state, set_state) = signal(FeedState::Loading);

    spawn_local(async move {
        match fetch_json_cached::<Vec<Episode>>(DATA_URL, cache::EPISODES_KEY).await {
            Ok(feed) => set_state.set(FeedState::Ready(sort_newest_first(feed))),
            Err(err) => {
                logging::error!("failed to load episode feed: {err}");
                set_state.set(FeedState::Failed);
            }
        }
    });

    state
}
