//! Episode card, shared between the home grid and the full list.

use leptos::prelude::*;

use crate::models::{AppRoute, Episode};
use crate::utils::format_date_long;

/// A single episode card.
///
/// `grid` selects the compact grid styling used on the home page; the
/// episode list uses the wider row layout.
#[component]
pub fn EpisodeCard(episode: Episode, #[prop(default = false)] grid: bool) -> impl IntoView {
    let href = AppRoute::Episode {
        id: episode.id.clone(),
    }
    .to_hash();
    let date = episode.date.as_deref().map(format_date_long);
    let open_label = format!("Open episode {}", episode.title);

    view! {
        <article class=if grid { "episode-card" } else { "episode-row" }>
            <a class="episode-link" href=href.clone() aria-label=open_label>
                <img src=episode.image.clone() alt=episode.title.clone() />
            </a>
            <div class=if grid { "meta" } else { "row-right" }>
                <h3>
                    <a href=href>{episode.title.clone()}</a>
                </h3>
                {date.map(|d| view! { <div class="ep-date">{d}</div> })}
                <p>{episode.short_description.clone()}</p>
                <div class="audio">
                    <audio controls=true preload="none" src=episode.audio.clone()></audio>
                </div>
            </div>
        </article>
    }
}
