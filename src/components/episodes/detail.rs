//! Episode detail page.
//!
//! Renders one episode's full record: head metadata, media aside, the long
//! description, and numbered references. The long description is the one
//! place raw feed HTML reaches the DOM, and it only does so through
//! [`sanitize`].

use leptos::prelude::*;

use super::{FeedState, load_feed};
use crate::core::sanitize;
use crate::models::{Episode, Reference, find_by_id};
use crate::utils::format_date_long;

/// Detail page for the episode with the given feed id.
#[component]
pub fn EpisodeDetail(id: String) -> impl IntoView {
    let feed = load_feed();

    view! {
        <section class="episode-page">
            {move || match feed.get() {
                FeedState::Loading => {
                    view! { <p class="placeholder">"Loading episode…"</p> }.into_any()
                }
                FeedState::Failed => {
                    view! { <p class="placeholder">"Could not load episode."</p> }.into_any()
                }
                FeedState::Ready(episodes) => match find_by_id(&episodes, &id) {
                    Some(episode) => detail_view(episode.clone()).into_any(),
                    None => view! { <p class="placeholder">"Episode not found."</p> }.into_any(),
                },
            }}
        </section>
    }
}

/// The episode body, preferring sanitized HTML over the plain-text fallback.
enum Body {
    Html(String),
    Text(String),
    Empty,
}

impl Body {
    fn for_episode(episode: &Episode) -> Self {
        if let Some(raw) = &episode.long_description_html {
            return Self::Html(sanitize(raw));
        }
        match &episode.long_description {
            Some(text) => Self::Text(text.clone()),
            None => Self::Empty,
        }
    }
}

fn detail_view(episode: Episode) -> impl IntoView {
    let date = episode.date.as_deref().map(format_date_long);
    let guests = (!episode.guests.is_empty()).then(|| episode.guests.join(", "));
    let body = Body::for_episode(&episode);

    view! {
        <div class="episode-detail">
            <header class="episode-head">
                <h1>{episode.title.clone()}</h1>
                <div class="episode-sub">
                    {date.map(|d| view! { <span class="ep-date">{d}</span> })}
                    {guests.map(|g| view! { <span class="ep-guests">{g}</span> })}
                </div>
                {(!episode.tags.is_empty()).then(|| tags_view(&episode.tags))}
            </header>

            <div class="episode-layout">
                <aside class="episode-media">
                    <img src=episode.image.clone() alt=episode.title.clone() />
                    <audio
                        class="episode-audio"
                        controls=true
                        preload="none"
                        src=episode.audio.clone()
                    ></audio>
                </aside>

                <article class="episode-body">
                    {match body {
                        Body::Html(html) => {
                            view! { <div class="episode-body-html" inner_html=html /> }.into_any()
                        }
                        Body::Text(text) => view! { <p>{text}</p> }.into_any(),
                        Body::Empty => ().into_any(),
                    }}
                    {(!episode.references.is_empty()).then(|| references_view(&episode.references))}
                </article>
            </div>
        </div>
    }
}

fn tags_view(tags: &[String]) -> impl IntoView + use<> {
    view! {
        <div class="episode-tags">
            {tags
                .iter()
                .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                .collect_view()}
        </div>
    }
}

/// Numbered references: `[1] label`, linked when a URL is present.
fn references_view(references: &[Reference]) -> impl IntoView + use<> {
    view! {
        <section class="episode-refs" aria-label="References">
            <h2>"References"</h2>
            <ol class="refs-list">
                {references
                    .iter()
                    .enumerate()
                    .map(|(i, reference)| {
                        let num = format!("[{}]", i + 1);
                        let label = reference.label.clone();
                        match &reference.url {
                            Some(url) => view! {
                                <li>
                                    <span class="ref-num">{num}</span>
                                    " "
                                    <a
                                        href=url.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                            .into_any(),
                            None => view! {
                                <li>
                                    <span class="ref-num">{num}</span>
                                    " "
                                    {label}
                                </li>
                            }
                            .into_any(),
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
