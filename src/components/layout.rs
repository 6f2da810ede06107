//! Shared header and footer regions.
//!
//! Both regions are filled from static HTML partials so the markup can be
//! edited without touching the app. Each partial is fetched independently;
//! a failed fetch degrades only its own region. After injection the header
//! wires the mobile nav toggle and the footer stamps the current year.

use leptos::logging;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::{FOOTER_PARTIAL_URL, HEADER_PARTIAL_URL};
use crate::utils::{dom, fetch_text};

/// Site header, injected from `components/header.html`.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let (html, set_html) = signal(String::new());
    let (failed, set_failed) = signal(false);

    spawn_local(async move {
        match fetch_text(HEADER_PARTIAL_URL).await {
            Ok(markup) => set_html.set(markup),
            Err(err) => {
                logging::error!("failed to load header partial: {err}");
                set_failed.set(true);
            }
        }
    });

    // Runs after the injected markup is in the DOM.
    Effect::new(move |_| {
        if !html.get().is_empty() {
            wire_nav_toggle();
        }
    });

    view! {
        <div id="site-header">
            {move || {
                if failed.get() {
                    view! { <p class="placeholder">"Navigation unavailable."</p> }.into_any()
                } else {
                    view! { <div inner_html=html.get() /> }.into_any()
                }
            }}
        </div>
    }
}

/// Site footer, injected from `components/footer.html`.
#[component]
pub fn SiteFooter() -> impl IntoView {
    let (html, set_html) = signal(String::new());
    let (failed, set_failed) = signal(false);

    spawn_local(async move {
        match fetch_text(FOOTER_PARTIAL_URL).await {
            Ok(markup) => set_html.set(markup),
            Err(err) => {
                logging::error!("failed to load footer partial: {err}");
                set_failed.set(true);
            }
        }
    });

    Effect::new(move |_| {
        if !html.get().is_empty() {
            stamp_footer_year();
        }
    });

    view! {
        <div id="site-footer">
            {move || {
                if failed.get() {
                    view! { <p class="placeholder">"Footer unavailable."</p> }.into_any()
                } else {
                    view! { <div inner_html=html.get() /> }.into_any()
                }
            }}
        </div>
    }
}

/// Hook up the mobile nav toggle in the injected header markup.
///
/// The toggle flips `aria-expanded` on the button and `aria-hidden` on the
/// nav. Missing elements (partial without a nav) are a no-op.
fn wire_nav_toggle() {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let (Some(toggle), Some(nav)) = (
            dom::element_by_id("nav-toggle"),
            dom::element_by_id("site-nav"),
        ) else {
            return;
        };

        // Collapsed until toggled.
        let _ = nav.set_attribute("aria-hidden", "true");

        let toggle_el = toggle.clone();
        let nav_el = nav.clone();
        let on_click = Closure::wrap(Box::new(move || {
            let expanded = toggle_el.get_attribute("aria-expanded").as_deref() == Some("true");
            let _ = toggle_el.set_attribute("aria-expanded", if expanded { "false" } else { "true" });
            let _ = nav_el.set_attribute("aria-hidden", if expanded { "true" } else { "false" });
        }) as Box<dyn FnMut()>);

        let _ = toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        // The listener lives for the lifetime of the page.
        on_click.forget();
    }
}

/// Write the current year into the footer's `#year` element.
fn stamp_footer_year() {
    if let Some(year_el) = dom::element_by_id("year") {
        let year = js_sys::Date::new_0().get_full_year();
        year_el.set_text_content(Some(&year.to_string()));
    }
}
