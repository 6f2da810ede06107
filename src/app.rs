//! Root application module.

use leptos::prelude::*;

use crate::components::{AppRouter, SiteFooter, SiteHeader};

/// Root application component with error boundary.
///
/// Lays out the three independent page regions: injected header, routed
/// main content, injected footer. Each region loads and fails on its own.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class="app-error">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            }
        }>
            <SiteHeader />
            <main class="site-main">
                <AppRouter />
            </main>
            <SiteFooter />
        </ErrorBoundary>
    }
}
