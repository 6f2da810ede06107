mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    mount_to(app_root(), App).forget();
}

/// The `#app` mount point from index.html.
fn app_root() -> web_sys::HtmlElement {
    document()
        .get_element_by_id("app")
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .expect("Wavecast root element #app missing from index.html")
}
