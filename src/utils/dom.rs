//! DOM and Web API utility functions.

use web_sys::{Element, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Look up an element by id in the live document.
pub fn element_by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}
