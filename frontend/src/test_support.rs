//! Helpers for browser tests that mount components.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Mount `view` into a fresh container appended to the body.
pub fn mount_fixture<F, N>(view: F) -> HtmlElement
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let container: HtmlElement = document().create_element("div").unwrap().unchecked_into();
    document().body().unwrap().append_child(&container).unwrap();
    mount_to(container.clone(), view);
    container
}

pub fn find(root: &HtmlElement, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {}", selector))
        .unchecked_into()
}

/// Let queued effects and timers run.
pub async fn tick() {
    TimeoutFuture::new(0).await;
}
