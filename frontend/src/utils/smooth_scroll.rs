//! Smooth scrolling for in-page anchor links.

use leptos::document;
use shared::anchor_selector;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

const ANCHOR_LINK: &str = r##"a[href^="#"]"##;

/// Element an anchor click should scroll to, if any.
fn scroll_target(event: &MouseEvent) -> Option<Element> {
    let origin: Element = event.target()?.dyn_into().ok()?;
    let link = origin.closest(ANCHOR_LINK).ok()??;
    let href = link.get_attribute("href")?;
    let selector = anchor_selector(&href)?;
    document().query_selector(selector).ok()?
}

/// Scroll to the anchor's target. Links whose target is missing keep their
/// default behaviour.
fn handle_anchor_click(event: &MouseEvent) {
    if let Some(target) = scroll_target(event) {
        event.prevent_default();
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Listen on the whole document so links rendered later are covered too.
/// The listener lives as long as the page.
pub fn install_anchor_scrolling() {
    let handler = Closure::wrap(Box::new(move |event: MouseEvent| {
        handle_anchor_click(&event);
    }) as Box<dyn FnMut(_)>);

    if document()
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("Could not install anchor scrolling");
    }
    handler.forget();
}
