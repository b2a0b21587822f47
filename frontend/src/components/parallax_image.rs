use leptos::*;
use shared::{parallax_transform, SiteConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;

fn media_matches(query: &str) -> bool {
    window()
        .match_media(query)
        .ok()
        .flatten()
        .map_or(false, |list| list.matches())
}

/// Hero image drifting with the page scroll on wide screens.
///
/// The width check happens once, when the image mounts. Below the breakpoint
/// no inline transform is written.
#[component]
pub fn ParallaxImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: Signal<String>,
) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let factor = config.parallax_factor;
    let scroll_y = create_rw_signal(0.0_f64);

    let enabled = media_matches(&config.parallax_media_query());

    if enabled {
        let on_scroll = Closure::wrap(Box::new(move || {
            scroll_y.set(window().scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut()>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        let _ = window().add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        );

        on_cleanup(move || {
            let _ = window().remove_event_listener_with_callback(
                "scroll",
                on_scroll.as_ref().unchecked_ref(),
            );
            drop(on_scroll);
        });
    } else {
        log::debug!("Parallax disabled below {}px", config.parallax_min_width_px);
    }

    view! {
        <img
            class="parallax"
            src=src
            alt=move || alt.get()
            style=move || {
                enabled.then(|| format!("transform: {};", parallax_transform(scroll_y.get(), factor)))
            }
        />
    }
}
