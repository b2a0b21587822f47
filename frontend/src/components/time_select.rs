use leptos::*;
use shared::{TimeSelectorState, TimeSlot};
use wasm_bindgen::JsCast;

/// Visit-time dropdown: a read-only display input, a hidden value field and
/// a list of slots. Clicks anywhere outside the wrapper close the list.
///
/// The display and slot handlers are bound on the elements themselves, so
/// stopping propagation keeps their clicks away from the document listener.
#[component]
pub fn TimeSelect(
    #[prop(into)] state: RwSignal<TimeSelectorState>,
    slots: Vec<TimeSlot>,
    #[prop(into)] placeholder: Signal<String>,
    #[prop(optional, into)] name: Option<String>,
) -> impl IntoView {
    let wrap_ref = create_node_ref::<html::Div>();
    let is_open = create_memo(move |_| state.with(|s| s.is_open()));

    // Close when clicking outside, checked by containment
    create_effect(move |_| {
        if is_open.get() {
            let handler = wasm_bindgen::closure::Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
                let inside = match (wrap_ref.get_untracked(), event.target()) {
                    (Some(wrap), Some(target)) => {
                        let target_node: web_sys::Node = target.unchecked_into();
                        wrap.contains(Some(&target_node))
                    }
                    _ => false,
                };
                state.update(|s| s.handle_document_click(inside));
            }) as Box<dyn FnMut(_)>);

            let doc = document();
            let _ = doc.add_event_listener_with_callback(
                "click",
                handler.as_ref().unchecked_ref(),
            );

            on_cleanup(move || {
                let _ = doc.remove_event_listener_with_callback(
                    "click",
                    handler.as_ref().unchecked_ref(),
                );
                drop(handler);
            });
        }
    });

    let dropdown_class = move || {
        if is_open.get() {
            "time-dropdown open"
        } else {
            "time-dropdown"
        }
    };

    view! {
        <div class="time-wrap" node_ref=wrap_ref>
            <input
                type="text"
                id="visit-time-display"
                class="form-input"
                readonly
                aria-haspopup="listbox"
                aria-expanded=move || if is_open.get() { "true" } else { "false" }
                placeholder=move || placeholder.get()
                prop:value=move || state.with(|s| s.selected_label().to_string())
                on:click:undelegated=move |e| {
                    e.stop_propagation();
                    state.update(|s| s.toggle());
                }
            />
            <input
                type="hidden"
                id="visit-time"
                name=name
                prop:value=move || state.with(|s| s.selected_value().to_string())
            />
            <div id="time-dropdown" class=dropdown_class role="listbox">
                {slots.into_iter().map(|slot| {
                    let marker_slot = slot.clone();
                    let is_selected = move || state.with(|s| s.is_selected(&marker_slot));
                    let TimeSlot { value, label } = slot;
                    let data_value = value.clone();
                    let text = label.clone();
                    view! {
                        <button
                            type="button"
                            class="slot"
                            role="option"
                            data-value=data_value
                            aria-selected=move || is_selected().then(|| "true".to_string())
                            on:click:undelegated=move |e| {
                                e.stop_propagation();
                                let (value, label) = (value.clone(), label.clone());
                                state.update(|s| s.select(value, label));
                            }
                        >
                            {text}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{find, mount_fixture, tick};
    use shared::hourly_slots;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen_test::*;
    use web_sys::HtmlInputElement;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Counts clicks that reach the document.
    struct DocumentClicks {
        count: Rc<Cell<u32>>,
        handler: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl DocumentClicks {
        fn listen() -> Self {
            let count = Rc::new(Cell::new(0));
            let seen = Rc::clone(&count);
            let handler = Closure::wrap(Box::new(move |_: web_sys::Event| {
                seen.set(seen.get() + 1);
            }) as Box<dyn FnMut(_)>);
            document()
                .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
                .unwrap();
            Self { count, handler }
        }

        fn count(&self) -> u32 {
            self.count.get()
        }
    }

    impl Drop for DocumentClicks {
        fn drop(&mut self) {
            let _ = document()
                .remove_event_listener_with_callback("click", self.handler.as_ref().unchecked_ref());
        }
    }

    fn mount_time_select() -> web_sys::HtmlElement {
        mount_fixture(|| {
            let state = create_rw_signal(TimeSelectorState::new());
            view! {
                <TimeSelect
                    state=state
                    slots=hourly_slots(10, 18)
                    placeholder=Signal::derive(|| "방문 시간 선택".to_string())
                    name="visit-time"
                />
            }
        })
    }

    fn dropdown_is_open(root: &web_sys::HtmlElement) -> bool {
        find(root, "#time-dropdown").class_list().contains("open")
    }

    fn input_value(root: &web_sys::HtmlElement, selector: &str) -> String {
        find(root, selector).unchecked_into::<HtmlInputElement>().value()
    }

    #[wasm_bindgen_test]
    fn test_default_slot_labels() {
        let labels: Vec<String> = hourly_slots(10, 12).into_iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["오전 10시", "오전 11시", "오후 12시"]);
    }

    #[wasm_bindgen_test]
    async fn test_display_click_opens_without_reaching_document() {
        let root = mount_time_select();
        tick().await;
        let clicks = DocumentClicks::listen();

        let display = find(&root, "#visit-time-display");
        assert_eq!(display.get_attribute("aria-expanded").as_deref(), Some("false"));

        display.click();
        tick().await;

        assert!(dropdown_is_open(&root));
        assert_eq!(display.get_attribute("aria-expanded").as_deref(), Some("true"));
        assert_eq!(clicks.count(), 0);

        display.click();
        tick().await;
        assert!(!dropdown_is_open(&root));
        assert_eq!(display.get_attribute("aria-expanded").as_deref(), Some("false"));

        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_slot_click_selects_and_marks_one_slot() {
        let root = mount_time_select();
        tick().await;

        find(&root, "#visit-time-display").click();
        tick().await;
        find(&root, r#".slot[data-value="14:00"]"#).click();
        tick().await;

        assert!(!dropdown_is_open(&root));
        assert_eq!(input_value(&root, "#visit-time-display"), "오후 2시");
        assert_eq!(input_value(&root, "#visit-time"), "14:00");

        let marked = root.query_selector_all(r#"[aria-selected="true"]"#).unwrap();
        assert_eq!(marked.length(), 1);
        assert_eq!(
            find(&root, r#"[aria-selected="true"]"#).get_attribute("data-value").as_deref(),
            Some("14:00")
        );

        find(&root, "#visit-time-display").click();
        tick().await;
        find(&root, r#".slot[data-value="10:00"]"#).click();
        tick().await;

        assert_eq!(root.query_selector_all(r#"[aria-selected="true"]"#).unwrap().length(), 1);
        assert_eq!(input_value(&root, "#visit-time"), "10:00");

        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_click_inside_wrapper_keeps_dropdown_open() {
        let root = mount_time_select();
        tick().await;

        find(&root, "#visit-time-display").click();
        tick().await;
        find(&root, "#time-dropdown").click();
        tick().await;

        assert!(dropdown_is_open(&root));

        document().body().unwrap().click();
        tick().await;
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn test_click_outside_closes_dropdown() {
        let root = mount_time_select();
        tick().await;

        find(&root, "#visit-time-display").click();
        tick().await;
        assert!(dropdown_is_open(&root));

        document().body().unwrap().click();
        tick().await;

        assert!(!dropdown_is_open(&root));
        assert_eq!(
            find(&root, "#visit-time-display").get_attribute("aria-expanded").as_deref(),
            Some("false")
        );
        assert_eq!(input_value(&root, "#visit-time"), "");

        root.remove();
    }
}
