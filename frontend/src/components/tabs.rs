use leptos::*;
use shared::TabSet;

/// One button and its pane.
#[derive(Clone)]
pub struct TabItem {
    pub id: String,
    pub label: Signal<String>,
    pub content: View,
}

fn button_class(active: bool) -> &'static str {
    if active {
        "active"
    } else {
        ""
    }
}

fn pane_class(active: bool) -> &'static str {
    if active {
        "pane active"
    } else {
        "pane"
    }
}

#[component]
pub fn Tabs(items: Vec<TabItem>) -> impl IntoView {
    let tabs = create_rw_signal(TabSet::new(items.iter().map(|item| item.id.clone())));

    let buttons = items
        .iter()
        .map(|item| {
            let id = item.id.clone();
            let data_id = item.id.clone();
            let click_id = item.id.clone();
            let label = item.label;
            view! {
                <button
                    type="button"
                    data-tab=data_id
                    class=move || tabs.with(|t| button_class(t.is_active(&id)))
                    on:click=move |_| {
                        tabs.update(|t| {
                            t.activate(&click_id);
                        });
                    }
                >
                    {move || label.get()}
                </button>
            }
        })
        .collect_view();

    let panes = items
        .into_iter()
        .map(|item| {
            let id = item.id.clone();
            view! {
                <div
                    data-pane=item.id
                    class=move || tabs.with(|t| pane_class(t.is_active(&id)))
                >
                    {item.content}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="tabs">
            <div class="tab-buttons">{buttons}</div>
            <div class="tab-contents">{panes}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_tab_classes() {
        assert_eq!(button_class(true), "active");
        assert_eq!(button_class(false), "");
        assert_eq!(pane_class(true), "pane active");
        assert_eq!(pane_class(false), "pane");
    }
}
