use leptos::*;

/// Consent checkbox gating the reservation submit button.
#[component]
pub fn ConsentCheckbox(
    #[prop(into)] checked: RwSignal<bool>,
    #[prop(into)] label: Signal<String>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    view! {
        <div class="form-contents-privacy">
            <input
                type="checkbox"
                id="privacy-consent"
                class="form-contents-privacy-checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    let is_checked = event_target_checked(&ev);
                    checked.set(is_checked);
                    if let Some(callback) = on_change {
                        callback.call(is_checked);
                    }
                }
            />
            <label for="privacy-consent">
                <span>{move || label.get()}</span>
            </label>
        </div>
    }
}
